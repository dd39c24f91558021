//! Enumerated string values.
//!
//! Every EC2 enum is a closed set of known literals plus an `Unknown` variant
//! that keeps any other literal verbatim, so values introduced by newer
//! service versions survive a round trip. Conversions from `&str` and `String`
//! are permissive; [`std::str::FromStr`] is strict and rejects unknown literals.

/// Common interface of the generated enums.
pub trait Ec2Enum {
    /// Name of the enum in the EC2 model.
    const NAME: &'static str;

    /// Every literal known to this version of the model, in model order.
    fn values() -> &'static [&'static str];

    /// The wire literal of this value.
    fn as_str(&self) -> &str;

    /// Whether this value is one of the known literals.
    fn is_known(&self) -> bool;
}

/// Declare an EC2 enum from its variant/literal pairs.
///
/// Equality and hashing go through the wire literal, so an `Unknown` holding a
/// known literal compares equal to the matching variant.
macro_rules! ec2_enum {
    (
        $(#[$meta:meta])*
        $name:ident {
            $($variant:ident => $value:literal),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone)]
        pub enum $name {
            $(
                #[doc = concat!("`", $value, "`")]
                $variant,
            )+
            /// A literal not known to this version of the model.
            Unknown(String),
        }

        impl $name {
            /// Every literal known to this version of the model.
            pub const VALUES: &'static [&'static str] = &[$($value),+];

            /// Returns the wire literal of this value.
            #[must_use]
            pub fn as_str(&self) -> &str {
                match self {
                    $(Self::$variant => $value,)+
                    Self::Unknown(value) => value.as_str(),
                }
            }

            /// Whether this value is one of the known literals.
            #[must_use]
            pub fn is_known(&self) -> bool {
                Self::from_known(self.as_str()).is_some()
            }

            fn from_known(value: &str) -> Option<Self> {
                match value {
                    $($value => Some(Self::$variant),)+
                    _ => None,
                }
            }
        }

        impl $crate::enums::Ec2Enum for $name {
            const NAME: &'static str = stringify!($name);

            fn values() -> &'static [&'static str] {
                Self::VALUES
            }

            fn as_str(&self) -> &str {
                $name::as_str(self)
            }

            fn is_known(&self) -> bool {
                $name::is_known(self)
            }
        }

        impl PartialEq for $name {
            fn eq(&self, other: &Self) -> bool {
                self.as_str() == other.as_str()
            }
        }

        impl Eq for $name {}

        impl ::std::hash::Hash for $name {
            fn hash<H: ::std::hash::Hasher>(&self, state: &mut H) {
                self.as_str().hash(state);
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl From<&str> for $name {
            fn from(value: &str) -> Self {
                Self::from_known(value).unwrap_or_else(|| {
                    ::tracing::debug!(enum_name = stringify!($name), value, "unknown enum literal");
                    Self::Unknown(value.to_owned())
                })
            }
        }

        impl From<String> for $name {
            fn from(value: String) -> Self {
                if let Some(known) = Self::from_known(&value) {
                    return known;
                }
                ::tracing::debug!(enum_name = stringify!($name), value = %value, "unknown enum literal");
                Self::Unknown(value)
            }
        }

        impl ::std::str::FromStr for $name {
            type Err = $crate::error::Ec2ModelError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::from_known(s).ok_or_else(|| $crate::error::Ec2ModelError::UnknownEnumValue {
                    enum_name: stringify!($name),
                    value: s.to_owned(),
                })
            }
        }

        impl ::serde::Serialize for $name {
            fn serialize<S: ::serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_str(self.as_str())
            }
        }

        impl<'de> ::serde::Deserialize<'de> for $name {
            fn deserialize<D: ::serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                let value = <String as ::serde::Deserialize>::deserialize(deserializer)?;
                Ok(Self::from(value))
            }
        }

        impl $crate::shape::ToFieldValue for $name {
            fn to_field_value(&self) -> $crate::shape::FieldValue<'_> {
                $crate::shape::FieldValue::Enum(self.as_str())
            }
        }
    };
}

pub(crate) use ec2_enum;

#[cfg(test)]
mod tests {
    use std::collections::HashSet;
    use std::str::FromStr;

    use super::Ec2Enum;
    use crate::error::Ec2ModelError;
    use crate::types::{HttpTokensState, VolumeType};

    #[test]
    fn test_should_convert_known_literals() {
        assert_eq!(VolumeType::from("gp2"), VolumeType::Gp2);
        assert_eq!(VolumeType::from("io1".to_owned()), VolumeType::Io1);
        assert_eq!(VolumeType::Gp2.as_str(), "gp2");
        assert_eq!(HttpTokensState::Required.to_string(), "required");
        assert!(VolumeType::Gp2.is_known());
    }

    #[test]
    fn test_should_keep_unknown_literals_verbatim() {
        let value = VolumeType::from("gp9");
        assert_eq!(value, VolumeType::Unknown("gp9".to_owned()));
        assert_eq!(value.as_str(), "gp9");
        assert_eq!(value.to_string(), "gp9");
        assert!(!value.is_known());
    }

    #[test]
    fn test_should_reject_unknown_literals_when_strict() {
        assert_eq!(
            HttpTokensState::from_str("required"),
            Ok(HttpTokensState::Required)
        );
        assert_eq!(
            HttpTokensState::from_str("mandatory"),
            Err(Ec2ModelError::UnknownEnumValue {
                enum_name: "HttpTokensState",
                value: "mandatory".to_owned(),
            })
        );
    }

    #[test]
    fn test_should_compare_unknown_with_known_by_literal() {
        let unknown = VolumeType::Unknown("gp2".to_owned());
        assert_eq!(unknown, VolumeType::Gp2);
        assert!(unknown.is_known());

        let set: HashSet<VolumeType> = [VolumeType::Gp2, unknown].into_iter().collect();
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_should_expose_enum_metadata() {
        assert_eq!(<HttpTokensState as Ec2Enum>::NAME, "HttpTokensState");
        assert_eq!(HttpTokensState::values(), ["optional", "required"]);
        assert!(VolumeType::VALUES.contains(&"gp2"));
    }

    #[test]
    fn test_should_serialize_as_literal() {
        let json = serde_json::to_string(&VolumeType::Io1).expect("serialize");
        assert_eq!(json, "\"io1\"");
        let parsed: VolumeType = serde_json::from_str("\"sc9\"").expect("deserialize");
        assert_eq!(parsed, VolumeType::Unknown("sc9".to_owned()));
        assert_eq!(serde_json::to_string(&parsed).expect("serialize"), "\"sc9\"");
    }
}
