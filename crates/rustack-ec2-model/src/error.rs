//! EC2 model error types.
//!
//! The shapes themselves never fail: getters, setters, and builders accept any
//! value. Errors only come from the strict parsing entry points.

/// Errors raised when parsing model literals strictly.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Ec2ModelError {
    /// A literal that is not one of the enum's known values.
    #[error("unknown {enum_name} value: {value}")]
    UnknownEnumValue {
        /// Name of the enum being parsed.
        enum_name: &'static str,
        /// The rejected literal.
        value: String,
    },

    /// An operation name that is not part of the model.
    #[error("unknown EC2 operation: {0}")]
    UnknownOperation(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_should_format_errors() {
        let err = Ec2ModelError::UnknownEnumValue {
            enum_name: "VolumeType",
            value: "gp9".to_owned(),
        };
        assert_eq!(err.to_string(), "unknown VolumeType value: gp9");
        assert_eq!(
            Ec2ModelError::UnknownOperation("TerminateInstances".to_owned()).to_string(),
            "unknown EC2 operation: TerminateInstances"
        );
    }
}
