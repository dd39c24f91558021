//! Smithy JSON AST model types for deserialization.
//!
//! This module provides the types needed to parse the Smithy 2.0 JSON AST format
//! used by AWS service models. Member maps are kept in declaration order since the
//! generated shapes render and hash their fields in that order.

use std::collections::HashMap;

use indexmap::IndexMap;
use serde::Deserialize;

/// Trait marking a member as required.
pub const REQUIRED_TRAIT: &str = "smithy.api#required";

/// Trait carrying the documentation string of a shape or member.
pub const DOCUMENTATION_TRAIT: &str = "smithy.api#documentation";

/// Trait carrying the wire literal of an enum member.
pub const ENUM_VALUE_TRAIT: &str = "smithy.api#enumValue";

/// Top-level Smithy model document.
#[derive(Debug, Deserialize)]
pub struct SmithyModel {
    /// Smithy version (e.g., "2.0").
    pub smithy: String,
    /// All shapes defined in the model, keyed by their full shape ID.
    pub shapes: HashMap<String, Shape>,
}

/// A single Smithy shape.
///
/// Scalar and ignored shapes carry no payload; their traits are skipped.
#[derive(Debug, Deserialize)]
#[serde(tag = "type")]
pub enum Shape {
    /// A structure shape (struct).
    #[serde(rename = "structure")]
    Structure(StructureShape),
    /// An operation shape.
    #[serde(rename = "operation")]
    Operation(OperationShape),
    /// A string shape (simple type or alias).
    #[serde(rename = "string")]
    String,
    /// A boolean shape.
    #[serde(rename = "boolean")]
    Boolean,
    /// A 32-bit integer shape.
    #[serde(rename = "integer")]
    Integer,
    /// A 64-bit integer shape.
    #[serde(rename = "long")]
    Long,
    /// A timestamp shape.
    #[serde(rename = "timestamp")]
    Timestamp,
    /// A blob (binary data) shape.
    #[serde(rename = "blob")]
    Blob,
    /// An enum shape.
    #[serde(rename = "enum")]
    Enum(EnumShape),
    /// A list shape.
    #[serde(rename = "list")]
    List(ListShape),
    /// A map shape.
    #[serde(rename = "map")]
    Map(MapShape),
    /// A union shape.
    #[serde(rename = "union")]
    Union(StructureShape),
    /// A service shape (ignored).
    #[serde(rename = "service")]
    Service,
    /// A resource shape (ignored).
    #[serde(rename = "resource")]
    Resource,
    /// An integer enum shape (ignored).
    #[serde(rename = "intEnum")]
    IntEnum,
    /// A double shape.
    #[serde(rename = "double")]
    Double,
    /// A float shape.
    #[serde(rename = "float")]
    Float,
}

/// A structure (struct) or union shape.
#[derive(Debug, Deserialize)]
pub struct StructureShape {
    /// Members of the structure, in declaration order.
    #[serde(default)]
    pub members: IndexMap<String, MemberShape>,
    /// Traits applied to this shape.
    #[serde(default)]
    pub traits: HashMap<String, serde_json::Value>,
}

/// A member within a structure, union, or enum.
#[derive(Debug, Deserialize)]
pub struct MemberShape {
    /// Target shape ID this member points to.
    pub target: String,
    /// Traits applied to this member.
    #[serde(default)]
    pub traits: HashMap<String, serde_json::Value>,
}

/// An operation shape.
#[derive(Debug, Deserialize)]
pub struct OperationShape {
    /// Input shape reference.
    pub input: Option<ShapeRef>,
    /// Output shape reference.
    pub output: Option<ShapeRef>,
}

/// A reference to another shape.
#[derive(Debug, Deserialize)]
pub struct ShapeRef {
    /// The full shape ID being referenced.
    pub target: String,
}

/// An enum shape.
#[derive(Debug, Deserialize)]
pub struct EnumShape {
    /// Enum variants (member name -> member shape), in declaration order.
    #[serde(default)]
    pub members: IndexMap<String, MemberShape>,
    /// Traits applied to this shape.
    #[serde(default)]
    pub traits: HashMap<String, serde_json::Value>,
}

/// A list shape.
#[derive(Debug, Deserialize)]
pub struct ListShape {
    /// The shape of the list's elements.
    pub member: ShapeRef,
}

/// A map shape.
#[derive(Debug, Deserialize)]
pub struct MapShape {
    /// The shape of the map's keys.
    pub key: ShapeRef,
    /// The shape of the map's values.
    pub value: ShapeRef,
}

impl SmithyModel {
    /// Get the short name from a fully qualified shape ID.
    ///
    /// For example, `com.amazonaws.ec2#Filter` returns `Filter`.
    pub fn short_name(shape_id: &str) -> &str {
        shape_id.rsplit_once('#').map_or(shape_id, |(_, name)| name)
    }
}

impl MemberShape {
    /// Whether the member carries the `@required` trait.
    pub fn is_required(&self) -> bool {
        self.traits.contains_key(REQUIRED_TRAIT)
    }

    /// The member's documentation string, if any.
    pub fn documentation(&self) -> Option<&str> {
        documentation(&self.traits)
    }
}

/// Read the `@documentation` trait from a trait map.
pub fn documentation(traits: &HashMap<String, serde_json::Value>) -> Option<&str> {
    traits.get(DOCUMENTATION_TRAIT).and_then(|v| v.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_should_keep_member_declaration_order() {
        let json = r#"{
            "smithy": "2.0",
            "shapes": {
                "com.amazonaws.ec2#Filter": {
                    "type": "structure",
                    "members": {
                        "Name": { "target": "com.amazonaws.ec2#String" },
                        "Values": { "target": "com.amazonaws.ec2#ValueStringList" },
                        "After": { "target": "com.amazonaws.ec2#String" }
                    }
                }
            }
        }"#;
        let model: SmithyModel = serde_json::from_str(json).expect("parse model");
        let Some(Shape::Structure(filter)) = model.shapes.get("com.amazonaws.ec2#Filter") else {
            panic!("Filter should be a structure");
        };
        let names: Vec<&str> = filter.members.keys().map(String::as_str).collect();
        assert_eq!(names, ["Name", "Values", "After"]);
    }

    #[test]
    fn test_should_read_member_traits() {
        let json = r#"{
            "target": "com.amazonaws.ec2#String",
            "traits": {
                "smithy.api#required": {},
                "smithy.api#documentation": "The ID of the route table."
            }
        }"#;
        let member: MemberShape = serde_json::from_str(json).expect("parse member");
        assert!(member.is_required());
        assert_eq!(member.documentation(), Some("The ID of the route table."));
    }

    #[test]
    fn test_should_parse_scalar_and_service_shapes_without_payload() {
        let json = r#"{
            "smithy": "2.0",
            "shapes": {
                "com.amazonaws.ec2#Price": {
                    "type": "double",
                    "traits": { "smithy.api#documentation": "A price." }
                },
                "com.amazonaws.ec2#AmazonEC2": {
                    "type": "service",
                    "version": "2016-11-15",
                    "operations": [{ "target": "com.amazonaws.ec2#CreateRoute" }]
                },
                "com.amazonaws.ec2#CreateRoute": {
                    "type": "operation",
                    "input": { "target": "com.amazonaws.ec2#CreateRouteRequest" },
                    "traits": { "smithy.api#documentation": "Creates a route." }
                }
            }
        }"#;
        let model: SmithyModel = serde_json::from_str(json).expect("parse model");
        assert!(matches!(model.shapes["com.amazonaws.ec2#Price"], Shape::Double));
        assert!(matches!(model.shapes["com.amazonaws.ec2#AmazonEC2"], Shape::Service));
        let Shape::Operation(op) = &model.shapes["com.amazonaws.ec2#CreateRoute"] else {
            panic!("CreateRoute should be an operation");
        };
        assert_eq!(
            op.input.as_ref().map(|r| r.target.as_str()),
            Some("com.amazonaws.ec2#CreateRouteRequest")
        );
        assert!(op.output.is_none());
    }

    #[test]
    fn test_should_strip_namespace_from_shape_id() {
        assert_eq!(SmithyModel::short_name("com.amazonaws.ec2#Filter"), "Filter");
        assert_eq!(SmithyModel::short_name("Filter"), "Filter");
    }
}
