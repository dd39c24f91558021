//! Shape resolution and type mapping from Smithy shapes to Rust types.
//!
//! This module resolves Smithy shape references into concrete Rust types
//! and collects the transitive closure of shapes needed by the target operations.

use std::collections::{BTreeMap, BTreeSet};

use anyhow::{Context, Result, bail};
use tracing::debug;

use crate::model::{self, MemberShape, Shape, SmithyModel, StructureShape};

/// The namespace prefix for all EC2 shapes.
const EC2_NAMESPACE: &str = "com.amazonaws.ec2#";

/// Maximum recursion depth when resolving shape references.
const MAX_RESOLVE_DEPTH: usize = 15;

/// The shape ID Smithy uses for "no input" or "no output".
const UNIT_SHAPE: &str = "smithy.api#Unit";

/// EC2 operations we generate code for, grouped by output file.
pub const OPERATION_CATEGORIES: &[(&str, &[&str])] = &[
    (
        "vpc",
        &[
            "CreateRoute",
            "DescribeRouteTables",
            "DescribeInternetGateways",
            "DescribeSecurityGroups",
            "CreateFlowLogs",
            "DescribeNetworkInterfaces",
            "CreateVpnConnection",
        ],
    ),
    (
        "instance",
        &[
            "DescribeInstances",
            "CreateCapacityReservation",
            "DescribeCapacityReservations",
            "DescribeReservedInstancesOfferings",
            "RunInstances",
            "DescribeSpotInstanceRequests",
            "DescribeInstanceTypes",
            "DescribeReservedInstances",
            "DescribeFleets",
            "DescribeSpotFleetRequests",
            "CreateLaunchTemplate",
            "GetLaunchTemplateData",
        ],
    ),
    (
        "image",
        &["DescribeImages", "ImportImage", "DescribeFpgaImages"],
    ),
    ("volume", &["CreateVolume"]),
];

/// All target operations, in category order.
pub fn target_operations() -> impl Iterator<Item = &'static str> {
    OPERATION_CATEGORIES
        .iter()
        .flat_map(|(_, ops)| ops.iter().copied())
}

/// Categorized operation info for code generation.
#[derive(Debug)]
pub struct OperationInfo {
    /// Short operation name (e.g., "DescribeInstances").
    pub name: String,
    /// Output file category (e.g., "instance").
    pub category: String,
    /// Short name of the input shape (e.g., "DescribeInstancesRequest").
    pub input_shape: Option<String>,
    /// Short name of the output shape (e.g., "DescribeInstancesResult").
    pub output_shape: Option<String>,
}

/// Scalar types that are `Copy` in Rust.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Primitive {
    /// `bool`.
    Boolean,
    /// `i32`.
    Integer,
    /// `i64`.
    Long,
    /// `f32`.
    Float,
    /// `f64`.
    Double,
}

impl Primitive {
    /// The Rust type name.
    pub fn rust_type(self) -> &'static str {
        match self {
            Self::Boolean => "bool",
            Self::Integer => "i32",
            Self::Long => "i64",
            Self::Float => "f32",
            Self::Double => "f64",
        }
    }
}

/// The resolved type of a struct member.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldType {
    /// Owned string.
    String,
    /// Copy scalar.
    Primitive(Primitive),
    /// UTC timestamp.
    Timestamp,
    /// Generated enum, by Rust name.
    Enum(String),
    /// Generated struct, by Rust name.
    Structure(String),
    /// Ordered list of another type.
    List(Box<FieldType>),
}

impl FieldType {
    /// Rust type expression, without the `Option` wrapper.
    pub fn rust_type(&self) -> String {
        match self {
            Self::String => "String".to_owned(),
            Self::Primitive(p) => p.rust_type().to_owned(),
            Self::Timestamp => "DateTime<Utc>".to_owned(),
            Self::Enum(name) | Self::Structure(name) => name.clone(),
            Self::List(inner) => format!("Vec<{}>", inner.rust_type()),
        }
    }

    /// Whether this type is a floating-point scalar or a list of them.
    pub fn is_float(&self) -> bool {
        match self {
            Self::Primitive(Primitive::Float | Primitive::Double) => true,
            Self::List(inner) => inner.is_float(),
            _ => false,
        }
    }

    /// Whether this type is or contains a timestamp.
    pub fn uses_timestamp(&self) -> bool {
        match self {
            Self::Timestamp => true,
            Self::List(inner) => inner.uses_timestamp(),
            _ => false,
        }
    }

    /// Name of the generated enum or struct this type refers to, if any.
    pub fn referenced_type(&self) -> Option<&str> {
        match self {
            Self::Enum(name) | Self::Structure(name) => Some(name),
            Self::List(inner) => inner.referenced_type(),
            _ => None,
        }
    }
}

/// Information about a struct member field for code generation.
#[derive(Debug, Clone)]
pub struct FieldInfo {
    /// Original Smithy member name (PascalCase), used as the wire name.
    pub smithy_name: String,
    /// Rust field name (snake_case, raw identifier for keywords).
    pub rust_name: String,
    /// Snake case name used to build method names (never a raw identifier).
    pub method_name: String,
    /// Resolved field type.
    pub field_type: FieldType,
    /// Whether this field is required.
    pub required: bool,
    /// Member documentation from the model.
    pub documentation: Option<String>,
}

/// A resolved structure.
#[derive(Debug, Clone)]
pub struct StructInfo {
    /// Name of the shape in the Smithy model.
    pub schema_name: String,
    /// Members in declaration order.
    pub fields: Vec<FieldInfo>,
    /// Structure documentation from the model.
    pub documentation: Option<String>,
}

impl StructInfo {
    /// Whether any member holds a float directly, which rules out derived `Eq` and `Hash`.
    pub fn has_float_fields(&self) -> bool {
        self.fields.iter().any(|f| f.field_type.is_float())
    }
}

/// Enum variant information for code generation.
#[derive(Debug, Clone)]
pub struct EnumVariantInfo {
    /// Rust variant name (PascalCase).
    pub rust_name: String,
    /// The string value from `@enumValue`.
    pub string_value: String,
}

/// A resolved enum.
#[derive(Debug, Clone)]
pub struct EnumInfo {
    /// Variants in declaration order.
    pub variants: Vec<EnumVariantInfo>,
    /// Enum documentation from the model.
    pub documentation: Option<String>,
}

/// Resolved information about all shapes needed for code generation.
#[derive(Debug)]
pub struct ResolvedModel {
    /// All operations we are generating.
    pub operations: Vec<OperationInfo>,
    /// All enum shapes needed (short name -> enum).
    pub enums: BTreeMap<String, EnumInfo>,
    /// All shared struct shapes (Rust name -> struct).
    pub shared_structs: BTreeMap<String, StructInfo>,
    /// Input struct shapes (Rust name -> struct).
    pub input_structs: BTreeMap<String, StructInfo>,
    /// Output struct shapes (Rust name -> struct).
    pub output_structs: BTreeMap<String, StructInfo>,
}

impl ResolvedModel {
    /// Look up the operation whose input or output shape has the given Rust name.
    pub fn operation_for(&self, kind: IoKind, rust_name: &str) -> Option<&OperationInfo> {
        self.operations.iter().find(|op| {
            let shape = match kind {
                IoKind::Input => op.input_shape.as_deref(),
                IoKind::Output => op.output_shape.as_deref(),
            };
            shape.is_some_and(|s| kind.rust_name(s) == rust_name)
        })
    }
}

/// Which side of an operation a struct belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IoKind {
    /// Operation input (`...Request` in the model).
    Input,
    /// Operation output (`...Result` in the model).
    Output,
}

impl IoKind {
    /// Module directory name.
    pub fn module(self) -> &'static str {
        match self {
            Self::Input => "input",
            Self::Output => "output",
        }
    }

    /// Rust name for an input or output shape.
    ///
    /// `CreateRouteRequest` becomes `CreateRouteInput`, `CreateRouteResult` becomes
    /// `CreateRouteOutput`.
    pub fn rust_name(self, short: &str) -> String {
        let (suffix, replacement) = match self {
            Self::Input => ("Request", "Input"),
            Self::Output => ("Result", "Output"),
        };
        short
            .strip_suffix(suffix)
            .map_or_else(|| short.to_owned(), |base| format!("{base}{replacement}"))
    }
}

/// Resolve built-in smithy.api types.
fn resolve_builtin_type(target: &str) -> Option<FieldType> {
    let ty = match target {
        "smithy.api#String" => FieldType::String,
        "smithy.api#Boolean" | "smithy.api#PrimitiveBoolean" => {
            FieldType::Primitive(Primitive::Boolean)
        }
        "smithy.api#Integer" | "smithy.api#PrimitiveInteger" => {
            FieldType::Primitive(Primitive::Integer)
        }
        "smithy.api#Long" | "smithy.api#PrimitiveLong" => FieldType::Primitive(Primitive::Long),
        "smithy.api#Float" | "smithy.api#PrimitiveFloat" => FieldType::Primitive(Primitive::Float),
        "smithy.api#Double" | "smithy.api#PrimitiveDouble" => {
            FieldType::Primitive(Primitive::Double)
        }
        "smithy.api#Timestamp" => FieldType::Timestamp,
        _ => return None,
    };
    Some(ty)
}

/// Resolve a Smithy shape target to a field type.
fn resolve_field_type(model: &SmithyModel, target: &str) -> Result<FieldType> {
    if let Some(builtin) = resolve_builtin_type(target) {
        return Ok(builtin);
    }

    let shape = model
        .shapes
        .get(target)
        .with_context(|| format!("shape {target} not found in model"))?;
    let short = SmithyModel::short_name(target);

    let ty = match shape {
        Shape::String => FieldType::String,
        Shape::Boolean => FieldType::Primitive(Primitive::Boolean),
        Shape::Integer => FieldType::Primitive(Primitive::Integer),
        Shape::Long => FieldType::Primitive(Primitive::Long),
        Shape::Float => FieldType::Primitive(Primitive::Float),
        Shape::Double => FieldType::Primitive(Primitive::Double),
        Shape::Timestamp => FieldType::Timestamp,
        Shape::Enum(_) => FieldType::Enum(short.to_owned()),
        Shape::Structure(_) => FieldType::Structure(short.to_owned()),
        Shape::List(list_shape) => {
            let inner = resolve_field_type(model, &list_shape.member.target)?;
            FieldType::List(Box::new(inner))
        }
        Shape::Blob | Shape::Map(_) | Shape::Union(_) | Shape::IntEnum => {
            bail!("unsupported member target {target}")
        }
        Shape::Operation(_) | Shape::Service | Shape::Resource => {
            bail!("{target} cannot be used as a member target")
        }
    };
    Ok(ty)
}

/// Convert a Smithy PascalCase member name to Rust snake_case.
fn to_snake_case(name: &str) -> String {
    use heck::ToSnakeCase;
    name.to_snake_case()
}

/// Rust keywords, strict and reserved, that can be written as raw identifiers.
const RAW_KEYWORDS: &[&str] = &[
    "abstract", "as", "async", "await", "become", "box", "break", "const", "continue", "do",
    "dyn", "else", "enum", "extern", "false", "final", "fn", "for", "gen", "if", "impl", "in",
    "let", "loop", "macro", "match", "mod", "move", "mut", "override", "priv", "pub", "ref",
    "return", "static", "struct", "trait", "true", "try", "type", "typeof", "unsafe", "unsized",
    "use", "virtual", "where", "while", "yield",
];

/// Keywords that cannot be raw identifiers.
const PATH_KEYWORDS: &[&str] = &["crate", "self", "super"];

/// Turn a snake_case name into a usable Rust field identifier.
fn to_field_ident(snake: &str) -> String {
    if RAW_KEYWORDS.contains(&snake) {
        format!("r#{snake}")
    } else if PATH_KEYWORDS.contains(&snake) {
        format!("{snake}_")
    } else {
        snake.to_owned()
    }
}

/// Whether a generated name is a plain ASCII identifier that does not start with a digit.
fn is_plain_ident(name: &str) -> bool {
    name.starts_with(|c: char| c.is_ascii_alphabetic() || c == '_')
        && name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_')
}

/// Convert a Smithy enum member name to Rust PascalCase.
///
/// Handles SCREAMING_SNAKE_CASE, snake_case, and already-PascalCase names.
fn to_pascal_case(name: &str) -> String {
    use heck::ToPascalCase;
    name.to_pascal_case()
}

/// Collect all shape IDs transitively referenced from a given shape.
fn collect_referenced_shapes(
    model: &SmithyModel,
    shape_id: &str,
    visited: &mut BTreeSet<String>,
    depth: usize,
) {
    if depth > MAX_RESOLVE_DEPTH
        || visited.contains(shape_id)
        || shape_id.starts_with("smithy.api#")
    {
        return;
    }
    visited.insert(shape_id.to_owned());

    let Some(shape) = model.shapes.get(shape_id) else {
        return;
    };

    match shape {
        Shape::Structure(s) | Shape::Union(s) => {
            for member in s.members.values() {
                collect_referenced_shapes(model, &member.target, visited, depth + 1);
            }
        }
        Shape::List(l) => {
            collect_referenced_shapes(model, &l.member.target, visited, depth + 1);
        }
        Shape::Map(m) => {
            collect_referenced_shapes(model, &m.key.target, visited, depth + 1);
            collect_referenced_shapes(model, &m.value.target, visited, depth + 1);
        }
        _ => {}
    }
}

/// Resolve fields for a structure shape, keeping declaration order.
///
/// Fails when two members map to the same Rust field name.
fn resolve_struct_fields(model: &SmithyModel, structure: &StructureShape) -> Result<Vec<FieldInfo>> {
    let mut seen: BTreeMap<String, &str> = BTreeMap::new();
    structure
        .members
        .iter()
        .map(|(name, member)| {
            let field = resolve_field(model, name, member)?;
            if let Some(previous) = seen.insert(field.method_name.clone(), name.as_str()) {
                bail!(
                    "members {previous} and {name} both map to field {}",
                    field.method_name
                );
            }
            Ok(field)
        })
        .collect()
}

fn resolve_field(model: &SmithyModel, name: &str, member: &MemberShape) -> Result<FieldInfo> {
    let field_type = resolve_field_type(model, &member.target)
        .with_context(|| format!("failed to resolve member {name}"))?;
    let method_name = to_snake_case(name);
    if !is_plain_ident(&method_name) {
        bail!("member {name} does not map to a Rust identifier (got {method_name:?})");
    }

    Ok(FieldInfo {
        smithy_name: name.to_owned(),
        rust_name: to_field_ident(&method_name),
        method_name,
        field_type,
        required: member.is_required(),
        documentation: member.documentation().map(str::to_owned),
    })
}

/// Resolve the variants of an enum shape, keeping declaration order.
///
/// Fails when a member name cannot become a variant, when two members map to
/// the same variant, or when a member would shadow the `Unknown` fallback.
fn resolve_enum_variants(
    enum_name: &str,
    members: &indexmap::IndexMap<String, MemberShape>,
) -> Result<Vec<EnumVariantInfo>> {
    let mut seen: BTreeMap<String, &str> = BTreeMap::new();
    members
        .iter()
        .map(|(variant_name, member)| {
            let rust_name = to_pascal_case(variant_name);
            if !is_plain_ident(&rust_name) {
                bail!("enum {enum_name} member {variant_name} does not map to a Rust variant");
            }
            if rust_name == "Unknown" {
                bail!(
                    "enum {enum_name} member {variant_name} collides with the Unknown fallback"
                );
            }
            if let Some(previous) = seen.insert(rust_name.clone(), variant_name.as_str()) {
                bail!(
                    "enum {enum_name} members {previous} and {variant_name} both map to {rust_name}"
                );
            }
            let string_value = member
                .traits
                .get(model::ENUM_VALUE_TRAIT)
                .and_then(|v| v.as_str())
                .unwrap_or(variant_name.as_str())
                .to_owned();
            Ok(EnumVariantInfo {
                rust_name,
                string_value,
            })
        })
        .collect()
}

/// Resolve all needed shapes from the Smithy model.
pub fn resolve_model(model: &SmithyModel) -> Result<ResolvedModel> {
    // Step 1: Collect all operation info and referenced shapes.
    let mut operations = Vec::new();
    let mut all_referenced = BTreeSet::new();
    let mut input_shape_ids = BTreeSet::new();
    let mut output_shape_ids = BTreeSet::new();

    for (category, ops) in OPERATION_CATEGORIES {
        for op_name in *ops {
            let full_name = format!("{EC2_NAMESPACE}{op_name}");
            let shape = model
                .shapes
                .get(&full_name)
                .with_context(|| format!("Operation {op_name} not found in model"))?;

            let Shape::Operation(op) = shape else {
                bail!("{op_name} is not an operation shape");
            };
            let input_target = op.input.as_ref().map(|r| r.target.clone());
            let output_target = op.output.as_ref().map(|r| r.target.clone());

            if let Some(ref inp) = input_target {
                if inp != UNIT_SHAPE {
                    collect_referenced_shapes(model, inp, &mut all_referenced, 0);
                    input_shape_ids.insert(inp.clone());
                }
            }
            if let Some(ref out) = output_target {
                if out != UNIT_SHAPE {
                    collect_referenced_shapes(model, out, &mut all_referenced, 0);
                    output_shape_ids.insert(out.clone());
                }
            }

            let short = |target: Option<String>| {
                target
                    .filter(|t| t != UNIT_SHAPE)
                    .map(|t| SmithyModel::short_name(&t).to_owned())
            };
            operations.push(OperationInfo {
                name: (*op_name).to_owned(),
                category: (*category).to_owned(),
                input_shape: short(input_target),
                output_shape: short(output_target),
            });
        }
    }
    debug!(shapes = all_referenced.len(), "collected referenced shapes");

    // Step 2: Resolve enum variants.
    let mut enums = BTreeMap::new();
    for shape_id in &all_referenced {
        if let Some(Shape::Enum(enum_shape)) = model.shapes.get(shape_id.as_str()) {
            let short = SmithyModel::short_name(shape_id).to_owned();
            let variants = resolve_enum_variants(&short, &enum_shape.members)?;
            enums.insert(
                short,
                EnumInfo {
                    variants,
                    documentation: model::documentation(&enum_shape.traits).map(str::to_owned),
                },
            );
        }
    }

    // Step 3: Resolve structs - separate into input, output, and shared.
    let mut input_structs = BTreeMap::new();
    let mut output_structs = BTreeMap::new();
    let mut shared_structs = BTreeMap::new();

    for shape_id in &all_referenced {
        let Some(Shape::Structure(structure)) = model.shapes.get(shape_id.as_str()) else {
            continue;
        };

        // Skip error shapes
        if structure.traits.contains_key("smithy.api#error") {
            continue;
        }

        let short = SmithyModel::short_name(shape_id).to_owned();
        let info = StructInfo {
            schema_name: short.clone(),
            fields: resolve_struct_fields(model, structure)
                .with_context(|| format!("failed to resolve structure {short}"))?,
            documentation: model::documentation(&structure.traits).map(str::to_owned),
        };

        let is_input = input_shape_ids.contains(shape_id);
        let is_output = output_shape_ids.contains(shape_id);

        if is_input && !is_output {
            input_structs.insert(IoKind::Input.rust_name(&short), info);
        } else if is_output && !is_input {
            output_structs.insert(IoKind::Output.rust_name(&short), info);
        } else {
            shared_structs.insert(short, info);
        }
    }

    Ok(ResolvedModel {
        operations,
        enums,
        shared_structs,
        input_structs,
        output_structs,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(json: &str) -> SmithyModel {
        serde_json::from_str(json).expect("parse model")
    }

    #[test]
    fn test_should_rename_input_and_output_shapes() {
        assert_eq!(IoKind::Input.rust_name("CreateRouteRequest"), "CreateRouteInput");
        assert_eq!(IoKind::Output.rust_name("CreateRouteResult"), "CreateRouteOutput");
        assert_eq!(IoKind::Output.rust_name("Volume"), "Volume");
    }

    #[test]
    fn test_should_convert_member_names() {
        assert_eq!(to_snake_case("DryRun"), "dry_run");
        assert_eq!(to_snake_case("DestinationIpv6CidrBlock"), "destination_ipv6_cidr_block");
        assert_eq!(to_snake_case("S3Bucket"), "s3_bucket");
        assert_eq!(to_field_ident("return"), "r#return");
        assert_eq!(to_field_ident("filters"), "filters");
    }

    #[test]
    fn test_should_convert_enum_member_names() {
        assert_eq!(to_pascal_case("gp2"), "Gp2");
        assert_eq!(to_pascal_case("x86_64"), "X8664");
        assert_eq!(to_pascal_case("shutting_down"), "ShuttingDown");
        assert_eq!(to_pascal_case("t2_micro"), "T2Micro");
    }

    #[test]
    fn test_should_render_field_types() {
        let tags = FieldType::List(Box::new(FieldType::Structure("Tag".to_owned())));
        assert_eq!(tags.rust_type(), "Vec<Tag>");
        assert_eq!(tags.referenced_type(), Some("Tag"));
        assert!(!tags.is_float());
        assert_eq!(FieldType::Timestamp.rust_type(), "DateTime<Utc>");
        assert!(FieldType::List(Box::new(FieldType::Primitive(Primitive::Double))).is_float());
    }

    #[test]
    fn test_should_resolve_simple_types_and_lists() {
        let model = parse(
            r#"{
                "smithy": "2.0",
                "shapes": {
                    "com.amazonaws.ec2#String": { "type": "string" },
                    "com.amazonaws.ec2#Integer": { "type": "integer" },
                    "com.amazonaws.ec2#DateTime": { "type": "timestamp" },
                    "com.amazonaws.ec2#Price": { "type": "double" },
                    "com.amazonaws.ec2#StringList": {
                        "type": "list",
                        "member": { "target": "com.amazonaws.ec2#String" }
                    }
                }
            }"#,
        );
        let resolve = |id: &str| resolve_field_type(&model, id).expect("resolve");
        assert_eq!(resolve("com.amazonaws.ec2#String"), FieldType::String);
        assert_eq!(
            resolve("com.amazonaws.ec2#Integer"),
            FieldType::Primitive(Primitive::Integer)
        );
        assert_eq!(resolve("com.amazonaws.ec2#DateTime"), FieldType::Timestamp);
        assert_eq!(
            resolve("com.amazonaws.ec2#Price"),
            FieldType::Primitive(Primitive::Double)
        );
        assert_eq!(
            resolve("com.amazonaws.ec2#StringList"),
            FieldType::List(Box::new(FieldType::String))
        );
        assert!(resolve_field_type(&model, "com.amazonaws.ec2#Missing").is_err());
    }

    #[test]
    fn test_should_flag_only_direct_float_members() {
        let field = |name: &str, field_type: FieldType| FieldInfo {
            smithy_name: name.to_owned(),
            rust_name: name.to_lowercase(),
            method_name: name.to_lowercase(),
            field_type,
            required: false,
            documentation: None,
        };
        let info = |fields: Vec<FieldInfo>| StructInfo {
            schema_name: String::new(),
            fields,
            documentation: None,
        };

        let charge = info(vec![field("Amount", FieldType::Primitive(Primitive::Double))]);
        let history = info(vec![field(
            "Prices",
            FieldType::List(Box::new(FieldType::Primitive(Primitive::Float))),
        )]);
        let offering = info(vec![field(
            "Charges",
            FieldType::List(Box::new(FieldType::Structure("Charge".to_owned()))),
        )]);
        assert!(charge.has_float_fields());
        assert!(history.has_float_fields());
        assert!(!offering.has_float_fields());
    }

    #[test]
    fn test_should_escape_keyword_member_names() {
        for keyword in ["for", "if", "fn", "impl", "static", "async", "type", "gen"] {
            assert_eq!(to_field_ident(keyword), format!("r#{keyword}"));
        }
        assert_eq!(to_field_ident("self"), "self_");
        assert_eq!(to_field_ident("super"), "super_");
        assert_eq!(to_field_ident("crate"), "crate_");
        assert_eq!(to_field_ident("format"), "format");
    }

    fn enum_members(json: serde_json::Value) -> indexmap::IndexMap<String, MemberShape> {
        serde_json::from_value(json).expect("parse members")
    }

    #[test]
    fn test_should_reject_enum_members_mapping_to_one_variant() {
        let members = enum_members(serde_json::json!({
            "x86_64": { "target": "smithy.api#Unit", "traits": { "smithy.api#enumValue": "x86_64" } },
            "X86_64": { "target": "smithy.api#Unit", "traits": { "smithy.api#enumValue": "x86-64" } }
        }));
        let err = resolve_enum_variants("ArchitectureValues", &members).expect_err("collision");
        let message = err.to_string();
        assert!(message.contains("ArchitectureValues"), "{message}");
        assert!(message.contains("X8664"), "{message}");
    }

    #[test]
    fn test_should_reject_enum_members_that_cannot_be_variants() {
        let unknown = enum_members(serde_json::json!({
            "UNKNOWN": { "target": "smithy.api#Unit", "traits": { "smithy.api#enumValue": "unknown" } }
        }));
        assert!(resolve_enum_variants("State", &unknown).is_err());

        let numeric = enum_members(serde_json::json!({
            "1": { "target": "smithy.api#Unit", "traits": { "smithy.api#enumValue": "1" } }
        }));
        assert!(resolve_enum_variants("GroupNumber", &numeric).is_err());

        let valid = enum_members(serde_json::json!({
            "GP2": { "target": "smithy.api#Unit", "traits": { "smithy.api#enumValue": "gp2" } },
            "IO1": { "target": "smithy.api#Unit" }
        }));
        let variants = resolve_enum_variants("VolumeType", &valid).expect("variants");
        assert_eq!(variants[0].rust_name, "Gp2");
        assert_eq!(variants[0].string_value, "gp2");
        assert_eq!(variants[1].string_value, "IO1");
    }

    #[test]
    fn test_should_reject_members_mapping_to_one_field() {
        let model = parse(
            r#"{
                "smithy": "2.0",
                "shapes": {
                    "com.amazonaws.ec2#Settings": {
                        "type": "structure",
                        "members": {
                            "DryRun": { "target": "smithy.api#Boolean" },
                            "Dry_Run": { "target": "smithy.api#Boolean" }
                        }
                    }
                }
            }"#,
        );
        let Some(Shape::Structure(structure)) = model.shapes.get("com.amazonaws.ec2#Settings") else {
            panic!("structure");
        };
        let err = resolve_struct_fields(&model, structure).expect_err("collision");
        assert!(err.to_string().contains("dry_run"));
    }

    #[test]
    fn test_should_classify_operation_shapes() {
        let mut shapes = serde_json::Map::new();
        for op in target_operations() {
            shapes.insert(
                format!("{EC2_NAMESPACE}{op}"),
                serde_json::json!({
                    "type": "operation",
                    "input": { "target": format!("{EC2_NAMESPACE}{op}Request") },
                    "output": { "target": format!("{EC2_NAMESPACE}{op}Result") }
                }),
            );
            shapes.insert(
                format!("{EC2_NAMESPACE}{op}Request"),
                serde_json::json!({
                    "type": "structure",
                    "members": {
                        "DryRun": { "target": "smithy.api#Boolean" },
                        "Tags": { "target": "com.amazonaws.ec2#TagList" }
                    }
                }),
            );
            shapes.insert(
                format!("{EC2_NAMESPACE}{op}Result"),
                serde_json::json!({
                    "type": "structure",
                    "members": { "Return": { "target": "smithy.api#Boolean" } }
                }),
            );
        }
        shapes.insert(
            format!("{EC2_NAMESPACE}TagList"),
            serde_json::json!({ "type": "list", "member": { "target": "com.amazonaws.ec2#Tag" } }),
        );
        shapes.insert(
            format!("{EC2_NAMESPACE}Tag"),
            serde_json::json!({
                "type": "structure",
                "members": { "Key": { "target": "smithy.api#String" } }
            }),
        );
        let model: SmithyModel =
            serde_json::from_value(serde_json::json!({ "smithy": "2.0", "shapes": shapes }))
                .expect("parse model");

        let resolved = resolve_model(&model).expect("resolve model");

        assert_eq!(resolved.operations.len(), target_operations().count());
        assert!(resolved.input_structs.contains_key("CreateRouteInput"));
        assert!(resolved.output_structs.contains_key("CreateRouteOutput"));
        assert!(resolved.shared_structs.contains_key("Tag"));
        let output = &resolved.output_structs["CreateRouteOutput"];
        assert_eq!(output.fields[0].rust_name, "r#return");
        assert_eq!(output.fields[0].method_name, "return");
        let op = resolved
            .operation_for(IoKind::Input, "CreateRouteInput")
            .expect("operation");
        assert_eq!(op.name, "CreateRoute");
        assert_eq!(op.category, "vpc");
    }

    #[test]
    fn test_should_resolve_bundled_ec2_model() {
        let model = parse(include_str!("../smithy-model/ec2.json"));
        let resolved = resolve_model(&model).expect("resolve model");

        assert_eq!(resolved.operations.len(), 23);
        assert_eq!(resolved.enums.len(), 80);
        assert_eq!(resolved.shared_structs.len(), 177);
        assert_eq!(resolved.input_structs.len(), 23);
        assert_eq!(resolved.output_structs.len(), 23);

        for name in ["PricingDetail", "ReservedInstances", "FleetData", "ProcessorInfo"] {
            assert!(resolved.shared_structs[name].has_float_fields(), "{name}");
        }
        assert!(!resolved.shared_structs["Instance"].has_float_fields());
        let offerings = &resolved.output_structs["DescribeReservedInstancesOfferingsOutput"];
        assert!(!offerings.has_float_fields());

        let run = &resolved.input_structs["RunInstancesInput"];
        let required: Vec<&str> = run
            .fields
            .iter()
            .filter(|f| f.required)
            .map(|f| f.smithy_name.as_str())
            .collect();
        assert_eq!(required, ["MaxCount", "MinCount"]);
        let tunnel = &resolved.shared_structs["VpnTunnelOptionsSpecification"];
        assert!(tunnel.fields.iter().any(
            |f| f.smithy_name == "DPDTimeoutSeconds" && f.rust_name == "dpd_timeout_seconds"
        ));
        assert!(resolved.enums["InstanceType"].variants.len() > 300);

        let route = &resolved.input_structs["CreateRouteInput"];
        assert!(
            route
                .fields
                .iter()
                .any(|f| f.smithy_name == "RouteTableId" && f.required)
        );
        let tokens = &resolved.enums["HttpTokensState"];
        let literals: Vec<&str> = tokens
            .variants
            .iter()
            .map(|v| v.string_value.as_str())
            .collect();
        assert_eq!(literals, ["optional", "required"]);
    }
}
