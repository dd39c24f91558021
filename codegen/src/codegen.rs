//! Rust code generation from resolved Smithy shapes.
//!
//! This module takes a `ResolvedModel` and produces Rust source code strings
//! for enums, shared structs, input/output structs, the operation catalogue,
//! and the crate root.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt::Write;

use anyhow::Result;

use crate::shapes::{
    EnumInfo, FieldInfo, FieldType, IoKind, OPERATION_CATEGORIES, ResolvedModel, StructInfo,
    target_operations,
};

/// Header comment placed at the top of every generated file.
const FILE_HEADER: &str = "//! Auto-generated from the EC2 Smithy model. DO NOT EDIT.";

/// Line width the generated code is wrapped to.
const MAX_WIDTH: usize = 100;

/// Generate all source files and return them as a map of path -> content.
pub fn generate_all(resolved: &ResolvedModel) -> Result<BTreeMap<String, String>> {
    let mut files = BTreeMap::new();

    files.insert("types.rs".to_owned(), generate_types(resolved)?);
    files.insert("operations.rs".to_owned(), generate_operations(resolved)?);
    files.insert("lib.rs".to_owned(), generate_lib(resolved)?);

    generate_io_modules(&mut files, IoKind::Input, &resolved.input_structs, resolved)?;
    generate_io_modules(&mut files, IoKind::Output, &resolved.output_structs, resolved)?;

    Ok(files)
}

/// Generate types.rs with all shared enums and structs.
fn generate_types(resolved: &ResolvedModel) -> Result<String> {
    let mut out = String::with_capacity(64 * 1024);
    writeln!(out, "{FILE_HEADER}")?;
    writeln!(out)?;

    let structs: Vec<(&String, &StructInfo)> = resolved.shared_structs.iter().collect();
    write_std_uses(&mut out, &structs)?;
    if needs_chrono(&structs) {
        writeln!(out, "use chrono::{{DateTime, Utc}};")?;
    }
    writeln!(out, "use serde::{{Deserialize, Serialize}};")?;
    writeln!(out)?;
    writeln!(out, "use crate::enums::ec2_enum;")?;
    writeln!(out, "use crate::shape::{{Member, Shape, render}};")?;
    writeln!(out)?;

    for (name, info) in &resolved.enums {
        write_enum(&mut out, name, info)?;
    }

    for (name, info) in &structs {
        write_struct(&mut out, name, info)?;
    }

    Ok(out)
}

/// Generate a single `ec2_enum!` invocation.
fn write_enum(out: &mut String, name: &str, info: &EnumInfo) -> Result<()> {
    writeln!(out, "ec2_enum! {{")?;
    write_doc(out, "    ", name, info.documentation.as_deref())?;
    writeln!(out, "    {name} {{")?;
    for variant in &info.variants {
        writeln!(
            out,
            "        {} => \"{}\",",
            variant.rust_name, variant.string_value
        )?;
    }
    writeln!(out, "    }}")?;
    writeln!(out, "}}")?;
    writeln!(out)?;
    Ok(())
}

/// Write the `/// EC2 {name}.` doc block with the optional model documentation.
fn write_doc(out: &mut String, indent: &str, name: &str, doc: Option<&str>) -> Result<()> {
    writeln!(out, "{indent}/// EC2 {name}.")?;
    if let Some(doc) = doc {
        writeln!(out, "{indent}///")?;
        for line in doc.lines() {
            writeln!(out, "{indent}/// {line}")?;
        }
    }
    Ok(())
}

/// Generate a Rust struct with its accessors and trait impls.
fn write_struct(out: &mut String, name: &str, info: &StructInfo) -> Result<()> {
    write_doc(out, "", name, info.documentation.as_deref())?;
    if info.has_float_fields() {
        writeln!(out, "#[derive(Debug, Clone, Default, Serialize, Deserialize)]")?;
    } else {
        writeln!(
            out,
            "#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]"
        )?;
    }
    writeln!(out, "pub struct {name} {{")?;
    for field in &info.fields {
        if let Some(doc) = &field.documentation {
            for line in doc.lines() {
                writeln!(out, "    /// {line}")?;
            }
        }
        writeln!(
            out,
            "    #[serde(rename = \"{}\", skip_serializing_if = \"Option::is_none\")]",
            field.smithy_name
        )?;
        writeln!(
            out,
            "    pub {}: Option<{}>,",
            field.rust_name,
            field.field_type.rust_type()
        )?;
    }
    writeln!(out, "}}")?;
    writeln!(out)?;

    if !info.fields.is_empty() {
        writeln!(out, "impl {name} {{")?;
        for (i, field) in info.fields.iter().enumerate() {
            if i > 0 {
                writeln!(out)?;
            }
            write_accessors(out, field)?;
        }
        writeln!(out, "}}")?;
        writeln!(out)?;
    }

    write_shape_impl(out, name, info)?;
    if info.has_float_fields() {
        write_bitwise_eq_impls(out, name)?;
    }

    writeln!(out, "impl fmt::Display for {name} {{")?;
    writeln!(
        out,
        "    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {{"
    )?;
    writeln!(out, "        render(self, f)")?;
    writeln!(out, "    }}")?;
    writeln!(out, "}}")?;
    writeln!(out)?;
    Ok(())
}

/// Write the getter, setter, and fluent builder for one field.
fn write_accessors(out: &mut String, field: &FieldInfo) -> Result<()> {
    let field_name = &field.rust_name;
    let method = &field.method_name;
    let smithy = &field.smithy_name;
    let rust_type = field.field_type.rust_type();

    // Getter
    let (ret, body) = match &field.field_type {
        FieldType::String => (
            "Option<&str>".to_owned(),
            format!("self.{field_name}.as_deref()"),
        ),
        FieldType::Primitive(p) => (
            format!("Option<{}>", p.rust_type()),
            format!("self.{field_name}"),
        ),
        FieldType::List(inner) => (
            format!("Option<&[{}]>", inner.rust_type()),
            format!("self.{field_name}.as_deref()"),
        ),
        FieldType::Timestamp | FieldType::Enum(_) | FieldType::Structure(_) => {
            (format!("Option<&{rust_type}>"), format!("self.{field_name}.as_ref()"))
        }
    };
    writeln!(out, "    /// Returns the `{smithy}` member.")?;
    writeln!(out, "    #[must_use]")?;
    write_fn_signature(out, field_name, &["&self".to_owned()], Some(&ret))?;
    writeln!(out, "        {body}")?;
    writeln!(out, "    }}")?;
    writeln!(out)?;

    // Setter
    writeln!(out, "    /// Sets the `{smithy}` member, replacing any previous value.")?;
    write_fn_signature(
        out,
        &format!("set_{method}"),
        &["&mut self".to_owned(), format!("{field_name}: Option<{rust_type}>")],
        None,
    )?;
    writeln!(out, "        self.{field_name} = {field_name};")?;
    writeln!(out, "    }}")?;
    writeln!(out)?;

    // Fluent builder
    if let FieldType::List(inner) = &field.field_type {
        writeln!(
            out,
            "    /// Appends to the `{smithy}` member and returns the updated value."
        )?;
        writeln!(out, "    #[must_use]")?;
        write_fn_signature(
            out,
            &format!("with_{method}"),
            &[
                "mut self".to_owned(),
                format!(
                    "{field_name}: impl IntoIterator<Item = impl Into<{}>>",
                    inner.rust_type()
                ),
            ],
            Some("Self"),
        )?;
        writeln!(out, "        self.{field_name}")?;
        writeln!(out, "            .get_or_insert_with(Vec::new)")?;
        writeln!(
            out,
            "            .extend({field_name}.into_iter().map(Into::into));"
        )?;
    } else {
        writeln!(
            out,
            "    /// Sets the `{smithy}` member and returns the updated value."
        )?;
        writeln!(out, "    #[must_use]")?;
        write_fn_signature(
            out,
            &format!("with_{method}"),
            &[
                "mut self".to_owned(),
                format!("{field_name}: impl Into<{rust_type}>"),
            ],
            Some("Self"),
        )?;
        writeln!(out, "        self.{field_name} = Some({field_name}.into());")?;
    }
    writeln!(out, "        self")?;
    writeln!(out, "    }}")?;
    Ok(())
}

/// Write a method signature, wrapping parameters when the line gets too long.
fn write_fn_signature(
    out: &mut String,
    name: &str,
    params: &[String],
    ret: Option<&str>,
) -> Result<()> {
    let ret = ret.map_or_else(String::new, |r| format!(" -> {r}"));
    let single = format!("    pub fn {name}({}){ret} {{", params.join(", "));
    if single.len() <= MAX_WIDTH {
        writeln!(out, "{single}")?;
    } else {
        writeln!(out, "    pub fn {name}(")?;
        for param in params {
            writeln!(out, "        {param},")?;
        }
        writeln!(out, "    ){ret} {{")?;
    }
    Ok(())
}

/// Write the `Shape` impl listing every member in declaration order.
fn write_shape_impl(out: &mut String, name: &str, info: &StructInfo) -> Result<()> {
    writeln!(out, "impl Shape for {name} {{")?;
    writeln!(
        out,
        "    const SHAPE_NAME: &'static str = \"{}\";",
        info.schema_name
    )?;
    writeln!(out)?;
    writeln!(out, "    fn members(&self) -> Vec<Member<'_>> {{")?;
    if info.fields.is_empty() {
        writeln!(out, "        Vec::new()")?;
    } else {
        writeln!(out, "        vec![")?;
        for field in &info.fields {
            let args = [
                format!("\"{}\"", field.smithy_name),
                field.required.to_string(),
                format!("self.{}.as_ref()", field.rust_name),
            ];
            let single = format!("            Member::new({}),", args.join(", "));
            if single.len() <= MAX_WIDTH {
                writeln!(out, "{single}")?;
            } else {
                writeln!(out, "            Member::new(")?;
                for arg in &args {
                    writeln!(out, "                {arg},")?;
                }
                writeln!(out, "            ),")?;
            }
        }
        writeln!(out, "        ]")?;
    }
    writeln!(out, "    }}")?;
    writeln!(out, "}}")?;
    writeln!(out)?;
    Ok(())
}

/// Write `PartialEq`, `Eq`, and `Hash` over the record view for a struct holding floats.
///
/// `FieldValue` compares floats by bit pattern and `shape_hash` hashes the same
/// bits, so `NaN` equals itself and `0.0` differs from `-0.0`.
fn write_bitwise_eq_impls(out: &mut String, name: &str) -> Result<()> {
    writeln!(out, "impl PartialEq for {name} {{")?;
    writeln!(out, "    fn eq(&self, other: &Self) -> bool {{")?;
    writeln!(out, "        Shape::members(self) == Shape::members(other)")?;
    writeln!(out, "    }}")?;
    writeln!(out, "}}")?;
    writeln!(out)?;
    writeln!(out, "impl Eq for {name} {{}}")?;
    writeln!(out)?;
    writeln!(out, "impl Hash for {name} {{")?;
    writeln!(out, "    fn hash<H: Hasher>(&self, state: &mut H) {{")?;
    writeln!(out, "        state.write_u64(Shape::shape_hash(self));")?;
    writeln!(out, "    }}")?;
    writeln!(out, "}}")?;
    writeln!(out)?;
    Ok(())
}

/// Write the std imports shared by every generated shape file.
fn write_std_uses(out: &mut String, structs: &[(&String, &StructInfo)]) -> Result<()> {
    writeln!(out, "use std::fmt;")?;
    if structs.iter().any(|(_, info)| info.has_float_fields()) {
        writeln!(out, "use std::hash::{{Hash, Hasher}};")?;
    }
    writeln!(out)?;
    Ok(())
}

/// Write a `use` item, packing the names onto continuation lines when too long.
fn write_use(out: &mut String, path: &str, names: &[String]) -> Result<()> {
    if let [single] = names {
        writeln!(out, "use {path}::{single};")?;
        return Ok(());
    }
    let line = format!("use {path}::{{{}}};", names.join(", "));
    if line.len() <= MAX_WIDTH {
        writeln!(out, "{line}")?;
        return Ok(());
    }

    writeln!(out, "use {path}::{{")?;
    let mut current = String::new();
    for name in names {
        let candidate = if current.is_empty() {
            format!("    {name},")
        } else {
            format!("{current} {name},")
        };
        if candidate.len() > MAX_WIDTH && !current.is_empty() {
            writeln!(out, "{current}")?;
            current = format!("    {name},");
        } else {
            current = candidate;
        }
    }
    if !current.is_empty() {
        writeln!(out, "{current}")?;
    }
    writeln!(out, "}};")?;
    Ok(())
}

/// Whether any of the structs needs the chrono imports.
fn needs_chrono(structs: &[(&String, &StructInfo)]) -> bool {
    structs
        .iter()
        .any(|(_, info)| info.fields.iter().any(|f| f.field_type.uses_timestamp()))
}

/// Determine which types from `types.rs` are referenced by a set of structs.
fn referenced_types(structs: &[(&String, &StructInfo)], resolved: &ResolvedModel) -> Vec<String> {
    let mut needed = BTreeSet::new();
    for (_, info) in structs {
        for field in &info.fields {
            if let Some(name) = field.field_type.referenced_type() {
                if resolved.enums.contains_key(name) || resolved.shared_structs.contains_key(name) {
                    needed.insert(name.to_owned());
                }
            }
        }
    }
    needed.into_iter().collect()
}

/// Generate input or output module files.
fn generate_io_modules(
    files: &mut BTreeMap<String, String>,
    kind: IoKind,
    structs: &BTreeMap<String, StructInfo>,
    resolved: &ResolvedModel,
) -> Result<()> {
    let module = kind.module();
    let mut categories: Vec<&str> = OPERATION_CATEGORIES.iter().map(|(c, _)| *c).collect();
    categories.sort_unstable();

    // Generate mod.rs
    let mut mod_out = String::with_capacity(1024);
    writeln!(mod_out, "{FILE_HEADER}")?;
    writeln!(mod_out)?;
    for category in &categories {
        writeln!(mod_out, "mod {category};")?;
    }
    writeln!(mod_out)?;
    for category in &categories {
        writeln!(mod_out, "pub use {category}::*;")?;
    }
    files.insert(format!("{module}/mod.rs"), mod_out);

    // Generate each category file
    for category in &categories {
        let category_structs: Vec<(&String, &StructInfo)> = structs
            .iter()
            .filter(|(name, _)| {
                resolved
                    .operation_for(kind, name)
                    .is_some_and(|op| op.category == *category)
            })
            .collect();

        let mut out = String::with_capacity(16 * 1024);
        writeln!(out, "{FILE_HEADER}")?;
        writeln!(out)?;
        write_std_uses(&mut out, &category_structs)?;
        if needs_chrono(&category_structs) {
            writeln!(out, "use chrono::{{DateTime, Utc}};")?;
        }
        writeln!(out, "use serde::{{Deserialize, Serialize}};")?;
        writeln!(out)?;

        if kind == IoKind::Input {
            let outputs: Vec<String> = category_structs
                .iter()
                .filter_map(|(name, _)| output_for_input(resolved, name))
                .collect::<BTreeSet<_>>()
                .into_iter()
                .collect();
            writeln!(out, "use crate::operations::Ec2Operation;")?;
            if !outputs.is_empty() {
                write_use(&mut out, "crate::output", &outputs)?;
            }
            writeln!(out, "use crate::request::Ec2Request;")?;
        }
        writeln!(out, "use crate::shape::{{Member, Shape, render}};")?;
        let types = referenced_types(&category_structs, resolved);
        if !types.is_empty() {
            write_use(&mut out, "crate::types", &types)?;
        }
        writeln!(out)?;

        for (name, info) in &category_structs {
            write_struct(&mut out, name, info)?;
            if kind == IoKind::Input {
                write_request_impl(&mut out, name, resolved)?;
            }
        }

        files.insert(format!("{module}/{category}.rs"), out);
    }

    Ok(())
}

/// Rust name of the output struct paired with an input struct.
fn output_for_input(resolved: &ResolvedModel, input: &str) -> Option<String> {
    resolved
        .operation_for(IoKind::Input, input)
        .and_then(|op| op.output_shape.as_deref())
        .map(|shape| IoKind::Output.rust_name(shape))
        .filter(|name| resolved.output_structs.contains_key(name))
}

/// Write the `Ec2Request` impl tying an input to its operation and output.
fn write_request_impl(out: &mut String, name: &str, resolved: &ResolvedModel) -> Result<()> {
    let Some(op) = resolved.operation_for(IoKind::Input, name) else {
        return Ok(());
    };
    let Some(output) = output_for_input(resolved, name) else {
        return Ok(());
    };
    writeln!(out, "impl Ec2Request for {name} {{")?;
    writeln!(out, "    type Output = {output};")?;
    writeln!(out)?;
    writeln!(
        out,
        "    const OPERATION: Ec2Operation = Ec2Operation::{};",
        op.name
    )?;
    writeln!(out, "}}")?;
    writeln!(out)?;
    Ok(())
}

/// Generate operations.rs with the Ec2Operation enum.
fn generate_operations(resolved: &ResolvedModel) -> Result<String> {
    let mut out = String::with_capacity(8192);
    writeln!(out, "{FILE_HEADER}")?;
    writeln!(out)?;
    writeln!(out, "use std::fmt;")?;
    writeln!(out, "use std::str::FromStr;")?;
    writeln!(out)?;
    writeln!(out, "use crate::error::Ec2ModelError;")?;
    writeln!(out)?;

    writeln!(out, "/// All supported EC2 operations.")?;
    writeln!(out, "#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]")?;
    writeln!(out, "pub enum Ec2Operation {{")?;
    for op in target_operations() {
        writeln!(out, "    /// The {op} operation.")?;
        writeln!(out, "    {op},")?;
    }
    writeln!(out, "}}")?;
    writeln!(out)?;

    writeln!(out, "impl Ec2Operation {{")?;
    writeln!(out, "    /// Every supported operation.")?;
    writeln!(out, "    pub const ALL: &'static [Self] = &[")?;
    for op in target_operations() {
        writeln!(out, "        Self::{op},")?;
    }
    writeln!(out, "    ];")?;
    writeln!(out)?;

    // Generate as_str()
    writeln!(out, "    /// Returns the AWS operation name string.")?;
    writeln!(out, "    #[must_use]")?;
    writeln!(out, "    pub fn as_str(&self) -> &'static str {{")?;
    writeln!(out, "        match self {{")?;
    for op in target_operations() {
        writeln!(out, "            Self::{op} => \"{op}\",")?;
    }
    writeln!(out, "        }}")?;
    writeln!(out, "    }}")?;
    writeln!(out)?;

    // Generate from_name()
    writeln!(
        out,
        "    /// Parse an operation name string into an Ec2Operation."
    )?;
    writeln!(out, "    #[must_use]")?;
    writeln!(out, "    pub fn from_name(name: &str) -> Option<Self> {{")?;
    writeln!(out, "        match name {{")?;
    for op in target_operations() {
        writeln!(out, "            \"{op}\" => Some(Self::{op}),")?;
    }
    writeln!(out, "            _ => None,")?;
    writeln!(out, "        }}")?;
    writeln!(out, "    }}")?;

    // Generate input_shape_name() and output_shape_name()
    for (kind, label) in [(IoKind::Input, "input"), (IoKind::Output, "output")] {
        writeln!(out)?;
        writeln!(
            out,
            "    /// Returns the model name of the operation's {label} shape."
        )?;
        writeln!(out, "    #[must_use]")?;
        writeln!(
            out,
            "    pub fn {label}_shape_name(&self) -> &'static str {{"
        )?;
        writeln!(out, "        match self {{")?;
        for op in &resolved.operations {
            let shape = match kind {
                IoKind::Input => op.input_shape.as_deref(),
                IoKind::Output => op.output_shape.as_deref(),
            };
            writeln!(
                out,
                "            Self::{} => \"{}\",",
                op.name,
                shape.unwrap_or("Unit")
            )?;
        }
        writeln!(out, "        }}")?;
        writeln!(out, "    }}")?;
    }
    writeln!(out, "}}")?;
    writeln!(out)?;

    // FromStr
    writeln!(out, "impl FromStr for Ec2Operation {{")?;
    writeln!(out, "    type Err = Ec2ModelError;")?;
    writeln!(out)?;
    writeln!(
        out,
        "    fn from_str(s: &str) -> Result<Self, Self::Err> {{"
    )?;
    writeln!(
        out,
        "        Self::from_name(s).ok_or_else(|| Ec2ModelError::UnknownOperation(s.to_owned()))"
    )?;
    writeln!(out, "    }}")?;
    writeln!(out, "}}")?;
    writeln!(out)?;

    // Display
    writeln!(out, "impl fmt::Display for Ec2Operation {{")?;
    writeln!(
        out,
        "    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {{"
    )?;
    writeln!(out, "        f.write_str(self.as_str())")?;
    writeln!(out, "    }}")?;
    writeln!(out, "}}")?;

    Ok(out)
}

/// Generate lib.rs with module declarations and re-exports.
fn generate_lib(resolved: &ResolvedModel) -> Result<String> {
    let mut out = String::with_capacity(2048);
    writeln!(out, "{FILE_HEADER}")?;
    writeln!(out, "#![allow(clippy::too_many_lines)]")?;
    writeln!(out, "#![allow(clippy::struct_excessive_bools)]")?;
    writeln!(out, "#![allow(missing_docs)]")?;
    writeln!(out)?;

    writeln!(out, "pub mod enums;")?;
    writeln!(out, "pub mod error;")?;
    writeln!(out, "pub mod input;")?;
    writeln!(out, "pub mod operations;")?;
    writeln!(out, "pub mod output;")?;
    writeln!(out, "pub mod request;")?;
    writeln!(out, "pub mod shape;")?;
    writeln!(out, "pub mod types;")?;
    writeln!(out)?;

    // Re-exports
    writeln!(out, "pub use enums::Ec2Enum;")?;
    writeln!(out, "pub use error::Ec2ModelError;")?;
    writeln!(out, "pub use operations::Ec2Operation;")?;
    writeln!(out, "pub use request::Ec2Request;")?;
    writeln!(
        out,
        "pub use shape::{{FieldValue, Member, Shape, ToFieldValue, missing_required, render}};"
    )?;
    writeln!(out)?;

    // Count generated items
    let n_enums = resolved.enums.len();
    let n_shared = resolved.shared_structs.len();
    let n_inputs = resolved.input_structs.len();
    let n_outputs = resolved.output_structs.len();
    let n_ops = resolved.operations.len();

    writeln!(
        out,
        "// Generated: {n_ops} operations, {n_enums} enums, {n_shared} shared structs, {n_inputs} input structs, {n_outputs} output structs"
    )?;

    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shapes::{EnumVariantInfo, OperationInfo, Primitive};

    fn field(smithy: &str, rust: &str, field_type: FieldType, required: bool) -> FieldInfo {
        FieldInfo {
            smithy_name: smithy.to_owned(),
            rust_name: rust.to_owned(),
            method_name: rust.trim_start_matches("r#").to_owned(),
            field_type,
            required,
            documentation: None,
        }
    }

    fn sample_model() -> ResolvedModel {
        let mut enums = BTreeMap::new();
        enums.insert(
            "VolumeType".to_owned(),
            EnumInfo {
                variants: vec![
                    EnumVariantInfo {
                        rust_name: "Gp2".to_owned(),
                        string_value: "gp2".to_owned(),
                    },
                    EnumVariantInfo {
                        rust_name: "Io1".to_owned(),
                        string_value: "io1".to_owned(),
                    },
                ],
                documentation: None,
            },
        );

        let mut shared_structs = BTreeMap::new();
        shared_structs.insert(
            "Filter".to_owned(),
            StructInfo {
                schema_name: "Filter".to_owned(),
                fields: vec![
                    field("Name", "name", FieldType::String, false),
                    field(
                        "Values",
                        "values",
                        FieldType::List(Box::new(FieldType::String)),
                        false,
                    ),
                ],
                documentation: Some("A filter name and values.".to_owned()),
            },
        );

        let mut input_structs = BTreeMap::new();
        input_structs.insert(
            "CreateVolumeInput".to_owned(),
            StructInfo {
                schema_name: "CreateVolumeRequest".to_owned(),
                fields: vec![
                    field("AvailabilityZone", "availability_zone", FieldType::String, true),
                    field("Size", "size", FieldType::Primitive(Primitive::Integer), false),
                    field(
                        "VolumeType",
                        "volume_type",
                        FieldType::Enum("VolumeType".to_owned()),
                        false,
                    ),
                ],
                documentation: None,
            },
        );

        let mut output_structs = BTreeMap::new();
        output_structs.insert(
            "CreateVolumeOutput".to_owned(),
            StructInfo {
                schema_name: "CreateVolumeResult".to_owned(),
                fields: vec![field(
                    "CreateTime",
                    "create_time",
                    FieldType::Timestamp,
                    false,
                )],
                documentation: None,
            },
        );

        ResolvedModel {
            operations: vec![OperationInfo {
                name: "CreateVolume".to_owned(),
                category: "volume".to_owned(),
                input_shape: Some("CreateVolumeRequest".to_owned()),
                output_shape: Some("CreateVolumeResult".to_owned()),
            }],
            enums,
            shared_structs,
            input_structs,
            output_structs,
        }
    }

    #[test]
    fn test_should_generate_all_files() {
        let files = generate_all(&sample_model()).expect("generate");
        for path in [
            "lib.rs",
            "types.rs",
            "operations.rs",
            "input/mod.rs",
            "input/volume.rs",
            "input/vpc.rs",
            "output/mod.rs",
            "output/volume.rs",
        ] {
            assert!(files.contains_key(path), "missing {path}");
        }
        assert!(files.values().all(|content| content.starts_with(FILE_HEADER)));
    }

    #[test]
    fn test_should_emit_enum_macro_invocation() {
        let types = generate_types(&sample_model()).expect("generate");
        assert!(types.contains("ec2_enum! {\n    /// EC2 VolumeType.\n    VolumeType {\n"));
        assert!(types.contains("        Gp2 => \"gp2\",\n        Io1 => \"io1\",\n"));
    }

    #[test]
    fn test_should_emit_struct_accessors() {
        let types = generate_types(&sample_model()).expect("generate");
        assert!(types.contains("/// EC2 Filter.\n///\n/// A filter name and values.\n"));
        assert!(types.contains("#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]"));
        assert!(types.contains("    #[serde(rename = \"Values\", skip_serializing_if = \"Option::is_none\")]\n    pub values: Option<Vec<String>>,"));
        assert!(types.contains("    pub fn name(&self) -> Option<&str> {\n        self.name.as_deref()\n"));
        assert!(types.contains("    pub fn values(&self) -> Option<&[String]> {"));
        assert!(types.contains("    pub fn set_values(&mut self, values: Option<Vec<String>>) {"));
        assert!(types.contains(
            "    pub fn with_values(mut self, values: impl IntoIterator<Item = impl Into<String>>) -> Self {\n        self.values\n            .get_or_insert_with(Vec::new)\n"
        ));
        assert!(types.contains("            Member::new(\"Name\", false, self.name.as_ref()),"));
        assert!(!types.contains("chrono"));
    }

    #[test]
    fn test_should_emit_request_impl_and_imports() {
        let files = generate_all(&sample_model()).expect("generate");
        let input = &files["input/volume.rs"];
        assert!(input.contains("use crate::output::CreateVolumeOutput;"));
        assert!(input.contains("use crate::types::VolumeType;"));
        assert!(input.contains("impl Ec2Request for CreateVolumeInput {\n    type Output = CreateVolumeOutput;\n"));
        assert!(input.contains("const SHAPE_NAME: &'static str = \"CreateVolumeRequest\";"));
        assert!(input.contains("Member::new(\"AvailabilityZone\", true, self.availability_zone.as_ref()),"));
        assert!(input.contains("    pub fn size(&self) -> Option<i32> {\n        self.size\n"));
        assert!(input.contains("    pub fn volume_type(&self) -> Option<&VolumeType> {"));

        let output = &files["output/volume.rs"];
        assert!(output.contains("use chrono::{DateTime, Utc};"));
        assert!(output.contains("    pub fn create_time(&self) -> Option<&DateTime<Utc>> {"));
    }

    #[test]
    fn test_should_compare_float_structs_by_record_view() {
        let mut model = sample_model();
        model.shared_structs.insert(
            "PricingDetail".to_owned(),
            StructInfo {
                schema_name: "PricingDetail".to_owned(),
                fields: vec![
                    field("Count", "count", FieldType::Primitive(Primitive::Integer), false),
                    field("Price", "price", FieldType::Primitive(Primitive::Double), false),
                ],
                documentation: None,
            },
        );
        let types = generate_types(&model).expect("generate");
        assert!(types.contains("use std::fmt;\nuse std::hash::{Hash, Hasher};\n"));
        assert!(types.contains(
            "#[derive(Debug, Clone, Default, Serialize, Deserialize)]\npub struct PricingDetail {"
        ));
        assert!(types.contains(
            "impl PartialEq for PricingDetail {\n    fn eq(&self, other: &Self) -> bool {\n        Shape::members(self) == Shape::members(other)\n"
        ));
        assert!(types.contains("impl Eq for PricingDetail {}\n"));
        assert!(types.contains("        state.write_u64(Shape::shape_hash(self));\n"));
        assert!(types.contains(
            "#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]\npub struct Filter {"
        ));

        let files = generate_all(&sample_model()).expect("generate");
        assert!(!files["types.rs"].contains("use std::hash"));
        assert!(!files["input/volume.rs"].contains("use std::hash"));
    }

    #[test]
    fn test_should_wrap_long_signatures() {
        let mut out = String::new();
        write_fn_signature(
            &mut out,
            "with_destination_ipv6_cidr_block_associations",
            &[
                "mut self".to_owned(),
                "destination_ipv6_cidr_block_associations: impl IntoIterator<Item = impl Into<String>>"
                    .to_owned(),
            ],
            Some("Self"),
        )
        .expect("write");
        assert_eq!(
            out,
            "    pub fn with_destination_ipv6_cidr_block_associations(\n        mut self,\n        destination_ipv6_cidr_block_associations: impl IntoIterator<Item = impl Into<String>>,\n    ) -> Self {\n"
        );
    }

    #[test]
    fn test_should_pack_long_use_lists() {
        let names: Vec<String> = (0..12).map(|i| format!("SomeLongTypeName{i}")).collect();
        let mut out = String::new();
        write_use(&mut out, "crate::types", &names).expect("write");
        assert!(out.starts_with("use crate::types::{\n    SomeLongTypeName0, "));
        assert!(out.ends_with("SomeLongTypeName11,\n};\n"));
        assert!(out.lines().all(|line| line.len() <= MAX_WIDTH));
    }

    #[test]
    fn test_should_generate_operation_catalogue() {
        let ops = generate_operations(&sample_model()).expect("generate");
        assert!(ops.contains("pub enum Ec2Operation {"));
        assert!(ops.contains("            \"DescribeInstances\" => Some(Self::DescribeInstances),"));
        assert!(ops.contains("            Self::CreateVolume => \"CreateVolumeRequest\","));
        assert!(ops.contains("            Self::CreateVolume => \"CreateVolumeResult\","));
    }
}
