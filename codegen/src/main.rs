//! EC2 model code generator.
//!
//! Reads the EC2 Smithy JSON AST model and generates Rust source files
//! for the `rustack-ec2-model` crate.
//!
//! # Usage
//!
//! ```text
//! rustack-ec2-codegen [--model PATH] [--output DIR] [--check] [--log-level LEVEL]
//! ```
//!
//! # Environment Variables
//!
//! | Variable | Default | Description |
//! |----------|---------|-------------|
//! | `EC2_SMITHY_MODEL` | `smithy-model/ec2.json` | Smithy model to read |
//! | `EC2_MODEL_OUTPUT` | `../crates/rustack-ec2-model/src` | Output directory |
//! | `LOG_LEVEL` | `info` | Log level filter |
//! | `RUST_LOG` | *(unset)* | Fine-grained tracing filter (overrides `LOG_LEVEL`) |

mod codegen;
mod config;
mod model;
mod shapes;

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result, bail};
use clap::Parser;
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;

use crate::config::{Args, CodegenConfig};

/// Initialize the tracing subscriber.
///
/// Uses `RUST_LOG` if set, otherwise falls back to the configured log level.
fn init_tracing(log_level: &str) -> Result<()> {
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else {
        EnvFilter::try_new(log_level)
            .with_context(|| format!("invalid log level filter: {log_level}"))?
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    Ok(())
}

fn main() -> Result<()> {
    let config = CodegenConfig::from_env().with_args(Args::parse());
    init_tracing(&config.log_level)?;

    info!(
        model = %config.model_path.display(),
        output = %config.output_dir.display(),
        "starting code generation"
    );

    // Read and parse the Smithy JSON model.
    let model_json = fs::read_to_string(&config.model_path).with_context(|| {
        format!("Failed to read model file: {}", config.model_path.display())
    })?;

    let smithy_model: model::SmithyModel =
        serde_json::from_str(&model_json).context("Failed to parse Smithy JSON model")?;

    info!(
        shapes = smithy_model.shapes.len(),
        smithy = %smithy_model.smithy,
        "parsed model"
    );

    // Resolve shapes and types.
    let resolved =
        shapes::resolve_model(&smithy_model).context("Failed to resolve model shapes")?;

    info!(
        operations = resolved.operations.len(),
        enums = resolved.enums.len(),
        shared_structs = resolved.shared_structs.len(),
        input_structs = resolved.input_structs.len(),
        output_structs = resolved.output_structs.len(),
        "resolved model"
    );

    // Generate code.
    let files = codegen::generate_all(&resolved).context("Failed to generate code")?;

    if config.check {
        return check_files(&config.output_dir, &files);
    }

    // Write output files.
    for (rel_path, content) in &files {
        let full_path = config.output_dir.join(rel_path);
        ensure_parent_dir(&full_path)?;
        fs::write(&full_path, content)
            .with_context(|| format!("Failed to write {}", full_path.display()))?;
        debug!(path = %full_path.display(), "wrote file");
    }

    info!(files = files.len(), "code generation complete");

    Ok(())
}

/// Compare generated content with the files on disk.
fn check_files(output_dir: &Path, files: &BTreeMap<String, String>) -> Result<()> {
    let mut stale = Vec::new();
    for (rel_path, content) in files {
        let full_path = output_dir.join(rel_path);
        let current = fs::read_to_string(&full_path).unwrap_or_default();
        if current != *content {
            warn!(path = %full_path.display(), "generated file is stale");
            stale.push(rel_path.as_str());
        }
    }

    if !stale.is_empty() {
        bail!(
            "{} generated file(s) out of date: {}",
            stale.len(),
            stale.join(", ")
        );
    }

    info!(files = files.len(), "generated files are up to date");
    Ok(())
}

/// Ensure the parent directory of a path exists.
fn ensure_parent_dir(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }
    Ok(())
}
