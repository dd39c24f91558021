//! Generator configuration.
//!
//! Values start from built-in defaults, are overlaid by environment variables,
//! and finally by command-line flags.

use std::path::PathBuf;

use clap::Parser;

/// Command-line flags for the generator.
#[derive(Debug, Default, Parser)]
#[command(name = "rustack-ec2-codegen")]
#[command(about = "Generate the EC2 value-object model from the Smithy JSON AST")]
pub struct Args {
    /// Path to the Smithy JSON AST model
    #[arg(long)]
    pub model: Option<PathBuf>,

    /// Directory receiving the generated sources
    #[arg(long)]
    pub output: Option<PathBuf>,

    /// Compare generated sources with the files on disk instead of writing them
    #[arg(long)]
    pub check: bool,

    /// Log level filter (ignored when RUST_LOG is set)
    #[arg(long = "log-level")]
    pub log_level: Option<String>,
}

/// Resolved generator configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodegenConfig {
    /// Smithy JSON AST to read.
    pub model_path: PathBuf,
    /// Directory the generated files are written to.
    pub output_dir: PathBuf,
    /// Check mode: fail on stale files, write nothing.
    pub check: bool,
    /// Log level.
    pub log_level: String,
}

impl Default for CodegenConfig {
    fn default() -> Self {
        Self {
            model_path: PathBuf::from("smithy-model/ec2.json"),
            output_dir: PathBuf::from("../crates/rustack-ec2-model/src"),
            check: false,
            log_level: "info".to_owned(),
        }
    }
}

impl CodegenConfig {
    /// Load configuration from environment variables.
    #[must_use]
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(v) = std::env::var("EC2_SMITHY_MODEL") {
            config.model_path = PathBuf::from(v);
        }
        if let Ok(v) = std::env::var("EC2_MODEL_OUTPUT") {
            config.output_dir = PathBuf::from(v);
        }
        if let Ok(v) = std::env::var("LOG_LEVEL") {
            config.log_level = v;
        }

        config
    }

    /// Overlay command-line flags on top of this configuration.
    #[must_use]
    pub fn with_args(mut self, args: Args) -> Self {
        if let Some(model) = args.model {
            self.model_path = model;
        }
        if let Some(output) = args.output {
            self.output_dir = output;
        }
        if let Some(level) = args.log_level {
            self.log_level = level;
        }
        self.check |= args.check;
        self
    }
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn test_should_build_cli_parser() {
        Args::command().debug_assert();
    }

    #[test]
    fn test_should_create_default_config() {
        let config = CodegenConfig::default();
        assert_eq!(config.model_path, PathBuf::from("smithy-model/ec2.json"));
        assert_eq!(
            config.output_dir,
            PathBuf::from("../crates/rustack-ec2-model/src")
        );
        assert!(!config.check);
        assert_eq!(config.log_level, "info");
    }

    #[test]
    fn test_should_overlay_flags() {
        let args = Args::parse_from([
            "rustack-ec2-codegen",
            "--model",
            "/tmp/ec2.json",
            "--check",
            "--log-level",
            "debug",
        ]);
        let config = CodegenConfig::default().with_args(args);
        assert_eq!(config.model_path, PathBuf::from("/tmp/ec2.json"));
        assert_eq!(
            config.output_dir,
            PathBuf::from("../crates/rustack-ec2-model/src")
        );
        assert!(config.check);
        assert_eq!(config.log_level, "debug");
    }

    #[test]
    fn test_should_keep_config_without_flags() {
        let config = CodegenConfig::default().with_args(Args::default());
        assert_eq!(config, CodegenConfig::default());
    }
}
