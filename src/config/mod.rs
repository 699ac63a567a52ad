use crate::utils::error::Result;
use crate::utils::validation::{
    validate_file_extension, validate_non_empty_string, validate_path, Validate,
};
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

pub const CONFIG_EXTENSIONS: &[&str] = &["yaml", "yml", "toml", "json"];

#[derive(Debug, Clone, Parser)]
#[command(name = "pipeline-io")]
#[command(about = "File helpers for ML pipelines: configs, JSON, binaries and base64 images")]
#[command(version)]
pub struct CliConfig {
    #[arg(short, long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, global = true, value_enum, default_value = "compact")]
    pub log_format: LogFormat,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    Compact,
    Json,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Print a YAML config (or one value of it) as JSON
    Show {
        path: PathBuf,
        /// Dotted path of a single value, e.g. `training.epochs`
        #[arg(long)]
        key: Option<String>,
        /// Expand ${VAR} placeholders from the environment
        #[arg(long)]
        expand_env: bool,
    },
    /// Convert a YAML, TOML or JSON document to 4-space indented JSON
    Convert { input: PathBuf, output: PathBuf },
    /// Create directories, including missing parents
    Mkdirs {
        #[arg(required = true)]
        paths: Vec<PathBuf>,
        #[arg(long)]
        quiet: bool,
    },
    /// Print the approximate size of a file in KB
    Size { path: PathBuf },
    /// Base64-encode a file
    Encode {
        path: PathBuf,
        /// Write the text here instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Decode a base64 text file back into bytes
    Decode { input: PathBuf, output: PathBuf },
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        match &self.command {
            Command::Show { path, key, .. } => {
                validate_path("path", path)?;
                if let Some(key) = key {
                    validate_non_empty_string("key", key)?;
                }
            }
            Command::Convert { input, output } => {
                validate_path("input", input)?;
                validate_file_extension("input", input, CONFIG_EXTENSIONS)?;
                validate_path("output", output)?;
            }
            Command::Mkdirs { paths, .. } => {
                for path in paths {
                    validate_path("paths", path)?;
                }
            }
            Command::Size { path } => validate_path("path", path)?,
            Command::Encode { path, output } => {
                validate_path("path", path)?;
                if let Some(output) = output {
                    validate_path("output", output)?;
                }
            }
            Command::Decode { input, output } => {
                validate_path("input", input)?;
                validate_path("output", output)?;
            }
        }
        Ok(())
    }
}
