#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

#[cfg(feature = "cli")]
use clap::Parser;
#[cfg(feature = "cli")]
use std::path::PathBuf;

pub use toml_config::{OutputFormat, TomlConfig};

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "uri-encoding")]
#[command(about = "Build URLs and URNs from raw path elements with RFC 3986 encoding")]
#[command(version)]
pub struct CliConfig {
    /// Path to a TOML file with endpoint and URN defaults
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Output format, overrides the config file
    #[arg(long, value_enum, global = true)]
    pub format: Option<OutputFormat>,

    #[arg(short, long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    /// Write logs as JSON lines to stderr
    #[arg(long, global = true)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: cli::Command,
}
