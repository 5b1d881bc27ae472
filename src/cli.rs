use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "reqscan",
    version,
    about = "Infer, install and pin the third-party dependencies of a Python project"
)]
pub struct Cli {
    #[arg(long, global = true, help = "Output machine-readable JSON")]
    pub json: bool,
    #[arg(
        long,
        global = true,
        env = "REQSCAN_LOG",
        default_value = "info",
        help = "Log level (off, error, warn, info, debug, trace)"
    )]
    pub log_level: log::LevelFilter,
    #[arg(
        long,
        global = true,
        help = "Config file (default: <project>/reqscan.toml, then ~/.config/reqscan/config.toml)"
    )]
    pub config: Option<PathBuf>,
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Scan, resolve, install and write the requirements manifest.
    Generate {
        path: Option<PathBuf>,
        #[arg(long, help = "Mapping file (relative paths resolve against the project)")]
        mapping: Option<PathBuf>,
        #[arg(long, help = "Manifest file (relative paths resolve against the project)")]
        output: Option<PathBuf>,
        #[arg(long, value_enum)]
        strategy: Option<ScanStrategy>,
        #[arg(long, help = "pip executable used for install/freeze")]
        pip: Option<String>,
        #[arg(long, help = "Package index URL template containing {name}")]
        index_url: Option<String>,
        #[arg(long, default_value_t = false, help = "Skip unresolved modules instead of prompting")]
        non_interactive: bool,
    },
    /// Report the imports of a project and how each one is classified.
    Scan {
        path: Option<PathBuf>,
        #[arg(long, value_enum)]
        strategy: Option<ScanStrategy>,
    },
    /// List packages installed in the active environment.
    Installed {
        #[arg(long)]
        pip: Option<String>,
    },
    /// Inspect or edit the module-to-package mapping file.
    Mapping {
        #[command(subcommand)]
        command: MappingCommands,
    },
}

#[derive(Subcommand, Debug)]
pub enum MappingCommands {
    /// Print every recorded module -> package entry.
    List {
        #[arg(long, default_value = ".")]
        project: PathBuf,
        #[arg(long)]
        mapping: Option<PathBuf>,
    },
    /// Record the package that provides a module.
    Set {
        module: String,
        package: String,
        #[arg(long, default_value = ".")]
        project: PathBuf,
        #[arg(long)]
        mapping: Option<PathBuf>,
    },
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ScanStrategy {
    /// Structured parse of each file.
    #[default]
    Ast,
    /// Legacy line patterns. Misses continued lines, may match inside strings.
    Regex,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum StdlibSource {
    #[default]
    Embedded,
    Runtime,
}
