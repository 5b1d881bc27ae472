use crate::cli::{ScanStrategy, StdlibSource};
use serde::Deserialize;
use std::path::{Path, PathBuf};

pub const PROJECT_CONFIG_FILE: &str = "reqscan.toml";
pub const DEFAULT_MAPPING_FILE: &str = "module_to_package.json";
pub const DEFAULT_MANIFEST_FILE: &str = "requirements_make.txt";
pub const DEFAULT_INDEX_URL: &str = "https://pypi.org/pypi/{name}/json";

#[derive(Debug, Deserialize, Default, Clone)]
pub struct ConfigFile {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub pip: PipConfig,
    #[serde(default)]
    pub index: IndexConfig,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct GeneralConfig {
    pub mapping_file: PathBuf,
    pub manifest_file: PathBuf,
    pub strategy: ScanStrategy,
    pub stdlib_source: StdlibSource,
    pub python: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            mapping_file: PathBuf::from(DEFAULT_MAPPING_FILE),
            manifest_file: PathBuf::from(DEFAULT_MANIFEST_FILE),
            strategy: ScanStrategy::Ast,
            stdlib_source: StdlibSource::Embedded,
            python: "python3".to_string(),
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct PipConfig {
    pub command: Vec<String>,
    /// 0 leaves installs unbounded.
    pub timeout_secs: u64,
}

impl Default for PipConfig {
    fn default() -> Self {
        Self {
            command: vec!["pip".to_string()],
            timeout_secs: 0,
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct IndexConfig {
    pub url: String,
    pub timeout_ms: u64,
}

impl Default for IndexConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_INDEX_URL.to_string(),
            timeout_ms: 5000,
        }
    }
}

fn user_config_path() -> Option<PathBuf> {
    let home = std::env::var("HOME").ok()?;
    Some(PathBuf::from(home).join(".config/reqscan/config.toml"))
}

/// Picks the first existing file of: explicit path, project-local
/// `reqscan.toml`, user config. An explicit path must exist.
pub fn config_path(
    explicit: Option<&Path>,
    project: Option<&Path>,
) -> anyhow::Result<Option<PathBuf>> {
    if let Some(p) = explicit {
        if !p.is_file() {
            anyhow::bail!("config file not found: {}", p.display());
        }
        return Ok(Some(p.to_path_buf()));
    }
    if let Some(root) = project {
        let local = root.join(PROJECT_CONFIG_FILE);
        if local.is_file() {
            return Ok(Some(local));
        }
    }
    Ok(user_config_path().filter(|p| p.is_file()))
}

pub fn load_config(explicit: Option<&Path>, project: Option<&Path>) -> anyhow::Result<ConfigFile> {
    let Some(path) = config_path(explicit, project)? else {
        return Ok(ConfigFile::default());
    };
    log::debug!("loading config from {}", path.display());
    let raw = std::fs::read_to_string(&path)?;
    Ok(toml::from_str(&raw)?)
}

/// Relative paths are taken relative to the project root.
pub fn project_relative(root: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        root.join(path)
    }
}
