use crate::cli::ScanStrategy;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Serialize)]
pub struct JsonOut<T: Serialize> {
    pub ok: bool,
    pub data: T,
}

/// Persistent module name -> package name table.
///
/// Entries are only ever added by a run; nothing here removes them.
#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq, Eq)]
#[serde(transparent)]
pub struct MappingTable {
    entries: BTreeMap<String, String>,
}

impl MappingTable {
    pub fn get(&self, module: &str) -> Option<&str> {
        self.entries.get(module).map(String::as_str)
    }

    pub fn contains(&self, module: &str) -> bool {
        self.entries.contains_key(module)
    }

    pub fn record(&mut self, module: &str, package: &str) {
        self.entries.insert(module.to_string(), package.to_string());
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(m, p)| (m.as_str(), p.as_str()))
    }
}

impl<M: Into<String>, P: Into<String>> FromIterator<(M, P)> for MappingTable {
    fn from_iter<I: IntoIterator<Item = (M, P)>>(iter: I) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(m, p)| (m.into(), p.into()))
                .collect(),
        }
    }
}

/// Snapshot of the environment's installed packages, keyed by lowercase name.
#[derive(Debug, Serialize, Clone, Default, PartialEq, Eq)]
#[serde(transparent)]
pub struct InstalledIndex {
    packages: BTreeMap<String, String>,
}

impl InstalledIndex {
    pub fn insert(&mut self, name: &str, version: &str) {
        self.packages
            .insert(name.to_lowercase(), version.to_string());
    }

    pub fn version(&self, name: &str) -> Option<&str> {
        self.packages.get(&name.to_lowercase()).map(String::as_str)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.packages.contains_key(&name.to_lowercase())
    }

    pub fn len(&self) -> usize {
        self.packages.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.packages.iter().map(|(n, v)| (n.as_str(), v.as_str()))
    }
}

impl<N: AsRef<str>, V: AsRef<str>> FromIterator<(N, V)> for InstalledIndex {
    fn from_iter<I: IntoIterator<Item = (N, V)>>(iter: I) -> Self {
        let mut index = InstalledIndex::default();
        for (name, version) in iter {
            index.insert(name.as_ref(), version.as_ref());
        }
        index
    }
}

#[derive(Debug, Serialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ModuleKind {
    Stdlib,
    Internal,
    External,
}

impl ModuleKind {
    pub fn as_str(self) -> &'static str {
        match self {
            ModuleKind::Stdlib => "stdlib",
            ModuleKind::Internal => "internal",
            ModuleKind::External => "external",
        }
    }
}

#[derive(Debug, Serialize, Clone)]
pub struct ScannedModule {
    pub name: String,
    pub kind: ModuleKind,
}

#[derive(Debug, Serialize)]
pub struct ScanReport {
    pub project: String,
    pub strategy: ScanStrategy,
    pub files_scanned: usize,
    pub files_skipped: usize,
    pub modules: Vec<ScannedModule>,
}

#[derive(Debug, Serialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    Internal,
    AlreadyInstalled,
    Mapped,
    Installed,
    InstalledAfterProbe,
    Prompted,
    Skipped,
    Failed,
}

impl Outcome {
    pub fn as_str(self) -> &'static str {
        match self {
            Outcome::Internal => "internal",
            Outcome::AlreadyInstalled => "already_installed",
            Outcome::Mapped => "mapped",
            Outcome::Installed => "installed",
            Outcome::InstalledAfterProbe => "installed_after_probe",
            Outcome::Prompted => "prompted",
            Outcome::Skipped => "skipped",
            Outcome::Failed => "failed",
        }
    }

    pub fn is_accepted(self) -> bool {
        matches!(
            self,
            Outcome::AlreadyInstalled
                | Outcome::Mapped
                | Outcome::Installed
                | Outcome::InstalledAfterProbe
                | Outcome::Prompted
        )
    }
}

#[derive(Debug, Serialize, Clone, PartialEq, Eq)]
pub struct Resolution {
    pub module: String,
    pub outcome: Outcome,
    pub package: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct GenerateReport {
    pub project: String,
    pub manifest_path: String,
    pub mapping_path: String,
    pub install_attempts: usize,
    pub resolutions: Vec<Resolution>,
    pub manifest: Vec<String>,
}

#[derive(Debug, Serialize, Clone)]
pub struct MappingEntry {
    pub module: String,
    pub package: String,
}

#[derive(Debug, Serialize, Clone)]
pub struct InstalledPackage {
    pub name: String,
    pub version: String,
}
