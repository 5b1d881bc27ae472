use crate::cli::ScanStrategy;
use crate::domain::models::{GenerateReport, ModuleKind, ScanReport, ScannedModule};
use crate::services::index::PackageIndex;
use crate::services::manifest::{render_manifest, write_manifest};
use crate::services::mapping::{load_mapping, save_mapping};
use crate::services::pip::{Environment, Installer};
use crate::services::project::is_project_module;
use crate::services::prompt::Prompt;
use crate::services::resolver::Resolver;
use crate::services::scanner::scan_project;
use crate::services::stdlib::StdlibFilter;
use std::path::PathBuf;

pub struct Pipeline {
    pub root: PathBuf,
    pub mapping_path: PathBuf,
    pub manifest_path: PathBuf,
    pub strategy: ScanStrategy,
    pub stdlib: StdlibFilter,
}

pub struct Collaborators<'a> {
    pub environment: &'a mut dyn Environment,
    pub installer: &'a mut dyn Installer,
    pub index: &'a mut dyn PackageIndex,
    pub prompt: &'a mut dyn Prompt,
}

impl Pipeline {
    pub fn scan(&self) -> ScanReport {
        let scanned = scan_project(&self.root, self.strategy);
        let modules = scanned
            .modules
            .iter()
            .filter(|name| !name.is_empty())
            .map(|name| ScannedModule {
                name: name.clone(),
                kind: if self.stdlib.is_stdlib(name) {
                    ModuleKind::Stdlib
                } else if is_project_module(name, &self.root) {
                    ModuleKind::Internal
                } else {
                    ModuleKind::External
                },
            })
            .collect();
        ScanReport {
            project: self.root.to_string_lossy().to_string(),
            strategy: self.strategy,
            files_scanned: scanned.files_scanned,
            files_skipped: scanned.files_skipped,
            modules,
        }
    }

    /// Scan, resolve and install, then persist the mapping and the manifest.
    pub fn generate(&self, c: Collaborators<'_>) -> anyhow::Result<GenerateReport> {
        log::info!("[1] scanning {} for imports", self.root.display());
        let scanned = scan_project(&self.root, self.strategy);
        let candidates = self.stdlib.filter(&scanned.modules);
        log::info!(
            "{} files, {} third-party candidates",
            scanned.files_scanned,
            candidates.len()
        );

        log::info!("[2] loading {}", self.mapping_path.display());
        let mut mapping = load_mapping(&self.mapping_path)?;
        let installed = c.environment.list_installed()?;

        let resolved = Resolver {
            root: &self.root,
            installer: c.installer,
            index: c.index,
            prompt: c.prompt,
        }
        .resolve(&candidates, &installed, &mut mapping);

        save_mapping(&mapping, &self.mapping_path)?;

        log::info!("[3] writing {}", self.manifest_path.display());
        let installed = c.environment.list_installed()?;
        let manifest = render_manifest(&resolved.accepted, &installed);
        write_manifest(&manifest, &self.manifest_path)?;

        Ok(GenerateReport {
            project: self.root.to_string_lossy().to_string(),
            manifest_path: self.manifest_path.to_string_lossy().to_string(),
            mapping_path: self.mapping_path.to_string_lossy().to_string(),
            install_attempts: resolved.install_attempts,
            resolutions: resolved.resolutions,
            manifest,
        })
    }
}
