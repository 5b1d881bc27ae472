//! Module name -> package name resolution.
//!
//! Per candidate, first match wins:
//! 1. internal to the project: skipped
//! 2. already installed (case-insensitive): accepted under the module name
//! 3. present in the mapping table: accepted under the mapped name, not re-checked
//! 4. `install(module)` succeeds: identity mapping recorded
//! 5. index says the name exists: one more install; success records the mapping
//! 6. otherwise the operator is asked once, after the automatic pass
//!
//! The mapping only grows on successful installs.

use crate::domain::models::{InstalledIndex, MappingTable, Outcome, Resolution};
use crate::services::index::PackageIndex;
use crate::services::pip::Installer;
use crate::services::project::is_project_module;
use crate::services::prompt::Prompt;
use std::collections::BTreeSet;
use std::path::Path;

pub struct Resolver<'a> {
    pub root: &'a Path,
    pub installer: &'a mut dyn Installer,
    pub index: &'a mut dyn PackageIndex,
    pub prompt: &'a mut dyn Prompt,
}

#[derive(Debug, Default)]
pub struct Resolved {
    pub resolutions: Vec<Resolution>,
    /// Package names that belong in the manifest.
    pub accepted: BTreeSet<String>,
    pub install_attempts: usize,
}

impl Resolved {
    fn push(&mut self, module: &str, outcome: Outcome, package: Option<&str>) {
        if let (true, Some(p)) = (outcome.is_accepted(), package) {
            self.accepted.insert(p.to_string());
        }
        self.resolutions.push(Resolution {
            module: module.to_string(),
            outcome,
            package: package.map(str::to_string),
        });
    }
}

fn prompt_text(module: &str) -> String {
    format!("\nPackage name for module '{}' (blank to skip): ", module)
}

impl Resolver<'_> {
    fn install(&mut self, package: &str, out: &mut Resolved) -> bool {
        out.install_attempts += 1;
        self.installer.install(package)
    }

    /// Steps 1-5. `None` leaves the module for the operator.
    fn resolve_automatic(
        &mut self,
        module: &str,
        installed: &InstalledIndex,
        mapping: &mut MappingTable,
        out: &mut Resolved,
    ) -> Option<Outcome> {
        if is_project_module(module, self.root) {
            log::info!("'{}' is a project module, skipping", module);
            out.push(module, Outcome::Internal, None);
            return Some(Outcome::Internal);
        }

        if let Some(version) = installed.version(module) {
            log::info!("'{}' already installed ({})", module, version);
            out.push(module, Outcome::AlreadyInstalled, Some(module));
            return Some(Outcome::AlreadyInstalled);
        }

        if let Some(package) = mapping.get(module).map(str::to_string) {
            log::info!("'{}' maps to '{}'", module, package);
            out.push(module, Outcome::Mapped, Some(&package));
            return Some(Outcome::Mapped);
        }

        if self.install(module, out) {
            mapping.record(module, module);
            out.push(module, Outcome::Installed, Some(module));
            return Some(Outcome::Installed);
        }

        if !self.index.exists(module) {
            log::info!("'{}' not found on the package index", module);
            return None;
        }

        log::info!("'{}' exists on the package index, retrying install", module);
        if self.install(module, out) {
            mapping.record(module, module);
            out.push(module, Outcome::InstalledAfterProbe, Some(module));
            return Some(Outcome::InstalledAfterProbe);
        }
        None
    }

    fn resolve_interactive(
        &mut self,
        module: &str,
        mapping: &mut MappingTable,
        out: &mut Resolved,
    ) {
        let answer = self.prompt.ask(&prompt_text(module));
        let package = answer.trim();
        if package.is_empty() {
            log::info!("'{}' left unresolved", module);
            out.push(module, Outcome::Skipped, None);
            return;
        }
        if self.install(package, out) {
            mapping.record(module, package);
            out.push(module, Outcome::Prompted, Some(package));
        } else {
            log::info!("'{}' left unresolved, '{}' did not install", module, package);
            out.push(module, Outcome::Failed, Some(package));
        }
    }

    pub fn resolve(
        &mut self,
        candidates: &BTreeSet<String>,
        installed: &InstalledIndex,
        mapping: &mut MappingTable,
    ) -> Resolved {
        let mut out = Resolved::default();
        let mut pending = Vec::new();

        for module in candidates {
            if self
                .resolve_automatic(module, installed, mapping, &mut out)
                .is_none()
            {
                pending.push(module.as_str());
            }
        }

        for module in pending {
            self.resolve_interactive(module, mapping, &mut out);
        }

        out.resolutions.sort_by(|a, b| a.module.cmp(&b.module));
        out
    }
}
