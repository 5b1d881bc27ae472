use crate::cli::{Cli, Commands, MappingCommands};
use crate::domain::models::{InstalledPackage, MappingEntry};
use crate::services::config::{load_config, project_relative, ConfigFile};
use crate::services::mapping::{load_mapping, save_mapping};
use crate::services::output::{print_report, print_rows};
use crate::services::pip::{Environment, Pip};
use std::path::{Path, PathBuf};

fn mapping_path(cfg: &ConfigFile, project: &Path, explicit: Option<&Path>) -> PathBuf {
    project_relative(
        project,
        explicit.unwrap_or(cfg.general.mapping_file.as_path()),
    )
}

pub fn handle_inspect_commands(cli: &Cli) -> anyhow::Result<bool> {
    match &cli.command {
        Commands::Installed { pip } => {
            let cfg = load_config(cli.config.as_deref(), None)?;
            let command = match pip {
                Some(p) => vec![p.clone()],
                None => cfg.pip.command.clone(),
            };
            let index = Pip::new(&command, cfg.pip.timeout_secs)?.list_installed()?;
            let packages: Vec<InstalledPackage> = index
                .iter()
                .map(|(name, version)| InstalledPackage {
                    name: name.to_string(),
                    version: version.to_string(),
                })
                .collect();
            print_rows(cli.json, &packages, |p| format!("{}=={}", p.name, p.version))?;
        }
        Commands::Mapping { command } => match command {
            MappingCommands::List { project, mapping } => {
                let cfg = load_config(cli.config.as_deref(), Some(project.as_path()))?;
                let path = mapping_path(&cfg, project, mapping.as_deref());
                let entries: Vec<MappingEntry> = load_mapping(&path)?
                    .iter()
                    .map(|(module, package)| MappingEntry {
                        module: module.to_string(),
                        package: package.to_string(),
                    })
                    .collect();
                print_rows(cli.json, &entries, |e| format!("{}\t{}", e.module, e.package))?;
            }
            MappingCommands::Set {
                module,
                package,
                project,
                mapping,
            } => {
                let module = module.trim();
                let package = package.trim();
                if module.is_empty() || package.is_empty() {
                    anyhow::bail!("module and package names must not be blank");
                }
                let cfg = load_config(cli.config.as_deref(), Some(project.as_path()))?;
                let path = mapping_path(&cfg, project, mapping.as_deref());
                let mut table = load_mapping(&path)?;
                table.record(module, package);
                save_mapping(&table, &path)?;
                log::info!("recorded '{}' -> '{}' in {}", module, package, path.display());
                let entry = MappingEntry {
                    module: module.to_string(),
                    package: package.to_string(),
                };
                print_report(cli.json, entry, |e| {
                    vec![format!("mapped {} -> {}", e.module, e.package)]
                })?;
            }
        },
        _ => return Ok(false),
    }
    Ok(true)
}
