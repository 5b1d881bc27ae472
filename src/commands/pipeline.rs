use crate::cli::{Cli, Commands};
use crate::services::config::{load_config, project_relative};
use crate::services::index::PypiIndex;
use crate::services::output::print_report;
use crate::services::pip::Pip;
use crate::services::pipeline::{Collaborators, Pipeline};
use crate::services::project::ensure_project_dir;
use crate::services::prompt::{Prompt, SkipPrompt, StdinPrompt};
use crate::services::stdlib::StdlibFilter;
use std::path::{Path, PathBuf};

/// Uses the given path, or asks the operator for one.
fn project_root(path: Option<&Path>) -> anyhow::Result<PathBuf> {
    let raw = match path {
        Some(p) => p.to_path_buf(),
        None => PathBuf::from(StdinPrompt.ask("Project folder path: ")),
    };
    ensure_project_dir(&raw)
}

pub fn handle_pipeline_commands(cli: &Cli) -> anyhow::Result<bool> {
    match &cli.command {
        Commands::Generate {
            path,
            mapping,
            output,
            strategy,
            pip,
            index_url,
            non_interactive,
        } => {
            let root = project_root(path.as_deref())?;
            let cfg = load_config(cli.config.as_deref(), Some(root.as_path()))?;
            let pipeline = Pipeline {
                mapping_path: project_relative(
                    &root,
                    mapping.as_deref().unwrap_or(cfg.general.mapping_file.as_path()),
                ),
                manifest_path: project_relative(
                    &root,
                    output.as_deref().unwrap_or(cfg.general.manifest_file.as_path()),
                ),
                strategy: strategy.unwrap_or(cfg.general.strategy),
                stdlib: StdlibFilter::load(cfg.general.stdlib_source, &cfg.general.python),
                root,
            };

            let pip_command = match pip {
                Some(p) => vec![p.clone()],
                None => cfg.pip.command.clone(),
            };
            let pip = Pip::new(&pip_command, cfg.pip.timeout_secs)?;
            let mut environment = pip.clone();
            let mut installer = pip;
            let mut index = PypiIndex::new(
                index_url.as_deref().unwrap_or(&cfg.index.url),
                cfg.index.timeout_ms,
            );
            let mut interactive = StdinPrompt;
            let mut skip = SkipPrompt;
            let prompt: &mut dyn Prompt = if *non_interactive {
                &mut skip
            } else {
                &mut interactive
            };

            let report = pipeline.generate(Collaborators {
                environment: &mut environment,
                installer: &mut installer,
                index: &mut index,
                prompt,
            })?;

            print_report(cli.json, report, |r| {
                let mut lines: Vec<String> = r
                    .resolutions
                    .iter()
                    .map(|res| {
                        format!(
                            "{}\t{}\t{}",
                            res.module,
                            res.outcome.as_str(),
                            res.package.as_deref().unwrap_or("-")
                        )
                    })
                    .collect();
                lines.push(format!(
                    "wrote {} ({} packages)",
                    r.manifest_path,
                    r.manifest.len()
                ));
                lines
            })?;
        }
        Commands::Scan { path, strategy } => {
            let root = project_root(path.as_deref())?;
            let cfg = load_config(cli.config.as_deref(), Some(root.as_path()))?;
            let pipeline = Pipeline {
                mapping_path: project_relative(&root, &cfg.general.mapping_file),
                manifest_path: project_relative(&root, &cfg.general.manifest_file),
                strategy: strategy.unwrap_or(cfg.general.strategy),
                stdlib: StdlibFilter::load(cfg.general.stdlib_source, &cfg.general.python),
                root,
            };
            let report = pipeline.scan();
            print_report(cli.json, report, |r| {
                r.modules
                    .iter()
                    .map(|m| format!("{}\t{}", m.name, m.kind.as_str()))
                    .collect()
            })?;
        }
        _ => return Ok(false),
    }
    Ok(true)
}
