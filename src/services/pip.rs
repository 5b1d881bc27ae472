use crate::domain::errors::ReqscanError;
use crate::domain::models::InstalledIndex;
use std::process::{Command, Stdio};
use std::time::{Duration, Instant};

pub trait Installer {
    /// Install `package`; `true` on success. Failure reasons are not interpreted.
    fn install(&mut self, package: &str) -> bool;
}

pub trait Environment {
    fn list_installed(&mut self) -> anyhow::Result<InstalledIndex>;
}

/// `pip freeze` output parser. Only `name==version` lines count.
pub fn parse_freeze(text: &str) -> InstalledIndex {
    text.lines()
        .map(str::trim)
        .filter(|l| !l.is_empty() && !l.starts_with('#'))
        .filter_map(|l| l.split_once("=="))
        .map(|(name, version)| (name.trim(), version.trim()))
        .filter(|(name, _)| !name.is_empty())
        .collect()
}

#[derive(Debug, Clone)]
pub struct Pip {
    program: String,
    base_args: Vec<String>,
    timeout: Option<Duration>,
}

impl Pip {
    /// `command` is the argv prefix, e.g. `["python3", "-m", "pip"]`.
    pub fn new(command: &[String], timeout_secs: u64) -> anyhow::Result<Self> {
        let Some((program, rest)) = command.split_first() else {
            anyhow::bail!("pip command is empty");
        };
        Ok(Self {
            program: program.clone(),
            base_args: rest.to_vec(),
            timeout: (timeout_secs > 0).then(|| Duration::from_secs(timeout_secs)),
        })
    }

    fn command(&self) -> Command {
        let mut cmd = Command::new(&self.program);
        cmd.args(&self.base_args);
        cmd
    }

    fn run_install(&self, package: &str) -> anyhow::Result<bool> {
        let mut child = self
            .command()
            .args(["install", package])
            .stdin(Stdio::null())
            .stdout(Stdio::from(std::io::stderr()))
            .spawn()?;
        let Some(limit) = self.timeout else {
            return Ok(child.wait()?.success());
        };
        let started = Instant::now();
        loop {
            if let Some(status) = child.try_wait()? {
                return Ok(status.success());
            }
            if started.elapsed() >= limit {
                log::warn!("install of '{}' exceeded {}s, killing it", package, limit.as_secs());
                let _ = child.kill();
                let _ = child.wait();
                return Ok(false);
            }
            std::thread::sleep(Duration::from_millis(100));
        }
    }
}

impl Installer for Pip {
    fn install(&mut self, package: &str) -> bool {
        match self.run_install(package) {
            Ok(true) => {
                log::info!("installed '{}'", package);
                true
            }
            Ok(false) => {
                log::info!("install failed '{}'", package);
                false
            }
            Err(e) => {
                log::info!("install failed '{}': {}", package, e);
                false
            }
        }
    }
}

impl Environment for Pip {
    fn list_installed(&mut self) -> anyhow::Result<InstalledIndex> {
        let out = self
            .command()
            .arg("freeze")
            .stdin(Stdio::null())
            .output()
            .map_err(|e| ReqscanError::EnvironmentQuery(format!("{}: {}", self.program, e)))?;
        if !out.status.success() {
            return Err(ReqscanError::EnvironmentQuery(format!(
                "{} freeze exited with {}",
                self.program, out.status
            ))
            .into());
        }
        let index = parse_freeze(&String::from_utf8_lossy(&out.stdout));
        log::debug!("environment reports {} installed packages", index.len());
        Ok(index)
    }
}
