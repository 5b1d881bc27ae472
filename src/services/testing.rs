//! Scripted stand-ins for pip, the package index and the operator.

use crate::domain::models::InstalledIndex;
use crate::services::index::PackageIndex;
use crate::services::pip::{Environment, Installer};
use crate::services::prompt::Prompt;
use std::cell::RefCell;
use std::collections::{HashMap, HashSet, VecDeque};
use std::rc::Rc;

#[derive(Default)]
struct PipState {
    installed: InstalledIndex,
    /// package -> (version, failures left before an install succeeds)
    available: HashMap<String, (String, usize)>,
    install_calls: Vec<String>,
    freeze_calls: usize,
}

/// Clones share one environment, so the same fake can act as installer and
/// environment at once.
#[derive(Clone, Default)]
pub struct FakePip {
    state: Rc<RefCell<PipState>>,
}

impl FakePip {
    pub fn preinstall(&self, package: &str, version: &str) {
        self.state.borrow_mut().installed.insert(package, version);
    }

    pub fn installable(&self, package: &str, version: &str) {
        self.installable_after_failures(package, version, 0);
    }

    pub fn installable_after_failures(&self, package: &str, version: &str, failures: usize) {
        self.state
            .borrow_mut()
            .available
            .insert(package.to_string(), (version.to_string(), failures));
    }

    pub fn snapshot(&self) -> InstalledIndex {
        self.state.borrow().installed.clone()
    }

    pub fn install_calls(&self) -> Vec<String> {
        self.state.borrow().install_calls.clone()
    }

    pub fn freeze_calls(&self) -> usize {
        self.state.borrow().freeze_calls
    }

    pub fn reset_calls(&self) {
        let mut state = self.state.borrow_mut();
        state.install_calls.clear();
        state.freeze_calls = 0;
    }
}

impl Installer for FakePip {
    fn install(&mut self, package: &str) -> bool {
        let mut state = self.state.borrow_mut();
        state.install_calls.push(package.to_string());
        let Some((version, failures)) = state.available.get_mut(package) else {
            return false;
        };
        if *failures > 0 {
            *failures -= 1;
            return false;
        }
        let version = version.clone();
        state.installed.insert(package, &version);
        true
    }
}

impl Environment for FakePip {
    fn list_installed(&mut self) -> anyhow::Result<InstalledIndex> {
        let mut state = self.state.borrow_mut();
        state.freeze_calls += 1;
        Ok(state.installed.clone())
    }
}

#[derive(Default)]
pub struct FakeIndex {
    published: HashSet<String>,
    probes: Vec<String>,
}

impl FakeIndex {
    pub fn publish(&mut self, package: &str) {
        self.published.insert(package.to_string());
    }

    pub fn probes(&self) -> Vec<String> {
        self.probes.clone()
    }
}

impl PackageIndex for FakeIndex {
    fn exists(&mut self, package: &str) -> bool {
        self.probes.push(package.to_string());
        self.published.contains(package)
    }
}

#[derive(Default)]
pub struct ScriptedPrompt {
    answers: VecDeque<String>,
    asked: Vec<String>,
}

impl ScriptedPrompt {
    pub fn answer(&mut self, answer: &str) {
        self.answers.push_back(answer.to_string());
    }

    pub fn asked(&self) -> Vec<String> {
        self.asked.clone()
    }
}

impl Prompt for ScriptedPrompt {
    fn ask(&mut self, question: &str) -> String {
        self.asked.push(question.to_string());
        self.answers.pop_front().unwrap_or_default()
    }
}
