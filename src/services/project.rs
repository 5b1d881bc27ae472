use crate::domain::errors::ReqscanError;
use std::path::{Path, PathBuf};

/// A module is internal when the project root holds a same-named folder or
/// `<name>.py` directly.
pub fn is_project_module(name: &str, root: &Path) -> bool {
    root.join(name).is_dir() || root.join(format!("{}.py", name)).is_file()
}

pub fn ensure_project_dir(path: &Path) -> anyhow::Result<PathBuf> {
    if path.as_os_str().is_empty() {
        return Err(ReqscanError::EmptyProjectPath.into());
    }
    if !path.is_dir() {
        return Err(ReqscanError::InvalidProjectPath(path.to_path_buf()).into());
    }
    Ok(path.to_path_buf())
}
