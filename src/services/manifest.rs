use crate::domain::models::InstalledIndex;
use std::collections::BTreeSet;
use std::path::Path;

/// One line per package, sorted: `name==version`, or bare `name` when the
/// environment does not know the package.
pub fn render_manifest(accepted: &BTreeSet<String>, installed: &InstalledIndex) -> Vec<String> {
    accepted
        .iter()
        .map(|name| match installed.version(name) {
            Some(version) => format!("{}=={}", name, version),
            None => name.clone(),
        })
        .collect()
}

pub fn write_manifest(lines: &[String], path: &Path) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    let body: String = lines.iter().map(|l| format!("{}\n", l)).collect();
    std::fs::write(path, body)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{render_manifest, write_manifest};
    use crate::domain::models::InstalledIndex;
    use std::collections::BTreeSet;

    #[test]
    fn versions_come_from_case_insensitive_lookup() {
        let accepted: BTreeSet<String> = ["PyYAML", "requests", "ghost"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        let installed: InstalledIndex = [("pyyaml", "6.0.1"), ("Requests", "2.31.0")]
            .into_iter()
            .collect();

        assert_eq!(
            render_manifest(&accepted, &installed),
            vec!["PyYAML==6.0.1", "ghost", "requests==2.31.0"]
        );
    }

    #[test]
    fn write_overwrites_previous_manifest() {
        let tmp = tempfile::TempDir::new().unwrap();
        let path = tmp.path().join("requirements_make.txt");
        std::fs::write(&path, "stale==0.0.1\nold\n").unwrap();

        write_manifest(&["flask==3.0.2".to_string()], &path).unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "flask==3.0.2\n");

        write_manifest(&[], &path).unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "");
    }
}
