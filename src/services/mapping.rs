use crate::domain::errors::ReqscanError;
use crate::domain::models::MappingTable;
use std::path::Path;

/// A missing file is an empty table.
pub fn load_mapping(path: &Path) -> anyhow::Result<MappingTable> {
    if !path.exists() {
        return Ok(MappingTable::default());
    }
    let raw = std::fs::read_to_string(path)?;
    serde_json::from_str(&raw).map_err(|e| {
        ReqscanError::MalformedMapping {
            path: path.to_path_buf(),
            reason: e.to_string(),
        }
        .into()
    })
}

pub fn save_mapping(table: &MappingTable, path: &Path) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    let mut body = serde_json::to_string_pretty(table)?;
    body.push('\n');
    std::fs::write(path, body)?;
    Ok(())
}
