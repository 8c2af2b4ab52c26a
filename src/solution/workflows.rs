//! Workflow reference propagation
//!
//! Workflow definitions embed the renamed identifiers in several shapes:
//! connection fields, parameter keys, metadata values and display labels.
//! There is no common schema path to target, so propagation is plain
//! substring substitution over the raw text.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::Result;

use super::rename::RenameTable;
use super::{WORKFLOWS_DIR, dir_read_error, file_read_error, file_write_error};

/// Apply both rename tables to every workflow document in the bundle.
pub fn propagate_renames(
    bundle: &Path,
    connection_refs: &RenameTable,
    environment_variables: &RenameTable,
) -> Result<()> {
    for path in workflow_files(&bundle.join(WORKFLOWS_DIR))? {
        let contents = fs::read_to_string(&path).map_err(|e| file_read_error(&path, e))?;
        let updated = replace_references(&contents, connection_refs, environment_variables);
        fs::write(&path, updated).map_err(|e| file_write_error(&path, e))?;
    }
    Ok(())
}

/// Substitute every old identifier with its new name.
///
/// Connection references run first; the generated families use the
/// disjoint prefixes `conn_ref_` and `env_var_`, so neither pass can feed
/// the other.
pub fn replace_references(
    text: &str,
    connection_refs: &RenameTable,
    environment_variables: &RenameTable,
) -> String {
    let mut result = text.to_string();
    for (old, new) in connection_refs.iter() {
        result = result.replace(old, new);
    }
    for (old, new) in environment_variables.iter() {
        result = result.replace(old, new);
    }
    result
}

fn workflow_files(root: &Path) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for entry in fs::read_dir(root).map_err(|e| dir_read_error(root, e))? {
        let entry = entry.map_err(|e| dir_read_error(root, e))?;
        let file_type = entry.file_type().map_err(|e| dir_read_error(root, e))?;
        if file_type.is_file() {
            files.push(entry.path());
        }
    }
    files.sort();
    Ok(files)
}
