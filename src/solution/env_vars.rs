//! Environment variable definition renaming
//!
//! One definition document per variable lives under
//! `environmentvariabledefinitions/`; the root element's `schemaname`
//! becomes `env_var_<solution>_<index>`. A single counter runs across all
//! definitions, so generated names stay collision-free.

use std::fs;
use std::path::{Path, PathBuf};

use quick_xml::events::Event;
use quick_xml::{Reader, Writer};

use crate::error::{Result, SolcloneError};

use super::rename::RenameTable;
use super::{
    ENV_VAR_DIR, ENV_VAR_FILE, attribute_value, dir_read_error, element_name, file_read_error,
    file_write_error, with_attribute, xml_error,
};

/// Attribute holding a definition's schema name
const SCHEMA_NAME_ATTR: &str = "schemaname";

/// New schema name for the definition at `index`
pub fn environment_variable_name(prefix: &str, index: usize) -> String {
    format!("env_var_{prefix}_{index}")
}

/// Rename every environment variable definition in the bundle.
///
/// Subdirectories are processed in name order, so the numbering does not
/// depend on filesystem listing order. Returns the old→new table keyed by
/// the original schema names.
pub fn rename_definitions(bundle: &Path, solution_name: &str) -> Result<RenameTable> {
    let mut table = RenameTable::new();
    for folder in definition_folders(&bundle.join(ENV_VAR_DIR))? {
        let path = folder.join(ENV_VAR_FILE);
        let contents = fs::read_to_string(&path).map_err(|e| file_read_error(&path, e))?;

        let old_name = schema_name(&contents)?;
        let new_name = environment_variable_name(solution_name, table.len());
        let updated = set_schema_name(&contents, &new_name)?;

        fs::write(&path, updated).map_err(|e| file_write_error(&path, e))?;
        table.insert(old_name, new_name);
    }
    Ok(table)
}

/// Read the schema name off the document's root element.
pub fn schema_name(xml: &str) -> Result<String> {
    let mut reader = Reader::from_str(xml);
    loop {
        match reader.read_event().map_err(|e| xml_error(e))? {
            Event::Start(e) | Event::Empty(e) => {
                return attribute_value(&e, SCHEMA_NAME_ATTR)?.ok_or_else(|| {
                    SolcloneError::MissingAttribute {
                        element: element_name(&e),
                        attribute: SCHEMA_NAME_ATTR.to_string(),
                    }
                });
            }
            Event::Eof => return Err(xml_error("document has no root element")),
            _ => {}
        }
    }
}

/// Replace the root element's schema name, leaving the rest untouched.
pub fn set_schema_name(xml: &str, name: &str) -> Result<String> {
    let mut reader = Reader::from_str(xml);
    let mut writer = Writer::new(Vec::new());
    let mut root_seen = false;

    loop {
        match reader.read_event().map_err(|e| xml_error(e))? {
            Event::Start(e) if !root_seen => {
                root_seen = true;
                let updated = with_attribute(&e, SCHEMA_NAME_ATTR, name)?;
                writer
                    .write_event(Event::Start(updated))
                    .map_err(|err| xml_error(err))?;
            }
            Event::Empty(e) if !root_seen => {
                root_seen = true;
                let updated = with_attribute(&e, SCHEMA_NAME_ATTR, name)?;
                writer
                    .write_event(Event::Empty(updated))
                    .map_err(|err| xml_error(err))?;
            }
            Event::Eof => break,
            other => writer.write_event(other).map_err(|err| xml_error(err))?,
        }
    }

    if !root_seen {
        return Err(xml_error("document has no root element"));
    }
    String::from_utf8(writer.into_inner()).map_err(|e| xml_error(e))
}

fn definition_folders(root: &Path) -> Result<Vec<PathBuf>> {
    let mut folders = Vec::new();
    for entry in fs::read_dir(root).map_err(|e| dir_read_error(root, e))? {
        let entry = entry.map_err(|e| dir_read_error(root, e))?;
        let file_type = entry.file_type().map_err(|e| dir_read_error(root, e))?;
        if file_type.is_dir() {
            folders.push(entry.path());
        }
    }
    folders.sort();
    Ok(folders)
}
