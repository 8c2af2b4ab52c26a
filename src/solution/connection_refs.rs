//! Connection reference renaming
//!
//! `customizations.xml` carries a `connectionreferences` container whose
//! entries are renamed to `conn_ref_<solution>_<index>`, indexed in
//! document order. The resulting table drives workflow propagation.

use std::fs;
use std::path::Path;

use quick_xml::events::{BytesStart, Event};
use quick_xml::{Reader, Writer};

use crate::error::{Result, SolcloneError};

use super::rename::RenameTable;
use super::{
    CUSTOMIZATIONS_FILE, attribute_value, element_name, file_read_error, file_write_error,
    with_attribute, xml_error,
};

/// Attribute holding a reference's logical name
const LOGICAL_NAME_ATTR: &str = "connectionreferencelogicalname";

/// Rename every connection reference in the bundle's customizations file.
///
/// Returns the old→new table for workflow propagation.
pub fn rename_in_customizations(bundle: &Path, solution_name: &str) -> Result<RenameTable> {
    let path = bundle.join(CUSTOMIZATIONS_FILE);
    let contents = fs::read_to_string(&path).map_err(|e| file_read_error(&path, e))?;

    let references = find_connection_references(&contents)?;
    let table = rename_connection_references(&references, solution_name);
    let updated = apply_rename_table(&contents, &table)?;

    fs::write(&path, updated).map_err(|e| file_write_error(&path, e))?;
    Ok(table)
}

/// New logical name for the reference at `index`
pub fn connection_reference_name(prefix: &str, index: usize) -> String {
    format!("conn_ref_{prefix}_{index}")
}

/// Collect the logical names of all connection references, in document order.
pub fn find_connection_references(xml: &str) -> Result<Vec<String>> {
    let mut reader = Reader::from_str(xml);
    let mut ancestors: Vec<String> = Vec::new();
    let mut container_found = false;
    let mut references = Vec::new();

    loop {
        match reader.read_event().map_err(|e| xml_error(e))? {
            Event::Start(e) => {
                let tag = element_name(&e);
                if is_container(&ancestors, &tag) {
                    container_found = true;
                } else if is_reference(&ancestors, &tag) {
                    references.push(logical_name(&e)?);
                }
                ancestors.push(tag);
            }
            Event::Empty(e) => {
                let tag = element_name(&e);
                if is_container(&ancestors, &tag) {
                    container_found = true;
                } else if is_reference(&ancestors, &tag) {
                    references.push(logical_name(&e)?);
                }
            }
            Event::End(_) => {
                ancestors.pop();
            }
            Event::Eof => break,
            _ => {}
        }
    }

    if !container_found {
        return Err(SolcloneError::MissingConnectionReferences);
    }
    Ok(references)
}

/// Build the rename table: position in discovery order becomes the suffix.
pub fn rename_connection_references(references: &[String], prefix: &str) -> RenameTable {
    let mut table = RenameTable::new();
    for (index, reference) in references.iter().enumerate() {
        table.insert(reference.clone(), connection_reference_name(prefix, index));
    }
    table
}

/// Rewrite every reference's logical name from the table.
///
/// Sibling attributes and child elements pass through untouched. A
/// reference missing from the table is a fatal lookup error.
pub fn apply_rename_table(xml: &str, table: &RenameTable) -> Result<String> {
    let mut reader = Reader::from_str(xml);
    let mut writer = Writer::new(Vec::new());
    let mut ancestors: Vec<String> = Vec::new();

    loop {
        match reader.read_event().map_err(|e| xml_error(e))? {
            Event::Start(e) => {
                let tag = element_name(&e);
                if is_reference(&ancestors, &tag) {
                    let renamed = rename_element(&e, table)?;
                    writer
                        .write_event(Event::Start(renamed))
                        .map_err(|err| xml_error(err))?;
                } else {
                    writer
                        .write_event(Event::Start(e))
                        .map_err(|err| xml_error(err))?;
                }
                ancestors.push(tag);
            }
            Event::Empty(e) => {
                let tag = element_name(&e);
                if is_reference(&ancestors, &tag) {
                    let renamed = rename_element(&e, table)?;
                    writer
                        .write_event(Event::Empty(renamed))
                        .map_err(|err| xml_error(err))?;
                } else {
                    writer
                        .write_event(Event::Empty(e))
                        .map_err(|err| xml_error(err))?;
                }
            }
            Event::End(e) => {
                ancestors.pop();
                writer
                    .write_event(Event::End(e))
                    .map_err(|err| xml_error(err))?;
            }
            Event::Eof => break,
            other => writer.write_event(other).map_err(|err| xml_error(err))?,
        }
    }

    String::from_utf8(writer.into_inner()).map_err(|e| xml_error(e))
}

fn rename_element(e: &BytesStart, table: &RenameTable) -> Result<BytesStart<'static>> {
    let old = logical_name(e)?;
    let new = table
        .get(&old)
        .ok_or_else(|| SolcloneError::UnknownConnectionReference { name: old.clone() })?;
    with_attribute(e, LOGICAL_NAME_ATTR, new)
}

fn logical_name(e: &BytesStart) -> Result<String> {
    attribute_value(e, LOGICAL_NAME_ATTR)?.ok_or_else(|| SolcloneError::MissingAttribute {
        element: element_name(e),
        attribute: LOGICAL_NAME_ATTR.to_string(),
    })
}

fn is_container(ancestors: &[String], tag: &str) -> bool {
    ancestors.len() == 1 && tag == "connectionreferences"
}

fn is_reference(ancestors: &[String], tag: &str) -> bool {
    ancestors.len() == 2 && ancestors[1] == "connectionreferences" && tag == "connectionreference"
}
