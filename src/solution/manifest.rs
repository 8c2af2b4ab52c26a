//! Manifest renaming
//!
//! `solution.xml` holds the solution's machine name in
//! `SolutionManifest/UniqueName` and its display text in the
//! `LocalizedName` records; both are set to the new name.

use std::fs;
use std::path::Path;

use quick_xml::events::{BytesText, Event};
use quick_xml::{Reader, Writer};

use crate::error::{Result, SolcloneError};

use super::{element_name, file_read_error, file_write_error, with_attribute, xml_error};

/// Rewrite the manifest at `path` in place with the new solution name.
pub fn rename_manifest(path: &Path, name: &str) -> Result<()> {
    let contents = fs::read_to_string(path).map_err(|e| file_read_error(path, e))?;
    let updated = set_solution_name(&contents, name)?;
    fs::write(path, updated).map_err(|e| file_write_error(path, e))
}

/// Set the unique name and every localized display name to `name`.
///
/// Everything else in the document passes through untouched. Fails when
/// the `SolutionManifest/UniqueName` record never appears.
pub fn set_solution_name(xml: &str, name: &str) -> Result<String> {
    let mut reader = Reader::from_str(xml);
    let mut writer = Writer::new(Vec::new());
    let mut ancestors: Vec<String> = Vec::new();
    let mut unique_name_set = false;

    loop {
        match reader.read_event().map_err(|e| xml_error(e))? {
            Event::Start(e) => {
                let tag = element_name(&e);
                if is_unique_name(&ancestors, &tag) {
                    writer
                        .write_event(Event::Start(e.clone()))
                        .map_err(|err| xml_error(err))?;
                    writer
                        .write_event(Event::Text(BytesText::new(name)))
                        .map_err(|err| xml_error(err))?;
                    reader.read_to_end(e.name()).map_err(|err| xml_error(err))?;
                    writer
                        .write_event(Event::End(e.to_end()))
                        .map_err(|err| xml_error(err))?;
                    unique_name_set = true;
                } else if is_localized_name(&ancestors, &tag) {
                    let updated = with_attribute(&e, "description", name)?;
                    writer
                        .write_event(Event::Start(updated))
                        .map_err(|err| xml_error(err))?;
                    ancestors.push(tag);
                } else {
                    writer
                        .write_event(Event::Start(e))
                        .map_err(|err| xml_error(err))?;
                    ancestors.push(tag);
                }
            }
            Event::Empty(e) => {
                let tag = element_name(&e);
                if is_unique_name(&ancestors, &tag) {
                    // An empty UniqueName still receives the new name as text.
                    writer
                        .write_event(Event::Start(e.clone()))
                        .map_err(|err| xml_error(err))?;
                    writer
                        .write_event(Event::Text(BytesText::new(name)))
                        .map_err(|err| xml_error(err))?;
                    writer
                        .write_event(Event::End(e.to_end()))
                        .map_err(|err| xml_error(err))?;
                    unique_name_set = true;
                } else if is_localized_name(&ancestors, &tag) {
                    let updated = with_attribute(&e, "description", name)?;
                    writer
                        .write_event(Event::Empty(updated))
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

    if !unique_name_set {
        return Err(SolcloneError::ManifestMalformed {
            element: "SolutionManifest/UniqueName".to_string(),
        });
    }

    String::from_utf8(writer.into_inner()).map_err(|e| xml_error(e))
}

fn is_unique_name(ancestors: &[String], tag: &str) -> bool {
    ancestors.len() == 2 && ancestors[1] == "SolutionManifest" && tag == "UniqueName"
}

fn is_localized_name(ancestors: &[String], tag: &str) -> bool {
    ancestors.len() == 3
        && ancestors[1] == "SolutionManifest"
        && ancestors[2] == "LocalizedNames"
        && tag == "LocalizedName"
}
