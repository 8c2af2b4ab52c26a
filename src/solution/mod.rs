//! Solution bundle model and per-file renamers
//!
//! An unpacked solution bundle is a directory tree:
//!
//! ```text
//! <bundle>/
//!   solution.xml
//!   customizations.xml
//!   environmentvariabledefinitions/<variable>/environmentvariabledefinition.xml
//!   Workflows/<workflow definitions>
//! ```
//!
//! The XML documents are edited as event streams so that untouched content
//! round-trips byte-identical; only rewritten tags are re-serialized.

pub mod connection_refs;
pub mod copy;
pub mod env_vars;
pub mod manifest;
pub mod rename;
pub mod workflows;

use std::path::Path;

use quick_xml::events::BytesStart;

use crate::error::{Result, SolcloneError};

/// Manifest document at the bundle root
pub const MANIFEST_FILE: &str = "solution.xml";
/// Customizations document at the bundle root
pub const CUSTOMIZATIONS_FILE: &str = "customizations.xml";
/// Directory holding one subdirectory per environment variable
pub const ENV_VAR_DIR: &str = "environmentvariabledefinitions";
/// Definition document inside each variable subdirectory
pub const ENV_VAR_FILE: &str = "environmentvariabledefinition.xml";
/// Directory holding the workflow definition documents
pub const WORKFLOWS_DIR: &str = "Workflows";

pub(crate) fn file_read_error(path: &Path, e: std::io::Error) -> SolcloneError {
    SolcloneError::FileReadFailed {
        path: path.display().to_string(),
        reason: e.to_string(),
    }
}

pub(crate) fn file_write_error(path: &Path, e: std::io::Error) -> SolcloneError {
    SolcloneError::FileWriteFailed {
        path: path.display().to_string(),
        reason: e.to_string(),
    }
}

pub(crate) fn dir_read_error(path: &Path, e: std::io::Error) -> SolcloneError {
    SolcloneError::DirReadFailed {
        path: path.display().to_string(),
        reason: e.to_string(),
    }
}

pub(crate) fn xml_error(e: impl std::fmt::Display) -> SolcloneError {
    SolcloneError::XmlMalformed {
        reason: e.to_string(),
    }
}

/// Element name as UTF-8 text
pub(crate) fn element_name(e: &BytesStart) -> String {
    String::from_utf8_lossy(e.name().as_ref()).into_owned()
}

/// Read an attribute's unescaped value, if present
pub(crate) fn attribute_value(e: &BytesStart, key: &str) -> Result<Option<String>> {
    for attr in e.attributes() {
        let attr = attr.map_err(|err| xml_error(err))?;
        if attr.key.as_ref() == key.as_bytes() {
            let value = attr.unescape_value().map_err(|err| xml_error(err))?;
            return Ok(Some(value.into_owned()));
        }
    }
    Ok(None)
}

/// Rebuild a start tag with one attribute set to `value`.
///
/// Remaining attributes keep their original order and raw text; the
/// attribute is appended if it was not present.
pub(crate) fn with_attribute(
    e: &BytesStart,
    key: &str,
    value: &str,
) -> Result<BytesStart<'static>> {
    let mut updated = BytesStart::new(element_name(e));
    let mut replaced = false;
    for attr in e.attributes() {
        let attr = attr.map_err(|err| xml_error(err))?;
        if attr.key.as_ref() == key.as_bytes() {
            updated.push_attribute((key, value));
            replaced = true;
        } else {
            updated.push_attribute(attr);
        }
    }
    if !replaced {
        updated.push_attribute((key, value));
    }
    Ok(updated)
}
