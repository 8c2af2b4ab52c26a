//! Error types and handling for solclone
//!
//! Uses `thiserror` for error definitions and `miette` for pretty diagnostics.

use miette::Diagnostic;
use thiserror::Error;

/// Main error type for solclone operations
#[derive(Error, Diagnostic, Debug)]
pub enum SolcloneError {
    // File system errors
    #[error("Source solution not found: {path}")]
    #[diagnostic(
        code(solclone::fs::source_not_found),
        help("Check that the source path points to an unpacked solution directory")
    )]
    SourceNotFound { path: String },

    #[error("Failed to copy solution to {path}")]
    #[diagnostic(code(solclone::fs::copy_failed))]
    CopyFailed { path: String, reason: String },

    #[error("Failed to read file: {path}")]
    #[diagnostic(code(solclone::fs::read_failed))]
    FileReadFailed { path: String, reason: String },

    #[error("Failed to write file: {path}")]
    #[diagnostic(code(solclone::fs::write_failed))]
    FileWriteFailed { path: String, reason: String },

    #[error("Failed to read directory: {path}")]
    #[diagnostic(code(solclone::fs::dir_read_failed))]
    DirReadFailed { path: String, reason: String },

    #[error("IO error: {message}")]
    #[diagnostic(code(solclone::fs::io_error))]
    IoError { message: String },

    // Structural errors
    #[error("Malformed XML: {reason}")]
    #[diagnostic(code(solclone::xml::malformed))]
    XmlMalformed { reason: String },

    #[error("Solution manifest has no {element} record")]
    #[diagnostic(
        code(solclone::manifest::malformed),
        help("solution.xml must contain a SolutionManifest record with a UniqueName")
    )]
    ManifestMalformed { element: String },

    #[error("customizations.xml has no connectionreferences container")]
    #[diagnostic(code(solclone::customizations::no_references))]
    MissingConnectionReferences,

    #[error("Element <{element}> is missing attribute '{attribute}'")]
    #[diagnostic(code(solclone::xml::missing_attribute))]
    MissingAttribute { element: String, attribute: String },

    // Rename table errors
    #[error("Connection reference '{name}' has no entry in the rename table")]
    #[diagnostic(code(solclone::rename::unknown_reference))]
    UnknownConnectionReference { name: String },
}

impl From<std::io::Error> for SolcloneError {
    fn from(err: std::io::Error) -> Self {
        SolcloneError::IoError {
            message: err.to_string(),
        }
    }
}

/// Result type alias using miette for error handling
pub type Result<T> = miette::Result<T, SolcloneError>;
