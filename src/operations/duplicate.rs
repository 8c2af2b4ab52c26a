//! Solution duplication pipeline
//!
//! Runs the whole copy-and-rename sequence: copy the tree, rename the
//! manifest, rename connection references and environment variables, then
//! propagate both rename tables into the workflow definitions.

use std::path::PathBuf;

use crate::error::Result;
use crate::solution::{MANIFEST_FILE, connection_refs, copy, env_vars, manifest, workflows};

/// Configuration options for a duplication run
#[derive(Debug, Clone)]
pub struct DuplicateOptions {
    pub name: String,
    pub source: PathBuf,
    pub dest: PathBuf,
}

/// High-level duplication operation
pub struct DuplicateOperation {
    options: DuplicateOptions,
}

impl DuplicateOperation {
    pub fn new(options: DuplicateOptions) -> Self {
        Self { options }
    }

    /// Execute the pipeline against the destination copy.
    ///
    /// Any error aborts the run and leaves the destination partially
    /// modified; a re-run starts over from a fresh copy.
    pub fn execute(&self) -> Result<()> {
        let DuplicateOptions { name, source, dest } = &self.options;

        copy::copy_bundle(source, dest)?;
        manifest::rename_manifest(&dest.join(MANIFEST_FILE), name)?;

        let connection_refs = connection_refs::rename_in_customizations(dest, name)?;
        let environment_variables = env_vars::rename_definitions(dest, name)?;

        workflows::propagate_renames(dest, &connection_refs, &environment_variables)
    }

    pub fn options(&self) -> &DuplicateOptions {
        &self.options
    }
}
