//! Recursive bundle copying

use std::fs;
use std::io;
use std::path::Path;

use crate::error::{Result, SolcloneError};

/// Copy the source bundle to `dest`, replacing whatever was there.
///
/// The destination is removed entirely before copying, so its final
/// content depends only on the source.
pub fn copy_bundle(source: &Path, dest: &Path) -> Result<()> {
    if !source.is_dir() {
        return Err(SolcloneError::SourceNotFound {
            path: source.display().to_string(),
        });
    }

    if dest.exists() {
        fs::remove_dir_all(dest).map_err(|e| copy_error(dest, e))?;
    }
    fs::create_dir_all(dest).map_err(|e| copy_error(dest, e))?;

    copy_dir_recursive(source, dest).map_err(|e| copy_error(dest, e))
}

fn copy_error(dest: &Path, e: io::Error) -> SolcloneError {
    SolcloneError::CopyFailed {
        path: dest.display().to_string(),
        reason: e.to_string(),
    }
}

fn copy_dir_recursive(src: &Path, dst: &Path) -> io::Result<()> {
    for entry in fs::read_dir(src)? {
        let entry = entry?;
        let dst_path = dst.join(entry.file_name());
        if entry.file_type()?.is_dir() {
            fs::create_dir_all(&dst_path)?;
            copy_dir_recursive(&entry.path(), &dst_path)?;
        } else {
            fs::copy(entry.path(), &dst_path)?;
        }
    }
    Ok(())
}
