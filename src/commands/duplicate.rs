//! Duplicate command CLI wrapper
//!
//! Thin CLI layer that delegates the pipeline to operations/duplicate.rs
//! and reports the outcome.

use console::Style;

use crate::error::Result;
use crate::operations::duplicate::{DuplicateOperation, DuplicateOptions};

/// Run the duplicate command
pub fn run(options: DuplicateOptions) -> Result<()> {
    let operation = DuplicateOperation::new(options);
    operation.execute()?;

    println!(
        "{} solution duplicated to {}",
        Style::new().green().bold().apply_to("Success:"),
        operation.options().dest.display()
    );
    Ok(())
}
