//! Command implementations for the solclone CLI

pub mod duplicate;
