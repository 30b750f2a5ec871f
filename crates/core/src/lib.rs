//! Core library: configuration, performer folder scanning and the import pipeline.

use std::path::PathBuf;
use thiserror::Error;

pub mod config;
pub mod models;
pub mod pipeline;
pub mod scanner;

pub use models::{AutotagStatus, EntryOutcome, ImportSummary, PerformerStatus};
pub use pipeline::{AssumeYes, ConfirmPrompt, Importer};
pub use stash_api::PerformerId;

#[derive(Debug, Error)]
pub enum ImportError {
    #[error("the provided path '{}' is not a valid directory", .0.display())]
    InvalidRoot(PathBuf),
    #[error("failed to read directory: {0}")]
    Walk(#[from] walkdir::Error),
    #[error("confirmation prompt failed: {0}")]
    Prompt(String),
}
