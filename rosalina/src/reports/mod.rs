//! Report data structures for commands.
//!
//! This module provides data structures that separate data collection from rendering.
//! Commands build reports, then render them to an Output target.

mod check;
mod clean;
mod generate;
mod output;

use std::{
    fmt::Display,
    path::{Path, PathBuf},
};

pub use check::{CheckReport, CheckedFile};
pub use clean::CleanReport;
pub use generate::{GenerateReport, Generated, GeneratedFile};
pub use output::{Report, TerminalOutput};

/// A document that could not be processed.
#[derive(Debug)]
pub struct DocumentFailure {
    pub document: PathBuf,
    pub message: String,
}

impl DocumentFailure {
    pub fn new(document: &Path, message: impl Display) -> Self {
        Self {
            document: document.to_path_buf(),
            message: message.to_string(),
        }
    }
}

fn plural(count: usize, word: &str) -> String {
    if count == 1 {
        format!("{} {}", count, word)
    } else {
        format!("{} {}s", count, word)
    }
}
