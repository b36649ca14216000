//! Check command report data structures.

use std::path::PathBuf;

use rosalina_core::FileStatus;

use super::{
    DocumentFailure, plural,
    output::{Output, Report},
};

/// Report data from comparing generated files with a fresh render.
#[derive(Debug, Default)]
pub struct CheckReport {
    /// Compared files, in document order.
    pub files: Vec<CheckedFile>,
    /// Documents that could not be synthesized.
    pub failures: Vec<DocumentFailure>,
    /// Warning messages.
    pub warnings: Vec<String>,
}

#[derive(Debug)]
pub struct CheckedFile {
    pub path: PathBuf,
    pub status: FileStatus,
}

impl CheckReport {
    /// Whether every generated file matches a fresh render.
    pub fn is_current(&self) -> bool {
        self.failures.is_empty()
            && self
                .files
                .iter()
                .all(|f| matches!(f.status, FileStatus::UpToDate))
    }

    fn with_status(&self, status: FileStatus) -> impl Iterator<Item = &CheckedFile> {
        self.files.iter().filter(move |f| f.status == status)
    }
}

impl Report for CheckReport {
    fn render(&self, out: &mut dyn Output) {
        for warning in &self.warnings {
            out.warning(warning);
        }

        for failure in &self.failures {
            out.error(&format!(
                "{}: {}",
                failure.document.display(),
                failure.message
            ));
        }

        if !self.warnings.is_empty() || !self.failures.is_empty() {
            out.newline();
        }

        for (status, heading) in [
            (FileStatus::Stale, "Stale"),
            (FileStatus::Missing, "Missing"),
        ] {
            let mut files = self.with_status(status).peekable();
            if files.peek().is_none() {
                continue;
            }
            out.section(heading);
            for file in files {
                out.list_item(&file.path.display().to_string());
            }
            out.newline();
        }

        if self.is_current() {
            out.preformatted(&format!(
                "✓ {} up to date",
                plural(self.files.len(), "generated file")
            ));
        } else if self.files.iter().any(|f| f.status != FileStatus::UpToDate) {
            out.preformatted("Run `rosalina generate` to update them.");
        }
    }
}
