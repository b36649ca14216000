//! Clean command report data structures.

use std::path::PathBuf;

use super::{
    DocumentFailure,
    output::{Output, Report},
};

/// Report data from removing generated files.
#[derive(Debug)]
pub struct CleanReport {
    /// Whether this was a dry run.
    pub dry_run: bool,
    /// Deleted files (or files that would be deleted in dry run).
    pub deleted: Vec<PathBuf>,
    /// Documents whose generated file could not be removed.
    pub failures: Vec<DocumentFailure>,
}

impl CleanReport {
    pub fn has_failures(&self) -> bool {
        !self.failures.is_empty()
    }
}

impl Report for CleanReport {
    fn render(&self, out: &mut dyn Output) {
        for failure in &self.failures {
            out.error(&format!(
                "{}: {}",
                failure.document.display(),
                failure.message
            ));
        }

        if self.deleted.is_empty() {
            if !self.has_failures() {
                out.preformatted("No generated files found.");
            }
            return;
        }

        if self.dry_run {
            out.section("Would delete");
        } else {
            out.section("Deleted");
        }
        for path in &self.deleted {
            out.removed_item(&path.display().to_string());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reports::output::RecordingOutput;

    #[test]
    fn test_nothing_to_clean() {
        let report = CleanReport {
            dry_run: false,
            deleted: Vec::new(),
            failures: Vec::new(),
        };
        assert_eq!(
            RecordingOutput::render(&report),
            vec!["No generated files found."]
        );
    }

    #[test]
    fn test_dry_run_heading() {
        let report = CleanReport {
            dry_run: true,
            deleted: vec![PathBuf::from("Menu.g.cs")],
            failures: Vec::new(),
        };
        assert_eq!(
            RecordingOutput::render(&report),
            vec!["Would delete:", "  - Menu.g.cs"]
        );
    }
}
