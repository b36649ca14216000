//! Generate command report data structures.

use std::path::PathBuf;

use rosalina_core::WriteResult;

use super::{
    DocumentFailure, plural,
    output::{Output, Report},
};

/// Report data from code generation.
#[derive(Debug)]
pub struct GenerateReport {
    /// Whether this was a dry run.
    pub dry_run: bool,
    /// Files produced, in document order.
    pub files: Vec<GeneratedFile>,
    /// Documents that produced nothing.
    pub failures: Vec<DocumentFailure>,
}

#[derive(Debug)]
pub struct GeneratedFile {
    pub path: PathBuf,
    pub result: Generated,
}

/// What happened to a generated file.
#[derive(Debug)]
pub enum Generated {
    /// Written to disk.
    Written(WriteResult),
    /// Dry-run content.
    Preview(String),
}

impl GenerateReport {
    pub fn has_failures(&self) -> bool {
        !self.failures.is_empty()
    }
}

impl Report for GenerateReport {
    fn render(&self, out: &mut dyn Output) {
        for failure in &self.failures {
            out.error(&format!(
                "{}: {}",
                failure.document.display(),
                failure.message
            ));
        }
        if self.has_failures() {
            out.newline();
        }

        if self.dry_run {
            for file in &self.files {
                if let Generated::Preview(text) = &file.result {
                    out.divider(&file.path.display().to_string());
                    out.preformatted(text.trim_end_matches('\n'));
                    out.newline();
                }
            }
        } else if !self.files.is_empty() {
            out.section("Generated");
            for file in &self.files {
                let path = file.path.display();
                match &file.result {
                    Generated::Written(WriteResult::Created) => out.added_item(&path.to_string()),
                    Generated::Written(WriteResult::Updated) => {
                        out.list_item(&format!("{} (updated)", path))
                    }
                    Generated::Written(WriteResult::Unchanged) => {
                        out.list_item(&format!("{} (unchanged)", path))
                    }
                    Generated::Preview(_) => {}
                }
            }
            out.newline();
        }

        let verb = if self.dry_run { "previewed" } else { "generated" };
        let mut summary = format!("{} {}", plural(self.files.len(), "file"), verb);
        if self.has_failures() {
            summary.push_str(&format!(", {} failed", self.failures.len()));
        }
        out.preformatted(&summary);
    }
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use super::*;
    use crate::reports::output::RecordingOutput;

    #[test]
    fn test_written_files() {
        let report = GenerateReport {
            dry_run: false,
            files: vec![
                GeneratedFile {
                    path: PathBuf::from("UI/Menu.g.cs"),
                    result: Generated::Written(WriteResult::Created),
                },
                GeneratedFile {
                    path: PathBuf::from("UI/Hud.g.cs"),
                    result: Generated::Written(WriteResult::Unchanged),
                },
            ],
            failures: vec![DocumentFailure::new(Path::new("UI/"), "bad path")],
        };

        assert_eq!(
            RecordingOutput::render(&report),
            vec![
                "error: UI/: bad path",
                "",
                "Generated:",
                "  + UI/Menu.g.cs",
                "  - UI/Hud.g.cs (unchanged)",
                "",
                "2 files generated, 1 failed",
            ]
        );
    }

    #[test]
    fn test_preview() {
        let report = GenerateReport {
            dry_run: true,
            files: vec![GeneratedFile {
                path: PathBuf::from("Menu.g.cs"),
                result: Generated::Preview("class Menu\n{\n}\n".to_string()),
            }],
            failures: Vec::new(),
        };

        assert_eq!(
            RecordingOutput::render(&report),
            vec![
                "── Menu.g.cs ──",
                "class Menu\n{\n}",
                "",
                "1 file previewed"
            ]
        );
    }
}
