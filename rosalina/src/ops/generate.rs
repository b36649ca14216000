//! Generate operation - synthesize and persist code-behind files.

use std::path::PathBuf;

use rosalina_codegen_csharp::Generator;
use tracing::{error, info};

use crate::reports::{DocumentFailure, GenerateReport, Generated, GeneratedFile};

/// Options for the generate operation.
pub struct GenerateOptions {
    /// Whether to preview without writing files.
    pub dry_run: bool,
}

/// Execute the generate operation.
///
/// Every document is processed even when an earlier one fails; failures are
/// collected in the report.
pub fn generate(
    generator: &Generator,
    documents: &[PathBuf],
    opts: GenerateOptions,
) -> GenerateReport {
    let mut report = GenerateReport {
        dry_run: opts.dry_run,
        files: Vec::new(),
        failures: Vec::new(),
    };

    for document in documents {
        info!("Generating UI code behind for {}", document.display());

        let file = match generator.synthesize(document) {
            Ok(file) => file,
            Err(e) => {
                error!("{}: {}", document.display(), e);
                report.failures.push(DocumentFailure::new(document, e));
                continue;
            }
        };

        let result = if opts.dry_run {
            Generated::Preview(file.text().to_string())
        } else {
            match file.write() {
                Ok(result) => Generated::Written(result),
                Err(e) => {
                    error!("{}: {:#}", document.display(), e);
                    report
                        .failures
                        .push(DocumentFailure::new(document, format!("{:#}", e)));
                    continue;
                }
            }
        };

        if let Some(name) = file.path().file_name() {
            info!("Done generating: {}", name.to_string_lossy());
        }

        report.files.push(GeneratedFile {
            path: file.path().to_path_buf(),
            result,
        });
    }

    report
}
