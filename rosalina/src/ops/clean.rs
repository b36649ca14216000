//! Clean operation - remove generated code-behind files.

use std::{fs, path::PathBuf};

use rosalina_codegen::{SourceRenderer, SynthesisRequest};
use rosalina_codegen_csharp::Generator;
use tracing::{error, info};

use crate::reports::{CleanReport, DocumentFailure};

/// Options for the clean operation.
pub struct CleanOptions {
    /// Whether to preview without deleting.
    pub dry_run: bool,
}

/// Execute the clean operation.
///
/// Only the files that `generate` would produce for `documents` are touched.
pub fn clean(generator: &Generator, documents: &[PathBuf], opts: CleanOptions) -> CleanReport {
    let extension = generator.renderer().file_extension();
    let mut report = CleanReport {
        dry_run: opts.dry_run,
        deleted: Vec::new(),
        failures: Vec::new(),
    };

    for document in documents {
        let output = match SynthesisRequest::new(document) {
            Ok(request) => request.output_path(extension),
            Err(e) => {
                error!("{}: {}", document.display(), e);
                report.failures.push(DocumentFailure::new(document, e));
                continue;
            }
        };

        if !output.is_file() {
            continue;
        }

        if !opts.dry_run {
            if let Err(e) = fs::remove_file(&output) {
                error!("failed to remove '{}': {}", output.display(), e);
                report.failures.push(DocumentFailure::new(
                    document,
                    format!("failed to remove '{}': {}", output.display(), e),
                ));
                continue;
            }
            info!("Removed {}", output.display());
        }

        report.deleted.push(output);
    }

    report
}
