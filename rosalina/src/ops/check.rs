//! Check operation - compare generated files with a fresh render.

use std::path::PathBuf;

use rosalina_codegen::SynthesisRequest;
use rosalina_codegen_csharp::Generator;
use rosalina_core::validate_type_name;
use tracing::{debug, error, warn};

use crate::reports::{CheckReport, CheckedFile, DocumentFailure};

/// Execute the check operation.
///
/// Nothing is written. Type names that C# would reject are reported as
/// warnings; the generated file is still compared.
pub fn check(generator: &Generator, documents: &[PathBuf]) -> CheckReport {
    let mut report = CheckReport::default();

    for document in documents {
        if let Ok(request) = SynthesisRequest::new(document) {
            if let Some(problem) = validate_type_name(request.type_name()) {
                let message = format!(
                    "{}: type name '{}' is not a valid C# identifier ({})",
                    document.display(),
                    request.type_name(),
                    problem
                );
                warn!("{}", message);
                report.warnings.push(message);
            }
        }

        let file = match generator.synthesize(document) {
            Ok(file) => file,
            Err(e) => {
                error!("{}: {}", document.display(), e);
                report.failures.push(DocumentFailure::new(document, e));
                continue;
            }
        };

        match file.status() {
            Ok(status) => {
                debug!("{}: {:?}", file.path().display(), status);
                report.files.push(CheckedFile {
                    path: file.path().to_path_buf(),
                    status,
                });
            }
            Err(e) => {
                error!("{}: {:#}", document.display(), e);
                report
                    .failures
                    .push(DocumentFailure::new(document, format!("{:#}", e)));
            }
        }
    }

    report
}
