//! Synthesis requests: a document path and everything derived from it.

use std::path::{Path, PathBuf};

use rosalina_core::{document_stem, generated_path};

use crate::{Error, Result};

/// Request to generate the code-behind of one UI document.
///
/// The type name is the document's file name without its extension. It is
/// not checked against the target language's identifier rules; a document
/// named `main-menu.uxml` yields a type that will not compile.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SynthesisRequest {
    document_path: PathBuf,
    type_name: String,
}

impl SynthesisRequest {
    /// Fails with [`Error::InvalidRequest`] if the path has no usable basename.
    pub fn new(document_path: impl Into<PathBuf>) -> Result<Self> {
        let document_path = document_path.into();
        let type_name = document_stem(&document_path)
            .ok_or_else(|| Error::invalid_request(&document_path))?
            .to_string();

        Ok(Self {
            document_path,
            type_name,
        })
    }

    pub fn document_path(&self) -> &Path {
        &self.document_path
    }

    pub fn type_name(&self) -> &str {
        &self.type_name
    }

    /// `<dir>/<TypeName>.g.<extension>`, next to the document.
    pub fn output_path(&self, extension: &str) -> PathBuf {
        generated_path(&self.document_path, &self.type_name, extension)
    }
}
