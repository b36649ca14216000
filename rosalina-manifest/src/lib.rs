//! Configuration for the Rosalina host, read from `rosalina.toml`.

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

mod error;
mod manifest;

pub use error::{Error, Result};
pub use manifest::{
    DEFAULT_DOCUMENT_EXTENSION, DEFAULT_TOOL_NAME, DocumentsConfig, GeneratorConfig,
    MANIFEST_FILE, Manifest,
};
