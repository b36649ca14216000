//! Core types shared across the Rosalina code-behind generator.

mod file;
mod naming;
mod version;

pub use file::{FileStatus, RenderedFile, WriteResult};
pub use naming::{document_stem, generated_path, is_csharp_keyword, validate_type_name};
pub use version::Version;
