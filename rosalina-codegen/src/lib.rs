//! Language-agnostic code generation for the Rosalina code-behind generator.
//!
//! # Module Organization
//!
//! - [`ast`] - Declaration tree (CompilationUnit, TypeDecl, Member, ...)
//! - [`builder`] - Text building blocks (CodeBuilder, CodeFragment, normalize, ...)
//! - [`SynthesisRequest`] - A document path and the names derived from it
//! - [`SourceRenderer`] - Seam implemented by each target language

pub mod ast;
pub mod builder;
mod error;
mod renderer;
mod request;

pub use error::{Error, Result};
pub use renderer::{BannerMeta, SourceRenderer};
pub use request::SynthesisRequest;
