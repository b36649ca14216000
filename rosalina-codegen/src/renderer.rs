//! The renderer seam between declaration trees and source text.

use rosalina_core::Version;

use crate::{Result, ast::CompilationUnit, builder::normalize};

/// Identity of the generating tool, printed in the file banner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BannerMeta {
    pub tool_name: String,
    pub version: Version,
}

impl BannerMeta {
    pub fn new(tool_name: impl Into<String>, version: Version) -> Self {
        Self {
            tool_name: tool_name.into(),
            version,
        }
    }
}

/// Prints a [`CompilationUnit`] in one target language.
///
/// Implementations only describe syntax. Validation, whitespace
/// normalization and banner placement are shared by [`SourceRenderer::render`].
pub trait SourceRenderer {
    /// Language identifier (e.g. "csharp").
    fn language(&self) -> &'static str;

    /// Extension of generated files, without the dot.
    fn file_extension(&self) -> &'static str;

    /// The generated-file banner, including its trailing separation.
    fn render_banner(&self, meta: &BannerMeta) -> String;

    /// Print a tree that already passed [`CompilationUnit::validate`].
    fn render_unit(&self, unit: &CompilationUnit) -> String;

    /// Validate, print and normalize `unit`, then prepend the banner.
    ///
    /// Deterministic: the same tree and banner always give the same bytes.
    fn render(&self, unit: &CompilationUnit, meta: &BannerMeta) -> Result<String> {
        unit.validate()?;

        let body = normalize(&self.render_unit(unit));
        let mut text = self.render_banner(meta);
        text.push_str(&body);
        Ok(text)
    }
}
