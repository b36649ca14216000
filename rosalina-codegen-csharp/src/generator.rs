use std::path::Path;

use rosalina_codegen::{BannerMeta, Result, SourceRenderer, SynthesisRequest};
use rosalina_core::RenderedFile;

use crate::{CSharpRenderer, document};

/// Turns UI document paths into rendered code-behind files.
///
/// Pure: no I/O and no logging. Writing the result is up to the caller.
#[derive(Debug, Clone)]
pub struct Generator<R = CSharpRenderer> {
    renderer: R,
    banner: BannerMeta,
}

impl Generator {
    /// Generator with the default 4-space C# renderer.
    pub fn new(banner: BannerMeta) -> Self {
        Self::with_renderer(CSharpRenderer::new(), banner)
    }
}

impl<R: SourceRenderer> Generator<R> {
    pub fn with_renderer(renderer: R, banner: BannerMeta) -> Self {
        Self { renderer, banner }
    }

    pub fn banner(&self) -> &BannerMeta {
        &self.banner
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    /// Generate the code-behind for one document.
    ///
    /// Fails with `InvalidRequest` if no type name can be derived from the
    /// path; nothing is produced in that case.
    pub fn synthesize(&self, document_path: impl AsRef<Path>) -> Result<RenderedFile> {
        let request = SynthesisRequest::new(document_path.as_ref())?;
        let unit = document::build(&request);
        let text = self.renderer.render(&unit, &self.banner)?;

        Ok(RenderedFile::new(
            request.output_path(self.renderer.file_extension()),
            text,
        ))
    }
}
