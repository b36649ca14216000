//! Configuration and document selection shared by every command.

use std::path::{Path, PathBuf};

use clap::Args;
use eyre::{Result, eyre};
use rosalina_codegen::BannerMeta;
use rosalina_codegen_csharp::Generator;
use rosalina_core::Version;
use rosalina_manifest::{MANIFEST_FILE, Manifest};

use super::UnwrapOrExit;
use crate::ops;

#[derive(Args)]
pub struct DocumentArgs {
    /// Documents or directories to process (defaults to the configured roots)
    pub paths: Vec<PathBuf>,

    /// Path to rosalina.toml (defaults to ./rosalina.toml when present)
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}

/// A loaded configuration and the directory its relative paths start from.
pub struct Project {
    manifest: Manifest,
    base_dir: PathBuf,
}

impl Project {
    /// Load the configuration, exiting with a diagnostic if it is invalid.
    ///
    /// An explicit `--config` must exist; the default file is optional.
    pub fn load(args: &DocumentArgs) -> Self {
        let (manifest, base_dir) = match &args.config {
            Some(path) => (
                Manifest::from_file(path).unwrap_or_exit(),
                path.parent().map(Path::to_path_buf).unwrap_or_default(),
            ),
            None => (
                Manifest::from_file_or_default(MANIFEST_FILE).unwrap_or_exit(),
                PathBuf::new(),
            ),
        };
        Self { manifest, base_dir }
    }

    pub fn generator(&self) -> Result<Generator> {
        let config = &self.manifest.generator;
        let version = match &config.version {
            Some(version) => version.clone(),
            None => env!("CARGO_PKG_VERSION")
                .parse::<Version>()
                .map_err(|e| eyre!(e))?,
        };
        Ok(Generator::new(BannerMeta::new(config.tool_name(), version)))
    }

    /// Resolve the documents to process.
    ///
    /// Command-line paths win; otherwise the configured roots are searched,
    /// and without roots the current directory.
    pub fn documents(&self, paths: &[PathBuf]) -> Result<Vec<PathBuf>> {
        let roots = if !paths.is_empty() {
            paths.to_vec()
        } else if !self.manifest.documents.roots.is_empty() {
            self.manifest
                .documents
                .roots
                .iter()
                .map(|root| self.base_dir.join(root))
                .collect()
        } else {
            vec![PathBuf::from(".")]
        };

        ops::discover(&roots, &self.manifest.documents.extension)
    }
}
