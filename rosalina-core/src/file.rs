use std::path::{Path, PathBuf};

use eyre::{Context, Result};

/// A fully rendered generated file.
///
/// Produced in memory by the generator; persisting it is left to the host,
/// which can retry or abort without rebuilding anything.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedFile {
    path: PathBuf,
    text: String,
}

impl RenderedFile {
    pub fn new(path: impl Into<PathBuf>, text: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            text: text.into(),
        }
    }

    /// Where the file belongs, next to its source document.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The complete file content, banner included.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Write the file, replacing whatever is currently on disk.
    ///
    /// Generated files are owned by the tool, so there is no skip or merge mode.
    pub fn write(&self) -> Result<WriteResult> {
        let previous = std::fs::read_to_string(&self.path).ok();
        write_file(&self.path, &self.text)
            .wrap_err_with(|| format!("failed to write '{}'", self.path.display()))?;

        Ok(match previous {
            None => WriteResult::Created,
            Some(prev) if prev == self.text => WriteResult::Unchanged,
            Some(_) => WriteResult::Updated,
        })
    }

    /// Compare the rendered text with what is currently on disk.
    pub fn status(&self) -> Result<FileStatus> {
        match std::fs::read_to_string(&self.path) {
            Ok(existing) if existing == self.text => Ok(FileStatus::UpToDate),
            Ok(_) => Ok(FileStatus::Stale),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(FileStatus::Missing),
            Err(e) => {
                Err(e).wrap_err_with(|| format!("failed to read '{}'", self.path.display()))
            }
        }
    }
}

fn write_file(path: &Path, content: &str) -> std::io::Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, content)
}

/// Outcome of [`RenderedFile::write`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteResult {
    /// No file existed before.
    Created,
    /// An older generated file was replaced.
    Updated,
    /// The file was rewritten with identical bytes.
    Unchanged,
}

/// How a generated file on disk relates to a fresh render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileStatus {
    UpToDate,
    Stale,
    Missing,
}
