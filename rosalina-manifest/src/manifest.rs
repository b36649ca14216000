//! The `rosalina.toml` host configuration.

use std::{
    path::{Path, PathBuf},
    str::FromStr,
};

use rosalina_core::Version;
use serde::Deserialize;

use crate::{Error, Result, error::SourceContext};

/// Default configuration file name, looked up in the working directory.
pub const MANIFEST_FILE: &str = "rosalina.toml";
pub const DEFAULT_TOOL_NAME: &str = "Rosalina Code Generator";
pub const DEFAULT_DOCUMENT_EXTENSION: &str = "uxml";

/// Root of `rosalina.toml`. Every key is optional.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Manifest {
    #[serde(default)]
    pub generator: GeneratorConfig,

    #[serde(default)]
    pub documents: DocumentsConfig,
}

/// `[generator]`: what the banner says about the tool.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GeneratorConfig {
    pub tool_name: Option<String>,
    /// Overrides the version of the running binary.
    pub version: Option<Version>,
}

impl GeneratorConfig {
    pub fn tool_name(&self) -> &str {
        self.tool_name.as_deref().unwrap_or(DEFAULT_TOOL_NAME)
    }
}

/// `[documents]`: where UI documents are looked up.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DocumentsConfig {
    #[serde(default = "default_extension")]
    pub extension: String,

    /// Searched when no path is given on the command line.
    #[serde(default)]
    pub roots: Vec<PathBuf>,
}

impl Default for DocumentsConfig {
    fn default() -> Self {
        Self {
            extension: default_extension(),
            roots: Vec::new(),
        }
    }
}

fn default_extension() -> String {
    DEFAULT_DOCUMENT_EXTENSION.to_string()
}

impl FromStr for Manifest {
    type Err = Box<Error>;

    fn from_str(s: &str) -> Result<Self> {
        parse_manifest(s, MANIFEST_FILE)
    }
}

impl Manifest {
    /// Read and parse a manifest file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            Box::new(Error::Io {
                path: path.to_path_buf(),
                source: e,
            })
        })?;
        parse_manifest(&content, &path.display().to_string())
    }

    /// Like [`Manifest::from_file`], but a missing file yields the defaults.
    pub fn from_file_or_default(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if path.exists() {
            Self::from_file(path)
        } else {
            Ok(Self::default())
        }
    }
}

fn parse_manifest(content: &str, filename: &str) -> Result<Manifest> {
    let ctx = SourceContext::new(content, filename);
    let manifest: Manifest = toml::from_str(content).map_err(|e| ctx.parse_error(e))?;
    validate(&manifest, &ctx)?;
    Ok(manifest)
}

fn validate(manifest: &Manifest, ctx: &SourceContext) -> Result<()> {
    if manifest
        .generator
        .tool_name
        .as_deref()
        .is_some_and(|name| name.trim().is_empty())
    {
        return Err(ctx.validation_error("tool_name", "tool name cannot be empty"));
    }

    let extension = &manifest.documents.extension;
    if extension.is_empty() {
        return Err(ctx.validation_error("extension", "document extension cannot be empty"));
    }
    if extension.starts_with('.') {
        return Err(ctx.validation_error(
            "extension",
            format!(
                "document extension must not start with a dot, use \"{}\"",
                extension.trim_start_matches('.')
            ),
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_empty_manifest_uses_defaults() {
        let manifest: Manifest = "".parse().unwrap();

        assert_eq!(manifest, Manifest::default());
        assert_eq!(manifest.generator.tool_name(), "Rosalina Code Generator");
        assert_eq!(manifest.generator.version, None);
        assert_eq!(manifest.documents.extension, "uxml");
        assert!(manifest.documents.roots.is_empty());
    }

    #[test]
    fn test_full_manifest() {
        let manifest: Manifest = r#"
            [generator]
            tool_name = "Studio UI Generator"
            version = "1.4.0-rc.1"

            [documents]
            extension = "uxml"
            roots = ["Assets/UI", "Packages/com.studio.ui"]
        "#
        .parse()
        .unwrap();

        assert_eq!(manifest.generator.tool_name(), "Studio UI Generator");
        assert_eq!(
            manifest.generator.version,
            Some(Version::new(1, 4, 0).with_pre("rc.1"))
        );
        assert_eq!(
            manifest.documents.roots,
            vec![
                PathBuf::from("Assets/UI"),
                PathBuf::from("Packages/com.studio.ui")
            ]
        );
    }

    #[test]
    fn test_invalid_version() {
        let err = r#"
            [generator]
            version = "one"
        "#
        .parse::<Manifest>()
        .unwrap_err();
        assert!(matches!(*err, Error::Parse { .. }));
    }

    #[test]
    fn test_unknown_key_is_rejected() {
        let err = "[generator]\nname = \"x\"\n".parse::<Manifest>().unwrap_err();
        assert!(matches!(*err, Error::Parse { .. }));
    }

    #[test]
    fn test_empty_tool_name() {
        let err = "[generator]\ntool_name = \"  \"\n"
            .parse::<Manifest>()
            .unwrap_err();
        assert!(matches!(*err, Error::Validation { .. }));
        assert_eq!(err.to_string(), "tool name cannot be empty");
    }

    #[test]
    fn test_dotted_extension() {
        let err = "[documents]\nextension = \".uxml\"\n"
            .parse::<Manifest>()
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "document extension must not start with a dot, use \"uxml\""
        );
    }

    #[test]
    fn test_from_file_or_default() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join(MANIFEST_FILE);

        assert_eq!(
            Manifest::from_file_or_default(&path).unwrap(),
            Manifest::default()
        );

        fs::write(&path, "[documents]\nroots = [\"Assets\"]\n").unwrap();
        let manifest = Manifest::from_file_or_default(&path).unwrap();
        assert_eq!(manifest.documents.roots, vec![PathBuf::from("Assets")]);
    }

    #[test]
    fn test_from_file_missing() {
        let temp = TempDir::new().unwrap();
        let err = Manifest::from_file(temp.path().join("nope.toml")).unwrap_err();
        assert!(matches!(*err, Error::Io { .. }));
    }
}
