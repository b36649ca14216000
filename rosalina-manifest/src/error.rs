use std::path::PathBuf;

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// Result type for manifest operations (boxed to reduce size on stack)
pub type Result<T> = std::result::Result<T, Box<Error>>;

/// Source content and filename, for labelled diagnostics.
#[derive(Debug, Clone)]
pub(crate) struct SourceContext<'a> {
    src: &'a str,
    filename: &'a str,
}

impl<'a> SourceContext<'a> {
    pub fn new(src: &'a str, filename: &'a str) -> Self {
        Self { src, filename }
    }

    fn named_source(&self) -> NamedSource<String> {
        NamedSource::new(self.filename, self.src.to_string())
    }

    pub fn parse_error(&self, source: toml::de::Error) -> Box<Error> {
        let span = source.span().map(SourceSpan::from);
        Box::new(Error::Parse {
            src: self.named_source(),
            span,
            source,
        })
    }

    /// A validation error pointing at the first `key =` in the source.
    pub fn validation_error(&self, key: &str, message: impl Into<String>) -> Box<Error> {
        Box::new(Error::Validation {
            src: self.named_source(),
            span: find_key_span(self.src, key),
            message: message.into(),
        })
    }
}

fn find_key_span(src: &str, key: &str) -> Option<SourceSpan> {
    src.match_indices(key)
        .find(|(pos, _)| {
            let before_ok = src[..*pos]
                .chars()
                .next_back()
                .is_none_or(|c| c.is_whitespace());
            let after_ok = src[pos + key.len()..].trim_start().starts_with('=');
            before_ok && after_ok
        })
        .map(|(pos, _)| SourceSpan::from((pos, key.len())))
}

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("failed to read '{}'", path.display())]
    #[diagnostic(code(rosalina::io))]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse rosalina.toml")]
    #[diagnostic(code(rosalina::parse_error))]
    Parse {
        #[source_code]
        src: NamedSource<String>,
        #[label("parse error here")]
        span: Option<SourceSpan>,
        #[source]
        source: toml::de::Error,
    },

    #[error("{message}")]
    #[diagnostic(code(rosalina::validation_error))]
    Validation {
        #[source_code]
        src: NamedSource<String>,
        #[label("{message}")]
        span: Option<SourceSpan>,
        message: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_key_span() {
        let src = "[documents]\nextension = \"\"\n";
        let span = find_key_span(src, "extension").unwrap();
        assert_eq!(span.offset(), 12);
        assert_eq!(span.len(), "extension".len());
    }

    #[test]
    fn test_find_key_span_skips_values() {
        let src = "tool_name = \"extension\"\nextension = \"x\"\n";
        let span = find_key_span(src, "extension").unwrap();
        assert_eq!(span.offset(), 24);
    }

    #[test]
    fn test_find_key_span_missing() {
        assert!(find_key_span("[generator]\n", "tool_name").is_none());
    }
}
