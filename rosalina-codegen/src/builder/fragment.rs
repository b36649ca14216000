//! Intermediate code fragments between declaration nodes and text.

/// A piece of generated code, not yet indented.
///
/// Renderers turn declaration nodes into fragments; [`CodeBuilder`] owns
/// indentation and line breaks.
///
/// [`CodeBuilder`]: super::CodeBuilder
#[derive(Debug, Clone, PartialEq)]
pub enum CodeFragment {
    /// A single line of code (newline appended).
    Line(String),
    /// A blank line.
    Blank,
    /// A `//` line comment.
    Comment(String),
    /// A braced scope: the header line, `{` on its own line, the indented
    /// body, then `}`.
    Scope {
        header: String,
        body: Vec<CodeFragment>,
    },
    /// A sequence of fragments.
    Sequence(Vec<CodeFragment>),
}

impl CodeFragment {
    pub fn line(s: impl Into<String>) -> Self {
        Self::Line(s.into())
    }

    pub fn comment(s: impl Into<String>) -> Self {
        Self::Comment(s.into())
    }

    pub fn scope(header: impl Into<String>, body: Vec<CodeFragment>) -> Self {
        Self::Scope {
            header: header.into(),
            body,
        }
    }
}

/// Types that can be lowered to code fragments.
pub trait Renderable {
    fn to_fragments(&self) -> Vec<CodeFragment>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constructors() {
        assert_eq!(CodeFragment::line("x"), CodeFragment::Line("x".to_string()));
        assert_eq!(
            CodeFragment::comment("note"),
            CodeFragment::Comment("note".to_string())
        );
        assert_eq!(
            CodeFragment::scope("class A", vec![]),
            CodeFragment::Scope {
                header: "class A".to_string(),
                body: vec![],
            }
        );
    }
}
