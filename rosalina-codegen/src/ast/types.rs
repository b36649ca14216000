//! Type references, visibility and attributes.

use std::fmt;

/// Access modifier of a declaration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Visibility {
    #[default]
    Public,
    Internal,
    Protected,
    Private,
}

impl Visibility {
    pub fn keyword(&self) -> &'static str {
        match self {
            Self::Public => "public",
            Self::Internal => "internal",
            Self::Protected => "protected",
            Self::Private => "private",
        }
    }
}

/// A symbolic reference to a named type.
///
/// The namespace is not printed at the use site; it decides which imports the
/// compilation unit needs.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TypeName {
    namespace: Option<String>,
    name: String,
}

impl TypeName {
    /// A type that needs no import (`void`, `int`, a sibling type).
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            namespace: None,
            name: name.into(),
        }
    }

    pub fn in_namespace(namespace: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            namespace: Some(namespace.into()),
            name: name.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn namespace(&self) -> Option<&str> {
        self.namespace.as_deref()
    }
}

impl fmt::Display for TypeName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

/// An attribute marker such as `[SerializeField]`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Attribute {
    pub name: TypeName,
}

impl Attribute {
    pub fn new(name: TypeName) -> Self {
        Self { name }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_type_name_display_omits_namespace() {
        let ty = TypeName::in_namespace("UnityEngine.UIElements", "VisualElement");
        assert_eq!(ty.to_string(), "VisualElement");
        assert_eq!(ty.namespace(), Some("UnityEngine.UIElements"));
        assert_eq!(TypeName::new("void").namespace(), None);
    }

    #[test]
    fn test_visibility_keywords() {
        assert_eq!(Visibility::default().keyword(), "public");
        assert_eq!(Visibility::Private.keyword(), "private");
        assert_eq!(Visibility::Internal.keyword(), "internal");
        assert_eq!(Visibility::Protected.keyword(), "protected");
    }
}
