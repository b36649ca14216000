//! Deriving generated type names and file paths from UI document paths.

use std::path::{Path, PathBuf};

/// C# reserved keywords; a document named after one cannot become a type name.
const CSHARP_KEYWORDS: &[&str] = &[
    "abstract", "as", "base", "bool", "break", "byte", "case", "catch", "char", "checked",
    "class", "const", "continue", "decimal", "default", "delegate", "do", "double", "else",
    "enum", "event", "explicit", "extern", "false", "finally", "fixed", "float", "for",
    "foreach", "goto", "if", "implicit", "in", "int", "interface", "internal", "is", "lock",
    "long", "namespace", "new", "null", "object", "operator", "out", "override", "params",
    "private", "protected", "public", "readonly", "ref", "return", "sbyte", "sealed", "short",
    "sizeof", "stackalloc", "static", "string", "struct", "switch", "this", "throw", "true",
    "try", "typeof", "uint", "ulong", "unchecked", "unsafe", "ushort", "using", "virtual",
    "void", "volatile", "while",
];

/// Returns the file name without its last extension (`UI/MainMenu.uxml` -> `MainMenu`).
///
/// `None` when the last path segment is not a file name (empty after a
/// trailing separator, `.` or `..`), for a dot-file such as `.uxml`, and for
/// paths that are not valid UTF-8.
pub fn document_stem(path: &Path) -> Option<&str> {
    let file_name = path.to_str()?.rsplit(['/', '\\']).next()?;
    if matches!(file_name, "" | "." | "..") {
        return None;
    }

    let stem = match file_name.rfind('.') {
        Some(idx) => &file_name[..idx],
        None => file_name,
    };

    (!stem.is_empty()).then_some(stem)
}

/// Sibling path for the generated file: `<dir>/<stem>.g.<extension>`.
pub fn generated_path(document: &Path, stem: &str, extension: &str) -> PathBuf {
    document.with_file_name(format!("{}.g.{}", stem, extension))
}

pub fn is_csharp_keyword(name: &str) -> bool {
    CSHARP_KEYWORDS.contains(&name)
}

/// Check whether `name` can be used as a C# type name.
///
/// Returns the reason it cannot, or `None` if it is fine.
pub fn validate_type_name(name: &str) -> Option<&'static str> {
    let mut chars = name.chars();

    match chars.next() {
        None => return Some("name cannot be empty"),
        Some(c) if c.is_alphabetic() || c == '_' => {}
        Some(_) => return Some("name must start with a letter or underscore"),
    }

    if !chars.all(|c| c.is_alphanumeric() || c == '_') {
        return Some("name may only contain letters, digits and underscores");
    }

    if is_csharp_keyword(name) {
        return Some("name is a C# reserved keyword");
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_stem() {
        assert_eq!(document_stem(Path::new("UI/MainMenu.uxml")), Some("MainMenu"));
        assert_eq!(document_stem(Path::new("MainMenu.uxml")), Some("MainMenu"));
        assert_eq!(document_stem(Path::new("UI/Hud")), Some("Hud"));
        assert_eq!(
            document_stem(Path::new("Assets/Shop.Panel.uxml")),
            Some("Shop.Panel")
        );
    }

    #[test]
    fn test_document_stem_without_basename() {
        assert_eq!(document_stem(Path::new("")), None);
        assert_eq!(document_stem(Path::new("UI/")), None);
        assert_eq!(document_stem(Path::new("UI\\")), None);
        assert_eq!(document_stem(Path::new("UI/..")), None);
        assert_eq!(document_stem(Path::new("UI/.")), None);
        assert_eq!(document_stem(Path::new("Assets\\UI\\.")), None);
        assert_eq!(document_stem(Path::new(".")), None);
        assert_eq!(document_stem(Path::new("UI/.uxml")), None);
    }

    #[test]
    fn test_generated_path() {
        assert_eq!(
            generated_path(Path::new("UI/MainMenu.uxml"), "MainMenu", "cs"),
            PathBuf::from("UI/MainMenu.g.cs")
        );
        assert_eq!(
            generated_path(Path::new("Hud.uxml"), "Hud", "cs"),
            PathBuf::from("Hud.g.cs")
        );
    }

    #[test]
    fn test_validate_type_name() {
        assert_eq!(validate_type_name("MainMenu"), None);
        assert_eq!(validate_type_name("_Hud2"), None);
        assert_eq!(
            validate_type_name("2Player"),
            Some("name must start with a letter or underscore")
        );
        assert_eq!(
            validate_type_name("main-menu"),
            Some("name may only contain letters, digits and underscores")
        );
        assert_eq!(
            validate_type_name("Shop.Panel"),
            Some("name may only contain letters, digits and underscores")
        );
        assert_eq!(
            validate_type_name("class"),
            Some("name is a C# reserved keyword")
        );
        assert_eq!(validate_type_name(""), Some("name cannot be empty"));
    }
}
