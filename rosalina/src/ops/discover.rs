//! Document discovery.

use std::{
    collections::HashSet,
    fs,
    path::{Path, PathBuf},
};

use eyre::{Context, Result, bail};

/// Expand `roots` into the list of documents to process.
///
/// Files are taken as given. Directories are searched recursively for files
/// with `extension`, in sorted order. Duplicates keep their first position.
pub fn discover(roots: &[PathBuf], extension: &str) -> Result<Vec<PathBuf>> {
    let mut seen = HashSet::new();
    let mut documents = Vec::new();

    for root in roots {
        let found = if root.is_dir() {
            let mut found = Vec::new();
            walk(root, extension, &mut found)?;
            found
        } else if root.is_file() {
            vec![root.clone()]
        } else {
            bail!("'{}' does not exist", root.display());
        };

        for path in found {
            if seen.insert(path.clone()) {
                documents.push(path);
            }
        }
    }

    tracing::debug!("Found {} document(s)", documents.len());
    Ok(documents)
}

fn walk(dir: &Path, extension: &str, found: &mut Vec<PathBuf>) -> Result<()> {
    let mut entries = fs::read_dir(dir)
        .wrap_err_with(|| format!("failed to read directory '{}'", dir.display()))?
        .collect::<std::io::Result<Vec<_>>>()
        .wrap_err_with(|| format!("failed to read directory '{}'", dir.display()))?;
    entries.sort_by_key(|entry| entry.file_name());

    for entry in entries {
        let path = entry.path();
        let file_type = entry
            .file_type()
            .wrap_err_with(|| format!("failed to inspect '{}'", path.display()))?;

        if file_type.is_dir() {
            walk(&path, extension, found)?;
        } else if file_type.is_file() && has_extension(&path, extension) {
            found.push(path);
        }
    }

    Ok(())
}

fn has_extension(path: &Path, extension: &str) -> bool {
    path.extension().and_then(|ext| ext.to_str()) == Some(extension)
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;

    fn touch(path: &Path) {
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, "<ui:UXML />").unwrap();
    }

    #[test]
    fn test_recursive_sorted_and_filtered() {
        let temp = TempDir::new().unwrap();
        let root = temp.path();
        touch(&root.join("b/Settings.uxml"));
        touch(&root.join("a/Menu.uxml"));
        touch(&root.join("a/Menu.uss"));
        touch(&root.join("Hud.uxml"));

        let found = discover(&[root.to_path_buf()], "uxml").unwrap();

        assert_eq!(
            found,
            vec![
                root.join("Hud.uxml"),
                root.join("a/Menu.uxml"),
                root.join("b/Settings.uxml"),
            ]
        );
    }

    #[test]
    fn test_explicit_files_are_kept_and_deduplicated() {
        let temp = TempDir::new().unwrap();
        let root = temp.path();
        let menu = root.join("Menu.uxml");
        let notes = root.join("notes.txt");
        touch(&menu);
        touch(&notes);

        let found = discover(&[notes.clone(), root.to_path_buf(), menu.clone()], "uxml").unwrap();

        assert_eq!(found, vec![notes, menu]);
    }

    #[test]
    fn test_missing_root() {
        let temp = TempDir::new().unwrap();
        let err = discover(&[temp.path().join("Missing")], "uxml").unwrap_err();
        assert!(err.to_string().contains("does not exist"));
    }
}
