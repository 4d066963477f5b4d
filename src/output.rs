//! Output writing: destination layout and `strings.xml` emission.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::info;

use crate::error::Result;
use crate::traits::Parser;
use crate::types::ResourceTree;

/// Returns the `strings.xml` path for one tree.
///
/// The default locale writes to the unsuffixed `values/` directory, every
/// other locale to `values-<locale>/`.
pub fn res_file_path(project_dir: &Path, tree: &ResourceTree) -> PathBuf {
    let locale_suffix = if tree.is_default_locale {
        String::new()
    } else {
        format!("-{}", tree.locale)
    };
    project_dir
        .join("src")
        .join("main")
        .join("res")
        .join(format!("values{locale_suffix}"))
        .join("strings.xml")
}

/// Serializes one tree to its destination file, creating parent
/// directories as needed. Overwrites any existing file.
pub fn write_resource(tree: &ResourceTree, project_dir: &Path) -> Result<PathBuf> {
    let output_file = res_file_path(project_dir, tree);
    if let Some(parent) = output_file.parent() {
        fs::create_dir_all(parent)?;
    }
    tree.write_to(&output_file)?;
    info!(locale = %tree.locale, path = %output_file.display(), "wrote string resources");
    Ok(output_file)
}

/// Writes every tree sequentially, returning the written paths.
///
/// Trees written before a later failure remain on disk.
pub fn write_resources(trees: &[ResourceTree], project_dir: &Path) -> Result<Vec<PathBuf>> {
    trees
        .iter()
        .map(|tree| write_resource(tree, project_dir))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_locale_path_has_no_suffix() {
        let tree = ResourceTree::new("en", true);
        let path = res_file_path(Path::new("app"), &tree);
        assert_eq!(
            path,
            Path::new("app")
                .join("src")
                .join("main")
                .join("res")
                .join("values")
                .join("strings.xml")
        );
    }

    #[test]
    fn test_other_locales_get_suffixed_directory() {
        let tree = ResourceTree::new("fr", false);
        let path = res_file_path(Path::new("app"), &tree);
        assert!(path.ends_with(Path::new("values-fr").join("strings.xml")));
    }

    #[test]
    fn test_write_resource_creates_directories() {
        let dir = tempfile::tempdir().unwrap();
        let mut tree = ResourceTree::new("fr", false);
        tree.add_entry("greeting", "salut");

        let written = write_resource(&tree, dir.path()).unwrap();
        assert!(written.is_file());
        let content = fs::read_to_string(&written).unwrap();
        assert!(content.contains(r#"<string name="greeting">salut</string>"#));
    }

    #[test]
    fn test_failed_write_keeps_earlier_locales() {
        let dir = tempfile::tempdir().unwrap();
        let res_dir = dir.path().join("src").join("main").join("res");
        fs::create_dir_all(&res_dir).unwrap();
        // A plain file where the default locale's directory should go.
        fs::write(res_dir.join("values"), "").unwrap();

        let mut fr = ResourceTree::new("fr", false);
        fr.add_entry("greeting", "salut");
        let mut en = ResourceTree::new("en", true);
        en.add_entry("greeting", "hi");

        let err = write_resources(&[fr.clone(), en], dir.path()).unwrap_err();
        assert!(matches!(err, crate::error::Error::Io(_)));
        // The locale written before the failure is still on disk.
        assert!(res_file_path(dir.path(), &fr).is_file());
    }

    #[test]
    fn test_write_resource_overwrites() {
        let dir = tempfile::tempdir().unwrap();
        let mut tree = ResourceTree::new("en", true);
        tree.add_entry("greeting", "hi");
        let first = write_resource(&tree, dir.path()).unwrap();

        tree.strings[0].text = "hello".to_string();
        let second = write_resource(&tree, dir.path()).unwrap();

        assert_eq!(first, second);
        let content = fs::read_to_string(&second).unwrap();
        assert!(content.contains(">hello<"));
        assert!(!content.contains(">hi<"));
    }
}
