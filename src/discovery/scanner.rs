//! File system scanner for recipe files.
//!
//! Recursively walks source directories for `*.item.yaml` recipes.

use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::config::RECIPE_SUFFIX;

use super::manifest::Manifest;

/// Recipe files found by a scan, in walk order.
#[derive(Debug, Default)]
pub struct ScanResult {
    pub recipes: Vec<PathBuf>,
}

impl ScanResult {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn total(&self) -> usize {
        self.recipes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }

    pub fn merge(&mut self, other: ScanResult) {
        self.recipes.extend(other.recipes);
    }
}

/// Whether `path` names a recipe file.
pub fn is_recipe(path: &Path) -> bool {
    path.file_name()
        .and_then(|f| f.to_str())
        .is_some_and(|f| f.len() > RECIPE_SUFFIX.len() && f.ends_with(RECIPE_SUFFIX))
}

/// Recursively collect recipes under `root`, skipping excluded paths.
pub fn scan_directory(root: &Path, manifest: &Manifest) -> ScanResult {
    let mut result = ScanResult::new();
    if !root.exists() {
        return result;
    }

    let mut found: Vec<PathBuf> = WalkDir::new(root)
        .follow_links(true)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
        .map(|e| e.into_path())
        .filter(|p| is_recipe(p) && !manifest.is_excluded(p))
        .collect();
    found.sort();
    result.recipes = found;
    result
}

/// Scan each manifest source, resolved against `base_path`.
pub fn scan_sources(sources: &[String], base_path: &Path, manifest: &Manifest) -> ScanResult {
    let mut result = ScanResult::new();
    for source in sources {
        let source_path = if Path::new(source).is_absolute() {
            PathBuf::from(source)
        } else {
            base_path.join(source)
        };
        result.merge(scan_directory(&source_path, manifest));
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_is_recipe() {
        assert!(is_recipe(Path::new("blades.item.yaml")));
        assert!(is_recipe(Path::new("loot/rings/gold.item.yaml")));
        assert!(!is_recipe(Path::new(".item.yaml")));
        assert!(!is_recipe(Path::new("armory.yaml")));
        assert!(!is_recipe(Path::new("blades.item.yml")));
    }

    #[test]
    fn test_scan_recursive_and_sorted() {
        let dir = tempdir().unwrap();
        fs::create_dir_all(dir.path().join("loot/rings")).unwrap();
        fs::write(dir.path().join("swords.item.yaml"), "item: sword").unwrap();
        fs::write(dir.path().join("loot/rings/gold.item.yaml"), "item: ring").unwrap();
        fs::write(dir.path().join("notes.md"), "# notes").unwrap();

        let result = scan_directory(dir.path(), &Manifest::default());
        assert_eq!(result.total(), 2);
        assert!(result.recipes[0].ends_with("loot/rings/gold.item.yaml"));
        assert!(result.recipes[1].ends_with("swords.item.yaml"));
    }

    #[test]
    fn test_scan_with_excludes() {
        let dir = tempdir().unwrap();
        fs::create_dir_all(dir.path().join("old")).unwrap();
        fs::write(dir.path().join("bows.item.yaml"), "item: bow").unwrap();
        fs::write(dir.path().join("old/bows.item.yaml"), "item: bow").unwrap();

        let manifest = Manifest {
            excludes: vec!["**/old/*".to_string()],
            ..Default::default()
        };
        let result = scan_directory(dir.path(), &manifest);
        assert_eq!(result.total(), 1);
    }

    #[test]
    fn test_scan_nonexistent_directory() {
        let result = scan_directory(Path::new("/nonexistent/path"), &Manifest::default());
        assert!(result.is_empty());
    }

    #[test]
    fn test_scan_sources_merges() {
        let dir = tempdir().unwrap();
        fs::create_dir_all(dir.path().join("a")).unwrap();
        fs::create_dir_all(dir.path().join("b")).unwrap();
        fs::write(dir.path().join("a/x.item.yaml"), "item: mace").unwrap();
        fs::write(dir.path().join("b/y.item.yaml"), "item: robe").unwrap();

        let sources = vec!["a".to_string(), "b".to_string()];
        let result = scan_sources(&sources, dir.path(), &Manifest::default());
        assert_eq!(result.total(), 2);
    }
}
