//! Recipe discovery for armory projects.
//!
//! Finds `*.item.yaml` recipes in a project directory, either by scanning
//! everything under the root or by following an `armory.yaml` manifest.
//!
//! # Example
//!
//! ```ignore
//! use px_armory::discovery::discover;
//!
//! let found = discover("./loot")?;
//! for (path, recipe) in found.load_recipes()? {
//!     println!("{}: {} x{}", path.display(), recipe.item, recipe.count);
//! }
//! ```

mod manifest;
mod scanner;

use std::path::{Path, PathBuf};

use crate::config::Recipe;
use crate::error::Result;

pub use manifest::Manifest;
pub use scanner::{is_recipe, scan_directory, scan_sources, ScanResult};

/// The name of the manifest file.
pub const MANIFEST_FILENAME: &str = "armory.yaml";

/// Result of discovering recipes in a project.
#[derive(Debug)]
pub struct DiscoveryResult {
    pub root: PathBuf,
    /// The loaded manifest (default if no armory.yaml was found).
    pub manifest: Manifest,
    pub has_manifest: bool,
    pub scan: ScanResult,
}

impl DiscoveryResult {
    /// Parse every discovered recipe, applying the manifest's scale.
    pub fn load_recipes(&self) -> Result<Vec<(PathBuf, Recipe)>> {
        self.load_recipes_scaled(None)
    }

    /// Like [`load_recipes`](Self::load_recipes), with a scale that beats
    /// the manifest's for recipes that set none.
    pub fn load_recipes_scaled(&self, scale: Option<u32>) -> Result<Vec<(PathBuf, Recipe)>> {
        self.scan
            .recipes
            .iter()
            .map(|path| {
                let recipe = Recipe::load(path)?
                    .with_default_scale(scale)
                    .with_default_scale(self.manifest.scale);
                Ok((path.clone(), recipe))
            })
            .collect()
    }

    /// Output directory, resolved against the project root.
    pub fn output_dir(&self) -> PathBuf {
        if self.manifest.output.is_absolute() {
            self.manifest.output.clone()
        } else {
            self.root.join(&self.manifest.output)
        }
    }
}

/// Discover recipes in a project directory.
///
/// Uses `armory.yaml` under `root` when present, otherwise scans all of
/// `root`.
pub fn discover(root: impl AsRef<Path>) -> Result<DiscoveryResult> {
    let root = root.as_ref().to_path_buf();

    let manifest_path = root.join(MANIFEST_FILENAME);
    let (manifest, has_manifest) = if manifest_path.exists() {
        (Manifest::load(&manifest_path)?, true)
    } else {
        (Manifest::default(), false)
    };

    let sources = manifest.effective_sources();
    let scan = scan_sources(&sources, &root, &manifest);

    Ok(DiscoveryResult {
        root,
        manifest,
        has_manifest,
        scan,
    })
}

/// Discover recipes from explicit files and directories (no manifest).
pub fn discover_paths(paths: &[PathBuf]) -> Result<DiscoveryResult> {
    let manifest = Manifest::default();
    let mut scan = ScanResult::new();

    for path in paths {
        if path.is_dir() {
            scan.merge(scan_directory(path, &manifest));
        } else if path.is_file() && is_recipe(path) {
            scan.recipes.push(path.clone());
        }
    }

    let root = paths
        .first()
        .map(|p| if p.is_dir() { p.as_path() } else { p.parent().unwrap_or(p) })
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from("."));

    Ok(DiscoveryResult {
        root,
        manifest,
        has_manifest: false,
        scan,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assemble::ItemKind;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_discover_empty_directory() {
        let dir = tempdir().unwrap();
        let result = discover(dir.path()).unwrap();
        assert!(!result.has_manifest);
        assert!(result.scan.is_empty());
        assert_eq!(result.output_dir(), dir.path().join("dist"));
    }

    #[test]
    fn test_discover_with_manifest() {
        let dir = tempdir().unwrap();
        fs::write(
            dir.path().join("armory.yaml"),
            "sources:\n  - recipes/\noutput: build\nscale: 2\n",
        )
        .unwrap();
        fs::create_dir_all(dir.path().join("recipes")).unwrap();
        fs::write(dir.path().join("recipes/blades.item.yaml"), "item: sword\ncount: 2\n").unwrap();
        fs::write(dir.path().join("stray.item.yaml"), "item: bow\n").unwrap();

        let result = discover(dir.path()).unwrap();
        assert!(result.has_manifest);
        assert_eq!(result.scan.total(), 1);
        assert_eq!(result.output_dir(), dir.path().join("build"));

        let recipes = result.load_recipes().unwrap();
        assert_eq!(recipes.len(), 1);
        assert_eq!(recipes[0].1.item, ItemKind::Sword);
        assert_eq!(recipes[0].1.options.scale, Some(2));
    }

    #[test]
    fn test_recipe_scale_overrides_manifest() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("armory.yaml"), "scale: 2\n").unwrap();
        fs::write(
            dir.path().join("rings.item.yaml"),
            "item: ring\noptions:\n  scale: 6\n",
        )
        .unwrap();

        let recipes = discover(dir.path()).unwrap().load_recipes().unwrap();
        assert_eq!(recipes[0].1.options.scale, Some(6));
    }

    #[test]
    fn test_bad_recipe_reports_path() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("broken.item.yaml"), "item: [").unwrap();
        let err = discover(dir.path()).unwrap().load_recipes().unwrap_err();
        assert!(err.to_string().contains("broken.item.yaml"));
    }

    #[test]
    fn test_discover_paths_files_and_dirs() {
        let dir = tempdir().unwrap();
        let file = dir.path().join("maces.item.yaml");
        fs::write(&file, "item: mace").unwrap();
        fs::write(dir.path().join("readme.txt"), "hi").unwrap();

        let by_file = discover_paths(&[file.clone(), dir.path().join("readme.txt")]).unwrap();
        assert_eq!(by_file.scan.total(), 1);
        assert_eq!(by_file.root, dir.path());

        let by_dir = discover_paths(&[dir.path().to_path_buf()]).unwrap();
        assert_eq!(by_dir.scan.total(), 1);
    }
}
