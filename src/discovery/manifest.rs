//! Project manifest (armory.yaml) parsing.
//!
//! The manifest lists where recipes live, where rendered items go, and the
//! default output scale.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{ArmoryError, Result};

/// Project manifest loaded from armory.yaml.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Manifest {
    /// Directories to scan for `*.item.yaml` recipes.
    /// Defaults to the project root if empty.
    #[serde(default)]
    pub sources: Vec<String>,

    /// Output directory for rendered items.
    #[serde(default = "default_output")]
    pub output: PathBuf,

    /// Scale applied to recipes that do not set one.
    #[serde(default)]
    pub scale: Option<u32>,

    /// Patterns to exclude from discovery.
    #[serde(default)]
    pub excludes: Vec<String>,
}

fn default_output() -> PathBuf {
    PathBuf::from("dist")
}

impl Default for Manifest {
    fn default() -> Self {
        Self {
            sources: vec![],
            output: default_output(),
            scale: None,
            excludes: vec![],
        }
    }
}

impl Manifest {
    /// Load manifest from an armory.yaml file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| ArmoryError::Io {
            path: path.to_path_buf(),
            message: format!("Failed to read manifest: {}", e),
        })?;

        Self::parse(&content)
    }

    /// Parse manifest from YAML string.
    pub fn parse(content: &str) -> Result<Self> {
        serde_yaml::from_str(content).map_err(|e| ArmoryError::Parse {
            message: format!("Invalid manifest: {}", e),
            help: Some("Check armory.yaml syntax".to_string()),
        })
    }

    /// Whether any exclude pattern matches `path`.
    pub fn is_excluded(&self, path: &Path) -> bool {
        let path = path.to_string_lossy().replace('\\', "/");
        self.excludes.iter().any(|p| Self::matches_pattern(&path, p))
    }

    /// Minimal glob support: `**/dir/*`, `*.ext`, `dir/*`, else substring.
    fn matches_pattern(path: &str, pattern: &str) -> bool {
        if let Some(rest) = pattern.strip_prefix("**/") {
            return match rest.strip_suffix("/*") {
                Some(dir) => {
                    path.starts_with(&format!("{dir}/")) || path.contains(&format!("/{dir}/"))
                }
                None => path.ends_with(rest) || path.contains(rest),
            };
        }
        if let Some(suffix) = pattern.strip_prefix('*').filter(|_| !pattern.contains('/')) {
            return path.ends_with(suffix);
        }
        if let Some(dir) = pattern.strip_suffix("/*") {
            return path.starts_with(&format!("{dir}/")) || path.contains(&format!("/{dir}/"));
        }
        path.contains(pattern)
    }

    /// Get effective source paths, defaulting to current directory.
    pub fn effective_sources(&self) -> Vec<String> {
        if self.sources.is_empty() {
            vec![".".to_string()]
        } else {
            self.sources.clone()
        }
    }

    /// Scale for recipes without their own, defaulting to the item default.
    pub fn effective_scale(&self) -> u32 {
        self.scale.unwrap_or(crate::config::DEFAULT_SCALE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_minimal_manifest() {
        let yaml = "output: build";
        let manifest = Manifest::parse(yaml).unwrap();

        assert_eq!(manifest.output, PathBuf::from("build"));
        assert!(manifest.sources.is_empty());
        assert!(manifest.scale.is_none());
    }

    #[test]
    fn test_parse_full_manifest() {
        let yaml = r#"
sources:
  - recipes/
  - loot/
output: dist/items
scale: 6
excludes:
  - "*.bak"
  - "**/temp/*"
"#;
        let manifest = Manifest::parse(yaml).unwrap();

        assert_eq!(manifest.sources, vec!["recipes/", "loot/"]);
        assert_eq!(manifest.output, PathBuf::from("dist/items"));
        assert_eq!(manifest.scale, Some(6));
        assert_eq!(manifest.effective_scale(), 6);
        assert_eq!(manifest.excludes, vec!["*.bak", "**/temp/*"]);
    }

    #[test]
    fn test_default_manifest() {
        let manifest = Manifest::default();

        assert!(manifest.sources.is_empty());
        assert_eq!(manifest.output, PathBuf::from("dist"));
        assert!(manifest.scale.is_none());
        assert_eq!(manifest.effective_scale(), crate::config::DEFAULT_SCALE);
        assert!(manifest.excludes.is_empty());
    }

    #[test]
    fn test_effective_sources() {
        let mut manifest = Manifest::default();
        assert_eq!(manifest.effective_sources(), vec!["."]);

        manifest.sources = vec!["recipes/".to_string()];
        assert_eq!(manifest.effective_sources(), vec!["recipes/"]);
    }

    #[test]
    fn test_is_excluded_extension() {
        let manifest = Manifest {
            excludes: vec!["*.bak".to_string()],
            ..Default::default()
        };

        assert!(manifest.is_excluded(Path::new("file.bak")));
        assert!(manifest.is_excluded(Path::new("path/to/file.bak")));
        assert!(!manifest.is_excluded(Path::new("blades.item.yaml")));
    }

    #[test]
    fn test_is_excluded_directory() {
        let manifest = Manifest {
            excludes: vec!["**/node_modules/*".to_string()],
            ..Default::default()
        };

        assert!(manifest.is_excluded(Path::new("node_modules/foo")));
        assert!(manifest.is_excluded(Path::new("path/node_modules/bar")));
        assert!(!manifest.is_excluded(Path::new("recipes/rings.item.yaml")));
    }

    #[test]
    fn test_is_excluded_exact() {
        let manifest = Manifest {
            excludes: vec!["temp".to_string()],
            ..Default::default()
        };

        assert!(manifest.is_excluded(Path::new("temp")));
        assert!(manifest.is_excluded(Path::new("path/temp/file")));
    }

    #[test]
    fn test_parse_empty_manifest() {
        let yaml = "";
        let manifest = Manifest::parse(yaml).unwrap();

        // Should use defaults
        assert_eq!(manifest.output, PathBuf::from("dist"));
    }
}
