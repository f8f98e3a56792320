//! Generation options and batch recipes.
//!
//! [`ItemOptions`] is the per-call configuration every generator takes.
//! [`Recipe`] files (`*.item.yaml`) describe batches for `armory build`.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::assemble::ItemKind;
use crate::error::{ArmoryError, Result};

pub use crate::discovery::Manifest;

/// Output scale used when none is given.
pub const DEFAULT_SCALE: u32 = 4;

/// Suffix of recipe files.
pub const RECIPE_SUFFIX: &str = ".item.yaml";

/// Where an item's seed came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SeedSource {
    Explicit,
    Entropy,
}

/// The seed actually used for a generation call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedSeed {
    pub value: u64,
    pub source: SeedSource,
}

impl ResolvedSeed {
    pub fn explicit(value: u64) -> Self {
        Self {
            value,
            source: SeedSource::Explicit,
        }
    }

    pub fn entropy() -> Self {
        Self {
            value: rand::random::<u64>(),
            source: SeedSource::Entropy,
        }
    }
}

/// Options accepted by every item generator.
///
/// Material slots that an item type does not use are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ItemOptions {
    pub sub_type: Option<String>,
    pub material: Option<String>,
    pub grip_material: Option<String>,
    pub string_material: Option<String>,
    pub haft_material: Option<String>,
    pub hilt_material: Option<String>,
    pub pommel_material: Option<String>,
    pub gem_material: Option<String>,
    /// Secondary metal or cloth: shield boss and rim, pauldrons, rivets, sashes.
    pub trim_material: Option<String>,
    pub seed: Option<u64>,
    pub scale: Option<u32>,
}

impl ItemOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_sub_type(mut self, sub_type: impl Into<String>) -> Self {
        self.sub_type = Some(sub_type.into());
        self
    }

    pub fn with_material(mut self, material: impl Into<String>) -> Self {
        self.material = Some(material.into());
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_scale(mut self, scale: u32) -> Self {
        self.scale = Some(scale);
        self
    }

    /// Output scale, defaulting to [`DEFAULT_SCALE`].
    pub fn effective_scale(&self) -> u32 {
        self.scale.unwrap_or(DEFAULT_SCALE)
    }

    /// The explicit seed, or a fresh one drawn from entropy.
    pub fn resolve_seed(&self) -> ResolvedSeed {
        match self.seed {
            Some(seed) => ResolvedSeed::explicit(seed),
            None => ResolvedSeed::entropy(),
        }
    }

    pub fn sub_type(&self) -> Option<&str> {
        self.sub_type.as_deref()
    }

    pub fn material(&self) -> Option<&str> {
        self.material.as_deref()
    }
}

fn default_count() -> u32 {
    1
}

/// A batch description loaded from a `*.item.yaml` file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recipe {
    /// Output file stem; defaults to the recipe's file name.
    #[serde(default)]
    pub name: Option<String>,
    pub item: ItemKind,
    #[serde(default = "default_count")]
    pub count: u32,
    #[serde(default)]
    pub options: ItemOptions,
}

impl Recipe {
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| ArmoryError::Io {
            path: path.to_path_buf(),
            message: format!("Failed to read recipe: {}", e),
        })?;
        Self::parse(&content).map_err(|e| match e {
            ArmoryError::Parse { message, help } => ArmoryError::Parse {
                message: format!("{}: {}", path.display(), message),
                help,
            },
            other => other,
        })
    }

    pub fn parse(content: &str) -> Result<Self> {
        serde_yaml::from_str(content).map_err(|e| ArmoryError::Parse {
            message: format!("Invalid recipe: {}", e),
            help: Some("A recipe needs at least `item: <kind>`".to_string()),
        })
    }

    /// The output stem for this recipe loaded from `path`.
    pub fn stem(&self, path: &Path) -> String {
        if let Some(name) = &self.name {
            return name.clone();
        }
        path.file_name()
            .and_then(|f| f.to_str())
            .map(|f| f.strip_suffix(RECIPE_SUFFIX).unwrap_or(f).to_string())
            .unwrap_or_else(|| self.item.to_string())
    }

    /// Options for the `index`-th item of the batch.
    ///
    /// An explicit seed is offset by the index so every item differs but
    /// the batch replays.
    pub fn options_for(&self, index: u32) -> ItemOptions {
        let mut options = self.options.clone();
        if let Some(seed) = options.seed {
            options.seed = Some(seed.wrapping_add(index as u64));
        }
        options
    }

    /// Fill in the manifest's default scale when the recipe has none.
    pub fn with_default_scale(mut self, scale: Option<u32>) -> Self {
        if self.options.scale.is_none() {
            self.options.scale = scale;
        }
        self
    }
}
