//! Runs a component plan and produces the finished item.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::{ResolvedSeed, SeedSource};
use crate::diagnostic::{Diagnostic, Diagnostics, BROKEN_ITEM};
use crate::error::{ArmoryError, Result};
use crate::render::{self, Canvas, GridSpec, LogicalSurface};

use super::{Attachments, Component};

/// Name of every sentinel item.
pub const BROKEN_ITEM_NAME: &str = "Broken Item";

/// The item families the generator knows.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum ItemKind {
    Sword,
    Mace,
    Trident,
    Bow,
    Shield,
    Ring,
    Armor,
    Robe,
}

impl ItemKind {
    pub const ALL: [ItemKind; 8] = [
        ItemKind::Sword,
        ItemKind::Mace,
        ItemKind::Trident,
        ItemKind::Bow,
        ItemKind::Shield,
        ItemKind::Ring,
        ItemKind::Armor,
        ItemKind::Robe,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ItemKind::Sword => "sword",
            ItemKind::Mace => "mace",
            ItemKind::Trident => "trident",
            ItemKind::Bow => "bow",
            ItemKind::Shield => "shield",
            ItemKind::Ring => "ring",
            ItemKind::Armor => "armor",
            ItemKind::Robe => "robe",
        }
    }
}

impl fmt::Display for ItemKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Tokens the display name is composed from.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ItemName {
    pub decoration: Option<String>,
    pub material: String,
    pub style: String,
}

impl ItemName {
    pub fn new(material: impl Into<String>, style: impl Into<String>) -> Self {
        Self {
            decoration: None,
            material: material.into(),
            style: style.into(),
        }
    }

    pub fn decorated(mut self, decoration: impl Into<String>) -> Self {
        self.decoration = Some(decoration.into());
        self
    }

    /// e.g. "Ruby-Set Gold Signet Ring".
    pub fn compose(&self) -> String {
        let mut words: Vec<String> = Vec::new();
        if let Some(d) = &self.decoration {
            words.push(d.clone());
        }
        for token in [&self.material, &self.style] {
            if !token.is_empty() {
                words.push(title_case(token));
            }
        }
        words.join(" ")
    }
}

fn title_case(s: &str) -> String {
    s.split([' ', '-'])
        .filter(|w| !w.is_empty())
        .map(|w| {
            let mut chars = w.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Structured per-item metadata mirroring the drawn parameters.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct ItemData(BTreeMap<String, serde_json::Value>);

impl ItemData {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<serde_json::Value>) {
        self.0.insert(key.into(), value.into());
    }

    pub fn with(mut self, key: impl Into<String>, value: impl Into<serde_json::Value>) -> Self {
        self.insert(key, value);
        self
    }

    pub fn get(&self, key: &str) -> Option<&serde_json::Value> {
        self.0.get(key)
    }

    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(|v| v.as_str())
    }

    pub fn get_i64(&self, key: &str) -> Option<i64> {
        self.get(key).and_then(|v| v.as_i64())
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }
}

/// A generated item.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    #[serde(rename = "type")]
    pub kind: ItemKind,
    pub name: String,
    pub seed: u64,
    pub item_data: ItemData,
    pub image_data_url: String,
    pub warnings: Vec<Diagnostic>,
    #[serde(skip)]
    pub surface: Option<LogicalSurface>,
}

impl Item {
    /// The visibly broken item returned when generation fails.
    pub fn sentinel(kind: ItemKind, seed: u64, err: &ArmoryError, diagnostics: Diagnostics) -> Self {
        let mut diagnostics = diagnostics;
        diagnostics.push(
            Diagnostic::error(BROKEN_ITEM, format!("{} generation failed: {}", kind, err))
                .with_help("the item was replaced by a placeholder"),
        );

        Self {
            kind,
            name: BROKEN_ITEM_NAME.to_string(),
            seed,
            item_data: ItemData::new().with("error", err.to_string()),
            image_data_url: render::placeholder_data_url(),
            warnings: diagnostics.into_vec(),
            surface: render::png::placeholder_surface().ok(),
        }
    }

    pub fn is_sentinel(&self) -> bool {
        self.name == BROKEN_ITEM_NAME && self.item_data.contains_key("error")
    }

    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(|e| ArmoryError::Encode {
            message: format!("Failed to serialize item: {}", e),
        })
    }
}

type Build = Box<dyn FnOnce(&Attachments) -> Result<Box<dyn Component>>>;

struct Step {
    parent: Option<String>,
    build: Build,
}

/// An ordered list of component constructors plus the item's metadata.
pub struct ComponentPlan {
    kind: ItemKind,
    grid: GridSpec,
    seed: ResolvedSeed,
    name: ItemName,
    data: ItemData,
    diagnostics: Diagnostics,
    steps: Vec<Step>,
}

impl ComponentPlan {
    pub fn new(kind: ItemKind, grid: GridSpec, seed: ResolvedSeed) -> Self {
        Self {
            kind,
            grid,
            seed,
            name: ItemName::default(),
            data: ItemData::new(),
            diagnostics: Diagnostics::new(),
            steps: Vec::new(),
        }
    }

    pub fn named(mut self, name: ItemName) -> Self {
        self.name = name;
        self
    }

    pub fn with_data(mut self, data: ItemData) -> Self {
        self.data = data;
        self
    }

    pub fn with_diagnostics(mut self, diagnostics: Diagnostics) -> Self {
        self.diagnostics = diagnostics;
        self
    }

    /// Add an unclipped component. Decorations are added this way too.
    pub fn component<F>(mut self, build: F) -> Self
    where
        F: FnOnce(&Attachments) -> Result<Box<dyn Component>> + 'static,
    {
        self.steps.push(Step {
            parent: None,
            build: Box::new(build),
        });
        self
    }

    /// Add a component clipped against an already drawn parent.
    pub fn attached<F>(mut self, parent: &str, build: F) -> Self
    where
        F: FnOnce(&Attachments) -> Result<Box<dyn Component>> + 'static,
    {
        self.steps.push(Step {
            parent: Some(parent.to_string()),
            build: Box::new(build),
        });
        self
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }
}

/// Draw every step onto one surface, in order.
fn draw_steps(grid: GridSpec, steps: Vec<Step>) -> Result<LogicalSurface> {
    let mut surface = LogicalSurface::new(grid)?;
    let mut board = Attachments::default();
    let mut drawn: Vec<Box<dyn Component>> = Vec::with_capacity(steps.len());

    for step in steps {
        let component = (step.build)(&board)?;
        let anchors = match &step.parent {
            None => component.draw(&mut Canvas::new(&mut surface))?,
            Some(parent_id) => {
                let parent = drawn
                    .iter()
                    .find(|c| c.id() == parent_id)
                    .ok_or_else(|| ArmoryError::Build {
                        message: format!(
                            "component '{}' is attached to '{}', which has not been drawn",
                            component.id(),
                            parent_id
                        ),
                        help: Some("list parents before their children in the plan".to_string()),
                    })?;
                component.draw(&mut Canvas::clipped(&mut surface, parent.footprint()))?
            }
        };
        debug!(
            component = component.id(),
            parent = step.parent.as_deref().unwrap_or("-"),
            anchors = anchors.len(),
            "drew component"
        );
        board.absorb(anchors);
        drawn.push(component);
    }
    Ok(surface)
}

/// Run a plan to completion. Failures produce the sentinel item.
pub fn assemble(plan: ComponentPlan) -> Item {
    let ComponentPlan {
        kind,
        grid,
        seed,
        name,
        data,
        diagnostics,
        steps,
    } = plan;

    let finished =
        draw_steps(grid, steps).and_then(|surface| Ok((render::encode_data_url(&surface)?, surface)));

    match finished {
        Ok((image_data_url, surface)) => {
            let item_data = data.with(
                "seedSource",
                match seed.source {
                    SeedSource::Explicit => "explicit",
                    SeedSource::Entropy => "entropy",
                },
            );
            debug!(item = %kind, name = %name.compose(), cells = surface.filled_count(), "assembled item");
            Item {
                kind,
                name: name.compose(),
                seed: seed.value,
                item_data,
                image_data_url,
                warnings: diagnostics.into_vec(),
                surface: Some(surface),
            }
        }
        Err(err) => Item::sentinel(kind, seed.value, &err, diagnostics),
    }
}
