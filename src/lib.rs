//! px-armory - Procedural pixel-art item sprites
//!
//! Generates fantasy equipment (swords, maces, tridents, bows, shields,
//! rings, armor and robes) from a small set of parametric silhouettes,
//! shaded per material and exported as PNG data URLs.

pub mod assemble;
pub mod cli;
pub mod config;
pub mod diagnostic;
pub mod discovery;
pub mod error;
pub mod items;
pub mod output;
pub mod render;
pub mod shape;
pub mod types;

pub use assemble::{assemble, ComponentPlan, Item, ItemData, ItemKind, ParameterSampler};
pub use config::{ItemOptions, Recipe, ResolvedSeed, SeedSource};
pub use diagnostic::{Diagnostic, Diagnostics, Severity};
pub use discovery::{discover, discover_paths, DiscoveryResult, Manifest, ScanResult};
pub use error::{ArmoryError, Result};
pub use items::{
    generate, generate_armor, generate_bow, generate_mace, generate_ring, generate_robe,
    generate_shield, generate_sword, generate_trident,
};
pub use render::{encode_data_url, write_png, GridSpec, LogicalSurface};
pub use shape::{Membership, ShapeSpec, Silhouette};
pub use types::{Colour, MaterialCatalog, MaterialClass, MaterialDef, Palette};
