//! Built-in material catalog.
//!
//! Maps a material key (e.g. `steel`, `oak`, `ruby`) to its [`Palette`].
//! Lookup is total: an unknown key resolves to [`FALLBACK_MATERIAL`].

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{ArmoryError, Result};

use super::{Colour, Palette};

/// Key substituted for any unknown material.
pub const FALLBACK_MATERIAL: &str = "iron";

/// Broad material family, used to pick candidates for a slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MaterialClass {
    Metal,
    Wood,
    Leather,
    Cord,
    Gem,
    Cloth,
}

impl MaterialClass {
    pub const ALL: [MaterialClass; 6] = [
        MaterialClass::Metal,
        MaterialClass::Wood,
        MaterialClass::Leather,
        MaterialClass::Cord,
        MaterialClass::Gem,
        MaterialClass::Cloth,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            MaterialClass::Metal => "metal",
            MaterialClass::Wood => "wood",
            MaterialClass::Leather => "leather",
            MaterialClass::Cord => "cord",
            MaterialClass::Gem => "gem",
            MaterialClass::Cloth => "cloth",
        }
    }
}

impl fmt::Display for MaterialClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MaterialClass {
    type Err = ArmoryError;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ArmoryError::Parse {
                message: format!("Unknown material class: {}", s),
                help: Some("Use one of: metal, wood, leather, cord, gem, cloth".to_string()),
            })
    }
}

/// Tones of a catalog entry.
#[derive(Debug, Clone, Copy)]
enum Tones {
    /// Hand-picked base, highlight and shadow.
    Explicit(Colour, Colour, Colour),
    /// Highlight and shadow derived from the base in HSL space.
    Derived(Colour),
}

/// A catalog entry.
#[derive(Debug, Clone, Copy)]
pub struct MaterialDef {
    pub key: &'static str,
    pub name: &'static str,
    pub class: MaterialClass,
    tones: Tones,
    outline: Option<Colour>,
}

impl MaterialDef {
    const fn explicit(
        key: &'static str,
        name: &'static str,
        class: MaterialClass,
        base: Colour,
        highlight: Colour,
        shadow: Colour,
    ) -> Self {
        Self {
            key,
            name,
            class,
            tones: Tones::Explicit(base, highlight, shadow),
            outline: None,
        }
    }

    const fn derived(key: &'static str, name: &'static str, class: MaterialClass, base: Colour) -> Self {
        Self {
            key,
            name,
            class,
            tones: Tones::Derived(base),
            outline: None,
        }
    }

    const fn outlined(mut self, outline: Colour) -> Self {
        self.outline = Some(outline);
        self
    }

    /// Build the palette for this entry.
    pub fn palette(&self) -> Palette {
        let palette = match self.tones {
            Tones::Explicit(base, highlight, shadow) => Palette::new(self.name, base, highlight, shadow),
            Tones::Derived(base) => Palette::derived(self.name, base),
        };
        match self.outline {
            Some(outline) => palette.with_outline(outline),
            None => palette,
        }
    }
}

use MaterialClass::{Cloth, Cord, Gem, Leather, Metal, Wood};

const MATERIALS: &[MaterialDef] = &[
    // metals
    MaterialDef::explicit("iron", "Iron", Metal, Colour::rgb(0x7a, 0x7d, 0x82), Colour::rgb(0xb4, 0xb8, 0xbd), Colour::rgb(0x45, 0x47, 0x4c)),
    MaterialDef::explicit("steel", "Steel", Metal, Colour::rgb(0xa8, 0xb2, 0xbd), Colour::rgb(0xe4, 0xea, 0xf0), Colour::rgb(0x5c, 0x66, 0x70)),
    MaterialDef::explicit("bronze", "Bronze", Metal, Colour::rgb(0xb0, 0x7a, 0x3c), Colour::rgb(0xe0, 0xaa, 0x64), Colour::rgb(0x6e, 0x46, 0x1e)),
    MaterialDef::explicit("copper", "Copper", Metal, Colour::rgb(0xb8, 0x66, 0x3c), Colour::rgb(0xe8, 0x98, 0x6a), Colour::rgb(0x70, 0x38, 0x1c)),
    MaterialDef::explicit("silver", "Silver", Metal, Colour::rgb(0xc8, 0xcc, 0xd4), Colour::rgb(0xf4, 0xf6, 0xfa), Colour::rgb(0x80, 0x84, 0x8e)),
    MaterialDef::explicit("gold", "Gold", Metal, Colour::rgb(0xe0, 0xb0, 0x30), Colour::rgb(0xff, 0xe0, 0x70), Colour::rgb(0x96, 0x6c, 0x10)),
    MaterialDef::explicit("mithril", "Mithril", Metal, Colour::rgb(0xb8, 0xd8, 0xe8), Colour::rgb(0xf0, 0xfc, 0xff), Colour::rgb(0x6c, 0x90, 0xa8)),
    MaterialDef::explicit("obsidian", "Obsidian", Metal, Colour::rgb(0x2c, 0x26, 0x3a), Colour::rgb(0x5a, 0x50, 0x72), Colour::rgb(0x14, 0x10, 0x1c))
        .outlined(Colour::rgb(0x08, 0x06, 0x0c)),
    MaterialDef::derived("adamantine", "Adamantine", Metal, Colour::rgb(0x4a, 0x8a, 0x6e)),
    // woods
    MaterialDef::explicit("oak", "Oak", Wood, Colour::rgb(0x8a, 0x5a, 0x2c), Colour::rgb(0xb4, 0x80, 0x4a), Colour::rgb(0x54, 0x34, 0x16)),
    MaterialDef::explicit("ash", "Ash", Wood, Colour::rgb(0xc0, 0xa0, 0x78), Colour::rgb(0xe4, 0xcc, 0xa8), Colour::rgb(0x80, 0x64, 0x44)),
    MaterialDef::explicit("yew", "Yew", Wood, Colour::rgb(0xa0, 0x50, 0x30), Colour::rgb(0xcc, 0x7c, 0x54), Colour::rgb(0x60, 0x2c, 0x16)),
    MaterialDef::derived("ebony", "Ebony", Wood, Colour::rgb(0x3a, 0x2a, 0x22)),
    // leathers
    MaterialDef::explicit("leather", "Leather", Leather, Colour::rgb(0x7c, 0x4a, 0x26), Colour::rgb(0xa8, 0x6c, 0x40), Colour::rgb(0x4a, 0x2a, 0x12)),
    MaterialDef::derived("wrap-red", "Red Wrap", Leather, Colour::rgb(0x9c, 0x24, 0x24)),
    MaterialDef::derived("wrap-blue", "Blue Wrap", Leather, Colour::rgb(0x2a, 0x3c, 0x8c)),
    MaterialDef::derived("sharkskin", "Sharkskin", Leather, Colour::rgb(0x8c, 0x94, 0x90)),
    // cords
    MaterialDef::explicit("hemp", "Hemp", Cord, Colour::rgb(0xc8, 0xb8, 0x8a), Colour::rgb(0xe8, 0xdc, 0xb4), Colour::rgb(0x8c, 0x7c, 0x54)),
    MaterialDef::derived("silk", "Silk", Cord, Colour::rgb(0xe8, 0xe4, 0xdc)),
    MaterialDef::derived("sinew", "Sinew", Cord, Colour::rgb(0xb0, 0x8c, 0x70)),
    // gems
    MaterialDef::derived("ruby", "Ruby", Gem, Colour::rgb(0xc0, 0x10, 0x30)),
    MaterialDef::derived("sapphire", "Sapphire", Gem, Colour::rgb(0x20, 0x40, 0xc0)),
    MaterialDef::derived("emerald", "Emerald", Gem, Colour::rgb(0x10, 0xa0, 0x50)),
    MaterialDef::derived("amethyst", "Amethyst", Gem, Colour::rgb(0x8a, 0x3c, 0xc0)),
    MaterialDef::derived("topaz", "Topaz", Gem, Colour::rgb(0xe8, 0x9c, 0x20)),
    MaterialDef::explicit("diamond", "Diamond", Gem, Colour::rgb(0xd8, 0xf0, 0xf8), Colour::WHITE, Colour::rgb(0x90, 0xb4, 0xc4)),
    // cloths
    MaterialDef::explicit("linen", "Linen", Cloth, Colour::rgb(0xd8, 0xcc, 0xb0), Colour::rgb(0xf4, 0xec, 0xd8), Colour::rgb(0xa0, 0x92, 0x74)),
    MaterialDef::derived("wool-red", "Crimson Wool", Cloth, Colour::rgb(0x90, 0x20, 0x28)),
    MaterialDef::derived("velvet-blue", "Blue Velvet", Cloth, Colour::rgb(0x24, 0x2c, 0x78)),
    MaterialDef::derived("silk-green", "Green Silk", Cloth, Colour::rgb(0x28, 0x78, 0x44)),
    MaterialDef::derived("shadowweave", "Shadowweave", Cloth, Colour::rgb(0x2a, 0x24, 0x30))
        .outlined(Colour::rgb(0x0c, 0x0a, 0x10)),
];

/// Access to the built-in material table.
pub struct MaterialCatalog;

impl MaterialCatalog {
    /// All catalog entries in table order.
    pub fn all() -> &'static [MaterialDef] {
        MATERIALS
    }

    /// Look up an entry by key (case-insensitive).
    pub fn find(key: &str) -> Option<&'static MaterialDef> {
        let key = key.trim();
        MATERIALS.iter().find(|m| m.key.eq_ignore_ascii_case(key))
    }

    /// Entries of one class.
    pub fn of_class(class: MaterialClass) -> Vec<&'static MaterialDef> {
        MATERIALS.iter().filter(|m| m.class == class).collect()
    }

    /// The fallback entry.
    pub fn fallback() -> &'static MaterialDef {
        MATERIALS
            .iter()
            .find(|m| m.key == FALLBACK_MATERIAL)
            .unwrap_or(&MATERIALS[0])
    }

    /// Resolve a key to a palette; unknown keys get the fallback palette.
    pub fn get_palette(key: &str) -> Palette {
        Self::find(key).unwrap_or_else(Self::fallback).palette()
    }
}
