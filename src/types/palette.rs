//! Material palette: the tones a silhouette is shaded with.

use super::Colour;

/// Percentage used when deriving tones from a single base colour.
const DERIVED_HIGHLIGHT: f32 = 35.0;
const DERIVED_SHADOW: f32 = 35.0;

/// The colour set for one material.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    /// Display name (e.g. "Steel").
    pub name: String,
    pub base: Colour,
    pub highlight: Colour,
    pub shadow: Colour,
    /// When set, every boundary cell takes this colour regardless of side.
    pub outline: Option<Colour>,
}

impl Palette {
    /// Create a palette from explicit tones.
    pub fn new(name: impl Into<String>, base: Colour, highlight: Colour, shadow: Colour) -> Self {
        Self {
            name: name.into(),
            base,
            highlight,
            shadow,
            outline: None,
        }
    }

    /// Derive highlight and shadow from a base colour in HSL space.
    pub fn derived(name: impl Into<String>, base: Colour) -> Self {
        Self::new(
            name,
            base,
            base.lighten(DERIVED_HIGHLIGHT),
            base.darken(DERIVED_SHADOW),
        )
    }

    /// Set the outline colour.
    pub fn with_outline(mut self, outline: Colour) -> Self {
        self.outline = Some(outline);
        self
    }

    /// Whether base, highlight and shadow are pairwise distinct.
    pub fn has_distinct_tones(&self) -> bool {
        self.base != self.highlight && self.base != self.shadow && self.highlight != self.shadow
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_derived_tones_are_distinct() {
        let p = Palette::derived("Ruby", Colour::rgb(180, 20, 40));
        assert!(p.has_distinct_tones());
        assert!(p.outline.is_none());
    }

    #[test]
    fn test_with_outline() {
        let p = Palette::derived("Oak", Colour::rgb(120, 80, 40)).with_outline(Colour::BLACK);
        assert_eq!(p.outline, Some(Colour::BLACK));
    }

    #[test]
    fn test_flat_palette_not_distinct() {
        let c = Colour::rgb(1, 2, 3);
        assert!(!Palette::new("flat", c, c, Colour::BLACK).has_distinct_tones());
    }
}
