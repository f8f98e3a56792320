//! Boundary shading.
//!
//! Shading runs in two passes over a shape's bounding box. The first pass
//! rasterizes membership into a mask; the second classifies each member
//! cell by its four axis neighbours. Neighbour queries read the finished
//! mask, never a partially painted surface.

use crate::shape::{BoundingBox, Membership};
use crate::types::{Colour, Palette};

use super::Canvas;

/// The role a shaded cell plays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tone {
    Base,
    Highlight,
    Shadow,
    Outline,
}

impl Tone {
    pub fn colour(self, palette: &Palette) -> Colour {
        match self {
            Tone::Base => palette.base,
            Tone::Highlight => palette.highlight,
            Tone::Shadow => palette.shadow,
            Tone::Outline => palette.outline.unwrap_or(palette.shadow),
        }
    }
}

/// Which axis neighbours of a member cell are outside the shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Exposure {
    pub top: bool,
    pub left: bool,
    pub bottom: bool,
    pub right: bool,
}

impl Exposure {
    pub fn is_boundary(&self) -> bool {
        self.top || self.left || self.bottom || self.right
    }

    /// Tone of the first exposed side, testing top, left, bottom, right.
    pub fn side_tone(&self) -> Option<Tone> {
        if self.top || self.left {
            Some(Tone::Highlight)
        } else if self.bottom || self.right {
            Some(Tone::Shadow)
        } else {
            None
        }
    }
}

/// Secondary shading applied to interior cells after the edge pass.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Overlay {
    /// Crest of a domed ring band between `inner` and `outer` radii:
    /// highlighted in the upper half, shadowed in the lower half.
    DomeBands { center: (i32, i32), inner: f64, outer: f64 },
    /// Sphere-like: a highlight spot upper-left and shadow lower-right.
    RadialQuadrants { center: (i32, i32), radius: f64 },
}

impl Overlay {
    /// Tone override for an interior cell, or `None` outside the overlay.
    fn tone_at(&self, x: i32, y: i32) -> Option<Tone> {
        match *self {
            Overlay::DomeBands {
                center,
                inner,
                outer,
            } => {
                let (dx, dy) = ((x - center.0) as f64, (y - center.1) as f64);
                let d = (dx * dx + dy * dy).sqrt();
                if d <= inner || d > outer || outer <= inner {
                    return None;
                }
                let band = (d - inner) / (outer - inner);
                if !(0.3..=0.7).contains(&band) {
                    return None;
                }
                if dy < 0.0 {
                    Some(Tone::Highlight)
                } else if dy > 0.0 {
                    Some(Tone::Shadow)
                } else {
                    None
                }
            }
            Overlay::RadialQuadrants { center, radius } => {
                let (dx, dy) = ((x - center.0) as f64, (y - center.1) as f64);
                if radius <= 0.0 || dx * dx + dy * dy > radius * radius {
                    return None;
                }
                let spot = radius * 0.5;
                let (hx, hy) = (dx + spot * 0.7, dy + spot * 0.7);
                if dx < 0.0 && dy < 0.0 && hx * hx + hy * hy <= spot * spot {
                    Some(Tone::Highlight)
                } else if dx > 0.0 && dy > 0.0 && dx + dy >= radius * 0.8 {
                    Some(Tone::Shadow)
                } else {
                    None
                }
            }
        }
    }
}

/// One shaded member cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShadedCell {
    pub x: i32,
    pub y: i32,
    pub tone: Tone,
    pub colour: Colour,
}

/// Result of shading a shape: every member cell with its colour, in
/// row-major order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Shading {
    cells: Vec<ShadedCell>,
}

impl Shading {
    pub fn cells(&self) -> &[ShadedCell] {
        &self.cells
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn get(&self, x: i32, y: i32) -> Option<&ShadedCell> {
        self.cells
            .binary_search_by(|c| (c.y, c.x).cmp(&(y, x)))
            .ok()
            .map(|i| &self.cells[i])
    }

    /// Write every cell through the canvas (respecting its clip).
    pub fn paint(&self, canvas: &mut Canvas<'_>) {
        for cell in &self.cells {
            canvas.set(cell.x, cell.y, cell.colour);
        }
    }
}

/// Edge shader for one palette.
#[derive(Debug, Clone)]
pub struct EdgeShader<'p> {
    palette: &'p Palette,
    overlays: Vec<Overlay>,
}

impl<'p> EdgeShader<'p> {
    pub fn new(palette: &'p Palette) -> Self {
        Self {
            palette,
            overlays: Vec::new(),
        }
    }

    pub fn with_overlay(mut self, overlay: Overlay) -> Self {
        self.overlays.push(overlay);
        self
    }

    /// Classify one member cell's neighbours against a finished mask.
    fn exposure(mask: &Mask, x: i32, y: i32) -> Exposure {
        Exposure {
            top: !mask.get(x, y - 1),
            left: !mask.get(x - 1, y),
            bottom: !mask.get(x, y + 1),
            right: !mask.get(x + 1, y),
        }
    }

    fn tone(&self, exposure: Exposure, x: i32, y: i32) -> Tone {
        if exposure.is_boundary() {
            if self.palette.outline.is_some() {
                return Tone::Outline;
            }
            if let Some(tone) = exposure.side_tone() {
                return tone;
            }
        }
        self.overlays
            .iter()
            .rev()
            .find_map(|o| o.tone_at(x, y))
            .unwrap_or(Tone::Base)
    }

    /// Shade every member cell of `shape`.
    pub fn shade(&self, shape: &dyn Membership) -> Shading {
        let mask = Mask::rasterize(shape);
        let cells = mask
            .members()
            .map(|(x, y)| {
                let tone = self.tone(Self::exposure(&mask, x, y), x, y);
                ShadedCell {
                    x,
                    y,
                    tone,
                    colour: tone.colour(self.palette),
                }
            })
            .collect();
        Shading { cells }
    }

    /// Shade `shape` and paint it through `canvas`.
    pub fn paint(&self, shape: &dyn Membership, canvas: &mut Canvas<'_>) -> Shading {
        let shading = self.shade(shape);
        shading.paint(canvas);
        shading
    }
}

/// Rasterized membership over a bounding box.
struct Mask {
    bounds: BoundingBox,
    bits: Vec<bool>,
}

impl Mask {
    fn rasterize(shape: &dyn Membership) -> Self {
        let bounds = shape.bounds();
        let bits = bounds.cells().map(|(x, y)| shape.contains(x, y)).collect();
        Self { bounds, bits }
    }

    fn get(&self, x: i32, y: i32) -> bool {
        if !self.bounds.contains(x, y) {
            return false;
        }
        let w = self.bounds.width() as usize;
        let i = (y - self.bounds.min_y) as usize * w + (x - self.bounds.min_x) as usize;
        self.bits[i]
    }

    fn members(&self) -> impl Iterator<Item = (i32, i32)> + '_ {
        self.bounds
            .cells()
            .zip(self.bits.iter())
            .filter_map(|(cell, &inside)| inside.then_some(cell))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::{GridSpec, LogicalSurface};
    use crate::shape::{Annulus, Disc, Point, Rect, ShapeSpec, TaperedBody, WidthProfile};

    fn palette() -> Palette {
        Palette::new(
            "test",
            Colour::rgb(100, 100, 100),
            Colour::rgb(200, 200, 200),
            Colour::rgb(30, 30, 30),
        )
    }

    fn tone_at(shading: &Shading, x: i32, y: i32) -> Tone {
        shading.get(x, y).map(|c| c.tone).unwrap()
    }

    #[test]
    fn test_rect_sides() {
        let p = palette();
        let rect = ShapeSpec::Rect(Rect::new(5, 5)).at(Point::new(2, 0));
        let shading = EdgeShader::new(&p).shade(&rect);
        assert_eq!(shading.len(), 25);
        assert_eq!(tone_at(&shading, 2, 0), Tone::Highlight);
        assert_eq!(tone_at(&shading, 0, 2), Tone::Highlight);
        assert_eq!(tone_at(&shading, 2, 4), Tone::Shadow);
        assert_eq!(tone_at(&shading, 4, 2), Tone::Shadow);
        assert_eq!(tone_at(&shading, 2, 2), Tone::Base);
    }

    #[test]
    fn test_lookup_finds_every_cell() {
        let p = palette();
        let ring = ShapeSpec::Annulus(Annulus::new(9, 4)).at(Point::new(-3, 5));
        let shading = EdgeShader::new(&p).shade(&ring);
        for cell in shading.cells() {
            assert_eq!(shading.get(cell.x, cell.y), Some(cell));
        }
        assert!(shading.cells().windows(2).all(|w| (w[0].y, w[0].x) < (w[1].y, w[1].x)));
        assert!(shading.get(-3, 5).is_none());
        assert!(shading.get(i32::MAX, i32::MIN).is_none());
    }

    #[test]
    fn test_corner_ties_prefer_top_left() {
        let p = palette();
        let rect = ShapeSpec::Rect(Rect::new(5, 5)).at(Point::new(2, 0));
        let shading = EdgeShader::new(&p).shade(&rect);
        // top-right: top exposed first
        assert_eq!(tone_at(&shading, 4, 0), Tone::Highlight);
        // bottom-left: left exposed before bottom
        assert_eq!(tone_at(&shading, 0, 4), Tone::Highlight);
        // bottom-right: only bottom/right
        assert_eq!(tone_at(&shading, 4, 4), Tone::Shadow);
    }

    #[test]
    fn test_outline_overrides_sides() {
        let p = palette().with_outline(Colour::BLACK);
        let disc = ShapeSpec::Disc(Disc::new(4)).at(Point::new(5, 5));
        let shading = EdgeShader::new(&p).shade(&disc);
        for cell in shading.cells() {
            let exposed = [(0, -1), (-1, 0), (0, 1), (1, 0)]
                .iter()
                .any(|(dx, dy)| !disc.contains(cell.x + dx, cell.y + dy));
            if exposed {
                assert_eq!(cell.colour, Colour::BLACK);
            } else {
                assert_eq!(cell.colour, p.base);
            }
        }
    }

    #[test]
    fn test_boundary_cells_never_base() {
        let p = palette();
        assert!(p.has_distinct_tones());
        let shapes = vec![
            ShapeSpec::Annulus(Annulus::new(9, 5)).at(Point::new(10, 10)),
            ShapeSpec::Tapered(TaperedBody::new(30, WidthProfile::Linear { start: 7, end: 1 }))
                .at(Point::new(8, 0)),
            ShapeSpec::Disc(Disc::new(1)).at(Point::new(0, 0)),
        ];
        for shape in shapes {
            let shading = EdgeShader::new(&p).shade(&shape);
            for cell in shading.cells() {
                let boundary = [(0, -1), (-1, 0), (0, 1), (1, 0)]
                    .iter()
                    .any(|(dx, dy)| !shape.contains(cell.x + dx, cell.y + dy));
                if boundary {
                    assert_ne!(cell.colour, p.base, "boundary cell ({}, {})", cell.x, cell.y);
                }
            }
        }
    }

    #[test]
    fn test_overlay_only_touches_interior() {
        let p = palette();
        let ring = ShapeSpec::Annulus(Annulus::new(9, 4)).at(Point::new(10, 10));
        let plain = EdgeShader::new(&p).shade(&ring);
        let domed = EdgeShader::new(&p)
            .with_overlay(Overlay::DomeBands {
                center: (10, 10),
                inner: 4.0,
                outer: 9.0,
            })
            .shade(&ring);

        let mut changed = 0;
        for (a, b) in plain.cells().iter().zip(domed.cells()) {
            if a.tone != Tone::Base {
                assert_eq!(a.tone, b.tone);
            } else if b.tone != Tone::Base {
                changed += 1;
            }
        }
        assert!(changed > 0);
        // crest above centre highlighted, below shadowed
        assert_eq!(tone_at(&domed, 10, 3), Tone::Highlight);
        assert_eq!(tone_at(&domed, 10, 17), Tone::Shadow);
    }

    #[test]
    fn test_radial_quadrants() {
        let p = palette();
        let gem = ShapeSpec::Disc(Disc::new(6)).at(Point::new(10, 10));
        let shading = EdgeShader::new(&p)
            .with_overlay(Overlay::RadialQuadrants {
                center: (10, 10),
                radius: 6.0,
            })
            .shade(&gem);
        assert_eq!(tone_at(&shading, 8, 8), Tone::Highlight);
        assert_eq!(tone_at(&shading, 13, 13), Tone::Shadow);
        assert_eq!(tone_at(&shading, 10, 10), Tone::Base);
    }

    #[test]
    fn test_empty_shape_shades_nothing() {
        let p = palette();
        let none = ShapeSpec::Disc(Disc::new(0)).at(Point::new(3, 3));
        assert!(EdgeShader::new(&p).shade(&none).is_empty());
    }

    #[test]
    fn test_paint_writes_colours() {
        let p = palette();
        let rect = ShapeSpec::Rect(Rect::new(3, 3)).at(Point::new(1, 0));
        let mut surface = LogicalSurface::new(GridSpec::new(4, 4, 1)).unwrap();
        let mut canvas = Canvas::new(&mut surface);
        EdgeShader::new(&p).paint(&rect, &mut canvas);
        assert_eq!(surface.get(1, 1), Some(p.base));
        assert_eq!(surface.get(0, 0), Some(p.highlight));
        assert_eq!(surface.get(2, 2), Some(p.shadow));
        assert_eq!(surface.get(3, 3), None);
    }

    #[test]
    fn test_shading_is_deterministic() {
        let p = palette();
        let ring = ShapeSpec::Annulus(Annulus::new(8, 5)).at(Point::new(9, 9));
        let shader = EdgeShader::new(&p);
        assert_eq!(shader.shade(&ring), shader.shade(&ring));
    }
}
