//! Banded composite silhouettes (shield bodies).
//!
//! The height is split into bands, each with its own width function over
//! the band's local progress. Presets for kite, heater and tower shields
//! are plain band tables.

use super::basic::within_rounded_corners;
use super::taper::progress;
use super::{row_span, BoundingBox};

/// Width of a band as a fraction of the full silhouette width.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BandWidth {
    Constant(f64),
    Linear { from: f64, to: f64 },
    /// Rounded top: rises quickly from `from` and eases into `to`.
    Dome { from: f64, to: f64 },
    /// Curved taper: holds near `from` and falls off toward `to`.
    Convex { from: f64, to: f64 },
}

impl BandWidth {
    fn fraction(&self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match *self {
            BandWidth::Constant(f) => f,
            BandWidth::Linear { from, to } => from + (to - from) * t,
            BandWidth::Dome { from, to } => {
                let s = 1.0 - t;
                from + (to - from) * (1.0 - s * s).sqrt()
            }
            BandWidth::Convex { from, to } => from + (to - from) * (1.0 - (1.0 - t * t).sqrt()),
        }
    }
}

/// One vertical band, ending at `until` (fraction of the height).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Band {
    pub until: f64,
    pub width: BandWidth,
}

const fn band(until: f64, width: BandWidth) -> Band {
    Band { until, width }
}

const KITE: &[Band] = &[
    band(0.22, BandWidth::Dome { from: 0.55, to: 1.0 }),
    band(0.42, BandWidth::Constant(1.0)),
    band(1.0, BandWidth::Linear { from: 1.0, to: 0.08 }),
];

const HEATER: &[Band] = &[
    band(0.08, BandWidth::Constant(1.0)),
    band(0.5, BandWidth::Constant(1.0)),
    band(1.0, BandWidth::Convex { from: 1.0, to: 0.08 }),
];

const TOWER: &[Band] = &[band(1.0, BandWidth::Constant(1.0))];

/// Corner rounding applied to tower shields.
pub const TOWER_CORNER_RADIUS: u32 = 3;

/// A banded silhouette hanging down from the origin, centred horizontally.
#[derive(Debug, Clone, PartialEq)]
pub struct CompositeSilhouette {
    pub width: u32,
    pub height: u32,
    pub bands: Vec<Band>,
    pub corner_radius: u32,
}

impl CompositeSilhouette {
    pub fn new(width: u32, height: u32, bands: Vec<Band>) -> Self {
        Self {
            width: width.max(1),
            height: height.max(1),
            bands,
            corner_radius: 0,
        }
    }

    pub fn kite(width: u32, height: u32) -> Self {
        Self::new(width, height, KITE.to_vec())
    }

    pub fn heater(width: u32, height: u32) -> Self {
        Self::new(width, height, HEATER.to_vec())
    }

    pub fn tower(width: u32, height: u32) -> Self {
        let mut shape = Self::new(width, height, TOWER.to_vec());
        shape.corner_radius = TOWER_CORNER_RADIUS;
        shape
    }

    /// Row width at local row `y`, or `None` outside the silhouette rows.
    pub fn width_at(&self, y: i32) -> Option<u32> {
        if y < 0 || y >= self.height as i32 {
            return None;
        }
        let t = progress(y as u32, self.height);
        let mut start = 0.0;
        for (i, b) in self.bands.iter().enumerate() {
            let last = i + 1 == self.bands.len();
            if t <= b.until || last {
                let span = b.until - start;
                let local = if span > 0.0 { (t - start) / span } else { 0.0 };
                let w = (b.width.fraction(local) * self.width as f64).round();
                return Some((w.max(1.0) as u32).min(self.width));
            }
            start = b.until;
        }
        None
    }

    pub fn contains_local(&self, dx: i32, dy: i32) -> bool {
        let Some(w) = self.width_at(dy) else {
            return false;
        };
        let (left, right) = row_span(0, w);
        if dx < left || dx >= right {
            return false;
        }
        if self.corner_radius == 0 {
            return true;
        }
        let (outer_left, outer_right) = row_span(0, self.width);
        within_rounded_corners(
            dx,
            dy,
            outer_left,
            outer_right - 1,
            0,
            self.height as i32 - 1,
            self.corner_radius,
        )
    }

    pub fn local_bounds(&self) -> BoundingBox {
        if self.bands.is_empty() {
            return BoundingBox::empty();
        }
        let (left, right) = row_span(0, self.width);
        BoundingBox::new(left, 0, right - 1, self.height as i32 - 1)
    }
}
