//! Tapered bodies: blades, limbs, prongs, torsos and robes.
//!
//! A body is a stack of rows hanging down from its origin. Each row is a
//! horizontal span whose width comes from a [`WidthProfile`] and whose
//! centre is shifted by a [`CenterLine`]. An optional [`Cutout`] removes a
//! centred opening (neckline) from a run of rows.

use std::f64::consts::{FRAC_PI_2, PI, TAU};

use super::{row_span, BoundingBox};

/// Row progress in `[0, 1]`. A single-row body is at progress 0.
pub fn progress(row: u32, length: u32) -> f64 {
    if length <= 1 {
        0.0
    } else {
        (row.min(length - 1)) as f64 / (length - 1) as f64
    }
}

fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}

/// Width of each row as a function of progress.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum WidthProfile {
    /// Straight taper from `start` to `end`.
    Linear { start: u32, end: u32 },
    /// Linear taper with a sinusoidal ripple on top.
    Flowing {
        start: u32,
        end: u32,
        amplitude: f64,
        cycles: f64,
    },
    /// Smoothstep between `start` and `end`.
    SCurve { start: u32, end: u32 },
    /// Constant `width`, narrowing to a point over the first `tip_rows`.
    Pointed { width: u32, tip_rows: u32 },
    /// Thin at both ends, widest at the middle.
    Bulge { ends: u32, middle: u32 },
}

impl WidthProfile {
    /// Width of `row` in a body of `length` rows. Never below 1.
    pub fn width_at(&self, row: u32, length: u32) -> u32 {
        let p = progress(row, length);
        let w = match *self {
            WidthProfile::Linear { start, end } => lerp(start as f64, end as f64, p),
            WidthProfile::Flowing {
                start,
                end,
                amplitude,
                cycles,
            } => lerp(start as f64, end as f64, p) + amplitude * (p * cycles * TAU).sin(),
            WidthProfile::SCurve { start, end } => {
                let t = p * p * (3.0 - 2.0 * p);
                lerp(start as f64, end as f64, t)
            }
            WidthProfile::Pointed { width, tip_rows } => {
                if tip_rows == 0 || row >= tip_rows {
                    width as f64
                } else {
                    lerp(1.0, width as f64, row as f64 / tip_rows as f64)
                }
            }
            WidthProfile::Bulge { ends, middle } => {
                lerp(ends as f64, middle as f64, (p * PI).sin())
            }
        };
        (w.round().max(1.0)) as u32
    }

    /// Upper bound on any row width.
    fn max_width(&self, length: u32) -> u32 {
        (0..length.max(1))
            .map(|row| self.width_at(row, length))
            .max()
            .unwrap_or(1)
    }
}

/// Lateral displacement of the row centres.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum CenterLine {
    #[default]
    Straight,
    /// `amount * sin(p * pi/2)`: bends fastest at row 0, settles at `amount`.
    Curved { amount: f64 },
    /// `amount * sin(p * pi)`: both ends on the axis, middle displaced.
    Arc { amount: f64 },
    /// `per_row * row`: a straight line at an angle.
    Slant { per_row: f64 },
}

impl CenterLine {
    pub fn offset_at(&self, row: u32, length: u32) -> f64 {
        let p = progress(row, length);
        match *self {
            CenterLine::Straight => 0.0,
            CenterLine::Curved { amount } => amount * (p * FRAC_PI_2).sin(),
            CenterLine::Arc { amount } => amount * (p * PI).sin(),
            CenterLine::Slant { per_row } => per_row * row.min(length.saturating_sub(1)) as f64,
        }
    }
}

/// A centred opening subtracted from rows `start_row..end_row`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cutout {
    pub start_row: u32,
    pub end_row: u32,
    pub top_width: u32,
    pub bottom_width: u32,
}

impl Cutout {
    pub fn covers(&self, row: u32) -> bool {
        row >= self.start_row && row < self.end_row
    }

    /// Opening width at `row`, or 0 outside the cutout rows.
    pub fn width_at(&self, row: u32) -> u32 {
        if !self.covers(row) {
            return 0;
        }
        let rows = self.end_row - self.start_row;
        let p = progress(row - self.start_row, rows);
        lerp(self.top_width as f64, self.bottom_width as f64, p)
            .round()
            .max(0.0) as u32
    }
}

/// A stack of rows with per-row width, centre and optional opening.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TaperedBody {
    pub length: u32,
    pub profile: WidthProfile,
    pub center: CenterLine,
    pub cutout: Option<Cutout>,
}

impl TaperedBody {
    pub fn new(length: u32, profile: WidthProfile) -> Self {
        Self {
            length: length.max(1),
            profile,
            center: CenterLine::Straight,
            cutout: None,
        }
    }

    pub fn with_center(mut self, center: CenterLine) -> Self {
        self.center = center;
        self
    }

    pub fn with_cutout(mut self, cutout: Cutout) -> Self {
        self.cutout = Some(cutout);
        self
    }

    pub fn width_at(&self, row: u32) -> u32 {
        self.profile.width_at(row, self.length)
    }

    /// Integer lateral offset of `row`'s centre from the origin.
    pub fn lateral_offset(&self, row: u32) -> i32 {
        self.center.offset_at(row, self.length).round() as i32
    }

    /// The filled span of `row` before the cutout, as `[left, right)` local x.
    pub fn row_span(&self, row: u32) -> Option<(i32, i32)> {
        if row >= self.length {
            return None;
        }
        Some(row_span(self.lateral_offset(row), self.width_at(row)))
    }

    /// The opening span of `row`, if the cutout covers it.
    pub fn opening_span(&self, row: u32) -> Option<(i32, i32)> {
        let cutout = self.cutout?;
        let w = cutout.width_at(row);
        if w == 0 {
            return None;
        }
        Some(row_span(self.lateral_offset(row), w))
    }

    /// First row strictly after the cutout, if any.
    pub fn first_row_after_opening(&self) -> Option<u32> {
        let end = self.cutout?.end_row;
        (end < self.length).then_some(end)
    }

    pub fn contains_local(&self, dx: i32, dy: i32) -> bool {
        if dy < 0 || dy >= self.length as i32 {
            return false;
        }
        let row = dy as u32;
        let Some((left, right)) = self.row_span(row) else {
            return false;
        };
        if dx < left || dx >= right {
            return false;
        }
        match self.opening_span(row) {
            Some((ol, or)) => dx < ol || dx >= or,
            None => true,
        }
    }

    pub fn local_bounds(&self) -> BoundingBox {
        let max_w = self.profile.max_width(self.length);
        let (mut min_off, mut max_off) = (0, 0);
        for row in 0..self.length {
            let off = self.lateral_offset(row);
            min_off = min_off.min(off);
            max_off = max_off.max(off);
        }
        let (left, _) = row_span(min_off, max_w);
        let (_, right) = row_span(max_off, max_w);
        BoundingBox::new(left, 0, right - 1, self.length as i32 - 1)
    }
}
