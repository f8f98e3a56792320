//! Polar flanged heads: maces, morningstars, stars.

use std::f64::consts::TAU;

use super::BoundingBox;

/// A core disc with `flanges` tapered segments radiating at equal angles.
///
/// Flange `i` points along `rotation + 2*pi*i/flanges` (radians, y down).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PolarFlanged {
    pub core_radius: u32,
    pub flanges: u32,
    pub flange_length: u32,
    pub base_width: u32,
    pub tip_width: u32,
    pub rotation: f64,
}

impl PolarFlanged {
    pub fn new(core_radius: u32, flanges: u32, flange_length: u32) -> Self {
        Self {
            core_radius,
            flanges,
            flange_length,
            base_width: 3,
            tip_width: 1,
            rotation: 0.0,
        }
    }

    pub fn with_widths(mut self, base_width: u32, tip_width: u32) -> Self {
        self.base_width = base_width;
        self.tip_width = tip_width;
        self
    }

    pub fn with_rotation(mut self, rotation: f64) -> Self {
        self.rotation = rotation;
        self
    }

    /// Flange length after clamping degenerate values.
    fn length(&self) -> f64 {
        self.flange_length.max(1) as f64
    }

    /// Real-valued membership relative to the centre.
    pub fn contains_f(&self, dx: f64, dy: f64) -> bool {
        let r = self.core_radius as f64;
        if self.core_radius > 0 && dx * dx + dy * dy <= r * r {
            return true;
        }

        let len = self.length();
        let reach = r + len;
        let (base, tip) = (self.base_width.max(1) as f64, self.tip_width.max(1) as f64);
        (0..self.flanges).any(|i| {
            let theta = self.rotation + TAU * i as f64 / self.flanges as f64;
            let (sin, cos) = theta.sin_cos();
            let along = dx * cos + dy * sin;
            if along < 0.0 || along > reach {
                return false;
            }
            let across = -dx * sin + dy * cos;
            let t = ((along - r) / len).clamp(0.0, 1.0);
            let half = (base + (tip - base) * t) / 2.0;
            across.abs() <= half
        })
    }

    pub fn contains_local(&self, dx: i32, dy: i32) -> bool {
        self.contains_f(dx as f64, dy as f64)
    }

    pub fn local_bounds(&self) -> BoundingBox {
        if self.core_radius == 0 && self.flanges == 0 {
            return BoundingBox::empty();
        }
        let reach = if self.flanges == 0 {
            self.core_radius as f64
        } else {
            let along = self.core_radius as f64 + self.length();
            let half = self.base_width.max(self.tip_width).max(1) as f64 / 2.0;
            (along * along + half * half).sqrt()
        };
        BoundingBox::around(reach.ceil() as i32)
    }
}
