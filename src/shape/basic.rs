//! Discs, rings and rectangles.

use super::{row_span, BoundingBox};

/// A filled disc centred on the origin.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Disc {
    pub radius: u32,
}

impl Disc {
    pub fn new(radius: u32) -> Self {
        Self { radius }
    }

    pub fn contains_local(&self, dx: i32, dy: i32) -> bool {
        if self.radius == 0 {
            return false;
        }
        dist2(dx, dy) <= sq(self.radius)
    }

    pub fn local_bounds(&self) -> BoundingBox {
        if self.radius == 0 {
            return BoundingBox::empty();
        }
        BoundingBox::around(self.radius as i32)
    }
}

/// A ring: inside the outer radius, strictly outside the inner one.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Annulus {
    pub outer: u32,
    pub inner: u32,
}

impl Annulus {
    pub fn new(outer: u32, inner: u32) -> Self {
        Self { outer, inner }
    }

    pub fn contains_local(&self, dx: i32, dy: i32) -> bool {
        if self.outer == 0 {
            return false;
        }
        let d2 = dist2(dx, dy);
        d2 <= sq(self.outer) && d2 > sq(self.inner)
    }

    pub fn local_bounds(&self) -> BoundingBox {
        if self.outer == 0 || self.inner >= self.outer {
            return BoundingBox::empty();
        }
        BoundingBox::around(self.outer as i32)
    }
}

/// A rectangle hanging down from the origin, centred horizontally.
///
/// Corners are rounded with quarter circles of `corner_radius`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub width: u32,
    pub height: u32,
    pub corner_radius: u32,
}

impl Rect {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            corner_radius: 0,
        }
    }

    pub fn rounded(mut self, corner_radius: u32) -> Self {
        self.corner_radius = corner_radius;
        self
    }

    pub fn contains_local(&self, dx: i32, dy: i32) -> bool {
        if self.width == 0 || self.height == 0 {
            return false;
        }
        let (left, right) = row_span(0, self.width);
        if dx < left || dx >= right || dy < 0 || dy >= self.height as i32 {
            return false;
        }
        within_rounded_corners(dx, dy, left, right - 1, 0, self.height as i32 - 1, self.corner_radius)
    }

    pub fn local_bounds(&self) -> BoundingBox {
        if self.width == 0 || self.height == 0 {
            return BoundingBox::empty();
        }
        let (left, right) = row_span(0, self.width);
        BoundingBox::new(left, 0, right - 1, self.height as i32 - 1)
    }
}

/// Quarter-circle corner test for a cell already known to lie inside the
/// rectangle `[left, right] x [top, bottom]`. Returns false when the cell
/// sits in a corner square but outside its quarter circle.
pub(crate) fn within_rounded_corners(
    x: i32,
    y: i32,
    left: i32,
    right: i32,
    top: i32,
    bottom: i32,
    radius: u32,
) -> bool {
    if radius == 0 {
        return true;
    }
    // Corners larger than half the side would overlap.
    let r = (radius as i32)
        .min((right - left) / 2)
        .min((bottom - top) / 2)
        .max(0);
    if r == 0 {
        return true;
    }

    let cx = if x < left + r {
        left + r
    } else if x > right - r {
        right - r
    } else {
        return true;
    };
    let cy = if y < top + r {
        top + r
    } else if y > bottom - r {
        bottom - r
    } else {
        return true;
    };
    dist2(x - cx, y - cy) <= sq(r as u32)
}

fn dist2(dx: i32, dy: i32) -> i64 {
    let (dx, dy) = (dx as i64, dy as i64);
    dx * dx + dy * dy
}

fn sq(r: u32) -> i64 {
    let r = r as i64;
    r * r
}
