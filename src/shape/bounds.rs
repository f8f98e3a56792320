//! Inclusive integer bounding boxes.

/// An inclusive cell rectangle. Empty when `min > max` on either axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoundingBox {
    pub min_x: i32,
    pub min_y: i32,
    pub max_x: i32,
    pub max_y: i32,
}

impl BoundingBox {
    pub const fn new(min_x: i32, min_y: i32, max_x: i32, max_y: i32) -> Self {
        Self {
            min_x,
            min_y,
            max_x,
            max_y,
        }
    }

    /// A box containing no cells.
    pub const fn empty() -> Self {
        Self::new(0, 0, -1, -1)
    }

    /// Square box of half-extent `r` around the origin.
    pub const fn around(r: i32) -> Self {
        Self::new(-r, -r, r, r)
    }

    pub fn is_empty(&self) -> bool {
        self.min_x > self.max_x || self.min_y > self.max_y
    }

    pub fn contains(&self, x: i32, y: i32) -> bool {
        x >= self.min_x && x <= self.max_x && y >= self.min_y && y <= self.max_y
    }

    pub fn width(&self) -> u32 {
        if self.is_empty() {
            0
        } else {
            (self.max_x - self.min_x + 1) as u32
        }
    }

    pub fn height(&self) -> u32 {
        if self.is_empty() {
            0
        } else {
            (self.max_y - self.min_y + 1) as u32
        }
    }

    /// Shift by an offset.
    pub fn translate(self, dx: i32, dy: i32) -> Self {
        if self.is_empty() {
            return self;
        }
        Self::new(self.min_x + dx, self.min_y + dy, self.max_x + dx, self.max_y + dy)
    }

    /// Smallest box containing both.
    pub fn union(self, other: Self) -> Self {
        if self.is_empty() {
            return other;
        }
        if other.is_empty() {
            return self;
        }
        Self::new(
            self.min_x.min(other.min_x),
            self.min_y.min(other.min_y),
            self.max_x.max(other.max_x),
            self.max_y.max(other.max_y),
        )
    }

    /// Grow by `n` cells on every side.
    pub fn expand(self, n: i32) -> Self {
        if self.is_empty() {
            return self;
        }
        Self::new(self.min_x - n, self.min_y - n, self.max_x + n, self.max_y + n)
    }

    /// Iterate every cell in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = (i32, i32)> {
        let (min_x, max_x) = (self.min_x, self.max_x);
        let rows = if self.is_empty() {
            0..0
        } else {
            self.min_y..self.max_y + 1
        };
        rows.flat_map(move |y| (min_x..=max_x).map(move |x| (x, y)))
    }
}
