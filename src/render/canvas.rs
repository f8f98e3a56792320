//! Clipped write access to a surface for one component.

use crate::shape::Membership;
use crate::types::Colour;

use super::LogicalSurface;

/// A component's handle onto the shared surface.
///
/// When a parent footprint is set, every cell the parent contains is
/// protected: blits and clears skip it. The parent's membership is
/// re-queried per cell rather than approximated.
pub struct Canvas<'a> {
    surface: &'a mut LogicalSurface,
    protect: Option<&'a dyn Membership>,
}

impl<'a> Canvas<'a> {
    pub fn new(surface: &'a mut LogicalSurface) -> Self {
        Self {
            surface,
            protect: None,
        }
    }

    /// Protect the cells of `parent` from this canvas.
    pub fn clipped(surface: &'a mut LogicalSurface, parent: &'a dyn Membership) -> Self {
        Self {
            surface,
            protect: Some(parent),
        }
    }

    /// Whether `(x, y)` may be written through this canvas.
    pub fn writable(&self, x: i32, y: i32) -> bool {
        self.surface.in_bounds(x, y) && !self.protect.is_some_and(|p| p.contains(x, y))
    }

    pub fn set(&mut self, x: i32, y: i32, colour: Colour) {
        if self.writable(x, y) {
            self.surface.blit(x, y, 1, 1, colour);
        }
    }

    /// Fill a rectangle, skipping protected cells.
    pub fn blit(&mut self, x: i32, y: i32, w: i32, h: i32, colour: Colour) {
        if self.protect.is_none() {
            self.surface.blit(x, y, w, h, colour);
            return;
        }
        self.each_cell(x, y, w, h, |surface, cx, cy| surface.blit(cx, cy, 1, 1, colour));
    }

    /// Clear a rectangle, skipping protected cells.
    pub fn clear(&mut self, x: i32, y: i32, w: i32, h: i32) {
        if self.protect.is_none() {
            self.surface.clear(x, y, w, h);
            return;
        }
        self.each_cell(x, y, w, h, |surface, cx, cy| surface.clear(cx, cy, 1, 1));
    }

    fn each_cell(
        &mut self,
        x: i32,
        y: i32,
        w: i32,
        h: i32,
        mut f: impl FnMut(&mut LogicalSurface, i32, i32),
    ) {
        if w <= 0 || h <= 0 {
            return;
        }
        let x0 = x.max(0);
        let y0 = y.max(0);
        let x1 = x.saturating_add(w).min(self.surface.width() as i32);
        let y1 = y.saturating_add(h).min(self.surface.height() as i32);
        for cy in y0..y1 {
            for cx in x0..x1 {
                if self.writable(cx, cy) {
                    f(&mut *self.surface, cx, cy);
                }
            }
        }
    }

    pub fn surface(&self) -> &LogicalSurface {
        self.surface
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::GridSpec;
    use crate::shape::{Point, Rect, ShapeSpec};

    #[test]
    fn test_unclipped_canvas_writes_through() {
        let mut surface = LogicalSurface::new(GridSpec::new(4, 4, 1)).unwrap();
        let mut canvas = Canvas::new(&mut surface);
        canvas.blit(0, 0, 4, 4, Colour::WHITE);
        canvas.clear(0, 0, 1, 1);
        assert_eq!(surface.filled_count(), 15);
    }

    #[test]
    fn test_clipped_canvas_protects_parent() {
        let parent = ShapeSpec::Rect(Rect::new(2, 2)).at(Point::new(2, 1));
        let mut surface = LogicalSurface::new(GridSpec::new(4, 4, 1)).unwrap();
        surface.blit(1, 1, 2, 2, Colour::BLACK);

        let mut canvas = Canvas::clipped(&mut surface, &parent);
        assert!(!canvas.writable(1, 1));
        assert!(canvas.writable(0, 0));
        assert!(!canvas.writable(-1, 0));
        canvas.blit(0, 0, 4, 4, Colour::WHITE);
        canvas.clear(1, 1, 1, 1);
        canvas.set(2, 2, Colour::WHITE);

        assert_eq!(surface.get(1, 1), Some(Colour::BLACK));
        assert_eq!(surface.get(2, 2), Some(Colour::BLACK));
        assert_eq!(surface.get(0, 0), Some(Colour::WHITE));
        assert_eq!(surface.get(3, 3), Some(Colour::WHITE));
    }
}
