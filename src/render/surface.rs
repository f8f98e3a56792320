//! Logical drawing surface.
//!
//! Shapes are drawn on a small grid of logical cells. Each cell becomes a
//! `scale x scale` block of pixels when the surface is exported.

use crate::error::{ArmoryError, Result};
use crate::types::Colour;

/// Largest raster side (in output pixels) a surface may be acquired for.
pub const MAX_RASTER_SIDE: u32 = 4096;

/// Dimensions of a logical grid and its output scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridSpec {
    pub width: u32,
    pub height: u32,
    pub scale: u32,
}

impl GridSpec {
    pub const fn new(width: u32, height: u32, scale: u32) -> Self {
        Self {
            width,
            height,
            scale,
        }
    }

    pub fn with_scale(mut self, scale: u32) -> Self {
        self.scale = scale;
        self
    }

    /// Output raster size in pixels.
    pub fn pixel_size(&self) -> (u32, u32) {
        (
            self.width.saturating_mul(self.scale),
            self.height.saturating_mul(self.scale),
        )
    }
}

/// A `width x height` grid of optional cell colours.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogicalSurface {
    grid: GridSpec,
    cells: Vec<Option<Colour>>,
}

impl LogicalSurface {
    /// Acquire a surface for `grid`.
    ///
    /// Fails when any dimension is zero or the scaled raster would exceed
    /// [`MAX_RASTER_SIDE`] on either axis.
    pub fn new(grid: GridSpec) -> Result<Self> {
        let fail = |message: &str| ArmoryError::Surface {
            width: grid.width,
            height: grid.height,
            scale: grid.scale,
            message: message.to_string(),
        };

        if grid.width == 0 || grid.height == 0 || grid.scale == 0 {
            return Err(fail("dimensions must be positive"));
        }
        let too_big = |cells: u32| {
            cells
                .checked_mul(grid.scale)
                .map_or(true, |px| px > MAX_RASTER_SIDE)
        };
        if too_big(grid.width) || too_big(grid.height) {
            return Err(fail(&format!(
                "raster would exceed {} pixels per side",
                MAX_RASTER_SIDE
            )));
        }

        Ok(Self {
            grid,
            cells: vec![None; (grid.width * grid.height) as usize],
        })
    }

    pub fn grid(&self) -> GridSpec {
        self.grid
    }

    pub fn width(&self) -> u32 {
        self.grid.width
    }

    pub fn height(&self) -> u32 {
        self.grid.height
    }

    pub fn scale(&self) -> u32 {
        self.grid.scale
    }

    pub fn in_bounds(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && (x as u32) < self.grid.width && (y as u32) < self.grid.height
    }

    fn index(&self, x: i32, y: i32) -> Option<usize> {
        self.in_bounds(x, y)
            .then(|| y as usize * self.grid.width as usize + x as usize)
    }

    /// Colour of a cell, if painted.
    pub fn get(&self, x: i32, y: i32) -> Option<Colour> {
        self.index(x, y).and_then(|i| self.cells[i])
    }

    /// Fill the logical rectangle `(x, y, w, h)`, clipped to the grid.
    pub fn blit(&mut self, x: i32, y: i32, w: i32, h: i32, colour: Colour) {
        self.fill(x, y, w, h, Some(colour));
    }

    /// Remove the logical rectangle `(x, y, w, h)`, clipped to the grid.
    pub fn clear(&mut self, x: i32, y: i32, w: i32, h: i32) {
        self.fill(x, y, w, h, None);
    }

    fn fill(&mut self, x: i32, y: i32, w: i32, h: i32, value: Option<Colour>) {
        if w <= 0 || h <= 0 {
            return;
        }
        let x0 = x.max(0);
        let y0 = y.max(0);
        let x1 = x.saturating_add(w).min(self.grid.width as i32);
        let y1 = y.saturating_add(h).min(self.grid.height as i32);
        for cy in y0..y1 {
            for cx in x0..x1 {
                if let Some(i) = self.index(cx, cy) {
                    self.cells[i] = value;
                }
            }
        }
    }

    /// Iterate painted cells in row-major order.
    pub fn filled_cells(&self) -> impl Iterator<Item = (i32, i32, Colour)> + '_ {
        let width = self.grid.width as usize;
        self.cells.iter().enumerate().filter_map(move |(i, c)| {
            c.map(|colour| ((i % width) as i32, (i / width) as i32, colour))
        })
    }

    /// Number of painted cells.
    pub fn filled_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }

    /// Rows of cell colours, transparent where unpainted.
    pub fn rows(&self) -> Vec<Vec<Colour>> {
        self.cells
            .chunks(self.grid.width as usize)
            .map(|row| {
                row.iter()
                    .map(|c| c.unwrap_or(Colour::TRANSPARENT))
                    .collect()
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn surface(w: u32, h: u32) -> LogicalSurface {
        LogicalSurface::new(GridSpec::new(w, h, 4)).unwrap()
    }

    #[test]
    fn test_new_surface_is_empty() {
        let s = surface(8, 6);
        assert_eq!(s.filled_count(), 0);
        assert_eq!(s.grid().pixel_size(), (32, 24));
    }

    #[test]
    fn test_acquisition_failures() {
        assert!(LogicalSurface::new(GridSpec::new(0, 4, 4)).is_err());
        assert!(LogicalSurface::new(GridSpec::new(4, 4, 0)).is_err());
        assert!(LogicalSurface::new(GridSpec::new(5000, 4, 1)).is_err());
        assert!(LogicalSurface::new(GridSpec::new(64, 64, 65)).is_err());
        assert!(LogicalSurface::new(GridSpec::new(64, 64, 64)).is_ok());

        let err = LogicalSurface::new(GridSpec::new(u32::MAX, 1, u32::MAX)).unwrap_err();
        assert!(matches!(err, ArmoryError::Surface { .. }));
    }

    #[test]
    fn test_blit_and_get() {
        let mut s = surface(4, 4);
        s.blit(1, 1, 2, 2, Colour::WHITE);
        assert_eq!(s.get(1, 1), Some(Colour::WHITE));
        assert_eq!(s.get(2, 2), Some(Colour::WHITE));
        assert_eq!(s.get(0, 0), None);
        assert_eq!(s.get(3, 3), None);
        assert_eq!(s.filled_count(), 4);
    }

    #[test]
    fn test_blit_clips_to_grid() {
        let mut s = surface(4, 4);
        s.blit(-2, -2, 10, 3, Colour::BLACK);
        assert_eq!(s.filled_count(), 4);
        assert_eq!(s.get(-1, 0), None);
        s.blit(i32::MAX - 1, 0, 5, 5, Colour::BLACK);
        assert_eq!(s.filled_count(), 4);
    }

    #[test]
    fn test_zero_area_is_noop() {
        let mut s = surface(4, 4);
        s.blit(0, 0, 0, 3, Colour::BLACK);
        s.blit(0, 0, 3, -1, Colour::BLACK);
        assert_eq!(s.filled_count(), 0);
    }

    #[test]
    fn test_clear_opens_hole() {
        let mut s = surface(4, 4);
        s.blit(0, 0, 4, 4, Colour::WHITE);
        s.clear(1, 0, 2, 1);
        assert_eq!(s.get(1, 0), None);
        assert_eq!(s.get(0, 0), Some(Colour::WHITE));
        assert_eq!(s.filled_count(), 14);
    }

    #[test]
    fn test_filled_cells_and_rows() {
        let mut s = surface(3, 2);
        s.blit(2, 1, 1, 1, Colour::MAGENTA);
        let cells: Vec<_> = s.filled_cells().collect();
        assert_eq!(cells, vec![(2, 1, Colour::MAGENTA)]);

        let rows = s.rows();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[1][2], Colour::MAGENTA);
        assert_eq!(rows[0][0], Colour::TRANSPARENT);
    }
}
