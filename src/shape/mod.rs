//! Silhouette membership.
//!
//! Every shape family answers one question: is the logical cell `(x, y)`
//! inside? The tests are closed-form and pure, so the edge shader can
//! query neighbours freely and get the same answer every time.
//!
//! - `Disc`, `Annulus`, `Rect` - basic primitives
//! - `TaperedBody` - per-row width and centre line (blades, limbs, torsos)
//! - `PolarFlanged` - core disc with radial flanges (mace heads)
//! - `CompositeSilhouette` - banded shield bodies

mod basic;
mod bounds;
mod composite;
mod polar;
mod taper;

pub use basic::{Annulus, Disc, Rect};
pub use bounds::BoundingBox;
pub use composite::{Band, BandWidth, CompositeSilhouette, TOWER_CORNER_RADIUS};
pub use polar::PolarFlanged;
pub use taper::{progress, CenterLine, Cutout, TaperedBody, WidthProfile};

/// Anything that can answer cell membership.
pub trait Membership {
    /// Whether the logical cell `(x, y)` belongs to the shape.
    fn contains(&self, x: i32, y: i32) -> bool;

    /// A box outside of which `contains` is always false.
    fn bounds(&self) -> BoundingBox;
}

/// A logical cell coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// Span of a `width`-cell row centred on `center`, as `[left, right)`.
///
/// A row always holds exactly `width` cells; even widths lean left.
pub fn row_span(center: i32, width: u32) -> (i32, i32) {
    let left = center - (width / 2) as i32;
    (left, left + width as i32)
}

/// A shape family plus its parameters.
#[derive(Debug, Clone, PartialEq)]
pub enum ShapeSpec {
    Disc(Disc),
    Annulus(Annulus),
    Rect(Rect),
    Tapered(TaperedBody),
    Polar(PolarFlanged),
    Composite(CompositeSilhouette),
}

impl ShapeSpec {
    /// Membership relative to the shape's origin. False outside
    /// [`local_bounds`](Self::local_bounds) for every input.
    pub fn contains_local(&self, dx: i32, dy: i32) -> bool {
        if !self.local_bounds().contains(dx, dy) {
            return false;
        }
        match self {
            ShapeSpec::Disc(s) => s.contains_local(dx, dy),
            ShapeSpec::Annulus(s) => s.contains_local(dx, dy),
            ShapeSpec::Rect(s) => s.contains_local(dx, dy),
            ShapeSpec::Tapered(s) => s.contains_local(dx, dy),
            ShapeSpec::Polar(s) => s.contains_local(dx, dy),
            ShapeSpec::Composite(s) => s.contains_local(dx, dy),
        }
    }

    /// Bounds relative to the shape's origin.
    pub fn local_bounds(&self) -> BoundingBox {
        match self {
            ShapeSpec::Disc(s) => s.local_bounds(),
            ShapeSpec::Annulus(s) => s.local_bounds(),
            ShapeSpec::Rect(s) => s.local_bounds(),
            ShapeSpec::Tapered(s) => s.local_bounds(),
            ShapeSpec::Polar(s) => s.local_bounds(),
            ShapeSpec::Composite(s) => s.local_bounds(),
        }
    }

    /// Bind the spec to an origin.
    pub fn at(self, origin: Point) -> Silhouette {
        Silhouette { spec: self, origin }
    }
}

/// A shape spec bound to an origin on the logical grid.
#[derive(Debug, Clone, PartialEq)]
pub struct Silhouette {
    pub spec: ShapeSpec,
    pub origin: Point,
}

impl Silhouette {
    pub fn new(spec: ShapeSpec, origin: Point) -> Self {
        Self { spec, origin }
    }
}

impl Membership for Silhouette {
    fn contains(&self, x: i32, y: i32) -> bool {
        let local = |v: i32, o: i32| i32::try_from(i64::from(v) - i64::from(o)).ok();
        match (local(x, self.origin.x), local(y, self.origin.y)) {
            (Some(dx), Some(dy)) => self.spec.contains_local(dx, dy),
            _ => false,
        }
    }

    fn bounds(&self) -> BoundingBox {
        self.spec
            .local_bounds()
            .translate(self.origin.x, self.origin.y)
    }
}

/// Cells inside any of the parts.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Union {
    parts: Vec<Silhouette>,
}

impl Union {
    pub fn new(parts: Vec<Silhouette>) -> Self {
        Self { parts }
    }

    pub fn parts(&self) -> &[Silhouette] {
        &self.parts
    }
}

impl Membership for Union {
    fn contains(&self, x: i32, y: i32) -> bool {
        self.parts.iter().any(|p| p.contains(x, y))
    }

    fn bounds(&self) -> BoundingBox {
        self.parts
            .iter()
            .fold(BoundingBox::empty(), |acc, p| acc.union(p.bounds()))
    }
}

impl<M: Membership + ?Sized> Membership for &M {
    fn contains(&self, x: i32, y: i32) -> bool {
        (**self).contains(x, y)
    }

    fn bounds(&self) -> BoundingBox {
        (**self).bounds()
    }
}
