//! Drawable components.
//!
//! A component owns its geometry and palette, draws itself through a
//! [`Canvas`], and publishes the anchors its dependents need.

use crate::error::Result;
use crate::render::{Canvas, EdgeShader, Overlay};
use crate::shape::{Membership, Point, ShapeSpec, Silhouette, TaperedBody, Union};
use crate::types::Palette;

use super::{Anchor, AttachmentPoint, AttachmentRecorder, Attachments, CurveAccumulator};

/// One drawable piece of an item.
pub trait Component {
    /// Identifier other plan steps use to name this component as a parent.
    fn id(&self) -> &str;

    /// Cells this component covers once drawn.
    fn footprint(&self) -> &dyn Membership;

    /// Draw onto the canvas and return the anchors this component exposes.
    fn draw(&self, canvas: &mut Canvas<'_>) -> Result<Attachments>;
}

/// A shaded silhouette (or union of silhouettes) with fixed anchors.
#[derive(Debug, Clone)]
pub struct Part {
    id: String,
    shape: Union,
    palette: Palette,
    overlays: Vec<Overlay>,
    anchors: Vec<(Anchor, AttachmentPoint)>,
}

impl Part {
    pub fn new(id: impl Into<String>, shape: Silhouette, palette: Palette) -> Self {
        Self::union(id, vec![shape], palette)
    }

    pub fn union(id: impl Into<String>, parts: Vec<Silhouette>, palette: Palette) -> Self {
        Self {
            id: id.into(),
            shape: Union::new(parts),
            palette,
            overlays: Vec::new(),
            anchors: Vec::new(),
        }
    }

    pub fn with_overlay(mut self, overlay: Overlay) -> Self {
        self.overlays.push(overlay);
        self
    }

    /// Publish an anchor when drawn.
    pub fn anchor(mut self, anchor: Anchor, point: AttachmentPoint) -> Self {
        self.anchors.push((anchor, point));
        self
    }

    pub fn boxed(self) -> Box<dyn Component> {
        Box::new(self)
    }
}

impl Component for Part {
    fn id(&self) -> &str {
        &self.id
    }

    fn footprint(&self) -> &dyn Membership {
        &self.shape
    }

    fn draw(&self, canvas: &mut Canvas<'_>) -> Result<Attachments> {
        let shader = self
            .overlays
            .iter()
            .fold(EdgeShader::new(&self.palette), |s, o| s.with_overlay(*o));
        shader.paint(&self.shape, canvas);

        let mut recorder = AttachmentRecorder::new();
        for (anchor, point) in &self.anchors {
            recorder.record(*anchor, *point);
        }
        Ok(recorder.finish())
    }
}

/// Which anchors a tapered part records as it walks its rows.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TaperAnchors {
    /// Centre of the first row.
    pub top: Option<Anchor>,
    /// Centre of the last row, offset by the accumulated curve.
    pub bottom: Option<Anchor>,
    /// Outer cells of the first row after the cut-out ends.
    pub shoulders: Option<(Anchor, Anchor)>,
    /// Bottom of the cut-out, at its centre.
    pub opening_bottom: Option<Anchor>,
    /// Centre of the row at half the length.
    pub middle: Option<Anchor>,
}

/// A tapered body drawn row by row.
///
/// While walking rows it tracks the lateral curve and records anchors on
/// the first qualifying row.
#[derive(Debug, Clone)]
pub struct TaperedPart {
    id: String,
    body: TaperedBody,
    shape: Silhouette,
    palette: Palette,
    overlays: Vec<Overlay>,
    anchors: TaperAnchors,
}

impl TaperedPart {
    /// `origin` is the centre of the first row.
    pub fn new(id: impl Into<String>, body: TaperedBody, origin: Point, palette: Palette) -> Self {
        let shape = ShapeSpec::Tapered(body).at(origin);
        Self {
            id: id.into(),
            body,
            shape,
            palette,
            overlays: Vec::new(),
            anchors: TaperAnchors::default(),
        }
    }

    pub fn with_overlay(mut self, overlay: Overlay) -> Self {
        self.overlays.push(overlay);
        self
    }

    pub fn recording(mut self, anchors: TaperAnchors) -> Self {
        self.anchors = anchors;
        self
    }

    pub fn body(&self) -> &TaperedBody {
        &self.body
    }

    pub fn silhouette(&self) -> &Silhouette {
        &self.shape
    }

    pub fn boxed(self) -> Box<dyn Component> {
        Box::new(self)
    }

    /// Walk every row, tracking the curve and recording anchors.
    fn trace(&self) -> Attachments {
        let origin = self.shape.origin;
        let length = self.body.length;
        let after_opening = self.body.first_row_after_opening();
        let mut curve = CurveAccumulator::new();
        let mut recorder = AttachmentRecorder::new();

        for row in 0..length {
            let offset = curve.accumulate(row, |r| self.body.center.offset_at(r, length));
            let x = origin.x + offset;
            let y = origin.y + row as i32;
            let width = self.body.width_at(row);

            if row == 0 {
                if let Some(anchor) = self.anchors.top {
                    recorder.record(anchor, AttachmentPoint::new(x, y, width));
                }
            }
            if row == length / 2 {
                if let Some(anchor) = self.anchors.middle {
                    recorder.record(anchor, AttachmentPoint::new(x, y, width));
                }
            }
            if let (Some((left, right)), Some(first)) = (self.anchors.shoulders, after_opening) {
                if row >= first {
                    if let Some((l, r)) = self.body.row_span(row) {
                        recorder.record(left, AttachmentPoint::new(origin.x + l, y, width));
                        recorder.record(right, AttachmentPoint::new(origin.x + r - 1, y, width));
                    }
                }
            }
            if let (Some(anchor), Some(first)) = (self.anchors.opening_bottom, after_opening) {
                if row + 1 == first {
                    recorder.record(anchor, AttachmentPoint::new(x, y, width));
                }
            }
        }

        if let Some(anchor) = self.anchors.bottom {
            let last = length.saturating_sub(1);
            recorder.record(
                anchor,
                AttachmentPoint::new(
                    origin.x + curve.final_offset(),
                    origin.y + last as i32,
                    self.body.width_at(last),
                ),
            );
        }
        recorder.finish()
    }
}

impl Component for TaperedPart {
    fn id(&self) -> &str {
        &self.id
    }

    fn footprint(&self) -> &dyn Membership {
        &self.shape
    }

    fn draw(&self, canvas: &mut Canvas<'_>) -> Result<Attachments> {
        let shader = self
            .overlays
            .iter()
            .fold(EdgeShader::new(&self.palette), |s, o| s.with_overlay(*o));
        shader.paint(&self.shape, canvas);
        Ok(self.trace())
    }
}
