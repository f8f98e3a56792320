//! Named anchor points shared between components.

use std::collections::BTreeMap;
use std::fmt;

use crate::error::{ArmoryError, Result};

/// A named attachment slot published by one component for its dependents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Anchor {
    BladeTip,
    BladeBase,
    GuardCenter,
    GripBottom,
    HaftTop,
    HaftBottom,
    HeadCenter,
    HeadBottom,
    ProngBase,
    LimbTop,
    LimbBottom,
    GripCenter,
    BodyTop,
    BodyCenter,
    BandTop,
    BandCenter,
    NecklineTop,
    NecklineBottom,
    ShoulderLeft,
    ShoulderRight,
    Waist,
    Hem,
}

impl Anchor {
    pub fn as_str(self) -> &'static str {
        match self {
            Anchor::BladeTip => "blade-tip",
            Anchor::BladeBase => "blade-base",
            Anchor::GuardCenter => "guard-center",
            Anchor::GripBottom => "grip-bottom",
            Anchor::HaftTop => "haft-top",
            Anchor::HaftBottom => "haft-bottom",
            Anchor::HeadCenter => "head-center",
            Anchor::HeadBottom => "head-bottom",
            Anchor::ProngBase => "prong-base",
            Anchor::LimbTop => "limb-top",
            Anchor::LimbBottom => "limb-bottom",
            Anchor::GripCenter => "grip-center",
            Anchor::BodyTop => "body-top",
            Anchor::BodyCenter => "body-center",
            Anchor::BandTop => "band-top",
            Anchor::BandCenter => "band-center",
            Anchor::NecklineTop => "neckline-top",
            Anchor::NecklineBottom => "neckline-bottom",
            Anchor::ShoulderLeft => "shoulder-left",
            Anchor::ShoulderRight => "shoulder-right",
            Anchor::Waist => "waist",
            Anchor::Hem => "hem",
        }
    }
}

impl fmt::Display for Anchor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A coordinate plus the width of the parent measured there.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AttachmentPoint {
    pub x: i32,
    pub y: i32,
    pub span: u32,
}

impl AttachmentPoint {
    pub const fn new(x: i32, y: i32, span: u32) -> Self {
        Self { x, y, span }
    }
}

/// Records anchors while a component draws.
///
/// The first value recorded for an anchor sticks; later records are
/// ignored.
#[derive(Debug, Default)]
pub struct AttachmentRecorder {
    points: BTreeMap<Anchor, AttachmentPoint>,
}

impl AttachmentRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `point` under `anchor` unless it is already set.
    /// Returns whether the value was stored.
    pub fn record(&mut self, anchor: Anchor, point: AttachmentPoint) -> bool {
        if self.points.contains_key(&anchor) {
            return false;
        }
        self.points.insert(anchor, point);
        true
    }

    pub fn is_recorded(&self, anchor: Anchor) -> bool {
        self.points.contains_key(&anchor)
    }

    pub fn finish(self) -> Attachments {
        Attachments {
            points: self.points,
        }
    }
}

/// Read-only anchor map.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Attachments {
    points: BTreeMap<Anchor, AttachmentPoint>,
}

impl Attachments {
    pub fn get(&self, anchor: Anchor) -> Option<AttachmentPoint> {
        self.points.get(&anchor).copied()
    }

    /// Like [`get`](Self::get), but a missing anchor is a build error.
    pub fn point(&self, anchor: Anchor) -> Result<AttachmentPoint> {
        self.get(anchor).ok_or_else(|| ArmoryError::Build {
            message: format!("anchor '{}' has not been recorded", anchor),
            help: Some("attach dependents after the component that publishes it".to_string()),
        })
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Anchor, AttachmentPoint)> + '_ {
        self.points.iter().map(|(a, p)| (*a, *p))
    }

    /// Fold another component's anchors in. Existing anchors are kept.
    pub(crate) fn absorb(&mut self, other: Attachments) {
        for (anchor, point) in other.points {
            self.points.entry(anchor).or_insert(point);
        }
    }
}
