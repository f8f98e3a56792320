//! Maces: a polar or round head on a wooden haft.

use std::f64::consts::TAU;

use crate::assemble::{
    assemble, Anchor, AttachmentPoint, ComponentPlan, Item, ItemData, ItemKind, ItemName,
    ParameterSampler, Part,
};
use crate::config::{ItemOptions, ResolvedSeed};
use crate::diagnostic::Diagnostics;
use crate::render::{GridSpec, Overlay};
use crate::shape::{Disc, Point, PolarFlanged, Rect, ShapeSpec, Silhouette};
use crate::types::{MaterialClass, MaterialDef};

use super::{grid, material_key, sub_type, Session};

const GRID_WIDTH: u32 = 32;
const GRID_HEIGHT: u32 = 56;
const HEAD_CENTER: Point = Point::new(16, 11);

sub_type! {
    MaceType, "mace" {
        Flanged => ("flanged", "Flanged Mace"),
        Morningstar => ("morningstar", "Morningstar"),
        Round => ("round", "Round Mace"),
        Knobbed => ("knobbed", "Knobbed Mace"),
    }
}

struct MaceStyle {
    core: (u32, u32),
    flanges: (u32, u32),
    flange_length: (u32, u32),
    /// Flange width at the core and at the tip.
    widths: (u32, u32),
    haft_length: (u32, u32),
}

const FLANGED: MaceStyle = MaceStyle {
    core: (4, 5),
    flanges: (6, 8),
    flange_length: (3, 4),
    widths: (3, 1),
    haft_length: (28, 32),
};

const MORNINGSTAR: MaceStyle = MaceStyle {
    core: (4, 5),
    flanges: (8, 10),
    flange_length: (3, 4),
    widths: (2, 1),
    haft_length: (30, 34),
};

const ROUND: MaceStyle = MaceStyle {
    core: (5, 6),
    flanges: (0, 0),
    flange_length: (0, 0),
    widths: (0, 0),
    haft_length: (26, 30),
};

const KNOBBED: MaceStyle = MaceStyle {
    core: (4, 4),
    flanges: (4, 4),
    flange_length: (2, 2),
    widths: (0, 0),
    haft_length: (26, 32),
};

impl MaceType {
    fn style(self) -> &'static MaceStyle {
        match self {
            MaceType::Flanged => &FLANGED,
            MaceType::Morningstar => &MORNINGSTAR,
            MaceType::Round => &ROUND,
            MaceType::Knobbed => &KNOBBED,
        }
    }
}

/// Resolved mace parameters.
#[derive(Debug, Clone)]
pub struct MaceParams {
    pub sub_type: MaceType,
    pub head: &'static MaterialDef,
    pub haft: &'static MaterialDef,
    pub grip: &'static MaterialDef,
    pub butt: &'static MaterialDef,
    pub core_radius: u32,
    pub flanges: u32,
    pub flange_length: u32,
    /// Radians; flange 0 points along this angle.
    pub rotation: f64,
    pub haft_length: u32,
    pub grip_length: u32,
}

impl MaceParams {
    pub fn sample(sampler: &mut ParameterSampler, options: &ItemOptions) -> Self {
        let sub_type: MaceType = sampler.variant(options.sub_type());
        let style = sub_type.style();

        let head = sampler.material("head", options.material(), MaterialClass::Metal);
        let haft = sampler.material("haft", options.haft_material.as_deref(), MaterialClass::Wood);
        let grip = sampler.material("grip", options.grip_material.as_deref(), MaterialClass::Leather);
        let butt = sampler.material_excluding(
            "butt",
            options.pommel_material.as_deref(),
            MaterialClass::Metal,
            &[head.key],
        );

        let flanges = sampler.size_in(style.flanges.0, style.flanges.1);
        let rotation = if flanges > 0 && style.widths.0 > 0 {
            sampler.float_in(0.0, TAU / flanges as f64)
        } else {
            0.0
        };

        Self {
            sub_type,
            head,
            haft,
            grip,
            butt,
            core_radius: sampler.size_in(style.core.0, style.core.1),
            flanges,
            flange_length: sampler.size_in(style.flange_length.0, style.flange_length.1),
            rotation,
            haft_length: sampler.size_in(style.haft_length.0, style.haft_length.1),
            grip_length: sampler.size_in(6, 8),
        }
    }

    /// Head silhouettes around `center`.
    pub fn head_shapes(&self, center: Point) -> Vec<Silhouette> {
        let style = self.sub_type.style();
        match self.sub_type {
            MaceType::Flanged | MaceType::Morningstar => vec![ShapeSpec::Polar(
                PolarFlanged::new(self.core_radius, self.flanges, self.flange_length)
                    .with_widths(style.widths.0, style.widths.1)
                    .with_rotation(self.rotation),
            )
            .at(center)],
            MaceType::Round => vec![ShapeSpec::Disc(Disc::new(self.core_radius)).at(center)],
            MaceType::Knobbed => {
                let reach = (self.core_radius + 1) as i32;
                let mut shapes = vec![ShapeSpec::Disc(Disc::new(self.core_radius)).at(center)];
                for (dx, dy) in [(-1, -1), (1, -1), (-1, 1), (1, 1)] {
                    let knob = Point::new(center.x + dx * (reach - 1), center.y + dy * (reach - 1));
                    shapes.push(ShapeSpec::Disc(Disc::new(self.flange_length)).at(knob));
                }
                shapes
            }
        }
    }

    fn data(&self) -> ItemData {
        ItemData::new()
            .with("subType", self.sub_type.to_string())
            .with("material", material_key(self.head))
            .with("haftMaterial", material_key(self.haft))
            .with("gripMaterial", material_key(self.grip))
            .with("buttMaterial", material_key(self.butt))
            .with("coreRadius", self.core_radius)
            .with("flanges", self.flanges)
            .with("flangeLength", self.flange_length)
            .with("rotation", self.rotation)
            .with("haftLength", self.haft_length)
    }

    pub fn plan(&self, grid: GridSpec, seed: ResolvedSeed, diagnostics: Diagnostics) -> ComponentPlan {
        let center = HEAD_CENTER;
        let core = self.core_radius;
        let shapes = self.head_shapes(center);
        let head = self.head.palette();
        let round = self.sub_type == MaceType::Round;
        let (haft_len, grip_len) = (self.haft_length, self.grip_length);
        let haft = self.haft.palette();
        let grip = self.grip.palette();
        let butt = self.butt.palette();

        ComponentPlan::new(ItemKind::Mace, grid, seed)
            .named(ItemName::new(self.head.name, self.sub_type.label()))
            .with_data(self.data())
            .with_diagnostics(diagnostics)
            .component(move |_| {
                let part = Part::union("head", shapes, head)
                    .anchor(Anchor::HeadCenter, AttachmentPoint::new(center.x, center.y, core * 2 + 1))
                    .anchor(Anchor::HeadBottom, AttachmentPoint::new(center.x, center.y + core as i32, 3));
                let part = if round {
                    part.with_overlay(Overlay::RadialQuadrants {
                        center: (center.x, center.y),
                        radius: core as f64,
                    })
                } else {
                    part
                };
                Ok(part.boxed())
            })
            .attached("head", move |board| {
                let c = board.point(Anchor::HeadCenter)?;
                let below = board.point(Anchor::HeadBottom)?;
                let bottom = c.y + haft_len as i32 - 1;
                Ok(Part::new("haft", ShapeSpec::Rect(Rect::new(3, haft_len)).at(Point::new(c.x, c.y)), haft)
                    .anchor(Anchor::HaftTop, AttachmentPoint::new(c.x, below.y + 1, 3))
                    .anchor(Anchor::HaftBottom, AttachmentPoint::new(c.x, bottom, 3))
                    .boxed())
            })
            .component(move |board| {
                let end = board.point(Anchor::HaftBottom)?;
                let top = end.y - grip_len as i32 - 1;
                Ok(Part::new("grip", ShapeSpec::Rect(Rect::new(4, grip_len)).at(Point::new(end.x, top)), grip)
                    .anchor(Anchor::GripCenter, AttachmentPoint::new(end.x, top + grip_len as i32 / 2, 4))
                    .boxed())
            })
            .attached("haft", move |board| {
                let end = board.point(Anchor::HaftBottom)?;
                let center = Point::new(end.x, end.y + 2);
                Ok(Part::new("butt", ShapeSpec::Disc(Disc::new(2)).at(center), butt).boxed())
            })
    }
}

/// Generate a mace.
pub fn generate_mace(options: &ItemOptions) -> Item {
    let Session { seed, mut sampler } = Session::start(options);
    let params = MaceParams::sample(&mut sampler, options);
    let plan = params.plan(grid(GRID_WIDTH, GRID_HEIGHT, options), seed, sampler.into_diagnostics());
    assemble(plan)
}
