//! Bows: arced limbs, a string between the tips and a grip wrap.

use crate::assemble::{
    assemble, Anchor, AttachmentPoint, ComponentPlan, Item, ItemData, ItemKind, ItemName,
    ParameterSampler, Part, TaperAnchors, TaperedPart,
};
use crate::config::{ItemOptions, ResolvedSeed};
use crate::diagnostic::Diagnostics;
use crate::render::GridSpec;
use crate::shape::{CenterLine, Point, Rect, ShapeSpec, TaperedBody, WidthProfile};
use crate::types::{MaterialClass, MaterialDef};

use super::{grid, material_key, sub_type, Session};

const GRID_WIDTH: u32 = 24;
const GRID_HEIGHT: u32 = 56;
const STRING_X: i32 = 16;
const TOP: i32 = 2;

sub_type! {
    BowType, "bow" {
        Longbow => ("longbow", "Longbow"),
        Shortbow => ("shortbow", "Shortbow"),
        Flatbow => ("flatbow", "Flatbow"),
    }
}

struct BowStyle {
    length: (u32, u32),
    depth: (f64, f64),
    middle: u32,
    grip_rows: u32,
}

const LONGBOW: BowStyle = BowStyle {
    length: (48, 52),
    depth: (6.0, 8.0),
    middle: 3,
    grip_rows: 6,
};

const SHORTBOW: BowStyle = BowStyle {
    length: (34, 38),
    depth: (5.0, 7.0),
    middle: 3,
    grip_rows: 4,
};

const FLATBOW: BowStyle = BowStyle {
    length: (40, 44),
    depth: (4.0, 6.0),
    middle: 5,
    grip_rows: 5,
};

impl BowType {
    fn style(self) -> &'static BowStyle {
        match self {
            BowType::Longbow => &LONGBOW,
            BowType::Shortbow => &SHORTBOW,
            BowType::Flatbow => &FLATBOW,
        }
    }
}

/// Resolved bow parameters.
#[derive(Debug, Clone)]
pub struct BowParams {
    pub sub_type: BowType,
    pub limbs: &'static MaterialDef,
    pub string: &'static MaterialDef,
    pub grip: &'static MaterialDef,
    pub length: u32,
    /// How far the limb middle bends away from the string.
    pub depth: f64,
}

impl BowParams {
    pub fn sample(sampler: &mut ParameterSampler, options: &ItemOptions) -> Self {
        let sub_type: BowType = sampler.variant(options.sub_type());
        let style = sub_type.style();
        Self {
            sub_type,
            limbs: sampler.material("limbs", options.material(), MaterialClass::Wood),
            string: sampler.material("string", options.string_material.as_deref(), MaterialClass::Cord),
            grip: sampler.material("grip", options.grip_material.as_deref(), MaterialClass::Leather),
            length: sampler.size_in(style.length.0, style.length.1),
            depth: sampler.float_in(style.depth.0, style.depth.1),
        }
    }

    pub fn body(&self) -> TaperedBody {
        TaperedBody::new(
            self.length,
            WidthProfile::Bulge {
                ends: 1,
                middle: self.sub_type.style().middle,
            },
        )
        .with_center(CenterLine::Arc { amount: -self.depth })
    }

    fn data(&self) -> ItemData {
        ItemData::new()
            .with("subType", self.sub_type.to_string())
            .with("material", material_key(self.limbs))
            .with("stringMaterial", material_key(self.string))
            .with("gripMaterial", material_key(self.grip))
            .with("length", self.length)
            .with("depth", self.depth)
    }

    pub fn plan(&self, grid: GridSpec, seed: ResolvedSeed, diagnostics: Diagnostics) -> ComponentPlan {
        let limbs = TaperedPart::new("limbs", self.body(), Point::new(STRING_X, TOP), self.limbs.palette())
            .recording(TaperAnchors {
                top: Some(Anchor::LimbTop),
                bottom: Some(Anchor::LimbBottom),
                middle: Some(Anchor::GripCenter),
                ..TaperAnchors::default()
            });
        let string = self.string.palette();
        let grip = self.grip.palette();
        let grip_rows = self.sub_type.style().grip_rows;

        ComponentPlan::new(ItemKind::Bow, grid, seed)
            .named(ItemName::new(self.limbs.name, self.sub_type.label()))
            .with_data(self.data())
            .with_diagnostics(diagnostics)
            .component(move |_| Ok(limbs.boxed()))
            .attached("limbs", move |board| {
                let top = board.point(Anchor::LimbTop)?;
                let bottom = board.point(Anchor::LimbBottom)?;
                let rows = (bottom.y - top.y + 1).max(1) as u32;
                Ok(Part::new("string", ShapeSpec::Rect(Rect::new(1, rows)).at(Point::new(top.x, top.y)), string).boxed())
            })
            .component(move |board| {
                let c = board.point(Anchor::GripCenter)?;
                let top = c.y - grip_rows as i32 / 2;
                Ok(Part::new("grip", ShapeSpec::Rect(Rect::new(c.span + 1, grip_rows)).at(Point::new(c.x, top)), grip)
                    .boxed())
            })
    }
}

/// Generate a bow.
pub fn generate_bow(options: &ItemOptions) -> Item {
    let Session { seed, mut sampler } = Session::start(options);
    let params = BowParams::sample(&mut sampler, options);
    let plan = params.plan(grid(GRID_WIDTH, GRID_HEIGHT, options), seed, sampler.into_diagnostics());
    assemble(plan)
}
