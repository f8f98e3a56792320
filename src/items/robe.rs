//! Robes: a long flaring body with sleeves, a sash, and a hood or hat.

use crate::assemble::{
    assemble, Anchor, AttachmentPoint, ComponentPlan, Item, ItemData, ItemKind, ItemName,
    ParameterSampler, Part, TaperAnchors, TaperedPart,
};
use crate::config::{ItemOptions, ResolvedSeed};
use crate::diagnostic::Diagnostics;
use crate::render::GridSpec;
use crate::shape::{
    CenterLine, Cutout, Disc, Point, Rect, ShapeSpec, Silhouette, TaperedBody, WidthProfile,
};
use crate::types::{MaterialClass, MaterialDef};

use super::{grid, material_key, sub_type, Session};

const GRID_WIDTH: u32 = 40;
const GRID_HEIGHT: u32 = 56;
const ORIGIN: Point = Point::new(20, 10);
const SLEEVE_ROWS: u32 = 14;

sub_type! {
    RobeType, "robe" {
        Hooded => ("hooded", "Hooded Robe"),
        Vestment => ("vestment", "Vestment"),
        Wizard => ("wizard", "Wizard Robe"),
    }
}

impl RobeType {
    fn profile(self, hem: u32) -> WidthProfile {
        match self {
            RobeType::Hooded => WidthProfile::Linear { start: 12, end: hem },
            RobeType::Vestment => WidthProfile::SCurve { start: 12, end: hem },
            RobeType::Wizard => WidthProfile::Flowing {
                start: 12,
                end: hem,
                amplitude: 1.5,
                cycles: 3.0,
            },
        }
    }

    fn sleeve_profile(self) -> WidthProfile {
        match self {
            RobeType::Wizard => WidthProfile::Bulge { ends: 4, middle: 8 },
            _ => WidthProfile::Linear { start: 4, end: 6 },
        }
    }

    fn hem(self) -> (u32, u32) {
        match self {
            RobeType::Hooded => (26, 28),
            RobeType::Vestment => (24, 26),
            RobeType::Wizard => (28, 30),
        }
    }
}

/// Resolved robe parameters.
#[derive(Debug, Clone)]
pub struct RobeParams {
    pub sub_type: RobeType,
    pub cloth: &'static MaterialDef,
    pub trim: &'static MaterialDef,
    pub length: u32,
    pub hem_width: u32,
}

impl RobeParams {
    pub fn sample(sampler: &mut ParameterSampler, options: &ItemOptions) -> Self {
        let sub_type: RobeType = sampler.variant(options.sub_type());
        let cloth = sampler.material("robe", options.material(), MaterialClass::Cloth);
        let trim = sampler.material_excluding(
            "sash",
            options.trim_material.as_deref(),
            MaterialClass::Cloth,
            &[cloth.key],
        );
        let hem = sub_type.hem();
        Self {
            sub_type,
            cloth,
            trim,
            length: sampler.size_in(40, 44),
            hem_width: sampler.size_in(hem.0, hem.1),
        }
    }

    pub fn body(&self) -> TaperedBody {
        TaperedBody::new(self.length, self.sub_type.profile(self.hem_width)).with_cutout(Cutout {
            start_row: 0,
            end_row: 3,
            top_width: 6,
            bottom_width: 3,
        })
    }

    fn sleeve(sub_type: RobeType, at: Point, outward: f64) -> Silhouette {
        let body = TaperedBody::new(SLEEVE_ROWS, sub_type.sleeve_profile())
            .with_center(CenterLine::Slant { per_row: 0.4 * outward });
        ShapeSpec::Tapered(body).at(at)
    }

    /// Hood disc or hat silhouettes above the neckline.
    fn headwear(sub_type: RobeType, neck: AttachmentPoint) -> Vec<Silhouette> {
        match sub_type {
            RobeType::Hooded => vec![ShapeSpec::Disc(Disc::new(5)).at(Point::new(neck.x, neck.y - 2))],
            RobeType::Wizard => {
                let hat = TaperedBody::new(9, WidthProfile::Pointed { width: 9, tip_rows: 8 })
                    .with_center(CenterLine::Curved { amount: -2.0 });
                vec![
                    ShapeSpec::Tapered(hat).at(Point::new(neck.x, neck.y - 10)),
                    ShapeSpec::Rect(Rect::new(15, 1)).at(Point::new(neck.x, neck.y - 1)),
                ]
            }
            RobeType::Vestment => Vec::new(),
        }
    }

    fn data(&self) -> ItemData {
        ItemData::new()
            .with("subType", self.sub_type.to_string())
            .with("material", material_key(self.cloth))
            .with("trimMaterial", material_key(self.trim))
            .with("length", self.length)
            .with("hemWidth", self.hem_width)
    }

    pub fn plan(&self, grid: GridSpec, seed: ResolvedSeed, diagnostics: Diagnostics) -> ComponentPlan {
        let sub_type = self.sub_type;
        let robe = TaperedPart::new("robe", self.body(), ORIGIN, self.cloth.palette()).recording(TaperAnchors {
            top: Some(Anchor::NecklineTop),
            bottom: Some(Anchor::Hem),
            shoulders: Some((Anchor::ShoulderLeft, Anchor::ShoulderRight)),
            opening_bottom: Some(Anchor::NecklineBottom),
            middle: Some(Anchor::Waist),
        });
        let cloth = self.cloth.palette();
        let headwear_cloth = cloth.clone();
        let sash = self.trim.palette();
        let stole = sash.clone();

        let mut plan = ComponentPlan::new(ItemKind::Robe, grid, seed)
            .named(ItemName::new(self.cloth.name, sub_type.label()))
            .with_data(self.data())
            .with_diagnostics(diagnostics)
            .component(move |_| Ok(robe.boxed()))
            .attached("robe", move |board| {
                let (l, r) = (board.point(Anchor::ShoulderLeft)?, board.point(Anchor::ShoulderRight)?);
                let sleeves = vec![
                    Self::sleeve(sub_type, Point::new(l.x - 1, l.y), -1.0),
                    Self::sleeve(sub_type, Point::new(r.x + 1, r.y), 1.0),
                ];
                Ok(Part::union("sleeves", sleeves, cloth).boxed())
            });

        if sub_type != RobeType::Vestment {
            plan = plan.attached("robe", move |board| {
                let neck = board.point(Anchor::NecklineTop)?;
                Ok(Part::union("headwear", Self::headwear(sub_type, neck), headwear_cloth).boxed())
            });
        } else {
            plan = plan.component(move |board| {
                let neck = board.point(Anchor::NecklineBottom)?;
                let hem = board.point(Anchor::Hem)?;
                let rows = (hem.y - neck.y - 2).max(1) as u32;
                Ok(Part::new("stole", ShapeSpec::Rect(Rect::new(3, rows)).at(Point::new(neck.x, neck.y + 1)), stole).boxed())
            });
        }

        plan.component(move |board| {
            let waist = board.point(Anchor::Waist)?;
            Ok(Part::new("sash", ShapeSpec::Rect(Rect::new(waist.span, 2)).at(Point::new(waist.x, waist.y)), sash).boxed())
        })
    }
}

/// Generate a robe.
pub fn generate_robe(options: &ItemOptions) -> Item {
    let Session { seed, mut sampler } = Session::start(options);
    let params = RobeParams::sample(&mut sampler, options);
    let plan = params.plan(grid(GRID_WIDTH, GRID_HEIGHT, options), seed, sampler.into_diagnostics());
    assemble(plan)
}
