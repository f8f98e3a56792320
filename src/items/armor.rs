//! Body armor: a tapered torso with a neckline, plus pauldrons or sleeves.
//!
//! The torso records its shoulders on the first full row below the
//! neckline; everything else hangs off those anchors.

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
const GRID_HEIGHT: u32 = 40;
const ORIGIN: Point = Point::new(20, 4);

sub_type! {
    ArmorType, "armor" {
        Cuirass => ("cuirass", "Cuirass"),
        Hauberk => ("hauberk", "Hauberk"),
        Brigandine => ("brigandine", "Brigandine"),
    }
}

struct ArmorStyle {
    class: MaterialClass,
    length: (u32, u32),
    shoulders: (u32, u32),
    waist: (u32, u32),
    neck_rows: (u32, u32),
}

const CUIRASS: ArmorStyle = ArmorStyle {
    class: MaterialClass::Metal,
    length: (24, 26),
    shoulders: (20, 22),
    waist: (16, 18),
    neck_rows: (3, 4),
};

const HAUBERK: ArmorStyle = ArmorStyle {
    class: MaterialClass::Metal,
    length: (30, 32),
    shoulders: (18, 20),
    waist: (18, 20),
    neck_rows: (3, 4),
};

const BRIGANDINE: ArmorStyle = ArmorStyle {
    class: MaterialClass::Leather,
    length: (26, 28),
    shoulders: (20, 22),
    waist: (18, 20),
    neck_rows: (4, 5),
};

impl ArmorType {
    fn style(self) -> &'static ArmorStyle {
        match self {
            ArmorType::Cuirass => &CUIRASS,
            ArmorType::Hauberk => &HAUBERK,
            ArmorType::Brigandine => &BRIGANDINE,
        }
    }
}

/// Resolved armor parameters.
#[derive(Debug, Clone)]
pub struct ArmorParams {
    pub sub_type: ArmorType,
    pub body: &'static MaterialDef,
    pub trim: &'static MaterialDef,
    pub length: u32,
    pub shoulders: u32,
    pub waist: u32,
    pub neck_rows: u32,
}

impl ArmorParams {
    pub fn sample(sampler: &mut ParameterSampler, options: &ItemOptions) -> Self {
        let sub_type: ArmorType = sampler.variant(options.sub_type());
        let style = sub_type.style();
        let body = sampler.material("body", options.material(), style.class);
        let trim = sampler.material_excluding(
            "trim",
            options.trim_material.as_deref(),
            MaterialClass::Metal,
            &[body.key],
        );
        Self {
            sub_type,
            body,
            trim,
            length: sampler.size_in(style.length.0, style.length.1),
            shoulders: sampler.size_in(style.shoulders.0, style.shoulders.1),
            waist: sampler.size_in(style.waist.0, style.waist.1),
            neck_rows: sampler.size_in(style.neck_rows.0, style.neck_rows.1),
        }
    }

    pub fn torso(&self) -> TaperedBody {
        TaperedBody::new(
            self.length,
            WidthProfile::Linear {
                start: self.shoulders,
                end: self.waist,
            },
        )
        .with_cutout(Cutout {
            start_row: 0,
            end_row: self.neck_rows,
            top_width: 8,
            bottom_width: 4,
        })
    }

    /// A sleeve hanging from a shoulder, slanting outward.
    fn sleeve(at: Point, outward: f64) -> Silhouette {
        let body = TaperedBody::new(12, WidthProfile::Linear { start: 6, end: 4 })
            .with_center(CenterLine::Slant { per_row: 0.35 * outward });
        ShapeSpec::Tapered(body).at(at)
    }

    /// Rivet positions inside the torso, from the neckline to the hem.
    fn rivets(neck: AttachmentPoint, hem: AttachmentPoint) -> Vec<Silhouette> {
        let mut rivets = Vec::new();
        let mut y = neck.y + 3;
        while y < hem.y - 1 {
            for dx in [-5, 0, 5] {
                rivets.push(ShapeSpec::Rect(Rect::new(1, 1)).at(Point::new(neck.x + dx, y)));
            }
            y += 4;
        }
        rivets
    }

    fn data(&self) -> ItemData {
        ItemData::new()
            .with("subType", self.sub_type.to_string())
            .with("material", material_key(self.body))
            .with("trimMaterial", material_key(self.trim))
            .with("length", self.length)
            .with("shoulderWidth", self.shoulders)
            .with("waistWidth", self.waist)
            .with("necklineRows", self.neck_rows)
    }

    pub fn plan(&self, grid: GridSpec, seed: ResolvedSeed, diagnostics: Diagnostics) -> ComponentPlan {
        let torso = TaperedPart::new("torso", self.torso(), ORIGIN, self.body.palette()).recording(TaperAnchors {
            top: Some(Anchor::NecklineTop),
            bottom: Some(Anchor::Hem),
            shoulders: Some((Anchor::ShoulderLeft, Anchor::ShoulderRight)),
            opening_bottom: Some(Anchor::NecklineBottom),
            middle: Some(Anchor::Waist),
        });
        let trim = self.trim.palette();
        let body = self.body.palette();

        let plan = ComponentPlan::new(ItemKind::Armor, grid, seed)
            .named(ItemName::new(self.body.name, self.sub_type.label()))
            .with_data(self.data())
            .with_diagnostics(diagnostics)
            .component(move |_| Ok(torso.boxed()));

        match self.sub_type {
            ArmorType::Cuirass => plan.attached("torso", move |board| {
                let (l, r) = (board.point(Anchor::ShoulderLeft)?, board.point(Anchor::ShoulderRight)?);
                let pauldrons = vec![
                    ShapeSpec::Disc(Disc::new(4)).at(Point::new(l.x, l.y)),
                    ShapeSpec::Disc(Disc::new(4)).at(Point::new(r.x, r.y)),
                ];
                Ok(Part::union("pauldrons", pauldrons, trim).boxed())
            }),
            ArmorType::Hauberk => plan.attached("torso", move |board| {
                let (l, r) = (board.point(Anchor::ShoulderLeft)?, board.point(Anchor::ShoulderRight)?);
                let sleeves = vec![
                    Self::sleeve(Point::new(l.x - 1, l.y), -1.0),
                    Self::sleeve(Point::new(r.x + 1, r.y), 1.0),
                ];
                Ok(Part::union("sleeves", sleeves, body).boxed())
            }),
            ArmorType::Brigandine => plan
                .attached("torso", move |board| {
                    let (l, r) = (board.point(Anchor::ShoulderLeft)?, board.point(Anchor::ShoulderRight)?);
                    let sleeves = vec![
                        Self::sleeve(Point::new(l.x - 1, l.y), -1.0),
                        Self::sleeve(Point::new(r.x + 1, r.y), 1.0),
                    ];
                    Ok(Part::union("sleeves", sleeves, body).boxed())
                })
                .component(move |board| {
                    let neck = board.point(Anchor::NecklineBottom)?;
                    let hem = board.point(Anchor::Hem)?;
                    Ok(Part::union("rivets", Self::rivets(neck, hem), trim).boxed())
                }),
        }
    }
}

/// Generate a piece of body armor.
pub fn generate_armor(options: &ItemOptions) -> Item {
    let Session { seed, mut sampler } = Session::start(options);
    let params = ArmorParams::sample(&mut sampler, options);
    let plan = params.plan(grid(GRID_WIDTH, GRID_HEIGHT, options), seed, sampler.into_diagnostics());
    assemble(plan)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shape::Membership;
    use crate::types::MaterialCatalog;

    fn params(sub_type: ArmorType, body: &str) -> ArmorParams {
        ArmorParams {
            sub_type,
            body: MaterialCatalog::find(body).unwrap(),
            trim: MaterialCatalog::find("gold").unwrap(),
            length: 26,
            shoulders: 22,
            waist: 18,
            neck_rows: 4,
        }
    }

    fn render(p: &ArmorParams) -> Item {
        assemble(p.plan(GridSpec::new(GRID_WIDTH, GRID_HEIGHT, 1), ResolvedSeed::explicit(0), Diagnostics::new()))
    }

    #[test]
    fn test_attachments_never_overwrite_torso() {
        for sub_type in [ArmorType::Cuirass, ArmorType::Hauberk] {
            let p = params(sub_type, "steel");
            let item = render(&p);
            let surface = item.surface.as_ref().unwrap();
            let torso = ShapeSpec::Tapered(p.torso()).at(ORIGIN);
            let steel = p.body.palette();
            let mut checked = 0;
            for (x, y) in torso.bounds().cells() {
                if torso.contains(x, y) {
                    let c = surface.get(x, y).unwrap();
                    assert!(c == steel.base || c == steel.highlight || c == steel.shadow, "{:?} ({}, {})", sub_type, x, y);
                    checked += 1;
                }
            }
            assert!(checked > 300);
        }
    }

    #[test]
    fn test_neckline_is_open() {
        let item = render(&params(ArmorType::Cuirass, "iron"));
        let surface = item.surface.as_ref().unwrap();
        assert!(surface.get(ORIGIN.x, ORIGIN.y).is_none());
        assert!(surface.get(ORIGIN.x, ORIGIN.y + 3).is_none());
        assert!(surface.get(ORIGIN.x, ORIGIN.y + 4).is_some());
        assert!(surface.get(ORIGIN.x - 6, ORIGIN.y).is_some());
    }

    #[test]
    fn test_pauldrons_sit_on_shoulders() {
        let p = params(ArmorType::Cuirass, "iron");
        let item = render(&p);
        let surface = item.surface.as_ref().unwrap();
        let gold = p.trim.palette();
        // first row after the neckline is 21 wide: [10, 31)
        let y = ORIGIN.y + 4;
        for x in [10 - 4, 30 + 4] {
            let c = surface.get(x, y).unwrap();
            assert!(c == gold.base || c == gold.highlight || c == gold.shadow);
        }
        assert_eq!(item.name, "Iron Cuirass");
    }

    #[test]
    fn test_hauberk_sleeves_slant_outward() {
        let p = params(ArmorType::Hauberk, "steel");
        let surface = render(&p).surface.unwrap();
        let y = ORIGIN.y + 4 + 11;
        // left sleeve centre moves from x = 9 to 9 - 4
        assert!(surface.get(5, y).is_some());
        assert!(surface.get(35, y).is_some());
        assert!(surface.get(0, y).is_none());
    }

    #[test]
    fn test_brigandine_rivets_are_metal() {
        let p = params(ArmorType::Brigandine, "leather");
        let surface = render(&p).surface.unwrap();
        let gold = p.trim.palette();
        let neck_bottom = ORIGIN.y + 3;
        let c = surface.get(ORIGIN.x, neck_bottom + 3).unwrap();
        assert!(c == gold.base || c == gold.highlight || c == gold.shadow);
        let c = surface.get(ORIGIN.x - 5, neck_bottom + 7).unwrap();
        assert!(c == gold.base || c == gold.highlight || c == gold.shadow);
    }

    #[test]
    fn test_fits_grid() {
        for key in ["cuirass", "hauberk", "brigandine"] {
            for seed in 0..10 {
                let mut sampler = ParameterSampler::new(seed);
                let p = ArmorParams::sample(&mut sampler, &ItemOptions::new().with_sub_type(key));
                let b = ShapeSpec::Tapered(p.torso()).at(ORIGIN).bounds();
                assert!(b.min_x - 8 >= 0 && b.max_x + 8 < GRID_WIDTH as i32);
                assert!(b.max_y < GRID_HEIGHT as i32);
            }
        }
    }
}
