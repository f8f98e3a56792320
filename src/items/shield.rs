//! Shields: a banded or round body with a metal boss.

use crate::assemble::{
    assemble, Anchor, AttachmentPoint, ComponentPlan, Item, ItemData, ItemKind, ItemName,
    ParameterSampler, Part,
};
use crate::config::{ItemOptions, ResolvedSeed};
use crate::diagnostic::Diagnostics;
use crate::render::{GridSpec, Overlay};
use crate::shape::{Annulus, CompositeSilhouette, Disc, Point, ShapeSpec, Silhouette};
use crate::types::{MaterialClass, MaterialDef};

use super::{grid, material_key, sub_type, Session};

const GRID_WIDTH: u32 = 32;
const GRID_HEIGHT: u32 = 40;
const CENTER_X: i32 = 16;
const TOP: i32 = 2;
/// Centre of round bodies.
const ROUND_CENTER: Point = Point::new(16, 20);

sub_type! {
    ShieldType, "shield" {
        Kite => ("kite", "Kite Shield"),
        Heater => ("heater", "Heater Shield"),
        Tower => ("tower", "Tower Shield"),
        Round => ("round", "Round Shield"),
        Buckler => ("buckler", "Buckler"),
    }
}

struct ShieldStyle {
    class: MaterialClass,
    width: (u32, u32),
    height: (u32, u32),
    boss: (u32, u32),
}

const KITE: ShieldStyle = ShieldStyle {
    class: MaterialClass::Wood,
    width: (22, 24),
    height: (34, 36),
    boss: (2, 3),
};

const HEATER: ShieldStyle = ShieldStyle {
    class: MaterialClass::Wood,
    width: (24, 26),
    height: (28, 32),
    boss: (3, 3),
};

const TOWER: ShieldStyle = ShieldStyle {
    class: MaterialClass::Metal,
    width: (20, 22),
    height: (34, 36),
    boss: (3, 4),
};

/// For round bodies, width is the radius.
const ROUND: ShieldStyle = ShieldStyle {
    class: MaterialClass::Wood,
    width: (13, 14),
    height: (0, 0),
    boss: (3, 4),
};

const BUCKLER: ShieldStyle = ShieldStyle {
    class: MaterialClass::Metal,
    width: (9, 10),
    height: (0, 0),
    boss: (2, 3),
};

impl ShieldType {
    fn style(self) -> &'static ShieldStyle {
        match self {
            ShieldType::Kite => &KITE,
            ShieldType::Heater => &HEATER,
            ShieldType::Tower => &TOWER,
            ShieldType::Round => &ROUND,
            ShieldType::Buckler => &BUCKLER,
        }
    }

    fn is_round(self) -> bool {
        matches!(self, ShieldType::Round | ShieldType::Buckler)
    }
}

/// Resolved shield parameters.
#[derive(Debug, Clone)]
pub struct ShieldParams {
    pub sub_type: ShieldType,
    pub body: &'static MaterialDef,
    pub trim: &'static MaterialDef,
    /// Width of banded bodies, radius of round ones.
    pub width: u32,
    pub height: u32,
    pub boss_radius: u32,
}

impl ShieldParams {
    pub fn sample(sampler: &mut ParameterSampler, options: &ItemOptions) -> Self {
        let sub_type: ShieldType = sampler.variant(options.sub_type());
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
            width: sampler.size_in(style.width.0, style.width.1),
            height: sampler.size_in(style.height.0, style.height.1),
            boss_radius: sampler.size_in(style.boss.0, style.boss.1),
        }
    }

    pub fn body_shape(&self) -> Silhouette {
        let origin = Point::new(CENTER_X, TOP);
        match self.sub_type {
            ShieldType::Kite => ShapeSpec::Composite(CompositeSilhouette::kite(self.width, self.height)).at(origin),
            ShieldType::Heater => ShapeSpec::Composite(CompositeSilhouette::heater(self.width, self.height)).at(origin),
            ShieldType::Tower => ShapeSpec::Composite(CompositeSilhouette::tower(self.width, self.height)).at(origin),
            ShieldType::Round | ShieldType::Buckler => ShapeSpec::Disc(Disc::new(self.width)).at(ROUND_CENTER),
        }
    }

    /// Where the boss sits.
    pub fn boss_center(&self) -> Point {
        if self.sub_type.is_round() {
            ROUND_CENTER
        } else {
            Point::new(CENTER_X, TOP + (self.height as f64 * 0.4).round() as i32)
        }
    }

    fn data(&self) -> ItemData {
        ItemData::new()
            .with("subType", self.sub_type.to_string())
            .with("material", material_key(self.body))
            .with("trimMaterial", material_key(self.trim))
            .with("width", self.width)
            .with("height", self.height)
            .with("bossRadius", self.boss_radius)
    }

    pub fn plan(&self, grid: GridSpec, seed: ResolvedSeed, diagnostics: Diagnostics) -> ComponentPlan {
        let sub_type = self.sub_type;
        let shape = self.body_shape();
        let body = self.body.palette();
        let boss_at = self.boss_center();
        let (radius, boss_r) = (self.width, self.boss_radius);
        let trim = self.trim.palette();
        let rim = trim.clone();

        let mut plan = ComponentPlan::new(ItemKind::Shield, grid, seed)
            .named(ItemName::new(self.body.name, sub_type.label()))
            .with_data(self.data())
            .with_diagnostics(diagnostics)
            .component(move |_| {
                let part = Part::new("body", shape, body)
                    .anchor(Anchor::BodyTop, AttachmentPoint::new(CENTER_X, TOP, radius))
                    .anchor(Anchor::BodyCenter, AttachmentPoint::new(boss_at.x, boss_at.y, radius));
                let part = if sub_type == ShieldType::Buckler {
                    part.with_overlay(Overlay::DomeBands {
                        center: (boss_at.x, boss_at.y),
                        inner: boss_r as f64,
                        outer: radius as f64,
                    })
                } else {
                    part
                };
                Ok(part.boxed())
            });

        if sub_type == ShieldType::Round {
            plan = plan.component(move |board| {
                let c = board.point(Anchor::BodyCenter)?;
                Ok(Part::new("rim", ShapeSpec::Annulus(Annulus::new(radius, radius - 2)).at(Point::new(c.x, c.y)), rim).boxed())
            });
        }

        plan.component(move |board| {
            let c = board.point(Anchor::BodyCenter)?;
            Ok(Part::new("boss", ShapeSpec::Disc(Disc::new(boss_r)).at(Point::new(c.x, c.y)), trim)
                .with_overlay(Overlay::RadialQuadrants {
                    center: (c.x, c.y),
                    radius: boss_r as f64,
                })
                .boxed())
        })
    }
}

/// Generate a shield.
pub fn generate_shield(options: &ItemOptions) -> Item {
    let Session { seed, mut sampler } = Session::start(options);
    let params = ShieldParams::sample(&mut sampler, options);
    let plan = params.plan(grid(GRID_WIDTH, GRID_HEIGHT, options), seed, sampler.into_diagnostics());
    assemble(plan)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shape::Membership;
    use crate::types::{MaterialCatalog, Palette};

    fn params(sub_type: ShieldType, width: u32, height: u32) -> ShieldParams {
        ShieldParams {
            sub_type,
            body: MaterialCatalog::find("oak").unwrap(),
            trim: MaterialCatalog::find("iron").unwrap(),
            width,
            height,
            boss_radius: 3,
        }
    }

    fn render(p: &ShieldParams) -> Item {
        assemble(p.plan(GridSpec::new(GRID_WIDTH, GRID_HEIGHT, 1), ResolvedSeed::explicit(0), Diagnostics::new()))
    }

    fn is_tone(c: crate::types::Colour, p: &Palette) -> bool {
        c == p.base || c == p.highlight || c == p.shadow
    }

    #[test]
    fn test_kite_body_and_boss() {
        let p = params(ShieldType::Kite, 22, 35);
        let item = render(&p);
        let surface = item.surface.as_ref().unwrap();
        let body = p.body_shape();
        let boss = ShapeSpec::Disc(Disc::new(3)).at(p.boss_center());
        let (wood, iron) = (p.body.palette(), p.trim.palette());

        for (x, y) in body.bounds().cells() {
            let c = surface.get(x, y);
            if boss.contains(x, y) {
                assert!(is_tone(c.unwrap(), &iron));
            } else if body.contains(x, y) {
                assert!(is_tone(c.unwrap(), &wood));
            } else {
                assert_eq!(c, None);
            }
        }
        assert_eq!(item.name, "Oak Kite Shield");
    }

    #[test]
    fn test_kite_narrows_to_point() {
        let p = params(ShieldType::Kite, 22, 35);
        let surface = render(&p).surface.unwrap();
        let filled = |y: i32| (0..GRID_WIDTH as i32).filter(|&x| surface.get(x, y).is_some()).count();
        assert_eq!(filled(TOP + 12), 22);
        assert!(filled(TOP + 34) <= 3);
    }

    #[test]
    fn test_round_rim_is_trim() {
        let p = params(ShieldType::Round, 13, 0);
        let surface = render(&p).surface.unwrap();
        let iron = p.trim.palette();
        let c = surface.get(ROUND_CENTER.x, ROUND_CENTER.y - 12).unwrap();
        assert!(is_tone(c, &iron));
        let c = surface.get(ROUND_CENTER.x, ROUND_CENTER.y - 7).unwrap();
        assert!(is_tone(c, &p.body.palette()));
    }

    #[test]
    fn test_body_class_follows_style() {
        for seed in 0..20 {
            let mut sampler = ParameterSampler::new(seed);
            let p = ShieldParams::sample(&mut sampler, &ItemOptions::new().with_sub_type("tower"));
            assert_eq!(p.body.class, MaterialClass::Metal);
            assert_ne!(p.trim.key, p.body.key);

            let mut sampler = ParameterSampler::new(seed);
            let p = ShieldParams::sample(&mut sampler, &ItemOptions::new().with_sub_type("heater"));
            assert_eq!(p.body.class, MaterialClass::Wood);
        }
    }

    #[test]
    fn test_fits_grid() {
        for key in ["kite", "heater", "tower", "round", "buckler"] {
            for seed in 0..10 {
                let mut sampler = ParameterSampler::new(seed);
                let p = ShieldParams::sample(&mut sampler, &ItemOptions::new().with_sub_type(key));
                let b = p.body_shape().bounds();
                assert!(b.min_x >= 0 && b.min_y >= 0, "{} {:?}", key, b);
                assert!(b.max_x < GRID_WIDTH as i32 && b.max_y < GRID_HEIGHT as i32, "{} {:?}", key, b);
            }
        }
    }
}
