//! Swords: a tapered blade, guard, grip and pommel.
//!
//! The blade is drawn first and records its base as it walks its rows, so
//! the hilt follows the blade's curve.

use crate::assemble::{
    assemble, Anchor, AttachmentPoint, ComponentPlan, Item, ItemData, ItemKind, ItemName,
    ParameterSampler, Part, TaperAnchors, TaperedPart,
};
use crate::config::{ItemOptions, ResolvedSeed};
use crate::diagnostic::Diagnostics;
use crate::render::{GridSpec, Overlay};
use crate::shape::{CenterLine, Disc, Point, Rect, ShapeSpec, TaperedBody, WidthProfile};
use crate::types::{MaterialClass, MaterialDef};

use super::{grid, material_key, sub_type, Session};

const GRID_WIDTH: u32 = 32;
const GRID_HEIGHT: u32 = 72;
const CENTER_X: i32 = 12;
const TOP: i32 = 2;

sub_type! {
    SwordType, "sword" {
        Longsword => ("longsword", "Longsword"),
        Shortsword => ("shortsword", "Shortsword"),
        Greatsword => ("greatsword", "Greatsword"),
        Dagger => ("dagger", "Dagger"),
        Scimitar => ("scimitar", "Scimitar"),
    }
}

/// Ranges a sword style draws from.
struct SwordStyle {
    length: (u32, u32),
    width: (u32, u32),
    tip_rows: (u32, u32),
    curve: (f64, f64),
    guard_width: (u32, u32),
    grip_length: (u32, u32),
    pommel_radius: (u32, u32),
}

const LONGSWORD: SwordStyle = SwordStyle {
    length: (34, 40),
    width: (4, 5),
    tip_rows: (4, 6),
    curve: (0.0, 0.0),
    guard_width: (11, 14),
    grip_length: (7, 9),
    pommel_radius: (2, 2),
};

const SHORTSWORD: SwordStyle = SwordStyle {
    length: (24, 28),
    width: (4, 5),
    tip_rows: (3, 5),
    curve: (0.0, 0.0),
    guard_width: (9, 11),
    grip_length: (5, 6),
    pommel_radius: (1, 2),
};

const GREATSWORD: SwordStyle = SwordStyle {
    length: (42, 46),
    width: (6, 7),
    tip_rows: (6, 8),
    curve: (0.0, 0.0),
    guard_width: (15, 18),
    grip_length: (10, 12),
    pommel_radius: (2, 3),
};

const DAGGER: SwordStyle = SwordStyle {
    length: (14, 18),
    width: (3, 4),
    tip_rows: (4, 6),
    curve: (0.0, 0.0),
    guard_width: (7, 9),
    grip_length: (4, 5),
    pommel_radius: (1, 1),
};

const SCIMITAR: SwordStyle = SwordStyle {
    length: (32, 40),
    width: (4, 6),
    tip_rows: (5, 8),
    curve: (4.0, 7.0),
    guard_width: (9, 12),
    grip_length: (6, 8),
    pommel_radius: (1, 2),
};

impl SwordType {
    fn style(self) -> &'static SwordStyle {
        match self {
            SwordType::Longsword => &LONGSWORD,
            SwordType::Shortsword => &SHORTSWORD,
            SwordType::Greatsword => &GREATSWORD,
            SwordType::Dagger => &DAGGER,
            SwordType::Scimitar => &SCIMITAR,
        }
    }
}

/// Resolved sword parameters.
#[derive(Debug, Clone)]
pub struct SwordParams {
    pub sub_type: SwordType,
    pub blade: &'static MaterialDef,
    pub hilt: &'static MaterialDef,
    pub grip: &'static MaterialDef,
    pub pommel: &'static MaterialDef,
    /// Gem set in the guard, if any.
    pub gem: Option<&'static MaterialDef>,
    pub length: u32,
    pub width: u32,
    pub tip_rows: u32,
    pub curve: f64,
    pub guard_width: u32,
    pub guard_height: u32,
    pub grip_length: u32,
    pub pommel_radius: u32,
}

impl SwordParams {
    pub fn sample(sampler: &mut ParameterSampler, options: &ItemOptions) -> Self {
        let sub_type: SwordType = sampler.variant(options.sub_type());
        let style = sub_type.style();

        let blade = sampler.material_excluding(
            "blade",
            options.material(),
            MaterialClass::Metal,
            &["copper"],
        );
        let hilt = sampler.material_excluding(
            "hilt",
            options.hilt_material.as_deref(),
            MaterialClass::Metal,
            &[blade.key],
        );
        let grip = sampler.material("grip", options.grip_material.as_deref(), MaterialClass::Leather);
        let pommel = sampler.material(
            "pommel",
            options.pommel_material.as_deref(),
            MaterialClass::Metal,
        );
        let gem = match options.gem_material.as_deref() {
            Some(key) => Some(sampler.material("gem", Some(key), MaterialClass::Gem)),
            None if sampler.chance(0.3) => Some(sampler.material("gem", None, MaterialClass::Gem)),
            None => None,
        };

        Self {
            sub_type,
            blade,
            hilt,
            grip,
            pommel,
            gem,
            length: sampler.size_in(style.length.0, style.length.1),
            width: sampler.size_in(style.width.0, style.width.1),
            tip_rows: sampler.size_in(style.tip_rows.0, style.tip_rows.1),
            curve: sampler.float_in(style.curve.0, style.curve.1),
            guard_width: sampler.size_in(style.guard_width.0, style.guard_width.1),
            guard_height: 2,
            grip_length: sampler.size_in(style.grip_length.0, style.grip_length.1),
            pommel_radius: sampler.size_in(style.pommel_radius.0, style.pommel_radius.1),
        }
    }

    fn body(&self) -> TaperedBody {
        let body = TaperedBody::new(
            self.length,
            WidthProfile::Pointed {
                width: self.width,
                tip_rows: self.tip_rows,
            },
        );
        if self.curve != 0.0 {
            body.with_center(CenterLine::Curved { amount: self.curve })
        } else {
            body
        }
    }

    fn name(&self) -> ItemName {
        let name = ItemName::new(self.blade.name, self.sub_type.label());
        match self.gem {
            Some(gem) => name.decorated(format!("{}-Set", gem.name)),
            None => name,
        }
    }

    fn data(&self) -> ItemData {
        ItemData::new()
            .with("subType", self.sub_type.to_string())
            .with("material", material_key(self.blade))
            .with("hiltMaterial", material_key(self.hilt))
            .with("gripMaterial", material_key(self.grip))
            .with("pommelMaterial", material_key(self.pommel))
            .with("gemMaterial", self.gem.map(material_key).unwrap_or_default())
            .with("bladeLength", self.length)
            .with("bladeWidth", self.width)
            .with("curve", self.curve)
            .with("guardWidth", self.guard_width)
            .with("gripLength", self.grip_length)
            .with("pommelRadius", self.pommel_radius)
    }

    /// Build the plan for these parameters.
    pub fn plan(&self, grid: GridSpec, seed: ResolvedSeed, diagnostics: Diagnostics) -> ComponentPlan {
        let blade = TaperedPart::new("blade", self.body(), Point::new(CENTER_X, TOP), self.blade.palette())
            .recording(TaperAnchors {
                top: Some(Anchor::BladeTip),
                bottom: Some(Anchor::BladeBase),
                ..TaperAnchors::default()
            });

        let (guard_w, guard_h) = (self.guard_width, self.guard_height);
        let hilt = self.hilt.palette();
        let grip_len = self.grip_length;
        let grip = self.grip.palette();
        let pommel_r = self.pommel_radius;
        let pommel = self.pommel.palette();

        let mut plan = ComponentPlan::new(ItemKind::Sword, grid, seed)
            .named(self.name())
            .with_data(self.data())
            .with_diagnostics(diagnostics)
            .component(move |_| Ok(blade.boxed()))
            .attached("blade", move |board| {
                let base = board.point(Anchor::BladeBase)?;
                let top = base.y + 1;
                Ok(Part::new("guard", ShapeSpec::Rect(Rect::new(guard_w, guard_h)).at(Point::new(base.x, top)), hilt)
                    .anchor(Anchor::GuardCenter, AttachmentPoint::new(base.x, top + guard_h as i32 / 2, guard_w))
                    .anchor(Anchor::HaftTop, AttachmentPoint::new(base.x, top + guard_h as i32, guard_w))
                    .boxed())
            })
            .attached("guard", move |board| {
                let seat = board.point(Anchor::HaftTop)?;
                let w = if guard_w >= 13 { 3 } else { 2 };
                Ok(Part::new("grip", ShapeSpec::Rect(Rect::new(w, grip_len)).at(Point::new(seat.x, seat.y)), grip)
                    .anchor(Anchor::GripBottom, AttachmentPoint::new(seat.x, seat.y + grip_len as i32 - 1, w))
                    .boxed())
            })
            .attached("grip", move |board| {
                let end = board.point(Anchor::GripBottom)?;
                let center = Point::new(end.x, end.y + pommel_r as i32 + 1);
                Ok(Part::new("pommel", ShapeSpec::Disc(Disc::new(pommel_r)).at(center), pommel)
                    .anchor(Anchor::BodyCenter, AttachmentPoint::new(center.x, center.y, pommel_r * 2 + 1))
                    .boxed())
            });

        if let Some(gem) = self.gem {
            let palette = gem.palette();
            plan = plan.component(move |board| {
                let c = board.point(Anchor::GuardCenter)?;
                Ok(Part::new("gem", ShapeSpec::Disc(Disc::new(1)).at(Point::new(c.x, c.y)), palette)
                    .with_overlay(Overlay::RadialQuadrants { center: (c.x, c.y), radius: 1.0 })
                    .boxed())
            });
        }
        plan
    }
}

/// Generate a sword.
pub fn generate_sword(options: &ItemOptions) -> Item {
    let Session { seed, mut sampler } = Session::start(options);
    let params = SwordParams::sample(&mut sampler, options);
    let plan = params.plan(grid(GRID_WIDTH, GRID_HEIGHT, options), seed, sampler.into_diagnostics());
    assemble(plan)
}
