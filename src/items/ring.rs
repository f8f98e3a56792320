//! Rings: a domed band, optionally with a signet bezel or a set stone.

use crate::assemble::{
    assemble, Anchor, AttachmentPoint, ComponentPlan, Item, ItemData, ItemKind, ItemName,
    ParameterSampler, Part,
};
use crate::config::{ItemOptions, ResolvedSeed};
use crate::diagnostic::Diagnostics;
use crate::render::{GridSpec, Overlay};
use crate::shape::{Annulus, Disc, Point, Rect, ShapeSpec};
use crate::types::{MaterialClass, MaterialDef};

use super::{grid, material_key, sub_type, Session};

const GRID_WIDTH: u32 = 24;
const GRID_HEIGHT: u32 = 24;
const CENTER: Point = Point::new(12, 14);

sub_type! {
    RingType, "ring" {
        Band => ("band", "Band"),
        Signet => ("signet", "Signet Ring"),
        Solitaire => ("solitaire", "Solitaire Ring"),
    }
}

/// Resolved ring parameters.
#[derive(Debug, Clone)]
pub struct RingParams {
    pub sub_type: RingType,
    pub band: &'static MaterialDef,
    pub gem: Option<&'static MaterialDef>,
    pub outer: u32,
    pub inner: u32,
}

impl RingParams {
    pub fn sample(sampler: &mut ParameterSampler, options: &ItemOptions) -> Self {
        let sub_type: RingType = sampler.variant(options.sub_type());
        let band = sampler.material("band", options.material(), MaterialClass::Metal);
        let gem = match (sub_type, options.gem_material.as_deref()) {
            (RingType::Solitaire, requested) => Some(sampler.material("gem", requested, MaterialClass::Gem)),
            (RingType::Signet, Some(key)) => Some(sampler.material("gem", Some(key), MaterialClass::Gem)),
            _ => None,
        };
        let outer = sampler.size_in(7, 8);
        let inner = outer - sampler.size_in(2, 3);
        Self {
            sub_type,
            band,
            gem,
            outer,
            inner,
        }
    }

    fn name(&self) -> ItemName {
        let name = ItemName::new(self.band.name, self.sub_type.label());
        match self.gem {
            Some(gem) => name.decorated(format!("{}-Set", gem.name)),
            None => name,
        }
    }

    fn data(&self) -> ItemData {
        ItemData::new()
            .with("subType", self.sub_type.to_string())
            .with("material", material_key(self.band))
            .with("gemMaterial", self.gem.map(material_key).unwrap_or_default())
            .with("outerRadius", self.outer)
            .with("innerRadius", self.inner)
    }

    pub fn plan(&self, grid: GridSpec, seed: ResolvedSeed, diagnostics: Diagnostics) -> ComponentPlan {
        let (outer, inner) = (self.outer, self.inner);
        let band = self.band.palette();
        let setting = band.clone();

        let mut plan = ComponentPlan::new(ItemKind::Ring, grid, seed)
            .named(self.name())
            .with_data(self.data())
            .with_diagnostics(diagnostics)
            .component(move |_| {
                Ok(Part::new("band", ShapeSpec::Annulus(Annulus::new(outer, inner)).at(CENTER), band)
                    .with_overlay(Overlay::DomeBands {
                        center: (CENTER.x, CENTER.y),
                        inner: inner as f64,
                        outer: outer as f64,
                    })
                    .anchor(Anchor::BandCenter, AttachmentPoint::new(CENTER.x, CENTER.y, outer * 2 + 1))
                    .anchor(Anchor::BandTop, AttachmentPoint::new(CENTER.x, CENTER.y - outer as i32, outer - inner))
                    .boxed())
            });

        plan = match self.sub_type {
            RingType::Band => plan,
            RingType::Signet => plan.attached("band", move |board| {
                let top = board.point(Anchor::BandTop)?;
                Ok(Part::new("bezel", ShapeSpec::Rect(Rect::new(7, 4).rounded(1)).at(Point::new(top.x, top.y - 2)), setting)
                    .anchor(Anchor::BodyCenter, AttachmentPoint::new(top.x, top.y, 7))
                    .boxed())
            }),
            RingType::Solitaire => plan.attached("band", move |board| {
                let top = board.point(Anchor::BandTop)?;
                let prongs = vec![
                    ShapeSpec::Rect(Rect::new(1, 3)).at(Point::new(top.x - 2, top.y - 2)),
                    ShapeSpec::Rect(Rect::new(1, 3)).at(Point::new(top.x + 2, top.y - 2)),
                ];
                Ok(Part::union("prongs", prongs, setting)
                    .anchor(Anchor::BodyCenter, AttachmentPoint::new(top.x, top.y - 2, 5))
                    .boxed())
            }),
        };

        if let Some(gem) = self.gem {
            let palette = gem.palette();
            let radius = if self.sub_type == RingType::Solitaire { 3 } else { 1 };
            plan = plan.component(move |board| {
                let c = board.point(Anchor::BodyCenter)?;
                Ok(Part::new("gem", ShapeSpec::Disc(Disc::new(radius)).at(Point::new(c.x, c.y)), palette)
                    .with_overlay(Overlay::RadialQuadrants {
                        center: (c.x, c.y),
                        radius: radius as f64,
                    })
                    .boxed())
            });
        }
        plan
    }
}

/// Generate a ring.
pub fn generate_ring(options: &ItemOptions) -> Item {
    let Session { seed, mut sampler } = Session::start(options);
    let params = RingParams::sample(&mut sampler, options);
    let plan = params.plan(grid(GRID_WIDTH, GRID_HEIGHT, options), seed, sampler.into_diagnostics());
    assemble(plan)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::Tone;
    use crate::shape::Membership;
    use crate::types::MaterialCatalog;

    fn params(sub_type: RingType, gem: Option<&str>) -> RingParams {
        RingParams {
            sub_type,
            band: MaterialCatalog::find("gold").unwrap(),
            gem: gem.and_then(MaterialCatalog::find),
            outer: 8,
            inner: 5,
        }
    }

    fn render(p: &RingParams) -> Item {
        assemble(p.plan(GridSpec::new(GRID_WIDTH, GRID_HEIGHT, 1), ResolvedSeed::explicit(0), Diagnostics::new()))
    }

    #[test]
    fn test_band_has_hole_and_dome() {
        let p = params(RingType::Band, None);
        let item = render(&p);
        let surface = item.surface.as_ref().unwrap();
        let gold = p.band.palette();
        assert_eq!(surface.get(CENTER.x, CENTER.y), None);
        assert_eq!(surface.get(CENTER.x, CENTER.y - 4), None);
        // crest of the band: highlight above the centre, shadow below
        assert_eq!(surface.get(CENTER.x, CENTER.y - 6 - 1), Some(Tone::Highlight.colour(&gold)));
        assert_eq!(surface.get(CENTER.x, CENTER.y + 7), Some(Tone::Shadow.colour(&gold)));
        assert_eq!(item.name, "Gold Band");
    }

    #[test]
    fn test_solitaire_stone_sits_on_band() {
        let p = params(RingType::Solitaire, Some("emerald"));
        let item = render(&p);
        let surface = item.surface.as_ref().unwrap();
        let stone = p.gem.unwrap().palette();
        let top = CENTER.y - 8;
        assert_eq!(surface.get(CENTER.x, top - 2), Some(stone.base));
        assert!(surface.get(CENTER.x, top - 5).is_some());
        assert_eq!(item.name, "Emerald-Set Gold Solitaire Ring");
        assert_eq!(item.item_data.get_str("gemMaterial"), Some("emerald"));
    }

    #[test]
    fn test_signet_bezel_outside_band_only() {
        let p = params(RingType::Signet, None);
        let item = render(&p);
        let surface = item.surface.as_ref().unwrap();
        let band = ShapeSpec::Annulus(Annulus::new(8, 5)).at(CENTER);
        let gold = p.band.palette();
        for (x, y) in band.bounds().cells() {
            if band.contains(x, y) {
                let c = surface.get(x, y).unwrap();
                assert!(c == gold.base || c == gold.highlight || c == gold.shadow);
            }
        }
        // bezel rises two rows above the band
        assert!(surface.get(CENTER.x, CENTER.y - 10).is_some());
        assert!(surface.get(CENTER.x, CENTER.y - 11).is_none());
        assert_eq!(item.name, "Gold Signet Ring");
    }

    #[test]
    fn test_solitaire_always_has_gem() {
        for seed in 0..20 {
            let mut sampler = ParameterSampler::new(seed);
            let p = RingParams::sample(&mut sampler, &ItemOptions::new().with_sub_type("solitaire"));
            assert_eq!(p.gem.unwrap().class, MaterialClass::Gem);
            assert!(p.inner < p.outer);
        }
    }
}
