//! Tridents: prongs rising from a crossbar on a long haft.

use crate::assemble::{
    assemble, Anchor, AttachmentPoint, ComponentPlan, Item, ItemData, ItemKind, ItemName,
    ParameterSampler, Part,
};
use crate::config::{ItemOptions, ResolvedSeed};
use crate::diagnostic::Diagnostics;
use crate::render::GridSpec;
use crate::shape::{row_span, Point, Rect, ShapeSpec, Silhouette, TaperedBody, WidthProfile};
use crate::types::{MaterialClass, MaterialDef};

use super::{grid, material_key, sub_type, Session};

const GRID_WIDTH: u32 = 32;
const GRID_HEIGHT: u32 = 64;
const CENTER_X: i32 = 16;
const TOP: i32 = 2;
const BAR_HEIGHT: u32 = 2;

sub_type! {
    TridentType, "trident" {
        Classic => ("classic", "Trident"),
        Barbed => ("barbed", "Barbed Trident"),
        Fishing => ("fishing", "Fishing Trident"),
    }
}

struct TridentStyle {
    prongs: u32,
    prong_width: u32,
    tip_rows: u32,
    prong_length: (u32, u32),
    /// Extra rows on the centre prong.
    center_extra: u32,
    crossbar: (u32, u32),
    barbs: bool,
}

const CLASSIC: TridentStyle = TridentStyle {
    prongs: 3,
    prong_width: 3,
    tip_rows: 3,
    prong_length: (12, 14),
    center_extra: 2,
    crossbar: (13, 15),
    barbs: false,
};

const BARBED: TridentStyle = TridentStyle {
    prongs: 3,
    prong_width: 2,
    tip_rows: 2,
    prong_length: (12, 14),
    center_extra: 2,
    crossbar: (13, 15),
    barbs: true,
};

const FISHING: TridentStyle = TridentStyle {
    prongs: 5,
    prong_width: 1,
    tip_rows: 0,
    prong_length: (10, 12),
    center_extra: 0,
    crossbar: (9, 11),
    barbs: false,
};

impl TridentType {
    fn style(self) -> &'static TridentStyle {
        match self {
            TridentType::Classic => &CLASSIC,
            TridentType::Barbed => &BARBED,
            TridentType::Fishing => &FISHING,
        }
    }
}

/// Resolved trident parameters.
#[derive(Debug, Clone)]
pub struct TridentParams {
    pub sub_type: TridentType,
    pub head: &'static MaterialDef,
    pub haft: &'static MaterialDef,
    pub cap: &'static MaterialDef,
    pub prong_length: u32,
    pub crossbar_width: u32,
    pub haft_length: u32,
}

impl TridentParams {
    pub fn sample(sampler: &mut ParameterSampler, options: &ItemOptions) -> Self {
        let sub_type: TridentType = sampler.variant(options.sub_type());
        let style = sub_type.style();

        let head = sampler.material("head", options.material(), MaterialClass::Metal);
        let haft = sampler.material("haft", options.haft_material.as_deref(), MaterialClass::Wood);
        let cap = sampler.material_excluding(
            "cap",
            options.pommel_material.as_deref(),
            MaterialClass::Metal,
            &[head.key],
        );

        Self {
            sub_type,
            head,
            haft,
            cap,
            prong_length: sampler.size_in(style.prong_length.0, style.prong_length.1),
            crossbar_width: sampler.size_in(style.crossbar.0, style.crossbar.1),
            haft_length: sampler.size_in(36, 40),
        }
    }

    /// Crossbar top row. Prongs end on the row above it.
    fn bar_y(&self) -> i32 {
        TOP + (self.prong_length + self.sub_type.style().center_extra) as i32
    }

    /// Centre x of each prong, left to right.
    pub fn prong_xs(&self) -> Vec<i32> {
        let n = self.sub_type.style().prongs as i32;
        let spacing = if n > 3 { 2 } else { self.crossbar_width as i32 / 2 - 1 };
        (0..n).map(|i| CENTER_X + (i - n / 2) * spacing).collect()
    }

    /// Prong (and barb) silhouettes rising from `base_y`.
    pub fn prong_shapes(&self, base_y: i32) -> Vec<Silhouette> {
        let style = self.sub_type.style();
        let xs = self.prong_xs();
        let mut shapes = Vec::with_capacity(xs.len() + 2);
        for &x in &xs {
            let length = if x == CENTER_X {
                self.prong_length + style.center_extra
            } else {
                self.prong_length
            };
            let body = TaperedBody::new(
                length,
                WidthProfile::Pointed {
                    width: style.prong_width,
                    tip_rows: style.tip_rows,
                },
            );
            let tip_y = base_y - length as i32;
            shapes.push(ShapeSpec::Tapered(body).at(Point::new(x, tip_y)));

            if style.barbs && x != CENTER_X {
                let (left, right) = row_span(x, style.prong_width);
                let barb_x = if x < CENTER_X { left - 1 } else { right };
                let barb_y = tip_y + style.tip_rows as i32 + 1;
                shapes.push(ShapeSpec::Rect(Rect::new(1, 2)).at(Point::new(barb_x, barb_y)));
            }
        }
        shapes
    }

    fn data(&self) -> ItemData {
        ItemData::new()
            .with("subType", self.sub_type.to_string())
            .with("material", material_key(self.head))
            .with("haftMaterial", material_key(self.haft))
            .with("capMaterial", material_key(self.cap))
            .with("prongs", self.sub_type.style().prongs)
            .with("prongLength", self.prong_length)
            .with("crossbarWidth", self.crossbar_width)
            .with("haftLength", self.haft_length)
    }

    pub fn plan(&self, grid: GridSpec, seed: ResolvedSeed, diagnostics: Diagnostics) -> ComponentPlan {
        let bar_y = self.bar_y();
        let bar_w = self.crossbar_width;
        let prongs = self.prong_shapes(bar_y);
        let head = self.head.palette();
        let head_again = head.clone();
        let haft_len = self.haft_length;
        let haft = self.haft.palette();
        let cap = self.cap.palette();

        ComponentPlan::new(ItemKind::Trident, grid, seed)
            .named(ItemName::new(self.head.name, self.sub_type.label()))
            .with_data(self.data())
            .with_diagnostics(diagnostics)
            .component(move |_| {
                Ok(Part::new("crossbar", ShapeSpec::Rect(Rect::new(bar_w, BAR_HEIGHT)).at(Point::new(CENTER_X, bar_y)), head)
                    .anchor(Anchor::ProngBase, AttachmentPoint::new(CENTER_X, bar_y, bar_w))
                    .anchor(Anchor::HaftTop, AttachmentPoint::new(CENTER_X, bar_y + BAR_HEIGHT as i32, 3))
                    .boxed())
            })
            .attached("crossbar", move |board| {
                board.point(Anchor::ProngBase)?;
                Ok(Part::union("prongs", prongs, head_again).boxed())
            })
            .attached("crossbar", move |board| {
                let base = board.point(Anchor::ProngBase)?;
                let bottom = base.y + haft_len as i32 - 1;
                Ok(Part::new("haft", ShapeSpec::Rect(Rect::new(3, haft_len)).at(Point::new(base.x, base.y)), haft)
                    .anchor(Anchor::HaftBottom, AttachmentPoint::new(base.x, bottom, 3))
                    .boxed())
            })
            .attached("haft", move |board| {
                let end = board.point(Anchor::HaftBottom)?;
                Ok(Part::new("cap", ShapeSpec::Rect(Rect::new(5, 3)).at(Point::new(end.x, end.y - 1)), cap).boxed())
            })
    }
}

/// Generate a trident.
pub fn generate_trident(options: &ItemOptions) -> Item {
    let Session { seed, mut sampler } = Session::start(options);
    let params = TridentParams::sample(&mut sampler, options);
    let plan = params.plan(grid(GRID_WIDTH, GRID_HEIGHT, options), seed, sampler.into_diagnostics());
    assemble(plan)
}
