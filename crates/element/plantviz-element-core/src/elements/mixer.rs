use crate::data::ResolvedData;
use crate::descriptor::{ElementDescriptor, ElementInfo, Size};
use crate::schema::FieldSpec;
use crate::timing::{AnimationParams, TimingRule};
use crate::visual::{Property, Shape, Track, ViewBox, Visual};

pub const SPEED: FieldSpec = FieldSpec::rate("speed", "Mixing Speed", 1.0);

const FIELDS: &[FieldSpec] = &[SPEED];

static INFO: ElementInfo = ElementInfo {
    id: "industrialMixer",
    name: "Industrial Mixer",
    description: "Animated industrial mixer with adjustable speed",
    default_size: Size::new(200.0, 200.0),
};

/// Seconds per revolution at unit speed.
const BASE: f64 = 5.0;
const HUB: [f64; 2] = [100.0, 100.0];

pub struct IndustrialMixer;

impl ElementDescriptor for IndustrialMixer {
    fn info(&self) -> &ElementInfo {
        &INFO
    }

    fn view_box(&self) -> ViewBox {
        ViewBox::new(200.0, 200.0)
    }

    fn fields(&self) -> &'static [FieldSpec] {
        FIELDS
    }

    fn timing(&self) -> Option<TimingRule> {
        Some(TimingRule::InverseRate {
            field: SPEED.key,
            base: BASE,
        })
    }

    fn draw(&self, _data: &ResolvedData, params: Option<&AnimationParams>, out: &mut Visual) {
        out.shapes([
            Shape::rect(25.0, 170.0, 150.0, 20.0).fill("#444444"),
            Shape::path("M40 170 L60 50 H140 L160 170 Z")
                .fill("#888888")
                .stroke("#666666", 2.0),
            Shape::path("M55 50 Q100 30 145 50")
                .fill("none")
                .stroke("#666666", 3.0),
            Shape::rect(85.0, 120.0, 30.0, 40.0)
                .fill("#333333")
                .stroke("#222222", 2.0),
            Shape::circle(100.0, 140.0, 6.0).fill("#ff0000"),
            Shape::rect(90.0, 150.0, 20.0, 10.0).fill("#cccccc"),
            Shape::line(100.0, 50.0, 100.0, 110.0).stroke("#999999", 4.0),
        ]);
        out.group(
            "arms",
            [
                Shape::line(HUB[0], HUB[1], 85.0, 115.0).stroke("#999999", 4.0),
                Shape::line(HUB[0], HUB[1], 115.0, 115.0).stroke("#999999", 4.0),
            ],
        );
        out.shape(
            Shape::path("M60 170 Q100 150 140 170")
                .fill("#aaddff")
                .opacity(0.6),
        );

        if let Some(params) = params {
            out.track(
                Track::new("arms", Property::Rotate, params.duration)
                    .between(0.0, 360.0)
                    .origin(HUB[0], HUB[1]),
            );
        }
    }
}
