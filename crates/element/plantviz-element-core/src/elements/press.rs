use crate::data::ResolvedData;
use crate::descriptor::{ElementDescriptor, ElementInfo, Size};
use crate::schema::FieldSpec;
use crate::timing::{AnimationParams, TimingRule};
use crate::visual::{Property, Shape, Track, ViewBox, Visual};

/// Seconds per press cycle, not a rate.
pub const PRESS_SPEED: FieldSpec =
    FieldSpec::period("pressSpeed", "Press Speed (seconds)", 5.0).describe("Seconds per stroke");

const FIELDS: &[FieldSpec] = &[PRESS_SPEED];

static INFO: ElementInfo = ElementInfo {
    id: "hydraulicPress",
    name: "Hydraulic Press",
    description: "Pressing up and down",
    default_size: Size::new(100.0, 150.0),
};

const TRAVEL: f64 = 50.0;

pub struct HydraulicPress;

impl ElementDescriptor for HydraulicPress {
    fn info(&self) -> &ElementInfo {
        &INFO
    }

    fn view_box(&self) -> ViewBox {
        ViewBox::new(200.0, 300.0)
    }

    fn fields(&self) -> &'static [FieldSpec] {
        FIELDS
    }

    fn timing(&self) -> Option<TimingRule> {
        Some(TimingRule::Period {
            field: PRESS_SPEED.key,
        })
    }

    fn draw(&self, _data: &ResolvedData, params: Option<&AnimationParams>, out: &mut Visual) {
        out.shapes([
            Shape::rect(10.0, 270.0, 180.0, 30.0).fill("#4D4D4D"),
            Shape::rect(20.0, 50.0, 20.0, 220.0).fill("#808080"),
            Shape::rect(160.0, 50.0, 20.0, 220.0).fill("#808080"),
            Shape::rect(10.0, 20.0, 180.0, 30.0).fill("#4D4D4D"),
            Shape::rect(70.0, 50.0, 60.0, 100.0).fill("#FFD700"),
        ]);
        // Hazard stripes on the cylinder.
        out.shapes((0..5u8).map(|i| {
            Shape::rect(70.0, 55.0 + 20.0 * f64::from(i), 60.0, 10.0).fill("#000")
        }));
        out.group(
            "piston",
            [
                Shape::rect(80.0, 150.0, 40.0, 100.0).fill("#555555"),
                Shape::rect(70.0, 250.0, 60.0, 20.0).fill("#A9A9A9"),
            ],
        );
        out.shape(Shape::rect(60.0, 260.0, 80.0, 10.0).fill("#B22222"));

        if let Some(params) = params {
            out.track(
                Track::new("piston", Property::TranslateY, params.duration)
                    .pulse(0.0, TRAVEL)
                    .ease_in_out()
                    .origin(100.0, 270.0),
            );
        }
    }
}
