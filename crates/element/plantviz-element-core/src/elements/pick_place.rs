use crate::data::ResolvedData;
use crate::descriptor::{ElementDescriptor, ElementInfo, Size};
use crate::schema::FieldSpec;
use crate::timing::{AnimationParams, TimingRule};
use crate::visual::{Label, Property, Shape, Track, ViewBox, Visual};

pub const SPEED: FieldSpec = FieldSpec::rate("speed", "Speed", 1.0);
pub const COMPONENT_COUNT: FieldSpec =
    FieldSpec::count("componentCount", "Component Count", 0.0).describe("Components placed so far");

const FIELDS: &[FieldSpec] = &[SPEED, COMPONENT_COUNT];

static INFO: ElementInfo = ElementInfo {
    id: "pickAndPlace",
    name: "Pick and Place Machine",
    description: "Animated pick and place machine for electronics assembly",
    default_size: Size::new(300.0, 200.0),
};

/// Seconds per pick at unit speed.
const BASE: f64 = 5.0;
const METAL: &str = "#C8C8C8";
const JAW: &str = "#666";
const DIP: f64 = 20.0;
const GRIP: f64 = 0.8;

pub struct PickAndPlace;

impl ElementDescriptor for PickAndPlace {
    fn info(&self) -> &ElementInfo {
        &INFO
    }

    fn view_box(&self) -> ViewBox {
        ViewBox::new(300.0, 200.0)
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

    fn draw(&self, data: &ResolvedData, params: Option<&AnimationParams>, out: &mut Visual) {
        out.shapes([
            Shape::rect(10.0, 180.0, 280.0, 20.0).fill(METAL),
            Shape::rect(20.0, 20.0, 20.0, 160.0).fill(METAL),
            Shape::rect(20.0, 20.0, 260.0, 15.0).fill(METAL),
            Shape::rect(140.0, 35.0, 10.0, 80.0).fill(METAL),
        ]);
        out.group(
            "gripper",
            [Shape::path("M135 115 L140 125 L155 125 L160 115 Z").fill(JAW)],
        );
        out.group("jaw-left", [Shape::rect(138.0, 125.0, 4.0, 10.0).fill(JAW)]);
        out.group("jaw-right", [Shape::rect(153.0, 125.0, 4.0, 10.0).fill(JAW)]);
        out.shapes([
            Shape::rect(140.0, 140.0, 20.0, 10.0).fill("#ddd").stroke("#999", 1.0),
            Shape::rect(10.0, 150.0, 50.0, 30.0).fill("#ddd").stroke("#999", 1.0),
            Shape::rect(240.0, 150.0, 50.0, 30.0)
                .fill("#1a5f7a")
                .stroke("#0c2d3a", 1.0),
        ]);
        out.label(Label::new(
            245.0,
            145.0,
            format!("Components: {}", data.count_or(&COMPONENT_COUNT)),
            12.0,
            "white",
        ));

        let Some(params) = params else {
            return;
        };
        let d = params.duration;
        let jaw_cycle = params.scaled(0.5);
        for layer in ["gripper", "jaw-left", "jaw-right"] {
            out.track(
                Track::new(layer, Property::TranslateY, d)
                    .pulse(0.0, DIP)
                    .ease_in_out()
                    .origin(147.5, 125.0),
            );
        }
        out.track(
            Track::new("jaw-left", Property::ScaleY, jaw_cycle)
                .pulse(1.0, GRIP)
                .ease_in_out()
                .origin(142.0, 125.0),
        );
        out.track(
            Track::new("jaw-right", Property::ScaleY, jaw_cycle)
                .pulse(1.0, GRIP)
                .ease_in_out()
                .origin(153.0, 125.0),
        );
    }
}
