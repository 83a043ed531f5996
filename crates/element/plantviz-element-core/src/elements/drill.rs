use crate::data::ResolvedData;
use crate::descriptor::{ElementDescriptor, ElementInfo, Size};
use crate::schema::FieldSpec;
use crate::timing::{AnimationParams, TimingRule};
use crate::visual::{Property, Shape, Track, ViewBox, Visual};

pub const ANIMATION_SPEED: FieldSpec =
    FieldSpec::rate("animationSpeed", "Animation Speed", 1.0).number_input(0.1, 5.0, 0.1);

const FIELDS: &[FieldSpec] = &[ANIMATION_SPEED];

static INFO: ElementInfo = ElementInfo {
    id: "drillMachine",
    name: "Drill Machine",
    description: "Animated drill machine",
    default_size: Size::new(200.0, 200.0),
};

/// Seconds per stroke at unit speed.
const BASE: f64 = 2.0;
const SIDE: f64 = 446.88;
const STROKE: f64 = -20.0;

pub struct DrillMachine;

impl ElementDescriptor for DrillMachine {
    fn info(&self) -> &ElementInfo {
        &INFO
    }

    fn view_box(&self) -> ViewBox {
        ViewBox::new(SIDE, SIDE)
    }

    fn fields(&self) -> &'static [FieldSpec] {
        FIELDS
    }

    fn timing(&self) -> Option<TimingRule> {
        Some(TimingRule::InverseRate {
            field: ANIMATION_SPEED.key,
            base: BASE,
        })
    }

    fn draw(&self, _data: &ResolvedData, params: Option<&AnimationParams>, out: &mut Visual) {
        out.shapes([
            Shape::polygon(&[[374.248, 157.145], [374.248, 8.652], [202.633, 8.652], [202.633, 157.145], [305.875, 157.145]]).fill("#4c3c10"),
            Shape::rect(134.26, 157.145, 68.373, 239.082).fill("#738B93"),
            Shape::rect(219.325, 8.652, 196.92, 127.494).fill("#2e43ad"),
        ]);

        out.group(
            "bit",
            [
                Shape::rect(361.172, 219.004, 18.234, 88.253).fill("#2e43ad"),
                Shape::polygon(&[[384.876, 228.317], [357.16, 220.098], [357.16, 172.568], [384.876, 172.568]]).fill("#772f09"),
                Shape::polygon(&[[384.876, 250.958], [357.16, 242.739], [357.16, 226.497], [384.876, 234.716]]).fill("#772f09"),
                Shape::polygon(&[[384.876, 273.599], [357.16, 265.379], [357.16, 249.137], [384.876, 257.356]]).fill("#772f09"),
                Shape::polygon(&[[384.876, 296.239], [357.16, 288.02], [357.16, 271.778], [384.876, 279.997]]).fill("#772f09"),
                Shape::polygon(&[[384.876, 318.88], [371.018, 331.083], [357.16, 318.88], [357.16, 294.419], [384.876, 302.638]]).fill("#772f09"),
            ],
        );

        // Spindle head.
        out.shapes([
            Shape::rect(346.775, 136.146, 52.343, 50.544).fill("#772f09"),
            Shape::rect(303.832, 72.399, 138.23, 63.747).fill("#772f09"),
            Shape::polygon(&[[416.246, 8.652], [278.016, 8.652], [303.832, 72.399], [442.062, 72.399]]).fill("#707ac7"),
            Shape::rect(346.775, 136.146, 16.736, 50.544).fill("#2e43ad"),
        ]);

        // Column, table and handwheel.
        out.shapes([
            Shape::path("M134.26,396.227V157.145h68.373V8.652h-83.279C63.162,8.652,17.61,54.205,17.61,110.396v327.828 h259.143v-41.998H134.26z").fill("#697bc3"),
            Shape::rect(134.26, 157.145, 171.615, 239.082).fill("#2e43ad"),
            Shape::rect(276.753, 396.227, 170.124, 41.998).fill("#4c3c10"),
            Shape::circle(79.744, 213.61, 31.112).fill("#214e04"),
            Shape::path("M155.783,289.649L155.783,289.649c-4.941,4.941-12.951,4.941-17.891,0L3.705,155.462 c-4.941-4.941-4.941-12.951,0-17.891l0,0c4.941-4.941,12.951-4.941,17.891,0l134.186,134.186 C160.724,276.698,160.724,284.708,155.783,289.649z").fill("#214e04"),
            Shape::path("M3.705,289.649L3.705,289.649c-4.941-4.941-4.941-12.951,0-17.891l134.186-134.186 c4.941-4.941,12.951-4.941,17.891,0l0,0c4.941,4.941,4.941,12.951,0,17.891L21.597,289.649 C16.656,294.589,8.646,294.589,3.705,289.649z").fill("#214e04"),
            Shape::rect(197.835, 251.64, 44.465, 144.587).fill("#772f09"),
            Shape::rect(205.217, 266.639, 29.7, 20.573).fill("#4c3c10"),
            Shape::rect(205.217, 300.306, 29.7, 20.573).fill("#4c3c10"),
            Shape::rect(205.217, 333.973, 29.7, 20.573).fill("#4c3c10"),
            Shape::rect(236.035, 47.879, 30.0, 64.0).fill("#214e04"),
            Shape::rect(243.035, 54.879, 16.0, 50.0).fill("#D3674A"),
            Shape::rect(266.035, 47.879, 7.333, 64.0).fill("#697bc3"),
            Shape::rect(230.599, 370.134, 187.491, 26.092).fill("#214e04"),
            Shape::rect(331.094, 370.134, 86.996, 26.092).fill("#697bc3"),
        ]);

        if let Some(params) = params {
            out.track(
                Track::new("bit", Property::TranslateY, params.duration)
                    .pulse(0.0, STROKE)
                    .ease_in_out()
                    .origin(371.018, 331.083),
            );
        }
    }
}
