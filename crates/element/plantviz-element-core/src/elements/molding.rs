use crate::data::ResolvedData;
use crate::descriptor::{ElementDescriptor, ElementInfo, Size};
use crate::schema::FieldSpec;
use crate::timing::{gauge_needle, AnimationParams, TimingRule};
use crate::visual::{Label, Property, Shape, TextAnchor, Track, ViewBox, Visual};

pub const CYCLE_TIME: FieldSpec = FieldSpec::period("cycleTime", "Cycle Time (s)", 10.0);
pub const TEMPERATURE: FieldSpec = FieldSpec::measure("temperature", "Temperature (°C)", 200.0);
pub const PRESSURE: FieldSpec = FieldSpec::measure("pressure", "Pressure (Bar)", 50.0);

const FIELDS: &[FieldSpec] = &[CYCLE_TIME, TEMPERATURE, PRESSURE];

static INFO: ElementInfo = ElementInfo {
    id: "injectionMolding",
    name: "Injection Molding Machine",
    description: "Animated injection molding machine with real-time parameters",
    default_size: Size::new(300.0, 200.0),
};

const PANEL: &str = "#065F46";
const TRIM: &str = "#047857";
const BODY: &str = "#1E3A8A";
const ACCENT: &str = "#FCD34D";
const INK: &str = "#F0FDF4";

/// A half-dial gauge drawn at a fixed position.
struct Gauge {
    at: [f64; 2],
    full_scale: f64,
    needle: &'static str,
    unit: &'static str,
}

const NEEDLE_LENGTH: f64 = 12.0;

const TEMPERATURE_GAUGE: Gauge = Gauge {
    at: [220.0, 20.0],
    full_scale: 400.0,
    needle: "#EF4444",
    unit: "°C",
};

const PRESSURE_GAUGE: Gauge = Gauge {
    at: [260.0, 20.0],
    full_scale: 200.0,
    needle: "#3B82F6",
    unit: " Bar",
};

impl Gauge {
    fn draw(&self, reading: f64, out: &mut Visual) {
        let [x, y] = self.at;
        let (dx, dy) = gauge_needle(reading, self.full_scale, NEEDLE_LENGTH);
        out.shape(Shape::circle(x, y, 15.0).fill(PANEL).stroke(TRIM, 2.0));
        out.shape(Shape::line(x, y, x + dx, y + dy).stroke(self.needle, 2.0));
        out.label(
            Label::new(x, y + 20.0, format!("{reading}{}", self.unit), 10.0, INK)
                .anchored(TextAnchor::Middle),
        );
    }
}

pub struct InjectionMolding;

impl ElementDescriptor for InjectionMolding {
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
        Some(TimingRule::Period {
            field: CYCLE_TIME.key,
        })
    }

    fn draw(&self, data: &ResolvedData, params: Option<&AnimationParams>, out: &mut Visual) {
        out.shape(Shape::rect(10.0, 150.0, 280.0, 50.0).fill(BODY));
        out.group(
            "injection-unit",
            [
                Shape::rect(10.0, 70.0, 120.0, 80.0).fill(BODY),
                Shape::circle(70.0, 110.0, 30.0).fill(PANEL).stroke(TRIM, 2.0),
                Shape::line(40.0, 110.0, 100.0, 110.0).stroke(TRIM, 4.0),
            ],
        );
        out.group(
            "mold-unit",
            [
                Shape::rect(130.0, 60.0, 160.0, 90.0).fill(BODY),
                Shape::rect(140.0, 70.0, 140.0, 70.0).fill(PANEL),
            ],
        );
        out.group(
            "mold",
            [Shape::rect(150.0, 80.0, 120.0, 50.0).fill(TRIM)],
        );
        out.group(
            "nozzle",
            [Shape::line(130.0, 110.0, 150.0, 110.0).stroke("#93C5FD", 6.0)],
        );

        TEMPERATURE_GAUGE.draw(data.value_or(&TEMPERATURE), out);
        PRESSURE_GAUGE.draw(data.value_or(&PRESSURE), out);
        out.label(Label::new(
            10.0,
            20.0,
            format!("Cycle Time: {}s", data.value_or(&CYCLE_TIME)),
            12.0,
            INK,
        ));

        out.shapes([
            Shape::line(10.0, 150.0, 290.0, 150.0).stroke(TRIM, 2.0),
            Shape::circle(25.0, 175.0, 8.0).fill(ACCENT),
            Shape::circle(275.0, 175.0, 8.0).fill(ACCENT),
            Shape::rect(45.0, 85.0, 50.0, 10.0).fill(ACCENT).rounded(2.0),
            Shape::rect(240.0, 75.0, 40.0, 20.0).fill(ACCENT).rounded(2.0),
        ]);

        let Some(params) = params else {
            return;
        };
        let d = params.duration;
        out.track(
            Track::new("injection-unit", Property::TranslateX, d)
                .pulse(0.0, -20.0)
                .ease_in_out(),
        );
        for layer in ["mold-unit", "mold"] {
            out.track(
                Track::new(layer, Property::ScaleY, d)
                    .key(0.0, 1.0)
                    .key(0.2, 1.0)
                    .key(0.5, 0.98)
                    .key(0.8, 1.0)
                    .key(1.0, 1.0)
                    .ease_in_out(),
            );
        }
        out.track(Track::new("nozzle", Property::StrokeOpacity, d).pulse(0.0, 1.0));
    }
}
