use crate::data::ResolvedData;
use crate::descriptor::{ElementDescriptor, ElementInfo, Size};
use crate::schema::FieldSpec;
use crate::timing::{AnimationParams, TimingRule};
use crate::visual::{Property, Shape, Track, ViewBox, Visual};

pub const SPEED: FieldSpec = FieldSpec::rate("speed", "Printing Speed", 0.5);

const FIELDS: &[FieldSpec] = &[SPEED];

static INFO: ElementInfo = ElementInfo {
    id: "threeDPrinter",
    name: "3D Printer",
    description: "Animated 3D printer with adjustable printing speed",
    default_size: Size::new(200.0, 200.0),
};

const BASE: f64 = 10.0;
const SIDE: f64 = 396.007;
/// Head lift per pass, view-box units.
const LIFT: f64 = -80.0;

pub struct ThreeDPrinter;

impl ElementDescriptor for ThreeDPrinter {
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
            field: SPEED.key,
            base: BASE,
        })
    }

    fn draw(&self, _data: &ResolvedData, params: Option<&AnimationParams>, out: &mut Visual) {
        // Spool holders and filament feed.
        out.shapes([
            Shape::rect(258.454, 67.511, 80.667, 33.333).fill("#638591"),
            Shape::rect(339.121, 67.511, 22.126, 33.333).fill("#99B5C4"),
            Shape::rect(15.004, 67.512, 167.99, 221.99).fill("#4D4D4D"),
            Shape::path("M247.454,128.242h-7v-7.296c0-8.659-7.045-15.704-15.704-15.704h-35.592c-12.52,0-22.704-10.185-22.704-22.704V67.511h7v15.027c0,8.659,7.045,15.704,15.704,15.704h35.592c12.52,0,22.704,10.185,22.704,22.704V128.242z").fill("#EF7954"),
            Shape::path("M264.454,128.242h-7v-21.296c0-8.659-7.045-15.704-15.704-15.704h-2.176c-12.52,0-22.704-10.185-22.704-22.704V53.511h7v15.027c0,8.659,7.045,15.704,15.704,15.704h2.176c12.52,0,22.704,10.185,22.704,22.704V128.242z").fill("#F9ED82"),
            Shape::rect(321.913, 100.844, 13.333, 59.333).fill("#1a7edb"),
            Shape::rect(275.662, 100.844, 46.251, 59.333).fill("#1a7edb"),
            Shape::path("M298.787,148.908h-195c-3.13,0-5.667-2.537-5.667-5.667v0c0-3.13,2.537-5.667,5.667-5.667h195c3.13,0,5.667,2.537,5.667,5.667v0C304.454,146.371,301.917,148.908,298.787,148.908z").fill("#CCCCCC"),
        ]);

        // Table and legs.
        out.shapes([
            Shape::rect(0.0, 304.498, 395.98, 23.143).fill("#1a7edb"),
            Shape::rect(197.99, 304.498, 197.99, 23.143).fill("#0c3264"),
            Shape::polygon(&[[55.497, 327.642], [0.0, 327.642], [11.587, 368.995], [43.91, 368.995]]).fill("#1a7edb"),
            Shape::polygon(&[[223.86, 327.642], [168.362, 327.642], [179.95, 368.995], [212.272, 368.995]]).fill("#1a7edb"),
            Shape::polygon(&[[396.007, 327.642], [340.51, 327.642], [352.097, 368.995], [384.42, 368.995]]).fill("#1a7edb"),
            Shape::rect(52.657, 265.575, 290.667, 23.923).fill("#E6E6E6"),
            Shape::rect(52.657, 265.575, 136.797, 23.923).fill("#B3B3B3"),
            Shape::polygon(&[[197.99, 327.642], [197.99, 368.995], [212.272, 368.995], [223.886, 327.642]]).fill("#0c3264"),
            Shape::polygon(&[[29.601, 327.642], [29.601, 368.995], [43.883, 368.995], [55.497, 327.642]]).fill("#1a7edb"),
            Shape::polygon(&[[370.111, 327.642], [370.111, 368.995], [384.393, 368.995], [396.007, 327.642]]).fill("#0c3264"),
            Shape::rect(58.662, 67.511, 80.667, 33.333).fill("#638591"),
            Shape::rect(122.121, 100.844, 13.333, 59.333).fill("#1a7edb"),
            Shape::rect(75.87, 100.844, 46.251, 59.333).fill("#1a7edb"),
            Shape::rect(139.328, 67.511, 22.126, 33.333).fill("#99B5C4"),
        ]);

        out.group(
            "head",
            [
                Shape::rect(245.454, 128.242, 40.667, 36.667).fill("#0c3264"),
                Shape::rect(228.787, 128.242, 20.333, 36.667).fill("#1a7edb"),
                Shape::path("M237.454,148.908h-12.333c-3.13,0-5.667-2.537-5.667-5.667v0c0-3.13,2.537-5.667,5.667-5.667h12.333c3.13,0,5.667,2.537,5.667,5.667v0C243.121,146.371,240.584,148.908,237.454,148.908z").fill("#CCCCCC"),
                Shape::rect(239.954, 164.908, 35.5, 28.833).fill("#99B5C4"),
                Shape::rect(239.954, 164.908, 15.0, 28.833).fill("#638591"),
                Shape::rect(251.704, 193.742, 12.0, 10.0).fill("#99B5C4"),
            ],
        );

        // Part on the bed, then the enclosure drawn over everything.
        out.shapes([
            Shape::polygon(&[[305.994, 265.572], [89.994, 265.572], [115.954, 229.242], [280.024, 229.242]]).fill("#EF7954"),
            Shape::polygon(&[[197.994, 229.242], [197.994, 265.572], [89.994, 265.572], [115.954, 229.242]]).fill("#D3674A"),
            Shape::path("M241.379,232.742h-43.385v-7h43.385c6.75,0,12.242-5.492,12.242-12.242v-9.758h7v9.758C260.621,224.11,251.989,232.742,241.379,232.742z").fill("#EF7954"),
            Shape::path("M197.99,27.012v277.486h197.99V27.012H197.99z M380.98,289.498H212.99V67.511h167.99V289.498z").fill("#0c3264"),
            Shape::path("M0,27.012v277.486h197.99V27.012H0z M182.99,289.498H15V67.511h167.99V289.498z").fill("#1a7edb"),
            Shape::polygon(&[[15.004, 67.512], [15.004, 170.922], [118.414, 67.512]]).fill("#F2F2F2").opacity(0.49),
            Shape::polygon(&[[93.124, 289.502], [182.994, 289.502], [182.994, 199.632]]).fill("#F2F2F2").opacity(0.49),
            Shape::polygon(&[[15.004, 274.622], [15.004, 289.502], [46.274, 289.502], [182.994, 152.782], [182.994, 106.632]]).fill("#F2F2F2").opacity(0.49),
        ]);

        if let Some(params) = params {
            out.track(Track::new("head", Property::TranslateY, params.duration).between(0.0, LIFT));
        }
    }
}
