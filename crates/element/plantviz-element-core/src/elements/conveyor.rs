use crate::data::ResolvedData;
use crate::descriptor::{ElementDescriptor, ElementInfo, Size};
use crate::schema::FieldSpec;
use crate::timing::{AnimationParams, TimingRule};
use crate::visual::{Label, Property, Shape, Track, ViewBox, Visual};

pub const SPEED: FieldSpec =
    FieldSpec::rate("speed", "Speed (m/s)", 1.0).describe("Belt speed; larger is faster");
pub const BOX_COUNT: FieldSpec = FieldSpec::count("boxCount", "Number of Boxes", 3.0);

const FIELDS: &[FieldSpec] = &[SPEED, BOX_COUNT];

static INFO: ElementInfo = ElementInfo {
    id: "conveyorBeltNewUnique",
    name: "Conveyor Belt New Unique",
    description: "Animated conveyor belt with moving boxes (new unique version)",
    default_size: Size::new(400.0, 200.0),
};

/// Seconds per box pass at unit speed.
const BASE: f64 = 10.0;

const BOX_A: &str = "#FF6347";
const BOX_B: &str = "#FFD700";
/// Boxes ride this far below their authored origin.
const BOX_DROP: f64 = 75.0;

pub struct ConveyorBelt;

impl ElementDescriptor for ConveyorBelt {
    fn info(&self) -> &ElementInfo {
        &INFO
    }

    fn view_box(&self) -> ViewBox {
        ViewBox::new(400.0, 200.0)
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

    fn repeat_field(&self) -> Option<&'static str> {
        Some(BOX_COUNT.key)
    }

    fn draw(&self, data: &ResolvedData, params: Option<&AnimationParams>, out: &mut Visual) {
        out.shape(Shape::rect(20.0, 100.0, 360.0, 60.0).fill("#333"));
        out.group(
            "belt",
            [
                Shape::rect(30.0, 110.0, 340.0, 40.0)
                    .fill("#0099FF")
                    .stroke("#555", 1.0),
                Shape::rect(30.0, 125.0, 340.0, 10.0)
                    .fill("#66CCFF")
                    .opacity(0.5),
            ],
        );
        out.shapes([
            Shape::circle(30.0, 130.0, 20.0).fill("#555"),
            Shape::circle(370.0, 130.0, 20.0).fill("#555"),
        ]);

        let boxes = self.repeat_count(data);
        for i in 0..boxes {
            let color = if i % 2 == 0 { BOX_A } else { BOX_B };
            out.group(
                box_layer(i),
                [
                    Shape::rect(0.0, BOX_DROP, 40.0, 30.0).fill(color),
                    Shape::rect(0.0, BOX_DROP, 40.0, 30.0)
                        .fill("#A0522D")
                        .opacity(0.35),
                ],
            );
            out.group(
                base_layer(i),
                [Shape::rect(0.0, BOX_DROP + 30.0, 40.0, 10.0).fill("#5D2E0C")],
            );
        }

        out.shapes([
            Shape::rect(10.0, 160.0, 380.0, 10.0).fill("#444"),
            Shape::rect(20.0, 170.0, 10.0, 30.0).fill("#444"),
            Shape::rect(370.0, 170.0, 10.0, 30.0).fill("#444"),
        ]);

        out.label(Label::new(
            20.0,
            30.0,
            format!("Speed: {:.1} m/s", data.value_or(&SPEED)),
            14.0,
            "white",
        ));
        out.label(Label::new(20.0, 50.0, format!("Boxes: {boxes}"), 14.0, "white"));

        let Some(params) = params else {
            return;
        };
        let d = params.duration;
        out.track(Track::new("belt", Property::TranslateX, d).between(0.0, -20.0));
        for (i, offset) in (0..boxes).zip(params.phase_offsets.iter().copied()) {
            let body = box_layer(i);
            out.track(
                Track::new(body.clone(), Property::TranslateX, d)
                    .between(-50.0, 350.0)
                    .delay(offset),
            );
            out.track(
                Track::new(body, Property::Fill, params.scaled(0.5))
                    .between(BOX_A, BOX_B)
                    .delay(offset)
                    .alternate(),
            );
            out.track(
                Track::new(base_layer(i), Property::TranslateX, d)
                    .between(-50.0, 350.0)
                    .delay(offset),
            );
        }
    }
}

fn box_layer(i: u32) -> String {
    format!("box-{i}")
}

fn base_layer(i: u32) -> String {
    format!("box-{i}-base")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::descriptor::MAX_REPEAT;

    #[test]
    fn one_body_per_box_with_staggered_delays() {
        let data: ResolvedData = [("speed", 2.0), ("boxCount", 4.0)].into_iter().collect();
        let v = ConveyorBelt.render(&data);

        for i in 0..4 {
            assert!(v.has_layer(&box_layer(i)), "box {i}");
        }
        assert!(!v.has_layer("box-4"));

        let delays: Vec<f64> = v
            .tracks
            .iter()
            .filter(|t| t.property == Property::TranslateX && t.layer.ends_with(char::is_numeric))
            .filter(|t| t.layer.starts_with("box-"))
            .map(|t| t.delay)
            .collect();
        assert_eq!(delays, vec![0.0, 1.25, 2.5, 3.75]);
        assert!(v.dangling_tracks().is_empty());
        assert_eq!(v.labels[0].text, "Speed: 2.0 m/s");
        assert_eq!(v.labels[1].text, "Boxes: 4");
    }

    #[test]
    fn zero_boxes_leaves_only_the_belt_moving() {
        let data: ResolvedData = [("speed", 1.0), ("boxCount", 0.0)].into_iter().collect();
        let v = ConveyorBelt.render(&data);
        assert_eq!(v.tracks.len(), 1);
        assert_eq!(v.tracks[0].layer, "belt");
        assert_eq!(v.tracks[0].duration, BASE);
    }

    #[test]
    fn huge_box_count_is_capped() {
        let data: ResolvedData = [("speed", 1.0), ("boxCount", 1e9)].into_iter().collect();
        assert_eq!(ConveyorBelt.repeat_count(&data), MAX_REPEAT);
        let v = ConveyorBelt.render(&data);
        assert!(v.has_layer(&box_layer(MAX_REPEAT - 1)));
        assert!(!v.has_layer(&box_layer(MAX_REPEAT)));
        let params = ConveyorBelt.animation(&data).unwrap();
        assert_eq!(params.phase_offsets.len(), MAX_REPEAT as usize);
    }
}
