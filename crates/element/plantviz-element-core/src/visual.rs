//! Declarative visual description returned by `render`.
//!
//! Coordinates are in view-box units. Shapes are painted in order; tracks
//! animate every shape that shares their layer name and loop forever.

use std::borrow::Cow;

use serde::{Deserialize, Serialize};

pub type Text = Cow<'static, str>;

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ViewBox {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl ViewBox {
    pub const fn new(width: f64, height: f64) -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            width,
            height,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "shape", rename_all = "camelCase")]
pub enum Geometry {
    Rect {
        x: f64,
        y: f64,
        width: f64,
        height: f64,
        #[serde(default, skip_serializing_if = "is_zero")]
        rx: f64,
    },
    Circle {
        cx: f64,
        cy: f64,
        r: f64,
    },
    Ellipse {
        cx: f64,
        cy: f64,
        rx: f64,
        ry: f64,
    },
    Line {
        x1: f64,
        y1: f64,
        x2: f64,
        y2: f64,
    },
    Path {
        d: Text,
    },
    Polygon {
        points: Vec<[f64; 2]>,
    },
}

fn is_zero(v: &f64) -> bool {
    *v == 0.0
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Shape {
    #[serde(flatten)]
    pub geometry: Geometry,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub layer: Option<Text>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fill: Option<Text>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stroke: Option<Text>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stroke_width: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub opacity: Option<f64>,
}

impl Shape {
    fn of(geometry: Geometry) -> Self {
        Self {
            geometry,
            layer: None,
            fill: None,
            stroke: None,
            stroke_width: None,
            opacity: None,
        }
    }

    pub fn rect(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self::of(Geometry::Rect {
            x,
            y,
            width,
            height,
            rx: 0.0,
        })
    }

    pub fn circle(cx: f64, cy: f64, r: f64) -> Self {
        Self::of(Geometry::Circle { cx, cy, r })
    }

    pub fn ellipse(cx: f64, cy: f64, rx: f64, ry: f64) -> Self {
        Self::of(Geometry::Ellipse { cx, cy, rx, ry })
    }

    pub fn line(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Self::of(Geometry::Line { x1, y1, x2, y2 })
    }

    pub fn path(d: impl Into<Text>) -> Self {
        Self::of(Geometry::Path { d: d.into() })
    }

    pub fn polygon(points: &[[f64; 2]]) -> Self {
        Self::of(Geometry::Polygon {
            points: points.to_vec(),
        })
    }

    pub fn rounded(mut self, radius: f64) -> Self {
        if let Geometry::Rect { rx, .. } = &mut self.geometry {
            *rx = radius;
        }
        self
    }

    pub fn fill(mut self, color: impl Into<Text>) -> Self {
        self.fill = Some(color.into());
        self
    }

    pub fn stroke(mut self, color: impl Into<Text>, width: f64) -> Self {
        self.stroke = Some(color.into());
        self.stroke_width = Some(width);
        self
    }

    pub fn opacity(mut self, opacity: f64) -> Self {
        self.opacity = Some(opacity);
        self
    }

    pub fn layer(mut self, layer: impl Into<Text>) -> Self {
        self.layer = Some(layer.into());
        self
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TextAnchor {
    #[default]
    Start,
    Middle,
    End,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Label {
    pub x: f64,
    pub y: f64,
    pub text: String,
    pub size: f64,
    pub fill: Text,
    #[serde(default)]
    pub anchor: TextAnchor,
}

impl Label {
    pub fn new(x: f64, y: f64, text: impl Into<String>, size: f64, fill: impl Into<Text>) -> Self {
        Self {
            x,
            y,
            text: text.into(),
            size,
            fill: fill.into(),
            anchor: TextAnchor::Start,
        }
    }

    pub fn anchored(mut self, anchor: TextAnchor) -> Self {
        self.anchor = anchor;
        self
    }
}

/// Animated property of a layer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Property {
    TranslateX,
    TranslateY,
    Rotate,
    ScaleY,
    Opacity,
    StrokeOpacity,
    Fill,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum KeyValue {
    Number(f64),
    Color(Text),
}

impl From<f64> for KeyValue {
    fn from(v: f64) -> Self {
        KeyValue::Number(v)
    }
}

impl From<&'static str> for KeyValue {
    fn from(v: &'static str) -> Self {
        KeyValue::Color(Cow::Borrowed(v))
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Keyframe {
    /// Position in the loop, `0.0..=1.0`.
    pub at: f64,
    pub value: KeyValue,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Easing {
    #[default]
    Linear,
    EaseInOut,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Direction {
    #[default]
    Normal,
    Alternate,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Track {
    pub layer: Text,
    pub property: Property,
    pub keyframes: Vec<Keyframe>,
    /// Seconds per iteration.
    pub duration: f64,
    #[serde(default)]
    pub delay: f64,
    #[serde(default)]
    pub easing: Easing,
    #[serde(default)]
    pub direction: Direction,
    /// Transform origin in view-box units.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub origin: Option<[f64; 2]>,
}

impl Track {
    pub fn new(layer: impl Into<Text>, property: Property, duration: f64) -> Self {
        Self {
            layer: layer.into(),
            property,
            keyframes: Vec::new(),
            duration,
            delay: 0.0,
            easing: Easing::Linear,
            direction: Direction::Normal,
            origin: None,
        }
    }

    pub fn key(mut self, at: f64, value: impl Into<KeyValue>) -> Self {
        self.keyframes.push(Keyframe {
            at,
            value: value.into(),
        });
        self
    }

    /// Two-stop track.
    pub fn between(self, from: impl Into<KeyValue>, to: impl Into<KeyValue>) -> Self {
        self.key(0.0, from).key(1.0, to)
    }

    /// Out and back: `rest` at both ends, `peak` half way.
    pub fn pulse(self, rest: f64, peak: f64) -> Self {
        self.key(0.0, rest).key(0.5, peak).key(1.0, rest)
    }

    pub fn delay(mut self, seconds: f64) -> Self {
        self.delay = seconds;
        self
    }

    pub fn ease_in_out(mut self) -> Self {
        self.easing = Easing::EaseInOut;
        self
    }

    pub fn alternate(mut self) -> Self {
        self.direction = Direction::Alternate;
        self
    }

    pub fn origin(mut self, x: f64, y: f64) -> Self {
        self.origin = Some([x, y]);
        self
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Visual {
    pub element: String,
    pub view_box: ViewBox,
    pub shapes: Vec<Shape>,
    #[serde(default)]
    pub labels: Vec<Label>,
    #[serde(default)]
    pub tracks: Vec<Track>,
}

impl Visual {
    pub fn new(element: impl Into<String>, view_box: ViewBox) -> Self {
        Self {
            element: element.into(),
            view_box,
            shapes: Vec::new(),
            labels: Vec::new(),
            tracks: Vec::new(),
        }
    }

    pub fn shape(&mut self, shape: Shape) -> &mut Self {
        self.shapes.push(shape);
        self
    }

    pub fn shapes(&mut self, shapes: impl IntoIterator<Item = Shape>) -> &mut Self {
        self.shapes.extend(shapes);
        self
    }

    /// Put every shape yielded by `shapes` on `layer`.
    pub fn group(
        &mut self,
        layer: impl Into<Text>,
        shapes: impl IntoIterator<Item = Shape>,
    ) -> &mut Self {
        let layer = layer.into();
        self.shapes
            .extend(shapes.into_iter().map(|s| s.layer(layer.clone())));
        self
    }

    pub fn label(&mut self, label: Label) -> &mut Self {
        self.labels.push(label);
        self
    }

    pub fn track(&mut self, track: Track) -> &mut Self {
        self.tracks.push(track);
        self
    }

    pub fn has_layer(&self, layer: &str) -> bool {
        self.shapes
            .iter()
            .any(|s| s.layer.as_deref() == Some(layer))
    }

    /// Layer names referenced by tracks but carried by no shape.
    pub fn dangling_tracks(&self) -> Vec<&str> {
        self.tracks
            .iter()
            .map(|t| &*t.layer)
            .filter(|layer| !self.has_layer(layer))
            .collect()
    }
}
