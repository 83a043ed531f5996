use crate::data::ResolvedData;
use crate::descriptor::{ElementDescriptor, ElementInfo, Size};
use crate::timing::AnimationParams;
use crate::visual::{Shape, ViewBox, Visual};

static INFO: ElementInfo = ElementInfo {
    id: "controlPanel",
    name: "Control Panel",
    description: "A static control panel display",
    default_size: Size::new(300.0, 300.0),
};

const SIDE: f64 = 633.363;
const RED: &str = "#dc4109";
const GREEN: &str = "#17a642";

/// Static panel: no fields, no animation.
pub struct ControlPanel;

impl ElementDescriptor for ControlPanel {
    fn info(&self) -> &ElementInfo {
        &INFO
    }

    fn view_box(&self) -> ViewBox {
        ViewBox::new(SIDE, SIDE)
    }

    fn draw(&self, _data: &ResolvedData, _params: Option<&AnimationParams>, out: &mut Visual) {
        out.shapes([
            Shape::path("M105.737,633.363h370.089V0H290.562 C188.486,0,105.737,82.749,105.737,184.825V633.363z").fill("#7F7F7F"),
            Shape::rect(306.885, 0.0, 265.632, 330.105).fill("#CACACA"),
            Shape::rect(344.3, 419.311, 265.632, 214.053).fill("#CACACA"),
            Shape::polygon(&[[609.931, 419.311], [344.3, 419.311], [306.885, 330.105], [572.516, 330.105]]).fill("#979797"),
            Shape::polygon(&[[578.896, 398.685], [358.024, 398.685], [341.518, 359.328], [337.907, 350.732], [558.797, 350.732]]).fill("#1eb1e6"),
            Shape::polygon(&[[570.127, 398.685], [358.024, 398.685], [341.518, 359.328], [553.638, 359.328]]).fill("#C2E2F2"),
        ]);

        // Lever bank.
        out.shapes([
            Shape::rect(506.95, 215.472, 38.056, 87.822).fill(GREEN),
            Shape::rect(497.192, 215.472, 9.758, 87.822).fill("#2a5a36"),
            Shape::rect(518.66, 227.182, 14.637, 64.403).fill("#2a5a36"),
            Shape::polygon(&[[582.321, 304.036], [574.046, 312.311], [518.66, 256.924], [518.66, 240.375]]).fill("#7F7F7F"),
            Shape::circle(578.184, 308.173, 13.661).fill(RED),
        ]);

        // Cable runs.
        out.shapes([
            Shape::path("M178.177,633.363H93.354v-17.194h84.823c9.797,0,17.767-7.97,17.767-17.766V486.449 c0-19.278,15.684-34.961,34.96-34.961v17.194c-9.797,0-17.766,7.971-17.766,17.767v111.954 C213.138,617.68,197.454,633.363,178.177,633.363z").fill("#1ac6ff"),
            Shape::path("M126.022,633.363H41.199v-17.194h84.823c9.797,0,17.767-7.97,17.767-17.766V486.449 c0-19.278,15.684-34.961,34.961-34.961v17.194c-9.797,0-17.767,7.971-17.767,17.767v111.954 C160.983,617.68,145.299,633.363,126.022,633.363z").fill("#f7e308"),
            Shape::path("M230.331,633.363H32.029c-4.748,0-8.597-3.849-8.597-8.597l0,0c0-4.748,3.849-8.597,8.597-8.597 h198.303c9.812,0,17.766-7.954,17.766-17.766V486.449c0-19.278,15.684-34.961,34.961-34.961v17.194 c-9.797,0-17.767,7.971-17.767,17.767v111.954C265.292,617.711,249.639,633.363,230.331,633.363z").fill(RED),
        ]);

        // Two rows of knobs, alternating colours.
        for (row, y) in [67.575, 125.588].into_iter().enumerate() {
            for (col, x) in [390.992, 453.018, 515.044].into_iter().enumerate() {
                let color = if (row + col) % 2 == 0 { RED } else { GREEN };
                out.shape(Shape::circle(x, y, 18.899).fill(color));
            }
        }

        out.shape(Shape::path("M521.48,460.902c-22.819-22.819-59.815-22.819-82.633,0c-22.819,22.819-22.819,59.815,0,82.633 c22.819,22.819,59.815,22.819,82.633,0C544.299,520.716,544.299,483.72,521.48,460.902z M510.723,525.994l-17.912-17.912 c1.721-3.713,1.72-8.015,0-11.728l17.912-17.912C521.599,492.387,521.599,512.05,510.723,525.994z M503.939,471.659l-17.912,17.912 c-3.713-1.72-8.015-1.721-11.728,0l-17.912-17.912C470.332,460.783,489.995,460.783,503.939,471.659z M449.604,478.443 l17.912,17.912c-1.721,3.713-1.72,8.015,0,11.728l-17.912,17.912C438.729,512.05,438.729,492.387,449.604,478.443z M456.388,532.778l17.912-17.912c3.713,1.72,8.015,1.721,11.728,0l17.912,17.912C489.995,543.653,470.332,543.653,456.388,532.778z").fill("#556A71"));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::binding::EmptyContext;
    use crate::options::ElementOptions;

    #[test]
    fn static_and_fieldless() {
        let opts = ControlPanel.new_options(ElementOptions::default());
        assert!(opts.config.is_empty());
        let data = ControlPanel.prepare_data(&EmptyContext, &opts).unwrap();
        assert!(data.is_empty());
        assert!(ControlPanel.animation(&data).is_none());
        let v = ControlPanel.render(&data);
        assert!(v.tracks.is_empty());
        assert!(!v.shapes.is_empty());
    }
}
