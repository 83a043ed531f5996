use plantviz_element_core::options::{Background, ColorBinding, Placement};
use plantviz_element_core::{ElementOptions, ElementRegistry, OneClickMode, ScalarBinding};
use serde_json::json;

#[test]
fn new_options_is_idempotent_for_every_element() {
    let reg = ElementRegistry::builtin().unwrap();
    for descriptor in reg.iter() {
        let once = descriptor.new_options(ElementOptions::default());
        let twice = descriptor.new_options(once.clone());
        assert_eq!(once, twice, "{}", descriptor.id());

        let size = descriptor.info().default_size;
        let placement = once.placement.as_ref().unwrap();
        assert_eq!(placement.width, Some(size.width));
        assert_eq!(placement.height, Some(size.height));
        assert_eq!(once.one_click_mode, Some(OneClickMode::Off));
        for spec in descriptor.fields() {
            assert_eq!(
                once.binding(spec.key),
                Ok(Some(&ScalarBinding::fixed(spec.default)))
            );
        }
    }
}

#[test]
fn operator_edits_survive_defaulting() {
    let reg = ElementRegistry::builtin().unwrap();
    let molding = reg.lookup("injectionMolding").unwrap();
    let edited: ElementOptions = serde_json::from_value(json!({
        "type": "injectionMolding",
        "name": "IM-3",
        "config": { "temperature": { "fixed": 310 } },
        "background": { "color": { "fixed": "#102030" } },
        "placement": { "width": 600, "height": 400, "rotation": 90 },
        "oneClickMode": "link",
        "links": [{ "title": "IM-3", "url": "/d/im3" }],
        "connections": [{ "target": "parent" }]
    }))
    .unwrap();

    let merged = molding.new_options(edited.clone());
    assert_eq!(merged.name.as_deref(), Some("IM-3"));
    assert_eq!(merged.binding("temperature"), Ok(Some(&ScalarBinding::fixed(310.0))));
    assert_eq!(merged.binding("cycleTime"), Ok(Some(&ScalarBinding::fixed(10.0))));
    assert_eq!(
        merged.background,
        Some(Background {
            color: Some(ColorBinding::fixed("#102030")),
            ..Background::default()
        })
    );
    assert_eq!(
        merged.placement,
        Some(Placement {
            width: Some(600.0),
            height: Some(400.0),
            rotation: Some(90.0),
            ..Placement::default()
        })
    );
    assert_eq!(merged.one_click_mode, Some(OneClickMode::Link));
    assert_eq!(merged.links.len(), 1);
    assert_eq!(merged.extra["connections"], json!([{ "target": "parent" }]));
}
