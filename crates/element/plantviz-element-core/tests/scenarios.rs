use plantviz_element_core::{
    from_fn, Blackboard, ElementError, ElementOptions, ElementRegistry, EmptyContext,
    ResolveError, ScalarBinding, TypedPath, MAX_REPEAT,
};
use serde_json::json;

fn path(s: &str) -> TypedPath {
    TypedPath::parse(s).expect("parse path")
}

fn registry() -> ElementRegistry {
    ElementRegistry::builtin().unwrap()
}

#[test]
fn unbound_speed_uses_documented_default() {
    let reg = registry();
    let mixer = reg.lookup("industrialMixer").unwrap();
    let options = ElementOptions::new("industrialMixer");

    let data = mixer.prepare_data(&EmptyContext, &options).unwrap();
    assert_eq!(data.get("speed"), Some(1.0));
    assert_eq!(mixer.animation(&data).unwrap().duration, 5.0);
}

#[test]
fn dynamic_speed_scales_duration() {
    let reg = registry();
    let mixer = reg.lookup("industrialMixer").unwrap();
    let options = ElementOptions::new("industrialMixer")
        .with_binding("speed", ScalarBinding::dynamic(path("line1/Mixer.rpm")));
    let ctx = from_fn(|p: &TypedPath| {
        assert_eq!(p.to_string(), "line1/Mixer.rpm");
        Ok(2.5)
    });

    let data = mixer.prepare_data(&ctx, &options).unwrap();
    assert_eq!(data.get("speed"), Some(2.5));
    assert_eq!(mixer.animation(&data).unwrap().duration, 2.0);
}

#[test]
fn dynamic_box_count_rounds_and_staggers() {
    let reg = registry();
    let conveyor = reg.lookup("conveyorBeltNewUnique").unwrap();
    let options = conveyor.new_options(
        ElementOptions::default()
            .with_binding("boxCount", ScalarBinding::dynamic(path("line1/Conveyor.boxes"))),
    );
    let mut bb = Blackboard::new();
    bb.set("line1/Conveyor.boxes", json!(4.6), 1, "query-A").unwrap();

    let data = conveyor.prepare_data(&bb, &options).unwrap();
    assert_eq!(data.get("boxCount"), Some(5.0));
    assert_eq!(data.get("speed"), Some(1.0));

    let params = conveyor.animation(&data).unwrap();
    assert_eq!(params.duration, 10.0);
    assert_eq!(params.phase_offsets, vec![0.0, 2.0, 4.0, 6.0, 8.0]);
    assert_eq!(params.stagger_interval(), 2.0);
}

#[test]
fn missing_dynamic_value_is_an_error_not_the_default() {
    let reg = registry();
    let conveyor = reg.lookup("conveyorBeltNewUnique").unwrap();
    let options = ElementOptions::new("conveyorBeltNewUnique")
        .with_binding("speed", ScalarBinding::dynamic(path("line1/Conveyor.speed")));

    let err = conveyor.prepare_data(&Blackboard::new(), &options).unwrap_err();
    match err {
        ElementError::Resolution {
            element,
            field,
            source: ResolveError::Missing { reference },
        } => {
            assert_eq!(element, "conveyorBeltNewUnique");
            assert_eq!(field, "speed");
            assert_eq!(reference, path("line1/Conveyor.speed"));
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn host_failures_propagate_with_context() {
    let reg = registry();
    let press = reg.lookup("hydraulicPress").unwrap();
    let options = ElementOptions::new("hydraulicPress")
        .with_binding("pressSpeed", ScalarBinding::dynamic(path("press/Ram.period")));
    let ctx = from_fn(|p: &TypedPath| {
        Err(ResolveError::Host {
            reference: p.clone(),
            reason: "query timed out".into(),
        })
    });

    let err = press.prepare_data(&ctx, &options).unwrap_err();
    let message = err.to_string();
    assert!(message.starts_with("hydraulicPress.pressSpeed"), "{message}");
    assert!(message.contains("query timed out"), "{message}");
}

#[test]
fn malformed_reference_is_an_error_not_the_default() {
    let reg = registry();
    let mixer = reg.lookup("industrialMixer").unwrap();

    for speed in [
        json!({ "field": "Mixer rpm" }),
        json!({ "fixed": 1, "field": "Mixer rpm" }),
    ] {
        let options: ElementOptions =
            serde_json::from_value(json!({ "config": { "speed": speed } })).unwrap();
        let err = mixer.prepare_data(&EmptyContext, &options).unwrap_err();
        match err {
            ElementError::Resolution {
                field,
                source: ResolveError::InvalidReference { reference, .. },
                ..
            } => {
                assert_eq!(field, "speed");
                assert_eq!(reference, "Mixer rpm");
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}

#[test]
fn unreadable_binding_is_an_error_not_the_default() {
    let reg = registry();
    let mixer = reg.lookup("industrialMixer").unwrap();
    let options: ElementOptions =
        serde_json::from_value(json!({ "config": { "speed": { "field": 5 } } })).unwrap();

    let err = mixer.prepare_data(&EmptyContext, &options).unwrap_err();
    assert!(
        matches!(&err, ElementError::UnreadableBinding { field, .. } if field == "speed"),
        "{err}"
    );

    // Keys the element does not declare are left to the host.
    let foreign: ElementOptions =
        serde_json::from_value(json!({ "config": { "theme": { "field": 5 } } })).unwrap();
    assert!(mixer.prepare_data(&EmptyContext, &foreign).is_ok());
}

#[test]
fn editor_keys_survive_new_options() {
    let reg = registry();
    let mixer = reg.lookup("industrialMixer").unwrap();
    let speed = json!({ "fixed": 1.0, "field": "line1/Mixer.rpm", "min": 0.0, "max": 10.0 });
    let options: ElementOptions =
        serde_json::from_value(json!({ "config": { "speed": speed.clone() } })).unwrap();

    let merged = mixer.new_options(options);
    let after = serde_json::to_value(&merged).unwrap();
    assert_eq!(after["config"]["speed"], speed);

    let ctx = from_fn(|_: &TypedPath| Ok(4.0));
    assert_eq!(mixer.prepare_data(&ctx, &merged).unwrap().get("speed"), Some(4.0));
}

#[test]
fn oversized_box_count_renders_a_capped_row() {
    let reg = registry();
    let conveyor = reg.lookup("conveyorBeltNewUnique").unwrap();
    let options = ElementOptions::new("conveyorBeltNewUnique")
        .with_binding("boxCount", ScalarBinding::fixed(1e9));

    let data = conveyor.prepare_data(&EmptyContext, &options).unwrap();
    assert_eq!(data.get("boxCount"), Some(1e9));
    let visual = conveyor.render(&data);
    let boxes = visual
        .tracks
        .iter()
        .filter(|t| t.layer.starts_with("box-"))
        .map(|t| &*t.layer)
        .collect::<std::collections::BTreeSet<_>>();
    assert_eq!(boxes.len(), MAX_REPEAT as usize);
}

#[test]
fn unusable_values_are_rejected() {
    let reg = registry();
    let press = reg.lookup("hydraulicPress").unwrap();

    let negative = ElementOptions::new("hydraulicPress")
        .with_binding("pressSpeed", ScalarBinding::fixed(-2.0));
    assert!(matches!(
        press.prepare_data(&EmptyContext, &negative),
        Err(ElementError::InvalidConfig { value, .. }) if value == -2.0
    ));

    let mixer = reg.lookup("industrialMixer").unwrap();
    let nan = ElementOptions::new("industrialMixer")
        .with_binding("speed", ScalarBinding::dynamic(path("line1/Mixer.rpm")));
    let ctx = from_fn(|_: &TypedPath| Ok(f64::NAN));
    assert!(matches!(
        mixer.prepare_data(&ctx, &nan),
        Err(ElementError::InvalidConfig { .. })
    ));
}

#[test]
fn well_defined_clamps_never_error() {
    let reg = registry();
    let conveyor = reg.lookup("conveyorBeltNewUnique").unwrap();
    let options = ElementOptions::new("conveyorBeltNewUnique")
        .with_binding("speed", ScalarBinding::fixed(0.0))
        .with_binding("boxCount", ScalarBinding::fixed(-3.7));

    let data = conveyor.prepare_data(&EmptyContext, &options).unwrap();
    assert_eq!(data.get("boxCount"), Some(0.0));
    let params = conveyor.animation(&data).unwrap();
    assert_eq!(params.duration, 10.0);
    assert!(params.phase_offsets.is_empty());

    let press = reg.lookup("hydraulicPress").unwrap();
    let zero = ElementOptions::new("hydraulicPress")
        .with_binding("pressSpeed", ScalarBinding::fixed(0.0));
    let data = press.prepare_data(&EmptyContext, &zero).unwrap();
    assert_eq!(press.animation(&data).unwrap().duration, 5.0);
}

#[test]
fn every_builtin_prepares_from_fresh_options() {
    let reg = registry();
    for descriptor in reg.iter() {
        let options = descriptor.new_options(ElementOptions::default());
        let data = descriptor
            .prepare_data(&EmptyContext, &options)
            .unwrap_or_else(|e| panic!("{}: {e}", descriptor.id()));
        for spec in descriptor.fields() {
            assert_eq!(data.get(spec.key), Some(spec.default), "{}", spec.key);
        }
    }
}
