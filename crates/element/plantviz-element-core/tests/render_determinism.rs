use plantviz_element_core::{ElementOptions, ElementRegistry, EmptyContext, ResolvedData};

#[test]
fn render_is_deterministic_and_tracks_target_layers() {
    let reg = ElementRegistry::builtin().unwrap();
    for descriptor in reg.iter() {
        let options = descriptor.new_options(ElementOptions::default());
        let data = descriptor.prepare_data(&EmptyContext, &options).unwrap();

        let a = descriptor.render(&data);
        let b = descriptor.render(&data);
        assert_eq!(a, b, "{}", descriptor.id());
        assert_eq!(a.element, descriptor.id());
        assert!(
            a.dangling_tracks().is_empty(),
            "{}: {:?}",
            descriptor.id(),
            a.dangling_tracks()
        );
        assert!(a.tracks.iter().all(|t| t.duration.is_finite() && t.duration > 0.0));
    }
}

#[test]
fn partial_records_render_with_defaults() {
    let reg = ElementRegistry::builtin().unwrap();
    for descriptor in reg.iter() {
        let empty = descriptor.render(&ResolvedData::new());
        let options = descriptor.new_options(ElementOptions::default());
        let full = descriptor
            .render(&descriptor.prepare_data(&EmptyContext, &options).unwrap());
        assert_eq!(empty, full, "{}", descriptor.id());
    }
}

#[test]
fn visuals_serialize_for_the_host() {
    let reg = ElementRegistry::builtin().unwrap();
    let mixer = reg.lookup("industrialMixer").unwrap();
    let v = mixer.render(&ResolvedData::new());
    let json = serde_json::to_value(&v).unwrap();
    assert_eq!(json["element"], "industrialMixer");
    assert_eq!(json["viewBox"]["width"], 200.0);
    assert_eq!(json["tracks"][0]["layer"], "arms");
    assert_eq!(json["tracks"][0]["property"], "rotate");
    assert_eq!(json["tracks"][0]["origin"], serde_json::json!([100.0, 100.0]));
}
