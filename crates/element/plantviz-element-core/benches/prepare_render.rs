use criterion::{black_box, criterion_group, criterion_main, Criterion};
use plantviz_element_core::{
    Blackboard, ElementOptions, ElementRegistry, ScalarBinding, TypedPath,
};
use serde_json::json;

fn conveyor_options(boxes: &str) -> ElementOptions {
    let path = |s: &str| TypedPath::parse(s).expect("bench path");
    ElementOptions::new("conveyorBeltNewUnique")
        .with_binding("speed", ScalarBinding::dynamic(path("line1/Conveyor.speed")))
        .with_binding("boxCount", ScalarBinding::dynamic(path(boxes)))
}

fn prepare_render_benchmark(c: &mut Criterion) {
    let registry = ElementRegistry::builtin().unwrap();
    let conveyor = registry.lookup("conveyorBeltNewUnique").expect("conveyor");

    let mut bb = Blackboard::new();
    bb.set("line1/Conveyor.speed", json!(2.5), 1, "bench").expect("seed");
    bb.set("line1/Conveyor.few", json!(3), 1, "bench").expect("seed");
    bb.set("line1/Conveyor.many", json!(200), 1, "bench").expect("seed");

    let mut group = c.benchmark_group("conveyor_prepare_render");
    for (label, path) in [("3_boxes", "line1/Conveyor.few"), ("200_boxes", "line1/Conveyor.many")] {
        let options = conveyor.new_options(conveyor_options(path));
        group.bench_function(label, |b| {
            b.iter(|| {
                let data = conveyor
                    .prepare_data(black_box(&bb), black_box(&options))
                    .expect("prepare");
                black_box(conveyor.render(&data))
            })
        });
    }
    group.finish();
}

fn builtin_render_benchmark(c: &mut Criterion) {
    let registry = ElementRegistry::builtin().unwrap();
    let ctx = Blackboard::new();
    let prepared: Vec<_> = registry
        .iter()
        .map(|d| {
            let options = d.new_options(ElementOptions::default());
            let data = d.prepare_data(&ctx, &options).expect("defaults resolve");
            (d.clone(), data)
        })
        .collect();

    c.bench_function("render_all_builtin", |b| {
        b.iter(|| {
            for (descriptor, data) in &prepared {
                black_box(descriptor.render(black_box(data)));
            }
        })
    });
}

criterion_group!(benches, prepare_render_benchmark, builtin_render_benchmark);
criterion_main!(benches);
