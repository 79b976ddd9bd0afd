use criterion::{criterion_group, criterion_main, Criterion};

use homedraft::export::{design_summary_json, room_data_csv};
use homedraft::rendering::{render_plan, svg::diagram_to_svg};
use homedraft::{Canvas, DesignRequest, GeneratedPlan, RoomDescriptor};

fn sample_rooms(n: usize) -> Vec<RoomDescriptor> {
    let types = ["bedroom", "bathroom", "kitchen", "living_room", "dining_room", "office"];
    (0..n)
        .map(|i| {
            let w = 8.0 + (i % 5) as f64 * 2.0;
            let h = 6.0 + (i % 3) as f64 * 3.0;
            RoomDescriptor::new(
                types[i % types.len()],
                (i % 8) as f64 * 12.0,
                (i / 8) as f64 * 10.0,
                w,
                h,
                w * h,
            )
        })
        .collect()
}

fn bench_render_plan(c: &mut Criterion) {
    let rooms = sample_rooms(32);
    let canvas = Canvas::default();
    c.bench_function("render_plan_32_rooms", |b| {
        b.iter(|| {
            let _ = render_plan(&rooms, canvas);
        })
    });
}

fn bench_diagram_to_svg(c: &mut Criterion) {
    let rooms = sample_rooms(32);
    let diagram = render_plan(&rooms, Canvas::default());
    c.bench_function("diagram_to_svg_32_rooms", |b| {
        b.iter(|| {
            let _ = diagram_to_svg(&diagram);
        })
    });
}

fn bench_exports(c: &mut Criterion) {
    let plan = GeneratedPlan {
        request: DesignRequest::builder().build(),
        rooms: sample_rooms(32),
    };
    c.bench_function("design_summary_json_32_rooms", |b| {
        b.iter(|| {
            let _ = design_summary_json(&plan).unwrap();
        })
    });
    c.bench_function("room_data_csv_32_rooms", |b| {
        b.iter(|| {
            let _ = room_data_csv(&plan.rooms).unwrap();
        })
    });
}

criterion_group!(benches, bench_render_plan, bench_diagram_to_svg, bench_exports);
criterion_main!(benches);
