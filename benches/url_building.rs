// SPDX-License-Identifier: MPL-2.0
use cloud_lens::cloud::{build_url, Delivery, UrlStyle};
use cloud_lens::transform::{HexColor, ImageDescriptor, Transformation};
use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;

fn url_building_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("url_building");

    let descriptor = ImageDescriptor::new("samples/people/smiling", 1920, 1080);
    let Ok(color) = HexColor::from_picker("#ffd700") else {
        return;
    };
    let selections = [
        ("none", Transformation::None),
        ("restore", Transformation::Restore),
        ("remove_background", Transformation::RemoveBackground),
        ("background_color", Transformation::BackgroundColor(color)),
    ];

    for style in [UrlStyle::Query, UrlStyle::Path] {
        let Ok(delivery) = Delivery::for_cloud("demo", style) else {
            continue;
        };
        for (name, selection) in &selections {
            group.bench_function(format!("{style:?}/{name}"), |b| {
                b.iter(|| build_url(black_box(&delivery), black_box(&descriptor), black_box(selection)));
            });
        }
    }

    group.finish();
}

criterion_group!(benches, url_building_benchmark);
criterion_main!(benches);
