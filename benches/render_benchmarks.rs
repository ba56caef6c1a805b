//! Rendering benchmarks
//!
//! Measures a full extract render in the common mode combinations and the
//! cost of scaling the number of restrictions.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use oereb_extract::references::UrlReferenceBuilder;
use oereb_extract::{Extract, ExtractRenderer, Flavour, RenderConfig, RenderMode};

const EXTRACT_JSON: &str = include_str!("../tests/fixtures/extract_full.json");

fn fixture() -> Extract {
    serde_json::from_str(EXTRACT_JSON).expect("Failed to parse extract fixture")
}

fn renderer() -> ExtractRenderer {
    ExtractRenderer::new(
        RenderConfig::default(),
        UrlReferenceBuilder::new("https://example.ch/oereb"),
    )
}

fn bench_render_modes(c: &mut Criterion) {
    let extract = fixture();
    let renderer = renderer();
    let mut group = c.benchmark_group("render_modes");

    let modes = [
        ("reduced_links", Flavour::Reduced, false, false),
        ("full_links", Flavour::Full, false, false),
        ("full_images", Flavour::Full, true, false),
        ("full_images_geometry", Flavour::Full, true, true),
    ];
    for (name, flavour, images, geometry) in modes {
        let mode = RenderMode::new(renderer.config(), flavour)
            .with_language("fr")
            .with_images(images)
            .with_geometry(geometry);
        group.bench_with_input(BenchmarkId::from_parameter(name), &mode, |b, mode| {
            b.iter(|| black_box(renderer.render(black_box(&extract), mode)))
        });
    }

    group.finish();
}

fn bench_restriction_count(c: &mut Criterion) {
    let base = fixture();
    let renderer = renderer();
    let mode = RenderMode::new(renderer.config(), Flavour::Full).with_geometry(true);
    let mut group = c.benchmark_group("restriction_count");

    for count in [10usize, 100, 1000] {
        let mut extract = base.clone();
        let template = base.real_estate.public_law_restrictions.clone();
        extract.real_estate.public_law_restrictions = template.iter().cycle().take(count).cloned().collect();

        group.throughput(Throughput::Elements(count as u64));
        group.bench_with_input(BenchmarkId::from_parameter(count), &extract, |b, extract| {
            b.iter(|| black_box(renderer.render(extract, &mode)))
        });
    }

    group.finish();
}

fn bench_encode(c: &mut Criterion) {
    let extract = fixture();
    let renderer = renderer();
    let mode = RenderMode::new(renderer.config(), Flavour::Full);

    c.bench_function("to_json_string_compact", |b| {
        b.iter(|| black_box(renderer.to_json_string(&extract, &mode, false)))
    });
}

criterion_group!(benches, bench_render_modes, bench_restriction_count, bench_encode);
criterion_main!(benches);
