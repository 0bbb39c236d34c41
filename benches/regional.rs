use criterion::{black_box, criterion_group, criterion_main, Criterion};
use regional_forecast::{place, project, CityCatalog, LatLon, Region};

fn bench_regional(c: &mut Criterion) {
    let catalog = CityCatalog::builtin().expect("built-in catalog parses");
    let region = Region::Default;
    let offset = region.viewport_offset();
    let candidates = catalog.candidates(region);

    c.bench_function("to_pixel_and_bounding_box", |b| {
        b.iter(|| {
            let source = project::to_pixel(black_box(LatLon(35.7796, -78.6382)), offset, region);
            project::to_bounding_box(source, offset, region)
        })
    });

    let source = project::to_pixel(LatLon(35.7796, -78.6382), offset, region);
    let bbox = project::to_bounding_box(source, offset, region);
    c.bench_function("place_cities", |b| {
        b.iter(|| place(black_box(&candidates), &bbox, region))
    });
}

criterion_group!(benches, bench_regional);
criterion_main!(benches);
