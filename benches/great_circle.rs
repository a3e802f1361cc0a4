use criterion::{Criterion, criterion_group, criterion_main};
use seapath::{GeoPoint, great_circle_distance, rhumb_line};
use std::hint::black_box;

fn great_circle_benchmark(c: &mut Criterion) {
    let greenwich = GeoPoint::new(51.476852, -0.000500);
    let new_york = GeoPoint::new(40.730610, -73.935242);

    c.bench_function("great_circle_distance", |b| {
        b.iter(|| great_circle_distance(black_box(&greenwich), black_box(&new_york)));
    });

    c.bench_function("rhumb_line", |b| {
        b.iter(|| rhumb_line(black_box(&greenwich), black_box(&new_york)));
    });
}

criterion_group!(benches, great_circle_benchmark);
criterion_main!(benches);
