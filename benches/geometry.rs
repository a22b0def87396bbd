use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use sokuchi::{Coordinate, OffsetRequest, center, distance_and_center, offset_points};
use std::hint::black_box;

fn generate_fixed_coordinates(size: usize, seed: u64) -> Vec<Coordinate> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed); // シード固定
    (0..size)
        .map(|_| Coordinate::random_using(&mut rng))
        .collect()
}

fn bench_geometry(c: &mut Criterion) {
    let mut group = c.benchmark_group("Geometry");

    let sizes = [100, 1_000, 10_000];

    for &size in &sizes {
        let points_a = generate_fixed_coordinates(size, 12345);
        let points_b = generate_fixed_coordinates(size, 67890);

        group.bench_with_input(
            BenchmarkId::new("DistanceAndCenter", size),
            &(&points_a, &points_b),
            |b, (a, b_points)| {
                b.iter(|| {
                    for (p, q) in a.iter().zip(b_points.iter()) {
                        let result = distance_and_center(
                            p.as_latitude(),
                            p.as_longitude(),
                            q.as_latitude(),
                            q.as_longitude(),
                        );
                        black_box(result).ok();
                    }
                });
            },
        );

        group.bench_with_input(
            BenchmarkId::new("Center", size),
            &(&points_a, &points_b),
            |b, (a, b_points)| {
                b.iter(|| {
                    for (p, q) in a.iter().zip(b_points.iter()) {
                        let result = center(
                            p.as_longitude(),
                            p.as_latitude(),
                            q.as_longitude(),
                            q.as_latitude(),
                        );
                        black_box(result).ok();
                    }
                });
            },
        );

        group.bench_with_input(BenchmarkId::new("OffsetPoints", size), &points_a, |b, points| {
            b.iter(|| {
                for p in points {
                    let result = offset_points(OffsetRequest {
                        lat: p.as_latitude(),
                        lon: p.as_longitude(),
                        distance: 1_000.0,
                    });
                    black_box(result).ok();
                }
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_geometry);
criterion_main!(benches);
