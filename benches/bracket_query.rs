use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use orrery_ephem::dataset::{Dataset, SampleRow};
use orrery_ephem::interpolation::{interpolate, TimeIndexedStore};
use orrery_ephem::schema::Schema;

const START: f64 = 2459215.5;
const STEP: f64 = 1.0 / 24.0;
const ROWS: usize = 40_000;

/// Hourly planets dataset (about 4.5 years) with slowly varying values.
fn planets_dataset() -> Dataset {
    let schema = Schema::planets();
    let width = schema.value_width();
    let rows = (0..ROWS)
        .map(|i| {
            let values: Vec<f64> = (0..width)
                .map(|j| ((i + 7 * j) as f64 * 0.01).rem_euclid(360.0))
                .collect();
            SampleRow::new(START + STEP * i as f64, values)
        })
        .collect();
    Dataset::new(schema, rows).expect("synthetic dataset is sorted")
}

fn query_times(rng: &mut StdRng, n: usize) -> Vec<f64> {
    let last = START + STEP * (ROWS - 1) as f64;
    (0..n).map(|_| rng.random_range(START..=last)).collect()
}

fn bench_bracket(c: &mut Criterion) {
    let dataset = planets_dataset();
    let store = TimeIndexedStore::new(&dataset);
    let mut rng = StdRng::seed_from_u64(0xDEADBEEF);

    c.bench_function("bracket/40k_rows", |b| {
        b.iter_batched(
            || query_times(&mut rng, 1_000),
            |times| {
                for t in times {
                    black_box(store.bracket(black_box(t)).unwrap());
                }
            },
            BatchSize::SmallInput,
        )
    });
}

fn bench_interpolate(c: &mut Criterion) {
    let dataset = planets_dataset();
    let store = TimeIndexedStore::new(&dataset);
    let schema = Schema::planets();
    let mut rng = StdRng::seed_from_u64(0xC0FFEE);

    c.bench_function("interpolate/40k_rows/all_bodies", |b| {
        b.iter_batched(
            || query_times(&mut rng, 100),
            |times| {
                for t in times {
                    for body in 0..schema.body_count() {
                        black_box(interpolate(&store, &schema, black_box(t), body).unwrap());
                    }
                }
            },
            BatchSize::SmallInput,
        )
    });
}

criterion_group!(benches, bench_bracket, bench_interpolate);
criterion_main!(benches);
