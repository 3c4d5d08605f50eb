//! Benchmarks for scramble generation.
//!
//! Measures the complete rejection-sampling process: drawing random
//! permutations, skipping duplicates, and retrying until a solvable layout
//! appears.
//!
//! # Test Data
//!
//! Uses three fixed seeds to ensure reproducibility while testing multiple
//! cases; each seed settles on a solvable layout after a different number of
//! redraws.
//!
//! # Running
//!
//! ```sh
//! cargo bench --bench scrambler
//! ```

use std::{hint, str::FromStr as _, time::Duration};

use criterion::{
    BatchSize, BenchmarkId, Criterion, PlottingBackend, criterion_group, criterion_main,
};
use slidelace_generator::{ScrambleSeed, Scrambler};

const SEEDS: [&str; 3] = [
    "c1d44bd6afaf8af64f126546884e19298acbdc33c3924a28136715de946ef3f1",
    "a2b3c4d5e6f7a8b9c0d1e2f3a4b5c6d7e8f9a0b1c2d3e4f5a6b7c8d9e0f1a2b3",
    "1234567890abcdef1234567890abcdef1234567890abcdef1234567890abcdef",
];

fn bench_scramble(c: &mut Criterion) {
    for size in [3u8, 4, 5] {
        let scrambler = Scrambler::new(size).unwrap();

        for (i, seed) in SEEDS.into_iter().enumerate() {
            let seed = ScrambleSeed::from_str(seed).unwrap();
            c.bench_with_input(
                BenchmarkId::new(format!("scramble_{size}x{size}"), format!("seed_{i}")),
                &seed,
                |b, seed| {
                    b.iter_batched(
                        || hint::black_box(*seed),
                        |seed| scrambler.scramble_with_seed(seed),
                        BatchSize::SmallInput,
                    );
                },
            );
        }
    }
}

criterion_group!(
    name = benches;
    config =
        Criterion::default()
            .plotting_backend(PlottingBackend::Plotters)
            .measurement_time(Duration::from_secs(12));
    targets = bench_scramble
);
criterion_main!(benches);
