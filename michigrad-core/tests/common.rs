use michigrad_core::value::{values_from, Value};
use rand::rngs::StdRng;
use rand::SeedableRng;

// Shared by several integration test crates; each one only uses part of it.
#[allow(dead_code)]
pub(crate) fn seeded_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// The four-sample toy dataset used across the MLP tests.
#[allow(dead_code)]
pub(crate) fn toy_dataset() -> (Vec<Vec<Value>>, Vec<f64>) {
    let xs = vec![
        values_from(&[2.0, 3.0, -1.0]),
        values_from(&[3.0, -1.0, 0.5]),
        values_from(&[0.5, 1.0, 1.0]),
        values_from(&[1.0, 1.0, -1.0]),
    ];
    let ys = vec![1.0, -1.0, -1.0, 1.0];
    (xs, ys)
}
