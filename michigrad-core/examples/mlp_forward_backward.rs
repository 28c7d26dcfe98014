//! # Training a small MLP with plain gradient descent
//!
//! Builds a 3-4-4-1 perceptron, runs it over a four-sample toy dataset,
//! backpropagates a squared-error loss and nudges every parameter against
//! its gradient.
//!
//! Run with:
//! `cargo run --example mlp_forward_backward`

use michigrad_core::value::{values_from, Value};
use michigrad_core::{Activation, MichigradError, MlpConfig, Module, MLP};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn squared_error(mlp: &MLP, xs: &[Vec<Value>], ys: &[f64]) -> Result<Value, MichigradError> {
    let mut loss = Value::new(0.0);
    for (x, &y) in xs.iter().zip(ys.iter()) {
        let out = mlp.forward(x)?;
        let pred = out.as_slice().iter().sum::<Value>();
        loss = loss + (pred - y).pow(2.0);
    }
    Ok(loss)
}

fn main() -> Result<(), MichigradError> {
    let config = MlpConfig::new(3, vec![4, 4, 1], Activation::Tanh);
    let mut rng = StdRng::seed_from_u64(1337);
    let mlp = MLP::from_config_with_rng(&config, &mut rng)?;
    println!(
        "MLP arities {:?}, {} parameters",
        mlp.arities(),
        mlp.num_parameters()
    );

    let xs = vec![
        values_from(&[2.0, 3.0, -1.0]),
        values_from(&[3.0, -1.0, 0.5]),
        values_from(&[0.5, 1.0, 1.0]),
        values_from(&[1.0, 1.0, -1.0]),
    ];
    let ys = [1.0, -1.0, -1.0, 1.0];

    let learning_rate = 0.05;
    for step in 0..50 {
        mlp.zero_grad();
        let loss = squared_error(&mlp, &xs, &ys)?;
        loss.backward()?;

        for p in mlp.parameters() {
            p.set_data(p.data() - learning_rate * p.grad());
        }

        if step % 10 == 0 {
            println!("step {:>3}: loss = {:.6}", step, loss.data());
        }
    }

    for (x, y) in xs.iter().zip(ys.iter()) {
        let out = mlp.forward(x)?;
        println!("target {:>5.2} -> prediction {:?}", y, out.data());
    }

    // Feeding the wrong number of inputs is reported, not panicked on
    match mlp.forward(&values_from(&[1.0, 2.0])) {
        Err(e) => println!("expected failure: {}", e),
        Ok(out) => println!("unexpected output: {:?}", out.data()),
    }

    Ok(())
}
