use super::*;
use crate::nn::init::fill_;
use crate::value::values_from;
use approx::assert_relative_eq;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn neuron_with_weights(weights: &[f64], bias: f64, activation: Activation) -> Neuron {
    let mut rng = StdRng::seed_from_u64(0);
    let neuron = Neuron::new_with_rng(weights.len(), activation, &mut rng).unwrap();
    for (w, &data) in neuron.weights().iter().zip(weights) {
        w.set_data(data);
    }
    neuron.bias().set_data(bias);
    neuron
}

#[test]
fn test_neuron_creation() {
    let neuron = Neuron::new(3, Activation::Tanh).unwrap();
    assert_eq!(neuron.nin(), 3);
    assert_eq!(neuron.activation(), Activation::Tanh);
    assert_eq!(neuron.weights().len(), 3);
    assert_eq!(neuron.bias().data(), 0.0);
    assert!(neuron
        .weights()
        .iter()
        .all(|w| (-1.0..1.0).contains(&w.data())));
    assert!(neuron.parameters().iter().all(|p| p.grad() == 0.0));
}

#[test]
fn test_neuron_zero_inputs_is_configuration_error() {
    let err = Neuron::new(0, Activation::ReLU).unwrap_err();
    assert_eq!(
        err,
        MichigradError::InvalidArity {
            component: "Neuron",
            name: "nin",
            value: 0
        }
    );
    assert!(err.is_configuration_error());
}

#[test]
fn test_neuron_parameters_order() {
    let neuron = Neuron::new(4, Activation::ReLU).unwrap();
    let params = neuron.parameters();
    assert_eq!(params.len(), 5);
    assert_eq!(neuron.num_parameters(), 5);
    for (p, w) in params.iter().zip(neuron.weights()) {
        assert!(p.ptr_eq(w));
    }
    assert!(params[4].ptr_eq(neuron.bias()));
}

#[test]
fn test_neuron_named_parameters() {
    let neuron = Neuron::new(2, Activation::Identity).unwrap();
    let names: Vec<String> = neuron
        .named_parameters()
        .into_iter()
        .map(|(name, _)| name)
        .collect();
    assert_eq!(names, vec!["w.0", "w.1", "b"]);
}

#[test]
fn test_neuron_forward_identity() {
    let neuron = neuron_with_weights(&[0.5, -2.0], 0.25, Activation::Identity);
    let out = neuron.forward(&values_from(&[2.0, 1.0])).unwrap();
    // 0.5*2 - 2*1 + 0.25
    assert_relative_eq!(out.data(), -0.75);
}

#[test]
fn test_neuron_forward_activations() {
    let x = values_from(&[1.0, 1.0]);
    let relu = neuron_with_weights(&[-1.0, -1.0], 0.5, Activation::ReLU);
    assert_eq!(relu.forward(&x).unwrap().data(), 0.0);

    let tanh = neuron_with_weights(&[0.2, 0.3], 0.0, Activation::Tanh);
    assert_relative_eq!(tanh.forward(&x).unwrap().data(), 0.5f64.tanh());

    let sigmoid = neuron_with_weights(&[0.0, 0.0], 0.0, Activation::Sigmoid);
    assert_relative_eq!(sigmoid.forward(&x).unwrap().data(), 0.5);
}

#[test]
fn test_neuron_forward_shape_mismatch() {
    let neuron = Neuron::new(3, Activation::ReLU).unwrap();
    let err = neuron.forward(&values_from(&[1.0, 2.0])).unwrap_err();
    assert_eq!(
        err,
        MichigradError::ShapeMismatch {
            expected: 3,
            actual: 2,
            operation: "Neuron::forward".to_string()
        }
    );
    assert!(err.is_shape_error());
}

#[test]
fn test_neuron_backward_reaches_weights_and_bias() {
    let neuron = neuron_with_weights(&[0.5, -1.5], 1.0, Activation::Identity);
    let x = values_from(&[3.0, 2.0]);
    let out = neuron.forward(&x).unwrap();
    out.backward().unwrap();

    assert_relative_eq!(neuron.weights()[0].grad(), 3.0);
    assert_relative_eq!(neuron.weights()[1].grad(), 2.0);
    assert_relative_eq!(neuron.bias().grad(), 1.0);
    assert_relative_eq!(x[0].grad(), 0.5);
    assert_relative_eq!(x[1].grad(), -1.5);
}

#[test]
fn test_neuron_zero_grad() {
    let neuron = Neuron::new(3, Activation::Tanh).unwrap();
    let out = neuron.forward(&values_from(&[0.1, 0.2, 0.3])).unwrap();
    out.backward().unwrap();
    assert!(neuron.bias().grad() != 0.0);

    neuron.zero_grad();
    assert!(neuron.parameters().iter().all(|p| p.grad() == 0.0));
}

#[test]
fn test_neuron_forward_does_not_mutate_parameters() {
    let neuron = Neuron::new(2, Activation::ReLU).unwrap();
    fill_(&neuron.parameters(), 0.5);
    let _ = neuron.forward(&values_from(&[1.0, -1.0])).unwrap();
    assert!(neuron.parameters().iter().all(|p| p.data() == 0.5));
    assert!(neuron.parameters().iter().all(|p| p.is_leaf()));
}

#[test]
fn test_wide_neuron_forward_backward_and_drop() {
    // The weighted sum is a left-leaning chain of about 2 * nin nodes
    let nin = 20_000;
    let neuron = Neuron::new_with_rng(nin, Activation::Identity, &mut StdRng::seed_from_u64(3)).unwrap();
    fill_(&neuron.parameters(), 0.5);
    let input = values_from(&vec![0.1; nin]);

    let out = neuron.forward(&input).unwrap();
    assert_relative_eq!(out.data(), 0.5 + 0.05 * nin as f64, epsilon = 1e-6);

    out.backward().unwrap();
    assert_relative_eq!(neuron.bias().grad(), 1.0);
    assert_relative_eq!(input[nin - 1].grad(), 0.5);

    drop(out);
    // Parameters and inputs outlive the graph built on them
    assert_relative_eq!(neuron.weights()[0].data(), 0.5);
    assert_relative_eq!(input[0].data(), 0.1);
}
