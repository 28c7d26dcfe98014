use super::*;
use crate::utils::testing::check_values_near;
use crate::value::values_from;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::collections::HashSet;

fn set_weights(layer: &Layer, weights: &[&[f64]], biases: &[f64]) {
    for ((neuron, ws), &b) in layer.neurons().iter().zip(weights).zip(biases) {
        for (w, &data) in neuron.weights().iter().zip(ws.iter()) {
            w.set_data(data);
        }
        neuron.bias().set_data(b);
    }
}

#[test]
fn test_layer_creation() {
    let layer = Layer::new(3, 4, Activation::Sigmoid).unwrap();
    assert_eq!(layer.nin(), 3);
    assert_eq!(layer.nout(), 4);
    assert_eq!(layer.activation(), Activation::Sigmoid);
    assert!(layer
        .neurons()
        .iter()
        .all(|n| n.nin() == 3 && n.activation() == Activation::Sigmoid));
}

#[test]
fn test_layer_invalid_arity() {
    let err = Layer::new(0, 2, Activation::ReLU).unwrap_err();
    assert!(matches!(
        err,
        MichigradError::InvalidArity { component: "Layer", name: "nin", value: 0 }
    ));
    let err = Layer::new(2, 0, Activation::ReLU).unwrap_err();
    assert!(matches!(
        err,
        MichigradError::InvalidArity { component: "Layer", name: "nout", value: 0 }
    ));
    assert!(err.is_configuration_error());
}

#[test]
fn test_layer_parameter_count() {
    for nin in 1..5 {
        for nout in 1..5 {
            let layer = Layer::new(nin, nout, Activation::ReLU).unwrap();
            assert_eq!(layer.parameters().len(), nout * (nin + 1));
            assert_eq!(layer.named_parameters().len(), nout * (nin + 1));
        }
    }
}

#[test]
fn test_layer_parameters_are_unique_and_ordered() {
    let layer = Layer::new(2, 3, Activation::Tanh).unwrap();
    let params = layer.parameters();
    let ids: HashSet<usize> = params.iter().map(|p| p.id()).collect();
    assert_eq!(ids.len(), params.len());

    let expected: Vec<&Value> = layer
        .neurons()
        .iter()
        .flat_map(|n| n.parameters())
        .collect();
    for (p, e) in params.iter().zip(expected.iter()) {
        assert!(p.ptr_eq(e));
    }
}

#[test]
fn test_layer_named_parameters() {
    let layer = Layer::new(1, 2, Activation::ReLU).unwrap();
    let names: Vec<String> = layer
        .named_parameters()
        .into_iter()
        .map(|(name, _)| name)
        .collect();
    assert_eq!(
        names,
        vec!["neurons.0.w.0", "neurons.0.b", "neurons.1.w.0", "neurons.1.b"]
    );
}

#[test]
fn test_layer_single_output_is_not_wrapped() {
    let layer = Layer::new(3, 1, Activation::Identity).unwrap();
    let out = layer.forward(&values_from(&[1.0, 2.0, 3.0])).unwrap();
    assert!(out.is_scalar());
    assert!(out.scalar().is_some());
    assert_eq!(out.len(), 1);
}

#[test]
fn test_layer_multiple_outputs() {
    let layer = Layer::new(2, 3, Activation::ReLU).unwrap();
    let out = layer.forward(&values_from(&[0.5, -0.5])).unwrap();
    assert!(!out.is_scalar());
    assert!(out.scalar().is_none());
    assert_eq!(out.len(), 3);
    assert!(!out.is_empty());
    assert_eq!(out.into_vec().len(), 3);
}

#[test]
fn test_layer_forward_values() {
    let layer = Layer::new(2, 2, Activation::Identity).unwrap();
    set_weights(&layer, &[&[1.0, 2.0], &[-1.0, 0.5]], &[0.5, 0.0]);
    let out = layer.forward(&values_from(&[3.0, 4.0])).unwrap();
    check_values_near(out.as_slice(), &[11.5, -1.0], 1e-12);
}

#[test]
fn test_relu_layer_floors_negative_sum() {
    let layer = Layer::new(2, 1, Activation::ReLU).unwrap();
    set_weights(&layer, &[&[1.0, 1.0]], &[0.0]);
    let out = layer.forward(&values_from(&[-2.0, -3.0])).unwrap();
    let single = out.into_scalar().unwrap();
    assert_eq!(single.data(), 0.0);
}

#[test]
fn test_layer_shape_mismatch() {
    let layer = Layer::new(3, 2, Activation::ReLU).unwrap();
    let err = layer.forward(&values_from(&[1.0])).unwrap_err();
    assert_eq!(
        err,
        MichigradError::ShapeMismatch {
            expected: 3,
            actual: 1,
            operation: "Layer::forward".to_string()
        }
    );
}

#[test]
fn test_layer_zero_grad_idempotent() {
    let layer = Layer::new(2, 2, Activation::Tanh).unwrap();
    for p in layer.parameters() {
        p.set_grad(1.5);
    }
    layer.zero_grad();
    layer.zero_grad();
    assert!(layer.parameters().iter().all(|p| p.grad() == 0.0));
}

#[test]
fn test_layer_seeded_construction_is_reproducible() {
    let a = Layer::new_with_rng(3, 2, Activation::ReLU, &mut StdRng::seed_from_u64(11)).unwrap();
    let b = Layer::new_with_rng(3, 2, Activation::ReLU, &mut StdRng::seed_from_u64(11)).unwrap();
    let da: Vec<f64> = a.parameters().iter().map(|p| p.data()).collect();
    let db: Vec<f64> = b.parameters().iter().map(|p| p.data()).collect();
    assert_eq!(da, db);
}
