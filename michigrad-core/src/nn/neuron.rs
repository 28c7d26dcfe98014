use crate::error::MichigradError;
use crate::nn::activation::Activation;
use crate::nn::init;
use crate::nn::module::{sealed, Module};
use crate::value::Value;
use rand::Rng;

/// A single unit computing `activation(w · x + b)`.
///
/// Weights are drawn uniformly from `[-1, 1)`; the bias starts at 0. The input
/// arity and the activation are fixed at construction.
#[derive(Debug)]
pub struct Neuron {
    weights: Vec<Value>,
    bias: Value,
    activation: Activation,
}

impl Neuron {
    /// Creates a new neuron with `nin` inputs, using the thread-local RNG.
    ///
    /// # Errors
    /// Returns `MichigradError::InvalidArity` if `nin` is zero.
    pub fn new(nin: usize, activation: Activation) -> Result<Self, MichigradError> {
        Self::new_with_rng(nin, activation, &mut rand::thread_rng())
    }

    /// Creates a new neuron drawing its weights from `rng`.
    pub fn new_with_rng<R: Rng + ?Sized>(
        nin: usize,
        activation: Activation,
        rng: &mut R,
    ) -> Result<Self, MichigradError> {
        if nin == 0 {
            return Err(MichigradError::InvalidArity {
                component: "Neuron",
                name: "nin",
                value: nin,
            });
        }
        Ok(Neuron {
            weights: init::default_weights(nin, rng),
            bias: Value::new(0.0),
            activation,
        })
    }

    /// Number of inputs.
    pub fn nin(&self) -> usize {
        self.weights.len()
    }

    pub fn activation(&self) -> Activation {
        self.activation
    }

    pub fn weights(&self) -> &[Value] {
        &self.weights
    }

    pub fn bias(&self) -> &Value {
        &self.bias
    }

    /// Forward pass without the arity check; callers guarantee `input.len() == nin`.
    pub(crate) fn forward_unchecked(&self, input: &[Value]) -> Value {
        let act = self
            .weights
            .iter()
            .zip(input)
            .fold(self.bias.clone(), |acc, (w, x)| acc + w * x);
        self.activation.apply(&act)
    }
}

impl sealed::Sealed for Neuron {}

impl Module for Neuron {
    type Output = Value;

    fn forward(&self, input: &[Value]) -> Result<Value, MichigradError> {
        if input.len() != self.nin() {
            return Err(MichigradError::ShapeMismatch {
                expected: self.nin(),
                actual: input.len(),
                operation: "Neuron::forward".to_string(),
            });
        }
        Ok(self.forward_unchecked(input))
    }

    /// `[w_0, ..., w_{nin-1}, b]`.
    fn parameters(&self) -> Vec<&Value> {
        let mut params = Vec::with_capacity(self.weights.len() + 1);
        params.extend(self.weights.iter());
        params.push(&self.bias);
        params
    }

    fn named_parameters(&self) -> Vec<(String, &Value)> {
        let mut params: Vec<(String, &Value)> = self
            .weights
            .iter()
            .enumerate()
            .map(|(i, w)| (format!("w.{}", i), w))
            .collect();
        params.push(("b".to_string(), &self.bias));
        params
    }
}

#[cfg(test)]
#[path = "neuron_test.rs"]
mod tests;
