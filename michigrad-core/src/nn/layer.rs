use crate::error::MichigradError;
use crate::nn::activation::Activation;
use crate::nn::module::{prefixed, sealed, Module};
use crate::nn::neuron::Neuron;
use crate::value::Value;
use rand::Rng;

/// The result of a layer's forward pass.
///
/// A layer with a single neuron yields its output directly rather than a
/// one-element vector. Either variant can be fed to the next layer through
/// `as_slice()`.
#[derive(Debug, Clone)]
pub enum LayerOutput {
    Scalar(Value),
    Vector(Vec<Value>),
}

impl LayerOutput {
    /// The outputs as an ordered slice (length 1 for `Scalar`).
    pub fn as_slice(&self) -> &[Value] {
        match self {
            LayerOutput::Scalar(v) => std::slice::from_ref(v),
            LayerOutput::Vector(vs) => vs,
        }
    }

    pub fn len(&self) -> usize {
        self.as_slice().len()
    }

    /// Always `false`: layers have at least one neuron.
    pub fn is_empty(&self) -> bool {
        self.as_slice().is_empty()
    }

    pub fn is_scalar(&self) -> bool {
        matches!(self, LayerOutput::Scalar(_))
    }

    /// Returns the single output, or `None` for a `Vector`.
    pub fn scalar(&self) -> Option<&Value> {
        match self {
            LayerOutput::Scalar(v) => Some(v),
            LayerOutput::Vector(_) => None,
        }
    }

    /// Consumes the output, returning the single value or `None` for a `Vector`.
    pub fn into_scalar(self) -> Option<Value> {
        match self {
            LayerOutput::Scalar(v) => Some(v),
            LayerOutput::Vector(_) => None,
        }
    }

    pub fn into_vec(self) -> Vec<Value> {
        match self {
            LayerOutput::Scalar(v) => vec![v],
            LayerOutput::Vector(vs) => vs,
        }
    }

    /// The data of each output, in order.
    pub fn data(&self) -> Vec<f64> {
        self.as_slice().iter().map(Value::data).collect()
    }
}

/// `nout` neurons of arity `nin` sharing one activation.
#[derive(Debug)]
pub struct Layer {
    neurons: Vec<Neuron>,
    nin: usize,
    activation: Activation,
}

impl Layer {
    /// Creates a new layer, using the thread-local RNG for the weights.
    ///
    /// # Arguments
    ///
    /// * `nin` - Number of inputs of every neuron.
    /// * `nout` - Number of neurons, i.e. of outputs.
    /// * `activation` - Activation applied by every neuron.
    ///
    /// # Errors
    /// Returns `MichigradError::InvalidArity` if `nin` or `nout` is zero.
    pub fn new(nin: usize, nout: usize, activation: Activation) -> Result<Self, MichigradError> {
        Self::new_with_rng(nin, nout, activation, &mut rand::thread_rng())
    }

    /// Creates a new layer drawing its weights from `rng`.
    pub fn new_with_rng<R: Rng + ?Sized>(
        nin: usize,
        nout: usize,
        activation: Activation,
        rng: &mut R,
    ) -> Result<Self, MichigradError> {
        if nin == 0 {
            return Err(MichigradError::InvalidArity {
                component: "Layer",
                name: "nin",
                value: nin,
            });
        }
        if nout == 0 {
            return Err(MichigradError::InvalidArity {
                component: "Layer",
                name: "nout",
                value: nout,
            });
        }

        let neurons = (0..nout)
            .map(|_| Neuron::new_with_rng(nin, activation, &mut *rng))
            .collect::<Result<Vec<_>, _>>()?;
        log::debug!(
            "Layer: built {} {} neurons of arity {}",
            nout,
            activation.name(),
            nin
        );
        Ok(Layer {
            neurons,
            nin,
            activation,
        })
    }

    pub fn nin(&self) -> usize {
        self.nin
    }

    pub fn nout(&self) -> usize {
        self.neurons.len()
    }

    pub fn activation(&self) -> Activation {
        self.activation
    }

    pub fn neurons(&self) -> &[Neuron] {
        &self.neurons
    }

    /// Forward pass without the arity check; callers guarantee `input.len() == nin`.
    pub(crate) fn forward_unchecked(&self, input: &[Value]) -> LayerOutput {
        let mut outputs: Vec<Value> = self
            .neurons
            .iter()
            .map(|n| n.forward_unchecked(input))
            .collect();
        if outputs.len() == 1 {
            if let Some(single) = outputs.pop() {
                return LayerOutput::Scalar(single);
            }
        }
        LayerOutput::Vector(outputs)
    }
}

impl sealed::Sealed for Layer {}

impl Module for Layer {
    type Output = LayerOutput;

    fn forward(&self, input: &[Value]) -> Result<LayerOutput, MichigradError> {
        if input.len() != self.nin {
            return Err(MichigradError::ShapeMismatch {
                expected: self.nin,
                actual: input.len(),
                operation: "Layer::forward".to_string(),
            });
        }
        Ok(self.forward_unchecked(input))
    }

    fn parameters(&self) -> Vec<&Value> {
        let mut params = Vec::with_capacity(self.neurons.len() * (self.nin + 1));
        for neuron in &self.neurons {
            params.extend(neuron.parameters());
        }
        params
    }

    fn named_parameters(&self) -> Vec<(String, &Value)> {
        let mut params = Vec::with_capacity(self.neurons.len() * (self.nin + 1));
        for (index, neuron) in self.neurons.iter().enumerate() {
            params.extend(prefixed("neurons", index, neuron.named_parameters()));
        }
        params
    }
}

#[cfg(test)]
#[path = "layer_test.rs"]
mod tests;
