use crate::error::MichigradError;
use crate::nn::activation::Activation;
use crate::nn::config::MlpConfig;
use crate::nn::layer::{Layer, LayerOutput};
use crate::nn::module::{prefixed, sealed, Module};
use crate::value::Value;
use rand::Rng;

/// A multi-layer perceptron: an ordered stack of layers with chained arities.
///
/// Layer `i` has `nout` equal to layer `i + 1`'s `nin`. Hidden layers use the
/// requested activation; the output layer always uses `Identity`, so the raw
/// output head is never squashed.
#[derive(Debug)]
pub struct MLP {
    layers: Vec<Layer>,
}

impl MLP {
    /// Creates a new MLP, using the thread-local RNG for the weights.
    ///
    /// # Arguments
    ///
    /// * `nin` - Number of model inputs.
    /// * `nouts` - Output size of each layer; `MLP::new(2, &[3, 3, 1], ..)` builds
    ///   layers `2 -> 3`, `3 -> 3` and `3 -> 1`.
    /// * `activation` - Activation of the hidden layers.
    ///
    /// # Errors
    /// Returns a configuration error if `nin` or a layer size is zero, or if
    /// `nouts` is empty.
    pub fn new(nin: usize, nouts: &[usize], activation: Activation) -> Result<Self, MichigradError> {
        Self::new_with_rng(nin, nouts, activation, &mut rand::thread_rng())
    }

    /// Creates a new MLP drawing its weights from `rng`.
    pub fn new_with_rng<R: Rng + ?Sized>(
        nin: usize,
        nouts: &[usize],
        activation: Activation,
        rng: &mut R,
    ) -> Result<Self, MichigradError> {
        let config = MlpConfig::new(nin, nouts.to_vec(), activation);
        Self::from_config_with_rng(&config, rng)
    }

    /// Builds the model described by `config`.
    pub fn from_config(config: &MlpConfig) -> Result<Self, MichigradError> {
        Self::from_config_with_rng(config, &mut rand::thread_rng())
    }

    /// Builds the model described by `config`, drawing weights from `rng`.
    pub fn from_config_with_rng<R: Rng + ?Sized>(
        config: &MlpConfig,
        rng: &mut R,
    ) -> Result<Self, MichigradError> {
        config.validate()?;
        let arities = config.arities();
        let layers = arities
            .windows(2)
            .enumerate()
            .map(|(index, pair)| {
                Layer::new_with_rng(pair[0], pair[1], config.layer_activation(index), &mut *rng)
            })
            .collect::<Result<Vec<_>, _>>()?;

        let mlp = MLP { layers };
        log::debug!(
            "MLP: built {} layers with arity chain {:?} ({} parameters)",
            mlp.layers.len(),
            arities,
            mlp.num_parameters()
        );
        Ok(mlp)
    }

    /// Assembles an MLP from layers built by the caller.
    ///
    /// # Errors
    /// * `MichigradError::EmptyLayerSizes` if `layers` is empty.
    /// * `MichigradError::BrokenArityChain` if a layer's `nin` differs from the
    ///   previous layer's `nout`.
    /// * `MichigradError::OutputActivation` if the last layer is not `Identity`.
    pub fn from_layers(layers: Vec<Layer>) -> Result<Self, MichigradError> {
        let last = layers.last().ok_or(MichigradError::EmptyLayerSizes)?;
        if last.activation() != Activation::Identity {
            return Err(MichigradError::OutputActivation {
                actual: last.activation().name(),
            });
        }
        for (index, pair) in layers.windows(2).enumerate() {
            if pair[0].nout() != pair[1].nin() {
                return Err(MichigradError::BrokenArityChain {
                    layer: index + 1,
                    expected: pair[0].nout(),
                    actual: pair[1].nin(),
                });
            }
        }
        Ok(MLP { layers })
    }

    pub fn layers(&self) -> &[Layer] {
        &self.layers
    }

    /// Number of model inputs.
    pub fn nin(&self) -> usize {
        self.layers[0].nin()
    }

    /// Number of model outputs.
    pub fn nout(&self) -> usize {
        self.layers[self.layers.len() - 1].nout()
    }

    /// The arity chain `[nin, nout_0, ..., nout_last]`.
    pub fn arities(&self) -> Vec<usize> {
        std::iter::once(self.nin())
            .chain(self.layers.iter().map(Layer::nout))
            .collect()
    }
}

impl sealed::Sealed for MLP {}

impl Module for MLP {
    type Output = LayerOutput;

    /// Feeds `input` through every layer in order.
    ///
    /// Only the first layer checks the input length; the arity chain validated
    /// at construction guarantees the rest.
    fn forward(&self, input: &[Value]) -> Result<LayerOutput, MichigradError> {
        let (first, rest) = self
            .layers
            .split_first()
            .ok_or(MichigradError::EmptyLayerSizes)?;
        let mut output = first.forward(input)?;
        for layer in rest {
            output = layer.forward_unchecked(output.as_slice());
        }
        Ok(output)
    }

    fn parameters(&self) -> Vec<&Value> {
        let mut params = Vec::new();
        for layer in &self.layers {
            params.extend(layer.parameters());
        }
        params
    }

    fn named_parameters(&self) -> Vec<(String, &Value)> {
        let mut params = Vec::new();
        for (index, layer) in self.layers.iter().enumerate() {
            params.extend(prefixed("layers", index, layer.named_parameters()));
        }
        params
    }
}

#[cfg(test)]
#[path = "mlp_test.rs"]
mod tests;
