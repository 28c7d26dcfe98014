use crate::error::MichigradError;
use crate::nn::activation::Activation;

/// Structural description of an `MLP`.
///
/// Only describes shape; weights are drawn when the model is built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MlpConfig {
    /// Number of model inputs.
    pub nin: usize,
    /// Output size of each layer, in order. The last entry is the model output size.
    pub nouts: Vec<usize>,
    /// Activation of every hidden layer. The output layer always uses `Identity`.
    pub activation: Activation,
}

impl MlpConfig {
    pub fn new(nin: usize, nouts: Vec<usize>, activation: Activation) -> Self {
        MlpConfig {
            nin,
            nouts,
            activation,
        }
    }

    /// Checks that the configuration describes a buildable model.
    ///
    /// # Errors
    /// * `MichigradError::EmptyLayerSizes` if `nouts` is empty.
    /// * `MichigradError::InvalidArity` if `nin` or any layer size is zero.
    pub fn validate(&self) -> Result<(), MichigradError> {
        if self.nin == 0 {
            return Err(MichigradError::InvalidArity {
                component: "MLP",
                name: "nin",
                value: self.nin,
            });
        }
        if self.nouts.is_empty() {
            return Err(MichigradError::EmptyLayerSizes);
        }
        if let Some(&bad) = self.nouts.iter().find(|&&n| n == 0) {
            return Err(MichigradError::InvalidArity {
                component: "MLP",
                name: "nouts",
                value: bad,
            });
        }
        Ok(())
    }

    /// The arity chain `[nin, nouts[0], ..., nouts[last]]`.
    pub fn arities(&self) -> Vec<usize> {
        std::iter::once(self.nin)
            .chain(self.nouts.iter().copied())
            .collect()
    }

    /// Total number of trainable scalars: `sum(nout_i * (nin_i + 1))`.
    pub fn num_parameters(&self) -> usize {
        self.arities()
            .windows(2)
            .map(|pair| pair[1] * (pair[0] + 1))
            .sum()
    }

    /// Activation used by layer `index`: the configured one for hidden layers,
    /// `Identity` for the last.
    pub fn layer_activation(&self, index: usize) -> Activation {
        if index + 1 == self.nouts.len() {
            Activation::Identity
        } else {
            self.activation
        }
    }
}
