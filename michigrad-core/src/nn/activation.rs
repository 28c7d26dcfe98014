use crate::error::MichigradError;
use crate::value::Value;
use std::str::FromStr;

/// The non-linearity a layer applies to each neuron's weighted sum.
///
/// Chosen once when a `Layer` is built and applied uniformly to all of its
/// neurons. `ReLU` is the default for hidden layers; an MLP always builds its
/// output layer with `Identity`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Activation {
    /// No non-linearity: the weighted sum is returned as is.
    Identity,
    #[default]
    ReLU,
    Sigmoid,
    Tanh,
}

impl Activation {
    /// Applies the activation to `x`, recording the operation in the graph.
    ///
    /// `Identity` returns a handle to `x` itself and adds no node.
    pub fn apply(self, x: &Value) -> Value {
        match self {
            Activation::Identity => x.clone(),
            Activation::ReLU => x.relu(),
            Activation::Sigmoid => x.sigmoid(),
            Activation::Tanh => x.tanh(),
        }
    }

    /// Lowercase name, as accepted by `FromStr`.
    pub fn name(self) -> &'static str {
        match self {
            Activation::Identity => "identity",
            Activation::ReLU => "relu",
            Activation::Sigmoid => "sigmoid",
            Activation::Tanh => "tanh",
        }
    }
}

impl FromStr for Activation {
    type Err = MichigradError;

    /// Parses `"relu"`, `"sigmoid"`, `"tanh"`, `"identity"` or `"linear"`
    /// (case-insensitive).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "identity" | "linear" => Ok(Activation::Identity),
            "relu" => Ok(Activation::ReLU),
            "sigmoid" => Ok(Activation::Sigmoid),
            "tanh" => Ok(Activation::Tanh),
            _ => Err(MichigradError::UnknownActivation(s.to_string())),
        }
    }
}

#[cfg(test)]
#[path = "activation_test.rs"]
mod tests;
