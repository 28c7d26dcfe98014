//! Scalar reverse-mode automatic differentiation and a small multi-layer perceptron
//! built on top of it.

pub mod autograd;
pub mod error;
pub mod nn;
pub mod ops;
pub mod utils;
pub mod value;
pub mod value_data;

pub use error::MichigradError;
pub use nn::{Activation, Layer, LayerOutput, MlpConfig, Module, Neuron, MLP};
pub use value::Value;
// Re-export traits required by public functions/structs
pub use num_traits;
