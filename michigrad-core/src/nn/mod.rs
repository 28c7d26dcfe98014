// src/nn/mod.rs
// Building blocks for scalar neural networks: neurons, layers and MLPs.

pub mod activation;
pub mod config;
pub mod init;
pub mod layer;
pub mod mlp;
pub mod module; // Trait Module
pub mod neuron;

// Re-export common items
pub use activation::Activation;
pub use config::MlpConfig;
pub use layer::{Layer, LayerOutput};
pub use mlp::MLP;
pub use module::Module;
pub use neuron::Neuron;
