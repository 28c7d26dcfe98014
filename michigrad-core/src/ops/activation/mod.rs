//! # Activation Functions
//!
//! Scalar non-linearities used by neurons. Each one is also available as a
//! method on `Value` (`x.relu()`, `x.sigmoid()`, `x.tanh()`).

pub mod relu;
pub mod sigmoid;
pub mod tanh;

// Re-export key functions
pub use relu::relu_op;
pub use sigmoid::sigmoid_op;
pub use tanh::tanh_op;
