//! # Autograd
//!
//! Reverse-mode differentiation over the scalar computation graph.
//!
//! - [`backward_op`]: the `BackwardOp` trait every differentiable operation implements.
//! - [`graph`]: topological ordering of the nodes reachable from a root.
//! - [`grad_check`]: numerical verification of analytical gradients.

pub mod backward_op;
pub mod grad_check;
pub mod graph;

pub use backward_op::BackwardOp;
