//! # Scalar Operations Module (`ops`)
//!
//! Every differentiable operation on a [`Value`](crate::value::Value) lives here.
//!
//! ## Structure:
//!
//! - **`_op` Functions:** each operation has a core function (named `xxx_op`) that
//!   computes the forward result and wires the backward node into the graph.
//!   Operator overloads (`+`, `*`, ...) and methods (`relu()`, `tanh()`, ...) on
//!   `Value` delegate to them.
//! - **`Backward` Structs:** each operation has a struct (e.g. `AddBackward`) that
//!   implements [`BackwardOp`](crate::autograd::BackwardOp) and stores the
//!   context needed to apply the local derivative.
//!
//! ## Submodules:
//!
//! - [`arithmetic`]: add, sub, mul, div, neg, pow.
//! - [`activation`]: relu, sigmoid, tanh.
//! - [`math_elem`]: exp.

pub mod activation;
pub mod arithmetic;
pub mod math_elem;
