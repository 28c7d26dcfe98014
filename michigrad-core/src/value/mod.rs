// src/value/mod.rs

use crate::autograd::graph::NodeId;
use crate::autograd::BackwardOp;
use crate::value_data::ValueData;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

mod autograd_methods;
pub mod create;
mod debug;
mod traits;

pub use create::values_from;

/// A scalar tracked by the autodiff engine.
///
/// `Value` uses `Arc<RwLock<ValueData>>` internally to allow for:
/// 1.  **Shared Ownership:** cloning a `Value` yields another handle to the same
///     graph node, so a parameter returned by `Module::parameters()` is the very
///     scalar the model owns.
/// 2.  **Interior Mutability:** `grad` (and `data`, for optimizers) can be
///     modified through a shared reference.
///
/// Every arithmetic operation on a `Value` returns a new node that remembers its
/// inputs, forming a DAG that `backward()` later traverses.
pub struct Value {
    pub(crate) inner: Arc<RwLock<ValueData>>,
}

impl Value {
    /// Creates a new leaf `Value` with a zero gradient.
    pub fn new(data: f64) -> Self {
        Value {
            inner: Arc::new(RwLock::new(ValueData::new(data))),
        }
    }

    /// Creates the output node of an operation.
    pub(crate) fn from_op(
        data: f64,
        op: &'static str,
        grad_fn: Arc<dyn BackwardOp + Send + Sync>,
    ) -> Self {
        Value {
            inner: Arc::new(RwLock::new(ValueData::from_op(data, op, grad_fn))),
        }
    }

    /// Acquires a read lock on the node.
    ///
    /// A poisoned lock is recovered: the guarded fields are plain numbers and
    /// stay consistent even if a writer panicked.
    pub fn read_data(&self) -> RwLockReadGuard<'_, ValueData> {
        self.inner.read().unwrap_or_else(|poisoned| {
            log::warn!("RwLock for Value was poisoned. Recovering reader guard.");
            poisoned.into_inner()
        })
    }

    /// Acquires a write lock on the node, recovering from poisoning.
    pub fn write_data(&self) -> RwLockWriteGuard<'_, ValueData> {
        self.inner.write().unwrap_or_else(|poisoned| {
            log::warn!("RwLock for Value was poisoned. Recovering writer guard.");
            poisoned.into_inner()
        })
    }

    /// Returns the scalar held by this node.
    pub fn data(&self) -> f64 {
        self.read_data().data
    }

    /// Overwrites the scalar held by this node.
    ///
    /// Used by optimizers between training steps. Nodes already built on top of
    /// this one keep the value they computed at construction time.
    pub fn set_data(&self, data: f64) {
        self.write_data().data = data;
    }

    /// Returns the accumulated gradient.
    pub fn grad(&self) -> f64 {
        self.read_data().grad
    }

    /// Overwrites the accumulated gradient.
    pub fn set_grad(&self, grad: f64) {
        self.write_data().grad = grad;
    }

    /// Resets the gradient to zero.
    pub fn zero_grad(&self) {
        self.set_grad(0.0);
    }

    /// Adds `delta` to the accumulated gradient.
    pub(crate) fn accumulate_grad(&self, delta: f64) {
        self.write_data().grad += delta;
    }

    /// Label of the operation that produced this node, `None` for leaves.
    pub fn op(&self) -> Option<&'static str> {
        self.read_data().op
    }

    /// Returns `true` if this node was not produced by an operation.
    pub fn is_leaf(&self) -> bool {
        self.read_data().is_leaf()
    }

    /// Returns a clone of the backward node, if any.
    pub fn grad_fn(&self) -> Option<Arc<dyn BackwardOp + Send + Sync>> {
        self.read_data().grad_fn.clone()
    }

    /// Stable identifier of the underlying graph node.
    ///
    /// Two handles share an id exactly when they point to the same node.
    pub fn id(&self) -> usize {
        Arc::as_ptr(&self.inner) as usize
    }

    /// Returns `true` if both handles point to the same graph node.
    pub fn ptr_eq(&self, other: &Value) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }

    pub(crate) fn node_id(&self) -> NodeId {
        Arc::as_ptr(&self.inner)
    }
}
