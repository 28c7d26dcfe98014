// src/value/debug.rs
use crate::value::Value;
use std::fmt;

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.inner.read() {
            Ok(guard) => write!(
                f,
                "Value(data={}, grad={}, op={:?})",
                guard.data, guard.grad, guard.op
            ),
            Err(_) => write!(f, "Value(Error: RwLock poisoned)"),
        }
    }
}
