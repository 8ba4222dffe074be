// src/value/traits.rs

use crate::value::Value;
use std::fmt;
use std::rc::Rc;

impl Clone for Value {
    /// Shallow clone: the new handle points to the same graph node.
    fn clone(&self) -> Self {
        Value {
            data: Rc::clone(&self.data),
        }
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let guard = self.borrow_value_data();
        write!(
            f,
            "Value(data={}, grad={}, op={:?}, label={:?})",
            guard.data,
            guard.grad,
            guard.op.tag(),
            guard.label
        )
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Value(data={})", self.data())
    }
}
