// src/value/mod.rs

use crate::autograd::graph::NodeId;
use crate::autograd::BackwardOp;
use crate::value_data::ValueData;
use std::cell::{Ref, RefCell, RefMut};
use std::rc::Rc;

mod accessors;
mod autograd_methods;
pub mod create;
mod traits;

/// A scalar tracked by the autodiff engine.
///
/// `Value` uses `Rc<RefCell<ValueData>>` internally to allow for:
/// 1.  **Shared Ownership:** a node may be an operand of many downstream nodes
///     (one weight used in several sums); clones are cheap handle copies.
/// 2.  **Interior Mutability:** the gradient is accumulated during `backward()`
///     through shared handles.
///
/// The graph is single-threaded; `Value` is neither `Send` nor `Sync`.
pub struct Value {
    pub(crate) data: Rc<RefCell<ValueData>>,
}

impl Value {
    /// Creates a leaf node holding `data`, with a zero gradient and no operands.
    pub fn new(data: f64) -> Self {
        Value::from_value_data(ValueData::new(data))
    }

    /// Creates the result node of an operation.
    pub(crate) fn from_op(data: f64, operands: Vec<Value>, op: BackwardOp) -> Self {
        Value::from_value_data(ValueData::from_op(data, operands, op))
    }

    fn from_value_data(value_data: ValueData) -> Self {
        Value {
            data: Rc::new(RefCell::new(value_data)),
        }
    }

    /// Immutable borrow of the underlying node.
    pub(crate) fn borrow_value_data(&self) -> Ref<'_, ValueData> {
        self.data.borrow()
    }

    /// Mutable borrow of the underlying node.
    pub(crate) fn borrow_value_data_mut(&self) -> RefMut<'_, ValueData> {
        self.data.borrow_mut()
    }

    /// Identity of the node, shared by all clones of this handle.
    pub(crate) fn node_id(&self) -> NodeId {
        Rc::as_ptr(&self.data)
    }

    /// Adds `delta` to this node's gradient.
    pub(crate) fn add_grad(&self, delta: f64) {
        self.borrow_value_data_mut().grad += delta;
    }
}
