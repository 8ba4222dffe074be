// src/value_data.rs
use std::rc::Rc;

use crate::autograd::BackwardOp;
use crate::value::Value;

/// Internal storage and metadata for a `Value`.
///
/// This struct holds the forward value, the gradient accumulator and the
/// graph edges used by the backward pass. It is wrapped in
/// `Rc<RefCell<ValueData>>` by `Value` to allow shared ownership (one node
/// consumed by many downstream nodes) and interior mutability of `grad`.
#[derive(Debug)]
pub struct ValueData {
    /// The forward-computed scalar.
    pub(crate) data: f64,

    // --- Autograd Metadata ---
    /// Accumulated gradient of the last `backward()` root with respect to this node.
    /// Starts at 0.0 and is only ever added to, except for the seed of a
    /// backward pass and explicit zeroing.
    pub(crate) grad: f64,
    /// Nodes this one was computed from. Empty for leaves.
    /// Order matches the operand order of the producing operation.
    pub(crate) operands: Vec<Value>,
    /// The operation that produced this node, used to dispatch its local chain rule.
    pub(crate) op: BackwardOp,
    /// Optional human-readable name, for diagnostics only.
    pub(crate) label: Option<String>,
}

impl ValueData {
    /// Creates the data of a leaf node (no operands, `BackwardOp::Leaf`).
    pub fn new(data: f64) -> Self {
        ValueData {
            data,
            grad: 0.0,
            operands: Vec::new(),
            op: BackwardOp::Leaf,
            label: None,
        }
    }

    /// Creates the data of an interior node produced by `op` from `operands`.
    pub(crate) fn from_op(data: f64, operands: Vec<Value>, op: BackwardOp) -> Self {
        debug_assert_eq!(operands.len(), op.arity(), "operand count does not match {:?}", op);
        ValueData {
            data,
            grad: 0.0,
            operands,
            op,
            label: None,
        }
    }
}

impl Drop for ValueData {
    /// Releases the operand chain iteratively.
    ///
    /// The default drop glue would recurse once per graph level, which
    /// overflows the stack on long chains (e.g. a running sum over many terms).
    /// Operands that are still shared elsewhere are simply released.
    fn drop(&mut self) {
        let mut pending = std::mem::take(&mut self.operands);
        while let Some(operand) = pending.pop() {
            if let Ok(cell) = Rc::try_unwrap(operand.data) {
                let mut inner = cell.into_inner();
                pending.append(&mut inner.operands);
            }
        }
    }
}
