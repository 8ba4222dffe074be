use crate::autograd::BackwardOp;
use crate::value::Value;
use log::warn;

impl Value {
    /// Returns the forward value of this node.
    pub fn data(&self) -> f64 {
        self.borrow_value_data().data
    }

    /// Returns the gradient accumulated by the last backward pass(es).
    pub fn grad(&self) -> f64 {
        self.borrow_value_data().grad
    }

    /// Returns the operation that produced this node.
    pub fn op(&self) -> BackwardOp {
        self.borrow_value_data().op
    }

    /// Diagnostic label of the producing operation (`"+"`, `"*"`, `"**2"`, ...).
    /// Empty for leaves.
    pub fn op_tag(&self) -> String {
        self.op().tag()
    }

    pub fn label(&self) -> Option<String> {
        self.borrow_value_data().label.clone()
    }

    pub fn set_label(&self, label: impl Into<String>) {
        self.borrow_value_data_mut().label = Some(label.into());
    }

    /// Returns handles to the nodes this one was computed from, in operand order.
    pub fn operands(&self) -> Vec<Value> {
        self.borrow_value_data().operands.clone()
    }

    /// `true` if this node was created from a literal.
    pub fn is_leaf(&self) -> bool {
        self.borrow_value_data().operands.is_empty()
    }

    /// Overwrites the forward value, e.g. for a parameter update between passes.
    ///
    /// Nodes already computed from this one keep their old values; rebuild the
    /// expression to see the change.
    pub fn set_data(&self, data: f64) {
        let mut guard = self.borrow_value_data_mut();
        if !guard.operands.is_empty() {
            warn!(
                "set_data on a non-leaf node (op '{}'); downstream values are not recomputed",
                guard.op.tag()
            );
        }
        guard.data = data;
    }

    /// `true` if both handles point to the same graph node.
    pub fn ptr_eq(&self, other: &Value) -> bool {
        self.node_id() == other.node_id()
    }
}
