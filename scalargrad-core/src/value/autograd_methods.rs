use crate::autograd::graph::topological_sort;
use crate::value::Value;
use log::{debug, trace};

impl Value {
    /// Performs the backward pass starting from this node.
    ///
    /// Seeds this node's gradient with `1.0`, then walks the topological order
    /// of the reachable graph in reverse, applying each node's local chain rule
    /// once its gradient is complete. Afterwards every reachable node holds
    /// `d(self)/d(node)`; unreachable nodes are untouched.
    ///
    /// Gradients are accumulated, never reset: a second call (on this or another
    /// root) adds on top of existing gradients. Zero them first for a fresh pass.
    pub fn backward(&self) {
        let sorted_nodes = topological_sort(self);
        debug!(
            "backward: root op '{}', {} nodes in topological order",
            self.op_tag(),
            sorted_nodes.len()
        );

        self.borrow_value_data_mut().grad = 1.0;

        for node in sorted_nodes.iter().rev() {
            let guard = node.borrow_value_data();
            trace!(
                "backward: op '{}' data={} grad={}",
                guard.op.tag(),
                guard.data,
                guard.grad
            );
            // Operands are distinct cells from `node`, so the read guard can be held.
            guard.op.backward(guard.data, guard.grad, &guard.operands);
        }
    }

    /// Resets this node's gradient to `0.0`.
    pub fn zero_grad(&self) {
        self.borrow_value_data_mut().grad = 0.0;
    }
}
