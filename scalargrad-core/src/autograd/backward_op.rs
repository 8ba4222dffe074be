use crate::value::Value;

/// The local chain rule attached to every node of the computation graph.
///
/// Any operation that creates a non-leaf `Value` records one of these
/// variants in the output's `op` field. During `backward()` the variant is
/// dispatched to push the node's accumulated gradient into its operands
/// according to the matching derivative formula.
///
/// Operand order is the order used in the forward pass (`[lhs, rhs]` for
/// binary operations, `[input]` for unary ones).
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BackwardOp {
    /// A node created from a literal. Propagates nothing.
    Leaf,
    /// `lhs + rhs`
    Add,
    /// `lhs * rhs`
    Mul,
    /// `input ** k` for a constant exponent `k`.
    Pow(f64),
    /// `tanh(input)`
    Tanh,
    /// `e ** input`
    Exp,
    /// `max(input, 0)`
    Relu,
}

impl BackwardOp {
    /// Number of operands a node produced by this operation must hold.
    pub fn arity(&self) -> usize {
        match self {
            BackwardOp::Leaf => 0,
            BackwardOp::Add | BackwardOp::Mul => 2,
            BackwardOp::Pow(_) | BackwardOp::Tanh | BackwardOp::Exp | BackwardOp::Relu => 1,
        }
    }

    /// Diagnostic label of the operation. Empty for leaves.
    pub fn tag(&self) -> String {
        match self {
            BackwardOp::Leaf => String::new(),
            BackwardOp::Add => "+".to_string(),
            BackwardOp::Mul => "*".to_string(),
            BackwardOp::Pow(k) => format!("**{}", k),
            BackwardOp::Tanh => "tanh".to_string(),
            BackwardOp::Exp => "exp".to_string(),
            BackwardOp::Relu => "relu".to_string(),
        }
    }

    /// Accumulates `d(root)/d(operand)` into every operand of one node.
    ///
    /// # Arguments
    /// * `out_data`: forward value of the node being processed.
    /// * `out_grad`: its fully accumulated gradient (dRoot/dOut).
    /// * `operands`: the node's operands, in forward order.
    pub(crate) fn backward(&self, out_data: f64, out_grad: f64, operands: &[Value]) {
        match self {
            BackwardOp::Leaf => {}
            BackwardOp::Add => {
                operands[0].add_grad(out_grad);
                operands[1].add_grad(out_grad);
            }
            BackwardOp::Mul => {
                // Read both values before writing: `x * x` has the same node twice.
                let lhs = operands[0].data();
                let rhs = operands[1].data();
                operands[0].add_grad(rhs * out_grad);
                operands[1].add_grad(lhs * out_grad);
            }
            BackwardOp::Pow(k) => {
                let base = operands[0].data();
                operands[0].add_grad(k * base.powf(k - 1.0) * out_grad);
            }
            BackwardOp::Tanh => {
                operands[0].add_grad((1.0 - out_data * out_data) * out_grad);
            }
            BackwardOp::Exp => {
                operands[0].add_grad(out_data * out_grad);
            }
            BackwardOp::Relu => {
                // Sub-gradient is 0 at the kink.
                let slope = if out_data > 0.0 { 1.0 } else { 0.0 };
                operands[0].add_grad(slope * out_grad);
            }
        }
    }
}

#[cfg(test)]
#[path = "backward_op_test.rs"]
mod tests;
