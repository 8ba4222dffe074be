use crate::value::Value;
use crate::value_data::ValueData;
use std::cell::RefCell;
use std::collections::HashSet;

/// Stable identity of a graph node: the address of its shared `ValueData`.
/// Valid as long as some `Value` keeps the node alive, which the traversal does.
pub(crate) type NodeId = *const RefCell<ValueData>;

/// Builds a topological order of the graph reachable from `root`.
///
/// Depth-first, post-order: a node is appended only once all of its operands
/// have been appended, so every node appears after everything it depends on
/// and `root` comes last. Each node appears exactly once, even when it is
/// reachable through several paths.
///
/// The traversal uses an explicit stack instead of recursion, so graph depth
/// is bounded by memory, not by the thread's stack size.
pub fn topological_sort(root: &Value) -> Vec<Value> {
    let mut visited: HashSet<NodeId> = HashSet::new();
    let mut sorted = Vec::new();
    // (node, operands_done): a node is pushed a second time, flagged, below its
    // operands; popping the flagged entry means its whole subgraph is emitted.
    let mut stack: Vec<(Value, bool)> = vec![(root.clone(), false)];

    while let Some((node, operands_done)) = stack.pop() {
        if operands_done {
            sorted.push(node);
            continue;
        }
        if !visited.insert(node.node_id()) {
            continue;
        }
        let operands = node.operands();
        stack.push((node, true));
        // Reversed so operands are emitted left to right.
        for operand in operands.into_iter().rev() {
            if !visited.contains(&operand.node_id()) {
                stack.push((operand, false));
            }
        }
    }
    sorted
}

#[cfg(test)]
#[path = "graph_test.rs"]
mod tests;
