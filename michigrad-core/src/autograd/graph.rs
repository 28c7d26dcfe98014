use crate::value::Value;
use crate::value_data::ValueData;
use std::collections::HashSet;
use std::sync::RwLock;

/// Identity of a graph node: the address of its shared `RwLock<ValueData>`.
///
/// Only used as a set key while the corresponding `Value` handles are alive.
pub(crate) type NodeId = *const RwLock<ValueData>;

/// Returns every node reachable from `root`, inputs before the nodes built from them.
///
/// The walk is iterative so deep graphs (long sums over many weights) do not
/// exhaust the stack. Each node appears exactly once, however many paths reach it.
pub(crate) fn topological_sort(root: &Value) -> Vec<Value> {
    let mut visited: HashSet<NodeId> = HashSet::new();
    let mut sorted = Vec::new();
    // (node, inputs already pushed)
    let mut stack: Vec<(Value, bool)> = vec![(root.clone(), false)];

    while let Some((node, expanded)) = stack.pop() {
        if expanded {
            sorted.push(node);
            continue;
        }
        if !visited.insert(node.node_id()) {
            continue;
        }

        let grad_fn = node.grad_fn();
        stack.push((node, true));
        if let Some(grad_fn) = grad_fn {
            for input in grad_fn.inputs().into_iter().rev() {
                if !visited.contains(&input.node_id()) {
                    stack.push((input, false));
                }
            }
        }
    }

    sorted
}
