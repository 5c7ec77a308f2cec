// Copyright 2024-2025 Irreducible Inc.

use std::{cmp::Reverse, collections::BinaryHeap};

/// Result of [`topological_sort`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TopologicalOrder {
	/// Nodes in an order where every node comes after all of its dependencies.
	pub sorted: Vec<usize>,
	/// Nodes that could not be ordered, ascending.
	///
	/// A node ends up here if it lies on a cycle, depends on an index outside of the graph, or
	/// depends (transitively) on such a node.
	pub remaining: Vec<usize>,
}

impl TopologicalOrder {
	pub fn is_complete(&self) -> bool {
		self.remaining.is_empty()
	}
}

/// Orders the nodes `0..n_nodes` of a dependency graph using Kahn's algorithm.
///
/// `dependencies(i)` yields the nodes that node `i` depends on. Repeated dependencies are allowed.
/// Among nodes that are ready at the same time the smallest index is emitted first, so a graph
/// whose nodes only depend on smaller indices is sorted into `0..n_nodes`.
///
/// ```
/// use hintgraph_utils::graph::topological_sort;
///
/// let deps: [&[usize]; 4] = [&[], &[3], &[0, 0], &[]];
/// let order = topological_sort(deps.len(), |i| deps[i].iter().copied());
/// assert_eq!(order.sorted, vec![0, 2, 3, 1]);
/// assert!(order.is_complete());
///
/// let deps: [&[usize]; 3] = [&[], &[2], &[1]];
/// let order = topological_sort(deps.len(), |i| deps[i].iter().copied());
/// assert_eq!(order.sorted, vec![0]);
/// assert_eq!(order.remaining, vec![1, 2]);
/// ```
pub fn topological_sort<I>(n_nodes: usize, dependencies: impl Fn(usize) -> I) -> TopologicalOrder
where
	I: IntoIterator<Item = usize>,
{
	let mut pending = vec![0usize; n_nodes];
	let mut dependents = vec![Vec::new(); n_nodes];

	for node in 0..n_nodes {
		for dep in dependencies(node) {
			pending[node] += 1;
			// An out-of-range dependency is never released, so the node stays pending.
			if let Some(list) = dependents.get_mut(dep) {
				list.push(node);
			}
		}
	}

	let mut ready = pending
		.iter()
		.enumerate()
		.filter(|(_, count)| **count == 0)
		.map(|(node, _)| Reverse(node))
		.collect::<BinaryHeap<_>>();

	let mut sorted = Vec::with_capacity(n_nodes);
	while let Some(Reverse(node)) = ready.pop() {
		sorted.push(node);
		for &dependent in &dependents[node] {
			pending[dependent] -= 1;
			if pending[dependent] == 0 {
				ready.push(Reverse(dependent));
			}
		}
	}

	let remaining = pending
		.iter()
		.enumerate()
		.filter(|(_, count)| **count != 0)
		.map(|(node, _)| node)
		.collect();

	TopologicalOrder { sorted, remaining }
}
