// Copyright 2025 Irreducible Inc.

use std::{
	collections::HashMap,
	fmt::{self, Debug, Display},
};

use itertools::Itertools;

/// Values assigned to nodes, used for inputs, hint arguments and evaluation results.
pub type NodeValues = HashMap<NodeId, u32>;

/// Index of a node within its graph.
///
/// IDs are issued in creation order starting from 0 and are never reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(usize);

impl NodeId {
	pub const fn new(index: usize) -> Self {
		Self(index)
	}

	pub const fn index(self) -> usize {
		self.0
	}
}

impl Display for NodeId {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "#{}", self.0)
	}
}

/// Process-unique identity of a graph, carried by every [`Node`] handle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GraphId(pub(crate) usize);

impl Display for GraphId {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "graph {}", self.0)
	}
}

/// Handle to a node, returned by the [`GraphBuilder`](crate::GraphBuilder) construction methods.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Node {
	pub(crate) graph: GraphId,
	pub(crate) id: NodeId,
}

impl Node {
	pub const fn id(self) -> NodeId {
		self.id
	}

	pub const fn graph(self) -> GraphId {
		self.graph
	}
}

impl Display for Node {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		Display::fmt(&self.id, f)
	}
}

/// The operation a node performs.
#[derive(Debug)]
pub enum NodeKind {
	/// Value supplied by the caller on every evaluation.
	Input,
	Constant(u32),
	/// Wrapping sum of the two parents.
	Add(NodeId, NodeId),
	/// Wrapping product of the two parents.
	Mul(NodeId, NodeId),
	/// Value computed outside of the graph. Nothing checks it except the constraints placed on it.
	Hint(Hint),
}

impl NodeKind {
	/// The nodes that must be resolved before this one.
	pub fn dependencies(&self) -> Vec<NodeId> {
		match self {
			Self::Input | Self::Constant(_) => vec![],
			Self::Add(a, b) | Self::Mul(a, b) => vec![*a, *b],
			Self::Hint(hint) => hint.dependencies.clone(),
		}
	}

	pub const fn is_input(&self) -> bool {
		matches!(self, Self::Input)
	}
}

impl Display for NodeKind {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Input => write!(f, "input"),
			Self::Constant(value) => write!(f, "const {value}"),
			Self::Add(a, b) => write!(f, "{a} + {b}"),
			Self::Mul(a, b) => write!(f, "{a} * {b}"),
			Self::Hint(hint) => {
				write!(f, "hint[{}]({})", hint.func.index, hint.dependencies.iter().join(", "))
			}
		}
	}
}

/// A hint: the declared dependencies and the computation run over their values.
#[derive(Debug)]
pub struct Hint {
	pub(crate) dependencies: Vec<NodeId>,
	pub(crate) func: HintFn,
}

impl Hint {
	pub fn dependencies(&self) -> &[NodeId] {
		&self.dependencies
	}

	/// Runs the computation.
	///
	/// `values` is expected to hold exactly the declared dependencies. A computation that reads
	/// any other node finds no value for it.
	pub fn compute(&self, values: &NodeValues) -> u32 {
		(self.func.func)(values)
	}
}

pub(crate) type BoxedHintFn = Box<dyn Fn(&NodeValues) -> u32 + Send + Sync + 'static>;

pub(crate) struct HintFn {
	/// Position among the hints of the graph, only used for display.
	pub(crate) index: usize,
	pub(crate) func: BoxedHintFn,
}

impl Debug for HintFn {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "HintFn({})", self.index)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_node_kind_display() {
		assert_eq!(NodeKind::Input.to_string(), "input");
		assert_eq!(NodeKind::Constant(5).to_string(), "const 5");
		assert_eq!(NodeKind::Add(NodeId::new(0), NodeId::new(1)).to_string(), "#0 + #1");
		assert_eq!(NodeKind::Mul(NodeId::new(2), NodeId::new(2)).to_string(), "#2 * #2");

		let hint = NodeKind::Hint(Hint {
			dependencies: vec![NodeId::new(2), NodeId::new(3)],
			func: HintFn {
				index: 1,
				func: Box::new(|_: &NodeValues| 0),
			},
		});
		assert_eq!(hint.to_string(), "hint[1](#2, #3)");
		assert_eq!(format!("{hint:?}"), "Hint(Hint { dependencies: [NodeId(2), NodeId(3)], func: HintFn(1) })");
	}

	#[test]
	fn test_dependencies() {
		let (a, b) = (NodeId::new(3), NodeId::new(1));
		assert!(NodeKind::Input.dependencies().is_empty());
		assert!(NodeKind::Constant(7).dependencies().is_empty());
		assert_eq!(NodeKind::Add(a, b).dependencies(), vec![a, b]);
		assert_eq!(NodeKind::Mul(b, b).dependencies(), vec![b, b]);
	}

	#[test]
	fn test_hint_compute_sees_given_values() {
		let dep = NodeId::new(0);
		let hint = Hint {
			dependencies: vec![dep],
			func: HintFn {
				index: 0,
				func: Box::new(move |values: &NodeValues| values.get(&dep).map_or(u32::MAX, |v| v / 2)),
			},
		};
		assert_eq!(hint.compute(&NodeValues::from([(dep, 9)])), 4);
		assert_eq!(hint.compute(&NodeValues::new()), u32::MAX);
	}
}
