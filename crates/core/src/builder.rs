// Copyright 2025 Irreducible Inc.

use crate::{
	constraint::Constraint,
	graph::Graph,
	node::{Hint, HintFn, Node, NodeId, NodeKind, NodeValues},
};

/// Builds a [`Graph`] node by node.
///
/// Every construction method appends to the graph and hands back a [`Node`] that later nodes may
/// refer to. Handles are tied to the builder that issued them: passing a handle to another builder
/// panics.
///
/// ```
/// use hintgraph_core::{GraphBuilder, NodeValues};
///
/// let mut builder = GraphBuilder::new();
/// let x = builder.init();
/// let x_squared = builder.mul(x, x);
/// let five = builder.constant(5);
/// let x_squared_plus_x = builder.add(x_squared, x);
/// let y = builder.add(x_squared_plus_x, five);
///
/// let graph = builder.build();
/// let values = graph.fill_nodes(&NodeValues::from([(x.id(), 3)])).unwrap();
/// assert_eq!(values[&y.id()], 17);
/// ```
#[derive(Debug)]
pub struct GraphBuilder {
	graph: Graph,
	n_hints: usize,
}

impl Default for GraphBuilder {
	fn default() -> Self {
		Self::new()
	}
}

impl GraphBuilder {
	pub fn new() -> Self {
		Self {
			graph: Graph::new(),
			n_hints: 0,
		}
	}

	/// Adds an input node, whose value has to be supplied on every evaluation.
	pub fn init(&mut self) -> Node {
		self.push(NodeKind::Input)
	}

	pub fn constant(&mut self, value: u32) -> Node {
		self.push(NodeKind::Constant(value))
	}

	/// Adds a node evaluating to `a + b` modulo 2^32.
	pub fn add(&mut self, a: Node, b: Node) -> Node {
		let kind = NodeKind::Add(self.resolve(a), self.resolve(b));
		self.push(kind)
	}

	/// Adds a node evaluating to `a * b` modulo 2^32.
	pub fn mul(&mut self, a: Node, b: Node) -> Node {
		let kind = NodeKind::Mul(self.resolve(a), self.resolve(b));
		self.push(kind)
	}

	/// Adds a node whose value is computed by `compute` rather than by the graph.
	///
	/// This is how operations the graph cannot express, such as division or square roots, are
	/// introduced. `compute` runs once per evaluation, after all of `dependencies` are resolved,
	/// and receives exactly their values. Its result is not checked; use
	/// [`assert_equal`](Self::assert_equal) to constrain it.
	///
	/// `compute` must be a pure function of the values it is given. Reading a node that is not
	/// listed in `dependencies` is not detected and sees no value for that node.
	pub fn hint<F>(&mut self, dependencies: impl IntoIterator<Item = Node>, compute: F) -> Node
	where
		F: Fn(&NodeValues) -> u32 + Send + Sync + 'static,
	{
		let dependencies = dependencies
			.into_iter()
			.map(|node| self.resolve(node))
			.collect();
		let func = HintFn {
			index: self.n_hints,
			func: Box::new(compute),
		};
		self.n_hints += 1;
		self.push(NodeKind::Hint(Hint { dependencies, func }))
	}

	/// Asserts that `a` and `b` evaluate to the same value.
	///
	/// Nothing is checked here; see [`Graph::check_constraints`].
	pub fn assert_equal(&mut self, a: Node, b: Node) {
		let constraint = Constraint {
			left: self.resolve(a),
			right: self.resolve(b),
		};
		self.graph.constraints.push(constraint);
	}

	/// The graph built so far.
	pub const fn graph(&self) -> &Graph {
		&self.graph
	}

	pub fn build(self) -> Graph {
		self.graph
	}

	fn push(&mut self, kind: NodeKind) -> Node {
		let id = self.graph.push_node(kind);
		tracing::trace!(graph = self.graph.id.0, %id, "added node");
		Node {
			graph: self.graph.id,
			id,
		}
	}

	fn resolve(&self, node: Node) -> NodeId {
		assert_eq!(
			node.graph, self.graph.id,
			"node {} belongs to {} and cannot be used in {}",
			node.id, node.graph, self.graph.id
		);
		node.id
	}
}
