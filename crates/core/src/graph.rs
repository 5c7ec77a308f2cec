// Copyright 2025 Irreducible Inc.

use std::{
	fmt::{self, Display},
	sync::atomic::{AtomicUsize, Ordering},
};

use crate::{
	constraint::Constraint,
	node::{GraphId, NodeId, NodeKind},
};

static NEXT_GRAPH_ID: AtomicUsize = AtomicUsize::new(0);

/// An arithmetic graph over `u32` together with the equality constraints asserted on it.
///
/// Nodes are stored in creation order, so the node with ID `i` lives at index `i` and only
/// depends on nodes with smaller IDs. A `Graph` is never modified by evaluation, and it is
/// `Sync`, so any number of evaluations may share it.
#[derive(Debug)]
pub struct Graph {
	pub(crate) id: GraphId,
	pub(crate) nodes: Vec<NodeKind>,
	pub(crate) constraints: Vec<Constraint>,
}

impl Graph {
	pub(crate) fn new() -> Self {
		Self {
			id: GraphId(NEXT_GRAPH_ID.fetch_add(1, Ordering::Relaxed)),
			nodes: Vec::new(),
			constraints: Vec::new(),
		}
	}

	pub const fn id(&self) -> GraphId {
		self.id
	}

	/// The number of nodes.
	pub fn len(&self) -> usize {
		self.nodes.len()
	}

	pub fn is_empty(&self) -> bool {
		self.nodes.is_empty()
	}

	pub fn kind(&self, id: NodeId) -> Option<&NodeKind> {
		self.nodes.get(id.index())
	}

	pub fn nodes(&self) -> impl Iterator<Item = (NodeId, &NodeKind)> + '_ {
		self.nodes
			.iter()
			.enumerate()
			.map(|(index, kind)| (NodeId::new(index), kind))
	}

	/// IDs of the input nodes, ascending.
	pub fn inputs(&self) -> impl Iterator<Item = NodeId> + '_ {
		self.nodes()
			.filter(|(_, kind)| kind.is_input())
			.map(|(id, _)| id)
	}

	pub fn constraints(&self) -> &[Constraint] {
		&self.constraints
	}

	pub(crate) fn push_node(&mut self, kind: NodeKind) -> NodeId {
		let id = NodeId::new(self.nodes.len());
		self.nodes.push(kind);
		id
	}
}

impl Display for Graph {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		writeln!(f, "Graph {{")?;
		for (id, kind) in self.nodes() {
			writeln!(f, "    {id} = {kind}")?;
		}
		for constraint in &self.constraints {
			writeln!(f, "    {constraint}")?;
		}
		write!(f, "}}")
	}
}
