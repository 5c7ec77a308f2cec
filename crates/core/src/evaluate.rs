// Copyright 2025 Irreducible Inc.

use hintgraph_utils::{bail, ensure, env::boolean_env_flag_set, graph::topological_sort};
use tracing::instrument;

use crate::{
	error::Error,
	graph::Graph,
	node::{NodeId, NodeKind, NodeValues},
};

/// Environment flag selecting [`EvaluationStrategy::Relaxation`] in
/// [`EvaluationStrategy::from_env`].
pub const RELAXATION_ENV_FLAG: &str = "HINTGRAPH_RELAXATION";

/// How [`Graph::fill_nodes_with`] orders node resolution.
///
/// Both strategies produce the same values and the same errors for every graph.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum EvaluationStrategy {
	/// Scan all unresolved nodes repeatedly until a pass makes no progress. Quadratic in the
	/// depth of the graph.
	Relaxation,
	/// Resolve every node once, in a topological order of the dependency graph.
	#[default]
	Topological,
}

impl EvaluationStrategy {
	/// Reads the strategy from the environment, see [`RELAXATION_ENV_FLAG`].
	pub fn from_env() -> Self {
		if boolean_env_flag_set(RELAXATION_ENV_FLAG) {
			Self::Relaxation
		} else {
			Self::Topological
		}
	}
}

impl Graph {
	/// Computes the value of every node, given the values of the input nodes.
	///
	/// `inputs` must contain a value for every input node. Entries for other nodes are ignored.
	/// The returned map holds a value for every node of the graph and nothing else.
	///
	/// ## Throws
	///
	/// * [`Error::MissingInput`] if any input node has no value in `inputs`
	/// * [`Error::Unresolvable`] if some node can never be resolved
	pub fn fill_nodes(&self, inputs: &NodeValues) -> Result<NodeValues, Error> {
		self.fill_nodes_with(inputs, EvaluationStrategy::default())
	}

	/// Same as [`fill_nodes`](Self::fill_nodes), with an explicit evaluation strategy.
	#[instrument("Graph::fill_nodes", skip_all, fields(graph = self.id.0, nodes = self.len()), level = "debug")]
	pub fn fill_nodes_with(
		&self,
		inputs: &NodeValues,
		strategy: EvaluationStrategy,
	) -> Result<NodeValues, Error> {
		let missing = self
			.inputs()
			.filter(|id| !inputs.contains_key(id))
			.collect::<Vec<_>>();
		ensure!(missing.is_empty(), Error::MissingInput { ids: missing });

		let mut values = self
			.inputs()
			.filter_map(|id| inputs.get(&id).map(|value| (id, *value)))
			.collect::<NodeValues>();

		let unresolved = match strategy {
			EvaluationStrategy::Relaxation => self.relax(&mut values),
			EvaluationStrategy::Topological => self.resolve_in_order(&mut values),
		};

		if !unresolved.is_empty() {
			tracing::debug!(unresolved = unresolved.len(), "evaluation stuck");
			bail!(Error::Unresolvable { ids: unresolved });
		}

		Ok(values)
	}

	/// Returns the nodes left without a value, ascending.
	fn relax(&self, values: &mut NodeValues) -> Vec<NodeId> {
		let mut passes = 0;
		loop {
			passes += 1;
			let mut progress = false;
			for (id, kind) in self.nodes() {
				if values.contains_key(&id) {
					continue;
				}
				if let Some(value) = try_resolve(kind, values) {
					tracing::trace!(%id, value, "resolved");
					values.insert(id, value);
					progress = true;
				}
			}
			if !progress {
				break;
			}
		}
		tracing::debug!(passes, "relaxation finished");

		self.nodes()
			.map(|(id, _)| id)
			.filter(|id| !values.contains_key(id))
			.collect()
	}

	/// Returns the nodes that cannot be ordered, ascending.
	///
	/// Every ordered node resolves: its dependencies come before it, and inputs are already seeded.
	fn resolve_in_order(&self, values: &mut NodeValues) -> Vec<NodeId> {
		let order = topological_sort(self.len(), |index| {
			self.nodes[index]
				.dependencies()
				.into_iter()
				.map(NodeId::index)
		});

		for index in order.sorted {
			let id = NodeId::new(index);
			if values.contains_key(&id) {
				continue;
			}
			if let Some(value) = try_resolve(&self.nodes[index], values) {
				tracing::trace!(%id, value, "resolved");
				values.insert(id, value);
			}
		}

		order.remaining.into_iter().map(NodeId::new).collect()
	}
}

/// The value of a node, if all of its prerequisites are in `values`.
///
/// Input nodes never resolve here; their values are seeded from the caller's inputs.
fn try_resolve(kind: &NodeKind, values: &NodeValues) -> Option<u32> {
	match kind {
		NodeKind::Input => None,
		NodeKind::Constant(value) => Some(*value),
		NodeKind::Add(a, b) => Some(values.get(a)?.wrapping_add(*values.get(b)?)),
		NodeKind::Mul(a, b) => Some(values.get(a)?.wrapping_mul(*values.get(b)?)),
		NodeKind::Hint(hint) => {
			let args = hint
				.dependencies()
				.iter()
				.map(|dep| values.get(dep).map(|value| (*dep, *value)))
				.collect::<Option<NodeValues>>()?;
			Some(hint.compute(&args))
		}
	}
}
