// Copyright 2025 Irreducible Inc.

use assert_matches::assert_matches;
use hintgraph_core::{Error, EvaluationStrategy, Graph, GraphBuilder, NodeId, NodeKind, NodeValues};
use proptest::prelude::*;
use rand::{rngs::StdRng, Rng, SeedableRng};

/// Builds a random graph with `n_nodes` nodes. Node 0 is an input if `allow_inputs` is set, a
/// constant otherwise.
fn random_graph(rng: &mut impl Rng, n_nodes: usize, allow_inputs: bool) -> Graph {
	let mut builder = GraphBuilder::new();
	let mut nodes = vec![if allow_inputs {
		builder.init()
	} else {
		builder.constant(rng.gen())
	}];

	while nodes.len() < n_nodes {
		let a = nodes[rng.gen_range(0..nodes.len())];
		let b = nodes[rng.gen_range(0..nodes.len())];
		let node = match rng.gen_range(0..5) {
			0 if allow_inputs => builder.init(),
			0 | 1 => builder.constant(rng.gen()),
			2 => builder.add(a, b),
			3 => builder.mul(a, b),
			_ => {
				let deps = (0..rng.gen_range(1..4))
					.map(|_| nodes[rng.gen_range(0..nodes.len())])
					.collect::<Vec<_>>();
				let dep_ids = deps.iter().map(|node| node.id()).collect::<Vec<_>>();
				builder.hint(deps, move |values| {
					dep_ids.iter().fold(0x9e37_79b9u32, |acc, id| {
						acc.rotate_left(5) ^ values.get(id).copied().unwrap_or(0)
					})
				})
			}
		};
		nodes.push(node);
	}

	for _ in 0..rng.gen_range(0..4) {
		let a = nodes[rng.gen_range(0..nodes.len())];
		let b = nodes[rng.gen_range(0..nodes.len())];
		builder.assert_equal(a, b);
	}

	builder.build()
}

fn random_inputs(rng: &mut impl Rng, graph: &Graph) -> NodeValues {
	graph.inputs().map(|id| (id, rng.gen())).collect()
}

proptest! {
	#[test]
	fn test_add_wraps(a in any::<u32>(), b in any::<u32>()) {
		let mut builder = GraphBuilder::new();
		let x = builder.init();
		let y = builder.constant(b);
		let sum = builder.add(x, y);
		let product = builder.mul(x, y);

		let values = builder.build().fill_nodes(&NodeValues::from([(x.id(), a)])).unwrap();
		prop_assert_eq!(values[&sum.id()], a.wrapping_add(b));
		prop_assert_eq!(values[&product.id()], a.wrapping_mul(b));
	}

	#[test]
	fn test_strategies_agree(seed in any::<u64>(), n_nodes in 1usize..64) {
		let mut rng = StdRng::seed_from_u64(seed);
		let graph = random_graph(&mut rng, n_nodes, true);
		let inputs = random_inputs(&mut rng, &graph);

		let relaxed = graph.fill_nodes_with(&inputs, EvaluationStrategy::Relaxation).unwrap();
		let sorted = graph.fill_nodes_with(&inputs, EvaluationStrategy::Topological).unwrap();
		prop_assert_eq!(relaxed.len(), graph.len());
		prop_assert_eq!(&relaxed, &sorted);
		prop_assert_eq!(
			graph.check_constraints(&relaxed),
			graph.constraint_violations(&sorted).is_empty()
		);
	}

	#[test]
	fn test_graphs_without_inputs_are_deterministic(seed in any::<u64>(), n_nodes in 1usize..64) {
		let mut rng = StdRng::seed_from_u64(seed);
		let graph = random_graph(&mut rng, n_nodes, false);
		prop_assert_eq!(graph.inputs().count(), 0);

		let first = graph.fill_nodes(&NodeValues::new()).unwrap();
		let second = graph.fill_nodes(&NodeValues::new()).unwrap();
		prop_assert_eq!(first, second);
	}

	#[test]
	fn test_missing_input_iff_input_absent(seed in any::<u64>(), n_nodes in 1usize..64) {
		let mut rng = StdRng::seed_from_u64(seed);
		let graph = random_graph(&mut rng, n_nodes, true);
		let mut inputs = random_inputs(&mut rng, &graph);

		let mut removed = graph
			.inputs()
			.filter(|_| rng.gen_bool(0.3))
			.collect::<Vec<_>>();
		for id in &removed {
			inputs.remove(id);
		}
		removed.sort();

		let result = graph.fill_nodes(&inputs);
		if removed.is_empty() {
			prop_assert!(result.is_ok());
		} else {
			assert_matches!(result, Err(Error::MissingInput { ids }) if ids == removed);
		}
	}
}

#[test]
fn test_random_graph_shape() {
	let mut rng = StdRng::seed_from_u64(0);
	let graph = random_graph(&mut rng, 200, true);
	assert_eq!(graph.len(), 200);
	for (id, kind) in graph.nodes() {
		for dep in kind.dependencies() {
			assert!(dep < id);
		}
		if let NodeKind::Hint(hint) = kind {
			assert!(!hint.dependencies().is_empty());
		}
	}
	assert!(graph.kind(NodeId::new(0)).is_some_and(NodeKind::is_input));
}
