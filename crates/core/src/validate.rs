// Copyright 2025 Irreducible Inc.

use tracing::instrument;

use crate::{
	constraint::{Constraint, ConstraintViolation},
	graph::Graph,
	node::NodeValues,
};

impl Graph {
	/// Returns whether every asserted equality holds in `values`.
	///
	/// A constraint on a node without a value in `values` does not hold. Stops at the first
	/// violation; use [`constraint_violations`](Self::constraint_violations) to list all of them.
	#[instrument("Graph::check_constraints", skip_all, fields(graph = self.id.0), level = "debug")]
	pub fn check_constraints(&self, values: &NodeValues) -> bool {
		self.constraints
			.iter()
			.enumerate()
			.all(|(index, constraint)| match check(index, constraint, values) {
				Some(violation) => {
					tracing::debug!(%violation);
					false
				}
				None => true,
			})
	}

	/// All constraints that do not hold in `values`, in the order they were asserted.
	#[instrument("Graph::constraint_violations", skip_all, fields(graph = self.id.0), level = "debug")]
	pub fn constraint_violations(&self, values: &NodeValues) -> Vec<ConstraintViolation> {
		let violations = self
			.constraints
			.iter()
			.enumerate()
			.filter_map(|(index, constraint)| check(index, constraint, values))
			.collect::<Vec<_>>();
		tracing::debug!(
			violated = violations.len(),
			total = self.constraints.len(),
			"checked constraints"
		);
		violations
	}
}

fn check(index: usize, constraint: &Constraint, values: &NodeValues) -> Option<ConstraintViolation> {
	let left_value = values.get(&constraint.left).copied();
	let right_value = values.get(&constraint.right).copied();
	match (left_value, right_value) {
		(Some(left), Some(right)) if left == right => None,
		_ => Some(ConstraintViolation {
			index,
			constraint: *constraint,
			left_value,
			right_value,
		}),
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::{builder::GraphBuilder, node::NodeId};

	#[test]
	fn test_no_constraints_always_hold() {
		let mut builder = GraphBuilder::new();
		let _ = builder.init();
		let graph = builder.build();

		assert!(graph.check_constraints(&NodeValues::new()));
		assert!(graph.constraint_violations(&NodeValues::new()).is_empty());
	}

	#[test]
	fn test_violations_are_collected_in_order() {
		let mut builder = GraphBuilder::new();
		let a = builder.init();
		let b = builder.init();
		let c = builder.init();
		builder.assert_equal(a, b);
		builder.assert_equal(b, c);
		builder.assert_equal(a, c);
		let graph = builder.build();

		let values = NodeValues::from([(a.id(), 1), (b.id(), 1), (c.id(), 2)]);
		assert!(!graph.check_constraints(&values));
		let violations = graph.constraint_violations(&values);
		assert_eq!(violations.iter().map(|v| v.index).collect::<Vec<_>>(), vec![1, 2]);
		assert_eq!(violations[0].left_value, Some(1));
		assert_eq!(violations[0].right_value, Some(2));

		let values = NodeValues::from([(a.id(), 2), (b.id(), 2), (c.id(), 2)]);
		assert!(graph.check_constraints(&values));
	}

	#[test]
	fn test_missing_value_is_a_violation() {
		let mut builder = GraphBuilder::new();
		let a = builder.init();
		let b = builder.constant(5);
		builder.assert_equal(a, b);
		let graph = builder.build();

		let values = NodeValues::from([(b.id(), 5), (NodeId::new(7), 5)]);
		assert!(!graph.check_constraints(&values));
		assert_eq!(
			graph.constraint_violations(&values),
			vec![ConstraintViolation {
				index: 0,
				constraint: Constraint {
					left: a.id(),
					right: b.id(),
				},
				left_value: None,
				right_value: Some(5),
			}]
		);
	}

	#[test]
	fn test_self_constraint_holds_when_present() {
		let mut builder = GraphBuilder::new();
		let a = builder.init();
		builder.assert_equal(a, a);
		let graph = builder.build();

		assert!(graph.check_constraints(&NodeValues::from([(a.id(), 9)])));
		assert!(!graph.check_constraints(&NodeValues::new()));
	}
}
