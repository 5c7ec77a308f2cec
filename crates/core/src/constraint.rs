// Copyright 2025 Irreducible Inc.

use std::fmt::{self, Display};

use crate::node::NodeId;

/// Asserts that two nodes evaluate to the same value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Constraint {
	pub left: NodeId,
	pub right: NodeId,
}

impl Display for Constraint {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "assert {} == {}", self.left, self.right)
	}
}

/// A constraint that does not hold for a given assignment.
///
/// A side is `None` when the assignment has no value for that node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConstraintViolation {
	/// Position of the constraint in the order it was asserted.
	pub index: usize,
	pub constraint: Constraint,
	pub left_value: Option<u32>,
	pub right_value: Option<u32>,
}

impl Display for ConstraintViolation {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		fn value(value: Option<u32>) -> String {
			value.map_or_else(|| "<missing>".to_string(), |v| v.to_string())
		}

		write!(
			f,
			"constraint {} ({}) violated: {} != {}",
			self.index,
			self.constraint,
			value(self.left_value),
			value(self.right_value)
		)
	}
}
