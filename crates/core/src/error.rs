// Copyright 2025 Irreducible Inc.

use itertools::Itertools;

use crate::node::NodeId;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
	#[error("missing values for input nodes {}", .ids.iter().join(", "))]
	MissingInput { ids: Vec<NodeId> },
	#[error("unable to resolve nodes {}", .ids.iter().join(", "))]
	Unresolvable { ids: Vec<NodeId> },
}
