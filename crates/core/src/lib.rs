// Copyright 2025 Irreducible Inc.

//! Arithmetic graphs over `u32` with hints and equality constraints.
//!
//! A [`GraphBuilder`] records input, constant, addition and multiplication nodes, as well as hint
//! nodes whose values are computed by arbitrary closures. [`Graph::fill_nodes`] resolves the value
//! of every node given the inputs, and [`Graph::check_constraints`] verifies the equalities
//! asserted with [`GraphBuilder::assert_equal`].
//!
//! Hints are how operations without a node kind of their own, like division, enter a graph: the
//! quotient is computed outside and then constrained by multiplication. Hint outputs are never
//! checked during evaluation, only the constraints expose a wrong hint.

pub mod builder;
pub mod constraint;
pub mod error;
pub mod evaluate;
pub mod graph;
pub mod node;
pub mod validate;

pub use builder::GraphBuilder;
pub use constraint::{Constraint, ConstraintViolation};
pub use error::Error;
pub use evaluate::EvaluationStrategy;
pub use graph::Graph;
pub use node::{GraphId, Hint, Node, NodeId, NodeKind, NodeValues};
