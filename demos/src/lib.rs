// Copyright 2025 Irreducible Inc.

//! Shared plumbing for the example programs.

use anyhow::Result;
use clap::ValueEnum;
use hintgraph_core::{EvaluationStrategy, Graph, Node, NodeValues};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum StrategyArg {
	Relaxation,
	Topological,
}

impl From<StrategyArg> for EvaluationStrategy {
	fn from(value: StrategyArg) -> Self {
		match value {
			StrategyArg::Relaxation => Self::Relaxation,
			StrategyArg::Topological => Self::Topological,
		}
	}
}

/// The strategy given on the command line, falling back to the environment.
pub fn strategy_or_env(arg: Option<StrategyArg>) -> EvaluationStrategy {
	arg.map_or_else(EvaluationStrategy::from_env, Into::into)
}

/// Evaluates `graph` and prints the value of every named node and the constraint status.
pub fn evaluate_and_report(
	graph: &Graph,
	inputs: &NodeValues,
	strategy: EvaluationStrategy,
	named: &[(&str, Node)],
) -> Result<NodeValues> {
	tracing::debug!(?strategy, "evaluating\n{graph}");
	let values = graph.fill_nodes_with(inputs, strategy)?;

	println!("Computed values:");
	for (name, node) in named {
		println!("  {name} = {}", values[&node.id()]);
	}

	let violations = graph.constraint_violations(&values);
	println!("Constraints satisfied: {}", violations.is_empty());
	for violation in &violations {
		println!("  {violation}");
	}

	Ok(values)
}
