// Copyright 2025 Irreducible Inc.

use anyhow::Result;
use clap::Parser;
use hintgraph_core::{GraphBuilder, NodeValues};
use hintgraph_demos::{evaluate_and_report, strategy_or_env, StrategyArg};
use hintgraph_utils::tracing::init_tracing;

/// Evaluates f(x) = sqrt(x + 7), with the square root supplied by a hint.
#[derive(Debug, Parser)]
struct Args {
	#[arg(short, default_value_t = 2)]
	x: u32,
	#[arg(long, value_enum)]
	strategy: Option<StrategyArg>,
}

fn main() -> Result<()> {
	let args = Args::parse();
	init_tracing();

	println!("f(x) = sqrt(x + 7)");

	let mut builder = GraphBuilder::new();
	let x = builder.init();
	let seven = builder.constant(7);
	let x_plus_seven = builder.add(x, seven);
	let x_plus_seven_id = x_plus_seven.id();
	let root = builder.hint([x_plus_seven], move |values| {
		(values[&x_plus_seven_id] as f64).sqrt() as u32
	});
	let root_squared = builder.mul(root, root);
	builder.assert_equal(root_squared, x_plus_seven);
	let graph = builder.build();

	println!("Filling graph with x = {}", args.x);
	evaluate_and_report(
		&graph,
		&NodeValues::from([(x.id(), args.x)]),
		strategy_or_env(args.strategy),
		&[
			("x", x),
			("7", seven),
			("x + 7", x_plus_seven),
			("sqrt(x + 7)", root),
			("sqrt(x + 7)^2", root_squared),
		],
	)?;

	Ok(())
}
