// Copyright 2025 Irreducible Inc.

use anyhow::Result;
use clap::Parser;
use hintgraph_core::{GraphBuilder, NodeValues};
use hintgraph_demos::{evaluate_and_report, strategy_or_env, StrategyArg};
use hintgraph_utils::tracing::init_tracing;

/// Evaluates f(x) = x^2 + x + 5.
#[derive(Debug, Parser)]
struct Args {
	#[arg(short, default_value_t = 3)]
	x: u32,
	#[arg(long, value_enum)]
	strategy: Option<StrategyArg>,
}

fn main() -> Result<()> {
	let args = Args::parse();
	init_tracing();

	println!("f(x) = x^2 + x + 5");

	let mut builder = GraphBuilder::new();
	let x = builder.init();
	let x_squared = builder.mul(x, x);
	let five = builder.constant(5);
	let x_squared_plus_x = builder.add(x_squared, x);
	let result = builder.add(x_squared_plus_x, five);
	let graph = builder.build();

	println!("Filling graph with x = {}", args.x);
	evaluate_and_report(
		&graph,
		&NodeValues::from([(x.id(), args.x)]),
		strategy_or_env(args.strategy),
		&[
			("x", x),
			("x^2", x_squared),
			("5", five),
			("x^2 + x", x_squared_plus_x),
			("x^2 + x + 5", result),
		],
	)?;

	Ok(())
}
