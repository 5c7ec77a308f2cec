// Copyright 2025 Irreducible Inc.

use anyhow::Result;
use clap::Parser;
use hintgraph_core::{GraphBuilder, NodeValues};
use hintgraph_demos::{evaluate_and_report, strategy_or_env, StrategyArg};
use hintgraph_utils::tracing::init_tracing;

/// Evaluates f(x, y) = x * y + x / y, with the division supplied by a hint.
#[derive(Debug, Parser)]
struct Args {
	#[arg(short, default_value_t = 10)]
	x: u32,
	#[arg(short, default_value_t = 2)]
	y: u32,
	#[arg(long, value_enum)]
	strategy: Option<StrategyArg>,
}

fn main() -> Result<()> {
	let args = Args::parse();
	init_tracing();

	println!("f(x, y) = x * y + x / y");

	let mut builder = GraphBuilder::new();
	let x = builder.init();
	let y = builder.init();
	let x_times_y = builder.mul(x, y);
	let (x_id, y_id) = (x.id(), y.id());
	// Division by zero yields 0, which the constraint below then rejects unless x is 0.
	let x_div_y = builder.hint([x, y], move |values| {
		values[&x_id].checked_div(values[&y_id]).unwrap_or(0)
	});
	let x_div_y_times_y = builder.mul(x_div_y, y);
	builder.assert_equal(x_div_y_times_y, x);
	let result = builder.add(x_times_y, x_div_y);
	let graph = builder.build();

	println!("Filling graph with x = {}, y = {}", args.x, args.y);
	evaluate_and_report(
		&graph,
		&NodeValues::from([(x.id(), args.x), (y.id(), args.y)]),
		strategy_or_env(args.strategy),
		&[
			("x", x),
			("y", y),
			("x * y", x_times_y),
			("x / y", x_div_y),
			("(x / y) * y", x_div_y_times_y),
			("x * y + x / y", result),
		],
	)?;

	Ok(())
}
