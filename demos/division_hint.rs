// Copyright 2025 Irreducible Inc.

use anyhow::Result;
use clap::Parser;
use hintgraph_core::{GraphBuilder, NodeValues};
use hintgraph_demos::{evaluate_and_report, strategy_or_env, StrategyArg};
use hintgraph_utils::tracing::init_tracing;

/// Evaluates f(a) = (a + 1) / 8, with the division supplied by a hint.
///
/// The hint always produces a value. Only the constraint c * 8 == a + 1 shows whether the
/// division was exact.
#[derive(Debug, Parser)]
struct Args {
	#[arg(short, default_value_t = 15)]
	a: u32,
	#[arg(long, value_enum)]
	strategy: Option<StrategyArg>,
}

fn main() -> Result<()> {
	let args = Args::parse();
	init_tracing();

	println!("f(a) = (a + 1) / 8");

	let mut builder = GraphBuilder::new();
	let a = builder.init();
	let one = builder.constant(1);
	let b = builder.add(a, one);
	let eight = builder.constant(8);
	let b_id = b.id();
	let c = builder.hint([b], move |values| values[&b_id] / 8);
	let c_times_8 = builder.mul(c, eight);
	builder.assert_equal(c_times_8, b);
	let graph = builder.build();

	println!("Filling graph with a = {}", args.a);
	evaluate_and_report(
		&graph,
		&NodeValues::from([(a.id(), args.a)]),
		strategy_or_env(args.strategy),
		&[
			("a", a),
			("1", one),
			("a + 1", b),
			("8", eight),
			("(a + 1) / 8", c),
			("((a + 1) / 8) * 8", c_times_8),
		],
	)?;

	Ok(())
}
