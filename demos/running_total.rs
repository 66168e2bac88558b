//! Running Total
//!
//! This example folds a stream of readings into a running total, ignoring
//! negative readings and stopping after a fixed number of samples.
//!
//! Run with: cargo run --example running_total

use stepper::{compose, filter, fold, lift, take, Compiler, CompilerConfig};

type Reading = (i64, i64);

fn main() {
    env_logger::init();

    let total = compose(
        take::<Reading>(8),
        compose(
            filter(|(_, reading): &Reading| *reading >= 0),
            lift(|(acc, reading): Reading| (acc + reading, reading)),
        ),
    );

    let readings = vec![4, -1, 7, 3, -9, 2, 5, 1, 100, 100];

    let compiler = Compiler::new(CompilerConfig::default());
    let compiled = match compiler.normalize(&total) {
        Ok(compiled) => compiled,
        Err(err) => {
            eprintln!("{err}");
            return;
        }
    };

    let sum = fold(compiled, 0, readings);
    println!("Total of non-negative readings among the first 8: {sum}");
}
