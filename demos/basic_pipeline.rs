//! Basic Pipeline
//!
//! This example builds a small pipeline, normalizes it and steps it by hand.
//!
//! Key concepts:
//! - Automatons are immutable: every step returns the next automaton
//! - The compiler fuses lifts and moves windows ahead of transforms
//! - Set `RUST_LOG=stepper=trace` to watch each rewrite rule fire
//!
//! Run with: cargo run --example basic_pipeline

use stepper::{filter, lift, normalize, pipeline, skip, take, Step};

fn main() {
    env_logger::init();

    let squares_of_odds = pipeline![
        lift(|x: u64| x + 1),
        lift(|x: u64| x * x),
        skip(2),
        filter(|x: &u64| x % 2 == 1),
        take(3),
    ];

    println!("Before: {}", squares_of_odds.shape().to_json().unwrap_or_default());

    let compiled = match normalize(&squares_of_odds) {
        Ok(compiled) => compiled,
        Err(err) => {
            eprintln!("{err}");
            return;
        }
    };
    println!("After:  {}", compiled.shape().to_json().unwrap_or_default());

    let mut current = compiled;
    for input in 0u64.. {
        match current.step(input) {
            Step::Terminated => {
                println!("{input:>3} -> terminated");
                break;
            }
            Step::Skipped { next } => {
                println!("{input:>3} -> skipped");
                current = next;
            }
            Step::Produced { value, next } => {
                println!("{input:>3} -> {value}");
                current = next;
            }
        }
    }
}
