//! Chapter 2: Comprehensions vs Map/Filter
//!
//! Run with: cargo run -p fluent-sequences --example chapter2_comprehensions
//!
//! This example demonstrates:
//! - The same filter written as a comprehension and as map + filter
//! - Timing the four spellings against each other
//! - Cartesian products with nested loops and with a comprehension
//! - Generator expressions as lazy iterators
//!
//! Timing can be shortened with FLUENT_TIMING_NUMBER / FLUENT_TIMING_REPEAT.

use fluent_core::{Clock, CoreError, TimingConfig};
use fluent_sequences::comprehension::{
    beyond_ascii, beyond_ascii_map_filter, clock_strategies, doubled_above, evens, squares,
    tshirt_labels, tshirts, tshirts_nested_loops, SYMBOLS,
};

fn main() -> Result<(), CoreError> {
    fluent_core::logging::init()?;

    println!("=== Chapter 2: Comprehensions ===\n");

    // -------------------------------------------------------------------------
    // 1. Comprehension vs map/filter
    // -------------------------------------------------------------------------
    println!("1. Comprehension vs Map/Filter");
    println!("------------------------------");

    println!("Using List Comp {:?}", beyond_ascii(SYMBOLS));
    println!("Using List Map Filter {:?}", beyond_ascii_map_filter(SYMBOLS));
    println!();

    // -------------------------------------------------------------------------
    // 2. Speed test
    // -------------------------------------------------------------------------
    println!("2. Speed Test");
    println!("-------------");

    let config = TimingConfig::from_env()?;
    println!("({} runs x {} repeats, seconds)", config.number, config.repeat);
    let clock = Clock::new(config)?;
    for timing in clock_strategies(&clock, SYMBOLS) {
        println!("{}", timing);
    }
    println!();

    // -------------------------------------------------------------------------
    // 3. Cartesian products
    // -------------------------------------------------------------------------
    println!("3. Cartesian Products");
    println!("---------------------");

    let colors = ["Black", "White"];
    let sizes = ["M", "S", "L"];

    println!(
        "T-Shirts using the nested for loop:  {:?}",
        tshirts_nested_loops(&colors, &sizes)
    );
    println!("T-Shirts using List Comp.:  {:?}", tshirts(&colors, &sizes));
    println!();

    // -------------------------------------------------------------------------
    // 4. Generator expressions
    // -------------------------------------------------------------------------
    println!("4. Generator Expressions");
    println!("------------------------");

    for tshirt in tshirt_labels(&colors, &sizes) {
        println!("{}", tshirt);
    }
    println!();

    println!("squares below 10: {:?}", squares(10).collect::<Vec<_>>());
    println!("evens below 20:   {:?}", evens(20).collect::<Vec<_>>());
    println!(
        "doubled above 10: {:?}",
        doubled_above(&[1, 4, 5, 6, 9], 10)
    );

    println!("\n=== Chapter 2 (Comprehensions) Complete ===");
    Ok(())
}
