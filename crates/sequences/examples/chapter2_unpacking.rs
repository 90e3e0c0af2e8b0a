//! Chapter 2: Unpacking
//!
//! Run with: cargo run -p fluent-sequences --example chapter2_unpacking
//!
//! This example demonstrates:
//! - Parallel assignment from a tuple
//! - Swapping two bindings without a temporary
//! - "first, *rest" and "*init, last" with slice patterns

use fluent_core::CoreError;
use fluent_sequences::tuples::LAX_COORDINATES;
use fluent_sequences::unpacking::{split_first_rest, split_init_last, swapped};

fn main() -> Result<(), CoreError> {
    fluent_core::logging::init()?;

    println!("=== Chapter 2: Unpacking ===\n");

    let (mut latitude, mut longitude) = LAX_COORDINATES;
    println!("{} {}", latitude, longitude);

    (latitude, longitude) = (longitude, latitude);
    println!("{} {}", latitude, longitude);

    println!("swapped back: {:?}", swapped((latitude, longitude)));
    println!();

    let items = [1, 2, 3, 4];
    if let Some((first, rest)) = split_first_rest(&items) {
        println!("first = {}, rest = {:?}", first, rest);
    }
    if let Some((init, last)) = split_init_last(&items) {
        println!("init = {:?}, last = {}", init, last);
    }

    println!("\n=== Chapter 2 (Unpacking) Complete ===");
    Ok(())
}
