//! Chapter 1: The Data Model - A Euclidean Vector
//!
//! Run with: cargo run -p fluent-datamodel --example chapter1_vector
//!
//! This example demonstrates:
//! - Operator traits standing in for special methods
//! - Scalar multiplication from the left and from the right
//! - Magnitude and truthiness
//! - A custom representation via `Display`

use fluent_core::CoreError;
use fluent_datamodel::{Labeled, Vector};

fn main() -> Result<(), CoreError> {
    fluent_core::logging::init()?;

    println!("=== Chapter 1: The Data Model ===\n");

    // -------------------------------------------------------------------------
    // 1. Scaling from both sides
    // -------------------------------------------------------------------------
    println!("1. Scalar Multiplication");
    println!("------------------------");

    let v1: Vector<i32> = Vector::new(1, 2);
    let v2: Vector<i32> = Vector::new(1, 2);
    println!("v1 = {}", v1);
    println!("5 * v1 * 5 = {}", 5 * v1 * 5);
    println!("v1 * 3 == 3 * v1? {}", v1 * 3 == 3 * v1);
    println!();

    // -------------------------------------------------------------------------
    // 2. Addition
    // -------------------------------------------------------------------------
    println!("2. Addition");
    println!("-----------");

    println!("v1 + v2 = {}", v1 + v2);
    let total: Vector<i32> = [v1, v2, Vector::new(3, 4)].into_iter().sum();
    println!("sum of [v1, v2, Vector(3, 4)] = {}", total);
    println!();

    // -------------------------------------------------------------------------
    // 3. Magnitude and truthiness
    // -------------------------------------------------------------------------
    println!("3. Magnitude and Truthiness");
    println!("---------------------------");

    let v3 = Vector::new(3.0, 4.0);
    println!("abs({}) = {}", v3, v3.magnitude());
    println!("bool({}) = {}", v3, v3.is_truthy());
    let origin: Vector<f64> = Vector::default();
    println!("bool({}) = {}", origin, origin.is_truthy());
    println!();

    // -------------------------------------------------------------------------
    // 4. Custom representation
    // -------------------------------------------------------------------------
    println!("4. Custom Representation");
    println!("------------------------");

    println!("{}", Labeled::new(25));

    println!("\n=== Chapter 1 Complete ===");
    Ok(())
}
