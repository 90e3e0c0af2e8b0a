//! Chapter 2: Tuples
//!
//! Run with: cargo run -p fluent-sequences --example chapter2_tuples
//!
//! This example demonstrates:
//! - Tuples as records, unpacked by position
//! - Tuples as immutable lists, and why that immutability is shallow
//! - Deciding at runtime whether a tuple is hashable

use fluent_core::CoreError;
use fluent_sequences::tuples::{
    countries, format_pair, passport_lines, CityRecord, LAX_COORDINATES, TOKYO, TRAVELER_IDS,
};
use fluent_sequences::{is_fixed, Holder, Shared, Value};

fn main() -> Result<(), CoreError> {
    fluent_core::logging::init()?;

    println!("=== Chapter 2: Tuples ===\n");

    // -------------------------------------------------------------------------
    // 1. Tuples as records
    // -------------------------------------------------------------------------
    println!("1. Tuples as Records");
    println!("--------------------");

    let (latitude, longitude) = LAX_COORDINATES;
    println!("LAX: {}, {}", latitude, longitude);

    let (city, year, pop, chg, area) = TOKYO;
    println!("{} {} {} {} {}", city, year, pop, chg, area);
    println!("{:?}", CityRecord::from(TOKYO));
    println!();

    for line in passport_lines(&TRAVELER_IDS) {
        println!("{}", line);
    }
    for country in countries(&TRAVELER_IDS) {
        println!("{}", country);
    }
    println!();

    // -------------------------------------------------------------------------
    // 2. Tuples as immutable lists
    // -------------------------------------------------------------------------
    println!("2. Shallow Immutability");
    println!("-----------------------");

    let a = 10;
    let b = Shared::new(Holder::new(9));
    let t = (a, b.clone());

    println!("{}", format_pair(&t));
    t.1.borrow_mut().set_value(5);
    println!("{}", format_pair(&t));
    println!("t.1 and b are the same object? {}", t.1.ptr_eq(&b));
    println!();

    // -------------------------------------------------------------------------
    // 3. Hashability
    // -------------------------------------------------------------------------
    println!("3. Hashability");
    println!("--------------");

    let fixed_tuple = Value::tuple([
        Value::Int(10),
        Value::from("s"),
        Value::tuple([Value::Int(10), Value::Int(12)]),
    ]);
    let mutable_content_tuple = Value::tuple([
        Value::Int(10),
        Value::from("s"),
        Value::list([Value::Int(4), Value::Int(5)]),
    ]);

    println!(
        "Is fixed tuple {} hashable? {}",
        fixed_tuple,
        is_fixed(&fixed_tuple)
    );
    println!(
        "Is mutable content tuple {} hashable? {}",
        mutable_content_tuple,
        is_fixed(&mutable_content_tuple)
    );
    if let Err(err) = mutable_content_tuple.hash_value() {
        println!("  hash() fails with: {}", err);
    }

    println!("\n=== Chapter 2 (Tuples) Complete ===");
    Ok(())
}
