//! Chapter 2: Conforming to the Sequence Interface
//!
//! Run with: cargo run -p fluent-sequences --example chapter2_virtual_subclassing
//!
//! This example demonstrates:
//! - Built-in collections that conform to `Sequence` / `MutableSequence`
//! - A custom type becoming a `Sequence` through a single `impl`
//! - A look-alike type that never declared it, and does not conform
//! - Using the custom type like any other sequence

use std::collections::HashSet;

use fluent_sequences::{
    conforms_to, MutableSequence, MySequence, Sequence, SequenceError, UnregisteredSequence,
};

fn main() -> Result<(), SequenceError> {
    if let Err(err) = fluent_core::logging::init() {
        eprintln!("logging disabled: {}", err);
    }

    println!("=== Chapter 2: Sequence Interfaces ===\n");

    // -------------------------------------------------------------------------
    // 1. Built-in conformance
    // -------------------------------------------------------------------------
    println!("1. Built-in Conformance");
    println!("-----------------------");

    println!(
        "Is an array a sequence? {}",
        conforms_to!([i32; 3]: Sequence)
    );
    println!(
        "Is a Vec a mutable sequence? {}",
        conforms_to!(Vec<i32>: MutableSequence)
    );
    println!("Is a str a sequence? {}", conforms_to!(str: Sequence));
    println!(
        "Is a str a mutable sequence? {}",
        conforms_to!(str: MutableSequence)
    );
    println!(
        "Is a HashSet a sequence? {}",
        conforms_to!(HashSet<i32>: Sequence)
    );
    println!();

    // -------------------------------------------------------------------------
    // 2. Registration by impl
    // -------------------------------------------------------------------------
    println!("2. Registration by impl");
    println!("-----------------------");

    println!(
        "Is MySequence a sequence? {}",
        conforms_to!(MySequence<i32>: Sequence)
    );
    let look_alike = UnregisteredSequence::new(vec![1, 2, 3]);
    println!(
        "Is UnregisteredSequence (len {}, get(0) = {:?}) a sequence? {}",
        look_alike.len(),
        look_alike.get(0),
        conforms_to!(UnregisteredSequence<i32>: Sequence)
    );
    println!();

    // -------------------------------------------------------------------------
    // 3. Using it like a real sequence
    // -------------------------------------------------------------------------
    println!("3. Using MySequence");
    println!("-------------------");

    let my_seq = MySequence::new(vec![1, 2, 3]);
    println!("The data inside my_seq object is: ");
    for item in &my_seq {
        println!("{}", item);
    }
    println!("2 in my_seq? {}", my_seq.contains(&2));
    println!("index of 3: {:?}", my_seq.index_of(&3));
    println!("reversed: {:?}", my_seq.reversed().collect::<Vec<_>>());
    println!();

    // -------------------------------------------------------------------------
    // 4. Mutable sequences
    // -------------------------------------------------------------------------
    println!("4. Mutable Sequences");
    println!("--------------------");

    let mut v: Vec<i32> = my_seq.items().collect();
    v.push_item(4)?;
    v.reverse_items()?;
    v.remove_value(&2)?;
    println!("after push 4, reverse, remove 2: {:?}", v);
    match v.remove_value(&99) {
        Ok(()) => println!("removed 99"),
        Err(err) => println!("remove 99: {}", err),
    }

    println!("\n=== Chapter 2 (Sequence Interfaces) Complete ===");
    Ok(())
}
