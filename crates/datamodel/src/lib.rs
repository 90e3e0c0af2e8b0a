//! # Datamodel - Chapter 1
//!
//! How user types join in with the language's own syntax. Python does this
//! with special methods; Rust does it with the `std::ops` and `std::fmt`
//! traits:
//!
//! - **Vector**: `+`, `*` from both sides, magnitude and truthiness
//! - **Labeled**: a hand-written `Display` in place of the derived `Debug`
//!
//! ## Example
//!
//! ```rust
//! use fluent_datamodel::Vector;
//!
//! let v: Vector<i32> = Vector::new(1, 2);
//! assert_eq!((5 * v * 5).to_string(), "Vector(25, 50)");
//! assert_eq!(Vector::new(3, 4).magnitude(), 5.0);
//! ```

pub mod labeled;
pub mod vector;

pub use labeled::Labeled;
pub use vector::{Component, Vector};
