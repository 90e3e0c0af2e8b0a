//! # Sequences - Chapter 2
//!
//! The sequence toolkit, one module per idea:
//!
//! - **Comprehensions**: iterator chains vs explicit map/filter, and lazy
//!   "generator" iterators
//! - **Tuples**: positional records, shallow immutability
//! - **Values**: runtime hashability of dynamic tuples
//! - **Unpacking**: destructuring, swaps, slice patterns
//! - **Sequence**: the abstract sequence interface and what it takes to
//!   conform to it
//!
//! ## Example: Same Result, Two Spellings
//!
//! ```rust
//! use fluent_sequences::comprehension::{beyond_ascii, beyond_ascii_map_filter, SYMBOLS};
//!
//! assert_eq!(beyond_ascii(SYMBOLS), vec![162, 163, 165, 8364, 164]);
//! assert_eq!(beyond_ascii(SYMBOLS), beyond_ascii_map_filter(SYMBOLS));
//! ```

pub mod comprehension;
mod error;
pub mod sequence;
pub mod tuples;
pub mod unpacking;
pub mod value;

pub use comprehension::FilterStrategy;
pub use error::SequenceError;
pub use sequence::{MutableSequence, MySequence, Sequence, SequenceIter, UnregisteredSequence};
pub use tuples::{CityRecord, Holder, Shared};
pub use value::{is_fixed, Value};
