//! # Core - Shared Ground for the Sessions
//!
//! Every chapter crate leans on the same small amount of infrastructure:
//!
//! - **Errors**: harness failures as a typed enum
//! - **Logging**: `tracing` diagnostics on stderr, stdout left to the demos
//! - **Timing**: a `timeit.repeat`-style harness for comparing snippets
//!
//! The chapters themselves (data model, sequences) live in their own crates
//! and only reach in here for these three things.

pub mod error;
pub mod logging;
pub mod timing;

// Re-export key types at crate root for convenience
pub use error::CoreError;
pub use timing::{Clock, FnSnippet, Snippet, Timing, TimingConfig};
