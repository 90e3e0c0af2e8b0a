//! # Repeat Timing
//!
//! A small `timeit.repeat`-style harness: run a snippet `number` times per
//! round, for `repeat` rounds, and keep one elapsed duration per round.
//!
//! ```rust
//! use fluent_core::timing::{Clock, FnSnippet, TimingConfig};
//!
//! let clock = Clock::new(TimingConfig { number: 100, repeat: 3 }).unwrap();
//! let timing = clock
//!     .repeat(&FnSnippet::new("sum      :", || (0..10u32).sum::<u32>()));
//! assert_eq!(timing.runs.len(), 3);
//! ```
//!
//! Only the shape of the result is deterministic. The magnitudes depend on
//! the machine, so callers print them and tests check labels and counts.

use std::fmt;
use std::hint::black_box;
use std::time::{Duration, Instant};

use serde::{Deserialize, Serialize};

use crate::CoreError;

/// Environment variable overriding [`TimingConfig::number`].
pub const NUMBER_ENV: &str = "FLUENT_TIMING_NUMBER";

/// Environment variable overriding [`TimingConfig::repeat`].
pub const REPEAT_ENV: &str = "FLUENT_TIMING_REPEAT";

/// Something that can be executed repeatedly and timed.
pub trait Snippet {
    /// Whatever the snippet produces. It is passed through `black_box`
    /// so the optimiser cannot drop the work.
    type Output;

    /// Execute the snippet once.
    fn run(&self) -> Self::Output;

    /// Label used when reporting.
    fn name(&self) -> &str {
        std::any::type_name::<Self>()
    }
}

/// A closure with a label.
pub struct FnSnippet<F> {
    label: String,
    f: F,
}

impl<F, T> FnSnippet<F>
where
    F: Fn() -> T,
{
    /// Wrap a closure as a snippet.
    pub fn new(label: impl Into<String>, f: F) -> Self {
        Self {
            label: label.into(),
            f,
        }
    }
}

impl<F, T> Snippet for FnSnippet<F>
where
    F: Fn() -> T,
{
    type Output = T;

    fn run(&self) -> T {
        (self.f)()
    }

    fn name(&self) -> &str {
        &self.label
    }
}

// ============================================================================
// Configuration
// ============================================================================

/// How many executions to time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimingConfig {
    /// Executions per round.
    pub number: usize,
    /// Number of rounds; one duration is recorded per round.
    pub repeat: usize,
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            number: 10_000,
            repeat: 5,
        }
    }
}

impl TimingConfig {
    /// Defaults overridden by [`NUMBER_ENV`] and [`REPEAT_ENV`].
    pub fn from_env() -> Result<Self, CoreError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Defaults overridden by whatever `lookup` returns for the two keys.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, CoreError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();
        if let Some(raw) = lookup(NUMBER_ENV) {
            config.number = parse_count("number", &raw)?;
        }
        if let Some(raw) = lookup(REPEAT_ENV) {
            config.repeat = parse_count("repeat", &raw)?;
        }
        config.validate()?;
        Ok(config)
    }

    /// Reject configurations that would measure nothing.
    pub fn validate(&self) -> Result<(), CoreError> {
        if self.number == 0 {
            return Err(CoreError::invalid_config(
                "number",
                self.number,
                "must be at least 1",
            ));
        }
        if self.repeat == 0 {
            return Err(CoreError::invalid_config(
                "repeat",
                self.repeat,
                "must be at least 1",
            ));
        }
        Ok(())
    }
}

fn parse_count(field: &'static str, raw: &str) -> Result<usize, CoreError> {
    raw.trim()
        .parse::<usize>()
        .map_err(|_| CoreError::invalid_config(field, raw, "not a non-negative integer"))
}

// ============================================================================
// Results
// ============================================================================

/// Durations recorded for one snippet, one per round.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Timing {
    pub label: String,
    pub runs: Vec<Duration>,
}

impl Timing {
    /// Create a timing record.
    pub fn new(label: impl Into<String>, runs: Vec<Duration>) -> Self {
        Self {
            label: label.into(),
            runs,
        }
    }

    /// Fastest round. The usual figure to compare, since slower rounds
    /// measure interference rather than the snippet.
    pub fn best(&self) -> Option<Duration> {
        self.runs.iter().min().copied()
    }

    /// Mean round duration.
    pub fn mean(&self) -> Option<Duration> {
        if self.runs.is_empty() {
            return None;
        }
        let total: Duration = self.runs.iter().sum();
        Some(total / self.runs.len() as u32)
    }
}

impl fmt::Display for Timing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label)?;
        for run in &self.runs {
            write!(f, " {:.3}", run.as_secs_f64())?;
        }
        Ok(())
    }
}

// ============================================================================
// Clock
// ============================================================================

/// Runs snippets according to a [`TimingConfig`].
#[derive(Debug, Clone, Copy)]
pub struct Clock {
    config: TimingConfig,
}

impl Clock {
    /// Create a clock, validating the configuration up front.
    pub fn new(config: TimingConfig) -> Result<Self, CoreError> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> TimingConfig {
        self.config
    }

    /// Time `snippet`: `repeat` rounds of `number` executions each.
    pub fn repeat<S: Snippet + ?Sized>(&self, snippet: &S) -> Timing {
        let TimingConfig { number, repeat } = self.config;
        let mut runs = Vec::with_capacity(repeat);

        for round in 0..repeat {
            let start = Instant::now();
            for _ in 0..number {
                black_box(snippet.run());
            }
            let elapsed = start.elapsed();
            tracing::debug!(snippet = snippet.name(), round, ?elapsed, "timed round");
            runs.push(elapsed);
        }

        Timing::new(snippet.name(), runs)
    }
}

impl Default for Clock {
    fn default() -> Self {
        Self {
            config: TimingConfig::default(),
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    struct Counter {
        calls: Cell<usize>,
    }

    impl Snippet for Counter {
        type Output = usize;

        fn run(&self) -> usize {
            self.calls.set(self.calls.get() + 1);
            self.calls.get()
        }

        fn name(&self) -> &str {
            "Counter"
        }
    }

    #[test]
    fn test_repeat_runs_number_times_per_round() {
        let clock = Clock::new(TimingConfig {
            number: 7,
            repeat: 3,
        })
        .unwrap();
        let counter = Counter {
            calls: Cell::new(0),
        };

        let timing = clock.repeat(&counter);
        assert_eq!(timing.runs.len(), 3);
        assert_eq!(timing.label, "Counter");
        assert_eq!(counter.calls.get(), 21);
    }

    #[test]
    fn test_zero_config_rejected() {
        let err = Clock::new(TimingConfig {
            number: 0,
            repeat: 5,
        })
        .unwrap_err();
        assert!(matches!(err, CoreError::InvalidConfig { field: "number", .. }));
    }

    #[test]
    fn test_timing_display_three_decimals() {
        let timing = Timing::new(
            "listcomp        :",
            vec![Duration::from_millis(1234), Duration::from_millis(2)],
        );
        assert_eq!(timing.to_string(), "listcomp        : 1.234 0.002");
    }

    #[test]
    fn test_best_and_mean() {
        let timing = Timing::new(
            "t",
            vec![Duration::from_millis(30), Duration::from_millis(10)],
        );
        assert_eq!(timing.best(), Some(Duration::from_millis(10)));
        assert_eq!(timing.mean(), Some(Duration::from_millis(20)));
        assert_eq!(Timing::new("empty", vec![]).mean(), None);
    }

    #[test]
    fn test_fn_snippet_label() {
        let snippet = FnSnippet::new("sum", || 1 + 1);
        assert_eq!(snippet.name(), "sum");
        assert_eq!(snippet.run(), 2);
    }
}
