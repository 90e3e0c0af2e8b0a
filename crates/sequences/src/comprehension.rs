//! # Comprehensions vs Map/Filter
//!
//! A list comprehension is an iterator chain that ends in `collect`; a
//! generator expression is the same chain left unconsumed.
//!
//! The code-point filter is written four ways, matching the four snippets
//! that are timed against each other:
//!
//! | Strategy                 | Shape                                          |
//! |--------------------------|------------------------------------------------|
//! | `Comprehension`          | one pass, inline condition                     |
//! | `ComprehensionWithFn`    | one pass, condition in a named function        |
//! | `FilterClosure`          | `map(ord)` then `filter(closure)`              |
//! | `FilterFn`               | `map(ord)` then `filter(named function)`       |
//!
//! All four produce the same vector. Only their timings differ.

use fluent_core::{Clock, FnSnippet, Timing};
use serde::{Deserialize, Serialize};

/// Currency symbols, one ASCII and five beyond.
pub const SYMBOLS: &str = "$¢£¥€¤";

/// Largest ASCII code point.
pub const ASCII_LIMIT: u32 = 127;

/// Code point of a character, Python's `ord`.
pub fn ord(c: char) -> u32 {
    u32::from(c)
}

/// True for code points beyond ASCII.
pub fn non_ascii(code: u32) -> bool {
    code > ASCII_LIMIT
}

/// `[ord(s) for s in symbols if ord(s) > 127]`
pub fn beyond_ascii(symbols: &str) -> Vec<u32> {
    symbols
        .chars()
        .filter_map(|s| {
            let code = ord(s);
            (code > ASCII_LIMIT).then_some(code)
        })
        .collect()
}

/// `list(filter(lambda c: c > 127, map(ord, symbols)))`
pub fn beyond_ascii_map_filter(symbols: &str) -> Vec<u32> {
    symbols.chars().map(ord).filter(|&c| c > ASCII_LIMIT).collect()
}

/// The four ways of writing the code-point filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FilterStrategy {
    Comprehension,
    ComprehensionWithFn,
    FilterClosure,
    FilterFn,
}

impl FilterStrategy {
    pub const ALL: [FilterStrategy; 4] = [
        FilterStrategy::Comprehension,
        FilterStrategy::ComprehensionWithFn,
        FilterStrategy::FilterClosure,
        FilterStrategy::FilterFn,
    ];

    /// Padded so the timing columns line up.
    pub fn label(self) -> &'static str {
        match self {
            FilterStrategy::Comprehension => "listcomp        :",
            FilterStrategy::ComprehensionWithFn => "listcomp + func :",
            FilterStrategy::FilterClosure => "filter + lambda :",
            FilterStrategy::FilterFn => "filter + func   :",
        }
    }

    pub fn apply(self, symbols: &str) -> Vec<u32> {
        match self {
            FilterStrategy::Comprehension => beyond_ascii(symbols),
            FilterStrategy::ComprehensionWithFn => symbols
                .chars()
                .filter_map(|s| non_ascii(ord(s)).then(|| ord(s)))
                .collect(),
            FilterStrategy::FilterClosure => beyond_ascii_map_filter(symbols),
            FilterStrategy::FilterFn => symbols.chars().map(ord).filter(|&c| non_ascii(c)).collect(),
        }
    }
}

/// Time every strategy on `symbols`, in [`FilterStrategy::ALL`] order.
pub fn clock_strategies(clock: &Clock, symbols: &str) -> Vec<Timing> {
    FilterStrategy::ALL
        .iter()
        .map(|&strategy| {
            let snippet = FnSnippet::new(strategy.label(), move || strategy.apply(symbols));
            let timing = clock.repeat(&snippet);
            tracing::debug!(?strategy, best = ?timing.best(), "strategy timed");
            timing
        })
        .collect()
}

// ============================================================================
// Cartesian Products
// ============================================================================

/// Every `(color, size)` pair built with explicit nested loops.
pub fn tshirts_nested_loops(colors: &[&str], sizes: &[&str]) -> Vec<(String, String)> {
    let mut tshirts = Vec::with_capacity(colors.len() * sizes.len());
    for color in colors {
        for size in sizes {
            tshirts.push((color.to_string(), size.to_string()));
        }
    }
    tshirts
}

/// `[(color, size) for color in colors for size in sizes]`
pub fn tshirts(colors: &[&str], sizes: &[&str]) -> Vec<(String, String)> {
    colors
        .iter()
        .flat_map(|color| sizes.iter().map(move |size| (color.to_string(), size.to_string())))
        .collect()
}

/// `(f'{c} {s}' for c in colors for s in sizes)`
///
/// Nothing is built until the iterator is pulled, and it can be pulled
/// only once.
pub fn tshirt_labels<'a>(
    colors: &'a [&'a str],
    sizes: &'a [&'a str],
) -> impl Iterator<Item = String> + 'a {
    colors
        .iter()
        .flat_map(move |c| sizes.iter().map(move |s| format!("{} {}", c, s)))
}

// ============================================================================
// Generator Expressions
// ============================================================================

/// `[y for x in data if (y := x * 2) > threshold]`
///
/// The doubled value is computed once and both tested and kept.
pub fn doubled_above(data: &[i64], threshold: i64) -> Vec<i64> {
    data.iter()
        .filter_map(|&x| {
            let y = x * 2;
            (y > threshold).then_some(y)
        })
        .collect()
}

/// `(x**2 for x in range(n))`
pub fn squares(n: u64) -> impl Iterator<Item = u64> {
    (0..n).map(|x| x * x)
}

/// `(x for x in range(limit) if x % 2 == 0)`
pub fn evens(limit: u64) -> impl Iterator<Item = u64> {
    (0..limit).filter(|x| x % 2 == 0)
}
