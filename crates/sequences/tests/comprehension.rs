//! # Comprehension Tests (Chapter 2)
//!
//! - Every filter strategy agrees on the code points
//! - Cartesian products, eager and lazy
//! - Generator-style helpers
//! - Timing structure (labels and counts only)

use fluent_core::{Clock, TimingConfig};
use fluent_sequences::comprehension::{
    beyond_ascii, beyond_ascii_map_filter, clock_strategies, doubled_above, evens, non_ascii,
    ord, squares, tshirt_labels, tshirts, tshirts_nested_loops, SYMBOLS,
};
use fluent_sequences::FilterStrategy;

const COLORS: [&str; 2] = ["Black", "White"];
const SIZES: [&str; 3] = ["M", "S", "L"];

// ============================================================================
// Code-Point Filter
// ============================================================================

#[test]
fn test_comprehension_and_map_filter_agree() {
    let expected = vec![162, 163, 165, 8364, 164];
    assert_eq!(beyond_ascii(SYMBOLS), expected);
    assert_eq!(beyond_ascii_map_filter(SYMBOLS), expected);
}

#[test]
fn test_every_strategy_agrees() {
    let reference = beyond_ascii(SYMBOLS);
    for strategy in FilterStrategy::ALL {
        assert_eq!(strategy.apply(SYMBOLS), reference, "{:?}", strategy);
    }
}

#[test]
fn test_strategies_agree_on_mixed_text() {
    let text = "naïve café — 1€";
    let reference = beyond_ascii_map_filter(text);
    assert_eq!(reference, vec![0xEF, 0xE9, 0x2014, 0x20AC]);
    for strategy in FilterStrategy::ALL {
        assert_eq!(strategy.apply(text), reference);
    }
}

#[test]
fn test_ord_and_non_ascii() {
    assert_eq!(ord('$'), 36);
    assert_eq!(ord('€'), 8364);
    assert!(!non_ascii(127));
    assert!(non_ascii(128));
}

#[test]
fn test_labels_are_aligned() {
    let widths: Vec<usize> = FilterStrategy::ALL
        .iter()
        .map(|s| s.label().len())
        .collect();
    assert!(widths.iter().all(|&w| w == widths[0]));
    assert_eq!(FilterStrategy::FilterFn.label(), "filter + func   :");
}

// ============================================================================
// Cartesian Products
// ============================================================================

#[test]
fn test_tshirts_color_major() {
    let expected: Vec<(String, String)> = [
        ("Black", "M"),
        ("Black", "S"),
        ("Black", "L"),
        ("White", "M"),
        ("White", "S"),
        ("White", "L"),
    ]
    .iter()
    .map(|(c, s)| (c.to_string(), s.to_string()))
    .collect();

    assert_eq!(tshirts_nested_loops(&COLORS, &SIZES), expected);
    assert_eq!(tshirts(&COLORS, &SIZES), expected);
}

#[test]
fn test_empty_factor_gives_empty_product() {
    assert!(tshirts(&COLORS, &[]).is_empty());
    assert!(tshirts_nested_loops(&[], &SIZES).is_empty());
}

#[test]
fn test_tshirt_labels() {
    let labels: Vec<String> = tshirt_labels(&COLORS, &SIZES).collect();
    assert_eq!(labels.len(), 6);
    assert_eq!(labels[0], "Black M");
    assert_eq!(labels[5], "White L");
}

// ============================================================================
// Generator-Style Helpers
// ============================================================================

#[test]
fn test_doubled_above() {
    assert_eq!(doubled_above(&[1, 4, 5, 6, 9], 10), vec![12, 18]);
    assert!(doubled_above(&[], 0).is_empty());
}

#[test]
fn test_squares_and_evens() {
    assert_eq!(squares(5).collect::<Vec<_>>(), vec![0, 1, 4, 9, 16]);
    assert_eq!(evens(9).collect::<Vec<_>>(), vec![0, 2, 4, 6, 8]);
}

#[test]
fn test_generators_are_lazy() {
    // Only the first few squares of an enormous range are ever computed.
    let first: Vec<u64> = squares(u64::MAX).take(3).collect();
    assert_eq!(first, vec![0, 1, 4]);
}

// ============================================================================
// Timing
// ============================================================================

#[test]
fn test_clock_strategies_structure() {
    let clock = Clock::new(TimingConfig {
        number: 3,
        repeat: 2,
    })
    .unwrap();

    let timings = clock_strategies(&clock, SYMBOLS);
    assert_eq!(timings.len(), 4);
    for (timing, strategy) in timings.iter().zip(FilterStrategy::ALL) {
        assert_eq!(timing.label, strategy.label());
        assert_eq!(timing.runs.len(), 2);
    }
}
