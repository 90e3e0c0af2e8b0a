//! # Sequence Interface Tests (Chapter 2)
//!
//! - Conformance of built-in and custom types
//! - Provided methods on `Sequence`
//! - `MutableSequence` defaults vs the `Vec` overrides

use std::collections::{HashMap, HashSet, VecDeque};

use fluent_sequences::{
    conforms_to, MutableSequence, MySequence, Sequence, SequenceError, UnregisteredSequence,
};

// ============================================================================
// Conformance
// ============================================================================

#[test]
fn test_builtin_conformance() {
    assert!(conforms_to!([i32]: Sequence));
    assert!(conforms_to!([i32; 4]: Sequence));
    assert!(conforms_to!(Vec<String>: Sequence));
    assert!(conforms_to!(Vec<String>: MutableSequence));
    assert!(conforms_to!(VecDeque<u8>: Sequence));
    assert!(conforms_to!(str: Sequence));
    assert!(conforms_to!(String: Sequence));
}

#[test]
fn test_immutable_types_are_not_mutable_sequences() {
    assert!(!conforms_to!(str: MutableSequence));
    assert!(!conforms_to!([i32; 4]: MutableSequence));
    assert!(!conforms_to!(MySequence<i32>: MutableSequence));
}

#[test]
fn test_unordered_collections_do_not_conform() {
    assert!(!conforms_to!(HashSet<i32>: Sequence));
    assert!(!conforms_to!(HashMap<i32, i32>: Sequence));
}

#[test]
fn test_custom_type_conforms_once_declared() {
    assert!(conforms_to!(MySequence<i32>: Sequence));
    assert!(!conforms_to!(UnregisteredSequence<i32>: Sequence));
}

fn total<S: Sequence<Item = i32> + ?Sized>(seq: &S) -> i32 {
    seq.items().sum()
}

#[test]
fn test_generic_code_accepts_every_conforming_type() {
    let vec = vec![1, 2, 3];
    assert_eq!(total(&vec), 6);
    assert_eq!(total(vec.as_slice()), 6);
    assert_eq!(total(&[1, 2, 3]), 6);
    assert_eq!(total(&MySequence::new(vec![1, 2, 3])), 6);
}

// ============================================================================
// Provided Methods
// ============================================================================

#[test]
fn test_my_sequence_iteration() {
    let my_seq = MySequence::new(vec![1, 2, 3]);
    let mut seen = Vec::new();
    for item in &my_seq {
        seen.push(item);
    }
    assert_eq!(seen, vec![1, 2, 3]);
}

#[test]
fn test_search_methods() {
    let seq = MySequence::new(vec!["a", "b", "a", "c"]);
    assert!(seq.contains(&"c"));
    assert!(!seq.contains(&"z"));
    assert_eq!(seq.index_of(&"a"), Some(0));
    assert_eq!(seq.index_of(&"z"), None);
    assert_eq!(seq.count_of(&"a"), 2);
}

#[test]
fn test_empty_sequence() {
    let seq: MySequence<i32> = MySequence::default();
    assert!(Sequence::is_empty(&seq));
    assert_eq!(seq.items().next(), None);
    assert_eq!(seq.reversed().next(), None);
}

#[test]
fn test_double_ended_iteration() {
    let seq = MySequence::new(vec![1, 2, 3, 4]);
    let mut it = seq.items();
    assert_eq!(it.next(), Some(1));
    assert_eq!(it.next_back(), Some(4));
    assert_eq!(it.next(), Some(2));
    assert_eq!(it.next_back(), Some(3));
    assert_eq!(it.next(), None);
    assert_eq!(it.next_back(), None);
}

#[test]
fn test_str_sequence_is_characters() {
    let s = "$¢£";
    assert_eq!(Sequence::len(s), 3);
    assert_eq!(s.items().collect::<Vec<char>>(), vec!['$', '¢', '£']);
    assert_eq!(s.reversed().collect::<String>(), "£¢$");
    assert_eq!(Sequence::len(&String::from("ab")), 2);
}

// ============================================================================
// Mutable Sequences
// ============================================================================

/// Implements only the three required methods, so every other operation
/// goes through the trait defaults.
#[derive(Debug, Default)]
struct Minimal(Vec<i32>);

impl Sequence for Minimal {
    type Item = i32;

    fn len(&self) -> usize {
        self.0.len()
    }

    fn item(&self, index: usize) -> Option<i32> {
        self.0.get(index).copied()
    }
}

impl MutableSequence for Minimal {
    fn set_item(&mut self, index: usize, value: i32) -> Result<(), SequenceError> {
        self.0.set_item(index, value)
    }

    fn insert_item(&mut self, index: usize, value: i32) -> Result<(), SequenceError> {
        self.0.insert_item(index, value)
    }

    fn remove_at(&mut self, index: usize) -> Result<i32, SequenceError> {
        self.0.remove_at(index)
    }
}

#[test]
fn test_defaults_match_vec_overrides() {
    let mut minimal = Minimal::default();
    let mut vec: Vec<i32> = Vec::new();

    minimal.extend_items([1, 2, 3, 4, 5]).unwrap();
    vec.extend_items([1, 2, 3, 4, 5]).unwrap();

    minimal.reverse_items().unwrap();
    vec.reverse_items().unwrap();
    assert_eq!(minimal.0, vec);
    assert_eq!(vec, vec![5, 4, 3, 2, 1]);

    assert_eq!(minimal.pop_item(), vec.pop_item());
    minimal.remove_value(&3).unwrap();
    vec.remove_value(&3).unwrap();
    assert_eq!(minimal.0, vec);
    assert_eq!(vec, vec![5, 4, 2]);
}

#[test]
fn test_reverse_even_length() {
    let mut minimal = Minimal(vec![1, 2, 3, 4]);
    minimal.reverse_items().unwrap();
    assert_eq!(minimal.0, vec![4, 3, 2, 1]);
}

#[test]
fn test_insert_positions() {
    let mut v = vec!['b'];
    v.insert_item(0, 'a').unwrap();
    v.insert_item(2, 'c').unwrap();
    assert_eq!(v, vec!['a', 'b', 'c']);
    assert_eq!(
        v.insert_item(9, 'z'),
        Err(SequenceError::IndexOutOfRange { index: 9, len: 3 })
    );
}

#[test]
fn test_out_of_range_errors() {
    let mut v = vec![1];
    assert_eq!(
        v.set_item(1, 5),
        Err(SequenceError::IndexOutOfRange { index: 1, len: 1 })
    );
    assert_eq!(
        v.remove_at(3),
        Err(SequenceError::IndexOutOfRange { index: 3, len: 1 })
    );
}

#[test]
fn test_pop_and_remove_missing() {
    let mut minimal = Minimal::default();
    assert_eq!(minimal.pop_item(), Err(SequenceError::Empty));
    assert_eq!(minimal.remove_value(&1), Err(SequenceError::ValueNotFound));

    let mut v: Vec<i32> = Vec::new();
    assert_eq!(v.pop_item(), Err(SequenceError::Empty));
}
