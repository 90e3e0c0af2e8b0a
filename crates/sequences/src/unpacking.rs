//! # Unpacking - Parallel Assignment
//!
//! `let (a, b) = pair;` binds both names at once, and the same pattern
//! swaps two values without a named temporary. Slice patterns extend the
//! idea to "first and the rest" style splits.

/// `latitude, longitude = coordinates`
pub fn unpack<A, B>(pair: (A, B)) -> (A, B) {
    let (first, second) = pair;
    (first, second)
}

/// `a, b = b, a`
pub fn swapped<A, B>((a, b): (A, B)) -> (B, A) {
    (b, a)
}

/// Swap two places behind `&mut`; the in-place counterpart of [`swapped`].
pub fn swap_in_place<T>(a: &mut T, b: &mut T) {
    std::mem::swap(a, b);
}

/// `first, *rest = items`; `None` for an empty slice.
pub fn split_first_rest<T>(items: &[T]) -> Option<(&T, &[T])> {
    match items {
        [first, rest @ ..] => Some((first, rest)),
        [] => None,
    }
}

/// `*init, last = items`; `None` for an empty slice.
pub fn split_init_last<T>(items: &[T]) -> Option<(&[T], &T)> {
    match items {
        [init @ .., last] => Some((init, last)),
        [] => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_swap_by_destructuring() {
        let (mut latitude, mut longitude) = (33.9425, -118.408056);
        (latitude, longitude) = (longitude, latitude);
        assert_eq!((latitude, longitude), (-118.408056, 33.9425));
    }

    #[test]
    fn test_split_single() {
        let (first, rest) = split_first_rest(&[1]).unwrap();
        assert_eq!(*first, 1);
        assert!(rest.is_empty());
    }
}
