//! # Tuples - Records and Immutable Lists
//!
//! Tuples do two jobs:
//!
//! - **Records**: each position means something (`(latitude, longitude)`),
//!   and destructuring names the fields.
//! - **Immutable lists**: a fixed group of values that cannot be rebound.
//!
//! The second job has a catch. Immutability is shallow. A tuple holding a
//! shared, interior-mutable value can't swap that value out, but the value
//! itself can still change, and the tuple "changes" with it. [`Shared`]
//! makes that aliasing explicit.

use std::cell::{Ref, RefCell, RefMut};
use std::fmt;
use std::rc::Rc;

use serde::{Deserialize, Serialize};

/// Los Angeles airport, `(latitude, longitude)`.
pub const LAX_COORDINATES: (f64, f64) = (33.9425, -118.408056);

/// `(city, year, population, change, area)`
pub type CityTuple = (&'static str, u16, u32, f64, u32);

pub const TOKYO: CityTuple = ("Tokyo", 2003, 32_450, 0.66, 8014);

/// Passport records as `(country, passport number)`.
pub const TRAVELER_IDS: [(&str, &str); 3] = [
    ("USA", "31195855"),
    ("BRA", "CE342567"),
    ("ESP", "XDA205856"),
];

/// The named form of a [`CityTuple`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CityRecord {
    pub city: String,
    pub year: u16,
    pub population: u32,
    pub change: f64,
    pub area: u32,
}

impl From<CityTuple> for CityRecord {
    fn from((city, year, population, change, area): CityTuple) -> Self {
        Self {
            city: city.to_string(),
            year,
            population,
            change,
            area,
        }
    }
}

/// One `"country/number"` line per passport, sorted by country then number.
pub fn passport_lines(ids: &[(&str, &str)]) -> Vec<String> {
    let mut sorted = ids.to_vec();
    sorted.sort();
    sorted
        .iter()
        .map(|(country, number)| format!("{}/{}", country, number))
        .collect()
}

/// Countries in input order; the passport number is matched with `_`.
pub fn countries<'a>(ids: &[(&'a str, &str)]) -> Vec<&'a str> {
    ids.iter().map(|&(country, _)| country).collect()
}

/// `'%s %s' % pair`
pub fn format_pair<A: fmt::Display, B: fmt::Display>(pair: &(A, B)) -> String {
    let (a, b) = pair;
    format!("{} {}", a, b)
}

// ============================================================================
// Shallow Immutability
// ============================================================================

/// A value holder with a settable field.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Holder<T> {
    value: T,
}

impl<T> Holder<T> {
    pub fn new(value: T) -> Self {
        Self { value }
    }

    pub fn value(&self) -> &T {
        &self.value
    }

    pub fn set_value(&mut self, new_value: T) {
        self.value = new_value;
    }
}

impl<T: fmt::Display> fmt::Display for Holder<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Value of object is: {}", self.value)
    }
}

/// A shared handle to an interior-mutable value.
///
/// Clones alias the same value; mutation through any clone is seen by all.
#[derive(Debug, Default)]
pub struct Shared<T>(Rc<RefCell<T>>);

impl<T> Shared<T> {
    pub fn new(value: T) -> Self {
        Self(Rc::new(RefCell::new(value)))
    }

    /// Panics if the value is currently borrowed mutably.
    pub fn borrow(&self) -> Ref<'_, T> {
        self.0.borrow()
    }

    /// Panics if the value is currently borrowed.
    pub fn borrow_mut(&self) -> RefMut<'_, T> {
        self.0.borrow_mut()
    }

    /// True when both handles point at the same value.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl<T> Clone for Shared<T> {
    fn clone(&self) -> Self {
        Self(Rc::clone(&self.0))
    }
}

impl<T: fmt::Display> fmt::Display for Shared<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&*self.0.borrow(), f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_city_record_from_tuple() {
        let record = CityRecord::from(TOKYO);
        assert_eq!(record.city, "Tokyo");
        assert_eq!(record.population, 32_450);
    }

    #[test]
    fn test_passports_sorted() {
        assert_eq!(
            passport_lines(&TRAVELER_IDS),
            vec!["BRA/CE342567", "ESP/XDA205856", "USA/31195855"]
        );
    }

    #[test]
    fn test_tuple_sees_mutation_through_alias() {
        let b = Shared::new(Holder::new(9));
        let t = (10, b.clone());
        assert_eq!(format_pair(&t), "10 Value of object is: 9");

        t.1.borrow_mut().set_value(5);
        assert_eq!(format_pair(&t), "10 Value of object is: 5");
        assert_eq!(*b.borrow().value(), 5);
    }
}
