//! # Euclidean Vector - Operators as Traits
//!
//! A two-dimensional vector that behaves like a built-in number: it can be
//! added, scaled from either side, measured, and tested for "truthiness".
//!
//! Each behaviour is a trait implementation rather than a magic method:
//!
//! | Behaviour          | Rust                          |
//! |--------------------|-------------------------------|
//! | representation     | `Display`                     |
//! | absolute value     | [`Vector::magnitude`]         |
//! | truthiness         | [`Vector::is_truthy`]         |
//! | `v + w`            | `Add`                         |
//! | `v * k`            | `Mul<T> for Vector<T>`        |
//! | `k * v`            | `Mul<Vector<T>> for T`        |
//!
//! The left-hand case is the interesting one. `5 * v` asks the *scalar* type
//! to multiply by a vector, so the impl lives on `i32`, `f64`, and so on.
//! Coherence allows it because `Vector` is local to this crate.

use std::fmt;
use std::iter::Sum;
use std::ops::{Add, Mul};

use serde::{Deserialize, Serialize};

/// A numeric type usable as a vector component.
pub trait Component:
    Copy + Default + PartialEq + fmt::Debug + Add<Output = Self> + Mul<Output = Self>
{
    /// Lossy conversion used for the magnitude.
    fn to_f64(self) -> f64;
}

macro_rules! impl_component {
    ($($t:ty),*) => {
        $(
            impl Component for $t {
                fn to_f64(self) -> f64 {
                    self as f64
                }
            }
        )*
    };
}

impl_component!(i8, i16, i32, i64, u8, u16, u32, u64, f32, f64);

/// A 2D vector.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Vector<T = f64> {
    x: T,
    y: T,
}

impl<T: Component> Vector<T> {
    /// Create a vector from its components.
    pub fn new(x: T, y: T) -> Self {
        Self { x, y }
    }

    pub fn x(&self) -> T {
        self.x
    }

    pub fn y(&self) -> T {
        self.y
    }

    /// Both components as a tuple, ready to destructure.
    pub fn components(&self) -> (T, T) {
        (self.x, self.y)
    }

    /// Euclidean norm, `hypot(x, y)`.
    pub fn magnitude(&self) -> f64 {
        self.x.to_f64().hypot(self.y.to_f64())
    }

    /// A vector is "true" unless it has zero magnitude.
    pub fn is_truthy(&self) -> bool {
        self.magnitude() != 0.0
    }

    /// Multiply both components by `k`.
    pub fn scale(&self, k: T) -> Self {
        Self::new(self.x * k, self.y * k)
    }
}

impl<T: Component> From<(T, T)> for Vector<T> {
    fn from((x, y): (T, T)) -> Self {
        Self::new(x, y)
    }
}

/// Renders like a constructor call: `Vector(25, 50)`.
impl<T: fmt::Debug> fmt::Display for Vector<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Vector({:?}, {:?})", self.x, self.y)
    }
}

impl<T: Component> Add for Vector<T> {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self::new(self.x + other.x, self.y + other.y)
    }
}

impl<T: Component> Sum for Vector<T> {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::default(), |acc, v| acc + v)
    }
}

// vector * scalar
impl<T: Component> Mul<T> for Vector<T> {
    type Output = Self;

    fn mul(self, k: T) -> Self {
        self.scale(k)
    }
}

// scalar * vector
macro_rules! impl_left_scale {
    ($($t:ty),*) => {
        $(
            impl Mul<Vector<$t>> for $t {
                type Output = Vector<$t>;

                fn mul(self, v: Vector<$t>) -> Vector<$t> {
                    v.scale(self)
                }
            }
        )*
    };
}

impl_left_scale!(i32, i64, f32, f64);
