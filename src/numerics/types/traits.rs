// src/numerics/types/traits.rs
// Element-type traits for the numerics types.

use core::fmt::Debug;
use core::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

/// Scalar is the minimal trait an element of a `FixedVector` has to satisfy.
///
/// Note: We require Copy, PartialOrd and the basic arithmetic ops on Self,
/// including the compound-assignment forms the vector operators are built on.
pub trait Scalar:
Copy + PartialEq + PartialOrd + Debug
+ Add<Output = Self>
+ Sub<Output = Self>
+ Mul<Output = Self>
+ Div<Output = Self>
+ Neg<Output = Self>
+ AddAssign
+ SubAssign
+ MulAssign
+ DivAssign
{
    fn zero() -> Self;
    fn one() -> Self;
}

/// FloatingPoint extends Scalar with the square root needed by `magnitude`
/// and the `f64` round trip the Planck function evaluates through.
pub trait FloatingPoint: Scalar {
    fn sqrt(self) -> Self;

    /// Lossy for f32.
    fn from_f64(value: f64) -> Self;

    fn to_f64(self) -> f64;
}

macro_rules! impl_scalar {
    ($($t:ty => $zero:expr, $one:expr);* $(;)?) => {
        $(
            impl Scalar for $t {
                #[inline]
                fn zero() -> Self { $zero }
                #[inline]
                fn one() -> Self { $one }
            }
        )*
    };
}

impl_scalar! {
    f32 => 0.0, 1.0;
    f64 => 0.0, 1.0;
    i8 => 0, 1;
    i16 => 0, 1;
    i32 => 0, 1;
    i64 => 0, 1;
    i128 => 0, 1;
    isize => 0, 1;
}

macro_rules! impl_floating_point {
    ($($t:ty),*) => {
        $(
            impl FloatingPoint for $t {
                #[inline]
                fn sqrt(self) -> Self { <$t>::sqrt(self) }
                #[inline]
                fn from_f64(value: f64) -> Self { value as $t }
                #[inline]
                fn to_f64(self) -> f64 { self as f64 }
            }
        )*
    };
}

impl_floating_point!(f32, f64);

#[cfg(test)]
mod tests {
    use super::*;

    fn sum_of<T: Scalar>(values: &[T]) -> T {
        let mut acc = T::zero();
        for v in values {
            acc += *v;
        }
        acc
    }

    #[test]
    fn test_zero_one_for_integer_and_float() {
        assert_eq!(<i32 as Scalar>::zero(), 0);
        assert_eq!(<i64 as Scalar>::one(), 1);
        assert_eq!(<f32 as Scalar>::zero(), 0.0);
        assert_eq!(<f64 as Scalar>::one(), 1.0);
    }

    #[test]
    fn test_generic_accumulation() {
        assert_eq!(sum_of(&[1i32, 2, 3]), 6);
        assert!((sum_of(&[0.5f64, 0.25, 0.25]) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_floating_point_helpers() {
        assert_eq!(FloatingPoint::sqrt(16.0f64), 4.0);
        assert_eq!(<f32 as FloatingPoint>::from_f64(0.5), 0.5f32);
        assert_eq!(FloatingPoint::to_f64(0.25f32), 0.25f64);
        // subnormal in f32 but not flushed to zero
        assert!(<f32 as FloatingPoint>::from_f64(1.0e-42).to_f64() > 0.0);
    }
}
