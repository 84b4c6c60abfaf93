// src/numerics/types/vector.rs
// FixedVector generic implementation over element type and dimension.
// Uses the Scalar / FloatingPoint traits from super::traits.

use core::fmt;
use core::iter::Sum;
use core::ops::{
    Add, AddAssign, Div, DivAssign, Index, IndexMut, Mul, MulAssign, Neg, Sub, SubAssign,
};

use tracing::debug;

use super::traits::{FloatingPoint, Scalar};
use crate::numerics::error::{self, NumericsError};

/// FixedVector is a point/vector in `DIM`-dimensional space over `T`.
///
/// The dimension is part of the type, so operands of a binary operation
/// always agree on it. The storage is an owned array: copies never alias.
///
/// With the `ordered` feature the vector also compares lexicographically,
/// component 0 first.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "ordered", derive(PartialOrd, Ord))]
pub struct FixedVector<T: Scalar, const DIM: usize> {
    data: [T; DIM],
}

impl<T: Scalar, const DIM: usize> FixedVector<T, DIM> {
    /// Number of components.
    pub const DIMENSION: usize = DIM;

    /// Construct a new FixedVector from its components.
    #[inline]
    pub fn new(data: [T; DIM]) -> Self {
        Self { data }
    }

    /// Same as `new`, for call sites that read better with the source named.
    #[inline]
    pub fn from_array(data: [T; DIM]) -> Self {
        Self::new(data)
    }

    /// Vector of all zeros.
    #[inline]
    pub fn zero() -> Self {
        Self::splat(T::zero())
    }

    /// Vector with every component set to `value`.
    #[inline]
    pub fn splat(value: T) -> Self {
        Self { data: [value; DIM] }
    }

    /// Set components 0, 1 and 2 to `x`, `y` and `z`.
    ///
    /// Components the dimension cannot hold are dropped. Components past
    /// index 2 are zero.
    pub fn from_xyz(x: T, y: T, z: T) -> Self {
        let mut v = Self::zero();
        for (slot, c) in v.data.iter_mut().zip([x, y, z]) {
            *slot = c;
        }
        v
    }

    /// Same as `from_xyz(x, y, 0)`.
    #[inline]
    pub fn from_xy(x: T, y: T) -> Self {
        Self::from_xyz(x, y, T::zero())
    }

    /// Replace all components with those of `other`, returning `self` for chaining.
    #[inline]
    pub fn assign(&mut self, other: &Self) -> &mut Self {
        self.data = other.data;
        self
    }

    #[inline]
    pub fn len(&self) -> usize {
        DIM
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        DIM == 0
    }

    #[inline]
    pub fn as_array(&self) -> &[T; DIM] {
        &self.data
    }

    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.data
    }

    pub fn iter(&self) -> core::slice::Iter<'_, T> {
        self.data.iter()
    }

    pub fn iter_mut(&mut self) -> core::slice::IterMut<'_, T> {
        self.data.iter_mut()
    }

    pub fn x(&self) -> Option<T> {
        self.data.first().copied()
    }

    pub fn y(&self) -> Option<T> {
        self.data.get(1).copied()
    }

    pub fn z(&self) -> Option<T> {
        self.data.get(2).copied()
    }

    /// Apply `f` to every component.
    pub fn map<U: Scalar, F: FnMut(T) -> U>(self, f: F) -> FixedVector<U, DIM> {
        FixedVector { data: self.data.map(f) }
    }

    /// Component `index`, or `None` when `index >= DIM`.
    #[inline]
    pub fn get(&self, index: usize) -> Option<&T> {
        self.data.get(index)
    }

    #[inline]
    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        self.data.get_mut(index)
    }

    /// Checked read of component `index`.
    pub fn try_get(&self, index: usize) -> error::Result<T> {
        self.data.get(index).copied().ok_or_else(|| {
            debug!(index, dim = DIM, "rejected out-of-range component read");
            NumericsError::IndexOutOfBounds { index, dim: DIM }
        })
    }

    /// Checked write of component `index`.
    pub fn try_set(&mut self, index: usize, value: T) -> error::Result<()> {
        match self.data.get_mut(index) {
            Some(slot) => {
                *slot = value;
                Ok(())
            }
            None => {
                debug!(index, dim = DIM, "rejected out-of-range component write");
                Err(NumericsError::IndexOutOfBounds { index, dim: DIM })
            }
        }
    }

    /// Read component `index` without any bounds check.
    ///
    /// # Safety
    /// `index` must be below `DIM`.
    #[inline]
    pub unsafe fn get_unchecked(&self, index: usize) -> &T {
        self.data.get_unchecked(index)
    }

    /// Mutable access to component `index` without any bounds check.
    ///
    /// # Safety
    /// `index` must be below `DIM`.
    #[inline]
    pub unsafe fn get_unchecked_mut(&mut self, index: usize) -> &mut T {
        self.data.get_unchecked_mut(index)
    }

    /// Inner product: sum over i of `self[i] * other[i]`.
    #[inline]
    pub fn dot(&self, other: &Self) -> T {
        self.data
            .iter()
            .zip(other.data.iter())
            .fold(T::zero(), |acc, (&a, &b)| acc + a * b)
    }

    /// Squared Euclidean length, i.e. `self.dot(self)`.
    #[inline]
    pub fn norm_squared(&self) -> T {
        self.dot(self)
    }
}

impl<T: FloatingPoint, const DIM: usize> FixedVector<T, DIM> {
    /// Euclidean length. Uses `FloatingPoint::sqrt`.
    #[inline]
    pub fn magnitude(&self) -> T {
        self.norm_squared().sqrt()
    }
}

impl<T: Scalar, const DIM: usize> Default for FixedVector<T, DIM> {
    fn default() -> Self {
        Self::zero()
    }
}

// Unchecked component access. Out-of-range indices panic through the
// underlying array rather than being validated here.

impl<T: Scalar, const DIM: usize> Index<usize> for FixedVector<T, DIM> {
    type Output = T;

    #[inline]
    fn index(&self, index: usize) -> &T {
        &self.data[index]
    }
}

impl<T: Scalar, const DIM: usize> IndexMut<usize> for FixedVector<T, DIM> {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut T {
        &mut self.data[index]
    }
}

// Compound-assignment primitives. Every binary operator below is derived
// from one of these.

impl<T: Scalar, const DIM: usize> AddAssign for FixedVector<T, DIM> {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        for (a, b) in self.data.iter_mut().zip(rhs.data) {
            *a += b;
        }
    }
}

impl<T: Scalar, const DIM: usize> SubAssign for FixedVector<T, DIM> {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        for (a, b) in self.data.iter_mut().zip(rhs.data) {
            *a -= b;
        }
    }
}

macro_rules! impl_scalar_assign {
    ($($Trait:ident, $method:ident, $op:tt);* $(;)?) => {
        $(
            impl<T: Scalar, const DIM: usize> $Trait<T> for FixedVector<T, DIM> {
                #[inline]
                fn $method(&mut self, rhs: T) {
                    for a in self.data.iter_mut() {
                        *a $op rhs;
                    }
                }
            }
        )*
    };
}

impl_scalar_assign! {
    AddAssign, add_assign, +=;
    SubAssign, sub_assign, -=;
    MulAssign, mul_assign, *=;
    DivAssign, div_assign, /=;
}

// Binary operators: copy the left operand, apply the compound op, return it.

macro_rules! impl_binary_from_assign {
    ($($Trait:ident, $method:ident, $Assign:ident, $assign:ident, $Rhs:ty);* $(;)?) => {
        $(
            impl<T: Scalar, const DIM: usize> $Trait<$Rhs> for FixedVector<T, DIM> {
                type Output = Self;

                #[inline]
                fn $method(mut self, rhs: $Rhs) -> Self {
                    $Assign::$assign(&mut self, rhs);
                    self
                }
            }
        )*
    };
}

impl_binary_from_assign! {
    Add, add, AddAssign, add_assign, FixedVector<T, DIM>;
    Sub, sub, SubAssign, sub_assign, FixedVector<T, DIM>;
    Add, add, AddAssign, add_assign, T;
    Sub, sub, SubAssign, sub_assign, T;
    Mul, mul, MulAssign, mul_assign, T;
    Div, div, DivAssign, div_assign, T;
}

// Scalar on the left, for the commutative operators.
macro_rules! impl_scalar_lhs {
    ($($t:ty),*) => {
        $(
            impl<const DIM: usize> Add<FixedVector<$t, DIM>> for $t {
                type Output = FixedVector<$t, DIM>;

                #[inline]
                fn add(self, rhs: FixedVector<$t, DIM>) -> FixedVector<$t, DIM> {
                    rhs + self
                }
            }

            impl<const DIM: usize> Mul<FixedVector<$t, DIM>> for $t {
                type Output = FixedVector<$t, DIM>;

                #[inline]
                fn mul(self, rhs: FixedVector<$t, DIM>) -> FixedVector<$t, DIM> {
                    rhs * self
                }
            }
        )*
    };
}

impl_scalar_lhs!(f32, f64, i8, i16, i32, i64, i128, isize);

impl<T: Scalar, const DIM: usize> Neg for FixedVector<T, DIM> {
    type Output = Self;

    #[inline]
    fn neg(mut self) -> Self {
        for a in self.data.iter_mut() {
            *a = -*a;
        }
        self
    }
}

impl<T: Scalar, const DIM: usize> Sum for FixedVector<T, DIM> {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::zero(), |acc, v| acc + v)
    }
}

/// Components separated by a single space, in index order.
impl<T: Scalar + fmt::Display, const DIM: usize> fmt::Display for FixedVector<T, DIM> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut components = self.data.iter();
        if let Some(first) = components.next() {
            write!(f, "{}", first)?;
        }
        for c in components {
            write!(f, " {}", c)?;
        }
        Ok(())
    }
}

// Conversions between FixedVector<T, DIM> and arrays [T; DIM]

impl<T: Scalar, const DIM: usize> From<[T; DIM]> for FixedVector<T, DIM> {
    fn from(data: [T; DIM]) -> Self {
        Self { data }
    }
}

impl<T: Scalar, const DIM: usize> From<FixedVector<T, DIM>> for [T; DIM] {
    fn from(v: FixedVector<T, DIM>) -> Self {
        v.data
    }
}

impl<T: Scalar, const DIM: usize> From<&[T; DIM]> for FixedVector<T, DIM> {
    fn from(data: &[T; DIM]) -> Self {
        Self { data: *data }
    }
}

impl<T: Scalar, const DIM: usize> TryFrom<&[T]> for FixedVector<T, DIM> {
    type Error = NumericsError;

    fn try_from(slice: &[T]) -> error::Result<Self> {
        let data: [T; DIM] = slice.try_into().map_err(|_| {
            debug!(expected = DIM, actual = slice.len(), "rejected slice of wrong length");
            NumericsError::DimensionMismatch {
                expected: DIM,
                actual: slice.len(),
            }
        })?;
        Ok(Self { data })
    }
}

impl<T: Scalar, const DIM: usize> IntoIterator for FixedVector<T, DIM> {
    type Item = T;
    type IntoIter = core::array::IntoIter<T, DIM>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.into_iter()
    }
}

impl<'a, T: Scalar, const DIM: usize> IntoIterator for &'a FixedVector<T, DIM> {
    type Item = &'a T;
    type IntoIter = core::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.iter()
    }
}

// Conditional impls for serde. The vector is written as a tuple of DIM
// components so the length never appears on the wire.

#[cfg(feature = "serde")]
impl<T, const DIM: usize> serde::Serialize for FixedVector<T, DIM>
where
    T: Scalar + serde::Serialize,
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeTuple;

        let mut tuple = serializer.serialize_tuple(DIM)?;
        for c in &self.data {
            tuple.serialize_element(c)?;
        }
        tuple.end()
    }
}

#[cfg(feature = "serde")]
impl<'de, T, const DIM: usize> serde::Deserialize<'de> for FixedVector<T, DIM>
where
    T: Scalar + serde::Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        use core::marker::PhantomData;
        use serde::de::{self, SeqAccess, Visitor};

        struct ComponentVisitor<T, const DIM: usize>(PhantomData<T>);

        impl<'de, T, const DIM: usize> Visitor<'de> for ComponentVisitor<T, DIM>
        where
            T: Scalar + serde::Deserialize<'de>,
        {
            type Value = FixedVector<T, DIM>;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "a sequence of {} components", DIM)
            }

            fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
            where
                A: SeqAccess<'de>,
            {
                let mut data = [T::zero(); DIM];
                for (i, slot) in data.iter_mut().enumerate() {
                    *slot = seq
                        .next_element()?
                        .ok_or_else(|| de::Error::invalid_length(i, &self))?;
                }
                Ok(FixedVector { data })
            }
        }

        deserializer.deserialize_tuple(DIM, ComponentVisitor::<T, DIM>(PhantomData))
    }
}
