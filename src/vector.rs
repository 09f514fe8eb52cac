use std::{array, fmt};

use anyhow::bail;

use crate::Zero;

mod ops;

/// A 3-element column vector storing elements of type `T`.
///
/// The elements are called `p1`, `p2` and `p3`. When `p3` is 1, the vector can be read as a point
/// in homogeneous 2D coordinates.
///
/// # Construction
///
/// - [`Vector::new`] and the freestanding [`vec3`] function create a vector from its elements.
/// - [`Vector::from_fn`] creates a vector by invoking a closure with the index of each element.
/// - [`Vector::from_slice`] copies the elements out of a slice of length 3.
/// - Vectors can be created from arrays using their [`From`] implementation.
/// - [`Vector::ZERO`] is a vector containing all-zeroes.
///
/// Elements are stored as given. No rounding or validation takes place, so `NaN` and infinities
/// are stored verbatim.
///
/// # Element Access
///
/// A [`Vector`] cannot be modified after it has been created. Its elements can be read via
/// [`Vector::p1`], [`Vector::p2`] and [`Vector::p3`], via the [`Index`] impl (0-based), or all at
/// once via [`Vector::as_array`] and [`Vector::into_array`].
///
/// [`bytemuck::Zeroable`] and [`bytemuck::Pod`] are implemented to allow safe transmutation when
/// the element type `T` also allows this.
///
/// [`Index`]: std::ops::Index
#[derive(Clone, Copy, Hash)]
#[repr(transparent)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vector<T = f64>([T; 3]);

unsafe impl<T: bytemuck::Zeroable> bytemuck::Zeroable for Vector<T> {}
unsafe impl<T: bytemuck::Pod> bytemuck::Pod for Vector<T> {}

impl<T: Zero> Vector<T> {
    /// A vector with each element initialized to 0.
    pub const ZERO: Self = Self([T::ZERO, T::ZERO, T::ZERO]);
}

impl<T> Vector<T> {
    /// Creates a vector from its three elements.
    ///
    /// # Examples
    ///
    /// ```
    /// # use linear_utils::*;
    /// let v = Vector::new(2, 3, 4);
    /// assert_eq!(v.p1(), 2);
    /// assert_eq!(v.p3(), 4);
    /// ```
    #[inline]
    pub const fn new(p1: T, p2: T, p3: T) -> Self {
        Self([p1, p2, p3])
    }

    /// Creates a vector where each element is initialized by invoking a closure with its index.
    ///
    /// Analogous to [`array::from_fn`].
    ///
    /// # Examples
    ///
    /// ```
    /// # use linear_utils::*;
    /// let v = Vector::from_fn(|i| i + 100);
    /// assert_eq!(v, vec3(100, 101, 102));
    /// ```
    pub fn from_fn<F>(cb: F) -> Self
    where
        F: FnMut(usize) -> T,
    {
        Self(array::from_fn(cb))
    }

    /// Copies the elements of a slice into a new vector.
    ///
    /// # Errors
    ///
    /// Returns an error if `elems` does not contain exactly 3 elements.
    ///
    /// # Examples
    ///
    /// ```
    /// # use linear_utils::*;
    /// assert_eq!(Vector::from_slice(&[1.0, 2.0, 3.0]).unwrap(), vec3(1.0, 2.0, 3.0));
    /// assert!(Vector::from_slice(&[1.0, 2.0]).is_err());
    /// ```
    pub fn from_slice(elems: &[T]) -> anyhow::Result<Self>
    where
        T: Copy,
    {
        match *elems {
            [p1, p2, p3] => Ok(Self::new(p1, p2, p3)),
            _ => bail!(
                "cannot create a vector from {} elements (expected 3)",
                elems.len()
            ),
        }
    }

    /// Applies a closure to each element, returning a new vector.
    ///
    /// # Examples
    ///
    /// ```
    /// # use linear_utils::*;
    /// let v = vec3(1, 2, 3).map(|i| i * 10);
    /// assert_eq!(v, vec3(10, 20, 30));
    /// ```
    pub fn map<F, U>(self, f: F) -> Vector<U>
    where
        F: FnMut(T) -> U,
    {
        Vector(self.0.map(f))
    }

    /// Returns a reference to the underlying elements as an array.
    #[inline]
    pub const fn as_array(&self) -> &[T; 3] {
        &self.0
    }

    /// Converts this [`Vector`] into an array of its elements.
    ///
    /// There is an equivalent [`From`] impl that can also be used, but this method is often shorter
    /// and requires no type annotation.
    #[inline]
    pub fn into_array(self) -> [T; 3] {
        self.0
    }
}

impl<T: Copy> Vector<T> {
    /// Returns the first element.
    #[inline]
    pub fn p1(&self) -> T {
        self.0[0]
    }

    /// Returns the second element.
    #[inline]
    pub fn p2(&self) -> T {
        self.0[1]
    }

    /// Returns the third element.
    #[inline]
    pub fn p3(&self) -> T {
        self.0[2]
    }
}

impl<T> Default for Vector<T>
where
    T: Default,
{
    #[inline]
    fn default() -> Self {
        Self::from_fn(|_| T::default())
    }
}

impl<T> From<[T; 3]> for Vector<T> {
    #[inline]
    fn from(value: [T; 3]) -> Self {
        Self(value)
    }
}

impl<T> From<Vector<T>> for [T; 3] {
    #[inline]
    fn from(value: Vector<T>) -> Self {
        value.0
    }
}

impl<T> fmt::Debug for Vector<T>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut tup = f.debug_tuple("");
        for elem in &self.0 {
            tup.field(elem);
        }
        tup.finish()
    }
}

impl<T> fmt::Display for Vector<T>
where
    T: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [p1, p2, p3] = &self.0;
        write!(f, "({p1}, {p2}, {p3})")
    }
}

impl<T> AsRef<[T; 3]> for Vector<T> {
    #[inline]
    fn as_ref(&self) -> &[T; 3] {
        &self.0
    }
}

/// Constructs a [`Vector`] from its three elements.
///
/// This is a shorthand for [`Vector::new`].
#[inline]
pub const fn vec3<T>(p1: T, p2: T, p3: T) -> Vector<T> {
    Vector([p1, p2, p3])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn access() {
        let v = Vector::new(2.0, 3.0, 4.0);
        assert_eq!(v.p1(), 2.0);
        assert_eq!(v.p2(), 3.0);
        assert_eq!(v.p3(), 4.0);
        assert_eq!(v[0], 2.0);
        assert_eq!(v[1], 3.0);
        assert_eq!(v[2], 4.0);
        assert_eq!(v.as_array(), &[2.0, 3.0, 4.0]);
        assert_eq!(v.into_array(), [2.0, 3.0, 4.0]);
    }

    #[test]
    fn stored_verbatim() {
        let v = vec3(f64::NAN, f64::INFINITY, -0.0);
        assert!(v.p1().is_nan());
        assert_eq!(v.p2(), f64::INFINITY);
        assert!(v.p3().is_sign_negative());
    }

    #[test]
    fn from_slice() {
        assert_eq!(Vector::from_slice(&[1, 2, 3]).unwrap(), [1, 2, 3]);

        let err = Vector::<i32>::from_slice(&[1, 2, 3, 4]).unwrap_err();
        assert_eq!(
            err.to_string(),
            "cannot create a vector from 4 elements (expected 3)"
        );
        assert!(Vector::<f64>::from_slice(&[]).is_err());
    }

    #[test]
    fn fmt() {
        assert_eq!(format!("{}", vec3(1.0, 0.5, 1.0)), "(1, 0.5, 1)");
        assert_eq!(format!("{:?}", vec3(1.0, 0.5, 1.0)), "(1.0, 0.5, 1.0)");
    }

    #[test]
    fn constants() {
        assert_eq!(Vector::<f32>::ZERO, [0.0, 0.0, 0.0]);
        assert_eq!(Vector::<i32>::default(), Vector::<i32>::ZERO);
    }

    #[test]
    fn pod() {
        let v = vec3(1.0f32, 2.0, 3.0);
        let raw: [f32; 3] = bytemuck::cast(v);
        assert_eq!(raw, [1.0, 2.0, 3.0]);
    }
}
