//! Implementations of `std::ops` and comparison traits.

use std::ops::Index;

use approx::{AbsDiffEq, RelativeEq, UlpsEq};

use super::Vector;

impl<T> Index<usize> for Vector<T> {
    type Output = T;

    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

// More general impl than what the derive generates.
impl<T, U> PartialEq<Vector<U>> for Vector<T>
where
    T: PartialEq<U>,
{
    fn eq(&self, other: &Vector<U>) -> bool {
        self.0 == other.0
    }
}

impl<T> Eq for Vector<T> where T: Eq {}

impl<T, U> PartialEq<[U; 3]> for Vector<T>
where
    T: PartialEq<U>,
{
    fn eq(&self, other: &[U; 3]) -> bool {
        self.0.eq(other)
    }
}

impl<T, U> PartialEq<Vector<U>> for [T; 3]
where
    T: PartialEq<U>,
{
    fn eq(&self, other: &Vector<U>) -> bool {
        *self == other.0
    }
}

impl<T> AbsDiffEq for Vector<T>
where
    T: AbsDiffEq,
    T::Epsilon: Copy,
{
    type Epsilon = T::Epsilon;

    fn default_epsilon() -> T::Epsilon {
        T::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: T::Epsilon) -> bool {
        self.0
            .iter()
            .zip(&other.0)
            .all(|(a, b)| a.abs_diff_eq(b, epsilon))
    }
}

impl<T> RelativeEq for Vector<T>
where
    T: RelativeEq,
    T::Epsilon: Copy,
{
    fn default_max_relative() -> T::Epsilon {
        T::default_max_relative()
    }

    fn relative_eq(&self, other: &Self, epsilon: T::Epsilon, max_relative: T::Epsilon) -> bool {
        self.0
            .iter()
            .zip(&other.0)
            .all(|(a, b)| a.relative_eq(b, epsilon, max_relative))
    }
}

impl<T> UlpsEq for Vector<T>
where
    T: UlpsEq,
    T::Epsilon: Copy,
{
    fn default_max_ulps() -> u32 {
        T::default_max_ulps()
    }

    fn ulps_eq(&self, other: &Self, epsilon: T::Epsilon, max_ulps: u32) -> bool {
        self.0
            .iter()
            .zip(&other.0)
            .all(|(a, b)| a.ulps_eq(b, epsilon, max_ulps))
    }
}

#[cfg(test)]
mod tests {
    use approx::{assert_abs_diff_eq, assert_abs_diff_ne, assert_relative_eq};

    use crate::vec3;

    #[test]
    fn eq() {
        assert_eq!(vec3(1, 2, 3), vec3(1, 2, 3));
        assert_ne!(vec3(1, 2, 3), vec3(1, 2, 4));
        assert_eq!([1, 2, 3], vec3(1, 2, 3));
        assert_ne!(vec3(f64::NAN, 0.0, 0.0), vec3(f64::NAN, 0.0, 0.0));
    }

    #[test]
    fn approx() {
        assert_abs_diff_eq!(vec3(1.0, 2.0, 3.0), vec3(1.0, 2.0, 3.0 + 1e-12), epsilon = 1e-9);
        assert_abs_diff_ne!(vec3(1.0, 2.0, 3.0), vec3(1.0, 2.1, 3.0), epsilon = 1e-9);
        assert_relative_eq!(
            vec3(1000.0, 0.0, -5.0),
            vec3(1000.001, 0.0, -5.0),
            max_relative = 1e-5
        );
    }
}
