use std::fmt;

use crate::{Matrix, Zero};

/// Builds a diagonal scale matrix from two independent scale factors.
///
/// The derived [`Matrix`] has `s1` in cell (1,1), `s2` in cell (2,2), and zero everywhere else.
/// That includes cell (3,3), so the third coordinate of any transformed vector is dropped to zero;
/// this is *not* a homogeneous scale transform.
///
/// `s1` and `s2` are plain fields. Changing them after construction does not touch the derived
/// matrix, which keeps the factors it was built with. Create a new [`ScaleMatrix`] to change the
/// scale.
///
/// With the `serde` feature, only `s1` and `s2` are serialized. Deserializing goes through
/// [`ScaleMatrix::new`], so a value whose fields were changed comes back with a matching matrix.
///
/// # Examples
///
/// ```
/// # use linear_utils::*;
/// let scale = ScaleMatrix::new(2.0, 3.0);
/// let v = multiply_matrix_with_vector(scale.matrix(), &vec3(1.0, 1.0, 1.0));
/// assert_eq!(v, vec3(2.0, 3.0, 0.0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScaleMatrix<T = f64> {
    /// Scale factor along the first axis.
    pub s1: T,
    /// Scale factor along the second axis.
    pub s2: T,
    matrix: Matrix<T>,
}

impl<T: Zero + Copy + fmt::Debug> ScaleMatrix<T> {
    /// Creates a [`ScaleMatrix`] scaling the first axis by `s1` and the second by `s2`.
    pub fn new(s1: T, s2: T) -> Self {
        let mut matrix = Matrix::<T>::ZERO;
        matrix.set_p11(s1);
        matrix.set_p22(s2);
        log::trace!("scale matrix for s1={s1:?}, s2={s2:?}: {matrix:?}");

        Self { s1, s2, matrix }
    }
}

impl<T> ScaleMatrix<T> {
    /// Returns the derived scale [`Matrix`].
    ///
    /// The matrix reflects the scale factors passed to [`ScaleMatrix::new`].
    #[inline]
    pub fn matrix(&self) -> &Matrix<T> {
        &self.matrix
    }
}

impl<T> From<ScaleMatrix<T>> for Matrix<T> {
    fn from(scale: ScaleMatrix<T>) -> Self {
        scale.matrix
    }
}

// Only the scale factors are stored; the matrix is rebuilt from them on load.
#[cfg(feature = "serde")]
impl<T: serde::Serialize> serde::Serialize for ScaleMatrix<T> {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeStruct;

        let mut state = serializer.serialize_struct("ScaleMatrix", 2)?;
        state.serialize_field("s1", &self.s1)?;
        state.serialize_field("s2", &self.s2)?;
        state.end()
    }
}

#[cfg(feature = "serde")]
impl<'de, T> serde::Deserialize<'de> for ScaleMatrix<T>
where
    T: serde::Deserialize<'de> + Zero + Copy + fmt::Debug,
{
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(serde::Deserialize)]
        #[serde(rename = "ScaleMatrix", deny_unknown_fields)]
        struct Repr<U> {
            s1: U,
            s2: U,
        }

        let Repr { s1, s2 } = Repr::deserialize(deserializer)?;
        Ok(Self::new(s1, s2))
    }
}
