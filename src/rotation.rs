use std::fmt;

use crate::{Matrix, Number, Trig};

/// Builds a rotation about the origin from an angle in degrees.
///
/// The rotation lives in the upper-left 2x2 block of the derived [`Matrix`]:
///
/// ```text
///  cos(θ)  sin(θ)  0
/// -sin(θ)  cos(θ)  0
///  0       0       0
/// ```
///
/// Every other cell stays zero, including cell (3,3), so the derived matrix is not a homogeneous
/// rotation: transforming a point with `p3 = 1` yields `p3 = 0`.
///
/// The angle can be changed with [`RotationMatrix::set_degrees`], which recomputes the four
/// rotation cells from scratch. Nothing accumulates across updates.
///
/// # Examples
///
/// ```
/// # use linear_utils::*;
/// let mut rot = RotationMatrix::new(90.0_f64);
/// let v = multiply_matrix_with_vector(rot.matrix(), &vec3(1.0, 0.0, 0.0));
/// assert!((v.p2() + 1.0).abs() < 1e-9);
///
/// rot.set_degrees(0.0);
/// assert_eq!(*rot.matrix(), Matrix::from_rows([
///     [1.0, 0.0, 0.0],
///     [0.0, 1.0, 0.0],
///     [0.0, 0.0, 0.0],
/// ]));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RotationMatrix<T = f64> {
    degrees: T,
    matrix: Matrix<T>,
}

impl<T: Number + Trig + fmt::Debug> RotationMatrix<T> {
    /// Creates a [`RotationMatrix`] rotating by `degrees`.
    pub fn new(degrees: T) -> Self {
        let mut this = Self {
            degrees,
            matrix: Matrix::ZERO,
        };
        this.set_degrees(degrees);
        this
    }

    /// Changes the rotation angle and recomputes the derived matrix.
    ///
    /// Only cells (1,1), (2,1), (1,2) and (2,2) are written.
    pub fn set_degrees(&mut self, degrees: T) {
        self.degrees = degrees;
        let radians = degrees.degrees_to_radians();
        self.update_matrix(radians);
        log::trace!(
            "rotation by {degrees:?} degrees ({radians:?} rad): {:?}",
            self.matrix
        );
    }

    fn update_matrix(&mut self, radians: T) {
        let (sin, cos) = (radians.sin(), radians.cos());
        self.matrix.set_p11(cos);
        self.matrix.set_p21(-sin);
        self.matrix.set_p12(sin);
        self.matrix.set_p22(cos);
    }
}

impl<T: Copy> RotationMatrix<T> {
    /// Returns the rotation angle, in degrees.
    #[inline]
    pub fn degrees(&self) -> T {
        self.degrees
    }
}

impl<T> RotationMatrix<T> {
    /// Returns the derived rotation [`Matrix`].
    #[inline]
    pub fn matrix(&self) -> &Matrix<T> {
        &self.matrix
    }
}

impl<T> From<RotationMatrix<T>> for Matrix<T> {
    fn from(rotation: RotationMatrix<T>) -> Self {
        rotation.matrix
    }
}

// Only the angle is stored; the matrix is recomputed on load.
#[cfg(feature = "serde")]
impl<T: serde::Serialize> serde::Serialize for RotationMatrix<T> {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeStruct;

        let mut state = serializer.serialize_struct("RotationMatrix", 1)?;
        state.serialize_field("degrees", &self.degrees)?;
        state.end()
    }
}

#[cfg(feature = "serde")]
impl<'de, T> serde::Deserialize<'de> for RotationMatrix<T>
where
    T: serde::Deserialize<'de> + Number + Trig + fmt::Debug,
{
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(serde::Deserialize)]
        #[serde(rename = "RotationMatrix", deny_unknown_fields)]
        struct Repr<U> {
            degrees: U,
        }

        let Repr { degrees } = Repr::deserialize(deserializer)?;
        Ok(Self::new(degrees))
    }
}
