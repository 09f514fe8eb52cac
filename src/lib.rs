//! Fixed-size 3-component vectors and 3x3 matrices.
//!
//! This library provides [`Vector`] and [`Matrix`], the two products between them
//! ([`multiply_matrix_with_vector`] and [`multiply_matrix_with_matrix`]), and two builders for
//! specialized matrices: [`ScaleMatrix`] and [`RotationMatrix`].
//!
//! ```
//! use linear_utils::*;
//!
//! let scale = ScaleMatrix::new(2.0, 3.0);
//! let rotation = RotationMatrix::new(90.0);
//! let combined = multiply_matrix_with_matrix(rotation.matrix(), scale.matrix());
//!
//! let v = multiply_matrix_with_vector(&combined, &vec3(1.0, 1.0, 1.0));
//! approx::assert_abs_diff_eq!(v, vec3(3.0, -2.0, 0.0), epsilon = 1e-9);
//! ```
//!
//! # Goals & Non-Goals
//!
//! - Support exactly one vector size (3) and one matrix size (3x3). There are no dynamically-sized
//!   or otherwise-sized types.
//! - Store matrices in a single, column-major, unpadded layout, which is also the argument order
//!   of [`Matrix::new`].
//! - Be generic over the element type (defaulting to [`f64`]), but don't try to support
//!   non-[`Copy`] numeric types.
//! - Don't validate anything. Any value of the element type is accepted, and `NaN` and infinities
//!   propagate through the arithmetic like they normally would.
//! - Inversion, decompositions, normalization, dot and cross products are out of scope.
//!
//! # Specialized matrices
//!
//! Both [`ScaleMatrix`] and [`RotationMatrix`] leave cell (3,3) of their derived matrix at zero.
//! This means they are *not* homogeneous transforms: applying them to a vector always zeroes its
//! third component.
//!
//! # Crate Features
//!
//! - `serde`: implements `Serialize` and `Deserialize` for all public types. A [`RotationMatrix`]
//!   is stored as its angle only.

mod matrix;
mod multiply;
mod rotation;
mod scale;
mod traits;
mod vector;

pub use matrix::*;
pub use multiply::*;
pub use rotation::*;
pub use scale::*;
pub use traits::*;
pub use vector::*;
