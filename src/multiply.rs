//! Matrix-vector and matrix-matrix products.
//!
//! Both functions borrow their inputs and return a freshly constructed value; the inputs are never
//! modified. No special treatment is given to `NaN` or infinities, they propagate according to the
//! usual floating-point rules.

use crate::{Matrix, Number, Vector};

/// Applies `matrix` to `vector`.
///
/// Element `i` of the result is row `i` of `matrix` dotted with `vector`.
///
/// # Examples
///
/// ```
/// # use linear_utils::*;
/// let v = multiply_matrix_with_vector(&Matrix::IDENTITY, &vec3(2.0, 3.0, 4.0));
/// assert_eq!(v, vec3(2.0, 3.0, 4.0));
/// ```
pub fn multiply_matrix_with_vector<T: Number>(
    matrix: &Matrix<T>,
    vector: &Vector<T>,
) -> Vector<T> {
    let [p1, p2, p3] = *vector.as_array();

    Vector::new(
        p1 * matrix.p11() + p2 * matrix.p12() + p3 * matrix.p13(),
        p1 * matrix.p21() + p2 * matrix.p22() + p3 * matrix.p23(),
        p1 * matrix.p31() + p2 * matrix.p32() + p3 * matrix.p33(),
    )
}

/// Computes the product `matrix_a * matrix_b`.
///
/// The cell in row `i`, column `j` of the result is row `i` of `matrix_a` dotted with column `j`
/// of `matrix_b`. Applying the result to a vector is the same as applying `matrix_b` first and
/// `matrix_a` second.
///
/// # Examples
///
/// ```
/// # use linear_utils::*;
/// let a = Matrix::from_rows([
///     [1, 2, 0],
///     [0, 1, 0],
///     [0, 0, 1],
/// ]);
/// let b = Matrix::from_rows([
///     [1, 0, 0],
///     [3, 1, 0],
///     [0, 0, 1],
/// ]);
/// assert_eq!(multiply_matrix_with_matrix(&a, &b), Matrix::from_rows([
///     [7, 2, 0],
///     [3, 1, 0],
///     [0, 0, 1],
/// ]));
/// ```
pub fn multiply_matrix_with_matrix<T: Number>(
    matrix_a: &Matrix<T>,
    matrix_b: &Matrix<T>,
) -> Matrix<T> {
    let (a, b) = (matrix_a, matrix_b);
    Matrix::from_fn(|i, j| a[(i, 0)] * b[(0, j)] + a[(i, 1)] * b[(1, j)] + a[(i, 2)] * b[(2, j)])
}
