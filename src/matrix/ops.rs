use std::ops::{Index, IndexMut, Mul};

use approx::{AbsDiffEq, RelativeEq, UlpsEq};

use crate::{multiply_matrix_with_matrix, multiply_matrix_with_vector, Matrix, Number, Vector};

impl<T> Index<(usize, usize)> for Matrix<T> {
    type Output = T;

    #[inline]
    fn index(&self, (row, col): (usize, usize)) -> &Self::Output {
        &self.0[col][row]
    }
}

impl<T> IndexMut<(usize, usize)> for Matrix<T> {
    #[inline]
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut Self::Output {
        &mut self.0[col][row]
    }
}

// More general `PartialEq` impl than what the derive generates.
impl<T, U> PartialEq<Matrix<U>> for Matrix<T>
where
    T: PartialEq<U>,
{
    fn eq(&self, other: &Matrix<U>) -> bool {
        self.0.eq(&other.0)
    }
}

impl<T> Eq for Matrix<T> where T: Eq {}

impl<T> AbsDiffEq for Matrix<T>
where
    T: AbsDiffEq,
    T::Epsilon: Copy,
{
    type Epsilon = T::Epsilon;

    fn default_epsilon() -> T::Epsilon {
        T::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: T::Epsilon) -> bool {
        for (a, b) in self.0.iter().flatten().zip(other.0.iter().flatten()) {
            if !a.abs_diff_eq(b, epsilon) {
                return false;
            }
        }
        true
    }
}

impl<T> RelativeEq for Matrix<T>
where
    T: RelativeEq,
    T::Epsilon: Copy,
{
    fn default_max_relative() -> T::Epsilon {
        T::default_max_relative()
    }

    fn relative_eq(&self, other: &Self, epsilon: T::Epsilon, max_relative: T::Epsilon) -> bool {
        for (a, b) in self.0.iter().flatten().zip(other.0.iter().flatten()) {
            if !a.relative_eq(b, epsilon, max_relative) {
                return false;
            }
        }
        true
    }
}

impl<T> UlpsEq for Matrix<T>
where
    T: UlpsEq,
    T::Epsilon: Copy,
{
    fn default_max_ulps() -> u32 {
        T::default_max_ulps()
    }

    fn ulps_eq(&self, other: &Self, epsilon: T::Epsilon, max_ulps: u32) -> bool {
        for (a, b) in self.0.iter().flatten().zip(other.0.iter().flatten()) {
            if !a.ulps_eq(b, epsilon, max_ulps) {
                return false;
            }
        }
        true
    }
}

/// Matrix * Column Vector.
impl<T> Mul<Vector<T>> for Matrix<T>
where
    T: Number,
{
    type Output = Vector<T>;

    fn mul(self, rhs: Vector<T>) -> Self::Output {
        multiply_matrix_with_vector(&self, &rhs)
    }
}

/// Matrix * Matrix.
impl<T> Mul<Matrix<T>> for Matrix<T>
where
    T: Number,
{
    type Output = Matrix<T>;

    fn mul(self, rhs: Matrix<T>) -> Self::Output {
        multiply_matrix_with_matrix(&self, &rhs)
    }
}

#[cfg(test)]
mod tests {
    use approx::{assert_abs_diff_eq, assert_abs_diff_ne, assert_ulps_eq};

    use crate::{vec3, Matrix};

    #[test]
    fn index() {
        let mut mat = Matrix::new(1, 2, 3, 4, 5, 6, 7, 8, 9);
        assert_eq!(mat[(0, 0)], 1);
        assert_eq!(mat[(2, 0)], 3);
        assert_eq!(mat[(0, 2)], 7);

        mat[(1, 2)] = 80;
        assert_eq!(mat.p23(), 80);
    }

    #[test]
    #[should_panic]
    fn index_out_of_bounds() {
        let mat = Matrix::<f64>::IDENTITY;
        let _ = mat[(3, 0)];
    }

    #[test]
    fn approx() {
        let mut mat = Matrix::<f64>::IDENTITY;
        mat.set_p32(1e-12);
        assert_abs_diff_eq!(mat, Matrix::<f64>::IDENTITY, epsilon = 1e-9);
        assert_abs_diff_ne!(mat, Matrix::<f64>::IDENTITY, epsilon = 1e-15);
        assert_ulps_eq!(Matrix::<f32>::IDENTITY, Matrix::<f32>::IDENTITY);
    }

    #[test]
    fn operators() {
        let mat = Matrix::from_rows([[0, 1, 0], [2, 3, 0], [0, 0, 1]]);
        assert_eq!(mat * vec3(4, 5, 6), [4 * 0 + 5 * 1, 4 * 2 + 5 * 3, 6]);
        assert_eq!(mat * Matrix::<i32>::IDENTITY, mat);
        assert_eq!(Matrix::<i32>::IDENTITY * mat, mat);
    }
}
