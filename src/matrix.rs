use std::{array, fmt};

use anyhow::bail;

use crate::{One, Zero};

mod ops;

/// A column-major 3x3 matrix with element type `T`.
///
/// Cells are named `p{row}{column}` with 1-based rows and columns, matching common mathematical
/// notation:
///
/// ```text
/// p11 p12 p13
/// p21 p22 p23
/// p31 p32 p33
/// ```
///
/// # Construction
///
/// There are several ways to create a [`Matrix`]:
///
/// - [`Matrix::new`] takes the nine cells in *column-major* order: column 1 top-to-bottom, then
///   column 2, then column 3.
/// - [`Matrix::from_rows`] and [`Matrix::from_columns`] take an array of rows or columns.
/// - [`Matrix::from_fn`] will create each element by invoking a closure with its row and column.
/// - [`Matrix::from_slice`] copies nine column-major elements out of a slice.
/// - [`ScaleMatrix`] and [`RotationMatrix`] derive specialized matrices.
///
/// Additionally, [`Matrix::ZERO`] and [`Matrix::IDENTITY`] are provided as associated constants.
///
/// No invariants are enforced on the values: matrices need not be invertible or orthogonal.
///
/// # Element Access
///
/// Every cell has a named getter and setter, eg. [`Matrix::p21`] and [`Matrix::set_p21`].
///
/// [`Matrix`] also implements the [`Index`] and [`IndexMut`] traits for tuples of
/// `(usize, usize)`. The first element of the tuple is the *row*, the second is the *column*.
/// Unlike the named accessors, these indices are 0-based.
///
/// ```
/// # use linear_utils::*;
/// let mut mat = Matrix::<i32>::ZERO;
/// mat.set_p12(4);
/// assert_eq!(mat[(0, 1)], 4);
/// mat[(2, 0)] = 7;
/// assert_eq!(mat.p31(), 7);
/// ```
///
/// Indexing out of bounds will result in a panic, just like it does for slices. [`Matrix::get`]
/// returns an [`Option`] instead.
///
/// [`ScaleMatrix`]: crate::ScaleMatrix
/// [`RotationMatrix`]: crate::RotationMatrix
/// [`Index`]: std::ops::Index
/// [`IndexMut`]: std::ops::IndexMut
#[derive(Clone, Copy, Hash)]
#[repr(transparent)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Matrix<T = f64>([[T; 3]; 3]);

unsafe impl<T: bytemuck::Zeroable> bytemuck::Zeroable for Matrix<T> {}
unsafe impl<T: bytemuck::Pod> bytemuck::Pod for Matrix<T> {}

impl<T> Matrix<T> {
    /// Creates a [`Matrix`] from its cells, given in column-major order.
    ///
    /// # Examples
    ///
    /// ```
    /// # use linear_utils::*;
    /// let mat = Matrix::new(
    ///     1, 4, 7, // column 1
    ///     2, 5, 8, // column 2
    ///     3, 6, 9, // column 3
    /// );
    /// assert_eq!(mat, Matrix::from_rows([
    ///     [1, 2, 3],
    ///     [4, 5, 6],
    ///     [7, 8, 9],
    /// ]));
    /// ```
    #[allow(clippy::too_many_arguments)]
    #[rustfmt::skip]
    pub const fn new(
        p11: T, p21: T, p31: T,
        p12: T, p22: T, p32: T,
        p13: T, p23: T, p33: T,
    ) -> Self {
        Self([
            [p11, p21, p31],
            [p12, p22, p32],
            [p13, p23, p33],
        ])
    }

    /// Creates a [`Matrix`] from an array of rows.
    pub fn from_rows(rows: [[T; 3]; 3]) -> Self {
        let [[p11, p12, p13], [p21, p22, p23], [p31, p32, p33]] = rows;
        Self::new(p11, p21, p31, p12, p22, p32, p13, p23, p33)
    }

    /// Creates a [`Matrix`] from an array of columns.
    pub const fn from_columns(columns: [[T; 3]; 3]) -> Self {
        Self(columns)
    }

    /// Creates a [`Matrix`] by invoking a closure with the 0-based position (row and column) of
    /// each element.
    ///
    /// # Examples
    ///
    /// ```
    /// # use linear_utils::*;
    /// let mat = Matrix::from_fn(|row, col| row * 10 + col);
    /// assert_eq!(mat, Matrix::from_rows([
    ///     [ 0,  1,  2],
    ///     [10, 11, 12],
    ///     [20, 21, 22],
    /// ]));
    /// ```
    pub fn from_fn<F>(mut cb: F) -> Self
    where
        F: FnMut(usize, usize) -> T,
    {
        Self(array::from_fn(|col| array::from_fn(|row| cb(row, col))))
    }

    /// Copies nine column-major elements out of a slice into a new [`Matrix`].
    ///
    /// # Errors
    ///
    /// Returns an error if `elems` does not contain exactly 9 elements.
    pub fn from_slice(elems: &[T]) -> anyhow::Result<Self>
    where
        T: Copy,
    {
        match *elems {
            [p11, p21, p31, p12, p22, p32, p13, p23, p33] => {
                Ok(Self::new(p11, p21, p31, p12, p22, p32, p13, p23, p33))
            }
            _ => bail!(
                "cannot create a 3x3 matrix from {} elements (expected 9)",
                elems.len()
            ),
        }
    }

    /// Applies a closure to each element, returning a new matrix.
    pub fn map<F, U>(self, mut f: F) -> Matrix<U>
    where
        F: FnMut(T) -> U,
    {
        Matrix(self.0.map(|column| column.map(&mut f)))
    }

    /// Returns a reference to the element at the 0-based `(row, col)`, or [`None`] if out of
    /// bounds.
    pub fn get(&self, row: usize, col: usize) -> Option<&T> {
        self.0.get(col).and_then(|col| col.get(row))
    }

    /// Returns a mutable reference to the element at the 0-based `(row, col)`, or [`None`] if out
    /// of bounds.
    pub fn get_mut(&mut self, row: usize, col: usize) -> Option<&mut T> {
        self.0.get_mut(col).and_then(|col| col.get_mut(row))
    }

    /// Returns the columns of this matrix.
    #[inline]
    pub const fn as_columns(&self) -> &[[T; 3]; 3] {
        &self.0
    }
}

macro_rules! cells {
    ($($get:ident, $set:ident => ($row:literal, $col:literal);)+) => {
        impl<T: Copy> Matrix<T> {
            $(
                #[doc = concat!("Returns the cell in row ", stringify!($row), ", column ", stringify!($col), ".")]
                #[inline]
                pub fn $get(&self) -> T {
                    self.0[$col - 1][$row - 1]
                }

                #[doc = concat!("Overwrites the cell in row ", stringify!($row), ", column ", stringify!($col), ".")]
                #[inline]
                pub fn $set(&mut self, value: T) {
                    self.0[$col - 1][$row - 1] = value;
                }
            )+
        }
    };
}

cells! {
    p11, set_p11 => (1, 1);
    p21, set_p21 => (2, 1);
    p31, set_p31 => (3, 1);
    p12, set_p12 => (1, 2);
    p22, set_p22 => (2, 2);
    p32, set_p32 => (3, 2);
    p13, set_p13 => (1, 3);
    p23, set_p23 => (2, 3);
    p33, set_p33 => (3, 3);
}

impl<T: Zero> Matrix<T> {
    /// A matrix with every element set to 0.
    #[rustfmt::skip]
    pub const ZERO: Self = Self::new(
        T::ZERO, T::ZERO, T::ZERO,
        T::ZERO, T::ZERO, T::ZERO,
        T::ZERO, T::ZERO, T::ZERO,
    );
}

impl<T: Zero + One> Matrix<T> {
    /// The identity matrix.
    ///
    /// The matrix has the value 1 on its diagonal and 0 everywhere else.
    ///
    /// Multiplying any vector or matrix with this matrix returns it unchanged.
    #[rustfmt::skip]
    pub const IDENTITY: Self = Self::new(
        T::ONE,  T::ZERO, T::ZERO,
        T::ZERO, T::ONE,  T::ZERO,
        T::ZERO, T::ZERO, T::ONE,
    );
}

impl<T> Default for Matrix<T>
where
    T: Default,
{
    fn default() -> Self {
        Self::from_fn(|_, _| T::default())
    }
}

impl<T: fmt::Debug> fmt::Debug for Matrix<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        struct FormatRow<'a, T: fmt::Debug>(&'a Matrix<T>, usize);
        impl<'a, T: fmt::Debug> fmt::Debug for FormatRow<'a, T> {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "[")?;
                for col in 0..3 {
                    if col != 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{:?}", self.0[(self.1, col)])?;
                }
                write!(f, "]")?;
                Ok(())
            }
        }

        let mut list = f.debug_list();
        for row in 0..3 {
            list.entry(&FormatRow(self, row));
        }
        list.finish()
    }
}
