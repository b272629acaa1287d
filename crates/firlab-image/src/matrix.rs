use crate::error::MatrixError;

/// Matrix size in rows and columns.
///
/// Rows are the samples along the filtering axis (frames) and columns the
/// independent channels (features).
///
/// # Examples
///
/// ```
/// use firlab_image::MatrixSize;
///
/// let size = MatrixSize { rows: 10, cols: 20 };
///
/// assert_eq!(size.rows, 10);
/// assert_eq!(size.cols, 20);
/// assert_eq!(size.numel(), 200);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct MatrixSize {
    /// Number of rows
    pub rows: usize,
    /// Number of columns
    pub cols: usize,
}

impl MatrixSize {
    /// Total number of elements.
    #[inline]
    pub fn numel(&self) -> usize {
        self.rows * self.cols
    }
}

impl std::fmt::Display for MatrixSize {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "MatrixSize {{ rows: {}, cols: {} }}", self.rows, self.cols)
    }
}

impl From<[usize; 2]> for MatrixSize {
    fn from(size: [usize; 2]) -> Self {
        MatrixSize {
            rows: size[0],
            cols: size[1],
        }
    }
}

/// A dense 2D buffer of values stored in row-major order.
///
/// The matrix owns its data. Filtering operations never mutate their input and
/// return a freshly allocated matrix of the same size.
#[derive(Clone, Debug, PartialEq)]
pub struct Matrix<T> {
    size: MatrixSize,
    data: Vec<T>,
}

impl<T> Matrix<T> {
    /// Create a new matrix from row-major data.
    ///
    /// # Arguments
    ///
    /// * `size` - The size of the matrix.
    /// * `data` - The row-major data of the matrix.
    ///
    /// # Errors
    ///
    /// If the length of the data does not match the matrix size, an error is returned.
    ///
    /// # Examples
    ///
    /// ```
    /// use firlab_image::{Matrix, MatrixSize};
    ///
    /// let matrix = Matrix::new(MatrixSize { rows: 2, cols: 3 }, vec![0f32; 6]).unwrap();
    ///
    /// assert_eq!(matrix.rows(), 2);
    /// assert_eq!(matrix.cols(), 3);
    /// ```
    pub fn new(size: MatrixSize, data: Vec<T>) -> Result<Self, MatrixError> {
        if data.len() != size.numel() {
            return Err(MatrixError::InvalidDataLength(data.len(), size.numel()));
        }
        Ok(Self { size, data })
    }

    /// Create a new matrix filled with the given value.
    pub fn from_size_val(size: MatrixSize, val: T) -> Self
    where
        T: Clone,
    {
        Self {
            size,
            data: vec![val; size.numel()],
        }
    }

    /// Create a new matrix filled with zeros.
    pub fn zeros(size: MatrixSize) -> Self
    where
        T: Clone + num_traits::Zero,
    {
        Self::from_size_val(size, T::zero())
    }

    /// Create a new matrix computing every element from its `(row, col)` position.
    ///
    /// # Examples
    ///
    /// ```
    /// use firlab_image::{Matrix, MatrixSize};
    ///
    /// let matrix = Matrix::from_fn(MatrixSize { rows: 2, cols: 2 }, |r, c| (r * 2 + c) as f32);
    ///
    /// assert_eq!(matrix.as_slice(), &[0.0, 1.0, 2.0, 3.0]);
    /// ```
    pub fn from_fn(size: MatrixSize, mut f: impl FnMut(usize, usize) -> T) -> Self {
        let mut data = Vec::with_capacity(size.numel());
        for r in 0..size.rows {
            for c in 0..size.cols {
                data.push(f(r, c));
            }
        }
        Self { size, data }
    }

    /// Get the size of the matrix.
    #[inline]
    pub fn size(&self) -> MatrixSize {
        self.size
    }

    /// Get the number of rows.
    #[inline]
    pub fn rows(&self) -> usize {
        self.size.rows
    }

    /// Get the number of columns.
    #[inline]
    pub fn cols(&self) -> usize {
        self.size.cols
    }

    /// Get the number of elements.
    #[inline]
    pub fn numel(&self) -> usize {
        self.data.len()
    }

    /// Whether the matrix holds no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Get the row-major data as a slice.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Get the row-major data as a mutable slice.
    #[inline]
    pub fn as_slice_mut(&mut self) -> &mut [T] {
        &mut self.data
    }

    /// Consume the matrix and return its row-major data.
    pub fn into_vec(self) -> Vec<T> {
        self.data
    }

    /// Get the element at the given position, if any.
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> Option<&T> {
        if row >= self.size.rows || col >= self.size.cols {
            return None;
        }
        self.data.get(row * self.size.cols + col)
    }

    /// Get a mutable reference to the element at the given position, if any.
    #[inline]
    pub fn get_mut(&mut self, row: usize, col: usize) -> Option<&mut T> {
        if row >= self.size.rows || col >= self.size.cols {
            return None;
        }
        self.data.get_mut(row * self.size.cols + col)
    }

    /// Get a row as a slice.
    pub fn row(&self, row: usize) -> Option<&[T]> {
        if row >= self.size.rows {
            return None;
        }
        let start = row * self.size.cols;
        Some(&self.data[start..start + self.size.cols])
    }

    /// Gather a column into a contiguous vector.
    ///
    /// # Errors
    ///
    /// If the column index is out of bounds, an error is returned.
    pub fn column(&self, col: usize) -> Result<Vec<T>, MatrixError>
    where
        T: Copy,
    {
        if col >= self.size.cols {
            return Err(MatrixError::ColumnIndexOutOfBounds(col, self.size.cols));
        }
        Ok(self
            .data
            .iter()
            .skip(col)
            .step_by(self.size.cols)
            .copied()
            .collect())
    }

    /// Scatter the given values into a column.
    ///
    /// # Errors
    ///
    /// If the column index is out of bounds or the number of values does not
    /// match the number of rows, an error is returned.
    pub fn set_column(&mut self, col: usize, values: &[T]) -> Result<(), MatrixError>
    where
        T: Copy,
    {
        if col >= self.size.cols {
            return Err(MatrixError::ColumnIndexOutOfBounds(col, self.size.cols));
        }
        if values.len() != self.size.rows {
            return Err(MatrixError::InvalidDataLength(values.len(), self.size.rows));
        }
        let cols = self.size.cols;
        self.data
            .iter_mut()
            .skip(col)
            .step_by(cols)
            .zip(values.iter())
            .for_each(|(dst, &src)| *dst = src);
        Ok(())
    }

    /// Apply a function to every element and return a new matrix.
    pub fn map<U>(&self, f: impl Fn(&T) -> U) -> Matrix<U> {
        Matrix {
            size: self.size,
            data: self.data.iter().map(f).collect(),
        }
    }
}
