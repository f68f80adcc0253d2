use core::fmt;

use crate::dtype::Dtype;
use crate::element::{Element, dtype_of};
use crate::error::ArrayError;

// -----------------------------------------------------------------------------
// NdArray

/// A dense, strided, typed in-memory buffer.
///
/// The array owns a flat byte buffer and interprets it through numpy-style
/// metadata: a `shape` (extent per dimension), a [`Dtype`] (element type),
/// and byte `strides` (offset step per dimension). Negative strides and
/// overlapping views are representable; the constructor only requires that
/// every reachable element stays inside the buffer.
///
/// # Examples
///
/// ```
/// use remold_ndarray::NdArray;
///
/// let array = NdArray::from_vec(vec![1_i32, 2, 3, 4, 5, 6], &[2, 3]).unwrap();
///
/// assert_eq!(array.shape(), &[2, 3]);
/// assert_eq!(array.strides(), &[12, 4]);
/// assert_eq!(array.get::<i32>(&[1, 2]), Some(6));
/// ```
#[derive(Clone, PartialEq)]
pub struct NdArray {
    shape: Vec<usize>,
    strides: Vec<isize>,
    dtype: Dtype,
    buffer: Vec<u8>,
}

impl NdArray {
    /// Creates an array over `buffer`, honoring `shape`, `dtype`, and
    /// `strides` exactly.
    ///
    /// # Errors
    ///
    /// - [`ArrayError::DimensionMismatch`] if `shape` and `strides`
    ///   disagree on the number of dimensions.
    /// - [`ArrayError::BufferMismatch`] if an element reachable through
    ///   the metadata would fall outside `buffer`.
    pub fn from_parts(
        shape: Vec<usize>,
        dtype: Dtype,
        buffer: Vec<u8>,
        strides: Vec<isize>,
    ) -> Result<Self, ArrayError> {
        if shape.len() != strides.len() {
            return Err(ArrayError::DimensionMismatch {
                shape: shape.len(),
                strides: strides.len(),
            });
        }

        if !fits_in_buffer(&shape, &strides, dtype.size(), buffer.len()) {
            return Err(ArrayError::BufferMismatch {
                len: buffer.len(),
                shape,
                strides,
                dtype: dtype.name().into(),
                size: dtype.size(),
            });
        }

        Ok(Self {
            shape,
            strides,
            dtype,
            buffer,
        })
    }

    /// Creates a C-contiguous array from typed elements.
    ///
    /// # Errors
    ///
    /// [`ArrayError::ElementCountMismatch`] if `data.len()` differs from
    /// the product of `shape`.
    pub fn from_vec<T: Element>(data: Vec<T>, shape: &[usize]) -> Result<Self, ArrayError> {
        let count: usize = shape.iter().product();
        if data.len() != count {
            return Err(ArrayError::ElementCountMismatch {
                provided: data.len(),
                shape: shape.to_vec(),
            });
        }

        let mut buffer = Vec::with_capacity(count * T::SIZE);
        for value in &data {
            value.write_to(&mut buffer);
        }

        Ok(Self {
            shape: shape.to_vec(),
            strides: c_contiguous_strides(shape, T::SIZE),
            dtype: dtype_of::<T>(),
            buffer,
        })
    }

    /// Returns the extent of each dimension.
    #[inline]
    pub fn shape(&self) -> &[usize] {
        &self.shape
    }

    /// Returns the byte stride of each dimension.
    #[inline]
    pub fn strides(&self) -> &[isize] {
        &self.strides
    }

    /// Returns the element type.
    #[inline]
    pub fn dtype(&self) -> &Dtype {
        &self.dtype
    }

    /// Returns the underlying byte buffer, in stored (not logical) order.
    #[inline]
    pub fn buffer(&self) -> &[u8] {
        &self.buffer
    }

    /// Returns the number of elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.shape.iter().product()
    }

    /// Returns `true` if the array holds no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns whether the buffer is laid out in row-major order with no
    /// gaps, so logical order and storage order coincide.
    pub fn is_c_contiguous(&self) -> bool {
        self.strides == c_contiguous_strides(&self.shape, self.dtype.size())
    }

    /// Reads the element at `index` as `T`.
    ///
    /// Returns `None` if the index is out of bounds, has the wrong number
    /// of dimensions, or `T` does not match the array's dtype.
    pub fn get<T: Element>(&self, index: &[usize]) -> Option<T> {
        if T::DTYPE != self.dtype.name() || index.len() != self.shape.len() {
            return None;
        }

        let mut offset = 0_isize;
        for ((&i, &extent), &stride) in index.iter().zip(&self.shape).zip(&self.strides) {
            if i >= extent {
                return None;
            }
            offset += i as isize * stride;
        }

        T::read_from(&self.buffer[usize::try_from(offset).ok()?..])
    }

    /// Linearizes the buffer into row-major element order.
    ///
    /// For a C-contiguous array this is a plain copy of the buffer; for
    /// any other layout the elements are gathered stride by stride.
    pub fn to_contiguous_bytes(&self) -> Vec<u8> {
        if self.is_c_contiguous() {
            return self.buffer.clone();
        }

        let size = self.dtype.size();
        let mut out = Vec::with_capacity(self.len() * size);
        let mut index = vec![0_usize; self.shape.len()];

        if self.is_empty() {
            return out;
        }

        loop {
            let offset: isize = index
                .iter()
                .zip(&self.strides)
                .map(|(&i, &stride)| i as isize * stride)
                .sum();
            // The constructor bounds-checked every reachable element.
            let start = offset as usize;
            out.extend_from_slice(&self.buffer[start..start + size]);

            // Odometer increment over the index tuple, last dimension fastest.
            let mut dim = self.shape.len();
            loop {
                if dim == 0 {
                    return out;
                }
                dim -= 1;
                index[dim] += 1;
                if index[dim] < self.shape[dim] {
                    break;
                }
                index[dim] = 0;
            }
        }
    }
}

impl fmt::Debug for NdArray {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NdArray")
            .field("shape", &self.shape)
            .field("dtype", &self.dtype.name())
            .field("strides", &self.strides)
            .field("buffer_len", &self.buffer.len())
            .finish()
    }
}

/// Computes row-major byte strides for the given shape.
pub(crate) fn c_contiguous_strides(shape: &[usize], size: usize) -> Vec<isize> {
    let mut strides = vec![0_isize; shape.len()];
    let mut step = size as isize;
    for (slot, &extent) in strides.iter_mut().zip(shape).rev() {
        *slot = step;
        step *= extent as isize;
    }
    strides
}

/// Checks that every element reachable through `shape`/`strides` lies
/// inside a buffer of `len` bytes.
fn fits_in_buffer(shape: &[usize], strides: &[isize], size: usize, len: usize) -> bool {
    if shape.contains(&0) {
        return true;
    }

    let mut min_offset = 0_isize;
    let mut max_offset = 0_isize;
    for (&extent, &stride) in shape.iter().zip(strides) {
        let span = (extent as isize - 1) * stride;
        if span >= 0 {
            max_offset += span;
        } else {
            min_offset += span;
        }
    }

    min_offset >= 0 && (max_offset as usize) + size <= len
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use super::{NdArray, c_contiguous_strides};
    use crate::dtype::Dtype;
    use crate::error::ArrayError;

    #[test]
    fn c_strides() {
        assert_eq!(c_contiguous_strides(&[2, 3], 4), [12, 4]);
        assert_eq!(c_contiguous_strides(&[4], 8), [8]);
        assert_eq!(c_contiguous_strides(&[], 8), [] as [isize; 0]);
    }

    #[test]
    fn from_vec_layout() {
        let array = NdArray::from_vec(vec![1_i16, 2, 3, 4, 5, 6], &[3, 2]).unwrap();
        assert_eq!(array.dtype().name(), "int16");
        assert_eq!(array.strides(), &[4, 2]);
        assert!(array.is_c_contiguous());
        assert_eq!(array.get::<i16>(&[2, 1]), Some(6));
        assert_eq!(array.get::<i16>(&[3, 0]), None);
    }

    #[test]
    fn element_count_checked() {
        let err = NdArray::from_vec(vec![1_i32, 2, 3], &[2, 2]).unwrap_err();
        assert!(matches!(err, ArrayError::ElementCountMismatch { .. }));
    }

    #[test]
    fn bounds_checked() {
        let dtype = Dtype::named("int32").unwrap();
        // 2x2 i32 needs 16 bytes; 12 is one element short.
        let err =
            NdArray::from_parts(vec![2, 2], dtype.clone(), vec![0; 12], vec![8, 4]).unwrap_err();
        assert!(matches!(err, ArrayError::BufferMismatch { .. }));

        assert!(NdArray::from_parts(vec![2, 2], dtype, vec![0; 16], vec![8, 4]).is_ok());
    }

    #[test]
    fn dimension_mismatch() {
        let dtype = Dtype::named("int32").unwrap();
        let err = NdArray::from_parts(vec![2, 2], dtype, vec![0; 16], vec![4]).unwrap_err();
        assert_eq!(err, ArrayError::DimensionMismatch { shape: 2, strides: 1 });
    }

    #[test]
    fn strided_view() {
        // Column-major layout of a 2x3 i32 array.
        let data: Vec<i32> = vec![1, 4, 2, 5, 3, 6];
        let mut buffer = Vec::new();
        for v in &data {
            buffer.extend_from_slice(&v.to_ne_bytes());
        }
        let dtype = Dtype::named("int32").unwrap();
        let array = NdArray::from_parts(vec![2, 3], dtype, buffer, vec![4, 8]).unwrap();

        assert!(!array.is_c_contiguous());
        assert_eq!(array.get::<i32>(&[0, 0]), Some(1));
        assert_eq!(array.get::<i32>(&[1, 2]), Some(6));

        // Gathering linearizes into row-major order.
        let contiguous = array.to_contiguous_bytes();
        let expected: Vec<u8> = [1_i32, 2, 3, 4, 5, 6]
            .iter()
            .flat_map(|v| v.to_ne_bytes())
            .collect();
        assert_eq!(contiguous, expected);
    }

    #[test]
    fn zero_sized_dimension() {
        let dtype = Dtype::named("float64").unwrap();
        let array = NdArray::from_parts(vec![0, 3], dtype, Vec::new(), vec![24, 8]).unwrap();
        assert!(array.is_empty());
        assert_eq!(array.to_contiguous_bytes(), Vec::<u8>::new());
    }
}
