use serde::{Deserialize, Serialize};

use crate::array::{NdArray, c_contiguous_strides};
use crate::dtype::Dtype;
use crate::error::ArrayError;

// -----------------------------------------------------------------------------
// ArrayRecord

/// The portable form of an [`NdArray`].
///
/// A record carries everything needed to rebuild the array in another
/// process: the shape, the registered dtype name, the raw bytes, and the
/// byte strides describing how the bytes are to be read. Records derive
/// `serde::{Serialize, Deserialize}`, so any serde format can move them
/// across process or storage boundaries.
///
/// # Examples
///
/// ```
/// use remold_ndarray::{serialize, ArrayRecord, NdArray};
///
/// let array = NdArray::from_vec(vec![1_u8, 2, 3], &[3]).unwrap();
/// let record: ArrayRecord = serialize(&array).unwrap();
///
/// assert_eq!(record.dtype, "uint8");
/// assert_eq!(record.buffer, [1, 2, 3]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArrayRecord {
    /// Extent of each dimension.
    pub shape: Vec<usize>,
    /// Registered dtype name.
    pub dtype: String,
    /// Raw element bytes.
    pub buffer: Vec<u8>,
    /// Byte stride of each dimension.
    pub strides: Vec<isize>,
}

// -----------------------------------------------------------------------------
// Serialize

// Darwin always takes the linearizing path; the zero-copy borrow of the
// stored buffer is only taken elsewhere, and only for row-major layouts.
#[cfg(target_os = "macos")]
fn extract_bytes(array: &NdArray) -> (Vec<u8>, Vec<isize>) {
    linearized(array)
}

#[cfg(not(target_os = "macos"))]
fn extract_bytes(array: &NdArray) -> (Vec<u8>, Vec<isize>) {
    if array.is_c_contiguous() {
        (array.buffer().to_vec(), array.strides().to_vec())
    } else {
        linearized(array)
    }
}

/// Gathers the elements into row-major order and records the strides of
/// the gathered buffer, keeping the record self-consistent.
fn linearized(array: &NdArray) -> (Vec<u8>, Vec<isize>) {
    (
        array.to_contiguous_bytes(),
        c_contiguous_strides(array.shape(), array.dtype().size()),
    )
}

/// Flattens an array into a portable [`ArrayRecord`].
///
/// # Errors
///
/// [`ArrayError::UnsupportedDtype`] if the array's dtype name does not
/// round-trip through the registry, [`ArrayError::EmptyDtype`] if the
/// name is blank.
pub fn serialize(array: &NdArray) -> Result<ArrayRecord, ArrayError> {
    // The name must resolve for the consuming process, whatever handle
    // this array was built with.
    Dtype::named(array.dtype().name())?;

    let (buffer, strides) = extract_bytes(array);
    log::trace!(
        "serialized array: shape {:?}, dtype `{}`, {} bytes",
        array.shape(),
        array.dtype().name(),
        buffer.len(),
    );

    Ok(ArrayRecord {
        shape: array.shape().to_vec(),
        dtype: array.dtype().name().into(),
        buffer,
        strides,
    })
}

// -----------------------------------------------------------------------------
// Deserialize

/// Rebuilds an array from a portable [`ArrayRecord`].
///
/// The view honors the record's shape, dtype, and strides exactly; the
/// bytes are not transformed.
///
/// # Errors
///
/// The dtype errors of [`Dtype::named`], plus the constructor errors of
/// [`NdArray::from_parts`] when the metadata does not fit the buffer.
pub fn deserialize(record: &ArrayRecord) -> Result<NdArray, ArrayError> {
    let dtype = Dtype::named(&record.dtype)?;
    NdArray::from_parts(
        record.shape.clone(),
        dtype,
        record.buffer.clone(),
        record.strides.clone(),
    )
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use super::{ArrayRecord, deserialize, serialize};
    use crate::array::NdArray;
    use crate::dtype::{Dtype, DtypeKind};
    use crate::error::ArrayError;

    #[test]
    fn round_trip_contiguous() {
        let array = NdArray::from_vec(vec![1.5_f64, -2.0, 3.25, 0.0], &[2, 2]).unwrap();
        let record = serialize(&array).unwrap();

        assert_eq!(record.shape, [2, 2]);
        assert_eq!(record.dtype, "float64");
        assert_eq!(record.strides, [16, 8]);

        let restored = deserialize(&record).unwrap();
        assert_eq!(restored.shape(), array.shape());
        assert_eq!(restored.strides(), array.strides());
        assert_eq!(restored.dtype(), array.dtype());
        assert_eq!(restored.buffer(), array.buffer());
    }

    #[test]
    fn round_trip_strided() {
        // Column-major 2x2 view; serialization linearizes it.
        let mut buffer = Vec::new();
        for v in [1_i32, 3, 2, 4] {
            buffer.extend_from_slice(&v.to_ne_bytes());
        }
        let dtype = Dtype::named("int32").unwrap();
        let array = NdArray::from_parts(vec![2, 2], dtype, buffer, vec![4, 8]).unwrap();

        let record = serialize(&array).unwrap();
        assert_eq!(record.strides, [8, 4]);

        let restored = deserialize(&record).unwrap();
        assert_eq!(restored.get::<i32>(&[0, 1]), array.get::<i32>(&[0, 1]));
        assert_eq!(restored.get::<i32>(&[1, 0]), array.get::<i32>(&[1, 0]));

        // A second trip is byte-identical.
        let again = serialize(&restored).unwrap();
        assert_eq!(again, record);
    }

    #[test]
    fn unregistered_dtype_rejected() {
        let dtype = Dtype::custom("not-a-real-dtype", 4, DtypeKind::Int);
        let array = NdArray::from_parts(vec![1], dtype, vec![0; 4], vec![4]).unwrap();
        assert_eq!(
            serialize(&array),
            Err(ArrayError::UnsupportedDtype("not-a-real-dtype".into())),
        );
    }

    #[test]
    fn empty_dtype_rejected() {
        let dtype = Dtype::custom("", 4, DtypeKind::Int);
        let array = NdArray::from_parts(vec![1], dtype, vec![0; 4], vec![4]).unwrap();
        assert_eq!(serialize(&array), Err(ArrayError::EmptyDtype));

        let record = ArrayRecord {
            shape: vec![1],
            dtype: String::new(),
            buffer: vec![0; 4],
            strides: vec![4],
        };
        assert_eq!(deserialize(&record), Err(ArrayError::EmptyDtype));
    }

    #[test]
    fn record_survives_serde() {
        let array = NdArray::from_vec(vec![7_u16, 8, 9], &[3]).unwrap();
        let record = serialize(&array).unwrap();

        let json = serde_json::to_string(&record).unwrap();
        let parsed: ArrayRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, record);

        let restored = deserialize(&parsed).unwrap();
        assert_eq!(restored.buffer(), array.buffer());
    }

    #[test]
    fn bad_metadata_rejected() {
        let record = ArrayRecord {
            shape: vec![4],
            dtype: "int64".into(),
            buffer: vec![0; 8],
            strides: vec![8],
        };
        assert!(matches!(
            deserialize(&record),
            Err(ArrayError::BufferMismatch { .. })
        ));
    }
}
