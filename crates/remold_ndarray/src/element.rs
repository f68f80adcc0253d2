use crate::dtype::{Dtype, lookup_dtype};

/// A Rust scalar with a fixed registered dtype.
///
/// Implementors bridge typed element access and the raw byte buffer of an
/// [`NdArray`](crate::NdArray); bytes are read and written in native
/// endianness, matching the producing process's in-memory layout.
pub trait Element: Copy {
    /// The registered dtype name for this element type.
    const DTYPE: &'static str;

    /// The element size in bytes.
    const SIZE: usize;

    /// Appends this element's native-endian bytes to `out`.
    fn write_to(&self, out: &mut Vec<u8>);

    /// Reads one element from the start of `bytes`.
    ///
    /// Returns `None` if fewer than [`SIZE`](Element::SIZE) bytes remain.
    fn read_from(bytes: &[u8]) -> Option<Self>;
}

impl Element for bool {
    const DTYPE: &'static str = "bool";
    const SIZE: usize = 1;

    fn write_to(&self, out: &mut Vec<u8>) {
        out.push(*self as u8);
    }

    fn read_from(bytes: &[u8]) -> Option<Self> {
        bytes.first().map(|b| *b != 0)
    }
}

macro_rules! impl_numeric_element {
    ($($ty:ty => $name:literal),* $(,)?) => {
        $(
            impl Element for $ty {
                const DTYPE: &'static str = $name;
                const SIZE: usize = size_of::<$ty>();

                fn write_to(&self, out: &mut Vec<u8>) {
                    out.extend_from_slice(&self.to_ne_bytes());
                }

                fn read_from(bytes: &[u8]) -> Option<Self> {
                    let chunk = bytes.get(..Self::SIZE)?;
                    Some(<$ty>::from_ne_bytes(chunk.try_into().ok()?))
                }
            }
        )*
    };
}

impl_numeric_element! {
    i8 => "int8",
    i16 => "int16",
    i32 => "int32",
    i64 => "int64",
    u8 => "uint8",
    u16 => "uint16",
    u32 => "uint32",
    u64 => "uint64",
    f32 => "float32",
    f64 => "float64",
}

/// Returns the registered [`Dtype`] for an element type.
///
/// # Panics
///
/// Panics if `T::DTYPE` is missing from the registry, which indicates a
/// broken [`Element`] implementation. Every provided implementation maps
/// to a builtin entry.
pub(crate) fn dtype_of<T: Element>() -> Dtype {
    lookup_dtype(T::DTYPE).map(Dtype::from).unwrap_or_else(|_| {
        panic!("`Element` impl names unregistered dtype `{}`", T::DTYPE);
    })
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use super::Element;

    #[test]
    fn round_trip_bytes() {
        let mut out = Vec::new();
        1234.5_f64.write_to(&mut out);
        assert_eq!(out.len(), 8);
        assert_eq!(f64::read_from(&out), Some(1234.5));
    }

    #[test]
    fn short_read() {
        assert_eq!(u32::read_from(&[1, 2]), None);
    }
}
