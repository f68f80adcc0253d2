use thiserror::Error;

/// Errors produced by the array-buffer codec.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ArrayError {
    /// A dtype name that does not resolve against the registry.
    #[error("unsupported dtype name: `{0}`")]
    UnsupportedDtype(String),

    /// A blank dtype name.
    #[error("empty dtype name")]
    EmptyDtype,

    /// The buffer cannot hold every element reachable through the given
    /// shape and strides.
    #[error(
        "buffer of {len} bytes cannot hold shape {shape:?} with strides {strides:?} \
         (dtype `{dtype}`, {size} bytes per element)"
    )]
    BufferMismatch {
        len: usize,
        shape: Vec<usize>,
        strides: Vec<isize>,
        dtype: String,
        size: usize,
    },

    /// Shape and strides with different dimension counts.
    #[error("shape has {shape} dimensions but strides has {strides}")]
    DimensionMismatch { shape: usize, strides: usize },

    /// The element type of a typed constructor does not match the number
    /// of provided elements.
    #[error("{provided} elements cannot fill shape {shape:?}")]
    ElementCountMismatch { provided: usize, shape: Vec<usize> },
}
