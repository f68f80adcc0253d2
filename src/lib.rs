#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub use remold_cfg as cfg;
pub use remold_reflect as reflect;
pub use remold_utils as utils;

#[cfg(feature = "ndarray")]
pub use remold_ndarray as ndarray;

// -----------------------------------------------------------------------------
// The public surface

pub use remold_reflect::{
    DeserializeError, DeserializeInPlace, ErrorKind, Value, ValueKind, derive, deserialize,
    deserialize_value, has_ndarray,
};

#[cfg(feature = "ndarray")]
pub use remold_ndarray::{
    ArrayRecord, NdArray, deserialize as array_deserialize, serialize as array_serialize,
};
