//! [`Typed`](crate::info::Typed) implementations for standard and
//! workspace types, plus the static-storage cells backing them.
//!
//! The families covered here:
//!
//! - scalars: `bool`, the integer widths, `f32`/`f64`, `String`, and the
//!   [`Bytes`](crate::Bytes)/[`ByteBuf`](crate::ByteBuf) buffer pair.
//! - containers: `Vec<T>`, string-keyed `HashMap`/`BTreeMap` (std and
//!   `remold_utils` flavors), and `Option<T>`.
//! - tuples up to arity 6.
//! - chrono's naive date/time scalars.
//! - the `NdArray` target when the `ndarray` feature is enabled.

// -----------------------------------------------------------------------------
// Modules

mod cell;
mod containers;
mod scalars;
mod temporal;
mod tuples;

#[cfg(feature = "ndarray")]
mod ndarray;

// -----------------------------------------------------------------------------
// Exports

pub use cell::{GenericTypeInfoCell, NonGenericTypeInfoCell};
