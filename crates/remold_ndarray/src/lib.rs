#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg))]

// -----------------------------------------------------------------------------
// Compilation config

/// Some macros used for compilation control.
pub mod cfg {
    remold_cfg::define_alias! {
        #[cfg(feature = "auto_register")] => auto_register,
    }
}

// -----------------------------------------------------------------------------
// Modules

mod array;
mod dtype;
mod element;
mod error;
mod record;

// -----------------------------------------------------------------------------
// Top-level exports

pub use array::NdArray;
pub use dtype::{Dtype, DtypeInfo, DtypeKind, lookup_dtype, registry_available};
pub use element::Element;
pub use error::ArrayError;
pub use record::{ArrayRecord, deserialize, serialize};
