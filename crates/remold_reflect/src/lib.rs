#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg))]

// -----------------------------------------------------------------------------
// Compilation config

/// Some macros used for compilation control.
pub mod cfg {
    remold_cfg::define_alias! {
        #[cfg(feature = "ndarray")] => ndarray,
        #[cfg(all(debug_assertions, feature = "debug"))] => debug,
    }
}

// -----------------------------------------------------------------------------
// Extern Self

// Usually, we need to use `crate` in the crate itself and use `remold_reflect`
// in doc testing. The derive macro always emits `remold_reflect` paths, so an
// `extern self` ensures those resolve inside this crate as well.
extern crate self as remold_reflect;

// -----------------------------------------------------------------------------
// Modules

mod boolean;
mod bytes;
mod error;
mod interface;
mod value;

pub mod de;
pub mod impls;
pub mod info;
pub mod ops;

#[doc(hidden)]
pub mod __macro_exports;

// -----------------------------------------------------------------------------
// Top-level exports

pub use boolean::{ParseBooleanError, string_to_boolean};
pub use bytes::{ByteBuf, Bytes};
pub use de::{DEFAULT_ROOT_KEY, deserialize, deserialize_value, has_ndarray};
pub use error::{DeserializeError, ErrorKind};
pub use interface::DeserializeInPlace;
pub use value::{Value, ValueKind};

pub use remold_reflect_derive as derive;
