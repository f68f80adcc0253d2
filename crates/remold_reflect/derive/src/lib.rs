//! Derive support for `remold_reflect`. See [`Remold`].

use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

static REMOLD_ATTRIBUTE_NAME: &str = "remold";

// -----------------------------------------------------------------------------
// Modules

mod attrs;
mod impls;

// -----------------------------------------------------------------------------
// Macros

/// # Descriptor Derivation
///
/// `#[derive(Remold)]` implements
/// [`Typed`](../remold_reflect/info/trait.Typed.html), building the type's
/// deserialization descriptor once and caching it for the process
/// lifetime.
///
/// The structural family is chosen from the item shape:
///
/// - `struct T { ... }` — a **record**: every declared field is
///   deserialized (by its own descriptor), then the whole value is
///   constructed at once. Missing non-optional fields fail; `Option<_>`
///   fields read absent or null sources as `None`.
/// - `struct T(...);` — a **named fixed tuple**: the source is spread
///   positionally into the constructor.
/// - `struct T;` — a record with no fields.
/// - `enum T { ... }` (unit variants only) — an **enumeration**: built
///   from the member whose value equals the data, matching integer
///   sources against discriminants and text sources against variant
///   names.
///
/// ## Flags
///
/// Flags are given through the `#[remold(...)]` attribute at the type
/// level:
///
/// - `#[remold(default)]` — switch a named struct from the record path to
///   the **plain object** path: the value is created with
///   `Default::default()` and discovered attributes are assigned one by
///   one, so fields absent from the source keep their defaults. The type
///   must implement `Default`.
/// - `#[remold(custom)]` — route the type through its own
///   [`DeserializeInPlace`](../remold_reflect/trait.DeserializeInPlace.html)
///   hook instead of any structural path. The type must implement
///   `Default` and `DeserializeInPlace`.
///
/// ## Generics
///
/// Generic structs are supported; every type parameter receives a
/// `Typed` bound. Generic enums, lifetimes, and const parameters are
/// not.
///
/// ## Examples
///
/// ```rust,ignore
/// #[derive(Remold)]
/// struct Reading {
///     sensor: String,
///     values: Vec<f64>,
///     comment: Option<String>,
/// }
///
/// #[derive(Remold)]
/// enum Mode {
///     Idle = 0,
///     Active = 1,
/// }
/// ```
#[proc_macro_derive(Remold, attributes(remold))]
pub fn derive_remold(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    impls::expand(input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}
