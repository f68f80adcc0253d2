#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![no_std]

/// Defines pass-through macros for a set of `#[cfg(...)]` predicates.
///
/// For every `#[cfg(PRED)] => name` pair, two mutually exclusive
/// `macro_rules! name` definitions are emitted: the one compiled when
/// `PRED` holds forwards its token trees unchanged, the other swallows
/// them. The macros are `pub(crate) use`d, so the conventional place to
/// invoke `define_alias!` is a crate-level `cfg` module:
///
/// ```
/// /// Some macros used for compilation control.
/// mod cfg {
///     remold_cfg::define_alias! {
///         #[cfg(debug_assertions)] => debug,
///         #[cfg(test)] => test_only,
///     }
/// }
///
/// // Doctests compile without `cfg(test)`, so this emits nothing.
/// cfg::test_only! {
///     compile_error!("swallowed");
/// }
/// ```
///
/// The generated macros accept any token trees, both in item and in
/// statement position.
#[macro_export]
macro_rules! define_alias {
    ($(#[cfg($meta:meta)] => $name:ident),+ $(,)?) => {
        $crate::__define_alias_inner! { ($) $(#[cfg($meta)] => $name),+ }
    };
}

// The `($d:tt)` parameter smuggles a literal `$` into the nested
// `macro_rules!` definitions.
#[doc(hidden)]
#[macro_export]
macro_rules! __define_alias_inner {
    (($d:tt) $(#[cfg($meta:meta)] => $name:ident),+) => {
        $(
            #[cfg($meta)]
            macro_rules! $name {
                ($d($d tt:tt)*) => { $d($d tt)* };
            }

            #[cfg(not($meta))]
            macro_rules! $name {
                ($d($d tt:tt)*) => {};
            }

            pub(crate) use $name;
        )+
    };
}
