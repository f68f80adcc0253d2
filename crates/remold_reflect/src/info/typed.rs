use crate::info::TypeInfo;

// -----------------------------------------------------------------------------
// Typed

/// A static accessor to compile-time type information.
///
/// Automatically implemented by
/// [`#[derive(Remold)]`](crate::derive::Remold), allowing access to type
/// information without an instance of the type.
///
/// # Examples
///
/// ```
/// use remold_reflect::{derive::Remold, info::{Typed, TypeInfo}};
///
/// #[derive(Remold)]
/// struct A { value: f32 }
///
/// let info: &'static TypeInfo = <A as Typed>::type_info();
/// assert_eq!(info.ty().short_name(), "A");
/// ```
///
/// # Manually Impl
///
/// It is not recommended to implement manually, but
/// [`NonGenericTypeInfoCell`] and [`GenericTypeInfoCell`] simplify it when
/// necessary:
///
/// ```
/// use remold_reflect::impls::NonGenericTypeInfoCell;
/// use remold_reflect::info::{DynamicInfo, TypeInfo, Typed};
///
/// struct Anything;
///
/// impl Typed for Anything {
///     fn type_info() -> &'static TypeInfo {
///         static CELL: NonGenericTypeInfoCell = NonGenericTypeInfoCell::new();
///         CELL.get_or_init(|| TypeInfo::Dynamic(DynamicInfo::new::<Self>()))
///     }
/// }
/// ```
///
/// [`NonGenericTypeInfoCell`]: crate::impls::NonGenericTypeInfoCell
/// [`GenericTypeInfoCell`]: crate::impls::GenericTypeInfoCell
pub trait Typed: 'static {
    /// A static accessor to compile-time type information.
    fn type_info() -> &'static TypeInfo;
}
