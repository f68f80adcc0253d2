//! Compile-time type information: the closed descriptor model the engine
//! dispatches on.
//!
//! ## Menu
//!
//! Every deserialization target belongs to exactly one structural family,
//! described by one variant of [`TypeInfo`]:
//!
//! - [`OptionalInfo`] / [`UnionInfo`]: the hint layer — optional wrapping
//!   and (rejected) multi-alternative unions.
//! - [`BytesInfo`], [`BoolInfo`], [`IntInfo`], [`FloatInfo`], [`TextInfo`]:
//!   scalar families with their coercion vtables.
//! - [`NdArrayInfo`]: the array-buffer family, delegated to the codec.
//! - [`DateTimeInfo`], [`DateInfo`], [`TimeInfo`]: date/time scalars.
//! - [`EnumInfo`]: value-keyed enumerations.
//! - [`TupleInfo`]: fixed tuples, positional or named (tuple structs).
//! - [`CustomInfo`]: self-deserializing types
//!   ([`DeserializeInPlace`](crate::DeserializeInPlace)).
//! - [`MapInfo`] / [`ListInfo`]: containers with their element bindings
//!   and insertion capability tables.
//! - [`StructInfo`]: record types built by one whole-value construction.
//! - [`ObjectInfo`]: default-constructible types filled attribute by
//!   attribute.
//! - [`DynamicInfo`]: targets whose shape follows the data.
//!
//! Descriptors are built once per target type — by `#[derive(Remold)]` or a
//! manual [`Typed`] impl — and cached in the
//! [`impls`](crate::impls) cells. All capability decisions (how to insert
//! into a container, how to construct a record) are fn pointers resolved at
//! that point; the engine never probes at conversion time.

use core::fmt;

// -----------------------------------------------------------------------------
// Modules

mod array_info;
mod custom_info;
mod dynamic_info;
mod enum_info;
mod field_info;
mod list_info;
mod map_info;
mod object_info;
mod scalar_info;
mod struct_info;
mod temporal_info;
mod tuple_info;
mod ty;
mod typed;
mod union_info;

// -----------------------------------------------------------------------------
// Exports

pub use array_info::NdArrayInfo;
pub use custom_info::CustomInfo;
pub use dynamic_info::DynamicInfo;
pub use enum_info::{EnumInfo, VariantInfo};
pub use field_info::{NamedField, UnnamedField};
pub use list_info::{ListInfo, ListOps};
pub use map_info::{MapInfo, MapOps};
pub use object_info::ObjectInfo;
pub use scalar_info::{BoolInfo, BytesInfo, FloatInfo, IntInfo, TextInfo};
pub use struct_info::StructInfo;
pub use temporal_info::{DateInfo, DateTimeInfo, TimeInfo};
pub use tuple_info::TupleInfo;
pub use ty::Type;
pub use typed::Typed;
pub use union_info::{OptionalInfo, UnionInfo};

/// A deferred reference to another type's descriptor.
///
/// Descriptors may be mutually recursive, so edges are function pointers
/// resolved on first access instead of eager references.
pub type InfoFn = fn() -> &'static TypeInfo;

// -----------------------------------------------------------------------------
// TypeKind

/// An enumeration of the structural families of [`TypeInfo`].
///
/// The declaration order **is** the dispatch priority and must not be
/// reordered: the hint layer comes first, then byte buffers before
/// booleans before the numeric families before text-adjacent parsing —
/// text and byte targets carry their own parsing rules and must win over
/// numeric coercion, and boolean text parsing must never be routed
/// through the integer family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum TypeKind {
    Optional,
    Union,
    Bytes,
    Bool,
    Int,
    Float,
    Text,
    NdArray,
    DateTime,
    Date,
    Time,
    Enum,
    Tuple,
    Custom,
    Map,
    List,
    Struct,
    Object,
    Dynamic,
}

impl fmt::Display for TypeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Optional => f.pad("Optional"),
            Self::Union => f.pad("Union"),
            Self::Bytes => f.pad("Bytes"),
            Self::Bool => f.pad("Bool"),
            Self::Int => f.pad("Int"),
            Self::Float => f.pad("Float"),
            Self::Text => f.pad("Text"),
            Self::NdArray => f.pad("NdArray"),
            Self::DateTime => f.pad("DateTime"),
            Self::Date => f.pad("Date"),
            Self::Time => f.pad("Time"),
            Self::Enum => f.pad("Enum"),
            Self::Tuple => f.pad("Tuple"),
            Self::Custom => f.pad("Custom"),
            Self::Map => f.pad("Map"),
            Self::List => f.pad("List"),
            Self::Struct => f.pad("Struct"),
            Self::Object => f.pad("Object"),
            Self::Dynamic => f.pad("Dynamic"),
        }
    }
}

// -----------------------------------------------------------------------------
// TypeInfo

/// Compile-time type information for one deserialization target.
///
/// Obtained through [`Typed::type_info`]; the variant decides which
/// conversion family the engine applies, and the inner `*Info` carries
/// the family-specific construction vtable.
///
/// # Examples
///
/// ```
/// use remold_reflect::info::{TypeKind, Typed};
///
/// assert_eq!(i32::type_info().kind(), TypeKind::Int);
/// assert_eq!(<Vec<i32>>::type_info().kind(), TypeKind::List);
/// assert_eq!(<Option<i32>>::type_info().kind(), TypeKind::Optional);
/// ```
#[derive(Clone)]
pub enum TypeInfo {
    Optional(OptionalInfo),
    Union(UnionInfo),
    Bytes(BytesInfo),
    Bool(BoolInfo),
    Int(IntInfo),
    Float(FloatInfo),
    Text(TextInfo),
    NdArray(NdArrayInfo),
    DateTime(DateTimeInfo),
    Date(DateInfo),
    Time(TimeInfo),
    Enum(EnumInfo),
    Tuple(TupleInfo),
    Custom(CustomInfo),
    Map(MapInfo),
    List(ListInfo),
    Struct(StructInfo),
    Object(ObjectInfo),
    Dynamic(DynamicInfo),
}

// Helper macro that implements type-safe accessor methods like `as_struct`.
macro_rules! impl_cast_method {
    ($name:ident : $kind:ident => $info:ident) => {
        /// Convert [`TypeInfo`] to specific type information, or `None`
        /// if the descriptor belongs to another family.
        pub const fn $name(&self) -> Option<&$info> {
            match self {
                Self::$kind(info) => Some(info),
                _ => None,
            }
        }
    };
}

impl TypeInfo {
    impl_cast_method!(as_optional: Optional => OptionalInfo);
    impl_cast_method!(as_union: Union => UnionInfo);
    impl_cast_method!(as_enum: Enum => EnumInfo);
    impl_cast_method!(as_tuple: Tuple => TupleInfo);
    impl_cast_method!(as_map: Map => MapInfo);
    impl_cast_method!(as_list: List => ListInfo);
    impl_cast_method!(as_struct: Struct => StructInfo);
    impl_cast_method!(as_object: Object => ObjectInfo);

    /// Returns the underlying [`Type`] identity for this descriptor.
    pub const fn ty(&self) -> &Type {
        match self {
            Self::Optional(info) => info.ty(),
            Self::Union(info) => info.ty(),
            Self::Bytes(info) => info.ty(),
            Self::Bool(info) => info.ty(),
            Self::Int(info) => info.ty(),
            Self::Float(info) => info.ty(),
            Self::Text(info) => info.ty(),
            Self::NdArray(info) => info.ty(),
            Self::DateTime(info) => info.ty(),
            Self::Date(info) => info.ty(),
            Self::Time(info) => info.ty(),
            Self::Enum(info) => info.ty(),
            Self::Tuple(info) => info.ty(),
            Self::Custom(info) => info.ty(),
            Self::Map(info) => info.ty(),
            Self::List(info) => info.ty(),
            Self::Struct(info) => info.ty(),
            Self::Object(info) => info.ty(),
            Self::Dynamic(info) => info.ty(),
        }
    }

    /// Returns the [`TypeKind`] for this descriptor (a fast discriminator).
    pub const fn kind(&self) -> TypeKind {
        match self {
            Self::Optional(_) => TypeKind::Optional,
            Self::Union(_) => TypeKind::Union,
            Self::Bytes(_) => TypeKind::Bytes,
            Self::Bool(_) => TypeKind::Bool,
            Self::Int(_) => TypeKind::Int,
            Self::Float(_) => TypeKind::Float,
            Self::Text(_) => TypeKind::Text,
            Self::NdArray(_) => TypeKind::NdArray,
            Self::DateTime(_) => TypeKind::DateTime,
            Self::Date(_) => TypeKind::Date,
            Self::Time(_) => TypeKind::Time,
            Self::Enum(_) => TypeKind::Enum,
            Self::Tuple(_) => TypeKind::Tuple,
            Self::Custom(_) => TypeKind::Custom,
            Self::Map(_) => TypeKind::Map,
            Self::List(_) => TypeKind::List,
            Self::Struct(_) => TypeKind::Struct,
            Self::Object(_) => TypeKind::Object,
            Self::Dynamic(_) => TypeKind::Dynamic,
        }
    }
}

impl fmt::Debug for TypeInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TypeInfo")
            .field("kind", &self.kind())
            .field("type", &self.ty().name())
            .finish()
    }
}
