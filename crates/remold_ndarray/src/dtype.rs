use std::borrow::Cow;
use std::fmt;
use std::sync::OnceLock;

use remold_utils::hash::HashMap;

use crate::error::ArrayError;

// -----------------------------------------------------------------------------
// DtypeKind

/// The numeric family of a dtype.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DtypeKind {
    Bool,
    Int,
    Uint,
    Float,
    Complex,
}

impl fmt::Display for DtypeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool => f.pad("bool"),
            Self::Int => f.pad("int"),
            Self::Uint => f.pad("uint"),
            Self::Float => f.pad("float"),
            Self::Complex => f.pad("complex"),
        }
    }
}

// -----------------------------------------------------------------------------
// DtypeInfo

/// A registry entry describing one element type.
///
/// The builtin entries cover the numpy scalar names, so records produced
/// by a numpy-based peer resolve without translation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DtypeInfo {
    name: &'static str,
    size: usize,
    kind: DtypeKind,
}

impl DtypeInfo {
    /// Creates a registry entry.
    #[inline]
    pub const fn new(name: &'static str, size: usize, kind: DtypeKind) -> Self {
        Self { name, size, kind }
    }

    /// Returns the registered dtype name.
    #[inline]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Returns the element size in bytes.
    #[inline]
    pub const fn size(&self) -> usize {
        self.size
    }

    /// Returns the numeric family.
    #[inline]
    pub const fn kind(&self) -> DtypeKind {
        self.kind
    }
}

crate::cfg::auto_register! {
    inventory::collect!(DtypeInfo);
}

/// The dtype names every process knows about.
static BUILTIN_DTYPES: &[DtypeInfo] = &[
    DtypeInfo::new("bool", 1, DtypeKind::Bool),
    DtypeInfo::new("int8", 1, DtypeKind::Int),
    DtypeInfo::new("int16", 2, DtypeKind::Int),
    DtypeInfo::new("int32", 4, DtypeKind::Int),
    DtypeInfo::new("int64", 8, DtypeKind::Int),
    DtypeInfo::new("uint8", 1, DtypeKind::Uint),
    DtypeInfo::new("uint16", 2, DtypeKind::Uint),
    DtypeInfo::new("uint32", 4, DtypeKind::Uint),
    DtypeInfo::new("uint64", 8, DtypeKind::Uint),
    DtypeInfo::new("float16", 2, DtypeKind::Float),
    DtypeInfo::new("float32", 4, DtypeKind::Float),
    DtypeInfo::new("float64", 8, DtypeKind::Float),
    DtypeInfo::new("complex64", 8, DtypeKind::Complex),
    DtypeInfo::new("complex128", 16, DtypeKind::Complex),
];

/// The process-wide dtype registry, built once on first access.
fn registry() -> &'static HashMap<&'static str, &'static DtypeInfo> {
    static REGISTRY: OnceLock<HashMap<&'static str, &'static DtypeInfo>> = OnceLock::new();
    REGISTRY.get_or_init(|| {
        let mut map = HashMap::default();
        for info in BUILTIN_DTYPES {
            map.insert(info.name(), info);
        }
        crate::cfg::auto_register! {
            for info in inventory::iter::<DtypeInfo> {
                map.insert(info.name(), info);
            }
        }
        log::trace!("dtype registry initialized with {} entries", map.len());
        map
    })
}

/// Returns whether the dtype registry resolved any entries.
///
/// The answer is computed once and cached for the process lifetime.
#[inline]
pub fn registry_available() -> bool {
    !registry().is_empty()
}

/// Looks up a registered dtype by name.
///
/// # Errors
///
/// [`ArrayError::EmptyDtype`] for a blank name,
/// [`ArrayError::UnsupportedDtype`] for a name the registry does not know.
pub fn lookup_dtype(name: &str) -> Result<&'static DtypeInfo, ArrayError> {
    if name.is_empty() {
        return Err(ArrayError::EmptyDtype);
    }
    registry()
        .get(name)
        .copied()
        .ok_or_else(|| ArrayError::UnsupportedDtype(name.into()))
}

// -----------------------------------------------------------------------------
// Dtype

/// The element type carried by one [`NdArray`](crate::NdArray).
///
/// A `Dtype` obtained through [`Dtype::named`] is guaranteed to resolve
/// against the registry. [`Dtype::custom`] creates a handle with an
/// arbitrary name; serializing an array with an unregistered name fails
/// at that point with the same errors [`Dtype::named`] produces.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dtype {
    name: Cow<'static, str>,
    size: usize,
    kind: DtypeKind,
}

impl Dtype {
    /// Resolves a dtype name against the registry.
    ///
    /// # Examples
    ///
    /// ```
    /// use remold_ndarray::Dtype;
    ///
    /// let dtype = Dtype::named("float32").unwrap();
    /// assert_eq!(dtype.size(), 4);
    ///
    /// assert!(Dtype::named("not-a-real-dtype").is_err());
    /// ```
    pub fn named(name: &str) -> Result<Self, ArrayError> {
        let info = lookup_dtype(name)?;
        Ok(Self {
            name: Cow::Borrowed(info.name()),
            size: info.size(),
            kind: info.kind(),
        })
    }

    /// Creates a dtype handle without consulting the registry.
    pub fn custom(name: impl Into<Cow<'static, str>>, size: usize, kind: DtypeKind) -> Self {
        Self {
            name: name.into(),
            size,
            kind,
        }
    }

    /// Returns the dtype name.
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the element size in bytes.
    #[inline]
    pub const fn size(&self) -> usize {
        self.size
    }

    /// Returns the numeric family.
    #[inline]
    pub const fn kind(&self) -> DtypeKind {
        self.kind
    }
}

impl From<&'static DtypeInfo> for Dtype {
    fn from(info: &'static DtypeInfo) -> Self {
        Self {
            name: Cow::Borrowed(info.name()),
            size: info.size(),
            kind: info.kind(),
        }
    }
}

impl fmt::Display for Dtype {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&self.name)
    }
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use super::{Dtype, lookup_dtype, registry_available};
    use crate::error::ArrayError;

    #[test]
    fn builtin_lookup() {
        assert!(registry_available());

        let info = lookup_dtype("int64").unwrap();
        assert_eq!(info.size(), 8);

        let info = lookup_dtype("float64").unwrap();
        assert_eq!(info.size(), 8);
    }

    #[test]
    fn unknown_name() {
        assert_eq!(
            lookup_dtype("not-a-real-dtype"),
            Err(ArrayError::UnsupportedDtype("not-a-real-dtype".into())),
        );
    }

    #[test]
    fn empty_name() {
        assert_eq!(lookup_dtype(""), Err(ArrayError::EmptyDtype));
        assert_eq!(Dtype::named(""), Err(ArrayError::EmptyDtype));
    }
}

#[cfg(all(test, feature = "auto_register"))]
mod auto_register_tests {
    use super::{DtypeInfo, DtypeKind, lookup_dtype};

    inventory::submit! {
        DtypeInfo::new("bfloat16", 2, DtypeKind::Float)
    }

    #[test]
    fn link_time_extension() {
        let info = lookup_dtype("bfloat16").unwrap();
        assert_eq!(info.size(), 2);
        assert_eq!(info.kind(), DtypeKind::Float);
    }
}
