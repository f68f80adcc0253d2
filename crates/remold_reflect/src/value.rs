use core::fmt;

// -----------------------------------------------------------------------------
// Value

/// An untyped runtime value: the input side of the engine.
///
/// `Value` is a closed model of the data shapes the engine understands:
/// scalars, byte buffers, sequences, and the two mapping-shaped sources.
/// [`Map`](Value::Map) is the *items-shaped* source — an ordered list of
/// key/value entry pairs, duplicates representable. [`Object`](Value::Object)
/// is the *attribute-shaped* source — the public attribute name/value pairs
/// of some domain object. The two feed different merge semantics when
/// deserialized into a mapping target (entries insert first-seen-wins,
/// attributes assign last-seen-wins), so the distinction is part of the
/// model rather than a runtime probe.
///
/// # Examples
///
/// ```
/// use remold_reflect::Value;
///
/// let value = Value::map([
///     ("name", Value::from("sensor-1")),
///     ("samples", Value::seq([1, 2, 3])),
/// ]);
///
/// assert_eq!(value.kind().as_str(), "map");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// The absence of a value.
    Null,
    /// A boolean scalar.
    Bool(bool),
    /// An integer scalar.
    Int(i64),
    /// A floating-point scalar.
    Float(f64),
    /// A text scalar.
    Str(String),
    /// A raw byte buffer.
    Bytes(Vec<u8>),
    /// An ordered sequence.
    Seq(Vec<Value>),
    /// An items-shaped mapping: ordered entry pairs.
    Map(Vec<(String, Value)>),
    /// An attribute-shaped object: public attribute name/value pairs.
    Object(Vec<(String, Value)>),
}

impl Value {
    /// Builds a [`Value::Map`] from entry pairs.
    pub fn map<K, V, I>(entries: I) -> Self
    where
        K: Into<String>,
        V: Into<Value>,
        I: IntoIterator<Item = (K, V)>,
    {
        Self::Map(
            entries
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }

    /// Builds a [`Value::Object`] from attribute pairs.
    pub fn object<K, V, I>(attrs: I) -> Self
    where
        K: Into<String>,
        V: Into<Value>,
        I: IntoIterator<Item = (K, V)>,
    {
        Self::Object(
            attrs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }

    /// Builds a [`Value::Seq`] from elements.
    pub fn seq<V, I>(elements: I) -> Self
    where
        V: Into<Value>,
        I: IntoIterator<Item = V>,
    {
        Self::Seq(elements.into_iter().map(Into::into).collect())
    }

    /// Returns `true` for [`Value::Null`].
    #[inline]
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Returns the structural kind of this value.
    pub const fn kind(&self) -> ValueKind {
        match self {
            Self::Null => ValueKind::Null,
            Self::Bool(_) => ValueKind::Bool,
            Self::Int(_) => ValueKind::Int,
            Self::Float(_) => ValueKind::Float,
            Self::Str(_) => ValueKind::Str,
            Self::Bytes(_) => ValueKind::Bytes,
            Self::Seq(_) => ValueKind::Seq,
            Self::Map(_) => ValueKind::Map,
            Self::Object(_) => ValueKind::Object,
        }
    }

    /// Returns whether this value is iterable for sequence recursion.
    ///
    /// Text and byte scalars are excluded: they have their own parsing
    /// rules and never count as element sources.
    pub const fn is_compatible_iterable(&self) -> bool {
        matches!(self, Self::Seq(_) | Self::Map(_))
    }

    /// Python-style truthiness: empty containers, zero numbers, empty
    /// text, and null are false.
    pub fn is_truthy(&self) -> bool {
        match self {
            Self::Null => false,
            Self::Bool(b) => *b,
            Self::Int(i) => *i != 0,
            Self::Float(f) => *f != 0.0,
            Self::Str(s) => !s.is_empty(),
            Self::Bytes(b) => !b.is_empty(),
            Self::Seq(s) => !s.is_empty(),
            Self::Map(m) => !m.is_empty(),
            Self::Object(o) => !o.is_empty(),
        }
    }
}

// -----------------------------------------------------------------------------
// Conversions

macro_rules! impl_value_from {
    ($($ty:ty => $variant:ident ($conv:expr)),* $(,)?) => {
        $(
            impl From<$ty> for Value {
                #[inline]
                fn from(value: $ty) -> Self {
                    Self::$variant(($conv)(value))
                }
            }
        )*
    };
}

impl_value_from! {
    bool => Bool(|v| v),
    i32 => Int(|v| v as i64),
    i64 => Int(|v| v),
    u32 => Int(|v| v as i64),
    f64 => Float(|v| v),
    f32 => Float(|v| v as f64),
    &str => Str(|v: &str| v.to_owned()),
    String => Str(|v| v),
    Vec<u8> => Bytes(|v| v),
    &[u8] => Bytes(|v: &[u8]| v.to_vec()),
}

impl From<()> for Value {
    #[inline]
    fn from((): ()) -> Self {
        Self::Null
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(v) => v.into(),
            None => Self::Null,
        }
    }
}

// -----------------------------------------------------------------------------
// ValueKind

/// The structural kind of a [`Value`], used in diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
    Null,
    Bool,
    Int,
    Float,
    Str,
    Bytes,
    Seq,
    Map,
    Object,
}

impl ValueKind {
    /// Returns the kind name used in error messages.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Null => "none",
            Self::Bool => "bool",
            Self::Int => "int",
            Self::Float => "float",
            Self::Str => "str",
            Self::Bytes => "bytes",
            Self::Seq => "seq",
            Self::Map => "map",
            Self::Object => "object",
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use super::Value;

    #[test]
    fn truthiness() {
        assert!(!Value::Null.is_truthy());
        assert!(!Value::Int(0).is_truthy());
        assert!(Value::Int(-1).is_truthy());
        assert!(!Value::Str(String::new()).is_truthy());
        assert!(Value::from("x").is_truthy());
        assert!(!Value::seq([] as [i32; 0]).is_truthy());
    }

    #[test]
    fn builders_keep_order() {
        let map = Value::map([("b", 1), ("a", 2), ("b", 3)]);
        let Value::Map(entries) = map else {
            unreachable!()
        };
        let keys: Vec<_> = entries.iter().map(|(k, _)| k.as_str()).collect();
        // Duplicates survive; merge policy is the consumer's concern.
        assert_eq!(keys, ["b", "a", "b"]);
    }
}
