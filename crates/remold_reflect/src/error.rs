use core::fmt;

use thiserror::Error;

// -----------------------------------------------------------------------------
// ErrorKind

/// The terminal cause of a failed deserialization.
///
/// The kind is fixed when the error is raised; only the path grows while
/// the error propagates back to the root caller.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ErrorKind {
    /// The data's runtime shape cannot be converted to the target type.
    #[error("`{data}` type cannot be converted to `{target}` type")]
    Incompatible {
        /// The value kind name of the source data.
        data: &'static str,
        /// The name of the requested target type.
        target: &'static str,
    },

    /// A union hint with two or more non-null alternatives.
    #[error("two or more union types cannot be deduced")]
    UnionAmbiguity,

    /// A dtype name that does not resolve against the registry.
    #[error("unsupported dtype name: `{0}`")]
    UnsupportedDtype(String),

    /// A blank dtype name.
    #[error("empty dtype name")]
    EmptyDtype,

    /// A raw array record with the wrong number of elements.
    #[error("an array record must have 4 elements, there are actually {0}")]
    RecordLength(usize),

    /// A raw array record element of the wrong kind.
    #[error("array record element {position} must be {expected}")]
    RecordField {
        /// Zero-based position inside the record.
        position: usize,
        /// The kind of value the position requires.
        expected: &'static str,
    },

    /// The array-buffer runtime is unavailable.
    #[error("array-buffer support not found (`ndarray` feature or dtype registry missing)")]
    MissingCapability,

    /// A record or tuple constructor without a value for a required slot.
    #[error("missing required field `{0}`")]
    MissingField(String),

    /// A wrapped lower-level failure.
    #[error("{0}")]
    Message(String),
}

// -----------------------------------------------------------------------------
// DeserializeError

/// A deserialization failure annotated with its position in the input.
///
/// Every recursion frame of the engine prepends its own key label while
/// the error unwinds, so the final [`path`](DeserializeError::path) reads
/// from the root down to the failing element:
///
/// ```text
/// `str` type cannot be converted to `i32` type (at <root>.a[1])
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct DeserializeError {
    kind: ErrorKind,
    path: Vec<String>,
}

impl DeserializeError {
    /// Creates an error with an empty path.
    #[inline]
    pub fn new(kind: ErrorKind) -> Self {
        Self {
            kind,
            path: Vec::new(),
        }
    }

    /// Creates an error carrying a lower-level failure message.
    pub fn message(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Message(message.into()))
    }

    /// Creates an [`ErrorKind::Incompatible`] error.
    pub fn incompatible(data: &'static str, target: &'static str) -> Self {
        Self::new(ErrorKind::Incompatible { data, target })
    }

    /// Prepends a path label; called once per unwinding recursion frame.
    pub fn prepend(&mut self, key: impl Into<String>) {
        self.path.insert(0, key.into());
    }

    /// Returns the terminal cause.
    #[inline]
    pub fn kind(&self) -> &ErrorKind {
        &self.kind
    }

    /// Returns the path labels, root first.
    #[inline]
    pub fn path(&self) -> &[String] {
        &self.path
    }

    /// Renders the path as a single string, e.g. `<root>.a[1]`.
    pub fn path_string(&self) -> String {
        let mut out = String::new();
        for label in &self.path {
            if !out.is_empty() && !label.starts_with('[') {
                out.push('.');
            }
            out.push_str(label);
        }
        out
    }
}

impl fmt::Display for DeserializeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.path.is_empty() {
            write!(f, "{}", self.kind)
        } else {
            write!(f, "{} (at {})", self.kind, self.path_string())
        }
    }
}

impl core::error::Error for DeserializeError {}

impl From<ErrorKind> for DeserializeError {
    #[inline]
    fn from(kind: ErrorKind) -> Self {
        Self::new(kind)
    }
}

crate::cfg::ndarray! {
    impl From<remold_ndarray::ArrayError> for DeserializeError {
        fn from(err: remold_ndarray::ArrayError) -> Self {
            use remold_ndarray::ArrayError;
            match err {
                ArrayError::UnsupportedDtype(name) => Self::new(ErrorKind::UnsupportedDtype(name)),
                ArrayError::EmptyDtype => Self::new(ErrorKind::EmptyDtype),
                other => Self::message(other.to_string()),
            }
        }
    }
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use super::{DeserializeError, ErrorKind};

    #[test]
    fn path_builds_root_to_leaf() {
        let mut err = DeserializeError::incompatible("str", "i32");
        // Frames unwind leaf-first, each prepending its own label.
        err.prepend("[1]");
        err.prepend("a");
        err.prepend("<root>");

        assert_eq!(err.path(), ["<root>", "a", "[1]"]);
        assert_eq!(err.path_string(), "<root>.a[1]");
        assert_eq!(
            err.to_string(),
            "`str` type cannot be converted to `i32` type (at <root>.a[1])",
        );
    }

    #[test]
    fn kind_display() {
        assert_eq!(
            ErrorKind::RecordField {
                position: 0,
                expected: "iterable"
            }
            .to_string(),
            "array record element 0 must be iterable",
        );
        assert_eq!(
            ErrorKind::UnionAmbiguity.to_string(),
            "two or more union types cannot be deduced",
        );
    }
}
