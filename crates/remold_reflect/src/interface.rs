use crate::error::DeserializeError;
use crate::value::Value;

/// The self-deserializing interface.
///
/// A type opts in by being constructible with no arguments ([`Default`])
/// and filling itself from the raw value in place. The engine instantiates
/// the type, hands it the untouched [`Value`], and performs no conversion
/// of its own — the hook owns the interpretation completely.
///
/// Declare the descriptor with `#[derive(Remold)]` and `#[remold(custom)]`,
/// which routes the type through this trait instead of the record path.
///
/// # Examples
///
/// ```
/// use remold_reflect::{
///     derive::Remold, deserialize, DeserializeInPlace, DeserializeError, Value,
/// };
///
/// #[derive(Remold, Default, Debug, PartialEq)]
/// #[remold(custom)]
/// struct Tags(Vec<String>);
///
/// impl DeserializeInPlace for Tags {
///     fn deserialize_in_place(&mut self, raw: &Value) -> Result<(), DeserializeError> {
///         // Accept a comma-separated string, nothing else.
///         let Value::Str(text) = raw else {
///             return Err(DeserializeError::message("expected comma-separated text"));
///         };
///         self.0 = text.split(',').map(str::to_owned).collect();
///         Ok(())
///     }
/// }
///
/// let tags: Tags = deserialize(&Value::from("a,b,c")).unwrap().unwrap();
/// assert_eq!(tags, Tags(vec!["a".into(), "b".into(), "c".into()]));
/// ```
pub trait DeserializeInPlace: Default {
    /// Fills `self` from the raw value, mutating in place.
    fn deserialize_in_place(&mut self, raw: &Value) -> Result<(), DeserializeError>;
}
