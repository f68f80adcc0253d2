use thiserror::Error;

/// Error for text outside the fixed boolean vocabulary.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("`{0}` is not a recognized boolean word")]
pub struct ParseBooleanError(pub String);

/// Parses a fixed, case-insensitive boolean vocabulary.
///
/// Recognized words: `true`/`t`/`yes`/`y`/`on`/`1` and
/// `false`/`f`/`no`/`n`/`off`/`0`. Anything else is an error — text never
/// falls back to truthiness.
///
/// # Examples
///
/// ```
/// use remold_reflect::string_to_boolean;
///
/// assert_eq!(string_to_boolean("Yes"), Ok(true));
/// assert_eq!(string_to_boolean("off"), Ok(false));
/// assert!(string_to_boolean("2").is_err());
/// ```
pub fn string_to_boolean(text: &str) -> Result<bool, ParseBooleanError> {
    match text.trim().to_ascii_lowercase().as_str() {
        "true" | "t" | "yes" | "y" | "on" | "1" => Ok(true),
        "false" | "f" | "no" | "n" | "off" | "0" => Ok(false),
        _ => Err(ParseBooleanError(text.into())),
    }
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use super::string_to_boolean;

    #[test]
    fn vocabulary() {
        for word in ["true", "TRUE", "t", "yes", "Y", "on", "1", " 1 "] {
            assert_eq!(string_to_boolean(word), Ok(true), "{word}");
        }
        for word in ["false", "False", "f", "no", "N", "off", "0"] {
            assert_eq!(string_to_boolean(word), Ok(false), "{word}");
        }
    }

    #[test]
    fn unrecognized() {
        for word in ["", "2", "maybe", "truefalse"] {
            assert!(string_to_boolean(word).is_err(), "{word}");
        }
    }
}
