use std::fmt::{self, Display};

/// Errors produced by the strict color parsers.
///
/// The engine itself never surfaces these: lenient entry points degrade to a
/// documented fallback instead. They exist for callers (CLI, config loading)
/// that want to reject bad input outright.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColorParseError {
    /// Hex string without the leading `#`.
    MissingHash(String),
    /// Hex string that is neither `#RGB` nor `#RRGGBB`.
    InvalidHexLength(String),
    /// Hex string containing a non hexadecimal digit.
    InvalidHexDigit(String),
    /// HSL string that does not have exactly three components.
    WrongComponentCount { input: String, found: usize },
    /// HSL component that is not a finite number.
    InvalidComponent { input: String, component: &'static str },
}

impl Display for ColorParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ColorParseError::MissingHash(input) => {
                write!(f, "hex color '{input}' must start with '#'")
            }
            ColorParseError::InvalidHexLength(input) => write!(
                f,
                "hex color '{input}' must have the form #RGB or #RRGGBB"
            ),
            ColorParseError::InvalidHexDigit(input) => {
                write!(f, "hex color '{input}' contains a non-hex digit")
            }
            ColorParseError::WrongComponentCount { input, found } => write!(
                f,
                "hsl value '{input}' has {found} components, expected 3"
            ),
            ColorParseError::InvalidComponent { input, component } => {
                write!(f, "hsl value '{input}' has an invalid {component}")
            }
        }
    }
}

impl std::error::Error for ColorParseError {}
