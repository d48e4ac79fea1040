use std::fmt;

use thiserror::Error;

/// Type alias for `Result` with default error `CodecError`.
///
/// Can be used like `std::result::Result` as well.
pub type Result<T, E = CodecError> = std::result::Result<T, E>;

/// This error is raised when a string can not be decoded into a term.
///
/// Every variant carries the offending string.
#[derive(Debug, Error)]
pub enum CodecError {
    /// Literals must be enclosed in double quotes,
    /// optionally followed by `^^datatype` or `@language`.
    #[error("{0} is not a literal")]
    MalformedLiteral(String),
    /// Base directions must be `ltr` or `rtl`.
    #[error("Found invalid direction '{direction}' in {literal}")]
    InvalidDirection {
        /// The faulty literal.
        literal: String,
        /// The direction found after `--`.
        direction: String,
    },
    /// Angle brackets of a quoted term must be balanced.
    #[error("Found {unmatched} in {term}")]
    UnbalancedTag {
        /// The faulty quoted term.
        term: String,
        /// Which tag has no counterpart.
        unmatched: Tag,
    },
    /// A quoted term must contain 3 or 4 components.
    #[error("Nested quad syntax error {term}")]
    ArityError {
        /// The faulty quoted term.
        term: String,
        /// The number of components found.
        count: usize,
    },
    /// Variables can only be decoded with a factory that supports them.
    #[error("Missing variable capability on the given term factory, required by {0}")]
    UnsupportedCapability(String),
    /// Quoted terms may not be nested deeper than the configured limit.
    #[error("Quoted term nested deeper than {max_depth} levels: {term}")]
    TooDeep {
        /// The quoted term that exceeded the limit.
        term: String,
        /// The configured limit.
        max_depth: usize,
    },
}

/// The unmatched tag reported by [`CodecError::UnbalancedTag`].
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Tag {
    /// A `<` was never closed.
    Opening,
    /// A `>` was never opened.
    Closing,
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Tag::Opening => write!(f, "opening tag without closing tag"),
            Tag::Closing => write!(f, "closing tag without opening tag"),
        }
    }
}
