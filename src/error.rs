//! Error types for the LED controller.
//!
//! Two kinds of failure exist: a request that cannot be honoured
//! ([`Error::InvalidArgument`]) and a board that was configured wrongly
//! ([`Error::InvalidConfiguration`]).  Both are `Copy` and carry a static
//! message so they can be turned into a response without allocation.

use core::fmt;

/// Fixed client-facing message for an unresolved `name` parameter.
pub const MSG_INVALID_NAME: &str = "Invalid or missing 'name'";
/// Fixed client-facing message for a missing or unparseable `value`.
pub const MSG_INVALID_VALUE: &str = "Invalid or missing 'value'";

// ---------------------------------------------------------------------------
// Top-level error
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// A request parameter was missing, unparseable or out of range.
    /// The message is sent back to the client verbatim.
    InvalidArgument(&'static str),
    /// Construction-time misconfiguration. Fatal at startup.
    InvalidConfiguration(&'static str),
}

impl Error {
    /// HTTP-style status code used when the error reaches a client.
    pub const fn status(self) -> u16 {
        match self {
            Self::InvalidArgument(_) => 400,
            Self::InvalidConfiguration(_) => 500,
        }
    }

    /// The human-readable message carried by the error.
    pub const fn message(self) -> &'static str {
        match self {
            Self::InvalidArgument(msg) | Self::InvalidConfiguration(msg) => msg,
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidArgument(msg) => write!(f, "invalid argument: {msg}"),
            Self::InvalidConfiguration(msg) => write!(f, "invalid configuration: {msg}"),
        }
    }
}

impl core::error::Error for Error {}

/// Crate-wide `Result` alias.
pub type Result<T> = core::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_codes() {
        assert_eq!(Error::InvalidArgument(MSG_INVALID_NAME).status(), 400);
        assert_eq!(Error::InvalidConfiguration("pins").status(), 500);
    }

    #[test]
    fn message_is_passed_through_unchanged() {
        assert_eq!(
            Error::InvalidArgument(MSG_INVALID_VALUE).message(),
            "Invalid or missing 'value'"
        );
    }

    #[test]
    fn display_prefixes_kind() {
        let s = format!("{}", Error::InvalidConfiguration("initial duty exceeds range"));
        assert_eq!(s, "invalid configuration: initial duty exceeds range");
    }
}
