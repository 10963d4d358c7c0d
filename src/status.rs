// src/status.rs
//! Operation outcomes and the error type.
//!
//! Every operation reports its result through a closed, dedicated type
//! instead of borrowing an OS error namespace. For callers that cross an
//! ABI boundary, each outcome also has a stable raw integer encoding:
//! success codes are small non-negative integers and error codes are
//! negative (see [`raw`]).

use core::fmt;

/// Raw status codes for callers crossing an ABI boundary.
///
/// The values are stable and must not be changed.
pub mod raw {
    /// All compared bytes are identical.
    pub const EQUAL: i32 = 1;
    /// The compared regions differ in at least one byte.
    pub const NOT_EQUAL: i32 = 0;
    /// Copy completed over the full extent.
    pub const COPIED: i32 = 0;
    /// Fill completed over the full extent.
    pub const FILLED: i32 = 0;
    /// A null reference was supplied; no memory was accessed.
    pub const BAD_ADDRESS: i32 = -1;
}

/// Outcome of a byte-wise comparison.
///
/// Both variants are successful results: "not equal" is a normal answer to
/// the question being asked, not an error.
#[repr(i32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Comparison {
    /// The regions differ in at least one byte.
    NotEqual = raw::NOT_EQUAL,
    /// Every byte in the compared extent is identical.
    Equal = raw::EQUAL,
}

impl Comparison {
    /// Raw status code of this outcome.
    #[must_use]
    pub const fn as_raw(self) -> i32 {
        self as i32
    }

    /// Convert from a raw status code.
    ///
    /// Returns `None` for values outside the closed set.
    #[must_use]
    pub const fn from_raw(value: i32) -> Option<Self> {
        match value {
            raw::NOT_EQUAL => Some(Self::NotEqual),
            raw::EQUAL => Some(Self::Equal),
            _ => None,
        }
    }

    /// True when the compared regions matched over the full extent.
    #[must_use]
    pub const fn is_equal(self) -> bool {
        matches!(self, Self::Equal)
    }
}

impl fmt::Display for Comparison {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Comparison::Equal => f.write_str("equal"),
            Comparison::NotEqual => f.write_str("not equal"),
        }
    }
}

/// Error raised when an operation is handed an invalid memory reference.
///
/// This is the crate's entire error taxonomy. It is detected synchronously,
/// before any memory access, and surfaced as a return value — never as a
/// panic, never retried.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MemError {
    /// A null pointer was supplied where a valid reference was required.
    BadAddress,
}

impl MemError {
    /// Raw (negative) status code of this error.
    #[must_use]
    pub const fn as_raw(self) -> i32 {
        match self {
            Self::BadAddress => raw::BAD_ADDRESS,
        }
    }

    /// Convert from a raw status code.
    ///
    /// Returns `None` for values outside the closed set.
    #[must_use]
    pub const fn from_raw(value: i32) -> Option<Self> {
        match value {
            raw::BAD_ADDRESS => Some(Self::BadAddress),
            _ => None,
        }
    }

    /// Human-readable description.
    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::BadAddress => "bad address",
        }
    }
}

impl fmt::Display for MemError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.description())
    }
}

/// Result type alias for memory operations.
pub type MemResult<T> = Result<T, MemError>;
