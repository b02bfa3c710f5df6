//! Error types for URI parsing.

use std::fmt;

/// A URI string that could not be split into structural components.
///
/// This is the only error the crate raises. Problems with individual
/// components (a non-numeric port, an odd scheme) are normalized away
/// instead of reported.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MalformedUri {
    /// The original, unmodified input
    pub input: String,
    /// Why the input could not be split
    pub kind: MalformedUriKind,
}

/// Structural reasons a URI string cannot be split.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MalformedUriKind {
    /// An authority is present but its host is empty (`http://:80`)
    EmptyHost,
    /// A non-`file` scheme is followed by `///`
    EmptyAuthority {
        /// The scheme as written in the input
        scheme: String,
    },
    /// A bracketed host has no closing `]`
    UnclosedBracket,
    /// Something other than `:port` follows a bracketed host
    TrailingAfterBracket,
}

impl MalformedUri {
    pub(crate) fn new(input: &str, kind: MalformedUriKind) -> Self {
        Self {
            input: input.to_string(),
            kind,
        }
    }
}

impl fmt::Display for MalformedUri {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "failed to parse URI '{}': {}", self.input, self.kind)
    }
}

impl std::error::Error for MalformedUri {}

impl fmt::Display for MalformedUriKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyHost => write!(f, "authority has an empty host"),
            Self::EmptyAuthority { scheme } => write!(
                f,
                "scheme '{scheme}' is followed by an empty authority; only 'file' allows this"
            ),
            Self::UnclosedBracket => {
                write!(f, "missing closing bracket for IPv6 literal host")
            }
            Self::TrailingAfterBracket => {
                write!(f, "expected ':' or end of authority after IPv6 closing bracket")
            }
        }
    }
}
