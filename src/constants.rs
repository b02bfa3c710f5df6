//! Constants for URI splitting and component normalization.

/// Lowest port number accepted by the port filter.
pub const MIN_PORT: u16 = 1;

/// Highest port number accepted by the port filter.
pub const MAX_PORT: u16 = 65535;

/// Characters that delimit URI structure and are never percent-encoded
/// before splitting.
pub const STRUCTURAL_DELIMITERS: &[char] = &[':', '/', '@', '?', '&', '=', '#'];

/// Characters trimmed from both ends of a scheme.
pub const SCHEME_TRIM_CHARS: &[char] = &[':', '/'];

/// The one scheme allowed to have an empty authority (`file:///path`).
pub const FILE_SCHEME: &str = "file";

/// Longest digit run read as a port when no `//` precedes it (`host:80`).
pub const MAX_BARE_PORT_DIGITS: usize = 5;

/// Pattern locating a bracketed IPv6 literal host directly after the scheme.
///
/// Group 1 runs through the closing bracket, group 2 is the remainder. The
/// prefix is anchored to the scheme so `://[` inside a path or query is
/// never matched.
pub const IPV6_HOST_PATTERN: &str =
    r"(?s)^([A-Za-z][A-Za-z0-9+.-]*://\[[0-9A-Fa-f:]+\])(.*)$";

/// An opening bracket once percent-encoded before the split.
pub const ESCAPED_OPEN_BRACKET: &str = "%5B";

/// A closing bracket once percent-encoded before the split.
pub const ESCAPED_CLOSE_BRACKET: &str = "%5D";
