//! Entry points turning strings and mappings into [`Parts`].

use tracing::trace;

use crate::error::MalformedUri;
use crate::mapping::RawParts;
use crate::parts::Parts;
use crate::splitter;

/// Builds a normalized record from structured fields.
///
/// Never fails: components of the wrong type or out of range are replaced
/// with their empty value.
///
/// # Examples
///
/// ```
/// use uri_parts::{parse_from_mapping, RawParts};
///
/// let parts = parse_from_mapping(
///     &RawParts::new().with("scheme", ":/Http/:").with("port", 0).with("bogus", "x"),
/// );
/// assert_eq!(parts.scheme(), "http");
/// assert_eq!(parts.port(), None);
/// ```
#[must_use]
pub fn parse_from_mapping(mapping: &RawParts) -> Parts {
    Parts::from_mapping(mapping)
}

/// Splits and normalizes a URI string.
///
/// # Errors
///
/// Returns [`MalformedUri`] if the string cannot be split into components
/// at all. Malformed individual components are normalized, not reported.
///
/// # Examples
///
/// ```
/// use uri_parts::parse_from_string;
///
/// let parts = parse_from_string("HTTP://example.com:99999/caf\u{e9}").unwrap();
/// assert_eq!(parts.scheme(), "http");
/// assert_eq!(parts.port(), None);
/// assert_eq!(parts.path(), "/caf\u{e9}");
///
/// assert!(parse_from_string("http://:80").is_err());
/// ```
pub fn parse_from_string(input: &str) -> Result<Parts, MalformedUri> {
    let raw = splitter::split(input)?;
    Ok(Parts::from_mapping(&raw))
}

/// Re-derives the record of `existing` with `overrides` laid on top.
///
/// `existing` is the string form of a URI. It is parsed, turned back into a
/// full mapping, overlaid with `overrides` key by key, and the merged
/// mapping is normalized again. Every component of the result is therefore
/// validated exactly as a fresh parse would validate it, including the ones
/// `overrides` left alone.
///
/// # Errors
///
/// Returns [`MalformedUri`] if `existing` cannot be split.
///
/// # Examples
///
/// ```
/// use uri_parts::{parse_with_overlay, RawParts};
///
/// let parts = parse_with_overlay(
///     "http://example.com/a?q=1",
///     &RawParts::new().with("path", "/b").with("port", 8080),
/// )
/// .unwrap();
/// assert_eq!(parts.path(), "/b");
/// assert_eq!(parts.query(), "q=1");
/// assert_eq!(parts.port(), Some(8080));
/// ```
pub fn parse_with_overlay(existing: &str, overrides: &RawParts) -> Result<Parts, MalformedUri> {
    let current = parse_from_string(existing)?;
    trace!(
        existing,
        overrides = ?overrides.keys().collect::<Vec<_>>(),
        "overlaying URI parts"
    );
    let merged = current.to_mapping().merge(overrides);
    Ok(Parts::from_mapping(&merged))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::MalformedUriKind;
    use crate::value::Value;

    #[test]
    fn scheme_is_lowercased() {
        let parts = parse_from_string("HTTP://x").unwrap();
        assert_eq!(parts.scheme(), "http");
        assert_eq!(parts.host(), "x");
    }

    #[test]
    fn ipv6_literal_host() {
        let parts = parse_from_string("http://[2001:db8::1]:8080/p").unwrap();
        assert_eq!(parts.host(), "2001:db8::1");
        assert_eq!(parts.port(), Some(8080));
        assert_eq!(parts.path(), "/p");
    }

    #[test]
    fn out_of_range_port_is_absent() {
        assert_eq!(parse_from_string("http://x:0/").unwrap().port(), None);
        assert_eq!(parse_from_string("http://x:65536/").unwrap().port(), None);
        assert_eq!(parse_from_string("http://x:abc/").unwrap().port(), None);
        assert_eq!(parse_from_string("http://x:65535/").unwrap().port(), Some(65535));
        assert_eq!(parse_from_string("http://x:1/").unwrap().port(), Some(1));
    }

    #[test]
    fn multibyte_path_roundtrips() {
        let parts = parse_from_string("https://example.com/\u{65e5}\u{672c}\u{8a9e}/\u{e9}t\u{e9}").unwrap();
        assert_eq!(parts.path(), "/\u{65e5}\u{672c}\u{8a9e}/\u{e9}t\u{e9}");
    }

    #[test]
    fn ipv6_host_after_user_info() {
        let parts = parse_from_string("http://user@[::1]/").unwrap();
        assert_eq!(parts.user(), "user");
        assert_eq!(parts.host(), "::1");
        assert_eq!(parts.port(), None);

        let parts = parse_from_string("http://user@[::1]:8080/p").unwrap();
        assert_eq!(parts.host(), "::1");
        assert_eq!(parts.port(), Some(8080));
    }

    #[test]
    fn unclosed_ipv6_bracket_is_malformed() {
        let err = parse_from_string("http://[::1/p").unwrap_err();
        assert_eq!(err.input, "http://[::1/p");
        assert_eq!(err.kind, MalformedUriKind::UnclosedBracket);
    }

    #[test]
    fn ipv6_literal_in_query_keeps_earlier_escapes() {
        let parts = parse_from_string("http://x/a%20b?u=http://[::1]").unwrap();
        assert_eq!(parts.path(), "/a%20b");
        assert_eq!(parts.query(), "u=http://[::1]");

        let parts = parse_from_string("http://x/a%FFb?u=http://[::1]").unwrap();
        assert_eq!(parts.path(), "/a%FFb");
    }

    #[test]
    fn malformed_keeps_original_input() {
        let err = parse_from_string("http:///[::1]").unwrap_err();
        assert_eq!(err.input, "http:///[::1]");
        assert!(matches!(err.kind, MalformedUriKind::EmptyAuthority { .. }));
    }

    #[test]
    fn mapping_ignores_unknown_keys() {
        let parts = parse_from_mapping(&RawParts::new().with("scheme", "http").with("bogus", "x"));
        assert_eq!(parts.scheme(), "http");
    }

    #[test]
    fn overlay_with_no_overrides_matches_parse() {
        let input = "HTTPS://u:p@Example.com:8443/a%20b/\u{e9}?q=1#frag";
        assert_eq!(
            parse_with_overlay(input, &RawParts::new()).unwrap(),
            parse_from_string(input).unwrap()
        );
    }

    #[test]
    fn overlay_replaces_only_named_keys() {
        let parts =
            parse_with_overlay("http://example.com/a?q=1", &RawParts::new().with("path", "/b"))
                .unwrap();
        assert_eq!(parts.path(), "/b");
        assert_eq!(parts.query(), "q=1");
        assert_eq!(parts.host(), "example.com");
    }

    #[test]
    fn overlay_revalidates_overrides() {
        let overrides = RawParts::new()
            .with("scheme", "HTTPS://")
            .with("port", 70_000)
            .with("host", Value::Null);
        let parts = parse_with_overlay("http://example.com:8080/", &overrides).unwrap();
        assert_eq!(parts.scheme(), "https");
        assert_eq!(parts.port(), None);
        assert_eq!(parts.host(), "");
        assert_eq!(parts.path(), "/");
    }

    #[test]
    fn overlay_fails_on_malformed_base() {
        let err = parse_with_overlay("http://:80", &RawParts::new()).unwrap_err();
        assert_eq!(err.kind, MalformedUriKind::EmptyHost);
    }
}
