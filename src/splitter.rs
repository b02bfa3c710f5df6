//! Low-level splitting of URI strings into raw components.
//!
//! The structural splitter below only understands ASCII delimiters. Before
//! handing it a string, every run of characters between the delimiters
//! `: / @ ? & = #` is percent-encoded, so non-ASCII hosts, paths, queries
//! and fragments travel through the split as plain ASCII. Afterwards every
//! string component is decoded again, which restores the original text
//! exactly. A bracketed IPv6 host right after the scheme is cut off first
//! and left untouched, since its colons must not be mistaken for a scheme or
//! port delimiter. A bracketed host the pattern does not cover, such as one
//! after user info, reaches the splitter as `%5B...%5D` and is recognized in
//! that form.

use std::sync::LazyLock;

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, percent_decode_str, utf8_percent_encode};
use regex::Regex;
use tracing::debug;

use crate::constants::{
    ESCAPED_CLOSE_BRACKET, ESCAPED_OPEN_BRACKET, FILE_SCHEME, IPV6_HOST_PATTERN,
    MAX_BARE_PORT_DIGITS, STRUCTURAL_DELIMITERS,
};
use crate::error::{MalformedUri, MalformedUriKind};
use crate::field::Field;
use crate::mapping::RawParts;
use crate::value::Value;

/// Bytes left as-is inside a protected run.
const RUN: &AsciiSet = &NON_ALPHANUMERIC.remove(b'-').remove(b'.').remove(b'_');

static IPV6_HOST: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(IPV6_HOST_PATTERN).expect("IPv6 host pattern is a valid regex"));

/// Splits a URI string into the components its structure reveals.
///
/// Only the keys that were actually located are present in the result.
/// String values come back exactly as written in the input. A port is an
/// integer when it is all digits, and a string otherwise; filtering it is
/// left to [`parse_from_mapping`](crate::parse_from_mapping).
///
/// # Errors
///
/// Returns [`MalformedUri`] when the string has no usable structure, for
/// example an authority with an empty host (`http://:80`), an IPv6 host
/// missing its `]` (`http://[::1/p`), or a non-`file` scheme followed by
/// `///`.
///
/// # Examples
///
/// ```
/// use uri_parts::splitter::split;
/// use uri_parts::Value;
///
/// let raw = split("https://b\u{fc}cher.test:8443/caf\u{e9}?q=1").unwrap();
/// assert_eq!(raw.get("host"), Some(&Value::from("b\u{fc}cher.test")));
/// assert_eq!(raw.get("port"), Some(&Value::Int(8443)));
/// assert_eq!(raw.get("path"), Some(&Value::from("/caf\u{e9}")));
/// assert!(!raw.contains("fragment"));
/// ```
pub fn split(input: &str) -> Result<RawParts, MalformedUri> {
    let (prefix, rest) = split_ipv6_prefix(input);

    let mut protected = String::with_capacity(prefix.len() + rest.len() * 3);
    protected.push_str(prefix);
    protect_runs(rest, &mut protected);

    let raw = split_structure(&protected).map_err(|kind| {
        debug!(input, reason = %kind, "unable to split URI");
        MalformedUri::new(input, kind)
    })?;

    Ok(raw.iter().map(|(key, value)| (key, decode(value))).collect())
}

/// Cuts the input after a bracketed IPv6 host, if it has one.
fn split_ipv6_prefix(input: &str) -> (&str, &str) {
    IPV6_HOST.captures(input).map_or(("", input), |caps| {
        let prefix = caps.get(1).map_or("", |m| m.as_str());
        let rest = caps.get(2).map_or("", |m| m.as_str());
        (prefix, rest)
    })
}

/// Percent-encodes every run between structural delimiters.
fn protect_runs(input: &str, out: &mut String) {
    let mut last = 0;
    for (idx, delimiter) in input.match_indices(STRUCTURAL_DELIMITERS) {
        out.extend(utf8_percent_encode(&input[last..idx], RUN));
        out.push_str(delimiter);
        last = idx + delimiter.len();
    }
    out.extend(utf8_percent_encode(&input[last..], RUN));
}

/// Reverses [`protect_runs`].
///
/// The input was valid UTF-8 and every `%` in it was escaped, so the decoded
/// bytes are always valid UTF-8 and the lossy conversion never substitutes.
fn decode(value: &Value) -> Value {
    match value {
        Value::Str(s) => Value::Str(percent_decode_str(s).decode_utf8_lossy().into_owned()),
        other => other.clone(),
    }
}

/// How a URI string starts.
#[derive(Debug, PartialEq, Eq)]
enum Lead<'a> {
    /// `scheme:` followed by the rest
    Scheme { scheme: &'a str, rest: &'a str },
    /// `host:port` with no scheme and no `//`
    HostPort,
    /// No scheme
    Relative,
}

fn classify(input: &str) -> Lead<'_> {
    let Some(colon) = input.find(':') else {
        return Lead::Relative;
    };
    let candidate = &input[..colon];
    let rest = &input[colon + 1..];

    if candidate.is_empty() || !candidate.chars().all(is_scheme_char) {
        return Lead::Relative;
    }
    if is_bare_port(rest) {
        return Lead::HostPort;
    }
    if candidate.starts_with(|c: char| c.is_ascii_alphabetic()) {
        Lead::Scheme {
            scheme: candidate,
            rest,
        }
    } else {
        Lead::Relative
    }
}

const fn is_scheme_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.' | '%')
}

/// True for `80`, `80/path`; false for `//host`, `8080x`, `123456`.
fn is_bare_port(rest: &str) -> bool {
    let digits = rest.bytes().take_while(u8::is_ascii_digit).count();
    (1..=MAX_BARE_PORT_DIGITS).contains(&digits)
        && matches!(rest.as_bytes().get(digits), None | Some(b'/'))
}

/// Splits a pre-processed URI string.
///
/// Works on the protected form, so the only characters it sees outside a
/// bracketed IPv6 host are ASCII alphanumerics, `- _ . %` and the
/// structural delimiters.
pub(crate) fn split_structure(input: &str) -> Result<RawParts, MalformedUriKind> {
    let mut parts = RawParts::new();

    let (rest, fragment) = split_suffix(input, '#');
    let (rest, query) = split_suffix(rest, '?');

    let path = match classify(rest) {
        Lead::Scheme { scheme, rest } => {
            parts.insert(Field::Scheme.as_str(), scheme);
            match rest.strip_prefix("//") {
                Some(after) if after.starts_with('/') => {
                    if !scheme.eq_ignore_ascii_case(FILE_SCHEME) {
                        return Err(MalformedUriKind::EmptyAuthority {
                            scheme: scheme.to_string(),
                        });
                    }
                    after
                }
                Some(after) => split_authority(after, &mut parts)?,
                None => rest,
            }
        }
        Lead::HostPort => split_authority(rest, &mut parts)?,
        Lead::Relative => match rest.strip_prefix("//") {
            Some(after) => split_authority(after, &mut parts)?,
            None => rest,
        },
    };

    if !path.is_empty() || (parts.is_empty() && query.is_none() && fragment.is_none()) {
        parts.insert(Field::Path.as_str(), path);
    }
    if let Some(query) = query {
        parts.insert(Field::Query.as_str(), query);
    }
    if let Some(fragment) = fragment {
        parts.insert(Field::Fragment.as_str(), fragment);
    }

    Ok(parts)
}

fn split_suffix(input: &str, delimiter: char) -> (&str, Option<&str>) {
    match input.split_once(delimiter) {
        Some((head, tail)) => (head, Some(tail)),
        None => (input, None),
    }
}

/// Reads the authority at the start of `input` and returns the path after it.
fn split_authority<'a>(input: &'a str, parts: &mut RawParts) -> Result<&'a str, MalformedUriKind> {
    let end = input.find('/').unwrap_or(input.len());
    let (authority, path) = input.split_at(end);

    let host_port = match authority.rsplit_once('@') {
        Some((user_info, host_port)) => {
            match user_info.split_once(':') {
                Some((user, pass)) => {
                    parts.insert(Field::User.as_str(), user);
                    parts.insert(Field::Pass.as_str(), pass);
                }
                None => {
                    parts.insert(Field::User.as_str(), user_info);
                }
            }
            host_port
        }
        None => authority,
    };

    let (host, port) = split_host_port(host_port)?;
    if host.is_empty() {
        return Err(MalformedUriKind::EmptyHost);
    }
    parts.insert(Field::Host.as_str(), host);

    if let Some(port) = port.filter(|p| !p.is_empty()) {
        parts.insert(Field::Port.as_str(), port_value(port));
    }

    Ok(path)
}

fn split_host_port(input: &str) -> Result<(&str, Option<&str>), MalformedUriKind> {
    if let Some(bracketed) = input.strip_prefix('[') {
        return split_bracketed(bracketed, "]");
    }
    if let Some(bracketed) = input.strip_prefix(ESCAPED_OPEN_BRACKET) {
        return split_bracketed(bracketed, ESCAPED_CLOSE_BRACKET);
    }

    Ok(match input.rsplit_once(':') {
        Some((host, port)) => (host, Some(port)),
        None => (input, None),
    })
}

/// Splits `host]` or `host]:port`, with `close` standing for the bracket.
fn split_bracketed<'a>(
    input: &'a str,
    close: &str,
) -> Result<(&'a str, Option<&'a str>), MalformedUriKind> {
    let end = input.find(close).ok_or(MalformedUriKind::UnclosedBracket)?;
    let host = &input[..end];
    let trailing = &input[end + close.len()..];
    if trailing.is_empty() {
        return Ok((host, None));
    }
    let port = trailing
        .strip_prefix(':')
        .ok_or(MalformedUriKind::TrailingAfterBracket)?;
    Ok((host, Some(port)))
}

fn port_value(raw: &str) -> Value {
    match raw.parse::<i64>() {
        Ok(n) if raw.bytes().all(|b| b.is_ascii_digit()) => Value::Int(n),
        _ => Value::from(raw),
    }
}
