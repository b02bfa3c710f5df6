//! The canonical, normalized parts of a URI.

use std::fmt;
use std::str::FromStr;

use crate::error::MalformedUri;
use crate::field::Field;
use crate::filter;
use crate::mapping::RawParts;
use crate::parser;
use crate::value::Value;

/// A fully populated, normalized decomposition of a URI.
///
/// Every component is always present: an absent string component is the
/// empty string and an absent port is `None`. A `Parts` value is never
/// patched in place. Deriving a changed URI goes through
/// [`Parts::with_overrides`], which re-validates every component.
///
/// # Examples
///
/// ```
/// use uri_parts::Parts;
///
/// let parts: Parts = "HTTP://[2001:db8::1]:8080/p?q=1#f".parse().unwrap();
/// assert_eq!(parts.scheme(), "http");
/// assert_eq!(parts.host(), "2001:db8::1");
/// assert_eq!(parts.port(), Some(8080));
/// assert_eq!(parts.path(), "/p");
/// assert_eq!(parts.query(), "q=1");
/// assert_eq!(parts.fragment(), "f");
/// assert_eq!(parts.to_string(), "http://[2001:db8::1]:8080/p?q=1#f");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Parts {
    scheme: String,
    user: String,
    pass: String,
    host: String,
    port: Option<u16>,
    path: String,
    query: String,
    fragment: String,
}

impl Parts {
    /// Builds a record from a loosely-typed mapping.
    ///
    /// Each of the eight known keys is filtered on its own; a missing key
    /// gives the empty value and unknown keys are ignored.
    #[must_use]
    pub fn from_mapping(mapping: &RawParts) -> Self {
        let text = |field| mapping.field(field).map(filter::text).unwrap_or_default();

        Self {
            scheme: mapping
                .field(Field::Scheme)
                .map(filter::scheme)
                .unwrap_or_default(),
            user: text(Field::User),
            pass: text(Field::Pass),
            host: text(Field::Host),
            port: mapping.field(Field::Port).and_then(filter::port),
            path: text(Field::Path),
            query: text(Field::Query),
            fragment: text(Field::Fragment),
        }
    }

    /// Returns the record as a mapping with all eight keys.
    ///
    /// An absent port maps to [`Value::Null`].
    #[must_use]
    pub fn to_mapping(&self) -> RawParts {
        RawParts::new()
            .with(Field::Scheme.as_str(), &self.scheme)
            .with(Field::User.as_str(), &self.user)
            .with(Field::Pass.as_str(), &self.pass)
            .with(Field::Host.as_str(), &self.host)
            .with(Field::Port.as_str(), self.port)
            .with(Field::Path.as_str(), &self.path)
            .with(Field::Query.as_str(), &self.query)
            .with(Field::Fragment.as_str(), &self.fragment)
    }

    /// Returns a new record with `overrides` laid over this one.
    ///
    /// The record is rendered to its string form and handed to
    /// [`parse_with_overlay`](crate::parse_with_overlay), so the result is
    /// validated exactly like a fresh parse.
    ///
    /// # Errors
    ///
    /// Returns [`MalformedUri`] if the rendered form of this record cannot
    /// be split again (e.g. a port or user without a host).
    ///
    /// # Examples
    ///
    /// ```
    /// use uri_parts::{Parts, RawParts};
    ///
    /// let parts: Parts = "http://example.com/a?q=1".parse().unwrap();
    /// let moved = parts.with_overrides(&RawParts::new().with("path", "/b")).unwrap();
    /// assert_eq!(moved.path(), "/b");
    /// assert_eq!(moved.query(), "q=1");
    /// ```
    pub fn with_overrides(&self, overrides: &RawParts) -> Result<Self, MalformedUri> {
        parser::parse_with_overlay(&self.to_string(), overrides)
    }

    /// Returns the scheme, lowercase and without `:` or `/`.
    #[must_use]
    pub fn scheme(&self) -> &str {
        &self.scheme
    }

    /// Returns the user name.
    #[must_use]
    pub fn user(&self) -> &str {
        &self.user
    }

    /// Returns the password.
    #[must_use]
    pub fn pass(&self) -> &str {
        &self.pass
    }

    /// Returns the host. IPv6 literals come without brackets.
    #[must_use]
    pub fn host(&self) -> &str {
        &self.host
    }

    /// Returns the port, if one in `1..=65535` was given.
    #[must_use]
    pub const fn port(&self) -> Option<u16> {
        self.port
    }

    /// Returns the path.
    #[must_use]
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Returns the query, without the leading `?`.
    #[must_use]
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Returns the fragment, without the leading `#`.
    #[must_use]
    pub fn fragment(&self) -> &str {
        &self.fragment
    }

    /// Returns true if the record has a host.
    #[must_use]
    pub fn has_authority(&self) -> bool {
        !self.host.is_empty()
    }

    /// Returns true if every component is absent.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Returns `user[:pass]`, or an empty string without a user.
    #[must_use]
    pub fn user_info(&self) -> String {
        if self.user.is_empty() {
            String::new()
        } else if self.pass.is_empty() {
            self.user.clone()
        } else {
            format!("{}:{}", self.user, self.pass)
        }
    }

    /// Returns `[user_info@]host[:port]`, or an empty string without a host.
    ///
    /// A host containing `:` is wrapped in brackets unless it already is.
    #[must_use]
    pub fn authority(&self) -> String {
        if !self.has_authority() {
            return String::new();
        }

        let mut result = self.user_info();
        if !result.is_empty() {
            result.push('@');
        }

        if self.host.contains(':') && !self.host.starts_with('[') {
            result.push('[');
            result.push_str(&self.host);
            result.push(']');
        } else {
            result.push_str(&self.host);
        }

        if let Some(port) = self.port {
            result.push(':');
            result.push_str(&port.to_string());
        }

        result
    }
}

impl fmt::Display for Parts {
    /// Renders `[scheme:][//authority][path][?query][#fragment]`.
    ///
    /// Components are written as stored; nothing is percent-encoded. A
    /// path that does not start with `/` gets one when an authority
    /// precedes it.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.scheme.is_empty() {
            write!(f, "{}:", self.scheme)?;
        }

        if self.has_authority() {
            write!(f, "//{}", self.authority())?;
            if !self.path.is_empty() && !self.path.starts_with('/') {
                f.write_str("/")?;
            }
        }

        f.write_str(&self.path)?;

        if !self.query.is_empty() {
            write!(f, "?{}", self.query)?;
        }

        if !self.fragment.is_empty() {
            write!(f, "#{}", self.fragment)?;
        }

        Ok(())
    }
}

impl FromStr for Parts {
    type Err = MalformedUri;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parser::parse_from_string(s)
    }
}

impl TryFrom<&str> for Parts {
    type Error = MalformedUri;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        parser::parse_from_string(s)
    }
}

impl From<&RawParts> for Parts {
    fn from(mapping: &RawParts) -> Self {
        Self::from_mapping(mapping)
    }
}

impl From<&Parts> for RawParts {
    fn from(parts: &Parts) -> Self {
        parts.to_mapping()
    }
}
