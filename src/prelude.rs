//! Convenient re-exports for glob imports.
//!
//! ```rust
//! use uri_parts::prelude::*;
//!
//! let parts = parse_from_string("https://example.com/").unwrap();
//! let moved = parts.with_overrides(&RawParts::new().with("path", "/next")).unwrap();
//! assert_eq!(moved.path(), "/next");
//! ```

pub use crate::{
    // Core types
    Field, Parts, RawParts, Value,
    // Entry points
    parse_from_mapping, parse_from_string, parse_with_overlay,
    // Errors
    MalformedUri, MalformedUriKind, UnknownField,
};
