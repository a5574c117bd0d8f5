//! Convenient re-exports for glob imports.
//!
//! This module provides a single import for building route tables:
//!
//! ```rust
//! use deeplink_router::prelude::*;
//!
//! let route = scheme("myapp").with(host("goto")).with(path("home")).skip(end());
//! ```

pub use crate::{
    // Core types
    ParseError, ParseErrorKind, PartialIso, Parser, Router, UrlData,
    // Primitive matchers
    end, host, path, path_as, path_opt, query, query_opt, scheme,
};
