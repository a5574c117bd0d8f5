//! Bidirectional URL matching built from partial isomorphisms and a small
//! parser algebra.
//!
//! This crate matches structured URLs against an ordered table of route
//! patterns, extracting typed values from path segments and query parameters
//! and producing an application-level route value for the first pattern that
//! fits.
//!
//! # Overview
//!
//! Three layers compose into a route table:
//!
//! - [`PartialIso`] — an invertible, partial conversion between two value
//!   types (string↔integer, string↔UUID, raw value↔enum, …).
//! - [`Parser`] — a pure function from a [`UrlData`] value to an extracted
//!   value plus the remaining URL, or failure. Primitive parsers over
//!   scheme, host, path and query are composed with [`with`](Parser::with),
//!   [`skip`](Parser::skip), [`and`](Parser::and) and converted into route
//!   values with [`via`](Parser::via).
//! - [`Router`] — an ordered table of composed parsers resolved by first
//!   match.
//!
//! Matching consumes the URL piece by piece as values: each successful step
//! returns a fresh [`UrlData`] with the matched component removed, and a
//! route is total when it terminates in [`end`], which demands everything
//! but query parameters be consumed.
//!
//! # Quick Start
//!
//! ```rust
//! use deeplink_router::{PartialIso, Router, end, host, path, path_as, scheme};
//!
//! #[derive(Debug, Clone, PartialEq)]
//! enum Route {
//!     Home,
//!     Article { id: i64 },
//! }
//!
//! let router = Router::new()
//!     .route(
//!         scheme("myapp")
//!             .with(host("goto"))
//!             .with(path("home"))
//!             .skip(end())
//!             .via(PartialIso::new(
//!                 |()| Some(Route::Home),
//!                 |route| matches!(route, Route::Home).then_some(()),
//!             )),
//!     )
//!     .route(
//!         scheme("myapp")
//!             .with(host("goto"))
//!             .with(path("article"))
//!             .with(path_as(PartialIso::int()))
//!             .skip(end())
//!             .via(PartialIso::new(
//!                 |id| Some(Route::Article { id }),
//!                 |route| match route {
//!                     Route::Article { id } => Some(id),
//!                     _ => None,
//!                 },
//!             )),
//!     );
//!
//! assert_eq!(router.resolve_str("myapp://goto/home"), Some(Route::Home));
//! assert_eq!(
//!     router.resolve_str("myapp://goto/article/42"),
//!     Some(Route::Article { id: 42 })
//! );
//! assert_eq!(router.resolve_str("myapp://goto/homes"), None);
//! ```
//!
//! # Failure Model
//!
//! There is exactly one error kind inside the matching engine: no match,
//! represented as `None`. A failed primitive, a failed conversion and a
//! failed composition are indistinguishable, failure short-circuits the rest
//! of a chain, and no partially consumed URL escapes a failed composite.
//! Only [`UrlData::parse`], the boundary where raw text enters, reports a
//! [`ParseError`].
//!
//! # Concurrency
//!
//! Parsers and isomorphisms are immutable values backed by shared closures;
//! every invocation owns its input and produces a fresh remainder. Matching
//! is safe from any number of threads without coordination.

#![deny(missing_docs)]
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

mod error;
mod iso;
mod matchers;
mod parser;
pub mod prelude;
mod router;
mod url_data;

pub use error::{ParseError, ParseErrorKind};
pub use iso::PartialIso;
pub use matchers::{end, host, path, path_as, path_opt, query, query_opt, scheme};
pub use parser::Parser;
pub use router::Router;
pub use url_data::UrlData;
