//! Ordered route table and first-match resolution.

use crate::parser::Parser;
use crate::url_data::UrlData;

/// An ordered table of composed route matchers.
///
/// Each entry is one fully composed [`Parser`] describing one route shape.
/// Resolution scans the table in insertion order and returns the extracted
/// value of the first matcher that succeeds; table order is the sole
/// tie-breaker when several shapes could match the same URL. Later entries
/// are never invoked once an earlier one has matched.
///
/// # Examples
///
/// ```
/// use deeplink_router::{PartialIso, Router, end, host, path, scheme};
///
/// #[derive(Debug, PartialEq)]
/// enum Route {
///     Home,
/// }
///
/// let router = Router::new().route(
///     scheme("myapp")
///         .with(host("goto"))
///         .with(path("home"))
///         .skip(end())
///         .via(PartialIso::new(
///             |()| Some(Route::Home),
///             |route| matches!(route, Route::Home).then_some(()),
///         )),
/// );
///
/// assert_eq!(router.resolve_str("myapp://goto/home"), Some(Route::Home));
/// assert_eq!(router.resolve_str("myapp://goto/homes"), None);
/// ```
#[derive(Debug)]
pub struct Router<R> {
    routes: Vec<Parser<R>>,
}

impl<R: 'static> Router<R> {
    /// Creates an empty route table.
    #[must_use]
    pub const fn new() -> Self {
        Self { routes: Vec::new() }
    }

    /// Appends a route matcher to the table.
    ///
    /// Routes are tried in the order they were added.
    #[must_use]
    pub fn route(mut self, route: Parser<R>) -> Self {
        self.routes.push(route);
        self
    }

    /// Returns the number of routes in the table.
    #[must_use]
    pub fn len(&self) -> usize {
        self.routes.len()
    }

    /// Returns true if the table holds no routes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    /// Resolves a URL value to the first matching route's extracted value.
    ///
    /// Each candidate receives its own copy of the input; the winning
    /// matcher's remainder is discarded. Failure of every candidate yields
    /// `None`.
    #[must_use]
    pub fn resolve(&self, url: &UrlData) -> Option<R> {
        self.routes
            .iter()
            .find_map(|route| route.parse(url.clone()).map(|(value, _)| value))
    }

    /// Decomposes a raw URL string and resolves it.
    ///
    /// Input that cannot be decomposed resolves to `None`, like any other
    /// failure to match.
    #[must_use]
    pub fn resolve_str(&self, input: &str) -> Option<R> {
        let url = UrlData::parse(input).ok()?;
        self.resolve(&url)
    }
}

impl<R: 'static> Default for Router<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: 'static> From<Vec<Parser<R>>> for Router<R> {
    fn from(routes: Vec<Parser<R>>) -> Self {
        Self { routes }
    }
}

impl<R: 'static> FromIterator<Parser<R>> for Router<R> {
    fn from_iter<I: IntoIterator<Item = Parser<R>>>(iter: I) -> Self {
        Self {
            routes: iter.into_iter().collect(),
        }
    }
}
