//! Primitive matchers over URL components.
//!
//! Each function here builds a [`Parser`] that examines one component of a
//! [`UrlData`](crate::UrlData) value and, on success, returns a new value
//! with that component consumed. Failure never consumes anything.

use crate::iso::PartialIso;
use crate::parser::Parser;

/// Matches the URL scheme against a literal and consumes it.
///
/// # Examples
///
/// ```
/// use deeplink_router::{UrlData, scheme};
///
/// let url = UrlData::parse("myapp://goto/home").unwrap();
/// let ((), rest) = scheme("myapp").parse(url).unwrap();
/// assert_eq!(rest.scheme(), None);
/// assert_eq!(rest.host(), Some("goto"));
/// ```
#[must_use]
pub fn scheme(value: impl Into<String>) -> Parser<()> {
    let value = value.into();
    Parser::new(move |url| {
        if url.scheme() == Some(value.as_str()) {
            Some(((), url.without_scheme()))
        } else {
            None
        }
    })
}

/// Matches the URL host against a literal and consumes it.
#[must_use]
pub fn host(value: impl Into<String>) -> Parser<()> {
    let value = value.into();
    Parser::new(move |url| {
        if url.host() == Some(value.as_str()) {
            Some(((), url.without_host()))
        } else {
            None
        }
    })
}

/// Matches the front path segment against a literal and consumes it.
///
/// # Examples
///
/// ```
/// use deeplink_router::{UrlData, path};
///
/// let url = UrlData::parse("myapp://goto/home/more").unwrap();
/// let url = url.without_scheme().without_host();
/// let ((), rest) = path("home").parse(url).unwrap();
/// assert_eq!(rest.path(), ["more"]);
/// ```
#[must_use]
pub fn path(segment: impl Into<String>) -> Parser<()> {
    let segment = segment.into();
    Parser::new(move |url| {
        if url.first_path() == Some(segment.as_str()) {
            Some(((), url.without_first_path()))
        } else {
            None
        }
    })
}

/// Converts the front path segment through an isomorphism, consuming it on
/// success.
///
/// Fails when no segment remains or the conversion does not apply.
///
/// # Examples
///
/// ```
/// use deeplink_router::{PartialIso, UrlData, path_as};
///
/// let url = UrlData::parse("myapp://goto/123").unwrap();
/// let url = url.without_scheme().without_host();
/// let (id, rest) = path_as(PartialIso::int()).parse(url).unwrap();
/// assert_eq!(id, 123);
/// assert!(rest.path().is_empty());
/// ```
#[must_use]
pub fn path_as<B: 'static>(iso: PartialIso<String, B>) -> Parser<B> {
    Parser::new(move |url| {
        let segment = url.first_path()?.to_string();
        let value = iso.apply(segment)?;
        Some((value, url.without_first_path()))
    })
}

/// Optionally converts the front path segment through a lifted isomorphism.
///
/// This matcher always succeeds. A present segment that converts to a
/// present value is consumed and extracted. A missing segment yields an
/// absent value. A present segment whose conversion yields no value — or
/// does not apply at all — also yields an absent value and is left
/// unconsumed, so a later matcher (typically [`end`]) still sees it; a
/// segment is never eaten by a conversion that did not produce anything.
///
/// # Examples
///
/// ```
/// use deeplink_router::{PartialIso, UrlData, path_opt};
///
/// let p = path_opt(PartialIso::int().optional());
///
/// let url = UrlData::parse("myapp://goto/7").unwrap();
/// let (value, rest) = p.parse(url.without_scheme().without_host()).unwrap();
/// assert_eq!(value, Some(7));
/// assert!(rest.path().is_empty());
///
/// let url = UrlData::parse("myapp://goto/abc").unwrap();
/// let (value, rest) = p.parse(url.without_scheme().without_host()).unwrap();
/// assert_eq!(value, None);
/// assert_eq!(rest.path(), ["abc"]);
/// ```
#[must_use]
pub fn path_opt<B: 'static>(iso: PartialIso<Option<String>, Option<B>>) -> Parser<Option<B>> {
    Parser::new(move |url| {
        let Some(segment) = url.first_path().map(str::to_string) else {
            return Some((None, url));
        };
        match iso.apply(Some(segment)) {
            Some(Some(value)) => Some((Some(value), url.without_first_path())),
            // unconvertible segments stay put for whatever matcher follows
            Some(None) | None => Some((None, url)),
        }
    })
}

/// Converts the value of a query parameter through an isomorphism, consuming
/// the parameter on success.
///
/// Fails when the key is absent or the conversion does not apply.
///
/// # Examples
///
/// ```
/// use deeplink_router::{PartialIso, UrlData, query};
///
/// let url = UrlData::parse("myapp://goto/home?page=3&theme=vip").unwrap();
/// let (page, rest) = query("page", PartialIso::int()).parse(url).unwrap();
/// assert_eq!(page, 3);
/// assert_eq!(rest.query_get("page"), None);
/// assert_eq!(rest.query_get("theme"), Some("vip"));
/// ```
#[must_use]
pub fn query<B: 'static>(key: impl Into<String>, iso: PartialIso<String, B>) -> Parser<B> {
    let key = key.into();
    Parser::new(move |url| {
        let raw = url.query_get(&key)?.to_string();
        let value = iso.apply(raw)?;
        Some((value, url.without_query_key(&key)))
    })
}

/// Optionally converts the value of a query parameter through a lifted
/// isomorphism.
///
/// An absent key yields an absent value and succeeds; the parameter may
/// legitimately be missing. A present key whose value converts is consumed
/// and extracted. A present key whose value does not convert fails the
/// matcher — a malformed parameter is never silently treated as absent.
///
/// # Examples
///
/// ```
/// use deeplink_router::{PartialIso, UrlData, query_opt};
///
/// let p = query_opt("test", PartialIso::boolean().optional());
///
/// let url = UrlData::parse("myapp://goto/home?test=true").unwrap();
/// let (value, _) = p.parse(url).unwrap();
/// assert_eq!(value, Some(true));
///
/// let url = UrlData::parse("myapp://goto/home").unwrap();
/// let (value, _) = p.parse(url).unwrap();
/// assert_eq!(value, None);
///
/// let url = UrlData::parse("myapp://goto/home?test=maybe").unwrap();
/// assert!(p.parse(url).is_none());
/// ```
#[must_use]
pub fn query_opt<B: 'static>(
    key: impl Into<String>,
    iso: PartialIso<Option<String>, Option<B>>,
) -> Parser<Option<B>> {
    let key = key.into();
    Parser::new(move |url| {
        let raw = url.query_get(&key).map(str::to_string);
        match iso.apply(raw) {
            Some(Some(value)) => Some((Some(value), url.without_query_key(&key))),
            Some(None) => Some((None, url)),
            None => None,
        }
    })
}

/// Verifies that the scheme, host and path have all been consumed.
///
/// Leftover query parameters are deliberately ignored: unrecognized
/// parameters never reject a route. Consumes nothing.
///
/// # Examples
///
/// ```
/// use deeplink_router::{UrlData, end, host, path, scheme};
///
/// let p = scheme("myapp").with(host("goto")).with(path("home")).skip(end());
/// assert!(p.parse(UrlData::parse("myapp://goto/home?extra=1").unwrap()).is_some());
/// assert!(p.parse(UrlData::parse("myapp://goto/home/more").unwrap()).is_none());
/// ```
#[must_use]
pub fn end() -> Parser<()> {
    Parser::new(|url| {
        if url.is_exhausted() {
            Some(((), url))
        } else {
            None
        }
    })
}
