//! Decomposed URL value consumed by matchers.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use crate::error::{ParseError, ParseErrorKind};

/// A URL decomposed into the components matchers operate on.
///
/// Matching consumes a `UrlData` piece by piece: every successful matcher
/// step returns a *new* value with the matched component cleared or removed,
/// so no step ever observes another's intermediate state. Path order is
/// significant (segments match front-to-back); query parameters are matched
/// by key and carry no order.
///
/// # Examples
///
/// ```
/// use deeplink_router::UrlData;
///
/// let url = UrlData::parse("myapp://goto/article/123?theme=vip").unwrap();
/// assert_eq!(url.scheme(), Some("myapp"));
/// assert_eq!(url.host(), Some("goto"));
/// assert_eq!(url.path(), ["article", "123"]);
/// assert_eq!(url.query_get("theme"), Some("vip"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UrlData {
    scheme: Option<String>,
    host: Option<String>,
    path: Vec<String>,
    query: BTreeMap<String, String>,
}

impl UrlData {
    /// Creates a value directly from its components.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::collections::BTreeMap;
    /// use deeplink_router::UrlData;
    ///
    /// let url = UrlData::new(
    ///     Some("myapp".to_string()),
    ///     Some("goto".to_string()),
    ///     vec!["home".to_string()],
    ///     BTreeMap::new(),
    /// );
    /// assert_eq!(url.first_path(), Some("home"));
    /// ```
    #[must_use]
    pub const fn new(
        scheme: Option<String>,
        host: Option<String>,
        path: Vec<String>,
        query: BTreeMap<String, String>,
    ) -> Self {
        Self {
            scheme,
            host,
            path,
            query,
        }
    }

    /// Decomposes a raw URL string.
    ///
    /// The decomposition is deliberately lenient: a missing `://` leaves
    /// scheme and host absent and treats the remainder as path, query pairs
    /// without `=` are dropped, repeated query keys keep the last value, and
    /// a `#fragment` suffix is discarded.
    ///
    /// # Errors
    ///
    /// Returns `ParseError` if the input is empty or contains whitespace or
    /// control characters.
    pub fn parse(input: &str) -> Result<Self, ParseError> {
        Self::parse_inner(input).map_err(|kind| ParseError {
            input: input.to_string(),
            kind,
        })
    }

    /// Returns the scheme, if not yet consumed.
    #[must_use]
    pub fn scheme(&self) -> Option<&str> {
        self.scheme.as_deref()
    }

    /// Returns the host, if not yet consumed.
    #[must_use]
    pub fn host(&self) -> Option<&str> {
        self.host.as_deref()
    }

    /// Returns the remaining path segments, front first.
    #[must_use]
    pub fn path(&self) -> &[String] {
        &self.path
    }

    /// Returns the front path segment, if any remain.
    #[must_use]
    pub fn first_path(&self) -> Option<&str> {
        self.path.first().map(String::as_str)
    }

    /// Returns the value for a query parameter, if present.
    #[must_use]
    pub fn query_get(&self, key: &str) -> Option<&str> {
        self.query.get(key).map(String::as_str)
    }

    /// Returns the number of remaining query parameters.
    #[must_use]
    pub fn query_len(&self) -> usize {
        self.query.len()
    }

    /// Returns an iterator over the remaining query parameters.
    pub fn query_pairs(&self) -> impl Iterator<Item = (&str, &str)> {
        self.query.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Returns true if scheme and host are consumed and no path remains.
    ///
    /// Leftover query parameters do not count against exhaustion; the
    /// [`end`](crate::end) matcher relies on exactly this rule.
    #[must_use]
    pub fn is_exhausted(&self) -> bool {
        self.scheme.is_none() && self.host.is_none() && self.path.is_empty()
    }

    /// Returns a new value with the scheme cleared.
    #[must_use]
    pub fn without_scheme(&self) -> Self {
        Self {
            scheme: None,
            ..self.clone()
        }
    }

    /// Returns a new value with the host cleared.
    #[must_use]
    pub fn without_host(&self) -> Self {
        Self {
            host: None,
            ..self.clone()
        }
    }

    /// Returns a new value with the front path segment removed.
    ///
    /// With an empty path this is a plain copy.
    #[must_use]
    pub fn without_first_path(&self) -> Self {
        let mut next = self.clone();
        if !next.path.is_empty() {
            next.path.remove(0);
        }
        next
    }

    /// Returns a new value with the given query parameter removed.
    #[must_use]
    pub fn without_query_key(&self, key: &str) -> Self {
        let mut next = self.clone();
        next.query.remove(key);
        next
    }

    fn parse_inner(input: &str) -> Result<Self, ParseErrorKind> {
        if input.is_empty() {
            return Err(ParseErrorKind::Empty);
        }

        for (i, c) in input.chars().enumerate() {
            if c.is_whitespace() || c.is_control() {
                return Err(ParseErrorKind::InvalidChar { char: c, position: i });
            }
        }

        // The fragment is not part of the matchable value.
        let rest = match input.find('#') {
            Some(idx) => &input[..idx],
            None => input,
        };

        let (rest, query) = match rest.find('?') {
            Some(idx) => (&rest[..idx], Self::parse_query(&rest[idx + 1..])),
            None => (rest, BTreeMap::new()),
        };

        // With "://" the first authority segment is the host; without it the
        // whole remainder is path, as in a scheme-less relative reference.
        let (scheme, host, path_str) = match rest.find("://") {
            Some(idx) => {
                let scheme = (idx > 0).then(|| rest[..idx].to_string());
                let after = &rest[idx + 3..];
                match after.find('/') {
                    Some(slash) => {
                        let host = (slash > 0).then(|| after[..slash].to_string());
                        (scheme, host, &after[slash + 1..])
                    }
                    None => {
                        let host = (!after.is_empty()).then(|| after.to_string());
                        (scheme, host, "")
                    }
                }
            }
            None => (None, None, rest),
        };

        let path = path_str
            .split('/')
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect();

        Ok(Self {
            scheme,
            host,
            path,
            query,
        })
    }

    fn parse_query(input: &str) -> BTreeMap<String, String> {
        let mut query = BTreeMap::new();
        for pair in input.split('&') {
            // Pairs without '=' are dropped; repeated keys keep the last value.
            if let Some(eq_idx) = pair.find('=') {
                query.insert(pair[..eq_idx].to_string(), pair[eq_idx + 1..].to_string());
            }
        }
        query
    }
}

impl fmt::Display for UrlData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(scheme) = &self.scheme {
            write!(f, "{scheme}://")?;
        }
        if let Some(host) = &self.host {
            write!(f, "{host}")?;
        }
        for segment in &self.path {
            write!(f, "/{segment}")?;
        }
        if !self.query.is_empty() {
            let pairs: Vec<String> = self
                .query
                .iter()
                .map(|(k, v)| format!("{k}={v}"))
                .collect();
            write!(f, "?{}", pairs.join("&"))?;
        }
        Ok(())
    }
}

impl FromStr for UrlData {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<&str> for UrlData {
    type Error = ParseError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Self::parse(s)
    }
}
