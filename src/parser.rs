//! The matcher core and its composition operators.

use std::fmt;
use std::sync::Arc;

use crate::iso::PartialIso;
use crate::url_data::UrlData;

/// A matcher over a [`UrlData`] value.
///
/// A parser is a pure function from a URL value to either failure or a pair
/// of extracted value and remaining URL value. Parsers are built by composing
/// the primitive matchers (see [`scheme`](crate::scheme),
/// [`path`](crate::path) and friends) with the operators on this type, are
/// immutable once constructed, and may be invoked any number of times from
/// any thread.
///
/// Failure carries no diagnostics: a primitive that does not match, a
/// conversion that does not apply, and a failed composition all collapse to
/// `None`, and nothing partially consumed escapes a failed composite.
///
/// # Examples
///
/// ```
/// use deeplink_router::{UrlData, host, scheme};
///
/// let p = scheme("myapp").with(host("goto"));
/// let url = UrlData::parse("myapp://goto").unwrap();
/// let ((), rest) = p.parse(url).unwrap();
/// assert!(rest.is_exhausted());
/// ```
pub struct Parser<A> {
    run: Arc<dyn Fn(UrlData) -> Option<(A, UrlData)> + Send + Sync>,
}

impl<A> Clone for Parser<A> {
    fn clone(&self) -> Self {
        Self {
            run: Arc::clone(&self.run),
        }
    }
}

impl<A> fmt::Debug for Parser<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Parser").finish_non_exhaustive()
    }
}

impl<A: 'static> Parser<A> {
    /// Creates a parser from a matching function.
    #[must_use]
    pub fn new(run: impl Fn(UrlData) -> Option<(A, UrlData)> + Send + Sync + 'static) -> Self {
        Self { run: Arc::new(run) }
    }

    /// Runs the parser, yielding the extracted value and the remainder.
    #[must_use]
    pub fn parse(&self, url: UrlData) -> Option<(A, UrlData)> {
        (self.run)(url)
    }

    /// Converts the extracted value through an isomorphism.
    ///
    /// Runs this parser and applies `iso` to its value. If the conversion
    /// does not apply, the whole combination fails and the inner remainder is
    /// discarded — callers never observe partial consumption.
    ///
    /// # Examples
    ///
    /// ```
    /// use deeplink_router::{PartialIso, UrlData, path_as};
    ///
    /// let even = PartialIso::new(
    ///     |n: i64| (n % 2 == 0).then_some(n),
    ///     |n: i64| Some(n),
    /// );
    /// let p = path_as(PartialIso::int()).via(even);
    ///
    /// let url = UrlData::parse("myapp://goto/12").unwrap();
    /// assert!(p.parse(url.without_scheme().without_host()).is_some());
    /// ```
    #[must_use]
    pub fn via<B: 'static>(self, iso: PartialIso<A, B>) -> Parser<B> {
        Parser::new(move |url| {
            let (a, remainder) = self.parse(url)?;
            let b = iso.apply(a)?;
            Some((b, remainder))
        })
    }

    /// Sequences another parser after this one, keeping the right value.
    ///
    /// The right parser runs against this parser's remainder and is never
    /// attempted when this parser fails.
    #[must_use]
    pub fn with<B: 'static>(self, next: Parser<B>) -> Parser<B> {
        Parser::new(move |url| {
            let (_, remainder) = self.parse(url)?;
            next.parse(remainder)
        })
    }

    /// Sequences another parser after this one, keeping the left value.
    ///
    /// The right parser must succeed but acts as validation only: both its
    /// value and its consumption are discarded, and the remainder returned is
    /// this parser's. Terminating a route with `.skip(end())` is the usual
    /// use.
    #[must_use]
    pub fn skip<B: 'static>(self, next: Parser<B>) -> Parser<A> {
        Parser::new(move |url| {
            let (a, remainder) = self.parse(url)?;
            next.parse(remainder.clone())?;
            Some((a, remainder))
        })
    }

    /// Sequences another parser after this one, keeping both values.
    ///
    /// # Examples
    ///
    /// ```
    /// use deeplink_router::{PartialIso, UrlData, path_as};
    ///
    /// let p = path_as(PartialIso::string()).and(path_as(PartialIso::int()));
    /// let url = UrlData::parse("myapp://goto/series/42").unwrap();
    /// let ((name, n), _) = p.parse(url.without_scheme().without_host()).unwrap();
    /// assert_eq!(name, "series");
    /// assert_eq!(n, 42);
    /// ```
    #[must_use]
    pub fn and<B: 'static>(self, next: Parser<B>) -> Parser<(A, B)> {
        Parser::new(move |url| {
            let (a, remainder) = self.parse(url)?;
            let (b, remainder) = next.parse(remainder)?;
            Some(((a, b), remainder))
        })
    }
}

impl<A: 'static, B: 'static> Parser<(A, B)> {
    /// Sequences another parser after a pair, flattening into a triple.
    ///
    /// Repeated [`and`](Parser::and) composition would nest tuples; this
    /// overload accumulates a third value flat, so route chains extract
    /// `(A, B, C)` instead of `((A, B), C)`.
    #[must_use]
    pub fn and3<C: 'static>(self, next: Parser<C>) -> Parser<(A, B, C)> {
        Parser::new(move |url| {
            let ((a, b), remainder) = self.parse(url)?;
            let (c, remainder) = next.parse(remainder)?;
            Some(((a, b, c), remainder))
        })
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicBool, Ordering};

    use super::*;
    use crate::matchers::{end, host, path, path_as, scheme};

    fn url(input: &str) -> UrlData {
        UrlData::parse(input).unwrap()
    }

    #[test]
    fn via_applies_conversion() {
        let p = scheme("myapp")
            .with(host("goto"))
            .with(path_as(PartialIso::int()));
        let (value, rest) = p.parse(url("myapp://goto/123")).unwrap();
        assert_eq!(value, 123);
        assert!(rest.is_exhausted());
    }

    #[test]
    fn via_fails_when_iso_rejects() {
        let never = PartialIso::<i64, i64>::new(|_| None, |n| Some(n));
        let p = path_as(PartialIso::int()).via(never);
        assert!(p.parse(url("myapp://goto/123").without_scheme().without_host()).is_none());
    }

    #[test]
    fn with_keeps_right_value() {
        let p = path("article").with(path_as(PartialIso::int()));
        let (value, rest) = p
            .parse(url("myapp://goto/article/7").without_scheme().without_host())
            .unwrap();
        assert_eq!(value, 7);
        assert!(rest.path().is_empty());
    }

    #[test]
    fn with_short_circuits_on_left_failure() {
        let touched = Arc::new(AtomicBool::new(false));
        let probe = {
            let touched = Arc::clone(&touched);
            Parser::new(move |u| {
                touched.store(true, Ordering::SeqCst);
                Some(((), u))
            })
        };
        let p = scheme("other").with(probe);
        assert!(p.parse(url("myapp://goto/home")).is_none());
        assert!(!touched.load(Ordering::SeqCst));
    }

    #[test]
    fn skip_keeps_left_value_and_remainder() {
        let p = path_as(PartialIso::int()).skip(end());
        let (value, rest) = p
            .parse(url("myapp://goto/9").without_scheme().without_host())
            .unwrap();
        assert_eq!(value, 9);
        assert!(rest.is_exhausted());
    }

    #[test]
    fn skip_fails_when_validator_fails() {
        let p = path("home").skip(end());
        // "more" is still unconsumed, so end() rejects
        assert!(p
            .parse(url("myapp://goto/home/more").without_scheme().without_host())
            .is_none());
    }

    #[test]
    fn and_pairs_in_order() {
        let p = path_as(PartialIso::string()).and(path_as(PartialIso::int()));
        let ((name, n), _) = p
            .parse(url("myapp://goto/abc/5").without_scheme().without_host())
            .unwrap();
        assert_eq!(name, "abc");
        assert_eq!(n, 5);
    }

    #[test]
    fn and3_flattens() {
        let p = path_as(PartialIso::string())
            .and(path_as(PartialIso::int()))
            .and3(path_as(PartialIso::boolean()));
        let ((name, n, flag), rest) = p
            .parse(url("myapp://goto/abc/5/true").without_scheme().without_host())
            .unwrap();
        assert_eq!(name, "abc");
        assert_eq!(n, 5);
        assert!(flag);
        assert!(rest.is_exhausted());
    }

    #[test]
    fn parsing_twice_yields_equal_results() {
        let p = scheme("myapp")
            .with(host("goto"))
            .with(path_as(PartialIso::int()));
        let input = url("myapp://goto/123");
        assert_eq!(p.parse(input.clone()), p.parse(input));
    }

    #[test]
    fn parser_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Parser<i64>>();
        assert_send_sync::<PartialIso<String, i64>>();
    }
}
