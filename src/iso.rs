//! Partial isomorphisms between component text and typed values.

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use uuid::Uuid;

/// An invertible, partial conversion between two value types.
///
/// Both directions may fail: `apply` converts a component value into a typed
/// value, `unapply` reconstructs the component value. The two are expected to
/// be weak inverses — whenever `apply(a)` yields a value, `unapply` of that
/// value is defined and applying `apply` to the result reproduces it. The
/// type does not enforce this; conversions that break it will round-trip
/// inconsistently.
///
/// Isomorphisms are constructed once and shared: they are cheap to clone and
/// safe to use from any number of matchers and threads.
///
/// # Examples
///
/// ```
/// use deeplink_router::PartialIso;
///
/// let int = PartialIso::int();
/// assert_eq!(int.apply("123".to_string()), Some(123));
/// assert_eq!(int.apply("abc".to_string()), None);
/// assert_eq!(int.unapply(123), Some("123".to_string()));
/// ```
pub struct PartialIso<A, B> {
    apply: Arc<dyn Fn(A) -> Option<B> + Send + Sync>,
    unapply: Arc<dyn Fn(B) -> Option<A> + Send + Sync>,
}

impl<A, B> Clone for PartialIso<A, B> {
    fn clone(&self) -> Self {
        Self {
            apply: Arc::clone(&self.apply),
            unapply: Arc::clone(&self.unapply),
        }
    }
}

impl<A, B> fmt::Debug for PartialIso<A, B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PartialIso").finish_non_exhaustive()
    }
}

impl<A: 'static, B: 'static> PartialIso<A, B> {
    /// Creates an isomorphism from a pair of partial conversion functions.
    ///
    /// # Examples
    ///
    /// ```
    /// use deeplink_router::PartialIso;
    ///
    /// let nonempty = PartialIso::new(
    ///     |s: String| if s.is_empty() { None } else { Some(s) },
    ///     |s: String| Some(s),
    /// );
    /// assert_eq!(nonempty.apply(String::new()), None);
    /// ```
    #[must_use]
    pub fn new(
        apply: impl Fn(A) -> Option<B> + Send + Sync + 'static,
        unapply: impl Fn(B) -> Option<A> + Send + Sync + 'static,
    ) -> Self {
        Self {
            apply: Arc::new(apply),
            unapply: Arc::new(unapply),
        }
    }

    /// Converts forward, yielding `None` if the conversion does not apply.
    #[must_use]
    pub fn apply(&self, a: A) -> Option<B> {
        (self.apply)(a)
    }

    /// Converts backward, yielding `None` if the conversion does not apply.
    #[must_use]
    pub fn unapply(&self, b: B) -> Option<A> {
        (self.unapply)(b)
    }

    /// Lifts this isomorphism into the world of optionals.
    ///
    /// An absent input converts to an absent output in both directions. A
    /// present input delegates to the wrapped conversion, and a failure of
    /// the wrapped conversion propagates as failure of the lifted one — it is
    /// never silently flattened into an absent output.
    ///
    /// # Examples
    ///
    /// ```
    /// use deeplink_router::PartialIso;
    ///
    /// let opt_int = PartialIso::int().optional();
    /// assert_eq!(opt_int.apply(None), Some(None));
    /// assert_eq!(opt_int.apply(Some("7".to_string())), Some(Some(7)));
    /// assert_eq!(opt_int.apply(Some("abc".to_string())), None);
    /// ```
    #[must_use]
    pub fn optional(self) -> PartialIso<Option<A>, Option<B>> {
        let apply = self.apply;
        let unapply = self.unapply;
        PartialIso::new(
            move |a: Option<A>| match a {
                None => Some(None),
                Some(a) => apply(a).map(Some),
            },
            move |b: Option<B>| match b {
                None => Some(None),
                Some(b) => unapply(b).map(Some),
            },
        )
    }
}

impl<T: 'static> PartialIso<T, T> {
    /// The identity isomorphism: both directions always succeed unchanged.
    #[must_use]
    pub fn identity() -> Self {
        Self::new(|t| Some(t), |t| Some(t))
    }
}

impl<B> PartialIso<String, B>
where
    B: FromStr + ToString + 'static,
{
    /// An isomorphism between a string and any type with the conventional
    /// textual representation (`FromStr` one way, `Display` the other).
    ///
    /// This is also the bridge between raw values and enumerated types: an
    /// enum whose `FromStr` succeeds exactly on its known raw values becomes
    /// a raw-value conversion with no further ceremony.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::fmt;
    /// use std::str::FromStr;
    /// use deeplink_router::PartialIso;
    ///
    /// #[derive(Debug, Clone, Copy, PartialEq)]
    /// enum Theme {
    ///     Default,
    ///     Vip,
    /// }
    ///
    /// impl FromStr for Theme {
    ///     type Err = ();
    ///     fn from_str(s: &str) -> Result<Self, ()> {
    ///         match s {
    ///             "default" => Ok(Theme::Default),
    ///             "vip" => Ok(Theme::Vip),
    ///             _ => Err(()),
    ///         }
    ///     }
    /// }
    ///
    /// impl fmt::Display for Theme {
    ///     fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    ///         f.write_str(match self {
    ///             Theme::Default => "default",
    ///             Theme::Vip => "vip",
    ///         })
    ///     }
    /// }
    ///
    /// let theme = PartialIso::<String, Theme>::parsed();
    /// assert_eq!(theme.apply("vip".to_string()), Some(Theme::Vip));
    /// assert_eq!(theme.apply("neon".to_string()), None);
    /// assert_eq!(theme.unapply(Theme::Vip), Some("vip".to_string()));
    /// ```
    #[must_use]
    pub fn parsed() -> Self {
        Self::new(|s: String| s.parse().ok(), |b: B| Some(b.to_string()))
    }
}

impl PartialIso<String, String> {
    /// The identity isomorphism for strings.
    #[must_use]
    pub fn string() -> Self {
        Self::identity()
    }
}

impl PartialIso<String, i64> {
    /// An isomorphism between a string and an integer.
    #[must_use]
    pub fn int() -> Self {
        Self::parsed()
    }
}

impl PartialIso<String, bool> {
    /// An isomorphism between a string and a boolean (`"true"`/`"false"`).
    #[must_use]
    pub fn boolean() -> Self {
        Self::parsed()
    }
}

impl PartialIso<String, Uuid> {
    /// An isomorphism between a string and a UUID.
    #[must_use]
    pub fn uuid() -> Self {
        Self::parsed()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn int_applies_and_unapplies() {
        let iso = PartialIso::int();
        assert_eq!(iso.apply("123".to_string()), Some(123));
        assert_eq!(iso.apply("-9".to_string()), Some(-9));
        assert_eq!(iso.apply("12.5".to_string()), None);
        assert_eq!(iso.unapply(123), Some("123".to_string()));
    }

    #[test]
    fn boolean_accepts_only_true_false() {
        let iso = PartialIso::boolean();
        assert_eq!(iso.apply("true".to_string()), Some(true));
        assert_eq!(iso.apply("false".to_string()), Some(false));
        assert_eq!(iso.apply("yes".to_string()), None);
        assert_eq!(iso.unapply(true), Some("true".to_string()));
    }

    #[test]
    fn uuid_round_trips() {
        let iso = PartialIso::uuid();
        let text = "67e55044-10b1-426f-9247-bb680e5fe0c8".to_string();
        let id = iso.apply(text.clone()).unwrap();
        assert_eq!(iso.unapply(id), Some(text));
    }

    #[test]
    fn uuid_rejects_garbage() {
        let iso = PartialIso::uuid();
        assert_eq!(iso.apply("not-a-uuid".to_string()), None);
    }

    #[test]
    fn string_is_identity() {
        let iso = PartialIso::string();
        assert_eq!(iso.apply("abc".to_string()), Some("abc".to_string()));
        assert_eq!(iso.unapply("abc".to_string()), Some("abc".to_string()));
    }

    #[test]
    fn identity_over_other_types() {
        let iso = PartialIso::<u8, u8>::identity();
        assert_eq!(iso.apply(7), Some(7));
        assert_eq!(iso.unapply(7), Some(7));
    }

    #[test]
    fn optional_absent_converts_to_absent() {
        let iso = PartialIso::int().optional();
        assert_eq!(iso.apply(None), Some(None));
        assert_eq!(iso.unapply(None), Some(None));
    }

    #[test]
    fn optional_present_delegates() {
        let iso = PartialIso::int().optional();
        assert_eq!(iso.apply(Some("7".to_string())), Some(Some(7)));
        assert_eq!(iso.unapply(Some(7)), Some(Some("7".to_string())));
    }

    #[test]
    fn optional_inner_failure_propagates_as_failure() {
        let iso = PartialIso::int().optional();
        // not Some(None): the inner conversion failed, so the lifted one does
        assert_eq!(iso.apply(Some("abc".to_string())), None);
    }

    #[test]
    fn cloned_iso_shares_behavior() {
        let iso = PartialIso::int();
        let other = iso.clone();
        assert_eq!(iso.apply("5".to_string()), other.apply("5".to_string()));
    }
}
