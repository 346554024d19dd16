//! Bearer token attachment.
//!
//! Token acquisition is the caller's concern; the client only asks a
//! [`TokenProvider`] for the current token before every request and turns it
//! into an `Authorization` header.

use std::fmt;

/// The `Authorization` header name.
pub const AUTHORIZATION_HEADER: &str = "Authorization";

const BEARER_PREFIX: &str = "Bearer ";

/// Supplies the current auth token.
///
/// Called once per request, so rotating tokens take effect on the next
/// request without re-registering the provider. Closures returning a
/// `String` implement this trait.
///
/// # Example
///
/// ```rust
/// use rest_api::TokenProvider;
/// use std::sync::{Arc, RwLock};
///
/// let store = Arc::new(RwLock::new("first".to_string()));
/// let reader = Arc::clone(&store);
/// let provider = move || reader.read().unwrap().clone();
///
/// assert_eq!(provider.current_token(), "first");
/// *store.write().unwrap() = "second".to_string();
/// assert_eq!(provider.current_token(), "second");
/// ```
pub trait TokenProvider: Send + Sync {
    /// Returns the token to attach to the next request.
    fn current_token(&self) -> String;
}

impl<F> TokenProvider for F
where
    F: Fn() -> String + Send + Sync,
{
    fn current_token(&self) -> String {
        self()
    }
}

/// A fixed token.
///
/// The `Debug` implementation masks the value, displaying only
/// `StaticToken(*****)`, to keep credentials out of logs.
///
/// # Example
///
/// ```rust
/// use rest_api::{StaticToken, TokenProvider};
///
/// let token = StaticToken::new("ds97we789ewq7dasd987sad987sda732sda983n4d7sad");
/// assert_eq!(format!("{:?}", token), "StaticToken(*****)");
/// assert!(token.current_token().starts_with("ds97"));
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct StaticToken(String);

impl StaticToken {
    /// Creates a provider that always returns `token`.
    #[must_use]
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }
}

impl TokenProvider for StaticToken {
    fn current_token(&self) -> String {
        self.0.clone()
    }
}

impl fmt::Debug for StaticToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("StaticToken(*****)")
    }
}

/// Builds the `Authorization` header value for `token`.
///
/// A raw token gets the `Bearer ` scheme prepended. A token that already
/// starts with `Bearer ` (any case) is passed through unmodified. An empty
/// token yields `None` and no header is sent. The token is never trimmed.
///
/// # Example
///
/// ```rust
/// use rest_api::authorization_value;
///
/// assert_eq!(authorization_value("abc").as_deref(), Some("Bearer abc"));
/// assert_eq!(authorization_value("Bearer abc").as_deref(), Some("Bearer abc"));
/// assert_eq!(authorization_value(""), None);
/// ```
#[must_use]
pub fn authorization_value(token: &str) -> Option<String> {
    if token.is_empty() {
        tracing::debug!("Token provider returned an empty token; no Authorization header sent");
        return None;
    }

    let has_scheme = token
        .get(..BEARER_PREFIX.len())
        .is_some_and(|prefix| prefix.eq_ignore_ascii_case(BEARER_PREFIX));
    if has_scheme {
        tracing::debug!("Token provider returned a pre-formatted Bearer credential");
        return Some(token.to_string());
    }

    Some(format!("{BEARER_PREFIX}{token}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_raw_token_gets_bearer_scheme() {
        assert_eq!(
            authorization_value("ds97we789ewq7").as_deref(),
            Some("Bearer ds97we789ewq7")
        );
    }

    #[test]
    fn test_prefixed_token_passes_through() {
        assert_eq!(
            authorization_value("Bearer ds97we789ewq7").as_deref(),
            Some("Bearer ds97we789ewq7")
        );
        assert_eq!(
            authorization_value("bearer ds97we789ewq7").as_deref(),
            Some("bearer ds97we789ewq7")
        );
    }

    #[test]
    fn test_token_resembling_scheme_is_still_prefixed() {
        assert_eq!(
            authorization_value("Bearerless").as_deref(),
            Some("Bearer Bearerless")
        );
    }

    #[test]
    fn test_empty_token_sends_no_header() {
        assert!(authorization_value("").is_none());
    }

    #[test]
    fn test_token_is_not_trimmed() {
        assert_eq!(authorization_value(" abc ").as_deref(), Some("Bearer  abc "));
        assert_eq!(authorization_value("   ").as_deref(), Some("Bearer    "));
        assert_eq!(
            authorization_value("Bearer abc\t").as_deref(),
            Some("Bearer abc\t")
        );
    }

    #[test]
    fn test_multibyte_token_does_not_panic() {
        assert_eq!(authorization_value("жетон").as_deref(), Some("Bearer жетон"));
    }

    #[test]
    fn test_closure_provider_is_reinvoked() {
        use std::sync::atomic::{AtomicUsize, Ordering};

        let counter = AtomicUsize::new(0);
        let provider = move || format!("token-{}", counter.fetch_add(1, Ordering::SeqCst));

        assert_eq!(provider.current_token(), "token-0");
        assert_eq!(provider.current_token(), "token-1");
    }

    #[test]
    fn test_static_token_masks_debug_output() {
        let token = StaticToken::new("super-secret");
        let debug_output = format!("{token:?}");
        assert_eq!(debug_output, "StaticToken(*****)");
        assert!(!debug_output.contains("super-secret"));
        assert_eq!(token.current_token(), "super-secret");
    }
}
