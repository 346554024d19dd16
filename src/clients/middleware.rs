//! Request/response middleware.
//!
//! A [`MiddlewareChain`] holds an ordered, append-only list of
//! [`MiddlewareEntry`] values. Each entry takes one of two shapes:
//!
//! - [`MiddlewareEntry::RequestOnly`]: a closure that mutates the outgoing
//!   [`RequestOptions`] in place. Its URL argument is read-only.
//! - [`MiddlewareEntry::Hooks`]: a [`Middleware`] implementation whose
//!   `request` hook returns the URL and options to continue with, and whose
//!   `response` hook returns the response to continue with.
//!
//! Both phases walk the entries in registration order, so later entries see
//! (and may override) what earlier entries produced. Request-only entries are
//! skipped during the response phase.
//!
//! Errors returned by hooks are not caught: the first one aborts the phase and
//! reaches the caller unchanged inside
//! [`HttpError::Middleware`](crate::HttpError::Middleware).
//!
//! # Example
//!
//! ```rust
//! use rest_api::{HookPair, HttpMethod, MiddlewareChain, RequestOptions};
//!
//! let mut chain = MiddlewareChain::new();
//! chain.add_request_mutator(|_url, options| options.set_header("X", "1"));
//! chain.add(HookPair::new().on_request(|url, mut options| {
//!     options.set_header("X", "2");
//!     Ok((format!("{url}?traced=true"), options))
//! }));
//!
//! let (url, options) = chain
//!     .run_request_phase("https://myhost.com/v1/users".to_string(), RequestOptions::new(HttpMethod::Get))
//!     .unwrap();
//!
//! assert_eq!(url, "https://myhost.com/v1/users?traced=true");
//! assert_eq!(options.header("X"), Some("2"));
//! ```

use std::fmt;
use std::sync::Arc;

use crate::clients::errors::MiddlewareError;
use crate::clients::http_request::RequestOptions;
use crate::clients::http_response::HttpResponse;

/// Result of a request hook: the URL and options to continue with.
pub type RequestHookResult = Result<(String, RequestOptions), MiddlewareError>;

/// Result of a response hook: the response to continue with.
pub type ResponseHookResult = Result<HttpResponse, MiddlewareError>;

/// A middleware with optional request and response hooks.
///
/// Both hooks default to passing their input through unchanged, so
/// implementors only override the phase they care about.
///
/// # Example
///
/// ```rust
/// use rest_api::{HttpResponse, Middleware, ResponseHookResult};
///
/// struct MarkModified;
///
/// impl Middleware for MarkModified {
///     fn response(&self, mut response: HttpResponse) -> ResponseHookResult {
///         if let Some(body) = response.body.as_object_mut() {
///             body.insert("modified".to_string(), true.into());
///         }
///         Ok(response)
///     }
/// }
/// ```
pub trait Middleware: Send + Sync {
    /// Runs before the request is sent.
    ///
    /// # Errors
    ///
    /// Any error aborts the request and is returned to the caller.
    fn request(&self, url: String, options: RequestOptions) -> RequestHookResult {
        Ok((url, options))
    }

    /// Runs after a response is received, before it is classified.
    ///
    /// # Errors
    ///
    /// Any error aborts the request and is returned to the caller.
    fn response(&self, response: HttpResponse) -> ResponseHookResult {
        Ok(response)
    }
}

type RequestMutatorFn = dyn Fn(&str, &mut RequestOptions) + Send + Sync;
type RequestHookFn = dyn Fn(String, RequestOptions) -> RequestHookResult + Send + Sync;
type ResponseHookFn = dyn Fn(HttpResponse) -> ResponseHookResult + Send + Sync;

/// One registered middleware.
#[derive(Clone)]
pub enum MiddlewareEntry {
    /// Mutates the outgoing options in place; does not take part in the response phase.
    RequestOnly(Arc<RequestMutatorFn>),
    /// Request and response hooks whose return values replace their inputs.
    Hooks(Arc<dyn Middleware>),
}

impl MiddlewareEntry {
    /// Wraps a closure that mutates outgoing options in place.
    pub fn request_only<F>(mutator: F) -> Self
    where
        F: Fn(&str, &mut RequestOptions) + Send + Sync + 'static,
    {
        Self::RequestOnly(Arc::new(mutator))
    }

    /// Wraps a [`Middleware`] implementation.
    pub fn hooks<M>(middleware: M) -> Self
    where
        M: Middleware + 'static,
    {
        Self::Hooks(Arc::new(middleware))
    }

    /// Returns `true` if this entry takes part in the response phase.
    #[must_use]
    pub const fn has_response_hook(&self) -> bool {
        matches!(self, Self::Hooks(_))
    }
}

impl<F> From<F> for MiddlewareEntry
where
    F: Fn(&str, &mut RequestOptions) + Send + Sync + 'static,
{
    fn from(mutator: F) -> Self {
        Self::request_only(mutator)
    }
}

impl From<HookPair> for MiddlewareEntry {
    fn from(pair: HookPair) -> Self {
        Self::hooks(pair)
    }
}

impl fmt::Debug for MiddlewareEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::RequestOnly(_) => f.write_str("RequestOnly(..)"),
            Self::Hooks(_) => f.write_str("Hooks(..)"),
        }
    }
}

/// A [`Middleware`] assembled from optional closures.
///
/// A missing hook passes its input through unchanged.
///
/// # Example
///
/// ```rust
/// use rest_api::HookPair;
///
/// let pair = HookPair::new()
///     .on_request(|url, mut options| {
///         options.set_header("Myheadertwo", "hello world");
///         Ok((url, options))
///     })
///     .on_response(|mut response| {
///         response.body["modified"] = true.into();
///         Ok(response)
///     });
/// ```
#[derive(Default)]
pub struct HookPair {
    request: Option<Box<RequestHookFn>>,
    response: Option<Box<ResponseHookFn>>,
}

impl HookPair {
    /// Creates a pair with neither hook set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the request hook.
    #[must_use]
    pub fn on_request<F>(mut self, hook: F) -> Self
    where
        F: Fn(String, RequestOptions) -> RequestHookResult + Send + Sync + 'static,
    {
        self.request = Some(Box::new(hook));
        self
    }

    /// Sets the response hook.
    #[must_use]
    pub fn on_response<F>(mut self, hook: F) -> Self
    where
        F: Fn(HttpResponse) -> ResponseHookResult + Send + Sync + 'static,
    {
        self.response = Some(Box::new(hook));
        self
    }
}

impl Middleware for HookPair {
    fn request(&self, url: String, options: RequestOptions) -> RequestHookResult {
        match &self.request {
            Some(hook) => hook(url, options),
            None => Ok((url, options)),
        }
    }

    fn response(&self, response: HttpResponse) -> ResponseHookResult {
        match &self.response {
            Some(hook) => hook(response),
            None => Ok(response),
        }
    }
}

impl fmt::Debug for HookPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HookPair")
            .field("request", &self.request.is_some())
            .field("response", &self.response.is_some())
            .finish()
    }
}

/// The ordered middleware list of a client.
///
/// Entries are appended only; they are never removed or reordered. Cloning a
/// chain shares the registered entries.
#[derive(Clone, Debug, Default)]
pub struct MiddlewareChain {
    entries: Vec<MiddlewareEntry>,
}

impl MiddlewareChain {
    /// Creates an empty chain.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an entry.
    pub fn add(&mut self, entry: impl Into<MiddlewareEntry>) {
        self.entries.push(entry.into());
    }

    /// Appends a closure that mutates outgoing options in place.
    pub fn add_request_mutator<F>(&mut self, mutator: F)
    where
        F: Fn(&str, &mut RequestOptions) + Send + Sync + 'static,
    {
        self.entries.push(MiddlewareEntry::request_only(mutator));
    }

    /// Returns the number of registered entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if no entries are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the registered entries in order.
    #[must_use]
    pub fn entries(&self) -> &[MiddlewareEntry] {
        &self.entries
    }

    /// Runs every entry's request phase in registration order.
    ///
    /// # Errors
    ///
    /// Returns the first error produced by a request hook.
    pub fn run_request_phase(
        &self,
        url: String,
        options: RequestOptions,
    ) -> RequestHookResult {
        let mut url = url;
        let mut options = options;

        for entry in &self.entries {
            match entry {
                MiddlewareEntry::RequestOnly(mutator) => mutator(&url, &mut options),
                MiddlewareEntry::Hooks(middleware) => {
                    (url, options) = middleware.request(url, options)?;
                }
            }
        }

        Ok((url, options))
    }

    /// Runs every response hook in registration order.
    ///
    /// # Errors
    ///
    /// Returns the first error produced by a response hook.
    pub fn run_response_phase(&self, response: HttpResponse) -> ResponseHookResult {
        let mut response = response;

        for entry in &self.entries {
            if let MiddlewareEntry::Hooks(middleware) = entry {
                response = middleware.response(response)?;
            }
        }

        Ok(response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clients::http_request::HttpMethod;
    use serde_json::json;
    use std::collections::HashMap;
    use std::sync::Mutex;

    const URL: &str = "https://myhost.com:3000/api/v2/users";

    fn get_options() -> RequestOptions {
        RequestOptions::new(HttpMethod::Get)
    }

    fn ok_response(body: serde_json::Value) -> HttpResponse {
        HttpResponse::new(200, HashMap::new(), body)
    }

    #[test]
    fn test_empty_chain_passes_through() {
        let chain = MiddlewareChain::new();
        assert!(chain.is_empty());

        let (url, options) = chain
            .run_request_phase(URL.to_string(), get_options())
            .unwrap();
        assert_eq!(url, URL);
        assert_eq!(options, get_options());

        let response = chain.run_response_phase(ok_response(json!({"a": 1}))).unwrap();
        assert_eq!(response.body, json!({"a": 1}));
    }

    #[test]
    fn test_request_mutators_apply_in_registration_order() {
        let mut chain = MiddlewareChain::new();
        chain.add_request_mutator(|_url, options| options.set_header("X", "1"));
        chain.add_request_mutator(|_url, options| {
            assert_eq!(options.header("X"), Some("1"));
            options.set_header("X", "2");
        });

        let (_, options) = chain
            .run_request_phase(URL.to_string(), get_options())
            .unwrap();
        assert_eq!(options.header("X"), Some("2"));
        assert_eq!(chain.len(), 2);
    }

    #[test]
    fn test_request_hook_replaces_url_and_options() {
        let mut chain = MiddlewareChain::new();
        chain.add(HookPair::new().on_request(|url, _options| {
            let mut replaced = RequestOptions::new(HttpMethod::Delete);
            replaced.set_header("X-Replaced", "yes");
            Ok((format!("{url}/3"), replaced))
        }));
        chain.add_request_mutator(|url, options| {
            assert!(url.ends_with("/users/3"));
            options.body = Some("seen".to_string());
        });

        let (url, options) = chain
            .run_request_phase(URL.to_string(), get_options())
            .unwrap();

        assert_eq!(url, format!("{URL}/3"));
        assert_eq!(options.method, HttpMethod::Delete);
        assert_eq!(options.header("X-Replaced"), Some("yes"));
        assert_eq!(options.body.as_deref(), Some("seen"));
    }

    #[test]
    fn test_response_hooks_apply_in_order_and_skip_request_only() {
        let calls = Arc::new(Mutex::new(Vec::new()));

        let mut chain = MiddlewareChain::new();
        let first = Arc::clone(&calls);
        chain.add(HookPair::new().on_response(move |mut response| {
            first.lock().unwrap().push("first");
            response.body["step"] = json!(1);
            Ok(response)
        }));
        let mutator_calls = Arc::clone(&calls);
        chain.add_request_mutator(move |_url, _options| {
            mutator_calls.lock().unwrap().push("mutator");
        });
        let second = Arc::clone(&calls);
        chain.add(HookPair::new().on_response(move |mut response| {
            second.lock().unwrap().push("second");
            assert_eq!(response.body["step"], json!(1));
            response.body["step"] = json!(2);
            Ok(response)
        }));

        let response = chain.run_response_phase(ok_response(json!({}))).unwrap();

        assert_eq!(response.body["step"], json!(2));
        assert_eq!(*calls.lock().unwrap(), vec!["first", "second"]);
    }

    #[test]
    fn test_pair_without_request_hook_passes_request_through() {
        let mut chain = MiddlewareChain::new();
        chain.add(HookPair::new().on_response(Ok));

        let (url, options) = chain
            .run_request_phase(URL.to_string(), get_options())
            .unwrap();
        assert_eq!(url, URL);
        assert_eq!(options, get_options());
    }

    #[test]
    fn test_request_hook_error_stops_the_chain() {
        let reached = Arc::new(Mutex::new(false));

        let mut chain = MiddlewareChain::new();
        chain.add(HookPair::new().on_request(|_url, _options| Err("rejected".into())));
        let flag = Arc::clone(&reached);
        chain.add_request_mutator(move |_url, _options| *flag.lock().unwrap() = true);

        let error = chain
            .run_request_phase(URL.to_string(), get_options())
            .unwrap_err();

        assert_eq!(error.to_string(), "rejected");
        assert!(!*reached.lock().unwrap());
    }

    #[test]
    fn test_custom_middleware_trait_impl() {
        struct Tagger;

        impl Middleware for Tagger {
            fn request(&self, url: String, mut options: RequestOptions) -> RequestHookResult {
                options.set_header("X-Tag", "tagged");
                Ok((url, options))
            }
        }

        let mut chain = MiddlewareChain::new();
        chain.add(MiddlewareEntry::hooks(Tagger));

        let (_, options) = chain
            .run_request_phase(URL.to_string(), get_options())
            .unwrap();
        assert_eq!(options.header("X-Tag"), Some("tagged"));

        // Default response hook is a pass-through.
        let response = chain.run_response_phase(ok_response(json!({"a": 1}))).unwrap();
        assert_eq!(response.body, json!({"a": 1}));
    }

    #[test]
    fn test_entry_shapes() {
        let mutator = MiddlewareEntry::request_only(|_url: &str, _options: &mut RequestOptions| {});
        let pair: MiddlewareEntry = HookPair::new().into();

        assert!(!mutator.has_response_hook());
        assert!(pair.has_response_hook());
        assert_eq!(format!("{mutator:?}"), "RequestOnly(..)");
        assert_eq!(format!("{pair:?}"), "Hooks(..)");
    }

    #[test]
    fn test_cloned_chain_shares_entries() {
        let mut chain = MiddlewareChain::new();
        chain.add_request_mutator(|_url, options| options.set_header("X", "1"));

        let cloned = chain.clone();
        chain.add_request_mutator(|_url, options| options.set_header("X", "2"));
        assert_eq!(cloned.len(), 1);
        assert_eq!(chain.len(), 2);

        let (_, options) = cloned
            .run_request_phase(URL.to_string(), get_options())
            .unwrap();
        assert_eq!(options.header("X"), Some("1"));
    }
}
