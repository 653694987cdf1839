//! Per-request lifecycle hooks and the protocol that runs them.

use std::future::Future;

use crate::ApiError;

/// Optional lifecycle hooks honored by every request-issuing call.
///
/// All hooks default to absent. When `throw_on_error` is not installed,
/// failures propagate to the caller after `on_error` has fired.
pub struct RequestOptions<T> {
    on_loading: Option<Box<dyn Fn()>>,
    on_transform: Option<Box<dyn Fn(T) -> T>>,
    on_response: Option<Box<dyn Fn(&T)>>,
    on_error: Option<Box<dyn Fn(&ApiError)>>,
    throw_on_error: Option<Box<dyn Fn(&ApiError) -> bool>>,
}

impl<T> Default for RequestOptions<T> {
    fn default() -> Self {
        Self {
            on_loading: None,
            on_transform: None,
            on_response: None,
            on_error: None,
            throw_on_error: None,
        }
    }
}

impl<T> RequestOptions<T> {
    /// Installs a hook fired immediately before the request is issued.
    pub fn on_loading(mut self, hook: impl Fn() + 'static) -> Self {
        self.on_loading = Some(Box::new(hook));
        self
    }

    /// Installs a transform applied to the decoded value before it is
    /// reported or returned.
    pub fn on_transform(mut self, hook: impl Fn(T) -> T + 'static) -> Self {
        self.on_transform = Some(Box::new(hook));
        self
    }

    /// Installs a hook fired with the final, post-transform value.
    pub fn on_response(mut self, hook: impl Fn(&T) + 'static) -> Self {
        self.on_response = Some(Box::new(hook));
        self
    }

    /// Installs a hook fired on every failure, before propagation is decided.
    pub fn on_error(mut self, hook: impl Fn(&ApiError) + 'static) -> Self {
        self.on_error = Some(Box::new(hook));
        self
    }

    /// Installs the predicate deciding whether a reported failure still
    /// propagates to the caller.
    pub fn throw_on_error(mut self, predicate: impl Fn(&ApiError) -> bool + 'static) -> Self {
        self.throw_on_error = Some(Box::new(predicate));
        self
    }
}

/// Runs a request future under the hook protocol.
///
/// On success the decoded value is transformed, reported through
/// `on_response`, and returned as `Ok(Some(value))`. On failure `on_error`
/// always fires first; the error then propagates unless the `throw_on_error`
/// predicate returns false, in which case the call resolves to `Ok(None)` and
/// the failure is considered handled.
pub async fn run_with_hooks<T, F>(
    options: RequestOptions<T>,
    request: F,
) -> Result<Option<T>, ApiError>
where
    F: Future<Output = Result<T, ApiError>>,
{
    if let Some(on_loading) = options.on_loading.as_ref() {
        on_loading();
    }

    match request.await {
        Ok(value) => {
            let value = match options.on_transform.as_ref() {
                Some(transform) => transform(value),
                None => value,
            };
            if let Some(on_response) = options.on_response.as_ref() {
                on_response(&value);
            }
            Ok(Some(value))
        }
        Err(err) => {
            if let Some(on_error) = options.on_error.as_ref() {
                on_error(&err);
            }
            let propagate = options
                .throw_on_error
                .as_ref()
                .map_or(true, |predicate| predicate(&err));
            if propagate {
                Err(err)
            } else {
                Ok(None)
            }
        }
    }
}
