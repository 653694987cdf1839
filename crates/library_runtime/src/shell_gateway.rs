//! Browser shell contracts and adapters for clipboard and new-tab navigation.

use std::{future::Future, pin::Pin};

/// Object-safe boxed future used by [`ShellGateway`] async methods.
pub type ShellFuture<'a, T> = Pin<Box<dyn Future<Output = T> + 'a>>;

/// Host service for browser-shell operations outside the component tree.
pub trait ShellGateway {
    /// Writes text to the system clipboard.
    fn copy_text<'a>(&'a self, text: &'a str) -> ShellFuture<'a, Result<(), String>>;

    /// Opens a URL in a new browser tab.
    fn open_url<'a>(&'a self, url: &'a str) -> ShellFuture<'a, Result<(), String>>;
}

#[derive(Debug, Clone, Copy, Default)]
/// No-op shell gateway for unsupported targets and baseline tests.
pub struct NoopShellGateway;

impl ShellGateway for NoopShellGateway {
    fn copy_text<'a>(&'a self, _text: &'a str) -> ShellFuture<'a, Result<(), String>> {
        Box::pin(async { Ok(()) })
    }

    fn open_url<'a>(&'a self, _url: &'a str) -> ShellFuture<'a, Result<(), String>> {
        Box::pin(async { Ok(()) })
    }
}

#[derive(Debug, Clone, Copy, Default)]
/// Browser shell gateway backed by `navigator.clipboard` and `window.open`.
pub struct WebShellGateway;

impl ShellGateway for WebShellGateway {
    fn copy_text<'a>(&'a self, text: &'a str) -> ShellFuture<'a, Result<(), String>> {
        Box::pin(copy_text_impl(text))
    }

    fn open_url<'a>(&'a self, url: &'a str) -> ShellFuture<'a, Result<(), String>> {
        Box::pin(open_url_impl(url))
    }
}

async fn copy_text_impl(text: &str) -> Result<(), String> {
    #[cfg(target_arch = "wasm32")]
    {
        let window = web_sys::window().ok_or_else(|| "window unavailable".to_string())?;
        let clipboard = window.navigator().clipboard();
        wasm_bindgen_futures::JsFuture::from(clipboard.write_text(text))
            .await
            .map(|_| ())
            .map_err(|err| format!("clipboard write rejected: {err:?}"))
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = text;
        Err(unsupported())
    }
}

async fn open_url_impl(url: &str) -> Result<(), String> {
    #[cfg(target_arch = "wasm32")]
    {
        let window = web_sys::window().ok_or_else(|| "window unavailable".to_string())?;
        let opened = window
            .open_with_url_and_target(url, "_blank")
            .map_err(|err| format!("window.open rejected: {err:?}"))?;
        // `window.open` resolves to null when a popup blocker intervenes.
        if opened.is_none() {
            return Err("window.open was blocked".to_string());
        }
        Ok(())
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = url;
        Err(unsupported())
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn unsupported() -> String {
    "Browser shell APIs are only available when compiled for wasm32".to_string()
}

#[cfg(test)]
mod tests {
    use futures::executor::block_on;

    use super::*;

    #[test]
    fn noop_gateway_accepts_both_operations() {
        let gateway = NoopShellGateway;
        let gateway_obj: &dyn ShellGateway = &gateway;
        block_on(gateway_obj.copy_text("https://example.test/a.png")).expect("copy");
        block_on(gateway_obj.open_url("https://example.test/a.png")).expect("open");
    }

    #[test]
    fn web_gateway_reports_unsupported_off_wasm() {
        let gateway = WebShellGateway;
        let err = block_on(gateway.copy_text("text")).expect_err("no browser here");
        assert!(err.contains("wasm32"));
    }
}
