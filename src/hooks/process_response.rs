use crate::config::MAP_EMBED_BASE;
use crate::csp::Directives;
use crate::error::{Error, PluginResult};
use axum::{
    body::Body,
    http::{header, HeaderMap, HeaderValue, Request, Response},
    middleware::Next,
};
use tracing::{debug, error};

/// Adds the map origin to outgoing responses' Content-Security-Policy
#[derive(Debug, Default)]
pub struct ProcessResponseHook;

impl ProcessResponseHook {
    pub fn new() -> Self {
        Self
    }

    /// Merge `frame-src https://map.closer2event.com` into the CSP header.
    ///
    /// An existing header is parsed and extended; other directives and
    /// existing frame-src sources stay untouched. The header is written
    /// back only when any directive remains non-empty.
    pub fn apply(&self, headers: &mut HeaderMap) -> PluginResult<()> {
        let mut directives = match headers.get(header::CONTENT_SECURITY_POLICY) {
            Some(value) => {
                let value = value.to_str().map_err(|e| Error::Header(e.to_string()))?;
                Directives::parse(value)
            }
            None => Directives::default(),
        };

        directives.merge("frame-src", &[MAP_EMBED_BASE]);

        if !directives.is_empty() {
            let rendered = directives.render();
            debug!(csp = %rendered, "Merged map origin into Content-Security-Policy");
            headers.insert(
                header::CONTENT_SECURITY_POLICY,
                HeaderValue::from_str(&rendered).map_err(|e| Error::Header(e.to_string()))?,
            );
        }

        Ok(())
    }
}

/// Response middleware that applies the CSP merge to every response
pub async fn csp_middleware(request: Request<Body>, next: Next) -> Response<Body> {
    let mut response = next.run(request).await;

    if let Err(e) = ProcessResponseHook::new().apply(response.headers_mut()) {
        error!("Failed to update Content-Security-Policy: {}", e);
    }

    response
}
