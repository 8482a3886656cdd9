use crate::adapter::{Event, Order};
use crate::config::PluginConfig;
use crate::error::PluginResult;
use axum::http::HeaderMap;
use std::sync::Arc;
use tracing::info;

// Export hooks
pub mod nav;
pub mod order_info;
pub mod process_response;
pub mod stylesheet;

pub use nav::{NavEntry, NavHook, RequestContext};
pub use order_info::OrderInfoHook;
pub use process_response::{csp_middleware, ProcessResponseHook};
pub use stylesheet::StylesheetHook;

/// Host signal names the plugin attaches to
pub mod signals {
    pub const ORDER_INFO: &str = "order_info";
    pub const PROCESS_RESPONSE: &str = "process_response";
    pub const NAV_EVENT_SETTINGS: &str = "nav_event_settings";
    pub const SASS_POSTAMBLE: &str = "sass_postamble";

    pub const ALL: [&str; 4] = [
        ORDER_INFO,
        PROCESS_RESPONSE,
        NAV_EVENT_SETTINGS,
        SASS_POSTAMBLE,
    ];
}

/// All hook handlers, constructed once at startup.
///
/// The host looks up the handler for a signal through [`registrations`]
/// and calls the matching dispatch method; nothing registers itself in a
/// global table. Handlers disabled in the configuration return nothing
/// and leave their inputs untouched.
///
/// [`registrations`]: HookRegistry::registrations
pub struct HookRegistry {
    config: Arc<PluginConfig>,
    order_info: OrderInfoHook,
    process_response: ProcessResponseHook,
    nav: NavHook,
    stylesheet: StylesheetHook,
}

impl HookRegistry {
    /// Create the registry and its handlers
    pub fn new(config: Arc<PluginConfig>) -> Self {
        info!("Registering closer2event hooks");
        let order_info = OrderInfoHook::new(Arc::clone(&config));

        Self {
            order_info,
            process_response: ProcessResponseHook::new(),
            nav: NavHook::new(),
            stylesheet: StylesheetHook::new(),
            config,
        }
    }

    /// Signal name and dispatch id, one row per handler
    pub fn registrations(&self) -> [(&'static str, &'static str); 4] {
        [
            (signals::ORDER_INFO, "closer2event_order_info"),
            (signals::PROCESS_RESPONSE, "closer2event_middleware_resp"),
            (signals::NAV_EVENT_SETTINGS, "closer2event_nav"),
            (signals::SASS_POSTAMBLE, "closer2event_sass_postamble"),
        ]
    }

    /// Render the hotel map fragment for an order page.
    ///
    /// Returns `None` when the hook is disabled.
    pub fn order_info(&self, event: &Event, order: &Order) -> PluginResult<Option<String>> {
        if !self.config.is_hook_enabled(signals::ORDER_INFO) {
            return Ok(None);
        }
        self.order_info.render(event, order).map(Some)
    }

    /// Merge the map origin into a response's Content-Security-Policy
    pub fn process_response(&self, headers: &mut HeaderMap) -> PluginResult<()> {
        if !self.config.is_hook_enabled(signals::PROCESS_RESPONSE) {
            return Ok(());
        }
        self.process_response.apply(headers)
    }

    /// Settings navigation entries for the current request
    pub fn nav_event_settings(&self, request: &RequestContext) -> Vec<NavEntry> {
        if !self.config.is_hook_enabled(signals::NAV_EVENT_SETTINGS) {
            return Vec::new();
        }
        self.nav.entries(request)
    }

    /// Stylesheet postamble for a named bundle
    pub fn sass_postamble(&self, bundle: &str) -> &'static str {
        if !self.config.is_hook_enabled(signals::SASS_POSTAMBLE) {
            return "";
        }
        self.stylesheet.postamble(bundle)
    }
}
