use crate::adapter::{self, Event, Order};
use crate::config::{PluginConfig, MAP_EMBED_BASE};
use crate::embed::build_embed_params;
use crate::error::{config_error, PluginResult};
use askama::Template;
use std::sync::Arc;
use tracing::debug;
use url::Url;

/// Iframe fragment shown on the order detail page
#[derive(Template)]
#[template(path = "order_info.html")]
struct OrderInfoTemplate<'a> {
    title: &'a str,
    url: &'a str,
}

/// Renders the hotel map fragment for order pages
pub struct OrderInfoHook {
    config: Arc<PluginConfig>,
}

impl OrderInfoHook {
    pub fn new(config: Arc<PluginConfig>) -> Self {
        Self { config }
    }

    /// Render the fragment for one order.
    ///
    /// A per-event `embed_link` override is used verbatim; otherwise the
    /// embed URL is built from the order's occurrence windows.
    pub fn render(&self, event: &Event, order: &Order) -> PluginResult<String> {
        let url = match &event.settings.embed_link {
            Some(link) if !link.is_empty() => link.clone(),
            _ => self.embed_url(event, order)?.into(),
        };
        debug!(%url, "Rendering hotel map fragment");

        let lang: String = order.locale.chars().take(2).collect();
        let title = t!("order_info.title", locale = &lang);
        let template = OrderInfoTemplate {
            title: title.as_ref(),
            url: &url,
        };

        Ok(template.render()?)
    }

    fn embed_url(&self, event: &Event, order: &Order) -> PluginResult<Url> {
        let (earliest, latest) = adapter::occurrence_windows(event, order)?;
        let config = adapter::event_config(&self.config, event)?;
        let params =
            build_embed_params(&config, &earliest, &latest, &adapter::order_context(order))?;

        let mut url = Url::parse(MAP_EMBED_BASE)
            .map_err(|e| config_error(&format!("Invalid embed base URL: {}", e)))?;
        url.query_pairs_mut().extend_pairs(params.iter());

        Ok(url)
    }
}
