use super::time::{check_in_date, check_out_date};
use crate::error::{invalid_input, PluginResult};
use chrono::{DateTime, Utc};
use chrono_tz::Tz;

/// Event identity and location of the shop, as the map widget expects it
#[derive(Debug, Clone)]
pub struct EventConfig {
    /// closer2event event id configured for this event, if any
    pub map_event_id: Option<String>,
    /// Hostname of the shop
    pub site_hostname: String,
    pub organizer_slug: String,
    pub event_slug: String,
    /// Timezone the event's dates are presented in
    pub timezone: Tz,
}

/// Date and location window of a single event occurrence
#[derive(Debug, Clone, Copy, Default)]
pub struct SubEventWindow {
    pub date_from: Option<DateTime<Utc>>,
    pub date_to: Option<DateTime<Utc>>,
    pub geo_lat: Option<f64>,
    pub geo_lon: Option<f64>,
}

/// Order fields the widget cares about
#[derive(Debug, Clone)]
pub struct OrderContext {
    /// Locale the order was placed in, e.g. "en-US"
    pub locale: String,
}

/// Ordered query parameters for the embed URL
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EmbedParams(Vec<(String, String)>);

impl EmbedParams {
    fn push(&mut self, key: &str, value: impl Into<String>) {
        self.0.push((key.to_string(), value.into()));
    }

    /// Look up a parameter by key
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Keys in output order
    pub fn keys(&self) -> Vec<&str> {
        self.0.iter().map(|(k, _)| k.as_str()).collect()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Build the query parameters for the hotel map embed.
///
/// `earliest` is the earliest-starting occurrence covered by the order and
/// `latest` the latest-ending one; for single-occurrence events both are
/// the event's own window. The map centers on the earliest occurrence's
/// coordinates when it has any, and the check-in/check-out dates bracket
/// the stay in the event's timezone.
pub fn build_embed_params(
    config: &EventConfig,
    earliest: &SubEventWindow,
    latest: &SubEventWindow,
    order: &OrderContext,
) -> PluginResult<EmbedParams> {
    let date_from = earliest
        .date_from
        .ok_or_else(|| invalid_input("earliest occurrence has no start date"))?;
    let latest_end = latest
        .date_to
        .or(latest.date_from)
        .ok_or_else(|| invalid_input("latest occurrence has no end or start date"))?;

    let mut params = EmbedParams::default();
    params.push(
        "event",
        config
            .map_event_id
            .as_deref()
            .filter(|id| !id.is_empty())
            .unwrap_or("pretix"),
    );
    params.push("param_1", config.site_hostname.as_str());
    params.push("param_2", config.organizer_slug.as_str());
    params.push("param_3", config.event_slug.as_str());
    params.push("lang", order.locale.chars().take(2).collect::<String>());

    if let (Some(lat), Some(lon)) = (earliest.geo_lat, earliest.geo_lon) {
        params.push("center.lat", lat.to_string());
        params.push("center.lng", lon.to_string());
        params.push("markers.0.lat", lat.to_string());
        params.push("markers.0.lng", lon.to_string());
    }

    params.push(
        "check_in",
        check_in_date(date_from, config.timezone)
            .format("%Y-%m-%d")
            .to_string(),
    );
    params.push(
        "check_out",
        check_out_date(date_from, latest_end, config.timezone)
            .format("%Y-%m-%d")
            .to_string(),
    );

    Ok(params)
}
