//! Narrow views of the host's event, sub-event and order objects.
//!
//! Hook handlers receive these value shapes instead of the host's full
//! model objects; the host fills them from whatever it resolved for the
//! current request.

use crate::config::{EventSettings, PluginConfig};
use crate::embed::{EventConfig, OrderContext, SubEventWindow};
use crate::error::{invalid_input, PluginResult};
use chrono::{DateTime, Utc};
use chrono_tz::Tz;

/// Event fields the hooks read
#[derive(Debug, Clone)]
pub struct Event {
    pub slug: String,
    pub organizer_slug: String,
    /// Timezone the event's dates are presented in
    pub timezone: Tz,
    /// Whether the event is a series of dated occurrences
    pub has_subevents: bool,
    pub date_from: Option<DateTime<Utc>>,
    pub date_to: Option<DateTime<Utc>>,
    pub geo_lat: Option<f64>,
    pub geo_lon: Option<f64>,
    pub settings: EventSettings,
}

impl Event {
    /// The event's own date/location window, for single-occurrence events
    fn own_window(&self) -> SubEventWindow {
        SubEventWindow {
            date_from: self.date_from,
            date_to: self.date_to,
            geo_lat: self.geo_lat,
            geo_lon: self.geo_lon,
        }
    }
}

/// One dated occurrence within an event series
#[derive(Debug, Clone, Copy)]
pub struct SubEvent {
    pub date_from: Option<DateTime<Utc>>,
    pub date_to: Option<DateTime<Utc>>,
    pub geo_lat: Option<f64>,
    pub geo_lon: Option<f64>,
}

impl From<&SubEvent> for SubEventWindow {
    fn from(subevent: &SubEvent) -> Self {
        SubEventWindow {
            date_from: subevent.date_from,
            date_to: subevent.date_to,
            geo_lat: subevent.geo_lat,
            geo_lon: subevent.geo_lon,
        }
    }
}

/// Order fields the hooks read
#[derive(Debug, Clone)]
pub struct Order {
    /// Locale the order was placed in, e.g. "en-US"
    pub locale: String,
    /// Distinct sub-events of the order's positions; empty for
    /// single-occurrence events
    pub subevents: Vec<SubEvent>,
}

/// Earliest-starting and latest-ending occurrence windows covered by an
/// order.
///
/// For events without sub-events both windows are the event's own. An
/// order on an event series must cover at least one occurrence.
pub fn occurrence_windows(
    event: &Event,
    order: &Order,
) -> PluginResult<(SubEventWindow, SubEventWindow)> {
    if !event.has_subevents {
        let window = event.own_window();
        return Ok((window, window));
    }

    let earliest = order
        .subevents
        .iter()
        .min_by_key(|s| s.date_from)
        .ok_or_else(|| invalid_input("order covers no occurrences"))?;
    let latest = order
        .subevents
        .iter()
        .max_by_key(|s| s.date_to.or(s.date_from))
        .ok_or_else(|| invalid_input("order covers no occurrences"))?;

    Ok((earliest.into(), latest.into()))
}

/// Event identity as the parameter builder needs it
pub fn event_config(config: &PluginConfig, event: &Event) -> PluginResult<EventConfig> {
    Ok(EventConfig {
        map_event_id: event.settings.map_event_id.clone(),
        site_hostname: config.site_hostname()?.to_string(),
        organizer_slug: event.organizer_slug.clone(),
        event_slug: event.slug.clone(),
        timezone: event.timezone,
    })
}

/// Locale context of the order
pub fn order_context(order: &Order) -> OrderContext {
    OrderContext {
        locale: order.locale.clone(),
    }
}
