use axum::body::Body;
use axum::http::{header, HeaderMap, HeaderValue, Request};
use axum::routing::get;
use axum::Router;
use chrono::TimeZone;
use chrono_tz::Europe::Berlin;
use closer2event::adapter::{Event, Order};
use closer2event::config::{EventSettings, PluginConfig};
use closer2event::hooks::{csp_middleware, signals, HookRegistry, RequestContext};
use std::sync::Arc;
use tower::ServiceExt;
use url::Url;

fn plugin_config() -> PluginConfig {
    PluginConfig::new(Url::parse("https://tickets.example.org").unwrap())
}

fn registry() -> HookRegistry {
    HookRegistry::new(Arc::new(plugin_config()))
}

fn sample_event() -> Event {
    Event {
        slug: "conf".to_string(),
        organizer_slug: "bigorg".to_string(),
        timezone: Berlin,
        has_subevents: false,
        date_from: Some(
            Berlin
                .with_ymd_and_hms(2024, 6, 10, 9, 0, 0)
                .unwrap()
                .with_timezone(&chrono::Utc),
        ),
        date_to: Some(
            Berlin
                .with_ymd_and_hms(2024, 6, 12, 16, 0, 0)
                .unwrap()
                .with_timezone(&chrono::Utc),
        ),
        geo_lat: Some(50.11),
        geo_lon: Some(8.68),
        settings: EventSettings::default(),
    }
}

fn sample_order() -> Order {
    Order {
        locale: "en-US".to_string(),
        subevents: Vec::new(),
    }
}

/// Smoke test to verify the configuration defaults
#[test]
fn test_config_enables_all_hooks_by_default() {
    let config = plugin_config();
    for name in signals::ALL {
        assert!(config.is_hook_enabled(name));
    }
    assert_eq!(config.site_hostname().unwrap(), "tickets.example.org");
}

/// The registry exposes one registration row per host signal
#[test]
fn test_registry_lists_all_registrations() {
    let registrations = registry().registrations();
    assert_eq!(registrations.len(), signals::ALL.len());
    assert!(registrations
        .iter()
        .any(|(signal, uid)| *signal == signals::ORDER_INFO && *uid == "closer2event_order_info"));
}

#[test]
fn test_order_info_renders_iframe() {
    let html = registry()
        .order_info(&sample_event(), &sample_order())
        .unwrap()
        .unwrap();

    assert!(html.contains("<iframe"));
    assert!(html.contains("https://map.closer2event.com/?event=pretix"));
    assert!(html.contains("check_in=2024-06-09"));
    assert!(html.contains("check_out=2024-06-13"));
    assert!(html.contains("center.lat=50.11"));
    assert!(html.contains("Hotels near the event"));
}

/// A per-event embed link replaces the built URL entirely
#[test]
fn test_order_info_embed_link_override() {
    let mut event = sample_event();
    event.settings.embed_link = Some("https://map.closer2event.com/custom".to_string());

    let html = registry()
        .order_info(&event, &sample_order())
        .unwrap()
        .unwrap();
    assert!(html.contains("https://map.closer2event.com/custom"));
    assert!(!html.contains("check_in"));
}

#[test]
fn test_disabled_order_info_hook_returns_none() {
    let mut config = plugin_config();
    config
        .hooks
        .insert(signals::ORDER_INFO.to_string(), false);
    let registry = HookRegistry::new(Arc::new(config));

    let html = registry
        .order_info(&sample_event(), &sample_order())
        .unwrap();
    assert!(html.is_none());
}

#[test]
fn test_nav_requires_permission() {
    let request = RequestContext {
        organizer_slug: "bigorg".to_string(),
        event_slug: "conf".to_string(),
        namespace: "control:event.settings".to_string(),
        locale: "en".to_string(),
        can_change_event_settings: false,
    };
    assert!(registry().nav_event_settings(&request).is_empty());
}

#[test]
fn test_nav_entry_fields() {
    let mut request = RequestContext {
        organizer_slug: "bigorg".to_string(),
        event_slug: "conf".to_string(),
        namespace: "control:event.settings".to_string(),
        locale: "en".to_string(),
        can_change_event_settings: true,
    };

    let entries = registry().nav_event_settings(&request);
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].label, "closer2event");
    assert_eq!(entries[0].icon, "house");
    assert_eq!(
        entries[0].url,
        "/control/event/bigorg/conf/closer2event/settings"
    );
    assert!(!entries[0].active);

    // On the plugin's own pages the entry is active
    request.namespace = "plugins:closer2event".to_string();
    let entries = registry().nav_event_settings(&request);
    assert!(entries[0].active);
}

#[test]
fn test_sass_postamble_only_for_main_bundle() {
    let registry = registry();
    assert!(registry.sass_postamble("main.scss").contains("closer2event-map"));
    assert_eq!(registry.sass_postamble("widget.scss"), "");
}

#[test]
fn test_process_response_sets_header_when_absent() {
    let mut headers = HeaderMap::new();
    registry().process_response(&mut headers).unwrap();

    let csp = headers
        .get(header::CONTENT_SECURITY_POLICY)
        .unwrap()
        .to_str()
        .unwrap();
    assert_eq!(csp, "frame-src https://map.closer2event.com");
}

#[test]
fn test_process_response_merges_existing_header() {
    let mut headers = HeaderMap::new();
    headers.insert(
        header::CONTENT_SECURITY_POLICY,
        HeaderValue::from_static("default-src 'self'; frame-src 'self'"),
    );
    registry().process_response(&mut headers).unwrap();

    let csp = headers
        .get(header::CONTENT_SECURITY_POLICY)
        .unwrap()
        .to_str()
        .unwrap();
    assert_eq!(
        csp,
        "default-src 'self'; frame-src 'self' https://map.closer2event.com"
    );
}

#[test]
fn test_disabled_process_response_leaves_headers_untouched() {
    let mut config = plugin_config();
    config
        .hooks
        .insert(signals::PROCESS_RESPONSE.to_string(), false);
    let registry = HookRegistry::new(Arc::new(config));

    let mut headers = HeaderMap::new();
    registry.process_response(&mut headers).unwrap();
    assert!(headers.get(header::CONTENT_SECURITY_POLICY).is_none());
}

/// The middleware adapter applies the merge to responses end to end
#[tokio::test]
async fn test_csp_middleware_adds_frame_src() {
    let app = Router::new()
        .route("/", get(|| async { "ok" }))
        .layer(axum::middleware::from_fn(csp_middleware));

    let response = app
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();

    let csp = response
        .headers()
        .get(header::CONTENT_SECURITY_POLICY)
        .unwrap()
        .to_str()
        .unwrap();
    assert!(csp.contains("frame-src https://map.closer2event.com"));
}
