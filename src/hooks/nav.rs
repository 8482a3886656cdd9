/// Route namespace of the plugin's control views
const NAV_NAMESPACE: &str = "plugins:closer2event";

/// One entry in the event settings navigation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavEntry {
    pub label: String,
    pub icon: &'static str,
    pub url: String,
    pub active: bool,
}

/// Resolved request state the host hands to navigation hooks
#[derive(Debug, Clone)]
pub struct RequestContext {
    pub organizer_slug: String,
    pub event_slug: String,
    /// Namespace of the resolved route
    pub namespace: String,
    /// Locale of the current user
    pub locale: String,
    /// Whether the host granted `can_change_event_settings`
    pub can_change_event_settings: bool,
}

/// Contributes the plugin's settings page to the event navigation
#[derive(Debug, Default)]
pub struct NavHook;

impl NavHook {
    pub fn new() -> Self {
        Self
    }

    /// Settings entries for the current request; empty without permission
    pub fn entries(&self, request: &RequestContext) -> Vec<NavEntry> {
        if !request.can_change_event_settings {
            return Vec::new();
        }

        vec![NavEntry {
            label: t!("nav.settings", locale = &request.locale).into_owned(),
            icon: "house",
            url: settings_url(&request.organizer_slug, &request.event_slug),
            active: request.namespace == NAV_NAMESPACE,
        }]
    }
}

/// Control-panel URL of the plugin's settings page
pub fn settings_url(organizer: &str, event: &str) -> String {
    format!("/control/event/{}/{}/closer2event/settings", organizer, event)
}
