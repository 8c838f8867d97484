//! Layout and gesture tuning knobs with their production defaults.

/// Viewport thresholds and timing used by the responsive layer.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LayoutConfig {
    /// Widest viewport (inclusive) treated as mobile.
    pub mobile_max: u32,
    /// Widest viewport (inclusive) treated as tablet.
    pub tablet_max: u32,
    /// Resize debounce in milliseconds.
    pub resize_debounce_ms: u32,
    /// Visual/layout viewport height ratio under which the on-screen keyboard counts as open.
    pub keyboard_ratio: f64,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            mobile_max: 768,
            tablet_max: 1024,
            resize_debounce_ms: 150,
            keyboard_ratio: 0.75,
        }
    }
}

/// Thresholds for horizontal swipe recognition.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SwipeConfig {
    /// Minimum horizontal travel in pixels for a distance-based swipe.
    pub min_distance: f64,
    /// Minimum velocity in pixels per millisecond for a flick.
    pub min_velocity: f64,
    /// Minimum travel a flick must still cover.
    pub min_flick_distance: f64,
    /// Travel after which the gesture commits to an axis.
    pub axis_lock_distance: f64,
    /// Multiplier applied to drag offsets past the first or last column.
    pub edge_resistance: f64,
}

impl Default for SwipeConfig {
    fn default() -> Self {
        Self {
            min_distance: 50.0,
            min_velocity: 0.3,
            min_flick_distance: 10.0,
            axis_lock_distance: 10.0,
            edge_resistance: 0.3,
        }
    }
}

/// Application name shown in the desktop header and document title.
pub const APP_NAME: &str = "Kanban";

/// Page the client redirects to when the API rejects the session.
pub const LOGIN_PATH: &str = "/login";

const FALLBACK_API_BASE: &str = "http://localhost:3000/api";

/// Resolve the API base URL from the current page href (same origin, `/api` prefix).
#[must_use]
pub fn api_base_url_for(href: &str) -> String {
    let Some((scheme, rest)) = href.split_once("://") else {
        return FALLBACK_API_BASE.to_string();
    };
    if scheme.is_empty() {
        return FALLBACK_API_BASE.to_string();
    }
    let host = rest
        .split(['/', '?', '#'])
        .next()
        .unwrap_or_default();
    if host.is_empty() {
        return FALLBACK_API_BASE.to_string();
    }
    format!("{scheme}://{host}/api")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_url_keeps_origin_and_drops_path() {
        assert_eq!(
            api_base_url_for("https://boards.example.com/board?x=1"),
            "https://boards.example.com/api"
        );
        assert_eq!(
            api_base_url_for("http://localhost:8080"),
            "http://localhost:8080/api"
        );
        assert_eq!(
            api_base_url_for("http://127.0.0.1:8080#backlog"),
            "http://127.0.0.1:8080/api"
        );
    }

    #[test]
    fn base_url_falls_back_when_unparseable() {
        assert_eq!(api_base_url_for("about:blank"), FALLBACK_API_BASE);
        assert_eq!(api_base_url_for("file:///"), FALLBACK_API_BASE);
        assert_eq!(api_base_url_for(""), FALLBACK_API_BASE);
    }

    #[test]
    fn defaults_match_documented_thresholds() {
        let layout = LayoutConfig::default();
        assert_eq!((layout.mobile_max, layout.tablet_max), (768, 1024));
        let swipe = SwipeConfig::default();
        assert!((swipe.min_distance - 50.0).abs() < f64::EPSILON);
        assert!((swipe.edge_resistance - 0.3).abs() < f64::EPSILON);
    }
}
