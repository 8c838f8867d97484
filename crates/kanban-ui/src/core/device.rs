//! DOM-free device heuristics: touch capability, scroll shadows, on-screen keyboard.

use crate::core::breakpoints::Viewport;
use crate::core::config::LayoutConfig;

/// Body class present when the device reports touch input.
pub const TOUCH_CLASS: &str = "touch-device";
/// Body class present while the on-screen keyboard is believed to be open.
pub const KEYBOARD_CLASS: &str = "keyboard-open";
/// Header class present once the page has scrolled.
pub const SCROLLED_CLASS: &str = "scrolled";
/// Column container class present while more content is scrollable.
pub const SCROLL_SHADOW_CLASS: &str = "has-scroll-shadow";

/// Capability snapshot collected once at boot.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DeviceCaps {
    /// Whether the device supports touch input.
    pub touch: bool,
}

impl DeviceCaps {
    /// Touch is reported either by `ontouchstart` or a positive `maxTouchPoints`.
    #[must_use]
    pub const fn detect(has_touch_start: bool, max_touch_points: i32) -> Self {
        Self {
            touch: has_touch_start || max_touch_points > 0,
        }
    }
}

/// Whether the header should carry its scroll shadow.
#[must_use]
pub fn header_scrolled(scroll_y: f64) -> bool {
    scroll_y > 0.0
}

/// Whether a horizontally scrollable container still has content past its right edge.
#[must_use]
pub fn has_scroll_shadow(scroll_left: f64, client_width: f64, scroll_width: f64) -> bool {
    scroll_width > client_width && scroll_left + client_width < scroll_width - 1.0
}

/// Whether the visual viewport has shrunk enough to imply an on-screen keyboard.
#[must_use]
pub fn keyboard_open(
    caps: DeviceCaps,
    layout_height: f64,
    visual_height: f64,
    config: &LayoutConfig,
) -> bool {
    caps.touch && layout_height > 0.0 && visual_height < layout_height * config.keyboard_ratio
}

/// Full set of body classes for a viewport and device state.
#[must_use]
pub fn body_classes(viewport: Viewport, caps: DeviceCaps, keyboard: bool) -> Vec<&'static str> {
    let mut classes = vec![
        viewport.breakpoint.body_class(),
        viewport.orientation.body_class(),
    ];
    if caps.touch {
        classes.push(TOUCH_CLASS);
    }
    if keyboard {
        classes.push(KEYBOARD_CLASS);
    }
    classes
}

/// Every class [`body_classes`] can produce, for clearing stale state.
pub const MANAGED_BODY_CLASSES: [&str; 7] = [
    "is-mobile",
    "is-tablet",
    "is-desktop",
    "is-portrait",
    "is-landscape",
    TOUCH_CLASS,
    KEYBOARD_CLASS,
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn touch_detection_accepts_either_signal() {
        assert!(DeviceCaps::detect(true, 0).touch);
        assert!(DeviceCaps::detect(false, 5).touch);
        assert!(!DeviceCaps::detect(false, 0).touch);
    }

    #[test]
    fn scroll_shadow_tracks_remaining_overflow() {
        assert!(has_scroll_shadow(0.0, 300.0, 900.0));
        assert!(!has_scroll_shadow(600.0, 300.0, 900.0));
        assert!(!has_scroll_shadow(0.0, 300.0, 300.0));
        assert!(header_scrolled(4.0));
        assert!(!header_scrolled(0.0));
    }

    #[test]
    fn keyboard_requires_touch_and_shrunk_viewport() {
        let config = LayoutConfig::default();
        let touch = DeviceCaps { touch: true };
        assert!(keyboard_open(touch, 800.0, 400.0, &config));
        assert!(!keyboard_open(touch, 800.0, 700.0, &config));
        assert!(!keyboard_open(DeviceCaps::default(), 800.0, 400.0, &config));
        assert!(!keyboard_open(touch, 0.0, 0.0, &config));
    }

    #[test]
    fn body_classes_reflect_state() {
        let viewport = Viewport::measure(375, 667, &LayoutConfig::default());
        let classes = body_classes(viewport, DeviceCaps { touch: true }, true);
        assert_eq!(
            classes,
            vec!["is-mobile", "is-portrait", TOUCH_CLASS, KEYBOARD_CLASS]
        );
        assert!(classes.iter().all(|c| MANAGED_BODY_CLASSES.contains(c)));
    }
}
