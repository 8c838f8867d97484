//! Responsive breakpoint classification for the Web UI.
//!
//! # Design
//! - Three named buckets drive every layout decision; widths come from [`LayoutConfig`].
//! - Orientation is derived from the layout viewport, never from device APIs.

use crate::core::config::LayoutConfig;

/// Named viewport-width bucket.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Breakpoint {
    /// Width up to and including the mobile maximum (768px by default).
    Mobile,
    /// Width between the mobile and tablet maxima.
    Tablet,
    /// Anything wider than the tablet maximum.
    Desktop,
}

impl Breakpoint {
    /// Every breakpoint, narrowest first.
    pub const ALL: [Self; 3] = [Self::Mobile, Self::Tablet, Self::Desktop];

    /// Classify a viewport width using the default layout thresholds.
    #[must_use]
    pub fn for_width(width: u32) -> Self {
        Self::classify(width, &LayoutConfig::default())
    }

    /// Classify a viewport width against explicit thresholds.
    #[must_use]
    pub const fn classify(width: u32, config: &LayoutConfig) -> Self {
        if width <= config.mobile_max {
            Self::Mobile
        } else if width <= config.tablet_max {
            Self::Tablet
        } else {
            Self::Desktop
        }
    }

    /// Stable lowercase name used in events and logs.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Mobile => "mobile",
            Self::Tablet => "tablet",
            Self::Desktop => "desktop",
        }
    }

    /// Body class applied while this breakpoint is active.
    #[must_use]
    pub const fn body_class(self) -> &'static str {
        match self {
            Self::Mobile => "is-mobile",
            Self::Tablet => "is-tablet",
            Self::Desktop => "is-desktop",
        }
    }

    /// CSS media query matching this bucket for the given thresholds.
    #[must_use]
    pub fn media_query(self, config: &LayoutConfig) -> String {
        match self {
            Self::Mobile => format!("(max-width: {}px)", config.mobile_max),
            Self::Tablet => format!(
                "(min-width: {}px) and (max-width: {}px)",
                config.mobile_max + 1,
                config.tablet_max
            ),
            Self::Desktop => format!("(min-width: {}px)", config.tablet_max + 1),
        }
    }

    /// Whether this is the mobile bucket.
    #[must_use]
    pub const fn is_mobile(self) -> bool {
        matches!(self, Self::Mobile)
    }

    /// Whether this is the tablet bucket.
    #[must_use]
    pub const fn is_tablet(self) -> bool {
        matches!(self, Self::Tablet)
    }

    /// Whether this is the desktop bucket.
    #[must_use]
    pub const fn is_desktop(self) -> bool {
        matches!(self, Self::Desktop)
    }

    /// Mobile or tablet: layouts that use the drawer and hamburger.
    #[must_use]
    pub const fn is_narrow(self) -> bool {
        !self.is_desktop()
    }

    /// Parse the name produced by [`Breakpoint::as_str`].
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|bp| bp.as_str() == name)
    }
}

/// Viewport orientation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Orientation {
    /// Height is at least the width.
    Portrait,
    /// Width exceeds the height.
    Landscape,
}

impl Orientation {
    /// Derive orientation from a layout viewport size.
    #[must_use]
    pub const fn for_size(width: u32, height: u32) -> Self {
        if height >= width {
            Self::Portrait
        } else {
            Self::Landscape
        }
    }

    /// Body class applied while this orientation is active.
    #[must_use]
    pub const fn body_class(self) -> &'static str {
        match self {
            Self::Portrait => "is-portrait",
            Self::Landscape => "is-landscape",
        }
    }
}

/// Snapshot of the layout viewport classification.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Viewport {
    /// Layout viewport width in CSS pixels.
    pub width: u32,
    /// Layout viewport height in CSS pixels.
    pub height: u32,
    /// Width bucket.
    pub breakpoint: Breakpoint,
    /// Derived orientation.
    pub orientation: Orientation,
}

impl Viewport {
    /// Classify a viewport size.
    #[must_use]
    pub const fn measure(width: u32, height: u32, config: &LayoutConfig) -> Self {
        Self {
            width,
            height,
            breakpoint: Breakpoint::classify(width, config),
            orientation: Orientation::for_size(width, height),
        }
    }
}

/// Round a raw CSS pixel reading to whole pixels; `None` for non-finite or non-positive input.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn css_pixels(raw: f64) -> Option<u32> {
    if !raw.is_finite() || raw <= 0.0 {
        return None;
    }
    // Rounded value lies in 0..=u32::MAX, so the cast is exact.
    Some(raw.round().min(f64::from(u32::MAX)) as u32)
}

impl Default for Viewport {
    fn default() -> Self {
        Self::measure(1280, 800, &LayoutConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn css_pixels_rounds_and_rejects_garbage() {
        assert_eq!(css_pixels(767.6), Some(768));
        assert_eq!(css_pixels(0.4), Some(0));
        assert_eq!(css_pixels(1e12), Some(u32::MAX));
        assert_eq!(css_pixels(0.0), None);
        assert_eq!(css_pixels(-20.0), None);
        assert_eq!(css_pixels(f64::NAN), None);
        assert_eq!(css_pixels(f64::INFINITY), None);
    }

    #[test]
    fn widths_map_to_expected_buckets() {
        assert_eq!(Breakpoint::for_width(0), Breakpoint::Mobile);
        assert_eq!(Breakpoint::for_width(768), Breakpoint::Mobile);
        assert_eq!(Breakpoint::for_width(769), Breakpoint::Tablet);
        assert_eq!(Breakpoint::for_width(1024), Breakpoint::Tablet);
        assert_eq!(Breakpoint::for_width(1025), Breakpoint::Desktop);
        assert_eq!(Breakpoint::for_width(2560), Breakpoint::Desktop);
    }

    #[test]
    fn media_queries_cover_adjacent_ranges() {
        let config = LayoutConfig::default();
        assert_eq!(
            Breakpoint::Mobile.media_query(&config),
            "(max-width: 768px)"
        );
        assert_eq!(
            Breakpoint::Tablet.media_query(&config),
            "(min-width: 769px) and (max-width: 1024px)"
        );
        assert_eq!(
            Breakpoint::Desktop.media_query(&config),
            "(min-width: 1025px)"
        );
    }

    #[test]
    fn narrow_covers_mobile_and_tablet() {
        assert!(Breakpoint::Mobile.is_narrow());
        assert!(Breakpoint::Tablet.is_narrow());
        assert!(!Breakpoint::Desktop.is_narrow());
    }

    #[test]
    fn names_round_trip() {
        for bp in Breakpoint::ALL {
            assert_eq!(Breakpoint::from_name(bp.as_str()), Some(bp));
        }
        assert_eq!(Breakpoint::from_name("watch"), None);
    }

    #[test]
    fn square_viewport_counts_as_portrait() {
        assert_eq!(Orientation::for_size(800, 800), Orientation::Portrait);
        assert_eq!(Orientation::for_size(1024, 768), Orientation::Landscape);
        let vp = Viewport::measure(1024, 768, &LayoutConfig::default());
        assert_eq!(vp.breakpoint, Breakpoint::Tablet);
        assert_eq!(vp.orientation, Orientation::Landscape);
    }
}
