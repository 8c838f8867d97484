//! Device presets the smoke run emulates.

use clap::ValueEnum;
use std::fmt;

/// Named device preset selectable from the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, ValueEnum)]
pub(crate) enum ViewportPreset {
    /// Small phone in portrait.
    Mobile,
    /// Tablet in portrait, right on the mobile/tablet boundary.
    Tablet,
    /// Tablet in landscape, inside the tablet bucket with docked sidebars.
    TabletLandscape,
    /// Laptop-sized desktop window.
    Desktop,
}

/// Emulated screen metrics for a preset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct DeviceMetrics {
    pub(crate) width: u32,
    pub(crate) height: u32,
    pub(crate) touch: bool,
}

impl ViewportPreset {
    pub(crate) const ALL: [Self; 4] = [
        Self::Mobile,
        Self::Tablet,
        Self::TabletLandscape,
        Self::Desktop,
    ];

    pub(crate) const fn metrics(self) -> DeviceMetrics {
        match self {
            Self::Mobile => DeviceMetrics {
                width: 375,
                height: 667,
                touch: true,
            },
            Self::Tablet => DeviceMetrics {
                width: 768,
                height: 1024,
                touch: true,
            },
            Self::TabletLandscape => DeviceMetrics {
                width: 1024,
                height: 768,
                touch: true,
            },
            Self::Desktop => DeviceMetrics {
                width: 1440,
                height: 900,
                touch: false,
            },
        }
    }

    pub(crate) const fn as_str(self) -> &'static str {
        match self {
            Self::Mobile => "mobile",
            Self::Tablet => "tablet",
            Self::TabletLandscape => "tablet-landscape",
            Self::Desktop => "desktop",
        }
    }

    /// Breakpoint class the app should put on `<body>` at this size.
    ///
    /// 768px is still `mobile` (the bucket is inclusive), so the tablet preset
    /// expects `is-mobile`.
    pub(crate) const fn expected_body_class(self) -> &'static str {
        let width = self.metrics().width;
        if width <= MOBILE_MAX {
            "is-mobile"
        } else if width <= TABLET_MAX {
            "is-tablet"
        } else {
            "is-desktop"
        }
    }

    /// Whether the hamburger and drawer should be reachable.
    pub(crate) const fn is_narrow(self) -> bool {
        self.metrics().width <= TABLET_MAX
    }

    /// Whether sidebars should sit in the layout instead of overlaying it.
    pub(crate) const fn docks_sidebars(self) -> bool {
        let DeviceMetrics { width, height, .. } = self.metrics();
        width > TABLET_MAX || (width > MOBILE_MAX && width > height)
    }

    /// Whether the swipeable column pager should be active.
    pub(crate) const fn is_paged(self) -> bool {
        self.metrics().width <= MOBILE_MAX
    }
}

impl fmt::Display for ViewportPreset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

const MOBILE_MAX: u32 = 768;
const TABLET_MAX: u32 = 1024;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn presets_have_expected_sizes() {
        assert_eq!(
            ViewportPreset::Mobile.metrics(),
            DeviceMetrics {
                width: 375,
                height: 667,
                touch: true
            }
        );
        assert_eq!(ViewportPreset::Tablet.metrics().width, 768);
        assert!(ViewportPreset::Tablet.metrics().touch);
        assert!(!ViewportPreset::Desktop.metrics().touch);
    }

    #[test]
    fn expectations_follow_breakpoint_buckets() {
        assert_eq!(ViewportPreset::Mobile.expected_body_class(), "is-mobile");
        assert_eq!(ViewportPreset::Tablet.expected_body_class(), "is-mobile");
        assert_eq!(ViewportPreset::Desktop.expected_body_class(), "is-desktop");
        assert!(ViewportPreset::Tablet.is_narrow());
        assert!(!ViewportPreset::Desktop.is_narrow());
        assert!(ViewportPreset::Mobile.is_paged());
    }

    #[test]
    fn landscape_tablet_covers_the_tablet_bucket() {
        let preset = ViewportPreset::TabletLandscape;
        assert_eq!(
            preset.metrics(),
            DeviceMetrics {
                width: 1024,
                height: 768,
                touch: true
            }
        );
        assert_eq!(preset.expected_body_class(), "is-tablet");
        assert!(preset.is_narrow());
        assert!(!preset.is_paged());
        assert!(preset.docks_sidebars());
        assert!(!ViewportPreset::Tablet.docks_sidebars());
        assert!(!ViewportPreset::Mobile.docks_sidebars());
        assert!(ViewportPreset::Desktop.docks_sidebars());
    }

    #[test]
    fn display_uses_cli_names() {
        let names: Vec<String> = ViewportPreset::ALL.iter().map(ToString::to_string).collect();
        assert_eq!(
            names,
            vec!["mobile", "tablet", "tablet-landscape", "desktop"]
        );
    }
}
