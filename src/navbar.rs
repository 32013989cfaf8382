//! Navigation bar state.

use serde::Serialize;

/// Vertical scroll offset (in pixels) past which the bar is drawn compact.
pub const SCROLL_THRESHOLD: f64 = 10.0;

/// Organisation page linked from the bar.
pub const GITHUB_ORG_URL: &str = "https://github.com/ds-horizon";

/// One entry of the navigation bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NavLink {
    pub name: &'static str,
    pub href: &'static str,
}

impl NavLink {
    /// Whether the link points at a section of the home page rather than
    /// a separate route.
    #[must_use]
    pub fn is_anchor(&self) -> bool {
        self.href.starts_with("/#")
    }
}

pub const NAV_LINKS: [NavLink; 4] = [
    NavLink {
        name: "Home",
        href: "/",
    },
    NavLink {
        name: "Featured Projects",
        href: "/#featured-projects",
    },
    NavLink {
        name: "Upcoming Projects",
        href: "/#upcoming-projects",
    },
    NavLink {
        name: "Community",
        href: "/#community",
    },
];

/// Ephemeral UI state of the bar.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NavbarState {
    scrolled: bool,
    menu_open: bool,
}

impl NavbarState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Update from the current scroll offset.
    pub fn on_scroll(&mut self, offset: f64) {
        self.scrolled = offset > SCROLL_THRESHOLD;
    }

    /// Open or close the mobile menu.
    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
    }

    /// Navigate via `link`; the mobile menu always closes.
    pub fn follow_link(&mut self, link: &NavLink) -> &'static str {
        self.menu_open = false;
        link.href
    }

    #[must_use]
    pub fn is_scrolled(&self) -> bool {
        self.scrolled
    }

    #[must_use]
    pub fn is_menu_open(&self) -> bool {
        self.menu_open
    }
}
