use std::fmt::{Display, Formatter};

use crate::viewport::{Viewport, ViewportSubscription};

static STACKED_LAYOUT_MAX_WIDTH: u32 = 500;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccountTab {
    Profile,
    Bookings,
    Places,
}

impl AccountTab {
    pub const ALL: [AccountTab; 3] = [AccountTab::Profile, AccountTab::Bookings, AccountTab::Places];

    /// Reads the tab from the second path segment. A missing segment is the
    /// profile page; an unknown or empty one highlights nothing.
    pub fn active(path: &str) -> Option<Self> {
        match path.split('/').nth(2) {
            None => Some(AccountTab::Profile),
            Some("profile") => Some(AccountTab::Profile),
            Some("bookings") => Some(AccountTab::Bookings),
            Some("places") => Some(AccountTab::Places),
            Some(_) => None,
        }
    }

    pub fn link(&self) -> &'static str {
        match self {
            AccountTab::Profile => "/account",
            AccountTab::Bookings => "/account/bookings",
            AccountTab::Places => "/account/places",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            AccountTab::Profile => "My profile",
            AccountTab::Bookings => "My bookings",
            AccountTab::Places => "My accommodations",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavLayout {
    Row,
    Stacked,
}

impl NavLayout {
    pub fn for_width(width: u32) -> Self {
        if width <= STACKED_LAYOUT_MAX_WIDTH {
            NavLayout::Stacked
        } else {
            NavLayout::Row
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavLink {
    pub tab: AccountTab,
    pub active: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccountNavView {
    pub layout: NavLayout,
    pub links: Vec<NavLink>,
}

impl Display for AccountNavView {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let separator = match self.layout {
            NavLayout::Row => "  ",
            NavLayout::Stacked => "\n",
        };
        let rendered = self
            .links
            .iter()
            .map(|link| {
                let marker = if link.active { "*" } else { " " };
                format!("[{marker}{}] {}", link.tab.label(), link.tab.link())
            })
            .collect::<Vec<_>>();
        write!(f, "{}", rendered.join(separator))
    }
}

/// Account navigation while it is on screen. Holds a viewport subscription
/// for as long as it lives.
pub struct AccountNav {
    viewport: ViewportSubscription,
}

impl AccountNav {
    pub fn mount(viewport: &Viewport) -> Self {
        Self {
            viewport: viewport.subscribe(),
        }
    }

    pub fn render(&self, path: &str) -> AccountNavView {
        let active = AccountTab::active(path);
        AccountNavView {
            layout: NavLayout::for_width(self.viewport.width()),
            links: AccountTab::ALL
                .into_iter()
                .map(|tab| NavLink {
                    tab,
                    active: active == Some(tab),
                })
                .collect(),
        }
    }
}
