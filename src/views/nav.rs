use crate::models::ResourceKind;

/// Fixed sidebar destinations, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Destination {
    Dashboard,
    Users,
    Teams,
    Chats,
    Feedbacks,
}

impl Destination {
    pub const ALL: [Destination; 5] = [
        Destination::Dashboard,
        Destination::Users,
        Destination::Teams,
        Destination::Chats,
        Destination::Feedbacks,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            Destination::Dashboard => "Dashboard",
            Destination::Users => "Users",
            Destination::Teams => "Teams",
            Destination::Chats => "Chats",
            Destination::Feedbacks => "Feedbacks",
        }
    }

    pub fn href(&self) -> &'static str {
        match self {
            Destination::Dashboard => "/admin",
            Destination::Users => "/admin/users",
            Destination::Teams => "/admin/teams",
            Destination::Chats => "/admin/chats",
            Destination::Feedbacks => "/admin/feedbacks",
        }
    }

    /// Single-glyph icon used when the sidebar is collapsed.
    pub fn icon(&self) -> &'static str {
        match self {
            Destination::Dashboard => "⌂",
            Destination::Users => "☺",
            Destination::Teams => "♣",
            Destination::Chats => "✉",
            Destination::Feedbacks => "✎",
        }
    }

    /// Matches a location exactly; a trailing slash is ignored.
    pub fn from_path(path: &str) -> Option<Destination> {
        let trimmed = path.trim_end_matches('/');
        let path = if trimmed.is_empty() { "/" } else { trimmed };
        Destination::ALL.into_iter().find(|d| d.href() == path)
    }

    pub fn resource(&self) -> Option<ResourceKind> {
        match self {
            Destination::Dashboard => None,
            Destination::Users => Some(ResourceKind::Users),
            Destination::Teams => Some(ResourceKind::Teams),
            Destination::Chats => Some(ResourceKind::Chats),
            Destination::Feedbacks => Some(ResourceKind::Feedback),
        }
    }

    pub fn index(&self) -> usize {
        Destination::ALL.iter().position(|d| d == self).unwrap_or(0)
    }

    pub fn next(&self) -> Destination {
        Destination::ALL[(self.index() + 1) % Destination::ALL.len()]
    }

    pub fn previous(&self) -> Destination {
        let len = Destination::ALL.len();
        Destination::ALL[(self.index() + len - 1) % len]
    }
}

pub const EXPANDED_WIDTH: u16 = 22;
pub const COLLAPSED_WIDTH: u16 = 5;

/// Side panel state: current location, collapsed width, and the overlay
/// used on narrow terminals.
#[derive(Debug, Clone)]
pub struct NavigationShell {
    current: Destination,
    collapsed: bool,
    overlay_open: bool,
}

impl Default for NavigationShell {
    fn default() -> Self {
        Self::new(Destination::Dashboard)
    }
}

impl NavigationShell {
    pub fn new(start: Destination) -> Self {
        Self {
            current: start,
            collapsed: false,
            overlay_open: false,
        }
    }

    pub fn current(&self) -> Destination {
        self.current
    }

    pub fn is_active(&self, destination: Destination) -> bool {
        self.current == destination
    }

    /// Moves to `destination` and closes the overlay. Returns true when the
    /// location actually changed.
    pub fn navigate(&mut self, destination: Destination) -> bool {
        self.overlay_open = false;
        if self.current == destination {
            return false;
        }
        self.current = destination;
        true
    }

    pub fn is_collapsed(&self) -> bool {
        self.collapsed
    }

    pub fn toggle_collapse(&mut self) {
        self.collapsed = !self.collapsed;
    }

    pub fn is_overlay_open(&self) -> bool {
        self.overlay_open
    }

    pub fn toggle_overlay(&mut self) {
        self.overlay_open = !self.overlay_open;
    }

    pub fn dismiss_overlay(&mut self) {
        self.overlay_open = false;
    }

    /// Column width of the docked sidebar. The overlay always draws
    /// expanded.
    pub fn width(&self) -> u16 {
        if self.collapsed { COLLAPSED_WIDTH } else { EXPANDED_WIDTH }
    }
}
