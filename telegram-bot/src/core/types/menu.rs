//! Fixed reply menus and the callback tags their buttons carry.

/// Button press actions. The tag is the opaque callback payload sent back by the chat platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    Help,
    Stats,
    About,
    ShortenAnother,
}

impl MenuAction {
    pub fn tag(self) -> &'static str {
        match self {
            MenuAction::Help => "help",
            MenuAction::Stats => "stats",
            MenuAction::About => "about",
            MenuAction::ShortenAnother => "shorten_another",
        }
    }

    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "help" => Some(MenuAction::Help),
            "stats" => Some(MenuAction::Stats),
            "about" => Some(MenuAction::About),
            "shorten_another" => Some(MenuAction::ShortenAnother),
            _ => None,
        }
    }

    /// Button label.
    pub fn label(self) -> &'static str {
        match self {
            MenuAction::Help => "❓ Help",
            MenuAction::Stats => "📊 My stats",
            MenuAction::About => "ℹ️ About",
            MenuAction::ShortenAnother => "🔗 Shorten another",
        }
    }
}

/// Keyboard attached to a reply.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Menu {
    /// Shown on /start and /help.
    Main,
    /// Shown under a freshly shortened link.
    AfterShorten,
}

impl Menu {
    /// Buttons, one inner vec per keyboard row.
    pub fn rows(self) -> Vec<Vec<MenuAction>> {
        match self {
            Menu::Main => vec![
                vec![MenuAction::Help, MenuAction::Stats],
                vec![MenuAction::About],
            ],
            Menu::AfterShorten => vec![vec![MenuAction::ShortenAnother, MenuAction::Stats]],
        }
    }
}
