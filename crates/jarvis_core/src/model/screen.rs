//! Top-level screen selector.

use serde::{Deserialize, Serialize};

/// One of the three top-level views.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Screen {
    #[default]
    Home,
    Chat,
    Notes,
}

impl Screen {
    /// Fixed bottom-navigation order.
    pub const ALL: [Screen; 3] = [Screen::Home, Screen::Chat, Screen::Notes];

    /// Maps a navigation path to a screen.
    ///
    /// The first `/` anywhere in `path` is dropped and the rest must name a
    /// screen exactly. Blank or unknown names select `Home`.
    pub fn from_path(path: &str) -> Self {
        let name = path.replacen('/', "", 1);
        match name.as_str() {
            "chat" => Self::Chat,
            "notes" => Self::Notes,
            _ => Self::Home,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::Chat => "chat",
            Self::Notes => "notes",
        }
    }

    pub fn path(self) -> &'static str {
        match self {
            Self::Home => "/home",
            Self::Chat => "/chat",
            Self::Notes => "/notes",
        }
    }
}
