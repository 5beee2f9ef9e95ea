//! Fixed bottom navigation bar.

use crate::model::screen::Screen;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavItem {
    pub screen: Screen,
    pub label: &'static str,
    /// Highlighted when it matches the current screen.
    pub active: bool,
}

pub fn nav_items(current: Screen) -> Vec<NavItem> {
    Screen::ALL
        .iter()
        .map(|&screen| NavItem {
            screen,
            label: nav_label(screen),
            active: screen == current,
        })
        .collect()
}

fn nav_label(screen: Screen) -> &'static str {
    match screen {
        Screen::Home => "Início",
        Screen::Chat => "Chat",
        Screen::Notes => "Notas",
    }
}
