//! Current-screen selector.
//!
//! # Responsibility
//! - Hold which top-level screen is shown.
//! - Offer navigation to consumers through an explicitly passed [`Navigator`].
//!
//! # Invariants
//! - Navigation never fails; unknown targets select `Home`.

use crate::model::screen::Screen;
use log::debug;

/// Navigation handle given to views that can switch screens.
pub trait Navigator {
    /// Normalizes `path` to a screen and selects it.
    fn navigate(&mut self, path: &str) -> Screen;
}

/// Three-way screen switch. Starts on `Home`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Router {
    current: Screen,
}

impl Router {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> Screen {
        self.current
    }

    /// Direct selection, as used by the bottom navigation bar.
    pub fn select(&mut self, screen: Screen) {
        if self.current != screen {
            debug!(
                "event=navigate module=router from={} to={}",
                self.current.as_str(),
                screen.as_str()
            );
        }
        self.current = screen;
    }
}

impl Navigator for Router {
    fn navigate(&mut self, path: &str) -> Screen {
        let screen = Screen::from_path(path);
        self.select(screen);
        screen
    }
}

#[cfg(test)]
mod tests {
    use super::{Navigator, Router};
    use crate::model::screen::Screen;

    #[test]
    fn starts_on_home() {
        assert_eq!(Router::new().current(), Screen::Home);
    }

    #[test]
    fn navigate_selects_normalized_screen() {
        let mut router = Router::new();
        assert_eq!(router.navigate("/chat"), Screen::Chat);
        assert_eq!(router.current(), Screen::Chat);
        assert_eq!(router.navigate("/notes"), Screen::Notes);
        assert_eq!(router.navigate(""), Screen::Home);
        router.select(Screen::Notes);
        assert_eq!(router.navigate("/unknown"), Screen::Home);
        assert_eq!(router.current(), Screen::Home);
    }
}
