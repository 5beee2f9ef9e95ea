//! Home dashboard.
//!
//! Quick actions reach other screens only through the [`Navigator`] the
//! caller passes in.

use crate::model::screen::Screen;
use crate::router::Navigator;
use serde::Serialize;

/// One dashboard tile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuickAction {
    pub icon: &'static str,
    pub title: &'static str,
    pub subtitle: &'static str,
    /// Navigation path; `None` for tiles without a screen yet.
    pub target: Option<&'static str>,
}

const QUICK_ACTIONS: [QuickAction; 4] = [
    QuickAction {
        icon: "💬",
        title: "Chat",
        subtitle: "Converse com Jarvis",
        target: Some("/chat"),
    },
    QuickAction {
        icon: "📝",
        title: "Notas",
        subtitle: "Suas anotações",
        target: Some("/notes"),
    },
    QuickAction {
        icon: "📅",
        title: "Calendário",
        subtitle: "Seus eventos",
        target: None,
    },
    QuickAction {
        icon: "💰",
        title: "Finanças",
        subtitle: "Transações",
        target: None,
    },
];

const INSIGHTS: [&str; 2] = [
    "Você tem 3 tarefas pendentes para hoje",
    "Próximo compromisso: Reunião às 14h",
];

/// Home screen view model.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HomeView {
    pub greeting: String,
    pub subtitle: String,
    pub quick_actions: Vec<QuickAction>,
    pub insights: Vec<&'static str>,
}

impl HomeView {
    pub fn new(user_name: &str, app_name: &str) -> Self {
        Self {
            greeting: format!("Bem-vindo, {user_name}"),
            subtitle: format!("{app_name} está ao seu dispor."),
            quick_actions: QUICK_ACTIONS.to_vec(),
            insights: INSIGHTS.to_vec(),
        }
    }

    /// Triggers the tile at `index`.
    ///
    /// Returns the selected screen, or `None` for unknown indexes and tiles
    /// without a target.
    pub fn activate(&self, index: usize, navigator: &mut dyn Navigator) -> Option<Screen> {
        let target = self.quick_actions.get(index)?.target?;
        Some(navigator.navigate(target))
    }
}
