//! App shell: router, per-screen state and the bottom navigation bar.
//!
//! # Responsibility
//! - Own all session state for one app instance.
//! - Produce one [`ShellFrame`] per render.
//!
//! # Invariants
//! - Chat and notes state live as long as the shell, across navigation.
//! - Only the router decides which page a frame carries.

use crate::chat::composer::ChatComposer;
use crate::chat::replies::{CannedReplies, ReplySource};
use crate::chat::session::{ChatSession, ChatSessionOptions, SendError};
use crate::clock::{Clock, SystemClock};
use crate::config::AppConfig;
use crate::model::message::MessageId;
use crate::model::note::NoteId;
use crate::model::screen::Screen;
use crate::notes::composer::NoteComposer;
use crate::notes::store::{NoteError, NoteStore};
use crate::router::{Navigator, Router};
use crate::view::chat::{ChatView, MessageItem, CHAT_PLACEHOLDER, CHAT_TITLE};
use crate::view::home::HomeView;
use crate::view::labels::{date_time_label, time_label};
use crate::view::nav::{nav_items, NavItem};
use crate::view::notes::{ComposerView, NoteItem, NotesView, EMPTY_NOTES_HINT, NOTES_TITLE};
use log::info;
use serde::Serialize;

/// Page content of one frame.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "screen", rename_all = "snake_case")]
pub enum Page {
    Home(HomeView),
    Chat(ChatView),
    Notes(NotesView),
}

impl Page {
    pub fn screen(&self) -> Screen {
        match self {
            Self::Home(_) => Screen::Home,
            Self::Chat(_) => Screen::Chat,
            Self::Notes(_) => Screen::Notes,
        }
    }
}

/// One render: navigation bar plus the current page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShellFrame {
    pub nav: Vec<NavItem>,
    pub page: Page,
}

/// Whole-app state for one session.
pub struct Shell<C: Clock, R: ReplySource = CannedReplies> {
    config: AppConfig,
    router: Router,
    chat: ChatSession<C, R>,
    chat_composer: ChatComposer,
    notes: NoteStore<C>,
    note_composer: NoteComposer,
}

impl Shell<SystemClock, CannedReplies> {
    /// Wall clock and entropy-seeded replies.
    pub fn with_system_clock(config: AppConfig) -> Self {
        Self::new(config, SystemClock, CannedReplies::new())
    }
}

impl<C: Clock + Clone, R: ReplySource> Shell<C, R> {
    pub fn new(config: AppConfig, clock: C, replies: R) -> Self {
        let chat = ChatSession::new(
            clock.clone(),
            replies,
            ChatSessionOptions {
                reply_delay_ms: config.reply_delay_ms,
                seeded: config.seeded,
            },
        );
        let notes = if config.seeded {
            NoteStore::seeded(clock)
        } else {
            NoteStore::new(clock)
        };
        info!(
            "event=shell_init module=shell status=ok app_id={} seeded={} reply_delay_ms={}",
            config.app_id, config.seeded, config.reply_delay_ms
        );
        Self {
            config,
            router: Router::new(),
            chat,
            chat_composer: ChatComposer::new(),
            notes,
            note_composer: NoteComposer::new(),
        }
    }
}

impl<C: Clock, R: ReplySource> Shell<C, R> {
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    pub fn current_screen(&self) -> Screen {
        self.router.current()
    }

    /// Path-based navigation; unknown paths land on `Home`.
    pub fn navigate(&mut self, path: &str) -> Screen {
        self.router.navigate(path)
    }

    /// Bottom navigation bar tap.
    pub fn select(&mut self, screen: Screen) {
        self.router.select(screen);
    }

    pub fn nav_items(&self) -> Vec<NavItem> {
        nav_items(self.router.current())
    }

    pub fn home_view(&self) -> HomeView {
        HomeView::new(&self.config.user_name, &self.config.app_name)
    }

    /// Taps the home tile at `index`, navigating through the router.
    pub fn activate_quick_action(&mut self, index: usize) -> Option<Screen> {
        let home = self.home_view();
        home.activate(index, &mut self.router)
    }

    /// Resolves a due chat reply. Front-ends call this from their timer.
    pub fn tick(&mut self) -> Option<MessageId> {
        self.chat.poll().map(|reply| reply.id)
    }

    pub fn chat(&self) -> &ChatSession<C, R> {
        &self.chat
    }

    pub fn chat_composer(&self) -> &ChatComposer {
        &self.chat_composer
    }

    pub fn set_chat_draft(&mut self, text: impl Into<String>) {
        self.chat_composer.set_draft(text);
    }

    /// Sends the chat draft.
    pub fn submit_chat(&mut self) -> Result<MessageId, SendError> {
        self.chat_composer.submit(&mut self.chat)
    }

    /// Sends `text` directly, bypassing the draft.
    pub fn send_message(&mut self, text: impl Into<String>) -> Result<MessageId, SendError> {
        self.chat.send_message(text).map(|message| message.id)
    }

    pub fn notes(&self) -> &NoteStore<C> {
        &self.notes
    }

    pub fn note_composer(&self) -> &NoteComposer {
        &self.note_composer
    }

    pub fn note_composer_mut(&mut self) -> &mut NoteComposer {
        &mut self.note_composer
    }

    /// Saves the open note form.
    pub fn save_note(&mut self) -> Result<NoteId, NoteError> {
        self.note_composer.save(&mut self.notes)
    }

    pub fn create_note(
        &mut self,
        title: impl Into<String>,
        content: impl Into<String>,
    ) -> Result<NoteId, NoteError> {
        self.notes.create_note(title, content).map(|note| note.id)
    }

    pub fn delete_note(&mut self, id: NoteId) -> bool {
        self.notes.delete_note(id)
    }

    pub fn render(&self) -> ShellFrame {
        let page = match self.router.current() {
            Screen::Home => Page::Home(self.home_view()),
            Screen::Chat => Page::Chat(self.chat_view()),
            Screen::Notes => Page::Notes(self.notes_view()),
        };
        ShellFrame {
            nav: self.nav_items(),
            page,
        }
    }

    pub fn chat_view(&self) -> ChatView {
        ChatView {
            title: CHAT_TITLE,
            messages: self
                .chat
                .messages()
                .iter()
                .map(|message| MessageItem {
                    id: message.id,
                    role: message.role,
                    content: message.content.clone(),
                    time_label: time_label(message.timestamp),
                })
                .collect(),
            is_waiting: self.chat.is_waiting(),
            draft: self.chat_composer.draft().to_string(),
            placeholder: CHAT_PLACEHOLDER,
            can_send: self.chat_composer.can_send(&self.chat),
        }
    }

    pub fn notes_view(&self) -> NotesView {
        let notes: Vec<NoteItem> = self
            .notes
            .notes()
            .iter()
            .map(|note| NoteItem {
                id: note.id,
                title: note.title.clone(),
                content: note.content.clone(),
                created_label: date_time_label(note.created_at),
            })
            .collect();
        NotesView {
            title: NOTES_TITLE,
            empty_hint: notes.is_empty().then_some(EMPTY_NOTES_HINT),
            notes,
            composer: ComposerView {
                is_open: self.note_composer.is_open(),
                title: self.note_composer.title().to_string(),
                content: self.note_composer.content().to_string(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Page, Shell};
    use crate::chat::replies::CannedReplies;
    use crate::clock::ManualClock;
    use crate::config::AppConfig;
    use crate::model::screen::Screen;

    fn shell() -> Shell<ManualClock> {
        Shell::new(
            AppConfig::default(),
            ManualClock::new(1_700_000_000_000),
            CannedReplies::seeded(5),
        )
    }

    #[test]
    fn first_frame_is_home_with_home_tab_active() {
        let frame = shell().render();
        assert_eq!(frame.page.screen(), Screen::Home);
        let active: Vec<Screen> = frame
            .nav
            .iter()
            .filter(|item| item.active)
            .map(|item| item.screen)
            .collect();
        assert_eq!(active, vec![Screen::Home]);
    }

    #[test]
    fn quick_action_switches_page() {
        let mut shell = shell();
        assert_eq!(shell.activate_quick_action(1), Some(Screen::Notes));
        match shell.render().page {
            Page::Notes(view) => {
                assert_eq!(view.notes.len(), 1);
                assert!(view.empty_hint.is_none());
            }
            other => panic!("expected notes page, got {other:?}"),
        }
    }

    #[test]
    fn frame_serializes_with_screen_tag() {
        let mut shell = shell();
        shell.select(Screen::Chat);
        let json = serde_json::to_value(shell.render()).unwrap();
        assert_eq!(json["page"]["screen"], "chat");
        assert_eq!(json["nav"][1]["active"], true);
    }
}
