//! FFI use-case API for the mobile front-end.
//!
//! # Responsibility
//! - Expose one process-wide shell session to Dart via FRB.
//! - Flatten core results into simple envelopes.
//!
//! # Invariants
//! - Exported functions must not panic across FFI boundary.
//! - A poisoned session lock is recovered, not propagated.

use jarvis_core::view::chat::ChatView;
use jarvis_core::view::home::HomeView;
use jarvis_core::view::nav::NavItem;
use jarvis_core::view::notes::NotesView;
use jarvis_core::{
    core_version as core_version_inner, init_logging as init_logging_inner, ping as ping_inner,
    AppConfig, Message, Note, Page, Screen, Shell, ShellFrame, SystemClock,
};
use log::warn;
use std::sync::{Mutex, MutexGuard, OnceLock};

static SESSION: OnceLock<Mutex<Shell<SystemClock>>> = OnceLock::new();

/// Minimal health-check API for FRB smoke integration.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Never throws; always returns a UTF-8 string.
#[flutter_rust_bridge::frb(sync)]
pub fn ping() -> String {
    ping_inner().to_owned()
}

/// Expose core crate version through FFI.
#[flutter_rust_bridge::frb(sync)]
pub fn core_version() -> String {
    core_version_inner().to_owned()
}

/// Initializes Rust core logging once per process.
///
/// Input semantics:
/// - `level`: one of `trace|debug|info|warn|error` (case-insensitive).
/// - `log_dir`: absolute directory path where rolling logs are written.
///
/// # FFI contract
/// - Safe to call repeatedly with the same `level + log_dir`.
/// - Returns empty string on success and error message on failure.
#[flutter_rust_bridge::frb(sync)]
pub fn init_logging(level: String, log_dir: String) -> String {
    match init_logging_inner(level.as_str(), log_dir.as_str()) {
        Ok(()) => String::new(),
        Err(err) => err,
    }
}

/// Chat message as seen by Dart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageItem {
    pub id: i64,
    /// `user|assistant`.
    pub role: String,
    pub content: String,
    pub timestamp_ms: i64,
}

/// Note as seen by Dart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoteItem {
    pub id: i64,
    pub title: String,
    pub content: String,
    pub created_at_ms: i64,
}

/// Outcome of a mutating call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionResponse {
    pub ok: bool,
    /// Id of the created or affected record.
    pub id: Option<i64>,
    /// Human-readable message for diagnostics/UI.
    pub message: String,
}

impl ActionResponse {
    fn success(message: impl Into<String>, id: i64) -> Self {
        Self {
            ok: true,
            id: Some(id),
            message: message.into(),
        }
    }

    fn noop(message: impl Into<String>) -> Self {
        Self {
            ok: true,
            id: None,
            message: message.into(),
        }
    }

    fn failure(message: impl Into<String>) -> Self {
        Self {
            ok: false,
            id: None,
            message: message.into(),
        }
    }
}

/// Selects the screen for `path`; returns `home|chat|notes`.
///
/// Unknown or empty paths select `home`.
#[flutter_rust_bridge::frb(sync)]
pub fn navigate(path: String) -> String {
    session().navigate(path.as_str()).as_str().to_string()
}

#[flutter_rust_bridge::frb(sync)]
pub fn current_screen() -> String {
    session().current_screen().as_str().to_string()
}

/// Sends one chat message.
///
/// # FFI contract
/// - Blank text and sends while a reply is pending return `ok=false`
///   without touching the transcript.
#[flutter_rust_bridge::frb(sync)]
pub fn chat_send(text: String) -> ActionResponse {
    match session().send_message(text) {
        Ok(id) => ActionResponse::success("Message sent.", id),
        Err(err) => ActionResponse::failure(format!("chat_send rejected: {err}")),
    }
}

/// Resolves the pending reply if due; Dart calls this from a periodic timer.
#[flutter_rust_bridge::frb(sync)]
pub fn chat_poll() -> Option<MessageItem> {
    let mut shell = session();
    let id = shell.tick()?;
    shell.chat().get(id).map(to_message_item)
}

/// Transcript, oldest first.
#[flutter_rust_bridge::frb(sync)]
pub fn chat_messages() -> Vec<MessageItem> {
    session()
        .chat()
        .messages()
        .iter()
        .map(to_message_item)
        .collect()
}

#[flutter_rust_bridge::frb(sync)]
pub fn chat_is_waiting() -> bool {
    session().chat().is_waiting()
}

/// Creates a note at the top of the list.
#[flutter_rust_bridge::frb(sync)]
pub fn notes_create(title: String, content: String) -> ActionResponse {
    match session().create_note(title, content) {
        Ok(id) => ActionResponse::success("Note created.", id),
        Err(err) => ActionResponse::failure(format!("notes_create rejected: {err}")),
    }
}

/// Deletes a note.
///
/// Unknown ids are a no-op: `ok=true` with no `id`.
#[flutter_rust_bridge::frb(sync)]
pub fn notes_delete(id: i64) -> ActionResponse {
    if session().delete_note(id) {
        ActionResponse::success("Note deleted.", id)
    } else {
        ActionResponse::noop("Nothing to delete.")
    }
}

/// Notes, newest first.
#[flutter_rust_bridge::frb(sync)]
pub fn notes_list() -> Vec<NoteItem> {
    session()
        .notes()
        .notes()
        .iter()
        .map(to_note_item)
        .collect()
}

/// Bottom navigation tab.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavTab {
    /// `home|chat|notes`.
    pub screen: String,
    pub label: String,
    pub active: bool,
}

/// Home dashboard tile.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuickActionTile {
    pub icon: String,
    pub title: String,
    pub subtitle: String,
    /// `None` for tiles that do not navigate yet.
    pub target: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HomePage {
    pub greeting: String,
    pub subtitle: String,
    pub quick_actions: Vec<QuickActionTile>,
    pub insights: Vec<String>,
}

/// Chat bubble with its `HH:MM` label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatBubble {
    pub id: i64,
    pub role: String,
    pub content: String,
    pub time_label: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatPage {
    pub title: String,
    pub messages: Vec<ChatBubble>,
    pub is_waiting: bool,
    pub draft: String,
    pub placeholder: String,
    pub can_send: bool,
}

/// Note card with its `dd/mm/yyyy HH:MM` label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoteCard {
    pub id: i64,
    pub title: String,
    pub content: String,
    pub created_label: String,
}

/// "New note" form state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoteForm {
    pub is_open: bool,
    pub title: String,
    pub content: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotesPage {
    pub title: String,
    pub notes: Vec<NoteCard>,
    pub empty_hint: Option<String>,
    pub form: NoteForm,
}

/// Page body of one frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FramePage {
    Home(HomePage),
    Chat(ChatPage),
    Notes(NotesPage),
}

/// Everything the front-end draws for the current screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    /// `home|chat|notes`.
    pub screen: String,
    pub nav: Vec<NavTab>,
    pub page: FramePage,
}

/// Renders the current screen plus navigation bar.
#[flutter_rust_bridge::frb(sync)]
pub fn render_frame() -> Frame {
    to_frame(session().render())
}

/// Bottom navigation tap by screen name (`home|chat|notes`, a leading `/`
/// is accepted). Unknown names select `home`. Returns the selected name.
#[flutter_rust_bridge::frb(sync)]
pub fn select_screen(name: String) -> String {
    let screen = Screen::from_path(name.as_str());
    session().select(screen);
    screen.as_str().to_string()
}

#[flutter_rust_bridge::frb(sync)]
pub fn home_page() -> HomePage {
    to_home_page(session().home_view())
}

/// Taps the home tile at `index`.
///
/// Returns the selected screen name, or `None` when the tile has no target.
#[flutter_rust_bridge::frb(sync)]
pub fn home_activate(index: u32) -> Option<String> {
    session()
        .activate_quick_action(index as usize)
        .map(|screen| screen.as_str().to_string())
}

#[flutter_rust_bridge::frb(sync)]
pub fn chat_page() -> ChatPage {
    to_chat_page(session().chat_view())
}

/// Replaces the chat input draft.
#[flutter_rust_bridge::frb(sync)]
pub fn chat_set_draft(text: String) {
    session().set_chat_draft(text);
}

/// Sends the chat draft; the draft is cleared only when accepted.
#[flutter_rust_bridge::frb(sync)]
pub fn chat_submit() -> ActionResponse {
    match session().submit_chat() {
        Ok(id) => ActionResponse::success("Message sent.", id),
        Err(err) => ActionResponse::failure(format!("chat_submit rejected: {err}")),
    }
}

#[flutter_rust_bridge::frb(sync)]
pub fn notes_page() -> NotesPage {
    to_notes_page(session().notes_view())
}

#[flutter_rust_bridge::frb(sync)]
pub fn note_form_open() {
    session().note_composer_mut().open();
}

/// Closes the form; drafts are kept.
#[flutter_rust_bridge::frb(sync)]
pub fn note_form_cancel() {
    session().note_composer_mut().cancel();
}

#[flutter_rust_bridge::frb(sync)]
pub fn note_form_set(title: String, content: String) {
    let mut shell = session();
    let form = shell.note_composer_mut();
    form.set_title(title);
    form.set_content(content);
}

/// Saves the form; on success the drafts are cleared and the form closes.
#[flutter_rust_bridge::frb(sync)]
pub fn note_form_save() -> ActionResponse {
    match session().save_note() {
        Ok(id) => ActionResponse::success("Note created.", id),
        Err(err) => ActionResponse::failure(format!("note_form_save rejected: {err}")),
    }
}

fn session() -> MutexGuard<'static, Shell<SystemClock>> {
    SESSION
        .get_or_init(|| Mutex::new(Shell::with_system_clock(resolve_config())))
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner())
}

fn resolve_config() -> AppConfig {
    AppConfig::from_env().unwrap_or_else(|err| {
        warn!("event=config_load module=ffi status=fallback reason={err}");
        AppConfig::default()
    })
}

fn to_message_item(message: &Message) -> MessageItem {
    MessageItem {
        id: message.id,
        role: message.role.as_str().to_string(),
        content: message.content.clone(),
        timestamp_ms: message.timestamp,
    }
}

fn to_note_item(note: &Note) -> NoteItem {
    NoteItem {
        id: note.id,
        title: note.title.clone(),
        content: note.content.clone(),
        created_at_ms: note.created_at,
    }
}

fn to_frame(frame: ShellFrame) -> Frame {
    let screen = frame.page.screen().as_str().to_string();
    let page = match frame.page {
        Page::Home(view) => FramePage::Home(to_home_page(view)),
        Page::Chat(view) => FramePage::Chat(to_chat_page(view)),
        Page::Notes(view) => FramePage::Notes(to_notes_page(view)),
    };
    Frame {
        screen,
        nav: frame.nav.into_iter().map(to_nav_tab).collect(),
        page,
    }
}

fn to_nav_tab(item: NavItem) -> NavTab {
    NavTab {
        screen: item.screen.as_str().to_string(),
        label: item.label.to_string(),
        active: item.active,
    }
}

fn to_home_page(view: HomeView) -> HomePage {
    HomePage {
        greeting: view.greeting,
        subtitle: view.subtitle,
        quick_actions: view
            .quick_actions
            .into_iter()
            .map(|action| QuickActionTile {
                icon: action.icon.to_string(),
                title: action.title.to_string(),
                subtitle: action.subtitle.to_string(),
                target: action.target.map(str::to_string),
            })
            .collect(),
        insights: view.insights.into_iter().map(str::to_string).collect(),
    }
}

fn to_chat_page(view: ChatView) -> ChatPage {
    ChatPage {
        title: view.title.to_string(),
        messages: view
            .messages
            .into_iter()
            .map(|item| ChatBubble {
                id: item.id,
                role: item.role.as_str().to_string(),
                content: item.content,
                time_label: item.time_label,
            })
            .collect(),
        is_waiting: view.is_waiting,
        draft: view.draft,
        placeholder: view.placeholder.to_string(),
        can_send: view.can_send,
    }
}

fn to_notes_page(view: NotesView) -> NotesPage {
    NotesPage {
        title: view.title.to_string(),
        notes: view
            .notes
            .into_iter()
            .map(|item| NoteCard {
                id: item.id,
                title: item.title,
                content: item.content,
                created_label: item.created_label,
            })
            .collect(),
        empty_hint: view.empty_hint.map(str::to_string),
        form: NoteForm {
            is_open: view.composer.is_open,
            title: view.composer.title,
            content: view.composer.content,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::{
        chat_is_waiting, chat_messages, chat_page, chat_poll, chat_send, chat_set_draft,
        chat_submit, core_version, home_activate, home_page, init_logging, navigate,
        note_form_cancel, note_form_open, note_form_save, note_form_set, notes_create,
        notes_delete, notes_list, notes_page, ping, render_frame, select_screen, FramePage,
    };

    #[test]
    fn ping_returns_pong() {
        assert_eq!(ping(), "pong");
    }

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }

    #[test]
    fn init_logging_rejects_relative_dir_and_bad_level() {
        assert!(!init_logging("info".to_string(), String::new()).is_empty());
        assert!(!init_logging("verbose".to_string(), "tmp/logs".to_string()).is_empty());
    }

    // Only this test changes the current screen; the session is process-wide.
    #[test]
    fn navigation_and_frames_follow_the_selected_screen() {
        assert_eq!(navigate("/chat".to_string()), "chat");
        assert_eq!(navigate("/unknown".to_string()), "home");
        assert_eq!(navigate("/notes".to_string()), "notes");
        assert_eq!(navigate(String::new()), "home");

        let frame = render_frame();
        assert_eq!(frame.screen, "home");
        let active: Vec<&str> = frame
            .nav
            .iter()
            .filter(|tab| tab.active)
            .map(|tab| tab.screen.as_str())
            .collect();
        assert_eq!(active, vec!["home"]);
        match frame.page {
            FramePage::Home(home) => assert!(home.greeting.starts_with("Bem-vindo, ")),
            other => panic!("expected home page, got {other:?}"),
        }

        assert_eq!(home_activate(0).as_deref(), Some("chat"));
        assert!(matches!(render_frame().page, FramePage::Chat(_)));
        assert_eq!(home_activate(2), None);
        assert_eq!(home_activate(99), None);

        assert_eq!(select_screen("notes".to_string()), "notes");
        let frame = render_frame();
        assert_eq!(frame.screen, "notes");
        assert!(matches!(frame.page, FramePage::Notes(_)));
        assert_eq!(select_screen("bogus".to_string()), "home");
    }

    #[test]
    fn home_page_lists_tiles_and_insights() {
        let home = home_page();
        assert_eq!(home.quick_actions.len(), 4);
        assert_eq!(home.quick_actions[1].target.as_deref(), Some("/notes"));
        assert_eq!(home.quick_actions[3].target, None);
        assert_eq!(home.insights.len(), 2);
    }

    // Only this test sends chat messages; a second sender would see the
    // pending reply.
    #[test]
    fn chat_send_and_draft_submit_share_the_pending_guard() {
        let before = chat_messages().len();
        let blank = chat_send("   ".to_string());
        assert!(!blank.ok);
        chat_set_draft(" ".to_string());
        assert!(!chat_submit().ok);
        assert_eq!(chat_page().draft, " ");
        assert_eq!(chat_messages().len(), before);

        chat_set_draft("hello".to_string());
        assert!(chat_page().can_send);
        let sent = chat_submit();
        assert!(sent.ok, "{}", sent.message);
        assert!(chat_is_waiting());

        let page = chat_page();
        assert_eq!(page.draft, "");
        assert!(page.is_waiting);
        assert!(!page.can_send);
        let bubble = page
            .messages
            .iter()
            .find(|bubble| Some(bubble.id) == sent.id)
            .unwrap();
        assert_eq!(bubble.role, "user");
        assert_eq!(bubble.time_label.len(), 5);

        assert!(!chat_send("hello again".to_string()).ok);
        chat_set_draft("queued?".to_string());
        assert!(!chat_submit().ok);
        assert_eq!(chat_page().draft, "queued?");
        // The wall-clock reply is still a second away.
        assert!(chat_poll().is_none());
    }

    #[test]
    fn notes_create_list_and_delete() {
        let created = notes_create("ffi note".to_string(), "body".to_string());
        assert!(created.ok, "{}", created.message);
        let id = created.id.unwrap();
        assert!(notes_list().iter().any(|note| note.id == id));

        assert!(!notes_create(" ".to_string(), "x".to_string()).ok);

        assert!(notes_delete(id).ok);
        assert!(notes_list().iter().all(|note| note.id != id));
    }

    #[test]
    fn deleting_unknown_note_is_a_successful_noop() {
        let response = notes_delete(-1);
        assert!(response.ok);
        assert_eq!(response.id, None);
        assert!(response.message.contains("Nothing"));
    }

    // Only this test touches the note form.
    #[test]
    fn note_form_keeps_drafts_until_saved() {
        note_form_open();
        note_form_set(String::new(), "draft body".to_string());
        assert!(!note_form_save().ok);
        let form = notes_page().form;
        assert!(form.is_open);
        assert_eq!(form.content, "draft body");

        note_form_cancel();
        assert!(!notes_page().form.is_open);
        assert_eq!(notes_page().form.content, "draft body");

        note_form_open();
        note_form_set("From form".to_string(), "draft body".to_string());
        let saved = note_form_save();
        assert!(saved.ok, "{}", saved.message);
        let page = notes_page();
        assert!(!page.form.is_open);
        assert_eq!(page.form.title, "");
        let card = page
            .notes
            .iter()
            .find(|card| Some(card.id) == saved.id)
            .unwrap();
        assert_eq!(card.title, "From form");
        assert_eq!(card.created_label.len(), 16);
    }
}
