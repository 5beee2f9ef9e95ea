use jarvis_core::{AppConfig, CannedReplies, ManualClock, Page, Screen, SendError, Shell};

fn shell(clock: &ManualClock) -> Shell<ManualClock> {
    Shell::new(AppConfig::default(), clock.clone(), CannedReplies::seeded(7))
}

#[test]
fn navigate_normalizes_paths() {
    let clock = ManualClock::new(0);
    let mut shell = shell(&clock);

    assert_eq!(shell.navigate("/chat"), Screen::Chat);
    assert_eq!(shell.navigate("/notes"), Screen::Notes);
    assert_eq!(shell.navigate(""), Screen::Home);
    assert_eq!(shell.navigate("/unknown"), Screen::Home);
    assert_eq!(shell.current_screen(), Screen::Home);
}

#[test]
fn seeded_shell_has_greeting_and_welcome_note() {
    let clock = ManualClock::new(0);
    let shell = shell(&clock);
    assert_eq!(shell.chat().len(), 1);
    assert_eq!(shell.notes().len(), 1);
}

#[test]
fn chat_state_survives_navigation() {
    let clock = ManualClock::new(10_000);
    let mut shell = shell(&clock);

    shell.select(Screen::Chat);
    shell.set_chat_draft("hello jarvis");
    shell.submit_chat().unwrap();
    shell.navigate("/notes");
    shell.navigate("/chat");

    let Page::Chat(view) = shell.render().page else {
        panic!("expected chat page");
    };
    assert_eq!(view.messages.len(), 2);
    assert!(view.is_waiting);
    assert!(!view.can_send);
    assert_eq!(view.draft, "");

    assert_eq!(shell.send_message("again"), Err(SendError::ReplyPending));

    clock.advance(1_000);
    assert!(shell.tick().is_some());
    assert!(shell.tick().is_none());

    let Page::Chat(view) = shell.render().page else {
        panic!("expected chat page");
    };
    assert_eq!(view.messages.len(), 3);
    assert!(!view.is_waiting);
}

#[test]
fn notes_form_flow_renders_through_frames() {
    let clock = ManualClock::new(0);
    let mut shell = shell(&clock);
    shell.navigate("/notes");

    shell.note_composer_mut().open();
    shell.note_composer_mut().set_title("Shopping");
    shell.note_composer_mut().set_content("eggs\nbread");
    let id = shell.save_note().unwrap();

    let Page::Notes(view) = shell.render().page else {
        panic!("expected notes page");
    };
    assert_eq!(view.notes[0].id, id);
    assert_eq!(view.notes[0].content, "eggs\nbread");
    assert!(!view.composer.is_open);

    assert!(shell.delete_note(id));
    let welcome = shell.notes().notes()[0].id;
    assert!(shell.delete_note(welcome));

    let Page::Notes(view) = shell.render().page else {
        panic!("expected notes page");
    };
    assert!(view.notes.is_empty());
    assert_eq!(view.empty_hint, Some("Nenhuma nota ainda"));
}

#[test]
fn unseeded_shell_starts_empty() {
    let config = AppConfig {
        seeded: false,
        ..AppConfig::default()
    };
    let shell = Shell::new(config, ManualClock::new(0), CannedReplies::seeded(1));
    assert!(shell.chat().is_empty());
    assert!(shell.notes().is_empty());
}
