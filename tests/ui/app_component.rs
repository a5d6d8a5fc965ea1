use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::backend::TestBackend;
use ratatui::Terminal;
use speeddial::config::Config;
use speeddial::constants::STATUS_NOTHING_SELECTED;
use speeddial::dial::SyncOutcome;
use speeddial::ui::core::{Action, Component, EventType};
use speeddial::ui::AppComponent;

fn press(app: &mut AppComponent, code: KeyCode) -> Action {
    app.handle_event(EventType::Key(KeyEvent::new(code, KeyModifiers::NONE)))
}

#[test]
fn test_app_starts_closed_with_default_actions() {
    let app = AppComponent::new(&Config::default()).unwrap();
    assert!(!app.dial().dial().is_open());
    assert_eq!(app.dial().dial().props().actions().count(), 3);
    assert_eq!(app.status(), STATUS_NOTHING_SELECTED);
    assert!(!app.should_quit());
}

#[test]
fn test_selection_is_recorded_and_reported() {
    let mut app = AppComponent::new(&Config::default()).unwrap();

    press(&mut app, KeyCode::Enter);
    assert_eq!(app.press_count(), 1);
    assert_eq!(app.status(), "Opened");

    // Number keys follow what is on screen
    let mut terminal = Terminal::new(TestBackend::new(100, 20)).unwrap();
    terminal.draw(|f| app.render(f, f.area())).unwrap();
    press(&mut app, KeyCode::Char('2'));
    assert_eq!(app.selections(), vec!["Notifications".to_string()]);
    assert_eq!(app.status(), "Selected: Notifications");
    assert!(!app.dial().dial().is_open());
}

#[test]
fn test_reset_keys_pulse_the_token() {
    let mut app = AppComponent::new(&Config::default()).unwrap();

    press(&mut app, KeyCode::Char('o'));
    assert!(app.dial().dial().is_open());
    assert!(app.status().contains("ForcedOpen"));

    press(&mut app, KeyCode::Char('r'));
    assert!(!app.dial().dial().is_open());
    assert!(app.status().contains("ForcedClose"));

    // Pulsing closed again while closed only refreshes the token
    assert_eq!(app.reset_dial(false), SyncOutcome::Refreshed);
}

#[test]
fn test_quit_key() {
    let mut app = AppComponent::new(&Config::default()).unwrap();
    assert_eq!(press(&mut app, KeyCode::Char('q')), Action::Quit);
    assert!(app.should_quit());
}

#[test]
fn test_app_renders_status_bar() {
    let mut app = AppComponent::new(&Config::default()).unwrap();
    let mut terminal = Terminal::new(TestBackend::new(100, 20)).unwrap();
    terminal.draw(|f| app.render(f, f.area())).unwrap();

    let text: String = terminal
        .backend()
        .buffer()
        .content()
        .iter()
        .map(|cell| cell.symbol())
        .collect();
    assert!(text.contains(STATUS_NOTHING_SELECTED));
}
