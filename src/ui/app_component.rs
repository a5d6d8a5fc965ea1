//! Demo application hosting a single speed dial.
//!
//! The app plays the part of the host framework: it owns the props, pulses
//! the reset token on `r`/`o`, forwards input to the dial and reports what
//! happened in a status bar.

use crate::config::Config;
use crate::constants::{STATUS_HINT, STATUS_NOTHING_SELECTED};
use crate::dial::{ActionButtonProps, ResetToken, SyncOutcome};
use crate::ui::components::SpeedDialComponent;
use crate::ui::core::{Action, Component, EventType};
use crate::ui::layout::LayoutManager;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use std::cell::{Cell, RefCell};
use std::rc::Rc;

pub struct AppComponent {
    dial: SpeedDialComponent,
    base_props: ActionButtonProps,
    reset_token: ResetToken,
    status: String,
    selections: Rc<RefCell<Vec<String>>>,
    presses: Rc<Cell<u32>>,
    should_quit: bool,
}

impl AppComponent {
    pub fn new(config: &Config) -> anyhow::Result<Self> {
        let selections = Rc::new(RefCell::new(Vec::new()));
        let presses = Rc::new(Cell::new(0));

        let picked = Rc::clone(&selections);
        let counter = Rc::clone(&presses);
        let base_props = config
            .dial
            .to_props(move |label, state| {
                log::info!("Selected '{}' (dial open: {})", label, state.is_open());
                picked.borrow_mut().push(label.to_string());
            })?
            .on_press(move || counter.set(counter.get() + 1));

        let reset_token = base_props.reset_token.clone();
        Ok(Self {
            dial: SpeedDialComponent::new(base_props.clone()),
            base_props,
            reset_token,
            status: STATUS_NOTHING_SELECTED.to_string(),
            selections,
            presses,
            should_quit: false,
        })
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn dial(&self) -> &SpeedDialComponent {
        &self.dial
    }

    pub fn status(&self) -> &str {
        &self.status
    }

    /// Labels selected so far, oldest first
    pub fn selections(&self) -> Vec<String> {
        self.selections.borrow().clone()
    }

    pub fn press_count(&self) -> u32 {
        self.presses.get()
    }

    /// Pulse the reset token with the given desired state
    pub fn reset_dial(&mut self, active: bool) -> SyncOutcome {
        self.reset_token = self.reset_token.next();
        let props = self
            .base_props
            .clone()
            .active(active)
            .reset_token(self.reset_token.clone());
        self.dial.set_props(props)
    }

    /// Process an event through the component hierarchy
    pub fn handle_event(&mut self, event_type: EventType) -> Action {
        let action = match event_type {
            EventType::Key(key) => self.handle_key_events(key),
            EventType::Mouse(mouse) => self.dial.handle_mouse_events(mouse),
            EventType::Tick => self.dial.update(Action::Tick),
            EventType::Resize(_, _) | EventType::Other => Action::None,
        };
        self.update(action)
    }

    fn handle_global_key(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Char('q') => Action::Quit,
            KeyCode::Char('r') => Action::ResetDial { active: false },
            KeyCode::Char('o') => Action::ResetDial { active: true },
            _ => Action::None,
        }
    }
}

impl Component for AppComponent {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        let dial_action = self.dial.handle_key_events(key);
        if dial_action != Action::None {
            dial_action
        } else {
            self.handle_global_key(key)
        }
    }

    fn update(&mut self, action: Action) -> Action {
        match &action {
            Action::PrimaryPressed { engaged: false, .. } => {
                self.status = "Pressed (no actions configured)".to_string();
            }
            Action::PrimaryPressed { open, .. } => {
                self.status = if *open { "Opened" } else { "Closed" }.to_string();
            }
            Action::ItemSelected { label, .. } => {
                self.status = format!("Selected: {label}");
            }
            Action::Dismissed => {
                self.status = "Dismissed".to_string();
            }
            Action::ResetDial { active } => {
                let outcome = self.reset_dial(*active);
                self.status = format!("Reset token {} ({:?})", self.reset_token, outcome);
            }
            Action::Quit => {
                self.should_quit = true;
            }
            Action::Tick | Action::None => {}
        }
        action
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        let (dial_area, status_area) = LayoutManager::main_layout(rect);
        self.dial.render(f, dial_area);

        let status = Line::from(vec![
            Span::styled(format!(" {} ", self.status), Style::default().fg(Color::Black).bg(Color::Cyan)),
            Span::styled(format!(" {STATUS_HINT}"), Style::default().fg(Color::DarkGray)),
        ]);
        f.render_widget(Paragraph::new(status), status_area);
    }

    fn on_unmount(&mut self) {
        self.dial.on_unmount();
    }
}
