//! Unauthenticated landing screen with login and registration forms.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Widget},
};

use crate::domain::entities::{Credentials, Registration};
use crate::presentation::events::{is_focus_next, is_focus_prev};
use crate::presentation::widgets::TextInput;

/// Which form the landing screen is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LandingMode {
    /// Login form: username and password.
    Login,
    /// Registration form: username, email and password.
    Register,
}

/// Landing screen status line.
#[derive(Debug, Clone, PartialEq, Eq)]
enum LandingStatus {
    Idle,
    Submitting,
    Error(String),
    Notice(String),
}

/// Action requested by the landing screen.
#[derive(Debug, Clone, PartialEq)]
pub enum LandingAction {
    /// Nothing to do.
    None,
    /// Submit the login form.
    SubmitLogin(Credentials),
    /// Submit the registration form.
    SubmitRegister(Registration),
    /// Quit the application.
    Quit,
}

/// Unauthenticated landing screen.
pub struct LandingScreen {
    mode: LandingMode,
    username: TextInput,
    email: TextInput,
    password: TextInput,
    focus: usize,
    status: LandingStatus,
}

impl LandingScreen {
    /// Creates the landing screen in login mode.
    #[must_use]
    pub fn new() -> Self {
        let mut username = TextInput::new("Username");
        username.set_focused(true);

        Self {
            mode: LandingMode::Login,
            username,
            email: TextInput::new("Email"),
            password: TextInput::new("Password").password(),
            focus: 0,
            status: LandingStatus::Idle,
        }
    }

    /// Returns the current form mode.
    #[must_use]
    pub const fn mode(&self) -> LandingMode {
        self.mode
    }

    /// Marks the form as submitting; input is ignored until resolved.
    pub fn set_submitting(&mut self) {
        self.status = LandingStatus::Submitting;
    }

    /// Shows an error on the status line; the form stays filled for
    /// retry.
    pub fn set_error(&mut self, message: impl Into<String>) {
        self.status = LandingStatus::Error(message.into());
    }

    /// Shows a notice on the status line.
    pub fn set_notice(&mut self, message: impl Into<String>) {
        self.status = LandingStatus::Notice(message.into());
    }

    fn field_count(&self) -> usize {
        match self.mode {
            LandingMode::Login => 2,
            LandingMode::Register => 3,
        }
    }

    fn fields_mut(&mut self) -> Vec<&mut TextInput> {
        match self.mode {
            LandingMode::Login => vec![&mut self.username, &mut self.password],
            LandingMode::Register => {
                vec![&mut self.username, &mut self.email, &mut self.password]
            }
        }
    }

    fn sync_focus(&mut self) {
        let focus = self.focus;
        for (index, field) in self.fields_mut().into_iter().enumerate() {
            field.set_focused(index == focus);
        }
    }

    fn toggle_mode(&mut self) {
        self.mode = match self.mode {
            LandingMode::Login => LandingMode::Register,
            LandingMode::Register => LandingMode::Login,
        };
        self.focus = 0;
        self.status = LandingStatus::Idle;
        self.sync_focus();
    }

    fn submit(&mut self) -> LandingAction {
        let complete = match self.mode {
            LandingMode::Login => !self.username.is_blank() && !self.password.is_blank(),
            LandingMode::Register => {
                !self.username.is_blank() && !self.email.is_blank() && !self.password.is_blank()
            }
        };

        if !complete {
            self.set_error("All fields are required");
            return LandingAction::None;
        }

        match self.mode {
            LandingMode::Login => LandingAction::SubmitLogin(Credentials::new(
                self.username.value(),
                self.password.value(),
            )),
            LandingMode::Register => LandingAction::SubmitRegister(Registration::new(
                self.username.value(),
                self.email.value(),
                self.password.value(),
            )),
        }
    }

    /// Handles a key event, returning the requested action.
    pub fn handle_key(&mut self, key: KeyEvent) -> LandingAction {
        if self.status == LandingStatus::Submitting {
            return LandingAction::None;
        }

        if key.code == KeyCode::Char('r') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.toggle_mode();
            return LandingAction::None;
        }

        if key.code == KeyCode::Esc {
            return LandingAction::Quit;
        }

        if is_focus_next(&key) {
            self.focus = (self.focus + 1) % self.field_count();
            self.sync_focus();
            return LandingAction::None;
        }

        if is_focus_prev(&key) {
            self.focus = (self.focus + self.field_count() - 1) % self.field_count();
            self.sync_focus();
            return LandingAction::None;
        }

        if key.code == KeyCode::Enter {
            return self.submit();
        }

        let focus = self.focus;
        if self.fields_mut()[focus].handle_key(key)
            && matches!(self.status, LandingStatus::Error(_))
        {
            self.status = LandingStatus::Idle;
        }

        LandingAction::None
    }

    fn status_line(&self) -> Line<'_> {
        match &self.status {
            LandingStatus::Idle => Line::from(Span::styled(
                match self.mode {
                    LandingMode::Login => "Enter: Login | Ctrl+R: Register | Esc: Quit",
                    LandingMode::Register => "Enter: Create account | Ctrl+R: Back to login | Esc: Quit",
                },
                Style::default().fg(Color::DarkGray),
            )),
            LandingStatus::Submitting => Line::from(Span::styled(
                "Submitting...",
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::ITALIC),
            )),
            LandingStatus::Error(message) => Line::from(Span::styled(
                format!("Error: {message}"),
                Style::default().fg(Color::Red),
            )),
            LandingStatus::Notice(message) => Line::from(Span::styled(
                message.clone(),
                Style::default().fg(Color::Green),
            )),
        }
    }

    fn render_inner(&self, area: Rect, buf: &mut Buffer) {
        let height = match self.mode {
            LandingMode::Login => 12,
            LandingMode::Register => 15,
        };

        let vertical = Layout::vertical([
            Constraint::Fill(1),
            Constraint::Length(height),
            Constraint::Fill(1),
        ]);
        let [_, center, _] = vertical.areas(area);

        let horizontal = Layout::horizontal([
            Constraint::Fill(1),
            Constraint::Min(50),
            Constraint::Fill(1),
        ]);
        let [_, content_area, _] = horizontal.areas(center);

        Clear.render(content_area, buf);

        let title = match self.mode {
            LandingMode::Login => " Spendo Login ",
            LandingMode::Register => " Spendo Registration ",
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan))
            .title(title);

        let inner = block.inner(content_area);
        block.render(content_area, buf);

        match self.mode {
            LandingMode::Login => {
                let layout = Layout::vertical([
                    Constraint::Length(3),
                    Constraint::Length(3),
                    Constraint::Length(1),
                    Constraint::Length(1),
                ]);
                let areas = layout.areas::<4>(inner);

                (&self.username).render(areas[0], buf);
                (&self.password).render(areas[1], buf);
                Paragraph::new(self.status_line()).render(areas[3], buf);
            }
            LandingMode::Register => {
                let layout = Layout::vertical([
                    Constraint::Length(3),
                    Constraint::Length(3),
                    Constraint::Length(3),
                    Constraint::Length(1),
                    Constraint::Length(1),
                ]);
                let areas = layout.areas::<5>(inner);

                (&self.username).render(areas[0], buf);
                (&self.email).render(areas[1], buf);
                (&self.password).render(areas[2], buf);
                Paragraph::new(self.status_line()).render(areas[4], buf);
            }
        }
    }
}

impl Default for LandingScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl Widget for &LandingScreen {
    fn render(self, area: Rect, buf: &mut Buffer) {
        self.render_inner(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn type_text(screen: &mut LandingScreen, text: &str) {
        for c in text.chars() {
            screen.handle_key(key(KeyCode::Char(c)));
        }
    }

    #[test]
    fn test_initial_state() {
        let screen = LandingScreen::new();
        assert_eq!(screen.mode(), LandingMode::Login);
    }

    #[test]
    fn test_empty_submit_is_rejected_locally() {
        let mut screen = LandingScreen::new();
        let action = screen.handle_key(key(KeyCode::Enter));

        assert_eq!(action, LandingAction::None);
        assert!(matches!(screen.status, LandingStatus::Error(_)));
    }

    #[test]
    fn test_login_submission() {
        let mut screen = LandingScreen::new();
        type_text(&mut screen, "maria");
        screen.handle_key(key(KeyCode::Tab));
        type_text(&mut screen, "hunter2");

        let action = screen.handle_key(key(KeyCode::Enter));

        match action {
            LandingAction::SubmitLogin(credentials) => {
                assert_eq!(credentials.username, "maria");
                assert_eq!(credentials.password, "hunter2");
            }
            other => panic!("expected login submission, got {other:?}"),
        }
    }

    #[test]
    fn test_register_submission() {
        let mut screen = LandingScreen::new();
        screen.handle_key(KeyEvent::new(KeyCode::Char('r'), KeyModifiers::CONTROL));
        assert_eq!(screen.mode(), LandingMode::Register);

        type_text(&mut screen, "maria");
        screen.handle_key(key(KeyCode::Tab));
        type_text(&mut screen, "maria@example.com");
        screen.handle_key(key(KeyCode::Tab));
        type_text(&mut screen, "hunter2");

        let action = screen.handle_key(key(KeyCode::Enter));

        match action {
            LandingAction::SubmitRegister(registration) => {
                assert_eq!(registration.username, "maria");
                assert_eq!(registration.email, "maria@example.com");
                assert_eq!(registration.password, "hunter2");
            }
            other => panic!("expected registration submission, got {other:?}"),
        }
    }

    #[test]
    fn test_input_ignored_while_submitting() {
        let mut screen = LandingScreen::new();
        type_text(&mut screen, "maria");
        screen.set_submitting();

        type_text(&mut screen, "xyz");
        assert_eq!(screen.username.value(), "maria");
    }

    #[test]
    fn test_escape_quits() {
        let mut screen = LandingScreen::new();
        assert_eq!(screen.handle_key(key(KeyCode::Esc)), LandingAction::Quit);
    }
}
