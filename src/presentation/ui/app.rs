//! Application orchestrator: screen routing and the event loop.

use std::sync::Arc;

use crossterm::event::{Event, EventStream, KeyEvent, KeyEventKind};
use futures_util::StreamExt;
use ratatui::DefaultTerminal;
use tokio::sync::mpsc;
use tracing::{debug, error, info, warn};

use crate::application::dto::ExpenseSnapshot;
use crate::application::use_cases::{
    LoadExpensesUseCase, LoginUseCase, RegisterUseCase, SubmitExpenseUseCase,
};
use crate::domain::entities::CreatedUser;
use crate::domain::errors::ApiError;
use crate::domain::ports::{ExpenseApiPort, SessionStorePort};
use crate::presentation::events::is_force_quit;
use crate::presentation::ui::home_screen::{HomeAction, HomeScreen};
use crate::presentation::ui::landing_screen::{LandingAction, LandingScreen};

/// Result of a background task, posted back to the event loop.
#[derive(Debug)]
enum Action {
    Registered(CreatedUser),
    RegisterFailed(ApiError),
    LoggedIn,
    LoginFailed(ApiError),
    ExpenseMutated { what: &'static str },
    MutationFailed(ApiError),
    ExpensesLoaded(ExpenseSnapshot),
    LoadFailed(ApiError),
    LoggedOut,
}

/// Which view the application is in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppState {
    /// Unauthenticated: landing screen.
    Landing,
    /// Authenticated: home screen.
    Home,
    /// Shutting down.
    Exiting,
}

enum CurrentScreen {
    Landing(LandingScreen),
    Home(HomeScreen),
}

/// Top-level application.
///
/// Owns the screens and the action channel. Key events are routed to
/// the active screen; the actions it returns are executed on spawned
/// tasks whose results come back through the channel.
pub struct App {
    state: AppState,
    screen: CurrentScreen,
    register_use_case: RegisterUseCase,
    login_use_case: LoginUseCase,
    submit_use_case: SubmitExpenseUseCase,
    load_use_case: Arc<LoadExpensesUseCase>,
    api: Arc<dyn ExpenseApiPort>,
    session: Arc<dyn SessionStorePort>,
    action_tx: mpsc::UnboundedSender<Action>,
    action_rx: mpsc::UnboundedReceiver<Action>,
    timestamp_format: String,
}

impl App {
    /// Creates the application on the landing screen.
    #[must_use]
    pub fn new(
        api: Arc<dyn ExpenseApiPort>,
        session: Arc<dyn SessionStorePort>,
        timestamp_format: impl Into<String>,
    ) -> Self {
        let (action_tx, action_rx) = mpsc::unbounded_channel();

        Self {
            state: AppState::Landing,
            screen: CurrentScreen::Landing(LandingScreen::new()),
            register_use_case: RegisterUseCase::new(api.clone()),
            login_use_case: LoginUseCase::new(api.clone(), session.clone()),
            submit_use_case: SubmitExpenseUseCase::new(api.clone()),
            load_use_case: Arc::new(LoadExpensesUseCase::new(api.clone())),
            api,
            session,
            action_tx,
            action_rx,
            timestamp_format: timestamp_format.into(),
        }
    }

    /// Returns the current application state.
    #[must_use]
    pub const fn state(&self) -> AppState {
        self.state
    }

    /// Runs the event loop until exit.
    ///
    /// # Errors
    /// Returns error when the terminal cannot be drawn to.
    pub async fn run(&mut self, terminal: &mut DefaultTerminal) -> std::io::Result<()> {
        self.resume_session().await;

        let mut events = EventStream::new();

        while self.state != AppState::Exiting {
            terminal.draw(|frame| match &self.screen {
                CurrentScreen::Landing(screen) => frame.render_widget(screen, frame.area()),
                CurrentScreen::Home(screen) => frame.render_widget(screen, frame.area()),
            })?;

            tokio::select! {
                Some(Ok(event)) = events.next() => {
                    if let Event::Key(key) = event
                        && key.kind == KeyEventKind::Press
                    {
                        self.handle_key(key);
                    }
                }
                Some(action) = self.action_rx.recv() => {
                    self.handle_action(action);
                }
            }
        }

        Ok(())
    }

    /// Reuses a stored session from a previous run, when present.
    async fn resume_session(&mut self) {
        match self.session.has_token().await {
            Ok(true) => {
                info!("Resuming stored session");
                self.enter_home();
            }
            Ok(false) => debug!("No stored session"),
            Err(e) => warn!(error = %e, "Could not read session store"),
        }
    }

    fn handle_key(&mut self, key: KeyEvent) {
        if is_force_quit(&key) {
            self.state = AppState::Exiting;
            return;
        }

        match &mut self.screen {
            CurrentScreen::Landing(screen) => {
                let action = screen.handle_key(key);
                self.handle_landing_action(action);
            }
            CurrentScreen::Home(screen) => {
                let action = screen.handle_key(key);
                self.handle_home_action(action);
            }
        }
    }

    fn handle_landing_action(&mut self, action: LandingAction) {
        match action {
            LandingAction::None => {}
            LandingAction::Quit => self.state = AppState::Exiting,
            LandingAction::SubmitLogin(credentials) => {
                if let CurrentScreen::Landing(screen) = &mut self.screen {
                    screen.set_submitting();
                }

                let use_case = self.login_use_case.clone();
                let tx = self.action_tx.clone();
                tokio::spawn(async move {
                    let action = match use_case.execute(credentials).await {
                        Ok(()) => Action::LoggedIn,
                        Err(e) => Action::LoginFailed(e),
                    };
                    let _ = tx.send(action);
                });
            }
            LandingAction::SubmitRegister(registration) => {
                if let CurrentScreen::Landing(screen) = &mut self.screen {
                    screen.set_submitting();
                }

                let use_case = self.register_use_case.clone();
                let tx = self.action_tx.clone();
                tokio::spawn(async move {
                    let action = match use_case.execute(registration).await {
                        Ok(user) => Action::Registered(user),
                        Err(e) => Action::RegisterFailed(e),
                    };
                    let _ = tx.send(action);
                });
            }
        }
    }

    fn handle_home_action(&mut self, action: HomeAction) {
        match action {
            HomeAction::None => {}
            HomeAction::Quit => self.state = AppState::Exiting,
            HomeAction::SubmitNew {
                description,
                amount,
                category,
            } => {
                self.set_home_busy("Saving expense...");

                let use_case = self.submit_use_case.clone();
                let tx = self.action_tx.clone();
                tokio::spawn(async move {
                    let action = match use_case.create(&description, &amount, &category).await {
                        Ok(()) => Action::ExpenseMutated { what: "added" },
                        Err(e) => Action::MutationFailed(e),
                    };
                    let _ = tx.send(action);
                });
            }
            HomeAction::SubmitEdit {
                id,
                description,
                amount,
            } => {
                self.set_home_busy("Saving changes...");

                let use_case = self.submit_use_case.clone();
                let tx = self.action_tx.clone();
                tokio::spawn(async move {
                    let action = match use_case.update(id, &description, &amount).await {
                        Ok(()) => Action::ExpenseMutated { what: "updated" },
                        Err(e) => Action::MutationFailed(e),
                    };
                    let _ = tx.send(action);
                });
            }
            HomeAction::Delete(id) => {
                self.set_home_busy("Deleting expense...");

                let api = self.api.clone();
                let tx = self.action_tx.clone();
                tokio::spawn(async move {
                    let action = match api.delete_expense(id).await {
                        Ok(()) => Action::ExpenseMutated { what: "deleted" },
                        Err(e) => Action::MutationFailed(e),
                    };
                    let _ = tx.send(action);
                });
            }
            HomeAction::Search(term) => {
                self.set_home_busy("Searching...");
                self.spawn_load(Some(term));
            }
            HomeAction::Reload => {
                self.set_home_busy("Loading expenses...");
                self.spawn_load(None);
            }
            HomeAction::Logout => {
                let use_case = self.login_use_case.clone();
                let tx = self.action_tx.clone();
                tokio::spawn(async move {
                    if let Err(e) = use_case.logout().await {
                        warn!(error = %e, "Session clear failed during logout");
                    }
                    let _ = tx.send(Action::LoggedOut);
                });
            }
        }
    }

    fn handle_action(&mut self, action: Action) {
        match action {
            Action::Registered(user) => {
                if let CurrentScreen::Landing(screen) = &mut self.screen {
                    screen.set_notice(format!(
                        "Account '{}' created, you can now log in",
                        user.username,
                    ));
                }
            }
            Action::RegisterFailed(e) => {
                if let CurrentScreen::Landing(screen) = &mut self.screen {
                    screen.set_error(e.to_string());
                }
            }
            Action::LoggedIn => self.enter_home(),
            Action::LoginFailed(e) => {
                if let CurrentScreen::Landing(screen) = &mut self.screen {
                    screen.set_error(e.to_string());
                }
            }
            Action::ExpenseMutated { what } => {
                if let CurrentScreen::Home(screen) = &mut self.screen {
                    screen.clear_form();
                    screen.set_notice(format!("Expense {what}"));
                }
                self.spawn_load(None);
            }
            Action::MutationFailed(e) => {
                if e.is_auth_failure() {
                    self.return_to_landing("Session expired, please log in again");
                } else if let CurrentScreen::Home(screen) = &mut self.screen {
                    screen.set_error(e.to_string());
                }
            }
            Action::ExpensesLoaded(snapshot) => {
                if let CurrentScreen::Home(screen) = &mut self.screen {
                    if screen.apply_snapshot(snapshot) {
                        screen.set_notice(format!(
                            "{} expense(s)",
                            screen.expenses().len(),
                        ));
                    } else {
                        debug!("Discarded stale expense snapshot");
                    }
                }
            }
            Action::LoadFailed(e) => {
                if e.is_auth_failure() {
                    self.return_to_landing("Session expired, please log in again");
                } else {
                    error!(error = %e, "Expense list load failed");
                    if let CurrentScreen::Home(screen) = &mut self.screen {
                        screen.set_error(format!("Could not load expenses: {e}"));
                    }
                }
            }
            Action::LoggedOut => self.return_to_landing("Logged out"),
        }
    }

    fn set_home_busy(&mut self, message: &str) {
        if let CurrentScreen::Home(screen) = &mut self.screen {
            screen.set_busy(message);
        }
    }

    fn spawn_load(&self, search: Option<String>) {
        let use_case = self.load_use_case.clone();
        let tx = self.action_tx.clone();
        tokio::spawn(async move {
            let action = match use_case.execute(search.as_deref()).await {
                Ok(snapshot) => Action::ExpensesLoaded(snapshot),
                Err(e) => Action::LoadFailed(e),
            };
            let _ = tx.send(action);
        });
    }

    fn enter_home(&mut self) {
        let mut screen = HomeScreen::new(self.timestamp_format.clone());
        screen.set_busy("Loading expenses...");
        self.screen = CurrentScreen::Home(screen);
        self.state = AppState::Home;
        self.spawn_load(None);
    }

    fn return_to_landing(&mut self, notice: &str) {
        let mut screen = LandingScreen::new();
        screen.set_notice(notice);
        self.screen = CurrentScreen::Landing(screen);
        self.state = AppState::Landing;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::Expense;
    use crate::domain::ports::mocks::{MockExpenseApi, MockSessionStore};

    fn app() -> App {
        App::new(
            Arc::new(MockExpenseApi::new()),
            Arc::new(MockSessionStore::new()),
            "%Y-%m-%d %H:%M",
        )
    }

    #[tokio::test]
    async fn test_starts_on_landing_screen() {
        let app = app();
        assert_eq!(app.state(), AppState::Landing);
    }

    #[tokio::test]
    async fn test_login_navigates_home_and_triggers_load() {
        let mut app = app();

        app.handle_action(Action::LoggedIn);

        assert_eq!(app.state(), AppState::Home);
        let action = app.action_rx.recv().await.expect("initial load");
        assert!(matches!(action, Action::ExpensesLoaded(_)));
    }

    #[tokio::test]
    async fn test_expired_session_returns_to_landing() {
        let mut app = app();
        app.handle_action(Action::LoggedIn);

        app.handle_action(Action::LoadFailed(ApiError::SessionExpired));

        assert_eq!(app.state(), AppState::Landing);
    }

    #[tokio::test]
    async fn test_mutation_failure_stays_home() {
        let mut app = app();
        app.handle_action(Action::LoggedIn);

        app.handle_action(Action::MutationFailed(ApiError::http(400, "bad category")));

        assert_eq!(app.state(), AppState::Home);
    }

    #[tokio::test]
    async fn test_stale_snapshot_does_not_replace_newer_one() {
        let mut app = app();
        app.handle_action(Action::LoggedIn);

        let newer = ExpenseSnapshot::new(
            5,
            None,
            vec![Expense::new(1, "Coffee", 3.5, "food", "2024-01-01T00:00:00Z")],
        );
        let stale = ExpenseSnapshot::new(4, Some("x".to_string()), Vec::new());

        app.handle_action(Action::ExpensesLoaded(newer));
        app.handle_action(Action::ExpensesLoaded(stale));

        match &app.screen {
            CurrentScreen::Home(screen) => assert_eq!(screen.expenses().len(), 1),
            CurrentScreen::Landing(_) => panic!("expected home screen"),
        }
    }

    #[tokio::test]
    async fn test_resume_session_with_stored_token() {
        let session = Arc::new(MockSessionStore::with_token(
            crate::domain::entities::SessionToken::new_unchecked("abc.def.ghi"),
        ));
        let mut app = App::new(Arc::new(MockExpenseApi::new()), session, "%Y-%m-%d");

        app.resume_session().await;

        assert_eq!(app.state(), AppState::Home);
    }
}
