//! Authenticated home screen: expense form, search and list.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::application::dto::ExpenseSnapshot;
use crate::domain::entities::Expense;
use crate::presentation::events::{is_focus_next, is_focus_prev};
use crate::presentation::widgets::{ExpenseList, TextInput};

/// Focusable areas of the home screen, in Tab order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HomeFocus {
    /// Expense description field.
    Description,
    /// Expense amount field.
    Amount,
    /// Expense category field.
    Category,
    /// Search field.
    Search,
    /// Expense list.
    List,
}

impl HomeFocus {
    const ORDER: [Self; 5] = [
        Self::Description,
        Self::Amount,
        Self::Category,
        Self::Search,
        Self::List,
    ];

    fn next(self) -> Self {
        let index = Self::ORDER.iter().position(|f| *f == self).unwrap_or(0);
        Self::ORDER[(index + 1) % Self::ORDER.len()]
    }

    fn prev(self) -> Self {
        let index = Self::ORDER.iter().position(|f| *f == self).unwrap_or(0);
        Self::ORDER[(index + Self::ORDER.len() - 1) % Self::ORDER.len()]
    }
}

/// Home screen status line.
#[derive(Debug, Clone, PartialEq, Eq)]
enum HomeStatus {
    Idle,
    Busy(String),
    Error(String),
    Notice(String),
}

/// Action requested by the home screen.
#[derive(Debug, Clone, PartialEq)]
pub enum HomeAction {
    /// Nothing to do.
    None,
    /// Submit a new expense from the form fields.
    SubmitNew {
        /// Raw description field value.
        description: String,
        /// Raw amount field value.
        amount: String,
        /// Raw category field value.
        category: String,
    },
    /// Submit an edit of an existing expense.
    SubmitEdit {
        /// Identifier of the expense being edited.
        id: i64,
        /// Raw description field value.
        description: String,
        /// Raw amount field value.
        amount: String,
    },
    /// Reload the list with the given search term.
    Search(String),
    /// Delete the expense with the given identifier.
    Delete(i64),
    /// Reload the full list.
    Reload,
    /// Log out and return to the landing screen.
    Logout,
    /// Quit the application.
    Quit,
}

/// Authenticated home screen.
pub struct HomeScreen {
    description: TextInput,
    amount: TextInput,
    category: TextInput,
    search: TextInput,
    focus: HomeFocus,
    expenses: Vec<Expense>,
    selected: usize,
    last_applied_seq: u64,
    editing: Option<i64>,
    status: HomeStatus,
    timestamp_format: String,
}

impl HomeScreen {
    /// Creates the home screen with an empty list.
    #[must_use]
    pub fn new(timestamp_format: impl Into<String>) -> Self {
        let mut description = TextInput::new("Description");
        description.set_focused(true);

        Self {
            description,
            amount: TextInput::new("Amount"),
            category: TextInput::new("Category"),
            search: TextInput::new("Search"),
            focus: HomeFocus::Description,
            expenses: Vec::new(),
            selected: 0,
            last_applied_seq: 0,
            editing: None,
            status: HomeStatus::Idle,
            timestamp_format: timestamp_format.into(),
        }
    }

    /// Returns the currently displayed expenses.
    #[must_use]
    pub fn expenses(&self) -> &[Expense] {
        &self.expenses
    }

    /// Returns the current focus target.
    #[must_use]
    pub const fn focus(&self) -> HomeFocus {
        self.focus
    }

    /// Applies a fetched snapshot if it is newer than the last one
    /// shown.
    ///
    /// Returns `false` when the snapshot is stale and was discarded.
    pub fn apply_snapshot(&mut self, snapshot: ExpenseSnapshot) -> bool {
        if snapshot.seq <= self.last_applied_seq {
            return false;
        }

        self.last_applied_seq = snapshot.seq;
        self.expenses = snapshot.expenses;
        if self.selected >= self.expenses.len() {
            self.selected = self.expenses.len().saturating_sub(1);
        }

        true
    }

    /// Marks an in-flight operation on the status line.
    pub fn set_busy(&mut self, message: impl Into<String>) {
        self.status = HomeStatus::Busy(message.into());
    }

    /// Shows an error on the status line.
    pub fn set_error(&mut self, message: impl Into<String>) {
        self.status = HomeStatus::Error(message.into());
    }

    /// Shows a notice on the status line.
    pub fn set_notice(&mut self, message: impl Into<String>) {
        self.status = HomeStatus::Notice(message.into());
    }

    /// Clears the expense form and leaves edit mode.
    pub fn clear_form(&mut self) {
        self.description.clear();
        self.amount.clear();
        self.category.clear();
        self.editing = None;
    }

    fn selected_expense(&self) -> Option<&Expense> {
        self.expenses.get(self.selected)
    }

    fn start_edit(&mut self) {
        let Some(expense) = self.selected_expense() else {
            return;
        };

        let id = expense.id();
        let description = expense.description().to_string();
        let amount = expense.amount().to_string();

        self.editing = Some(id);
        self.description.set_value(description);
        self.amount.set_value(amount);
        self.category.clear();
        self.set_focus(HomeFocus::Description);
        self.set_notice(format!("Editing expense #{id}; Enter saves, Esc cancels"));
    }

    fn set_focus(&mut self, focus: HomeFocus) {
        self.focus = focus;
        self.description
            .set_focused(focus == HomeFocus::Description);
        self.amount.set_focused(focus == HomeFocus::Amount);
        self.category.set_focused(focus == HomeFocus::Category);
        self.search.set_focused(focus == HomeFocus::Search);
    }

    fn submit_form(&mut self) -> HomeAction {
        match self.editing {
            Some(id) => HomeAction::SubmitEdit {
                id,
                description: self.description.value().to_string(),
                amount: self.amount.value().to_string(),
            },
            None => HomeAction::SubmitNew {
                description: self.description.value().to_string(),
                amount: self.amount.value().to_string(),
                category: self.category.value().to_string(),
            },
        }
    }

    fn handle_list_key(&mut self, key: KeyEvent) -> HomeAction {
        match key.code {
            KeyCode::Up => {
                self.selected = self.selected.saturating_sub(1);
                HomeAction::None
            }
            KeyCode::Down => {
                if self.selected + 1 < self.expenses.len() {
                    self.selected += 1;
                }
                HomeAction::None
            }
            KeyCode::Char('d') => match self.selected_expense() {
                Some(expense) => HomeAction::Delete(expense.id()),
                None => HomeAction::None,
            },
            KeyCode::Char('e') => {
                self.start_edit();
                HomeAction::None
            }
            KeyCode::Char('r') => HomeAction::Reload,
            KeyCode::Char('o') => HomeAction::Logout,
            KeyCode::Char('q') => HomeAction::Quit,
            _ => HomeAction::None,
        }
    }

    /// Handles a key event, returning the requested action.
    pub fn handle_key(&mut self, key: KeyEvent) -> HomeAction {
        if is_focus_next(&key) {
            self.set_focus(self.focus.next());
            return HomeAction::None;
        }

        if is_focus_prev(&key) {
            self.set_focus(self.focus.prev());
            return HomeAction::None;
        }

        if key.code == KeyCode::Esc {
            if self.editing.is_some() {
                self.clear_form();
                self.status = HomeStatus::Idle;
                return HomeAction::None;
            }
            return HomeAction::Quit;
        }

        match self.focus {
            HomeFocus::Description | HomeFocus::Amount | HomeFocus::Category => {
                if key.code == KeyCode::Enter {
                    return self.submit_form();
                }

                let field = match self.focus {
                    HomeFocus::Description => &mut self.description,
                    HomeFocus::Amount => &mut self.amount,
                    _ => &mut self.category,
                };
                if field.handle_key(key) && matches!(self.status, HomeStatus::Error(_)) {
                    self.status = HomeStatus::Idle;
                }
                HomeAction::None
            }
            HomeFocus::Search => {
                if key.code == KeyCode::Enter {
                    return HomeAction::Search(self.search.value().to_string());
                }
                self.search.handle_key(key);
                HomeAction::None
            }
            HomeFocus::List => self.handle_list_key(key),
        }
    }

    fn status_line(&self) -> Line<'_> {
        match &self.status {
            HomeStatus::Idle => Line::from(Span::styled(
                "Tab: Focus | Enter: Submit | List: \u{2191}\u{2193} e d r | o: Logout | q: Quit",
                Style::default().fg(Color::DarkGray),
            )),
            HomeStatus::Busy(message) => Line::from(Span::styled(
                message.clone(),
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::ITALIC),
            )),
            HomeStatus::Error(message) => Line::from(Span::styled(
                format!("Error: {message}"),
                Style::default().fg(Color::Red),
            )),
            HomeStatus::Notice(message) => Line::from(Span::styled(
                message.clone(),
                Style::default().fg(Color::Green),
            )),
        }
    }
}

impl Widget for &HomeScreen {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let vertical = Layout::vertical([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Fill(1),
            Constraint::Length(1),
        ]);
        let [form_area, search_area, list_area, status_area] = vertical.areas(area);

        let form = Layout::horizontal([
            Constraint::Fill(2),
            Constraint::Fill(1),
            Constraint::Fill(1),
        ]);
        let [description_area, amount_area, category_area] = form.areas(form_area);

        (&self.description).render(description_area, buf);
        (&self.amount).render(amount_area, buf);
        (&self.category).render(category_area, buf);
        (&self.search).render(search_area, buf);

        ExpenseList::new(
            &self.expenses,
            Some(self.selected),
            &self.timestamp_format,
            self.focus == HomeFocus::List,
        )
        .render(list_area, buf);

        Paragraph::new(self.status_line()).render(status_area, buf);
    }
}
