//! Expense list widget.

use chrono::DateTime;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, StatefulWidget, Widget},
};

use crate::domain::entities::Expense;

/// Literal shown when the server returns no expenses.
pub const EMPTY_STATE_TEXT: &str = "No expenses yet.";

/// Formats a server timestamp for display.
///
/// The server sends RFC 3339; anything that does not parse is shown
/// verbatim rather than dropped.
#[must_use]
pub fn format_timestamp(raw: &str, format: &str) -> String {
    DateTime::parse_from_rfc3339(raw)
        .map(|timestamp| timestamp.format(format).to_string())
        .unwrap_or_else(|_| raw.to_string())
}

/// Formats one expense row.
///
/// Rows render description, amount, category and the formatted
/// timestamp in server-provided order; the list never re-sorts.
#[must_use]
pub fn format_expense_line(expense: &Expense, timestamp_format: &str) -> String {
    format!(
        "{} | {} | {} | {}",
        expense.description(),
        expense.amount(),
        expense.category(),
        format_timestamp(expense.created_at(), timestamp_format),
    )
}

/// Renders the expense list, or the empty-state line when there is
/// nothing to show.
pub struct ExpenseList<'a> {
    expenses: &'a [Expense],
    selected: Option<usize>,
    timestamp_format: &'a str,
    focused: bool,
}

impl<'a> ExpenseList<'a> {
    /// Creates a list over the given expenses.
    #[must_use]
    pub const fn new(
        expenses: &'a [Expense],
        selected: Option<usize>,
        timestamp_format: &'a str,
        focused: bool,
    ) -> Self {
        Self {
            expenses,
            selected,
            timestamp_format,
            focused,
        }
    }

    fn block(&self) -> Block<'static> {
        let border_style = if self.focused {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default().fg(Color::Gray)
        };

        Block::default()
            .borders(Borders::ALL)
            .border_style(border_style)
            .title(" Expenses ")
    }
}

impl Widget for ExpenseList<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = self.block();

        if self.expenses.is_empty() {
            let inner = block.inner(area);
            block.render(area, buf);
            Paragraph::new(EMPTY_STATE_TEXT)
                .style(Style::default().fg(Color::DarkGray))
                .render(inner, buf);
            return;
        }

        let items: Vec<ListItem<'_>> = self
            .expenses
            .iter()
            .map(|expense| ListItem::new(format_expense_line(expense, self.timestamp_format)))
            .collect();

        let list = List::new(items).block(block).highlight_style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        );

        let mut state = ListState::default();
        state.select(self.selected.filter(|_| self.focused));

        StatefulWidget::render(list, area, buf, &mut state);
    }
}
