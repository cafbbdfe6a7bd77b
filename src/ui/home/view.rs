use ratatui::layout::{Constraint, Layout, Position, Rect};
use ratatui::style::Stylize;
use ratatui::text::Line;
use ratatui::widgets::{Block, Paragraph};
use ratatui::Frame;

use crate::ui::home::state::HomeFieldState;

/// Home screen: a single name input field with a hint line.
pub fn render(frame: &mut Frame<'_>, area: Rect, state: &HomeFieldState) {
    let [_, title, field, hint, _] = Layout::vertical([
        Constraint::Fill(1),
        Constraint::Length(2),
        Constraint::Length(3),
        Constraint::Length(1),
        Constraint::Fill(1),
    ])
    .areas(area);

    frame.render_widget(Line::from("Welcome").centered().bold(), title);

    let block = Block::bordered().title("Player name");
    let inner = block.inner(field);
    frame.render_widget(Paragraph::new(state.value.as_str()).block(block), field);
    // Keep the cursor inside the box when the value outgrows it.
    frame.set_cursor_position(Position::new(
        inner.x + state.cursor_col().min(inner.width.saturating_sub(1)),
        inner.y,
    ));

    frame.render_widget(
        Line::from("Enter: start game  Esc: quit").centered().dim(),
        hint,
    );
}
