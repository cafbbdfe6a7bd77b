use ratatui::layout::Rect;
use ratatui::style::Stylize;
use ratatui::text::{Line, Text};
use ratatui::widgets::{Block, Paragraph};
use ratatui::Frame;

/// Game screen: the container the actual game renders into. For now it
/// greets the player read from the session store.
pub fn render(frame: &mut Frame<'_>, area: Rect, name: &str) {
    let greeting = if name.is_empty() {
        "Good luck, player!".to_string()
    } else {
        format!("Good luck, {name}!")
    };

    let body = Text::from(vec![
        Line::default(),
        Line::from(greeting).centered().bold(),
        Line::default(),
        Line::from("Esc: back to home  q: quit").centered().dim(),
    ]);

    frame.render_widget(
        Paragraph::new(body).block(Block::bordered().title("Game")),
        area,
    );
}
