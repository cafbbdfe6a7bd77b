//! Terminal UI shell: screens, event loop, and the terminal mount.

pub mod app;
pub mod events;
pub mod game;
pub mod home;
pub mod mvi;
mod terminal;

use std::time::Duration;

use ratatui::layout::{Constraint, Layout};
use ratatui::style::Stylize;
use ratatui::text::Line;
use ratatui::Frame;

use crate::router::{Router, ViewId};
use crate::store::SessionStore;
use crate::ui::app::App;
use crate::ui::events::{AppEvent, EventHandler};

/// Synchronous draw/event loop. Input arrives over the event channel;
/// every dispatch runs to completion before the next draw.
pub fn run(router: Router, store: SessionStore, tick_rate: Duration) -> anyhow::Result<()> {
    let (mut terminal, guard) = terminal::setup()?;
    let mut app = App::new(router, store);
    let events = EventHandler::new(tick_rate);

    loop {
        terminal.draw(|frame| draw(frame, &app))?;
        if app.should_quit() {
            break;
        }

        match events.next(tick_rate) {
            Ok(AppEvent::Key(key)) => app.on_key(key),
            Ok(AppEvent::Paste(text)) => app.on_paste(&text),
            Ok(AppEvent::Resize(cols, rows)) => app.on_resize(cols, rows),
            Ok(AppEvent::Tick) => app.on_tick(),
            Err(std::sync::mpsc::RecvTimeoutError::Timeout) => {}
            Err(std::sync::mpsc::RecvTimeoutError::Disconnected) => break,
        }
    }

    drop(guard);
    Ok(())
}

fn draw(frame: &mut Frame<'_>, app: &App) {
    let [header, body] =
        Layout::vertical([Constraint::Length(1), Constraint::Fill(1)]).areas(frame.area());

    frame.render_widget(
        Line::from(format!(" gameshell {}", app.current_path())).dim(),
        header,
    );

    match app.current_view() {
        ViewId::Home => home::render(frame, body, app.home()),
        ViewId::Game => game::render(frame, body, &app.store().name()),
    }
}
