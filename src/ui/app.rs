use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::router::{Router, ViewId};
use crate::store::SessionStore;
use crate::ui::home::{HomeFieldState, HomeIntent, HomeReducer};
use crate::ui::mvi::Reducer;

/// Application shell: routes key events to the active screen and owns
/// the pieces the screens share.
pub struct App {
    router: Router,
    store: SessionStore,
    /// Home screen name field (MVI pattern).
    home: HomeFieldState,
    should_quit: bool,
}

impl App {
    pub fn new(router: Router, store: SessionStore) -> Self {
        let mut app = Self {
            router,
            store,
            home: HomeFieldState::default(),
            should_quit: false,
        };
        // The field mirrors whatever the store was seeded with.
        let value = app.store.name();
        app.dispatch_home(HomeIntent::Seed { value });
        app
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn current_view(&self) -> ViewId {
        self.router.current_view()
    }

    pub fn current_path(&self) -> &str {
        self.router.current_path()
    }

    pub fn store(&self) -> &SessionStore {
        &self.store
    }

    pub fn home(&self) -> &HomeFieldState {
        &self.home
    }

    pub fn on_tick(&mut self) {}

    pub fn on_resize(&mut self, cols: u16, rows: u16) {
        tracing::debug!(cols, rows, "terminal resized");
    }

    /// Pasted text feeds the name field, character by character, when
    /// the home screen is active. Anywhere else it is dropped.
    pub fn on_paste(&mut self, text: &str) {
        if self.current_view() != ViewId::Home {
            return;
        }
        for c in text.chars() {
            self.dispatch_home(HomeIntent::Insert(c));
        }
    }

    pub fn on_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            self.request_quit();
            return;
        }
        match self.current_view() {
            ViewId::Home => self.on_home_key(key),
            ViewId::Game => self.on_game_key(key),
        }
    }

    fn on_home_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => self.request_quit(),
            KeyCode::Enter => {
                if let Err(err) = self.router.navigate("/game") {
                    tracing::error!(%err, "navigation rejected");
                }
            }
            KeyCode::Backspace => self.dispatch_home(HomeIntent::Backspace),
            KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.dispatch_home(HomeIntent::Clear)
            }
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.dispatch_home(HomeIntent::Insert(c))
            }
            _ => {}
        }
    }

    fn on_game_key(&mut self, key: KeyEvent) {
        match key.code {
            // Back through history; quit when there is nowhere to go.
            KeyCode::Esc => {
                if self.router.back().is_none() {
                    self.request_quit();
                }
            }
            KeyCode::Char('q') => self.request_quit(),
            _ => {}
        }
    }

    /// Run the home reducer, then commit the field to the store. This
    /// is the input binding: every edit is a `set_name`.
    fn dispatch_home(&mut self, intent: HomeIntent) {
        self.home = HomeReducer::reduce(std::mem::take(&mut self.home), intent);
        self.store.set_name(self.home.value.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::router::RouteTable;
    use crossterm::event::KeyEventState;

    fn make_app() -> App {
        let router = Router::new(RouteTable::standard(), "/").expect("standard table has /");
        App::new(router, SessionStore::new())
    }

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::empty(),
            kind: KeyEventKind::Press,
            state: KeyEventState::empty(),
        }
    }

    fn press_ctrl(c: char) -> KeyEvent {
        KeyEvent {
            code: KeyCode::Char(c),
            modifiers: KeyModifiers::CONTROL,
            kind: KeyEventKind::Press,
            state: KeyEventState::empty(),
        }
    }

    fn type_str(app: &mut App, s: &str) {
        for c in s.chars() {
            app.on_key(press(KeyCode::Char(c)));
        }
    }

    // -- startup ----------------------------------------------------------

    #[test]
    fn starts_on_the_home_route() {
        let app = make_app();
        assert_eq!(app.current_path(), "/");
        assert_eq!(app.current_view(), ViewId::Home);
    }

    #[test]
    fn seeded_store_prefills_the_field() {
        let router = Router::new(RouteTable::standard(), "/").expect("standard table has /");
        let store = SessionStore::new();
        store.set_name("Ada");
        let app = App::new(router, store);
        assert_eq!(app.home().value, "Ada");
    }

    // -- name field binding -----------------------------------------------

    #[test]
    fn typing_commits_to_the_store() {
        let mut app = make_app();
        type_str(&mut app, "Ada");
        assert_eq!(app.store().name(), "Ada");
    }

    #[test]
    fn backspace_removes_the_last_char() {
        let mut app = make_app();
        type_str(&mut app, "Ada");
        app.on_key(press(KeyCode::Backspace));
        assert_eq!(app.store().name(), "Ad");
    }

    #[test]
    fn ctrl_u_clears_the_field() {
        let mut app = make_app();
        type_str(&mut app, "Ada");
        app.on_key(press_ctrl('u'));
        assert_eq!(app.store().name(), "");
    }

    #[test]
    fn paste_appends_on_home() {
        let mut app = make_app();
        app.on_paste("Ada");
        assert_eq!(app.store().name(), "Ada");
    }

    #[test]
    fn paste_is_dropped_on_game() {
        let mut app = make_app();
        app.on_key(press(KeyCode::Enter));
        app.on_paste("Ada");
        assert_eq!(app.store().name(), "");
    }

    #[test]
    fn release_events_are_ignored() {
        let mut app = make_app();
        let mut key = press(KeyCode::Char('x'));
        key.kind = KeyEventKind::Release;
        app.on_key(key);
        assert_eq!(app.store().name(), "");
    }

    // -- navigation -------------------------------------------------------

    #[test]
    fn enter_navigates_to_the_game() {
        let mut app = make_app();
        app.on_key(press(KeyCode::Enter));
        assert_eq!(app.current_path(), "/game");
        assert_eq!(app.current_view(), ViewId::Game);
    }

    #[test]
    fn esc_on_game_goes_back_home() {
        let mut app = make_app();
        app.on_key(press(KeyCode::Enter));
        app.on_key(press(KeyCode::Esc));
        assert_eq!(app.current_view(), ViewId::Home);
        assert!(!app.should_quit());
    }

    #[test]
    fn name_survives_a_round_trip() {
        let mut app = make_app();
        type_str(&mut app, "Ada");
        app.on_key(press(KeyCode::Enter));
        app.on_key(press(KeyCode::Esc));
        assert_eq!(app.store().name(), "Ada");
        assert_eq!(app.home().value, "Ada");
    }

    // -- quitting ---------------------------------------------------------

    #[test]
    fn esc_on_home_quits() {
        let mut app = make_app();
        app.on_key(press(KeyCode::Esc));
        assert!(app.should_quit());
    }

    #[test]
    fn q_on_game_quits() {
        let mut app = make_app();
        app.on_key(press(KeyCode::Enter));
        app.on_key(press(KeyCode::Char('q')));
        assert!(app.should_quit());
    }

    #[test]
    fn q_on_home_is_just_a_letter() {
        let mut app = make_app();
        app.on_key(press(KeyCode::Char('q')));
        assert!(!app.should_quit());
        assert_eq!(app.store().name(), "q");
    }

    #[test]
    fn ctrl_c_quits_on_any_screen() {
        let mut app = make_app();
        app.on_key(press(KeyCode::Enter));
        app.on_key(press_ctrl('c'));
        assert!(app.should_quit());
    }

    #[test]
    fn esc_quits_when_game_is_the_start_route() {
        let router = Router::new(RouteTable::standard(), "/game").expect("standard table has /game");
        let mut app = App::new(router, SessionStore::new());
        app.on_key(press(KeyCode::Esc));
        assert!(app.should_quit());
    }
}
