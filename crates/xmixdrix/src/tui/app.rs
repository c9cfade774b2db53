//! Application state and input handling.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::Rect;
use tracing::{debug, info};
use xmixdrix_tictactoe::{GameState, Position, apply_move, reset};

use super::{input, ui};
use crate::config::Config;

/// What the event loop should do after an input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    /// Keep running.
    Continue,
    /// Leave the UI.
    Quit,
}

/// Main application state.
///
/// Owns the one live [`GameState`]; every change goes through the engine.
#[derive(Debug)]
pub struct App {
    state: GameState,
    cursor: Position,
    config: Config,
}

impl App {
    /// Creates an application with a fresh game.
    pub fn new(config: Config) -> Self {
        Self {
            state: reset(),
            cursor: Position::Center,
            config,
        }
    }

    /// Gets the current game state.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Gets the keyboard cursor.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Gets the configuration.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Plays at `index` for the current player.
    pub fn play(&mut self, index: usize) {
        self.state = apply_move(&self.state, index);
    }

    /// Starts a new game.
    pub fn new_game(&mut self) {
        info!("Starting new game");
        self.state = reset();
    }

    /// Handles a key press.
    pub fn handle_key(&mut self, key: KeyEvent) -> Control {
        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                return Control::Quit;
            }
            KeyCode::Char('q') | KeyCode::Esc => return Control::Quit,
            KeyCode::Char('n') | KeyCode::Char('r') => self.new_game(),
            KeyCode::Enter | KeyCode::Char(' ') => self.play(self.cursor.to_index()),
            KeyCode::Char(c) => {
                if let Some(index) = input::digit_index(c) {
                    self.select_and_play(index);
                }
            }
            code => self.cursor = input::move_cursor(self.cursor, code),
        }
        Control::Continue
    }

    /// Handles a mouse event against the cell areas of the last frame.
    pub fn handle_mouse(&mut self, mouse: MouseEvent, cells: &[Rect; 9]) {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return;
        }
        match ui::cell_at(cells, mouse.column, mouse.row) {
            Some(index) => self.select_and_play(index),
            None => debug!(column = mouse.column, row = mouse.row, "Click outside board"),
        }
    }

    fn select_and_play(&mut self, index: usize) {
        if let Some(pos) = Position::from_index(index) {
            self.cursor = pos;
        }
        self.play(index);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use xmixdrix_tictactoe::{Cell, Outcome, Player};

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn click(column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    #[test]
    fn test_digits_play_cells() {
        let mut app = App::new(Config::default());
        for c in ['1', '4', '2', '5', '3'] {
            assert_eq!(app.handle_key(key(KeyCode::Char(c))), Control::Continue);
        }
        assert_eq!(app.state().outcome(), Outcome::Win(Player::X));
        assert_eq!(app.cursor(), Position::TopRight);
    }

    #[test]
    fn test_cursor_then_enter() {
        let mut app = App::new(Config::default());
        app.handle_key(key(KeyCode::Up));
        app.handle_key(key(KeyCode::Left));
        app.handle_key(key(KeyCode::Enter));
        assert_eq!(app.state().board().get(0), Some(Cell::Occupied(Player::X)));
        app.handle_key(key(KeyCode::Char(' ')));
        assert_eq!(app.state().current_player(), Player::O);
    }

    #[test]
    fn test_new_game_resets() {
        let mut app = App::new(Config::default());
        app.handle_key(key(KeyCode::Char('5')));
        app.handle_key(key(KeyCode::Char('n')));
        assert_eq!(app.state(), &reset());
    }

    #[test]
    fn test_play_after_win_is_ignored() {
        let mut app = App::new(Config::default());
        for index in [0, 3, 1, 4, 2] {
            app.play(index);
        }
        let won = app.state().clone();
        app.play(8);
        assert_eq!(app.state(), &won);
        app.new_game();
        assert_eq!(app.state(), &reset());
    }

    #[test]
    fn test_quit_keys() {
        let mut app = App::new(Config::default());
        assert_eq!(app.handle_key(key(KeyCode::Char('q'))), Control::Quit);
        assert_eq!(app.handle_key(key(KeyCode::Esc)), Control::Quit);
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(app.handle_key(ctrl_c), Control::Quit);
    }

    #[test]
    fn test_click_plays_cell() {
        let mut app = App::new(Config::default());
        let cells = ui::board_cells(Rect::new(0, 0, 80, 24));
        let target = cells[7];
        app.handle_mouse(click(target.x + 1, target.y + 1), &cells);
        assert_eq!(app.state().board().get(7), Some(Cell::Occupied(Player::X)));
        assert_eq!(app.cursor(), Position::BottomCenter);

        app.handle_mouse(click(0, 0), &cells);
        assert_eq!(app.state().current_player(), Player::O);
    }
}
