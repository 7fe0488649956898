use ratatui::crossterm::event::{KeyCode, MouseButton, MouseEvent, MouseEventKind};
use tictactoe::{Board, GridController, GridState, Symbol, GRID_WIDTH, NUM_CELLS};
use tracing::debug;

use crate::ui::{ScreenLayout, Target};

/// The view's side of a session: the controller plus a keyboard cursor.
pub struct App {
    controller: GridController,
    /// The cell that Enter/Space toggles.
    pub cursor: usize,
    pub should_quit: bool,
}

impl App {
    pub fn new(default_symbol: Symbol) -> Self {
        Self {
            controller: GridController::with_default_symbol(default_symbol),
            cursor: NUM_CELLS / 2,
            should_quit: false,
        }
    }

    pub fn state(&self) -> GridState {
        self.controller.current_state()
    }

    pub fn handle_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            KeyCode::Char(c @ '1'..='9') => {
                // The digits are laid out like the cells, 1 is the top left one
                let index = c as usize - '1' as usize;
                self.cursor = index;
                self.activate(Target::Cell(index));
            }
            KeyCode::Char(' ') | KeyCode::Enter => self.activate(Target::Cell(self.cursor)),
            KeyCode::Char(c) => {
                if let Ok(symbol) = c.to_string().parse::<Symbol>() {
                    self.activate(Target::Symbol(symbol));
                }
            }
            KeyCode::Up => self.move_cursor(-1, 0),
            KeyCode::Down => self.move_cursor(1, 0),
            KeyCode::Left => self.move_cursor(0, -1),
            KeyCode::Right => self.move_cursor(0, 1),
            _ => {}
        }
    }

    pub fn handle_mouse(&mut self, event: MouseEvent, layout: &ScreenLayout) {
        if event.kind != MouseEventKind::Down(MouseButton::Left) {
            return;
        }
        if let Some(target) = layout.target_at(event.column, event.row) {
            if let Target::Cell(index) = target {
                self.cursor = index;
            }
            self.activate(target);
        }
    }

    fn activate(&mut self, target: Target) {
        match target {
            Target::Cell(index) => {
                // Indices come from the layout, so this cannot fail
                if let Err(err) = self.controller.toggle_cell(index) {
                    debug!("Ignoring click: {}", err);
                }
            }
            Target::Symbol(symbol) => {
                self.controller.select_symbol(symbol);
            }
        }
    }

    fn move_cursor(&mut self, d_row: isize, d_col: isize) {
        let Some((row, col)) = Board::coordinates(self.cursor) else {
            return;
        };
        let wrap = |x: usize, d: isize| (x as isize + d).rem_euclid(GRID_WIDTH as isize) as usize;
        if let Some(index) = Board::index_at(wrap(row, d_row), wrap(col, d_col)) {
            self.cursor = index;
        }
    }
}

#[cfg(test)]
mod tests {
    use ratatui::crossterm::event::KeyModifiers;
    use ratatui::layout::Rect;

    use super::*;

    #[test]
    fn digit_keys_toggle_cells() {
        let mut app = App::new(Symbol::X);
        app.handle_key(KeyCode::Char('5'));
        assert_eq!(app.state().board.get(4).unwrap(), Some(Symbol::X));
        app.handle_key(KeyCode::Char('5'));
        assert!(app.state().board.is_empty());
    }

    #[test]
    fn letter_keys_select_symbols() {
        let mut app = App::new(Symbol::X);
        app.handle_key(KeyCode::Char('o'));
        app.handle_key(KeyCode::Char('1'));
        assert_eq!(app.state().selected, Symbol::O);
        assert_eq!(app.state().board.get(0).unwrap(), Some(Symbol::O));
        // Keys that mean nothing are ignored
        app.handle_key(KeyCode::Char('z'));
        assert_eq!(app.state().selected, Symbol::O);
        assert!(!app.should_quit);
    }

    #[test]
    fn cursor_wraps_around() {
        let mut app = App::new(Symbol::X);
        assert_eq!(app.cursor, 4);
        app.handle_key(KeyCode::Up);
        app.handle_key(KeyCode::Up);
        assert_eq!(app.cursor, 7);
        app.handle_key(KeyCode::Right);
        app.handle_key(KeyCode::Right);
        assert_eq!(app.cursor, 6);
        app.handle_key(KeyCode::Enter);
        assert_eq!(app.state().board.get(6).unwrap(), Some(Symbol::X));
    }

    #[test]
    fn clicks_hit_cells_and_buttons() {
        let layout = ScreenLayout::new(Rect::new(0, 0, 60, 30));
        let mut app = App::new(Symbol::X);

        let button = layout.buttons[1];
        app.handle_mouse(
            MouseEvent {
                kind: MouseEventKind::Down(MouseButton::Left),
                column: button.x + 1,
                row: button.y + 1,
                modifiers: KeyModifiers::NONE,
            },
            &layout,
        );
        assert_eq!(app.state().selected, Symbol::O);

        let cell = layout.cells[3];
        let click = MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column: cell.x + 1,
            row: cell.y + 1,
            modifiers: KeyModifiers::NONE,
        };
        app.handle_mouse(click, &layout);
        assert_eq!(app.state().board.get(3).unwrap(), Some(Symbol::O));
        assert_eq!(app.cursor, 3);

        // Releasing the button does nothing
        app.handle_mouse(
            MouseEvent {
                kind: MouseEventKind::Up(MouseButton::Left),
                ..click
            },
            &layout,
        );
        assert_eq!(app.state().board.num_filled(), 1);
    }

    #[test]
    fn quit_keys() {
        let mut app = App::new(Symbol::X);
        app.handle_key(KeyCode::Esc);
        assert!(app.should_quit);
    }
}
