use ratatui::{prelude::*, widgets::*};
use tictactoe::{GridState, Symbol, GRID_WIDTH, NUM_CELLS};

const CELL_WIDTH: u16 = 7;
const CELL_HEIGHT: u16 = 3;
const GRID_WIDGET_WIDTH: u16 = CELL_WIDTH * GRID_WIDTH as u16;
const GRID_WIDGET_HEIGHT: u16 = CELL_HEIGHT * GRID_WIDTH as u16;

const BUTTON_WIDTH: u16 = 7;
const BUTTON_HEIGHT: u16 = 3;
const BUTTON_GAP: u16 = 3;

const MIN_WIDTH: u16 = GRID_WIDGET_WIDTH;
const MIN_HEIGHT: u16 = 3 + BUTTON_HEIGHT + 1 + GRID_WIDGET_HEIGHT + 2;

const TITLE: &str = "Tic Tac Toe";
const COPYRIGHT: &str = "© 2024 Tic Tac Toe. All rights reserved.";
const KEY_HELP: &str = "1-9 toggle · x/o select · arrows + enter · q quit";

/// Something on the screen that reacts to a click.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Target {
    Cell(usize),
    Symbol(Symbol),
}

/// Where everything goes on the screen.
///
/// Computed from the terminal size alone, so that a mouse click can be
/// mapped back to what was drawn there.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScreenLayout {
    pub title: Rect,
    /// One button per entry of [`Symbol::ALL`], in the same order.
    pub buttons: [Rect; 2],
    /// Indexed like the board.
    pub cells: [Rect; NUM_CELLS],
    pub footer: Rect,
}

impl ScreenLayout {
    pub fn new(area: Rect) -> Self {
        let main_layout = Layout::new(
            Direction::Vertical,
            [
                Constraint::Length(3),
                Constraint::Min(0),
                Constraint::Length(2),
            ],
        )
        .split(area);

        let body = Layout::new(
            Direction::Vertical,
            [
                Constraint::Min(0),
                Constraint::Length(BUTTON_HEIGHT),
                Constraint::Length(1),
                Constraint::Length(GRID_WIDGET_HEIGHT),
                Constraint::Min(0),
            ],
        )
        .split(main_layout[1]);

        let button_row = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Min(0),
                Constraint::Length(BUTTON_WIDTH),
                Constraint::Length(BUTTON_GAP),
                Constraint::Length(BUTTON_WIDTH),
                Constraint::Min(0),
            ])
            .split(body[1]);

        let grid_area = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Min(0),
                Constraint::Length(GRID_WIDGET_WIDTH),
                Constraint::Min(0),
            ])
            .split(body[3])[1];

        let rows = Layout::new(Direction::Vertical, [Constraint::Length(CELL_HEIGHT); GRID_WIDTH])
            .split(grid_area);
        let mut cells = [Rect::default(); NUM_CELLS];
        for (row, row_area) in rows.iter().enumerate() {
            let cols = Layout::new(
                Direction::Horizontal,
                [Constraint::Length(CELL_WIDTH); GRID_WIDTH],
            )
            .split(*row_area);
            for (col, cell_area) in cols.iter().enumerate() {
                cells[row * GRID_WIDTH + col] = *cell_area;
            }
        }

        Self {
            title: main_layout[0],
            buttons: [button_row[1], button_row[3]],
            cells,
            footer: main_layout[2],
        }
    }

    /// What a click at column `x` and row `y` lands on.
    pub fn target_at(&self, x: u16, y: u16) -> Option<Target> {
        if let Some(i) = self.buttons.iter().position(|r| contains(r, x, y)) {
            return Some(Target::Symbol(Symbol::ALL[i]));
        }
        self.cells
            .iter()
            .position(|r| contains(r, x, y))
            .map(Target::Cell)
    }
}

fn contains(rect: &Rect, x: u16, y: u16) -> bool {
    rect.width > 0
        && rect.height > 0
        && x >= rect.x
        && x < rect.x + rect.width
        && y >= rect.y
        && y < rect.y + rect.height
}

fn symbol_color(symbol: Symbol) -> Color {
    match symbol {
        Symbol::X => Color::Blue,
        Symbol::O => Color::Green,
    }
}

struct SymbolButtonsWidget<'a> {
    selected: Symbol,
    buttons: &'a [Rect; 2],
}

impl Widget for SymbolButtonsWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        for (symbol, rect) in Symbol::ALL.into_iter().zip(self.buttons) {
            let rect = rect.intersection(area);
            let mut style = Style::new().fg(symbol_color(symbol));
            if symbol == self.selected {
                style = style.add_modifier(Modifier::REVERSED | Modifier::BOLD);
            }
            Paragraph::new(symbol.to_string())
                .alignment(Alignment::Center)
                .style(style)
                .block(
                    Block::new()
                        .border_type(BorderType::Rounded)
                        .borders(Borders::all()),
                )
                .render(rect, buf);
        }
    }
}

struct GridWidget<'a> {
    state: &'a GridState,
    cursor: usize,
    cells: &'a [Rect; NUM_CELLS],
}

impl Widget for GridWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        for (index, (cell, rect)) in self.state.board.cells().iter().zip(self.cells).enumerate() {
            let rect = rect.intersection(area);
            let border_style = if index == self.cursor {
                Style::new().fg(Color::Yellow)
            } else {
                Style::new().fg(Color::Gray)
            };
            let (text, style) = match cell {
                Some(symbol) => (
                    symbol.to_string(),
                    Style::new()
                        .fg(symbol_color(*symbol))
                        .add_modifier(Modifier::BOLD),
                ),
                None => (String::new(), Style::new()),
            };
            Paragraph::new(text)
                .alignment(Alignment::Center)
                .style(style)
                .block(
                    Block::new()
                        .border_type(BorderType::Rounded)
                        .borders(Borders::all())
                        .border_style(border_style),
                )
                .render(rect, buf);
        }
    }
}

/// Draws one frame from the current state and returns where things ended up.
///
/// Returns `None` if the terminal is too small to show the grid, in which
/// case nothing can be clicked.
pub fn draw(frame: &mut Frame, state: &GridState, cursor: usize) -> Option<ScreenLayout> {
    let area = frame.size();
    if area.width < MIN_WIDTH || area.height < MIN_HEIGHT {
        frame.render_widget(
            Paragraph::new("Terminal too small").wrap(Wrap { trim: true }),
            area,
        );
        return None;
    }
    let layout = ScreenLayout::new(area);

    frame.render_widget(
        Paragraph::new(TITLE)
            .alignment(Alignment::Center)
            .style(Style::new().fg(Color::Yellow).add_modifier(Modifier::BOLD))
            .block(Block::new().borders(Borders::BOTTOM)),
        layout.title,
    );
    frame.render_widget(
        SymbolButtonsWidget {
            selected: state.selected,
            buttons: &layout.buttons,
        },
        area,
    );
    frame.render_widget(
        GridWidget {
            state,
            cursor,
            cells: &layout.cells,
        },
        area,
    );
    frame.render_widget(
        Paragraph::new(vec![Line::from(COPYRIGHT), Line::from(KEY_HELP)])
            .alignment(Alignment::Center)
            .style(Style::new().fg(Color::DarkGray)),
        layout.footer,
    );
    Some(layout)
}
