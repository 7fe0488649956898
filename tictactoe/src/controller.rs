use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::{Board, GridError, Symbol};

/// Everything the presentation layer needs to draw the grid.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridState {
    pub board: Board,
    /// The symbol the next toggle of an empty cell places.
    pub selected: Symbol,
}

impl GridState {
    /// An empty board with `selected` as the current symbol.
    pub fn new(selected: Symbol) -> Self {
        Self {
            board: Board::empty(),
            selected,
        }
    }

    /// Clears the cell at `index` if it is filled, otherwise fills it with
    /// the selected symbol.
    ///
    /// Neighbouring cells are never looked at; there is no notion of turns or
    /// of a game being over.
    pub fn with_cell_toggled(&self, index: usize) -> Result<GridState, GridError> {
        Ok(GridState {
            board: self.board.toggled(index, self.selected)?,
            selected: self.selected,
        })
    }

    /// Cells that are already filled keep their symbol.
    pub fn with_symbol_selected(&self, symbol: Symbol) -> GridState {
        GridState {
            board: self.board,
            selected: symbol,
        }
    }
}

type Listener = Box<dyn FnMut(&GridState)>;

/// Owns the state of one interactive session and applies the transitions
/// requested by the view.
///
/// Every successful transition is announced to the subscribed listeners.
/// A rejected transition leaves the state alone and announces nothing.
pub struct GridController {
    state: GridState,
    listeners: Vec<Listener>,
}

impl Default for GridController {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for GridController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GridController")
            .field("state", &self.state)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

impl GridController {
    /// Starts a session with an empty board and [`Symbol::default()`] selected.
    pub fn new() -> Self {
        Self::with_default_symbol(Symbol::default())
    }

    pub fn with_default_symbol(symbol: Symbol) -> Self {
        Self {
            state: GridState::new(symbol),
            listeners: Vec::new(),
        }
    }

    pub fn current_state(&self) -> GridState {
        self.state
    }

    /// Registers a callback that is run with the new state after every
    /// successful transition.
    pub fn subscribe(&mut self, listener: impl FnMut(&GridState) + 'static) {
        self.listeners.push(Box::new(listener));
    }

    pub fn toggle_cell(&mut self, index: usize) -> Result<GridState, GridError> {
        match self.state.with_cell_toggled(index) {
            Ok(state) => {
                debug!(index, cell = ?state.board.get(index).ok().flatten(), "Toggled cell");
                self.replace_state(state);
                Ok(state)
            }
            Err(err) => {
                warn!(index, "Rejected toggle: {}", err);
                Err(err)
            }
        }
    }

    pub fn select_symbol(&mut self, symbol: Symbol) -> GridState {
        debug!(%symbol, "Selected symbol");
        let state = self.state.with_symbol_selected(symbol);
        self.replace_state(state);
        state
    }

    /// Like [`Self::select_symbol()`], for symbols that arrive as text.
    pub fn select_symbol_str(&mut self, symbol: &str) -> Result<GridState, GridError> {
        match symbol.parse::<Symbol>() {
            Ok(symbol) => Ok(self.select_symbol(symbol)),
            Err(err) => {
                warn!("Rejected symbol selection: {}", err);
                Err(err.into())
            }
        }
    }

    fn replace_state(&mut self, state: GridState) {
        self.state = state;
        for listener in &mut self.listeners {
            listener(&self.state);
        }
    }
}
