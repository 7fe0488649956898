use serde::{Deserialize, Serialize};

use crate::{Board, GridState, Symbol};

/// A request from a view to the grid, one per user interaction.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Request {
    /// A click on the cell with this index.
    ///
    /// The response is a [`Response::State`], or [`Response::Rejected`] if the
    /// index is not between 0 and 8.
    ToggleCell { index: usize },
    /// A click on the control for this symbol.
    ///
    /// The symbol is kept as text so that unknown symbols can be rejected
    /// with a [`Response::Rejected`] instead of failing to parse the request.
    SelectSymbol { symbol: String },
    /// Asks for the current state without changing it.
    CurrentState,
    /// Ends the session. There is no response.
    Bye,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Response {
    State {
        board: Board,
        selected: Symbol,
    },
    /// The request had no effect.
    Rejected { reason: String },
}

impl From<GridState> for Response {
    fn from(state: GridState) -> Response {
        Response::State {
            board: state.board,
            selected: state.selected,
        }
    }
}
