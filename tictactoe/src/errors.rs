use crate::{SymbolFromStrErr, NUM_CELLS};

/// The error type for the two grid transitions.
///
/// The presentation layer only ever produces valid input, so getting one of
/// these back means the caller has a bug. The transition that caused it had
/// no effect.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GridError {
    CellOutOfBounds { index: usize },
    UnknownSymbol(SymbolFromStrErr),
}

impl std::error::Error for GridError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            GridError::UnknownSymbol(err) => Some(err),
            _ => None,
        }
    }
}

impl std::fmt::Display for GridError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GridError::CellOutOfBounds { index } => write!(
                f,
                "Cell index {} is outside of the board, which has cells 0 to {}",
                index,
                NUM_CELLS - 1
            ),
            GridError::UnknownSymbol(_) => write!(f, "Tried to select an unknown symbol"),
        }
    }
}

impl From<SymbolFromStrErr> for GridError {
    fn from(err: SymbolFromStrErr) -> Self {
        GridError::UnknownSymbol(err)
    }
}
