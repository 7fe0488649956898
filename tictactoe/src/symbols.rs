use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// A marker that can be placed in a cell.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Symbol {
    #[default]
    X,
    O,
}

impl Symbol {
    /// Every symbol a player can select, in the order the controls show them.
    pub const ALL: [Symbol; 2] = [Symbol::X, Symbol::O];

    pub fn as_char(&self) -> char {
        match self {
            Symbol::X => 'X',
            Symbol::O => 'O',
        }
    }
}

impl std::fmt::Display for Symbol {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// The error type for the [`FromStr`] instance of [`Symbol`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SymbolFromStrErr {
    Empty,
    Unrecognized(String),
}

impl std::error::Error for SymbolFromStrErr {}

impl std::fmt::Display for SymbolFromStrErr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SymbolFromStrErr::Empty => write!(f, "No symbol was given"),
            SymbolFromStrErr::Unrecognized(s) => {
                write!(f, "'{}' is not one of the symbols X and O", s)
            }
        }
    }
}

impl FromStr for Symbol {
    type Err = SymbolFromStrErr;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "" => Err(SymbolFromStrErr::Empty),
            "X" | "x" => Ok(Symbol::X),
            "O" | "o" => Ok(Symbol::O),
            other => Err(SymbolFromStrErr::Unrecognized(String::from(other))),
        }
    }
}

/// Shorthand for creating symbols from a string.
///
/// This macro is just calling the [`FromStr`] instance of [`Symbol`].
/// ```
/// # use tictactoe::{symbol, Symbol};
/// assert_eq!(symbol!("O"), Symbol::O);
/// ```
#[macro_export]
macro_rules! symbol {
    ($s:literal) => {
        <$crate::Symbol as std::str::FromStr>::from_str($s)
            .expect("Invalid symbol given to symbol! macro")
    };
}
// The import is for using the macro in other modules, see https://stackoverflow.com/a/31749071/1726797
#[allow(unused_imports)]
pub(crate) use symbol;
