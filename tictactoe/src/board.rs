use serde::{Deserialize, Serialize};

use crate::{GridError, Symbol};

/// The number of cells in a row or column.
pub const GRID_WIDTH: usize = 3;

/// The number of cells on the board.
pub const NUM_CELLS: usize = GRID_WIDTH * GRID_WIDTH;

/// The 3×3 playing board.
///
/// Cells are indexed 0 to 8 in row-major order, i.e. index 0 is the top left
/// cell, index 2 the top right one, and index 8 the bottom right one.
///
/// Boards are plain values: changing one produces a new board.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Board {
    /// `None` is an empty cell.
    cells: [Option<Symbol>; NUM_CELLS],
}

impl Board {
    /// A board on which every cell is empty.
    pub fn empty() -> Self {
        Self {
            cells: [None; NUM_CELLS],
        }
    }

    pub fn from_cells(cells: [Option<Symbol>; NUM_CELLS]) -> Self {
        Self { cells }
    }

    pub fn cells(&self) -> &[Option<Symbol>; NUM_CELLS] {
        &self.cells
    }

    /// The content of a single cell.
    pub fn get(&self, index: usize) -> Result<Option<Symbol>, GridError> {
        self.cells
            .get(index)
            .copied()
            .ok_or(GridError::CellOutOfBounds { index })
    }

    /// Returns the board with the cell at `index` toggled.
    ///
    /// A filled cell is cleared, no matter which symbol it holds. An empty cell
    /// is filled with `symbol`. All other cells stay the same.
    pub fn toggled(&self, index: usize, symbol: Symbol) -> Result<Board, GridError> {
        let mut cells = self.cells;
        let cell = cells
            .get_mut(index)
            .ok_or(GridError::CellOutOfBounds { index })?;
        *cell = match *cell {
            Some(_) => None,
            None => Some(symbol),
        };
        Ok(Board { cells })
    }

    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(Option::is_none)
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(Option::is_some)
    }

    /// How many cells hold a symbol.
    pub fn num_filled(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }

    /// The cells grouped into rows, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Option<Symbol>]> + '_ {
        self.cells.chunks(GRID_WIDTH)
    }

    /// The index of the cell in row `row` and column `col`, both counted from 0.
    pub fn index_at(row: usize, col: usize) -> Option<usize> {
        (row < GRID_WIDTH && col < GRID_WIDTH).then_some(row * GRID_WIDTH + col)
    }

    /// The inverse of [`Self::index_at()`].
    pub fn coordinates(index: usize) -> Option<(usize, usize)> {
        (index < NUM_CELLS).then_some((index / GRID_WIDTH, index % GRID_WIDTH))
    }
}

#[cfg(test)]
mod tests {
    use quickcheck::quickcheck;

    use super::*;
    use crate::arbitrary::CellIndex;

    quickcheck! {
        fn toggling_twice_restores_board(board: Board, index: CellIndex, symbol: Symbol) -> bool {
            let once = board.toggled(index.0, symbol).unwrap();
            once.toggled(index.0, symbol).unwrap() == board
        }

        fn toggling_changes_exactly_one_cell(board: Board, index: CellIndex, symbol: Symbol) -> bool {
            let toggled = board.toggled(index.0, symbol).unwrap();
            (0..NUM_CELLS).all(|j| {
                let changed = board.get(j).unwrap() != toggled.get(j).unwrap();
                changed == (j == index.0)
            })
        }

        fn filling_uses_the_given_symbol(board: Board, index: CellIndex, symbol: Symbol) -> bool {
            let toggled = board.toggled(index.0, symbol).unwrap();
            match board.get(index.0).unwrap() {
                Some(_) => toggled.get(index.0).unwrap().is_none(),
                None => toggled.get(index.0).unwrap() == Some(symbol),
            }
        }

        fn out_of_bounds_is_rejected(board: Board, offset: u8, symbol: Symbol) -> bool {
            let index = NUM_CELLS + offset as usize;
            board.toggled(index, symbol) == Err(GridError::CellOutOfBounds { index })
        }

        fn coordinates_roundtrip(index: CellIndex) -> bool {
            let (row, col) = Board::coordinates(index.0).unwrap();
            Board::index_at(row, col) == Some(index.0)
        }
    }

    #[test]
    fn clearing_ignores_which_symbol_is_in_the_cell() {
        let board = Board::empty().toggled(3, Symbol::O).unwrap();
        let cleared = board.toggled(3, Symbol::X).unwrap();
        assert!(cleared.is_empty());
    }

    #[test]
    fn row_major_layout() {
        let board = Board::empty()
            .toggled(1, Symbol::X)
            .unwrap()
            .toggled(5, Symbol::O)
            .unwrap();
        let rows: Vec<&[Option<Symbol>]> = board.rows().collect();
        assert_eq!(rows.len(), GRID_WIDTH);
        assert_eq!(rows[0], &[None, Some(Symbol::X), None]);
        assert_eq!(rows[1], &[None, None, Some(Symbol::O)]);
        assert_eq!(rows[2], &[None, None, None]);
        assert_eq!(Board::index_at(1, 2), Some(5));
        assert_eq!(Board::index_at(3, 0), None);
        assert_eq!(Board::coordinates(9), None);
    }

    #[test]
    fn counts() {
        let mut board = Board::empty();
        assert!(board.is_empty());
        assert_eq!(board.num_filled(), 0);
        for index in 0..NUM_CELLS {
            board = board.toggled(index, Symbol::X).unwrap();
        }
        assert!(board.is_full());
        assert_eq!(board.num_filled(), NUM_CELLS);
    }

    #[test]
    fn json_is_an_array_of_nine() {
        let board = Board::empty().toggled(0, Symbol::O).unwrap();
        let json = serde_json::to_string(&board).unwrap();
        assert_eq!(json, r#"["O",null,null,null,null,null,null,null,null]"#);
        assert_eq!(serde_json::from_str::<Board>(&json).unwrap(), board);
        assert!(serde_json::from_str::<Board>("[null,null]").is_err());
    }
}
