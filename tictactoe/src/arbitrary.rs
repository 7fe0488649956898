use crate::{Board, Symbol, NUM_CELLS};

/// A cell index that is always on the board.
#[derive(Copy, Clone, Debug)]
pub struct CellIndex(pub usize);

impl quickcheck::Arbitrary for CellIndex {
    fn arbitrary(g: &mut quickcheck::Gen) -> Self {
        CellIndex(usize::arbitrary(g) % NUM_CELLS)
    }
}

impl quickcheck::Arbitrary for Symbol {
    fn arbitrary(g: &mut quickcheck::Gen) -> Self {
        *g.choose(&Symbol::ALL).unwrap()
    }
}

impl quickcheck::Arbitrary for Board {
    fn arbitrary(g: &mut quickcheck::Gen) -> Self {
        let mut cells = [None; NUM_CELLS];
        for cell in &mut cells {
            // Roughly a third of the cells stay empty
            *cell = *g.choose(&[None, Some(Symbol::X), Some(Symbol::O)]).unwrap();
        }
        Board::from_cells(cells)
    }
}
