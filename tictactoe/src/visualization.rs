use crate::{GridState, GRID_WIDTH};

/// Draws the board as a box with column labels on top and row labels on the
/// left, followed by the selected symbol.
///
/// ```text
///      0 1 2
///    ╭───────╮
///  0 │ X   O │
///  1 │       │
///  2 │   X   │
///    ╰───────╯
///    next: O
/// ```
pub fn visualize_board(state: &GridState) -> String {
    let mut result = String::from("    ");
    for col in 0..GRID_WIDTH {
        result += &format!(" {}", col);
    }
    result += "\n   ╭";
    for _ in 0..GRID_WIDTH {
        result += "──";
    }
    result += "─╮\n";

    for (row, cells) in state.board.rows().enumerate() {
        result += &format!("{:>2} │", row);
        for cell in cells {
            match cell {
                Some(symbol) => result += &format!(" {}", symbol),
                None => result += "  ",
            }
        }
        result += " │\n";
    }

    // Draw the bottom of the box
    result += "   ╰";
    for _ in 0..GRID_WIDTH {
        result += "──";
    }
    result += "─╯\n";
    result += &format!("   next: {}", state.selected);
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{GridState, Symbol};

    #[test]
    fn draws_cells_in_rows() {
        let state = GridState::new(Symbol::X)
            .with_cell_toggled(0)
            .and_then(|s| s.with_symbol_selected(Symbol::O).with_cell_toggled(2))
            .and_then(|s| s.with_symbol_selected(Symbol::X).with_cell_toggled(7))
            .unwrap()
            .with_symbol_selected(Symbol::O);
        let expected = [
            "     0 1 2",
            "   ╭───────╮",
            " 0 │ X   O │",
            " 1 │       │",
            " 2 │   X   │",
            "   ╰───────╯",
            "   next: O",
        ]
        .join("\n");
        assert_eq!(visualize_board(&state), expected);
    }
}
