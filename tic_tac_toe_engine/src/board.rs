use serde::{Deserialize, Serialize};
use std::fmt;

use crate::player::Symbol;

pub const CELL_COUNT: usize = 9;

/// Every row, column and diagonal, as row-major cell indices.
pub const WINNING_LINES: [[usize; 3]; 8] = [
    // Rows
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    // Columns
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    // Diagonals
    [0, 4, 8],
    [2, 4, 6],
];

/// The 3x3 grid, stored row-major: cells 0-2 are the top row, 6-8 the bottom.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    cells: [Option<Symbol>; CELL_COUNT],
}

impl Board {
    pub fn new() -> Self {
        Self::default()
    }

    /// `None` for an out-of-range index as well as for an empty cell; use
    /// [`Board::is_empty_at`] or check the index first if the two matter.
    pub fn get(&self, index: usize) -> Option<Symbol> {
        self.cells.get(index).copied().flatten()
    }

    pub fn cells(&self) -> &[Option<Symbol>; CELL_COUNT] {
        &self.cells
    }

    pub fn is_empty_at(&self, index: usize) -> bool {
        matches!(self.cells.get(index), Some(None))
    }

    /// Writes `symbol` into an empty cell. Returns `false` and leaves the
    /// board alone if the cell is taken or the index is out of range.
    pub(crate) fn place(&mut self, index: usize, symbol: Symbol) -> bool {
        match self.cells.get_mut(index) {
            Some(cell @ None) => {
                *cell = Some(symbol);
                true
            }
            _ => false,
        }
    }

    pub(crate) fn clear(&mut self) {
        self.cells = [None; CELL_COUNT];
    }

    pub fn occupied(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_some()).count()
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|cell| cell.is_some())
    }

    /// Symbol owning the first complete line found, if any.
    pub fn winner(&self) -> Option<Symbol> {
        WINNING_LINES.iter().find_map(|&[a, b, c]| {
            let symbol = self.cells[a]?;
            (self.cells[b] == Some(symbol) && self.cells[c] == Some(symbol)).then_some(symbol)
        })
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (row, cells) in self.cells.chunks(3).enumerate() {
            if row > 0 {
                writeln!(f)?;
            }
            let line: Vec<String> = cells
                .iter()
                .map(|cell| cell.map_or_else(|| "_".to_string(), |s| s.to_string()))
                .collect();
            write!(f, "{}", line.join(" "))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_from(marks: &[(usize, Symbol)]) -> Board {
        let mut board = Board::new();
        for &(index, symbol) in marks {
            assert!(board.place(index, symbol));
        }
        board
    }

    #[test]
    fn empty_board_has_no_winner() {
        let board = Board::new();
        assert_eq!(board.winner(), None);
        assert!(!board.is_full());
        assert_eq!(board.occupied(), 0);
    }

    #[test]
    fn every_line_is_detected() {
        for line in WINNING_LINES {
            let board = board_from(&line.map(|i| (i, Symbol::O)));
            assert_eq!(board.winner(), Some(Symbol::O), "line {line:?}");
        }
    }

    #[test]
    fn mixed_line_is_not_a_win() {
        let board = board_from(&[(0, Symbol::X), (1, Symbol::O), (2, Symbol::X)]);
        assert_eq!(board.winner(), None);
    }

    #[test]
    fn place_refuses_occupied_and_out_of_range() {
        let mut board = Board::new();
        assert!(board.place(4, Symbol::X));
        assert!(!board.place(4, Symbol::O));
        assert_eq!(board.get(4), Some(Symbol::X));
        assert!(!board.place(CELL_COUNT, Symbol::O));
        assert_eq!(board.occupied(), 1);
    }

    #[test]
    fn is_empty_at_is_false_outside_the_grid() {
        let board = Board::new();
        assert!(board.is_empty_at(8));
        assert!(!board.is_empty_at(9));
    }

    #[test]
    fn full_board_is_detected() {
        // X O X / X O O / O X X
        let layout = [
            Symbol::X,
            Symbol::O,
            Symbol::X,
            Symbol::X,
            Symbol::O,
            Symbol::O,
            Symbol::O,
            Symbol::X,
            Symbol::X,
        ];
        let marks: Vec<_> = layout.into_iter().enumerate().collect();
        let board = board_from(&marks);
        assert!(board.is_full());
        assert_eq!(board.winner(), None);
    }

    #[test]
    fn clear_empties_every_cell() {
        let mut board = board_from(&[(0, Symbol::X), (8, Symbol::O)]);
        board.clear();
        assert_eq!(board, Board::new());
    }

    #[test]
    fn display_renders_rows() {
        let board = board_from(&[(0, Symbol::X), (4, Symbol::O)]);
        assert_eq!(board.to_string(), "X _ _\n_ O _\n_ _ _");
    }
}
