use std::ops::{Deref, DerefMut};

use super::types::{Mark, Position};

pub const MIN_BOARD_SIZE: usize = 3;
pub const MAX_BOARD_SIZE: usize = 20;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    size: usize,
    cells: Vec<Vec<Mark>>,
}

impl Board {
    pub fn new(size: usize) -> Self {
        Self {
            size,
            cells: vec![vec![Mark::Empty; size]; size],
        }
    }

    pub fn from_rows(rows: Vec<Vec<Mark>>) -> Result<Self, String> {
        let size = rows.len();
        if !(MIN_BOARD_SIZE..=MAX_BOARD_SIZE).contains(&size) {
            return Err(format!(
                "Board size must be between {} and {}, got {}",
                MIN_BOARD_SIZE, MAX_BOARD_SIZE, size
            ));
        }
        if let Some((y, row)) = rows.iter().enumerate().find(|(_, row)| row.len() != size) {
            return Err(format!(
                "Row {} has {} cells, expected {}",
                y,
                row.len(),
                size
            ));
        }
        Ok(Self { size, cells: rows })
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn rows(&self) -> &[Vec<Mark>] {
        &self.cells
    }

    pub fn get(&self, pos: Position) -> Mark {
        self.cells[pos.row][pos.col]
    }

    /// Unchecked write; callers make sure the cell is free.
    pub fn set(&mut self, pos: Position, mark: Mark) {
        self.cells[pos.row][pos.col] = mark;
    }

    pub fn is_valid_move(&self, pos: Position) -> bool {
        pos.row < self.size && pos.col < self.size && self.get(pos) == Mark::Empty
    }

    pub fn is_full(&self) -> bool {
        self.cells
            .iter()
            .all(|row| row.iter().all(|&cell| cell != Mark::Empty))
    }

    pub fn empty_cells(&self) -> Vec<Position> {
        let mut moves = Vec::new();
        for (y, row) in self.cells.iter().enumerate() {
            for (x, &cell) in row.iter().enumerate() {
                if cell == Mark::Empty {
                    moves.push(Position::new(y, x));
                }
            }
        }
        moves
    }

    /// Places `mark` until the returned guard is dropped, then empties the cell again.
    pub fn place_scoped(&mut self, pos: Position, mark: Mark) -> ScopedMark<'_> {
        self.set(pos, mark);
        ScopedMark { board: self, pos }
    }
}

pub struct ScopedMark<'a> {
    board: &'a mut Board,
    pos: Position,
}

impl Deref for ScopedMark<'_> {
    type Target = Board;

    fn deref(&self) -> &Board {
        self.board
    }
}

impl DerefMut for ScopedMark<'_> {
    fn deref_mut(&mut self) -> &mut Board {
        self.board
    }
}

impl Drop for ScopedMark<'_> {
    fn drop(&mut self) {
        self.board.set(self.pos, Mark::Empty);
    }
}

#[cfg(test)]
pub(crate) fn board_from_symbols(rows: &[&str]) -> Board {
    let rows = rows
        .iter()
        .map(|row| {
            row.chars()
                .map(|c| Mark::from_symbol(if c == '.' { ' ' } else { c }).unwrap())
                .collect()
        })
        .collect();
    Board::from_rows(rows).unwrap()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::new(4);
        assert_eq!(board.size(), 4);
        assert_eq!(board.empty_cells().len(), 16);
        assert!(!board.is_full());
    }

    #[test]
    fn test_empty_cells_row_major_order() {
        let board = board_from_symbols(&["X.O", "O.X", "..X"]);
        assert_eq!(
            board.empty_cells(),
            vec![
                Position::new(0, 1),
                Position::new(1, 1),
                Position::new(2, 0),
                Position::new(2, 1),
            ]
        );
    }

    #[test]
    fn test_full_board() {
        let board = board_from_symbols(&["XOX", "XOO", "OXX"]);
        assert!(board.is_full());
        assert!(board.empty_cells().is_empty());
    }

    #[test]
    fn test_is_valid_move() {
        let board = board_from_symbols(&["X..", "...", "..O"]);
        assert!(board.is_valid_move(Position::new(0, 1)));
        assert!(!board.is_valid_move(Position::new(0, 0)));
        assert!(!board.is_valid_move(Position::new(2, 2)));
        assert!(!board.is_valid_move(Position::new(3, 0)));
        assert!(!board.is_valid_move(Position::new(0, 3)));
    }

    #[test]
    fn test_from_rows_rejects_bad_shapes() {
        assert!(Board::from_rows(vec![vec![Mark::Empty; 2]; 2]).is_err());
        assert!(Board::from_rows(vec![vec![Mark::Empty; 4]; 3]).is_err());
        assert!(Board::from_rows(vec![vec![Mark::Empty; 21]; 21]).is_err());
    }

    #[test]
    fn test_scoped_mark_reverts_on_drop() {
        let mut board = Board::new(3);
        let pos = Position::new(1, 2);
        {
            let placed = board.place_scoped(pos, Mark::Computer);
            assert_eq!(placed.get(pos), Mark::Computer);
            assert_eq!(placed.empty_cells().len(), 8);
        }
        assert_eq!(board.get(pos), Mark::Empty);
        assert_eq!(board, Board::new(3));
    }

    #[test]
    fn test_nested_scoped_marks() {
        let mut board = Board::new(3);
        {
            let mut outer = board.place_scoped(Position::new(0, 0), Mark::Human);
            {
                let inner = outer.place_scoped(Position::new(1, 1), Mark::Computer);
                assert_eq!(inner.empty_cells().len(), 7);
            }
            assert_eq!(outer.get(Position::new(1, 1)), Mark::Empty);
            assert_eq!(outer.get(Position::new(0, 0)), Mark::Human);
        }
        assert_eq!(board, Board::new(3));
    }
}
