use super::board::{Board, MAX_BOARD_SIZE, MIN_BOARD_SIZE};
use super::types::{Difficulty, Position};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    NotANumber,
    BoardTooSmall,
    BoardTooLarge,
    UnknownDifficulty,
    InvalidCell,
}

impl std::fmt::Display for InputError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InputError::NotANumber => write!(f, "Please enter a valid number."),
            InputError::BoardTooSmall => write!(
                f,
                "The size of the playing field must be at least {}.",
                MIN_BOARD_SIZE
            ),
            InputError::BoardTooLarge => write!(
                f,
                "The size of the playing field must be at most {}.",
                MAX_BOARD_SIZE
            ),
            InputError::UnknownDifficulty => write!(f, "Invalid game level. Try again."),
            InputError::InvalidCell => write!(f, "The selected location is not valid. Try again."),
        }
    }
}

impl std::error::Error for InputError {}

pub fn parse_board_size(text: &str) -> Result<usize, InputError> {
    let size: usize = text.trim().parse().map_err(|_| InputError::NotANumber)?;
    if size < MIN_BOARD_SIZE {
        return Err(InputError::BoardTooSmall);
    }
    if size > MAX_BOARD_SIZE {
        return Err(InputError::BoardTooLarge);
    }
    Ok(size)
}

pub fn parse_difficulty(text: &str) -> Result<Difficulty, InputError> {
    text.parse().map_err(|_| InputError::UnknownDifficulty)
}

pub fn parse_yes_no(text: &str) -> bool {
    matches!(text.trim().to_lowercase().as_str(), "yes" | "y")
}

/// Maps a 1-based row-major cell number to a free cell on the board.
pub fn parse_cell_index(board: &Board, text: &str) -> Result<Position, InputError> {
    let number: i64 = text.trim().parse().map_err(|_| InputError::NotANumber)?;
    let number = usize::try_from(number).map_err(|_| InputError::InvalidCell)?;
    let pos = Position::from_cell_number(number, board.size()).ok_or(InputError::InvalidCell)?;
    if !board.is_valid_move(pos) {
        return Err(InputError::InvalidCell);
    }
    Ok(pos)
}
