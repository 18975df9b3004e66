use std::io::ErrorKind;
use std::path::PathBuf;

use crate::log;
use super::board::{Board, MAX_BOARD_SIZE, MIN_BOARD_SIZE};
use super::render::{CELL_SEPARATOR, render_board, separator_line};
use super::types::Mark;

pub const DEFAULT_SAVE_FILE: &str = "game.txt";

#[derive(Debug)]
pub enum SaveGameError {
    Io(std::io::Error),
    Malformed { line: usize, reason: String },
}

impl std::fmt::Display for SaveGameError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SaveGameError::Io(e) => write!(f, "IO error: {}", e),
            SaveGameError::Malformed { line, reason } => {
                write!(f, "Malformed save file at line {}: {}", line, reason)
            }
        }
    }
}

impl std::error::Error for SaveGameError {}

impl From<std::io::Error> for SaveGameError {
    fn from(e: std::io::Error) -> Self {
        SaveGameError::Io(e)
    }
}

/// Where a finished game's board is kept between runs.
pub trait SaveGameStore {
    fn save(&self, board: &Board) -> Result<(), SaveGameError>;

    /// `Ok(None)` when there is no saved game.
    fn load(&self) -> Result<Option<Board>, SaveGameError>;
}

pub struct FileSaveGameStore {
    path: PathBuf,
}

impl FileSaveGameStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl SaveGameStore for FileSaveGameStore {
    fn save(&self, board: &Board) -> Result<(), SaveGameError> {
        std::fs::write(&self.path, render_board(board))?;
        log!("Saved {}x{} board to {}", board.size(), board.size(), self.path.display());
        Ok(())
    }

    fn load(&self) -> Result<Option<Board>, SaveGameError> {
        let content = match std::fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                log!("No saved game at {}", self.path.display());
                return Ok(None);
            }
            Err(err) => return Err(err.into()),
        };

        let board = parse_board(&content)?;
        log!("Loaded {}x{} board from {}", board.size(), board.size(), self.path.display());
        Ok(Some(board))
    }
}

/// Parses the rendered board format back into a board. Only line terminators
/// are stripped, since an empty cell is itself a space.
pub fn parse_board(content: &str) -> Result<Board, SaveGameError> {
    let lines: Vec<&str> = content.lines().collect();
    let first = match lines.first() {
        Some(first) if !first.is_empty() => first,
        _ => return Err(malformed(1, "empty save file".to_string())),
    };

    let size = first.split(CELL_SEPARATOR).count();
    if !(MIN_BOARD_SIZE..=MAX_BOARD_SIZE).contains(&size) {
        return Err(malformed(
            1,
            format!(
                "board size must be between {} and {}, found {} cells",
                MIN_BOARD_SIZE, MAX_BOARD_SIZE, size
            ),
        ));
    }
    if lines.len() != size * 2 {
        return Err(malformed(
            lines.len(),
            format!("expected {} lines for a {}x{} board, found {}", size * 2, size, size, lines.len()),
        ));
    }

    let separator = separator_line(size);
    let mut rows = Vec::with_capacity(size);
    for (i, line) in lines.iter().enumerate() {
        let line_number = i + 1;
        if i % 2 == 1 {
            if *line != separator {
                return Err(malformed(line_number, "expected separator line".to_string()));
            }
            continue;
        }
        rows.push(parse_row(line, size, line_number)?);
    }

    Board::from_rows(rows).map_err(|reason| malformed(1, reason))
}

fn parse_row(line: &str, size: usize, line_number: usize) -> Result<Vec<Mark>, SaveGameError> {
    let fields: Vec<&str> = line.split(CELL_SEPARATOR).collect();
    if fields.len() != size {
        return Err(malformed(
            line_number,
            format!("expected {} cells, found {}", size, fields.len()),
        ));
    }

    fields
        .iter()
        .map(|field| {
            let mut chars = field.chars();
            match (chars.next(), chars.next()) {
                (Some(symbol), None) => Mark::from_symbol(symbol)
                    .ok_or_else(|| malformed(line_number, format!("unknown mark '{}'", symbol))),
                _ => Err(malformed(line_number, format!("invalid cell '{}'", field))),
            }
        })
        .collect()
}

fn malformed(line: usize, reason: String) -> SaveGameError {
    SaveGameError::Malformed { line, reason }
}
