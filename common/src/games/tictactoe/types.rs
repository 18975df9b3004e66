use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mark {
    Empty,
    Human,
    Computer,
}

impl Mark {
    pub fn symbol(&self) -> char {
        match self {
            Mark::Empty => ' ',
            Mark::Human => 'X',
            Mark::Computer => 'O',
        }
    }

    pub fn from_symbol(symbol: char) -> Option<Mark> {
        match symbol {
            ' ' => Some(Mark::Empty),
            'X' => Some(Mark::Human),
            'O' => Some(Mark::Computer),
            _ => None,
        }
    }

    /// Human and Computer trade places, Empty stays Empty.
    pub fn swapped(&self) -> Mark {
        match self {
            Mark::Empty => Mark::Empty,
            Mark::Human => Mark::Computer,
            Mark::Computer => Mark::Human,
        }
    }
}

impl fmt::Display for Mark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Player {
    Human,
    Computer,
}

impl Player {
    pub fn mark(&self) -> Mark {
        match self {
            Player::Human => Mark::Human,
            Player::Computer => Mark::Computer,
        }
    }

    pub fn opponent(&self) -> Player {
        match self {
            Player::Human => Player::Computer,
            Player::Computer => Player::Human,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Converts a 1-based row-major cell number into a position.
    /// Returns `None` when the number falls outside an N×N board.
    pub fn from_cell_number(number: usize, size: usize) -> Option<Self> {
        if number == 0 || number > size * size {
            return None;
        }
        let index = number - 1;
        Some(Self::new(index / size, index % size))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub const MEDIUM_DEPTH: usize = 2;
    pub const HARD_DEPTH: usize = 4;

    /// `None` means the move is picked at random instead of searched.
    pub fn search_depth(&self) -> Option<usize> {
        match self {
            Difficulty::Easy => None,
            Difficulty::Medium => Some(Self::MEDIUM_DEPTH),
            Difficulty::Hard => Some(Self::HARD_DEPTH),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Difficulty {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "easy" => Ok(Difficulty::Easy),
            "medium" => Ok(Difficulty::Medium),
            "hard" => Ok(Difficulty::Hard),
            other => Err(format!("Unknown difficulty: {}", other)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchResult {
    pub best_move: Option<Position>,
    pub score: i32,
}

impl SearchResult {
    pub fn terminal(score: i32) -> Self {
        Self {
            best_move: None,
            score,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    HumanWon,
    ComputerWon,
    Draw,
}

impl GameStatus {
    pub fn is_over(&self) -> bool {
        *self != GameStatus::InProgress
    }
}
