use crate::games::SessionRng;
use crate::log;
use super::board::Board;
use super::bot_controller::calculate_move;
use super::game_state::TicTacToeGameState;
use super::save_file::{SaveGameError, SaveGameStore};
use super::types::{GameStatus, Player, Position};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    HumanTurn,
    ComputerTurn,
    ComputerMoved(Position),
    HumanWon,
    ComputerWon,
    Draw,
}

#[derive(Debug)]
pub enum GameError {
    IoError(std::io::Error),
    SaveGame(SaveGameError),
    InvalidMove(String),
    NoMoveAvailable,
}

impl std::fmt::Display for GameError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameError::IoError(e) => write!(f, "IO error: {}", e),
            GameError::SaveGame(e) => write!(f, "Save game error: {}", e),
            GameError::InvalidMove(reason) => write!(f, "Invalid move: {}", reason),
            GameError::NoMoveAvailable => write!(f, "Computer has no move available"),
        }
    }
}

impl std::error::Error for GameError {}

impl From<std::io::Error> for GameError {
    fn from(e: std::io::Error) -> Self {
        GameError::IoError(e)
    }
}

impl From<SaveGameError> for GameError {
    fn from(e: SaveGameError) -> Self {
        GameError::SaveGame(e)
    }
}

/// The human side of the game: supplies moves and shows what happens.
pub trait GameFrontend {
    /// Must return a free cell; re-prompting on bad input is up to the frontend.
    fn request_human_move(&mut self, board: &Board) -> Result<Position, GameError>;
    fn show_board(&mut self, board: &Board) -> Result<(), GameError>;
    fn notify(&mut self, event: GameEvent) -> Result<(), GameError>;
}

pub struct TicTacToeGame {
    pub state: TicTacToeGameState,
    rng: SessionRng,
}

impl TicTacToeGame {
    pub fn new(state: TicTacToeGameState, rng: SessionRng) -> Self {
        Self { state, rng }
    }

    /// Plays until someone wins or the board fills up, then persists the
    /// final board. A restored board that is already finished is only
    /// announced and saved again.
    pub fn run<F, S>(&mut self, frontend: &mut F, store: &S) -> Result<GameStatus, GameError>
    where
        F: GameFrontend,
        S: SaveGameStore,
    {
        log!(
            "Starting {}x{} game on {} (seed {})",
            self.state.board.size(),
            self.state.board.size(),
            self.state.difficulty,
            self.rng.seed()
        );

        while !self.state.status.is_over() {
            match self.state.current_player {
                Player::Human => self.play_human_turn(frontend)?,
                Player::Computer => self.play_computer_turn(frontend)?,
            }
        }

        let status = self.state.status;
        frontend.notify(match status {
            GameStatus::HumanWon => GameEvent::HumanWon,
            GameStatus::ComputerWon => GameEvent::ComputerWon,
            _ => GameEvent::Draw,
        })?;
        store.save(&self.state.board)?;
        log!("Game finished: {:?}", status);

        Ok(status)
    }

    fn play_human_turn<F: GameFrontend>(&mut self, frontend: &mut F) -> Result<(), GameError> {
        frontend.notify(GameEvent::HumanTurn)?;
        let pos = frontend.request_human_move(&self.state.board)?;
        self.state
            .place_mark(Player::Human, pos)
            .map_err(GameError::InvalidMove)?;
        log!("Human placed at {:?}", pos);
        frontend.show_board(&self.state.board)
    }

    fn play_computer_turn<F: GameFrontend>(&mut self, frontend: &mut F) -> Result<(), GameError> {
        frontend.notify(GameEvent::ComputerTurn)?;
        let pos = calculate_move(self.state.difficulty, &mut self.state.board, &mut self.rng)
            .ok_or(GameError::NoMoveAvailable)?;
        self.state
            .place_mark(Player::Computer, pos)
            .map_err(GameError::InvalidMove)?;
        frontend.notify(GameEvent::ComputerMoved(pos))?;
        frontend.show_board(&self.state.board)
    }
}
