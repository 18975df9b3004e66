use super::board::Board;
use super::types::{Difficulty, GameStatus, Mark, Player, Position};
use super::win_detector::has_won;

#[derive(Debug)]
pub struct TicTacToeGameState {
    pub board: Board,
    pub difficulty: Difficulty,
    pub current_player: Player,
    pub status: GameStatus,
}

impl TicTacToeGameState {
    pub fn new(size: usize, difficulty: Difficulty) -> Self {
        Self::from_board(Board::new(size), difficulty)
    }

    /// Resumes from a restored board. The human always moves first.
    pub fn from_board(board: Board, difficulty: Difficulty) -> Self {
        let mut state = Self {
            board,
            difficulty,
            current_player: Player::Human,
            status: GameStatus::InProgress,
        };
        state.status = state.derive_status();
        state
    }

    pub fn place_mark(&mut self, player: Player, pos: Position) -> Result<(), String> {
        if self.status != GameStatus::InProgress {
            return Err("Game is already over".to_string());
        }

        if player != self.current_player {
            return Err("Not your turn".to_string());
        }

        if pos.row >= self.board.size() || pos.col >= self.board.size() {
            return Err("Position out of bounds".to_string());
        }

        if self.board.get(pos) != Mark::Empty {
            return Err("Cell is already marked".to_string());
        }

        self.board.set(pos, player.mark());

        self.check_game_over(player);

        if self.status == GameStatus::InProgress {
            self.current_player = player.opponent();
        }

        Ok(())
    }

    fn check_game_over(&mut self, mover: Player) {
        if has_won(&self.board, mover) {
            self.status = winner_status(mover);
            return;
        }

        if self.board.is_full() {
            self.status = GameStatus::Draw;
        }
    }

    fn derive_status(&self) -> GameStatus {
        for player in [Player::Human, Player::Computer] {
            if has_won(&self.board, player) {
                return winner_status(player);
            }
        }
        if self.board.is_full() {
            GameStatus::Draw
        } else {
            GameStatus::InProgress
        }
    }
}

fn winner_status(player: Player) -> GameStatus {
    match player {
        Player::Human => GameStatus::HumanWon,
        Player::Computer => GameStatus::ComputerWon,
    }
}
