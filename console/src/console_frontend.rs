use std::io::{self, BufRead, ErrorKind, Write};

use common::games::tictactoe::{
    Board, Difficulty, GameError, GameEvent, GameFrontend, InputError, Position,
    parse_board_size, parse_cell_index, parse_difficulty, parse_yes_no, render_board,
};

/// Prompts on `output`, reads answers line by line from `input`.
pub struct ConsoleFrontend<R: BufRead, W: Write> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> ConsoleFrontend<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn say(&mut self, message: &str) -> io::Result<()> {
        writeln!(self.output, "{}", message)
    }

    pub fn prompt_board_size(&mut self) -> io::Result<usize> {
        self.prompt_until_valid(
            "Please enter the size of the playing field (eg 3 for a 3x3 field):",
            parse_board_size,
        )
    }

    pub fn prompt_difficulty(&mut self) -> io::Result<Difficulty> {
        self.prompt_until_valid(
            "Please select the game level (easy/medium/hard):",
            parse_difficulty,
        )
    }

    pub fn prompt_load_previous(&mut self) -> io::Result<bool> {
        let answer =
            self.prompt("Do you want to play the previous game from the file? (Yes/No): ")?;
        Ok(parse_yes_no(&answer))
    }

    pub fn print_board(&mut self, board: &Board) -> io::Result<()> {
        write!(self.output, "{}", render_board(board))?;
        self.output.flush()
    }

    fn prompt_until_valid<T>(
        &mut self,
        question: &str,
        parse: impl Fn(&str) -> Result<T, InputError>,
    ) -> io::Result<T> {
        loop {
            let answer = self.prompt(question)?;
            match parse(&answer) {
                Ok(value) => return Ok(value),
                Err(e) => self.say(&e.to_string())?,
            }
        }
    }

    fn prompt(&mut self, question: &str) -> io::Result<String> {
        write!(self.output, "{}", question)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(io::Error::new(ErrorKind::UnexpectedEof, "input closed"));
        }
        Ok(line)
    }
}

impl<R: BufRead, W: Write> GameFrontend for ConsoleFrontend<R, W> {
    fn request_human_move(&mut self, board: &Board) -> Result<Position, GameError> {
        loop {
            let answer = self.prompt("please enter a Number ")?;
            match parse_cell_index(board, &answer) {
                Ok(pos) => return Ok(pos),
                Err(e) => self.say(&e.to_string())?,
            }
        }
    }

    fn show_board(&mut self, board: &Board) -> Result<(), GameError> {
        Ok(self.print_board(board)?)
    }

    fn notify(&mut self, event: GameEvent) -> Result<(), GameError> {
        let message = match event {
            GameEvent::HumanTurn => "Your turn (X):".to_string(),
            GameEvent::ComputerTurn => "Robot turn (O):".to_string(),
            GameEvent::ComputerMoved(pos) => format!(
                "Robot (O) was placed in row {} and column {}.",
                pos.row, pos.col
            ),
            GameEvent::HumanWon => "you win! Congratulations.".to_string(),
            GameEvent::ComputerWon => "The robot won! Hopefully next time.".to_string(),
            GameEvent::Draw => "The game ended in a draw.".to_string(),
        };
        Ok(self.say(&message)?)
    }
}
