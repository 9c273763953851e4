use std::io::{self, BufRead, Write};
use std::ops::RangeInclusive;

use tictactoe_common::games::tictactoe::{
    Board, GameState, GameStatus, MoveError, Position, find_winning_line, parse_cell_number,
    validate_human_move,
};

pub fn render_board(board: &Board) -> String {
    let mut out = String::new();
    for row in board.rows() {
        for cell in row {
            out.push_str(&format!("| {} |", cell.symbol()));
        }
        out.push('\n');
        out.push_str("---------------\n");
    }
    out.push_str("===============\n");
    out
}

pub fn describe_result(state: &GameState) -> String {
    let Some(player) = state.winner() else {
        return match state.status {
            GameStatus::Draw => "Draw".to_string(),
            _ => "Game in progress".to_string(),
        };
    };
    match find_winning_line(&state.board) {
        Some(line) => format!(
            "{} has won! ({}-{}-{})",
            player,
            line.start().cell_number(),
            line.cells[1].cell_number(),
            line.end().cell_number()
        ),
        None => format!("{} has won!", player),
    }
}

/// Line-based prompts. Every `prompt_*` returns `Ok(None)` once input ends.
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    #[cfg(test)]
    pub fn into_output(self) -> W {
        self.output
    }

    pub fn say(&mut self, message: &str) -> io::Result<()> {
        writeln!(self.output, "{}", message)
    }

    pub fn show_board(&mut self, board: &Board) -> io::Result<()> {
        write!(self.output, "{}", render_board(board))
    }

    fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line))
    }

    pub fn prompt_choice(
        &mut self,
        prompt: &str,
        choices: RangeInclusive<u32>,
    ) -> io::Result<Option<u32>> {
        while let Some(line) = self.read_line(prompt)? {
            match parse_cell_number(&line) {
                Ok(choice) if choices.contains(&choice) => return Ok(Some(choice)),
                Ok(_) => self.say("Invalid Input! Try again!")?,
                Err(_) => self.say("Enter a number!")?,
            }
        }
        Ok(None)
    }

    pub fn prompt_human_move(&mut self, board: &Board) -> io::Result<Option<Position>> {
        while let Some(line) = self.read_line("Enter a number between 1-9: ")? {
            let result = parse_cell_number(&line).and_then(|n| validate_human_move(board, n));
            match result {
                Ok(pos) => return Ok(Some(pos)),
                Err(MoveError::NotANumber(_)) => self.say("Enter a number!")?,
                Err(_) => self.say("Invalid Move! Try again!")?,
            }
        }
        Ok(None)
    }

    pub fn prompt_yes_no(&mut self, prompt: &str) -> io::Result<Option<bool>> {
        while let Some(line) = self.read_line(prompt)? {
            match line.trim().to_lowercase().as_str() {
                "yes" | "y" => return Ok(Some(true)),
                "no" | "n" => return Ok(Some(false)),
                _ => self.say("Please answer yes or no.")?,
            }
        }
        Ok(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;
    use tictactoe_common::games::tictactoe::Player;

    fn console(input: &str) -> Console<Cursor<Vec<u8>>, Vec<u8>> {
        Console::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    fn output(console: Console<Cursor<Vec<u8>>, Vec<u8>>) -> String {
        String::from_utf8(console.into_output()).unwrap()
    }

    #[test]
    fn test_render_board() {
        let board = Board::from_signs([[1, 0, 0], [0, -1, 0], [0, 0, 0]]).unwrap();
        let rendered = render_board(&board);
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines[0], "| X ||   ||   |");
        assert_eq!(lines[1], "---------------");
        assert_eq!(lines[2], "|   || O ||   |");
        assert_eq!(lines[6], "===============");
    }

    #[test]
    fn test_human_move_reasks_until_valid() {
        let mut board = Board::new();
        board
            .place(Position::from_cell_number(5).unwrap(), Player::Minimizer)
            .unwrap();
        let mut c = console("abc\n12\n5\n6\n");

        let pos = c.prompt_human_move(&board).unwrap();

        assert_eq!(pos, Some(Position::new(1, 2).unwrap()));
        let text = output(c);
        assert_eq!(text.matches("Enter a number!").count(), 1);
        assert_eq!(text.matches("Invalid Move! Try again!").count(), 2);
    }

    #[test]
    fn test_end_of_input_gives_none() {
        let mut c = console("");
        assert_eq!(c.prompt_human_move(&Board::new()).unwrap(), None);
        assert_eq!(c.prompt_choice("pick: ", 1..=2).unwrap(), None);
        assert_eq!(c.prompt_yes_no("again? ").unwrap(), None);
    }

    #[test]
    fn test_prompt_choice_range() {
        let mut c = console("3\n2\n");
        assert_eq!(c.prompt_choice("pick: ", 1..=2).unwrap(), Some(2));
        assert!(output(c).contains("Invalid Input! Try again!"));
    }

    #[test]
    fn test_prompt_yes_no() {
        let mut c = console("maybe\nNo\n");
        assert_eq!(c.prompt_yes_no("again? ").unwrap(), Some(false));
    }

    #[test]
    fn test_describe_result() {
        let mut state = GameState::new(Player::Maximizer);
        for number in [1, 4, 5, 6, 9] {
            state
                .place_mark(Position::from_cell_number(number).unwrap())
                .unwrap();
        }
        assert_eq!(describe_result(&state), "X has won! (1-5-9)");
    }
}
