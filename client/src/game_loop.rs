use std::io::{self, BufRead, Write};

use thiserror::Error;
use tictactoe_common::debug_log;
use tictactoe_common::games::SessionRng;
use tictactoe_common::games::tictactoe::{BotInput, GameState, MoveError, Player, calculate_move};

use crate::config::MatchMode;
use crate::console::{Console, describe_result};

#[derive(Error, Debug)]
pub enum ClientError {
    #[error("Console I/O failed: {0}")]
    Io(#[from] io::Error),

    #[error(transparent)]
    Move(#[from] MoveError),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Seat {
    Human,
    Computer,
}

#[derive(Debug, Clone, Copy)]
pub struct MatchSettings {
    pub x_seat: Seat,
    pub o_seat: Seat,
    pub first_player: Player,
    pub random_opening: bool,
}

impl MatchSettings {
    /// In a player-vs-computer match the human always holds X.
    pub fn new(mode: MatchMode, first_player: Player, random_opening: bool) -> Self {
        let x_seat = match mode {
            MatchMode::PlayerVsComputer => Seat::Human,
            MatchMode::ComputerVsComputer => Seat::Computer,
        };
        Self {
            x_seat,
            o_seat: Seat::Computer,
            first_player,
            random_opening,
        }
    }

    pub fn seat(&self, player: Player) -> Seat {
        match player {
            Player::Maximizer => self.x_seat,
            Player::Minimizer => self.o_seat,
        }
    }
}

#[derive(Debug)]
pub enum MatchOutcome {
    Finished(GameState),
    Abandoned,
}

pub fn run_match<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    settings: &MatchSettings,
    rng: &mut SessionRng,
) -> Result<MatchOutcome, ClientError> {
    let mut state = GameState::new(settings.first_player);
    console.show_board(&state.board)?;

    while !state.status.is_over() {
        let player = state.current_player;
        let pos = match settings.seat(player) {
            Seat::Human => match console.prompt_human_move(&state.board)? {
                Some(pos) => pos,
                None => return Ok(MatchOutcome::Abandoned),
            },
            Seat::Computer => {
                debug_log!(
                    "{} to move with {} open cells",
                    player,
                    state.available_moves().len()
                );
                let input = BotInput::from_game_state(&state, settings.random_opening);
                calculate_move(&input, rng).ok_or(MoveError::NoMoveAvailable)?
            }
        };

        state.place_mark(pos)?;
        if let Some(last) = state.last_move {
            debug_log!("{} played cell {}", player, last.cell_number());
        }
        console.show_board(&state.board)?;
    }

    console.say(&describe_result(&state))?;
    Ok(MatchOutcome::Finished(state))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;
    use tictactoe_common::games::tictactoe::GameStatus;

    fn console(input: &str) -> Console<Cursor<Vec<u8>>, Vec<u8>> {
        Console::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    fn finished(outcome: MatchOutcome) -> GameState {
        match outcome {
            MatchOutcome::Finished(state) => state,
            MatchOutcome::Abandoned => panic!("match was abandoned"),
        }
    }

    #[test]
    fn test_computer_vs_computer_is_a_draw() {
        for seed in 0..5 {
            for first in [Player::Maximizer, Player::Minimizer] {
                let settings = MatchSettings::new(MatchMode::ComputerVsComputer, first, true);
                let mut rng = SessionRng::new(seed);
                let mut c = console("");
                let state = finished(run_match(&mut c, &settings, &mut rng).unwrap());
                assert_eq!(state.status, GameStatus::Draw);
            }
        }
    }

    #[test]
    fn test_human_blunder_is_punished() {
        // X keeps taking corners and never blocks the middle column.
        let settings = MatchSettings::new(MatchMode::PlayerVsComputer, Player::Maximizer, true);
        let mut rng = SessionRng::new(1);
        let mut c = console("1\n3\n7\n2\n4\n6\n8\n9\n");
        let state = finished(run_match(&mut c, &settings, &mut rng).unwrap());
        assert_eq!(state.status, GameStatus::MinimizerWon);
        assert_eq!(state.winner(), Some(Player::Minimizer));
    }

    #[test]
    fn test_human_input_ending_abandons_match() {
        let settings = MatchSettings::new(MatchMode::PlayerVsComputer, Player::Maximizer, true);
        let mut rng = SessionRng::new(1);
        let mut c = console("5\n");
        let outcome = run_match(&mut c, &settings, &mut rng).unwrap();
        assert!(matches!(outcome, MatchOutcome::Abandoned));
    }

    #[test]
    fn test_computer_opens_when_moving_first() {
        let settings = MatchSettings::new(MatchMode::PlayerVsComputer, Player::Minimizer, false);
        let mut rng = SessionRng::new(1);
        let mut c = console("");
        let outcome = run_match(&mut c, &settings, &mut rng).unwrap();
        assert!(matches!(outcome, MatchOutcome::Abandoned));
        let text = String::from_utf8(c.into_output()).unwrap();
        assert!(text.contains("| O ||   ||   |"));
    }

    #[test]
    fn test_seats() {
        let settings = MatchSettings::new(MatchMode::PlayerVsComputer, Player::Maximizer, true);
        assert_eq!(settings.seat(Player::Maximizer), Seat::Human);
        assert_eq!(settings.seat(Player::Minimizer), Seat::Computer);
    }
}
