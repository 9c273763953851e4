mod board;
mod bot_controller;
mod error;
mod game_state;
pub mod search;
mod types;
mod validate;
pub mod win_detector;

pub use board::Board;
pub use bot_controller::{BotInput, calculate_move, calculate_search_move};
pub use error::MoveError;
pub use game_state::GameState;
pub use search::{SearchResult, best_move, exhaustive_minimax};
pub use types::{
    BOARD_SIZE, CELL_COUNT, Cell, FirstPlayerMode, GameStatus, Player, Position, WinningLine,
};
pub use validate::{parse_cell_number, validate_human_move};
pub use win_detector::{find_winning_line, has_won, is_game_over, is_terminal, score};
