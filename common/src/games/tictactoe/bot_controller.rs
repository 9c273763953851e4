use crate::debug_log;
use crate::games::SessionRng;
use super::board::Board;
use super::game_state::GameState;
use super::search::{SearchResult, best_move};
use super::types::{CELL_COUNT, Player, Position};
use super::win_detector::has_won;

pub struct BotInput {
    pub board: Board,
    pub player: Player,
    pub random_opening: bool,
}

impl BotInput {
    pub fn from_game_state(state: &GameState, random_opening: bool) -> Self {
        Self {
            board: state.board,
            player: state.current_player,
            random_opening,
        }
    }
}

/// Picks the computer's move, or `None` when the board is full.
pub fn calculate_move(input: &BotInput, rng: &mut SessionRng) -> Option<Position> {
    let available_moves = input.board.empty_cells();
    if available_moves.is_empty() {
        return None;
    }

    if input.random_opening && available_moves.len() == CELL_COUNT {
        let pos = calculate_random_opening(rng);
        debug_log!("{} opens at random on {}", input.player, pos);
        return Some(pos);
    }

    let mut board = input.board;
    if let Some(pos) = find_winning_move(&mut board, input.player, &available_moves) {
        debug_log!("{} takes the immediate win on {}", input.player, pos);
        return Some(pos);
    }

    let result = calculate_search_move(&input.board, input.player);
    debug_log!(
        "{} searched {} empty cells: move {:?}, score {}",
        input.player,
        available_moves.len(),
        result.best_move.map(|pos| pos.cell_number()),
        result.score
    );
    result.best_move
}

pub fn calculate_search_move(board: &Board, player: Player) -> SearchResult {
    best_move(board, player)
}

fn calculate_random_opening(rng: &mut SessionRng) -> Position {
    Position::ALL[rng.random_range(0..CELL_COUNT)]
}

fn find_winning_move(board: &mut Board, player: Player, moves: &[Position]) -> Option<Position> {
    for &pos in moves {
        board.set_cell(pos, player.marker());
        let wins = has_won(board, player);
        board.clear(pos);

        if wins {
            return Some(pos);
        }
    }
    None
}
