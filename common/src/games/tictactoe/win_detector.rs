use super::board::Board;
use super::types::{BOARD_SIZE, GameStatus, Player, Position, WinningLine};

pub const WIN_SCORE: i32 = 10;

const fn p(row: usize, col: usize) -> Position {
    Position::at(row, col)
}

pub const WINNING_LINES: [[Position; BOARD_SIZE]; 8] = [
    [p(0, 0), p(0, 1), p(0, 2)],
    [p(1, 0), p(1, 1), p(1, 2)],
    [p(2, 0), p(2, 1), p(2, 2)],
    [p(0, 0), p(1, 0), p(2, 0)],
    [p(0, 1), p(1, 1), p(2, 1)],
    [p(0, 2), p(1, 2), p(2, 2)],
    [p(0, 0), p(1, 1), p(2, 2)],
    [p(0, 2), p(1, 1), p(2, 0)],
];

fn owns_line(board: &Board, player: Player, line: &[Position; BOARD_SIZE]) -> bool {
    line.iter().all(|&pos| board.cell(pos).owner() == Some(player))
}

pub fn has_won(board: &Board, player: Player) -> bool {
    WINNING_LINES
        .iter()
        .any(|line| owns_line(board, player, line))
}

pub fn is_game_over(board: &Board) -> bool {
    has_won(board, Player::Maximizer) || has_won(board, Player::Minimizer)
}

pub fn is_terminal(board: &Board) -> bool {
    is_game_over(board) || board.is_full()
}

/// +10 for an X win, -10 for an O win, 0 otherwise. Ply count is not taken into account.
pub fn score(board: &Board) -> i32 {
    if has_won(board, Player::Maximizer) {
        WIN_SCORE
    } else if has_won(board, Player::Minimizer) {
        -WIN_SCORE
    } else {
        0
    }
}

pub fn winner(board: &Board) -> Option<Player> {
    find_winning_line(board).map(|line| line.player)
}

pub fn find_winning_line(board: &Board) -> Option<WinningLine> {
    for line in &WINNING_LINES {
        for player in [Player::Maximizer, Player::Minimizer] {
            if owns_line(board, player, line) {
                return Some(WinningLine::new(player, *line));
            }
        }
    }
    None
}

pub fn game_status(board: &Board) -> GameStatus {
    match winner(board) {
        Some(Player::Maximizer) => GameStatus::MaximizerWon,
        Some(Player::Minimizer) => GameStatus::MinimizerWon,
        None if board.is_full() => GameStatus::Draw,
        None => GameStatus::InProgress,
    }
}
