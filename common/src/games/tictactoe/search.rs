use std::ops::{Deref, DerefMut};

use super::board::Board;
use super::types::{Player, Position};
use super::win_detector::{is_game_over, score};

pub const SCORE_MIN: i32 = i32::MIN;
pub const SCORE_MAX: i32 = i32::MAX;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchResult {
    pub best_move: Option<Position>,
    pub score: i32,
}

impl SearchResult {
    fn leaf(board: &Board) -> Self {
        Self {
            best_move: None,
            score: score(board),
        }
    }
}

#[cfg(test)]
thread_local! {
    static NODES_VISITED: std::cell::Cell<u64> = const { std::cell::Cell::new(0) };
}

#[cfg(test)]
fn count_node() {
    NODES_VISITED.with(|nodes| nodes.set(nodes.get() + 1));
}

#[cfg(not(test))]
#[inline(always)]
fn count_node() {}

/// A mark placed for exploration. Dropping it empties the cell again,
/// including when the caller leaves the loop on a cutoff.
struct TrialMove<'a> {
    board: &'a mut Board,
    pos: Position,
}

impl<'a> TrialMove<'a> {
    fn place(board: &'a mut Board, pos: Position, player: Player) -> Self {
        debug_assert!(board.is_empty(pos), "trial move on occupied cell {pos}");
        board.set_cell(pos, player.marker());
        Self { board, pos }
    }
}

impl Deref for TrialMove<'_> {
    type Target = Board;

    fn deref(&self) -> &Board {
        &*self.board
    }
}

impl DerefMut for TrialMove<'_> {
    fn deref_mut(&mut self) -> &mut Board {
        &mut *self.board
    }
}

impl Drop for TrialMove<'_> {
    fn drop(&mut self) {
        self.board.clear(self.pos);
    }
}

/// Minimax with alpha-beta pruning.
///
/// The bounds are handed to each child as they currently stand; they are not
/// swapped or negated between plies. Candidates are tried in row-major order
/// and a cell only replaces the recorded move on a strict improvement, so the
/// first best cell wins ties. The board is restored before returning.
pub fn search(
    board: &mut Board,
    depth: usize,
    mut alpha: i32,
    mut beta: i32,
    player: Player,
) -> SearchResult {
    count_node();
    if depth == 0 || is_game_over(board) || board.is_full() {
        return SearchResult::leaf(board);
    }

    let mut best_move = None;

    for pos in board.empty_cells() {
        let child = {
            let mut trial = TrialMove::place(board, pos, player);
            search(&mut trial, depth - 1, alpha, beta, player.opponent())
        };

        match player {
            Player::Maximizer => {
                if child.score > alpha {
                    alpha = child.score;
                    best_move = Some(pos);
                }
            }
            Player::Minimizer => {
                if child.score < beta {
                    beta = child.score;
                    best_move = Some(pos);
                }
            }
        }

        if alpha >= beta {
            break;
        }
    }

    let score = match player {
        Player::Maximizer => alpha,
        Player::Minimizer => beta,
    };
    SearchResult { best_move, score }
}

/// Full-depth search over a copy of `board` with an open window.
pub fn best_move(board: &Board, player: Player) -> SearchResult {
    let mut scratch = *board;
    let depth = scratch.empty_cells().len();
    search(&mut scratch, depth, SCORE_MIN, SCORE_MAX, player)
}

/// Plain minimax without pruning, same scan order and tie-breaks as [`search`].
pub fn exhaustive_minimax(board: &mut Board, depth: usize, player: Player) -> SearchResult {
    count_node();
    if depth == 0 || is_game_over(board) || board.is_full() {
        return SearchResult::leaf(board);
    }

    let mut best: Option<SearchResult> = None;

    for pos in board.empty_cells() {
        let child = {
            let mut trial = TrialMove::place(board, pos, player);
            exhaustive_minimax(&mut trial, depth - 1, player.opponent())
        };

        let improves = match (best, player) {
            (None, _) => true,
            (Some(current), Player::Maximizer) => child.score > current.score,
            (Some(current), Player::Minimizer) => child.score < current.score,
        };
        if improves {
            best = Some(SearchResult {
                best_move: Some(pos),
                score: child.score,
            });
        }
    }

    match best {
        Some(result) => result,
        None => SearchResult::leaf(board),
    }
}
