use super::board::Board;
use super::error::MoveError;
use super::types::{GameStatus, Player, Position};
use super::win_detector::game_status;

#[derive(Debug, Clone)]
pub struct GameState {
    pub board: Board,
    pub current_player: Player,
    pub status: GameStatus,
    pub last_move: Option<Position>,
}

impl GameState {
    pub fn new(first_player: Player) -> Self {
        Self {
            board: Board::new(),
            current_player: first_player,
            status: GameStatus::InProgress,
            last_move: None,
        }
    }

    /// Places the current player's mark and hands the turn over, unless the
    /// move ended the game.
    pub fn place_mark(&mut self, pos: Position) -> Result<(), MoveError> {
        if self.status.is_over() {
            return Err(MoveError::GameOver);
        }

        self.board.place(pos, self.current_player)?;
        self.last_move = Some(pos);
        self.status = game_status(&self.board);

        if self.status == GameStatus::InProgress {
            self.current_player = self.current_player.opponent();
        }

        Ok(())
    }

    pub fn available_moves(&self) -> Vec<Position> {
        if self.status.is_over() {
            return Vec::new();
        }
        self.board.empty_cells()
    }

    pub fn winner(&self) -> Option<Player> {
        self.status.winner()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pos(number: u32) -> Position {
        Position::from_cell_number(number).unwrap()
    }

    #[test]
    fn test_turns_alternate() {
        let mut state = GameState::new(Player::Minimizer);
        state.place_mark(pos(5)).unwrap();
        assert_eq!(state.current_player, Player::Maximizer);
        assert_eq!(state.last_move, Some(pos(5)));
        state.place_mark(pos(1)).unwrap();
        assert_eq!(state.current_player, Player::Minimizer);
        assert_eq!(state.board.occupied_count(), 2);
    }

    #[test]
    fn test_occupied_cell_keeps_turn() {
        let mut state = GameState::new(Player::Maximizer);
        state.place_mark(pos(5)).unwrap();
        let before = state.board;
        assert_eq!(
            state.place_mark(pos(5)),
            Err(MoveError::CellOccupied { row: 1, col: 1 })
        );
        assert_eq!(state.current_player, Player::Minimizer);
        assert_eq!(state.board, before);
    }

    #[test]
    fn test_win_ends_game_and_rejects_moves() {
        let mut state = GameState::new(Player::Maximizer);
        for number in [1, 4, 2, 5, 3] {
            state.place_mark(pos(number)).unwrap();
        }
        assert_eq!(state.status, GameStatus::MaximizerWon);
        assert_eq!(state.winner(), Some(Player::Maximizer));
        assert_eq!(state.current_player, Player::Maximizer);
        assert!(state.available_moves().is_empty());
        assert_eq!(state.place_mark(pos(9)), Err(MoveError::GameOver));
    }

    #[test]
    fn test_full_board_is_draw() {
        let mut state = GameState::new(Player::Maximizer);
        for number in [1, 2, 3, 5, 4, 6, 8, 7, 9] {
            state.place_mark(pos(number)).unwrap();
        }
        assert_eq!(state.status, GameStatus::Draw);
        assert_eq!(state.winner(), None);
    }
}
