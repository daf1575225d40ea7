//! Play session state for the Gomoku GUI

use tracing::warn;

use crate::{GameEngine, GameState, MoveResult, Pos, Stone, UndoResult};

/// One game as seen by the GUI: the engine plus a transient status message
#[derive(Debug, Default)]
pub struct PlaySession {
    pub engine: GameEngine,
    pub message: Option<String>,
}

impl PlaySession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reset(&mut self) {
        self.engine.reset_game();
        self.message = None;
    }

    pub fn is_over(&self) -> bool {
        self.engine.state().is_over()
    }

    /// Most recently placed stone, for the board marker
    pub fn last_move(&self) -> Option<Pos> {
        self.engine.board().last_move().map(|mv| mv.pos)
    }

    /// Attempt to place a stone for the current player at the given position
    pub fn try_place_stone(&mut self, pos: Pos) -> Result<(), String> {
        match self.engine.make_move(pos.row as i32, pos.col as i32) {
            MoveResult::Success { .. } => {
                self.message = None;
                Ok(())
            }
            MoveResult::InvalidMove(err) => Err(format!("Invalid move: {err}")),
            MoveResult::GameEnded(_) => Err("Game is over".to_string()),
        }
    }

    /// Undo last move
    pub fn undo(&mut self) {
        self.message = match self.engine.undo_move() {
            UndoResult::Success(_) => None,
            UndoResult::NoMovesToUndo => Some("Nothing to undo".to_string()),
            UndoResult::Error(msg) => {
                warn!(%msg, "undo failed");
                Some(msg)
            }
        };
    }

    /// One-line status for the turn card
    pub fn status_text(&self) -> String {
        match self.engine.state() {
            GameState::Playing => format!("{} to move", color_name(self.engine.current_player())),
            GameState::BlackWins => "Black wins!".to_string(),
            GameState::WhiteWins => "White wins!".to_string(),
            GameState::Draw => "Draw".to_string(),
        }
    }
}

pub fn color_name(stone: Stone) -> &'static str {
    match stone {
        Stone::Black => "Black",
        Stone::White => "White",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_place_and_status() {
        let mut session = PlaySession::new();
        assert_eq!(session.status_text(), "Black to move");
        session.try_place_stone(Pos::new(7, 7)).unwrap();
        assert_eq!(session.last_move(), Some(Pos::new(7, 7)));
        assert_eq!(session.status_text(), "White to move");
    }

    #[test]
    fn test_occupied_reports_error() {
        let mut session = PlaySession::new();
        session.try_place_stone(Pos::new(7, 7)).unwrap();
        let err = session.try_place_stone(Pos::new(7, 7)).unwrap_err();
        assert_eq!(err, "Invalid move: H8 is already occupied");
    }

    #[test]
    fn test_game_over_and_undo() {
        let mut session = PlaySession::new();
        for col in 0..4 {
            session.try_place_stone(Pos::new(7, col)).unwrap();
            session.try_place_stone(Pos::new(8, col)).unwrap();
        }
        session.try_place_stone(Pos::new(7, 4)).unwrap();
        assert!(session.is_over());
        assert_eq!(session.status_text(), "Black wins!");
        assert_eq!(session.try_place_stone(Pos::new(0, 0)), Err("Game is over".to_string()));

        session.undo();
        assert!(!session.is_over());
        assert_eq!(session.status_text(), "Black to move");
        assert_eq!(session.message, None);
    }

    #[test]
    fn test_undo_nothing() {
        let mut session = PlaySession::new();
        session.undo();
        assert_eq!(session.message.as_deref(), Some("Nothing to undo"));
        session.reset();
        assert_eq!(session.message, None);
    }
}
