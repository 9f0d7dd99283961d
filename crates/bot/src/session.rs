//! The bot's own record of the game, rebuilt from referee updates.

use blockade_core::protocol::TurnInput;
use blockade_core::{start_cell, Action, Coord, GameState, Player};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SessionError {
    #[error("starting coordinate {0} is neither player's start cell")]
    UnknownStart(Coord),
    #[error("opponent reported at {0}, which is off the board, removed or ours")]
    BadOpponentCell(Coord),
    #[error("removed tile {0} is off the board or under a pawn")]
    BadRemovedTile(Coord),
}

/// Authoritative game state as seen from one seat.
#[derive(Debug, Clone)]
pub struct Session {
    state: GameState,
    me: Player,
    turns_played: u32,
}

impl Session {
    /// Start a session from our initial coordinate, which fixes our seat.
    pub fn from_init(coord: Coord) -> Result<Self, SessionError> {
        let cell = coord.to_cell().ok_or(SessionError::UnknownStart(coord))?;
        let me = Player::BOTH
            .into_iter()
            .find(|&p| start_cell(p) == cell)
            .ok_or(SessionError::UnknownStart(coord))?;

        Ok(Self {
            state: GameState::startpos(),
            me,
            turns_played: 0,
        })
    }

    pub fn me(&self) -> Player {
        self.me
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn is_first_turn(&self) -> bool {
        self.turns_played == 0
    }

    /// Apply the opponent's last action as reported by the referee.
    pub fn observe(&mut self, input: TurnInput) -> Result<(), SessionError> {
        let opponent = self.me.other();

        let cell = input
            .opponent
            .to_cell()
            .filter(|&c| !self.state.is_removed(c) && c != self.state.pawn(self.me))
            .ok_or(SessionError::BadOpponentCell(input.opponent))?;
        let mut next = self.state.with_pawn_at(opponent, cell);

        if let Some(tile) = input.last_removed {
            let removed = tile
                .to_cell()
                .filter(|&c| !next.is_occupied(c))
                .ok_or(SessionError::BadRemovedTile(tile))?;
            // Repeats of an already known removal carry no new ply
            if !next.is_removed(removed) {
                next.removed.set(removed);
                next.ply += 1;
            }
        }

        self.state = next;
        Ok(())
    }

    /// Record the action we are about to send.
    pub fn commit(&mut self, action: Action) {
        self.state = self.state.apply(self.me, action);
        self.turns_played += 1;
    }
}

#[cfg(test)]
#[path = "session_tests.rs"]
mod session_tests;
