use std::fmt;

use thiserror::Error;

use crate::{bitboard::Bitboard, types::*, zobrist::ZOBRIST};

/// Snapshot of a Blockade game.
///
/// States are small and `Copy`. The search never mutates a state that a
/// parent still refers to; successors are built with [`GameState::apply`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct GameState {
    /// Pawn cell of each player, indexed by `Player::idx()`.
    pub pawns: [u8; 2],
    /// Cells taken out of play. Only ever grows.
    pub removed: Bitboard,
    /// Half-moves applied since the start of the game.
    pub ply: u32,
}

/// Ways a state can break its invariants.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StateError {
    #[error("pawn of player {player} is off the board (cell {cell})")]
    PawnOffBoard { player: usize, cell: u8 },
    #[error("both pawns stand on cell {0}")]
    PawnsOverlap(u8),
    #[error("pawn of player {player} stands on removed cell {cell}")]
    PawnOnRemoved { player: usize, cell: u8 },
    #[error("removed set contains bits outside the board")]
    RemovedOffBoard,
}

impl GameState {
    /// Player 0 at (0,4), player 1 at (8,4), nothing removed.
    pub fn startpos() -> Self {
        GameState {
            pawns: [start_cell(Player::Zero), start_cell(Player::One)],
            removed: Bitboard::EMPTY,
            ply: 0,
        }
    }

    /// Build a state, panicking if the invariants do not hold.
    pub fn new(pawns: [u8; 2], removed: Bitboard, ply: u32) -> Self {
        match Self::try_new(pawns, removed, ply) {
            Ok(state) => state,
            Err(e) => panic!("invalid game state: {e}"),
        }
    }

    /// Build a state from untrusted input.
    pub fn try_new(pawns: [u8; 2], removed: Bitboard, ply: u32) -> Result<Self, StateError> {
        let state = GameState {
            pawns,
            removed,
            ply,
        };
        state.validate()?;
        Ok(state)
    }

    pub fn validate(&self) -> Result<(), StateError> {
        if self.removed.0 & !Bitboard::ALL.0 != 0 {
            return Err(StateError::RemovedOffBoard);
        }
        for (player, &cell) in self.pawns.iter().enumerate() {
            if cell as usize >= CELL_COUNT {
                return Err(StateError::PawnOffBoard { player, cell });
            }
            if self.removed.contains(cell) {
                return Err(StateError::PawnOnRemoved { player, cell });
            }
        }
        if self.pawns[0] == self.pawns[1] {
            return Err(StateError::PawnsOverlap(self.pawns[0]));
        }
        Ok(())
    }

    /// Panic unless the pawn invariants hold.
    #[inline]
    pub fn assert_valid(&self) {
        if let Err(e) = self.validate() {
            panic!("invalid game state: {e}");
        }
    }

    /// Parse a text diagram: nine rows, row y = 0 first, one character per
    /// column. `.` is free, `#` removed, `0`/`1` are the pawns.
    pub fn from_diagram(diagram: &str, ply: u32) -> Self {
        let rows: Vec<&str> = diagram
            .lines()
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .collect();
        assert!(
            rows.len() == BOARD_HEIGHT as usize,
            "Invalid diagram: expected {BOARD_HEIGHT} rows, got {}",
            rows.len()
        );

        let mut pawns = [None, None];
        let mut removed = Bitboard::EMPTY;
        for (y, row) in rows.iter().enumerate() {
            let chars: Vec<char> = row.chars().filter(|c| !c.is_whitespace()).collect();
            assert!(
                chars.len() == BOARD_WIDTH as usize,
                "Invalid diagram row {y}: {row}"
            );
            for (x, ch) in chars.into_iter().enumerate() {
                let c = (y * BOARD_WIDTH as usize + x) as u8;
                match ch {
                    '.' => {}
                    '#' => removed.set(c),
                    '0' => pawns[0] = Some(c),
                    '1' => pawns[1] = Some(c),
                    _ => panic!("Invalid diagram char: {ch}"),
                }
            }
        }

        let p0 = pawns[0].expect("diagram has no pawn 0");
        let p1 = pawns[1].expect("diagram has no pawn 1");
        GameState::new([p0, p1], removed, ply)
    }

    #[inline(always)]
    pub fn pawn(&self, player: Player) -> u8 {
        self.pawns[player.idx()]
    }

    /// True if either pawn stands on `cell`.
    #[inline(always)]
    pub fn is_occupied(&self, cell: u8) -> bool {
        self.pawns[0] == cell || self.pawns[1] == cell
    }

    #[inline(always)]
    pub fn is_removed(&self, cell: u8) -> bool {
        self.removed.contains(cell)
    }

    /// Both pawn cells.
    #[inline(always)]
    pub fn occupied(&self) -> Bitboard {
        Bitboard::from_cell(self.pawns[0]) | Bitboard::from_cell(self.pawns[1])
    }

    /// Cells nobody can move to or remove.
    #[inline(always)]
    pub fn blocked(&self) -> Bitboard {
        self.removed | self.occupied()
    }

    /// Cells neither removed nor occupied.
    #[inline(always)]
    pub fn free_cells(&self) -> Bitboard {
        !self.blocked()
    }

    /// Copy with one pawn relocated. Ply and removed set are unchanged.
    #[inline]
    pub fn with_pawn_at(&self, player: Player, cell: u8) -> Self {
        let mut next = *self;
        next.pawns[player.idx()] = cell;
        next
    }

    /// Successor after `player` plays `action`.
    #[inline]
    pub fn apply(&self, player: Player, action: Action) -> Self {
        let mut next = self.with_pawn_at(player, action.move_to);
        debug_assert!(
            !next.is_occupied(action.remove) && !next.is_removed(action.remove),
            "illegal removal of cell {}",
            action.remove
        );
        next.removed.set(action.remove);
        next.ply += 1;
        next
    }

    /// Canonical 64-bit key: removed cells plus both pawn cells.
    pub fn fingerprint(&self) -> u64 {
        let mut h = 0u64;
        for cell in self.removed {
            h ^= ZOBRIST.removed_key(cell);
        }
        h ^= ZOBRIST.pawn_key(0, self.pawns[0]);
        h ^= ZOBRIST.pawn_key(1, self.pawns[1]);
        h
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::startpos()
    }
}

/// Renders the same diagram format `from_diagram` reads.
impl fmt::Display for GameState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in 0..BOARD_HEIGHT {
            for x in 0..BOARD_WIDTH {
                let c = (y as u8) * BOARD_WIDTH as u8 + x as u8;
                let ch = if c == self.pawns[0] {
                    '0'
                } else if c == self.pawns[1] {
                    '1'
                } else if self.removed.contains(c) {
                    '#'
                } else {
                    '.'
                };
                write!(f, "{ch}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "state_tests.rs"]
mod state_tests;
