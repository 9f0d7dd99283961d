//! Line protocol spoken with the game referee.
//!
//! Input is a stream of whitespace-separated integers: our starting `x y`
//! once, then per turn the opponent's `x y` and the last removed tile `x y`
//! (`-1 -1` when nothing has been removed yet). Each reply is one line,
//! `mx my rx ry` or `RANDOM`, optionally followed by `;message`.

use std::io::BufRead;

use thiserror::Error;

use crate::types::{Action, Coord, cell_to_coord};

/// Keyword asking the referee to play a random legal action for us.
pub const RANDOM_DIRECTIVE: &str = "RANDOM";

/// Coordinate pair meaning "no tile removed".
pub const NO_TILE: Coord = Coord::new(-1, -1);

#[derive(Debug, Error)]
pub enum ProtocolError {
    #[error("input ended")]
    Eof,
    #[error("failed to read input: {0}")]
    Io(#[from] std::io::Error),
    #[error("expected an integer, got {0:?}")]
    NotAnInteger(String),
    #[error("coordinate {0} is off the board")]
    OffBoard(Coord),
    #[error("malformed reply {0:?}")]
    MalformedReply(String),
}

/// Opponent update received at the start of each of our turns.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TurnInput {
    pub opponent: Coord,
    /// None for the `-1 -1` sentinel.
    pub last_removed: Option<Coord>,
}

/// A parsed reply line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Reply {
    Action {
        action: Action,
        message: Option<String>,
    },
    Random {
        message: Option<String>,
    },
}

/// Pulls integer tokens out of a line-oriented reader, regardless of how
/// they are split across lines.
pub struct TokenReader<R> {
    reader: R,
    pending: Vec<String>,
}

impl<R: BufRead> TokenReader<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            pending: Vec::new(),
        }
    }

    pub fn next_int(&mut self) -> Result<i32, ProtocolError> {
        while self.pending.is_empty() {
            let mut line = String::new();
            if self.reader.read_line(&mut line)? == 0 {
                return Err(ProtocolError::Eof);
            }
            // Stored reversed so pop() yields tokens in order
            self.pending = line.split_whitespace().rev().map(str::to_owned).collect();
        }
        let token = self.pending.pop().unwrap_or_default();
        token
            .parse()
            .map_err(|_| ProtocolError::NotAnInteger(token))
    }

    pub fn next_coord(&mut self) -> Result<Coord, ProtocolError> {
        let x = self.next_int()?;
        let y = self.next_int()?;
        Ok(Coord::new(x, y))
    }
}

/// Read our own starting coordinate.
pub fn read_init<R: BufRead>(tokens: &mut TokenReader<R>) -> Result<Coord, ProtocolError> {
    let coord = tokens.next_coord()?;
    on_board(coord)?;
    Ok(coord)
}

/// Read one opponent update.
pub fn read_turn<R: BufRead>(tokens: &mut TokenReader<R>) -> Result<TurnInput, ProtocolError> {
    let opponent = tokens.next_coord()?;
    on_board(opponent)?;
    let removed = tokens.next_coord()?;
    let last_removed = if removed == NO_TILE {
        None
    } else {
        on_board(removed)?;
        Some(removed)
    };
    Ok(TurnInput {
        opponent,
        last_removed,
    })
}

fn on_board(coord: Coord) -> Result<u8, ProtocolError> {
    coord.to_cell().ok_or(ProtocolError::OffBoard(coord))
}

/// Format an action as `mx my rx ry[;message]`.
pub fn format_action(action: Action, message: Option<&str>) -> String {
    let m = cell_to_coord(action.move_to);
    let r = cell_to_coord(action.remove);
    let mut s = format!("{} {} {} {}", m.x, m.y, r.x, r.y);
    if let Some(msg) = message {
        s.push(';');
        s.push_str(msg);
    }
    s
}

/// Format the random-action directive.
pub fn format_random(message: Option<&str>) -> String {
    match message {
        Some(msg) => format!("{RANDOM_DIRECTIVE};{msg}"),
        None => RANDOM_DIRECTIVE.to_string(),
    }
}

/// Parse a reply line written by `format_action` or `format_random`.
pub fn parse_reply(line: &str) -> Result<Reply, ProtocolError> {
    let line = line.trim_end_matches(['\r', '\n']);
    let (body, message) = match line.split_once(';') {
        Some((body, msg)) => (body, Some(msg.to_string())),
        None => (line, None),
    };
    let body = body.trim();

    if body == RANDOM_DIRECTIVE {
        return Ok(Reply::Random { message });
    }

    let nums: Vec<i32> = body
        .split_whitespace()
        .map(|t| t.parse())
        .collect::<Result<_, _>>()
        .map_err(|_| ProtocolError::MalformedReply(line.to_string()))?;
    if nums.len() != 4 {
        return Err(ProtocolError::MalformedReply(line.to_string()));
    }

    let move_to = on_board(Coord::new(nums[0], nums[1]))?;
    let remove = on_board(Coord::new(nums[2], nums[3]))?;
    Ok(Reply::Action {
        action: Action::new(move_to, remove),
        message,
    })
}

#[cfg(test)]
#[path = "protocol_tests.rs"]
mod protocol_tests;
