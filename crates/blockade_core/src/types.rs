use std::fmt;

/// Board width in cells.
pub const BOARD_WIDTH: i8 = 9;
/// Board height in cells.
pub const BOARD_HEIGHT: i8 = 9;
/// Number of cells on the board.
pub const CELL_COUNT: usize = (BOARD_WIDTH as usize) * (BOARD_HEIGHT as usize);

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Player {
    Zero,
    One,
}
impl Player {
    pub const BOTH: [Player; 2] = [Player::Zero, Player::One];

    pub fn other(self) -> Player {
        match self {
            Player::Zero => Player::One,
            Player::One => Player::Zero,
        }
    }
    pub fn idx(self) -> usize {
        match self {
            Player::Zero => 0,
            Player::One => 1,
        }
    }
    /// Player for a raw index. Anything but 0 or 1 is a caller bug.
    pub fn from_index(index: usize) -> Player {
        match index {
            0 => Player::Zero,
            1 => Player::One,
            _ => panic!("player index out of range: {index}"),
        }
    }
}

/// A (move, removal) pair. Both fields are cell indices.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Action {
    pub move_to: u8,
    pub remove: u8,
}

impl Action {
    pub fn new(move_to: u8, remove: u8) -> Self {
        Self { move_to, remove }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "move {} remove {}",
            cell_to_coord(self.move_to),
            cell_to_coord(self.remove)
        )
    }
}

/// Signed board coordinate as it appears on the wire.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Coord {
    pub x: i32,
    pub y: i32,
}

impl Coord {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Cell index for this coordinate, or None when off the board.
    pub fn to_cell(self) -> Option<u8> {
        if !(0..BOARD_WIDTH as i32).contains(&self.x) || !(0..BOARD_HEIGHT as i32).contains(&self.y)
        {
            return None;
        }
        cell(self.x as i8, self.y as i8)
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.x, self.y)
    }
}

// Helpers
pub fn x_of(cell: u8) -> i8 {
    (cell % BOARD_WIDTH as u8) as i8
}
pub fn y_of(cell: u8) -> i8 {
    (cell / BOARD_WIDTH as u8) as i8
}
pub fn cell(x: i8, y: i8) -> Option<u8> {
    if (0..BOARD_WIDTH).contains(&x) && (0..BOARD_HEIGHT).contains(&y) {
        Some((y as u8) * BOARD_WIDTH as u8 + (x as u8))
    } else {
        None
    }
}

pub fn cell_to_coord(cell: u8) -> Coord {
    Coord::new(x_of(cell) as i32, y_of(cell) as i32)
}

/// Starting cell of each player: (0,4) and (8,4).
pub fn start_cell(player: Player) -> u8 {
    match player {
        Player::Zero => 4 * BOARD_WIDTH as u8,
        Player::One => 4 * BOARD_WIDTH as u8 + 8,
    }
}
