use phf::{Map, phf_map};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// A `(Δcolumn, Δrow)` step in lattice coordinates.
pub type Delta = (isize, isize);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(usize)]
pub enum Sublattice {
    A = 0,
    B = 1,
}

impl Sublattice {
    #[inline]
    pub const fn of_row(row: usize) -> Self {
        if row % 2 == 0 { Self::A } else { Self::B }
    }

    /// The three bond directions of a site on this sublattice.
    ///
    /// The two sets are images of each other under lattice inversion
    /// (`UpRight <-> DownLeft`, `UpLeft <-> DownRight`).
    pub const fn bonds(self) -> [Direction; 3] {
        match self {
            Self::A => [Direction::UpRight, Direction::UpLeft, Direction::DownLeft],
            Self::B => [Direction::UpRight, Direction::DownRight, Direction::DownLeft],
        }
    }
}

impl fmt::Display for Sublattice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::A => write!(f, "A"),
            Self::B => write!(f, "B"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Right,
    Left,
    UpRight,
    UpLeft,
    DownRight,
    DownLeft,
}

const RIGHT: Delta = (1, 0);
const LEFT: Delta = (-1, 0);

// Primitive diagonal moves, indexed by sublattice. A-sites sit on integer columns and B-sites
// half a column to the right, so "right-leaning" moves from B land one column further on.
const UP_RIGHT: [Delta; 2] = [(0, 1), (1, 1)];
const DOWN_RIGHT: [Delta; 2] = [(0, -1), (1, -1)];

const fn compose(first: Delta, second: Delta) -> Delta {
    (first.0 + second.0, first.1 + second.1)
}

static DIRECTION_NAMES: Map<&'static str, Direction> = phf_map! {
    "right" => Direction::Right,
    "r" => Direction::Right,
    "left" => Direction::Left,
    "l" => Direction::Left,
    "up-right" => Direction::UpRight,
    "up_right" => Direction::UpRight,
    "ur" => Direction::UpRight,
    "up-left" => Direction::UpLeft,
    "up_left" => Direction::UpLeft,
    "ul" => Direction::UpLeft,
    "down-right" => Direction::DownRight,
    "down_right" => Direction::DownRight,
    "dr" => Direction::DownRight,
    "down-left" => Direction::DownLeft,
    "down_left" => Direction::DownLeft,
    "dl" => Direction::DownLeft,
};

impl Direction {
    pub const ALL: [Direction; 6] = [
        Self::Right,
        Self::Left,
        Self::UpRight,
        Self::UpLeft,
        Self::DownRight,
        Self::DownLeft,
    ];

    /// The move that undoes this one from the site it lands on.
    pub const fn inverse(self) -> Self {
        match self {
            Self::Right => Self::Left,
            Self::Left => Self::Right,
            Self::UpRight => Self::DownLeft,
            Self::DownLeft => Self::UpRight,
            Self::UpLeft => Self::DownRight,
            Self::DownRight => Self::UpLeft,
        }
    }

    /// Step taken from a site on `sublattice`.
    ///
    /// `UpLeft` and `DownLeft` are not primitives: they are `Left` applied after `UpRight` and
    /// `DownRight`. `Left` never changes the sublattice, so the composition stays keyed by the
    /// origin site.
    pub const fn delta(self, sublattice: Sublattice) -> Delta {
        let s = sublattice as usize;
        match self {
            Self::Right => RIGHT,
            Self::Left => LEFT,
            Self::UpRight => UP_RIGHT[s],
            Self::DownRight => DOWN_RIGHT[s],
            Self::UpLeft => compose(LEFT, UP_RIGHT[s]),
            Self::DownLeft => compose(LEFT, DOWN_RIGHT[s]),
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Right => "right",
            Self::Left => "left",
            Self::UpRight => "up-right",
            Self::UpLeft => "up-left",
            Self::DownRight => "down-right",
            Self::DownLeft => "down-left",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("Unknown lattice direction '{0}'. Expected one of: right, left, up-right, up-left, down-right, down-left.")]
pub struct DirectionParseError(pub String);

impl FromStr for Direction {
    type Err = DirectionParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_ascii_lowercase();
        DIRECTION_NAMES
            .get(key.as_str())
            .copied()
            .ok_or_else(|| DirectionParseError(s.to_string()))
    }
}
