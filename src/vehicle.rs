//! Vehicle definitions and footprint logic using our `BitBoard`.

use crate::bitboard::{BitBoard, BitBoardError};
use crate::config::BOARD_SIZE;
use core::fmt;

type BB = BitBoard<u64, BOARD_SIZE>;

/// Orientation of a vehicle on the grid. Horizontal vehicles slide along `x`,
/// vertical vehicles along `y`; the other coordinate is fixed for life.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Orientation {
    Horizontal,
    Vertical,
}

/// One-cell translation along a vehicle's moving axis. `Forward` increases the
/// moving coordinate (right or down), `Backward` decreases it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    Backward,
    Forward,
}

impl Direction {
    /// Signed unit offset along the moving axis.
    pub fn delta(self) -> isize {
        match self {
            Direction::Backward => -1,
            Direction::Forward => 1,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Direction::Backward => "backward",
            Direction::Forward => "forward",
        })
    }
}

/// A vehicle placed on the grid: its top-left cell, its length along the
/// orientation axis, and whether it is the one that must reach the exit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Vehicle {
    id: u8,
    x: usize,
    y: usize,
    length: usize,
    orientation: Orientation,
    is_target: bool,
}

impl Vehicle {
    /// Create a vehicle. Lengths other than 2 or 3 are not authored, but the
    /// constructor does not police them; geometry checks happen per move.
    pub const fn new(
        id: u8,
        x: usize,
        y: usize,
        length: usize,
        orientation: Orientation,
        is_target: bool,
    ) -> Self {
        Self {
            id,
            x,
            y,
            length,
            orientation,
            is_target,
        }
    }

    /// Convenience constructor for a horizontal obstacle.
    pub const fn horizontal(id: u8, x: usize, y: usize, length: usize) -> Self {
        Self::new(id, x, y, length, Orientation::Horizontal, false)
    }

    /// Convenience constructor for a vertical obstacle.
    pub const fn vertical(id: u8, x: usize, y: usize, length: usize) -> Self {
        Self::new(id, x, y, length, Orientation::Vertical, false)
    }

    /// Convenience constructor for the escape vehicle. It always slides
    /// horizontally toward the right-edge exit and carries id 0.
    pub const fn target(x: usize, y: usize, length: usize) -> Self {
        Self::new(0, x, y, length, Orientation::Horizontal, true)
    }

    pub fn id(&self) -> u8 {
        self.id
    }

    pub fn x(&self) -> usize {
        self.x
    }

    pub fn y(&self) -> usize {
        self.y
    }

    pub fn length(&self) -> usize {
        self.length
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    pub fn is_target(&self) -> bool {
        self.is_target
    }

    /// Occupancy mask at the current position.
    pub fn mask(&self) -> Result<BB, BitBoardError> {
        self.mask_at(self.x, self.y)
    }

    /// Occupancy mask the vehicle would have at `(x, y)`. Fails when any cell
    /// of the footprint falls outside the grid, which doubles as the bounds
    /// check for candidate positions.
    pub fn mask_at(&self, x: usize, y: usize) -> Result<BB, BitBoardError> {
        let mut mask = BB::new();
        for i in 0..self.length {
            let (cx, cy) = match self.orientation {
                Orientation::Horizontal => (x + i, y),
                Orientation::Vertical => (x, y + i),
            };
            mask.set(cx, cy)?;
        }
        Ok(mask)
    }

    /// Candidate top-left cell after a one-cell translation, or `None` when
    /// the move would cross the zero edge. The far edge is caught by
    /// `mask_at`.
    pub fn shifted(&self, direction: Direction) -> Option<(usize, usize)> {
        let moving = match self.orientation {
            Orientation::Horizontal => self.x,
            Orientation::Vertical => self.y,
        };
        let moved = match direction {
            Direction::Backward => moving.checked_sub(1)?,
            Direction::Forward => moving + 1,
        };
        Some(match self.orientation {
            Orientation::Horizontal => (moved, self.y),
            Orientation::Vertical => (self.x, moved),
        })
    }

    /// One past the last occupied cell along the moving axis.
    pub fn trailing_edge(&self) -> usize {
        match self.orientation {
            Orientation::Horizontal => self.x + self.length,
            Orientation::Vertical => self.y + self.length,
        }
    }

    /// Whether the footprint covers `(x, y)`.
    pub fn occupies(&self, x: usize, y: usize) -> bool {
        match self.orientation {
            Orientation::Horizontal => y == self.y && x >= self.x && x < self.x + self.length,
            Orientation::Vertical => x == self.x && y >= self.y && y < self.y + self.length,
        }
    }

    pub(crate) fn set_position(&mut self, x: usize, y: usize) {
        self.x = x;
        self.y = y;
    }
}
