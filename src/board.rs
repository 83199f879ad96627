//! Live puzzle state: the vehicles of one level instance and the single
//! validated mutation path shared by manual play and replay.

use alloc::string::String;
use alloc::vec::Vec;
use core::fmt::{self, Write as _};

use crate::bitboard::BitBoard;
use crate::common::PuzzleError;
use crate::config::BOARD_SIZE;
use crate::level::LevelTemplate;
use crate::rules;
use crate::vehicle::{Direction, Vehicle};

type BB = BitBoard<u64, BOARD_SIZE>;

/// One-cell translation request for a vehicle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Move {
    pub vehicle: u8,
    pub direction: Direction,
}

/// A complete snapshot of all vehicle placements at one instant.
///
/// Always created by deep-cloning a level template, never by sharing one:
/// templates are static and a shared reference mutated in play would corrupt
/// every later load of the same level.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    vehicles: Vec<Vehicle>,
    target: usize,
}

impl Board {
    /// Build a fresh board from an owned vehicle list. Exactly one vehicle
    /// must be marked as the target; overlap and bounds of authored data are
    /// not checked here.
    pub fn from_vehicles(vehicles: Vec<Vehicle>) -> Result<Self, PuzzleError> {
        let mut target = None;
        for (i, v) in vehicles.iter().enumerate() {
            if v.is_target() {
                if target.is_some() {
                    return Err(PuzzleError::MultipleTargets);
                }
                target = Some(i);
            }
        }
        let target = target.ok_or(PuzzleError::NoTarget)?;
        Ok(Self { vehicles, target })
    }

    /// Deep-clone a level template into an independent board.
    pub fn from_template(template: &LevelTemplate) -> Result<Self, PuzzleError> {
        Self::from_vehicles(template.vehicles().to_vec())
    }

    /// All vehicles in authored order.
    pub fn vehicles(&self) -> &[Vehicle] {
        &self.vehicles
    }

    /// Vehicle by position in the authored order.
    pub fn vehicle(&self, index: usize) -> Option<&Vehicle> {
        self.vehicles.get(index)
    }

    /// Position of the vehicle carrying `id`.
    pub fn index_of(&self, id: u8) -> Option<usize> {
        self.vehicles.iter().position(|v| v.id() == id)
    }

    /// The vehicle that must reach the exit.
    pub fn target(&self) -> &Vehicle {
        &self.vehicles[self.target]
    }

    /// Union footprint of every vehicle.
    pub fn occupancy(&self) -> BB {
        self.occupancy_without(self.vehicles.len())
    }

    /// Union footprint of every vehicle except the one at `index`.
    pub fn occupancy_without(&self, index: usize) -> BB {
        let mut occ = BB::new();
        for (i, v) in self.vehicles.iter().enumerate() {
            if i != index {
                occ |= v.mask().unwrap_or_default();
            }
        }
        occ
    }

    /// Apply one atomic move. This is the only mutation path; legality is
    /// checked by [`rules::is_legal`] for manual input and solver replay
    /// alike.
    pub fn apply(&mut self, mv: Move) -> Result<(), PuzzleError> {
        let index = self
            .index_of(mv.vehicle)
            .ok_or(PuzzleError::UnknownVehicle(mv.vehicle))?;
        let (cx, cy) = self.vehicles[index]
            .shifted(mv.direction)
            .ok_or(PuzzleError::IllegalMove)?;
        if !rules::is_legal(self, index, cx, cy) {
            return Err(PuzzleError::IllegalMove);
        }
        self.vehicles[index].set_position(cx, cy);
        Ok(())
    }

    /// Goal test: the target's trailing edge has reached the exit boundary.
    pub fn is_solved(&self) -> bool {
        self.target().trailing_edge() == BOARD_SIZE
    }

    /// Fixed-order serialization of all placements, used to deduplicate
    /// search states. Two boards share a key exactly when every vehicle sits
    /// on the same cell.
    pub fn canonical_key(&self) -> String {
        let mut key = String::new();
        for v in &self.vehicles {
            let _ = write!(key, "{}:{},{};", v.id(), v.x(), v.y());
        }
        key
    }

    fn label(v: &Vehicle) -> char {
        if v.is_target() {
            'X'
        } else {
            (b'A' + (v.id().wrapping_sub(1) % 26)) as char
        }
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut grid = [['.'; BOARD_SIZE]; BOARD_SIZE];
        for v in &self.vehicles {
            for y in 0..BOARD_SIZE {
                for x in 0..BOARD_SIZE {
                    if v.occupies(x, y) {
                        grid[y][x] = Self::label(v);
                    }
                }
            }
        }
        for (y, row) in grid.iter().enumerate() {
            for cell in row {
                write!(f, "{} ", cell)?;
            }
            if y + 1 < BOARD_SIZE {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}
