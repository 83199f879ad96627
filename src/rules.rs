//! Move legality. The single oracle consulted both by interactive input and
//! by solver edge enumeration, so the two can never drift apart.

use alloc::vec::Vec;

use crate::board::{Board, Move};
use crate::vehicle::{Direction, Orientation};

/// Whether the vehicle at `index` may occupy top-left cell `(cx, cy)`.
///
/// A candidate is legal when the fixed coordinate is unchanged, the full
/// footprint stays on the grid, and no cell is shared with another vehicle.
pub fn is_legal(board: &Board, index: usize, cx: usize, cy: usize) -> bool {
    let Some(vehicle) = board.vehicle(index) else {
        return false;
    };
    match vehicle.orientation() {
        Orientation::Horizontal if cy != vehicle.y() => return false,
        Orientation::Vertical if cx != vehicle.x() => return false,
        _ => {}
    }
    let Ok(mask) = vehicle.mask_at(cx, cy) else {
        return false;
    };
    (mask & board.occupancy_without(index)).is_empty()
}

/// Every legal atomic move available on `board`: each vehicle, both
/// directions.
pub fn moves(board: &Board) -> Vec<Move> {
    let mut out = Vec::new();
    for (index, vehicle) in board.vehicles().iter().enumerate() {
        for direction in [Direction::Backward, Direction::Forward] {
            if let Some((cx, cy)) = vehicle.shifted(direction) {
                if is_legal(board, index, cx, cy) {
                    out.push(Move {
                        vehicle: vehicle.id(),
                        direction,
                    });
                }
            }
        }
    }
    out
}
