use crate::level::LevelTemplate;
use crate::vehicle::Vehicle;

/// Grid side length. The exit sits on the right edge of the target's row.
pub const BOARD_SIZE: usize = 6;

/// Search expansion ceiling; positions that exceed it report as unsolvable.
pub const MAX_SEARCH_STATES: usize = 100_000;

/// Cadence of solution replay, one atomic move per tick.
pub const REPLAY_TICK_MS: u64 = 350;

/// Minimum interval between accepted manual moves; quicker repeats are
/// dropped as input bounce.
pub const MIN_MOVE_INTERVAL_MS: u64 = 60;

pub const NUM_LEVELS: usize = LEVELS.len();

/// Authored catalog. Ordered by difficulty: indexes band into easy, medium
/// and hard thirds. The target always carries id 0, slides horizontally and
/// escapes through the right edge of its row.
pub const LEVELS: [LevelTemplate; 9] = [
    // One sentry over the exit lane.
    LevelTemplate::new(&[
        Vehicle::target(1, 2, 2),
        Vehicle::vertical(1, 4, 1, 3),
    ]),
    // Two sentries, the far one needs the full column.
    LevelTemplate::new(&[
        Vehicle::target(0, 2, 2),
        Vehicle::vertical(1, 3, 2, 2),
        Vehicle::vertical(2, 5, 0, 3),
    ]),
    // The sentry must duck under the roof truck first.
    LevelTemplate::new(&[
        Vehicle::target(1, 2, 2),
        Vehicle::horizontal(1, 3, 0, 2),
        Vehicle::vertical(2, 3, 1, 2),
        Vehicle::horizontal(3, 1, 4, 3),
    ]),
    LevelTemplate::new(&[
        Vehicle::target(0, 2, 2),
        Vehicle::vertical(1, 2, 0, 2),
        Vehicle::vertical(2, 2, 2, 2),
        Vehicle::horizontal(3, 0, 4, 2),
        Vehicle::vertical(4, 4, 1, 3),
        Vehicle::horizontal(5, 3, 5, 2),
    ]),
    LevelTemplate::new(&[
        Vehicle::target(1, 2, 2),
        Vehicle::horizontal(1, 0, 0, 2),
        Vehicle::vertical(2, 0, 3, 2),
        Vehicle::vertical(3, 3, 0, 3),
        Vehicle::horizontal(4, 4, 3, 2),
        Vehicle::vertical(5, 5, 0, 2),
    ]),
    LevelTemplate::new(&[
        Vehicle::target(2, 2, 2),
        Vehicle::vertical(1, 0, 0, 3),
        Vehicle::horizontal(2, 1, 0, 2),
        Vehicle::vertical(3, 4, 0, 2),
        Vehicle::vertical(4, 4, 2, 2),
        Vehicle::horizontal(5, 2, 4, 3),
        Vehicle::vertical(6, 5, 3, 2),
    ]),
    // Every lane cell right of the target is covered.
    LevelTemplate::new(&[
        Vehicle::target(0, 2, 2),
        Vehicle::horizontal(1, 1, 0, 2),
        Vehicle::vertical(2, 2, 2, 2),
        Vehicle::vertical(3, 4, 0, 3),
        Vehicle::vertical(4, 5, 2, 3),
        Vehicle::horizontal(5, 1, 4, 2),
        Vehicle::horizontal(6, 3, 5, 2),
    ]),
    LevelTemplate::new(&[
        Vehicle::target(1, 2, 2),
        Vehicle::vertical(1, 3, 1, 2),
        Vehicle::horizontal(2, 2, 0, 2),
        Vehicle::vertical(3, 4, 2, 2),
        Vehicle::horizontal(4, 3, 4, 2),
        Vehicle::vertical(5, 5, 0, 3),
        Vehicle::horizontal(6, 0, 5, 3),
        Vehicle::vertical(7, 0, 0, 2),
    ]),
    LevelTemplate::new(&[
        Vehicle::target(0, 2, 2),
        Vehicle::vertical(1, 2, 0, 3),
        Vehicle::horizontal(2, 0, 3, 2),
        Vehicle::vertical(3, 3, 2, 3),
        Vehicle::horizontal(4, 4, 0, 2),
        Vehicle::vertical(5, 4, 1, 2),
        Vehicle::horizontal(6, 4, 4, 2),
        Vehicle::vertical(7, 5, 1, 2),
        Vehicle::horizontal(8, 0, 5, 2),
    ]),
];
