//! Common types: puzzle errors and their display forms.

/// Errors returned by board, progression and game operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PuzzleError {
    /// Vehicle id not present in the current configuration.
    UnknownVehicle(u8),
    /// Level template declares no target vehicle.
    NoTarget,
    /// Level template declares more than one target vehicle.
    MultipleTargets,
    /// Requested translation leaves the grid or collides with another vehicle.
    IllegalMove,
    /// Selection or solve requested while automation owns the board.
    InputLocked,
    /// Reset, advance or load requested while a replay is active.
    ReplayActive,
    /// Replay step requested outside the replaying phase.
    NotReplaying,
    /// Advance requested before the current level was won.
    AdvanceUnavailable,
    /// Requested level has not been unlocked yet.
    LevelLocked(usize),
    /// Solution replay is not entitled for this level.
    NotEntitled(usize),
    /// Search exhausted the reachable states or hit its ceiling.
    Unsolvable,
}

impl core::fmt::Display for PuzzleError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            PuzzleError::UnknownVehicle(id) => write!(f, "No vehicle with id {}", id),
            PuzzleError::NoTarget => write!(f, "Level declares no target vehicle"),
            PuzzleError::MultipleTargets => write!(f, "Level declares more than one target vehicle"),
            PuzzleError::IllegalMove => write!(f, "Move is blocked or leaves the grid"),
            PuzzleError::InputLocked => write!(f, "Input is disabled while automation runs"),
            PuzzleError::ReplayActive => write!(f, "Operation rejected while a replay is active"),
            PuzzleError::NotReplaying => write!(f, "No replay is active"),
            PuzzleError::AdvanceUnavailable => write!(f, "Advance is only available after a win"),
            PuzzleError::LevelLocked(index) => write!(f, "Level {} is still locked", index),
            PuzzleError::NotEntitled(index) => {
                write!(f, "Solution replay is not entitled for level {}", index)
            }
            PuzzleError::Unsolvable => write!(f, "No solution exists for this position"),
        }
    }
}
