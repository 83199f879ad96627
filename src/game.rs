#![cfg(feature = "std")]

//! Game state machine binding boards, the solver and level progression to
//! player or automation input.

use std::collections::VecDeque;
use std::time::{Duration, Instant};

use crate::board::{Board, Move};
use crate::common::PuzzleError;
use crate::config::MIN_MOVE_INTERVAL_MS;
use crate::level::{Level, LevelManager};
use crate::solver::{self, SearchOutcome};
use crate::vehicle::Direction;

/// Phase of play for the loaded level.
///
/// `Loaded → Playing → {Solving → Replaying} → Won → Loaded(next)`; reset
/// re-clones the current template from any phase but an active replay.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Loaded,
    Playing,
    Solving,
    Replaying,
    Won,
}

/// Result of a manual move request. Throttled and rejected requests are
/// dropped without touching the board; neither is an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    Applied,
    Won,
    Throttled,
    Rejected,
}

/// Result of one replay step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReplayStep {
    Applied,
    Finished,
}

/// Downstream side effects (rendering, audio, telemetry) subscribe here.
/// Callbacks fire from the single mutation path, so a replayed move is
/// indistinguishable from a manual one.
pub trait GameObserver {
    fn vehicle_moved(&mut self, _mv: Move, _assisted: bool) {}

    fn puzzle_solved(&mut self, _level: usize, _moves: u32, _assisted: bool) {}

    fn solve_failed(&mut self, _level: usize) {}
}

/// Core game logic holding the live board, the loaded level and progression.
pub struct GameEngine {
    manager: LevelManager,
    level: Level,
    board: Board,
    phase: Phase,
    selected: Option<u8>,
    move_count: u32,
    pending: VecDeque<Move>,
    assisted: bool,
    last_move_at: Option<Instant>,
    move_interval: Duration,
    observer: Option<Box<dyn GameObserver>>,
}

impl GameEngine {
    /// Create an engine resumed at the progression frontier.
    pub fn new(manager: LevelManager) -> Result<Self, PuzzleError> {
        let level = manager.get_level(manager.max_unlocked());
        let board = level.spawn()?;
        log::info!(
            "loaded level {} ({}), {} vehicles",
            level.index(),
            level.difficulty(),
            board.vehicles().len()
        );
        Ok(Self {
            manager,
            level,
            board,
            phase: Phase::Loaded,
            selected: None,
            move_count: 0,
            pending: VecDeque::new(),
            assisted: false,
            last_move_at: None,
            move_interval: Duration::from_millis(MIN_MOVE_INTERVAL_MS),
            observer: None,
        })
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn level(&self) -> &Level {
        &self.level
    }

    pub fn manager(&self) -> &LevelManager {
        &self.manager
    }

    pub fn manager_mut(&mut self) -> &mut LevelManager {
        &mut self.manager
    }

    pub fn move_count(&self) -> u32 {
        self.move_count
    }

    pub fn selected(&self) -> Option<u8> {
        self.selected
    }

    /// Moves still queued for replay.
    pub fn pending_replay(&self) -> usize {
        self.pending.len()
    }

    /// Whether the current win (if any) came from the solver.
    pub fn was_assisted(&self) -> bool {
        self.assisted
    }

    /// Override the manual-input debounce interval. `Duration::ZERO`
    /// disables throttling.
    pub fn set_move_interval(&mut self, interval: Duration) {
        self.move_interval = interval;
    }

    pub fn set_observer(&mut self, observer: Box<dyn GameObserver>) {
        self.observer = Some(observer);
    }

    /// Discard the current board and load `index` (wrapping past the end of
    /// the catalog). Rejected while automation owns the board and for levels
    /// that are still locked.
    pub fn load_level(&mut self, index: usize) -> Result<(), PuzzleError> {
        if matches!(self.phase, Phase::Solving | Phase::Replaying) {
            return Err(PuzzleError::ReplayActive);
        }
        if !self.manager.is_unlocked(index) {
            return Err(PuzzleError::LevelLocked(index));
        }
        let level = self.manager.get_level(index);
        self.board = level.spawn()?;
        self.level = level;
        self.phase = Phase::Loaded;
        self.selected = None;
        self.move_count = 0;
        self.pending.clear();
        self.assisted = false;
        self.last_move_at = None;
        log::info!("loaded level {} ({})", level.index(), level.difficulty());
        Ok(())
    }

    /// Reload the current level from its template.
    pub fn reset(&mut self) -> Result<(), PuzzleError> {
        self.load_level(self.level.index())
    }

    /// Move on to the next level. Only offered after a win, and only into
    /// unlocked content: a solver-assisted win at the frontier does not
    /// unlock, so advancing from it is rejected.
    pub fn advance(&mut self) -> Result<(), PuzzleError> {
        if self.phase != Phase::Won {
            return Err(PuzzleError::AdvanceUnavailable);
        }
        self.load_level(self.level.index() + 1)
    }

    /// Select the vehicle subsequent move requests steer.
    pub fn select(&mut self, id: u8) -> Result<(), PuzzleError> {
        match self.phase {
            Phase::Loaded => self.phase = Phase::Playing,
            Phase::Playing => {}
            _ => return Err(PuzzleError::InputLocked),
        }
        if self.board.index_of(id).is_none() {
            return Err(PuzzleError::UnknownVehicle(id));
        }
        self.selected = Some(id);
        Ok(())
    }

    /// Request a one-cell move of the selected vehicle. A drag of N cells is
    /// N calls. Requests under the debounce interval are dropped silently.
    pub fn request_move(&mut self, direction: Direction) -> MoveOutcome {
        match self.phase {
            Phase::Loaded | Phase::Playing => {}
            _ => return MoveOutcome::Rejected,
        }
        let Some(id) = self.selected else {
            return MoveOutcome::Rejected;
        };
        if let Some(at) = self.last_move_at {
            if at.elapsed() < self.move_interval {
                return MoveOutcome::Throttled;
            }
        }
        self.phase = Phase::Playing;
        match self.apply_move(
            Move {
                vehicle: id,
                direction,
            },
            false,
        ) {
            Ok(won) => {
                self.last_move_at = Some(Instant::now());
                if won {
                    MoveOutcome::Won
                } else {
                    MoveOutcome::Applied
                }
            }
            Err(_) => MoveOutcome::Rejected,
        }
    }

    /// Run the escape search on the live board and queue its solution for
    /// replay. Gated on the level's solution entitlement. An unsolvable
    /// verdict returns the engine to `Playing` with a non-fatal error.
    /// Returns the number of queued moves; zero means the board was already
    /// at the exit and the win settles immediately.
    pub fn begin_solve(&mut self) -> Result<usize, PuzzleError> {
        match self.phase {
            Phase::Loaded | Phase::Playing => {}
            _ => return Err(PuzzleError::InputLocked),
        }
        if !self.manager.is_entitled(self.level.index()) {
            return Err(PuzzleError::NotEntitled(self.level.index()));
        }
        self.phase = Phase::Solving;
        self.selected = None;
        match solver::solve(&self.board) {
            SearchOutcome::Solved(moves) => {
                let queued = moves.len();
                self.pending = moves.into();
                self.assisted = true;
                if queued == 0 {
                    self.settle_win(true);
                } else {
                    self.phase = Phase::Replaying;
                    log::info!("replaying a {} move solution", queued);
                }
                Ok(queued)
            }
            SearchOutcome::Exhausted | SearchOutcome::LimitReached => {
                self.phase = Phase::Playing;
                self.assisted = false;
                log::warn!("level {} reported unsolvable from here", self.level.index());
                if let Some(observer) = self.observer.as_mut() {
                    observer.solve_failed(self.level.index());
                }
                Err(PuzzleError::Unsolvable)
            }
        }
    }

    /// Apply the next queued solution move through the standard mutation
    /// path. Called by the replay driver on its cadence.
    pub fn step_replay(&mut self) -> Result<ReplayStep, PuzzleError> {
        if self.phase != Phase::Replaying {
            return Err(PuzzleError::NotReplaying);
        }
        let Some(mv) = self.pending.pop_front() else {
            self.phase = Phase::Playing;
            return Ok(ReplayStep::Finished);
        };
        let won = self.apply_move(mv, true)?;
        if won {
            return Ok(ReplayStep::Finished);
        }
        if self.pending.is_empty() {
            self.phase = Phase::Playing;
            return Ok(ReplayStep::Finished);
        }
        Ok(ReplayStep::Applied)
    }

    /// Abandon an active replay and hand the board back to the player. The
    /// sanctioned path for a cancelled driver; a no-op in any other phase.
    pub fn abort_replay(&mut self) {
        if self.phase == Phase::Replaying {
            self.pending.clear();
            self.assisted = false;
            self.phase = Phase::Playing;
            log::info!("replay aborted, returning control to the player");
        }
    }

    /// The one mutation path. Win detection and observer side effects fire
    /// here for manual and replayed moves alike.
    fn apply_move(&mut self, mv: Move, assisted: bool) -> Result<bool, PuzzleError> {
        self.board.apply(mv)?;
        self.move_count += 1;
        log::debug!(
            "vehicle {} moved {} ({} total)",
            mv.vehicle,
            mv.direction,
            self.move_count
        );
        if let Some(observer) = self.observer.as_mut() {
            observer.vehicle_moved(mv, assisted);
        }
        if self.board.is_solved() {
            self.settle_win(assisted);
            return Ok(true);
        }
        Ok(false)
    }

    fn settle_win(&mut self, assisted: bool) {
        self.phase = Phase::Won;
        self.selected = None;
        self.pending.clear();
        self.assisted = assisted;
        if !assisted {
            if self.manager.record_best(self.level.index(), self.move_count) {
                log::info!(
                    "new best for level {}: {} moves",
                    self.level.index(),
                    self.move_count
                );
            }
            if self.manager.record_manual_win(self.level.index()) {
                log::info!("unlocked level {}", self.level.index() + 1);
            }
        }
        if let Some(observer) = self.observer.as_mut() {
            observer.puzzle_solved(self.level.index(), self.move_count, assisted);
        }
        log::info!(
            "level {} won in {} moves{}",
            self.level.index(),
            self.move_count,
            if assisted { " (assisted)" } else { "" }
        );
    }
}
