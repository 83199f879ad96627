#![cfg(feature = "std")]

//! Fixed-cadence solution replay.
//!
//! The driver owns the schedule, not the mutation: every tick it asks the
//! engine to apply the next queued move through the standard path. A cloneable
//! cancellation handle lets the embedding application abandon a replay, which
//! is the sanctioned way to switch levels while one is active.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use tokio::task::yield_now;
use tokio::time::interval;

use crate::config::REPLAY_TICK_MS;
use crate::game::{GameEngine, Phase, ReplayStep};

/// Cancellation token shared between the driver and the embedding
/// application.
#[derive(Clone)]
pub struct CancelHandle(Arc<AtomicBool>);

impl CancelHandle {
    fn new() -> Self {
        Self(Arc::new(AtomicBool::new(false)))
    }

    /// Request that the running replay stop after the current tick.
    pub fn cancel(&self) {
        self.0.store(true, Ordering::SeqCst);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }
}

/// Terminal state of a replay run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReplayOutcome {
    Completed,
    Cancelled,
}

/// Applies a queued solution to the live board, one move per tick.
pub struct ReplayDriver {
    tick: Duration,
    cancel: CancelHandle,
}

impl Default for ReplayDriver {
    fn default() -> Self {
        Self::new(Duration::from_millis(REPLAY_TICK_MS))
    }
}

impl ReplayDriver {
    pub fn new(tick: Duration) -> Self {
        Self {
            // tokio intervals reject a zero period
            tick: tick.max(Duration::from_millis(1)),
            cancel: CancelHandle::new(),
        }
    }

    /// Handle the embedding application keeps to cancel mid-replay.
    pub fn cancel_handle(&self) -> CancelHandle {
        self.cancel.clone()
    }

    /// Drive the engine's queued replay to completion or cancellation.
    pub async fn run(&self, engine: &mut GameEngine) -> anyhow::Result<ReplayOutcome> {
        let mut ticker = interval(self.tick);
        loop {
            if self.cancel.is_cancelled() {
                engine.abort_replay();
                return Ok(ReplayOutcome::Cancelled);
            }
            ticker.tick().await;
            match engine.step_replay().map_err(|e| anyhow::anyhow!(e))? {
                ReplayStep::Applied => {}
                ReplayStep::Finished => return Ok(ReplayOutcome::Completed),
            }
        }
    }

    /// Defer one scheduling tick so a "calculating" indicator can render,
    /// run the escape search, then replay its solution.
    pub async fn solve_then_run(&self, engine: &mut GameEngine) -> anyhow::Result<ReplayOutcome> {
        yield_now().await;
        engine.begin_solve().map_err(|e| anyhow::anyhow!(e))?;
        if engine.phase() == Phase::Won {
            // empty solution, the board already sat at the exit
            return Ok(ReplayOutcome::Completed);
        }
        self.run(engine).await
    }
}
