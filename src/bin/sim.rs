#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use clap::Parser;
#[cfg(feature = "std")]
use gridlock::{
    coalesce, init_logging, solve, GameEngine, LevelManager, MemoryStore, ProgressStore,
    ReplayDriver, NUM_LEVELS,
};
#[cfg(feature = "std")]
use serde_json::json;
#[cfg(feature = "std")]
use std::time::{Duration, Instant};

/// Solve and replay authored levels end to end, printing one JSON summary
/// line per level.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[cfg(feature = "std")]
struct Cli {
    /// Level index to run (wraps past the end of the catalog).
    #[arg(long, default_value_t = 0)]
    level: usize,

    /// Run every authored level instead of a single one.
    #[arg(long)]
    all: bool,

    /// Replay cadence in milliseconds (0 replays as fast as possible).
    #[arg(long, default_value_t = 0)]
    tick_ms: u64,
}

#[cfg(feature = "std")]
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    let indices: Vec<usize> = if cli.all {
        (0..NUM_LEVELS).collect()
    } else {
        vec![cli.level]
    };

    for index in indices {
        let mut store = MemoryStore::new();
        store.set_highest_unlocked(NUM_LEVELS - 1);
        store.set_solution_entitlement(index % NUM_LEVELS, true);

        let manager = LevelManager::new(Box::new(store));
        let mut engine = GameEngine::new(manager).map_err(|e| anyhow::anyhow!(e))?;
        engine.load_level(index).map_err(|e| anyhow::anyhow!(e))?;
        log::info!("starting position:\n{}", engine.board());

        let solution = solve(engine.board()).into_moves();
        let segments = solution.as_deref().map(|m| coalesce(m).len());

        let driver = ReplayDriver::new(Duration::from_millis(cli.tick_ms));
        let started = Instant::now();
        let outcome = driver.solve_then_run(&mut engine).await?;

        let result = json!({
            "level": engine.level().index(),
            "difficulty": engine.level().difficulty().to_string(),
            "outcome": format!("{:?}", outcome),
            "moves": engine.move_count(),
            "segments": segments,
            "elapsed_ms": started.elapsed().as_millis() as u64,
        });
        println!("{}", serde_json::to_string(&result)?);
    }
    Ok(())
}
