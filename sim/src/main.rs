use std::path::PathBuf;
use std::sync::atomic::Ordering;

use anyhow::Result;
use bevy_time::Time;
use clap::Parser;
use tokio::time::{self, Duration, Instant, MissedTickBehavior};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use sim::{
    resources::{CatchCounter, GameOverFlag},
    scenario::Scenario,
    setup::build_world,
};

// ============================================================================
// CLI Argument Parsing
// ============================================================================

#[derive(Parser)]
#[command(author, version, about = "Headless rooftop-heist gameplay sim", long_about = None)]
struct Args {
    // Scenario file (JSON); the built-in rooftop layout when omitted
    #[arg(short, long)]
    scenario: Option<PathBuf>,

    // Simulation tick rate in Hz
    #[arg(long, default_value_t = 30)]
    tick_rate: u64,

    // Stop after this many ticks; 0 runs until a player is out of lives
    #[arg(long, default_value_t = 0)]
    ticks: u64,

    // Seed for the player wander model
    #[arg(long, default_value_t = 7)]
    seed: u64,
}

// ============================================================================
// Main
// ============================================================================

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = Args::parse();

    let scenario = match &args.scenario {
        Some(path) => Scenario::from_path(path)?,
        None => Scenario::rooftop_default(),
    };
    info!(
        sentries = scenario.sentries.len(),
        players = scenario.players.len(),
        fans = scenario.fans.len(),
        "scenario loaded"
    );

    let (mut world, mut schedule) = build_world(&scenario, args.seed);

    // Fixed-rate tick loop; a missed deadline skips instead of bursting.
    let tick_duration = Duration::from_nanos(1_000_000_000 / args.tick_rate.max(1));
    let mut interval = time::interval(tick_duration);
    interval.set_missed_tick_behavior(MissedTickBehavior::Skip);

    info!(hz = args.tick_rate, "starting sim loop");

    let mut frame: u64 = 0;
    loop {
        interval.tick().await;

        let update_start = Instant::now();
        world.resource_mut::<Time>().advance_by(tick_duration);
        schedule.run(&mut world);
        let update_elapsed = update_start.elapsed();

        if update_elapsed > tick_duration {
            warn!(
                "tick {} took {:.2}ms (exceeded {:.2}ms budget)",
                frame,
                update_elapsed.as_secs_f64() * 1000.0,
                tick_duration.as_secs_f64() * 1000.0
            );
        }

        frame += 1;

        if world.resource::<GameOverFlag>().0 {
            info!(frame, "game over");
            break;
        }
        if args.ticks > 0 && frame >= args.ticks {
            break;
        }
    }

    let catches = world.resource::<CatchCounter>().0.load(Ordering::Relaxed);
    info!(frames = frame, catches, "simulation finished");

    Ok(())
}
