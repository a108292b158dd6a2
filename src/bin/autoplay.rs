//! Headless autoplay runner
//!
//! Lets the greedy autopilot play one run and prints a summary, for
//! playtesting balance changes in the config.

use std::path::PathBuf;
use std::thread;
use std::time::{Duration, Instant};

use clap::Parser;
use serde::Serialize;
use survival_arcade::audio::{dispatch, LoggingAudio};
use survival_arcade::core::config::{load_config, SimulationConfig};
use survival_arcade::core::error::Result;
use survival_arcade::ecs::world::World;
use survival_arcade::render::assets::DirectoryAssets;
use survival_arcade::simulation::{autopilot, run_simulation_tick, FixedTimestep, SimulationEvent};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "autoplay")]
#[command(about = "Let the autopilot play one run and report how it went")]
struct Args {
    /// TOML config file (defaults are used when omitted)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Override the config seed
    #[arg(long)]
    seed: Option<u64>,

    /// Maximum ticks before stopping
    #[arg(long, default_value_t = 36_000)]
    ticks: u64,

    /// Pace ticks against the wall clock instead of running flat out
    #[arg(long)]
    realtime: bool,

    /// Directory holding sound files
    #[arg(long, default_value = "assets")]
    assets: PathBuf,

    /// Output format: json or text
    #[arg(long, default_value = "json")]
    format: String,
}

#[derive(Serialize, Default)]
struct RunSummary {
    seed: u64,
    ticks: u64,
    game_over: bool,
    cause: Option<String>,
    score: u32,
    food: u32,
    water: u32,
    wood: u32,
    shots_fired: u32,
    hostiles_destroyed: u32,
    contact_frames: u32,
    sounds: usize,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("survival_arcade=warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let mut config = match &args.config {
        Some(path) => load_config(path)?,
        None => SimulationConfig::default(),
    };
    if let Some(seed) = args.seed {
        config.seed = seed;
    }

    let mut summary = RunSummary {
        seed: config.seed,
        ..Default::default()
    };
    let mut clock = FixedTimestep::new(config.tick_duration(), config.timing.max_catch_up_steps);
    let dt = clock.step();
    let mut world = World::new(config);
    let mut audio = LoggingAudio::new(DirectoryAssets::new(&args.assets));
    let mut last = Instant::now();

    while world.current_tick < args.ticks && world.phase.is_playing() {
        let steps = if args.realtime {
            let now = Instant::now();
            let steps = clock.advance(now - last);
            last = now;
            if steps == 0 {
                thread::sleep(Duration::from_millis(1));
                continue;
            }
            steps
        } else {
            1
        };

        for _ in 0..steps {
            let input = autopilot::decide(&world);
            let events = run_simulation_tick(&mut world, &input, &[], dt);
            summary.sounds += dispatch(&events, &mut audio);
            tally(&mut summary, &events);
            if !world.phase.is_playing() {
                break;
            }
        }
    }

    summary.ticks = world.current_tick;
    summary.game_over = !world.phase.is_playing();
    summary.score = world.player.score;
    summary.food = world.player.inventory.food;
    summary.water = world.player.inventory.water;
    summary.wood = world.player.inventory.wood;

    if args.format == "json" {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        println!("=== Autoplay (seed {}) ===", summary.seed);
        println!("Ticks:      {}", summary.ticks);
        println!(
            "Outcome:    {}",
            summary.cause.as_deref().unwrap_or("survived")
        );
        println!("Score:      {}", summary.score);
        println!(
            "Inventory:  food {} water {} wood {}",
            summary.food, summary.water, summary.wood
        );
        println!(
            "Combat:     {} shots, {} kills, {} frames in contact",
            summary.shots_fired, summary.hostiles_destroyed, summary.contact_frames
        );
    }
    Ok(())
}

fn tally(summary: &mut RunSummary, events: &[SimulationEvent]) {
    for event in events {
        match event {
            SimulationEvent::ProjectileFired { .. } => summary.shots_fired += 1,
            SimulationEvent::HostileDestroyed { .. } => summary.hostiles_destroyed += 1,
            SimulationEvent::ContactDamage { .. } => summary.contact_frames += 1,
            SimulationEvent::GameOver { cause, .. } => {
                summary.cause = Some(format!("{:?}", cause).to_lowercase())
            }
            _ => {}
        }
    }
}
