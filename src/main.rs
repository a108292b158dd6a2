//! Survival Arcade - interactive text frontend
//!
//! Drives the simulation one frame (or a batch of frames) at a time from
//! stdin and prints the HUD, standing in for a windowed presenter.

use std::io::{self, Write};
use std::path::PathBuf;

use clap::Parser;
use survival_arcade::audio::{dispatch, LoggingAudio};
use survival_arcade::core::config::{load_config, SimulationConfig};
use survival_arcade::core::error::Result;
use survival_arcade::ecs::world::World;
use survival_arcade::render::assets::DirectoryAssets;
use survival_arcade::render::snapshot;
use survival_arcade::simulation::{run_simulation_tick, Command, PlayerInput, SimulationEvent};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "survival-arcade")]
#[command(about = "Play the survival simulation from the terminal")]
struct Args {
    /// TOML config file (defaults are used when omitted)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Override the config seed
    #[arg(long)]
    seed: Option<u64>,

    /// Directory holding sprites and sounds
    #[arg(long, default_value = "assets")]
    assets: PathBuf,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("survival_arcade=info")),
        )
        .init();

    let args = Args::parse();
    let mut config = match &args.config {
        Some(path) => load_config(path)?,
        None => SimulationConfig::default(),
    };
    if let Some(seed) = args.seed {
        config.seed = seed;
    }

    tracing::info!("Survival Arcade starting (seed {})", config.seed);

    let mut world = World::new(config);
    let mut audio = LoggingAudio::new(DirectoryAssets::new(&args.assets));
    let mut held = PlayerInput::IDLE;

    println!("\n=== SURVIVAL ARCADE ===");
    println!();
    println!("Commands:");
    println!("  tick / t          - Advance one frame with the held keys");
    println!("  run <n>           - Advance n frames with the held keys");
    println!("  hold <keys>       - Hold keys: l r u d (move), f (fire); e.g. 'hold rf'");
    println!("  release           - Release all keys");
    println!("  restart / r       - Restart after game over");
    println!("  status / s        - Show every entity");
    println!("  quit / q          - Exit");
    println!();

    loop {
        display_hud(&world, &held);

        print!("> ");
        io::stdout().flush()?;

        let mut line = String::new();
        if io::stdin().read_line(&mut line)? == 0 {
            break;
        }
        let line = line.trim();

        let (frames, commands): (u32, Vec<Command>) = match line.split_once(' ') {
            _ if line.is_empty() => continue,
            _ if line == "tick" || line == "t" => (1, Vec::new()),
            _ if line == "restart" || line == "r" => (1, vec![Command::Restart]),
            _ if line == "quit" || line == "q" => (1, vec![Command::Quit]),
            _ if line == "release" => {
                held = PlayerInput::IDLE;
                continue;
            }
            _ if line == "status" || line == "s" => {
                display_entities(&world);
                continue;
            }
            Some(("hold", keys)) => {
                held = PlayerInput::from_keys(keys);
                continue;
            }
            Some(("run", n)) => match n.trim().parse::<u32>() {
                Ok(n) => (n, Vec::new()),
                Err(_) => {
                    println!("Usage: run <number>");
                    continue;
                }
            },
            _ => {
                println!("Unknown command. Available: tick, run <n>, hold <keys>, release, restart, status, quit");
                continue;
            }
        };

        let dt = world.config.tick_duration();
        for i in 0..frames {
            let pending: &[Command] = if i == 0 { &commands } else { &[] };
            let events = run_simulation_tick(&mut world, &held, pending, dt);
            dispatch(&events, &mut audio);
            report(&events);
            if world.quit_requested || !world.phase.is_playing() {
                break;
            }
        }

        if world.quit_requested {
            break;
        }
    }

    println!(
        "\nGoodbye! Final score {} after {} ticks.",
        world.player.score, world.current_tick
    );
    Ok(())
}

fn report(events: &[SimulationEvent]) {
    for event in events {
        match event {
            SimulationEvent::ResourceCollected { kind, .. } => println!("  picked up {}", kind),
            SimulationEvent::HostileDestroyed { id } => println!("  hostile {} destroyed", id),
            SimulationEvent::GameOver { cause, score, .. } => {
                println!("  {:?} ran out. Final score {}", cause, score)
            }
            SimulationEvent::Restarted { .. } => println!("  new run started"),
            _ => {}
        }
    }
}

fn display_hud(world: &World, held: &PlayerInput) {
    let frame = snapshot(world);
    println!();
    println!(
        "--- Tick {} | Hostiles: {} | Projectiles: {} | Held: {:?} ---",
        frame.tick,
        world.hostiles.len(),
        world.player.projectiles.len(),
        held
    );
    println!("  {}", frame.hud_lines().join(" | "));
    if let Some(banner) = &frame.banner {
        println!("  *** {} ***", banner);
    }
}

fn display_entities(world: &World) {
    for entity in snapshot(world).entities {
        let id = entity
            .id
            .map(|id| id.to_string())
            .unwrap_or_else(|| "-".to_string());
        println!(
            "  {:<10} {:>5} at ({:>7.1}, {:>7.1}) {}",
            entity.asset, id, entity.position.x, entity.position.y,
            if entity.facing != 0.0 {
                format!("facing {:.0}", entity.facing)
            } else {
                String::new()
            }
        );
    }
}
