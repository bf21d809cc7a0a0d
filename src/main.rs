//! reelspin headless driver.
//!
//! Runs the slot-machine reel animation without a window:
//! - **bevy_ecs** holds the reels, the tween scheduler and the spin machine
//! - a fixed-timestep loop stands in for the renderer's frame callback
//!
//! # Main Loop
//!
//! 1. Load `config.ini` (defaults when missing) and the outcome table
//! 2. Build the ECS world: resources, three reels, spin observers
//! 3. For each requested spin:
//!    - trigger a [`SpinRequestedEvent`] (the spin button)
//!    - step frames until every reel has settled
//!    - print the visible grid and the win
//!
//! # Running
//!
//! ```sh
//! cargo run --release -- --spins 3 --seed 42
//! RUST_LOG=debug cargo run -- --outcome 3 --trace
//! ```

use clap::Parser;
use std::path::PathBuf;

use reelspin::events::spin::SpinRequestedEvent;
use reelspin::game;
use reelspin::resources::gameconfig::MachineConfig;
use reelspin::resources::outcometable::OutcomeTable;
use reelspin::resources::spinrng::SpinRng;
use reelspin::resources::wincounter::WinCounter;

/// Upper bound on frames per spin; a spin at any sane config settles far sooner.
const MAX_FRAMES_PER_SPIN: u64 = 1_000_000;

/// Slot-machine reel animation, run headless.
#[derive(Parser)]
#[command(version, about = "Spin the reels and print where they land.")]
struct Cli {
    /// INI configuration file.
    #[arg(long, value_name = "PATH", default_value = "./config.ini")]
    config: PathBuf,

    /// JSON outcome table replacing the built-in one.
    #[arg(long, value_name = "PATH")]
    outcomes: Option<PathBuf>,

    /// Seed for outcome draws and starting symbols.
    #[arg(long)]
    seed: Option<u64>,

    /// Number of spins to run.
    #[arg(long, default_value_t = 1)]
    spins: u32,

    /// Land every spin on this outcome table index instead of drawing one.
    #[arg(long, value_name = "INDEX")]
    outcome: Option<usize>,

    /// Log the visible grid and blur of every frame at debug level.
    #[arg(long)]
    trace: bool,

    /// Write the effective configuration and exit.
    /// Optionally provide a path (default: the --config path).
    #[arg(long, value_name = "PATH")]
    write_config: Option<Option<PathBuf>>,

    /// Write the outcome table as JSON and exit.
    /// Optionally provide a path (default: outcomes.json).
    #[arg(long, value_name = "PATH")]
    dump_outcomes: Option<Option<PathBuf>>,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    let mut config = MachineConfig::with_path(&cli.config);
    if let Err(e) = config.load_from_file() {
        log::warn!("{e}; using defaults");
    }

    let table = match &cli.outcomes {
        Some(path) => match OutcomeTable::load_from_file(path) {
            Ok(table) => table,
            Err(e) => {
                eprintln!("Error: {e}");
                std::process::exit(1);
            }
        },
        None => OutcomeTable::builtin(),
    };

    // Early-exit: write the configuration and quit
    if let Some(maybe_path) = cli.write_config {
        if let Some(path) = maybe_path {
            config.config_path = path;
        }
        if let Err(e) = config.save_to_file() {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
        println!("Config written to {}", config.config_path.display());
        return;
    }

    // Early-exit: dump the outcome table and quit
    if let Some(maybe_path) = cli.dump_outcomes {
        let path = maybe_path.unwrap_or_else(|| PathBuf::from("outcomes.json"));
        if let Err(e) = table.save_to_file(&path) {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
        println!("Outcome table written to {}", path.display());
        return;
    }

    if let Some(index) = cli.outcome {
        if index >= table.len() {
            eprintln!(
                "Error: outcome {} out of range (table has {} entries)",
                index,
                table.len()
            );
            std::process::exit(1);
        }
    }

    let rng = cli.seed.map(SpinRng::with_seed).unwrap_or_default();
    let dt = config.frame_delta();

    log::info!("reelspin starting: {} spin(s) at {} fps", cli.spins, config.target_fps);
    let mut world = game::build_world(config, table, rng);
    let mut update = game::build_update_schedule();

    for spin in 1..=cli.spins {
        let request = match cli.outcome {
            Some(index) => SpinRequestedEvent::with_outcome(index),
            None => SpinRequestedEvent::random(),
        };
        world.trigger(request);

        let mut frames = 0u64;
        while !game::is_idle(&world) {
            if frames >= MAX_FRAMES_PER_SPIN {
                eprintln!("Error: spin {spin} did not settle after {frames} frames");
                std::process::exit(1);
            }
            game::step(&mut world, &mut update, dt);
            if cli.trace {
                game::trace_frame(&mut world);
            }
            frames += 1;
        }

        let counter = *world.resource::<WinCounter>();
        let columns = game::visible_columns(&mut world);
        println!(
            "Spin {spin}: {frames} frames, win {}\n{}",
            counter.last_win,
            game::format_grid(&columns)
        );
        game::log_settled(&mut world);
    }
}
