//! Baleia Points headless runner
//!
//! Loads settings (and optionally assets), then plays the game with the
//! autopilot for a fixed span of simulated time, logging every event.

use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::Result;
use clap::Parser;

use baleia_points::assets::Assets;
use baleia_points::hud::HudView;
use baleia_points::render::frame_vertices;
use baleia_points::settings::Settings;
use baleia_points::sim::{Game, GameEvent, GamePhase, Input, autopilot};

#[derive(Parser)]
#[command(name = "baleia-points")]
#[command(about = "Run the catch-the-food game headlessly with an autopilot")]
struct Args {
    /// Settings JSON file
    #[arg(short, long, default_value = "baleia-points.json")]
    config: PathBuf,

    /// RNG seed (overrides the settings file)
    #[arg(short, long)]
    seed: Option<u64>,

    /// Simulated seconds to run
    #[arg(long, default_value_t = 60.0)]
    seconds: f32,

    /// Simulated frames per second (overrides the settings file)
    #[arg(long)]
    fps: Option<u32>,

    /// Asset directory; when given, the font and shaders must load
    #[arg(short, long)]
    assets: Option<PathBuf>,

    /// Print the final world state as JSON
    #[arg(long)]
    dump: bool,
}

fn main() {
    env_logger::init();

    if let Err(e) = run(Args::parse()) {
        log::error!("{e:#}");
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<()> {
    let mut settings = Settings::load_from(&args.config)?;
    if let Some(fps) = args.fps {
        settings.fps = fps;
    }

    if let Some(dir) = &args.assets {
        Assets::load(dir)?;
    }

    let seed = args.seed.or(settings.seed).unwrap_or_else(clock_seed);
    log::info!("Baleia Points starting (seed {seed}, {} fps)", settings.fps);

    let mut game = Game::with_rules(seed, settings.rules.clone());
    let dt = settings.frame_dt();
    let frames = settings.frame_count(args.seconds)?;

    let mut wins = 0u32;
    let mut losses = 0u32;
    let mut last_hud = Vec::new();

    for frame in 0..frames {
        if game.phase() == GamePhase::Menu {
            game.start();
        }

        let wanted = autopilot::steer(&game);
        for input in Input::ALL {
            if wanted.contains(input) {
                game.press(input);
            } else {
                game.release(input);
            }
        }

        game.update(dt);

        for event in game.drain_events() {
            match event {
                GameEvent::Win => wins += 1,
                GameEvent::GameOver => losses += 1,
                _ => {}
            }
            log::debug!("frame {frame}: {event:?}");
        }

        if settings.show_hud {
            let hud = HudView::from_game(&game).lines();
            if hud != last_hud {
                log::info!("{}", hud.join(" | "));
                last_hud = hud;
            }
        }
    }

    log::info!(
        "Ran {frames} frames: {wins} wins, {losses} losses, {} vertices in last frame",
        frame_vertices(&game).len()
    );

    if args.dump {
        println!("{}", serde_json::to_string_pretty(&game.snapshot())?);
    }

    Ok(())
}

fn clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(0)
}
