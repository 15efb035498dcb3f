//! # disunity
//!
//! Runs a level headlessly: sprites are recorded rather than drawn, input is
//! idle and time comes from the system clock.
//!
//! ## Startup Sequence
//!
//! 1. Parse the command line.
//! 2. Load the level file, or fall back to the built-in demo.
//! 3. Merge the level's `config` section with command-line overrides.
//! 4. Run the frame loop until the frame cap is reached.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use disunity_app::headless::{MemoryTextureCache, RecordingRenderer, ScriptedInput, SystemClock};
use disunity_app::{Collaborators, FrameLoop, LevelDescription, World};

#[derive(Parser)]
#[command(name = "disunity", about = "Entity-component-system runtime")]
struct Args {
    /// Level description (JSON). Runs the built-in demo when omitted.
    #[arg(short, long)]
    level: Option<PathBuf>,

    /// Stop after this many frames (0 runs until interrupted).
    #[arg(short, long)]
    frames: Option<u64>,

    /// Target frames per second.
    #[arg(long)]
    fps: Option<u32>,

    /// Run frames back to back instead of pacing them to the fps budget.
    #[arg(long)]
    no_pace: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env()
                .add_directive("disunity_app=info".parse()?)
                .add_directive("disunity=info".parse()?),
        )
        .init();

    let args = Args::parse();

    let level = match &args.level {
        Some(path) => LevelDescription::load(path)
            .with_context(|| format!("loading level {}", path.display()))?,
        None => {
            info!("no level given, using the built-in demo");
            LevelDescription::demo()
        }
    };

    let mut config = level.config.clone().unwrap_or_default();
    if let Some(frames) = args.frames {
        config.max_frames = frames;
    }
    if let Some(fps) = args.fps {
        config.fps = fps;
    }

    let mut world = World::new();
    let mut textures = MemoryTextureCache::new();
    let created = level.apply(&mut world, &mut textures)?;
    info!(
        entities = created.len(),
        textures = textures.len(),
        window_width = config.window_width,
        window_height = config.window_height,
        "world ready"
    );

    let backend = Collaborators {
        renderer: RecordingRenderer::new(),
        textures,
        input: ScriptedInput::idle(),
        clock: SystemClock::new(),
    };
    let mut frame_loop = FrameLoop::new(config, world, backend);
    let frames = frame_loop.run(!args.no_pace);

    let (world, backend) = frame_loop.into_parts();
    info!(
        frames,
        alive = world.entities.len(),
        draw_calls = backend.renderer.last_frame().len(),
        "disunity shut down"
    );
    Ok(())
}
