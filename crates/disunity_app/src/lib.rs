//! # disunity_app
//!
//! Runs the Disunity ECS runtime: owns the [`World`], drives the
//! [`FrameLoop`], loads levels and provides headless collaborators for
//! running without a window.
//!
//! ```no_run
//! use disunity_app::headless::{MemoryTextureCache, RecordingRenderer, ScriptedInput, SystemClock};
//! use disunity_app::{Collaborators, FrameLoop, LevelDescription, World};
//! use disunity_system::EngineConfig;
//!
//! let mut world = World::new();
//! let mut textures = MemoryTextureCache::new();
//! LevelDescription::demo().apply(&mut world, &mut textures)?;
//!
//! let backend = Collaborators {
//!     renderer: RecordingRenderer::new(),
//!     textures,
//!     input: ScriptedInput::idle(),
//!     clock: SystemClock::new(),
//! };
//! let mut frame_loop = FrameLoop::new(EngineConfig::default().with_max_frames(60), world, backend);
//! frame_loop.run(true);
//! # Ok::<(), disunity_app::LevelError>(())
//! ```

pub mod error;
pub mod handlers;
pub mod headless;
pub mod level;
pub mod scheduler;
pub mod tick;
pub mod world;

pub use error::LevelError;
pub use handlers::register_default_handlers;
pub use level::{EntityDescription, LevelDescription, TextureEntry};
pub use scheduler::Scheduler;
pub use tick::{Collaborators, FrameLoop, FrameStats};
pub use world::World;
