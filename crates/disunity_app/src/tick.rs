//! The frame loop.
//!
//! One frame runs these phases in order:
//!
//! 1. Poll the input collaborator and apply held key bindings.
//! 2. Sample the clock for the frame's delta time.
//! 3. Re-subscribe event handlers, if configured.
//! 4. Purge entities marked for deletion (the only purge point).
//! 5. Run the update systems: movement, health, animation, box collision.
//! 6. Render: sprites in z order, then collider outlines when enabled.
//! 7. Present the frame.
//!
//! The loop stops when the input collaborator asks to close or after the
//! configured number of frames.

use std::time::Instant;

use disunity_system::{
    Clock, DebugBoxSystem, EngineConfig, InputSource, KeyboardInputSystem, RenderSystem, Renderer,
    TextureCache,
};
use tracing::{debug, info, warn};

use crate::handlers::register_default_handlers;
use crate::scheduler::Scheduler;
use crate::world::World;

/// The outside world the loop talks to.
#[derive(Debug)]
pub struct Collaborators<R, T, I, C> {
    pub renderer: R,
    pub textures: T,
    pub input: I,
    pub clock: C,
}

/// What happened during one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameStats {
    pub frame: u64,
    pub dt: f64,
    /// Bound keys held during the input phase.
    pub keys_held: usize,
    /// Entities removed at the purge point.
    pub purged: usize,
    /// Sprites submitted to the renderer.
    pub sprites_drawn: usize,
    /// Collider outlines submitted to the renderer.
    pub outlines_drawn: usize,
}

/// Owns the world, the systems and the collaborators, and drives frames.
#[derive(Debug)]
pub struct FrameLoop<R, T, I, C> {
    /// Frames completed so far.
    frame: u64,
    config: EngineConfig,
    world: World,
    scheduler: Scheduler,
    keyboard: KeyboardInputSystem,
    render: RenderSystem,
    debug_boxes: DebugBoxSystem,
    backend: Collaborators<R, T, I, C>,
    /// Clock reading at the end of the previous frame's input phase.
    previous_time: f64,
}

impl<R, T, I, C> FrameLoop<R, T, I, C>
where
    R: Renderer,
    T: TextureCache,
    I: InputSource,
    C: Clock,
{
    /// Build a loop around an already populated world.
    ///
    /// The default event handlers are subscribed here, once.
    #[must_use]
    pub fn new(config: EngineConfig, mut world: World, backend: Collaborators<R, T, I, C>) -> Self {
        register_default_handlers(&mut world.events);
        let previous_time = backend.clock.now();
        Self {
            frame: 0,
            scheduler: Scheduler::with_defaults(&config),
            keyboard: KeyboardInputSystem::from_config(&config),
            render: RenderSystem,
            debug_boxes: DebugBoxSystem,
            config,
            world,
            backend,
            previous_time,
        }
    }

    /// Frames completed so far.
    #[must_use]
    pub fn frame(&self) -> u64 {
        self.frame
    }

    #[must_use]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    #[must_use]
    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    #[must_use]
    pub fn scheduler(&self) -> &Scheduler {
        &self.scheduler
    }

    #[must_use]
    pub fn collaborators(&self) -> &Collaborators<R, T, I, C> {
        &self.backend
    }

    pub fn collaborators_mut(&mut self) -> &mut Collaborators<R, T, I, C> {
        &mut self.backend
    }

    /// Tear the loop down, returning the world and collaborators.
    #[must_use]
    pub fn into_parts(self) -> (World, Collaborators<R, T, I, C>) {
        (self.world, self.backend)
    }

    /// Returns `true` once the loop should stop.
    #[must_use]
    pub fn finished(&self) -> bool {
        if self.backend.input.should_close() {
            return true;
        }
        self.config.max_frames > 0 && self.frame >= self.config.max_frames
    }

    /// Run one full frame.
    pub fn step(&mut self) -> FrameStats {
        self.frame += 1;
        let frame = self.frame;

        // Input.
        self.backend.input.poll();
        let now = self.backend.clock.now();
        let dt = (now - self.previous_time).max(0.0);
        self.previous_time = now;
        let keys_held = {
            let mut ctx = self.world.system_context(frame, dt);
            self.keyboard.run(&self.backend.input, &mut ctx)
        };

        // Update.
        if self.config.resubscribe_each_frame {
            self.world.events.clear();
            register_default_handlers(&mut self.world.events);
        }
        let purged = self.world.purge().len();
        {
            let mut ctx = self.world.system_context(frame, dt);
            self.scheduler.run(&mut ctx);
        }

        // Render.
        self.backend.renderer.begin_frame();
        let sprites_drawn = self.render.run(
            &self.world.entities,
            &self.world.components,
            &mut self.backend.renderer,
            &self.backend.textures,
        );
        let outlines_drawn = if self.config.debug_colliders {
            self.debug_boxes.run(
                &self.world.entities,
                &self.world.components,
                &mut self.backend.renderer,
            )
        } else {
            0
        };
        self.backend.renderer.end_frame();
        self.backend.renderer.present();

        debug!(
            frame,
            dt,
            purged,
            alive = self.world.entities.len() - self.world.entities.pending_count(),
            sprites = sprites_drawn,
            "frame complete"
        );

        FrameStats {
            frame,
            dt,
            keys_held,
            purged,
            sprites_drawn,
            outlines_drawn,
        }
    }

    /// Run frames until the input collaborator asks to close or the frame
    /// cap is reached. With `pace` set, each frame is padded with sleep to
    /// the configured fps budget. Returns the number of frames run.
    pub fn run(&mut self, pace: bool) -> u64 {
        let budget = if pace {
            self.config.frame_budget()
        } else {
            None
        };
        let start_frame = self.frame;

        info!(
            fps = self.config.fps,
            max_frames = self.config.max_frames,
            paced = budget.is_some(),
            "starting frame loop"
        );

        while !self.finished() {
            let start = Instant::now();
            self.step();

            let Some(budget) = budget else {
                continue;
            };
            let elapsed = start.elapsed();
            if elapsed < budget {
                std::thread::sleep(budget - elapsed);
            } else {
                warn!(
                    frame = self.frame,
                    elapsed_ms = elapsed.as_millis() as u64,
                    budget_ms = budget.as_millis() as u64,
                    "frame exceeded time budget"
                );
            }
        }

        let frames = self.frame - start_frame;
        info!(frames, "frame loop stopped");
        frames
    }
}
