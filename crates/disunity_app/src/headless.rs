//! Headless collaborators.
//!
//! These let the frame loop run without a window: the renderer records draw
//! calls instead of rasterising, textures are registered by name only, input
//! comes from a script, and time comes from either the system clock or a
//! fixed step.

use std::cell::Cell;
use std::collections::{HashMap, HashSet};
use std::path::{Path, PathBuf};
use std::time::Instant;

use disunity_event::Key;
use disunity_math::{Color, Rect, Vec2};
use disunity_system::{Clock, InputSource, Renderer, TextureCache, TextureHandle};
use tracing::{debug, trace};

// ── Renderer ────────────────────────────────────────────────────────────────

/// One recorded draw call.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCall {
    Sprite {
        texture: TextureHandle,
        source: Rect,
        dest: Rect,
        origin: Vec2,
        rotation: f32,
        tint: Color,
    },
    RectOutline {
        rect: Rect,
        color: Color,
    },
}

/// A renderer that keeps the draw calls of the last finished frame.
#[derive(Debug, Default)]
pub struct RecordingRenderer {
    current: Vec<DrawCall>,
    last_frame: Vec<DrawCall>,
    frames: u64,
    in_frame: bool,
}

impl RecordingRenderer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Draw calls of the most recently finished frame.
    #[must_use]
    pub fn last_frame(&self) -> &[DrawCall] {
        &self.last_frame
    }

    /// Number of frames finished so far.
    #[must_use]
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Sprite draw calls of the last frame.
    pub fn sprites(&self) -> impl Iterator<Item = &DrawCall> {
        self.last_frame
            .iter()
            .filter(|call| matches!(call, DrawCall::Sprite { .. }))
    }

    /// Outline draw calls of the last frame.
    pub fn outlines(&self) -> impl Iterator<Item = &DrawCall> {
        self.last_frame
            .iter()
            .filter(|call| matches!(call, DrawCall::RectOutline { .. }))
    }
}

impl Renderer for RecordingRenderer {
    fn begin_frame(&mut self) {
        self.current.clear();
        self.in_frame = true;
    }

    fn draw_sprite(
        &mut self,
        texture: TextureHandle,
        source: Rect,
        dest: Rect,
        origin: Vec2,
        rotation: f32,
        tint: Color,
    ) {
        if texture.is_empty() {
            return;
        }
        self.current.push(DrawCall::Sprite {
            texture,
            source,
            dest,
            origin,
            rotation,
            tint,
        });
    }

    fn draw_rect_outline(&mut self, rect: Rect, color: Color) {
        self.current.push(DrawCall::RectOutline { rect, color });
    }

    fn end_frame(&mut self) {
        if !self.in_frame {
            return;
        }
        self.in_frame = false;
        self.frames += 1;
        self.last_frame = std::mem::take(&mut self.current);
        trace!(
            frame = self.frames,
            calls = self.last_frame.len(),
            "frame recorded"
        );
    }
}

// ── Textures ────────────────────────────────────────────────────────────────

/// Hands out sequential handles without touching the file system.
#[derive(Debug, Default)]
pub struct MemoryTextureCache {
    handles: HashMap<String, TextureHandle>,
    paths: HashMap<TextureHandle, PathBuf>,
}

impl MemoryTextureCache {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of textures registered.
    #[must_use]
    pub fn len(&self) -> usize {
        self.handles.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.handles.is_empty()
    }

    /// The path a handle was loaded from.
    #[must_use]
    pub fn path(&self, handle: TextureHandle) -> Option<&Path> {
        self.paths.get(&handle).map(PathBuf::as_path)
    }
}

impl TextureCache for MemoryTextureCache {
    fn load_texture(&mut self, asset_id: &str, path: &Path) -> TextureHandle {
        if let Some(&handle) = self.handles.get(asset_id) {
            self.paths.insert(handle, path.to_path_buf());
            return handle;
        }
        let handle = TextureHandle(self.handles.len() as u32 + 1);
        self.handles.insert(asset_id.to_string(), handle);
        self.paths.insert(handle, path.to_path_buf());
        debug!(asset = asset_id, path = %path.display(), handle = handle.0, "texture registered");
        handle
    }

    fn resolve(&self, asset_id: &str) -> TextureHandle {
        self.handles
            .get(asset_id)
            .copied()
            .unwrap_or(TextureHandle::EMPTY)
    }
}

// ── Input ───────────────────────────────────────────────────────────────────

/// Replays a fixed sequence of held-key sets, one per frame.
///
/// Frames past the end of the script hold nothing. If `close_after` is set,
/// [`InputSource::should_close`] turns true once that many frames have been
/// polled.
#[derive(Debug, Default)]
pub struct ScriptedInput {
    frames: Vec<HashSet<Key>>,
    polled: usize,
    close_after: Option<usize>,
}

impl ScriptedInput {
    /// A script that holds `frames[n]` during the n-th polled frame.
    #[must_use]
    pub fn new(frames: Vec<Vec<Key>>) -> Self {
        Self {
            frames: frames
                .into_iter()
                .map(|keys| keys.into_iter().collect())
                .collect(),
            polled: 0,
            close_after: None,
        }
    }

    /// No keys, never closes.
    #[must_use]
    pub fn idle() -> Self {
        Self::default()
    }

    /// Ask to close after `frames` polls.
    #[must_use]
    pub fn close_after(mut self, frames: usize) -> Self {
        self.close_after = Some(frames);
        self
    }

    fn current(&self) -> Option<&HashSet<Key>> {
        self.polled
            .checked_sub(1)
            .and_then(|index| self.frames.get(index))
    }
}

impl InputSource for ScriptedInput {
    fn poll(&mut self) {
        self.polled += 1;
    }

    fn is_key_down(&self, key: Key) -> bool {
        self.current().is_some_and(|keys| keys.contains(&key))
    }

    fn should_close(&self) -> bool {
        self.close_after.is_some_and(|frames| self.polled >= frames)
    }
}

// ── Clocks ──────────────────────────────────────────────────────────────────

/// Wall-clock time since construction.
#[derive(Debug, Clone, Copy)]
pub struct SystemClock {
    start: Instant,
}

impl SystemClock {
    #[must_use]
    pub fn new() -> Self {
        Self {
            start: Instant::now(),
        }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    fn now(&self) -> f64 {
        self.start.elapsed().as_secs_f64()
    }
}

/// Advances by a fixed step every time it is read.
///
/// The first read returns 0, so a frame loop that samples the clock once at
/// start-up and once per frame sees exactly `step` as every frame's delta.
#[derive(Debug, Clone)]
pub struct FixedClock {
    step: f64,
    next: Cell<f64>,
}

impl FixedClock {
    #[must_use]
    pub fn new(step: f64) -> Self {
        Self {
            step,
            next: Cell::new(0.0),
        }
    }

    /// A clock stepping at `fps` frames per second.
    #[must_use]
    pub fn at_fps(fps: u32) -> Self {
        Self::new(1.0 / f64::from(fps.max(1)))
    }

    #[must_use]
    pub fn step(&self) -> f64 {
        self.step
    }
}

impl Clock for FixedClock {
    fn now(&self) -> f64 {
        let now = self.next.get();
        self.next.set(now + self.step);
        now
    }
}
