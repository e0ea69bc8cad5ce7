//! Per-icon velocity/position integrator with boundary reflection.
//!
//! # Responsibility
//! - Apply `position += velocity` per tick to every live icon.
//! - Reflect velocity components elastically at container edges and clamp
//!   positions back into bounds.
//! - Gate every update on a generation token so replaced icon sets cannot
//!   be touched by stale callers.
//!
//! # Invariants
//! - A velocity component flips sign exactly when the corresponding
//!   coordinate reaches a boundary; the position is then clamped so large
//!   steps cannot drift past the edge.
//! - A paused icon keeps its velocity but does not move.
//! - Icons never interact with each other; there is no collision model.

use crate::model::bookmark::BookmarkId;
use rand::Rng;

/// Entrance delay between consecutive icons, in ticks.
const ENTRANCE_STAGGER_TICKS: u32 = 6;

/// Axis-aligned container the icons move inside.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub width: f64,
    pub height: f64,
    /// Square icon edge length; icons reflect when their box touches a wall.
    pub icon_size: f64,
}

impl Bounds {
    pub fn new(width: f64, height: f64, icon_size: f64) -> Self {
        Self {
            width,
            height,
            icon_size,
        }
    }

    fn max_x(&self) -> f64 {
        (self.width - self.icon_size).max(0.0)
    }

    fn max_y(&self) -> f64 {
        (self.height - self.icon_size).max(0.0)
    }
}

/// Initial state for one icon, produced by [`scatter`] or by a caller that
/// wants deterministic motion.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IconSeed {
    pub bookmark_id: BookmarkId,
    pub x: f64,
    pub y: f64,
    pub vx: f64,
    pub vy: f64,
    /// Ticks to wait before the icon starts moving (staggered entrance).
    pub delay_ticks: u32,
}

/// Live motion state of one icon. View-only, never persisted.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IconMotion {
    pub bookmark_id: BookmarkId,
    pub x: f64,
    pub y: f64,
    pub vx: f64,
    pub vy: f64,
    pub paused: bool,
    delay_ticks: u32,
}

impl IconMotion {
    fn from_seed(seed: IconSeed) -> Self {
        Self {
            bookmark_id: seed.bookmark_id,
            x: seed.x,
            y: seed.y,
            vx: seed.vx,
            vy: seed.vy,
            paused: false,
            delay_ticks: seed.delay_ticks,
        }
    }

    /// Remaining entrance delay before this icon starts moving.
    pub fn delay_ticks(&self) -> u32 {
        self.delay_ticks
    }
}

/// Generation token identifying one icon set.
///
/// Held by whoever schedules ticks; becomes stale on the next `rebuild` or
/// `stop` and is then rejected by [`MotionEngine::tick`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnimationHandle(u64);

/// Owns the current icon set and advances it one step per tick.
#[derive(Debug)]
pub struct MotionEngine {
    bounds: Bounds,
    icons: Vec<IconMotion>,
    generation: u64,
}

impl MotionEngine {
    /// Creates an engine with an empty icon set.
    pub fn new(bounds: Bounds) -> Self {
        Self {
            bounds,
            icons: Vec::new(),
            generation: 0,
        }
    }

    /// Replaces the whole icon set and returns the new generation token.
    ///
    /// Every handle issued earlier is stale from this point on.
    pub fn rebuild(&mut self, seeds: Vec<IconSeed>) -> AnimationHandle {
        self.generation += 1;
        self.icons = seeds.into_iter().map(IconMotion::from_seed).collect();
        AnimationHandle(self.generation)
    }

    /// Tears the icon set down and invalidates the current handle.
    pub fn stop(&mut self) {
        self.generation += 1;
        self.icons.clear();
    }

    /// Returns the handle for the current icon set.
    pub fn handle(&self) -> AnimationHandle {
        AnimationHandle(self.generation)
    }

    /// Advances every live icon one step.
    ///
    /// Returns `false` without touching any state when `handle` does not
    /// match the current icon set. Callers holding a handle from before a
    /// rebuild observe exactly this: their loop is dead.
    pub fn tick(&mut self, handle: AnimationHandle) -> bool {
        if handle.0 != self.generation {
            return false;
        }

        let max_x = self.bounds.max_x();
        let max_y = self.bounds.max_y();

        for icon in &mut self.icons {
            if icon.delay_ticks > 0 {
                icon.delay_ticks -= 1;
                continue;
            }
            if icon.paused {
                continue;
            }

            icon.x += icon.vx;
            icon.y += icon.vy;

            if icon.x <= 0.0 || icon.x >= max_x {
                icon.vx = -icon.vx;
                icon.x = icon.x.clamp(0.0, max_x);
            }
            if icon.y <= 0.0 || icon.y >= max_y {
                icon.vy = -icon.vy;
                icon.y = icon.y.clamp(0.0, max_y);
            }
        }

        true
    }

    /// Freezes or resumes one icon. Velocity is retained while paused.
    pub fn set_paused(&mut self, bookmark_id: BookmarkId, paused: bool) {
        if let Some(icon) = self
            .icons
            .iter_mut()
            .find(|icon| icon.bookmark_id == bookmark_id)
        {
            icon.paused = paused;
        }
    }

    /// Current icon states, in seed order.
    pub fn icons(&self) -> &[IconMotion] {
        &self.icons
    }

    pub fn bounds(&self) -> Bounds {
        self.bounds
    }
}

/// Seeds one icon per bookmark: random in-bounds position, random non-zero
/// velocity, entrance delay staggered by index.
pub fn scatter(bounds: &Bounds, ids: &[BookmarkId]) -> Vec<IconSeed> {
    let mut rng = rand::thread_rng();
    let max_x = bounds.max_x();
    let max_y = bounds.max_y();

    ids.iter()
        .enumerate()
        .map(|(index, &bookmark_id)| IconSeed {
            bookmark_id,
            x: random_coord(&mut rng, max_x),
            y: random_coord(&mut rng, max_y),
            vx: random_velocity(&mut rng),
            vy: random_velocity(&mut rng),
            delay_ticks: index as u32 * ENTRANCE_STAGGER_TICKS,
        })
        .collect()
}

fn random_coord(rng: &mut impl Rng, max: f64) -> f64 {
    if max > 0.0 {
        rng.gen_range(0.0..max)
    } else {
        0.0
    }
}

fn random_velocity(rng: &mut impl Rng) -> f64 {
    let speed = rng.gen_range(0.6..1.8);
    if rng.gen_bool(0.5) {
        speed
    } else {
        -speed
    }
}
