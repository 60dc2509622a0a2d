//! Baleia Points - catch the food, avoid the obstacles
//!
//! Core modules:
//! - `sim`: Deterministic simulation (player, spawned objects, collisions, game state)
//! - `controls`: Key/mouse to game input mapping
//! - `hud`: Text overlay for each game state
//! - `render`: CPU-side vertex generation for a host renderer
//! - `assets`: Font and shader loading at startup
//! - `settings`: JSON configuration

pub mod assets;
pub mod controls;
pub mod hud;
pub mod render;
pub mod settings;
pub mod sim;

pub use settings::{Rules, Settings};
pub use sim::{Game, GamePhase, Input};

/// Game configuration constants
pub mod consts {
    /// Player moves at this many units per second along each held axis
    pub const PLAYER_SPEED: f32 = 0.6;
    /// Player position bound on each axis
    pub const PLAYER_BOUND: f32 = 0.9;
    /// Player sprite scale
    pub const PLAYER_SCALE: f32 = 0.125;
    pub const STARTING_LIFE: i32 = 3;
    pub const WIN_POINTS: i32 = 10;

    /// Entities spawned per batch
    pub const SPAWN_BATCH: usize = 4;
    /// Spawn interval range in seconds (uniform)
    pub const SPAWN_INTERVAL_MIN: f32 = 2.0;
    pub const SPAWN_INTERVAL_MAX: f32 = 3.0;
    /// Interval used before the first randomized draw
    pub const SPAWN_INTERVAL_INITIAL: f32 = 2.0;
    /// Entity sprite scale
    pub const OBJECT_SCALE: f32 = 0.2;
    /// Entities never spawn within this distance of the origin
    pub const SPAWN_SAFE_RADIUS: f32 = 0.5;
    /// Spawn column (right edge)
    pub const SPAWN_X: f32 = 1.0;
    /// Drift speed divisor applied to the normalized direction
    pub const DRIFT_DIVISOR: f32 = 7.0;
    /// Outline radius range for polygon vertices
    pub const OUTLINE_RADIUS_MIN: f32 = 0.15;
    pub const OUTLINE_RADIUS_MAX: f32 = 0.2;
    pub const OBSTACLE_SIDES_MIN: u32 = 6;
    pub const OBSTACLE_SIDES_MAX: u32 = 20;
    pub const FOOD_SIDES: u32 = 3;

    /// Entities left of this x are removed
    pub const LEFT_EDGE: f32 = -1.0;

    /// Collision radius factors (player scale, entity scale)
    pub const PLAYER_HIT_FACTOR: f32 = 0.9;
    pub const OBJECT_HIT_FACTOR: f32 = 0.12;

    /// Seconds to show GameOver/Win before returning to the menu
    pub const RESTART_DELAY: f32 = 5.0;
}

/// Wrap an angle to [0, 2π)
#[inline]
pub fn wrap_angle(angle: f32) -> f32 {
    let wrapped = angle.rem_euclid(std::f32::consts::TAU);
    // rem_euclid can round up to TAU for tiny negative inputs
    if wrapped >= std::f32::consts::TAU {
        0.0
    } else {
        wrapped
    }
}
