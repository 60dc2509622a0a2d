//! Deterministic simulation module
//!
//! All gameplay logic lives here:
//! - Seeded RNG only, passed in by the caller
//! - Simulated timers driven by frame deltas
//! - Stable iteration order (spawn order)
//! - No rendering or platform dependencies

pub mod autopilot;
pub mod collision;
pub mod game;
pub mod objects;
pub mod player;
pub mod state;
pub mod timer;

pub use collision::{circles_overlap, player_touches};
pub use game::{Game, WorldSnapshot};
pub use objects::{ObjectKind, Objects, SpawnedObject};
pub use player::Player;
pub use state::{GameData, GameEvent, GamePhase, Input, InputSet};
pub use timer::ElapsedTimer;
