//! The player-controlled sprite

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::state::{GameData, GamePhase, Input};
use crate::consts::*;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    pub position: Vec2,
    /// Reserved, never integrated
    pub velocity: Vec2,
    pub rotation: f32,
    pub scale: f32,
    pub life: i32,
    pub points: i32,
    /// Counter values restored by `reset`
    starting_life: i32,
}

impl Default for Player {
    fn default() -> Self {
        Self::new(STARTING_LIFE)
    }
}

impl Player {
    pub fn new(starting_life: i32) -> Self {
        Self {
            position: Vec2::ZERO,
            velocity: Vec2::ZERO,
            rotation: 0.0,
            scale: PLAYER_SCALE,
            life: starting_life,
            points: 0,
            starting_life,
        }
    }

    /// Recentre and restore counters
    pub fn reset(&mut self) {
        self.position = Vec2::ZERO;
        self.velocity = Vec2::ZERO;
        self.rotation = 0.0;
        self.reset_life();
        self.reset_points();
    }

    /// Move along each held axis while Playing
    ///
    /// Axes are independent, so holding two directions moves diagonally
    /// faster than along a single axis.
    pub fn update(&mut self, game_data: &GameData, dt: f32) {
        if game_data.phase != GamePhase::Playing {
            return;
        }

        let input = &game_data.input;
        let step = PLAYER_SPEED * dt;
        let mut pos = self.position;

        if input.contains(Input::Up) && pos.y < PLAYER_BOUND {
            pos.y += step;
        }
        if input.contains(Input::Left) && pos.x > -PLAYER_BOUND {
            pos.x -= step;
        }
        if input.contains(Input::Right) && pos.x < PLAYER_BOUND {
            pos.x += step;
        }
        if input.contains(Input::Down) && pos.y > -PLAYER_BOUND {
            pos.y -= step;
        }

        self.position = pos.clamp(Vec2::splat(-PLAYER_BOUND), Vec2::splat(PLAYER_BOUND));
    }

    pub fn add_point(&mut self) {
        self.points += 1;
    }

    pub fn reset_points(&mut self) {
        self.points = 0;
    }

    pub fn reduce_life(&mut self) {
        self.life -= 1;
    }

    pub fn reset_life(&mut self) {
        self.life = self.starting_life;
    }

    /// Radius used by the collision check
    pub fn hit_radius(&self) -> f32 {
        self.scale * PLAYER_HIT_FACTOR
    }
}
