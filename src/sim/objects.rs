//! Spawned food and obstacles
//!
//! Entities enter in batches from the right edge on a randomized timer, drift
//! left while spinning, and are removed once hit or past the left edge.

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::f32::consts::TAU;

use super::timer::ElapsedTimer;
use crate::consts::*;
use crate::wrap_angle;

/// What touching an entity does to the player
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ObjectKind {
    /// Costs a life
    Obstacle,
    /// Awards a point
    Food,
}

/// A drifting polygon
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpawnedObject {
    pub id: u32,
    pub kind: ObjectKind,
    pub sides: u32,
    /// Model-space polygon vertices, one per side
    pub outline: Vec<Vec2>,
    /// RGBA, grayscale with opaque alpha
    pub color: [f32; 4],
    pub position: Vec2,
    pub velocity: Vec2,
    pub angular_velocity: f32,
    pub scale: f32,
    /// Radians in [0, 2π)
    pub rotation: f32,
    /// Marked for removal by the collision pass
    pub hit: bool,
}

impl SpawnedObject {
    /// Build an entity of a given kind at a position, with default kinematics.
    /// Useful for hosts and tests that place entities directly.
    pub fn new(id: u32, kind: ObjectKind, position: Vec2) -> Self {
        let sides = match kind {
            ObjectKind::Food => FOOD_SIDES,
            ObjectKind::Obstacle => OBSTACLE_SIDES_MIN,
        };
        Self {
            id,
            kind,
            sides,
            outline: regular_outline(sides, OUTLINE_RADIUS_MAX),
            color: [1.0; 4],
            position,
            velocity: Vec2::ZERO,
            angular_velocity: 0.0,
            scale: OBJECT_SCALE,
            rotation: 0.0,
            hit: false,
        }
    }

    /// Roll a new entity at the right edge
    pub fn random<R: Rng>(id: u32, rng: &mut R) -> Self {
        let kind = if rng.random::<u32>() & 1 == 1 {
            ObjectKind::Food
        } else {
            ObjectKind::Obstacle
        };

        let sides = match kind {
            ObjectKind::Food => FOOD_SIDES,
            ObjectKind::Obstacle => rng.random_range(OBSTACLE_SIDES_MIN..=OBSTACLE_SIDES_MAX),
        };

        let intensity: f32 = rng.random_range(0.5..=1.0);
        let color = [intensity, intensity, intensity, 1.0];

        let angular_velocity = rng.random_range(-1.0..=1.0);

        // Only the horizontal component is rolled, so the drift is always leftward
        let direction = Vec2::new(rng.random_range(-1.0..0.0), 0.0);
        let velocity = direction.normalize_or(Vec2::NEG_X) / DRIFT_DIVISOR;

        let step = TAU / sides as f32;
        let outline = (0..sides)
            .map(|i| {
                let angle = i as f32 * step;
                let radius = rng.random_range(OUTLINE_RADIUS_MIN..=OUTLINE_RADIUS_MAX);
                Vec2::new(angle.cos(), angle.sin()) * radius
            })
            .collect();

        let position = loop {
            let candidate = Vec2::new(SPAWN_X, rng.random_range(-1.0..=1.0));
            if candidate.length() > SPAWN_SAFE_RADIUS {
                break candidate;
            }
        };

        Self {
            id,
            kind,
            sides,
            outline,
            color,
            position,
            velocity,
            angular_velocity,
            scale: OBJECT_SCALE,
            rotation: 0.0,
            hit: false,
        }
    }

    /// Radius used by the collision check
    pub fn hit_radius(&self) -> f32 {
        self.scale * OBJECT_HIT_FACTOR
    }

    /// Hit, or drifted past the left edge
    pub fn is_spent(&self) -> bool {
        self.hit || self.position.x < LEFT_EDGE
    }

    /// Spin and drift by one frame
    pub fn integrate(&mut self, dt: f32) {
        self.rotation = wrap_angle(self.rotation + self.angular_velocity * dt);
        self.position += self.velocity * dt;
    }
}

fn regular_outline(sides: u32, radius: f32) -> Vec<Vec2> {
    let step = TAU / sides as f32;
    (0..sides)
        .map(|i| {
            let angle = i as f32 * step;
            Vec2::new(angle.cos(), angle.sin()) * radius
        })
        .collect()
}

/// The live entity pool and its spawn cadence
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Objects {
    /// Live entities in spawn order
    pub entities: Vec<SpawnedObject>,
    spawn_timer: ElapsedTimer,
    /// Seconds until the next batch, rolled on each spawn
    spawn_interval: f32,
    next_id: u32,
}

impl Default for Objects {
    fn default() -> Self {
        Self::new()
    }
}

impl Objects {
    pub fn new() -> Self {
        Self {
            entities: Vec::new(),
            spawn_timer: ElapsedTimer::new(),
            spawn_interval: SPAWN_INTERVAL_INITIAL,
            next_id: 1,
        }
    }

    /// Clear the pool and spawn a fresh batch
    pub fn reset<R: Rng>(&mut self, rng: &mut R) {
        self.entities.clear();
        self.spawn(rng);
    }

    /// Restart the spawn timer, roll the next interval and append a batch.
    /// Returns the number of entities added.
    pub fn spawn<R: Rng>(&mut self, rng: &mut R) -> usize {
        self.spawn_timer.restart();
        self.spawn_interval = rng.random_range(SPAWN_INTERVAL_MIN..=SPAWN_INTERVAL_MAX);

        self.entities.reserve(SPAWN_BATCH);
        for _ in 0..SPAWN_BATCH {
            let id = self.next_entity_id();
            self.entities.push(SpawnedObject::random(id, rng));
        }

        log::debug!(
            "Spawned {} entities, next batch in {:.2}s",
            SPAWN_BATCH,
            self.spawn_interval
        );
        SPAWN_BATCH
    }

    /// Advance the spawn timer and integrate every entity.
    /// Returns the number of entities spawned this frame.
    pub fn update<R: Rng>(&mut self, dt: f32, rng: &mut R) -> usize {
        self.spawn_timer.advance(dt);
        let spawned = if self.spawn_timer.has_reached(self.spawn_interval) {
            self.spawn(rng)
        } else {
            0
        };

        for entity in &mut self.entities {
            entity.integrate(dt);
        }

        spawned
    }

    /// Drop every entity that was hit or left the play area
    pub fn remove_spent(&mut self) {
        self.entities.retain(|e| !e.is_spent());
    }

    /// Add an entity directly (assigns a fresh id)
    pub fn push(&mut self, mut entity: SpawnedObject) -> u32 {
        let id = self.next_entity_id();
        entity.id = id;
        self.entities.push(entity);
        id
    }

    /// Override the time until the next batch (measured from the last spawn)
    pub fn set_spawn_interval(&mut self, seconds: f32) {
        self.spawn_interval = seconds;
    }

    pub fn spawn_interval(&self) -> f32 {
        self.spawn_interval
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &SpawnedObject> {
        self.entities.iter()
    }

    fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id = self.next_id.wrapping_add(1);
        id
    }
}
