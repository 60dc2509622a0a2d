//! Circle-distance collision between the player and spawned entities

use glam::Vec2;

use super::objects::SpawnedObject;
use super::player::Player;

/// True when two circles overlap (touching edges do not count)
#[inline]
pub fn circles_overlap(a: Vec2, a_radius: f32, b: Vec2, b_radius: f32) -> bool {
    a.distance(b) < a_radius + b_radius
}

/// Whether the player is touching an entity
pub fn player_touches(player: &Player, entity: &SpawnedObject) -> bool {
    circles_overlap(
        player.position,
        player.hit_radius(),
        entity.position,
        entity.hit_radius(),
    )
}
