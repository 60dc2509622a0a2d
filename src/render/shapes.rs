//! Shape generation for the player and spawned entities

use glam::{Mat2, Vec2};

use super::vertex::{Vertex, colors};
use crate::consts::LEFT_EDGE;
use crate::sim::{Game, GamePhase, Player, SpawnedObject};

/// Player body corners in sprite units, before normalization
const PLAYER_BODY: [Vec2; 4] = [
    Vec2::new(-9.5, 12.5),
    Vec2::new(-9.5, -7.5),
    Vec2::new(9.5, -7.5),
    Vec2::new(9.5, 12.5),
];
const PLAYER_BODY_NORM: f32 = 15.5;
const PLAYER_INDICES: [usize; 6] = [0, 1, 3, 1, 2, 3];

/// Scale, rotate, then translate a model-space point
#[inline]
fn to_world(local: Vec2, scale: f32, rotation: f32, translation: Vec2) -> Vec2 {
    Mat2::from_angle(rotation) * (local * scale) + translation
}

/// Triangle list for one entity (fan around its centre).
/// Entities at or past the left edge produce nothing.
pub fn object_vertices(entity: &SpawnedObject) -> Vec<Vertex> {
    let n = entity.outline.len();
    if n < 3 || entity.position.x <= LEFT_EDGE {
        return Vec::new();
    }

    let place = |p: Vec2| to_world(p, entity.scale, entity.rotation, entity.position);
    let center = entity.position;

    let mut vertices = Vec::with_capacity(n * 3);
    for i in 0..n {
        let a = place(entity.outline[i]);
        let b = place(entity.outline[(i + 1) % n]);

        vertices.push(Vertex::new(center.x, center.y, entity.color));
        vertices.push(Vertex::new(a.x, a.y, entity.color));
        vertices.push(Vertex::new(b.x, b.y, entity.color));
    }

    vertices
}

/// Two-triangle quad for the player body
pub fn player_vertices(player: &Player) -> Vec<Vertex> {
    PLAYER_INDICES
        .iter()
        .map(|&i| {
            let p = to_world(
                PLAYER_BODY[i] / PLAYER_BODY_NORM,
                player.scale,
                player.rotation,
                player.position,
            );
            Vertex::new(p.x, p.y, colors::PLAYER)
        })
        .collect()
}

/// All geometry for a frame: entities first, then the player while Playing
pub fn frame_vertices(game: &Game) -> Vec<Vertex> {
    let mut vertices: Vec<Vertex> = game.objects.iter().flat_map(object_vertices).collect();
    if game.phase() == GamePhase::Playing {
        vertices.extend(player_vertices(&game.player));
    }
    vertices
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::SPAWN_BATCH;
    use crate::sim::ObjectKind;

    #[test]
    fn object_fan_has_one_triangle_per_side() {
        let entity = SpawnedObject::new(1, ObjectKind::Food, Vec2::new(0.3, 0.1));
        let verts = object_vertices(&entity);
        assert_eq!(verts.len(), entity.sides as usize * 3);
        assert_eq!(verts[0].position, [0.3, 0.1]);
        assert!(verts.iter().all(|v| v.color == entity.color));
    }

    #[test]
    fn offscreen_object_is_skipped() {
        let entity = SpawnedObject::new(1, ObjectKind::Obstacle, Vec2::new(-1.0, 0.0));
        assert!(object_vertices(&entity).is_empty());
    }

    #[test]
    fn object_transform_scales_and_rotates() {
        let mut entity = SpawnedObject::new(1, ObjectKind::Food, Vec2::ZERO);
        entity.outline = vec![Vec2::X, Vec2::Y, Vec2::NEG_X];
        entity.scale = 0.5;
        entity.rotation = std::f32::consts::FRAC_PI_2;

        let verts = object_vertices(&entity);
        // Vec2::X rotated a quarter turn lands on +Y
        let first = Vec2::from(verts[1].position);
        assert!((first - Vec2::new(0.0, 0.5)).length() < 1e-5);
    }

    #[test]
    fn player_quad_follows_position() {
        let mut player = Player::default();
        player.position = Vec2::new(0.5, -0.25);
        let verts = player_vertices(&player);
        assert_eq!(verts.len(), 6);

        let expected = PLAYER_BODY[0] / PLAYER_BODY_NORM * player.scale + player.position;
        assert!((Vec2::from(verts[0].position) - expected).length() < 1e-6);
    }

    #[test]
    fn player_drawn_only_while_playing() {
        let mut game = Game::new(8);
        let objects_only: usize = game.objects.iter().map(|e| e.sides as usize * 3).sum();
        assert_eq!(game.objects.len(), SPAWN_BATCH);
        assert_eq!(frame_vertices(&game).len(), objects_only);

        game.start();
        let objects_only: usize = game.objects.iter().map(|e| e.sides as usize * 3).sum();
        assert_eq!(frame_vertices(&game).len(), objects_only + 6);
    }
}
