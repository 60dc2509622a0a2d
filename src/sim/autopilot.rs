//! Demo input source
//!
//! Steers toward the nearest food while dodging obstacles that get close.
//! Drives the headless runner and attract-mode hosts.

use glam::Vec2;

use super::game::Game;
use super::objects::ObjectKind;
use super::state::{Input, InputSet};

/// Obstacles closer than this push the player away
pub const DANGER_RADIUS: f32 = 0.35;
/// Ignore axis offsets smaller than this to avoid jitter
const DEADZONE: f32 = 0.02;

/// Pick the directions to hold this frame
pub fn steer(game: &Game) -> InputSet {
    let player = game.player.position;

    // Repulsion from nearby obstacles, weighted by proximity
    let avoid: Vec2 = game
        .objects
        .iter()
        .filter(|e| e.kind == ObjectKind::Obstacle)
        .filter_map(|e| {
            let away = player - e.position;
            let dist = away.length();
            (dist < DANGER_RADIUS).then(|| away.normalize_or_zero() * (DANGER_RADIUS - dist))
        })
        .sum();

    let target = game
        .objects
        .iter()
        .filter(|e| e.kind == ObjectKind::Food && e.position.x > -1.0)
        .min_by(|a, b| {
            a.position
                .distance_squared(player)
                .partial_cmp(&b.position.distance_squared(player))
                .unwrap_or(std::cmp::Ordering::Equal)
        })
        .map(|e| e.position);

    let desired = if avoid != Vec2::ZERO {
        avoid
    } else if let Some(food) = target {
        food - player
    } else {
        // Drift back to the middle while waiting
        -player
    };

    let mut input = InputSet::empty();
    if desired.x > DEADZONE {
        input.set(Input::Right);
    } else if desired.x < -DEADZONE {
        input.set(Input::Left);
    }
    if desired.y > DEADZONE {
        input.set(Input::Up);
    } else if desired.y < -DEADZONE {
        input.set(Input::Down);
    }
    input
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::objects::SpawnedObject;

    fn empty_game() -> Game {
        let mut game = Game::new(42);
        game.start();
        game.objects.entities.clear();
        game.objects.set_spawn_interval(1000.0);
        game
    }

    #[test]
    fn heads_toward_food() {
        let mut game = empty_game();
        game.objects
            .push(SpawnedObject::new(0, ObjectKind::Food, Vec2::new(0.6, -0.4)));
        let input = steer(&game);
        assert!(input.contains(Input::Right));
        assert!(input.contains(Input::Down));
        assert!(!input.contains(Input::Left));
        assert!(!input.contains(Input::Up));
    }

    #[test]
    fn dodges_close_obstacles() {
        let mut game = empty_game();
        game.objects
            .push(SpawnedObject::new(0, ObjectKind::Food, Vec2::new(0.8, 0.0)));
        game.objects
            .push(SpawnedObject::new(0, ObjectKind::Obstacle, Vec2::new(0.2, 0.0)));
        let input = steer(&game);
        assert!(input.contains(Input::Left));
        assert!(!input.contains(Input::Right));
    }

    #[test]
    fn idles_at_center_without_targets() {
        let game = empty_game();
        assert!(steer(&game).is_empty());
    }
}
