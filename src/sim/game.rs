//! Per-frame controller
//!
//! Owns the shared game data, the player, the entity pool and the random
//! source. Each frame runs, in order: restart countdown, collision and win
//! checks (while Playing), removal of spent entities, player movement and
//! entity update.

use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::Serialize;

use super::collision::player_touches;
use super::objects::{ObjectKind, Objects};
use super::player::Player;
use super::state::{GameData, GameEvent, GamePhase, Input};
use super::timer::ElapsedTimer;
use crate::settings::Rules;

/// Borrowed, serializable view of everything the simulation tracks
#[derive(Debug, Serialize)]
pub struct WorldSnapshot<'a> {
    pub seed: u64,
    pub data: &'a GameData,
    pub player: &'a Player,
    pub objects: &'a Objects,
}

pub struct Game {
    pub data: GameData,
    pub player: Player,
    pub objects: Objects,
    rules: Rules,
    seed: u64,
    rng: Pcg32,
    restart_wait: ElapsedTimer,
    events: Vec<GameEvent>,
}

impl Game {
    /// New game in the menu, with default rules
    pub fn new(seed: u64) -> Self {
        Self::with_rules(seed, Rules::default())
    }

    /// Out-of-range rules are clamped, see [`Rules::sanitized`]
    pub fn with_rules(seed: u64, rules: Rules) -> Self {
        let rules = rules.sanitized();
        let mut game = Self {
            data: GameData::default(),
            player: Player::new(rules.starting_life),
            objects: Objects::new(),
            rules,
            seed,
            rng: Pcg32::seed_from_u64(seed),
            restart_wait: ElapsedTimer::new(),
            events: Vec::new(),
        };
        game.reset_world();
        game
    }

    pub fn phase(&self) -> GamePhase {
        self.data.phase
    }

    pub fn rules(&self) -> &Rules {
        &self.rules
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Back to the menu with fresh player and entities
    pub fn restart(&mut self) {
        self.reset_world();
        self.events.push(GameEvent::Restarted);
        log::info!("Restarted (seed {})", self.seed);
    }

    fn reset_world(&mut self) {
        self.data.phase = GamePhase::Menu;
        self.player.reset();
        self.objects.reset(&mut self.rng);
        self.restart_wait.restart();
    }

    /// The menu's Start action. Ignored outside the menu.
    pub fn start(&mut self) -> bool {
        if self.data.phase != GamePhase::Menu {
            return false;
        }
        self.reset_world();
        self.data.phase = GamePhase::Playing;
        self.events.push(GameEvent::Started);
        log::info!("Game started");
        true
    }

    pub fn press(&mut self, input: Input) {
        self.data.input.set(input);
    }

    pub fn release(&mut self, input: Input) {
        self.data.input.reset(input);
    }

    /// Advance one frame
    pub fn update(&mut self, dt: f32) {
        if self.data.phase.is_finished() {
            self.restart_wait.advance(dt);
            if self.restart_wait.has_reached(self.rules.restart_delay) {
                self.restart();
                return;
            }
        }

        if self.data.phase == GamePhase::Playing {
            self.check_collisions();
            self.check_win_condition();
        }
        // Also runs outside Playing so entities do not pile up in the menu
        self.objects.remove_spent();

        self.player.update(&self.data, dt);
        let spawned = self.objects.update(dt, &mut self.rng);
        if spawned > 0 {
            self.events.push(GameEvent::BatchSpawned { count: spawned });
        }
    }

    /// Flag every entity the player touches, apply its effect, then remove
    /// hit and off-screen entities in one pass
    pub fn check_collisions(&mut self) {
        for entity in self.objects.entities.iter_mut().filter(|e| !e.hit) {
            if !player_touches(&self.player, entity) {
                continue;
            }
            entity.hit = true;

            match entity.kind {
                ObjectKind::Obstacle => {
                    self.player.reduce_life();
                    self.events.push(GameEvent::ObstacleHit {
                        life: self.player.life,
                    });
                    if self.player.life <= 0 && self.data.phase == GamePhase::Playing {
                        self.data.phase = GamePhase::GameOver;
                        self.restart_wait.restart();
                        self.events.push(GameEvent::GameOver);
                        log::info!("Game over with {} points", self.player.points);
                    }
                }
                ObjectKind::Food => {
                    self.player.add_point();
                    self.events.push(GameEvent::FoodCaught {
                        points: self.player.points,
                    });
                }
            }
        }

        self.objects.remove_spent();
    }

    /// Win once enough food has been caught
    pub fn check_win_condition(&mut self) {
        if self.data.phase == GamePhase::Playing && self.player.points >= self.rules.win_points {
            self.data.phase = GamePhase::Win;
            self.restart_wait.restart();
            self.events.push(GameEvent::Win);
            log::info!("Win with {} lives left", self.player.life);
        }
    }

    /// Seconds spent in GameOver/Win so far
    pub fn restart_wait_elapsed(&self) -> f32 {
        self.restart_wait.elapsed()
    }

    /// Events since the last drain
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    pub fn snapshot(&self) -> WorldSnapshot<'_> {
        WorldSnapshot {
            seed: self.seed,
            data: &self.data,
            player: &self.player,
            objects: &self.objects,
        }
    }
}
