//! Shared game data passed through every update
//!
//! Holds the current phase and the held-input bitmask. Owned by [`super::Game`]
//! and handed to the player by reference each frame.

use serde::{Deserialize, Serialize};

/// Current phase of the game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GamePhase {
    /// Waiting for the Start action
    #[default]
    Menu,
    /// Active gameplay
    Playing,
    /// Lives ran out, waiting to return to the menu
    GameOver,
    /// Enough food collected, waiting to return to the menu
    Win,
}

impl GamePhase {
    /// GameOver or Win: the restart countdown is running
    pub fn is_finished(&self) -> bool {
        matches!(self, GamePhase::GameOver | GamePhase::Win)
    }
}

/// Player inputs tracked in the bitmask
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Input {
    Right,
    Left,
    Down,
    Up,
    Fire,
}

impl Input {
    pub const ALL: [Input; 5] = [Input::Right, Input::Left, Input::Down, Input::Up, Input::Fire];

    #[inline]
    fn bit(self) -> u8 {
        1 << self as u8
    }
}

/// Fixed-size set of held inputs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct InputSet(u8);

impl InputSet {
    pub const fn empty() -> Self {
        Self(0)
    }

    pub fn set(&mut self, input: Input) {
        self.0 |= input.bit();
    }

    pub fn reset(&mut self, input: Input) {
        self.0 &= !input.bit();
    }

    pub fn clear(&mut self) {
        self.0 = 0;
    }

    pub fn contains(&self, input: Input) -> bool {
        self.0 & input.bit() != 0
    }

    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    /// Builder-style set, handy for scripted input
    pub fn with(mut self, input: Input) -> Self {
        self.set(input);
        self
    }
}

impl FromIterator<Input> for InputSet {
    fn from_iter<I: IntoIterator<Item = Input>>(iter: I) -> Self {
        iter.into_iter().fold(Self::empty(), InputSet::with)
    }
}

/// Phase and input shared between the controller and the player
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GameData {
    pub phase: GamePhase,
    pub input: InputSet,
}

/// Things that happened during a frame, for hosts that play sounds or log
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    /// Start action accepted
    Started,
    /// Returned to the menu with fresh state
    Restarted,
    /// A new batch of entities entered from the right edge
    BatchSpawned { count: usize },
    /// Player touched an obstacle
    ObstacleHit { life: i32 },
    /// Player caught food
    FoodCaught { points: i32 },
    GameOver,
    Win,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn input_set_tracks_each_bit_independently() {
        let mut input = InputSet::empty();
        input.set(Input::Up);
        input.set(Input::Left);
        assert!(input.contains(Input::Up));
        assert!(input.contains(Input::Left));
        assert!(!input.contains(Input::Down));

        input.reset(Input::Up);
        assert!(!input.contains(Input::Up));
        assert!(input.contains(Input::Left));

        input.clear();
        assert!(input.is_empty());
    }

    #[test]
    fn input_set_from_iter() {
        let input: InputSet = [Input::Fire, Input::Right].into_iter().collect();
        assert!(input.contains(Input::Fire));
        assert!(input.contains(Input::Right));
        assert!(!input.contains(Input::Up));
    }

    #[test]
    fn finished_phases() {
        assert!(!GamePhase::Menu.is_finished());
        assert!(!GamePhase::Playing.is_finished());
        assert!(GamePhase::GameOver.is_finished());
        assert!(GamePhase::Win.is_finished());
    }
}
