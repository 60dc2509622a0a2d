//! Keyboard and mouse bindings
//!
//! Hosts translate their native events into [`Key`] and feed them through
//! [`apply`]. Arrow keys and WASD move; Space or the left mouse button fire;
//! the right mouse button doubles as Up.

use serde::{Deserialize, Serialize};

use crate::sim::{Game, Input};

/// Host-independent key and button identifiers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Key {
    Space,
    Up,
    Down,
    Left,
    Right,
    W,
    A,
    S,
    D,
    MouseLeft,
    MouseRight,
    /// Anything without a binding
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum KeyEvent {
    Pressed(Key),
    Released(Key),
}

/// Game input bound to a key, if any
pub fn map_key(key: Key) -> Option<Input> {
    match key {
        Key::Space | Key::MouseLeft => Some(Input::Fire),
        Key::Up | Key::W | Key::MouseRight => Some(Input::Up),
        Key::Down | Key::S => Some(Input::Down),
        Key::Left | Key::A => Some(Input::Left),
        Key::Right | Key::D => Some(Input::Right),
        Key::Other => None,
    }
}

/// Set or clear the bound input bit. Returns whether the key was bound.
pub fn apply(game: &mut Game, event: KeyEvent) -> bool {
    let (key, pressed) = match event {
        KeyEvent::Pressed(key) => (key, true),
        KeyEvent::Released(key) => (key, false),
    };
    let Some(input) = map_key(key) else {
        return false;
    };
    if pressed {
        game.press(input);
    } else {
        game.release(input);
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bindings() {
        assert_eq!(map_key(Key::W), Some(Input::Up));
        assert_eq!(map_key(Key::MouseRight), Some(Input::Up));
        assert_eq!(map_key(Key::A), Some(Input::Left));
        assert_eq!(map_key(Key::S), Some(Input::Down));
        assert_eq!(map_key(Key::D), Some(Input::Right));
        assert_eq!(map_key(Key::MouseLeft), Some(Input::Fire));
        assert_eq!(map_key(Key::Other), None);
    }

    #[test]
    fn press_and_release_reach_game_data() {
        let mut game = Game::new(1);
        assert!(apply(&mut game, KeyEvent::Pressed(Key::Left)));
        assert!(game.data.input.contains(Input::Left));

        // Two keys bound to the same input share one bit
        apply(&mut game, KeyEvent::Pressed(Key::A));
        apply(&mut game, KeyEvent::Released(Key::Left));
        assert!(!game.data.input.contains(Input::Left));

        assert!(!apply(&mut game, KeyEvent::Pressed(Key::Other)));
        assert!(game.data.input.is_empty());
    }
}
