//! Held-key movement input

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// The four arrow keys; everything else is ignored
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Key {
    Left,
    Right,
    Up,
    Down,
}

impl Key {
    /// Map a DOM-style key name ("ArrowLeft", ...) to a key
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "ArrowLeft" => Some(Key::Left),
            "ArrowRight" => Some(Key::Right),
            "ArrowUp" => Some(Key::Up),
            "ArrowDown" => Some(Key::Down),
            _ => None,
        }
    }

    /// Unit direction in screen coordinates (y down)
    pub fn direction(&self) -> Vec2 {
        match self {
            Key::Left => Vec2::NEG_X,
            Key::Right => Vec2::X,
            Key::Up => Vec2::NEG_Y,
            Key::Down => Vec2::Y,
        }
    }
}

/// Which arrow keys are currently held
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputState {
    pub left: bool,
    pub right: bool,
    pub up: bool,
    pub down: bool,
}

impl InputState {
    fn slot(&mut self, key: Key) -> &mut bool {
        match key {
            Key::Left => &mut self.left,
            Key::Right => &mut self.right,
            Key::Up => &mut self.up,
            Key::Down => &mut self.down,
        }
    }

    pub fn press(&mut self, key: Key) {
        *self.slot(key) = true;
    }

    pub fn release(&mut self, key: Key) {
        *self.slot(key) = false;
    }

    pub fn is_held(&self, key: Key) -> bool {
        match key {
            Key::Left => self.left,
            Key::Right => self.right,
            Key::Up => self.up,
            Key::Down => self.down,
        }
    }

    pub fn any(&self) -> bool {
        self.left || self.right || self.up || self.down
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

/// This frame's displacement: `speed` along every held key, summed.
///
/// Opposing keys cancel out.
pub fn frame_delta(input: &InputState, speed: f32) -> Vec2 {
    [Key::Left, Key::Right, Key::Up, Key::Down]
        .into_iter()
        .filter(|&key| input.is_held(key))
        .map(|key| key.direction() * speed)
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_names() {
        assert_eq!(Key::from_name("ArrowLeft"), Some(Key::Left));
        assert_eq!(Key::from_name("ArrowDown"), Some(Key::Down));
        assert_eq!(Key::from_name("a"), None);
        assert_eq!(Key::from_name("arrowleft"), None);
    }

    #[test]
    fn test_single_and_diagonal_delta() {
        let mut input = InputState::default();
        assert_eq!(frame_delta(&input, 3.0), Vec2::ZERO);

        input.press(Key::Right);
        assert_eq!(frame_delta(&input, 3.0), Vec2::new(3.0, 0.0));

        input.press(Key::Up);
        assert_eq!(frame_delta(&input, 3.0), Vec2::new(3.0, -3.0));
    }

    #[test]
    fn test_opposing_keys_cancel() {
        let mut input = InputState::default();
        input.press(Key::Left);
        input.press(Key::Right);
        assert!(input.any());
        assert_eq!(frame_delta(&input, 3.0), Vec2::ZERO);

        input.press(Key::Down);
        assert_eq!(frame_delta(&input, 3.0), Vec2::new(0.0, 3.0));
    }

    #[test]
    fn test_release_and_clear() {
        let mut input = InputState::default();
        input.press(Key::Up);
        input.press(Key::Up);
        input.release(Key::Up);
        assert!(!input.is_held(Key::Up));
        assert!(!input.any());

        input.press(Key::Left);
        input.press(Key::Down);
        input.clear();
        assert_eq!(input, InputState::default());
    }
}
