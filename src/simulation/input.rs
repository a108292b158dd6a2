//! Per-frame input snapshot and the out-of-band command stream

use serde::{Deserialize, Serialize};

/// Held controls for one frame
///
/// The axes are independent; holding opposite directions cancels out and
/// holding two perpendicular ones moves diagonally.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerInput {
    pub left: bool,
    pub right: bool,
    pub up: bool,
    pub down: bool,
    pub fire: bool,
}

impl PlayerInput {
    /// Nothing held
    pub const IDLE: PlayerInput = PlayerInput {
        left: false,
        right: false,
        up: false,
        down: false,
        fire: false,
    };

    /// Parse a compact key string: `l`, `r`, `u`, `d` for the axes and `f`
    /// for fire. Unknown characters are ignored.
    pub fn from_keys(keys: &str) -> Self {
        let mut input = Self::default();
        for c in keys.chars() {
            match c.to_ascii_lowercase() {
                'l' => input.left = true,
                'r' => input.right = true,
                'u' => input.up = true,
                'd' => input.down = true,
                'f' => input.fire = true,
                _ => {}
            }
        }
        input
    }

    pub fn is_idle(&self) -> bool {
        *self == Self::IDLE
    }
}

/// Discrete commands processed at the top of a frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Command {
    /// Leave `GameOver` and start a fresh run. Ignored while playing.
    Restart,
    /// Ask the frontend to shut down
    Quit,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_keys() {
        let input = PlayerInput::from_keys("rU f");
        assert!(input.right && input.up && input.fire);
        assert!(!input.left && !input.down);
        assert!(PlayerInput::from_keys("").is_idle());
        assert!(PlayerInput::from_keys("xyz").is_idle());
    }
}
