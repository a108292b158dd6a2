//! Game phase state machine
//!
//! `Playing -> GameOver` on a depleted vital, `GameOver -> Playing` only on an
//! explicit restart. Nothing else moves the phase.

use serde::{Deserialize, Serialize};

use crate::entity::{Player, VitalType};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    #[default]
    Playing,
    GameOver,
}

impl GamePhase {
    pub fn is_playing(&self) -> bool {
        matches!(self, GamePhase::Playing)
    }

    /// Apply the end-of-frame terminal check
    ///
    /// Returns the vital that ended the run when this call made the
    /// transition.
    pub fn check_terminal(&mut self, player: &Player) -> Option<VitalType> {
        if !self.is_playing() {
            return None;
        }
        let cause = player.vitals.depleted()?;
        *self = GamePhase::GameOver;
        Some(cause)
    }

    /// Handle a restart request. Returns `true` if the phase changed.
    pub fn restart(&mut self) -> bool {
        match self {
            GamePhase::GameOver => {
                *self = GamePhase::Playing;
                true
            }
            GamePhase::Playing => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::SimulationConfig;

    #[test]
    fn test_transitions() {
        let config = SimulationConfig::default();
        let mut player = Player::new(&config);
        let mut phase = GamePhase::default();

        assert_eq!(phase.check_terminal(&player), None);
        assert!(!phase.restart(), "restart while playing is ignored");

        player.vitals.energy = 0.0;
        assert_eq!(phase.check_terminal(&player), Some(VitalType::Energy));
        assert_eq!(phase, GamePhase::GameOver);
        assert_eq!(phase.check_terminal(&player), None, "only transitions once");

        assert!(phase.restart());
        assert!(phase.is_playing());
    }
}
