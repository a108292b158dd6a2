//! Vital stats that drive the survival loop

use serde::{Deserialize, Serialize};

use crate::core::config::PlayerConfig;

/// Player vital stats
///
/// Hunger, thirst and energy count *down*: 100 is satisfied, 0 is terminal.
/// They are clamped to `[0, max]` on every mutation. Health is allowed to dip
/// below zero between the damage step and the terminal check; use
/// [`Vitals::reported_health`] when presenting it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vitals {
    pub health: f64,
    pub hunger: f64,
    pub thirst: f64,
    pub energy: f64,
    max: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum VitalType {
    Health,
    Hunger,
    Thirst,
    Energy,
}

impl Vitals {
    /// All stats full
    pub fn full(max: f64) -> Self {
        Self {
            health: max,
            hunger: max,
            thirst: max,
            energy: max,
            max,
        }
    }

    /// Apply per-frame decay scaled by the number of reference frames elapsed
    pub fn decay(&mut self, frames: f64, config: &PlayerConfig) {
        self.hunger = drained(self.hunger, config.hunger_decay * frames);
        self.thirst = drained(self.thirst, config.thirst_decay * frames);
        self.energy = drained(self.energy, config.energy_decay * frames);
    }

    /// Restore a vital, capped at the maximum
    pub fn restore(&mut self, vital: VitalType, amount: f64) {
        let max = self.max;
        let slot = self.slot_mut(vital);
        *slot = (*slot + amount).clamp(0.0, max);
    }

    /// Remove health. Not clamped, see the type docs.
    pub fn damage(&mut self, amount: f64) {
        self.health -= amount;
    }

    pub fn get(&self, vital: VitalType) -> f64 {
        match vital {
            VitalType::Health => self.health,
            VitalType::Hunger => self.hunger,
            VitalType::Thirst => self.thirst,
            VitalType::Energy => self.energy,
        }
    }

    fn slot_mut(&mut self, vital: VitalType) -> &mut f64 {
        match vital {
            VitalType::Health => &mut self.health,
            VitalType::Hunger => &mut self.hunger,
            VitalType::Thirst => &mut self.thirst,
            VitalType::Energy => &mut self.energy,
        }
    }

    /// Health as shown to the player, never below zero
    pub fn reported_health(&self) -> f64 {
        self.health.clamp(0.0, self.max)
    }

    /// First vital at or below zero, health checked first
    pub fn depleted(&self) -> Option<VitalType> {
        [
            VitalType::Health,
            VitalType::Hunger,
            VitalType::Thirst,
            VitalType::Energy,
        ]
        .into_iter()
        .find(|v| self.get(*v) <= 0.0)
    }

    /// Lowest of hunger/thirst, used by the autopilot to pick a pickup
    pub fn most_pressing(&self) -> VitalType {
        if self.thirst <= self.hunger {
            VitalType::Thirst
        } else {
            VitalType::Hunger
        }
    }
}

/// Residue below this after a drain counts as empty
const EMPTY_EPSILON: f64 = 1e-9;

fn drained(value: f64, amount: f64) -> f64 {
    let left = value - amount;
    if left <= EMPTY_EPSILON {
        0.0
    } else {
        left
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decay_floors_at_zero() {
        let config = PlayerConfig::default();
        let mut vitals = Vitals::full(100.0);
        vitals.thirst = 0.01;
        vitals.decay(1.0, &config);
        assert_eq!(vitals.thirst, 0.0);
        assert!((vitals.hunger - 99.99).abs() < 1e-4);
        assert!((vitals.energy - 99.995).abs() < 1e-4);
    }

    #[test]
    fn test_repeated_decay_matches_closed_form() {
        let config = PlayerConfig::default();
        let mut vitals = Vitals::full(100.0);
        for n in 1..=10_000u32 {
            vitals.decay(1.0, &config);
            let n = f64::from(n);
            assert!((vitals.hunger - (100.0 - 0.01 * n)).abs() < 1e-9, "hunger at {}", n);
            assert!((vitals.energy - (100.0 - 0.005 * n)).abs() < 1e-9, "energy at {}", n);
        }
        assert_eq!(vitals.thirst, 0.0);
    }

    #[test]
    fn test_thirst_empties_on_exact_frame() {
        let config = PlayerConfig::default();
        let mut vitals = Vitals::full(100.0);
        for _ in 0..4999 {
            vitals.decay(1.0, &config);
        }
        assert!(vitals.thirst > 0.0, "one frame of thirst left");
        vitals.decay(1.0, &config);
        assert_eq!(vitals.thirst, 0.0);
        assert_eq!(vitals.depleted(), Some(VitalType::Thirst));
    }

    #[test]
    fn test_restore_caps_at_max() {
        let mut vitals = Vitals::full(100.0);
        vitals.hunger = 90.0;
        vitals.restore(VitalType::Hunger, 20.0);
        assert_eq!(vitals.hunger, 100.0);

        vitals.hunger = 0.0;
        vitals.restore(VitalType::Hunger, 20.0);
        assert_eq!(vitals.hunger, 20.0);
    }

    #[test]
    fn test_reported_health_never_negative() {
        let mut vitals = Vitals::full(100.0);
        vitals.damage(150.0);
        assert!(vitals.health < 0.0);
        assert_eq!(vitals.reported_health(), 0.0);
        assert_eq!(vitals.depleted(), Some(VitalType::Health));
    }

    #[test]
    fn test_depleted_none_when_all_positive() {
        let vitals = Vitals::full(100.0);
        assert_eq!(vitals.depleted(), None);
    }
}
