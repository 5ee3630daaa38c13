use super::CauseOfDeath;
use crate::config::CreatureConfig;
use serde::{Deserialize, Serialize};

/// Hunger, thirst and reproductive urge. Each grows towards 1, where hunger
/// and thirst become fatal.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Needs {
    pub hunger: f64,
    pub thirst: f64,
    pub repro_urge: f64,
}

impl Needs {
    pub fn advance(&mut self, dt: f64, config: &CreatureConfig) {
        let dt = dt.max(0.0);
        self.hunger += dt / config.time_to_death_by_hunger;
        self.thirst += dt / config.time_to_death_by_thirst;
        self.repro_urge += dt / config.time_to_reproduce;
    }

    pub fn eat(&mut self, amount: f64) {
        self.hunger = (self.hunger - amount).max(0.0);
    }

    pub fn drink(&mut self, amount: f64) {
        self.thirst = (self.thirst - amount).clamp(0.0, 1.0);
    }

    pub fn reset_urge(&mut self) {
        self.repro_urge = 0.0;
    }

    /// Hunger is checked first, so a creature that is both starving and
    /// dehydrated dies of hunger.
    pub fn fatal_cause(&self) -> Option<CauseOfDeath> {
        if self.hunger >= 1.0 {
            Some(CauseOfDeath::Hunger)
        } else if self.thirst >= 1.0 {
            Some(CauseOfDeath::Thirst)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;

    #[test]
    fn test_advance_adds_dt_over_constant() {
        let mut config = Config::default().creature;
        config.time_to_death_by_hunger = 100.0;
        config.time_to_death_by_thirst = 50.0;
        config.time_to_reproduce = 25.0;

        let mut needs = Needs {
            hunger: 0.2,
            thirst: 0.1,
            repro_urge: 0.0,
        };
        needs.advance(5.0, &config);

        assert!((needs.hunger - 0.25).abs() < 1e-12);
        assert!((needs.thirst - 0.2).abs() < 1e-12);
        assert!((needs.repro_urge - 0.2).abs() < 1e-12);
    }

    #[test]
    fn test_advance_never_decreases() {
        let config = Config::default().creature;
        let mut needs = Needs::default();
        let mut previous = needs;

        for step in 0..100 {
            needs.advance(if step % 3 == 0 { 0.0 } else { 0.5 }, &config);
            assert!(needs.hunger >= previous.hunger);
            assert!(needs.thirst >= previous.thirst);
            assert!(needs.repro_urge >= previous.repro_urge);
            previous = needs;
        }

        needs.advance(-1.0, &config);
        assert_eq!(needs, previous);
    }

    #[test]
    fn test_eat_and_drink_floor_at_zero() {
        let mut needs = Needs {
            hunger: 0.05,
            thirst: 0.05,
            repro_urge: 0.5,
        };
        needs.eat(0.1);
        needs.drink(0.1);
        assert_eq!(needs.hunger, 0.0);
        assert_eq!(needs.thirst, 0.0);

        needs.reset_urge();
        assert_eq!(needs.repro_urge, 0.0);
    }

    #[test]
    fn test_fatal_cause_checks_hunger_first() {
        let mut needs = Needs::default();
        assert_eq!(needs.fatal_cause(), None);

        needs.thirst = 1.0;
        assert_eq!(needs.fatal_cause(), Some(CauseOfDeath::Thirst));

        needs.hunger = 1.2;
        assert_eq!(needs.fatal_cause(), Some(CauseOfDeath::Hunger));
    }
}
