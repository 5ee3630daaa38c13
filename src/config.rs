use crate::creature::species::Species;
use crate::error::{Result, SimError};
use serde::{Deserialize, Serialize};

/// Largest accepted `max_view_distance`, in tiles.
pub const MAX_VIEW_DISTANCE: i32 = 1024;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub world: WorldConfig,
    pub creature: CreatureConfig,
    pub populations: Vec<PopulationConfig>,
    pub simulation: SimulationConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorldConfig {
    pub width: usize,
    pub height: usize,
    pub water_density: f64,
    pub plant_density: f64,
    pub plant_amount: f64,
    /// ASCII map (`.` land, `~` water, `*` plant). Overrides width/height and scattering.
    #[serde(default)]
    pub map: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatureConfig {
    pub time_between_action_choices: f64,
    pub move_speed: f64,
    pub time_to_death_by_hunger: f64,
    pub time_to_death_by_thirst: f64,
    pub time_to_reproduce: f64,
    pub drink_duration: f64,
    pub eat_duration: f64,
    /// Need level above which a competing need is no longer deprioritised.
    pub critical_percent: f64,
    pub mate_urge_threshold: f64,
    /// Hunger removed per tick while a predator is eating its kill.
    pub predator_hunger_relief: f64,
    pub move_arc_height: f32,
    pub max_view_distance: i32,
    /// 0 disables the cap.
    pub max_population: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PopulationConfig {
    pub species: Species,
    pub count: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationConfig {
    pub seed: u64,
    pub ticks_per_second: u64,
    /// Simulated time advanced by one tick.
    pub dt: f64,
    pub log_interval_seconds: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            world: WorldConfig {
                width: 60,
                height: 60,
                water_density: 0.04,
                plant_density: 0.08,
                plant_amount: 1.0,
                map: None,
            },
            creature: CreatureConfig {
                time_between_action_choices: 1.0,
                move_speed: 1.5,
                time_to_death_by_hunger: 200.0,
                time_to_death_by_thirst: 200.0,
                time_to_reproduce: 200.0,
                drink_duration: 6.0,
                eat_duration: 10.0,
                critical_percent: 0.7,
                mate_urge_threshold: 0.1,
                predator_hunger_relief: 0.01,
                move_arc_height: 0.2,
                max_view_distance: 10,
                max_population: 1000,
            },
            populations: vec![
                PopulationConfig {
                    species: Species::Rabbit,
                    count: 40,
                },
                PopulationConfig {
                    species: Species::Fox,
                    count: 6,
                },
            ],
            simulation: SimulationConfig {
                seed: 0,
                ticks_per_second: 30,
                dt: 1.0 / 30.0,
                log_interval_seconds: 10,
            },
        }
    }
}

impl Config {
    pub fn load_from_file(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn save_to_file(&self, path: &str) -> Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn validate(&self) -> Result<()> {
        let c = &self.creature;
        let durations = [
            ("time_between_action_choices", c.time_between_action_choices),
            ("move_speed", c.move_speed),
            ("time_to_death_by_hunger", c.time_to_death_by_hunger),
            ("time_to_death_by_thirst", c.time_to_death_by_thirst),
            ("time_to_reproduce", c.time_to_reproduce),
            ("drink_duration", c.drink_duration),
            ("eat_duration", c.eat_duration),
            ("simulation.dt", self.simulation.dt),
        ];
        for (name, value) in durations {
            if !(value > 0.0) {
                return Err(SimError::InvalidConfig(format!(
                    "{} must be positive, got {}",
                    name, value
                )));
            }
        }

        if self.world.map.is_none() && (self.world.width == 0 || self.world.height == 0) {
            return Err(SimError::InvalidConfig(
                "world must be at least 1x1".to_string(),
            ));
        }

        if self.simulation.ticks_per_second == 0 {
            return Err(SimError::InvalidConfig(
                "ticks_per_second must be positive".to_string(),
            ));
        }

        if !(0..=MAX_VIEW_DISTANCE).contains(&c.max_view_distance) {
            return Err(SimError::InvalidConfig(format!(
                "max_view_distance must be between 0 and {}, got {}",
                MAX_VIEW_DISTANCE, c.max_view_distance
            )));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.world.width, 60);
        assert_eq!(config.creature.eat_duration, 10.0);
        assert_eq!(config.creature.critical_percent, 0.7);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_serialization() {
        let config = Config::default();
        let json = serde_json::to_string(&config).unwrap();
        let deserialized: Config = serde_json::from_str(&json).unwrap();
        assert_eq!(config.world.width, deserialized.world.width);
        assert_eq!(deserialized.populations.len(), 2);
        assert_eq!(deserialized.populations[1].species, Species::Fox);
    }

    #[test]
    fn test_validate_rejects_zero_duration() {
        let mut config = Config::default();
        config.creature.eat_duration = 0.0;
        assert!(matches!(
            config.validate(),
            Err(SimError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_validate_rejects_empty_world() {
        let mut config = Config::default();
        config.world.width = 0;
        assert!(config.validate().is_err());

        config.world.map = Some("...".to_string());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_bounds_view_distance() {
        let mut config = Config::default();
        config.creature.max_view_distance = -1;
        assert!(config.validate().is_err());

        config.creature.max_view_distance = 50_000;
        assert!(matches!(
            config.validate(),
            Err(SimError::InvalidConfig(_))
        ));

        config.creature.max_view_distance = MAX_VIEW_DISTANCE;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_save_and_load() {
        let path = std::env::temp_dir().join("habitat_sim_config_test.json");
        let path = path.to_string_lossy().to_string();

        let mut config = Config::default();
        config.simulation.seed = 42;
        config.save_to_file(&path).unwrap();

        let loaded = Config::load_from_file(&path).unwrap();
        assert_eq!(loaded.simulation.seed, 42);

        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn test_load_missing_file() {
        let err = Config::load_from_file("does/not/exist.json").unwrap_err();
        assert!(matches!(err, SimError::Io(_)));
    }
}
