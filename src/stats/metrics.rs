use crate::creature::species::Species;
use crate::creature::Creature;
use crate::simulation::lifecycle::DeathTally;
use crate::world::plants::Plants;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationMetrics {
    pub tick: u64,
    pub time: f64,
    pub population: usize,
    pub species_counts: BTreeMap<Species, usize>,
    pub avg_hunger: f64,
    pub avg_thirst: f64,
    pub avg_repro_urge: f64,
    pub avg_age: f64,
    pub max_generation: u64,
    pub plant_count: usize,
    pub plant_amount: f64,
    pub total_births: u64,
    pub deaths: DeathTally,
}

impl SimulationMetrics {
    pub fn compute(
        tick: u64,
        time: f64,
        creatures: &[&Creature],
        plants: &Plants,
        total_births: u64,
        deaths: DeathTally,
    ) -> Self {
        let population = creatures.len();

        let mut species_counts = BTreeMap::new();
        for creature in creatures {
            *species_counts.entry(creature.species).or_insert(0) += 1;
        }

        let average = |value: fn(&Creature) -> f64| -> f64 {
            if population == 0 {
                return 0.0;
            }
            creatures.iter().map(|c| value(c)).sum::<f64>() / population as f64
        };

        let max_generation = creatures.iter().map(|c| c.generation).max().unwrap_or(0);

        Self {
            tick,
            time,
            population,
            species_counts,
            avg_hunger: average(|c| c.needs.hunger),
            avg_thirst: average(|c| c.needs.thirst),
            avg_repro_urge: average(|c| c.needs.repro_urge),
            avg_age: average(|c| c.age),
            max_generation,
            plant_count: plants.len(),
            plant_amount: plants.total_amount(),
            total_births,
            deaths,
        }
    }

    pub fn count_of(&self, species: Species) -> usize {
        self.species_counts.get(&species).copied().unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::creature::genes::Genes;
    use crate::world::coord::Coord;
    use glam::Vec3;

    #[test]
    fn test_metrics_empty_population() {
        let metrics = SimulationMetrics::compute(100, 5.0, &[], &Plants::new(), 0, DeathTally::default());

        assert_eq!(metrics.tick, 100);
        assert_eq!(metrics.population, 0);
        assert_eq!(metrics.avg_hunger, 0.0);
        assert!(metrics.species_counts.is_empty());
    }

    #[test]
    fn test_metrics_with_creatures() {
        let mut c1 = Creature::new(1, Species::Rabbit, Coord::new(0, 0), Genes::with_sex(true), Vec3::ZERO);
        c1.needs.hunger = 0.2;
        c1.age = 10.0;
        let mut c2 = Creature::new(2, Species::Fox, Coord::new(1, 1), Genes::with_sex(false), Vec3::ZERO);
        c2.needs.hunger = 0.6;
        c2.age = 30.0;
        c2.generation = 5;

        let mut plants = Plants::new();
        plants.spawn(Coord::new(3, 3), 1.0);
        plants.spawn(Coord::new(4, 3), 0.5);

        let deaths = DeathTally {
            hunger: 2,
            thirst: 1,
            eaten: 4,
        };
        let metrics = SimulationMetrics::compute(100, 3.0, &[&c1, &c2], &plants, 10, deaths);

        assert_eq!(metrics.population, 2);
        assert_eq!(metrics.count_of(Species::Rabbit), 1);
        assert_eq!(metrics.count_of(Species::Fox), 1);
        assert_eq!(metrics.count_of(Species::Plant), 0);
        assert!((metrics.avg_hunger - 0.4).abs() < 1e-12);
        assert_eq!(metrics.avg_age, 20.0);
        assert_eq!(metrics.max_generation, 5);
        assert_eq!(metrics.plant_count, 2);
        assert_eq!(metrics.plant_amount, 1.5);
        assert_eq!(metrics.total_births, 10);
        assert_eq!(metrics.deaths.total(), 7);
    }
}
