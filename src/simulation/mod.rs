pub mod act;
pub mod decision;
pub mod interaction;
pub mod lifecycle;
pub mod spatial;
pub mod tick;

#[cfg(test)]
pub(crate) mod testing;

use crate::config::Config;
use crate::creature::genes::Genes;
use crate::creature::reproduction::GENE_VALUES;
use crate::creature::species::Species;
use crate::creature::{CauseOfDeath, Creature};
use crate::error::Result;
use crate::sensing::{NearestSensorium, Sensorium, Surroundings};
use crate::stats::SimulationMetrics;
use crate::world::coord::Coord;
use crate::world::pathfinding::{GridPathfinder, Pathfinder};
use crate::world::World;
use lifecycle::DeathTally;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use spatial::SpatialIndex;
use std::collections::BTreeMap;

#[derive(Debug)]
pub struct SimulationState {
    pub world: World,
    pub creatures: BTreeMap<u64, Creature>,
    pub creature_positions: SpatialIndex,
    pub tick: u64,
    /// Simulated time, advanced by `dt` at the start of every tick.
    pub time: f64,
    pub next_creature_id: u64,
    pub total_births: u64,
    pub deaths: DeathTally,
    pub deaths_last_tick: Vec<(u64, CauseOfDeath)>,
    sensorium: Box<dyn Sensorium>,
    pathfinder: Box<dyn Pathfinder>,
    rng: StdRng,
}

impl SimulationState {
    pub fn new(config: &Config) -> Result<Self> {
        config.validate()?;

        let mut rng = StdRng::seed_from_u64(config.simulation.seed);
        let world = match &config.world.map {
            Some(map) => World::from_ascii(map, config.world.plant_amount)?,
            None => World::scatter(&config.world, &mut rng),
        };

        let mut state = Self::with_world(world, config);
        state.rng = rng;

        let tiles = state.world.walkable_tiles();
        if tiles.is_empty() {
            log::warn!("World has no walkable tiles; starting without creatures");
            return Ok(state);
        }

        for population in &config.populations {
            if !population.species.is_animal() {
                log::warn!("Ignoring population entry for {:?}", population.species);
                continue;
            }
            for _ in 0..population.count {
                let Some(&coord) = tiles.choose(&mut state.rng) else {
                    break;
                };
                let genes = Genes::random(GENE_VALUES, &mut state.rng);
                state.spawn_creature(population.species, coord, genes);
            }
        }

        log::info!(
            "World {}x{} with {} water tiles, {} plants and {} creatures",
            state.world.width(),
            state.world.height(),
            state.world.count_tiles(|t| t.is_water()),
            state.world.plants.len(),
            state.population()
        );

        Ok(state)
    }

    /// Empty population on a prepared world.
    pub fn with_world(world: World, config: &Config) -> Self {
        Self {
            world,
            creatures: BTreeMap::new(),
            creature_positions: SpatialIndex::new(),
            tick: 0,
            time: 0.0,
            next_creature_id: 0,
            total_births: 0,
            deaths: DeathTally::default(),
            deaths_last_tick: Vec::new(),
            sensorium: Box::new(NearestSensorium::new(config.creature.max_view_distance)),
            pathfinder: Box::new(GridPathfinder),
            rng: StdRng::seed_from_u64(config.simulation.seed),
        }
    }

    pub fn set_sensorium(&mut self, sensorium: Box<dyn Sensorium>) {
        self.sensorium = sensorium;
    }

    pub fn set_pathfinder(&mut self, pathfinder: Box<dyn Pathfinder>) {
        self.pathfinder = pathfinder;
    }

    /// Places a new creature on `coord` and indexes it. Returns its id.
    pub fn spawn_creature(&mut self, species: Species, coord: Coord, genes: Genes) -> u64 {
        let id = self.next_creature_id;
        self.next_creature_id += 1;

        let creature = Creature::new(id, species, coord, genes, self.world.tile_center(coord));
        self.add_creature(creature);
        id
    }

    fn add_creature(&mut self, creature: Creature) {
        self.creature_positions.insert(creature.id, creature.coord);
        self.creatures.insert(creature.id, creature);
    }

    pub fn surroundings(&self) -> Surroundings<'_> {
        Surroundings {
            world: &self.world,
            creatures: &self.creatures,
            positions: &self.creature_positions,
        }
    }

    /// Living creatures, including one that is mid-update.
    pub fn population(&self) -> usize {
        self.creature_positions.len()
    }

    pub fn can_spawn_new_creature(&self, max_population: usize) -> bool {
        if max_population == 0 {
            return true;
        }
        self.population() < max_population
    }

    pub fn creature(&self, id: u64) -> Option<&Creature> {
        self.creatures.get(&id)
    }

    pub fn creatures_vec(&self) -> Vec<&Creature> {
        self.creatures.values().collect()
    }

    pub fn metrics(&self) -> SimulationMetrics {
        SimulationMetrics::compute(
            self.tick,
            self.time,
            &self.creatures_vec(),
            &self.world.plants,
            self.total_births,
            self.deaths,
        )
    }
}
