//! Stub collaborators and world builders shared by the engine tests.

use super::SimulationState;
use crate::config::Config;
use crate::creature::action::FoodTarget;
use crate::creature::species::FoodPenalty;
use crate::creature::Creature;
use crate::sensing::{Sensorium, Surroundings};
use crate::world::coord::Coord;
use crate::world::pathfinding::{GridPathfinder, Pathfinder};
use crate::world::World;
use std::cell::Cell;
use std::rc::Rc;

pub fn simulation(map: &str, config: &Config) -> SimulationState {
    let world = World::from_ascii(map, config.world.plant_amount).unwrap();
    SimulationState::with_world(world, config)
}

/// Reports the same perceptions to every creature.
#[derive(Debug, Default, Clone)]
pub struct FixedSensorium {
    pub food: Option<FoodTarget>,
    pub water: Option<Coord>,
    pub mates: Vec<u64>,
}

impl Sensorium for FixedSensorium {
    fn sense_food(&self, _: &Surroundings<'_>, _: &Creature, _: FoodPenalty) -> Option<FoodTarget> {
        self.food
    }

    fn sense_water(&self, _: &Surroundings<'_>, _: Coord) -> Option<Coord> {
        self.water
    }

    fn sense_mates(&self, _: &Surroundings<'_>, _: &Creature) -> Vec<u64> {
        self.mates.clone()
    }
}

/// Grid pathfinder that counts how often it is asked for a path.
#[derive(Debug, Default, Clone)]
pub struct CountingPathfinder {
    pub calls: Rc<Cell<usize>>,
}

impl Pathfinder for CountingPathfinder {
    fn compute_path(&mut self, world: &World, from: Coord, to: Coord) -> Vec<Coord> {
        self.calls.set(self.calls.get() + 1);
        GridPathfinder.compute_path(world, from, to)
    }
}
