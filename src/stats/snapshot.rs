use crate::creature::action::{ActionKind, FoodTarget};
use crate::creature::species::Species;
use crate::creature::Creature;
use crate::error::Result;
use crate::simulation::SimulationState;
use crate::world::coord::Coord;
use crate::world::plants::Plant;
use serde::{Deserialize, Serialize};

/// Serializable view of one creature.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreatureSnapshot {
    pub id: u64,
    pub species: Species,
    pub is_male: bool,
    pub genes: Vec<f32>,
    pub action: ActionKind,
    pub food_target: Option<FoodTarget>,
    pub water_target: Option<Coord>,
    pub mate_target: Option<u64>,
    pub coord: Coord,
    pub position: [f32; 3],
    pub yaw: f32,
    pub hunger: f64,
    pub thirst: f64,
    pub repro_urge: f64,
    pub age: f64,
    pub generation: u64,
}

impl From<&Creature> for CreatureSnapshot {
    fn from(creature: &Creature) -> Self {
        Self {
            id: creature.id,
            species: creature.species,
            is_male: creature.is_male(),
            genes: creature.genes.values.clone(),
            action: creature.action_kind(),
            food_target: creature.action.food_target(),
            water_target: creature.action.water_target(),
            mate_target: creature.action.mate_target(),
            coord: creature.coord,
            position: creature.position.to_array(),
            yaw: creature.yaw,
            hunger: creature.needs.hunger,
            thirst: creature.needs.thirst,
            repro_urge: creature.needs.repro_urge,
            age: creature.age,
            generation: creature.generation,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorldSnapshot {
    pub tick: u64,
    pub time: f64,
    pub creatures: Vec<CreatureSnapshot>,
    pub plants: Vec<Plant>,
}

impl WorldSnapshot {
    pub fn capture(state: &SimulationState) -> Self {
        Self {
            tick: state.tick,
            time: state.time,
            creatures: state.creatures.values().map(CreatureSnapshot::from).collect(),
            plants: state.world.plants.iter().cloned().collect(),
        }
    }

    pub fn save_to_file(&self, path: &str) -> Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}
