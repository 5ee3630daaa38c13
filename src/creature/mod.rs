pub mod action;
pub mod genes;
pub mod movement;
pub mod needs;
pub mod path;
pub mod reproduction;
pub mod species;

use crate::world::coord::Coord;
use action::{ActionKind, CreatureAction};
use genes::Genes;
use glam::Vec3;
use movement::MoveState;
use needs::Needs;
use path::Path;
use serde::{Deserialize, Serialize};
use species::{Diet, Species};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CauseOfDeath {
    Hunger,
    Thirst,
    Eaten,
}

#[derive(Debug, Clone)]
pub struct Creature {
    pub id: u64,
    pub species: Species,
    pub diet: Diet,
    pub genes: Genes,
    pub coord: Coord,
    pub action: CreatureAction,
    pub needs: Needs,
    /// Tile the last hop started from; steers exploration.
    pub move_from: Coord,
    /// Tile the last hop went to; checked before reusing a path.
    pub move_target: Coord,
    pub movement: Option<MoveState>,
    pub path: Option<Path>,
    pub last_action_choice: Option<f64>,
    pub position: Vec3,
    /// Heading in degrees, 0 facing +y.
    pub yaw: f32,
    pub age: f64,
    pub generation: u64,
}

impl Creature {
    pub fn new(id: u64, species: Species, coord: Coord, genes: Genes, position: Vec3) -> Self {
        Self {
            id,
            species,
            diet: species.profile().diet,
            genes,
            coord,
            action: CreatureAction::Exploring,
            needs: Needs::default(),
            move_from: coord,
            move_target: coord,
            movement: None,
            path: None,
            last_action_choice: None,
            position,
            yaw: 0.0,
            age: 0.0,
            generation: 0,
        }
    }

    pub fn action_kind(&self) -> ActionKind {
        self.action.kind()
    }

    pub fn needs(&self) -> &Needs {
        &self.needs
    }

    pub fn is_moving(&self) -> bool {
        self.movement.is_some()
    }

    pub fn is_male(&self) -> bool {
        self.genes.is_male
    }

    /// True if the creature has never chosen an action, or the last choice is
    /// more than `interval` old.
    pub fn action_choice_due(&self, now: f64, interval: f64) -> bool {
        match self.last_action_choice {
            None => true,
            Some(last) => now - last > interval,
        }
    }

    pub fn look_at(&mut self, target: Coord) {
        if target == self.coord {
            return;
        }
        let offset = target - self.coord;
        self.yaw = (offset.x as f32).atan2(offset.y as f32).to_degrees();
    }

    /// Ends a mating: urge back to zero and wandering again.
    pub fn finish_mating(&mut self) {
        self.needs.reset_urge();
        self.action = CreatureAction::Exploring;
    }
}
