//! What a creature can perceive around it.
//!
//! The engine only talks to the [`Sensorium`] trait. [`NearestSensorium`] is the
//! default: a plain radius search over the world and the spatial index.

use crate::creature::action::{CreatureAction, FoodTarget};
use crate::creature::species::{FoodPenalty, Species};
use crate::creature::Creature;
use crate::simulation::spatial::SpatialIndex;
use crate::world::coord::Coord;
use crate::world::World;
use std::collections::BTreeMap;
use std::fmt;

/// Read-only view of everything a sensorium may look at.
#[derive(Clone, Copy)]
pub struct Surroundings<'a> {
    pub world: &'a World,
    pub creatures: &'a BTreeMap<u64, Creature>,
    pub positions: &'a SpatialIndex,
}

impl<'a> Surroundings<'a> {
    /// Current tile of a food source, or `None` once it is gone.
    pub fn food_coord(&self, food: FoodTarget) -> Option<Coord> {
        match food {
            FoodTarget::Plant(id) => self.world.plants.get(id).map(|p| p.coord),
            FoodTarget::Prey(id) => self.creatures.get(&id).map(|c| c.coord),
        }
    }

    pub fn creature_coord(&self, id: u64) -> Option<Coord> {
        self.creatures.get(&id).map(|c| c.coord)
    }
}

pub trait Sensorium: fmt::Debug {
    /// Visible food the seeker may eat with the lowest `penalty`.
    fn sense_food(
        &self,
        surroundings: &Surroundings<'_>,
        seeker: &Creature,
        penalty: FoodPenalty,
    ) -> Option<FoodTarget>;

    /// Nearest visible water tile.
    fn sense_water(&self, surroundings: &Surroundings<'_>, coord: Coord) -> Option<Coord>;

    /// Visible partners willing to mate with the seeker, nearest first.
    fn sense_mates(&self, surroundings: &Surroundings<'_>, seeker: &Creature) -> Vec<u64>;
}

#[derive(Debug, Clone)]
pub struct NearestSensorium {
    pub view_distance: i32,
}

impl NearestSensorium {
    pub fn new(view_distance: i32) -> Self {
        Self { view_distance }
    }

    fn tiles_in_view(&self, center: Coord) -> impl Iterator<Item = Coord> {
        let r = self.view_distance;
        (center.y - r..=center.y + r)
            .flat_map(move |y| (center.x - r..=center.x + r).map(move |x| Coord::new(x, y)))
            .filter(move |c| Coord::sqr_distance(center, *c) <= r * r)
    }
}

impl Default for NearestSensorium {
    fn default() -> Self {
        Self::new(10)
    }
}

impl Sensorium for NearestSensorium {
    fn sense_food(
        &self,
        surroundings: &Surroundings<'_>,
        seeker: &Creature,
        penalty: FoodPenalty,
    ) -> Option<FoodTarget> {
        let mut best: Option<(i32, FoodTarget)> = None;
        let mut consider = |target: FoodTarget, coord: Coord| {
            let score = penalty(seeker, coord);
            if best.map_or(true, |(best_score, _)| score < best_score) {
                best = Some((score, target));
            }
        };

        if seeker.diet.includes(Species::Plant) {
            for coord in self.tiles_in_view(seeker.coord) {
                if let Some(plant) = surroundings.world.plants.at(coord) {
                    consider(FoodTarget::Plant(plant.id), plant.coord);
                }
            }
        }

        let mut prey_ids = surroundings.positions.ids_within(seeker.coord, self.view_distance);
        prey_ids.sort_unstable();
        for id in prey_ids {
            if id == seeker.id {
                continue;
            }
            if let Some(prey) = surroundings.creatures.get(&id) {
                if seeker.diet.includes(prey.species) {
                    consider(FoodTarget::Prey(id), prey.coord);
                }
            }
        }

        best.map(|(_, target)| target)
    }

    fn sense_water(&self, surroundings: &Surroundings<'_>, coord: Coord) -> Option<Coord> {
        self.tiles_in_view(coord)
            .filter(|tile| surroundings.world.is_water(*tile))
            .min_by_key(|tile| Coord::sqr_distance(coord, *tile))
    }

    fn sense_mates(&self, surroundings: &Surroundings<'_>, seeker: &Creature) -> Vec<u64> {
        let mut mates: Vec<(i32, u64)> = surroundings
            .positions
            .ids_within(seeker.coord, self.view_distance)
            .into_iter()
            .filter(|&id| id != seeker.id)
            .filter_map(|id| surroundings.creatures.get(&id))
            .filter(|other| {
                other.species == seeker.species
                    && other.genes.is_male != seeker.genes.is_male
                    && match other.action {
                        CreatureAction::SearchingForMate(None) => true,
                        CreatureAction::SearchingForMate(Some(partner)) => partner == seeker.id,
                        _ => false,
                    }
            })
            .map(|other| (Coord::sqr_distance(seeker.coord, other.coord), other.id))
            .collect();

        mates.sort_unstable();
        mates.into_iter().map(|(_, id)| id).collect()
    }
}
