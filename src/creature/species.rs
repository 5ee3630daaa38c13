//! Species table.
//!
//! Everything that differs between species (what they eat, how they eat it and
//! how they rank food sources) lives in one static [`SpeciesProfile`] per
//! [`Species`], looked up with [`Species::profile`].

use super::Creature;
use crate::world::coord::Coord;
use bitflags::bitflags;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Species {
    Plant,
    Rabbit,
    Fox,
}

bitflags! {
    /// Set of species a creature may eat.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Diet: u8 {
        const PLANT = 1 << 0;
        const RABBIT = 1 << 1;
        const FOX = 1 << 2;
    }
}

impl Diet {
    pub fn includes(&self, species: Species) -> bool {
        self.contains(species.as_diet())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedingStyle {
    /// Eats a depletable food source a little at a time.
    Grazer,
    /// Kills its prey outright.
    Predator,
}

/// Ranks candidate food tiles; the lowest penalty wins.
pub type FoodPenalty = fn(&Creature, Coord) -> i32;

#[derive(Clone, Copy)]
pub struct SpeciesProfile {
    pub species: Species,
    pub diet: Diet,
    pub feeding: FeedingStyle,
    pub food_penalty: FoodPenalty,
}

impl fmt::Debug for SpeciesProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SpeciesProfile")
            .field("species", &self.species)
            .field("diet", &self.diet)
            .field("feeding", &self.feeding)
            .finish_non_exhaustive()
    }
}

pub fn distance_penalty(seeker: &Creature, food: Coord) -> i32 {
    Coord::sqr_distance(seeker.coord, food)
}

static RABBIT: SpeciesProfile = SpeciesProfile {
    species: Species::Rabbit,
    diet: Diet::PLANT,
    feeding: FeedingStyle::Grazer,
    food_penalty: distance_penalty,
};

static FOX: SpeciesProfile = SpeciesProfile {
    species: Species::Fox,
    diet: Diet::RABBIT,
    feeding: FeedingStyle::Predator,
    food_penalty: distance_penalty,
};

/// Plants never act; this entry only keeps `Species::profile` total.
static PLANT: SpeciesProfile = SpeciesProfile {
    species: Species::Plant,
    diet: Diet::empty(),
    feeding: FeedingStyle::Grazer,
    food_penalty: distance_penalty,
};

impl Species {
    pub fn profile(self) -> &'static SpeciesProfile {
        match self {
            Species::Plant => &PLANT,
            Species::Rabbit => &RABBIT,
            Species::Fox => &FOX,
        }
    }

    pub fn as_diet(self) -> Diet {
        match self {
            Species::Plant => Diet::PLANT,
            Species::Rabbit => Diet::RABBIT,
            Species::Fox => Diet::FOX,
        }
    }

    pub fn is_animal(self) -> bool {
        !matches!(self, Species::Plant)
    }
}
