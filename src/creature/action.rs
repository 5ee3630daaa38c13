use crate::world::coord::Coord;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FoodTarget {
    Plant(u64),
    Prey(u64),
}

/// Current high-level behaviour. Each state carries the only target that is
/// meaningful for it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum CreatureAction {
    #[default]
    Exploring,
    GoingToFood(FoodTarget),
    Eating(FoodTarget),
    GoingToWater(Coord),
    Drinking(Coord),
    /// Females may wait here with a chosen partner; males only hold a partner
    /// they are walking towards.
    SearchingForMate(Option<u64>),
    Fornicating(u64),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ActionKind {
    Exploring,
    GoingToFood,
    Eating,
    GoingToWater,
    Drinking,
    SearchingForMate,
    Fornicating,
}

impl CreatureAction {
    pub fn kind(&self) -> ActionKind {
        match self {
            CreatureAction::Exploring => ActionKind::Exploring,
            CreatureAction::GoingToFood(_) => ActionKind::GoingToFood,
            CreatureAction::Eating(_) => ActionKind::Eating,
            CreatureAction::GoingToWater(_) => ActionKind::GoingToWater,
            CreatureAction::Drinking(_) => ActionKind::Drinking,
            CreatureAction::SearchingForMate(_) => ActionKind::SearchingForMate,
            CreatureAction::Fornicating(_) => ActionKind::Fornicating,
        }
    }

    pub fn food_target(&self) -> Option<FoodTarget> {
        match self {
            CreatureAction::GoingToFood(food) | CreatureAction::Eating(food) => Some(*food),
            _ => None,
        }
    }

    pub fn water_target(&self) -> Option<Coord> {
        match self {
            CreatureAction::GoingToWater(tile) | CreatureAction::Drinking(tile) => Some(*tile),
            _ => None,
        }
    }

    pub fn mate_target(&self) -> Option<u64> {
        match self {
            CreatureAction::SearchingForMate(mate) => *mate,
            CreatureAction::Fornicating(mate) => Some(*mate),
            _ => None,
        }
    }
}
