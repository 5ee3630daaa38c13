use super::coord::Coord;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};

/// A depletable food source rooted on a single tile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Plant {
    pub id: u64,
    pub coord: Coord,
    pub amount: f64,
}

/// Plant inventory with at most one plant per tile.
#[derive(Debug, Clone, Default)]
pub struct Plants {
    plants: BTreeMap<u64, Plant>,
    by_coord: HashMap<Coord, u64>,
    next_id: u64,
}

impl Plants {
    pub fn new() -> Self {
        Self::default()
    }

    /// Plants a new food source. Returns `None` if the tile is already taken.
    pub fn spawn(&mut self, coord: Coord, amount: f64) -> Option<u64> {
        if self.by_coord.contains_key(&coord) || amount <= 0.0 {
            return None;
        }

        let id = self.next_id;
        self.next_id += 1;
        self.plants.insert(id, Plant { id, coord, amount });
        self.by_coord.insert(coord, id);
        Some(id)
    }

    pub fn get(&self, id: u64) -> Option<&Plant> {
        self.plants.get(&id)
    }

    pub fn at(&self, coord: Coord) -> Option<&Plant> {
        self.by_coord.get(&coord).and_then(|id| self.plants.get(id))
    }

    pub fn contains(&self, id: u64) -> bool {
        self.plants.contains_key(&id)
    }

    /// Takes up to `amount` from the plant and returns what was actually eaten.
    /// An exhausted plant is removed.
    pub fn consume(&mut self, id: u64, amount: f64) -> f64 {
        let Some(plant) = self.plants.get_mut(&id) else {
            return 0.0;
        };

        let eaten = amount.max(0.0).min(plant.amount);
        plant.amount -= eaten;

        if plant.amount <= 0.0 {
            let coord = plant.coord;
            self.plants.remove(&id);
            self.by_coord.remove(&coord);
            log::trace!("Plant {} at ({}, {}) eaten away", id, coord.x, coord.y);
        }

        eaten
    }

    pub fn len(&self) -> usize {
        self.plants.len()
    }

    pub fn is_empty(&self) -> bool {
        self.plants.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Plant> {
        self.plants.values()
    }

    pub fn total_amount(&self) -> f64 {
        self.plants.values().map(|p| p.amount).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spawn_one_per_tile() {
        let mut plants = Plants::new();
        let id = plants.spawn(Coord::new(1, 1), 1.0);
        assert!(id.is_some());
        assert!(plants.spawn(Coord::new(1, 1), 1.0).is_none());
        assert_eq!(plants.len(), 1);
        assert_eq!(plants.at(Coord::new(1, 1)).map(|p| p.id), id);
    }

    #[test]
    fn test_consume_partial() {
        let mut plants = Plants::new();
        let id = plants.spawn(Coord::new(0, 0), 0.3).unwrap();

        let eaten = plants.consume(id, 0.1);
        assert!((eaten - 0.1).abs() < 1e-9);
        assert!((plants.get(id).unwrap().amount - 0.2).abs() < 1e-9);
    }

    #[test]
    fn test_consume_exhausts_plant() {
        let mut plants = Plants::new();
        let id = plants.spawn(Coord::new(2, 3), 0.05).unwrap();

        let eaten = plants.consume(id, 0.1);
        assert!((eaten - 0.05).abs() < 1e-9);
        assert!(!plants.contains(id));
        assert!(plants.at(Coord::new(2, 3)).is_none());

        assert_eq!(plants.consume(id, 0.1), 0.0);
    }

    #[test]
    fn test_total_amount() {
        let mut plants = Plants::new();
        plants.spawn(Coord::new(0, 0), 0.5);
        plants.spawn(Coord::new(1, 0), 1.0);
        assert!((plants.total_amount() - 1.5).abs() < 1e-9);
    }
}
