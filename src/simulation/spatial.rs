use crate::world::coord::Coord;
use std::collections::HashMap;

/// Tile → creatures standing on it. Several creatures may share a tile
/// (a newborn starts on its mother's tile).
#[derive(Debug, Clone, Default)]
pub struct SpatialIndex {
    cells: HashMap<Coord, Vec<u64>>,
    len: usize,
}

impl SpatialIndex {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, id: u64, coord: Coord) {
        let ids = self.cells.entry(coord).or_default();
        if !ids.contains(&id) {
            ids.push(id);
            self.len += 1;
        }
    }

    pub fn remove(&mut self, id: u64, coord: Coord) -> bool {
        let Some(ids) = self.cells.get_mut(&coord) else {
            return false;
        };
        let Some(pos) = ids.iter().position(|&other| other == id) else {
            return false;
        };

        ids.swap_remove(pos);
        if ids.is_empty() {
            self.cells.remove(&coord);
        }
        self.len -= 1;
        true
    }

    pub fn register_move(&mut self, id: u64, from: Coord, to: Coord) {
        if from == to {
            return;
        }
        if !self.remove(id, from) {
            log::warn!("Creature {} moved from ({}, {}) but was not indexed there", id, from.x, from.y);
        }
        self.insert(id, to);
    }

    pub fn ids_at(&self, coord: Coord) -> &[u64] {
        self.cells.get(&coord).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Ids on tiles within `radius` of `center` (Euclidean, on tile coordinates).
    pub fn ids_within(&self, center: Coord, radius: i32) -> Vec<u64> {
        let radius_sq = radius * radius;
        let mut result = Vec::new();

        for y in center.y - radius..=center.y + radius {
            for x in center.x - radius..=center.x + radius {
                let coord = Coord::new(x, y);
                if Coord::sqr_distance(center, coord) <= radius_sq {
                    result.extend_from_slice(self.ids_at(coord));
                }
            }
        }

        result
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}
