pub mod coord;
pub mod exploration;
pub mod pathfinding;
pub mod plants;
pub mod terrain;

use crate::config::WorldConfig;
use crate::error::{Result, SimError};
use coord::Coord;
use glam::Vec3;
use plants::Plants;
use rand::Rng;
use terrain::Terrain;

#[derive(Debug, Clone)]
pub struct World {
    width: usize,
    height: usize,
    grid: Vec<Terrain>,
    pub plants: Plants,
}

impl World {
    pub fn new(width: usize, height: usize) -> Self {
        let grid = vec![Terrain::Land; width * height];
        Self {
            width,
            height,
            grid,
            plants: Plants::new(),
        }
    }

    /// Builds a world from rows of `.` (land), `~` (water) and `*` (land with a plant).
    pub fn from_ascii(map: &str, plant_amount: f64) -> Result<Self> {
        let rows: Vec<&str> = map
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect();

        let height = rows.len();
        let width = rows.first().map(|r| r.chars().count()).unwrap_or(0);
        if width == 0 {
            return Err(SimError::InvalidConfig("map is empty".to_string()));
        }

        let mut world = World::new(width, height);
        for (y, row) in rows.iter().enumerate() {
            if row.chars().count() != width {
                return Err(SimError::InvalidConfig(format!(
                    "map row {} has width {}, expected {}",
                    y,
                    row.chars().count(),
                    width
                )));
            }

            for (x, symbol) in row.chars().enumerate() {
                let terrain = Terrain::from_symbol(symbol).ok_or(SimError::InvalidMap {
                    line: y + 1,
                    column: x + 1,
                    symbol,
                })?;
                let coord = Coord::new(x as i32, y as i32);
                world.set(coord, terrain);
                if symbol == '*' {
                    world.plants.spawn(coord, plant_amount);
                }
            }
        }

        Ok(world)
    }

    /// Scatters water tiles and plants over an all-land world.
    pub fn scatter(config: &WorldConfig, rng: &mut impl Rng) -> Self {
        let mut world = World::new(config.width, config.height);

        for y in 0..config.height {
            for x in 0..config.width {
                let coord = Coord::new(x as i32, y as i32);
                if rng.gen::<f64>() < config.water_density {
                    world.set(coord, Terrain::Water);
                } else if rng.gen::<f64>() < config.plant_density {
                    world.plants.spawn(coord, config.plant_amount);
                }
            }
        }

        world
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn in_bounds(&self, coord: Coord) -> bool {
        coord.x >= 0
            && coord.y >= 0
            && (coord.x as usize) < self.width
            && (coord.y as usize) < self.height
    }

    pub fn get(&self, coord: Coord) -> Option<Terrain> {
        if !self.in_bounds(coord) {
            return None;
        }
        self.grid
            .get(coord.y as usize * self.width + coord.x as usize)
            .copied()
    }

    pub fn set(&mut self, coord: Coord, terrain: Terrain) {
        if !self.in_bounds(coord) {
            return;
        }
        let idx = coord.y as usize * self.width + coord.x as usize;
        self.grid[idx] = terrain;
    }

    pub fn is_walkable(&self, coord: Coord) -> bool {
        self.get(coord).map(|t| t.is_walkable()).unwrap_or(false)
    }

    pub fn is_water(&self, coord: Coord) -> bool {
        self.get(coord).map(|t| t.is_water()).unwrap_or(false)
    }

    pub fn neighbors(&self, coord: Coord) -> Vec<Coord> {
        let mut result = Vec::with_capacity(8);

        for dy in -1..=1 {
            for dx in -1..=1 {
                if dx == 0 && dy == 0 {
                    continue;
                }

                let n = Coord::new(coord.x + dx, coord.y + dy);
                if self.in_bounds(n) {
                    result.push(n);
                }
            }
        }

        result
    }

    pub fn walkable_neighbors(&self, coord: Coord) -> Vec<Coord> {
        self.neighbors(coord)
            .into_iter()
            .filter(|n| self.is_walkable(*n))
            .collect()
    }

    /// World-space anchor of a tile; the grid lies on the XZ plane with Y up.
    pub fn tile_center(&self, coord: Coord) -> Vec3 {
        Vec3::new(coord.x as f32, 0.0, coord.y as f32)
    }

    pub fn count_tiles(&self, predicate: impl Fn(&Terrain) -> bool) -> usize {
        self.grid.iter().filter(|t| predicate(t)).count()
    }

    pub fn walkable_tiles(&self) -> Vec<Coord> {
        let mut tiles = Vec::new();
        for y in 0..self.height {
            for x in 0..self.width {
                let coord = Coord::new(x as i32, y as i32);
                if self.is_walkable(coord) {
                    tiles.push(coord);
                }
            }
        }
        tiles
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_world_creation() {
        let world = World::new(10, 10);
        assert_eq!(world.width(), 10);
        assert_eq!(world.height(), 10);
        assert_eq!(world.count_tiles(|t| t.is_walkable()), 100);
    }

    #[test]
    fn test_world_get_set() {
        let mut world = World::new(10, 10);
        assert!(world.is_walkable(Coord::new(5, 5)));

        world.set(Coord::new(5, 5), Terrain::Water);
        assert!(world.is_water(Coord::new(5, 5)));
        assert!(!world.is_walkable(Coord::new(5, 5)));
        assert!(world.get(Coord::new(-1, 0)).is_none());
        assert!(world.get(Coord::new(10, 0)).is_none());
    }

    #[test]
    fn test_world_neighbors() {
        let world = World::new(10, 10);

        assert_eq!(world.neighbors(Coord::new(5, 5)).len(), 8);
        assert_eq!(world.neighbors(Coord::new(0, 0)).len(), 3);
        assert_eq!(world.neighbors(Coord::new(9, 9)).len(), 3);
    }

    #[test]
    fn test_world_walkable_neighbors() {
        let mut world = World::new(10, 10);
        world.set(Coord::new(4, 4), Terrain::Water);
        world.set(Coord::new(5, 4), Terrain::Water);

        assert_eq!(world.walkable_neighbors(Coord::new(5, 5)).len(), 6);
    }

    #[test]
    fn test_from_ascii() {
        let world = World::from_ascii(
            "
            ..~
            .*~
            ",
            0.5,
        )
        .unwrap();

        assert_eq!(world.width(), 3);
        assert_eq!(world.height(), 2);
        assert!(world.is_water(Coord::new(2, 0)));
        assert!(world.is_walkable(Coord::new(1, 1)));
        let plant = world.plants.at(Coord::new(1, 1)).unwrap();
        assert_eq!(plant.amount, 0.5);
    }

    #[test]
    fn test_from_ascii_rejects_unknown_symbol() {
        let err = World::from_ascii("..#", 1.0).unwrap_err();
        assert!(matches!(
            err,
            SimError::InvalidMap {
                line: 1,
                column: 3,
                symbol: '#'
            }
        ));
    }

    #[test]
    fn test_from_ascii_rejects_ragged_rows() {
        assert!(World::from_ascii("...\n..", 1.0).is_err());
        assert!(World::from_ascii("", 1.0).is_err());
    }

    #[test]
    fn test_scatter() {
        let config = WorldConfig {
            width: 50,
            height: 50,
            water_density: 0.1,
            plant_density: 0.2,
            plant_amount: 1.0,
            map: None,
        };
        let mut rng = StdRng::seed_from_u64(7);
        let world = World::scatter(&config, &mut rng);

        let water = world.count_tiles(|t| t.is_water());
        assert!(water > 0 && water < 2500);
        assert!(!world.plants.is_empty());
        for plant in world.plants.iter() {
            assert!(world.is_walkable(plant.coord));
        }
    }

    #[test]
    fn test_tile_center() {
        let world = World::new(4, 4);
        assert_eq!(world.tile_center(Coord::new(2, 3)), Vec3::new(2.0, 0.0, 3.0));
    }
}
