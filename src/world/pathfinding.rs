//! Grid pathfinding.
//!
//! The simulation only depends on the [`Pathfinder`] trait; [`GridPathfinder`]
//! is the A* search used by default.

use super::coord::Coord;
use super::World;
use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap};
use std::fmt;

const DIAGONAL_COST: f32 = std::f32::consts::SQRT_2;

pub trait Pathfinder: fmt::Debug {
    /// Tiles to walk from `from` to `to`, excluding `from` and including `to`.
    /// Empty when `to` is unreachable or equal to `from`.
    fn compute_path(&mut self, world: &World, from: Coord, to: Coord) -> Vec<Coord>;
}

/// Node in the A* open set
#[derive(Debug, Clone)]
struct PathNode {
    coord: Coord,
    f_cost: f32,
}

impl PartialEq for PathNode {
    fn eq(&self, other: &Self) -> bool {
        self.coord == other.coord
    }
}

impl Eq for PathNode {}

impl Ord for PathNode {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse order for min-heap
        other
            .f_cost
            .partial_cmp(&self.f_cost)
            .unwrap_or(Ordering::Equal)
            .then_with(|| other.coord.cmp(&self.coord))
    }
}

impl PartialOrd for PathNode {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Eight-way A* over walkable tiles. The goal tile itself may be unwalkable
/// (a water tile or an occupied food tile), since creatures stop next to it.
#[derive(Debug, Clone, Default)]
pub struct GridPathfinder;

fn octile_distance(a: Coord, b: Coord) -> f32 {
    let dx = (a.x - b.x).abs() as f32;
    let dy = (a.y - b.y).abs() as f32;
    let (min, max) = if dx < dy { (dx, dy) } else { (dy, dx) };
    max - min + min * DIAGONAL_COST
}

impl Pathfinder for GridPathfinder {
    fn compute_path(&mut self, world: &World, from: Coord, to: Coord) -> Vec<Coord> {
        if from == to || !world.in_bounds(to) {
            return Vec::new();
        }

        let mut open_set = BinaryHeap::new();
        let mut came_from: HashMap<Coord, Coord> = HashMap::new();
        let mut g_scores: HashMap<Coord, f32> = HashMap::new();

        g_scores.insert(from, 0.0);
        open_set.push(PathNode {
            coord: from,
            f_cost: octile_distance(from, to),
        });

        while let Some(current) = open_set.pop() {
            if current.coord == to {
                let mut path = vec![to];
                let mut step = to;
                while let Some(&prev) = came_from.get(&step) {
                    if prev == from {
                        break;
                    }
                    path.push(prev);
                    step = prev;
                }
                path.reverse();
                return path;
            }

            let current_g = g_scores.get(&current.coord).copied().unwrap_or(f32::INFINITY);

            for neighbour in world.neighbors(current.coord) {
                if neighbour != to && !world.is_walkable(neighbour) {
                    continue;
                }

                let step_cost = if Coord::is_diagonal_step(current.coord, neighbour) {
                    DIAGONAL_COST
                } else {
                    1.0
                };
                let tentative_g = current_g + step_cost;

                if tentative_g < g_scores.get(&neighbour).copied().unwrap_or(f32::INFINITY) {
                    came_from.insert(neighbour, current.coord);
                    g_scores.insert(neighbour, tentative_g);
                    open_set.push(PathNode {
                        coord: neighbour,
                        f_cost: tentative_g + octile_distance(neighbour, to),
                    });
                }
            }
        }

        Vec::new()
    }
}
