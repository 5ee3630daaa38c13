use super::coord::Coord;
use super::World;
use rand::seq::SliceRandom;
use rand::Rng;

/// Chance of continuing straight ahead when that tile is walkable.
const FORWARD_PROBABILITY: f64 = 0.2;
/// Number of random neighbours sampled when picking the best-aligned one.
const WEIGHTING_ITERATIONS: usize = 3;

impl World {
    /// Picks a random walkable neighbour, or stays put when boxed in.
    pub fn next_tile_random(&self, current: Coord, rng: &mut impl Rng) -> Coord {
        self.walkable_neighbors(current)
            .choose(rng)
            .copied()
            .unwrap_or(current)
    }

    /// Random walk step biased towards the direction of the previous move.
    pub fn next_tile_weighted(&self, current: Coord, previous: Coord, rng: &mut impl Rng) -> Coord {
        if current == previous {
            return self.next_tile_random(current, rng);
        }

        let forward = current - previous;
        if rng.gen::<f64>() < FORWARD_PROBABILITY {
            let ahead = current + forward;
            if self.is_walkable(ahead) {
                return ahead;
            }
        }

        let neighbours = self.walkable_neighbors(current);
        if neighbours.is_empty() {
            return current;
        }

        let forward_dir = glam::Vec2::new(forward.x as f32, forward.y as f32).normalize_or_zero();
        let mut best_score = f32::MIN;
        let mut best = current;

        for _ in 0..WEIGHTING_ITERATIONS {
            let Some(&candidate) = neighbours.choose(rng) else {
                break;
            };
            let offset = candidate - current;
            let dir = glam::Vec2::new(offset.x as f32, offset.y as f32).normalize_or_zero();
            let score = dir.dot(forward_dir);
            if score > best_score {
                best_score = score;
                best = candidate;
            }
        }

        best
    }
}
