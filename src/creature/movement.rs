use glam::Vec3;

const SQRT_TWO: f32 = std::f32::consts::SQRT_2;

/// One tile-to-tile hop, animated along a small arc.
///
/// Diagonal hops cover more ground, so they run at `1/√2` speed with a `√2`
/// taller arc to take the same wall-clock time per unit distance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MoveState {
    start: Vec3,
    target: Vec3,
    t: f32,
    speed_factor: f32,
    height_factor: f32,
}

impl MoveState {
    pub fn new(start: Vec3, target: Vec3, diagonal: bool) -> Self {
        Self {
            start,
            target,
            t: 0.0,
            speed_factor: if diagonal { 1.0 / SQRT_TWO } else { 1.0 },
            height_factor: if diagonal { SQRT_TWO } else { 1.0 },
        }
    }

    pub fn progress(&self) -> f32 {
        self.t
    }

    pub fn speed_factor(&self) -> f32 {
        self.speed_factor
    }

    pub fn height_factor(&self) -> f32 {
        self.height_factor
    }

    /// Advances the hop and returns `true` once it has finished.
    pub fn advance(&mut self, dt: f64, move_speed: f64) -> bool {
        let step = (dt.max(0.0) * move_speed) as f32 * self.speed_factor;
        self.t = (self.t + step).min(1.0);
        self.t >= 1.0
    }

    pub fn position(&self, arc_height: f32) -> Vec3 {
        let centred = self.t - 0.5;
        let height = (1.0 - 4.0 * centred * centred) * arc_height * self.height_factor;
        self.start.lerp(self.target, self.t) + Vec3::Y * height
    }
}
