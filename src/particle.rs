// Simple particle struct to keep track of individual position and velocity.
// Velocity never changes magnitude, only the sign of a component when the
// particle crosses an edge of the viewport.

use rand::Rng;
use vecmath::Vector2;

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Particle {
    pub pos: Vector2<f64>,
    pub vel: Vector2<f64>,
}

impl Particle {
    pub fn new(pos_x: f64, pos_y: f64, vel_x: f64, vel_y: f64) -> Particle {
        Particle {
            pos: [pos_x, pos_y],
            vel: [vel_x, vel_y],
        }
    }

    // Uniform position in [0, width) x [0, height), each velocity
    // component uniform in [-max_speed, max_speed)
    pub fn random<R: Rng + ?Sized>(rng: &mut R, width: f64, height: f64, max_speed: f64) -> Particle {
        let pos_x = rng.gen::<f64>() * width;
        let pos_y = rng.gen::<f64>() * height;
        let vel_x = (rng.gen::<f64>() - 0.5) * 2.0 * max_speed;
        let vel_y = (rng.gen::<f64>() - 0.5) * 2.0 * max_speed;
        Particle::new(pos_x, pos_y, vel_x, vel_y)
    }

    // Advances one frame, then reflects off any edge the new position lies
    // beyond. The position itself is not clamped, so the particle can sit up
    // to one frame's displacement outside the viewport until the next step.
    pub fn step(&mut self, width: f64, height: f64) {
        self.pos = vecmath::vec2_add(self.pos, self.vel);
        if self.pos[0] < 0.0 || self.pos[0] > width {
            self.vel[0] *= -1.0;
        }
        if self.pos[1] < 0.0 || self.pos[1] > height {
            self.vel[1] *= -1.0;
        }
    }

    pub fn speed(&self) -> f64 {
        vecmath::vec2_len(self.vel)
    }

    pub fn distance_to(&self, other: &Particle) -> f64 {
        vecmath::vec2_len(vecmath::vec2_sub(self.pos, other.pos))
    }
}
