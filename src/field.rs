// ParticleField owns the particle set and the viewport size, advances every
// particle once per frame and draws the particles plus the faint links
// between every pair closer than the link distance.

use crate::config::FieldConfig;
use crate::particle::Particle;
use crate::surface::Surface;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

pub struct ParticleField {
    width: f64,
    height: f64,
    particles: Vec<Particle>,
    config: FieldConfig,
}

impl ParticleField {
    // Uses the config seed when one is given, the thread rng otherwise
    pub fn new(width: f64, height: f64, config: FieldConfig) -> ParticleField {
        match config.seed {
            Some(seed) => ParticleField::seeded(width, height, config, seed),
            None => ParticleField::with_rng(width, height, config, &mut rand::thread_rng()),
        }
    }

    pub fn seeded(width: f64, height: f64, config: FieldConfig, seed: u64) -> ParticleField {
        let mut rng = StdRng::seed_from_u64(seed);
        ParticleField::with_rng(width, height, config, &mut rng)
    }

    pub fn with_rng<R: Rng + ?Sized>(
        width: f64,
        height: f64,
        config: FieldConfig,
        rng: &mut R,
    ) -> ParticleField {
        let particles = (0..config.particle_count)
            .map(|_| Particle::random(&mut *rng, width, height, config.max_speed))
            .collect();
        ParticleField::from_particles(width, height, config, particles)
    }

    pub fn from_particles(
        width: f64,
        height: f64,
        config: FieldConfig,
        particles: Vec<Particle>,
    ) -> ParticleField {
        ParticleField {
            width,
            height,
            particles,
            config,
        }
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    pub fn config(&self) -> &FieldConfig {
        &self.config
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    // Existing particles are neither rescaled nor respawned
    pub fn resize(&mut self, width: f64, height: f64) {
        self.width = width;
        self.height = height;
    }

    // Advances all particles without drawing
    pub fn step(&mut self) {
        let (width, height) = (self.width, self.height);
        for particle in &mut self.particles {
            particle.step(width, height);
        }
    }

    // None when the pair is too far apart to be linked
    pub fn link_opacity(&self, distance: f64) -> Option<f64> {
        link_opacity(distance, self.config.link_distance, self.config.link_opacity)
    }

    // Clear, then advance, draw and link each particle in order. Particles
    // after the current one haven't moved yet, and every close pair is
    // stroked twice, once from each end.
    pub fn frame<S: Surface + ?Sized>(&mut self, surface: &mut S) {
        let (width, height) = (self.width, self.height);
        let FieldConfig {
            radius,
            particle_opacity,
            line_width,
            color,
            ..
        } = self.config;

        surface.clear(width, height);

        for i in 0..self.particles.len() {
            self.particles[i].step(width, height);
            let particle = self.particles[i];

            surface.fill_circle(particle.pos, radius, color, particle_opacity);

            for (j, other) in self.particles.iter().enumerate() {
                if i == j {
                    continue;
                }
                let distance = particle.distance_to(other);
                if let Some(alpha) = self.link_opacity(distance) {
                    surface.stroke_line(particle.pos, other.pos, line_width, color, alpha);
                }
            }
        }
    }
}

// Linear fade from max_opacity at distance 0 to nothing at link_distance
pub fn link_opacity(distance: f64, link_distance: f64, max_opacity: f64) -> Option<f64> {
    if distance < link_distance {
        Some((1.0 - distance / link_distance) * max_opacity)
    } else {
        None
    }
}
