//! Background particle field.
//!
//! A fixed batch of points drifting in straight lines, bouncing off the
//! viewport edges, with faint links between close neighbours.

use crate::config::ParticleConfig;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    pub x: f32,
    pub y: f32,
    pub vx: f32,
    pub vy: f32,
    pub radius: f32,
}

impl Particle {
    /// Advance one frame, then turn any velocity component that points away
    /// from the interior of `[0, width] x [0, height]`.
    ///
    /// The turn is toward the inside, not a blind negation, so a particle
    /// still outside after a shrink keeps heading back.
    pub fn step(&mut self, width: f32, height: f32) {
        self.x += self.vx;
        self.y += self.vy;

        if self.x < 0.0 {
            self.vx = self.vx.abs();
        } else if self.x > width {
            self.vx = -self.vx.abs();
        }
        if self.y < 0.0 {
            self.vy = self.vy.abs();
        } else if self.y > height {
            self.vy = -self.vy.abs();
        }
    }
}

/// A line between two particles.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Link {
    pub a: usize,
    pub b: usize,
    /// 0.0 at the threshold, `max_link_alpha` at zero distance
    pub alpha: f32,
}

pub struct ParticleField {
    particles: Vec<Particle>,
    width: f32,
    height: f32,
    config: ParticleConfig,
}

impl ParticleField {
    pub fn new(width: f32, height: f32, config: &ParticleConfig) -> Self {
        Self::with_rng(width, height, config, &mut fastrand::Rng::new())
    }

    /// Seed from an explicit generator (deterministic in tests).
    pub fn with_rng(
        width: f32,
        height: f32,
        config: &ParticleConfig,
        rng: &mut fastrand::Rng,
    ) -> Self {
        let speed = config.max_speed;
        let particles = (0..config.count)
            .map(|_| Particle {
                x: rng.f32() * width,
                y: rng.f32() * height,
                vx: (rng.f32() * 2.0 - 1.0) * speed,
                vy: (rng.f32() * 2.0 - 1.0) * speed,
                radius: config.radius,
            })
            .collect();

        Self {
            particles,
            width,
            height,
            config: *config,
        }
    }

    /// Build from explicit particles.
    pub fn from_particles(
        particles: Vec<Particle>,
        width: f32,
        height: f32,
        config: &ParticleConfig,
    ) -> Self {
        Self {
            particles,
            width,
            height,
            config: *config,
        }
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn size(&self) -> (f32, f32) {
        (self.width, self.height)
    }

    pub fn config(&self) -> &ParticleConfig {
        &self.config
    }

    pub fn step(&mut self) {
        let (w, h) = (self.width, self.height);
        for p in &mut self.particles {
            p.step(w, h);
        }
    }

    /// Update the surface size. Positions are left where they are.
    pub fn resize(&mut self, width: f32, height: f32) {
        self.width = width;
        self.height = height;
    }

    /// All pairs strictly closer than `link_distance`. O(n²).
    pub fn links(&self) -> Vec<Link> {
        let max_d = self.config.link_distance;
        let max_d2 = max_d * max_d;
        let mut links = Vec::new();

        for (i, a) in self.particles.iter().enumerate() {
            for (j, b) in self.particles.iter().enumerate().skip(i + 1) {
                let dx = a.x - b.x;
                let dy = a.y - b.y;
                let d2 = dx * dx + dy * dy;
                if d2 >= max_d2 {
                    continue;
                }
                let d = d2.sqrt();
                links.push(Link {
                    a: i,
                    b: j,
                    alpha: self.config.max_link_alpha * (1.0 - d / max_d),
                });
            }
        }
        links
    }
}
