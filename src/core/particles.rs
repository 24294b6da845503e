// Background particle field: drifting points that bounce off the viewport
// edges and link up with nearby neighbors. Pure simulation; drawing lives
// in the web renderer.

use super::constants::{
    LINK_ALPHA_SCALE, LINK_MAX_DIST, MAX_PARTICLES, PARTICLE_ALPHA_MIN, PARTICLE_ALPHA_SPAN,
    PARTICLE_AREA_DIVISOR, PARTICLE_RADIUS_MIN, PARTICLE_RADIUS_SPAN, PARTICLE_SPEED,
    REFERENCE_FRAME_RATE_HZ,
};
use glam::Vec2;
use rand::prelude::*;

#[derive(Clone, Copy, Debug)]
pub struct Particle {
    pub pos: Vec2,
    /// Px per reference frame, like the fade step; scaled by dt when stepped.
    pub vel: Vec2,
    pub radius: f32,
    pub alpha: f32,
}

/// One proximity link between two particles, faded by distance.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LinkSegment {
    pub a: Vec2,
    pub b: Vec2,
    pub alpha: f32,
}

/// Density rule: one particle per patch of area, capped.
pub fn particle_count(width: f32, height: f32) -> usize {
    ((width * height / PARTICLE_AREA_DIVISOR) as usize).min(MAX_PARTICLES)
}

/// Link opacity for a pair at distance `dist`, `None` at or past the cutoff.
pub fn link_alpha(dist: f32) -> Option<f32> {
    (dist < LINK_MAX_DIST).then(|| (1.0 - dist / LINK_MAX_DIST) * LINK_ALPHA_SCALE)
}

pub struct ParticleField {
    width: f32,
    height: f32,
    particles: Vec<Particle>,
    rng: StdRng,
}

impl ParticleField {
    pub fn new(width: f32, height: f32, seed: u64) -> Self {
        let mut field = Self {
            width,
            height,
            particles: Vec::new(),
            rng: StdRng::seed_from_u64(seed),
        };
        field.fill_to_target();
        field
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn bounds(&self) -> (f32, f32) {
        (self.width, self.height)
    }

    /// Advance positions and reflect off the field edges. Positions are
    /// clamped back inside before the bounce so a particle can never sit
    /// outside the bounds flipping its velocity every frame.
    pub fn step(&mut self, dt_sec: f32) {
        let scale = dt_sec * REFERENCE_FRAME_RATE_HZ;
        for p in &mut self.particles {
            p.pos += p.vel * scale;
            if p.pos.x < 0.0 || p.pos.x > self.width {
                p.pos.x = p.pos.x.clamp(0.0, self.width);
                p.vel.x = -p.vel.x;
            }
            if p.pos.y < 0.0 || p.pos.y > self.height {
                p.pos.y = p.pos.y.clamp(0.0, self.height);
                p.vel.y = -p.vel.y;
            }
        }
    }

    /// Track a viewport change: existing particles are kept and pulled into
    /// the new bounds, and the population follows the density rule.
    pub fn resize(&mut self, width: f32, height: f32) {
        self.width = width;
        self.height = height;
        for p in &mut self.particles {
            p.pos.x = p.pos.x.clamp(0.0, width);
            p.pos.y = p.pos.y.clamp(0.0, height);
        }
        let target = particle_count(width, height);
        self.particles.truncate(target);
        self.fill_to_target();
    }

    /// All pairs close enough to draw a connecting line. O(n²) over a
    /// capped population.
    pub fn links(&self) -> Vec<LinkSegment> {
        let mut out = Vec::new();
        for i in 0..self.particles.len() {
            for j in (i + 1)..self.particles.len() {
                let a = self.particles[i].pos;
                let b = self.particles[j].pos;
                if let Some(alpha) = link_alpha(a.distance(b)) {
                    out.push(LinkSegment { a, b, alpha });
                }
            }
        }
        out
    }

    fn fill_to_target(&mut self) {
        let target = particle_count(self.width, self.height);
        while self.particles.len() < target {
            let p = Particle {
                pos: Vec2::new(
                    self.rng.gen::<f32>() * self.width,
                    self.rng.gen::<f32>() * self.height,
                ),
                vel: Vec2::new(
                    (self.rng.gen::<f32>() - 0.5) * PARTICLE_SPEED,
                    (self.rng.gen::<f32>() - 0.5) * PARTICLE_SPEED,
                ),
                radius: self.rng.gen::<f32>() * PARTICLE_RADIUS_SPAN + PARTICLE_RADIUS_MIN,
                alpha: self.rng.gen::<f32>() * PARTICLE_ALPHA_SPAN + PARTICLE_ALPHA_MIN,
            };
            self.particles.push(p);
        }
    }
}
