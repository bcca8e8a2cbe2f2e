//! Particle effects
//!
//! Bursts of short-lived points that drift, fade and shrink. Particles are
//! purely visual and never feed back into gameplay.

use glam::DVec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use crate::Color;
use crate::consts::*;

/// Default particle cap
pub const MAX_PARTICLES: usize = 500;

/// A single decaying effect point
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Particle {
    pub pos: DVec2,
    pub vel: DVec2,
    pub color: Color,
    /// 1.0 at spawn, removed once it reaches 0
    pub life: f64,
    /// Life lost per millisecond
    pub decay: f64,
    pub size: f64,
}

impl Particle {
    /// Spawn a particle at `pos` with random direction, speed, decay and size
    pub fn random<R: Rng + ?Sized>(pos: DVec2, color: Color, rng: &mut R) -> Self {
        let angle = rng.random::<f64>() * std::f64::consts::TAU;
        let speed = rng.random::<f64>() * PARTICLE_SPEED_RANGE + PARTICLE_MIN_SPEED;
        Self {
            pos,
            vel: DVec2::new(angle.cos(), angle.sin()) * speed,
            color,
            life: 1.0,
            decay: rng.random::<f64>() * PARTICLE_DECAY_RANGE + PARTICLE_MIN_DECAY,
            size: rng.random::<f64>() * PARTICLE_SIZE_RANGE + PARTICLE_MIN_SIZE,
        }
    }

    pub fn update(&mut self, dt: f64) {
        self.pos += self.vel * dt;
        self.life -= self.decay * dt;
        // Per call, deliberately not scaled by dt
        self.size *= PARTICLE_SHRINK;
    }

    #[inline]
    pub fn is_alive(&self) -> bool {
        self.life > 0.0
    }
}

/// Owns every live particle
#[derive(Debug, Clone)]
pub struct ParticleSystem {
    pub particles: Vec<Particle>,
    /// Maximum live particles; the oldest are dropped to make room
    pub max_particles: usize,
    rng: Pcg32,
}

impl ParticleSystem {
    pub fn new(seed: u64, max_particles: usize) -> Self {
        Self {
            particles: Vec::new(),
            max_particles,
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    /// Spawn `count` particles at `pos`
    pub fn spawn_burst(&mut self, pos: DVec2, color: Color, count: usize) {
        let count = count.min(self.max_particles);
        if count == 0 {
            return;
        }

        let overflow = (self.particles.len() + count).saturating_sub(self.max_particles);
        if overflow > 0 {
            self.particles.drain(..overflow);
        }

        for _ in 0..count {
            self.particles.push(Particle::random(pos, color, &mut self.rng));
        }
    }

    /// Advance and age every particle, then drop the dead ones
    pub fn update(&mut self, dt: f64) {
        for particle in self.particles.iter_mut() {
            particle.update(dt);
        }
        self.particles.retain(Particle::is_alive);
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Particle> {
        self.particles.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const WHITE: Color = Color::from_hex(0xffffff);

    #[test]
    fn test_burst_spawns_count() {
        let mut system = ParticleSystem::new(1, MAX_PARTICLES);
        system.spawn_burst(DVec2::new(10.0, 20.0), WHITE, 20);
        assert_eq!(system.len(), 20);
        for p in system.iter() {
            assert_eq!(p.pos, DVec2::new(10.0, 20.0));
            assert_eq!(p.life, 1.0);
            let speed = p.vel.length();
            assert!(speed > PARTICLE_MIN_SPEED - 1e-12);
            assert!(speed < PARTICLE_MIN_SPEED + PARTICLE_SPEED_RANGE + 1e-12);
            assert!(p.decay >= PARTICLE_MIN_DECAY);
            assert!(p.decay < PARTICLE_MIN_DECAY + PARTICLE_DECAY_RANGE);
            assert!(p.size >= PARTICLE_MIN_SIZE);
            assert!(p.size < PARTICLE_MIN_SIZE + PARTICLE_SIZE_RANGE);
        }
    }

    #[test]
    fn test_zero_count_is_noop() {
        let mut system = ParticleSystem::new(1, MAX_PARTICLES);
        system.spawn_burst(DVec2::ZERO, WHITE, 0);
        assert!(system.is_empty());
    }

    #[test]
    fn test_cap_drops_oldest() {
        let mut system = ParticleSystem::new(7, 25);
        system.spawn_burst(DVec2::ZERO, WHITE, 20);
        system.spawn_burst(DVec2::new(5.0, 5.0), Color::from_hex(0xff0000), 10);
        assert_eq!(system.len(), 25);
        // Five of the first burst were dropped, the rest are still in front
        assert_eq!(system.particles[0].color, WHITE);
        assert_eq!(system.particles[14].color, WHITE);
        assert_eq!(system.particles[15].color, Color::from_hex(0xff0000));
    }

    #[test]
    fn test_disabled_system_spawns_nothing() {
        let mut system = ParticleSystem::new(7, 0);
        system.spawn_burst(DVec2::ZERO, WHITE, 20);
        assert!(system.is_empty());
    }

    #[test]
    fn test_update_moves_and_shrinks() {
        let mut system = ParticleSystem::new(3, MAX_PARTICLES);
        system.spawn_burst(DVec2::ZERO, WHITE, 1);
        let before = system.particles[0].clone();

        system.update(10.0);
        let after = &system.particles[0];
        assert!((after.pos - before.vel * 10.0).length() < 1e-9);
        assert!((after.life - (1.0 - before.decay * 10.0)).abs() < 1e-12);
        assert!((after.size - before.size * 0.99).abs() < 1e-12);
    }

    #[test]
    fn test_shrink_ignores_dt() {
        let mut system = ParticleSystem::new(3, MAX_PARTICLES);
        system.spawn_burst(DVec2::ZERO, WHITE, 1);
        let size = system.particles[0].size;
        system.update(0.0);
        assert!((system.particles[0].size - size * 0.99).abs() < 1e-12);
    }

    #[test]
    fn test_dead_particles_removed() {
        let mut system = ParticleSystem::new(3, MAX_PARTICLES);
        system.spawn_burst(DVec2::ZERO, WHITE, 5);
        // Max decay is 0.003/ms, so 1000 ms drains every particle
        system.update(1000.0);
        assert!(system.is_empty());
    }

    proptest! {
        #[test]
        fn prop_life_strictly_decreases(
            seed in any::<u64>(),
            dts in prop::collection::vec(0.1f64..50.0, 1..40),
        ) {
            let mut system = ParticleSystem::new(seed, MAX_PARTICLES);
            system.spawn_burst(DVec2::ZERO, WHITE, 1);
            let mut life = system.particles[0].life;
            for dt in dts {
                system.update(dt);
                match system.particles.first() {
                    Some(p) => {
                        prop_assert!(p.life < life);
                        prop_assert!(p.life > 0.0);
                        life = p.life;
                    }
                    None => break,
                }
            }
        }
    }
}
