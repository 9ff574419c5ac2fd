//! Gradient orbs and the fixed-size set that moves and draws them.

use crate::color::ColorPair;
use crate::config::{DeviceClass, FieldConfig};
use crate::surface::{CanvasSurface, GradientStop, GradientStops};
use glam::DVec2;
use rand::Rng;
use std::f64::consts::TAU;

/// Breathing parameters for the drawn radius.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Pulse {
    /// Radians per millisecond.
    pub speed: f64,
    /// Fraction of the radius added or removed at the peak.
    pub amount: f64,
    pub phase: f64,
}

/// One soft circular gradient drifting across the surface.
///
/// Everything except `position` is fixed once the particle is created.
#[derive(Clone, Debug, PartialEq)]
pub struct Particle {
    pub position: DVec2,
    pub radius: f64,
    pub velocity: DVec2,
    pub opacity: f64,
    pub colors: ColorPair,
    pub pulse: Option<Pulse>,
}

impl Particle {
    pub fn random<R: Rng + ?Sized>(
        rng: &mut R,
        config: &FieldConfig,
        class: DeviceClass,
        width: f64,
        height: f64,
    ) -> Self {
        let position = DVec2::new(rng.gen::<f64>() * width, rng.gen::<f64>() * height);
        let radius = config.profile(class).radius.sample(rng);
        let velocity = DVec2::new(
            (rng.gen::<f64>() - 0.5) * config.speed,
            (rng.gen::<f64>() - 0.5) * config.speed,
        );
        let opacity = config.opacity.sample(rng);
        let colors = config.palette.choose(rng);
        let pulse = config.pulse.map(|p| Pulse {
            speed: p.speed.sample(rng),
            amount: p.amount.sample(rng),
            phase: rng.gen::<f64>() * TAU,
        });
        Self {
            position,
            radius,
            velocity,
            opacity,
            colors,
            pulse,
        }
    }

    /// Advance one step and wrap each axis independently once the circle has
    /// fully left `[-r, w + r] × [-r, h + r]`.
    #[inline]
    pub fn step(&mut self, width: f64, height: f64) {
        self.position += self.velocity;
        let r = self.radius;
        self.position.x = wrap_axis(self.position.x, r, width);
        self.position.y = wrap_axis(self.position.y, r, height);
    }

    /// Radius to draw at `elapsed_ms`; equals `radius` without a pulse.
    #[inline]
    pub fn drawn_radius(&self, elapsed_ms: f64) -> f64 {
        match self.pulse {
            Some(p) => self.radius * (1.0 + (elapsed_ms * p.speed + p.phase).sin() * p.amount),
            None => self.radius,
        }
    }
}

#[inline]
fn wrap_axis(value: f64, radius: f64, extent: f64) -> f64 {
    if value < -radius {
        extent + radius
    } else if value > extent + radius {
        -radius
    } else {
        value
    }
}

/// Fixed-size collection of orbs. Draw order is array order.
#[derive(Clone, Debug, Default)]
pub struct ParticleSet {
    particles: Vec<Particle>,
    mid_stop: Option<(f64, f64)>,
}

impl ParticleSet {
    /// `n` freshly randomized particles spread uniformly over `width × height`.
    pub fn seed<R: Rng + ?Sized>(
        rng: &mut R,
        config: &FieldConfig,
        n: usize,
        width: f64,
        height: f64,
        class: DeviceClass,
    ) -> Self {
        let particles = (0..n)
            .map(|_| Particle::random(rng, config, class, width, height))
            .collect();
        Self {
            particles,
            mid_stop: config.mid_stop.map(|m| (m.offset, m.alpha_scale)),
        }
    }

    pub fn from_particles(particles: Vec<Particle>) -> Self {
        Self {
            particles,
            mid_stop: None,
        }
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn clear(&mut self) {
        self.particles.clear();
    }

    pub fn update(&mut self, width: f64, height: f64) {
        for p in &mut self.particles {
            p.step(width, height);
        }
    }

    pub fn draw<C: CanvasSurface + ?Sized>(&self, canvas: &mut C, elapsed_ms: f64) {
        for p in &self.particles {
            let mut stops = GradientStops::new();
            stops.push(GradientStop {
                offset: 0.0,
                color: p.colors.inner.with_alpha(p.opacity),
            });
            if let Some((offset, alpha_scale)) = self.mid_stop {
                stops.push(GradientStop {
                    offset,
                    color: p.colors.outer.with_alpha(p.opacity * alpha_scale),
                });
            }
            stops.push(GradientStop {
                offset: 1.0,
                color: p.colors.outer.with_alpha(0.0),
            });
            canvas.fill_radial(p.position, p.drawn_radius(elapsed_ms), &stops);
        }
    }
}
