use crate::color::{Rgb, WHITE};
use crate::pattern::{Motion, PatternType};
use crate::surface::{Entity, Frame, Paint, Rect, Surface};
use crate::uniform;
use fastrand::Rng;
use std::f32::consts::TAU;

pub const SIZE_FALLOFF: f32 = 0.985;

// Below this much life left the particle fades out instead of brightening
const FADE_ZONE: f32 = 0.25;
const FLARE_THRESHOLD: f32 = 0.7;
const GLOW_RADIUS: f32 = 12.0;

/// One exploded fragment.
#[derive(Debug, Clone)]
pub struct Particle {
    pub x: f32,
    pub y: f32,
    pub color: Rgb,
    pub pattern: PatternType,
    pub life: f32,
    pub decay: f32,
    pub motion: Motion,
    pub size: f32,
    pub rotation: f32,
    pub rotation_speed: f32,
    pub sparkle: f32,
    pub sparkle_speed: f32,
    pub brightness: f32,
}

impl Particle {
    pub fn new(x: f32, y: f32, color: Rgb, pattern: PatternType, rng: &mut Rng) -> Self {
        let angle = rng.f32() * TAU;
        let speed = uniform(rng, 2.0, 6.0);

        Self {
            x,
            y,
            color,
            pattern,
            life: 1.0,
            decay: pattern.decay(rng),
            motion: pattern.motion(angle, speed),
            size: uniform(rng, 1.0, 2.5),
            rotation: rng.f32() * TAU,
            rotation_speed: uniform(rng, -0.1, 0.1),
            sparkle: rng.f32() * TAU,
            sparkle_speed: uniform(rng, 0.05, 0.15),
            brightness: uniform(rng, 0.7, 1.0),
        }
    }

    /// Twinkle oscillation remapped to [0, 1].
    pub fn twinkle(&self) -> f32 {
        self.sparkle.sin() * 0.5 + 0.5
    }

    /// Brighten towards full brightness, then fade out over the last quarter of life.
    pub fn alpha(&self) -> f32 {
        if self.life > FADE_ZONE {
            ((1.0 - self.life) / FADE_ZONE + 0.3).min(1.0) * self.brightness
        } else {
            (self.life / FADE_ZONE).max(0.0) * self.brightness
        }
    }

    pub fn velocity(&self) -> Option<(f32, f32)> {
        self.motion.velocity()
    }
}

impl Entity for Particle {
    fn advance(&mut self) {
        if self.is_expired() {
            return;
        }

        self.motion.step(&mut self.x, &mut self.y);

        self.life -= self.decay;
        self.size *= SIZE_FALLOFF;
        self.sparkle += self.sparkle_speed;
        self.rotation += self.rotation_speed;
    }

    fn is_expired(&self) -> bool {
        self.life <= 0.0
    }

    fn render<S: Surface + ?Sized>(&self, surface: &mut S) {
        if self.is_expired() {
            return;
        }

        let twinkle = self.twinkle();
        let size = self.size * (0.8 + twinkle * 0.4);
        let alpha = self.alpha();

        // Soft outer glow
        surface.fill_circle(
            self.x,
            self.y,
            size * 2.0,
            Paint::solid(self.color, alpha * 0.3).with_glow(GLOW_RADIUS, self.color),
        );

        // White core
        surface.fill_circle(self.x, self.y, size * 0.3, Paint::solid(WHITE, alpha));

        // Star cross
        let frame = Frame::new(self.x, self.y, self.rotation);
        let arm = Paint::solid(self.color, alpha);
        surface.fill_rect(frame, Rect::new(-size, -size * 0.2, size * 2.0, size * 0.4), arm);
        surface.fill_rect(frame, Rect::new(-size * 0.2, -size, size * 0.4, size * 2.0), arm);

        if twinkle > FLARE_THRESHOLD {
            let flare = Paint::solid(WHITE, alpha * (twinkle - FLARE_THRESHOLD) * 1.5);
            surface.fill_rect(frame, Rect::new(-size * 1.5, -size * 0.1, size * 3.0, size * 0.2), flare);
            surface.fill_rect(frame, Rect::new(-size * 0.1, -size * 1.5, size * 0.2, size * 3.0), flare);
        }
    }
}
