use crate::color::{Rgb, WHITE};
use crate::surface::{Entity, Paint, Surface};
use crate::uniform;
use fastrand::Rng;
use std::f32::consts::TAU;

pub const SPARK_GRAVITY: f32 = 0.08;

/// Small short-lived ember thrown out alongside the main particles.
#[derive(Debug, Clone)]
pub struct Spark {
    pub x: f32,
    pub y: f32,
    pub vx: f32,
    pub vy: f32,
    pub color: Rgb,
    pub life: f32,
    pub decay: f32,
    pub size: f32,
}

impl Spark {
    pub fn new(x: f32, y: f32, color: Rgb, rng: &mut Rng) -> Self {
        let angle = rng.f32() * TAU;
        let speed = uniform(rng, 0.5, 2.5);

        Self {
            x,
            y,
            vx: angle.cos() * speed,
            vy: angle.sin() * speed,
            color,
            life: 1.0,
            decay: uniform(rng, 0.007, 0.021),
            size: uniform(rng, 0.3, 1.0),
        }
    }
}

impl Entity for Spark {
    fn advance(&mut self) {
        if self.is_expired() {
            return;
        }
        self.x += self.vx;
        self.y += self.vy;
        self.vy += SPARK_GRAVITY;
        self.life -= self.decay;
    }

    fn is_expired(&self) -> bool {
        self.life <= 0.0
    }

    fn render<S: Surface + ?Sized>(&self, surface: &mut S) {
        if self.is_expired() {
            return;
        }
        surface.fill_circle(
            self.x,
            self.y,
            self.size,
            Paint::solid(WHITE, self.life).with_glow(6.0, self.color),
        );
    }
}
