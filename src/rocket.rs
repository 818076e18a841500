use crate::color::{Rgb, WHITE};
use crate::pattern::PatternType;
use crate::surface::{Entity, Paint, Surface};
use crate::trail::Bounded;

/// Ticks from launch to target, whatever the distance.
pub const FLIGHT_TICKS: f32 = 40.0;
pub const TRAIL_LENGTH: usize = 25;
pub const ARRIVAL_RADIUS: f32 = 5.0;

const TRAIL_MAX_ALPHA: f32 = 0.22;
const HEAD_RADIUS: f32 = 1.5;

/// Where and how a rocket burst.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Detonation {
    pub x: f32,
    pub y: f32,
    pub pattern: PatternType,
}

#[derive(Debug, Clone)]
pub struct Rocket {
    pub x: f32,
    pub y: f32,
    pub target_x: f32,
    pub target_y: f32,
    pub vx: f32,
    pub vy: f32,
    pub color: Rgb,
    pub pattern: PatternType,
    pub life: f32,
    trail: Bounded<(f32, f32)>,
    detonation: Option<Detonation>,
}

impl Rocket {
    /// Launch from the bottom edge straight below the target.
    pub fn new(target_x: f32, target_y: f32, ground: f32, color: Rgb, pattern: PatternType) -> Self {
        let (x, y) = (target_x, ground);

        Self {
            x,
            y,
            target_x,
            target_y,
            // Fixed flight time: longer shots travel faster per tick
            vx: (target_x - x) / FLIGHT_TICKS,
            vy: (target_y - y) / FLIGHT_TICKS,
            color,
            pattern,
            life: 1.0,
            trail: Bounded::new(TRAIL_LENGTH),
            detonation: None,
        }
    }

    pub fn distance_to_target(&self) -> f32 {
        (self.target_x - self.x).hypot(self.target_y - self.y)
    }

    pub fn trail(&self) -> &Bounded<(f32, f32)> {
        &self.trail
    }

    /// Hand over the burst raised on arrival. Yields it at most once.
    pub fn take_detonation(&mut self) -> Option<Detonation> {
        self.detonation.take()
    }
}

impl Entity for Rocket {
    fn advance(&mut self) {
        if self.is_expired() {
            return;
        }

        self.trail.push((self.x, self.y));

        self.x += self.vx;
        self.y += self.vy;

        if self.distance_to_target() < ARRIVAL_RADIUS {
            self.life = 0.0;
            // Burst where the rocket actually is, not at the nominal target
            self.detonation = Some(Detonation {
                x: self.x,
                y: self.y,
                pattern: self.pattern,
            });
        }
    }

    fn is_expired(&self) -> bool {
        self.life <= 0.0
    }

    fn render<S: Surface + ?Sized>(&self, surface: &mut S) {
        if self.is_expired() {
            return;
        }

        // Older segments fade out. Trail and head keep the launch colour,
        // a colour picked mid-flight only reaches the burst
        let len = self.trail.len() as f32;
        let segments = self.trail.iter().zip(self.trail.iter().skip(1));
        for (i, (&from, &to)) in segments.enumerate() {
            let alpha = i as f32 / len * TRAIL_MAX_ALPHA;
            surface.stroke_line(from, to, 1.0, Paint::solid(self.color, alpha).with_glow(3.0, self.color));
        }

        surface.fill_circle(
            self.x,
            self.y,
            HEAD_RADIUS,
            Paint::solid(WHITE, 1.0).with_glow(10.0, self.color),
        );
    }
}
