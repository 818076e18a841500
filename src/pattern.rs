use crate::error::Error;
use crate::uniform;
use fastrand::Rng;
use std::fmt;
use std::str::FromStr;

pub const STANDARD_GRAVITY: f32 = 0.05;
pub const WILLOW_GRAVITY: f32 = 0.15;
pub const RING_SPEED: f32 = 3.0;
pub const RING_DECAY: f32 = 0.005;
pub const SPIRAL_ANGLE_SPEED: f32 = 0.1;
pub const SPIRAL_RADIUS_SPEED: f32 = 3.0;

const DECAY_MIN: f32 = 0.0037;
const DECAY_MAX: f32 = 0.0147;

/// Kinematic variant of an explosion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PatternType {
    #[default]
    Burst,
    Ring,
    Willow,
    Spiral,
}

impl PatternType {
    pub const ALL: [PatternType; 4] = [
        PatternType::Burst,
        PatternType::Ring,
        PatternType::Willow,
        PatternType::Spiral,
    ];

    pub fn random(rng: &mut Rng) -> Self {
        Self::ALL[rng.usize(..Self::ALL.len())]
    }

    pub fn name(self) -> &'static str {
        match self {
            PatternType::Burst => "burst",
            PatternType::Ring => "ring",
            PatternType::Willow => "willow",
            PatternType::Spiral => "spiral",
        }
    }

    /// Particles (not counting sparks) released by one explosion.
    pub fn particle_count(self) -> usize {
        match self {
            PatternType::Ring => 16,
            PatternType::Spiral => 12,
            PatternType::Burst | PatternType::Willow => 32,
        }
    }

    /// Per-tick life decay, drawn once per particle.
    pub fn decay(self, rng: &mut Rng) -> f32 {
        match self {
            // Slower fade keeps the ring readable as it expands
            PatternType::Ring => RING_DECAY,
            _ => uniform(rng, DECAY_MIN, DECAY_MAX),
        }
    }

    /// Initial motion for a fragment leaving at `angle` with base `speed`.
    pub fn motion(self, angle: f32, speed: f32) -> Motion {
        match self {
            PatternType::Burst => Motion::Linear {
                vx: angle.cos() * speed,
                vy: angle.sin() * speed,
                gravity: STANDARD_GRAVITY,
            },
            PatternType::Ring => Motion::Linear {
                vx: angle.cos() * RING_SPEED,
                vy: angle.sin() * RING_SPEED,
                gravity: STANDARD_GRAVITY,
            },
            // Flattened spread and a heavier pull give the drooping branches
            PatternType::Willow => Motion::Linear {
                vx: angle.cos() * speed * 0.5,
                vy: angle.sin() * speed * 0.3,
                gravity: WILLOW_GRAVITY,
            },
            PatternType::Spiral => Motion::Polar {
                angle,
                radius: 0.0,
                angle_speed: SPIRAL_ANGLE_SPEED,
                radius_speed: SPIRAL_RADIUS_SPEED,
            },
        }
    }
}

impl fmt::Display for PatternType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for PatternType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::ALL
            .into_iter()
            .find(|p| p.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| Error::UnknownPattern(s.to_string()))
    }
}

/// Motion law of a particle, fixed when it is created.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Motion {
    /// Straight-line velocity with constant downward acceleration.
    Linear { vx: f32, vy: f32, gravity: f32 },
    /// Outward spiral: the heading turns while the radius grows. No gravity.
    Polar {
        angle: f32,
        radius: f32,
        angle_speed: f32,
        radius_speed: f32,
    },
}

impl Motion {
    /// Move `x`/`y` by one tick and update the motion state.
    pub fn step(&mut self, x: &mut f32, y: &mut f32) {
        match self {
            Motion::Linear { vx, vy, gravity } => {
                *x += *vx;
                *y += *vy;
                *vy += *gravity;
            }
            Motion::Polar {
                angle,
                radius,
                angle_speed,
                radius_speed,
            } => {
                *angle += *angle_speed;
                *radius += *radius_speed;
                *x += angle.cos() * *radius_speed;
                *y += angle.sin() * *radius_speed;
            }
        }
    }

    pub fn velocity(&self) -> Option<(f32, f32)> {
        match *self {
            Motion::Linear { vx, vy, .. } => Some((vx, vy)),
            Motion::Polar { .. } => None,
        }
    }
}
