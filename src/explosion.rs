use crate::color::{self, Rgb};
use crate::particle::Particle;
use crate::pattern::PatternType;
use crate::spark::Spark;
use crate::surface::{Entity, Surface};
use fastrand::Rng;
use std::ops::RangeInclusive;

pub const SPARK_COUNT: RangeInclusive<usize> = 2..=5;

/// Anything left behind by an explosion.
#[derive(Debug, Clone)]
pub enum Fragment {
    Particle(Particle),
    Spark(Spark),
}

impl Fragment {
    pub fn life(&self) -> f32 {
        match self {
            Fragment::Particle(p) => p.life,
            Fragment::Spark(s) => s.life,
        }
    }

    pub fn position(&self) -> (f32, f32) {
        match self {
            Fragment::Particle(p) => (p.x, p.y),
            Fragment::Spark(s) => (s.x, s.y),
        }
    }

    pub fn as_particle(&self) -> Option<&Particle> {
        match self {
            Fragment::Particle(p) => Some(p),
            Fragment::Spark(_) => None,
        }
    }

    pub fn is_spark(&self) -> bool {
        matches!(self, Fragment::Spark(_))
    }
}

impl Entity for Fragment {
    fn advance(&mut self) {
        match self {
            Fragment::Particle(p) => p.advance(),
            Fragment::Spark(s) => s.advance(),
        }
    }

    fn is_expired(&self) -> bool {
        match self {
            Fragment::Particle(p) => p.is_expired(),
            Fragment::Spark(s) => s.is_expired(),
        }
    }

    fn render<S: Surface + ?Sized>(&self, surface: &mut S) {
        match self {
            Fragment::Particle(p) => p.render(surface),
            Fragment::Spark(s) => s.render(surface),
        }
    }
}

// Half the fragments take the selected colour, the rest a random palette colour
fn mix_color(selected: Rgb, rng: &mut Rng) -> Rgb {
    if rng.f32() < 0.5 {
        selected
    } else {
        color::random(rng)
    }
}

/// Burst at (x, y), appending particles then sparks to `out`.
///
/// Returns how many fragments were added.
pub fn spawn(
    x: f32,
    y: f32,
    pattern: PatternType,
    selected: Rgb,
    rng: &mut Rng,
    out: &mut Vec<Fragment>,
) -> usize {
    let particle_count = pattern.particle_count();
    let spark_count = rng.usize(SPARK_COUNT);
    out.reserve(particle_count + spark_count);

    for _ in 0..particle_count {
        let color = mix_color(selected, rng);
        out.push(Fragment::Particle(Particle::new(x, y, color, pattern, rng)));
    }

    for _ in 0..spark_count {
        let color = mix_color(selected, rng);
        out.push(Fragment::Spark(Spark::new(x, y, color, rng)));
    }

    log::trace!("{pattern} burst at ({x:.1}, {y:.1}): {particle_count} particles, {spark_count} sparks");
    particle_count + spark_count
}
