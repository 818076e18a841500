//! Particle fireworks for the terminal.
//!
//! Rockets climb to a target, burst into particles and sparks, and fade out
//! on a [`Surface`](surface::Surface). The [`Show`](show::Show) owns every
//! live entity and advances them one tick at a time.

pub mod canvas;
pub mod color;
pub mod config;
pub mod effects;
pub mod error;
pub mod explosion;
pub mod particle;
pub mod pattern;
pub mod rocket;
pub mod scheduler;
pub mod show;
pub mod spark;
pub mod surface;
pub mod trail;

pub use error::{Error, Result};

/// Uniform sample from `[lo, hi)`.
pub(crate) fn uniform(rng: &mut fastrand::Rng, lo: f32, hi: f32) -> f32 {
    lo + rng.f32() * (hi - lo)
}

#[cfg(test)]
mod tests {
    use super::uniform;

    #[test]
    fn uniform_stays_in_range() {
        let mut rng = fastrand::Rng::with_seed(7);
        for _ in 0..1000 {
            let v = uniform(&mut rng, 0.5, 2.5);
            assert!((0.5..2.5).contains(&v), "{v} out of range");
        }
    }
}
