use crate::color::{self, Rgb};
use crate::error::{Error, Result};
use crate::pattern::PatternType;

pub const DEFAULT_SCALE: f32 = 4.0;

/// Start-up settings for a show.
#[derive(Debug, Clone, PartialEq)]
pub struct ShowConfig {
    /// Initially selected launch colour.
    pub color: Rgb,
    /// Initially selected pattern.
    pub pattern: PatternType,
    /// Colour of the fading overlay painted every tick.
    pub background: Rgb,
    /// Start the auto-launch scheduler straight away.
    pub auto: bool,
    /// World units per raster pixel.
    pub scale: f32,
    /// Fixed seed for reproducible shows.
    pub seed: Option<u64>,
}

impl Default for ShowConfig {
    fn default() -> Self {
        Self {
            color: color::DEFAULT_COLOR,
            pattern: PatternType::default(),
            background: color::DEFAULT_BACKGROUND,
            auto: false,
            scale: DEFAULT_SCALE,
            seed: None,
        }
    }
}

pub fn parse_color(s: &str) -> Result<Rgb> {
    color::parse_hex(s)
}

pub fn parse_scale(s: &str) -> Result<f32> {
    match s.trim().parse::<f32>() {
        Ok(scale) if scale.is_finite() && scale > 0.0 => Ok(scale),
        _ => Err(Error::InvalidScale(s.to_string())),
    }
}
