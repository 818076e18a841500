use crate::error::{Error, Result};
use fastrand::Rng;

pub type Rgb = (u8, u8, u8);

pub const WHITE: Rgb = (255, 255, 255);

// Launch palette, brightest first-pick colour at index 0
pub const PALETTE: [Rgb; 5] = [
    (0xFF, 0x5A, 0x6E), // Coral red
    (0xFF, 0xD7, 0x00), // Gold
    (0x3F, 0xE0, 0xA0), // Mint
    (0xB3, 0x77, 0xFF), // Violet
    (0xFF, 0xFE, 0xF7), // Warm white
];

pub const DEFAULT_COLOR: Rgb = PALETTE[0];

/// Night sky used for the persistence overlay.
pub const DEFAULT_BACKGROUND: Rgb = (10, 10, 15);

pub fn random(rng: &mut Rng) -> Rgb {
    PALETTE[rng.usize(..PALETTE.len())]
}

/// Step through the palette from `current`. Colours outside the palette
/// restart at its first (or last, stepping backwards) entry.
pub fn cycle(current: Rgb, forward: bool) -> Rgb {
    let len = PALETTE.len();
    match PALETTE.iter().position(|&c| c == current) {
        Some(i) if forward => PALETTE[(i + 1) % len],
        Some(i) => PALETTE[(i + len - 1) % len],
        None if forward => PALETTE[0],
        None => PALETTE[len - 1],
    }
}

pub fn parse_hex(hex: &str) -> Result<Rgb> {
    let digits = hex.trim().trim_start_matches('#');
    if digits.len() != 6 || !digits.is_ascii() {
        return Err(Error::InvalidColor(hex.to_string()));
    }

    let channel = |range: std::ops::Range<usize>| {
        u8::from_str_radix(&digits[range], 16).map_err(|_| Error::InvalidColor(hex.to_string()))
    };

    Ok((channel(0..2)?, channel(2..4)?, channel(4..6)?))
}

pub fn to_hex(color: Rgb) -> String {
    format!("#{:02X}{:02X}{:02X}", color.0, color.1, color.2)
}
