use thiserror::Error;

/// Failures surfaced while configuring or hosting a show.
///
/// The simulation itself never fails; everything here comes from user input
/// on the command line or from the terminal.
#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid hex colour `{0}`: expected RRGGBB (e.g. 1a1b26)")]
    InvalidColor(String),

    #[error("unknown pattern `{0}`: expected one of burst, ring, willow, spiral")]
    UnknownPattern(String),

    #[error("invalid scale `{0}`: expected a positive number of world units per pixel")]
    InvalidScale(String),

    #[error("terminal i/o failed: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
