use crate::color::Rgb;

/// Fill or stroke style: colour, opacity and an optional glow halo.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Paint {
    pub color: Rgb,
    pub alpha: f32,
    /// Halo radius in world units, 0 for none.
    pub glow: f32,
    pub glow_color: Rgb,
}

impl Paint {
    pub fn solid(color: Rgb, alpha: f32) -> Self {
        Self {
            color,
            alpha,
            glow: 0.0,
            glow_color: color,
        }
    }

    pub fn with_glow(mut self, radius: f32, color: Rgb) -> Self {
        self.glow = radius;
        self.glow_color = color;
        self
    }
}

/// Local drawing frame: translated to (x, y) and rotated by `rotation` radians.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Frame {
    pub x: f32,
    pub y: f32,
    pub rotation: f32,
}

impl Frame {
    pub fn new(x: f32, y: f32, rotation: f32) -> Self {
        Self { x, y, rotation }
    }

    pub fn to_world(&self, lx: f32, ly: f32) -> (f32, f32) {
        let (sin, cos) = self.rotation.sin_cos();
        (self.x + lx * cos - ly * sin, self.y + lx * sin + ly * cos)
    }

    pub fn to_local(&self, wx: f32, wy: f32) -> (f32, f32) {
        let (sin, cos) = self.rotation.sin_cos();
        let (dx, dy) = (wx - self.x, wy - self.y);
        (dx * cos + dy * sin, -dx * sin + dy * cos)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    pub fn contains(&self, x: f32, y: f32) -> bool {
        x >= self.x && x < self.x + self.w && y >= self.y && y < self.y + self.h
    }
}

/// 2D drawing target the show composites onto each tick.
///
/// Coordinates are world units with the origin in the top-left corner and y
/// growing downwards.
pub trait Surface {
    fn width(&self) -> f32;
    fn height(&self) -> f32;

    /// Paint over the whole surface.
    fn fill(&mut self, paint: Paint);

    fn fill_circle(&mut self, x: f32, y: f32, radius: f32, paint: Paint);

    /// Fill `rect`, given in the coordinates of `frame`.
    fn fill_rect(&mut self, frame: Frame, rect: Rect, paint: Paint);

    fn stroke_line(&mut self, from: (f32, f32), to: (f32, f32), width: f32, paint: Paint);
}

/// Shared shape of everything the frame loop advances and draws.
pub trait Entity {
    /// Step one tick. No-op once expired.
    fn advance(&mut self);

    fn is_expired(&self) -> bool;

    /// Draw the current state. Draws nothing once expired.
    fn render<S: Surface + ?Sized>(&self, surface: &mut S);
}
