#![allow(dead_code)]

use skyshow::surface::{Frame, Paint, Rect, Surface};

/// One recorded draw call.
#[derive(Debug, Clone, PartialEq)]
pub enum Draw {
    Fill(Paint),
    Circle { x: f32, y: f32, radius: f32, paint: Paint },
    Rect { frame: Frame, rect: Rect, paint: Paint },
    Line { from: (f32, f32), to: (f32, f32), width: f32, paint: Paint },
}

impl Draw {
    pub fn paint(&self) -> &Paint {
        match self {
            Draw::Fill(paint) => paint,
            Draw::Circle { paint, .. } | Draw::Rect { paint, .. } | Draw::Line { paint, .. } => paint,
        }
    }
}

/// Surface double that remembers every call in order.
pub struct RecordingSurface {
    pub width: f32,
    pub height: f32,
    pub calls: Vec<Draw>,
}

impl RecordingSurface {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width,
            height,
            calls: Vec::new(),
        }
    }

    pub fn clear(&mut self) {
        self.calls.clear();
    }
}

impl Surface for RecordingSurface {
    fn width(&self) -> f32 {
        self.width
    }

    fn height(&self) -> f32 {
        self.height
    }

    fn fill(&mut self, paint: Paint) {
        self.calls.push(Draw::Fill(paint));
    }

    fn fill_circle(&mut self, x: f32, y: f32, radius: f32, paint: Paint) {
        self.calls.push(Draw::Circle { x, y, radius, paint });
    }

    fn fill_rect(&mut self, frame: Frame, rect: Rect, paint: Paint) {
        self.calls.push(Draw::Rect { frame, rect, paint });
    }

    fn stroke_line(&mut self, from: (f32, f32), to: (f32, f32), width: f32, paint: Paint) {
        self.calls.push(Draw::Line { from, to, width, paint });
    }
}

pub fn approx(a: f32, b: f32, eps: f32) -> bool {
    (a - b).abs() <= eps
}
