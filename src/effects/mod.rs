use crate::config::ShowConfig;
use crossterm::event::Event;
use std::io::Write;

pub mod fireworks;

pub trait Effect {
    fn new(width: usize, height: usize, config: &ShowConfig) -> Self
    where
        Self: Sized;
    fn update(&mut self, dt: f32);
    fn render<W: Write>(&mut self, out: &mut W) -> std::io::Result<()>;
    fn handle_event(&mut self, _event: &Event) {}
}
