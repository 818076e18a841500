use crate::color::{self, Rgb};
use crate::config::ShowConfig;
use crate::explosion::{self, Fragment};
use crate::pattern::PatternType;
use crate::rocket::Rocket;
use crate::scheduler::Scheduler;
use crate::surface::{Entity, Paint, Surface};
use fastrand::Rng;
use std::time::Duration;

/// Population that triggers truncation.
pub const POPULATION_LIMIT: usize = 3000;
/// Newest fragments kept after truncation.
pub const POPULATION_KEEP: usize = 2000;

const OVERLAY_ALPHA: f32 = 0.5;

/// Drop the oldest fragments once the population passes the limit.
/// Returns how many were dropped.
pub fn enforce_population_cap(fragments: &mut Vec<Fragment>) -> usize {
    if fragments.len() <= POPULATION_LIMIT {
        return 0;
    }
    let dropped = fragments.len() - POPULATION_KEEP;
    fragments.drain(..dropped);
    dropped
}

/// Live rockets and fragments plus the inputs that steer them.
pub struct Show {
    width: f32,
    height: f32,
    rockets: Vec<Rocket>,
    fragments: Vec<Fragment>,
    selected_color: Rgb,
    selected_pattern: PatternType,
    background: Rgb,
    scheduler: Scheduler,
    clock: Duration,
    rng: Rng,
}

impl Show {
    pub fn new(config: &ShowConfig, width: f32, height: f32) -> Self {
        let rng = match config.seed {
            Some(seed) => Rng::with_seed(seed),
            None => Rng::new(),
        };

        let mut show = Self {
            width,
            height,
            rockets: Vec::new(),
            fragments: Vec::with_capacity(POPULATION_LIMIT),
            selected_color: config.color,
            selected_pattern: config.pattern,
            background: config.background,
            scheduler: Scheduler::new(),
            clock: Duration::ZERO,
            rng,
        };
        if config.auto {
            show.scheduler.start(show.clock);
        }
        show
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn height(&self) -> f32 {
        self.height
    }

    /// New bounds for future launches. Entities in flight keep their coordinates.
    pub fn resize(&mut self, width: f32, height: f32) {
        self.width = width;
        self.height = height;
    }

    pub fn rockets(&self) -> &[Rocket] {
        &self.rockets
    }

    pub fn fragments(&self) -> &[Fragment] {
        &self.fragments
    }

    pub fn fragments_mut(&mut self) -> &mut Vec<Fragment> {
        &mut self.fragments
    }

    pub fn selected_color(&self) -> Rgb {
        self.selected_color
    }

    pub fn select_color(&mut self, color: Rgb) {
        self.selected_color = color;
    }

    pub fn selected_pattern(&self) -> PatternType {
        self.selected_pattern
    }

    pub fn select_pattern(&mut self, pattern: PatternType) {
        self.selected_pattern = pattern;
    }

    pub fn scheduler(&self) -> &Scheduler {
        &self.scheduler
    }

    pub fn clock(&self) -> Duration {
        self.clock
    }

    /// Fire a rocket at (x, y) using the current selection.
    pub fn launch(&mut self, x: f32, y: f32) {
        self.launch_with(x, y, self.selected_color, self.selected_pattern);
    }

    pub fn launch_with(&mut self, x: f32, y: f32, color: Rgb, pattern: PatternType) {
        log::debug!("launching {pattern} rocket {} towards ({x:.0}, {y:.0})", color::to_hex(color));
        self.rockets.push(Rocket::new(x, y, self.height, color, pattern));
    }

    /// Burst at (x, y) using the selected colour for mixing.
    pub fn explode(&mut self, x: f32, y: f32, pattern: PatternType) -> usize {
        explosion::spawn(x, y, pattern, self.selected_color, &mut self.rng, &mut self.fragments)
    }

    pub fn start_auto(&mut self) {
        self.scheduler.start(self.clock);
    }

    pub fn stop_auto(&mut self) {
        self.scheduler.stop();
    }

    pub fn toggle_auto(&mut self) {
        self.scheduler.toggle(self.clock);
    }

    pub fn set_visible(&mut self, visible: bool) {
        self.scheduler.set_visible(visible, self.clock);
    }

    /// Move the show clock forward and fire any scheduled launches.
    pub fn advance_clock(&mut self, dt: Duration) {
        self.clock += dt;
        for _ in 0..self.scheduler.poll(self.clock) {
            self.auto_launch();
        }
    }

    // Random target, colour and pattern; the user's selection is left untouched
    fn auto_launch(&mut self) {
        let x = self.rng.f32() * self.width;
        let y = self.rng.f32() * self.height * 0.6 + 50.0;
        let color = color::random(&mut self.rng);
        let pattern = PatternType::random(&mut self.rng);
        self.launch_with(x, y, color, pattern);
    }

    /// Advance everything by one tick and composite the result onto `surface`.
    pub fn tick<S: Surface + ?Sized>(&mut self, surface: &mut S) {
        self.width = surface.width();
        self.height = surface.height();

        // Fade rather than clear so moving things leave trails
        surface.fill(Paint::solid(self.background, OVERLAY_ALPHA));

        let selected = self.selected_color;
        let rng = &mut self.rng;
        let fragments = &mut self.fragments;
        self.rockets.retain_mut(|rocket| {
            rocket.advance();
            if let Some(burst) = rocket.take_detonation() {
                explosion::spawn(burst.x, burst.y, burst.pattern, selected, rng, fragments);
            }
            if rocket.is_expired() {
                return false;
            }
            rocket.render(surface);
            true
        });

        // Everything moves before anything is drawn
        self.fragments.retain_mut(|fragment| {
            fragment.advance();
            !fragment.is_expired()
        });

        for fragment in &self.fragments {
            fragment.render(surface);
        }

        let dropped = enforce_population_cap(&mut self.fragments);
        if dropped > 0 {
            log::debug!("population cap reached, dropped {dropped} oldest fragments");
        }
    }
}
