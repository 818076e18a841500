use super::Effect;
use crate::canvas::Canvas;
use crate::color::{self, Rgb};
use crate::config::ShowConfig;
use crate::pattern::PatternType;
use crate::show::Show;
use crate::surface::Surface;
use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, MouseButton, MouseEvent, MouseEventKind,
};
use std::io::Write;
use std::time::Duration;

// Usage hint shown in the status bar right after start-up
const HINT_DURATION: Duration = Duration::from_secs(4);
const HINT: &str = " click to launch · 1-4 pattern · c colour · a auto show · h hide bar · q quit";

/// Terminal front end: feeds input into a [`Show`] and paints it through a [`Canvas`].
pub struct FireworksEffect {
    show: Show,
    canvas: Canvas,
    background: Rgb,
    status_visible: bool,
}

impl Effect for FireworksEffect {
    fn new(width: usize, height: usize, config: &ShowConfig) -> Self {
        let canvas = Canvas::new(width, height, config.scale, config.background);
        let show = Show::new(config, canvas.width(), canvas.height());

        Self {
            show,
            canvas,
            background: config.background,
            status_visible: true,
        }
    }

    fn update(&mut self, dt: f32) {
        self.show.advance_clock(Duration::from_secs_f32(dt));
        self.show.tick(&mut self.canvas);
    }

    fn render<W: Write>(&mut self, out: &mut W) -> std::io::Result<()> {
        let status = self.status_line();
        self.canvas.encode(out, status.as_deref())
    }

    fn handle_event(&mut self, event: &Event) {
        match event {
            Event::Mouse(MouseEvent {
                kind: MouseEventKind::Down(MouseButton::Left),
                column,
                row,
                ..
            }) => {
                let (x, y) = self.canvas.cell_to_world(*column, *row);
                self.show.launch(x, y);
            }
            Event::Key(key) if key.kind == KeyEventKind::Press => self.handle_key(key),
            Event::FocusLost => self.show.set_visible(false),
            Event::FocusGained => self.show.set_visible(true),
            Event::Resize(cols, rows) => {
                self.canvas.resize(*cols as usize, *rows as usize * 2, self.background);
                self.show.resize(self.canvas.width(), self.canvas.height());
            }
            _ => {}
        }
    }
}

impl FireworksEffect {
    pub fn show(&self) -> &Show {
        &self.show
    }

    pub fn canvas(&self) -> &Canvas {
        &self.canvas
    }

    pub fn status_visible(&self) -> bool {
        self.status_visible
    }

    fn handle_key(&mut self, key: &KeyEvent) {
        match key.code {
            KeyCode::Char(digit @ '1'..='4') => {
                let index = digit as usize - '1' as usize;
                self.show.select_pattern(PatternType::ALL[index]);
            }
            KeyCode::Char('C') | KeyCode::BackTab => {
                self.show.select_color(color::cycle(self.show.selected_color(), false));
            }
            KeyCode::Char('c') | KeyCode::Tab => {
                self.show.select_color(color::cycle(self.show.selected_color(), true));
            }
            KeyCode::Char('a') | KeyCode::Char(' ') => self.show.toggle_auto(),
            KeyCode::Char('h') => self.status_visible = !self.status_visible,
            _ => {}
        }
    }

    pub fn status_line(&self) -> Option<String> {
        if !self.status_visible {
            return None;
        }
        if self.show.clock() < HINT_DURATION {
            return Some(HINT.to_string());
        }

        let scheduler = self.show.scheduler();
        let auto = if !scheduler.is_active() {
            "off"
        } else if scheduler.is_suspended() || scheduler.in_cooldown() {
            "paused"
        } else {
            "on"
        };

        Some(format!(
            " {}  {}  auto show: {}  rockets: {}  particles: {}",
            self.show.selected_pattern(),
            color::to_hex(self.show.selected_color()),
            auto,
            self.show.rockets().len(),
            self.show.fragments().len(),
        ))
    }
}
