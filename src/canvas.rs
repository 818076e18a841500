use crate::color::Rgb;
use crate::surface::{Frame, Paint, Rect, Surface};
use std::io::{self, Write};

// Share of the paint alpha carried by a glow halo
const GLOW_STRENGTH: f32 = 0.35;

/// True-colour raster at half-block resolution: every terminal cell holds
/// two vertically stacked pixels. World coordinates are divided by `scale`
/// to land on pixels.
pub struct Canvas {
    cols: usize,
    rows: usize,
    scale: f32,
    pixels: Vec<[f32; 3]>,
    output_buf: Vec<u8>,
}

impl Canvas {
    /// `rows` counts pixels, i.e. twice the terminal rows.
    pub fn new(cols: usize, rows: usize, scale: f32, background: Rgb) -> Self {
        let bg = [background.0 as f32, background.1 as f32, background.2 as f32];
        Self {
            cols,
            rows,
            scale,
            pixels: vec![bg; cols * rows],
            output_buf: Vec::with_capacity(cols * rows * 25),
        }
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn scale(&self) -> f32 {
        self.scale
    }

    /// Change the raster size. Surviving pixels are kept in place.
    pub fn resize(&mut self, cols: usize, rows: usize, background: Rgb) {
        let bg = [background.0 as f32, background.1 as f32, background.2 as f32];
        let mut pixels = vec![bg; cols * rows];
        for y in 0..rows.min(self.rows) {
            for x in 0..cols.min(self.cols) {
                pixels[y * cols + x] = self.pixels[y * self.cols + x];
            }
        }
        self.cols = cols;
        self.rows = rows;
        self.pixels = pixels;
    }

    /// World position at the centre of a terminal cell.
    pub fn cell_to_world(&self, column: u16, row: u16) -> (f32, f32) {
        (
            (column as f32 + 0.5) * self.scale,
            (row as f32 * 2.0 + 1.0) * self.scale,
        )
    }

    pub fn pixel(&self, x: usize, y: usize) -> Option<Rgb> {
        if x >= self.cols || y >= self.rows {
            return None;
        }
        let [r, g, b] = self.pixels[y * self.cols + x];
        Some((r.round() as u8, g.round() as u8, b.round() as u8))
    }

    fn blend(&mut self, x: isize, y: isize, color: Rgb, alpha: f32) {
        if x < 0 || y < 0 || x as usize >= self.cols || y as usize >= self.rows {
            return;
        }
        let a = alpha.clamp(0.0, 1.0);
        if a <= 0.0 {
            return;
        }
        let px = &mut self.pixels[y as usize * self.cols + x as usize];
        px[0] = px[0] * (1.0 - a) + color.0 as f32 * a;
        px[1] = px[1] * (1.0 - a) + color.1 as f32 * a;
        px[2] = px[2] * (1.0 - a) + color.2 as f32 * a;
    }

    // Anti-aliased disc in pixel space. `falloff` fades coverage towards the rim.
    fn disc(&mut self, cx: f32, cy: f32, radius: f32, color: Rgb, alpha: f32, falloff: bool) {
        // Sub-pixel discs only light the pixel they sit in, dimmed by their area
        let thin = (radius * 2.0).min(1.0);
        let reach = radius + 0.5;

        let x0 = (cx - reach).floor() as isize;
        let x1 = (cx + reach).ceil() as isize;
        let y0 = (cy - reach).floor() as isize;
        let y1 = (cy + reach).ceil() as isize;

        for y in y0..=y1 {
            for x in x0..=x1 {
                let dx = x as f32 + 0.5 - cx;
                let dy = y as f32 + 0.5 - cy;
                let dist = (dx * dx + dy * dy).sqrt();
                let mut coverage = (reach - dist).clamp(0.0, 1.0) * thin;
                if falloff && radius > 0.0 {
                    coverage *= (1.0 - dist / reach).clamp(0.0, 1.0);
                }
                if coverage > 0.0 {
                    self.blend(x, y, color, alpha * coverage);
                }
            }
        }
    }

    fn halo(&mut self, cx: f32, cy: f32, radius: f32, paint: &Paint) {
        if paint.glow > 0.0 {
            let glow = paint.glow / self.scale;
            self.disc(cx, cy, radius + glow * 0.5, paint.glow_color, paint.alpha * GLOW_STRENGTH, true);
        }
    }

    /// Write the frame as ANSI half-blocks, optionally replacing the bottom
    /// terminal row with `status`.
    pub fn encode<W: Write>(&mut self, out: &mut W, status: Option<&str>) -> io::Result<()> {
        self.output_buf.clear();
        self.output_buf.extend_from_slice(b"\x1b[H");

        let mut prev_top: Option<Rgb> = None;
        let mut prev_bot: Option<Rgb> = None;

        for y in (0..self.rows).step_by(2) {
            let last_row = y + 2 >= self.rows;

            if let (true, Some(text)) = (last_row, status) {
                let line: String = text.chars().take(self.cols).collect();
                write!(self.output_buf, "\x1b[0m\x1b[2K{line}")?;
                break;
            }

            for x in 0..self.cols {
                let top = self.pixel(x, y).unwrap_or_default();
                let bot = self.pixel(x, y + 1).unwrap_or(top);

                // Only emit colour codes when they change
                if prev_top != Some(top) {
                    write!(self.output_buf, "\x1b[48;2;{};{};{}m", top.0, top.1, top.2)?;
                    prev_top = Some(top);
                }
                if prev_bot != Some(bot) {
                    write!(self.output_buf, "\x1b[38;2;{};{};{}m", bot.0, bot.1, bot.2)?;
                    prev_bot = Some(bot);
                }
                self.output_buf.extend_from_slice("▄".as_bytes());
            }
            self.output_buf.extend_from_slice(b"\x1b[0m");
            prev_top = None;
            prev_bot = None;
            if !last_row {
                self.output_buf.extend_from_slice(b"\r\n");
            }
        }

        out.write_all(&self.output_buf)?;
        out.flush()
    }
}

impl Surface for Canvas {
    fn width(&self) -> f32 {
        self.cols as f32 * self.scale
    }

    fn height(&self) -> f32 {
        self.rows as f32 * self.scale
    }

    fn fill(&mut self, paint: Paint) {
        let a = paint.alpha.clamp(0.0, 1.0);
        let c = [paint.color.0 as f32, paint.color.1 as f32, paint.color.2 as f32];
        for px in &mut self.pixels {
            for (channel, target) in px.iter_mut().zip(c) {
                *channel = *channel * (1.0 - a) + target * a;
            }
        }
    }

    fn fill_circle(&mut self, x: f32, y: f32, radius: f32, paint: Paint) {
        let (cx, cy, r) = (x / self.scale, y / self.scale, radius.max(0.0) / self.scale);
        self.halo(cx, cy, r, &paint);
        self.disc(cx, cy, r, paint.color, paint.alpha, false);
    }

    fn fill_rect(&mut self, frame: Frame, rect: Rect, paint: Paint) {
        let area = rect.w.abs() * rect.h.abs() / (self.scale * self.scale);

        // Smaller than a pixel: deposit its share on the pixel under its centre
        if area < 1.0 {
            let (wx, wy) = frame.to_world(rect.x + rect.w * 0.5, rect.y + rect.h * 0.5);
            let (px, py) = (wx / self.scale, wy / self.scale);
            self.blend(px.floor() as isize, py.floor() as isize, paint.color, paint.alpha * area);
            return;
        }

        let corners = [
            frame.to_world(rect.x, rect.y),
            frame.to_world(rect.x + rect.w, rect.y),
            frame.to_world(rect.x, rect.y + rect.h),
            frame.to_world(rect.x + rect.w, rect.y + rect.h),
        ];
        let (mut min_x, mut min_y) = (f32::MAX, f32::MAX);
        let (mut max_x, mut max_y) = (f32::MIN, f32::MIN);
        for (cx, cy) in corners {
            min_x = min_x.min(cx);
            min_y = min_y.min(cy);
            max_x = max_x.max(cx);
            max_y = max_y.max(cy);
        }

        let x0 = (min_x / self.scale).floor() as isize;
        let x1 = (max_x / self.scale).ceil() as isize;
        let y0 = (min_y / self.scale).floor() as isize;
        let y1 = (max_y / self.scale).ceil() as isize;

        for py in y0..=y1 {
            for px in x0..=x1 {
                let wx = (px as f32 + 0.5) * self.scale;
                let wy = (py as f32 + 0.5) * self.scale;
                let (lx, ly) = frame.to_local(wx, wy);
                if rect.contains(lx, ly) {
                    self.blend(px, py, paint.color, paint.alpha);
                }
            }
        }
    }

    fn stroke_line(&mut self, from: (f32, f32), to: (f32, f32), width: f32, paint: Paint) {
        let (x0, y0) = (from.0 / self.scale, from.1 / self.scale);
        let (x1, y1) = (to.0 / self.scale, to.1 / self.scale);
        // Hairlines still light half a pixel
        let coverage = (width / self.scale).clamp(0.5, 1.0);

        let steps = (x1 - x0).abs().max((y1 - y0).abs()).ceil().max(1.0) as usize;
        for i in 0..=steps {
            let t = i as f32 / steps as f32;
            let x = x0 + (x1 - x0) * t;
            let y = y0 + (y1 - y0) * t;
            if paint.glow > 0.0 {
                self.halo(x, y, 0.0, &paint);
            }
            self.blend(x.floor() as isize, y.floor() as isize, paint.color, paint.alpha * coverage);
        }
    }
}
