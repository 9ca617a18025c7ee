//! Frame loop around [`ParticleField`] and the backdrop painters: the
//! scrolling grid, the scanline overlay and the particle field itself.

use crate::config::{ParticleConfig, Theme};
use crate::render::particles::ParticleField;

/// Start/stop lifecycle for the backdrop animation.
///
/// While running, every [`frame`](FrameLoop::frame) call follows the viewport
/// size (the resize listener) and advances the field one step. Stopping drops
/// the field, so nothing keeps animating against a surface nobody shows.
pub struct FrameLoop {
    config: ParticleConfig,
    field: Option<ParticleField>,
    viewport: egui::Vec2,
    frames: u64,
}

impl FrameLoop {
    pub fn new(config: ParticleConfig) -> Self {
        Self {
            config,
            field: None,
            viewport: egui::Vec2::ZERO,
            frames: 0,
        }
    }

    pub fn is_running(&self) -> bool {
        self.field.is_some()
    }

    /// Frames stepped since the last start.
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Seed a fresh field for `viewport`. No-op when already running.
    pub fn start(&mut self, viewport: egui::Vec2) {
        if self.field.is_some() {
            return;
        }
        log::debug!("backdrop start {}x{}", viewport.x, viewport.y);
        self.field = Some(ParticleField::new(viewport.x, viewport.y, &self.config));
        self.viewport = viewport;
        self.frames = 0;
    }

    /// Start with an already-built field (deterministic seeding).
    pub fn start_with(&mut self, field: ParticleField) {
        let (w, h) = field.size();
        self.viewport = egui::vec2(w, h);
        self.field = Some(field);
        self.frames = 0;
    }

    pub fn stop(&mut self) {
        if self.field.take().is_some() {
            log::debug!("backdrop stop after {} frames", self.frames);
        }
    }

    /// Track `viewport`, step once and hand back the field to paint.
    /// Returns `None` while stopped.
    pub fn frame(&mut self, viewport: egui::Vec2) -> Option<&ParticleField> {
        let field = self.field.as_mut()?;
        if viewport != self.viewport {
            log::debug!("backdrop resize {}x{}", viewport.x, viewport.y);
            field.resize(viewport.x, viewport.y);
            self.viewport = viewport;
        }
        field.step();
        self.frames += 1;
        Some(field)
    }

    pub fn field(&self) -> Option<&ParticleField> {
        self.field.as_ref()
    }
}

impl Drop for FrameLoop {
    fn drop(&mut self) {
        self.stop();
    }
}

/// Draw links first, particles on top. `origin` is the surface's top-left.
pub fn paint_field(painter: &egui::Painter, origin: egui::Pos2, field: &ParticleField, theme: &Theme) {
    let [r, g, b] = theme.particle;
    let particles = field.particles();
    let at = |i: usize| origin + egui::vec2(particles[i].x, particles[i].y);

    for link in field.links() {
        let alpha = (link.alpha.clamp(0.0, 1.0) * 255.0) as u8;
        painter.line_segment(
            [at(link.a), at(link.b)],
            egui::Stroke::new(1.0, egui::Color32::from_rgba_unmultiplied(r, g, b, alpha)),
        );
    }

    let fill = egui::Color32::from_rgba_unmultiplied(r, g, b, 128);
    for (i, p) in particles.iter().enumerate() {
        painter.circle_filled(at(i), p.radius, fill);
    }
}

/// Grid cell size, in points.
pub const GRID_SPACING: f32 = 20.0;
/// Time for the grid to scroll down one cell.
pub const GRID_PERIOD: f64 = 20.0;
const GRID_ALPHA: f32 = 0.05;

/// Scanline stripe pitch: one lit row, one dark row.
pub const SCANLINE_PITCH: f32 = 2.0;
/// Time for the scanline layer to sweep from one screen above to one below.
pub const SCANLINE_PERIOD: f64 = 8.0;
const SCANLINE_ALPHA: f32 = 0.03;

fn cycle(time: f64, period: f64) -> f32 {
    (time.rem_euclid(period) / period) as f32
}

/// Downward grid shift at `time` seconds, in `[0, GRID_SPACING)`.
pub fn grid_offset(time: f64) -> f32 {
    cycle(time, GRID_PERIOD) * GRID_SPACING
}

/// Vertical shift of the scanline layer at `time` seconds: `-height` at the
/// start of a sweep, `0` halfway, approaching `+height` at the end.
pub fn scanline_offset(time: f64, height: f32) -> f32 {
    -height + 2.0 * height * cycle(time, SCANLINE_PERIOD)
}

fn tint(theme: &Theme, alpha: f32) -> egui::Color32 {
    let [r, g, b] = theme.particle;
    egui::Color32::from_rgba_unmultiplied(r, g, b, (alpha * 255.0).round() as u8)
}

/// Faint 1 pt grid over `rect`, scrolled by [`grid_offset`].
pub fn paint_grid(painter: &egui::Painter, rect: egui::Rect, time: f64, theme: &Theme) {
    let stroke = egui::Stroke::new(1.0, tint(theme, GRID_ALPHA));

    let mut x = rect.left();
    while x <= rect.right() {
        painter.vline(x, rect.y_range(), stroke);
        x += GRID_SPACING;
    }

    let mut y = rect.top() + grid_offset(time) - GRID_SPACING;
    while y <= rect.bottom() {
        if y >= rect.top() {
            painter.hline(rect.x_range(), y, stroke);
        }
        y += GRID_SPACING;
    }
}

/// 1 pt stripes every [`SCANLINE_PITCH`], on a screen-tall layer that sweeps
/// down over `rect`. Only the part of the layer inside `rect` is drawn.
pub fn paint_scanlines(painter: &egui::Painter, rect: egui::Rect, time: f64, theme: &Theme) {
    let fill = tint(theme, SCANLINE_ALPHA);
    let layer_top = rect.top() + scanline_offset(time, rect.height());
    let top = layer_top.max(rect.top());
    let bottom = (layer_top + rect.height()).min(rect.bottom());

    // stay on the layer's own stripe phase
    let skip = ((top - layer_top) / SCANLINE_PITCH).floor();
    let mut y = layer_top + skip * SCANLINE_PITCH;
    while y < bottom {
        let stripe = egui::Rect::from_x_y_ranges(rect.x_range(), y..=(y + 1.0).min(bottom));
        painter.rect_filled(stripe, 0.0, fill);
        y += SCANLINE_PITCH;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::particles::Particle;

    fn single(x: f32, vx: f32) -> ParticleField {
        let p = Particle {
            x,
            y: 10.0,
            vx,
            vy: 0.0,
            radius: 2.0,
        };
        ParticleField::from_particles(vec![p], 200.0, 100.0, &ParticleConfig::default())
    }

    #[test]
    fn stopped_loop_yields_nothing() {
        let mut lp = FrameLoop::new(ParticleConfig::default());
        assert!(!lp.is_running());
        assert!(lp.frame(egui::vec2(200.0, 100.0)).is_none());
        assert_eq!(lp.frames(), 0);
    }

    #[test]
    fn start_seeds_full_batch() {
        let mut lp = FrameLoop::new(ParticleConfig::default());
        lp.start(egui::vec2(640.0, 480.0));
        assert!(lp.is_running());
        let field = lp.frame(egui::vec2(640.0, 480.0)).unwrap();
        assert_eq!(field.particles().len(), 50);
        assert_eq!(lp.frames(), 1);
    }

    #[test]
    fn frame_steps_and_follows_resize() {
        let mut lp = FrameLoop::new(ParticleConfig::default());
        lp.start_with(single(150.0, 1.0));

        let field = lp.frame(egui::vec2(200.0, 100.0)).unwrap();
        assert_eq!(field.particles()[0].x, 151.0);

        // Shrink: position kept, surface updated, particle turns back
        let field = lp.frame(egui::vec2(120.0, 100.0)).unwrap();
        assert_eq!(field.size(), (120.0, 100.0));
        assert_eq!(field.particles()[0].x, 152.0);
        assert_eq!(field.particles()[0].vx, -1.0);
    }

    #[test]
    fn stop_and_restart_cycles() {
        let mut lp = FrameLoop::new(ParticleConfig::default());
        for _ in 0..3 {
            lp.start(egui::vec2(300.0, 200.0));
            lp.frame(egui::vec2(300.0, 200.0));
            assert!(lp.is_running());
            lp.stop();
            assert!(!lp.is_running());
            assert!(lp.field().is_none());
        }
    }

    #[test]
    fn start_while_running_keeps_field() {
        let mut lp = FrameLoop::new(ParticleConfig::default());
        lp.start_with(single(50.0, 1.0));
        lp.start(egui::vec2(999.0, 999.0));
        assert_eq!(lp.field().unwrap().size(), (200.0, 100.0));
    }

    #[test]
    fn grid_scrolls_one_cell_per_period() {
        assert_eq!(grid_offset(0.0), 0.0);
        assert_eq!(grid_offset(10.0), GRID_SPACING / 2.0);
        assert_eq!(grid_offset(GRID_PERIOD), 0.0);
        assert!((grid_offset(25.0) - 5.0).abs() < 1e-4);
        assert!(grid_offset(19.999) < GRID_SPACING);
    }

    #[test]
    fn scanlines_sweep_across_screen() {
        let h = 800.0;
        assert_eq!(scanline_offset(0.0, h), -h);
        assert_eq!(scanline_offset(SCANLINE_PERIOD / 2.0, h), 0.0);
        assert_eq!(scanline_offset(SCANLINE_PERIOD, h), -h);
        let late = scanline_offset(7.9, h);
        assert!(late > 0.0 && late < h);
    }
}
