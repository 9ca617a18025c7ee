//! Navigation rail for `PortfolioApp`.
//!
//! One round icon button per panel, stacked on the right edge. The rail stays
//! hidden until the load gate opens, then slides in while the buttons fade in
//! one after another. The active button is enlarged and glows.

use std::time::Instant;

use eframe::egui;
use matrix_portfolio::panel::Panel;
use matrix_portfolio::render::transition::{button_fade_in, slide_in_right};

use super::PortfolioApp;

const BUTTON_SIZE: f32 = 50.0;
const BUTTON_GAP: f32 = 16.0;
const ACTIVE_SCALE: f32 = 1.1;

impl PortfolioApp {
    /// Render the vertically centred icon rail.
    pub fn draw_nav(&mut self, ui: &mut egui::Ui, now: Instant) {
        let since_open = self.load_gate.opened_for(now);
        let rail = slide_in_right(since_open);

        let area = ui.max_rect();
        let pitch = BUTTON_SIZE + BUTTON_GAP;
        let total = Panel::ALL.len() as f32 * pitch - BUTTON_GAP;
        let x = area.center().x + rail.offset_x;
        let mut y = area.center().y - total * 0.5 + BUTTON_SIZE * 0.5;

        for (idx, panel) in Panel::ALL.into_iter().enumerate() {
            let (fade, grow) = button_fade_in(since_open, idx);
            let active = self.nav.is_visible(panel);
            let scale = if active { ACTIVE_SCALE } else { 1.0 };
            let size = BUTTON_SIZE * scale * grow;
            let rect = egui::Rect::from_center_size(egui::pos2(x, y), egui::vec2(size, size));
            y += pitch;

            let (fill, stroke, text) = if active {
                (
                    self.theme.accent.gamma_multiply(0.2),
                    egui::Stroke::new(2.0, self.theme.accent),
                    self.theme.accent,
                )
            } else {
                (
                    egui::Color32::from_rgba_unmultiplied(0, 0, 0, 204),
                    egui::Stroke::new(2.0, self.theme.accent.gamma_multiply(0.3)),
                    self.theme.accent_dim,
                )
            };

            ui.scope(|ui| {
                ui.set_opacity(rail.opacity * fade);

                if active {
                    // Glow: two soft halos under the button
                    let painter = ui.painter();
                    let r = size * 0.5;
                    painter.circle_filled(rect.center(), r + 12.0, self.theme.accent.gamma_multiply(0.08));
                    painter.circle_filled(rect.center(), r + 6.0, self.theme.accent.gamma_multiply(0.2));
                }

                let button = egui::Button::new(
                    egui::RichText::new(panel.icon()).size(20.0 * grow).color(text),
                )
                .fill(fill)
                .stroke(stroke)
                .rounding(size * 0.5);

                // Hidden buttons must not take clicks
                let shown = since_open.is_some();
                let response = ui.put(rect, button.sense(if shown {
                    egui::Sense::click()
                } else {
                    egui::Sense::hover()
                }));
                if response.on_hover_text(panel.title()).clicked() {
                    self.nav.set_active(panel, now);
                }
            });
        }
    }
}
