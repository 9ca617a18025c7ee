//! `PortfolioApp`: the top-level egui application state.
//!
//! This module declares the struct, its constructor and the `eframe::App`
//! frame. Drawing is split across the sibling sub-modules:
//!
//! - `navigation` - the icon rail that switches panels
//! - `content`    - the static panels and the entrance transition
//! - `contact`    - the contact form and its status banners

pub mod navigation;
pub mod content;
pub mod contact;

use std::time::Instant;

use eframe::egui;

use matrix_portfolio::config::{ParticleConfig, RelayConfig, Theme};
use matrix_portfolio::contact::{ContactWorkflow, FieldError};
use matrix_portfolio::content::PROFILE;
use matrix_portfolio::net::relay::relay_from_config;
use matrix_portfolio::panel::{LoadGate, PanelNavigator};
use matrix_portfolio::render::backdrop::{paint_field, paint_grid, paint_scanlines, FrameLoop};

// ─── Application state ───────────────────────────────────────────────────────

pub struct PortfolioApp {
    pub nav: PanelNavigator,
    pub load_gate: LoadGate,
    pub contact: ContactWorkflow,
    /// Pre-submit validation message, cleared on the next edit
    pub form_hint: Option<FieldError>,
    pub backdrop: FrameLoop,
    pub theme: Theme,
}

impl PortfolioApp {
    pub fn new(relay_config: RelayConfig, particle_config: ParticleConfig) -> Self {
        let now = Instant::now();
        let relay = relay_from_config(&relay_config);
        Self {
            nav: PanelNavigator::new(now),
            load_gate: LoadGate::new(now),
            contact: ContactWorkflow::new(relay, relay_config),
            form_hint: None,
            backdrop: FrameLoop::new(particle_config),
            theme: Theme::default(),
        }
    }

    /// Paint the grid, scanlines and particle field behind every panel.
    ///
    /// The loop is stopped while the window is minimised and restarted with
    /// a fresh field when it comes back.
    fn draw_backdrop(&mut self, ctx: &egui::Context) {
        let minimized = ctx.input(|i| i.viewport().minimized).unwrap_or(false);
        if minimized {
            self.backdrop.stop();
            return;
        }

        let screen = ctx.screen_rect();
        if !self.backdrop.is_running() {
            self.backdrop.start(screen.size());
        }

        let time = ctx.input(|i| i.time);
        let painter = ctx.layer_painter(egui::LayerId::background());
        painter.rect_filled(screen, 0.0, self.theme.background);
        paint_grid(&painter, screen, time, &self.theme);
        paint_scanlines(&painter, screen, time, &self.theme);
        if let Some(field) = self.backdrop.frame(screen.size()) {
            paint_field(&painter, screen.min, field, &self.theme);
        }
        ctx.request_repaint();
    }

    fn draw_footer(&self, ui: &mut egui::Ui) {
        ui.vertical_centered(|ui| {
            ui.add_space(8.0);
            ui.label(
                egui::RichText::new(PROFILE.footer)
                    .size(13.0)
                    .color(self.theme.accent_dim),
            );
            ui.add_space(8.0);
        });
    }
}

impl eframe::App for PortfolioApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let now = Instant::now();

        self.contact.poll();
        if !self.load_gate.tick(now) && !self.load_gate.is_loaded() {
            ctx.request_repaint_after(self.load_gate.remaining(now));
        }

        self.draw_backdrop(ctx);

        // Icon rail
        egui::SidePanel::right("nav")
            .frame(egui::Frame::none())
            .resizable(false)
            .exact_width(88.0)
            .show(ctx, |ui| {
                self.draw_nav(ui, now);
            });

        egui::TopBottomPanel::bottom("footer")
            .frame(egui::Frame::none())
            .show(ctx, |ui| {
                self.draw_footer(ui);
            });

        // Main content area
        egui::CentralPanel::default()
            .frame(egui::Frame::none().inner_margin(egui::Margin::symmetric(48.0, 32.0)))
            .show(ctx, |ui| {
                self.draw_content(ui, ctx, now);
            });
    }
}
