//! Panel rendering for `PortfolioApp`.
//!
//! `draw_content` applies the entrance transition and dispatches to the one
//! visible panel. The contact panel decides its own visibility in
//! `contact.rs`.

use std::time::Instant;

use eframe::egui;
use matrix_portfolio::content::{EDUCATION, EXPERIENCES, PROFILE, PROJECTS, SKILLS, SOCIALS};
use matrix_portfolio::panel::Panel;
use matrix_portfolio::render::transition::fade_in_up;

use crate::ui::{bullet, card, chip, link_card, section_heading};
use super::PortfolioApp;

const CONTENT_WIDTH: f32 = 960.0;

impl PortfolioApp {
    pub fn draw_content(&mut self, ui: &mut egui::Ui, ctx: &egui::Context, now: Instant) {
        let entrance = fade_in_up(self.nav.shown_for(now));
        ui.set_opacity(entrance.opacity);
        ui.add_space(entrance.offset_y);

        egui::ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                ui.set_max_width(CONTENT_WIDTH);

                if self.nav.is_visible(Panel::Home) {
                    self.draw_home(ui, now);
                }
                if self.nav.is_visible(Panel::Experience) {
                    self.draw_experience(ui);
                }
                if self.nav.is_visible(Panel::Education) {
                    self.draw_education(ui);
                }
                if self.nav.is_visible(Panel::Projects) {
                    self.draw_projects(ui);
                }
                if self.nav.is_visible(Panel::Skills) {
                    self.draw_skills(ui);
                }
                self.draw_contact(ui, ctx);
                if self.nav.is_visible(Panel::Socials) {
                    self.draw_socials(ui);
                }
            });
    }

    // ── Home ─────────────────────────────────────────────────────────────────

    fn draw_home(&mut self, ui: &mut egui::Ui, now: Instant) {
        let theme = self.theme;
        let top = (ui.available_height() * 0.25).max(24.0);
        ui.add_space(top);
        ui.vertical_centered(|ui| {
            ui.label(
                egui::RichText::new(format!("> {}", PROFILE.name))
                    .size(64.0)
                    .strong()
                    .color(theme.accent),
            );
            ui.add_space(12.0);
            ui.label(
                egui::RichText::new(PROFILE.tagline)
                    .size(20.0)
                    .color(theme.muted),
            );
            ui.add_space(40.0);

            let enter = egui::Button::new(
                egui::RichText::new("ENTER_SYSTEM >>")
                    .size(18.0)
                    .color(theme.accent),
            )
            .min_size(egui::vec2(220.0, 52.0))
            .fill(egui::Color32::from_rgba_unmultiplied(0, 0, 0, 204))
            .stroke(egui::Stroke::new(2.0, theme.accent))
            .rounding(4.0);

            if ui.add(enter).clicked() {
                self.nav.set_active(Panel::Experience, now);
            }
        });
    }

    // ── Experience / Education ───────────────────────────────────────────────

    fn draw_experience(&self, ui: &mut egui::Ui) {
        let theme = &self.theme;
        section_heading(ui, "WORK_EXPERIENCE", theme);

        for exp in EXPERIENCES {
            card(theme).show(ui, |ui| {
                ui.set_width(ui.available_width());
                ui.horizontal(|ui| {
                    ui.label(
                        egui::RichText::new(exp.company)
                            .size(28.0)
                            .color(theme.accent),
                    );
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        ui.label(
                            egui::RichText::new(exp.dates)
                                .size(14.0)
                                .color(theme.accent_dim),
                        );
                    });
                });
                ui.label(
                    egui::RichText::new(exp.role)
                        .size(19.0)
                        .italics()
                        .color(theme.text),
                );
                ui.add_space(8.0);
                for line in exp.bullets {
                    bullet(ui, line, theme);
                }
            });
        }
    }

    fn draw_education(&self, ui: &mut egui::Ui) {
        let theme = &self.theme;
        section_heading(ui, "EDUCATION", theme);

        for edu in EDUCATION {
            card(theme).show(ui, |ui| {
                ui.set_width(ui.available_width());
                ui.horizontal(|ui| {
                    ui.label(
                        egui::RichText::new(edu.school)
                            .size(28.0)
                            .color(theme.accent),
                    );
                });
                ui.label(
                    egui::RichText::new(edu.program)
                        .size(19.0)
                        .italics()
                        .color(theme.text),
                );
                if !edu.notes.is_empty() {
                    ui.add_space(8.0);
                }
                for line in edu.notes {
                    bullet(ui, line, theme);
                }
            });
        }
    }

    // ── Projects ─────────────────────────────────────────────────────────────

    fn draw_projects(&self, ui: &mut egui::Ui) {
        let theme = &self.theme;
        section_heading(ui, "PROJECTS", theme);
        ui.label(
            egui::RichText::new("// Building cool stuff. Click to view more details on GitHub.")
                .size(18.0)
                .color(theme.muted),
        );
        ui.add_space(16.0);

        for project in PROJECTS {
            link_card(ui, project.link, theme, |ui| {
                ui.label(
                    egui::RichText::new(format!("[ {} ]", project.title))
                        .size(22.0)
                        .strong()
                        .color(theme.accent),
                );
                ui.label(egui::RichText::new(project.description).color(theme.muted));
                ui.label(
                    egui::RichText::new(">> View_Source")
                        .size(13.0)
                        .color(theme.accent_dim),
                );
            });
        }
    }

    // ── Skills ───────────────────────────────────────────────────────────────

    fn draw_skills(&self, ui: &mut egui::Ui) {
        let theme = &self.theme;
        section_heading(ui, "SKILLS", theme);

        for group in SKILLS {
            card(theme).show(ui, |ui| {
                ui.set_width(ui.available_width());
                ui.label(
                    egui::RichText::new(format!("// {}", group.category.to_uppercase()))
                        .size(20.0)
                        .color(theme.accent),
                );
                ui.add_space(8.0);
                ui.horizontal_wrapped(|ui| {
                    for item in group.items {
                        chip(ui, item, theme);
                    }
                });
            });
        }
    }

    // ── Socials ──────────────────────────────────────────────────────────────

    fn draw_socials(&self, ui: &mut egui::Ui) {
        let theme = &self.theme;
        section_heading(ui, "NETWORK_LINKS", theme);

        ui.columns(SOCIALS.len(), |cols| {
            for (col, social) in cols.iter_mut().zip(SOCIALS) {
                link_card(col, social.link, theme, |ui| {
                    ui.vertical_centered(|ui| {
                        ui.label(egui::RichText::new(social.icon).size(56.0));
                        ui.label(
                            egui::RichText::new(format!("[ {} ]", social.name))
                                .size(22.0)
                                .strong()
                                .color(theme.accent),
                        );
                    });
                });
            }
        });
    }
}
