//! Contact panel for `PortfolioApp`.

use eframe::egui;
use matrix_portfolio::contact::{Field, SubmissionStatus};
use matrix_portfolio::content::{CONTACT_HEADING, CONTACT_INTRO};
use matrix_portfolio::panel::Panel;

use super::PortfolioApp;

impl PortfolioApp {
    /// Render the contact form when the contact panel is active.
    pub fn draw_contact(&mut self, ui: &mut egui::Ui, ctx: &egui::Context) {
        if !self.nav.is_visible(Panel::Contact) {
            return;
        }
        let theme = self.theme;

        ui.label(
            egui::RichText::new(CONTACT_HEADING)
                .size(40.0)
                .strong()
                .color(egui::Color32::from_rgb(250, 250, 250)),
        );
        ui.add_space(8.0);
        ui.label(
            egui::RichText::new(CONTACT_INTRO)
                .size(17.0)
                .color(egui::Color32::from_rgb(163, 163, 163)),
        );
        ui.add_space(24.0);

        let mut edited = false;
        ui.columns(2, |cols| {
            edited |= self.text_field(&mut cols[0], Field::Name);
            edited |= self.text_field(&mut cols[1], Field::Email);
        });
        edited |= self.text_field(ui, Field::Subject);

        let message = egui::TextEdit::multiline(self.contact.field_mut(Field::Message))
            .hint_text(Field::Message.placeholder())
            .desired_rows(6)
            .desired_width(f32::INFINITY)
            .margin(egui::vec2(16.0, 12.0));
        edited |= ui.add(message).changed();

        if edited {
            self.form_hint = None;
        }

        ui.add_space(8.0);
        let submit = egui::Button::new(
            egui::RichText::new(self.contact.button_label())
                .size(16.0)
                .strong()
                .color(egui::Color32::BLACK),
        )
        .min_size(egui::vec2(180.0, 48.0))
        .fill(theme.success)
        .rounding(8.0);

        if ui.add_enabled(!self.contact.is_sending(), submit).clicked() {
            match self.contact.form().validate() {
                Ok(()) => {
                    self.form_hint = None;
                    let ctx = ctx.clone();
                    self.contact.submit_with(move || ctx.request_repaint());
                }
                Err(e) => {
                    log::debug!("contact form blocked: {}", e);
                    self.form_hint = Some(e);
                }
            }
        }

        if let Some(hint) = self.form_hint {
            ui.colored_label(theme.failure, hint.to_string());
        }

        match self.contact.status() {
            SubmissionStatus::Success => {
                ui.colored_label(theme.success, "Message sent successfully!");
            }
            SubmissionStatus::Failure => {
                ui.colored_label(theme.failure, "Failed to send. Please try again.");
            }
            SubmissionStatus::Unset => {}
        }
    }

    /// Single-line input bound to one form field. Returns whether it changed.
    fn text_field(&mut self, ui: &mut egui::Ui, field: Field) -> bool {
        let edit = egui::TextEdit::singleline(self.contact.field_mut(field))
            .hint_text(field.placeholder())
            .desired_width(f32::INFINITY)
            .margin(egui::vec2(16.0, 12.0));
        ui.add(edit).changed()
    }
}
