//! Stateless egui helpers shared by the panels: style setup, headings,
//! cards, chips and link handling.

use eframe::egui;
use matrix_portfolio::config::Theme;

// ─── Style ────────────────────────────────────────────────────────────────────

/// Monospace fonts tried in order; the first one found is preferred over
/// egui's bundled font.
const MONO_FONT_PATHS: [&str; 4] = [
    "/System/Library/Fonts/Supplemental/Courier New.ttf",
    "C:\\Windows\\Fonts\\cour.ttf",
    "/usr/share/fonts/truetype/dejavu/DejaVuSansMono.ttf",
    "/usr/share/fonts/TTF/DejaVuSansMono.ttf",
];

/// Dark terminal visuals, monospace everywhere.
pub fn install_style(ctx: &egui::Context, theme: &Theme) {
    let mut fonts = egui::FontDefinitions::default();
    for path in &MONO_FONT_PATHS {
        if let Ok(data) = std::fs::read(path) {
            log::debug!("using font {}", path);
            fonts
                .font_data
                .insert("terminal".to_owned(), egui::FontData::from_owned(data));
            for family in [egui::FontFamily::Monospace, egui::FontFamily::Proportional] {
                if let Some(list) = fonts.families.get_mut(&family) {
                    list.insert(0, "terminal".to_owned());
                }
            }
            break;
        }
    }
    ctx.set_fonts(fonts);

    let mut style = (*ctx.style()).clone();
    style.visuals = egui::Visuals::dark();
    style.visuals.override_text_color = Some(theme.text);
    style.visuals.panel_fill = egui::Color32::TRANSPARENT;
    style.visuals.extreme_bg_color = egui::Color32::from_rgba_unmultiplied(20, 20, 20, 160);
    style.visuals.selection.bg_fill = theme.accent_dim;
    style.visuals.selection.stroke = egui::Stroke::new(1.0, theme.accent);
    style.visuals.widgets.hovered.bg_stroke = egui::Stroke::new(1.0, theme.accent);
    style.override_font_id = Some(egui::FontId::monospace(15.0));
    style.spacing.item_spacing = egui::vec2(10.0, 10.0);
    ctx.set_style(style);
}

// ─── Widgets ──────────────────────────────────────────────────────────────────

/// `> TITLE` heading with a glow-ish accent colour.
pub fn section_heading(ui: &mut egui::Ui, text: &str, theme: &Theme) {
    ui.label(
        egui::RichText::new(format!("> {}", text))
            .size(40.0)
            .strong()
            .color(theme.accent),
    );
    ui.add_space(24.0);
}

/// Translucent bordered card.
pub fn card(theme: &Theme) -> egui::Frame {
    egui::Frame::none()
        .fill(egui::Color32::from_rgba_unmultiplied(0, 255, 65, 13))
        .stroke(egui::Stroke::new(
            1.0,
            egui::Color32::from_rgba_unmultiplied(0, 255, 65, 77),
        ))
        .rounding(4.0)
        .inner_margin(24.0)
        .outer_margin(egui::Margin::symmetric(0.0, 8.0))
        .shadow(egui::Shadow {
            offset: egui::Vec2::ZERO,
            blur: 10.0,
            spread: 0.0,
            color: theme.accent.gamma_multiply(0.1),
        })
}

/// Card that opens `url` in a new tab when clicked.
pub fn link_card(
    ui: &mut egui::Ui,
    url: &str,
    theme: &Theme,
    add_contents: impl FnOnce(&mut egui::Ui),
) {
    let response = card(theme)
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            add_contents(ui);
        })
        .response
        .interact(egui::Sense::click());

    if response.hovered() {
        ui.painter().rect_stroke(
            response.rect,
            4.0,
            egui::Stroke::new(1.5, theme.accent),
        );
    }
    if response.clicked() {
        open_in_new_tab(ui.ctx(), url);
    }
    response
        .on_hover_cursor(egui::CursorIcon::PointingHand)
        .on_hover_text(url);
}

pub fn open_in_new_tab(ctx: &egui::Context, url: &str) {
    log::debug!("open {}", url);
    ctx.open_url(egui::OpenUrl::new_tab(url));
}

/// Bordered skill tag.
pub fn chip(ui: &mut egui::Ui, text: &str, theme: &Theme) {
    egui::Frame::none()
        .fill(egui::Color32::from_rgba_unmultiplied(0, 255, 65, 26))
        .stroke(egui::Stroke::new(
            1.0,
            egui::Color32::from_rgba_unmultiplied(0, 255, 65, 102),
        ))
        .rounding(2.0)
        .inner_margin(egui::Margin::symmetric(12.0, 6.0))
        .show(ui, |ui| {
            ui.label(egui::RichText::new(text).color(theme.accent));
        });
}

/// `>`-prefixed bullet line.
pub fn bullet(ui: &mut egui::Ui, text: &str, theme: &Theme) {
    ui.horizontal_wrapped(|ui| {
        ui.label(egui::RichText::new(">").color(theme.accent));
        ui.label(egui::RichText::new(text).color(theme.muted));
    });
}
