//! Page header: logo, location, local time and social reach widgets.

use crate::FlikStudioApp;
use crate::colors;
use crate::cursor::HoverExt;
use chrono::Local;
use eframe::egui;
use flik_studio::cursor::HoverRole;
use std::time::Duration;

impl FlikStudioApp {
    pub fn show_header(&mut self, ui: &mut egui::Ui) {
        // Keep the clock ticking even when the pointer is idle.
        ui.ctx().request_repaint_after(Duration::from_secs(1));

        let local_time = Local::now().format("%I:%M %p").to_string();
        let location = self.content.location.clone();
        let followers = self.content.followers.clone();
        let handle = self.content.handle.clone();

        glass_frame().show(ui, |ui| {
            ui.horizontal_wrapped(|ui| {
                ui.spacing_mut().item_spacing.x = 24.0;

                ui.add(
                    egui::Image::new(egui::include_image!("../../../assets/flik-logo.png"))
                        .fit_to_exact_size(egui::vec2(120.0, 48.0)),
                );

                self.info_widget(ui, colors::EMERALD_DARK, caption("Based in"), value(&location));
                self.info_widget(ui, colors::BLUE_DARK, caption("Local time"), value(&local_time));

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let (count, handle) = reach_lines(&followers, &handle);
                    self.info_widget(ui, colors::PURPLE_DARK, count, handle);
                });
            });
        });
    }

    /// Small icon tile with two stacked lines, reported as text on hover.
    fn info_widget(
        &mut self,
        ui: &mut egui::Ui,
        tile: egui::Color32,
        top: egui::RichText,
        bottom: egui::RichText,
    ) {
        let response = egui::Frame::NONE
            .fill(colors::GLASS_BUTTON_FILL)
            .corner_radius(egui::CornerRadius::same(12))
            .inner_margin(egui::Margin::symmetric(12, 8))
            .show(ui, |ui| {
                ui.horizontal(|ui| {
                    let (rect, _) =
                        ui.allocate_exact_size(egui::vec2(32.0, 32.0), egui::Sense::hover());
                    ui.painter().rect_filled(rect, 8.0, tile);
                    ui.painter()
                        .circle_stroke(rect.center(), 6.0, egui::Stroke::new(2.0, colors::EMERALD_LIGHT));

                    ui.vertical(|ui| {
                        ui.label(top);
                        ui.label(bottom);
                    });
                });
            })
            .response;

        response
            .interact(egui::Sense::hover())
            .hover_role(&mut self.hover, HoverRole::Text);
    }
}

fn caption(text: &str) -> egui::RichText {
    egui::RichText::new(text).small().color(colors::TEXT_MUTED)
}

fn value(text: &str) -> egui::RichText {
    egui::RichText::new(text).strong().color(colors::TEXT)
}

/// Follower count on top in large type, handle underneath.
fn reach_lines(followers: &str, handle: &str) -> (egui::RichText, egui::RichText) {
    (value(followers).size(18.0), caption(handle))
}

/// Translucent rounded card used for every page block.
pub fn glass_frame() -> egui::Frame {
    egui::Frame::NONE
        .fill(colors::GLASS_FILL)
        .stroke(egui::Stroke::new(1.0, colors::GLASS_STROKE))
        .corner_radius(egui::CornerRadius::same(16))
        .inner_margin(egui::Margin::same(32))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reach_widget_leads_with_follower_count() {
        let (top, bottom) = reach_lines("250K", "@flik.studio");
        assert_eq!(top.text(), "250K");
        assert_eq!(bottom.text(), "@flik.studio");
    }
}
