//! Page composition: background, scrolling content column and the floating
//! section navigation bar.

use crate::FlikStudioApp;
use crate::colors;
use crate::constants::{CONTENT_MAX_WIDTH, NAV_BOTTOM_MARGIN};
use crate::cursor::HoverExt;
use eframe::egui;
use flik_studio::SectionId;
use flik_studio::cursor::HoverRole;

impl FlikStudioApp {
    /// Renders the scrolling page with the header and every section.
    pub fn show_page(&mut self, ctx: &egui::Context) {
        egui::CentralPanel::default()
            .frame(egui::Frame::NONE.fill(colors::BACKGROUND))
            .show(ctx, |ui| {
                paint_background(ui);

                let viewport_height = ui.available_height();
                egui::ScrollArea::vertical()
                    .id_salt("page_scroll")
                    .auto_shrink([false, false])
                    .show(ui, |ui| {
                        let width = (ui.available_width() - 32.0).min(CONTENT_MAX_WIDTH);
                        let side = (ui.available_width() - width) / 2.0;

                        ui.add_space(24.0);
                        ui.horizontal_top(|ui| {
                            ui.add_space(side);
                            ui.vertical(|ui| {
                                ui.set_width(width);
                                self.show_header(ui);
                                ui.add_space(48.0);

                                for id in SectionId::ALL {
                                    self.show_section(ui, id, viewport_height);
                                }
                            });
                        });
                        ui.add_space(96.0);
                    });
            });
    }

    /// Renders the floating navigation bar at the bottom of the window.
    pub fn show_navigation(&mut self, ctx: &egui::Context) {
        egui::Area::new(egui::Id::new("section_nav"))
            .anchor(egui::Align2::CENTER_BOTTOM, egui::vec2(0.0, -NAV_BOTTOM_MARGIN))
            .interactable(true)
            .show(ctx, |ui| {
                egui::Frame::NONE
                    .fill(colors::GLASS_FILL)
                    .stroke(egui::Stroke::new(1.0, colors::GLASS_STROKE))
                    .corner_radius(egui::CornerRadius::same(16))
                    .inner_margin(egui::Margin::symmetric(24, 16))
                    .show(ui, |ui| {
                        ui.horizontal(|ui| {
                            ui.spacing_mut().item_spacing.x = 24.0;
                            let nav = self.content.nav.clone();
                            for item in &nav {
                                let active = self.active_section == item.id;
                                let clicked = ui
                                    .selectable_label(active, &item.label)
                                    .hover_role(&mut self.hover, HoverRole::Button)
                                    .clicked();
                                if clicked {
                                    self.navigate_to(item.id);
                                }
                            }
                        });
                    });
            });
    }

    fn navigate_to(&mut self, id: SectionId) {
        log::debug!("Navigating to {id:?}");
        self.active_section = id;
        self.pending_scroll = Some(id);
    }
}

/// Dark backdrop with two soft emerald glows in opposite corners.
fn paint_background(ui: &egui::Ui) {
    let rect = ui.max_rect();
    let painter = ui.painter();
    let radius = rect.width().max(rect.height()) * 0.4;

    for center in [rect.right_top(), rect.left_bottom()] {
        for step in 0..8 {
            let t = step as f32 / 8.0;
            painter.circle_filled(
                center,
                radius * (1.0 - t * 0.6),
                colors::BACKGROUND_GLOW.gamma_multiply(0.5 + t * 0.5),
            );
        }
    }
}
