//! Page sections: hero, portfolio grid, about and contact form.

use crate::FlikStudioApp;
use crate::colors;
use crate::constants::{CARD_HOVER_DURATION, CARD_HOVER_SCALE, REVEAL_DURATION, REVEAL_OFFSET};
use crate::cursor::HoverExt;
use crate::header::glass_frame;
use eframe::egui;
use egui_toast::{Toast, ToastKind, ToastOptions};
use flik_studio::cursor::HoverRole;
use flik_studio::{Project, SectionId};

impl FlikStudioApp {
    /// Lays out one section at least `min_height` tall, fading it in the first
    /// time it becomes visible and scrolling to it when navigation asked for it.
    pub fn show_section(&mut self, ui: &mut egui::Ui, id: SectionId, min_height: f32) {
        let reveal = ui.ctx().animate_bool_with_time(
            egui::Id::new(("section_reveal", id)),
            self.revealed.contains(&id),
            REVEAL_DURATION,
        );

        let response = ui
            .scope(|ui| {
                ui.set_min_height(min_height);
                ui.multiply_opacity(reveal);
                ui.add_space(REVEAL_OFFSET * (1.0 - reveal));

                match id {
                    SectionId::Home => self.show_hero(ui, min_height),
                    SectionId::Portfolio => self.show_portfolio(ui),
                    SectionId::About => self.show_about(ui),
                    SectionId::Contact => self.show_contact(ui),
                }
            })
            .response;

        if ui.is_rect_visible(response.rect) {
            self.revealed.insert(id);
        }

        if self.pending_scroll == Some(id) {
            response.scroll_to_me(Some(egui::Align::TOP));
            self.pending_scroll = None;
        }
    }

    fn show_hero(&mut self, ui: &mut egui::Ui, min_height: f32) {
        let hero = self.content.hero.clone();

        // Center the card vertically within the first screen.
        ui.add_space((min_height * 0.25).max(0.0));

        glass_frame().show(ui, |ui| {
            ui.set_max_width(896.0);
            ui.label(
                egui::RichText::new(&hero.title)
                    .size(56.0)
                    .color(colors::TEXT),
            );
            ui.add_space(24.0);
            ui.label(egui::RichText::new(&hero.body).size(20.0).color(colors::TEXT_MUTED));
            ui.add_space(32.0);

            let clicked = glass_button(ui, &hero.cta)
                .hover_role(&mut self.hover, HoverRole::Button)
                .clicked();
            if clicked {
                self.open_tour();
            }
        });
    }

    fn show_portfolio(&mut self, ui: &mut egui::Ui) {
        let portfolio = self.content.portfolio.clone();

        glass_frame().show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.label(
                egui::RichText::new(&portfolio.heading)
                    .size(36.0)
                    .color(colors::TEXT),
            );
            ui.label(egui::RichText::new(&portfolio.subheading).color(colors::TEXT_MUTED));
        });

        ui.add_space(48.0);

        ui.columns(3, |columns| {
            for (idx, project) in portfolio.projects.iter().enumerate() {
                let column = &mut columns[idx % 3];
                self.project_card(column, idx, project);
                column.add_space(32.0);
            }
        });
    }

    /// Card with generated artwork; hovering scales it up and reveals the
    /// project title.
    fn project_card(&mut self, ui: &mut egui::Ui, idx: usize, project: &Project) {
        let width = ui.available_width();
        let (rect, response) =
            ui.allocate_exact_size(egui::vec2(width, width * 0.75), egui::Sense::click());
        let response = response.hover_role(&mut self.hover, HoverRole::Button);

        let hover = ui.ctx().animate_bool_with_time(
            egui::Id::new(("project_card", idx)),
            response.hovered(),
            CARD_HOVER_DURATION,
        );
        let card = rect.scale_from_center(1.0 + (CARD_HOVER_SCALE - 1.0) * hover);

        let painter = ui.painter();
        let [r, g, b] = project.accent;
        let accent = egui::Color32::from_rgb(r, g, b);
        painter.rect_filled(card, 16.0, accent.gamma_multiply(0.35));

        // Stylized skyline, one block per character of the title.
        let ground = card.bottom() - card.height() * 0.15;
        let blocks = project.title.len().max(1);
        let block_width = card.width() * 0.8 / blocks as f32;
        for (i, byte) in project.title.bytes().enumerate() {
            let height = card.height() * (0.2 + f32::from(byte % 7) * 0.08);
            let left = card.left() + card.width() * 0.1 + i as f32 * block_width;
            let block = egui::Rect::from_min_max(
                egui::pos2(left, ground - height),
                egui::pos2(left + block_width * 0.85, ground),
            );
            painter.rect_filled(block, 2.0, accent.gamma_multiply(0.6 + 0.1 * hover));
        }

        painter.rect_stroke(
            card,
            16.0,
            egui::Stroke::new(1.0, colors::GLASS_STROKE),
            egui::StrokeKind::Inside,
        );

        if hover > 0.0 {
            let shade = egui::Rect::from_min_max(
                egui::pos2(card.left(), card.center().y),
                card.max,
            );
            painter.rect_filled(shade, 16.0, colors::CARD_SHADE.gamma_multiply(hover));
            painter.text(
                shade.left_bottom() + egui::vec2(24.0, -48.0),
                egui::Align2::LEFT_BOTTOM,
                &project.title,
                egui::FontId::proportional(20.0),
                colors::TEXT.gamma_multiply(hover),
            );
            painter.text(
                shade.left_bottom() + egui::vec2(24.0, -24.0),
                egui::Align2::LEFT_BOTTOM,
                &project.location,
                egui::FontId::proportional(14.0),
                colors::TEXT_MUTED.gamma_multiply(hover),
            );
        }
    }

    fn show_about(&mut self, ui: &mut egui::Ui) {
        let about = self.content.about.clone();

        glass_frame().show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.label(
                egui::RichText::new(&about.heading)
                    .size(36.0)
                    .color(colors::TEXT),
            );
            ui.add_space(24.0);
            ui.label(egui::RichText::new(&about.body).color(colors::TEXT_MUTED));
            ui.add_space(32.0);

            let count = about.cards.len().max(1);
            ui.columns(count, |columns| {
                for (column, card) in columns.iter_mut().zip(&about.cards) {
                    egui::Frame::NONE
                        .fill(colors::GLASS_BUTTON_FILL)
                        .stroke(egui::Stroke::new(1.0, colors::GLASS_STROKE))
                        .corner_radius(egui::CornerRadius::same(12))
                        .inner_margin(egui::Margin::same(24))
                        .show(column, |ui| {
                            ui.set_width(ui.available_width());
                            ui.label(egui::RichText::new(&card.title).size(20.0).color(colors::TEXT));
                            ui.add_space(16.0);
                            ui.label(egui::RichText::new(&card.body).color(colors::TEXT_MUTED));
                        })
                        .response
                        .interact(egui::Sense::hover())
                        .hover_role(&mut self.hover, HoverRole::Button);
                }
            });
        });
    }

    fn show_contact(&mut self, ui: &mut egui::Ui) {
        let heading = self.content.contact.heading.clone();

        glass_frame().show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.label(egui::RichText::new(&heading).size(36.0).color(colors::TEXT));
            ui.add_space(24.0);

            let field_width = ui.available_width();
            ui.add(
                egui::TextEdit::singleline(&mut self.contact_form.name)
                    .hint_text("Name")
                    .desired_width(field_width)
                    .margin(egui::Margin::symmetric(24, 16)),
            )
            .hover_role(&mut self.hover, HoverRole::Text);
            ui.add_space(24.0);

            ui.add(
                egui::TextEdit::singleline(&mut self.contact_form.email)
                    .hint_text("Email")
                    .desired_width(field_width)
                    .margin(egui::Margin::symmetric(24, 16)),
            )
            .hover_role(&mut self.hover, HoverRole::Text);
            ui.add_space(24.0);

            ui.add(
                egui::TextEdit::multiline(&mut self.contact_form.message)
                    .hint_text("Message")
                    .desired_rows(4)
                    .desired_width(field_width)
                    .margin(egui::Margin::symmetric(24, 16)),
            )
            .hover_role(&mut self.hover, HoverRole::Text);
            ui.add_space(24.0);

            let clicked = glass_button(ui, "Send Message")
                .hover_role(&mut self.hover, HoverRole::Button)
                .clicked();
            if clicked {
                self.send_contact_form();
            }
        });
    }

    /// Hands the form to the system mail client and clears it on success.
    fn send_contact_form(&mut self) {
        let result = self
            .contact_form
            .mailto_url(&self.content.contact.email)
            .and_then(|url| open::that(&url).map_err(Into::into));

        match result {
            Ok(()) => {
                log::info!("Opened mail client for contact form");
                self.contact_form.clear();
                self.toasts.add(Toast {
                    kind: ToastKind::Success,
                    text: "Message handed to your mail client".into(),
                    options: ToastOptions::default().duration_in_seconds(4.0),
                    ..Default::default()
                });
            }
            Err(err) => {
                log::warn!("Contact form not sent: {err}");
                self.toasts.add(Toast {
                    kind: ToastKind::Warning,
                    text: err.to_string().into(),
                    options: ToastOptions::default()
                        .duration_in_seconds(6.0)
                        .show_icon(true),
                    ..Default::default()
                });
            }
        }
    }
}

/// Rounded translucent button used for calls to action.
fn glass_button(ui: &mut egui::Ui, label: &str) -> egui::Response {
    ui.add(
        egui::Button::new(egui::RichText::new(label).size(16.0).color(colors::TEXT))
            .fill(colors::GLASS_BUTTON_FILL)
            .stroke(egui::Stroke::new(1.0, colors::GLASS_STROKE))
            .corner_radius(egui::CornerRadius::same(12))
            .min_size(egui::vec2(0.0, 48.0)),
    )
}
