//! Full-screen virtual tour overlay around the panorama viewer model.

use crate::FlikStudioApp;
use crate::assets::AssetLoadState;
use crate::colors;
use crate::constants::{TOUR_BUTTON_SIZE, TOUR_EASING};
use eframe::egui;
use flik_studio::viewer::{Pan, ViewTransform, ZoomDirection};

impl FlikStudioApp {
    /// Opens the tour with a fresh, un-eased transform.
    pub fn open_tour(&mut self) {
        if self.viewer.is_open() {
            return;
        }
        self.viewer.open();
        log::info!("Virtual tour opened");
    }

    pub fn close_tour(&mut self, ctx: &egui::Context) {
        if !self.viewer.is_open() {
            return;
        }
        self.viewer.close();
        // Eased values would otherwise glide in from the old session on reopen.
        ctx.clear_animations();
        log::info!("Virtual tour closed");
    }

    /// Keyboard shortcuts active while the tour is open.
    pub fn handle_tour_keys(&mut self, ctx: &egui::Context) {
        let (zoom_in, zoom_out, toggle_vr, exit) = ctx.input(|i| {
            (
                i.key_pressed(egui::Key::Plus) || i.key_pressed(egui::Key::Equals),
                i.key_pressed(egui::Key::Minus),
                i.key_pressed(egui::Key::V),
                i.key_pressed(egui::Key::Escape),
            )
        });

        if zoom_in {
            self.viewer.zoom_button(ZoomDirection::In);
        }
        if zoom_out {
            self.viewer.zoom_button(ZoomDirection::Out);
        }
        if toggle_vr {
            self.viewer.toggle_vr_mode();
        }
        if exit {
            self.close_tour(ctx);
        }
    }

    /// Renders the panorama and its controls over the whole window.
    pub fn show_tour(&mut self, ctx: &egui::Context) {
        egui::CentralPanel::default()
            .frame(egui::Frame::NONE.fill(egui::Color32::BLACK))
            .show(ctx, |ui| {
                let (viewport_rect, response) =
                    ui.allocate_exact_size(ui.available_size(), egui::Sense::click_and_drag());

                // Every pointer move counts while the button is held on the
                // viewport, including the ones below egui's drag threshold.
                if response.is_pointer_button_down_on() {
                    let (primary_down, delta) =
                        ui.input(|i| (i.pointer.primary_down(), i.pointer.delta()));
                    self.viewer.pointer_moved(primary_down, delta.x, delta.y);
                }

                if response.hovered() {
                    // One zoom step per wheel event. egui reports wheel-up as
                    // positive, the viewer expects wheel-up as negative.
                    let wheel_deltas: Vec<f32> = ui.input(|i| {
                        i.events
                            .iter()
                            .filter_map(|event| match event {
                                egui::Event::MouseWheel { delta, .. } => Some(delta.y),
                                _ => None,
                            })
                            .collect()
                    });
                    for delta_y in wheel_deltas {
                        self.viewer.wheel_zoom(-delta_y);
                    }
                }

                ui.set_clip_rect(viewport_rect);
                self.paint_panorama(ui, viewport_rect);
                self.show_tour_controls(ui, viewport_rect);
            });
    }

    fn paint_panorama(&self, ui: &mut egui::Ui, viewport_rect: egui::Rect) {
        let texture = match (&self.panorama, &self.panorama_texture) {
            (_, Some(texture)) => texture,
            (AssetLoadState::Error(msg), None) => {
                ui.painter().text(
                    viewport_rect.center(),
                    egui::Align2::CENTER_CENTER,
                    format!("Failed to load panorama: {msg}"),
                    egui::FontId::proportional(16.0),
                    colors::TOUR_HINT_TEXT,
                );
                return;
            }
            (_, None) => {
                let spinner_rect =
                    egui::Rect::from_center_size(viewport_rect.center(), egui::vec2(32.0, 32.0));
                egui::Spinner::new().size(32.0).paint_at(ui, spinner_rect);
                return;
            }
        };

        let ctx = ui.ctx();
        let ease = |name: &str, value: f32| {
            ctx.animate_value_with_time(egui::Id::new(("tour_transform", name)), value, TOUR_EASING)
        };
        let target = self.viewer.transform();
        let eased = ViewTransform {
            translate: Pan::new(ease("x", target.translate.x), ease("y", target.translate.y)),
            scale: ease("zoom", target.scale),
        };

        let image_rect = panorama_rect(viewport_rect, texture.size_vec2(), eased);
        ui.painter().image(
            texture.id(),
            image_rect,
            egui::Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0)),
            egui::Color32::WHITE,
        );
    }

    fn show_tour_controls(&mut self, ui: &mut egui::Ui, viewport_rect: egui::Rect) {
        let margin = 16.0;

        // Top right: VR mode toggle and exit
        let top_right = egui::Rect::from_min_max(
            egui::pos2(viewport_rect.center().x, viewport_rect.top() + margin),
            egui::pos2(viewport_rect.right() - margin, viewport_rect.top() + margin + 40.0),
        );
        ui.scope_builder(
            egui::UiBuilder::new()
                .max_rect(top_right)
                .layout(egui::Layout::right_to_left(egui::Align::Center)),
            |ui| {
                if pill_button(ui, "Exit Experience", colors::TEXT).clicked() {
                    self.close_tour(ui.ctx());
                }

                let vr_color = if self.viewer.is_vr_mode() {
                    colors::EMERALD_LIGHT
                } else {
                    colors::TEXT
                };
                if pill_button(ui, "VR Mode", vr_color)
                    .on_hover_text("Toggle VR mode (V)")
                    .clicked()
                {
                    self.viewer.toggle_vr_mode();
                }
            },
        );

        // Bottom center: zoom buttons
        let zoom_width = TOUR_BUTTON_SIZE * 2.0 + 16.0;
        let bottom_center = egui::Rect::from_center_size(
            egui::pos2(
                viewport_rect.center().x,
                viewport_rect.bottom() - margin - TOUR_BUTTON_SIZE / 2.0,
            ),
            egui::vec2(zoom_width, TOUR_BUTTON_SIZE),
        );
        ui.scope_builder(
            egui::UiBuilder::new()
                .max_rect(bottom_center)
                .layout(egui::Layout::left_to_right(egui::Align::Center)),
            |ui| {
                ui.spacing_mut().item_spacing.x = 16.0;
                if round_button(ui, "+").on_hover_text("Zoom in (+)").clicked() {
                    self.viewer.zoom_button(ZoomDirection::In);
                }
                if round_button(ui, "−").on_hover_text("Zoom out (-)").clicked() {
                    self.viewer.zoom_button(ZoomDirection::Out);
                }
            },
        );

        // Bottom left: usage hint
        let hint_rect = egui::Rect::from_min_max(
            egui::pos2(viewport_rect.left() + margin, viewport_rect.bottom() - margin - 36.0),
            egui::pos2(viewport_rect.center().x - zoom_width, viewport_rect.bottom() - margin),
        );
        ui.scope_builder(
            egui::UiBuilder::new()
                .max_rect(hint_rect)
                .layout(egui::Layout::left_to_right(egui::Align::Center)),
            |ui| {
                egui::Frame::NONE
                    .fill(colors::TOUR_CONTROL_FILL)
                    .corner_radius(egui::CornerRadius::same(18))
                    .inner_margin(egui::Margin::symmetric(16, 8))
                    .show(ui, |ui| {
                        ui.label(
                            egui::RichText::new("Drag to explore | Scroll to zoom")
                                .small()
                                .color(colors::TOUR_HINT_TEXT),
                        );
                    });
            },
        );
    }
}

/// Screen rectangle of the panorama: the image covers the viewport, is moved
/// by the pan offset and scaled by the zoom around the viewport center.
pub fn panorama_rect(
    viewport_rect: egui::Rect,
    image_size: egui::Vec2,
    transform: ViewTransform,
) -> egui::Rect {
    let viewport_size = viewport_rect.size();
    let cover_scale = (viewport_size.x / image_size.x).max(viewport_size.y / image_size.y);
    let center = viewport_rect.center() + egui::vec2(transform.translate.x, transform.translate.y);
    egui::Rect::from_center_size(center, image_size * cover_scale * transform.scale)
}

fn pill_button(ui: &mut egui::Ui, label: &str, color: egui::Color32) -> egui::Response {
    ui.add(
        egui::Button::new(egui::RichText::new(label).color(color))
            .fill(colors::TOUR_CONTROL_FILL)
            .stroke(egui::Stroke::new(1.0, colors::TOUR_CONTROL_STROKE))
            .corner_radius(egui::CornerRadius::same(20))
            .min_size(egui::vec2(0.0, 40.0)),
    )
}

fn round_button(ui: &mut egui::Ui, label: &str) -> egui::Response {
    ui.add(
        egui::Button::new(egui::RichText::new(label).size(20.0).color(colors::TEXT))
            .fill(colors::TOUR_CONTROL_FILL)
            .stroke(egui::Stroke::new(1.0, colors::TOUR_CONTROL_STROKE))
            .corner_radius(egui::CornerRadius::same(24))
            .min_size(egui::vec2(TOUR_BUTTON_SIZE, TOUR_BUTTON_SIZE)),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use egui_toast::Toasts;
    use flik_studio::SiteContent;

    const CENTER: egui::Pos2 = egui::pos2(400.0, 300.0);

    /// Headless egui context driving the tour the way `update` does.
    struct Harness {
        ctx: egui::Context,
        app: FlikStudioApp,
    }

    impl Harness {
        fn open() -> Self {
            let mut app = FlikStudioApp::with_content(
                SiteContent::default(),
                AssetLoadState::Error("no panorama in tests".to_owned()),
                Toasts::new(),
            );
            app.open_tour();
            let mut harness = Self {
                ctx: egui::Context::default(),
                app,
            };
            // Lay the viewport out once so later input hits it.
            harness.frame(vec![egui::Event::PointerMoved(CENTER)]);
            harness
        }

        fn frame(&mut self, events: Vec<egui::Event>) {
            let input = egui::RawInput {
                screen_rect: Some(egui::Rect::from_min_size(
                    egui::Pos2::ZERO,
                    egui::vec2(800.0, 600.0),
                )),
                events,
                ..Default::default()
            };
            let app = &mut self.app;
            let _ = self.ctx.run(input, |ctx| {
                if app.viewer.is_open() {
                    app.handle_tour_keys(ctx);
                    app.show_tour(ctx);
                }
            });
        }

        fn primary(&mut self, pos: egui::Pos2, pressed: bool) {
            self.frame(vec![egui::Event::PointerButton {
                pos,
                button: egui::PointerButton::Primary,
                pressed,
                modifiers: egui::Modifiers::default(),
            }]);
        }

        fn move_to(&mut self, pos: egui::Pos2) {
            self.frame(vec![egui::Event::PointerMoved(pos)]);
        }
    }

    fn wheel(delta_y: f32) -> egui::Event {
        egui::Event::MouseWheel {
            unit: egui::MouseWheelUnit::Line,
            delta: egui::vec2(0.0, delta_y),
            modifiers: egui::Modifiers::default(),
        }
    }

    fn key(key: egui::Key) -> egui::Event {
        egui::Event::Key {
            key,
            physical_key: None,
            pressed: true,
            repeat: false,
            modifiers: egui::Modifiers::default(),
        }
    }

    #[test]
    fn each_wheel_event_in_a_frame_is_a_zoom_step() {
        let mut harness = Harness::open();
        harness.frame(vec![wheel(1.0), wheel(1.0)]);
        assert!((harness.app.viewer.zoom() - 1.2).abs() < 1e-5);

        harness.frame(vec![wheel(-3.0), wheel(-0.5), wheel(-1.0)]);
        assert!((harness.app.viewer.zoom() - 0.9).abs() < 1e-5);
    }

    #[test]
    fn short_drag_below_threshold_pans() {
        let mut harness = Harness::open();
        harness.primary(CENTER, true);
        for step in 1..=4 {
            harness.move_to(CENTER + egui::vec2(3.0 * step as f32, 0.0));
        }
        harness.primary(CENTER + egui::vec2(12.0, 0.0), false);

        assert_eq!(harness.app.viewer.pan(), Pan::new(12.0, 0.0));
    }

    #[test]
    fn long_drag_pans_by_full_movement() {
        let mut harness = Harness::open();
        harness.primary(CENTER, true);
        for step in 1..=10 {
            harness.move_to(CENTER + egui::vec2(10.0 * step as f32, -5.0 * step as f32));
        }
        harness.primary(CENTER + egui::vec2(100.0, -50.0), false);

        assert_eq!(harness.app.viewer.pan(), Pan::new(100.0, -50.0));
    }

    #[test]
    fn pointer_movement_with_button_up_does_not_pan() {
        let mut harness = Harness::open();
        for step in 1..=5 {
            harness.move_to(CENTER + egui::vec2(20.0 * step as f32, 10.0));
        }
        assert_eq!(harness.app.viewer.pan(), Pan::ZERO);
    }

    #[test]
    fn escape_closes_and_resets_the_session() {
        let mut harness = Harness::open();
        harness.primary(CENTER, true);
        harness.move_to(CENTER + egui::vec2(40.0, 20.0));
        harness.primary(CENTER + egui::vec2(40.0, 20.0), false);
        harness.frame(vec![wheel(1.0)]);
        harness.frame(vec![key(egui::Key::V)]);
        assert_ne!(harness.app.viewer.pan(), Pan::ZERO);
        assert!(harness.app.viewer.is_vr_mode());

        harness.frame(vec![key(egui::Key::Escape)]);
        assert!(!harness.app.viewer.is_open());

        harness.app.open_tour();
        assert_eq!(harness.app.viewer.pan(), Pan::ZERO);
        assert_eq!(harness.app.viewer.zoom(), 1.0);
        assert!(!harness.app.viewer.is_vr_mode());
    }

    fn identity() -> ViewTransform {
        ViewTransform {
            translate: Pan::ZERO,
            scale: 1.0,
        }
    }

    #[test]
    fn wide_panorama_covers_viewport_height() {
        let viewport = egui::Rect::from_min_size(egui::Pos2::ZERO, egui::vec2(800.0, 600.0));
        let rect = panorama_rect(viewport, egui::vec2(2048.0, 512.0), identity());
        assert_eq!(rect.height(), 600.0);
        assert!(rect.width() > 800.0);
        assert_eq!(rect.center(), viewport.center());
    }

    #[test]
    fn pan_and_zoom_move_and_scale_the_image() {
        let viewport = egui::Rect::from_min_size(egui::Pos2::ZERO, egui::vec2(800.0, 600.0));
        let transform = ViewTransform {
            translate: Pan::new(100.0, -50.0),
            scale: 2.0,
        };
        let rect = panorama_rect(viewport, egui::vec2(800.0, 600.0), transform);
        assert_eq!(rect.center(), egui::pos2(500.0, 250.0));
        assert_eq!(rect.size(), egui::vec2(1600.0, 1200.0));
    }
}
