//! Drawing of the decorated cursor and the hook widgets use to report hovers.

use crate::colors;
use crate::constants::{CURSOR_CARET_HEIGHT, CURSOR_OFFSET, CURSOR_SIZE};
use eframe::egui;
use flik_studio::cursor::{CursorFollower, HoverRole, HoverTracker};

/// Reports a widget's hover state to the frame's [`HoverTracker`].
pub trait HoverExt {
    fn hover_role(self, tracker: &mut HoverTracker, role: HoverRole) -> Self;
}

impl HoverExt for egui::Response {
    fn hover_role(self, tracker: &mut HoverTracker, role: HoverRole) -> Self {
        tracker.observe(self.hovered(), role);
        self
    }
}

/// Advances the follower toward the pointer and paints the glyph above
/// everything else. Hides the system pointer while the glyph is shown.
pub fn show_cursor(ctx: &egui::Context, follower: &mut CursorFollower, role: HoverRole) {
    let (hover_pos, dt) = ctx.input(|i| (i.pointer.hover_pos(), i.stable_dt));
    let Some(pointer) = hover_pos else {
        return;
    };

    follower.step([pointer.x, pointer.y], dt);
    if !follower.is_settled() {
        ctx.request_repaint();
    }

    ctx.set_cursor_icon(egui::CursorIcon::None);

    let [x, y] = follower.position();
    let min = egui::pos2(x - CURSOR_OFFSET, y - CURSOR_OFFSET);
    let painter = ctx.layer_painter(egui::LayerId::new(
        egui::Order::Tooltip,
        egui::Id::new("cursor_decorator"),
    ));

    match role {
        HoverRole::Default => {
            let radius = CURSOR_SIZE / 2.0;
            painter.circle_stroke(
                min + egui::vec2(radius, radius),
                radius - 1.0,
                egui::Stroke::new(2.0, colors::CURSOR_RING),
            );
        }
        HoverRole::Text => {
            let rect = egui::Rect::from_min_size(min, egui::vec2(2.0, CURSOR_CARET_HEIGHT));
            painter.rect_filled(rect, 1.0, colors::TEXT);
        }
        HoverRole::Button => {
            let radius = CURSOR_SIZE / 2.0;
            painter.circle_filled(min + egui::vec2(radius, radius), radius, colors::CURSOR_FILL);
        }
    }
}
