// src/gui/components/modal_view.rs
//
// Full-entry viewer. Prev/next buttons, arrow keys and horizontal swipes
// navigate; the close button, Escape and a backdrop click close.

use eframe::egui::{self, Align, Key, Layout, RichText};

use crate::{modal::ModalCommand, session::Session};

const MODAL_WIDTH: f32 = 560.0;
const BODY_MAX_HEIGHT: f32 = 380.0;

fn key_command(ctx: &egui::Context) -> Option<ModalCommand> {
    ctx.input(|i| {
        if i.key_pressed(Key::ArrowLeft) {
            Some(ModalCommand::Prev)
        } else if i.key_pressed(Key::ArrowRight) {
            Some(ModalCommand::Next)
        } else {
            None
        }
    })
}

/// Returns whether the modal was on screen this frame.
pub fn draw(ctx: &egui::Context, session: &mut Session) -> bool {
    if session.modal_position().is_none() { return false; }

    // Keys move first so this frame already draws the new record
    if let Some(cmd) = key_command(ctx) {
        session.modal_command(cmd);
    }

    let Some((pos, detail)) = session.modal_detail() else { return false };
    let total = session.view_len();

    let resp = egui::Modal::new(egui::Id::new("offering_modal")).show(ctx, |ui| {
        ui.set_width(MODAL_WIDTH);
        let mut cmd = None;

        ui.horizontal(|ui| {
            ui.heading(detail.name.as_str());
            ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                if ui.button("✕").on_hover_text("Close").clicked() {
                    cmd = Some(ModalCommand::Close);
                }
            });
        });
        if !detail.location.is_empty() {
            ui.label(RichText::new(format!("📍 {}", detail.location)).weak());
        }
        ui.separator();

        // Keyed by position so every record opens scrolled to the top
        egui::ScrollArea::vertical()
            .id_salt(("modal_body", pos))
            .max_height(BODY_MAX_HEIGHT)
            .auto_shrink([false, true])
            .show(ui, |ui| {
                ui.add(egui::Label::new(detail.body.as_str()).wrap());
            });

        ui.separator();
        ui.horizontal(|ui| {
            if ui.button("‹ Previous").clicked() {
                cmd = Some(ModalCommand::Prev);
            }
            ui.label(format!("{} / {}", pos + 1, total));
            if ui.button("Next ›").clicked() {
                cmd = Some(ModalCommand::Next);
            }
        });

        // Swipe: press and release inside the modal, compared on x
        let rect = ui.min_rect();
        let (pressed, released, at) = ui.input(|i| {
            (i.pointer.any_pressed(), i.pointer.any_released(), i.pointer.interact_pos())
        });
        if let Some(p) = at.filter(|p| rect.contains(*p)) {
            if pressed {
                session.swipe_begin(p.x);
            } else if released && cmd.is_none() && session.swipe_end(p.x).is_some() {
                logd!("UI: Swipe → {:?}", session.modal_position());
            }
        }

        cmd
    });

    if resp.should_close() {
        session.close_modal();
    } else if let Some(cmd) = resp.inner {
        session.modal_command(cmd);
    }
    true
}
