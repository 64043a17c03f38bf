// src/gui/components/card_grid.rs
//
// Wrapped grid of offering cards inside one vertical scroll area.
// Scroll proximity to the bottom asks the session for the next page.

use eframe::egui::{self, CursorIcon, Margin, RichText, Sense};

use crate::{card::Card, config::consts::NO_MATCHES_MSG, session::{ScrollMetrics, Session}};

const CARD_WIDTH: f32 = 300.0;

pub fn draw(ui: &mut egui::Ui, session: &mut Session) {
    // Match the scroll bar aesthetics of the panels
    {
        let s = &mut ui.style_mut().spacing.scroll;
        s.floating = false;
        s.bar_width = 10.0;
        s.handle_min_length = 48.0;
    }

    let indicators = session.indicators();

    // A new filter result starts again at the top
    let out = egui::ScrollArea::vertical()
        .id_salt(("card_grid", session.generation()))
        .auto_shrink([false, false])
        .show(ui, |ui| {
            let mut clicked = None;

            ui.horizontal_wrapped(|ui| {
                ui.spacing_mut().item_spacing = egui::vec2(12.0, 12.0);
                for card in session.visible_cards() {
                    if card_widget(ui, &card).clicked() {
                        clicked = Some(card.index);
                    }
                }
            });

            if indicators.no_results {
                ui.vertical_centered(|ui| {
                    ui.add_space(40.0);
                    ui.heading(NO_MATCHES_MSG);
                    ui.label("Try a different search or clear the filters.");
                });
            }
            if indicators.loading {
                ui.vertical_centered(|ui| {
                    ui.add_space(8.0);
                    ui.spinner();
                });
            }

            clicked
        });

    if let Some(index) = out.inner {
        session.open_card(index);
    }

    let added = session.scrolled(ScrollMetrics {
        offset: out.state.offset.y,
        viewport: out.inner_rect.height(),
        content: out.content_size.y,
    });
    if added > 0 {
        ui.ctx().request_repaint();
    }
}

fn card_widget(ui: &mut egui::Ui, card: &Card) -> egui::Response {
    let v = &card.view;

    egui::Frame::group(ui.style())
        .inner_margin(Margin::same(12))
        .show(ui, |ui| {
            ui.set_width(CARD_WIDTH);
            ui.vertical(|ui| {
                // Labels stay hover-only so the whole card takes the click
                let text = |ui: &mut egui::Ui, rt: RichText| {
                    ui.add(egui::Label::new(rt).wrap().selectable(false));
                };
                text(ui, RichText::new(v.display_name.as_str()).strong().size(16.0));
                if !v.location_label.is_empty() {
                    text(ui, RichText::new(format!("📍 {}", v.location_label)).weak());
                }
                ui.add_space(4.0);
                text(ui, RichText::new(v.excerpt.as_str()));
                ui.add_space(4.0);
                text(ui, RichText::new("Read Full Offering ›").small());
            });
        })
        .response
        .interact(Sense::click())
        .on_hover_cursor(CursorIcon::PointingHand)
}
