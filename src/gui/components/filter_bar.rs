// src/gui/components/filter_bar.rs
//
// Search box, clear control, country/city selectors and the results count.
// Typing is debounced by the session; selector changes apply at once.

use std::time::Instant;

use eframe::egui;

use crate::{config::state::GuiState, session::Session};

const ALL_COUNTRIES: &str = "All countries";
const ALL_CITIES: &str = "All cities";

pub fn draw(ui: &mut egui::Ui, session: &mut Session, gui: &mut GuiState) {
    ui.add_space(4.0);
    ui.horizontal_wrapped(|ui| {
        ui.spacing_mut().item_spacing.x = 8.0;

        let search = ui.add(
            egui::TextEdit::singleline(&mut gui.search_text)
                .hint_text("Search by name, city, country, or offering…")
                .desired_width(320.0),
        );
        if search.changed() {
            session.input_query(&gui.search_text, Instant::now());
        }

        if session.clear_visible() && ui.button("✕").on_hover_text("Clear search").clicked() {
            gui.search_text.clear();
            session.clear_search();
            logf!("UI: Search cleared");
        }

        if let Some(country) = selector(ui, "country_filter", ALL_COUNTRIES,
            &session.criteria().country, &session.facets().countries)
        {
            logf!("UI: Country → {:?}", country);
            session.select_country(country);
        }

        if let Some(city) = selector(ui, "city_filter", ALL_CITIES,
            &session.criteria().city, &session.facets().cities)
        {
            logf!("UI: City → {:?}", city);
            session.select_city(city);
        }
    });

    ui.label(session.results_count());
    ui.add_space(4.0);
}

/// Combo box over `choices` plus an "all" entry. Returns the new selection
/// only when the user changed it.
fn selector(
    ui: &mut egui::Ui,
    id: &str,
    all_label: &str,
    current: &Option<String>,
    choices: &[String],
) -> Option<Option<String>> {
    let mut picked = current.clone();

    egui::ComboBox::from_id_salt(id)
        .selected_text(current.as_deref().unwrap_or(all_label))
        .width(180.0)
        .show_ui(ui, |ui| {
            ui.selectable_value(&mut picked, None, all_label);
            for c in choices {
                ui.selectable_value(&mut picked, Some(c.clone()), c.as_str());
            }
        });

    if picked != *current { Some(picked) } else { None }
}
