// src/gui/components/status.rs
//
// Whole-window states shown instead of the browser: loading, failed, empty.

use eframe::egui::{self, RichText};

use crate::config::consts::{EMPTY_DATASET_MSG, LOAD_FAILED_MSG};

pub fn loading(ui: &mut egui::Ui, status: &str) {
    ui.vertical_centered(|ui| {
        ui.add_space(ui.available_height() * 0.35);
        ui.spinner();
        ui.label(status);
    });
}

pub fn failed(ui: &mut egui::Ui, cause: &str) {
    ui.vertical_centered(|ui| {
        ui.add_space(ui.available_height() * 0.3);
        ui.heading("Error");
        ui.label(LOAD_FAILED_MSG);
        ui.add_space(6.0);
        ui.label(RichText::new(cause).weak().small());
    });
}

pub fn empty(ui: &mut egui::Ui) {
    ui.vertical_centered(|ui| {
        ui.add_space(ui.available_height() * 0.3);
        ui.heading("Error");
        ui.label(EMPTY_DATASET_MSG);
    });
}
