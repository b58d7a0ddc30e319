use eframe::egui;
use egui_material_icons::icons::ICON_ARROW_BACK;
use tracing::debug;

use vitrine_core::{ParkView, SpeciesEntry, ViewTab};

use crate::app::VitrineApp;

use super::image_placeholder;
use super::nav::{draw_nav_bar, NavAction};

impl VitrineApp {
    pub(crate) fn draw_park(&mut self, ctx: &egui::Context) {
        match draw_nav_bar(
            ctx,
            &self.park_content.name,
            self.park.view,
            self.park.theme,
        ) {
            NavAction::Select(view) => {
                debug!("Park view: {}", view.label());
                self.park = self.park.with_view(view);
            }
            NavAction::ToggleTheme => self.park = self.park.with_theme_toggled(),
            NavAction::Exit => self.go_to_launcher(),
            NavAction::None => {}
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| match self.park.view {
                ParkView::Home => self.draw_home_view(ui),
                ParkView::Species => self.draw_species_view(ui),
            });
        });
    }

    fn draw_home_view(&mut self, ui: &mut egui::Ui) {
        ui.add_space(8.0);
        ui.heading(&self.park_content.name);
        ui.label(egui::RichText::new(&self.park_content.tagline).italics().weak());
        ui.add_space(10.0);
        for paragraph in &self.park_content.intro {
            ui.label(paragraph);
            ui.add_space(6.0);
        }

        ui.add_space(10.0);
        ui.heading("Plan your visit");
        ui.add_space(4.0);
        for link in &self.park_content.info_links {
            ui.hyperlink_to(&link.label, &link.url);
        }

        ui.add_space(14.0);
        ui.horizontal(|ui| {
            if ui.button("Browse all species").clicked() {
                self.park = self.park.with_view(ParkView::Species);
            }
            let toggle_text = if self.park.reveal {
                "Hide highlights"
            } else {
                "Show highlights"
            };
            if ui.button(toggle_text).clicked() {
                self.park = self.park.with_reveal_toggled();
            }
        });

        if self.park.reveal {
            ui.add_space(8.0);
            ui.label(egui::RichText::new("What to look out for").strong());
            ui.add_space(2.0);
            for species in &self.park_content.species {
                if ui.link(&species.name).clicked() {
                    self.park = self.park.with_view(ParkView::Species);
                }
            }
        }
    }

    fn draw_species_view(&mut self, ui: &mut egui::Ui) {
        ui.add_space(8.0);
        ui.horizontal(|ui| {
            if ui.button(format!("{ICON_ARROW_BACK} Home")).clicked() {
                self.park = self.park.with_view(ParkView::Home);
            }
            ui.heading("Species of the park");
        });
        ui.add_space(10.0);

        for species in &self.park_content.species {
            draw_species_row(ui, species);
            ui.add_space(10.0);
        }
    }
}

fn draw_species_row(ui: &mut egui::Ui, species: &SpeciesEntry) {
    egui::Frame::group(ui.style())
        .corner_radius(6.0)
        .inner_margin(egui::Margin::same(10))
        .show(ui, |ui| {
            ui.horizontal_top(|ui| {
                if let Some(image) = species.image.as_deref() {
                    image_placeholder(ui, image, egui::vec2(96.0, 72.0));
                    ui.add_space(8.0);
                }
                ui.vertical(|ui| {
                    ui.horizontal(|ui| {
                        ui.label(egui::RichText::new(&species.name).strong().size(15.0));
                        ui.label(egui::RichText::new(&species.latin).italics().weak());
                    });
                    ui.label(&species.blurb);
                    ui.add_space(4.0);
                    ui.hyperlink_to("Species fact sheet", &species.link);
                });
            });
        });
}
