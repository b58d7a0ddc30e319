use eframe::egui;
use egui_material_icons::icons::{ICON_CALL, ICON_MAIL};
use tracing::debug;

use vitrine_core::{layout, ContactCard, PortfolioView, ProjectEntry, TechEntry, ViewTab};

use crate::app::VitrineApp;

use super::image_placeholder;
use super::nav::{draw_nav_bar, NavAction};

const MIN_CARD_WIDTH: f32 = 280.0;
const CARD_GAP: f32 = 16.0;
const MAX_COLUMNS: usize = 3;
const CARD_INNER_MARGIN: i8 = 10;

impl VitrineApp {
    pub(crate) fn draw_portfolio(&mut self, ctx: &egui::Context) {
        match draw_nav_bar(
            ctx,
            &self.portfolio_content.about.name,
            self.portfolio.view,
            self.portfolio.theme,
        ) {
            NavAction::Select(view) => {
                debug!("Portfolio view: {}", view.label());
                self.portfolio = self.portfolio.with_view(view);
            }
            NavAction::ToggleTheme => self.portfolio = self.portfolio.with_theme_toggled(),
            NavAction::Exit => self.go_to_launcher(),
            NavAction::None => {}
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| match self.portfolio.view {
                PortfolioView::About => self.draw_about_view(ui),
                PortfolioView::Projects => {
                    draw_projects_view(ui, &self.portfolio_content.projects);
                }
                PortfolioView::Contact => draw_contact_view(ui, &self.portfolio_content.contact),
            });
        });
    }

    fn draw_about_view(&mut self, ui: &mut egui::Ui) {
        ui.add_space(8.0);
        ui.heading(&self.portfolio_content.about.greeting);
        ui.add_space(8.0);
        for paragraph in &self.portfolio_content.about.paragraphs {
            ui.label(paragraph);
            ui.add_space(6.0);
        }

        ui.add_space(12.0);
        ui.heading("Background");
        ui.add_space(4.0);
        egui::Grid::new("timeline")
            .num_columns(2)
            .spacing([16.0, 8.0])
            .show(ui, |ui| {
                for entry in &self.portfolio_content.timeline {
                    ui.label(
                        egui::RichText::new(entry.year.to_string())
                            .strong()
                            .monospace(),
                    );
                    ui.vertical(|ui| {
                        ui.label(egui::RichText::new(&entry.title).strong());
                        ui.label(egui::RichText::new(&entry.description).weak());
                    });
                    ui.end_row();
                }
            });

        ui.add_space(16.0);
        let toggle_text = if self.portfolio.reveal {
            "Hide tech stack"
        } else {
            "Show tech stack"
        };
        if ui.button(toggle_text).clicked() {
            self.portfolio = self.portfolio.with_reveal_toggled();
        }
        if self.portfolio.reveal {
            ui.add_space(8.0);
            draw_tech_stack(ui, &self.portfolio_content.tech);
        }
    }
}

// ---------------------------------------------------------------------------
// Projects view
// ---------------------------------------------------------------------------

fn draw_projects_view(ui: &mut egui::Ui, projects: &[ProjectEntry]) {
    ui.add_space(8.0);
    ui.heading("Projects");
    ui.add_space(2.0);
    ui.label(
        egui::RichText::new(format!("{} things I keep coming back to", projects.len())).weak(),
    );
    ui.add_space(10.0);

    // One card per project, reflowing with the window width.
    let available = ui.available_width();
    let columns = layout::columns_for_width(available, MIN_CARD_WIDTH, CARD_GAP, MAX_COLUMNS);
    let card_width = (available - CARD_GAP * (columns as f32 - 1.0)) / columns as f32;

    for row in projects.chunks(columns) {
        ui.horizontal_top(|ui| {
            ui.spacing_mut().item_spacing.x = CARD_GAP;
            for project in row {
                draw_project_card(ui, project, card_width);
            }
        });
        ui.add_space(CARD_GAP);
    }
}

fn draw_project_card(ui: &mut egui::Ui, project: &ProjectEntry, width: f32) {
    egui::Frame::group(ui.style())
        .corner_radius(6.0)
        .inner_margin(egui::Margin::same(CARD_INNER_MARGIN))
        .show(ui, |ui| {
            ui.set_width(width - 2.0 * f32::from(CARD_INNER_MARGIN));

            if let Some(image) = project.image.as_deref() {
                image_placeholder(ui, image, egui::vec2(ui.available_width(), 84.0));
                ui.add_space(6.0);
            }
            ui.label(egui::RichText::new(&project.title).strong().size(16.0));
            ui.add_space(4.0);
            ui.label(&project.description);
            ui.add_space(8.0);
            ui.horizontal_wrapped(|ui| {
                ui.spacing_mut().item_spacing = egui::vec2(6.0, 4.0);
                for tech in &project.tech {
                    tech_chip(ui, tech);
                }
            });
            ui.add_space(8.0);
            ui.hyperlink_to("View project", &project.link);
        });
}

fn tech_chip(ui: &mut egui::Ui, text: &str) {
    egui::Frame::NONE
        .fill(ui.visuals().faint_bg_color)
        .corner_radius(8.0)
        .inner_margin(egui::Margin::symmetric(8, 2))
        .show(ui, |ui| {
            ui.label(egui::RichText::new(text).size(12.0));
        });
}

// ---------------------------------------------------------------------------
// Tech stack (revealed on the About view)
// ---------------------------------------------------------------------------

fn draw_tech_stack(ui: &mut egui::Ui, tech: &[TechEntry]) {
    ui.heading("Tech I work with");
    ui.add_space(4.0);
    egui::Grid::new("tech_stack")
        .num_columns(3)
        .spacing([14.0, 6.0])
        .show(ui, |ui| {
            for entry in tech {
                logo_badge(ui, &entry.name);
                ui.label(egui::RichText::new(&entry.name).strong());
                ui.label(egui::RichText::new(&entry.logo).weak().small());
                ui.end_row();
            }
        });
}

/// Stand-in for the logo asset: a small tile with the tech's initial.
fn logo_badge(ui: &mut egui::Ui, name: &str) {
    let (rect, _) = ui.allocate_exact_size(egui::vec2(22.0, 22.0), egui::Sense::hover());
    if ui.is_rect_visible(rect) {
        let painter = ui.painter();
        painter.rect_filled(rect, 4.0, ui.visuals().faint_bg_color);
        let initial = name.chars().next().unwrap_or('?');
        painter.text(
            rect.center(),
            egui::Align2::CENTER_CENTER,
            initial,
            egui::FontId::proportional(13.0),
            ui.visuals().strong_text_color(),
        );
    }
}

// ---------------------------------------------------------------------------
// Contact view
// ---------------------------------------------------------------------------

fn draw_contact_view(ui: &mut egui::Ui, contact: &ContactCard) {
    ui.add_space(8.0);
    ui.heading("Contact");
    ui.add_space(4.0);
    ui.label("No form, no tracker. Write or call:");
    ui.add_space(10.0);

    egui::Grid::new("contact")
        .num_columns(2)
        .spacing([10.0, 8.0])
        .show(ui, |ui| {
            ui.label(egui::RichText::new(ICON_MAIL).size(16.0));
            ui.hyperlink_to(&contact.email, format!("mailto:{}", contact.email));
            ui.end_row();
            ui.label(egui::RichText::new(ICON_CALL).size(16.0));
            ui.label(&contact.phone);
            ui.end_row();
        });
}
