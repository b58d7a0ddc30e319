use eframe::egui;
use egui_material_icons::icons::{ICON_FOREST, ICON_PERSON};

use crate::app::VitrineApp;
use crate::app_state::AppScreen;

const TILE_CORNER_RADIUS: f32 = 4.0;
const PORTFOLIO_ACCENT: egui::Color32 = egui::Color32::from_rgb(80, 200, 255);
const PARK_ACCENT: egui::Color32 = egui::Color32::from_rgb(110, 205, 120);

enum MenuAction {
    None,
    OpenPortfolio,
    OpenPark,
}

impl VitrineApp {
    pub(crate) fn draw_launcher(&mut self, ctx: &egui::Context) {
        let portfolio_desc = format!(
            "A personal developer page\nin three views\n\nAbout Me / Projects / Contact\n\n\
             {} projects, {} technologies",
            self.portfolio_content.projects.len(),
            self.portfolio_content.tech.len(),
        );
        let park_desc = format!(
            "{}\n{}\n\nHome / Species\n\n{} species profiles",
            self.park_content.name,
            self.park_content.tagline,
            self.park_content.species.len(),
        );

        let mut action = MenuAction::None;

        egui::CentralPanel::default()
            .frame(egui::Frame::NONE.fill(egui::Color32::BLACK))
            .show(ctx, |ui| {
                let available = ui.available_size();

                let outer_margin = 32.0_f32;
                let tile_gap = 24.0_f32;
                let header_height = 80.0_f32;

                let tile_width =
                    ((available.x - outer_margin * 2.0 - tile_gap) / 2.0).clamp(220.0, 420.0);
                let tile_height = (available.y * 0.62).clamp(260.0, 460.0);

                let total_width = tile_width * 2.0 + tile_gap;
                let x_offset = (available.x - total_width).max(0.0) / 2.0;
                let y_offset = (available.y - tile_height - header_height).max(0.0) / 2.0;

                ui.add_space(y_offset);
                ui.vertical_centered(|ui| {
                    ui.heading(
                        egui::RichText::new("Vitrine")
                            .size(30.0)
                            .color(egui::Color32::from_gray(235)),
                    );
                    ui.label(
                        egui::RichText::new("Two small presentation demos. Pick one.")
                            .color(egui::Color32::from_gray(140)),
                    );
                });
                ui.add_space(24.0);

                ui.horizontal(|ui| {
                    ui.add_space(x_offset);

                    if draw_tile(
                        ui,
                        tile_width,
                        tile_height,
                        ICON_PERSON,
                        "Portfolio",
                        &portfolio_desc,
                        PORTFOLIO_ACCENT,
                    )
                    .clicked()
                    {
                        action = MenuAction::OpenPortfolio;
                    }

                    ui.add_space(tile_gap);

                    if draw_tile(
                        ui,
                        tile_width,
                        tile_height,
                        ICON_FOREST,
                        "Nature Park",
                        &park_desc,
                        PARK_ACCENT,
                    )
                    .clicked()
                    {
                        action = MenuAction::OpenPark;
                    }
                });
            });

        match action {
            MenuAction::OpenPortfolio => self.open(AppScreen::Portfolio),
            MenuAction::OpenPark => self.open(AppScreen::NaturePark),
            MenuAction::None => {}
        }
    }
}

fn draw_tile(
    ui: &mut egui::Ui,
    width: f32,
    height: f32,
    icon: &str,
    title: &str,
    details: &str,
    accent: egui::Color32,
) -> egui::Response {
    let (rect, response) = ui.allocate_exact_size(egui::vec2(width, height), egui::Sense::click());

    if ui.is_rect_visible(rect) {
        let painter = ui.painter();

        let bg = if response.hovered() {
            egui::Color32::from_rgb(32, 32, 40)
        } else {
            egui::Color32::from_rgb(20, 20, 26)
        };
        painter.rect_filled(rect, TILE_CORNER_RADIUS, bg);

        let border_color = if response.hovered() {
            egui::Color32::from_gray(70)
        } else {
            egui::Color32::from_gray(42)
        };
        painter.rect_stroke(
            rect,
            TILE_CORNER_RADIUS,
            egui::Stroke::new(0.5, border_color),
            egui::StrokeKind::Inside,
        );

        let padding = 16.0_f32;
        let inner = rect.shrink(padding);

        let preview_h = (inner.height() * 0.38).min(180.0);
        let preview_rect =
            egui::Rect::from_min_size(inner.min, egui::vec2(inner.width(), preview_h));
        painter.rect_filled(preview_rect, 3.0, egui::Color32::from_gray(28));
        painter.text(
            preview_rect.center(),
            egui::Align2::CENTER_CENTER,
            icon,
            egui::FontId::proportional(52.0),
            accent.gamma_multiply(0.8),
        );

        let title_y = preview_rect.max.y + 14.0;
        painter.text(
            egui::pos2(inner.center().x, title_y),
            egui::Align2::CENTER_TOP,
            title,
            egui::FontId::proportional(17.0),
            accent,
        );

        let details_y = title_y + 28.0;
        for (i, line) in details.lines().enumerate() {
            painter.text(
                egui::pos2(inner.center().x, details_y + i as f32 * 16.0),
                egui::Align2::CENTER_TOP,
                line,
                egui::FontId::proportional(12.0),
                egui::Color32::from_gray(150),
            );
        }
    }

    if response.hovered() {
        ui.ctx().set_cursor_icon(egui::CursorIcon::PointingHand);
    }

    response
}
