use eframe::egui;

mod help;
mod launcher;
mod menu_bar;
mod nav;
mod park;
mod portfolio;

/// Stand-in for a static image asset: a flat box captioned with the asset
/// name. The demos ship no image decoder, so this is what "an image goes
/// here" looks like everywhere.
pub(crate) fn image_placeholder(ui: &mut egui::Ui, caption: &str, size: egui::Vec2) {
    let (rect, _) = ui.allocate_exact_size(size, egui::Sense::hover());
    if ui.is_rect_visible(rect) {
        let painter = ui.painter();
        painter.rect_filled(rect, 4.0, ui.visuals().extreme_bg_color);
        painter.text(
            rect.center(),
            egui::Align2::CENTER_CENTER,
            caption,
            egui::FontId::proportional(11.0),
            ui.visuals().weak_text_color(),
        );
    }
}
