use eframe::egui;
use egui_material_icons::icons::{ICON_APPS, ICON_DARK_MODE, ICON_LIGHT_MODE};

use vitrine_core::{Theme, ViewTab};

/// What the user did in the navigation bar this frame.
///
/// Collected while drawing and applied by the caller afterwards, so the demo
/// state changes in exactly one place per frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum NavAction<V> {
    None,
    Select(V),
    ToggleTheme,
    Exit,
}

/// Navigation bar shared by both demos: launcher button, demo title, one
/// selectable label per view, and the dark/light toggle on the right.
pub(crate) fn draw_nav_bar<V: ViewTab>(
    ctx: &egui::Context,
    title: &str,
    active: V,
    theme: Theme,
) -> NavAction<V> {
    let mut action = NavAction::None;

    egui::TopBottomPanel::top("demo_nav").show(ctx, |ui| {
        ui.add_space(2.0);
        ui.horizontal(|ui| {
            if ui
                .add(egui::Button::new(egui::RichText::new(ICON_APPS).size(16.0)).frame(false))
                .on_hover_text("Back to the launcher (Esc)")
                .clicked()
            {
                action = NavAction::Exit;
            }
            ui.separator();
            ui.label(egui::RichText::new(title).strong().size(15.0));
            ui.separator();

            for &view in V::ALL {
                if ui.selectable_label(view == active, view.label()).clicked() {
                    action = NavAction::Select(view);
                }
            }

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                let icon = match theme {
                    Theme::Dark => ICON_LIGHT_MODE,
                    Theme::Light => ICON_DARK_MODE,
                };
                let text = format!("{icon} {}", theme.toggle_label());
                if ui
                    .add(egui::Button::new(egui::RichText::new(text).size(13.0)))
                    .on_hover_text("Toggle dark / light mode (D)")
                    .clicked()
                {
                    action = NavAction::ToggleTheme;
                }
            });
        });
        ui.add_space(2.0);
    });

    action
}
