use eframe::egui;

use crate::app::VitrineApp;
use crate::app_state::AppScreen;

impl VitrineApp {
    /// Top menu bar, present on every screen. Has to run before the
    /// `CentralPanel` of the active screen so it gets its vertical space.
    pub(crate) fn draw_menu_bar(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::MenuBar::new().ui(ui, |ui| {
                self.menu_file(ui, ctx);
                self.menu_view(ui);
                self.menu_help(ui);
            });
        });
    }

    fn menu_file(&mut self, ui: &mut egui::Ui, ctx: &egui::Context) {
        ui.menu_button("File", |ui| {
            if self.screen != AppScreen::Launcher {
                if ui.add(shortcut_item("Launcher", "Esc")).clicked() {
                    ui.close();
                    self.go_to_launcher();
                }
                ui.separator();
            }
            if ui
                .add_enabled(
                    self.screen != AppScreen::Portfolio,
                    egui::Button::new("Open Portfolio"),
                )
                .clicked()
            {
                ui.close();
                self.open(AppScreen::Portfolio);
            }
            if ui
                .add_enabled(
                    self.screen != AppScreen::NaturePark,
                    egui::Button::new("Open Nature Park"),
                )
                .clicked()
            {
                ui.close();
                self.open(AppScreen::NaturePark);
            }
            ui.separator();
            if ui.button("Quit").clicked() {
                ui.close();
                ctx.send_viewport_cmd(egui::ViewportCommand::Close);
            }
        });
    }

    fn menu_view(&mut self, ui: &mut egui::Ui) {
        let in_demo = self.screen != AppScreen::Launcher;

        ui.menu_button("View", |ui| {
            if ui
                .add_enabled(
                    in_demo,
                    shortcut_item(self.active_theme().toggle_label(), "D"),
                )
                .clicked()
            {
                ui.close();
                self.toggle_active_theme();
            }

            let (reveal_on, reveal_what) = match self.screen {
                AppScreen::Portfolio => (self.portfolio.reveal, "Tech Stack"),
                AppScreen::NaturePark => (self.park.reveal, "Highlights"),
                AppScreen::Launcher => (false, "Extras"),
            };
            let reveal_label = if reveal_on {
                format!("Hide {reveal_what}")
            } else {
                format!("Show {reveal_what}")
            };
            if ui
                .add_enabled(in_demo, shortcut_item(&reveal_label, "T"))
                .clicked()
            {
                ui.close();
                self.toggle_active_reveal();
            }
        });
    }

    fn menu_help(&mut self, ui: &mut egui::Ui) {
        ui.menu_button("Help", |ui| {
            if ui.add(shortcut_item("Keyboard Shortcuts", "H")).clicked() {
                ui.close();
                self.show_help = true;
            }
            ui.separator();
            if ui.button("About Vitrine").clicked() {
                ui.close();
                self.show_about = true;
            }
        });
    }

    pub(crate) fn draw_about_window(&mut self, ctx: &egui::Context) {
        if !self.show_about {
            return;
        }
        let mut open = true;
        egui::Window::new("About Vitrine")
            .open(&mut open)
            .resizable(false)
            .collapsible(false)
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .show(ctx, |ui| {
                ui.vertical_centered(|ui| {
                    ui.add_space(4.0);
                    ui.heading(
                        egui::RichText::new("Vitrine")
                            .strong()
                            .color(egui::Color32::from_rgb(80, 200, 255)),
                    );
                    ui.add_space(4.0);
                    ui.label("A pair of small presentation demos written in Rust.");
                    ui.add_space(8.0);
                    ui.label(
                        egui::RichText::new("github.com/vitrine-demos/Vitrine")
                            .small()
                            .color(egui::Color32::from_rgb(160, 160, 160)),
                    );
                    ui.add_space(4.0);
                });
            });
        if !open {
            self.show_about = false;
        }
    }
}

/// Menu entry carrying its keyboard shortcut after the label.
fn shortcut_item(label: &str, shortcut: &str) -> egui::Button<'static> {
    let text = format!("{label}      {shortcut}");
    egui::Button::new(egui::RichText::new(text).size(13.0)).wrap_mode(egui::TextWrapMode::Extend)
}
