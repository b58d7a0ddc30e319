use eframe::egui;

use crate::app::VitrineApp;

impl VitrineApp {
    pub(crate) fn show_help_window(&mut self, ctx: &egui::Context) {
        if !self.show_help {
            return;
        }

        let mut open = true;
        egui::Window::new("Keyboard Shortcuts")
            .open(&mut open)
            .resizable(false)
            .default_width(330.0)
            .show(ctx, |ui| {
                egui::Grid::new("help_keys")
                    .num_columns(2)
                    .spacing([12.0, 2.0])
                    .show(ui, |ui| {
                        let keys: &[(&str, &str)] = &[
                            ("1 / 2 / 3", "Jump to a view of the open demo"),
                            ("D", "Toggle dark / light mode"),
                            ("T", "Show or hide the demo's extra block"),
                            ("H", "This window"),
                            ("Esc", "Close windows / back to home / launcher"),
                        ];
                        for &(k, d) in keys {
                            ui.label(egui::RichText::new(k).strong());
                            ui.label(d);
                            ui.end_row();
                        }
                    });

                ui.add_space(8.0);
                ui.label(
                    egui::RichText::new(
                        "The extra block is the tech stack on the portfolio's About \
                         page, and the species highlights on the park's home page.",
                    )
                    .small()
                    .weak(),
                );
            });

        if !open {
            self.show_help = false;
        }
    }
}
