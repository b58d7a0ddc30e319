use eframe::egui;

use vitrine_core::{ParkView, PortfolioView, ViewTab};

use crate::app::VitrineApp;
use crate::app_state::AppScreen;

impl VitrineApp {
    /// Global keyboard shortcuts.
    ///
    /// Escape unwinds one layer at a time: open windows first, then the
    /// park's species page back to home, then the demo back to the launcher.
    pub(crate) fn handle_keyboard(&mut self, ctx: &egui::Context) {
        // When a text widget has focus, suppress single-letter shortcuts so
        // the user can type freely without flipping themes or views.
        let text_editing = ctx.memory(|m| m.focused().is_some());

        ctx.input(|input| {
            if input.key_pressed(egui::Key::Escape) {
                if self.show_about {
                    self.show_about = false;
                } else if self.show_help {
                    self.show_help = false;
                } else if self.screen == AppScreen::NaturePark
                    && self.park.view == ParkView::Species
                {
                    self.park = self.park.with_view(ParkView::Home);
                } else if self.screen != AppScreen::Launcher {
                    self.go_to_launcher();
                }
            }

            if text_editing {
                return; // Skip letter-key shortcuts while typing.
            }

            // H: shortcut overlay
            if input.key_pressed(egui::Key::H) {
                self.show_help = !self.show_help;
            }

            // D: dark/light toggle, T: reveal toggle (active demo only)
            if input.key_pressed(egui::Key::D) {
                self.toggle_active_theme();
            }
            if input.key_pressed(egui::Key::T) {
                self.toggle_active_reveal();
            }

            // 1..: jump straight to a view of the active demo
            match self.screen {
                AppScreen::Launcher => {}
                AppScreen::Portfolio => {
                    if let Some(view) = view_for_digit::<PortfolioView>(input) {
                        self.portfolio = self.portfolio.with_view(view);
                    }
                }
                AppScreen::NaturePark => {
                    if let Some(view) = view_for_digit::<ParkView>(input) {
                        self.park = self.park.with_view(view);
                    }
                }
            }
        });
    }
}

/// Map number keys onto view tabs: 1 selects the first view, 2 the second...
fn view_for_digit<V: ViewTab>(input: &egui::InputState) -> Option<V> {
    const DIGITS: [egui::Key; 3] = [egui::Key::Num1, egui::Key::Num2, egui::Key::Num3];
    for (i, &view) in V::ALL.iter().enumerate() {
        if i < DIGITS.len() && input.key_pressed(DIGITS[i]) {
            return Some(view);
        }
    }
    None
}
