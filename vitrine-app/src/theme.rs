use eframe::egui;

use vitrine_core::Theme;

use crate::app::VitrineApp;

/// Translate a demo theme flag into egui visuals.
pub(crate) fn visuals_for(theme: Theme) -> egui::Visuals {
    match theme {
        Theme::Dark => egui::Visuals::dark(),
        Theme::Light => egui::Visuals::light(),
    }
}

impl VitrineApp {
    /// Push the active theme into the egui context.
    ///
    /// Called at the top of every frame, before any panel is drawn, so a
    /// toggle recolors the whole window in the same frame it happens.
    pub(crate) fn apply_theme(&self, ctx: &egui::Context) {
        ctx.set_visuals(visuals_for(self.active_theme()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn visuals_follow_the_theme_flag() {
        assert!(visuals_for(Theme::Dark).dark_mode);
        assert!(!visuals_for(Theme::Light).dark_mode);
    }
}
