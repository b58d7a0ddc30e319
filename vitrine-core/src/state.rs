use crate::theme::Theme;
use crate::view::{ParkView, PortfolioView, ViewTab};

/// Complete UI state of one demo.
///
/// Created once with defaults when the demo opens and replaced only through
/// the pure transitions below; the render pass is a function of this struct
/// plus the immutable content. Nothing here is ever persisted; a fresh
/// session starts from `default()` again.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DemoState<V: ViewTab> {
    /// The active view. Always a member of `V::ALL`.
    pub view: V,
    /// Dark/light flag backing the global presentation marker.
    pub theme: Theme,
    /// Reveal toggle: gates the demo's auxiliary block (tech stack on the
    /// portfolio's About view, species quick links on the park's Home view)
    /// without changing the active view.
    pub reveal: bool,
}

/// State of the portfolio demo (About Me / Projects / Contact).
pub type PortfolioState = DemoState<PortfolioView>;

/// State of the nature-park demo (Home / Species).
pub type ParkState = DemoState<ParkView>;

impl<V: ViewTab + Default> Default for DemoState<V> {
    fn default() -> Self {
        Self {
            view: V::default(),
            theme: Theme::default(),
            reveal: false,
        }
    }
}

impl<V: ViewTab> DemoState<V> {
    /// Navigate to `view`, leaving theme and reveal flag untouched.
    #[must_use]
    pub fn with_view(self, view: V) -> Self {
        Self { view, ..self }
    }

    /// Flip the dark/light flag. Applying twice returns the original state.
    #[must_use]
    pub fn with_theme_toggled(self) -> Self {
        Self {
            theme: self.theme.toggled(),
            ..self
        }
    }

    /// Start from a specific theme (session launch option).
    #[must_use]
    pub fn with_theme(self, theme: Theme) -> Self {
        Self { theme, ..self }
    }

    /// Flip the reveal toggle. Applying twice returns the original state.
    #[must_use]
    pub fn with_reveal_toggled(self) -> Self {
        Self {
            reveal: !self.reveal,
            ..self
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_sessions_start_on_the_landing_view_in_dark() {
        let p = PortfolioState::default();
        assert_eq!(p.view, PortfolioView::Projects);
        assert_eq!(p.theme, Theme::Dark);
        assert!(!p.reveal);

        let k = ParkState::default();
        assert_eq!(k.view, ParkView::Home);
        assert_eq!(k.theme, Theme::Dark);
        assert!(!k.reveal);
    }

    #[test]
    fn with_view_reaches_every_member_and_changes_nothing_else() {
        let base = PortfolioState::default().with_reveal_toggled();
        for &v in PortfolioView::ALL {
            let next = base.with_view(v);
            assert_eq!(next.view, v);
            assert_eq!(next.theme, base.theme);
            assert_eq!(next.reveal, base.reveal);
        }
    }

    #[test]
    fn theme_toggle_round_trips() {
        let s = PortfolioState::default();
        assert_eq!(s.with_theme_toggled().with_theme_toggled(), s);
        assert_eq!(s.with_theme_toggled().theme, Theme::Light);
    }

    #[test]
    fn reveal_toggle_round_trips() {
        let s = ParkState::default();
        assert!(s.with_reveal_toggled().reveal);
        assert_eq!(s.with_reveal_toggled().with_reveal_toggled(), s);
    }

    #[test]
    fn species_and_back_returns_home() {
        let s = ParkState::default();
        let there = s.with_view(ParkView::Species);
        assert_eq!(there.view, ParkView::Species);
        let back = there.with_view(ParkView::Home);
        assert_eq!(back, s);
    }
}
