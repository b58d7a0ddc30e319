//! Closed view sets for the two demos.
//!
//! Each demo's navigation ranges over a small closed enum; selecting a view
//! cannot fail and exactly one view is active at a time. The render pass
//! `match`es exhaustively on the active view, so no two content blocks can
//! be produced in the same frame.

/// Trait implemented by each demo's view enum.
///
/// Designed for static dispatch: the nav bar and keyboard handling are
/// generic over `V: ViewTab` rather than using `dyn`, so each demo keeps its
/// own concrete view type end to end.
pub trait ViewTab: Copy + Eq + Sized + 'static {
    /// Every member of the closed set, in navigation order.
    const ALL: &'static [Self];

    /// The label shown on this view's navigation button.
    fn label(self) -> &'static str;
}

// ---------------------------------------------------------------------------
// Portfolio demo
// ---------------------------------------------------------------------------

/// Top-level views of the portfolio demo.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PortfolioView {
    About,
    Projects,
    Contact,
}

impl ViewTab for PortfolioView {
    const ALL: &'static [Self] = &[Self::About, Self::Projects, Self::Contact];

    fn label(self) -> &'static str {
        match self {
            Self::About => "About Me",
            Self::Projects => "Projects",
            Self::Contact => "Contact",
        }
    }
}

impl Default for PortfolioView {
    /// The demo opens on the project wall, not the about page.
    fn default() -> Self {
        Self::Projects
    }
}

// ---------------------------------------------------------------------------
// Nature-park demo
// ---------------------------------------------------------------------------

/// Top-level views of the nature-park demo.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParkView {
    Home,
    Species,
}

impl ViewTab for ParkView {
    const ALL: &'static [Self] = &[Self::Home, Self::Species];

    fn label(self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::Species => "Species",
        }
    }
}

impl Default for ParkView {
    fn default() -> Self {
        Self::Home
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Exhaustiveness guards: adding a variant without listing it in ALL
    // breaks these matches at compile time.
    fn assert_listed_portfolio(v: PortfolioView) {
        match v {
            PortfolioView::About | PortfolioView::Projects | PortfolioView::Contact => {}
        }
    }

    fn assert_listed_park(v: ParkView) {
        match v {
            ParkView::Home | ParkView::Species => {}
        }
    }

    #[test]
    fn all_covers_every_portfolio_view() {
        assert_eq!(PortfolioView::ALL.len(), 3);
        for &v in PortfolioView::ALL {
            assert_listed_portfolio(v);
        }
    }

    #[test]
    fn all_covers_every_park_view() {
        assert_eq!(ParkView::ALL.len(), 2);
        for &v in ParkView::ALL {
            assert_listed_park(v);
        }
    }

    #[test]
    fn labels_are_unique_and_non_empty() {
        for &v in PortfolioView::ALL {
            assert!(!v.label().is_empty());
        }
        let labels: Vec<_> = PortfolioView::ALL.iter().map(|v| v.label()).collect();
        let mut dedup = labels.clone();
        dedup.dedup();
        assert_eq!(labels, dedup);
    }

    #[test]
    fn defaults_belong_to_all() {
        assert!(PortfolioView::ALL.contains(&PortfolioView::default()));
        assert!(ParkView::ALL.contains(&ParkView::default()));
        assert_eq!(PortfolioView::default(), PortfolioView::Projects);
        assert_eq!(ParkView::default(), ParkView::Home);
    }
}
