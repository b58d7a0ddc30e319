use vitrine_core::{
    layout, ParkContent, ParkState, ParkView, PortfolioContent, PortfolioState, PortfolioView,
    Theme, ViewTab,
};

#[test]
fn end_to_end_portfolio_session() {
    let content = PortfolioContent::load().expect("embedded portfolio content must parse");

    // A fresh session opens on the project wall, in dark mode, stack hidden.
    let state = PortfolioState::default();
    assert_eq!(state.view, PortfolioView::Projects);
    assert_eq!(state.theme, Theme::Dark);
    assert!(!state.reveal);

    // The wall shows one card per authored project, whatever the window width.
    for width in [320.0, 700.0, 1280.0] {
        let columns = layout::columns_for_width(width, 280.0, 16.0, 3);
        let rows = layout::rows_for(content.projects.len(), columns);
        assert!(
            rows * columns >= content.projects.len(),
            "grid at width {width} must hold every card"
        );
    }

    // Visit every view; only the view field moves.
    let mut state = state;
    for &view in PortfolioView::ALL {
        state = state.with_view(view);
        assert_eq!(state.view, view);
        assert_eq!(state.theme, Theme::Dark);
        assert!(!state.reveal);
    }

    // Reveal the tech stack on the about page, flip the theme, and come back.
    let state = state
        .with_view(PortfolioView::About)
        .with_reveal_toggled()
        .with_theme_toggled();
    assert_eq!(state.theme, Theme::Light);
    assert!(state.reveal);

    let state = state.with_theme_toggled().with_reveal_toggled();
    assert_eq!(state.theme, Theme::Dark);
    assert!(!state.reveal);
}

#[test]
fn end_to_end_park_session() {
    let content = ParkContent::load().expect("embedded park content must parse");
    assert!(!content.species.is_empty());
    assert!(!content.info_links.is_empty());

    // Home, then the species page, then back: a round trip lands on home.
    let home = ParkState::default();
    assert_eq!(home.view, ParkView::Home);

    let away = home.with_view(ParkView::Species);
    assert_eq!(away.view, ParkView::Species);

    let back = away.with_view(ParkView::Home);
    assert_eq!(back, home, "home -> species -> home must restore the state");
}

#[test]
fn theme_toggle_is_an_involution_for_both_demos() {
    let p = PortfolioState::default().with_view(PortfolioView::Contact);
    assert_eq!(p.with_theme_toggled().with_theme_toggled(), p);

    let k = ParkState::default().with_view(ParkView::Species);
    assert_eq!(k.with_theme_toggled().with_theme_toggled(), k);
}

#[test]
fn every_view_is_reachable_from_every_other() {
    for &from in PortfolioView::ALL {
        for &to in PortfolioView::ALL {
            let state = PortfolioState::default().with_view(from).with_view(to);
            assert_eq!(state.view, to);
        }
    }
    for &from in ParkView::ALL {
        for &to in ParkView::ALL {
            let state = ParkState::default().with_view(from).with_view(to);
            assert_eq!(state.view, to);
        }
    }
}

#[test]
fn tech_stack_keeps_its_authored_order() {
    let content = PortfolioContent::load().expect("embedded portfolio content must parse");

    let names: Vec<&str> = content.tech.iter().map(|t| t.name.as_str()).collect();
    assert_eq!(&names[..3], ["Rust", "TypeScript", "React"]);

    // Every entry pairs a name with its logo asset.
    for entry in &content.tech {
        assert!(!entry.name.is_empty());
        assert!(!entry.logo.is_empty(), "{} is missing a logo", entry.name);
    }
}

#[test]
fn launch_theme_overrides_only_the_theme() {
    let state = PortfolioState::default().with_theme(Theme::Light);
    assert_eq!(state.theme, Theme::Light);
    assert_eq!(state.view, PortfolioView::Projects);
    assert!(!state.reveal);
}
