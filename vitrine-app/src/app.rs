use eframe::egui;
use tracing::{debug, info};

use vitrine_core::{ParkContent, ParkState, PortfolioContent, PortfolioState, Theme};

use crate::app_state::AppScreen;
use crate::launch::LaunchOptions;

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

pub(crate) const WINDOW_WIDTH: f32 = 1100.0;
pub(crate) const WINDOW_HEIGHT: f32 = 760.0;

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

pub(crate) struct VitrineApp {
    /// Top-level screen being displayed.
    pub(crate) screen: AppScreen,

    /// Portfolio demo state. Survives a trip through the launcher so the
    /// demo reopens exactly where it was left within the session.
    pub(crate) portfolio: PortfolioState,
    /// Nature-park demo state.
    pub(crate) park: ParkState,

    /// Authored portfolio content, parsed once at startup and never mutated.
    pub(crate) portfolio_content: PortfolioContent,
    /// Authored park content.
    pub(crate) park_content: ParkContent,

    /// Shortcut overlay visibility.
    pub(crate) show_help: bool,
    /// About window visibility.
    pub(crate) show_about: bool,
}

impl VitrineApp {
    pub(crate) fn new(
        launch: LaunchOptions,
        portfolio_content: PortfolioContent,
        park_content: ParkContent,
    ) -> Self {
        let mut portfolio = PortfolioState::default();
        let mut park = ParkState::default();
        if let Some(theme) = launch.theme {
            portfolio = portfolio.with_theme(theme);
            park = park.with_theme(theme);
        }

        Self {
            screen: launch.screen,
            portfolio,
            park,
            portfolio_content,
            park_content,
            show_help: false,
            show_about: false,
        }
    }

    /// Theme that should drive the visuals this frame. The launcher is not a
    /// demo and always renders dark, like a cinema lobby.
    pub(crate) fn active_theme(&self) -> Theme {
        match self.screen {
            AppScreen::Launcher => Theme::Dark,
            AppScreen::Portfolio => self.portfolio.theme,
            AppScreen::NaturePark => self.park.theme,
        }
    }

    /// Flip dark/light on whichever demo is active. No-op on the launcher.
    pub(crate) fn toggle_active_theme(&mut self) {
        match self.screen {
            AppScreen::Portfolio => self.portfolio = self.portfolio.with_theme_toggled(),
            AppScreen::NaturePark => self.park = self.park.with_theme_toggled(),
            AppScreen::Launcher => {}
        }
    }

    /// Flip the active demo's reveal toggle (tech stack / species highlights).
    pub(crate) fn toggle_active_reveal(&mut self) {
        match self.screen {
            AppScreen::Portfolio => self.portfolio = self.portfolio.with_reveal_toggled(),
            AppScreen::NaturePark => self.park = self.park.with_reveal_toggled(),
            AppScreen::Launcher => {}
        }
    }

    pub(crate) fn open(&mut self, screen: AppScreen) {
        info!("Entering {}", screen.label());
        self.screen = screen;
    }

    pub(crate) fn go_to_launcher(&mut self) {
        debug!("Back to the launcher from {}", self.screen.label());
        self.screen = AppScreen::Launcher;
    }
}

impl eframe::App for VitrineApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.apply_theme(ctx);
        self.draw_menu_bar(ctx);

        match self.screen {
            AppScreen::Launcher => self.draw_launcher(ctx),
            AppScreen::Portfolio => self.draw_portfolio(ctx),
            AppScreen::NaturePark => self.draw_park(ctx),
        }

        self.show_help_window(ctx);
        self.draw_about_window(ctx);

        // Handle keyboard input (global).
        self.handle_keyboard(ctx);
    }
}

// ---------------------------------------------------------------------------
// Entry point
// ---------------------------------------------------------------------------

pub(crate) fn run() -> eframe::Result {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    info!("Starting Vitrine");

    let launch = LaunchOptions::from_env();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Vitrine")
            .with_inner_size([WINDOW_WIDTH, WINDOW_HEIGHT]),
        ..Default::default()
    };

    eframe::run_native(
        "Vitrine",
        options,
        Box::new(move |cc| {
            egui_material_icons::initialize(&cc.egui_ctx);
            let portfolio_content = PortfolioContent::load()?;
            let park_content = ParkContent::load()?;
            Ok(Box::new(VitrineApp::new(
                launch,
                portfolio_content,
                park_content,
            )))
        }),
    )
}
