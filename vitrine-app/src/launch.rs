use std::str::FromStr;

use tracing::{info, warn};

use vitrine_core::{CoreError, Theme};

use crate::app_state::AppScreen;

/// Environment variable selecting the screen to open on ("portfolio" or "park").
pub(crate) const SCREEN_VAR: &str = "VITRINE_SCREEN";
/// Environment variable forcing the starting theme ("dark" or "light").
pub(crate) const THEME_VAR: &str = "VITRINE_THEME";

/// Session launch options read from the environment.
///
/// These exist so a script can open straight into one demo or force a theme;
/// they are read once at startup and never written back. Unset variables fall
/// back to the launcher screen and each demo's own default theme.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) struct LaunchOptions {
    pub(crate) screen: AppScreen,
    pub(crate) theme: Option<Theme>,
}

impl LaunchOptions {
    pub(crate) fn from_env() -> Self {
        let mut options = Self::default();

        if let Ok(raw) = std::env::var(SCREEN_VAR) {
            match parse_screen(&raw) {
                Ok(screen) => {
                    info!("Opening on the {} screen ({SCREEN_VAR})", screen.label());
                    options.screen = screen;
                }
                Err(e) => warn!("Ignoring {SCREEN_VAR}: {e}"),
            }
        }

        if let Ok(raw) = std::env::var(THEME_VAR) {
            match Theme::from_str(&raw) {
                Ok(theme) => {
                    info!("Forcing the {} theme ({THEME_VAR})", theme.label());
                    options.theme = Some(theme);
                }
                Err(e) => warn!("Ignoring {THEME_VAR}: {e}"),
            }
        }

        options
    }
}

fn parse_screen(raw: &str) -> vitrine_core::Result<AppScreen> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "portfolio" => Ok(AppScreen::Portfolio),
        "park" => Ok(AppScreen::NaturePark),
        _ => Err(CoreError::UnknownScreen(raw.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_known_screens_case_insensitively() {
        assert_eq!(parse_screen("portfolio").unwrap(), AppScreen::Portfolio);
        assert_eq!(parse_screen(" Park ").unwrap(), AppScreen::NaturePark);
        assert_eq!(parse_screen("PORTFOLIO").unwrap(), AppScreen::Portfolio);
    }

    #[test]
    fn rejects_unknown_screens() {
        let err = parse_screen("garden").unwrap_err();
        assert!(err.to_string().contains("garden"));
    }

    #[test]
    fn default_options_open_the_launcher() {
        let options = LaunchOptions::default();
        assert_eq!(options.screen, AppScreen::Launcher);
        assert!(options.theme.is_none());
    }
}
