use std::str::FromStr;

use crate::error::CoreError;

/// Global presentation theme.
///
/// The core only tracks the flag; swapping the actual presentation marker
/// (the egui visuals) is the app layer's theme effect.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Dark,
    Light,
}

impl Theme {
    /// The opposite theme. Toggling twice round-trips.
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Dark => Self::Light,
            Self::Light => Self::Dark,
        }
    }

    pub fn is_dark(self) -> bool {
        matches!(self, Self::Dark)
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Dark => "Dark",
            Self::Light => "Light",
        }
    }

    /// Label for the control that switches *away* from this theme:
    /// "Light Mode" while dark, "Dark Mode" while light.
    pub fn toggle_label(self) -> &'static str {
        match self {
            Self::Dark => "Light Mode",
            Self::Light => "Dark Mode",
        }
    }
}

impl Default for Theme {
    /// Both demos boot in dark mode.
    fn default() -> Self {
        Self::Dark
    }
}

impl FromStr for Theme {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "dark" => Ok(Self::Dark),
            "light" => Ok(Self::Light),
            other => Err(CoreError::UnknownTheme(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_round_trips() {
        let t = Theme::default();
        assert_eq!(t.toggled().toggled(), t);
    }

    #[test]
    fn default_is_dark() {
        assert!(Theme::default().is_dark());
        assert!(!Theme::Light.is_dark());
    }

    #[test]
    fn toggle_label_names_the_other_theme() {
        assert_eq!(Theme::Dark.toggle_label(), "Light Mode");
        assert_eq!(Theme::Light.toggle_label(), "Dark Mode");
    }

    #[test]
    fn parses_case_insensitively() {
        assert_eq!("dark".parse::<Theme>().unwrap(), Theme::Dark);
        assert_eq!(" Light ".parse::<Theme>().unwrap(), Theme::Light);
    }

    #[test]
    fn rejects_unknown_theme() {
        assert!("solarized".parse::<Theme>().is_err());
        assert!("".parse::<Theme>().is_err());
    }
}
