/// Top-level screen the application is currently displaying.
///
/// Used to dispatch `update()` to the right screen-drawing logic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum AppScreen {
    /// Demo chooser shown at startup.
    Launcher,
    /// The personal portfolio demo (About Me / Projects / Contact).
    Portfolio,
    /// The nature-park demo (Home / Species).
    NaturePark,
}

impl Default for AppScreen {
    fn default() -> Self {
        Self::Launcher
    }
}

impl AppScreen {
    pub(crate) fn label(self) -> &'static str {
        match self {
            Self::Launcher => "Launcher",
            Self::Portfolio => "Portfolio",
            Self::NaturePark => "Nature Park",
        }
    }
}
