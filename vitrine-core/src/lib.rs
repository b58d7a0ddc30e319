pub mod content;
pub mod error;
pub mod layout;
pub mod state;
pub mod theme;
pub mod view;

// Re-export primary types for convenience.
pub use content::{
    AboutBlock, ContactCard, InfoLink, ParkContent, PortfolioContent, ProjectEntry, SpeciesEntry,
    TechEntry, TimelineEntry,
};
pub use error::CoreError;
pub use state::{DemoState, ParkState, PortfolioState};
pub use theme::Theme;
pub use view::{ParkView, PortfolioView, ViewTab};

/// Convenience result type for the core crate.
pub type Result<T> = std::result::Result<T, CoreError>;
