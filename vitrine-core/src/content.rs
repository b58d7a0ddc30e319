//! Static content records for both demos.
//!
//! The content ships inside the crate as JSON (one pack per demo), is parsed
//! exactly once at startup, and is never mutated afterwards. Required fields
//! are enforced by serde; the only optional data are image references, which
//! the renderer omits conditionally.

use serde::Deserialize;
use tracing::debug;

use crate::error::CoreError;

const PORTFOLIO_JSON: &str = include_str!("../content/portfolio.json");
const PARK_JSON: &str = include_str!("../content/park.json");

// ---------------------------------------------------------------------------
// Portfolio records
// ---------------------------------------------------------------------------

/// One project card: title, blurb, ordered tech list, link, optional image.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ProjectEntry {
    pub title: String,
    pub description: String,
    /// Ordered tech chips rendered on the card, source order preserved.
    pub tech: Vec<String>,
    pub link: String,
    /// Image reference; cards without one render text-only.
    #[serde(default)]
    pub image: Option<String>,
}

/// One milestone on the About view's timeline.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TimelineEntry {
    pub year: u16,
    pub title: String,
    pub description: String,
}

/// One entry of the reveal-gated tech-stack grid.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TechEntry {
    pub name: String,
    /// Logo reference, rendered as a placeholder chip (no raster assets).
    pub logo: String,
}

/// Greeting and bio paragraphs for the About view.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AboutBlock {
    pub name: String,
    pub greeting: String,
    pub paragraphs: Vec<String>,
}

/// Contact view copy.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ContactCard {
    pub email: String,
    pub phone: String,
}

/// Everything the portfolio demo renders.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PortfolioContent {
    pub about: AboutBlock,
    pub projects: Vec<ProjectEntry>,
    pub timeline: Vec<TimelineEntry>,
    pub tech: Vec<TechEntry>,
    pub contact: ContactCard,
}

impl PortfolioContent {
    /// Parse the embedded portfolio pack. Called once at startup.
    pub fn load() -> crate::Result<Self> {
        let content: Self = serde_json::from_str(PORTFOLIO_JSON).map_err(|source| {
            CoreError::Content {
                pack: "portfolio",
                source,
            }
        })?;
        debug!(
            projects = content.projects.len(),
            timeline = content.timeline.len(),
            tech = content.tech.len(),
            "Loaded portfolio content"
        );
        Ok(content)
    }
}

// ---------------------------------------------------------------------------
// Nature-park records
// ---------------------------------------------------------------------------

/// One species record on the Species view.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SpeciesEntry {
    pub name: String,
    pub latin: String,
    pub blurb: String,
    /// Photo reference; entries without one render text-only.
    #[serde(default)]
    pub image: Option<String>,
    pub link: String,
}

/// A labelled external link shown on the park's Home view.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct InfoLink {
    pub label: String,
    pub url: String,
}

/// Everything the nature-park demo renders.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ParkContent {
    pub name: String,
    pub tagline: String,
    pub intro: Vec<String>,
    pub species: Vec<SpeciesEntry>,
    pub info_links: Vec<InfoLink>,
}

impl ParkContent {
    /// Parse the embedded park pack. Called once at startup.
    pub fn load() -> crate::Result<Self> {
        let content: Self =
            serde_json::from_str(PARK_JSON).map_err(|source| CoreError::Content {
                pack: "park",
                source,
            })?;
        debug!(
            species = content.species.len(),
            links = content.info_links.len(),
            "Loaded park content"
        );
        Ok(content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn portfolio_pack_parses() {
        let c = PortfolioContent::load().expect("embedded portfolio pack must parse");
        assert!(!c.projects.is_empty());
        assert!(!c.timeline.is_empty());
        assert!(!c.tech.is_empty());
        assert!(!c.about.paragraphs.is_empty());
    }

    #[test]
    fn park_pack_parses() {
        let c = ParkContent::load().expect("embedded park pack must parse");
        assert!(!c.species.is_empty());
        assert!(!c.info_links.is_empty());
        assert!(!c.intro.is_empty());
    }

    #[test]
    fn project_order_is_source_order() {
        let c = PortfolioContent::load().unwrap();
        // First and last cards pinned so a reordering regression is caught.
        assert_eq!(c.projects.first().unwrap().title, "Ferrite Notes");
        assert_eq!(c.projects.last().unwrap().title, "Pixel Garden");
    }

    #[test]
    fn optional_images_cover_both_cases() {
        let c = PortfolioContent::load().unwrap();
        assert!(c.projects.iter().any(|p| p.image.is_some()));
        assert!(c.projects.iter().any(|p| p.image.is_none()));

        let k = ParkContent::load().unwrap();
        assert!(k.species.iter().any(|s| s.image.is_some()));
        assert!(k.species.iter().any(|s| s.image.is_none()));
    }

    #[test]
    fn tech_entries_carry_name_and_logo_in_order() {
        let c = PortfolioContent::load().unwrap();
        for t in &c.tech {
            assert!(!t.name.is_empty());
            assert!(!t.logo.is_empty());
        }
        assert_eq!(c.tech.first().unwrap().name, "Rust");
    }

    #[test]
    fn timeline_years_ascend() {
        let c = PortfolioContent::load().unwrap();
        let years: Vec<u16> = c.timeline.iter().map(|t| t.year).collect();
        let mut sorted = years.clone();
        sorted.sort_unstable();
        assert_eq!(years, sorted);
    }

    #[test]
    fn missing_required_field_is_a_content_error() {
        let broken = r#"{ "title": "X", "tech": [], "link": "https://example.org" }"#;
        let parsed: Result<ProjectEntry, _> = serde_json::from_str(broken);
        assert!(parsed.is_err(), "description is required");
    }
}
