use std::collections::HashSet;

use log::debug;

use crate::error::{Error, Result};
use crate::models::PortfolioSection;

const PORTFOLIO_JSON: &str = include_str!("../assets/portfolio.json");

/// Sections shipped with the site, in display order.
pub fn portfolio_sections() -> Result<Vec<PortfolioSection>> {
    parse_sections(PORTFOLIO_JSON)
}

pub fn parse_sections(raw: &str) -> Result<Vec<PortfolioSection>> {
    let sections: Vec<PortfolioSection> = serde_json::from_str(raw)?;

    let mut seen = HashSet::new();
    for section in &sections {
        if !seen.insert(section.id.as_str()) {
            return Err(Error::Catalog(serde::de::Error::custom(format!(
                "duplicate section id `{}`",
                section.id
            ))));
        }
    }

    debug!("Loaded {} portfolio sections", sections.len());
    Ok(sections)
}

pub fn find_section<'a>(sections: &'a [PortfolioSection], id: &str) -> Option<&'a PortfolioSection> {
    sections.iter().find(|section| section.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_catalog_parses() {
        let sections = portfolio_sections().expect("embedded catalog must parse");
        assert_eq!(sections.len(), 5);
        assert!(sections.iter().all(|s| !s.images.is_empty()));
        assert_eq!(sections[0].id, "hdr");
        assert_eq!(sections[4].images.len(), 2);
    }

    #[test]
    fn missing_tags_and_images_default_to_empty() {
        let sections = parse_sections(
            r#"[{"id": "a", "title": "A", "description": "d"}]"#,
        )
        .unwrap();
        assert!(sections[0].tags.is_empty());
        assert!(sections[0].images.is_empty());
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let raw = r#"[
            {"id": "a", "title": "A", "description": ""},
            {"id": "a", "title": "B", "description": ""}
        ]"#;
        let err = parse_sections(raw).unwrap_err();
        assert!(err.to_string().contains("duplicate section id `a`"));
    }

    #[test]
    fn find_section_by_id() {
        let sections = portfolio_sections().unwrap();
        assert_eq!(find_section(&sections, "staging").map(|s| s.title.as_str()), Some("Virtual Staging"));
        assert!(find_section(&sections, "nope").is_none());
    }
}
