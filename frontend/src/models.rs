use serde::Deserialize;

/// One before/after image pair shown by a single slider.
#[derive(Deserialize, Clone, Debug, PartialEq, Eq, Hash)]
pub struct ComparisonPair {
    #[serde(rename = "beforeImage")]
    pub before_url: String,
    #[serde(rename = "afterImage")]
    pub after_url: String,
}

impl ComparisonPair {
    /// Key for the slider showing this pair at `position` in its set. Equal
    /// pairs at different positions still get separate sliders.
    pub fn view_key(&self, position: usize) -> String {
        format!("{}|{}|{}", position, self.before_url, self.after_url)
    }
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct PortfolioSection {
    pub id: String,
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub images: Vec<ComparisonPair>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pair(before: &str, after: &str) -> ComparisonPair {
        ComparisonPair {
            before_url: before.to_string(),
            after_url: after.to_string(),
        }
    }

    #[test]
    fn view_key_distinguishes_swapped_pairs() {
        assert_ne!(pair("a.jpg", "b.jpg").view_key(0), pair("b.jpg", "a.jpg").view_key(0));
        assert_eq!(pair("a.jpg", "b.jpg").view_key(0), pair("a.jpg", "b.jpg").view_key(0));
    }

    #[test]
    fn duplicate_pairs_get_separate_view_keys() {
        let images = vec![pair("a.jpg", "b.jpg"), pair("a.jpg", "b.jpg")];
        let keys: Vec<String> = images
            .iter()
            .enumerate()
            .map(|(position, pair)| pair.view_key(position))
            .collect();
        assert_ne!(keys[0], keys[1], "positions 0 and 1 share key {}", keys[0]);
    }

    #[test]
    fn pair_reads_catalog_field_names() {
        let parsed: ComparisonPair =
            serde_json::from_str(r#"{"beforeImage": "raw.jpg", "afterImage": "edit.jpg"}"#).unwrap();
        assert_eq!(parsed, pair("raw.jpg", "edit.jpg"));
    }
}
