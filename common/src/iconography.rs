//! Iconography resources as returned by the advanced search endpoint.

use serde::{Deserialize, Serialize};

/// A person or organisation credited on a resource.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActorItemLite {
    pub id_uuid: String,
    pub entry_name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FileNameItem {
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IconographyItemLite {
    pub id_uuid: String,
    #[serde(default)]
    pub iiif_url: Option<String>,
    #[serde(default)]
    pub title: Vec<String>,
    /// Always a range, `[start, end]`, when known.
    #[serde(default)]
    pub date: Option<Vec<i32>>,
    #[serde(default)]
    pub authors: Vec<ActorItemLite>,
    #[serde(default)]
    pub thumbnail: Vec<FileNameItem>,
}

impl IconographyItemLite {
    pub fn main_title(&self) -> &str {
        self.title.first().map(String::as_str).unwrap_or("Sans titre")
    }

    /// `1860`, `1860-1900` or an empty string when the date is unknown.
    pub fn display_date(&self) -> String {
        match self.date.as_deref() {
            Some([start, end]) if start == end => start.to_string(),
            Some([start, end]) => format!("{start}-{end}"),
            Some([year]) => year.to_string(),
            _ => String::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn reads_lite_items_with_missing_fields() {
        let item: IconographyItemLite = serde_json::from_value(json!({
            "id_uuid": "qr1",
            "title": ["La Bourse"],
            "date": [1860, 1900],
            "authors": [{ "id_uuid": "a1", "entry_name": "Eugène Atget" }],
        }))
        .unwrap();
        assert_eq!(item.main_title(), "La Bourse");
        assert_eq!(item.display_date(), "1860-1900");
        assert!(item.thumbnail.is_empty());
    }

    #[test]
    fn display_date_variants() {
        let mut item: IconographyItemLite = serde_json::from_value(json!({ "id_uuid": "qr2" })).unwrap();
        assert_eq!(item.display_date(), "");
        assert_eq!(item.main_title(), "Sans titre");
        item.date = Some(vec![1850, 1850]);
        assert_eq!(item.display_date(), "1850");
    }
}
