use anyhow::{Result, bail};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;
use url::Url;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Productive,
    Unproductive,
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Productive => f.write_str("productive"),
            Self::Unproductive => f.write_str("unproductive"),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WebsiteRecord {
    pub id: u32,
    pub url: String,
    pub category: Category,
    pub description: String,
}

#[derive(Debug, Clone, Default)]
pub struct WebsiteStore {
    records: Vec<WebsiteRecord>,
}

impl WebsiteStore {
    pub fn from_records(records: Vec<WebsiteRecord>) -> Self {
        Self { records }
    }

    pub fn records(&self) -> &[WebsiteRecord] {
        &self.records
    }

    pub fn add(&mut self, url: &str, category: Category, description: &str) -> Result<WebsiteRecord> {
        let domain = normalized_domain(url);
        if domain.is_empty() {
            bail!("Please fill in website URL and category");
        }

        let trimmed_description = description.trim();
        let record = WebsiteRecord {
            id: self.next_id(),
            url: domain,
            category,
            description: if trimmed_description.is_empty() {
                "No description".to_string()
            } else {
                trimmed_description.to_string()
            },
        };

        debug!(url = %record.url, category = %record.category, "website added");
        self.records.push(record.clone());

        Ok(record)
    }

    pub fn remove(&mut self, id: u32) -> bool {
        let before = self.records.len();
        self.records.retain(|record| record.id != id);

        let removed = self.records.len() < before;
        if removed {
            debug!(id, "website removed");
        }

        removed
    }

    pub fn update_category(&mut self, id: u32, category: Category) -> bool {
        match self.records.iter_mut().find(|record| record.id == id) {
            Some(record) => {
                record.category = category;
                debug!(id, category = %category, "website category updated");
                true
            }
            None => false,
        }
    }

    pub fn productive_count(&self) -> usize {
        self.records
            .iter()
            .filter(|record| record.category == Category::Productive)
            .count()
    }

    pub fn unproductive_count(&self) -> usize {
        self.records
            .iter()
            .filter(|record| record.category == Category::Unproductive)
            .count()
    }

    // max + 1, not len + 1: ids of removed records must never be reused.
    fn next_id(&self) -> u32 {
        self.records
            .iter()
            .map(|record| record.id)
            .max()
            .unwrap_or(0)
            + 1
    }
}

fn normalized_domain(raw: &str) -> String {
    let trimmed = raw.trim();
    let host = Url::parse(trimmed)
        .ok()
        .and_then(|parsed| parsed.host_str().map(ToOwned::to_owned))
        .unwrap_or_else(|| {
            trimmed
                .split(['/', '?'])
                .next()
                .unwrap_or(trimmed)
                .to_string()
        });

    host.trim_start_matches("www.").to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::{Category, WebsiteRecord, WebsiteStore, normalized_domain};

    fn seeded_store() -> WebsiteStore {
        WebsiteStore::from_records(vec![
            WebsiteRecord {
                id: 1,
                url: "github.com".to_string(),
                category: Category::Productive,
                description: "Code repository".to_string(),
            },
            WebsiteRecord {
                id: 2,
                url: "youtube.com".to_string(),
                category: Category::Unproductive,
                description: "Video platform".to_string(),
            },
        ])
    }

    #[test]
    fn add_rejects_empty_url() {
        let mut store = seeded_store();
        let result = store.add("   ", Category::Productive, "whitespace only");

        assert!(result.is_err());
        assert_eq!(store.records().len(), 2);
    }

    #[test]
    fn add_appends_with_a_fresh_id() {
        let mut store = seeded_store();
        let record = store
            .add("stackoverflow.com", Category::Productive, "Programming Q&A")
            .expect("record added");

        assert_eq!(record.id, 3);
        assert_eq!(store.records().len(), 3);
        assert_eq!(store.records().last().map(|record| record.id), Some(3));
    }

    #[test]
    fn add_normalizes_pasted_urls() {
        let mut store = WebsiteStore::default();
        let record = store
            .add("https://WWW.GitHub.com/rust-lang/rust", Category::Productive, "")
            .expect("record added");

        assert_eq!(record.url, "github.com");
        assert_eq!(record.description, "No description");
    }

    #[test]
    fn removed_ids_are_not_reused() {
        let mut store = seeded_store();
        store
            .add("netflix.com", Category::Unproductive, "Streaming service")
            .expect("record added");
        assert!(store.remove(2));

        let record = store
            .add("docs.google.com", Category::Productive, "Document editing")
            .expect("record added");
        assert_eq!(record.id, 4);
    }

    #[test]
    fn remove_unknown_id_is_a_noop() {
        let mut store = seeded_store();
        assert!(!store.remove(99));
        assert_eq!(store.records().len(), 2);
    }

    #[test]
    fn update_category_preserves_list_order() {
        let mut store = seeded_store();
        assert!(store.update_category(1, Category::Unproductive));

        let urls = store
            .records()
            .iter()
            .map(|record| record.url.as_str())
            .collect::<Vec<_>>();
        assert_eq!(urls, vec!["github.com", "youtube.com"]);
        assert_eq!(store.records()[0].category, Category::Unproductive);
    }

    #[test]
    fn update_unknown_id_reports_false() {
        let mut store = seeded_store();
        assert!(!store.update_category(42, Category::Productive));
    }

    #[test]
    fn category_counts_follow_mutations() {
        let mut store = seeded_store();
        assert_eq!(store.productive_count(), 1);
        assert_eq!(store.unproductive_count(), 1);

        store.update_category(2, Category::Productive);
        assert_eq!(store.productive_count(), 2);
        assert_eq!(store.unproductive_count(), 0);
    }

    #[test]
    fn bare_domains_keep_only_the_host() {
        assert_eq!(normalized_domain(" docs.google.com/spreadsheets "), "docs.google.com");
        assert_eq!(normalized_domain("github.com"), "github.com");
    }
}
