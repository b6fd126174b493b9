// src/crawl/result.rs
// =============================================================================
// What a crawl produces.
//
// - DomainResult: the finished output of one domain crawl
// - AggregateResult: domain name -> sorted product URLs, for every domain
//
// AggregateResult serializes as a plain JSON object:
//   { "books.toscrape.com": ["https://...", "https://..."] }
// =============================================================================

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DomainResult {
    pub domain: String,
    /// Sorted, deduplicated product URLs
    pub product_urls: Vec<String>,
    pub pages_visited: usize,
}

impl DomainResult {
    // Result for a domain whose crawl produced nothing usable
    pub fn empty(domain: impl Into<String>) -> Self {
        Self {
            domain: domain.into(),
            product_urls: Vec::new(),
            pages_visited: 0,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AggregateResult {
    domains: BTreeMap<String, Vec<String>>,
}

impl AggregateResult {
    pub fn insert(&mut self, result: DomainResult) {
        self.domains.insert(result.domain, result.product_urls);
    }

    pub fn get(&self, domain: &str) -> Option<&[String]> {
        self.domains.get(domain).map(Vec::as_slice)
    }

    pub fn len(&self) -> usize {
        self.domains.len()
    }

    pub fn is_empty(&self) -> bool {
        self.domains.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.domains
            .iter()
            .map(|(domain, urls)| (domain.as_str(), urls.as_slice()))
    }

    pub fn total_products(&self) -> usize {
        self.domains.values().map(Vec::len).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serializes_as_domain_to_url_list() {
        let mut aggregate = AggregateResult::default();
        aggregate.insert(DomainResult {
            domain: "shop.com".to_string(),
            product_urls: vec!["https://shop.com/p/1".to_string()],
            pages_visited: 3,
        });
        aggregate.insert(DomainResult::empty("empty.com"));

        let json = serde_json::to_value(&aggregate).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "empty.com": [],
                "shop.com": ["https://shop.com/p/1"],
            })
        );
        assert_eq!(aggregate.total_products(), 1);
    }

    #[test]
    fn test_iter_is_sorted_by_domain() {
        let mut aggregate = AggregateResult::default();
        aggregate.insert(DomainResult::empty("b.com"));
        aggregate.insert(DomainResult::empty("a.com"));

        let domains: Vec<&str> = aggregate.iter().map(|(domain, _)| domain).collect();
        assert_eq!(domains, vec!["a.com", "b.com"]);
        assert_eq!(aggregate.get("a.com"), Some(&[][..]));
        assert_eq!(aggregate.get("c.com"), None);
    }
}
