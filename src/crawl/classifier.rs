// src/crawl/classifier.rs
// =============================================================================
// Decides whether a URL looks like a product page.
//
// A URL is a product URL when its *path* matches at least one pattern, e.g.
//   https://books.toscrape.com/catalogue/a-light_1000/index.html  -> yes
//   https://books.toscrape.com/about                             -> no
//
// The patterns are compiled once into a RegexSet, which tests all of them in
// a single pass over the path. The classifier is immutable after
// construction and shared by every domain crawler.
// =============================================================================

use regex::RegexSet;
use url::Url;

pub const DEFAULT_PRODUCT_PATTERNS: &[&str] = &["/product/", "/item/", "/p/", "/catalogue/"];

#[derive(Debug, Clone)]
pub struct ProductClassifier {
    patterns: RegexSet,
}

impl ProductClassifier {
    pub fn new<I, S>(patterns: I) -> Result<Self, regex::Error>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Ok(Self {
            patterns: RegexSet::new(patterns)?,
        })
    }

    // Any single match is enough; pattern order does not matter.
    // Strings that don't parse as absolute URLs have no path and never match.
    pub fn is_product(&self, url: &str) -> bool {
        match Url::parse(url) {
            Ok(parsed) => self.patterns.is_match(parsed.path()),
            Err(_) => false,
        }
    }
}

impl Default for ProductClassifier {
    fn default() -> Self {
        Self::new(DEFAULT_PRODUCT_PATTERNS).expect("default product patterns are valid regexes")
    }
}
