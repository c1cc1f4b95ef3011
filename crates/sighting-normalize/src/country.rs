//! Country allow-list.
//!
//! The source data spells the United States many ways. Rows are kept only
//! when the raw country value matches one of the allowed spellings exactly.

use std::collections::BTreeSet;

/// Spellings observed in the source data for the United States.
pub const DEFAULT_ALLOWED_COUNTRIES: [&str; 7] = [
    "USA",
    "usa",
    "USAv",
    "Usa",
    "USAUSA",
    "U",
    "Untied States of America",
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CountryAllowList {
    spellings: BTreeSet<String>,
}

impl CountryAllowList {
    pub fn new<I, S>(spellings: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            spellings: spellings.into_iter().map(Into::into).collect(),
        }
    }

    /// Exact, case-sensitive membership.
    pub fn allows(&self, country: &str) -> bool {
        self.spellings.contains(country)
    }

    /// Spellings in sorted order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.spellings.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.spellings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.spellings.is_empty()
    }
}

impl Default for CountryAllowList {
    fn default() -> Self {
        Self::new(DEFAULT_ALLOWED_COUNTRIES)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_list_is_exact() {
        let list = CountryAllowList::default();
        assert!(list.allows("USA"));
        assert!(list.allows("Untied States of America"));
        assert!(!list.allows("United States"));
        assert!(!list.allows("uSA"));
        assert!(!list.allows("Canada"));
        assert_eq!(list.len(), 7);
    }

    #[test]
    fn custom_list() {
        let list = CountryAllowList::new(["Canada"]);
        assert!(list.allows("Canada"));
        assert!(!list.allows("USA"));
    }

    #[test]
    fn iter_is_sorted_and_deduplicated() {
        let list = CountryAllowList::new(["usa", "USA", "usa"]);
        assert_eq!(list.iter().collect::<Vec<_>>(), vec!["USA", "usa"]);
    }
}
