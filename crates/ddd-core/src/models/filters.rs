//! Filter types deciding what the displayed list shows.

use super::{Displayable, ItemKind};

/// Which kinds of items a listing includes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum KindFilter {
    /// Contacts followed by events
    #[default]
    All,
    /// Contacts only
    Contacts,
    /// Events only
    Events,
}

impl KindFilter {
    /// Whether items of the given kind pass this filter.
    pub fn accepts(&self, kind: ItemKind) -> bool {
        match self {
            KindFilter::All => true,
            KindFilter::Contacts => kind == ItemKind::Contact,
            KindFilter::Events => kind == ItemKind::Event,
        }
    }
}

/// Predicate applied when rebuilding the displayed list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DisplayFilter {
    /// Restrict the listing to one kind of item
    pub kind: KindFilter,

    /// Keep items whose name contains any of these words (whole words,
    /// compared after Unicode lowercasing). Each entry is a single word.
    /// Empty means no keyword restriction.
    pub keywords: Vec<String>,
}

impl DisplayFilter {
    /// Filter showing every item of every kind.
    pub fn show_all() -> Self {
        Self::default()
    }

    /// Filter showing every item of one kind.
    pub fn of_kind(kind: KindFilter) -> Self {
        Self {
            kind,
            keywords: Vec::new(),
        }
    }

    /// Filter matching names against keywords.
    ///
    /// Keywords are split on whitespace, so `"Alice Tan"` matches names
    /// containing either word.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ddd_core::models::{DisplayFilter, KindFilter};
    ///
    /// let filter = DisplayFilter::with_keywords(KindFilter::All, vec!["  ".into(), "Alice Tan".into()]);
    /// assert_eq!(filter.keywords, vec!["Alice".to_string(), "Tan".to_string()]);
    /// ```
    pub fn with_keywords(kind: KindFilter, keywords: Vec<String>) -> Self {
        let keywords = keywords
            .into_iter()
            .flat_map(|k| {
                k.split_whitespace()
                    .map(str::to_string)
                    .collect::<Vec<_>>()
            })
            .collect();
        Self { kind, keywords }
    }

    /// Whether the item should appear in the displayed list.
    pub fn matches(&self, item: &Displayable) -> bool {
        if !self.kind.accepts(item.kind()) {
            return false;
        }
        if self.keywords.is_empty() {
            return true;
        }
        let words: Vec<String> = item
            .name()
            .split_whitespace()
            .map(str::to_lowercase)
            .collect();
        self.keywords
            .iter()
            .map(|keyword| keyword.to_lowercase())
            .any(|keyword| words.contains(&keyword))
    }
}
