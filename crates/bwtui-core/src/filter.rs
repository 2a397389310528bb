//! Incremental regex filtering of the vault item list.
//!
//! Filtering runs on every keystroke, so a half-typed pattern that fails to
//! compile is expected. In that case the previous view is kept.

use crate::models::VaultItem;
use regex::{Regex, RegexBuilder};

/// Indices into the master list, strictly increasing.
pub type FilteredView = Vec<usize>;

/// Compile filter text into a case-insensitive pattern.
pub fn compile(pattern: &str) -> Result<Regex, regex::Error> {
    RegexBuilder::new(pattern).case_insensitive(true).build()
}

/// Whether `item` matches on its name or its folder's name.
pub fn matches(re: &Regex, item: &VaultItem) -> bool {
    re.is_match(&item.name) || item.folder_name().is_some_and(|name| re.is_match(name))
}

/// Indices of the items matching `re`, in master order.
pub fn select(items: &[VaultItem], re: &Regex) -> FilteredView {
    items
        .iter()
        .enumerate()
        .filter(|(_, item)| matches(re, item))
        .map(|(index, _)| index)
        .collect()
}

/// Holds the current filtered view.
#[derive(Debug, Clone)]
pub struct FilterEngine {
    view: FilteredView,
}

impl FilterEngine {
    /// Start with an unfiltered view over `items`.
    pub fn new(items: &[VaultItem]) -> Self {
        Self {
            view: (0..items.len()).collect(),
        }
    }

    /// Recompute the view for `pattern`.
    ///
    /// Returns `false` and leaves the view untouched if the pattern does not
    /// compile.
    pub fn apply(&mut self, items: &[VaultItem], pattern: &str) -> bool {
        let re = match compile(pattern) {
            Ok(re) => re,
            Err(e) => {
                tracing::debug!("Ignoring filter {:?}: {}", pattern, e);
                return false;
            }
        };
        self.view = select(items, &re);
        true
    }

    pub fn view(&self) -> &[usize] {
        &self.view
    }

    pub fn len(&self) -> usize {
        self.view.len()
    }

    pub fn is_empty(&self) -> bool {
        self.view.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Folder, ItemKind};
    use pretty_assertions::assert_eq;
    use std::sync::Arc;

    fn items() -> Vec<VaultItem> {
        let finance = Arc::new(Folder {
            id: "f1".to_string(),
            name: "Finance".to_string(),
        });
        ["Bank", "Mail", "Brokerage", "Forum", "bank card"]
            .iter()
            .enumerate()
            .map(|(i, name)| VaultItem {
                kind: ItemKind::Login,
                name: name.to_string(),
                login: None,
                notes: String::new(),
                folder: (i == 2).then(|| Arc::clone(&finance)),
            })
            .collect()
    }

    #[test]
    fn empty_pattern_matches_everything() {
        let items = items();
        let mut engine = FilterEngine::new(&items);
        assert!(engine.apply(&items, ""));
        assert_eq!(engine.view(), &[0, 1, 2, 3, 4]);
    }

    #[test]
    fn matching_is_case_insensitive_and_ordered() {
        let items = items();
        let mut engine = FilterEngine::new(&items);
        engine.apply(&items, "BANK");
        assert_eq!(engine.view(), &[0, 4]);
    }

    #[test]
    fn folder_name_matches() {
        let items = items();
        let mut engine = FilterEngine::new(&items);
        engine.apply(&items, "finan");
        assert_eq!(engine.view(), &[2]);
    }

    #[test]
    fn regex_syntax_is_honoured() {
        let items = items();
        let mut engine = FilterEngine::new(&items);
        engine.apply(&items, "^(mail|forum)$");
        assert_eq!(engine.view(), &[1, 3]);
    }

    #[test]
    fn invalid_pattern_keeps_previous_view() {
        let items = items();
        let mut engine = FilterEngine::new(&items);
        engine.apply(&items, "b");
        let before = engine.view().to_vec();

        for pattern in ["b(", "[", "*", "a{2,1}"] {
            assert!(!engine.apply(&items, pattern), "{pattern} should not compile");
            assert_eq!(engine.view(), before.as_slice());
        }
    }

    #[test]
    fn view_is_always_an_ordered_subsequence() {
        let items = items();
        let mut engine = FilterEngine::new(&items);
        for pattern in ["", "a", "o", "r", "k$", "^b", ".", "zzz", "(", "m|f"] {
            engine.apply(&items, pattern);
            let view = engine.view();
            assert!(view.windows(2).all(|w| w[0] < w[1]), "{pattern}: {view:?}");
            assert!(view.iter().all(|&i| i < items.len()));
        }
    }

    #[test]
    fn no_match_yields_empty_view() {
        let items = items();
        let mut engine = FilterEngine::new(&items);
        engine.apply(&items, "xyz");
        assert!(engine.is_empty());
        assert_eq!(engine.len(), 0);
    }
}
