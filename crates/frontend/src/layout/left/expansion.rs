use super::menu::{find_item, MenuItem};
use std::collections::BTreeSet;

/// Ids of the menu groups whose submenu is open.
///
/// Only ids present in the catalog it was built for are ever stored.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExpansionState {
    catalog: &'static [MenuItem],
    expanded: BTreeSet<&'static str>,
}

impl ExpansionState {
    pub fn new(catalog: &'static [MenuItem]) -> Self {
        Self {
            catalog,
            expanded: BTreeSet::new(),
        }
    }

    /// Start with `default_id` open, if the catalog has it.
    pub fn with_default(catalog: &'static [MenuItem], default_id: &str) -> Self {
        let mut state = Self::new(catalog);
        state.toggle(default_id);
        state
    }

    pub fn contains(&self, id: &str) -> bool {
        self.expanded.contains(id)
    }

    /// Flip `id` and return whether it is now expanded. Unknown ids are ignored.
    pub fn toggle(&mut self, id: &str) -> bool {
        let Some(item) = find_item(self.catalog, id) else {
            log::debug!("sidebar: ignoring toggle of unknown item '{id}'");
            return false;
        };
        if self.expanded.remove(item.id) {
            false
        } else {
            self.expanded.insert(item.id);
            true
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::left::menu::{DEFAULT_EXPANDED, MENU_CATALOG};

    #[test]
    fn test_default_is_the_only_open_group() {
        let state = ExpansionState::with_default(MENU_CATALOG, DEFAULT_EXPANDED);
        assert_eq!(state.expanded.iter().copied().collect::<Vec<_>>(), vec!["analytics"]);
    }

    #[test]
    fn test_double_toggle_restores_state() {
        let mut state = ExpansionState::with_default(MENU_CATALOG, DEFAULT_EXPANDED);
        let before = state.clone();

        assert!(state.toggle("security"));
        assert!(state.contains("security"));
        assert!(state.contains("analytics"));
        assert!(!state.toggle("security"));
        assert_eq!(state, before);

        assert!(!state.toggle("analytics"));
        assert!(state.expanded.is_empty());
        assert!(state.toggle("analytics"));
        assert_eq!(state, before);
    }

    #[test]
    fn test_unknown_ids_are_never_stored() {
        let mut state = ExpansionState::new(MENU_CATALOG);
        assert!(!state.toggle("overview"));
        assert!(!state.toggle("nope"));
        assert!(state.expanded.is_empty());

        let state = ExpansionState::with_default(MENU_CATALOG, "nope");
        assert!(state.expanded.is_empty());
    }
}
