use is_api_types::ItemKey;
use std::collections::BTreeMap;

/// Unified favorites across furniture, paintings and prints.
///
/// Persisted as `{ "<item key>": true }`. Stale keys survive; the listing
/// shows them as unavailable.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Favorites {
    keys: Vec<ItemKey>,
}

impl Favorites {
    /// Rebuild from a persisted snapshot, keeping only truthy entries and
    /// upgrading legacy bare keys. Unparseable keys are dropped.
    pub fn from_snapshot(snapshot: BTreeMap<String, bool>) -> Self {
        let mut favorites = Self::default();
        for (raw, flagged) in snapshot {
            if !flagged {
                continue;
            }
            match raw.parse::<ItemKey>() {
                Ok(key) => {
                    if !favorites.contains(&key) {
                        favorites.keys.push(key);
                    }
                }
                Err(err) => tracing::warn!(key = %raw, error = %err, "dropping favorite"),
            }
        }
        favorites
    }

    pub fn snapshot(&self) -> BTreeMap<String, bool> {
        self.keys.iter().map(|key| (key.to_string(), true)).collect()
    }

    /// Flip membership; returns whether the key is a favorite afterwards.
    pub fn toggle(&mut self, key: &ItemKey) -> bool {
        if let Some(idx) = self.keys.iter().position(|k| k == key) {
            self.keys.remove(idx);
            false
        } else {
            self.keys.push(key.clone());
            true
        }
    }

    pub fn contains(&self, key: &ItemKey) -> bool {
        self.keys.contains(key)
    }

    pub fn count(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Keys in toggle order for this session. A reloaded set comes back
    /// sorted by key, since the snapshot is a map.
    pub fn keys(&self) -> &[ItemKey] {
        &self.keys
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_twice_restores() {
        let mut favs = Favorites::default();
        let key = ItemKey::painting("OP3");
        assert!(favs.toggle(&key));
        assert!(favs.contains(&key));
        assert!(!favs.toggle(&key));
        assert!(favs.is_empty());
    }

    #[test]
    fn kinds_do_not_collide() {
        let mut favs = Favorites::default();
        favs.toggle(&ItemKey::painting("OP1"));
        favs.toggle(&ItemKey::print("OP1"));
        assert_eq!(favs.count(), 2);
    }

    #[test]
    fn snapshot_counts_truthy_entries_only() {
        let snapshot = BTreeMap::from([
            ("product:1001".to_string(), true),
            ("painting:OP3".to_string(), false),
            ("print:PR2".to_string(), true),
        ]);
        let favs = Favorites::from_snapshot(snapshot);
        assert_eq!(favs.count(), 2);
        assert_eq!(favs.snapshot().len(), favs.count());
    }

    #[test]
    fn reload_returns_keys_sorted() {
        let mut favs = Favorites::default();
        favs.toggle(&ItemKey::print("PR2"));
        favs.toggle(&ItemKey::painting("OP3"));
        assert_eq!(favs.keys()[0], ItemKey::print("PR2"));

        let reloaded = Favorites::from_snapshot(favs.snapshot());
        assert_eq!(
            reloaded.keys(),
            [ItemKey::painting("OP3"), ItemKey::print("PR2")]
        );
    }

    #[test]
    fn legacy_keys_migrate() {
        let snapshot = BTreeMap::from([
            ("1001".to_string(), true),
            ("OP3".to_string(), true),
            ("product:1001".to_string(), true),
            ("sofa".to_string(), true),
        ]);
        let favs = Favorites::from_snapshot(snapshot);
        assert_eq!(favs.count(), 2);
        assert!(favs.contains(&ItemKey::product(1001)));
        assert!(favs.contains(&ItemKey::painting("OP3")));
        assert!(favs.snapshot().contains_key("painting:OP3"));
    }
}
