use is_api_types::{ItemKey, ItemSummary, RecentItem};

pub const RECENTS_LIMIT: usize = 8;

/// Recently viewed items, newest first, unique by key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Recents {
    items: Vec<RecentItem>,
    limit: usize,
}

impl Default for Recents {
    fn default() -> Self {
        Self::with_limit(RECENTS_LIMIT)
    }
}

impl Recents {
    pub fn with_limit(limit: usize) -> Self {
        Self {
            items: Vec::new(),
            limit,
        }
    }

    pub fn from_items(items: Vec<RecentItem>) -> Self {
        let mut recents = Self::default();
        for item in items {
            if !recents.contains(&item.item.key) && recents.items.len() < recents.limit {
                recents.items.push(item);
            }
        }
        recents
    }

    pub fn record(&mut self, item: ItemSummary, now_ms: u64) {
        self.items.retain(|r| r.item.key != item.key);
        self.items.insert(
            0,
            RecentItem {
                item,
                viewed_at_ms: now_ms,
            },
        );
        self.items.truncate(self.limit);
    }

    pub fn contains(&self, key: &ItemKey) -> bool {
        self.items.iter().any(|r| &r.item.key == key)
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    pub fn items(&self) -> &[RecentItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
