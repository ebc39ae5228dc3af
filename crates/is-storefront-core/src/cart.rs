use is_api_types::{CartLine, ItemKey, ItemSummary};
use serde::{Deserialize, Serialize};

/// The Project Bag: ordered cart lines, one per item key.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    pub fn from_lines(lines: Vec<CartLine>) -> Self {
        let mut cart = Self::default();
        for line in lines {
            let quantity = line.quantity.max(1);
            match cart.position(&line.item.key) {
                Some(idx) => {
                    let merged = &mut cart.lines[idx].quantity;
                    *merged = merged.saturating_add(quantity);
                }
                None => cart.lines.push(CartLine { quantity, ..line }),
            }
        }
        cart
    }

    fn position(&self, key: &ItemKey) -> Option<usize> {
        self.lines.iter().position(|line| &line.item.key == key)
    }

    /// Add one unit; returns the line's new quantity.
    pub fn add(&mut self, item: ItemSummary) -> u32 {
        match self.position(&item.key) {
            Some(idx) => {
                let line = &mut self.lines[idx];
                line.quantity = line.quantity.saturating_add(1);
                line.quantity
            }
            None => {
                self.lines.push(CartLine::new(item));
                1
            }
        }
    }

    pub fn remove(&mut self, key: &ItemKey) -> bool {
        let before = self.lines.len();
        self.lines.retain(|line| &line.item.key != key);
        self.lines.len() != before
    }

    /// Set a line's quantity, clamped to at least 1. Returns the stored
    /// quantity, or `None` when the key is not in the cart.
    pub fn update_quantity(&mut self, key: &ItemKey, quantity: u32) -> Option<u32> {
        let idx = self.position(key)?;
        let line = &mut self.lines[idx];
        line.quantity = quantity.max(1);
        Some(line.quantity)
    }

    pub fn adjust_quantity(&mut self, key: &ItemKey, delta: i32) -> Option<u32> {
        let current = self.quantity_of(key)?;
        let wanted = i64::from(current) + i64::from(delta);
        let clamped = u32::try_from(wanted.max(1)).unwrap_or(u32::MAX);
        self.update_quantity(key, clamped)
    }

    pub fn clear(&mut self) {
        self.lines.clear();
    }

    pub fn quantity_of(&self, key: &ItemKey) -> Option<u32> {
        self.position(key).map(|idx| self.lines[idx].quantity)
    }

    pub fn contains(&self, key: &ItemKey) -> bool {
        self.position(key).is_some()
    }

    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Number of distinct lines; this is what the badge shows.
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    pub fn total_quantity(&self) -> u32 {
        self.lines
            .iter()
            .fold(0u32, |acc, line| acc.saturating_add(line.quantity))
    }

    pub fn subtotal(&self) -> u64 {
        self.lines
            .iter()
            .fold(0u64, |acc, line| acc.saturating_add(line.line_total()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: u32, price: u64) -> ItemSummary {
        ItemSummary {
            key: ItemKey::product(id),
            name: format!("Item {id}"),
            price,
            image: String::new(),
            category: "Tables".into(),
        }
    }

    #[test]
    fn add_same_key_increments() {
        let mut cart = Cart::default();
        assert_eq!(cart.add(item(1, 10)), 1);
        assert_eq!(cart.add(item(1, 10)), 2);
        assert_eq!(cart.add(item(2, 5)), 1);
        assert_eq!(cart.line_count(), 2);
        assert_eq!(cart.total_quantity(), 3);
        assert_eq!(cart.subtotal(), 25);
    }

    #[test]
    fn keys_stay_unique_and_ordered() {
        let mut cart = Cart::default();
        for id in [3, 1, 3, 2, 1] {
            cart.add(item(id, 1));
        }
        let ids: Vec<u32> = cart
            .lines()
            .iter()
            .filter_map(|l| l.item.key.product_id())
            .collect();
        assert_eq!(ids, vec![3, 1, 2]);
    }

    #[test]
    fn quantity_never_drops_below_one() {
        let mut cart = Cart::default();
        cart.add(item(1, 10));
        assert_eq!(cart.update_quantity(&ItemKey::product(1), 0), Some(1));
        assert_eq!(cart.update_quantity(&ItemKey::product(1), 4), Some(4));
        assert_eq!(cart.adjust_quantity(&ItemKey::product(1), -10), Some(1));
        assert_eq!(cart.adjust_quantity(&ItemKey::product(1), 2), Some(3));
        assert_eq!(cart.update_quantity(&ItemKey::product(9), 3), None);
        assert_eq!(cart.subtotal(), 30);
    }

    #[test]
    fn remove_and_clear() {
        let mut cart = Cart::default();
        cart.add(item(1, 10));
        cart.add(item(2, 10));
        assert!(cart.remove(&ItemKey::product(1)));
        assert!(!cart.remove(&ItemKey::product(1)));
        assert_eq!(cart.line_count(), 1);
        cart.clear();
        assert!(cart.is_empty());
        assert_eq!(cart.subtotal(), 0);
    }

    #[test]
    fn re_adding_after_remove_starts_a_fresh_line() {
        let mut cart = Cart::default();
        for _ in 0..3 {
            cart.add(item(1, 10));
        }
        assert!(cart.remove(&ItemKey::product(1)));
        assert_eq!(cart.add(item(1, 10)), 1);
        assert_eq!(cart.quantity_of(&ItemKey::product(1)), Some(1));
    }

    #[test]
    fn huge_duplicate_lines_saturate() {
        let mut a = CartLine::new(item(1, 2_000));
        a.quantity = u32::MAX;
        let b = a.clone();
        let cart = Cart::from_lines(vec![a, b, CartLine::new(item(2, u64::MAX))]);
        assert_eq!(cart.quantity_of(&ItemKey::product(1)), Some(u32::MAX));
        assert_eq!(cart.total_quantity(), u32::MAX);
        assert_eq!(cart.subtotal(), u64::MAX);
    }

    #[test]
    fn from_lines_merges_duplicates_and_fixes_zero_quantities() {
        let mut zero = CartLine::new(item(1, 10));
        zero.quantity = 0;
        let cart = Cart::from_lines(vec![zero, CartLine::new(item(1, 10)), CartLine::new(item(2, 3))]);
        assert_eq!(cart.line_count(), 2);
        assert_eq!(cart.quantity_of(&ItemKey::product(1)), Some(2));
    }

    #[test]
    fn snapshot_is_a_plain_array() {
        let mut cart = Cart::default();
        cart.add(item(1, 10));
        let json = serde_json::to_value(&cart).unwrap();
        assert!(json.is_array());
        assert_eq!(json[0]["key"], "product:1");
        assert_eq!(json[0]["quantity"], 1);
    }
}
