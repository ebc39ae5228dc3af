use is_api_types::{CartLine, ItemKey, ItemSummary, OrderTotals, RecentItem};
use is_catalog::{CatalogError, CatalogItem};
use is_handoff::{Handoff, OrderHandoff};
use is_storage::{SnapshotStore, keys, load_or_default, save_json};
use serde::Serialize;
use std::collections::BTreeMap;

use crate::cart::Cart;
use crate::checkout::{CheckoutError, CheckoutWizard};
use crate::events::{EventBus, StoreEvent, SubscriptionId};
use crate::favorites::Favorites;
use crate::notice::{self, Notice, NoticeKind, NoticeQueue};
use crate::pricing::ShippingPolicy;
use crate::ratings::{Rater, RatingError, Ratings, RatingsSnapshot};
use crate::recent::Recents;

/// A favorite as shown in the favorites list. `item` is `None` when the key
/// no longer resolves against the catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FavoriteEntry {
    pub key: ItemKey,
    pub item: Option<CatalogItem>,
}

/// Application state root. Every mutation persists its snapshot and then
/// notifies subscribers.
pub struct Storefront<S> {
    store: S,
    cart: Cart,
    favorites: Favorites,
    recents: Recents,
    ratings: Ratings,
    notices: NoticeQueue,
    events: EventBus,
    shipping: ShippingPolicy,
}

impl<S> Storefront<S>
where
    S: SnapshotStore,
{
    /// Restore every snapshot from `store`. Missing or unreadable snapshots
    /// start empty.
    pub fn load(store: S) -> Self {
        let cart = Cart::from_lines(load_or_default::<Vec<CartLine>, _>(&store, keys::CART));
        let favorites =
            Favorites::from_snapshot(load_or_default::<BTreeMap<String, bool>, _>(&store, keys::FAVORITES));
        let recents = Recents::from_items(load_or_default::<Vec<RecentItem>, _>(&store, keys::RECENT));
        let ratings = Ratings::from_snapshot(load_or_default::<RatingsSnapshot, _>(&store, keys::RATINGS));
        tracing::debug!(
            cart_lines = cart.line_count(),
            favorites = favorites.count(),
            recents = recents.len(),
            rated = ratings.rated_count(),
            "storefront loaded"
        );
        Self {
            store,
            cart,
            favorites,
            recents,
            ratings,
            notices: NoticeQueue::default(),
            events: EventBus::default(),
            shipping: ShippingPolicy::default(),
        }
    }

    fn persist<T: Serialize + ?Sized>(&self, key: &str, value: &T) {
        if let Err(err) = save_json(&self.store, key, value) {
            tracing::warn!(key, error = %err, "snapshot not persisted");
        }
    }

    fn cart_changed(&mut self) {
        self.persist(keys::CART, &self.cart);
        self.events.emit(&StoreEvent::CartChanged {
            lines: self.cart.line_count(),
            quantity: self.cart.total_quantity(),
        });
    }

    fn favorites_changed(&mut self) {
        self.persist(keys::FAVORITES, &self.favorites.snapshot());
        self.events.emit(&StoreEvent::FavoritesChanged {
            count: self.favorites.count(),
        });
    }

    fn recents_changed(&mut self) {
        self.persist(keys::RECENT, self.recents.items());
        self.events.emit(&StoreEvent::RecentsChanged {
            len: self.recents.len(),
        });
    }

    fn ratings_changed(&mut self) {
        self.persist(keys::RATINGS, &self.ratings.snapshot());
        self.events.emit(&StoreEvent::RatingsChanged);
    }

    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    pub fn favorites(&self) -> &Favorites {
        &self.favorites
    }

    pub fn recents(&self) -> &Recents {
        &self.recents
    }

    pub fn ratings(&self) -> &Ratings {
        &self.ratings
    }

    pub fn notices(&self) -> &[Notice] {
        self.notices.active()
    }

    pub fn shipping(&self) -> &ShippingPolicy {
        &self.shipping
    }

    pub fn subscribe(&mut self, listener: impl FnMut(&StoreEvent) + 'static) -> SubscriptionId {
        self.events.subscribe(listener)
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.events.unsubscribe(id)
    }

    // ── Cart ──

    pub fn add_to_cart(&mut self, item: ItemSummary, now_ms: u64) -> u32 {
        let key = item.key.clone();
        let name = item.name.clone();
        let quantity = self.cart.add(item);
        tracing::info!(key = %key, quantity, "added to project bag");
        self.cart_changed();
        self.events.emit(&StoreEvent::ItemAdded {
            key: key.clone(),
            name: name.clone(),
        });
        self.notices
            .push_for(NoticeKind::Cart, notice::added_to_project(&name), Some(key), now_ms);
        quantity
    }

    /// Resolve `key` against the catalog and add it. Prints are refused.
    pub fn add_catalog_item(&mut self, key: &ItemKey, now_ms: u64) -> Result<u32, CatalogError> {
        let summary = is_catalog::purchasable_summary(key)?;
        Ok(self.add_to_cart(summary, now_ms))
    }

    pub fn remove_from_cart(&mut self, key: &ItemKey) -> bool {
        let removed = self.cart.remove(key);
        if removed {
            self.cart_changed();
        }
        removed
    }

    pub fn update_quantity(&mut self, key: &ItemKey, quantity: u32) -> Option<u32> {
        let stored = self.cart.update_quantity(key, quantity)?;
        self.cart_changed();
        Some(stored)
    }

    pub fn adjust_quantity(&mut self, key: &ItemKey, delta: i32) -> Option<u32> {
        let stored = self.cart.adjust_quantity(key, delta)?;
        self.cart_changed();
        Some(stored)
    }

    pub fn clear_cart(&mut self) {
        self.cart.clear();
        self.cart_changed();
    }

    pub fn totals(&self) -> OrderTotals {
        self.shipping.quote(self.cart.subtotal())
    }

    // ── Favorites ──

    pub fn is_favorite(&self, key: &ItemKey) -> bool {
        self.favorites.contains(key)
    }

    pub fn toggle_favorite(&mut self, key: &ItemKey, now_ms: u64) -> bool {
        let now_favorite = self.favorites.toggle(key);
        self.favorites_changed();
        let name = is_catalog::resolve(key)
            .map(|item| item.name().to_owned())
            .unwrap_or_else(|| key.code().to_owned());
        self.notices.push_for(
            NoticeKind::Favorite,
            notice::favorite_toggled(&name, now_favorite),
            Some(key.clone()),
            now_ms,
        );
        now_favorite
    }

    pub fn favorite_entries(&self) -> Vec<FavoriteEntry> {
        self.favorites
            .keys()
            .iter()
            .map(|key| FavoriteEntry {
                key: key.clone(),
                item: is_catalog::resolve(key),
            })
            .collect()
    }

    // ── Recently viewed ──

    pub fn record_view(&mut self, item: ItemSummary, now_ms: u64) {
        self.recents.record(item, now_ms);
        self.recents_changed();
    }

    pub fn clear_recents(&mut self) {
        self.recents.clear();
        self.recents_changed();
    }

    // ── Ratings ──

    pub fn rate(&mut self, code: &str, rater: Rater, score: u8) -> Result<Option<u8>, RatingError> {
        let stored = self.ratings.rate(code, rater, score)?;
        self.ratings_changed();
        Ok(stored)
    }

    pub fn reset_ratings(&mut self) {
        self.ratings.reset();
        self.ratings_changed();
    }

    // ── Notices ──

    pub fn notify(&mut self, kind: NoticeKind, message: impl Into<String>, now_ms: u64) -> u64 {
        self.notices.push(kind, message, now_ms)
    }

    pub fn dismiss_notice(&mut self, id: u64) -> bool {
        self.notices.dismiss(id)
    }

    pub fn expire_notices(&mut self, now_ms: u64) -> Vec<u64> {
        self.notices.expire(now_ms)
    }

    // ── Checkout ──

    /// Terminal checkout action: build the handoff, then clear the cart and
    /// reset the wizard. Nothing about the order is kept.
    pub fn place_order<H: Handoff + ?Sized>(
        &mut self,
        wizard: &mut CheckoutWizard,
        handoff: &H,
        now_ms: u64,
    ) -> Result<OrderHandoff, CheckoutError> {
        wizard.ready_to_place(&self.cart)?;
        let totals = self.totals();
        let order = is_handoff::prepare_order(
            handoff,
            self.cart.lines(),
            &wizard.details,
            &totals,
            now_ms,
        );
        tracing::info!(
            reference = %order.reference,
            lines = self.cart.line_count(),
            total = totals.total,
            "order handed off"
        );

        self.cart.clear();
        self.cart_changed();
        wizard.reset();
        self.events.emit(&StoreEvent::OrderPlaced {
            reference: order.reference.clone(),
        });
        self.notices.push(
            NoticeKind::Success,
            format!("Order {} sent via WhatsApp", order.reference),
            now_ms,
        );
        Ok(order)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::checkout::CheckoutStep;
    use anyhow::{Result, anyhow};
    use is_api_types::ContactDetails;
    use is_handoff::WhatsApp;
    use is_storage::MemoryStore;
    use std::cell::RefCell;
    use std::rc::Rc;

    struct FailingStore;

    impl SnapshotStore for FailingStore {
        fn get(&self, _key: &str) -> Option<String> {
            None
        }
        fn set(&self, _key: &str, _value: &str) -> Result<()> {
            Err(anyhow!("quota exceeded"))
        }
        fn remove(&self, _key: &str) -> Result<()> {
            Ok(())
        }
    }

    fn recorder(front: &mut Storefront<&MemoryStore>) -> Rc<RefCell<Vec<StoreEvent>>> {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        front.subscribe(move |event| sink.borrow_mut().push(event.clone()));
        seen
    }

    fn details() -> ContactDetails {
        ContactDetails {
            first_name: "Rima".into(),
            last_name: "Haddad".into(),
            phone: "+961 3 123 456".into(),
            address: "Rue Gouraud".into(),
            city: "Beirut".into(),
            notes: String::new(),
        }
    }

    #[test]
    fn add_persists_then_emits() -> Result<()> {
        let store = MemoryStore::new();
        let mut front = Storefront::load(&store);
        let seen = recorder(&mut front);

        assert_eq!(front.add_catalog_item(&ItemKey::product(1001), 0)?, 1);
        assert_eq!(front.add_catalog_item(&ItemKey::product(1001), 0)?, 2);

        let persisted: Vec<CartLine> = load_or_default(&store, keys::CART);
        assert_eq!(persisted, front.cart().lines());
        assert_eq!(persisted[0].quantity, 2);

        let events = seen.borrow();
        assert_eq!(
            events[0],
            StoreEvent::CartChanged {
                lines: 1,
                quantity: 1
            }
        );
        assert!(matches!(&events[1], StoreEvent::ItemAdded { key, .. } if key == &ItemKey::product(1001)));
        assert_eq!(front.notices().len(), 2);
        assert!(front.notices()[0].message.ends_with("added to project"));
        Ok(())
    }

    #[test]
    fn prints_are_inquiry_only() {
        let mut front = Storefront::load(MemoryStore::new());
        assert!(matches!(
            front.add_catalog_item(&ItemKey::print("PR1"), 0),
            Err(CatalogError::NotPurchasable(_))
        ));
        assert!(front.cart().is_empty());

        front.add_catalog_item(&ItemKey::painting("OP17"), 0).unwrap();
        assert_eq!(front.cart().lines()[0].item.category, "Oil Painting");
    }

    #[test]
    fn reload_restores_every_collection() -> Result<()> {
        let store = MemoryStore::new();
        {
            let mut front = Storefront::load(&store);
            front.add_catalog_item(&ItemKey::product(2003), 0)?;
            front.toggle_favorite(&ItemKey::painting("OP9"), 0);
            front.record_view(is_catalog::summary(&ItemKey::print("PR2"))?, 5);
            front.rate("PR2", Rater::Mohamad, 8)?;
        }
        let front = Storefront::load(&store);
        assert_eq!(front.cart().line_count(), 1);
        assert!(front.is_favorite(&ItemKey::painting("OP9")));
        assert_eq!(front.recents().items()[0].item.key, ItemKey::print("PR2"));
        assert_eq!(front.ratings().score("PR2", Rater::Mohamad), Some(8));
        Ok(())
    }

    #[test]
    fn favorites_count_matches_persisted_truthy_entries() {
        let store = MemoryStore::new();
        let mut front = Storefront::load(&store);
        let seen = recorder(&mut front);

        front.toggle_favorite(&ItemKey::product(1001), 0);
        front.toggle_favorite(&ItemKey::print("PR3"), 0);
        front.toggle_favorite(&ItemKey::product(1001), 0);

        let persisted: BTreeMap<String, bool> = load_or_default(&store, keys::FAVORITES);
        let truthy = persisted.values().filter(|v| **v).count();
        assert_eq!(
            seen.borrow().last(),
            Some(&StoreEvent::FavoritesChanged { count: truthy })
        );
        assert_eq!(truthy, 1);

        let name = is_catalog::find_product(1001).map(|p| p.name).unwrap_or_default();
        assert_eq!(
            front.notices().last().map(|n| n.message.clone()),
            Some(format!("{name} removed from favorites"))
        );
    }

    #[test]
    fn stale_favorites_are_kept_as_placeholders() {
        let store = MemoryStore::with_entries([(
            keys::FAVORITES,
            r#"{"product:9999":true,"OP3":true}"#,
        )]);
        let front = Storefront::load(&store);
        let entries = front.favorite_entries();
        assert_eq!(entries.len(), 2);
        let stale = entries
            .iter()
            .find(|e| e.key == ItemKey::product(9999))
            .unwrap();
        assert!(stale.item.is_none());
    }

    #[test]
    fn corrupt_snapshots_start_empty() {
        let store = MemoryStore::with_entries([
            (keys::CART, "not json"),
            (keys::FAVORITES, "[1,2]"),
            (keys::RECENT, "{}"),
            (keys::RATINGS, "7"),
        ]);
        let front = Storefront::load(&store);
        assert!(front.cart().is_empty());
        assert!(front.favorites().is_empty());
        assert!(front.recents().is_empty());
        assert_eq!(front.ratings().rated_count(), 0);
    }

    #[test]
    fn tampered_cart_snapshot_loads_without_overflow() {
        let line = r#"{"key":"product:1001","name":"Desk","price":18446744073709551615,"image":"","category":"","quantity":4294967295}"#;
        let snapshot = format!("[{line},{line}]");
        let store = MemoryStore::with_entries([(keys::CART, snapshot.as_str())]);
        let front = Storefront::load(&store);
        assert_eq!(front.cart().line_count(), 1);
        assert_eq!(front.cart().total_quantity(), u32::MAX);
        let totals = front.totals();
        assert_eq!((totals.subtotal, totals.shipping, totals.total), (u64::MAX, 0, u64::MAX));
    }

    #[test]
    fn persistence_failure_does_not_abort_mutation() {
        let mut front = Storefront::load(FailingStore);
        front.add_catalog_item(&ItemKey::product(1001), 0).unwrap();
        assert_eq!(front.cart().line_count(), 1);
    }

    #[test]
    fn quantity_updates_clamp_and_persist() {
        let store = MemoryStore::new();
        let mut front = Storefront::load(&store);
        let key = ItemKey::product(4001);
        front.add_catalog_item(&key, 0).unwrap();
        assert_eq!(front.update_quantity(&key, 0), Some(1));
        assert_eq!(front.adjust_quantity(&key, 3), Some(4));
        let persisted: Vec<CartLine> = load_or_default(&store, keys::CART);
        assert_eq!(persisted[0].quantity, 4);
        assert!(front.remove_from_cart(&key));
        assert!(!front.remove_from_cart(&key));
    }

    #[test]
    fn totals_follow_shipping_policy() {
        let mut front = Storefront::load(MemoryStore::new());
        front.add_to_cart(
            ItemSummary {
                key: ItemKey::product(1),
                name: "Exactly".into(),
                price: 500,
                image: String::new(),
                category: String::new(),
            },
            0,
        );
        assert_eq!(front.totals().shipping, 50);
        front.update_quantity(&ItemKey::product(1), 2);
        let totals = front.totals();
        assert_eq!((totals.subtotal, totals.shipping, totals.total), (1000, 0, 1000));
    }

    #[test]
    fn place_order_clears_cart_and_resets_wizard() -> Result<()> {
        let store = MemoryStore::new();
        let mut front = Storefront::load(&store);
        let seen = recorder(&mut front);
        let wa = WhatsApp::new(Some("96181773588".into()));
        let mut wizard = CheckoutWizard::default();

        assert!(front.place_order(&mut wizard, &wa, 0).is_err());

        front.add_catalog_item(&ItemKey::product(1001), 0)?;
        wizard.advance(front.cart())?;
        wizard.details = details();
        wizard.advance(front.cart())?;
        assert_eq!(wizard.step(), CheckoutStep::Confirm);

        let order = front.place_order(&mut wizard, &wa, 36)?;
        assert_eq!(order.reference, "INS-10");
        assert!(order.url.starts_with("https://wa.me/96181773588?text="));
        assert!(order.message.contains("Name: Rima Haddad"));

        assert!(front.cart().is_empty());
        let persisted: Vec<CartLine> = load_or_default(&store, keys::CART);
        assert!(persisted.is_empty());
        assert_eq!(wizard, CheckoutWizard::default());
        assert_eq!(
            seen.borrow().last(),
            Some(&StoreEvent::OrderPlaced {
                reference: "INS-10".into()
            })
        );
        Ok(())
    }

    #[test]
    fn recents_are_capped_and_persisted() {
        let store = MemoryStore::new();
        let mut front = Storefront::load(&store);
        for product in is_catalog::PRODUCTS.iter().take(10) {
            front.record_view(CatalogItem::Product(product).summary(), 0);
        }
        let persisted: Vec<RecentItem> = load_or_default(&store, keys::RECENT);
        assert_eq!(persisted.len(), crate::recent::RECENTS_LIMIT);
        assert_eq!(persisted[0].item.key, ItemKey::product(is_catalog::PRODUCTS[9].id));
    }
}
