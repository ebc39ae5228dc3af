//! Global application state.
//!
//! Uses `RefCell`-wrapped `thread_local!` storage (WASM is single-threaded).
//! The storefront core owns the persisted collections; this module adds the
//! page-local bits (route, listing filters, print selection, open drawer).

use anyhow::anyhow;
use gloo_storage::{LocalStorage, Storage};
use is_api_types::ItemKind;
use is_catalog::PrintSelection;
use is_catalog::query::{PAGE_SIZE, PaintingQuery, PrintQuery, ProductQuery};
use is_handoff::WhatsApp;
use is_storage::SnapshotStore;
use is_storefront_core::ratings::{RatedFilter, RatingSort};
use is_storefront_core::{CheckoutWizard, Route, Storefront};
use std::cell::RefCell;
use std::collections::HashSet;

// ── localStorage-backed snapshot store ──

/// `window.localStorage`, one JSON string per key.
#[derive(Debug, Default, Clone, Copy)]
pub struct LocalStore;

impl SnapshotStore for LocalStore {
    fn get(&self, key: &str) -> Option<String> {
        LocalStorage::raw().get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) -> anyhow::Result<()> {
        LocalStorage::raw()
            .set_item(key, value)
            .map_err(|e| anyhow!("localStorage rejected {key}: {e:?}"))
    }

    fn remove(&self, key: &str) -> anyhow::Result<()> {
        LocalStorage::raw()
            .remove_item(key)
            .map_err(|e| anyhow!("localStorage remove {key}: {e:?}"))
    }
}

// ── Page-local state ──

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Drawer {
    Cart,
    Favorites,
}

/// Filters for the three listings. Each survives navigation until reset.
#[derive(Debug, Clone)]
pub struct Listing {
    pub products: ProductQuery,
    pub paintings: PaintingQuery,
    pub prints: PrintQuery,
    /// Cards shown before "Show more".
    pub visible: usize,
}

impl Default for Listing {
    fn default() -> Self {
        Self {
            products: ProductQuery::default(),
            paintings: PaintingQuery::default(),
            prints: PrintQuery::default(),
            visible: PAGE_SIZE,
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct RatingsView {
    pub kind: Option<ItemKind>,
    pub filter: RatedFilter,
    pub sort: RatingSort,
}

/// Central application state.
pub struct AppState {
    pub front: Storefront<LocalStore>,
    pub wizard: CheckoutWizard,
    pub whatsapp: WhatsApp,
    pub route: Route,
    pub listing: Listing,
    pub selection: PrintSelection,
    pub ratings_view: RatingsView,
    pub drawer: Option<Drawer>,
    /// Notices that already have dismissal timers.
    pub timed_notices: HashSet<u64>,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            front: Storefront::load(LocalStore),
            wizard: CheckoutWizard::default(),
            whatsapp: WhatsApp::new(Some(is_handoff::WHATSAPP_NUMBER.to_owned())),
            route: Route::Home,
            listing: Listing::default(),
            selection: PrintSelection::default(),
            ratings_view: RatingsView::default(),
            drawer: None,
            timed_notices: HashSet::new(),
        }
    }
}

// ── Thread-local singleton ──

thread_local! {
    static STATE: RefCell<AppState> = RefCell::new(AppState::default());
}

/// Run a closure with shared read access to the state.
pub fn with<F, R>(f: F) -> R
where
    F: FnOnce(&AppState) -> R,
{
    STATE.with(|s| f(&s.borrow()))
}

/// Run a closure with mutable access to the state.
///
/// Store event listeners fire inside this borrow, so they must not call
/// back into `with`/`with_mut`.
pub fn with_mut<F, R>(f: F) -> R
where
    F: FnOnce(&mut AppState) -> R,
{
    STATE.with(|s| f(&mut s.borrow_mut()))
}

// ── Convenience accessors ──

pub fn route() -> Route {
    with(|s| s.route.clone())
}

pub fn drawer() -> Option<Drawer> {
    with(|s| s.drawer)
}

pub fn set_drawer(drawer: Option<Drawer>) {
    with_mut(|s| s.drawer = drawer);
}

/// Wall clock in epoch milliseconds.
pub fn now_ms() -> u64 {
    js_sys::Date::now() as u64
}
