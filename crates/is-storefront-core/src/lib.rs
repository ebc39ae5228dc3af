//! Client-side storefront state: the Project Bag, favorites, recently viewed,
//! curator ratings, the checkout wizard and the notifications that tie them
//! to the UI.
//!
//! Everything here is single-threaded. `Storefront` is the one owner of the
//! mutable collections; views read from it and call its methods, and
//! listeners registered with [`Storefront::subscribe`] hear about every
//! change after it has been written to the snapshot store.

pub mod cart;
pub mod checkout;
pub mod events;
pub mod favorites;
pub mod notice;
pub mod pricing;
pub mod ratings;
pub mod recent;
pub mod route;
pub mod storefront;

pub use cart::Cart;
pub use checkout::{CheckoutError, CheckoutStep, CheckoutWizard};
pub use events::{EventBus, StoreEvent, SubscriptionId};
pub use favorites::Favorites;
pub use notice::{Notice, NoticeKind, NoticeQueue};
pub use pricing::ShippingPolicy;
pub use ratings::{Rater, RatingError, Ratings};
pub use recent::Recents;
pub use route::Route;
pub use storefront::{FavoriteEntry, Storefront};
