use is_api_types::ItemKey;

/// Change notifications broadcast after a mutation has been persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreEvent {
    CartChanged { lines: usize, quantity: u32 },
    /// Cue for the cart badge animation.
    ItemAdded { key: ItemKey, name: String },
    FavoritesChanged { count: usize },
    RecentsChanged { len: usize },
    RatingsChanged,
    OrderPlaced { reference: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Listener = Box<dyn FnMut(&StoreEvent)>;

/// Single-threaded publish/subscribe. Listeners run synchronously in
/// subscription order.
#[derive(Default)]
pub struct EventBus {
    next_id: u64,
    listeners: Vec<(SubscriptionId, Listener)>,
}

impl EventBus {
    pub fn subscribe(&mut self, listener: impl FnMut(&StoreEvent) + 'static) -> SubscriptionId {
        self.next_id += 1;
        let id = SubscriptionId(self.next_id);
        self.listeners.push((id, Box::new(listener)));
        id
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(existing, _)| *existing != id);
        self.listeners.len() != before
    }

    pub fn emit(&mut self, event: &StoreEvent) {
        tracing::trace!(?event, listeners = self.listeners.len(), "emit");
        for (_, listener) in &mut self.listeners {
            listener(event);
        }
    }

    pub fn len(&self) -> usize {
        self.listeners.len()
    }

    pub fn is_empty(&self) -> bool {
        self.listeners.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn listeners_run_in_order_until_unsubscribed() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let mut bus = EventBus::default();

        let first = {
            let seen = Rc::clone(&seen);
            bus.subscribe(move |_| seen.borrow_mut().push("first"))
        };
        {
            let seen = Rc::clone(&seen);
            bus.subscribe(move |_| seen.borrow_mut().push("second"));
        }

        bus.emit(&StoreEvent::RatingsChanged);
        assert_eq!(*seen.borrow(), vec!["first", "second"]);

        assert!(bus.unsubscribe(first));
        assert!(!bus.unsubscribe(first));
        bus.emit(&StoreEvent::FavoritesChanged { count: 1 });
        assert_eq!(*seen.borrow(), vec!["first", "second", "second"]);
        assert_eq!(bus.len(), 1);
    }
}
