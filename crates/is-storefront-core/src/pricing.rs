use is_api_types::OrderTotals;

pub const SHIPPING_FEE: u64 = 50;
pub const FREE_SHIPPING_THRESHOLD: u64 = 500;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShippingPolicy {
    pub fixed_fee: u64,
    /// Orders strictly above this subtotal ship free.
    pub free_threshold: u64,
}

impl Default for ShippingPolicy {
    fn default() -> Self {
        Self {
            fixed_fee: SHIPPING_FEE,
            free_threshold: FREE_SHIPPING_THRESHOLD,
        }
    }
}

impl ShippingPolicy {
    pub fn shipping_for(&self, subtotal: u64) -> u64 {
        if subtotal > self.free_threshold {
            0
        } else {
            self.fixed_fee
        }
    }

    pub fn quote(&self, subtotal: u64) -> OrderTotals {
        let shipping = self.shipping_for(subtotal);
        OrderTotals {
            subtotal,
            shipping,
            total: subtotal.saturating_add(shipping),
        }
    }

    /// How much more the customer must spend for free shipping.
    pub fn remaining_for_free(&self, subtotal: u64) -> Option<u64> {
        (subtotal <= self.free_threshold).then(|| self.free_threshold + 1 - subtotal)
    }
}
