use is_api_types::ContactDetails;

use crate::cart::Cart;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord)]
pub enum CheckoutStep {
    #[default]
    Review,
    Details,
    Confirm,
}

impl CheckoutStep {
    pub const ALL: [CheckoutStep; 3] = [
        CheckoutStep::Review,
        CheckoutStep::Details,
        CheckoutStep::Confirm,
    ];

    pub fn number(self) -> u8 {
        match self {
            CheckoutStep::Review => 1,
            CheckoutStep::Details => 2,
            CheckoutStep::Confirm => 3,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            CheckoutStep::Review => "Review",
            CheckoutStep::Details => "Details",
            CheckoutStep::Confirm => "Confirm",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CheckoutError {
    #[error("the project bag is empty")]
    EmptyCart,
    #[error("missing required fields: {}", .0.join(", "))]
    MissingFields(Vec<&'static str>),
    #[error("cannot {action} from the {step:?} step")]
    WrongStep {
        step: CheckoutStep,
        action: &'static str,
    },
}

/// Review → Details → Confirm. The terminal action lives on the storefront
/// because it also clears the cart.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CheckoutWizard {
    step: CheckoutStep,
    pub details: ContactDetails,
}

impl CheckoutWizard {
    pub fn step(&self) -> CheckoutStep {
        self.step
    }

    pub fn missing_fields(&self) -> Vec<&'static str> {
        self.details.missing_fields()
    }

    /// Whether the continue action is enabled on the current step.
    pub fn can_continue(&self, cart: &Cart) -> bool {
        self.check(cart).is_ok()
    }

    fn check(&self, cart: &Cart) -> Result<(), CheckoutError> {
        if cart.is_empty() {
            return Err(CheckoutError::EmptyCart);
        }
        match self.step {
            CheckoutStep::Review => Ok(()),
            CheckoutStep::Details | CheckoutStep::Confirm => {
                let missing = self.missing_fields();
                if missing.is_empty() {
                    Ok(())
                } else {
                    Err(CheckoutError::MissingFields(missing))
                }
            }
        }
    }

    pub fn advance(&mut self, cart: &Cart) -> Result<CheckoutStep, CheckoutError> {
        self.check(cart)?;
        self.step = match self.step {
            CheckoutStep::Review => CheckoutStep::Details,
            CheckoutStep::Details => CheckoutStep::Confirm,
            CheckoutStep::Confirm => {
                return Err(CheckoutError::WrongStep {
                    step: self.step,
                    action: "advance",
                });
            }
        };
        Ok(self.step)
    }

    pub fn back(&mut self) -> CheckoutStep {
        self.step = match self.step {
            CheckoutStep::Review | CheckoutStep::Details => CheckoutStep::Review,
            CheckoutStep::Confirm => CheckoutStep::Details,
        };
        self.step
    }

    /// Jump back to an earlier step (the "Edit" links on the confirm step).
    pub fn go_to(&mut self, step: CheckoutStep) -> Result<CheckoutStep, CheckoutError> {
        if step > self.step {
            return Err(CheckoutError::WrongStep {
                step: self.step,
                action: "skip ahead",
            });
        }
        self.step = step;
        Ok(step)
    }

    /// Confirm-step gate for the terminal action.
    pub(crate) fn ready_to_place(&self, cart: &Cart) -> Result<(), CheckoutError> {
        if self.step != CheckoutStep::Confirm {
            return Err(CheckoutError::WrongStep {
                step: self.step,
                action: "place the order",
            });
        }
        self.check(cart)
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use is_api_types::{ItemKey, ItemSummary};

    fn cart_with_item() -> Cart {
        let mut cart = Cart::default();
        cart.add(ItemSummary {
            key: ItemKey::product(4001),
            name: "Oak Table".into(),
            price: 300,
            image: String::new(),
            category: "Tables".into(),
        });
        cart
    }

    fn filled() -> ContactDetails {
        ContactDetails {
            first_name: "Rima".into(),
            last_name: "Haddad".into(),
            phone: "03".into(),
            address: "Street".into(),
            city: "Beirut".into(),
            notes: String::new(),
        }
    }

    #[test]
    fn empty_cart_blocks_review() {
        let mut wizard = CheckoutWizard::default();
        let cart = Cart::default();
        assert!(!wizard.can_continue(&cart));
        assert_eq!(wizard.advance(&cart), Err(CheckoutError::EmptyCart));
        assert_eq!(wizard.step(), CheckoutStep::Review);
    }

    #[test]
    fn details_require_every_field() {
        let cart = cart_with_item();
        let mut wizard = CheckoutWizard::default();
        assert_eq!(wizard.advance(&cart), Ok(CheckoutStep::Details));
        assert!(!wizard.can_continue(&cart));

        wizard.details = ContactDetails {
            city: "   ".into(),
            ..filled()
        };
        assert_eq!(
            wizard.advance(&cart),
            Err(CheckoutError::MissingFields(vec!["city"]))
        );

        wizard.details = filled();
        assert!(wizard.can_continue(&cart));
        assert_eq!(wizard.advance(&cart), Ok(CheckoutStep::Confirm));
        assert!(wizard.advance(&cart).is_err());
    }

    #[test]
    fn back_walks_down_and_stops_at_review() {
        let cart = cart_with_item();
        let mut wizard = CheckoutWizard {
            details: filled(),
            ..CheckoutWizard::default()
        };
        wizard.advance(&cart).unwrap();
        wizard.advance(&cart).unwrap();
        assert_eq!(wizard.back(), CheckoutStep::Details);
        assert_eq!(wizard.back(), CheckoutStep::Review);
        assert_eq!(wizard.back(), CheckoutStep::Review);
        assert!(wizard.go_to(CheckoutStep::Confirm).is_err());
    }

    #[test]
    fn error_lists_missing_fields() {
        let err = CheckoutError::MissingFields(vec!["phone", "city"]);
        assert_eq!(err.to_string(), "missing required fields: phone, city");
    }
}
