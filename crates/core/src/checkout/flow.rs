//! Two-step checkout state machine.
//!
//! ```text
//! Address --submit_address (valid)--> Payment --place_order--> (placed)
//!    ^                                   |
//!    +----------back_to_address----------+
//! ```

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::cart::Cart;
use crate::checkout::{
    AddressError, AddressForm, OrderConfirmation, OrderId, PaymentMethod, PaymentQuote,
};

/// The step the visitor is on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CheckoutStep {
    #[default]
    Address,
    Payment,
}

impl CheckoutStep {
    /// Step number shown in the progress indicator (1-indexed).
    #[must_use]
    pub const fn number(self) -> u8 {
        match self {
            Self::Address => 1,
            Self::Payment => 2,
        }
    }

    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Address => "Address",
            Self::Payment => "Payment",
        }
    }
}

/// Why an order could not be placed.
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckoutError {
    #[error("cart is empty")]
    EmptyCart,
    #[error("delivery address has not been confirmed")]
    NotReadyToPlace,
}

/// Checkout progress for one visitor.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckoutFlow {
    step: CheckoutStep,
    address: AddressForm,
    payment: PaymentMethod,
}

impl CheckoutFlow {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub const fn step(&self) -> CheckoutStep {
        self.step
    }

    /// The address as last submitted.
    #[must_use]
    pub const fn address(&self) -> &AddressForm {
        &self.address
    }

    #[must_use]
    pub const fn payment(&self) -> PaymentMethod {
        self.payment
    }

    /// Submit the address step.
    ///
    /// The submitted values are kept even when rejected so the form can be
    /// shown again as typed. A valid address moves the flow to payment.
    ///
    /// # Errors
    ///
    /// Returns the field errors when the address is invalid; the flow stays
    /// on the address step.
    pub fn submit_address(&mut self, form: AddressForm) -> Result<(), Vec<AddressError>> {
        self.address = form;
        match self.address.validate() {
            Ok(()) => {
                self.step = CheckoutStep::Payment;
                Ok(())
            }
            Err(errors) => {
                self.step = CheckoutStep::Address;
                Err(errors)
            }
        }
    }

    /// Go back to the address step, keeping the entered address.
    pub const fn back_to_address(&mut self) {
        self.step = CheckoutStep::Address;
    }

    pub const fn select_payment(&mut self, method: PaymentMethod) {
        self.payment = method;
    }

    /// What the cart costs under the selected payment method.
    #[must_use]
    pub fn quote(&self, cart: &Cart) -> PaymentQuote {
        PaymentQuote::new(cart.total(), self.payment)
    }

    /// Place the order.
    ///
    /// Computes the amount payable now, generates an order id, and empties
    /// the cart. The flow is consumed; a new checkout starts from scratch.
    ///
    /// # Errors
    ///
    /// Fails without touching the cart if it is empty or if the address step
    /// has not been completed.
    pub fn place_order<R: Rng + ?Sized>(
        self,
        cart: &mut Cart,
        rng: &mut R,
    ) -> Result<OrderConfirmation, (Self, CheckoutError)> {
        if cart.is_empty() {
            return Err((self, CheckoutError::EmptyCart));
        }
        if self.step != CheckoutStep::Payment {
            return Err((self, CheckoutError::NotReadyToPlace));
        }

        let amount_paid = self.quote(cart).payable_now;
        let order_id = OrderId::generate(rng);
        cart.clear();

        Ok(OrderConfirmation {
            order_id,
            amount_paid,
        })
    }
}
