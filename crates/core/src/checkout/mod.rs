//! Checkout: address capture, payment selection and order placement.

pub mod address;
pub mod flow;
pub mod order;
pub mod payment;

pub use address::{AddressError, AddressField, AddressForm};
pub use flow::{CheckoutError, CheckoutFlow, CheckoutStep};
pub use order::{OrderConfirmation, OrderId, estimated_delivery};
pub use payment::{
    DELIVERY_CHARGE, FREE_DELIVERY_THRESHOLD, PaymentMethod, PaymentQuote, UpiProvider,
    amount_for_free_delivery, delivery_charge,
};
