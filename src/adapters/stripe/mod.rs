//! Payment processor adapter (Stripe-compatible API).

mod gateway;
mod types;

pub use gateway::{StripeConfig, StripeGateway};
