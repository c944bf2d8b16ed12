//! Domain layer - pure payment logic with no I/O.

pub mod checkout;
pub mod gateway_event;
pub mod translator;
pub mod webhook_errors;
pub mod webhook_verifier;

pub use checkout::{to_minor_units, CheckoutItem, CheckoutRequest, CheckoutValidationError};
pub use gateway_event::{CanonicalPaymentEvent, ChargeObject, GatewayEvent, GatewayEventKind};
pub use translator::{translate, Translation};
pub use webhook_errors::WebhookError;
pub use webhook_verifier::{SignatureHeader, WebhookVerifier};
