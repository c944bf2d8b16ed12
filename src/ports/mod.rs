//! Ports - interfaces between the application core and external systems.

mod event_publisher;
mod payment_gateway;

pub use event_publisher::{EventPublisher, PublishError};
pub use payment_gateway::{
    CheckoutSession, GatewayError, PaymentGateway, SessionLineItem, SessionRequest,
};
