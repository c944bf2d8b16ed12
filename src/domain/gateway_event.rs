//! Processor webhook event types and the canonical payment event.
//!
//! `GatewayEvent` mirrors the processor's webhook envelope as it arrives on
//! the wire; only fields relevant to our processing are captured. It is
//! produced exclusively by the webhook verifier - never constructed
//! directly from an unverified request body.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Verified processor webhook event.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GatewayEvent {
    /// Unique event identifier (evt_xxx format).
    pub id: String,

    /// Processor event type (e.g. "charge.succeeded").
    #[serde(rename = "type")]
    pub event_type: String,

    /// Unix timestamp at which the processor created the event.
    pub created: i64,

    /// Container for the event-specific object.
    pub data: GatewayEventData,

    /// Whether this is a live mode event (vs test mode).
    #[serde(default)]
    pub livemode: bool,
}

/// Container for event-specific data.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GatewayEventData {
    /// The object that triggered the event (shape depends on event type).
    pub object: serde_json::Value,
}

impl GatewayEvent {
    /// Parse the event type into a known enum variant.
    pub fn kind(&self) -> GatewayEventKind {
        GatewayEventKind::from_str(&self.event_type)
    }

    /// Attempt to deserialize the data object as the specified type.
    pub fn deserialize_object<T: serde::de::DeserializeOwned>(
        &self,
    ) -> Result<T, serde_json::Error> {
        serde_json::from_value(self.data.object.clone())
    }
}

/// Closed set of processor event kinds this service recognizes.
///
/// Anything outside the set maps to `Unknown` and is acknowledged without
/// further processing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GatewayEventKind {
    /// A charge completed successfully.
    ChargeSucceeded,
    /// A charge was refunded.
    ChargeRefunded,
    /// A charge attempt failed.
    ChargeFailed,
    /// Unknown or unhandled event type.
    Unknown,
}

impl GatewayEventKind {
    /// Parse an event kind from the processor's type string.
    pub fn from_str(s: &str) -> Self {
        match s {
            "charge.succeeded" => Self::ChargeSucceeded,
            "charge.refunded" => Self::ChargeRefunded,
            "charge.failed" => Self::ChargeFailed,
            _ => Self::Unknown,
        }
    }

    /// The processor's event type string for this kind.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ChargeSucceeded => "charge.succeeded",
            Self::ChargeRefunded => "charge.refunded",
            Self::ChargeFailed => "charge.failed",
            Self::Unknown => "unknown",
        }
    }
}

/// Charge object carried by charge.* events.
///
/// Only the fields the translator extracts are captured.
#[derive(Debug, Clone, Deserialize)]
pub struct ChargeObject {
    /// Processor charge identifier (ch_xxx format).
    pub id: String,

    /// URL of the hosted receipt for this charge.
    #[serde(default)]
    pub receipt_url: Option<String>,

    /// Metadata attached when the checkout session was created.
    #[serde(default)]
    pub metadata: HashMap<String, String>,
}

/// Canonical internal payment event.
///
/// The only structure that crosses the trust boundary into the message
/// bus. `order_id` is guaranteed non-empty: the translator drops events
/// without it rather than emitting an empty correlation key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CanonicalPaymentEvent {
    /// The order this payment settles, used as the correlation key by
    /// downstream fulfillment consumers.
    #[serde(rename = "orderId")]
    pub order_id: String,

    /// The processor's identifier for the payment.
    #[serde(rename = "paymentId")]
    pub payment_id: String,

    /// Receipt reference for the customer-facing receipt page.
    #[serde(rename = "receiptUrl")]
    pub receipt_url: String,
}

impl CanonicalPaymentEvent {
    /// Bus topic canonical payment events are published on.
    pub const TOPIC: &'static str = "payment.succeeded";
}
