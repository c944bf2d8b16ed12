//! Translation of verified processor events into canonical payment events.
//!
//! A pure mapping over the closed set of known event kinds. Only
//! `charge.succeeded` produces a canonical event; everything else is
//! ignored and acknowledged. Translation never fails: a verified event
//! that cannot be mapped is an `Ignored` outcome, not an error.

use super::gateway_event::{
    CanonicalPaymentEvent, ChargeObject, GatewayEvent, GatewayEventKind,
};

/// Outcome of translating a verified event.
#[derive(Debug, Clone, PartialEq)]
pub enum Translation {
    /// The event maps to a canonical payment event for the bus.
    Canonical(CanonicalPaymentEvent),
    /// The event carries nothing for downstream consumers.
    Ignored {
        /// Diagnostic for the log line, never sent to the processor.
        reason: String,
    },
}

/// Translate a verified event into its canonical form.
///
/// Pure and idempotent: the same event always yields the same outcome.
/// A `charge.succeeded` without an `orderId` metadata entry is ignored
/// with a diagnostic rather than emitted with an empty correlation key,
/// since downstream consumers index by order id.
pub fn translate(event: &GatewayEvent) -> Translation {
    match event.kind() {
        GatewayEventKind::ChargeSucceeded => translate_charge_succeeded(event),
        GatewayEventKind::ChargeRefunded
        | GatewayEventKind::ChargeFailed
        | GatewayEventKind::Unknown => Translation::Ignored {
            reason: format!("unhandled event type {}", event.event_type),
        },
    }
}

fn translate_charge_succeeded(event: &GatewayEvent) -> Translation {
    let charge: ChargeObject = match event.deserialize_object() {
        Ok(charge) => charge,
        Err(e) => {
            return Translation::Ignored {
                reason: format!("malformed charge object: {}", e),
            }
        }
    };

    let order_id = match charge.metadata.get("orderId") {
        Some(order_id) if !order_id.trim().is_empty() => order_id.clone(),
        _ => {
            return Translation::Ignored {
                reason: format!("charge {} has no orderId metadata", charge.id),
            }
        }
    };

    Translation::Canonical(CanonicalPaymentEvent {
        order_id,
        payment_id: charge.id,
        receipt_url: charge.receipt_url.unwrap_or_default(),
    })
}
