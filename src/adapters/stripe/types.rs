//! Wire types for the processor's checkout session API.

use serde::Deserialize;

/// Checkout session object returned by `POST /v1/checkout/sessions`.
///
/// Only the fields this service forwards to its caller are captured.
#[derive(Debug, Clone, Deserialize)]
pub struct SessionResponse {
    /// Session identifier (cs_xxx format).
    pub id: String,

    /// Hosted checkout page URL. Present on freshly created sessions.
    #[serde(default)]
    pub url: Option<String>,

    /// Success redirect echoed back by the processor.
    #[serde(default)]
    pub success_url: Option<String>,

    /// Cancel redirect echoed back by the processor.
    #[serde(default)]
    pub cancel_url: Option<String>,
}
