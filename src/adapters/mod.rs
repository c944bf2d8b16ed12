//! Adapters - implementations of ports for concrete external systems.

pub mod events;
pub mod http;
pub mod stripe;
