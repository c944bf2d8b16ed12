//! Payments Gateway - checkout session creation and webhook event translation
//!
//! This crate integrates the order platform with the external payment
//! processor: it builds hosted checkout sessions for incoming orders and
//! turns verified processor webhooks into canonical payment events on the
//! message bus for downstream order-fulfillment consumers.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
