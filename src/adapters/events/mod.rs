//! Message bus adapters.
//!
//! - `RedisEventPublisher` - production pub/sub transport
//! - `InMemoryEventBus` - synchronous, in-process bus for testing

mod in_memory;
mod redis_publisher;

pub use in_memory::InMemoryEventBus;
pub use redis_publisher::RedisEventPublisher;
