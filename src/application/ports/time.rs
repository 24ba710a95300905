// src/application/ports/time.rs
use chrono::{DateTime, Utc};

/// Ambient wall-clock access. Domain logic never reads a global clock; it
/// receives `now` explicitly from the services that own one of these.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}
