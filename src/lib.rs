//! A concurrent, time-aware notification registry.
//!
//! Producers [`place`](NotificationRegistry::place) transient user-facing
//! messages into a [`NotificationRegistry`]; consumers take newest-first
//! snapshots and subscribe to a payload-free change signal. Entries with an
//! expiration retire themselves through detached timer tasks. Scopes group
//! placements for bulk cancellation, recorders passively capture every
//! placement attempt.

mod clock;
mod errors;
mod filter;
mod message;
mod registry;

pub use clock::*;
pub use errors::*;
pub use filter::*;
pub use message::*;
pub use registry::*;
