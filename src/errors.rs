//! Notification Registry Error Hierarchy
//!
//! Defines the error types surfaced by the registry API, categorized by
//! contract violations and lifecycle state.

#[doc(hidden)]
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A required input violated the call contract (empty filter path,
    /// unknown notification type name). Raised synchronously at the call
    /// site, never from a timer path.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// A query-style operation was invoked on a disposed registry.
    ///
    /// Mutation paths (`place`, `dismiss`, `cancel`, `dispose`) degrade to
    /// silent no-ops after disposal instead of returning this error.
    #[error("{0} has been disposed")]
    Disposed(&'static str),
}
