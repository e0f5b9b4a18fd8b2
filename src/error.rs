//! Error types for msgboard.
//!
//! We avoid `alloc` - all error variants carry only fixed-size data.
//! Implements `defmt::Format` (behind the `defmt` feature) for efficient
//! on-target logging.

use crate::fetch::StatusCode;

/// Why a fetch attempt produced no message.
///
/// Every variant collapses to the same visible behaviour: the sentinel
/// text is shown and the next attempt follows the normal interval.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum FetchError {
    /// The transport could not complete the request.
    Transport(TransportError),

    /// The server answered with something other than `200 OK`.
    BadStatus(StatusCode),

    /// `200 OK` but not a single body byte arrived.
    EmptyBody,
}

/// Subset of transport errors we propagate (keeps the enum `Copy`-friendly).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TransportError {
    /// No network link / connection refused.
    Connect,
    /// TLS handshake or certificate validation failed.
    Tls,
    /// The attempt exceeded its time budget.
    Timeout,
    /// Read/write failure after the connection was established.
    Io,
    /// Raw error code from the network stack.
    Raw(i32),
}

/// A draw call on the display failed (bus error, controller not responding).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DisplayError;

// Convenience conversions

impl From<TransportError> for FetchError {
    fn from(e: TransportError) -> Self {
        FetchError::Transport(e)
    }
}
