//! Message fetching - one bounded GET per attempt.
//!
//! ## Flow
//!
//! 1. The [`Transport`] performs the request and hands body fragments to
//!    our callback in transfer order.
//! 2. Fragments land in a fresh [`FetchBuffer`], which truncates instead of
//!    overflowing.
//! 3. On `200 OK` with a non-empty body the payload is normalised into a
//!    bounded [`Message`].
//!
//! Connection setup, TLS and link recovery belong to the transport.

pub mod accumulator;
pub mod payload;
#[cfg(any(feature = "embedded", test))]
pub mod timeout;


use crate::config::{MAX_RESPONSE_SIZE, MESSAGE_CAPACITY};
use crate::error::{FetchError, TransportError};
use accumulator::FetchBuffer;
use heapless::String;

/// A displayable message.
pub type Message = String<MESSAGE_CAPACITY>;

/// HTTP status code reported by the transport.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct StatusCode(pub u16);

impl StatusCode {
    pub const OK: StatusCode = StatusCode(200);

    /// Only `200 OK` carries a message.
    pub fn is_ok(self) -> bool {
        self == Self::OK
    }
}

/// A single GET request.
#[derive(Clone, Copy, Debug)]
pub struct Request<'a> {
    pub url: &'a str,
    pub headers: &'a [(&'a str, &'a str)],
    /// Time budget for the whole attempt (ms).
    pub timeout_ms: u64,
}

/// Network collaborator.
///
/// Implementors own connection setup, TLS trust validation and any
/// transport-level recovery.  `on_fragment` must be called with body
/// bytes strictly in transfer order; it may be called zero times.
#[allow(async_fn_in_trait)]
pub trait Transport {
    async fn perform_request<F>(
        &mut self,
        request: &Request<'_>,
        on_fragment: F,
    ) -> Result<StatusCode, TransportError>
    where
        F: FnMut(&[u8]);
}

/// A successfully fetched message.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Fetched {
    /// Normalised message text.
    pub message: Message,
    /// Body bytes received (after response-buffer truncation).
    pub received: usize,
    /// The response or the message had to be cut.
    pub truncated: bool,
}

/// Fetch and normalise one message.
pub async fn fetch_message<T: Transport>(
    transport: &mut T,
    request: &Request<'_>,
) -> Result<Fetched, FetchError> {
    let mut buffer: FetchBuffer<MAX_RESPONSE_SIZE> = FetchBuffer::new();

    let status = transport
        .perform_request(request, |fragment| {
            buffer.accumulate(fragment);
        })
        .await?;

    if !status.is_ok() {
        return Err(FetchError::BadStatus(status));
    }
    if buffer.is_empty() {
        return Err(FetchError::EmptyBody);
    }

    let mut message = Message::new();
    let cut = payload::normalize_into(buffer.finalize(), &mut message);

    Ok(Fetched {
        message,
        received: buffer.len(),
        truncated: buffer.is_truncated() || cut,
    })
}
