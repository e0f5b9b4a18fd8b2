//! Per-attempt deadline around any [`Transport`].

use super::{Request, StatusCode, Transport};
use crate::error::TransportError;
use embassy_time::{with_timeout, Duration};

/// Bounds every attempt of the inner transport by `request.timeout_ms`.
///
/// An expired attempt is dropped and reported as
/// [`TransportError::Timeout`]; fragments delivered before the deadline
/// are discarded with the rest of the attempt.
pub struct TimeoutTransport<T> {
    inner: T,
}

impl<T> TimeoutTransport<T> {
    pub fn new(inner: T) -> Self {
        Self { inner }
    }

    pub fn into_inner(self) -> T {
        self.inner
    }
}

impl<T: Transport> Transport for TimeoutTransport<T> {
    async fn perform_request<F>(
        &mut self,
        request: &Request<'_>,
        on_fragment: F,
    ) -> Result<StatusCode, TransportError>
    where
        F: FnMut(&[u8]),
    {
        let budget = Duration::from_millis(request.timeout_ms);
        match with_timeout(budget, self.inner.perform_request(request, on_fragment)).await {
            Ok(result) => result,
            Err(_) => Err(TransportError::Timeout),
        }
    }
}
