use futures::Future;
use std::pin::Pin;
use std::task::{Context, Poll};
use std::time::Duration;
use tower::timeout::TimeoutLayer;
use tower::timeout::error::Elapsed;
use tower::util::BoxService;
use tower::{BoxError, Service, ServiceBuilder};

use crate::common::Photo;
use crate::error::DecodeError;

/// Decodes raw photo bytes on the blocking pool.
#[derive(Debug, Clone, Copy, Default)]
pub struct DecodeService;

impl DecodeService {
    pub fn new() -> Self {
        Self
    }
}

impl Service<Vec<u8>> for DecodeService {
    type Response = Photo;
    type Error = DecodeError;
    type Future = Pin<Box<dyn Future<Output = Result<Self::Response, Self::Error>> + Send>>;

    fn poll_ready(&mut self, _cx: &mut Context<'_>) -> Poll<Result<(), DecodeError>> {
        Poll::Ready(Ok(()))
    }

    fn call(&mut self, bytes: Vec<u8>) -> Self::Future {
        Box::pin(async move {
            tokio::task::spawn_blocking(move || Photo::decode(&bytes))
                .await
                .map_err(|e| DecodeError::Worker(e.to_string()))?
        })
    }
}

pub type BoxedDecoder = BoxService<Vec<u8>, Photo, BoxError>;

/// `DecodeService` bounded by `timeout`.
pub fn timed_decoder(timeout: Duration) -> BoxedDecoder {
    let service = ServiceBuilder::new()
        .layer(TimeoutLayer::new(timeout))
        .service(DecodeService::new());
    BoxService::new(service)
}

/// Recovers a `DecodeError` from the boxed error of a layered decoder.
pub fn into_decode_error(error: BoxError, timeout: Duration) -> DecodeError {
    if error.is::<Elapsed>() {
        return DecodeError::TimedOut(timeout);
    }
    match error.downcast::<DecodeError>() {
        Ok(decode_error) => *decode_error,
        Err(other) => DecodeError::Worker(other.to_string()),
    }
}
