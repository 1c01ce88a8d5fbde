//! Idempotency key header extractor.
//!
//! Guards the public contact form against duplicate submissions: a client
//! may send the same `Idempotency-Key` on a retry and receive the first
//! response back instead of creating a second record.

use axum::{
    extract::FromRequestParts,
    http::{header::HeaderName, request::Parts, StatusCode},
};
use shared::crypto::sha256_hex;

/// The header name for idempotency keys.
pub const IDEMPOTENCY_KEY_HEADER: &str = "idempotency-key";

/// Idempotency key extracted from request headers.
///
/// Only the SHA-256 hash is stored.
#[derive(Debug, Clone)]
pub struct IdempotencyKey {
    pub original: String,
    pub hash: String,
}

impl IdempotencyKey {
    pub fn new(original: String) -> Self {
        let hash = sha256_hex(&original);
        Self { original, hash }
    }
}

/// Optional idempotency key extractor. `None` if the header is not present.
#[derive(Debug, Clone)]
pub struct OptionalIdempotencyKey(pub Option<IdempotencyKey>);

impl<S> FromRequestParts<S> for OptionalIdempotencyKey
where
    S: Send + Sync,
{
    type Rejection = (StatusCode, &'static str);

    fn from_request_parts<'life0, 'life1, 'async_trait>(
        parts: &'life0 mut Parts,
        _state: &'life1 S,
    ) -> ::core::pin::Pin<
        Box<
            dyn ::core::future::Future<Output = Result<Self, Self::Rejection>>
                + ::core::marker::Send
                + 'async_trait,
        >,
    >
    where
        'life0: 'async_trait,
        'life1: 'async_trait,
        Self: 'async_trait,
    {
        Box::pin(async move {
            let header_name = HeaderName::from_static(IDEMPOTENCY_KEY_HEADER);

            let key = parts
                .headers
                .get(&header_name)
                .and_then(|value| value.to_str().ok())
                .filter(|s| !s.is_empty())
                .map(|s| IdempotencyKey::new(s.to_string()));

            Ok(OptionalIdempotencyKey(key))
        })
    }
}
