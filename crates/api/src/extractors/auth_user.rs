//! Extractor for the authenticated identity.
//!
//! The auth middleware inserts an `AuthUser` into request extensions; this
//! extractor hands it to handlers that need to know who is calling.

use axum::{
    extract::FromRequestParts,
    http::{request::Parts, StatusCode},
};

use crate::middleware::auth::AuthUser;

impl<S> FromRequestParts<S> for AuthUser
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
            parts
                .extensions
                .get::<AuthUser>()
                .cloned()
                .ok_or((StatusCode::UNAUTHORIZED, "Authentication required"))
        })
    }
}
