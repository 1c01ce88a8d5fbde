//! Request extractors.

pub mod auth_user;
pub mod idempotency_key;

pub use idempotency_key::OptionalIdempotencyKey;
