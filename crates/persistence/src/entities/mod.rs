//! Database entity definitions.
//!
//! Entities are direct mappings to database rows.

pub mod contact_submission;
pub mod idempotency_key;
pub mod offer;
pub mod portfolio_project;
pub mod service;
pub mod testimonial;
pub mod user;

pub use contact_submission::ContactSubmissionEntity;
pub use idempotency_key::IdempotencyKeyEntity;
pub use offer::OfferEntity;
pub use portfolio_project::ProjectEntity;
pub use service::ServiceEntity;
pub use testimonial::TestimonialEntity;
pub use user::UserEntity;
