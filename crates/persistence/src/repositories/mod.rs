//! Repository implementations for database operations.

pub mod analytics;
pub mod contact_submission;
pub mod idempotency_key;
pub mod offer;
pub mod page_view;
pub mod portfolio_project;
pub mod service;
pub mod testimonial;
pub mod user;

pub use analytics::AnalyticsRepository;
pub use contact_submission::ContactSubmissionRepository;
pub use idempotency_key::IdempotencyKeyRepository;
pub use offer::OfferRepository;
pub use page_view::PageViewRepository;
pub use portfolio_project::ProjectRepository;
pub use service::ServiceRepository;
pub use testimonial::TestimonialRepository;
pub use user::UserRepository;
