//! Domain layer for the Site Manager backend.
//!
//! This crate contains the domain models and request/response types for the
//! content entities (portfolio projects, services, testimonials, offers),
//! contact submissions, page views, site settings, and admin users.

pub mod models;
