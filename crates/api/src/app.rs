use axum::{
    middleware,
    routing::{get, post, put},
    Router,
};
use sqlx::PgPool;
use std::sync::{Arc, RwLock};
use std::time::Duration;
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use domain::models::SiteSettings;

use crate::config::Config;
use crate::middleware::{
    metrics_handler, metrics_middleware, rate_limit_middleware, require_admin, require_auth,
    security_headers_middleware, trace_id, RateLimiterState,
};
use crate::routes::{
    auth, contacts, dashboard, health, offers, page_views, projects, services, settings,
    testimonials,
};

#[derive(Clone)]
pub struct AppState {
    pub pool: PgPool,
    pub config: Arc<Config>,
    /// Process-local site settings; reset to defaults on restart.
    pub settings: Arc<RwLock<SiteSettings>>,
    pub rate_limiter: Option<Arc<RateLimiterState>>,
}

pub fn create_app(config: Config, pool: PgPool) -> Router {
    let config = Arc::new(config);

    // Rate limiting applies to the public contact form only; 0 disables it
    let rate_limiter = if config.security.contact_rate_limit_per_minute > 0 {
        Some(Arc::new(RateLimiterState::new(
            config.security.contact_rate_limit_per_minute,
        )))
    } else {
        None
    };

    let state = AppState {
        pool,
        config: config.clone(),
        settings: Arc::new(RwLock::new(SiteSettings::default())),
        rate_limiter,
    };

    // Build CORS layer based on configuration
    let cors = if config.security.cors_origins.is_empty() {
        // Default: allow any origin (for development)
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any)
    } else {
        // Production: only allow specified origins
        use tower_http::cors::AllowOrigin;
        let origins: Vec<_> = config
            .security
            .cors_origins
            .iter()
            .filter_map(|o| o.parse().ok())
            .collect();
        CorsLayer::new()
            .allow_origin(AllowOrigin::list(origins))
            .allow_methods(Any)
            .allow_headers(Any)
    };

    // Public content and auth routes (no authentication required)
    let public_routes = Router::new()
        .route("/api/v1/projects", get(projects::list_projects))
        .route("/api/v1/services", get(services::list_services))
        .route(
            "/api/v1/testimonials/featured",
            get(testimonials::list_featured_testimonials),
        )
        .route("/api/v1/offers/active", get(offers::list_active_offers))
        .route(
            "/api/v1/contact/whatsapp-link",
            post(contacts::whatsapp_link),
        )
        .route("/api/v1/page-views", post(page_views::track_page_view))
        .route("/api/v1/auth/login", post(auth::login))
        .route("/api/v1/auth/refresh", post(auth::refresh));

    // The contact form gets its own per-client budget
    let contact_routes = Router::new()
        .route("/api/v1/contact", post(contacts::submit_contact))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            rate_limit_middleware,
        ));

    // Routes for any signed-in identity
    let session_routes = Router::new()
        .route("/api/v1/auth/me", get(auth::me))
        .route("/api/v1/auth/logout", post(auth::logout))
        .route_layer(middleware::from_fn_with_state(state.clone(), require_auth));

    // Admin routes (require the admin role)
    let admin_routes = Router::new()
        .route(
            "/api/v1/admin/projects",
            get(projects::list_projects).post(projects::create_project),
        )
        .route(
            "/api/v1/admin/projects/:id",
            put(projects::update_project).delete(projects::delete_project),
        )
        .route(
            "/api/v1/admin/services",
            get(services::list_services).post(services::create_service),
        )
        .route(
            "/api/v1/admin/services/:id",
            put(services::update_service).delete(services::delete_service),
        )
        .route(
            "/api/v1/admin/testimonials",
            get(testimonials::list_testimonials).post(testimonials::create_testimonial),
        )
        .route(
            "/api/v1/admin/testimonials/:id",
            put(testimonials::update_testimonial).delete(testimonials::delete_testimonial),
        )
        .route(
            "/api/v1/admin/offers",
            get(offers::list_offers).post(offers::create_offer),
        )
        .route(
            "/api/v1/admin/offers/:id",
            put(offers::update_offer).delete(offers::delete_offer),
        )
        .route("/api/v1/admin/contacts", get(contacts::list_submissions))
        .route(
            "/api/v1/admin/contacts/:id/read",
            post(contacts::mark_submission_read),
        )
        .route(
            "/api/v1/admin/settings",
            get(settings::get_settings).put(settings::update_settings),
        )
        .route("/api/v1/admin/dashboard", get(dashboard::get_dashboard))
        .route_layer(middleware::from_fn_with_state(state.clone(), require_admin));

    // Health and metrics (no authentication required)
    let ops_routes = Router::new()
        .route("/api/health", get(health::health_check))
        .route("/api/health/ready", get(health::ready))
        .route("/api/health/live", get(health::live))
        .route("/metrics", get(metrics_handler));

    // Merge all routes
    Router::new()
        .merge(ops_routes)
        .merge(public_routes)
        .merge(contact_routes)
        .merge(session_routes)
        .merge(admin_routes)
        // Global middleware (order matters: bottom layers run first)
        .layer(middleware::from_fn(security_headers_middleware))
        .layer(CompressionLayer::new())
        .layer(TimeoutLayer::new(Duration::from_secs(
            config.server.request_timeout_secs,
        )))
        .layer(middleware::from_fn(metrics_middleware))
        .layer(TraceLayer::new_for_http())
        .layer(middleware::from_fn(trace_id))
        .layer(cors)
        .with_state(state)
}

