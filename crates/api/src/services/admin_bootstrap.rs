//! Startup bootstrap for the initial admin account.
//!
//! The dashboard has no self-registration; without at least one admin the
//! service would be unreachable behind its own gate.

use anyhow::Context;
use sqlx::PgPool;
use tracing::{info, warn};

use persistence::repositories::UserRepository;
use shared::crypto::random_secret;
use shared::password::hash_password;

use crate::config::AdminConfig;

/// Create the configured admin account if no active admin exists yet.
pub async fn ensure_admin_account(pool: &PgPool, config: &AdminConfig) -> anyhow::Result<()> {
    let users = UserRepository::new(pool.clone());

    if users.count_admins().await? > 0 {
        return Ok(());
    }

    let password = if config.password.is_empty() {
        let generated = random_secret(20);
        // Printed exactly once; there is no other way to recover it.
        warn!(
            email = %config.email,
            password = %generated,
            "No admin account found; generated initial admin credentials"
        );
        generated
    } else {
        config.password.clone()
    };

    let password_hash = hash_password(&password).context("Failed to hash bootstrap password")?;

    users
        .insert(&config.email, &password_hash, &config.display_name, "admin")
        .await
        .context("Failed to create bootstrap admin account")?;

    info!(email = %config.email, "Created initial admin account");
    Ok(())
}
