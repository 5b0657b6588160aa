mod app_state;
mod config;
mod database;
mod models;
mod routes;
pub use app_state::AppState;
pub use config::Config;

use crate::database::{Database, PostgresDatabase};
use crate::models::{user::HASH_COST, NewUser, Role};
use crate::routes::make_app;
use axum_server::tls_rustls::RustlsConfig;
use dotenv::dotenv;
use std::error::Error;
use std::net::SocketAddr;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = Config::init();

    info!("Connecting to PostgreSQL...");
    let db = PostgresDatabase::new(database::connect_sqlx(&config.db_url).await);
    db.migrate().await?;
    info!("Connected to PostgreSQL!");

    let db: Arc<dyn Database> = Arc::new(db);
    seed_admin(db.as_ref(), &config).await?;

    let tls = RustlsConfig::from_pem_file(&config.tls_cert_path, &config.tls_key_path).await?;
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));

    let state = Arc::new(AppState { db, config });
    let app = make_app(state)?;

    info!("Server running on https://localhost:{}", addr.port());
    axum_server::bind_rustls(addr, tls)
        .serve(app.into_make_service())
        .await?;
    Ok(())
}

/// Creates the seed admin account on first startup. Later startups find the
/// existing admin and leave it untouched.
async fn seed_admin(db: &dyn Database, config: &Config) -> Result<(), Box<dyn Error>> {
    if db.get_user_with_role(Role::Admin).await?.is_some() {
        info!("Admin account is already created");
        return Ok(());
    }

    let password_hash = bcrypt::hash(&config.admin_password, HASH_COST)?;
    let admin = db
        .create_user(&NewUser {
            full_name: "Admin".to_string(),
            id_number: "0000000000000".to_string(),
            account_number: config.admin_account_number.clone(),
            password_hash,
            role: Role::Admin,
        })
        .await?;

    info!("Admin account established with ID: {}", admin.account_number);
    Ok(())
}
