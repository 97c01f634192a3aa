//! Seed a development database with demo catalog data.
//!
//! Applies pending migrations first, then runs `tourdesk_db::seed::run`.
//! Safe to run repeatedly.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "tourdesk_db=info,tourdesk_seed=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let database_url = std::env::var("DATABASE_URL").expect("DATABASE_URL must be set");

    let pool = tourdesk_db::create_pool(&database_url)
        .await
        .expect("Failed to connect to database");

    tourdesk_db::run_migrations(&pool)
        .await
        .expect("Failed to run database migrations");

    let summary = tourdesk_db::seed::run(&pool)
        .await
        .expect("Failed to seed database");

    tracing::info!(?summary, "Seeding finished");
    pool.close().await;
}
