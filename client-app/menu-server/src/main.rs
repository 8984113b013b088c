use std::net::SocketAddr;
use std::sync::Arc;

use menu_api::{build_router, AppState};
use menu_core::repositories::{CategoryRepository, MenuItemRepository};
use menu_infrastructure::{
    create_pool, run_migrations, InMemoryMenuStore, PgCategoryRepository, PgMenuItemRepository,
};
use menu_shared::config::{AppConfig, DatabaseBackend};
use tracing::{error, info, warn};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env
    dotenvy::dotenv().ok();

    // Initialize telemetry
    menu_shared::telemetry::init_telemetry();

    info!("Menu server starting...");

    // Load configuration
    let config = match AppConfig::load() {
        Ok(c) => c,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    let (items, categories) = repositories(&config).await?;

    // Create App State
    let state = AppState::from_config(items, categories, &config);
    let app = build_router(state);

    // Bind address
    let host: std::net::IpAddr = config.app.host.parse()?;
    let addr = SocketAddr::from((host, config.app.port));
    info!("Listening on {}", addr);

    // Start server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

async fn repositories(
    config: &AppConfig,
) -> anyhow::Result<(Arc<dyn MenuItemRepository>, Arc<dyn CategoryRepository>)> {
    match config.database.backend {
        DatabaseBackend::Postgres => {
            info!("Connecting to database...");
            let pool = create_pool(
                &config.database.url,
                config.database.max_connections,
                config.database.min_connections,
            )
            .await?;
            info!("Database connection established.");

            if config.database.run_migrations {
                run_migrations(&pool).await?;
                info!("Migrations applied.");
            }

            let items: Arc<dyn MenuItemRepository> = Arc::new(PgMenuItemRepository::new(pool.clone()));
            let categories: Arc<dyn CategoryRepository> = Arc::new(PgCategoryRepository::new(pool));
            Ok((items, categories))
        }
        DatabaseBackend::Memory => {
            warn!("Using in-memory store; data is lost on shutdown");
            let store = Arc::new(InMemoryMenuStore::new());
            let items: Arc<dyn MenuItemRepository> = store.clone();
            let categories: Arc<dyn CategoryRepository> = store;
            Ok((items, categories))
        }
    }
}
