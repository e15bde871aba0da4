use std::sync::Arc;

use actix_web::{web, App, HttpServer};
use tracing_actix_web::TracingLogger;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use seller_dashboard::config::Config;
use seller_dashboard::core::{Clock, SystemClock};
use seller_dashboard::middleware::RequestId;
use seller_dashboard::modules::{dashboard, health};
use seller_dashboard::orders::{MySqlOrderRepository, OrderRepository};
use seller_dashboard::products::{MySqlProductRepository, ProductRepository};

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration
    let config = Config::from_env()?;
    config.validate()?;

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                format!(
                    "seller_dashboard={},actix_web=info",
                    config.app.log_level
                )
                .into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting seller dashboard service");
    tracing::info!("Environment: {}", config.app.env);
    tracing::info!("Server binding to: {}", config.server.bind_address());

    // Create database connection pool
    let db_pool = config.database.create_pool().await?;

    tracing::info!(
        "Database pool initialized ({} connections)",
        config.database.max_connections
    );

    let order_repo: Arc<dyn OrderRepository> = Arc::new(MySqlOrderRepository::new(db_pool.clone()));
    let product_repo: Arc<dyn ProductRepository> =
        Arc::new(MySqlProductRepository::new(db_pool.clone()));
    let dashboard_service = Arc::new(dashboard::DashboardService::new(order_repo, product_repo));
    let clock: Arc<dyn Clock> = Arc::new(SystemClock::from_offset_minutes(
        config.app.utc_offset_minutes,
    )?);

    let dashboard_settings = web::Data::new(config.dashboard.clone());
    let bind_address = config.server.bind_address();

    // Start HTTP server
    let server = HttpServer::new(move || {
        App::new()
            .wrap(RequestId)
            .wrap(TracingLogger::default())
            .app_data(web::Data::new(db_pool.clone()))
            .app_data(web::Data::new(dashboard_service.clone()))
            .app_data(web::Data::new(clock.clone()))
            .app_data(dashboard_settings.clone())
            .configure(health::configure)
            .configure(dashboard::controllers::configure)
    })
    .workers(config.server.workers)
    .bind(&bind_address)?
    .run();

    tracing::info!("Server started at http://{}", bind_address);

    server.await?;
    Ok(())
}
