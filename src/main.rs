use std::sync::Arc;

use product_api::{
    app::product::{PgProductRepository, ProductService},
    config::load_config,
    create_app,
    infrastructure::{DatabaseManager, Logger},
    AppState,
};
use tokio::net::TcpListener;
use tracing::{error, info};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = load_config()?;
    Logger::init(&config.logging)?;

    info!("Starting product API server...");

    let database = DatabaseManager::new(&config.database).await.map_err(|e| {
        error!("Failed to initialize database: {}", e);
        e
    })?;
    if config.database.init_schema {
        database.init_schema().await?;
    }

    // 显式组装：处理器 -> 服务 -> 持久化网关
    let repository = Arc::new(PgProductRepository::new(database.get_pool().clone()));
    let state = AppState {
        product_service: ProductService::new(repository),
    };
    let app = create_app(state);

    let listener = TcpListener::bind(config.server.listen_addr()).await?;
    let addr = listener.local_addr()?;

    info!("🚀 Product API server running on http://{}", addr);
    info!("📊 Available endpoints:");
    info!("   GET    /health              - Health check");
    info!("   GET    /api/products        - List products");
    info!("   POST   /api/products        - Create product");
    info!("   GET    /api/products/:id    - Get product by ID");
    info!("   PUT    /api/products/:id    - Update product");
    info!("   DELETE /api/products/:id    - Delete product");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

/// 等待 Ctrl+C 或 SIGTERM
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            error!("Failed to listen for Ctrl+C: {}", e);
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                error!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("Shutdown signal received");
}
