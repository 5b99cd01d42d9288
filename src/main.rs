use mini_payment_gateway::bank::mock::MockAcquiringBank;
use mini_payment_gateway::config::AppConfig;
use mini_payment_gateway::http::router::api_router;
use mini_payment_gateway::service::payment_service::PaymentService;
use mini_payment_gateway::store::postgres::PgPaymentStore;
use mini_payment_gateway::AppState;
use sqlx::postgres::PgPoolOptions;
use std::sync::Arc;
use std::time::Duration;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cfg = AppConfig::from_env();

    let pool = PgPoolOptions::new()
        .max_connections(10)
        .connect(&cfg.database_url)
        .await?;

    sqlx::migrate!("./migrations").run(&pool).await?;

    let payment_service = PaymentService {
        store: Arc::new(PgPaymentStore { pool }),
        bank: Arc::new(MockAcquiringBank {
            latency: Duration::from_millis(cfg.bank_latency_ms),
        }),
    };

    let state = AppState { payment_service };

    let app = api_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let listener = tokio::net::TcpListener::bind(&cfg.bind_addr).await?;
    tracing::info!("listening on {}", cfg.bind_addr);
    axum::serve(listener, app).await?;
    Ok(())
}
