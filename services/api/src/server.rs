use crate::cli::ServeArgs;
use crate::infra::AppState;
use crate::routes::with_marketplace_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use rental_market::config::AppConfig;
use rental_market::error::AppError;
use rental_market::search::{CityCatalog, CityDirectory};
use rental_market::telemetry;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing::info;

pub(crate) async fn run(mut args: ServeArgs) -> Result<(), AppError> {
    let mut config = AppConfig::load()?;

    if let Some(host) = args.host.take() {
        config.server.host = host;
    }
    if let Some(port) = args.port.take() {
        config.server.port = port;
    }

    telemetry::init(&config.telemetry)?;

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
    };

    let directory = Arc::new(
        CityDirectory::new(CityCatalog::standard())
            .with_simulated_latency(config.search.simulated_latency),
    );
    info!(
        cities = directory.catalog().len(),
        latency_ms = config.search.simulated_latency.as_millis() as u64,
        "city catalog loaded"
    );

    let app = with_marketplace_routes(directory)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, "rental marketplace service ready");

    axum::serve(listener, app).await?;
    Ok(())
}
