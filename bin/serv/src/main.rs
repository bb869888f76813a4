use anyhow::Context;
use axum::{Router, middleware, routing::get};
use tower_http::trace::{DefaultOnResponse, TraceLayer};
use tracing::Level;
use vsl_api::{
    config::ApiConfig,
    metrics::{init_metrics, metrics_handler, track_metrics},
    middleware::{create_cors_layer, request_id_middleware, request_span},
    state::ApiState,
    tracing::init_tracing,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration from environment variables
    dotenvy::dotenv().ok();
    let config = ApiConfig::from_env().context("invalid configuration")?;

    init_tracing(&config.env);
    let metrics_handle = init_metrics().context("failed to install metrics recorder")?;

    let state = ApiState::new(&config).await?;

    if config.seed_on_startup {
        let summary = vsl_db::seed::seed(&state.pool).await?;
        tracing::info!(?summary, "Demo data seeded");
    }

    let metrics_app = Router::new()
        .route("/metrics", get(metrics_handler))
        .with_state(metrics_handle);

    let app = vsl_api::router::router()
        .with_state(state.clone())
        .merge(metrics_app)
        .layer(middleware::from_fn(track_metrics))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(request_span)
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .layer(middleware::from_fn(request_id_middleware))
        .layer(create_cors_layer(config.parsed_allowed_origins()));

    let address = config.bind_address();
    let listener = tokio::net::TcpListener::bind(&address)
        .await
        .with_context(|| format!("failed to bind {address}"))?;
    tracing::info!("Server running on http://{address}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    tracing::info!("HTTP server stopped, closing database pool");
    state.pool.close().await;

    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{SignalKind, signal};
        match signal(SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to listen for SIGTERM");
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

    tracing::info!("Shutdown signal received");
}
