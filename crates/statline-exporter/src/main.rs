//! statline exporter binary.
//!
//! - Loads `statline.yaml` (strict parsing + validate)
//! - Spawns the self-metrics harvester
//! - Serves `/metrics`, `/healthz`, `/readyz`, `/statusz`

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use tracing_subscriber::{fmt, EnvFilter};

use statline_exporter::collect::process::ProcessStatsProducer;
use statline_exporter::{app_state, collect, config, router};

#[tokio::main]
async fn main() {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let cfg = config::load_from_file("statline.yaml").expect("config load failed");
    let listen: SocketAddr = cfg
        .exporter
        .listen
        .parse()
        .expect("exporter.listen must be a valid SocketAddr");
    let interval = Duration::from_millis(cfg.exporter.collect_interval_ms);
    let namespace = cfg.exporter.namespace.clone();

    let state = app_state::AppState::new(cfg);

    let mut harvester = collect::Harvester::new(state.registry(), interval);
    harvester.register(Arc::new(ProcessStatsProducer::new(&namespace)));

    let (_shutdown_tx, shutdown_rx) = tokio::sync::watch::channel(false);
    tokio::spawn(async move { harvester.run(shutdown_rx).await });

    let app = router::build_router(state);

    tracing::info!(%listen, "statline-exporter starting");
    let listener = tokio::net::TcpListener::bind(listen)
        .await
        .expect("failed to bind");

    axum::serve(listener, app).await.expect("server failed");
}
