use clap::Parser;
use std::net::SocketAddr;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use signal_station::build_router;
use signal_station::config::{Args, DEFAULT_FLAG};
use signal_station::state::AppState;
use signal_station::tracker::AttemptTracker;

#[tokio::main]
async fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "signal_station=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let args = Args::parse();
    let flag = std::env::var("FLAG").unwrap_or_else(|_| DEFAULT_FLAG.to_string());

    let state = Arc::new(AppState {
        tracker: AttemptTracker::new(args.fail_limit, args.fail_window, args.lock_duration),
        flag,
        static_dir: args.static_dir.clone().into(),
    });

    // ConnectInfo feeds the peer address used when X-Forwarded-For is absent
    let app = build_router(state).into_make_service_with_connect_info::<SocketAddr>();

    let addr = format!("0.0.0.0:{}", args.port);
    let listener = tokio::net::TcpListener::bind(&addr).await.unwrap();

    tracing::info!(
        port = args.port,
        fail_limit = args.fail_limit,
        fail_window = args.fail_window,
        lock_duration = args.lock_duration,
        static_dir = %args.static_dir,
        "signal station listening"
    );
    axum::serve(listener, app).await.unwrap();
}
