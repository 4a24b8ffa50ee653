use dotenvy::dotenv;
use std::{env, net::SocketAddr};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use blog_site::{
    mock_api::{ApiState, router},
    services::InMemoryPostsService,
};

#[tokio::main]
async fn main() {
    dotenv().ok();
    init_tracing();

    let api_token = env::var("API_TOKEN").ok().filter(|token| !token.trim().is_empty());
    if api_token.is_none() {
        info!("API_TOKEN not set, mutations are open to any caller");
    }
    let state = ApiState {
        store: InMemoryPostsService::new_with_sample(),
        api_token,
    };
    let app = router(state);

    let bind = env::var("BIND_ADDR").unwrap_or_else(|_| "127.0.0.1:3000".into());
    let addr: SocketAddr = match bind.parse() {
        Ok(addr) => addr,
        Err(err) => {
            error!(bind = %bind, error = %err, "invalid BIND_ADDR, expected host:port");
            std::process::exit(2);
        }
    };
    let listener = match tokio::net::TcpListener::bind(addr).await {
        Ok(listener) => listener,
        Err(err) => {
            error!(%addr, error = %err, "failed to bind HTTP listener");
            std::process::exit(1);
        }
    };
    info!("blog API listening on http://{addr}");

    if let Err(err) = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
    {
        error!(error = %err, "server crashed");
    }
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(env_filter).init();
}

async fn shutdown_signal() {
    #[cfg(unix)]
    {
        use tokio::signal::unix::{SignalKind, signal};
        let mut terminate =
            signal(SignalKind::terminate()).expect("failed to install SIGTERM handler");
        tokio::select! {
            _ = tokio::signal::ctrl_c() => {},
            _ = terminate.recv() => {},
        }
    }

    #[cfg(not(unix))]
    {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    }
}
