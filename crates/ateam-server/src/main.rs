// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use std::sync::Arc;

use ateam_broker::EventBroker;
use ateam_core::SystemClock;
use ateam_engine::Engine;
use ateam_server::{env, AppState};
use ateam_storage::{RetryPolicy, Store};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_new(env::log_filter()).unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let store = Arc::new(Store::new(RetryPolicy::new(env::db_max_retries(), env::db_retry_base())));
    let broker = EventBroker::new(env::event_queue_capacity(), env::heartbeat_interval());
    tokio::spawn(broker.clone().run_heartbeats());

    let engine = Engine::new(store, broker, SystemClock);
    let router = ateam_server::build_router(AppState::new(engine));

    let bind_addr = env::bind_addr();
    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    tracing::info!(addr = %bind_addr, "ateamd listening");
    axum::serve(listener, router).await?;

    Ok(())
}
