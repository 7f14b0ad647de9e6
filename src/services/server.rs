use anyhow::Result;
use log::{info, warn};
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::api::handlers::AppState;
use crate::api::routes::create_router;
use crate::cache::SnapshotStore;
use crate::config::settings::AppConfig;
use crate::domain::{PlayerDirectory, SharedDirectory};
use crate::services::lookup::LookupService;

pub struct ServerService {
    port: u16,
    config: AppConfig,
}

impl ServerService {
    pub fn new(port: u16, config: AppConfig) -> Self {
        Self { port, config }
    }

    pub async fn run(&self) -> Result<()> {
        let store = SnapshotStore::new(&self.config.storage.cache_dir)?;
        let directory = self.initial_directory(&store)?;
        info!("Serving {} players", directory.len());

        let state = Arc::new(AppState {
            lookup: LookupService::new(SharedDirectory::new(directory)),
            store,
            config: self.config.clone(),
        });

        let app = create_router(state)
            .layer(TraceLayer::new_for_http())
            .layer(CorsLayer::permissive());

        let addr = SocketAddr::from(([0, 0, 0, 0], self.port));
        info!("Server listening on {}", addr);

        let listener = tokio::net::TcpListener::bind(addr).await?;
        axum::serve(listener, app).await?;

        Ok(())
    }

    fn initial_directory(&self, store: &SnapshotStore) -> Result<PlayerDirectory> {
        let key = self.config.storage.snapshot_key;
        if !store.exists(key) {
            warn!("No snapshot stored yet; starting with an empty directory");
            return Ok(PlayerDirectory::default());
        }
        store.load_directory(key)
    }
}
