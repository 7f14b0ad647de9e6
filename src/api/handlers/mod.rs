use crate::cache::SnapshotStore;
use crate::config::settings::AppConfig;
use crate::services::LookupService;

pub mod admin;
pub mod matches;
pub mod players;

pub struct AppState {
    pub lookup: LookupService,
    pub store: SnapshotStore,
    pub config: AppConfig,
}
