use anyhow::{Context, Result};
use chrono::Utc;
use log::info;

use crate::cache::SnapshotStore;
use crate::config::settings::AppConfig;
use crate::config::{get_division_sources, DivisionSource};
use crate::domain::{flag_cross_division, Division, DivisionSnapshot, PlayerDirectory, PlayerRecord};
use crate::fetchers::RankingScraper;

pub struct IngestionService {
    store: SnapshotStore,
    scraper: RankingScraper,
    snapshot_key: &'static str,
}

impl IngestionService {
    pub fn new(config: &AppConfig) -> Result<Self> {
        Ok(Self {
            store: SnapshotStore::new(&config.storage.cache_dir)?,
            scraper: RankingScraper::new(&config.scraper)?,
            snapshot_key: config.storage.snapshot_key,
        })
    }

    pub async fn run(&mut self) -> Result<DivisionSnapshot> {
        info!("=== Starting Ranking Ingestion ===\n");

        // Step 1: Scrape both divisions
        let (mut open, mut women) = self.scrape_divisions().await?;
        info!("  → Scraped {} Open and {} Women players\n", open.len(), women.len());

        // Step 2: Mark players ranked in both divisions
        let shared = flag_cross_division(&mut open, &mut women);
        info!("  → {} players are ranked in both divisions\n", shared);

        // Step 3: Validate and store the snapshot
        let snapshot = DivisionSnapshot {
            fetched_at: Utc::now(),
            open,
            women,
        };
        PlayerDirectory::new(snapshot.open.clone(), snapshot.women.clone())
            .context("Scraped rankings are inconsistent")?;
        self.store.save_snapshot(self.snapshot_key, &snapshot)?;
        info!("  → Saved snapshot\n");

        info!("=== Ingestion Complete ===");
        Ok(snapshot)
    }

    async fn scrape_divisions(&mut self) -> Result<(Vec<PlayerRecord>, Vec<PlayerRecord>)> {
        let mut open = Vec::new();
        let mut women = Vec::new();

        for source in get_division_sources() {
            let players = self.scrape(&source).await?;
            match source.division {
                Division::Open => open = players,
                Division::Women => women = players,
            }
        }

        Ok((open, women))
    }

    async fn scrape(&mut self, source: &DivisionSource) -> Result<Vec<PlayerRecord>> {
        self.scraper.scrape_division(source).await
    }
}
