//! Catalog service: seeding and connectivity checks

use std::collections::HashSet;

use rand::{seq::SliceRandom, Rng};

use crate::{
    config::SeedConfig,
    error::AppResult,
    repository::{catalog::CatalogRepository, Repository},
};

const ADJECTIVES: &[&str] = &[
    "Silent", "Broken", "Golden", "Hidden", "Last", "Lost", "Northern", "Painted", "Quiet",
    "Restless", "Scarlet", "Second", "Shifting", "Sunken", "Tender", "Wandering", "Winter",
    "Wild", "Hollow", "Burning",
];

const NOUNS: &[&str] = &[
    "Archive", "Atlas", "Bridge", "Captain", "Cartographer", "Cathedral", "Garden", "Harbor",
    "Kingdom", "Lantern", "Letters", "Orchard", "River", "Sea", "Signal", "Station", "Tide",
    "Tower", "Voyage", "Well",
];

#[derive(Clone)]
pub struct CatalogService {
    repository: Repository,
}

impl CatalogService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// Populate an empty catalog with the configured titles plus generated
    /// ones. Returns the number of books inserted; zero when the catalog
    /// already had content or seeding is disabled.
    pub async fn seed(&self, config: &SeedConfig) -> AppResult<usize> {
        if !config.enabled {
            return Ok(0);
        }

        let titles = seed_titles(&config.titles, config.count, &mut rand::thread_rng());

        let mut tx = self.repository.pool.begin().await?;

        let existing = CatalogRepository::lock_for_seeding(&mut tx).await?;
        if existing > 0 {
            tracing::info!("Catalog already holds {} books, skipping seed", existing);
            tx.rollback().await?;
            return Ok(0);
        }

        for title in &titles {
            CatalogRepository::insert(&mut tx, title, true).await?;
        }

        tx.commit().await?;

        Ok(titles.len())
    }

    /// Number of books in the catalog
    pub async fn book_count(&self) -> AppResult<i64> {
        self.repository.catalog.count().await
    }

    /// Check database connectivity
    pub async fn ping(&self) -> AppResult<()> {
        self.repository.catalog.ping().await
    }
}

/// Fixture titles (deduplicated, in order) followed by `count` distinct
/// generated titles that never collide with a fixture
pub fn seed_titles<R: Rng + ?Sized>(fixtures: &[String], count: usize, rng: &mut R) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut titles = Vec::with_capacity(fixtures.len() + count);

    for title in fixtures {
        if seen.insert(title.clone()) {
            titles.push(title.clone());
        }
    }

    for _ in 0..count {
        let adjective = ADJECTIVES.choose(rng).copied().unwrap_or("Untitled");
        let noun = NOUNS.choose(rng).copied().unwrap_or("Book");
        let base = format!("The {} {}", adjective, noun);

        let mut title = base.clone();
        let mut volume = 2;
        while seen.contains(&title) {
            title = format!("{} {}", base, volume);
            volume += 1;
        }

        seen.insert(title.clone());
        titles.push(title);
    }

    titles
}
