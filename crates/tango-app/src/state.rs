use std::sync::Arc;

use anyhow::Context;
use tango_config::{Config, RecentWords, VocabularyPreferences};
use tango_core::provider::AnalysisProvider;
use tango_core::store::KeyValueStore;

use crate::provider::FileProvider;
use crate::store::FileStore;

const PREFERENCES_FILE: &str = "preferences.json";

pub struct AppState {
    pub config: Config,
    pub store: Arc<dyn KeyValueStore>,
    pub provider: Arc<dyn AnalysisProvider>,
}

impl AppState {
    pub fn new(config: Config) -> anyhow::Result<Self> {
        let store_path = config.data_dir.join(PREFERENCES_FILE);
        let store = FileStore::open(&store_path)
            .with_context(|| format!("Failed to open {}", store_path.display()))?;
        tracing::debug!(path = %store.path().display(), "Opened preference store");
        let provider = FileProvider::new(&config.documents_dir);

        Ok(Self {
            config,
            store: Arc::new(store),
            provider: Arc::new(provider),
        })
    }

    pub fn preferences(&self) -> anyhow::Result<VocabularyPreferences> {
        VocabularyPreferences::load(self.store.as_ref())
            .context("Failed to load vocabulary preferences")
    }

    pub fn save_preferences(&self, preferences: &VocabularyPreferences) -> anyhow::Result<()> {
        preferences
            .save(self.store.as_ref())
            .context("Failed to save vocabulary preferences")
    }

    pub fn recent_words(&self) -> anyhow::Result<RecentWords> {
        RecentWords::load(self.store.as_ref()).context("Failed to load recent words")
    }

    pub fn save_recent_words(&self, recent: &RecentWords) -> anyhow::Result<()> {
        recent
            .save(self.store.as_ref())
            .context("Failed to save recent words")
    }
}
