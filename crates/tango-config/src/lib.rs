use std::env;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use self::export::ExportConfig;

pub mod export;
pub mod recent;
pub mod vocabulary;

pub use export::{CardField, ExportFormat};
pub use recent::RecentWords;
pub use vocabulary::{SortBy, VocabularyPreferences};

fn default_data_dir() -> PathBuf {
    PathBuf::from(".tango")
}

fn default_documents_dir() -> PathBuf {
    PathBuf::from(".")
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub export: ExportConfig,

    /// Where preferences are persisted
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,
    /// Root that document keys resolve against
    #[serde(default = "default_documents_dir")]
    pub documents_dir: PathBuf,
    /// Emit logs as JSON lines
    pub log_json: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            export: ExportConfig::default(),
            data_dir: default_data_dir(),
            documents_dir: default_documents_dir(),
            log_json: false,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        let data_dir = env::var("TANGO_DATA_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| default_data_dir());

        let documents_dir = env::var("TANGO_DOCUMENTS_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| default_documents_dir());

        let log_json = env::var("TANGO_LOG_JSON")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(false);

        Config {
            export: ExportConfig::new(),
            data_dir,
            documents_dir,
            log_json,
        }
    }
}
