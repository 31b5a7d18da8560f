use std::path::PathBuf;

use chrono::{DateTime, Utc};
use uuid::{NoContext, Timestamp};

pub mod entities;
pub mod services;

#[derive(Clone, Debug, Default)]
pub struct HealthChatConfig {
    pub knowledge: KnowledgeConfig,
    pub selection: SelectionConfig,
}

#[derive(Clone, Debug, Default)]
pub struct KnowledgeConfig {
    /// JSON document replacing the built-in symptom/diet tables.
    pub path: Option<PathBuf>,
}

#[derive(Clone, Debug)]
pub struct SelectionConfig {
    /// Devices kept in the selection store before the least recently
    /// updated one is evicted.
    pub max_devices: usize,
}

impl Default for SelectionConfig {
    fn default() -> Self {
        Self {
            max_devices: DEFAULT_MAX_DEVICES,
        }
    }
}

pub const DEFAULT_MAX_DEVICES: usize = 10_000;

pub fn generate_timestamp() -> (DateTime<Utc>, Timestamp) {
    let now = Utc::now();
    let seconds = now.timestamp().try_into().unwrap_or(0);
    let timestamp = Timestamp::from_unix(NoContext, seconds, now.timestamp_subsec_nanos());

    (now, timestamp)
}
