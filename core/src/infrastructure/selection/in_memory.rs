use std::{collections::HashMap, sync::Arc};

use tokio::sync::RwLock;
use tracing::debug;

use crate::domain::{
    common::{DEFAULT_MAX_DEVICES, entities::app_errors::CoreError},
    symptom::{entities::Symptom, ports::SelectionRepository, selection::SelectionState},
};

#[derive(Debug)]
struct StoredSelection {
    selection: SelectionState,
    touched: u64,
}

#[derive(Debug, Default)]
struct SelectionStore {
    entries: HashMap<String, StoredSelection>,
    clock: u64,
}

impl SelectionStore {
    fn evict_least_recent(&mut self) {
        let oldest = self
            .entries
            .iter()
            .min_by_key(|(_, stored)| stored.touched)
            .map(|(device_id, _)| device_id.clone());

        if let Some(device_id) = oldest {
            debug!(%device_id, "evicting least recently updated selection");
            self.entries.remove(&device_id);
        }
    }
}

/// Process-local selection store keyed by device id.
///
/// Empty selections are not stored. At most `max_devices` selections are
/// kept; adding one more evicts the selection updated longest ago.
#[derive(Debug, Clone)]
pub struct InMemorySelectionRepository {
    store: Arc<RwLock<SelectionStore>>,
    max_devices: usize,
}

impl InMemorySelectionRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_max_devices(max_devices: usize) -> Self {
        Self {
            store: Arc::default(),
            max_devices: max_devices.max(1),
        }
    }

    pub async fn device_count(&self) -> usize {
        self.store.read().await.entries.len()
    }
}

impl Default for InMemorySelectionRepository {
    fn default() -> Self {
        Self::with_max_devices(DEFAULT_MAX_DEVICES)
    }
}

impl SelectionRepository for InMemorySelectionRepository {
    async fn get(&self, device_id: String) -> Result<SelectionState, CoreError> {
        let store = self.store.read().await;
        Ok(store
            .entries
            .get(&device_id)
            .map(|stored| stored.selection.clone())
            .unwrap_or_default())
    }

    async fn toggle(
        &self,
        device_id: String,
        symptom: Symptom,
    ) -> Result<(bool, SelectionState), CoreError> {
        let mut guard = self.store.write().await;
        let store = &mut *guard;

        store.clock += 1;
        let clock = store.clock;

        if !store.entries.contains_key(&device_id) && store.entries.len() >= self.max_devices {
            store.evict_least_recent();
        }

        let stored = store
            .entries
            .entry(device_id.clone())
            .or_insert_with(|| StoredSelection {
                selection: SelectionState::new(),
                touched: clock,
            });
        let toggled = stored.selection.toggle_bounded(symptom);
        stored.touched = clock;
        let selection = stored.selection.clone();

        if selection.is_empty() {
            store.entries.remove(&device_id);
        }

        Ok((toggled?, selection))
    }

    async fn remove(&self, device_id: String) -> Result<(), CoreError> {
        self.store.write().await.entries.remove(&device_id);
        Ok(())
    }
}
