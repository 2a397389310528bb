//! The immutable list of vault items loaded at startup.

use crate::error::LoadError;
use crate::models::{Folder, FolderRecord, ItemRecord, Login, VaultItem};
use crate::source::VaultSource;
use std::collections::HashMap;
use std::sync::Arc;

/// Master list of vault items with their folders resolved.
#[derive(Debug, Clone, Default)]
pub struct Repository {
    items: Vec<VaultItem>,
    folders: HashMap<String, Arc<Folder>>,
}

impl Repository {
    /// Load folders and items from `source` and join them.
    pub fn load(source: &dyn VaultSource, search: Option<&str>) -> Result<Self, LoadError> {
        let folders = source.list_folders()?;
        let items = source.list_items(search)?;
        let repository = Self::from_records(items, folders);
        tracing::info!(
            "Loaded {} items in {} folders",
            repository.items.len(),
            repository.folders.len()
        );
        Ok(repository)
    }

    /// Build a repository from raw records, keeping the item order.
    pub fn from_records(items: Vec<ItemRecord>, folders: Vec<FolderRecord>) -> Self {
        let folders: HashMap<String, Arc<Folder>> = folders
            .into_iter()
            .filter_map(|record| {
                let id = record.id.filter(|id| !id.is_empty())?;
                Some((
                    id.clone(),
                    Arc::new(Folder {
                        id,
                        name: record.name,
                    }),
                ))
            })
            .collect();

        let items = items
            .into_iter()
            .map(|record| {
                let folder = record
                    .folder_id
                    .as_deref()
                    .filter(|id| !id.is_empty())
                    .and_then(|id| {
                        let folder = folders.get(id).cloned();
                        if folder.is_none() {
                            tracing::debug!("Item {:?} references unknown folder {}", record.name, id);
                        }
                        folder
                    });
                VaultItem {
                    kind: record.kind,
                    name: record.name,
                    login: record.login.map(Login::from),
                    notes: record.notes.unwrap_or_default(),
                    folder,
                }
            })
            .collect();

        Self { items, folders }
    }

    /// All items in source order.
    pub fn items(&self) -> &[VaultItem] {
        &self.items
    }

    pub fn get(&self, index: usize) -> Option<&VaultItem> {
        self.items.get(index)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
