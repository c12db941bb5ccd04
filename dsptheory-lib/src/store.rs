//! Item lookup backed by the on-disk JSON index.
//!
//! The index is a single pretty-printed JSON object mapping item name to the
//! serialized [`Item`]. It is a pure memoization layer: whole-file read on
//! lookup, whole-file read-modify-write on insert, no invalidation. A single
//! process is assumed to own the file at a time.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use tracing::{info, warn};

use crate::entities::{Item, ItemName};
use crate::error::{ChainError, ChainResult};
use crate::traits::ItemSource;

#[derive(Debug, Clone)]
pub struct ItemCache {
    path: PathBuf,
}

impl ItemCache {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the whole index. A missing file is an empty index, not an error.
    pub fn load(&self) -> ChainResult<BTreeMap<ItemName, Item>> {
        if !self.path.is_file() {
            return Ok(BTreeMap::new());
        }

        let contents = fs::read_to_string(&self.path)?;
        serde_json::from_str(&contents).map_err(ChainError::BadCache)
    }

    pub fn get(&self, name: &str) -> ChainResult<Option<Item>> {
        Ok(self.load()?.remove(name))
    }

    /// Merge `item` into the index and rewrite it. Idempotent for an item
    /// already cached under the same name.
    pub fn insert(&self, item: &Item) -> ChainResult<()> {
        let mut index = self.load()?;
        index.insert(item.name.clone(), item.clone());

        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }

        let contents = serde_json::to_string_pretty(&index).map_err(ChainError::CacheWrite)?;
        fs::write(&self.path, contents)?;

        Ok(())
    }
}

/// Resolve an item name, consulting the cache before falling back to
/// `source`. Freshly fetched items are written through before returning.
pub fn resolve_item<S: ItemSource>(
    name: &str,
    cache: &ItemCache,
    source: &S,
) -> ChainResult<Item> {
    if let Some(item) = cache.get(name)? {
        return Ok(item);
    }

    let item = source.fetch_item(name).map_err(|err| ChainError::Lookup {
        name: name.to_string(),
        source: Box::new(err),
    })?;
    cache.insert(&item)?;

    Ok(item)
}

/// Fetch every item the wiki lists and cache it, best-effort.
///
/// Items that fail to fetch are logged and skipped; a failed listing fetch
/// and cache write failures still propagate. Returns the number of items
/// cached.
pub fn prime_cache<S: ItemSource>(cache: &ItemCache, source: &S) -> ChainResult<usize> {
    let listing = source
        .list_items()
        .map_err(|err| ChainError::Listing(Box::new(err)))?;

    let mut cached = 0;
    for id in listing.components.iter().chain(listing.buildings.iter()) {
        info!("caching {}", id.as_str());
        match source.fetch_item(id.as_str()) {
            Ok(item) => {
                cache.insert(&item)?;
                cached += 1;
            }
            Err(err) => {
                warn!("skipping {}: {err}", id.as_str());
                continue;
            }
        }
    }

    Ok(cached)
}
