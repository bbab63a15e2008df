// libpn532/src/tag/catalog.rs

use std::collections::HashMap;
use std::time::{Duration, Instant};

use crate::tag::amiibo::{CharacterId, CharacterLookup};

/// In-memory character catalog keyed by the 3-byte id (character id +
/// variation). Fetching the remote catalog is left to the caller; this only
/// holds the result and its age.
#[derive(Debug, Clone)]
pub struct CatalogStore {
    names: HashMap<u32, String>,
    loaded_at: Option<Instant>,
}

impl Default for CatalogStore {
    fn default() -> Self {
        Self::new()
    }
}

impl CatalogStore {
    pub fn new() -> Self {
        Self {
            names: HashMap::new(),
            loaded_at: None,
        }
    }

    /// Replace the contents with `entries` and stamp the load time.
    pub fn load<I>(&mut self, entries: I)
    where
        I: IntoIterator<Item = (u32, String)>,
    {
        self.names = entries
            .into_iter()
            .map(|(key, name)| (key & 0x00FF_FFFF, name))
            .collect();
        self.loaded_at = Some(Instant::now());
        log::info!("Character catalog loaded: {} entries", self.names.len());
    }

    pub fn insert(&mut self, id: CharacterId, name: impl Into<String>) {
        self.names.insert(id.key(), name.into());
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Never-loaded stores are stale.
    pub fn is_stale(&self, max_age: Duration) -> bool {
        self.loaded_at.is_none_or(|t| t.elapsed() > max_age)
    }
}

impl CharacterLookup for CatalogStore {
    fn lookup(&self, char_id: u16, variation: u8) -> Option<String> {
        let key = CharacterId { char_id, variation }.key();
        self.names.get(&key).cloned()
    }
}
