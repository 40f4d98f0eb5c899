#[cfg(test)]
#[path = "bookmarks_test.rs"]
mod bookmarks_test;

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::util::storage;

/// Seed entry inserted whenever the collection loads empty.
pub const DEFAULT_URL: &str = "https://shcoobz.github.io/";
/// Display label for the seed entry.
pub const DEFAULT_NAME: &str = "Shcoobz Portfolio";

/// A saved site. The URL doubles as the collection key.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bookmark {
    pub name: String,
    pub url: String,
}

/// The bookmark collection and its persistence lifecycle.
///
/// Held in an `RwSignal` context and constructed once at startup. Every
/// mutation rewrites the whole serialized document and reloads, so the
/// snapshot always mirrors the backing store.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BookmarksState {
    pub bookmarks: BTreeMap<String, Bookmark>,
}

impl BookmarksState {
    /// Replace the snapshot with the backing store's contents.
    ///
    /// Absent or unparseable data decodes to an empty map; an empty map is
    /// seeded with the default entry and persisted immediately.
    pub fn load(&mut self) {
        self.bookmarks = decode(storage::read().as_deref());
        if self.bookmarks.is_empty() {
            self.bookmarks.insert(
                DEFAULT_URL.to_owned(),
                Bookmark {
                    name: DEFAULT_NAME.to_owned(),
                    url: DEFAULT_URL.to_owned(),
                },
            );
            self.persist();
        }
    }

    /// Insert or silently overwrite the bookmark stored under `url`.
    ///
    /// Expects a URL already normalized by [`crate::validate::validate`].
    pub fn add(&mut self, url: String, name: String) {
        self.bookmarks.insert(url.clone(), Bookmark { name, url });
        self.persist();
        self.load();
    }

    /// Remove the bookmark stored under `id`. Unknown ids are a no-op.
    pub fn delete(&mut self, id: &str) {
        if self.bookmarks.remove(id).is_some() {
            self.persist();
            self.load();
        }
    }

    fn persist(&self) {
        if let Ok(json) = serde_json::to_string(&self.bookmarks) {
            if let Err(err) = storage::write(&json) {
                leptos::logging::warn!("bookmark persist failed: {err}");
            }
        }
    }
}

/// Decode a serialized collection; `None` or bad JSON become an empty map.
fn decode(raw: Option<&str>) -> BTreeMap<String, Bookmark> {
    raw.and_then(|json| serde_json::from_str(json).ok())
        .unwrap_or_default()
}
