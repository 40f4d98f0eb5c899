//! Fixed-key backing store for the bookmark collection.
//!
//! In the browser (`hydrate`) this is a single `localStorage` item. Native
//! builds (SSR, tests) keep the document in a thread-local cell so the
//! load/persist lifecycle behaves the same without a browser environment.

#[cfg(feature = "hydrate")]
const STORAGE_KEY: &str = "markboard_bookmarks";

#[cfg(not(feature = "hydrate"))]
thread_local! {
    static FALLBACK: std::cell::RefCell<Option<String>> =
        const { std::cell::RefCell::new(None) };
}

/// Why a backing-store write failed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum StorageError {
    /// No storage object: not in a browser, or storage is blocked.
    #[error("browser storage is unavailable")]
    Unavailable,
    /// The store refused the write, e.g. quota exceeded.
    #[error("browser storage rejected the write")]
    WriteRejected,
}

/// Read the serialized collection, `None` if nothing has been stored.
pub fn read() -> Option<String> {
    #[cfg(feature = "hydrate")]
    {
        let storage = web_sys::window()?.local_storage().ok().flatten()?;
        storage.get_item(STORAGE_KEY).ok().flatten()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        FALLBACK.with(|cell| cell.borrow().clone())
    }
}

/// Replace the serialized collection.
///
/// # Errors
///
/// [`StorageError::Unavailable`] without a storage object, or
/// [`StorageError::WriteRejected`] if the store refuses the value.
pub fn write(value: &str) -> Result<(), StorageError> {
    #[cfg(feature = "hydrate")]
    {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok().flatten())
            .ok_or(StorageError::Unavailable)?;
        storage
            .set_item(STORAGE_KEY, value)
            .map_err(|_| StorageError::WriteRejected)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        FALLBACK.with(|cell| *cell.borrow_mut() = Some(value.to_owned()));
        Ok(())
    }
}

/// Drop the stored document. Test hook for the native fallback.
#[cfg(all(test, not(feature = "hydrate")))]
pub fn reset() {
    FALLBACK.with(|cell| *cell.borrow_mut() = None);
}
