use leptos::prelude::window;
use wasm_bindgen::JsValue;

use crate::error::PreferenceError;

pub const PAGE_SIZE_KEY: &str = "trending.itemsPerPage";
pub const DEFAULT_PAGE_SIZE: usize = 8;

/// String key-value storage that survives a reload.
pub trait KeyValueStore {
    fn read(&self, key: &str) -> Option<String>;
    fn write(&self, key: &str, value: &str) -> Result<(), PreferenceError>;
}

/// `window.localStorage`.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserStorage;

impl BrowserStorage {
    fn storage(&self) -> Result<web_sys::Storage, PreferenceError> {
        window()
            .local_storage()
            .ok()
            .flatten()
            .ok_or(PreferenceError::Unavailable)
    }
}

impl KeyValueStore for BrowserStorage {
    fn read(&self, key: &str) -> Option<String> {
        self.storage().ok()?.get_item(key).ok().flatten()
    }

    fn write(&self, key: &str, value: &str) -> Result<(), PreferenceError> {
        self.storage()?
            .set_item(key, value)
            .map_err(|e: JsValue| PreferenceError::Write(format!("{:?}", e)))
    }
}

pub fn parse_page_size(raw: Option<&str>) -> usize {
    raw.and_then(|value| value.trim().parse::<usize>().ok())
        .filter(|size| *size > 0)
        .unwrap_or(DEFAULT_PAGE_SIZE)
}

pub fn load_page_size(store: &impl KeyValueStore) -> usize {
    parse_page_size(store.read(PAGE_SIZE_KEY).as_deref())
}

pub fn save_page_size(store: &impl KeyValueStore, size: usize) -> Result<(), PreferenceError> {
    store.write(PAGE_SIZE_KEY, &size.to_string())
}
