//! Blocking dsp-wiki.com client implementing [`ItemSource`].

use dsptheory_lib::entities::{Item, ItemList};
use dsptheory_lib::traits::ItemSource;
use tracing::debug;

pub mod error;
pub mod parse;

pub use error::FetchError;

pub const BASE_URL: &str = "https://dsp-wiki.com";

#[derive(Debug, Clone)]
pub struct WikiClient {
    base_url: String,
    http: reqwest::blocking::Client,
}

impl WikiClient {
    pub fn new() -> Self {
        Self::with_base_url(BASE_URL)
    }

    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            http: reqwest::blocking::Client::new(),
        }
    }

    fn item_url(&self, name: &str) -> String {
        if name.starts_with(&self.base_url) {
            name.to_string()
        } else {
            format!("{}/{name}", self.base_url)
        }
    }

    fn get(&self, url: &str) -> Result<String, FetchError> {
        debug!("fetching {url}");
        let response = self.http.get(url).send()?.error_for_status()?;
        Ok(response.text()?)
    }
}

impl Default for WikiClient {
    fn default() -> Self {
        Self::new()
    }
}

impl ItemSource for WikiClient {
    type Err = FetchError;

    fn fetch_item(&self, name: &str) -> Result<Item, FetchError> {
        let html = self.get(&self.item_url(name))?;
        parse::parse_item_page(&html)
    }

    fn list_items(&self) -> Result<ItemList, FetchError> {
        let html = self.get(&format!("{}/Items", self.base_url))?;
        parse::parse_item_list(&html)
    }
}
