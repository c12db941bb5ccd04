use crate::entities::{Item, ItemList};

/// A source that can resolve item names into full [`Item`] records, typically
/// by scraping the wiki. The resolver only ever talks to one of these through
/// the cache in [`crate::store`].
pub trait ItemSource {
    type Err: std::error::Error + Send + Sync + 'static;

    /// Fetch a single item by wiki name or full URL.
    fn fetch_item(&self, name: &str) -> Result<Item, Self::Err>;

    /// Fetch the site-wide item listing, split into components and buildings.
    fn list_items(&self) -> Result<ItemList, Self::Err>;
}
