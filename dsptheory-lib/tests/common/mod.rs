//! Shared fixtures: an in-memory `ItemSource` and item builders.
#![allow(dead_code)]

use std::cell::RefCell;
use std::collections::HashMap;

use dsptheory_lib::entities::{Item, ItemId, ItemList, Recipe};
use dsptheory_lib::traits::ItemSource;
use thiserror::Error;

#[derive(Error, Debug)]
#[error("stub has no item `{0}`")]
pub struct StubError(pub String);

/// Fetch collaborator backed by a map, recording every fetch it serves.
pub struct StubSource {
    items: HashMap<String, Item>,
    pub listing: ItemList,
    fetches: RefCell<Vec<String>>,
}

impl StubSource {
    pub fn new(items: impl IntoIterator<Item = Item>) -> Self {
        Self {
            items: items
                .into_iter()
                .map(|item| (item.name.clone(), item))
                .collect(),
            listing: ItemList {
                components: vec![],
                buildings: vec![],
            },
            fetches: RefCell::new(vec![]),
        }
    }

    pub fn fetched(&self) -> Vec<String> {
        self.fetches.borrow().clone()
    }
}

impl ItemSource for StubSource {
    type Err = StubError;

    fn fetch_item(&self, name: &str) -> Result<Item, StubError> {
        self.fetches.borrow_mut().push(name.to_string());
        self.items
            .get(name)
            .cloned()
            .ok_or_else(|| StubError(name.to_string()))
    }

    fn list_items(&self) -> Result<ItemList, StubError> {
        Ok(self.listing.clone())
    }
}

/// Item with a single recipe producing itself.
pub fn crafted(
    name: &str,
    category: &str,
    duration: &str,
    output_quantity: Option<u32>,
    inputs: &[(&str, Option<u32>)],
) -> Item {
    Item {
        name: name.to_string(),
        category: Some(category.to_string()),
        description: None,
        recipes: vec![Recipe {
            input: inputs
                .iter()
                .map(|(id, quantity)| (ItemId::new(*id), *quantity))
                .collect(),
            output: vec![(ItemId::new(name), output_quantity)],
            duration: duration.to_string(),
        }],
    }
}
