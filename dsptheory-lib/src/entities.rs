use serde::{Deserialize, Serialize};

pub type ItemName = String;
pub type ItemQuantity = u32;

/// Wiki path of an item, e.g. `Iron_Ingot`. Plain string equality.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Hash)]
#[serde(transparent)]
pub struct ItemId(pub String);

impl ItemId {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// A single crafting recipe as shown on an item page.
///
/// Quantities are `None` when the wiki leaves them unspecified (variable
/// amounts). `duration` is kept as the raw text: usually `"<number> s"`, but
/// `"?"` (unknown rate) and `"%"` (probabilistic output) occur on real pages
/// and are meaningful, not malformed.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Hash)]
pub struct Recipe {
    pub input: Vec<(ItemId, Option<ItemQuantity>)>,
    pub output: Vec<(ItemId, Option<ItemQuantity>)>,
    pub duration: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Hash)]
pub struct Item {
    pub name: ItemName,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub recipes: Vec<Recipe>,
}

impl Item {
    /// An item with no crafting panel on its page, e.g. a pure raw resource.
    pub fn bare(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            category: None,
            description: None,
            recipes: vec![],
        }
    }
}

/// Result of the bulk `/Items` listing.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ItemList {
    pub components: Vec<ItemId>,
    pub buildings: Vec<ItemId>,
}

/// One line of resolver output: how many facilities of `name` are needed.
///
/// `required` can be negative when the item's base rate is unknown; the
/// sentinel arithmetic is intentional and must survive into the report.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolutionEntry {
    pub name: ItemName,
    pub required: f64,
    pub depth: u32,
}
