pub use crate::chain::resolve_chain;
pub use crate::entities::{Item, ItemId, ItemList, Recipe, ResolutionEntry};
pub use crate::error::{ChainError, ChainResult};
pub use crate::rate::{base_speed, is_basic, Rate, PRIMARY_RECIPE, SENTINEL_RATE};
pub use crate::report::render_report;
pub use crate::store::{prime_cache, resolve_item, ItemCache};
pub use crate::traits::ItemSource;
