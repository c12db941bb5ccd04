//! The production-chain resolver.

use crate::entities::{Item, ResolutionEntry};
use crate::error::ChainResult;
use crate::rate::{base_speed, is_basic, PRIMARY_RECIPE};
use crate::store::{resolve_item, ItemCache};
use crate::traits::ItemSource;

/// Compute how many facilities of `item` and of each transitive ingredient
/// are needed to sustain `target_rate` items per second.
///
/// Entries come back root-first, each ingredient's subtree following in the
/// order the recipe lists its inputs. `depth` counts down by one per level;
/// recursion stops at zero or at a basic item, whichever comes first. Only
/// the primary recipe is ever consulted.
///
/// An unknown base rate is substituted with the sentinel, so the root entry
/// gets a negative count instead of aborting the walk; see
/// [`crate::rate::SENTINEL_RATE`]. Ingredient lookup failures are not
/// skipped: a mid-chain miss fails the whole resolution.
pub fn resolve_chain<S: ItemSource>(
    item: &Item,
    target_rate: f64,
    depth: u32,
    cache: &ItemCache,
    source: &S,
) -> ChainResult<Vec<ResolutionEntry>> {
    cache.insert(item)?;

    let speed = base_speed(item, PRIMARY_RECIPE).or_sentinel();
    let mut entries = vec![ResolutionEntry {
        name: item.name.clone(),
        required: target_rate / speed,
        depth,
    }];

    if depth == 0 || is_basic(item)? {
        return Ok(entries);
    }

    let inputs = item
        .recipes
        .first()
        .map(|recipe| recipe.input.as_slice())
        .unwrap_or_default();

    for (ingredient_id, per_unit) in inputs {
        let ingredient = resolve_item(ingredient_id.as_str(), cache, source)?;
        let per_unit = per_unit.map_or(0.0, f64::from);
        let subtree = resolve_chain(&ingredient, per_unit * target_rate, depth - 1, cache, source)?;
        entries.extend(subtree);
    }

    Ok(entries)
}
