use crate::entities::Item;
use crate::error::{ChainError, ChainResult};

/// Recipe index the resolver always uses. Items with alternative recipes are
/// not disambiguated; the first recipe wins.
pub const PRIMARY_RECIPE: usize = 0;

/// Fallback rate substituted when an item's true base rate cannot be
/// computed. Dividing a target rate by it yields a negative facility count,
/// which is the visible "rate unknown" signal in reports.
pub const SENTINEL_RATE: f64 = -1.0;

/// Per-second production rate of one facility.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Rate {
    Known(f64),
    Unknown,
}

impl Rate {
    pub fn is_known(&self) -> bool {
        matches!(self, Rate::Known(_))
    }

    /// Collapse to a plain float, substituting [`SENTINEL_RATE`] for an
    /// unknown rate. Only the resolver boundary should do this.
    pub fn or_sentinel(self) -> f64 {
        match self {
            Rate::Known(value) => value,
            Rate::Unknown => SENTINEL_RATE,
        }
    }
}

/// Base production rate of `item` under recipe `r`, as items per second for a
/// single facility.
///
/// Unknown when the recipe or its primary-output quantity is missing, when
/// the duration carries a `?` (unknown) or `%` (probabilistic) marker, or
/// when the duration text does not parse as a number.
pub fn base_speed(item: &Item, r: usize) -> Rate {
    let Some(recipe) = item.recipes.get(r) else {
        return Rate::Unknown;
    };

    let Some((_, Some(quantity))) = recipe.output.first() else {
        return Rate::Unknown;
    };

    // Same normalization as the wiki text: "1.5 s" -> "1.5".
    let duration = recipe.duration.trim_matches(|c| c == ' ' || c == 's');
    if duration.contains('?') || duration.contains('%') {
        return Rate::Unknown;
    }

    match duration.parse::<f64>() {
        Ok(seconds) => Rate::Known(f64::from(*quantity) / seconds),
        Err(_) => Rate::Unknown,
    }
}

/// Whether `item` terminates the production chain: natural resources and
/// items whose rate is marked unknown (`?` duration) are never descended
/// into, regardless of remaining depth.
///
/// Fails if the item has not been classified with a category yet.
pub fn is_basic(item: &Item) -> ChainResult<bool> {
    let category = item
        .category
        .as_deref()
        .ok_or_else(|| ChainError::Unclassified(item.name.clone()))?;

    if category.contains("Natural Resource") {
        return Ok(true);
    }

    Ok(item.recipes.iter().any(|recipe| recipe.duration.contains('?')))
}
