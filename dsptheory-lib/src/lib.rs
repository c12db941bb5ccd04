//! Production-chain math for Dyson Sphere Program items.
//!
//! Given an item and a target output rate, [`chain::resolve_chain`] walks the
//! item's recipe inputs recursively and computes how many facilities of each
//! ingredient are needed, stopping at a depth bound or at basic items (raw
//! resources and items whose rate the wiki marks unknown). Every item touched
//! along the way is persisted into a local JSON index via [`store`].
//!
//! Fetching lives behind the [`traits::ItemSource`] seam; the `dsptheory-wiki`
//! crate provides the scraping implementation.

pub mod chain;
pub mod entities;
pub mod error;
pub mod prelude;
pub mod rate;
pub mod report;
pub mod store;
pub mod traits;
