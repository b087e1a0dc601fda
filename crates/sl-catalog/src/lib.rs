//! Spareline product catalog.
//!
//! [`InMemoryCatalog`] implements the marketplace's search semantics over a
//! list of listings; [`CatalogHost`] exposes it to the chat assistant as
//! host bindings.

pub mod error;
pub mod host;
pub mod sample;
pub mod store;

pub use error::{CatalogError, CatalogResult};
pub use host::CatalogHost;
pub use store::InMemoryCatalog;
