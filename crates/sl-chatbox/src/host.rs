//! Host bindings: the page, catalog and transcript the assistant drives.

use async_trait::async_trait;
use sl_protocol::{CatalogQuery, PageId, Product, Sender};

use crate::error::HostResult;

/// Operations the assistant invokes but does not implement.
///
/// Analogous to a device interface: the front end supplies a real
/// implementation, tests use [`MockHost`](crate::mock::MockHost).
#[async_trait]
pub trait HostBindings: Send + Sync {
    /// Run a catalog search with the full current filter set.
    async fn search_catalog(&self, query: &CatalogQuery) -> HostResult<Vec<Product>>;

    /// Reset the host's own filter controls and results.
    async fn clear_filters(&self);

    /// Show a page.
    fn navigate(&self, page: PageId);

    /// Whether a user session exists right now.
    fn is_user_authenticated(&self) -> bool;

    /// Append a message to the visible transcript. `text` may contain HTML.
    fn display_message(&self, text: &str, sender: Sender);
}
