//! Terminal host: catalog-backed bindings that print to a writer.

use std::io::Write;
use std::sync::Mutex;

use async_trait::async_trait;
use sl_catalog::CatalogHost;
use sl_chatbox::currency::format_naira;
use sl_chatbox::{HostBindings, HostResult};
use sl_protocol::{CatalogQuery, PageId, Product, Sender};

use crate::render::html_to_text;

/// Result lines printed after a search.
const MAX_RESULTS_SHOWN: usize = 5;

/// Host bindings for a line-oriented terminal.
///
/// Catalog state lives in the wrapped [`CatalogHost`]; bot messages, page
/// changes and search results are written to `out` as plain text. The user's
/// own lines are not echoed, the terminal already shows them.
pub struct TerminalHost<W> {
    inner: CatalogHost,
    out: Mutex<W>,
}

impl<W: Write + Send> TerminalHost<W> {
    pub fn new(inner: CatalogHost, out: W) -> Self {
        Self {
            inner,
            out: Mutex::new(out),
        }
    }

    pub fn catalog_host(&self) -> &CatalogHost {
        &self.inner
    }

    fn print(&self, text: &str) {
        let mut out = self.out.lock().unwrap_or_else(|e| e.into_inner());
        if let Err(e) = writeln!(out, "{text}").and_then(|()| out.flush()) {
            tracing::warn!(error = %e, "failed to write to terminal");
        }
    }
}

impl TerminalHost<Vec<u8>> {
    /// Everything printed so far.
    pub fn output(&self) -> String {
        let out = self.out.lock().unwrap_or_else(|e| e.into_inner());
        String::from_utf8_lossy(&out).into_owned()
    }
}

fn result_line(product: &Product) -> String {
    let location = product.seller.location.as_deref().unwrap_or("unknown location");
    let verified = if product.seller.is_verified { " (verified)" } else { "" };
    format!(
        "  * {} | {} | {}{} | {}",
        product.name,
        format_naira(product.price),
        product.seller.name,
        verified,
        location
    )
}

#[async_trait]
impl<W: Write + Send> HostBindings for TerminalHost<W> {
    async fn search_catalog(&self, query: &CatalogQuery) -> HostResult<Vec<Product>> {
        let products = self.inner.search_catalog(query).await?;
        let mut lines = vec![format!("[{} listing(s)]", products.len())];
        lines.extend(products.iter().take(MAX_RESULTS_SHOWN).map(result_line));
        if products.len() > MAX_RESULTS_SHOWN {
            lines.push(format!("  ... and {} more", products.len() - MAX_RESULTS_SHOWN));
        }
        self.print(&lines.join("\n"));
        Ok(products)
    }

    async fn clear_filters(&self) {
        self.inner.clear_filters().await;
    }

    fn navigate(&self, page: PageId) {
        self.inner.navigate(page);
        self.print(&format!("[page: {}]", page.as_str()));
    }

    fn is_user_authenticated(&self) -> bool {
        self.inner.is_user_authenticated()
    }

    fn display_message(&self, text: &str, sender: Sender) {
        self.inner.display_message(text, sender);
        if sender == Sender::Bot {
            self.print(&format!("bot: {}", html_to_text(text)));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use sl_catalog::InMemoryCatalog;
    use sl_protocol::Category;
    use tokio::sync::RwLock;

    fn host() -> TerminalHost<Vec<u8>> {
        let catalog = Arc::new(RwLock::new(InMemoryCatalog::with_sample_data()));
        TerminalHost::new(CatalogHost::new(catalog), Vec::new())
    }

    #[test]
    fn bot_messages_are_flattened() {
        let host = host();
        host.display_message("find brake pads", Sender::User);
        host.display_message("Type <strong>help</strong>.", Sender::Bot);
        assert_eq!(host.output(), "bot: Type help.\n");
        assert_eq!(host.catalog_host().transcript().len(), 2);
    }

    #[tokio::test]
    async fn search_prints_results() {
        let host = host();
        let query = CatalogQuery {
            category: Some(Category::CoolingSystem),
            ..Default::default()
        };
        host.search_catalog(&query).await.unwrap();

        let output = host.output();
        assert!(output.starts_with("[1 listing(s)]"));
        assert!(output.contains("Corolla Radiator | ₦48,000 | Garden City Autos"));
    }

    #[tokio::test]
    async fn long_result_lists_are_truncated() {
        let host = host();
        host.search_catalog(&CatalogQuery::default()).await.unwrap();
        assert!(host.output().contains("... and 7 more"));
    }

    #[test]
    fn navigation_is_announced() {
        let host = host();
        host.navigate(PageId::SignUp);
        assert_eq!(host.output(), "[page: signup]\n");
        assert_eq!(host.catalog_host().current_page(), PageId::SignUp);
    }
}
