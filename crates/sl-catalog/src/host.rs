//! Host bindings backed by an in-memory catalog.

use std::collections::VecDeque;
use std::sync::Arc;
use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use sl_chatbox::{HostBindings, HostResult};
use sl_protocol::{CatalogQuery, PageId, Product, Sender};
use tokio::sync::RwLock;

use crate::store::InMemoryCatalog;

/// Transcript lines kept; older lines are dropped first.
pub const TRANSCRIPT_CAPACITY: usize = 200;

/// Page, results and transcript state a front end renders from.
///
/// Searches run against the shared catalog; the latest results, the
/// current page and the most recent transcript lines are kept for the
/// front end to display.
pub struct CatalogHost {
    catalog: Arc<RwLock<InMemoryCatalog>>,
    authenticated: AtomicBool,
    page: Mutex<PageId>,
    results: Mutex<Vec<Product>>,
    transcript: Mutex<VecDeque<(Sender, String)>>,
}

impl CatalogHost {
    pub fn new(catalog: Arc<RwLock<InMemoryCatalog>>) -> Self {
        Self {
            catalog,
            authenticated: AtomicBool::new(false),
            page: Mutex::new(PageId::Home),
            results: Mutex::new(Vec::new()),
            transcript: Mutex::new(VecDeque::new()),
        }
    }

    pub fn set_authenticated(&self, authenticated: bool) {
        self.authenticated.store(authenticated, Ordering::SeqCst);
    }

    pub fn current_page(&self) -> PageId {
        *lock(&self.page)
    }

    /// Results of the most recent search; empty after filters are cleared.
    pub fn results(&self) -> Vec<Product> {
        lock(&self.results).clone()
    }

    pub fn transcript(&self) -> Vec<(Sender, String)> {
        lock(&self.transcript).iter().cloned().collect()
    }

    /// Forget the transcript, e.g. when the conversation is reset.
    pub fn clear_transcript(&self) {
        lock(&self.transcript).clear();
    }
}

// A poisoned lock only means another thread panicked mid-update; the data is
// plain values and still usable.
fn lock<T>(mutex: &Mutex<T>) -> std::sync::MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|e| e.into_inner())
}

#[async_trait]
impl HostBindings for CatalogHost {
    async fn search_catalog(&self, query: &CatalogQuery) -> HostResult<Vec<Product>> {
        let products = self.catalog.read().await.search(query);
        tracing::info!(
            query = ?query.query,
            category = ?query.category,
            results = products.len(),
            "catalog searched"
        );
        *lock(&self.results) = products.clone();
        *lock(&self.page) = PageId::Search;
        Ok(products)
    }

    async fn clear_filters(&self) {
        lock(&self.results).clear();
    }

    fn navigate(&self, page: PageId) {
        tracing::info!(page = page.as_str(), "navigating");
        *lock(&self.page) = page;
    }

    fn is_user_authenticated(&self) -> bool {
        self.authenticated.load(Ordering::SeqCst)
    }

    fn display_message(&self, text: &str, sender: Sender) {
        let mut transcript = lock(&self.transcript);
        if transcript.len() == TRANSCRIPT_CAPACITY {
            transcript.pop_front();
        }
        transcript.push_back((sender, text.to_string()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sl_protocol::{Category, SortKey};

    fn host() -> CatalogHost {
        CatalogHost::new(Arc::new(RwLock::new(InMemoryCatalog::with_sample_data())))
    }

    #[tokio::test]
    async fn search_updates_results_and_page() {
        let host = host();
        let query = CatalogQuery {
            category: Some(Category::BrakeSystem),
            sort: SortKey::PriceLow,
            ..Default::default()
        };
        let products = host.search_catalog(&query).await.unwrap();

        assert_eq!(products.len(), 2);
        assert_eq!(products[0].name, "Toyota Corolla Brake Pads");
        assert_eq!(host.results(), products);
        assert_eq!(host.current_page(), PageId::Search);
    }

    #[tokio::test]
    async fn clear_empties_results() {
        let host = host();
        host.search_catalog(&CatalogQuery::default()).await.unwrap();
        assert!(!host.results().is_empty());
        host.clear_filters().await;
        assert!(host.results().is_empty());
    }

    #[test]
    fn navigation_and_auth() {
        let host = host();
        assert_eq!(host.current_page(), PageId::Home);
        host.navigate(PageId::SignIn);
        assert_eq!(host.current_page(), PageId::SignIn);

        assert!(!host.is_user_authenticated());
        host.set_authenticated(true);
        assert!(host.is_user_authenticated());
    }

    #[test]
    fn transcript_is_capped() {
        let host = host();
        for i in 0..TRANSCRIPT_CAPACITY + 5 {
            host.display_message(&format!("line {i}"), Sender::User);
        }
        let transcript = host.transcript();
        assert_eq!(transcript.len(), TRANSCRIPT_CAPACITY);
        assert_eq!(transcript[0].1, "line 5");
        assert_eq!(
            transcript[TRANSCRIPT_CAPACITY - 1].1,
            format!("line {}", TRANSCRIPT_CAPACITY + 4)
        );
    }

    #[test]
    fn clear_transcript_empties_it() {
        let host = host();
        host.display_message("hi", Sender::User);
        host.clear_transcript();
        assert!(host.transcript().is_empty());
    }

    #[test]
    fn transcript_keeps_order() {
        let host = host();
        host.display_message("hi", Sender::User);
        host.display_message("hello", Sender::Bot);
        assert_eq!(
            host.transcript(),
            vec![(Sender::User, "hi".to_string()), (Sender::Bot, "hello".to_string())]
        );
    }
}
