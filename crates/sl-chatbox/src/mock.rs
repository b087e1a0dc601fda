//! Mock host for testing the assistant without a UI or backend.
//!
//! Records every navigation, search, clear and displayed message for
//! assertion in tests.

use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use sl_protocol::{CatalogQuery, PageId, Product, Sender};

use crate::error::{HostError, HostResult};
use crate::host::HostBindings;

/// A recorded `display_message` call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayedMessage {
    pub text: String,
    pub sender: Sender,
}

/// Mock implementation of the `HostBindings` trait.
///
/// Thread-safe via `Mutex` (fine for test contexts).
pub struct MockHost {
    authenticated: AtomicBool,
    fail_searches: AtomicBool,
    results: Mutex<Vec<Product>>,
    navigations: Mutex<Vec<PageId>>,
    searches: Mutex<Vec<CatalogQuery>>,
    messages: Mutex<Vec<DisplayedMessage>>,
    clears: Mutex<usize>,
}

impl MockHost {
    pub fn new() -> Self {
        Self {
            authenticated: AtomicBool::new(false),
            fail_searches: AtomicBool::new(false),
            results: Mutex::new(Vec::new()),
            navigations: Mutex::new(Vec::new()),
            searches: Mutex::new(Vec::new()),
            messages: Mutex::new(Vec::new()),
            clears: Mutex::new(0),
        }
    }

    /// Host with a signed-in user.
    pub fn signed_in() -> Self {
        let host = Self::new();
        host.set_authenticated(true);
        host
    }

    pub fn set_authenticated(&self, authenticated: bool) {
        self.authenticated.store(authenticated, Ordering::SeqCst);
    }

    /// Make every subsequent search fail.
    pub fn fail_searches(&self) {
        self.fail_searches.store(true, Ordering::SeqCst);
    }

    /// Products returned by every search.
    pub fn set_results(&self, products: Vec<Product>) {
        *self.results.lock().unwrap() = products;
    }

    pub fn navigations(&self) -> Vec<PageId> {
        self.navigations.lock().unwrap().clone()
    }

    pub fn searches(&self) -> Vec<CatalogQuery> {
        self.searches.lock().unwrap().clone()
    }

    pub fn last_search(&self) -> Option<CatalogQuery> {
        self.searches.lock().unwrap().last().cloned()
    }

    pub fn clear_count(&self) -> usize {
        *self.clears.lock().unwrap()
    }

    /// All displayed messages, user and bot, in order.
    pub fn messages(&self) -> Vec<DisplayedMessage> {
        self.messages.lock().unwrap().clone()
    }

    /// Text of the bot messages only.
    pub fn bot_messages(&self) -> Vec<String> {
        self.messages_from(Sender::Bot)
    }

    /// Text of the user messages only.
    pub fn user_messages(&self) -> Vec<String> {
        self.messages_from(Sender::User)
    }

    fn messages_from(&self, sender: Sender) -> Vec<String> {
        self.messages
            .lock()
            .unwrap()
            .iter()
            .filter(|m| m.sender == sender)
            .map(|m| m.text.clone())
            .collect()
    }

    /// Clear all recorded calls. Configuration (auth, results) is kept.
    pub fn reset(&self) {
        self.navigations.lock().unwrap().clear();
        self.searches.lock().unwrap().clear();
        self.messages.lock().unwrap().clear();
        *self.clears.lock().unwrap() = 0;
    }
}

impl Default for MockHost {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl HostBindings for MockHost {
    async fn search_catalog(&self, query: &CatalogQuery) -> HostResult<Vec<Product>> {
        self.searches.lock().unwrap().push(query.clone());
        if self.fail_searches.load(Ordering::SeqCst) {
            return Err(HostError::Unavailable("mock search failure".into()));
        }
        Ok(self.results.lock().unwrap().clone())
    }

    async fn clear_filters(&self) {
        *self.clears.lock().unwrap() += 1;
    }

    fn navigate(&self, page: PageId) {
        self.navigations.lock().unwrap().push(page);
    }

    fn is_user_authenticated(&self) -> bool {
        self.authenticated.load(Ordering::SeqCst)
    }

    fn display_message(&self, text: &str, sender: Sender) {
        self.messages.lock().unwrap().push(DisplayedMessage {
            text: text.to_string(),
            sender,
        });
    }
}
