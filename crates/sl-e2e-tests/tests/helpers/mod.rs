//! Shared test harness for E2E conversation tests.
//!
//! Wires a chat session to a catalog-backed host over the sample listings,
//! exercising the real resolver, templates and search path together.

#![allow(dead_code)]

use std::sync::Arc;

use sl_catalog::{CatalogHost, InMemoryCatalog};
use sl_chatbox::{ChatConfig, ChatSession, MockHost};
use sl_protocol::{Product, Sender};
use tokio::sync::RwLock;

/// Chat session plus the catalog host it drives.
pub struct TestHarness {
    pub catalog: Arc<RwLock<InMemoryCatalog>>,
    pub host: Arc<CatalogHost>,
    pub session: ChatSession,
}

impl TestHarness {
    /// Session over the sample catalog, no language chosen yet.
    pub fn with_sample_data() -> Self {
        let catalog = Arc::new(RwLock::new(InMemoryCatalog::with_sample_data()));
        let host = Arc::new(CatalogHost::new(catalog.clone()));
        let session = ChatSession::new(host.clone(), ChatConfig::immediate());
        Self {
            catalog,
            host,
            session,
        }
    }

    /// Sample-catalog session with `code` already selected.
    pub fn speaking(code: &str) -> Self {
        let mut h = Self::with_sample_data();
        h.session.select_language(code);
        h
    }

    pub async fn say(&mut self, text: &str) -> String {
        self.session.handle_user_input(text).await
    }

    /// Names of the listings from the most recent search.
    pub fn result_names(&self) -> Vec<String> {
        self.host.results().into_iter().map(|p: Product| p.name).collect()
    }

    pub fn bot_lines(&self) -> Vec<String> {
        self.host
            .transcript()
            .into_iter()
            .filter(|(sender, _)| *sender == Sender::Bot)
            .map(|(_, text)| text)
            .collect()
    }
}

/// Session over a fresh `MockHost`.
pub fn mock_session() -> (Arc<MockHost>, ChatSession) {
    let host = Arc::new(MockHost::new());
    let session = ChatSession::new(host.clone(), ChatConfig::immediate());
    (host, session)
}
