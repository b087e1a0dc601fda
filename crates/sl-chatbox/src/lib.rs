//! Spareline chat assistant core.
//!
//! Turns free text into one structured [`Intent`](sl_protocol::Intent) via an
//! ordered rule table, renders the reply from localized templates, and drives
//! the host (navigation, catalog search, transcript) through [`HostBindings`].

pub mod advice;
pub mod config;
pub mod currency;
pub mod dialogue;
pub mod error;
pub mod extract;
pub mod host;
pub mod i18n;
pub mod mock;
pub mod rules;

pub use config::ChatConfig;
pub use dialogue::{ChatSession, DialogueState};
pub use error::{HostError, HostResult};
pub use host::HostBindings;
pub use mock::MockHost;
pub use rules::{ResolveContext, Utterance, resolve};
