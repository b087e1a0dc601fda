//! Spareline chat: terminal front end for the marketplace assistant.
//!
//! Wires the chat session to a catalog-backed terminal host and reads one
//! message per line from stdin.

use std::io::Write;
use std::sync::Arc;

use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::RwLock;
use tracing_subscriber::EnvFilter;

use sl_catalog::{CatalogHost, InMemoryCatalog};
use sl_chat_cli::command::{self, ReplCommand, USAGE};
use sl_chat_cli::config::ChatCliConfig;
use sl_chat_cli::terminal::TerminalHost;
use sl_chatbox::ChatSession;
use sl_protocol::Language;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Logs go to stderr so they do not interleave with the conversation.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .json()
        .init();

    tracing::info!(version = env!("CARGO_PKG_VERSION"), "spareline-chat starting");

    // ── Load config ─────────────────────────────────────────────
    let config = match std::env::args().nth(1) {
        Some(path) => ChatCliConfig::from_file(&path)?,
        None => ChatCliConfig::default(),
    };
    tracing::info!(
        signed_in = config.signed_in,
        response_delay_ms = config.chat.response_delay_ms,
        "config loaded"
    );

    // ── Host and session ────────────────────────────────────────
    let catalog = Arc::new(RwLock::new(InMemoryCatalog::with_sample_data()));
    let catalog_host = CatalogHost::new(catalog);
    catalog_host.set_authenticated(config.signed_in);
    let host = Arc::new(TerminalHost::new(catalog_host, std::io::stdout()));

    let mut session = ChatSession::new(host.clone(), config.chat.clone());

    let languages: Vec<&str> = Language::ALL.iter().map(|l| l.code()).collect();
    println!("Spareline assistant. Choose a language: {}", languages.join(", "));
    println!("{USAGE}");

    if let Some(code) = &config.default_language {
        session.select_language(code);
    }

    // ── REPL ────────────────────────────────────────────────────
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        print!("> ");
        std::io::stdout().flush()?;

        let Some(line) = lines.next_line().await? else {
            break;
        };

        match command::parse(&line) {
            None => {}
            Some(ReplCommand::Say(text)) => {
                session.handle_user_input(&text).await;
            }
            Some(ReplCommand::Language(code)) => {
                if code.parse::<Language>().is_err() {
                    println!("unknown language {code:?}; try one of: {}", languages.join(", "));
                }
                session.select_language(&code);
            }
            Some(ReplCommand::Reset) => {
                session.reset();
                host.catalog_host().clear_transcript();
                println!("Conversation reset. Choose a language: {}", languages.join(", "));
            }
            Some(ReplCommand::Usage) => println!("{USAGE}"),
            Some(ReplCommand::Quit) => break,
        }
    }

    tracing::info!("spareline-chat stopped");
    Ok(())
}
