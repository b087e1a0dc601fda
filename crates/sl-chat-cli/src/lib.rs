//! Spareline chat terminal front end, as a library.
//!
//! Exposes config loading, REPL command parsing, HTML flattening and the
//! terminal host so they can be tested without a TTY.

pub mod command;
pub mod config;
pub mod render;
pub mod terminal;
