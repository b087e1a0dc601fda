//! End-to-end tests for the Spareline chat assistant.
//!
//! The tests live in `tests/`; this library is intentionally empty.
