//! HTTP integration tests for the productivity API.
//!
//! Spins up the real axum router on an ephemeral port and drives it with a
//! reqwest client, asserting the status codes and bodies clients depend on.
