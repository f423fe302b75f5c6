//! Nullable infrastructure for deterministic testing.
//!
//! The one external dependency of the voting workflow — the governance
//! contracts — is abstracted behind the `GovernanceClient` trait. This crate
//! provides a test-friendly implementation that:
//! - Records every transaction instead of submitting it
//! - Serves scripted proposal states, one per read, so tests can exercise
//!   the read-then-act race
//! - Injects failures per operation
//! - Never touches the network
//!
//! Usage: swap the gateway client for [`NullGovernanceClient`] in tests.

pub mod client;

pub use client::NullGovernanceClient;
