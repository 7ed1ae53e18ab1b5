//! Shared test fixtures for setclique crates.
//!
//! This crate provides collections and pure helper functions for testing.
//! It does NOT depend on `setclique-solver` to avoid circular dependencies.
//!
//! - [`scenarios`] - Hand-built collections with known answers
//! - [`oracle`] - Result normalisation and an independent subset oracle
//!
//! # Usage
//!
//! Add as a dev-dependency in your crate's `Cargo.toml`:
//!
//! ```toml
//! [dev-dependencies]
//! setclique-test = { workspace = true }
//! ```
//!
//! Then import the fixtures you need:
//!
//! ```ignore
//! use setclique_test::scenarios::{diagonal, seeded};
//! use setclique_test::oracle::{normalize, subset_oracle};
//! ```

pub mod oracle;
pub mod scenarios;

pub use oracle::{binomial, normalize, subset_oracle};
pub use scenarios::{broken_triple, diagonal, full_deck, seeded};
