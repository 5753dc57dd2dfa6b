//! Integration tests for deckpack crates.
//!
//! This crate contains end-to-end tests that exercise the core types and
//! the codec together, plus the `dump_group` inspection tool.

#[cfg(test)]
mod golden;
