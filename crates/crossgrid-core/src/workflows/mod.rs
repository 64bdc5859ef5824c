//! # Workflows Module
//!
//! High-level entry points that run a complete grid construction from a word list to a
//! finished grid.
//!
//! ## Overview
//!
//! A workflow owns every piece of mutable state for the duration of one call: the grid,
//! the word pool, the placement records and the random number generator. Callers supply
//! only the words, a validated [`GeneratorConfig`](crate::engine::config::GeneratorConfig)
//! and a [`ProgressReporter`](crate::engine::progress::ProgressReporter).
//!
//! - **Generation Workflow** ([`generate`]) - Repeated fill, cull and rebuild passes that
//!   leave a dense grid in which every word crosses at least one other.

pub mod generate;
