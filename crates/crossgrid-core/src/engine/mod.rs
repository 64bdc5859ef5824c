//! # Engine Module
//!
//! The stateful, algorithmic layer of crossgrid: everything that decides where words go.
//!
//! ## Architecture
//!
//! - **Configuration** ([`config`]) - Grid dimensions, pass count, time budget, occupancy goal
//!   and search tuning, with validation at construction time
//! - **Validation** ([`validation`]) - The placement legality rules and crossing-word extraction
//! - **Search** ([`search`]) - Randomized sampling and tournament selection of candidates
//! - **Fill** ([`fill`]) - The occupancy- and deadline-driven construction loop
//! - **Cull** ([`cull`]) - Isolation detection and grid rebuilding between passes
//! - **Progress Monitoring** ([`progress`]) - Callback-based progress events for front ends
//! - **Error Handling** ([`error`]) - Engine-level error types
//!
//! ## Invariants
//!
//! After every committed placement the grid satisfies the crossword rules: overlapping
//! words agree on shared letters, no word runs into another along its own direction, and
//! every run of two or more letters is a word that is tracked as a placement record.

pub mod config;
pub mod context;
pub mod cull;
pub mod error;
pub mod fill;
pub mod progress;
pub mod search;
pub mod validation;
