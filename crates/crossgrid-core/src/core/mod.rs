//! # Core Module
//!
//! Fundamental building blocks for crossword grid construction.
//!
//! ## Architecture
//!
//! - **Grid Representation** ([`models`]) - Cells, grids, placements, records and word collections
//! - **File I/O** ([`io`]) - Word list reading and grid rendering (plain text and LaTeX)
//!
//! Nothing in this module mutates shared state; the stateful algorithm lives in
//! [`crate::engine`].

pub mod io;
pub mod models;
