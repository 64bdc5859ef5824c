//! # crossgrid Core Library
//!
//! A randomized, time-bounded constructor for crossword-style letter grids.
//!
//! ## Architectural Philosophy
//!
//! The library follows a three-layer architecture so that the grid model, the placement
//! algorithm and the user-facing entry point can be tested and evolved independently.
//!
//! - **[`core`]: The Foundation.** Stateless data models (`Grid`, `Placement`,
//!   `PlacementRecord`, `Dictionary`, `WordPool`) and the I/O collaborators that read
//!   word lists and render finished grids.
//!
//! - **[`engine`]: The Logic Core.** The placement validator, the tournament candidate
//!   search, the occupancy-driven fill loop and the isolation culler, together with
//!   configuration, error and progress types.
//!
//! - **[`workflows`]: The Public API.** Ties `engine` and `core` together into the
//!   multi-pass fill/cull/rebuild refinement driver.

pub mod core;
pub mod engine;
pub mod workflows;
