//! # I/O Module
//!
//! Collaborators at the edge of the core: reading and filtering word lists, and writing
//! finished grids for people to read.
//!
//! - [`wordlist`] - Line-oriented, Latin-1 word list reader with length and letter filters
//! - [`traits`] - The [`GridWriter`](traits::GridWriter) interface shared by all renderers
//! - [`text`] - Plain-text rendering for terminals
//! - [`latex`] - A printable LaTeX document with the puzzle, the word list and the solution

pub mod latex;
pub mod text;
pub mod traits;
pub mod wordlist;
