//! # DSA Common Utilities
//!
//! Shared building blocks for the list/dictionary walkthroughs and the array
//! problems. Everything here is a thin, explicitly typed layer over `Vec<T>`
//! and persistent `im` collections.
//!
//! ## Modules
//!
//! - [`list`]: Bounds-checked ordered-sequence operations (append, insert, remove, pop, slice)
//! - [`dict`]: Insertion-ordered key-unique mapping backed by `im`
//! - [`error`]: The error type shared by both
//!
//! ## Design Principles
//!
//! 1. **Explicit failure**: operations that can fail return [`Result`] instead of panicking
//! 2. **Ownership-based**: mutation goes through `&mut`, reads through shared borrows
//! 3. **Iterator-centric**: transforms are thin wrappers over iterator combinators

pub mod dict;
pub mod error;
pub mod list;

// Re-export main types for convenience
pub use dict::Dict;
pub use error::{CollectionError, Result};
