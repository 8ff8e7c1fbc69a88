//! # Cleanup
//!
//! This module removes generated directory trees and reports what happened.

pub mod errors;
mod remove;
mod target;

pub use remove::{Outcome, remove_directory_tree};
pub use target::{Target, classify};
