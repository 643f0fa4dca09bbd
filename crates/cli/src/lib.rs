//! Terminal output helpers for cellar tools
//!
//! - Status messages
//! - Highlighted match rendering
//! - Score, duration and count formatting

#![warn(missing_docs)]

pub mod output;
