//! Bank account whose allowed actions depend on login state

#![deny(missing_docs)]

pub mod account;
pub mod amount;
pub mod csv;
pub mod errors;

/// Built-in action script replayed when no script file is given
pub const WALKTHROUGH: &str = include_str!("../demos/walkthrough.csv");
