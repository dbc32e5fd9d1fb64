//! # saturn-base
//!
//! Core types and utilities for the Saturn SAT solver.
//!
//! This crate provides the foundational building blocks used across the
//! other Saturn crates:
//!
//! - **Types**: variable identifiers and literals with their signed
//!   integer encoding
//! - **Error Types**: unified error handling across the solver

pub mod error;
pub mod types;

pub use error::{Error, Result};
pub use types::{Literal, VarId};
