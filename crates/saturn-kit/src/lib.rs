//! # saturn-kit
//!
//! The public solver API for Saturn.
//!
//! This crate is the surface consumed by problem encoders (a Sudoku
//! front-end, a DIMACS shim, ...): build a solver, feed it clauses as
//! signed integers, solve, and read the model back.
//!
//! # Example
//!
//! ```
//! use saturn_kit::{SatResult, Solver};
//!
//! let mut solver = Solver::new();
//! solver.add_clause([1, 2]);
//! solver.add_clause([-1, 3]);
//! solver.add_clause([-2, -3]);
//!
//! match solver.solve().unwrap() {
//!     SatResult::Sat(model) => println!("solution: {:?}", model),
//!     SatResult::Unsat => println!("no solution"),
//! }
//! ```

pub mod result;
pub mod solver;

// Re-export core types
pub use saturn_base::types::{Literal, VarId};
pub use saturn_base::{Error, Result};
pub use saturn_cdcl::{CdclConfig, SatResult};

pub use result::Model;
pub use solver::Solver;
