//! Type system for Saturn variables and literals.
//!
//! A variable is a bare positive identifier; a literal is a variable with
//! an optional negation. Literals carry the DIMACS-style signed encoding
//! (`+v` positive, `-v` negated) used for indexing and interchange.

mod literal;

pub use literal::Literal;

/// Unique identifier for a variable in the solver.
///
/// Variable ids come from the client encoding and start at 1; id 0 never
/// names a variable.
pub type VarId = u64;
