//! The boolean term language: terms, their evaluation and the circuit
//! dictionary format.

pub mod circuit;
pub mod evaluation;
pub mod term;

pub use circuit::{Circuit, CircuitError, GateOp};
pub use evaluation::{Assignment, Assignments, EvalError, TruthTable, TruthTableRow, Valuation};
pub use term::{Term, VariableName};
