//! Circuit dictionaries.
//!
//! Circuits are stored as JSON where a gate is `{"op": "+", "operands": [...]}`
//! and an operand is a nested gate, a variable name, or a constant given as a
//! boolean or as `0`/`1`. Gates may have any positive number of operands; they
//! are folded from the left into binary terms.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::term::Term;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GateOp {
    #[serde(rename = "+")]
    Or,
    #[serde(rename = "*")]
    And,
    #[serde(rename = "!")]
    Not,
}

impl std::fmt::Display for GateOp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let symbol = match self {
            GateOp::Or => "+",
            GateOp::And => "*",
            GateOp::Not => "!",
        };
        write!(f, "{symbol}")
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Circuit {
    Constant(bool),
    Bit(u8),
    Variable(String),
    Gate { op: GateOp, operands: Vec<Circuit> },
}

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum CircuitError {
    #[error("gate `{0}` has no operands")]
    NoOperands(GateOp),
    #[error("gate `!` takes exactly one operand, got {0}")]
    NotArity(usize),
    #[error("constant must be 0 or 1, got {0}")]
    InvalidBit(u8),
}

impl TryFrom<&Circuit> for Term {
    type Error = CircuitError;

    fn try_from(circuit: &Circuit) -> Result<Self, Self::Error> {
        match circuit {
            Circuit::Constant(value) => Ok(Term::constant(*value)),
            Circuit::Bit(0) => Ok(Term::constant(false)),
            Circuit::Bit(1) => Ok(Term::constant(true)),
            Circuit::Bit(bit) => Err(CircuitError::InvalidBit(*bit)),
            Circuit::Variable(name) => Ok(Term::var(name)),
            Circuit::Gate {
                op: GateOp::Not,
                operands,
            } => match operands.as_slice() {
                [operand] => Ok(Term::not(Term::try_from(operand)?)),
                _ => Err(CircuitError::NotArity(operands.len())),
            },
            Circuit::Gate { op, operands } => {
                let mut operands = operands.iter().map(Term::try_from);
                let first = operands.next().ok_or(CircuitError::NoOperands(*op))??;
                operands.try_fold(first, |acc, operand| {
                    let operand = operand?;
                    Ok(match op {
                        GateOp::Or => Term::or(acc, operand),
                        _ => Term::and(acc, operand),
                    })
                })
            }
        }
    }
}

impl From<&Term> for Circuit {
    fn from(term: &Term) -> Self {
        match term {
            Term::Constant(value) => Circuit::Bit(u8::from(*value)),
            Term::Variable(name) => Circuit::Variable(name.to_string()),
            Term::Not(operand) => Circuit::Gate {
                op: GateOp::Not,
                operands: vec![Circuit::from(operand.as_ref())],
            },
            Term::And(left, right) => Circuit::Gate {
                op: GateOp::And,
                operands: vec![Circuit::from(left.as_ref()), Circuit::from(right.as_ref())],
            },
            Term::Or(left, right) => Circuit::Gate {
                op: GateOp::Or,
                operands: vec![Circuit::from(left.as_ref()), Circuit::from(right.as_ref())],
            },
        }
    }
}
