//! Source-error taxonomy for the assembler (§7).

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum AssembleError {
    #[error("duplicate label definition: {0}")]
    DuplicateLabel(String),

    #[error("label name collides with a reserved mnemonic or BYTE: {0}")]
    ReservedNameCollision(String),

    #[error("program exceeds 256 bytes")]
    ProgramTooLarge,

    #[error("unknown label: {0}")]
    UnknownLabel(String),

    #[error("register index out of range (must be 0..3): {0}")]
    RegisterOutOfRange(String),

    #[error("malformed integer literal: {0}")]
    MalformedInteger(String),

    #[error("instruction {0} is missing an operand")]
    MissingOperand(String),
}
