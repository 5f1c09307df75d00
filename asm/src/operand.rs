//! Operand classification and resolution for pass 2 (§4.7).
//!
//! Every operand token is either "entirely decimal digits" or a bare
//! identifier. Which of those maps to which runtime value depends on
//! whether the position being filled is a register or an immediate/label:
//! register positions reject out-of-range indices, immediate positions
//! silently truncate digit literals to 8 bits and resolve non-digit tokens
//! as label references (the concrete scenario in §8 S3 requires `LDI A end`
//! to work, which only makes sense if LDI's second operand accepts labels).

use crate::error::AssembleError;
use std::collections::HashMap;

fn is_all_digits(token: &str) -> bool {
    !token.is_empty() && token.chars().all(|c| c.is_ascii_digit())
}

/// Resolves an operand that must name a register (0..3), whether written
/// as a decimal digit or as a letter `A..D` (case-insensitive).
pub fn resolve_register(token: &str) -> Result<u8, AssembleError> {
    let value = if is_all_digits(token) {
        token
            .parse::<u64>()
            .map_err(|_| AssembleError::MalformedInteger(token.to_owned()))?
    } else {
        let first = token
            .chars()
            .next()
            .ok_or_else(|| AssembleError::MalformedInteger(token.to_owned()))?;
        let upper = first.to_ascii_uppercase();
        if !upper.is_ascii_uppercase() {
            return Err(AssembleError::RegisterOutOfRange(token.to_owned()));
        }
        (upper as u8 - b'A') as u64
    };

    if value > 3 {
        Err(AssembleError::RegisterOutOfRange(token.to_owned()))
    } else {
        Ok(value as u8)
    }
}

/// Resolves an operand that holds an 8-bit immediate or a label reference.
/// Decimal literals greater than 255 are silently truncated (§9 open
/// question, resolved as "retain truncation").
pub fn resolve_immediate(
    token: &str,
    labels: &HashMap<String, u8>,
) -> Result<u8, AssembleError> {
    if is_all_digits(token) {
        let value = token
            .parse::<u64>()
            .map_err(|_| AssembleError::MalformedInteger(token.to_owned()))?;
        Ok((value & 0xFF) as u8)
    } else {
        resolve_label(token, labels)
    }
}

/// Resolves a bare identifier used as a standalone label reference (the
/// pass-2 fallback case, and the non-digit branch of [`resolve_immediate`]).
pub fn resolve_label(token: &str, labels: &HashMap<String, u8>) -> Result<u8, AssembleError> {
    labels
        .get(&token.to_ascii_lowercase())
        .copied()
        .ok_or_else(|| AssembleError::UnknownLabel(token.to_owned()))
}
