//! Pass 2 (§4.7): walk the label-free token stream and emit bytes into the
//! 256-byte image.

use crate::error::AssembleError;
use crate::operand::{resolve_immediate, resolve_label, resolve_register};
use std::collections::HashMap;
use trisk::mnemonic::{self, OperandShape, BYTE_PSEUDO_MNEMONIC};
use trisk::MEMORY_SIZE;

pub fn emit(tokens: &[String], labels: &HashMap<String, u8>) -> Result<[u8; MEMORY_SIZE], AssembleError> {
    let mut image = [0u8; MEMORY_SIZE];
    let mut addr: usize = 0;
    let mut i = 0;

    while i < tokens.len() {
        let token = &tokens[i];

        if let Some(m) = mnemonic::lookup(token) {
            i += 1;
            let num_params = mnemonic::operand_count(m.shape);
            let mut operands = Vec::with_capacity(num_params);

            for position in 0..num_params {
                let operand_token = tokens
                    .get(i)
                    .ok_or_else(|| AssembleError::MissingOperand(token.clone()))?;
                let value = resolve_operand(m.shape, position, operand_token, labels)?;
                operands.push(value);
                i += 1;
            }

            for byte in mnemonic::encode(m, &operands) {
                write_byte(&mut image, &mut addr, byte)?;
            }
        } else if token.eq_ignore_ascii_case(BYTE_PSEUDO_MNEMONIC) {
            i += 1;
            let operand_token = tokens
                .get(i)
                .ok_or_else(|| AssembleError::MissingOperand(token.clone()))?;
            let value = resolve_immediate(operand_token, labels)?;
            i += 1;
            write_byte(&mut image, &mut addr, value)?;
        } else {
            let value = resolve_label(token, labels)?;
            i += 1;
            write_byte(&mut image, &mut addr, value)?;
        }
    }

    Ok(image)
}

/// A register-shaped position resolves via [`resolve_register`] (rejecting
/// indices ≥4); an immediate-shaped position resolves via
/// [`resolve_immediate`] (silent truncation, or label lookup).
fn resolve_operand(
    shape: OperandShape,
    position: usize,
    token: &str,
    labels: &HashMap<String, u8>,
) -> Result<u8, AssembleError> {
    let is_register_position = match shape {
        OperandShape::None => unreachable!("None shape has no operands"),
        OperandShape::OneReg => true,
        OperandShape::TwoReg => true,
        OperandShape::RegImm => position == 0,
        OperandShape::ByteLiteral => false,
    };

    if is_register_position {
        resolve_register(token)
    } else {
        resolve_immediate(token, labels)
    }
}

fn write_byte(image: &mut [u8; MEMORY_SIZE], addr: &mut usize, byte: u8) -> Result<(), AssembleError> {
    if *addr >= MEMORY_SIZE {
        return Err(AssembleError::ProgramTooLarge);
    }
    image[*addr] = byte;
    *addr += 1;
    Ok(())
}
