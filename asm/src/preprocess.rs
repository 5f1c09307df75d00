//! Pass 1 (§4.6): resolve label addresses and strip label definitions from
//! the token stream, leaving pass 2 a flat stream of mnemonics, operands,
//! `BYTE` directives, and label *references*.

use crate::error::AssembleError;
use std::collections::HashMap;
use trisk::mnemonic::{self, BYTE_PSEUDO_MNEMONIC};

pub struct Preprocessed {
    pub tokens: Vec<String>,
    pub labels: HashMap<String, u8>,
    pub bytes_used: u32,
}

fn is_reserved(name: &str) -> bool {
    name.eq_ignore_ascii_case(BYTE_PSEUDO_MNEMONIC) || mnemonic::lookup(name).is_some()
}

pub fn preprocess(tokens: &[String]) -> Result<Preprocessed, AssembleError> {
    let mut addr: u32 = 0;
    let mut labels: HashMap<String, u8> = HashMap::new();
    let mut output: Vec<String> = Vec::with_capacity(tokens.len());

    let mut i = 0;
    while i < tokens.len() {
        let token = &tokens[i];

        if let Some(mnemonic) = mnemonic::lookup(token) {
            addr += mnemonic.size as u32;
            check_bounds(addr)?;
            let num_params = mnemonic::operand_count(mnemonic.shape);
            let take = (num_params + 1).min(tokens.len() - i);
            output.extend_from_slice(&tokens[i..i + take]);
            i += take;
        } else if token.eq_ignore_ascii_case(BYTE_PSEUDO_MNEMONIC) {
            addr += 1;
            check_bounds(addr)?;
            let take = 2.min(tokens.len() - i);
            output.extend_from_slice(&tokens[i..i + take]);
            i += take;
        } else if let Some(name) = token.strip_suffix(':') {
            let key = name.to_ascii_lowercase();
            if is_reserved(name) {
                return Err(AssembleError::ReservedNameCollision(name.to_owned()));
            }
            if labels.contains_key(&key) {
                return Err(AssembleError::DuplicateLabel(name.to_owned()));
            }
            labels.insert(key, addr as u8);
            i += 1;
        } else {
            // Unknown token: assumed to be a 1-byte label reference. Every
            // such token is sized as one byte here regardless of whether a
            // later pass resolves it as a label or rejects it as unknown;
            // this is the documented preprocessor heuristic (§9 open
            // question), preserved verbatim rather than "fixed".
            addr += 1;
            check_bounds(addr)?;
            output.push(token.clone());
            i += 1;
        }
    }

    Ok(Preprocessed {
        tokens: output,
        labels,
        bytes_used: addr,
    })
}

fn check_bounds(addr: u32) -> Result<(), AssembleError> {
    if addr > trisk::MEMORY_SIZE as u32 {
        Err(AssembleError::ProgramTooLarge)
    } else {
        Ok(())
    }
}
