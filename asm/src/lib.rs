//! Two-pass assembler (§4.6, §4.7): turns whitespace-tokenized source into
//! a 256-byte image bit-exact with what [`trisk::decode`] expects.

mod emit;
mod error;
mod operand;
mod preprocess;
mod token;

pub use error::AssembleError;

use trisk::MEMORY_SIZE;

pub fn assemble(source: &str) -> Result<[u8; MEMORY_SIZE], AssembleError> {
    let tokens = token::tokenize(source);
    let preprocessed = preprocess::preprocess(&tokens)?;
    for (name, addr) in &preprocessed.labels {
        log::debug!("label {} -> {:#04x}", name, addr);
    }
    let image = emit::emit(&preprocessed.tokens, &preprocessed.labels)?;
    log::info!("assembled {} bytes used", preprocessed.bytes_used);
    Ok(image)
}
