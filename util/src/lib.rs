//! Shared file I/O plumbing for the three command-line tools.
//!
//! Every tool in this workspace passes a 256-byte memory image between
//! phases. This crate centralizes reading and writing that image so the
//! assembler, emulator, and exporter agree on one error type and one
//! set of truncate/reject rules.

use std::fs::File;
use std::io::{self, Read, Write};
use std::path::Path;

pub const IMAGE_SIZE: usize = 256;

#[derive(Debug, thiserror::Error)]
pub enum ImageError {
    #[error("failed to open {path}: {source}")]
    Open {
        path: String,
        #[source]
        source: io::Error,
    },
    #[error("failed to read {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: io::Error,
    },
    #[error("failed to write {path}: {source}")]
    Write {
        path: String,
        #[source]
        source: io::Error,
    },
    #[error("image {path} is too short: {len} bytes, expected exactly {expected}")]
    TooShort {
        path: String,
        len: usize,
        expected: usize,
    },
}

/// Reads an image from `path`, requiring it be at least [`IMAGE_SIZE`] bytes.
///
/// If the file holds more than [`IMAGE_SIZE`] bytes, the extra bytes are
/// discarded and a warning is logged; callers that must reject oversized
/// input (none currently do) should check the file length themselves first.
pub fn read_image<P: AsRef<Path>>(path: P) -> Result<[u8; IMAGE_SIZE], ImageError> {
    let path_ref = path.as_ref();
    let display = path_ref.display().to_string();

    let mut file = File::open(path_ref).map_err(|source| ImageError::Open {
        path: display.clone(),
        source,
    })?;

    let mut buf = Vec::new();
    file.read_to_end(&mut buf).map_err(|source| ImageError::Read {
        path: display.clone(),
        source,
    })?;

    if buf.len() < IMAGE_SIZE {
        return Err(ImageError::TooShort {
            path: display,
            len: buf.len(),
            expected: IMAGE_SIZE,
        });
    }

    if buf.len() > IMAGE_SIZE {
        log::warn!(
            "{} is {} bytes, larger than the expected {}; truncating",
            display,
            buf.len(),
            IMAGE_SIZE
        );
    }

    let mut image = [0u8; IMAGE_SIZE];
    image.copy_from_slice(&buf[..IMAGE_SIZE]);
    Ok(image)
}

/// Writes exactly [`IMAGE_SIZE`] bytes to `path`, overwriting any existing file.
pub fn write_image<P: AsRef<Path>>(path: P, image: &[u8; IMAGE_SIZE]) -> Result<(), ImageError> {
    let path_ref = path.as_ref();
    let display = path_ref.display().to_string();

    let mut file = File::create(path_ref).map_err(|source| ImageError::Open {
        path: display.clone(),
        source,
    })?;

    file.write_all(image)
        .map_err(|source| ImageError::Write { path: display, source })
}

/// Initializes the `log` facade from `RUST_LOG`, defaulting to `warn`.
///
/// Each of the three binaries calls this once at the top of `main`.
pub fn init_logging() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
}
