//! Core library for the toy 8-bit RISC toolchain: register file, ALU,
//! memory, the encoder/decoder table, and the CPU fetch/execute loop.
//!
//! The assembler (`trisk-asm`), emulator (`trisk-emu`), and exporter
//! (`trisk-export`) crates are thin CLI wrappers around this library and
//! `trisk-util`'s shared image I/O.

pub mod alu;
pub mod constants;
pub mod cpu;
pub mod decode;
pub mod flags;
pub mod memory;
pub mod mnemonic;
pub mod register;

pub use constants::MEMORY_SIZE;
pub use cpu::{Cpu, CpuError, ExitReason};
pub use flags::Flags;
pub use memory::Memory;
pub use register::RegBank;
