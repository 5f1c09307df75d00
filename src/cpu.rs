//! The CPU (§4.4): direct-by-value composition of register file, memory,
//! and flags, replacing the source's heap-allocated-and-leaked subcomponents
//! (DESIGN.md, Design Note 9.3). Owns its whole state; lifetime equals the
//! `Cpu`'s own lifetime, no shared references.

use crate::alu;
use crate::decode::{self, Op};
use crate::flags::Flags;
use crate::memory::Memory;
use crate::register::RegBank;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CpuError {
    /// Every byte in the loaded image is zero (§4.4 validation on load).
    #[error("refusing to run: program is empty (every byte is 0x00)")]
    EmptyProgram,
}

/// Why [`Cpu::run`] stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitReason {
    Halted,
    InstructionLimitReached,
}

pub struct Cpu {
    memory: Memory,
    regs: RegBank,
    flags: Flags,
    pc: u8,
    running: bool,
}

impl Cpu {
    /// Loads `image` fresh. Fails if the image is entirely zero bytes.
    pub fn load(image: [u8; crate::constants::MEMORY_SIZE]) -> Result<Self, CpuError> {
        let memory = Memory::from(image);
        if memory.is_all_zero() {
            return Err(CpuError::EmptyProgram);
        }
        Ok(Cpu {
            memory,
            regs: RegBank::new(),
            flags: Flags::new(),
            pc: 0,
            running: true,
        })
    }

    pub fn memory(&self) -> &Memory {
        &self.memory
    }

    pub fn registers(&self) -> &RegBank {
        &self.regs
    }

    pub fn flags(&self) -> Flags {
        self.flags
    }

    pub fn pc(&self) -> u8 {
        self.pc
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Executes instructions until HALT, optionally stopping early once
    /// `max_steps` instructions have executed (§5 cancellation).
    pub fn run(&mut self, max_steps: Option<u64>) -> ExitReason {
        let mut executed = 0u64;
        while self.running {
            if let Some(limit) = max_steps {
                if executed >= limit {
                    return ExitReason::InstructionLimitReached;
                }
            }
            self.step();
            executed += 1;
        }
        ExitReason::Halted
    }

    /// Fetches, decodes, and executes exactly one instruction.
    fn step(&mut self) {
        let instr = self.memory.read(self.pc);
        let op = decode::decode(instr);
        log::trace!("pc={:#04x} instr={:#04x} op={:?}", self.pc, instr, op);

        match op {
            Op::Nop => self.advance(1),
            Op::Halt => self.running = false,
            Op::Set { x, y } => {
                let value = self.regs.read(y);
                self.regs.write(x, value);
                self.advance(1);
            }
            Op::PcL { x } => self.branch_if(self.flags.l, x),
            Op::PcO { x } => self.branch_if(self.flags.o, x),
            Op::PcS { x } => self.branch_if(self.flags.s, x),
            Op::PcC { x } => self.branch_if(self.flags.c, x),
            Op::PcZ { x } => self.branch_if(self.flags.z, x),
            Op::Ldi { x } => {
                let imm = self.memory.read(self.pc.wrapping_add(1));
                self.regs.write(x, imm);
                self.advance(2);
            }
            Op::Ld { x, y } => {
                let addr = self.regs.read(y);
                let value = self.memory.read(addr);
                self.regs.write(x, value);
                self.advance(1);
            }
            Op::Add { x, y } => {
                let (result, flags) = alu::add(self.regs.read(x), self.regs.read(y));
                self.regs.write(x, result);
                self.flags = flags;
                self.advance(1);
            }
            Op::Sub { x, y } => {
                let (result, flags) = alu::sub(self.regs.read(x), self.regs.read(y));
                self.regs.write(x, result);
                self.flags = flags;
                self.advance(1);
            }
            Op::Rshift { x, y } => {
                let (result, flags) =
                    alu::rshift(self.regs.read(x), self.regs.read(y), self.flags);
                self.regs.write(x, result);
                self.flags = flags;
                self.advance(1);
            }
            Op::Not { x } => {
                let (result, flags) = alu::not(self.regs.read(x));
                self.regs.write(x, result);
                self.flags = flags;
                self.advance(1);
            }
            Op::Jmp { x } => {
                self.pc = self.regs.read(x);
            }
            Op::And { x, y } => {
                let (result, flags) = alu::and(self.regs.read(x), self.regs.read(y), self.flags);
                self.regs.write(x, result);
                self.flags = flags;
                self.advance(1);
            }
            Op::Or { x, y } => {
                let (result, flags) = alu::or(self.regs.read(x), self.regs.read(y), self.flags);
                self.regs.write(x, result);
                self.flags = flags;
                self.advance(1);
            }
            Op::Cmp { x, y } => {
                let (_discarded, flags) = alu::sub(self.regs.read(x), self.regs.read(y));
                self.flags = flags;
                self.advance(1);
            }
            Op::Ram { x, y } => {
                let value = self.regs.read(x);
                let addr = self.regs.read(y);
                self.memory.write(addr, value);
                self.advance(1);
            }
        }
    }

    fn advance(&mut self, size: u8) {
        self.pc = self.pc.wrapping_add(size);
    }

    /// Shared PC-update discipline for every conditional-branch mnemonic:
    /// jump to `R[x]` when `condition` holds, otherwise advance by one byte.
    fn branch_if(&mut self, condition: bool, x: u8) {
        if condition {
            self.pc = self.regs.read(x);
        } else {
            self.advance(1);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn image_from(bytes: &[u8]) -> [u8; crate::constants::MEMORY_SIZE] {
        let mut image = [0u8; crate::constants::MEMORY_SIZE];
        image[..bytes.len()].copy_from_slice(bytes);
        image
    }

    #[test]
    fn rejects_all_zero_program() {
        let image = [0u8; crate::constants::MEMORY_SIZE];
        assert_eq!(Cpu::load(image), Err(CpuError::EmptyProgram));
    }

    #[test]
    fn halt_alone_executes_exactly_once() {
        let mut cpu = Cpu::load(image_from(&[0x01])).unwrap();
        let reason = cpu.run(None);
        assert_eq!(reason, ExitReason::Halted);
        assert!(!cpu.is_running());
        assert_eq!(cpu.pc(), 0);
    }

    #[test]
    fn scenario_s1_ldi_add_halt() {
        // LDI A 5; LDI B 3; ADD A B; HALT
        let bytes = [0x6C, 0x05, 0x6D, 0x03, 0x81, 0x01];
        let mut cpu = Cpu::load(image_from(&bytes)).unwrap();
        cpu.run(None);
        assert_eq!(cpu.registers().read(0), 8);
        assert_eq!(cpu.registers().read(1), 3);
        assert!(!cpu.flags().z);
        assert!(!cpu.flags().c);
        assert_eq!(cpu.pc(), 5);
    }

    #[test]
    fn scenario_s2_sub_sets_carry_and_sign() {
        // LDI A 0; LDI B 1; SUB A B; HALT
        let bytes = [0x6C, 0x00, 0x6D, 0x01, 0x91, 0x01];
        let mut cpu = Cpu::load(image_from(&bytes)).unwrap();
        cpu.run(None);
        assert_eq!(cpu.registers().read(0), 255);
        assert!(cpu.flags().c);
        assert!(!cpu.flags().z);
        assert!(cpu.flags().s);
    }

    #[test]
    fn scenario_s3_forward_label_jump_skips_first_halt() {
        // LDI A end; JMP A; HALT; end: HALT -- "end" resolves to offset 4
        let bytes = [0x6C, 0x04, 0xB1, 0x01, 0x01];
        let mut cpu = Cpu::load(image_from(&bytes)).unwrap();
        cpu.run(None);
        assert_eq!(cpu.pc(), 4);
    }

    #[test]
    fn scenario_s4_rshift() {
        // LDI A 15; LDI B 2; RSHIFT A B; HALT
        let bytes = [0x6C, 0x0F, 0x6D, 0x02, 0xA1, 0x01];
        let mut cpu = Cpu::load(image_from(&bytes)).unwrap();
        cpu.run(None);
        assert_eq!(cpu.registers().read(0), 3);
        assert!(!cpu.flags().z);
    }

    #[test]
    fn scenario_s5_all_byte_zero_is_empty_program() {
        let image = [0u8; crate::constants::MEMORY_SIZE];
        assert_eq!(Cpu::load(image), Err(CpuError::EmptyProgram));
    }

    #[test]
    fn untaken_branch_advances_by_one() {
        // PCZ A with Z=0 should just advance past itself to the HALT.
        let bytes = [0xB3, 0x01];
        let mut cpu = Cpu::load(image_from(&bytes)).unwrap();
        cpu.run(None);
        assert_eq!(cpu.pc(), 1);
    }

    #[test]
    fn instruction_limit_stops_an_infinite_loop() {
        // JMP to self at address 0: `LDI A 0; JMP A` loops forever.
        let bytes = [0x6C, 0x00, 0xB1, 0x01];
        let mut cpu = Cpu::load(image_from(&bytes)).unwrap();
        let reason = cpu.run(Some(10));
        assert_eq!(reason, ExitReason::InstructionLimitReached);
    }
}
