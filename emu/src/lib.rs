//! Thin orchestration around [`trisk::Cpu`] for the `tem` binary: load,
//! validate, run to completion, report how it stopped.

use trisk::{Cpu, CpuError, ExitReason, MEMORY_SIZE};

pub struct RunOutcome {
    pub exit_reason: ExitReason,
    pub image: [u8; MEMORY_SIZE],
}

pub fn run_image(image: [u8; MEMORY_SIZE], max_steps: Option<u64>) -> Result<RunOutcome, CpuError> {
    let mut cpu = Cpu::load(image)?;
    let exit_reason = cpu.run(max_steps);

    match exit_reason {
        ExitReason::Halted => log::info!("halted at pc={:#04x}", cpu.pc()),
        ExitReason::InstructionLimitReached => {
            log::warn!("instruction limit reached before HALT, pc={:#04x}", cpu.pc())
        }
    }

    Ok(RunOutcome {
        exit_reason,
        image: *cpu.memory().as_bytes(),
    })
}
