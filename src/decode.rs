//! The decoder (§4.1, §4.4): classifies an opcode byte into an action.
//!
//! Implemented as a direct match on the high nibble with a sub-discriminator
//! on the low bits, per the redesign away from the source's member-function
//! pointer dispatch table (see DESIGN.md).

use crate::constants::{field_x, field_x_low, field_y, high_nibble, low_nibble};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Op {
    Nop,
    Halt,
    Set { x: u8, y: u8 },
    PcL { x: u8 },
    PcO { x: u8 },
    PcS { x: u8 },
    Ldi { x: u8 },
    Ld { x: u8, y: u8 },
    Add { x: u8, y: u8 },
    Sub { x: u8, y: u8 },
    Rshift { x: u8, y: u8 },
    Not { x: u8 },
    Jmp { x: u8 },
    PcC { x: u8 },
    PcZ { x: u8 },
    And { x: u8, y: u8 },
    Or { x: u8, y: u8 },
    Cmp { x: u8, y: u8 },
    Ram { x: u8, y: u8 },
}

/// Classifies one opcode byte. Every byte decodes to *some* action: bytes
/// outside the enumerated patterns of §4.1 fall through to [`Op::Halt`] as
/// the defensive default.
pub fn decode(instr: u8) -> Op {
    match high_nibble(instr) {
        0x0 => match low_nibble(instr) {
            0x0 => Op::Nop,
            0x1 => Op::Halt,
            _ => Op::Halt,
        },
        0x5 => Op::Set { x: field_x(instr), y: field_y(instr) },
        0x6 => match (instr >> 2) & 0b11 {
            0b00 => Op::PcL { x: field_x_low(instr) },
            0b01 => Op::PcO { x: field_x_low(instr) },
            0b10 => Op::PcS { x: field_x_low(instr) },
            _ => Op::Ldi { x: field_x_low(instr) },
        },
        0x7 => Op::Ld { x: field_x(instr), y: field_y(instr) },
        0x8 => Op::Add { x: field_x(instr), y: field_y(instr) },
        0x9 => Op::Sub { x: field_x(instr), y: field_y(instr) },
        0xA => Op::Rshift { x: field_x(instr), y: field_y(instr) },
        0xB => match instr & 0b11 {
            0b00 => Op::Not { x: field_x(instr) },
            0b01 => Op::Jmp { x: field_x(instr) },
            0b10 => Op::PcC { x: field_x(instr) },
            _ => Op::PcZ { x: field_x(instr) },
        },
        0xC => Op::And { x: field_x(instr), y: field_y(instr) },
        0xD => Op::Or { x: field_x(instr), y: field_y(instr) },
        0xE => Op::Cmp { x: field_x(instr), y: field_y(instr) },
        0xF => Op::Ram { x: field_x(instr), y: field_y(instr) },
        _ => Op::Halt,
    }
}

/// Instruction size in bytes, needed by the executor to advance PC and by
/// the assembler's preprocess pass to size label addresses (§4.6).
pub fn size(op: Op) -> u8 {
    match op {
        Op::Ldi { .. } => 2,
        _ => 1,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ram_a_b_decodes_from_f1() {
        assert_eq!(decode(0xF1), Op::Ram { x: 0, y: 1 });
    }

    #[test]
    fn unmapped_bytes_decode_as_halt() {
        assert_eq!(decode(0x20), Op::Halt);
        assert_eq!(decode(0x49), Op::Halt);
    }

    #[test]
    fn ldi_is_two_bytes_everything_else_is_one() {
        assert_eq!(size(decode(0x6C)), 2);
        assert_eq!(size(decode(0x01)), 1);
        assert_eq!(size(decode(0xB1)), 1);
    }

    #[test]
    fn round_trip_every_mnemonic() {
        use crate::mnemonic::{encode, lookup, operand_count, MNEMONICS};

        for mnemonic in MNEMONICS {
            let count = operand_count(mnemonic.shape);
            // Exercise every register combination the shape allows.
            let combos: Vec<Vec<u8>> = match count {
                0 => vec![vec![]],
                1 => (0..4u8).map(|x| vec![x]).collect(),
                2 => (0..4u8)
                    .flat_map(|x| (0..4u8).map(move |y| vec![x, y]))
                    .collect(),
                _ => unreachable!(),
            };

            for operands in combos {
                let bytes = encode(mnemonic, &operands);
                let op = decode(bytes[0]);
                match (mnemonic.name, op) {
                    ("NOP", Op::Nop) | ("HALT", Op::Halt) => {}
                    ("SET", Op::Set { x, y }) => assert_eq!((x, y), (operands[0], operands[1])),
                    ("PCL", Op::PcL { x }) => assert_eq!(x, operands[0]),
                    ("PCO", Op::PcO { x }) => assert_eq!(x, operands[0]),
                    ("PCS", Op::PcS { x }) => assert_eq!(x, operands[0]),
                    ("LDI", Op::Ldi { x }) => assert_eq!(x, operands[0]),
                    ("LD", Op::Ld { x, y }) => assert_eq!((x, y), (operands[0], operands[1])),
                    ("ADD", Op::Add { x, y }) => assert_eq!((x, y), (operands[0], operands[1])),
                    ("SUB", Op::Sub { x, y }) => assert_eq!((x, y), (operands[0], operands[1])),
                    ("RSHIFT", Op::Rshift { x, y }) => assert_eq!((x, y), (operands[0], operands[1])),
                    ("NOT", Op::Not { x }) => assert_eq!(x, operands[0]),
                    ("JMP", Op::Jmp { x }) => assert_eq!(x, operands[0]),
                    ("PCC", Op::PcC { x }) => assert_eq!(x, operands[0]),
                    ("PCZ", Op::PcZ { x }) => assert_eq!(x, operands[0]),
                    ("AND", Op::And { x, y }) => assert_eq!((x, y), (operands[0], operands[1])),
                    ("OR", Op::Or { x, y }) => assert_eq!((x, y), (operands[0], operands[1])),
                    ("CMP", Op::Cmp { x, y }) => assert_eq!((x, y), (operands[0], operands[1])),
                    ("RAM", Op::Ram { x, y }) => assert_eq!((x, y), (operands[0], operands[1])),
                    (name, op) => panic!("mismatched decode for {}: {:?}", name, op),
                }
            }
        }
    }
}
