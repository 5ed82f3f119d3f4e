//! The 256-entry opcode descriptor table: the spine of the interpreter.
//!
//! Each byte maps to a `{mnemonic, addressing mode, opcode handler, base
//! cycle count}` tuple, built once (lazily, on first use) and indexed by
//! opcode byte thereafter — mirroring the reference `cpu_code()` function
//! that assigns `c->code[0xNN] = (struct code_t){...}` one opcode at a
//! time, just expressed as a Rust array build instead of 256 struct-field
//! assignments through a C pointer.
//!
//! Any byte this module doesn't explicitly assign keeps the `UNKNOWN`
//! default: implied addressing, a no-op handler, 2 base cycles. The
//! dispatcher in `cpu::mod` logs that default once per distinct opcode
//! byte the first time it's hit.

use std::sync::OnceLock;

use crate::bus::Bus;
use crate::cpu::OpResult;
use crate::cpu::addressing::AddrMode::{self, *};
use crate::cpu::dispatch::{arithmetic, branches, compare, control_flow, load_store, logical, misc, rmw};
use crate::cpu::state::Cpu;

pub(crate) type OpHandler = fn(&mut Cpu, &mut Bus) -> OpResult;

#[derive(Clone, Copy)]
pub(crate) struct OpEntry {
    pub mnemonic: &'static str,
    pub mode: AddrMode,
    pub handler: OpHandler,
    pub cycles: u8,
}

impl OpEntry {
    fn new(mnemonic: &'static str, mode: AddrMode, handler: OpHandler, cycles: u8) -> Self {
        Self {
            mnemonic,
            mode,
            handler,
            cycles,
        }
    }
}

fn unknown(_cpu: &mut Cpu, _bus: &mut Bus) -> OpResult {
    Ok(false)
}

const UNKNOWN: OpEntry = OpEntry {
    mnemonic: "???",
    mode: AddrMode::Imp,
    handler: unknown,
    cycles: 2,
};

static TABLE: OnceLock<[OpEntry; 256]> = OnceLock::new();

/// Look up the descriptor for `opcode`, building the table on first use.
pub(crate) fn lookup(opcode: u8) -> OpEntry {
    TABLE.get_or_init(build_table)[opcode as usize]
}

/// `true` iff `opcode` has no explicit entry in the table (i.e. resolves
/// to the `UNKNOWN` default). Used by the dispatcher to decide whether to
/// log the once-per-byte "unknown opcode" warning.
pub(crate) fn is_unknown(opcode: u8) -> bool {
    lookup(opcode).mnemonic == "???"
}

fn build_table() -> [OpEntry; 256] {
    let mut t = [UNKNOWN; 256];

    macro_rules! op {
        ($byte:literal, $mnem:literal, $mode:expr, $handler:expr, $cycles:literal) => {
            t[$byte] = OpEntry::new($mnem, $mode, $handler, $cycles);
        };
    }

    // ---- 0x00 - 0x0F ----
    op!(0x00, "BRK", Imp, control_flow::brk, 7);
    op!(0x01, "ORA", Izx, logical::ora, 6);
    op!(0x02, "JAM", Imp, misc::jam, 0);
    op!(0x03, "SLO", Izx, logical::slo, 8);
    op!(0x04, "NOP", Zpg, misc::nop, 3);
    op!(0x05, "ORA", Zpg, logical::ora, 3);
    op!(0x06, "ASL", Zpg, rmw::op_asl, 5);
    op!(0x07, "SLO", Zpg, logical::slo, 5);
    op!(0x08, "PHP", Imp, misc::php, 3);
    op!(0x09, "ORA", Imm, logical::ora, 2);
    op!(0x0A, "ASL", Acc, rmw::op_asl, 2);
    op!(0x0B, "ANC", Imm, arithmetic::anc, 2);
    op!(0x0C, "NOP", Abs, misc::nop, 4);
    op!(0x0D, "ORA", Abs, logical::ora, 4);
    op!(0x0E, "ASL", Abs, rmw::op_asl, 6);
    op!(0x0F, "SLO", Abs, logical::slo, 6);

    // ---- 0x10 - 0x1F ----
    op!(0x10, "BPL", Rel, branches::bpl, 2);
    op!(0x11, "ORA", Izy, logical::ora, 5);
    op!(0x12, "JAM", Imp, misc::jam, 0);
    op!(0x13, "SLO", Izy, logical::slo, 8);
    op!(0x14, "NOP", Zpx, misc::nop, 4);
    op!(0x15, "ORA", Zpx, logical::ora, 4);
    op!(0x16, "ASL", Zpx, rmw::op_asl, 6);
    op!(0x17, "SLO", Zpx, logical::slo, 6);
    op!(0x18, "CLC", Imp, misc::clc, 2);
    op!(0x19, "ORA", Aby, logical::ora, 4);
    op!(0x1A, "NOP", Imp, misc::nop, 2);
    op!(0x1B, "SLO", Aby, logical::slo, 7);
    op!(0x1C, "NOP", Abx, misc::nop_abx, 4);
    op!(0x1D, "ORA", Abx, logical::ora, 4);
    op!(0x1E, "ASL", Abx, rmw::op_asl, 7);
    op!(0x1F, "SLO", Abx, logical::slo, 7);

    // ---- 0x20 - 0x2F ----
    op!(0x20, "JSR", Abs, control_flow::jsr, 6);
    op!(0x21, "AND", Izx, logical::and, 6);
    op!(0x22, "JAM", Imp, misc::jam, 0);
    op!(0x23, "RLA", Izx, logical::rla, 8);
    op!(0x24, "BIT", Zpg, logical::bit, 3);
    op!(0x25, "AND", Zpg, logical::and, 3);
    op!(0x26, "ROL", Zpg, rmw::op_rol, 5);
    op!(0x27, "RLA", Zpg, logical::rla, 5);
    op!(0x28, "PLP", Imp, misc::plp, 4);
    op!(0x29, "AND", Imm, logical::and, 2);
    op!(0x2A, "ROL", Acc, rmw::op_rol, 2);
    op!(0x2B, "ANC", Imm, arithmetic::anc, 2);
    op!(0x2C, "BIT", Abs, logical::bit, 4);
    op!(0x2D, "AND", Abs, logical::and, 4);
    op!(0x2E, "ROL", Abs, rmw::op_rol, 6);
    op!(0x2F, "RLA", Abs, logical::rla, 6);

    // ---- 0x30 - 0x3F ----
    op!(0x30, "BMI", Rel, branches::bmi, 2);
    op!(0x31, "AND", Izy, logical::and, 5);
    op!(0x32, "JAM", Imp, misc::jam, 0);
    op!(0x33, "RLA", Izy, logical::rla, 8);
    op!(0x34, "NOP", Zpx, misc::nop, 4);
    op!(0x35, "AND", Zpx, logical::and, 4);
    op!(0x36, "ROL", Zpx, rmw::op_rol, 6);
    op!(0x37, "RLA", Zpx, logical::rla, 6);
    op!(0x38, "SEC", Imp, misc::sec, 2);
    op!(0x39, "AND", Aby, logical::and, 4);
    op!(0x3A, "NOP", Imp, misc::nop, 2);
    op!(0x3B, "RLA", Aby, logical::rla, 7);
    op!(0x3C, "NOP", Abx, misc::nop_abx, 4);
    op!(0x3D, "AND", Abx, logical::and, 4);
    op!(0x3E, "ROL", Abx, rmw::op_rol, 7);
    op!(0x3F, "RLA", Abx, logical::rla, 7);

    // ---- 0x40 - 0x4F ----
    op!(0x40, "RTI", Imp, control_flow::rti, 6);
    op!(0x41, "EOR", Izx, logical::eor, 6);
    op!(0x42, "JAM", Imp, misc::jam, 0);
    op!(0x43, "SRE", Izx, logical::sre, 8);
    op!(0x44, "NOP", Zpg, misc::nop, 3);
    op!(0x45, "EOR", Zpg, logical::eor, 3);
    op!(0x46, "LSR", Zpg, rmw::op_lsr, 5);
    op!(0x47, "SRE", Zpg, logical::sre, 5);
    op!(0x48, "PHA", Imp, misc::pha, 3);
    op!(0x49, "EOR", Imm, logical::eor, 2);
    op!(0x4A, "LSR", Acc, rmw::op_lsr, 2);
    op!(0x4B, "ALR", Imm, arithmetic::alr, 2);
    op!(0x4C, "JMP", Abs, control_flow::jmp, 3);
    op!(0x4D, "EOR", Abs, logical::eor, 4);
    op!(0x4E, "LSR", Abs, rmw::op_lsr, 6);
    op!(0x4F, "SRE", Abs, logical::sre, 6);

    // ---- 0x50 - 0x5F ----
    op!(0x50, "BVC", Rel, branches::bvc, 2);
    op!(0x51, "EOR", Izy, logical::eor, 5);
    op!(0x52, "JAM", Imp, misc::jam, 0);
    op!(0x53, "SRE", Izy, logical::sre, 8);
    op!(0x54, "NOP", Zpx, misc::nop, 4);
    op!(0x55, "EOR", Zpx, logical::eor, 4);
    op!(0x56, "LSR", Zpx, rmw::op_lsr, 6);
    op!(0x57, "SRE", Zpx, logical::sre, 6);
    op!(0x58, "CLI", Imp, misc::cli, 2);
    op!(0x59, "EOR", Aby, logical::eor, 4);
    op!(0x5A, "NOP", Imp, misc::nop, 2);
    op!(0x5B, "SRE", Aby, logical::sre, 7);
    op!(0x5C, "NOP", Abx, misc::nop_abx, 4);
    op!(0x5D, "EOR", Abx, logical::eor, 4);
    op!(0x5E, "LSR", Abx, rmw::op_lsr, 7);
    op!(0x5F, "SRE", Abx, logical::sre, 7);

    // ---- 0x60 - 0x6F ----
    op!(0x60, "RTS", Imp, control_flow::rts, 6);
    op!(0x61, "ADC", Izx, arithmetic::adc, 6);
    op!(0x62, "JAM", Imp, misc::jam, 0);
    op!(0x63, "RRA", Izx, arithmetic::rra, 8);
    op!(0x64, "NOP", Zpg, misc::nop, 3);
    op!(0x65, "ADC", Zpg, arithmetic::adc, 3);
    op!(0x66, "ROR", Zpg, rmw::op_ror, 5);
    op!(0x67, "RRA", Zpg, arithmetic::rra, 5);
    op!(0x68, "PLA", Imp, misc::pla, 4);
    op!(0x69, "ADC", Imm, arithmetic::adc, 2);
    op!(0x6A, "ROR", Acc, rmw::op_ror, 2);
    op!(0x6B, "ARR", Imm, arithmetic::arr, 2);
    op!(0x6C, "JMP", Ind, control_flow::jmp, 5);
    op!(0x6D, "ADC", Abs, arithmetic::adc, 4);
    op!(0x6E, "ROR", Abs, rmw::op_ror, 6);
    op!(0x6F, "RRA", Abs, arithmetic::rra, 6);

    // ---- 0x70 - 0x7F ----
    op!(0x70, "BVS", Rel, branches::bvs, 2);
    op!(0x71, "ADC", Izy, arithmetic::adc, 5);
    op!(0x72, "JAM", Imp, misc::jam, 0);
    op!(0x73, "RRA", Izy, arithmetic::rra, 8);
    op!(0x74, "NOP", Zpx, misc::nop, 4);
    op!(0x75, "ADC", Zpx, arithmetic::adc, 4);
    op!(0x76, "ROR", Zpx, rmw::op_ror, 6);
    op!(0x77, "RRA", Zpx, arithmetic::rra, 6);
    op!(0x78, "SEI", Imp, misc::sei, 2);
    op!(0x79, "ADC", Aby, arithmetic::adc, 4);
    op!(0x7A, "NOP", Imp, misc::nop, 2);
    op!(0x7B, "RRA", Aby, arithmetic::rra, 7);
    op!(0x7C, "NOP", Abx, misc::nop_abx, 4);
    op!(0x7D, "ADC", Abx, arithmetic::adc, 4);
    op!(0x7E, "ROR", Abx, rmw::op_ror, 7);
    op!(0x7F, "RRA", Abx, arithmetic::rra, 7);

    // ---- 0x80 - 0x8F ----
    op!(0x80, "NOP", Imm, misc::nop, 2);
    op!(0x81, "STA", Izx, load_store::sta, 6);
    op!(0x82, "NOP", Imm, misc::nop, 2);
    op!(0x83, "SAX", Izx, load_store::sax, 6);
    op!(0x84, "STY", Zpg, load_store::sty, 3);
    op!(0x85, "STA", Zpg, load_store::sta, 3);
    op!(0x86, "STX", Zpg, load_store::stx, 3);
    op!(0x87, "SAX", Zpg, load_store::sax, 3);
    op!(0x88, "DEY", Imp, misc::dey, 2);
    op!(0x89, "NOP", Imm, misc::nop, 2);
    op!(0x8A, "TXA", Imp, misc::txa, 2);
    op!(0x8B, "ANE", Imm, misc::ane, 2);
    op!(0x8C, "STY", Abs, load_store::sty, 4);
    op!(0x8D, "STA", Abs, load_store::sta, 4);
    op!(0x8E, "STX", Abs, load_store::stx, 4);
    op!(0x8F, "SAX", Abs, load_store::sax, 4);

    // ---- 0x90 - 0x9F ----
    op!(0x90, "BCC", Rel, branches::bcc, 2);
    op!(0x91, "STA", Izy, load_store::sta, 6);
    op!(0x92, "JAM", Imp, misc::jam, 0);
    op!(0x93, "SHA", Izy, misc::sha, 6);
    op!(0x94, "STY", Zpx, load_store::sty, 4);
    op!(0x95, "STA", Zpx, load_store::sta, 4);
    op!(0x96, "STX", Zpy, load_store::stx, 4);
    op!(0x97, "SAX", Zpy, load_store::sax, 4);
    op!(0x98, "TYA", Imp, misc::tya, 2);
    op!(0x99, "STA", Aby, load_store::sta, 5);
    op!(0x9A, "TXS", Imp, misc::txs, 2);
    op!(0x9B, "TAS", Aby, misc::tas, 5);
    op!(0x9C, "SHY", Abx, misc::shy, 5);
    op!(0x9D, "STA", Abx, load_store::sta, 5);
    op!(0x9E, "SHX", Aby, misc::shx, 5);
    op!(0x9F, "SHA", Aby, misc::sha, 5);

    // ---- 0xA0 - 0xAF ----
    op!(0xA0, "LDY", Imm, load_store::ldy, 2);
    op!(0xA1, "LDA", Izx, load_store::lda, 6);
    op!(0xA2, "LDX", Imm, load_store::ldx, 2);
    op!(0xA3, "LAX", Izx, load_store::lax, 6);
    op!(0xA4, "LDY", Zpg, load_store::ldy, 3);
    op!(0xA5, "LDA", Zpg, load_store::lda, 3);
    op!(0xA6, "LDX", Zpg, load_store::ldx, 3);
    op!(0xA7, "LAX", Zpg, load_store::lax, 3);
    op!(0xA8, "TAY", Imp, misc::tay, 2);
    op!(0xA9, "LDA", Imm, load_store::lda, 2);
    op!(0xAA, "TAX", Imp, misc::tax, 2);
    op!(0xAB, "LXA", Imm, misc::lxa, 2);
    op!(0xAC, "LDY", Abs, load_store::ldy, 4);
    op!(0xAD, "LDA", Abs, load_store::lda, 4);
    op!(0xAE, "LDX", Abs, load_store::ldx, 4);
    op!(0xAF, "LAX", Abs, load_store::lax, 4);

    // ---- 0xB0 - 0xBF ----
    op!(0xB0, "BCS", Rel, branches::bcs, 2);
    op!(0xB1, "LDA", Izy, load_store::lda, 5);
    op!(0xB2, "JAM", Imp, misc::jam, 0);
    op!(0xB3, "LAX", Izy, load_store::lax, 5);
    op!(0xB4, "LDY", Zpx, load_store::ldy, 4);
    op!(0xB5, "LDA", Zpx, load_store::lda, 4);
    op!(0xB6, "LDX", Zpy, load_store::ldx, 4);
    op!(0xB7, "LAX", Zpy, load_store::lax, 4);
    op!(0xB8, "CLV", Imp, misc::clv, 2);
    op!(0xB9, "LDA", Aby, load_store::lda, 4);
    op!(0xBA, "TSX", Imp, misc::tsx, 2);
    op!(0xBB, "LAS", Aby, misc::las, 4);
    op!(0xBC, "LDY", Abx, load_store::ldy, 4);
    op!(0xBD, "LDA", Abx, load_store::lda, 4);
    op!(0xBE, "LDX", Aby, load_store::ldx, 4);
    op!(0xBF, "LAX", Aby, load_store::lax, 4);

    // ---- 0xC0 - 0xCF ----
    op!(0xC0, "CPY", Imm, compare::cpy, 2);
    op!(0xC1, "CMP", Izx, compare::cmp, 6);
    op!(0xC2, "NOP", Imm, misc::nop, 2);
    op!(0xC3, "DCP", Izx, compare::dcp, 8);
    op!(0xC4, "CPY", Zpg, compare::cpy, 3);
    op!(0xC5, "CMP", Zpg, compare::cmp, 3);
    op!(0xC6, "DEC", Zpg, rmw::op_dec, 5);
    op!(0xC7, "DCP", Zpg, compare::dcp, 5);
    op!(0xC8, "INY", Imp, misc::iny, 2);
    op!(0xC9, "CMP", Imm, compare::cmp, 2);
    op!(0xCA, "DEX", Imp, misc::dex, 2);
    op!(0xCB, "SBX", Imm, arithmetic::sbx, 2);
    op!(0xCC, "CPY", Abs, compare::cpy, 4);
    op!(0xCD, "CMP", Abs, compare::cmp, 4);
    op!(0xCE, "DEC", Abs, rmw::op_dec, 6);
    op!(0xCF, "DCP", Abs, compare::dcp, 6);

    // ---- 0xD0 - 0xDF ----
    op!(0xD0, "BNE", Rel, branches::bne, 2);
    op!(0xD1, "CMP", Izy, compare::cmp, 5);
    op!(0xD2, "JAM", Imp, misc::jam, 0);
    op!(0xD3, "DCP", Izy, compare::dcp, 8);
    op!(0xD4, "NOP", Zpx, misc::nop, 4);
    op!(0xD5, "CMP", Zpx, compare::cmp, 4);
    op!(0xD6, "DEC", Zpx, rmw::op_dec, 6);
    op!(0xD7, "DCP", Zpx, compare::dcp, 6);
    op!(0xD8, "CLD", Imp, misc::cld, 2);
    op!(0xD9, "CMP", Aby, compare::cmp, 4);
    op!(0xDA, "NOP", Imp, misc::nop, 2);
    op!(0xDB, "DCP", Aby, compare::dcp, 7);
    op!(0xDC, "NOP", Abx, misc::nop_abx, 4);
    op!(0xDD, "CMP", Abx, compare::cmp, 4);
    op!(0xDE, "DEC", Abx, rmw::op_dec, 7);
    op!(0xDF, "DCP", Abx, compare::dcp, 7);

    // ---- 0xE0 - 0xEF ----
    op!(0xE0, "CPX", Imm, compare::cpx, 2);
    op!(0xE1, "SBC", Izx, arithmetic::sbc, 6);
    op!(0xE2, "NOP", Imm, misc::nop, 2);
    op!(0xE3, "ISC", Izx, arithmetic::isc, 8);
    op!(0xE4, "CPX", Zpg, compare::cpx, 3);
    op!(0xE5, "SBC", Zpg, arithmetic::sbc, 3);
    op!(0xE6, "INC", Zpg, rmw::op_inc, 5);
    op!(0xE7, "ISC", Zpg, arithmetic::isc, 5);
    op!(0xE8, "INX", Imp, misc::inx, 2);
    op!(0xE9, "SBC", Imm, arithmetic::sbc, 2);
    op!(0xEA, "NOP", Imp, misc::nop, 2);
    op!(0xEB, "USBC", Imm, arithmetic::usbc, 2);
    op!(0xEC, "CPX", Abs, compare::cpx, 4);
    op!(0xED, "SBC", Abs, arithmetic::sbc, 4);
    op!(0xEE, "INC", Abs, rmw::op_inc, 6);
    op!(0xEF, "ISC", Abs, arithmetic::isc, 6);

    // ---- 0xF0 - 0xFF ----
    op!(0xF0, "BEQ", Rel, branches::beq, 2);
    op!(0xF1, "SBC", Izy, arithmetic::sbc, 5);
    op!(0xF2, "JAM", Imp, misc::jam, 0);
    op!(0xF3, "ISC", Izy, arithmetic::isc, 8);
    op!(0xF4, "NOP", Zpx, misc::nop, 4);
    op!(0xF5, "SBC", Zpx, arithmetic::sbc, 4);
    op!(0xF6, "INC", Zpx, rmw::op_inc, 6);
    op!(0xF7, "ISC", Zpx, arithmetic::isc, 6);
    op!(0xF8, "SED", Imp, misc::sed, 2);
    op!(0xF9, "SBC", Aby, arithmetic::sbc, 4);
    op!(0xFA, "NOP", Imp, misc::nop, 2);
    op!(0xFB, "ISC", Aby, arithmetic::isc, 7);
    op!(0xFC, "NOP", Abx, misc::nop_abx, 4);
    op!(0xFD, "SBC", Abx, arithmetic::sbc, 4);
    op!(0xFE, "INC", Abx, rmw::op_inc, 7);
    op!(0xFF, "ISC", Abx, arithmetic::isc, 7);

    t
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lda_immediate_decodes_to_the_right_descriptor() {
        let entry = lookup(0xA9);
        assert_eq!(entry.mnemonic, "LDA");
        assert_eq!(entry.mode, AddrMode::Imm);
        assert_eq!(entry.cycles, 2);
    }

    #[test]
    fn jam_opcodes_are_all_populated() {
        for byte in [
            0x02u8, 0x12, 0x22, 0x32, 0x42, 0x52, 0x62, 0x72, 0x92, 0xB2, 0xD2, 0xF2,
        ] {
            assert_eq!(lookup(byte).mnemonic, "JAM");
        }
    }

    #[test]
    fn every_byte_resolves_to_some_descriptor() {
        for byte in 0u16..=255 {
            let _ = lookup(byte as u8);
        }
    }
}
