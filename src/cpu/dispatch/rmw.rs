//! Read-modify-write primitives: `ASL`/`LSR`/`ROL`/`ROR`/`INC`/`DEC`.
//!
//! Each primitive reads `cpu.data_bus` (already fetched by the addressing
//! mode), computes the new value and flags, and writes the result back to
//! its target. The target is the accumulator when the current instruction's
//! addressing mode is `Acc`, or the memory cell at `address_bus` otherwise
//! — this is the "target established by the addressing mode" restructuring
//! the design notes call for, rather than every handler re-checking the
//! opcode byte.
//!
//! These primitives return the computed value so the illegal combined
//! opcodes (`SLO`, `RLA`, `SRE`, `RRA`, `DCP`, `ISC`) can fold it into a
//! following `ORA`/`AND`/`EOR`/`ADC`/`CMP`/`SBC` without re-reading memory.

use crate::cpu::OpResult;
use crate::cpu::addressing::AddrMode;
use crate::cpu::state::{CARRY, Cpu};
use crate::error::EmulatorError;
use crate::bus::Bus;

#[inline]
fn write_back(cpu: &mut Cpu, bus: &mut Bus, result: u8) -> Result<(), EmulatorError> {
    if cpu.current_mode == AddrMode::Acc {
        cpu.a = result;
    } else {
        bus.write(cpu.address_bus, result)?;
    }
    cpu.data_bus = result;
    Ok(())
}

pub(crate) fn asl(cpu: &mut Cpu, bus: &mut Bus) -> Result<u8, EmulatorError> {
    let value = cpu.data_bus;
    let result = value << 1;
    cpu.assign_flag(CARRY, value & 0x80 != 0);
    cpu.update_zn(result);
    write_back(cpu, bus, result)?;
    Ok(result)
}

pub(crate) fn lsr(cpu: &mut Cpu, bus: &mut Bus) -> Result<u8, EmulatorError> {
    let value = cpu.data_bus;
    let result = value >> 1;
    cpu.assign_flag(CARRY, value & 0x01 != 0);
    cpu.update_zn(result);
    write_back(cpu, bus, result)?;
    Ok(result)
}

pub(crate) fn rol(cpu: &mut Cpu, bus: &mut Bus) -> Result<u8, EmulatorError> {
    let value = cpu.data_bus;
    let carry_in = cpu.is_flag_set(CARRY) as u8;
    let result = (value << 1) | carry_in;
    cpu.assign_flag(CARRY, value & 0x80 != 0);
    cpu.update_zn(result);
    write_back(cpu, bus, result)?;
    Ok(result)
}

pub(crate) fn ror(cpu: &mut Cpu, bus: &mut Bus) -> Result<u8, EmulatorError> {
    let value = cpu.data_bus;
    let carry_in = cpu.is_flag_set(CARRY) as u8;
    let result = (value >> 1) | (carry_in << 7);
    cpu.assign_flag(CARRY, value & 0x01 != 0);
    cpu.update_zn(result);
    write_back(cpu, bus, result)?;
    Ok(result)
}

pub(crate) fn inc(cpu: &mut Cpu, bus: &mut Bus) -> Result<u8, EmulatorError> {
    let result = cpu.data_bus.wrapping_add(1);
    cpu.update_zn(result);
    write_back(cpu, bus, result)?;
    Ok(result)
}

pub(crate) fn dec(cpu: &mut Cpu, bus: &mut Bus) -> Result<u8, EmulatorError> {
    let result = cpu.data_bus.wrapping_sub(1);
    cpu.update_zn(result);
    write_back(cpu, bus, result)?;
    Ok(result)
}

// Table-facing wrappers: the documented opcodes never accept the page
// penalty (the indexed memory forms already carry their worst-case cycle
// count in the descriptor table).
pub(crate) fn op_asl(cpu: &mut Cpu, bus: &mut Bus) -> OpResult {
    asl(cpu, bus)?;
    Ok(false)
}
pub(crate) fn op_lsr(cpu: &mut Cpu, bus: &mut Bus) -> OpResult {
    lsr(cpu, bus)?;
    Ok(false)
}
pub(crate) fn op_rol(cpu: &mut Cpu, bus: &mut Bus) -> OpResult {
    rol(cpu, bus)?;
    Ok(false)
}
pub(crate) fn op_ror(cpu: &mut Cpu, bus: &mut Bus) -> OpResult {
    ror(cpu, bus)?;
    Ok(false)
}
pub(crate) fn op_inc(cpu: &mut Cpu, bus: &mut Bus) -> OpResult {
    inc(cpu, bus)?;
    Ok(false)
}
pub(crate) fn op_dec(cpu: &mut Cpu, bus: &mut Bus) -> OpResult {
    dec(cpu, bus)?;
    Ok(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cpu::state::NEGATIVE;

    fn setup_acc(a: u8) -> (Cpu, Bus) {
        let mut cpu = Cpu::new();
        cpu.a = a;
        cpu.data_bus = a;
        cpu.current_mode = AddrMode::Acc;
        (cpu, Bus::new())
    }

    #[test]
    fn asl_shifts_and_sets_carry_from_bit7() {
        let (mut cpu, mut bus) = setup_acc(0x81);
        let result = asl(&mut cpu, &mut bus).unwrap();
        assert_eq!(result, 0x02);
        assert_eq!(cpu.a, 0x02);
        assert!(cpu.is_flag_set(CARRY));
    }

    #[test]
    fn ror_rotates_carry_into_bit7() {
        let (mut cpu, mut bus) = setup_acc(0x01);
        cpu.assign_flag(CARRY, true);
        let result = ror(&mut cpu, &mut bus).unwrap();
        assert_eq!(result, 0x80);
        assert!(cpu.is_flag_set(NEGATIVE));
        assert!(cpu.is_flag_set(CARRY));
    }

    #[test]
    fn memory_target_writes_back_to_address_bus() {
        let mut cpu = Cpu::new();
        let mut bus = Bus::new();
        cpu.current_mode = AddrMode::Zpg;
        cpu.address_bus = 0x0010;
        cpu.data_bus = 0x7F;
        inc(&mut cpu, &mut bus).unwrap();
        assert_eq!(bus.read(0x0010), 0x80);
    }
}
