//! Logic family: `AND`/`ORA`/`EOR`/`BIT`, plus the illegal RMW+logic
//! combos `SLO`, `RLA`, `SRE` built on the shared shift/rotate primitives.

use crate::bus::Bus;
use crate::cpu::OpResult;
use crate::cpu::dispatch::rmw;
use crate::cpu::state::{Cpu, NEGATIVE, OVERFLOW, ZERO};

pub(crate) fn and(cpu: &mut Cpu, _bus: &mut Bus) -> OpResult {
    cpu.a &= cpu.data_bus;
    cpu.update_zn(cpu.a);
    Ok(true)
}

pub(crate) fn ora(cpu: &mut Cpu, _bus: &mut Bus) -> OpResult {
    cpu.a |= cpu.data_bus;
    cpu.update_zn(cpu.a);
    Ok(true)
}

pub(crate) fn eor(cpu: &mut Cpu, _bus: &mut Bus) -> OpResult {
    cpu.a ^= cpu.data_bus;
    cpu.update_zn(cpu.a);
    Ok(true)
}

pub(crate) fn bit(cpu: &mut Cpu, _bus: &mut Bus) -> OpResult {
    let value = cpu.data_bus;
    cpu.assign_flag(ZERO, (cpu.a & value) == 0);
    cpu.assign_flag(NEGATIVE, value & 0x80 != 0);
    cpu.assign_flag(OVERFLOW, value & 0x40 != 0);
    Ok(false)
}

/// Illegal: `ASL` memory, then `ORA` the shifted value into `A`.
pub(crate) fn slo(cpu: &mut Cpu, bus: &mut Bus) -> OpResult {
    let shifted = rmw::asl(cpu, bus)?;
    cpu.a |= shifted;
    cpu.update_zn(cpu.a);
    Ok(false)
}

/// Illegal: `ROL` memory, then `AND` the rotated value into `A`.
pub(crate) fn rla(cpu: &mut Cpu, bus: &mut Bus) -> OpResult {
    let rotated = rmw::rol(cpu, bus)?;
    cpu.a &= rotated;
    cpu.update_zn(cpu.a);
    Ok(false)
}

/// Illegal: `LSR` memory, then `EOR` the shifted value into `A`.
pub(crate) fn sre(cpu: &mut Cpu, bus: &mut Bus) -> OpResult {
    let shifted = rmw::lsr(cpu, bus)?;
    cpu.a ^= shifted;
    cpu.update_zn(cpu.a);
    Ok(false)
}
