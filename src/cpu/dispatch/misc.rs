//! Everything that doesn't belong to a bigger family: register transfers,
//! stack push/pull, flag set/clear, register increment/decrement, `NOP`
//! variants, `JAM`, and the "unstable" illegal opcodes (`ANE`, `LXA`,
//! `SHA`, `SHX`, `SHY`, `TAS`, `LAS`).

use crate::bus::Bus;
use crate::cpu::OpResult;
use crate::cpu::state::{BREAK, CARRY, Cpu, DECIMAL, IRQ_DISABLE, OVERFLOW, UNUSED};

// ---------------------------------------------------------------------
// Transfers
// ---------------------------------------------------------------------

pub(crate) fn tax(cpu: &mut Cpu, _bus: &mut Bus) -> OpResult {
    cpu.x = cpu.a;
    cpu.update_zn(cpu.x);
    Ok(false)
}
pub(crate) fn tay(cpu: &mut Cpu, _bus: &mut Bus) -> OpResult {
    cpu.y = cpu.a;
    cpu.update_zn(cpu.y);
    Ok(false)
}
pub(crate) fn txa(cpu: &mut Cpu, _bus: &mut Bus) -> OpResult {
    cpu.a = cpu.x;
    cpu.update_zn(cpu.a);
    Ok(false)
}
pub(crate) fn tya(cpu: &mut Cpu, _bus: &mut Bus) -> OpResult {
    cpu.a = cpu.y;
    cpu.update_zn(cpu.a);
    Ok(false)
}
/// `X ← sp`, with flags. (Not `X ← p` — see the project's redesign notes.)
pub(crate) fn tsx(cpu: &mut Cpu, _bus: &mut Bus) -> OpResult {
    cpu.x = cpu.sp;
    cpu.update_zn(cpu.x);
    Ok(false)
}
/// `sp ← X`, no flag changes.
pub(crate) fn txs(cpu: &mut Cpu, _bus: &mut Bus) -> OpResult {
    cpu.sp = cpu.x;
    Ok(false)
}

// ---------------------------------------------------------------------
// Stack ops
// ---------------------------------------------------------------------

pub(crate) fn pha(cpu: &mut Cpu, bus: &mut Bus) -> OpResult {
    let a = cpu.a;
    cpu.push_u8(bus, a);
    Ok(false)
}

pub(crate) fn php(cpu: &mut Cpu, bus: &mut Bus) -> OpResult {
    let status = cpu.compose_status_for_push(true);
    cpu.push_u8(bus, status);
    cpu.assign_flag(BREAK, false);
    cpu.assign_flag(UNUSED, false);
    Ok(false)
}

pub(crate) fn pla(cpu: &mut Cpu, bus: &mut Bus) -> OpResult {
    cpu.a = cpu.pop_u8(bus);
    cpu.update_zn(cpu.a);
    Ok(false)
}

pub(crate) fn plp(cpu: &mut Cpu, bus: &mut Bus) -> OpResult {
    let value = cpu.pop_u8(bus);
    cpu.p = value | crate::cpu::state::UNUSED;
    Ok(false)
}

// ---------------------------------------------------------------------
// Flag ops
// ---------------------------------------------------------------------

pub(crate) fn clc(cpu: &mut Cpu, _bus: &mut Bus) -> OpResult {
    cpu.assign_flag(CARRY, false);
    Ok(false)
}
pub(crate) fn sec(cpu: &mut Cpu, _bus: &mut Bus) -> OpResult {
    cpu.assign_flag(CARRY, true);
    Ok(false)
}
pub(crate) fn cld(cpu: &mut Cpu, _bus: &mut Bus) -> OpResult {
    cpu.assign_flag(DECIMAL, false);
    Ok(false)
}
pub(crate) fn sed(cpu: &mut Cpu, _bus: &mut Bus) -> OpResult {
    cpu.assign_flag(DECIMAL, true);
    Ok(false)
}
pub(crate) fn cli(cpu: &mut Cpu, _bus: &mut Bus) -> OpResult {
    cpu.assign_flag(IRQ_DISABLE, false);
    Ok(false)
}
pub(crate) fn sei(cpu: &mut Cpu, _bus: &mut Bus) -> OpResult {
    cpu.assign_flag(IRQ_DISABLE, true);
    Ok(false)
}
pub(crate) fn clv(cpu: &mut Cpu, _bus: &mut Bus) -> OpResult {
    cpu.assign_flag(OVERFLOW, false);
    Ok(false)
}

// ---------------------------------------------------------------------
// Register increment/decrement
// ---------------------------------------------------------------------

pub(crate) fn inx(cpu: &mut Cpu, _bus: &mut Bus) -> OpResult {
    cpu.x = cpu.x.wrapping_add(1);
    cpu.update_zn(cpu.x);
    Ok(false)
}
pub(crate) fn dex(cpu: &mut Cpu, _bus: &mut Bus) -> OpResult {
    cpu.x = cpu.x.wrapping_sub(1);
    cpu.update_zn(cpu.x);
    Ok(false)
}
/// Updates flags from `Y`. (Not `X` — see the project's redesign notes.)
pub(crate) fn iny(cpu: &mut Cpu, _bus: &mut Bus) -> OpResult {
    cpu.y = cpu.y.wrapping_add(1);
    cpu.update_zn(cpu.y);
    Ok(false)
}
pub(crate) fn dey(cpu: &mut Cpu, _bus: &mut Bus) -> OpResult {
    cpu.y = cpu.y.wrapping_sub(1);
    cpu.update_zn(cpu.y);
    Ok(false)
}

// ---------------------------------------------------------------------
// NOP variants and JAM
// ---------------------------------------------------------------------

/// Documented `$EA` and every undocumented NOP whose addressing mode
/// already consumed the right operand bytes and cycle count; none of
/// these accept the page penalty.
pub(crate) fn nop(_cpu: &mut Cpu, _bus: &mut Bus) -> OpResult {
    Ok(false)
}

/// The six absolute,X-addressed undocumented NOPs (`$1C $3C $5C $7C $DC
/// $FC`): identical to `nop`, but these do accept the page penalty.
pub(crate) fn nop_abx(_cpu: &mut Cpu, _bus: &mut Bus) -> OpResult {
    Ok(true)
}

/// `JAM`/`KIL`: halts the CPU. No further progress until an external reset.
pub(crate) fn jam(cpu: &mut Cpu, _bus: &mut Bus) -> OpResult {
    cpu.halted = true;
    Ok(false)
}

// ---------------------------------------------------------------------
// Unstable illegal opcodes (documented-but-unreliable formulas)
// ---------------------------------------------------------------------

/// `$8B` `ANE`/`XAA`: `A ← (A | $FF) & X & operand`.
pub(crate) fn ane(cpu: &mut Cpu, _bus: &mut Bus) -> OpResult {
    let result = (cpu.a | 0xFF) & cpu.x & cpu.data_bus;
    cpu.a = result;
    cpu.update_zn(result);
    Ok(false)
}

/// `$AB` `LXA`: `A, X ← (A | $FF) & operand`.
pub(crate) fn lxa(cpu: &mut Cpu, _bus: &mut Bus) -> OpResult {
    let result = (cpu.a | 0xFF) & cpu.data_bus;
    cpu.a = result;
    cpu.x = result;
    cpu.update_zn(result);
    Ok(false)
}

fn high_byte_plus_one(address_bus: u16) -> u8 {
    ((address_bus >> 8) as u8).wrapping_add(1)
}

/// `$9F`/`$93` `SHA`: store `A & X & (high byte of the address + 1)`.
pub(crate) fn sha(cpu: &mut Cpu, bus: &mut Bus) -> OpResult {
    let value = cpu.a & cpu.x & high_byte_plus_one(cpu.address_bus);
    bus.write(cpu.address_bus, value)?;
    Ok(false)
}

/// `$9E` `SHX`: store `X & (high byte of the address + 1)`.
pub(crate) fn shx(cpu: &mut Cpu, bus: &mut Bus) -> OpResult {
    let value = cpu.x & high_byte_plus_one(cpu.address_bus);
    bus.write(cpu.address_bus, value)?;
    Ok(false)
}

/// `$9C` `SHY`: store `Y & (high byte of the address + 1)`.
pub(crate) fn shy(cpu: &mut Cpu, bus: &mut Bus) -> OpResult {
    let value = cpu.y & high_byte_plus_one(cpu.address_bus);
    bus.write(cpu.address_bus, value)?;
    Ok(false)
}

/// `$9B` `TAS`: `sp ← A & X`, then store `sp & (high byte of the address +
/// 1)`.
pub(crate) fn tas(cpu: &mut Cpu, bus: &mut Bus) -> OpResult {
    cpu.sp = cpu.a & cpu.x;
    let value = cpu.sp & high_byte_plus_one(cpu.address_bus);
    bus.write(cpu.address_bus, value)?;
    Ok(false)
}

/// `$BB` `LAS`: `A, X, sp ← memory & sp`.
pub(crate) fn las(cpu: &mut Cpu, _bus: &mut Bus) -> OpResult {
    let result = cpu.data_bus & cpu.sp;
    cpu.a = result;
    cpu.x = result;
    cpu.sp = result;
    cpu.update_zn(result);
    Ok(true)
}
