//! Arithmetic family: `ADC`/`SBC`, plus the illegal opcodes built on top of
//! them (`RRA`, `ISC`, `ARR`, `ALR`, `ANC`, `SBX`) and the `USBC` alias.

use crate::bus::Bus;
use crate::cpu::OpResult;
use crate::cpu::dispatch::rmw;
use crate::cpu::state::{CARRY, Cpu, NEGATIVE, OVERFLOW};

/// Shared addition core: `ADC` adds the operand directly, `SBC` adds its
/// one's complement, so both flow through here.
fn add_with_carry(cpu: &mut Cpu, operand: u8) {
    let carry_in = cpu.is_flag_set(CARRY) as u16;
    let a = cpu.a;
    let sum = a as u16 + operand as u16 + carry_in;
    let result = sum as u8;
    cpu.assign_flag(CARRY, sum > 0xFF);
    let overflow = (!(a ^ operand) & (a ^ result)) & 0x80 != 0;
    cpu.assign_flag(OVERFLOW, overflow);
    cpu.a = result;
    cpu.update_zn(result);
}

pub(crate) fn adc(cpu: &mut Cpu, _bus: &mut Bus) -> OpResult {
    add_with_carry(cpu, cpu.data_bus);
    Ok(true)
}

pub(crate) fn sbc(cpu: &mut Cpu, _bus: &mut Bus) -> OpResult {
    add_with_carry(cpu, !cpu.data_bus);
    Ok(true)
}

/// `$EB`: undocumented, behaves exactly like `SBC #imm`.
pub(crate) fn usbc(cpu: &mut Cpu, bus: &mut Bus) -> OpResult {
    sbc(cpu, bus)
}

/// Illegal: `ROR` memory, then `ADC` the rotated value into `A`.
pub(crate) fn rra(cpu: &mut Cpu, bus: &mut Bus) -> OpResult {
    let rotated = rmw::ror(cpu, bus)?;
    add_with_carry(cpu, rotated);
    Ok(false)
}

/// Illegal: `INC` memory, then `SBC` the incremented value from `A`.
pub(crate) fn isc(cpu: &mut Cpu, bus: &mut Bus) -> OpResult {
    let incremented = rmw::inc(cpu, bus)?;
    add_with_carry(cpu, !incremented);
    Ok(false)
}

/// Illegal `$0B`/`$2B`: `AND #imm`, then `C` takes the result's bit 7.
pub(crate) fn anc(cpu: &mut Cpu, _bus: &mut Bus) -> OpResult {
    let result = cpu.a & cpu.data_bus;
    cpu.a = result;
    cpu.update_zn(result);
    cpu.assign_flag(CARRY, result & 0x80 != 0);
    Ok(false)
}

/// Illegal `$4B`: `AND #imm`, then `LSR A`.
pub(crate) fn alr(cpu: &mut Cpu, _bus: &mut Bus) -> OpResult {
    let anded = cpu.a & cpu.data_bus;
    let carry_out = anded & 0x01 != 0;
    let result = anded >> 1;
    cpu.a = result;
    cpu.update_zn(result);
    cpu.assign_flag(CARRY, carry_out);
    Ok(false)
}

/// Illegal `$6B`: `AND #imm`, then `ROR A`; `C` from bit 6, `V` from bit 6
/// XOR bit 5 of the rotated result.
pub(crate) fn arr(cpu: &mut Cpu, _bus: &mut Bus) -> OpResult {
    let anded = cpu.a & cpu.data_bus;
    let carry_in = cpu.is_flag_set(CARRY) as u8;
    let rotated = (anded >> 1) | (carry_in << 7);
    cpu.a = rotated;
    cpu.update_zn(rotated);
    let bit6 = (rotated >> 6) & 1;
    let bit5 = (rotated >> 5) & 1;
    cpu.assign_flag(CARRY, bit6 == 1);
    cpu.assign_flag(OVERFLOW, (bit6 ^ bit5) == 1);
    Ok(false)
}

/// Illegal `$CB`: `X ← (A & X) − #imm` with no borrow-in; `C` set if no
/// borrow occurred.
pub(crate) fn sbx(cpu: &mut Cpu, _bus: &mut Bus) -> OpResult {
    let base = cpu.a & cpu.x;
    let operand = cpu.data_bus;
    let result = base.wrapping_sub(operand);
    cpu.assign_flag(CARRY, base >= operand);
    cpu.x = result;
    cpu.update_zn(result);
    cpu.assign_flag(NEGATIVE, result & 0x80 != 0);
    Ok(false)
}
