//! Load and store opcode family: `LDA`/`LDX`/`LDY`/`STA`/`STX`/`STY`, plus
//! the illegal combined `LAX` (load A and X together) and `SAX` (store
//! `A & X`).

use crate::bus::Bus;
use crate::cpu::OpResult;
use crate::cpu::state::Cpu;

pub(crate) fn lda(cpu: &mut Cpu, _bus: &mut Bus) -> OpResult {
    cpu.a = cpu.data_bus;
    cpu.update_zn(cpu.a);
    Ok(true)
}

pub(crate) fn ldx(cpu: &mut Cpu, _bus: &mut Bus) -> OpResult {
    cpu.x = cpu.data_bus;
    cpu.update_zn(cpu.x);
    Ok(true)
}

pub(crate) fn ldy(cpu: &mut Cpu, _bus: &mut Bus) -> OpResult {
    cpu.y = cpu.data_bus;
    cpu.update_zn(cpu.y);
    Ok(true)
}

/// Illegal: load the same operand into both `A` and `X`.
pub(crate) fn lax(cpu: &mut Cpu, _bus: &mut Bus) -> OpResult {
    cpu.a = cpu.data_bus;
    cpu.x = cpu.data_bus;
    cpu.update_zn(cpu.a);
    Ok(true)
}

pub(crate) fn sta(cpu: &mut Cpu, bus: &mut Bus) -> OpResult {
    bus.write(cpu.address_bus, cpu.a)?;
    Ok(false)
}

pub(crate) fn stx(cpu: &mut Cpu, bus: &mut Bus) -> OpResult {
    bus.write(cpu.address_bus, cpu.x)?;
    Ok(false)
}

pub(crate) fn sty(cpu: &mut Cpu, bus: &mut Bus) -> OpResult {
    bus.write(cpu.address_bus, cpu.y)?;
    Ok(false)
}

/// Illegal: store `A & X` with no flag changes.
pub(crate) fn sax(cpu: &mut Cpu, bus: &mut Bus) -> OpResult {
    bus.write(cpu.address_bus, cpu.a & cpu.x)?;
    Ok(false)
}
