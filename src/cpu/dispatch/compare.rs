//! Compare family: `CMP`/`CPX`/`CPY`, plus the illegal `DCP` (`DEC` memory
//! then `CMP`).

use crate::bus::Bus;
use crate::cpu::OpResult;
use crate::cpu::dispatch::rmw;
use crate::cpu::state::{CARRY, Cpu, NEGATIVE, ZERO};

/// Subtract `reg - data_bus` without writing back; set `C`/`Z`/`N` from the
/// comparison. `data_bus` is always the operand: the direct addressing
/// modes fetch it there, and `DCP` re-routes the decremented value through
/// it before calling this.
fn compare(cpu: &mut Cpu, reg: u8) {
    let operand = cpu.data_bus;
    let result = reg.wrapping_sub(operand);
    cpu.assign_flag(CARRY, reg >= operand);
    cpu.assign_flag(ZERO, reg == operand);
    cpu.assign_flag(NEGATIVE, result & 0x80 != 0);
}

pub(crate) fn cmp(cpu: &mut Cpu, _bus: &mut Bus) -> OpResult {
    compare(cpu, cpu.a);
    Ok(true)
}

pub(crate) fn cpx(cpu: &mut Cpu, _bus: &mut Bus) -> OpResult {
    compare(cpu, cpu.x);
    Ok(false)
}

pub(crate) fn cpy(cpu: &mut Cpu, _bus: &mut Bus) -> OpResult {
    compare(cpu, cpu.y);
    Ok(false)
}

/// Illegal: `DEC` memory, then `CMP A` with the decremented value.
pub(crate) fn dcp(cpu: &mut Cpu, bus: &mut Bus) -> OpResult {
    rmw::dec(cpu, bus)?;
    compare(cpu, cpu.a);
    Ok(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cmp_equal_sets_zero_and_carry() {
        let mut cpu = Cpu::new();
        let mut bus = Bus::new();
        cpu.a = 0x42;
        cpu.data_bus = 0x42;
        cmp(&mut cpu, &mut bus).unwrap();
        assert!(cpu.is_flag_set(ZERO));
        assert!(cpu.is_flag_set(CARRY));
    }

    #[test]
    fn cmp_less_clears_carry() {
        let mut cpu = Cpu::new();
        let mut bus = Bus::new();
        cpu.a = 0x10;
        cpu.data_bus = 0x20;
        cmp(&mut cpu, &mut bus).unwrap();
        assert!(!cpu.is_flag_set(CARRY));
        assert!(!cpu.is_flag_set(ZERO));
    }
}
