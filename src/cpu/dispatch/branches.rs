//! Conditional branches. Each tests one status flag and, if the branch is
//! taken, adds a cycle and moves `pc` by `address_relative`; a second cycle
//! is added if the branch lands on a different page. These extra cycles
//! are applied directly here rather than through the generic page-penalty
//! mechanism, matching the addressing table's "via branch rules" note.

use crate::bus::Bus;
use crate::cpu::OpResult;
use crate::cpu::state::{CARRY, Cpu, NEGATIVE, OVERFLOW, ZERO};

fn branch_if(cpu: &mut Cpu, taken: bool) -> OpResult {
    if taken {
        cpu.cycles += 1;
        let old_pc = cpu.pc;
        let new_pc = cpu.pc.wrapping_add(cpu.address_relative);
        cpu.pc = new_pc;
        if (old_pc & 0xFF00) != (new_pc & 0xFF00) {
            cpu.cycles += 1;
        }
    }
    Ok(false)
}

pub(crate) fn bcc(cpu: &mut Cpu, _bus: &mut Bus) -> OpResult {
    branch_if(cpu, !cpu.is_flag_set(CARRY))
}
pub(crate) fn bcs(cpu: &mut Cpu, _bus: &mut Bus) -> OpResult {
    branch_if(cpu, cpu.is_flag_set(CARRY))
}
pub(crate) fn beq(cpu: &mut Cpu, _bus: &mut Bus) -> OpResult {
    branch_if(cpu, cpu.is_flag_set(ZERO))
}
pub(crate) fn bne(cpu: &mut Cpu, _bus: &mut Bus) -> OpResult {
    branch_if(cpu, !cpu.is_flag_set(ZERO))
}
pub(crate) fn bmi(cpu: &mut Cpu, _bus: &mut Bus) -> OpResult {
    branch_if(cpu, cpu.is_flag_set(NEGATIVE))
}
pub(crate) fn bpl(cpu: &mut Cpu, _bus: &mut Bus) -> OpResult {
    branch_if(cpu, !cpu.is_flag_set(NEGATIVE))
}
pub(crate) fn bvc(cpu: &mut Cpu, _bus: &mut Bus) -> OpResult {
    branch_if(cpu, !cpu.is_flag_set(OVERFLOW))
}
pub(crate) fn bvs(cpu: &mut Cpu, _bus: &mut Bus) -> OpResult {
    branch_if(cpu, cpu.is_flag_set(OVERFLOW))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn untaken_branch_costs_nothing_extra() {
        let mut cpu = Cpu::new();
        let mut bus = Bus::new();
        cpu.pc = 0x8010;
        cpu.address_relative = 0x0005;
        let before = cpu.cycles;
        bcc(&mut cpu, &mut bus).unwrap();
        assert_eq!(cpu.cycles, before);
        assert_eq!(cpu.pc, 0x8010);
    }

    #[test]
    fn taken_branch_same_page_costs_one_cycle() {
        let mut cpu = Cpu::new();
        let mut bus = Bus::new();
        cpu.pc = 0x8010;
        cpu.address_relative = 0x0005;
        beq(&mut cpu, &mut bus).unwrap(); // ZERO clear -> beq not taken actually
        // force taken via bne with ZERO clear
        let mut cpu2 = Cpu::new();
        cpu2.pc = 0x8010;
        cpu2.address_relative = 0x0005;
        bne(&mut cpu2, &mut bus).unwrap();
        assert_eq!(cpu2.cycles, 1);
        assert_eq!(cpu2.pc, 0x8015);
    }

    #[test]
    fn taken_branch_crossing_page_costs_two_cycles() {
        let mut cpu = Cpu::new();
        let mut bus = Bus::new();
        cpu.pc = 0x80FE;
        cpu.address_relative = 0x0005; // lands at 0x8103, different page
        bne(&mut cpu, &mut bus).unwrap();
        assert_eq!(cpu.cycles, 2);
        assert_eq!(cpu.pc, 0x8103);
    }

    #[test]
    fn negative_offset_branches_backward() {
        let mut cpu = Cpu::new();
        let mut bus = Bus::new();
        cpu.pc = 0x8010;
        cpu.address_relative = 0xFFFE; // -2
        bne(&mut cpu, &mut bus).unwrap();
        assert_eq!(cpu.pc, 0x800E);
    }
}
