//! End-to-end scenario tests: build a tiny ROM image in memory, run it
//! against `Bus`/`Cpu` through the public crate surface, and assert the
//! final register/flag state. Mirrors the teacher's `bus/tests.rs`
//! convention of assembling a minimal in-memory image rather than reaching
//! for fixture files.

use crystal6502::cpu::{CARRY, NEGATIVE, OVERFLOW, ZERO};
use crystal6502::{Bus, Cpu};

/// Build a 32 KiB ROM image with `prg` at `$8000` and the reset vector
/// pointed at `$8000`.
fn rom_with(prg: &[u8]) -> Vec<u8> {
    let mut rom = vec![0u8; 0x8000];
    rom[..prg.len()].copy_from_slice(prg);
    rom[0x7FFC] = 0x00;
    rom[0x7FFD] = 0x80;
    rom
}

/// Drain whatever cycle budget is outstanding without starting a new
/// instruction.
fn drain(cpu: &mut Cpu, bus: &mut Bus) {
    while !cpu.done() {
        cpu.step(bus).unwrap();
    }
}

/// From an instruction boundary, run exactly one instruction (or the
/// implicit startup reset) to its own next boundary.
fn run_one_instruction(cpu: &mut Cpu, bus: &mut Bus) {
    cpu.step(bus).unwrap();
    drain(cpu, bus);
}

#[test]
fn scenario_lda_immediate() {
    let mut bus = Bus::new();
    bus.load_rom_bytes(&rom_with(&[0xA9, 0x42, 0x00])).unwrap();
    let mut cpu = Cpu::new();

    run_one_instruction(&mut cpu, &mut bus); // implicit startup reset
    run_one_instruction(&mut cpu, &mut bus); // LDA #$42

    assert_eq!(cpu.a(), 0x42);
    assert!(!cpu.is_flag_set(ZERO));
    assert!(!cpu.is_flag_set(NEGATIVE));
    assert_eq!(cpu.pc(), 0x8002);
}

#[test]
fn scenario_lda_zero_then_tax() {
    let mut bus = Bus::new();
    bus.load_rom_bytes(&rom_with(&[0xA9, 0x00, 0xAA, 0x00]))
        .unwrap();
    let mut cpu = Cpu::new();

    run_one_instruction(&mut cpu, &mut bus); // implicit startup reset
    run_one_instruction(&mut cpu, &mut bus); // LDA #$00
    run_one_instruction(&mut cpu, &mut bus); // TAX

    assert_eq!(cpu.a(), 0x00);
    assert_eq!(cpu.x(), 0x00);
    assert!(cpu.is_flag_set(ZERO));
    assert!(!cpu.is_flag_set(NEGATIVE));
}

#[test]
fn scenario_adc_wraps_to_zero_with_carry() {
    let mut bus = Bus::new();
    bus.load_rom_bytes(&rom_with(&[0xA9, 0xFF, 0x69, 0x01]))
        .unwrap();
    let mut cpu = Cpu::new();

    run_one_instruction(&mut cpu, &mut bus); // implicit startup reset
    run_one_instruction(&mut cpu, &mut bus); // LDA #$FF
    run_one_instruction(&mut cpu, &mut bus); // ADC #$01

    assert_eq!(cpu.a(), 0x00);
    assert!(cpu.is_flag_set(CARRY));
    assert!(cpu.is_flag_set(ZERO));
    assert!(!cpu.is_flag_set(OVERFLOW));
    assert!(!cpu.is_flag_set(NEGATIVE));
}

#[test]
fn scenario_adc_signed_overflow() {
    let mut bus = Bus::new();
    bus.load_rom_bytes(&rom_with(&[0xA9, 0x7F, 0x69, 0x01]))
        .unwrap();
    let mut cpu = Cpu::new();

    run_one_instruction(&mut cpu, &mut bus); // implicit startup reset
    run_one_instruction(&mut cpu, &mut bus); // LDA #$7F
    run_one_instruction(&mut cpu, &mut bus); // ADC #$01

    assert_eq!(cpu.a(), 0x80);
    assert!(!cpu.is_flag_set(CARRY));
    assert!(cpu.is_flag_set(OVERFLOW));
    assert!(cpu.is_flag_set(NEGATIVE));
}

#[test]
fn scenario_ldx_zero_then_dex_wraps() {
    let mut bus = Bus::new();
    bus.load_rom_bytes(&rom_with(&[0xA2, 0x00, 0xCA])).unwrap();
    let mut cpu = Cpu::new();

    run_one_instruction(&mut cpu, &mut bus); // implicit startup reset
    run_one_instruction(&mut cpu, &mut bus); // LDX #$00
    run_one_instruction(&mut cpu, &mut bus); // DEX

    assert_eq!(cpu.x(), 0xFF);
    assert!(!cpu.is_flag_set(ZERO));
    assert!(cpu.is_flag_set(NEGATIVE));
}

#[test]
fn scenario_store_then_reload_through_ram() {
    let mut bus = Bus::new();
    bus.load_rom_bytes(&rom_with(&[
        0xA9, 0x05, 0x8D, 0x00, 0x02, 0xAD, 0x00, 0x02,
    ]))
    .unwrap();
    let mut cpu = Cpu::new();

    run_one_instruction(&mut cpu, &mut bus); // implicit startup reset
    run_one_instruction(&mut cpu, &mut bus); // LDA #$05
    run_one_instruction(&mut cpu, &mut bus); // STA $0200

    assert_eq!(bus.read(0x0200), 0x05);

    run_one_instruction(&mut cpu, &mut bus); // LDA $0200

    assert_eq!(cpu.a(), 0x05);
}

#[test]
fn scenario_jsr_rts_round_trips_pc() {
    // JSR $8005; at $8005: RTS. After the JSR, two bytes of the operand
    // plus the opcode (3 total) have been consumed, so the return address
    // pushed is $8002 (pc-1 of the instruction after JSR) and RTS should
    // leave pc at $8003, the byte right after the JSR.
    let mut bus = Bus::new();
    bus.load_rom_bytes(&rom_with(&[0x20, 0x05, 0x80, 0xEA, 0xEA, 0x60]))
        .unwrap();
    let mut cpu = Cpu::new();

    run_one_instruction(&mut cpu, &mut bus); // implicit startup reset
    run_one_instruction(&mut cpu, &mut bus); // JSR $8005
    assert_eq!(cpu.pc(), 0x8005);
    run_one_instruction(&mut cpu, &mut bus); // RTS
    assert_eq!(cpu.pc(), 0x8003);
}

#[test]
fn scenario_pha_pla_round_trips_accumulator() {
    let mut bus = Bus::new();
    bus.load_rom_bytes(&rom_with(&[0xA9, 0x7E, 0x48, 0xA9, 0x00, 0x68]))
        .unwrap();
    let mut cpu = Cpu::new();

    run_one_instruction(&mut cpu, &mut bus); // implicit startup reset
    run_one_instruction(&mut cpu, &mut bus); // LDA #$7E
    let sp_before = cpu.sp();
    run_one_instruction(&mut cpu, &mut bus); // PHA
    run_one_instruction(&mut cpu, &mut bus); // LDA #$00
    assert_eq!(cpu.a(), 0x00);
    run_one_instruction(&mut cpu, &mut bus); // PLA
    assert_eq!(cpu.a(), 0x7E);
    assert_eq!(cpu.sp(), sp_before);
    assert!(!cpu.is_flag_set(ZERO));
}

#[test]
fn scenario_rom_oversized_image_is_rejected() {
    let mut bus = Bus::new();
    let oversized = vec![0u8; 0x8001];
    assert!(bus.load_rom_bytes(&oversized).is_err());
}
