#![doc = r#"
A cycle-budgeted emulator core for an 8-bit MOS 6502-family CPU, together
with the minimal RAM/ROM board that hosts it.

Modules:
- bus: 64 KiB address space split into a RAM region and a ROM region
- cpu: CPU architectural state, addressing modes, the opcode dispatch
  table, and the fetch/decode/execute loop
- clock: host-side pacer that drives `Cpu::step` at a target frequency
- error: the crate's fallible-boundary error type
"#]

pub mod bus;
pub mod clock;
pub mod cpu;
pub mod error;

pub use bus::Bus;
pub use clock::ClockPacer;
pub use cpu::Cpu;
pub use error::EmulatorError;
