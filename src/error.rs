//! Error types for the emulator core.
//!
//! Grounded on the teacher's preference for explicit `Result` propagation
//! at fallible boundaries (ROM loading, bus writes) rather than panics.

use std::path::PathBuf;

use thiserror::Error;

/// Maximum size of a ROM image in bytes (the ROM region is 32 KiB).
pub const ROM_SIZE: usize = 0x8000;

/// Fatal faults the core can raise. All are reported by the caller, never
/// retried: a `RomIo`/`RomTooLarge` error aborts startup, an
/// `AccessViolation` aborts the run loop.
#[derive(Debug, Error)]
pub enum EmulatorError {
    #[error("failed to read ROM image at {path}: {source}")]
    RomIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("ROM image at {path} is {size} bytes, exceeds the {max} byte ROM region")]
    RomTooLarge {
        path: PathBuf,
        size: usize,
        max: usize,
    },

    #[error("write to ROM region at address ${address:04X} rejected (access violation)")]
    AccessViolation { address: u16 },
}
