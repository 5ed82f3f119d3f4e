use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use log::{error, info, warn};

use crystal6502::clock::{self, ClockPacer};
use crystal6502::{Bus, Cpu, EmulatorError};

/// A cycle-budgeted MOS 6502 emulator core with a minimal RAM/ROM board.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Path to a raw ROM image (≤ 32 KiB), mapped at $8000. If omitted the
    /// ROM region stays zero-filled.
    rom: Option<PathBuf>,

    /// Target clock frequency in hertz.
    #[arg(long, default_value_t = 1_789_773.0)]
    frequency: f64,

    /// Run exactly this many unpaced cycles instead of pacing forever.
    #[arg(long)]
    cycles: Option<u64>,

    /// Increase log verbosity (-v, -vv, ...).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress all logging below the error level.
    #[arg(short, long)]
    quiet: bool,
}

fn main() -> ExitCode {
    let args = Args::parse();

    let level = if args.quiet {
        "error"
    } else {
        match args.verbose {
            0 => "info",
            1 => "debug",
            _ => "trace",
        }
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{err}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: Args) -> Result<(), EmulatorError> {
    let mut bus = Bus::new();
    match &args.rom {
        Some(path) => bus.load_rom_file(path)?,
        None => warn!("no ROM image given, running against a zero-filled ROM region"),
    }

    let mut cpu = Cpu::new();
    cpu.reset(&mut bus);
    info!(
        "reset complete, pc = ${:04X}, running at {:.0} Hz",
        cpu.pc(),
        args.frequency
    );

    match args.cycles {
        Some(cycles) => {
            clock::run_unpaced(&mut cpu, &mut bus, cycles)?;
            info!("ran {cycles} unpaced cycles, pc = ${:04X}", cpu.pc());
            Ok(())
        }
        None => {
            let pacer = ClockPacer::new(args.frequency);
            pacer.run(&mut cpu, &mut bus, |cpu| !cpu.halted())?;
            info!("halted at pc = ${:04X}", cpu.pc());
            Ok(())
        }
    }
}
