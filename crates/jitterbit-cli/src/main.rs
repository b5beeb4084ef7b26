//! CLI for jitterbit: single bits from clock jitter, and tests for their bias.

mod commands;

use std::process::ExitCode;

use clap::Parser;

use commands::Mode;

#[derive(Parser)]
#[command(name = "jitterbit")]
#[command(about = "jitterbit: harvest bits from clock jitter and test them for bias")]
#[command(version = jitterbit_core::VERSION)]
#[command(allow_negative_numbers = true)]
struct Cli {
    /// Number of bits (print/freq), trials (chi), patterns per repetition (perm)
    /// or values (file)
    #[arg(value_parser = commands::parse_count)]
    count: usize,

    /// What to do: chi, freq, perm, or a filename to write bit sums to.
    /// Omit to print the bits.
    mode: Option<String>,

    /// Timer the jitter sampler reads
    #[arg(long, default_value = "monotonic", value_parser = ["monotonic", "wall"])]
    clock: String,

    /// Requested sleep per sample, in microseconds
    #[arg(long, default_value = "10")]
    wait_us: u64,

    /// Bits summed per chi-squared trial and per written value
    #[arg(long, default_value = "20", value_parser = clap::value_parser!(u32).range(1..=64))]
    bits: u32,

    /// Chi-squared runs
    #[arg(long, default_value = "10", value_parser = commands::parse_count)]
    runs: usize,

    /// Permutation repetitions
    #[arg(long, default_value = "10", value_parser = commands::parse_count)]
    repetitions: usize,

    /// Print results as JSON
    #[arg(long)]
    json: bool,
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let mut generator = commands::make_generator(&cli.clock, cli.wait_us);
    let mode = Mode::parse(cli.mode.as_deref());
    log::debug!("mode={mode:?} count={}", cli.count);

    let result = match mode {
        Mode::Bits => commands::bits::run(&mut generator, cli.count, cli.json),
        Mode::Chi => commands::chi::run(&mut generator, cli.count, cli.bits, cli.runs, cli.json),
        Mode::Freq => commands::freq::run(&mut generator, cli.count, cli.json),
        Mode::Perm => commands::perm::run(&mut generator, cli.count, cli.repetitions, cli.json),
        Mode::File(path) => commands::write::run(&mut generator, cli.count, cli.bits, &path),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
