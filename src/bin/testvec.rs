// cargo run --bin testvec -- --seed 1 --verbose
// cargo run --bin testvec -- check test_vectors.txt

use std::error::Error;
use std::path::PathBuf;
use clap::{Args, Parser, Subcommand, ValueEnum};
use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;
use testvec::config::{
    Config,
    DEFAULT_VECTOR_LEN,
    DEFAULT_LINE_COUNT,
    DEFAULT_MAX_SET_BITS,
    DEFAULT_FIRST_INDEX,
    DEFAULT_LAST_INDEX,
    DEFAULT_OUTPUT,
};
use testvec::generator::{Generator, Summary};
use testvec::util::detrand::Lcg;
use testvec::verify::check_file;

#[derive(Parser)]
#[command(name="testvec", args_conflicts_with_subcommands = true)]
/// Generate random bit vectors for a Hamming weight counter
///
/// With no subcommand, writes the vector file. Running without any arguments
/// produces 100 lines of 1024 bits in test_vectors.txt.
struct Options {
    #[command(subcommand)]
    subcmd: Option<SubCommand>,
    #[command(flatten)]
    generate: Generate,
}

#[derive(Subcommand)]
enum SubCommand {
    /// Check an existing vector file and list the set bits of each line
    Check(Check),
}

#[derive(Args)]
struct Shape {
    /// Bits per line
    #[arg(long, default_value_t = DEFAULT_VECTOR_LEN)]
    vector_len: usize,
    /// Number of lines
    #[arg(long, default_value_t = DEFAULT_LINE_COUNT)]
    lines: usize,
    /// Maximum number of draws per line
    #[arg(long, default_value_t = DEFAULT_MAX_SET_BITS)]
    max_set_bits: usize,
    /// Lowest settable index
    #[arg(long, default_value_t = DEFAULT_FIRST_INDEX)]
    first_index: usize,
    /// Highest settable index
    #[arg(long, default_value_t = DEFAULT_LAST_INDEX)]
    last_index: usize,
}

impl Shape {
    fn to_config(&self, output: PathBuf) -> Config {
        Config {
            vector_len: self.vector_len,
            line_count: self.lines,
            max_set_bits: self.max_set_bits,
            first_index: self.first_index,
            last_index: self.last_index,
            output,
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum RngKind {
    Chacha,
    Lcg,
}

#[derive(Args)]
struct Generate {
    #[command(flatten)]
    shape: Shape,
    /// Output filename
    #[arg(long, default_value = DEFAULT_OUTPUT)]
    output: PathBuf,
    /// Seed for a reproducible file; unseeded runs use the thread-local source
    #[arg(long)]
    seed: Option<u64>,
    /// Generator used with --seed. lcg only accepts seeds that fit in 32 bits.
    #[arg(long, value_enum, default_value_t = RngKind::Chacha)]
    rng: RngKind,
    /// Print a trace line for every vector and a summary
    #[arg(long)]
    verbose: bool,
}

#[derive(Args)]
struct Check {
    #[arg(default_value = DEFAULT_OUTPUT)]
    filename: PathBuf,
    #[command(flatten)]
    shape: Shape,
    /// Print the weight and set indices of every line
    #[arg(long)]
    verbose: bool,
}

fn run_generate<R: RngCore>(args: &Generate, rng: R) -> Result<Summary, Box<dyn Error>> {
    let config = args.shape.to_config(args.output.clone());
    let mut generator = Generator::new(config, rng)?;
    let verbose = args.verbose;
    let summary = generator.write_file_with(&args.output, |line_no, drawn, vector| {
        if verbose {
            println!("{:05} drawn {:<3} weight {}", line_no + 1, drawn, vector.weight());
        }
    })?;
    Ok(summary)
}

fn lcg_seed(seed: u64) -> Result<u32, Box<dyn Error>> {
    u32::try_from(seed)
        .map_err(|_| format!("--seed {} does not fit in 32 bits, as --rng lcg requires", seed).into())
}

fn generate(args: &Generate) -> Result<(), Box<dyn Error>> {
    let summary = match (args.seed, args.rng) {
        (None, _) => run_generate(args, rand::thread_rng())?,
        (Some(seed), RngKind::Chacha) => run_generate(args, ChaCha8Rng::seed_from_u64(seed))?,
        (Some(seed), RngKind::Lcg) => run_generate(args, Lcg::new(lcg_seed(seed)?))?,
    };
    if args.verbose {
        println!("wrote {} lines to {}: {} draws, {} bits set, {} collisions, weight {}..{}",
            summary.lines,
            args.output.display(),
            summary.draws,
            summary.bits_set,
            summary.collisions,
            summary.min_weight.unwrap_or(0),
            summary.max_weight.unwrap_or(0));
    }
    Ok(())
}

fn check(args: &Check) -> Result<(), Box<dyn Error>> {
    let config = args.shape.to_config(args.filename.clone());
    let report = check_file(&args.filename, &config)?;
    if args.verbose {
        for (i, line) in report.lines.iter().enumerate() {
            let indices: Vec<String> = line.indices.iter().map(|index| index.to_string()).collect();
            println!("{:05} {:<3} {}", i + 1, line.weight, indices.join(" "));
        }
    }
    for violation in report.violations.iter() {
        eprintln!("{}: {}", args.filename.display(), violation);
    }
    if !report.is_ok() {
        return Err(format!("{}: {} problem(s) found",
            args.filename.display(), report.violations.len()).into());
    }
    Ok(())
}

fn main_inner() -> Result<(), Box<dyn Error>> {
    let opt = Options::parse();
    match &opt.subcmd {
        None => generate(&opt.generate),
        Some(SubCommand::Check(c)) => check(c),
    }
}

fn main() {
    match main_inner() {
        Ok(()) => {},
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(1);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::lcg_seed;

    #[test]
    fn lcg_seed_range() {
        assert_eq!(lcg_seed(0).ok(), Some(0));
        assert_eq!(lcg_seed(u32::MAX as u64).ok(), Some(u32::MAX));
        assert!(lcg_seed(u32::MAX as u64 + 1).is_err());
        assert!(lcg_seed(1 << 40).is_err());
    }
}
