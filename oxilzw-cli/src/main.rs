//! OxiLZW CLI - 12-bit LZW decoder
//!
//! Decodes a packed 12-bit LZW file and writes the reconstructed bytes.

mod decode;

use clap::{ArgAction, Parser};
use decode::cmd_decode;
use std::ffi::OsString;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "decoder")]
#[command(author, version, about = "Decode a 12-bit packed LZW file")]
#[command(long_about = "
Decodes a file of 12-bit LZW codes packed two per three bytes and writes the
reconstructed bytes unchanged.

Examples:
  decoder input.lzw output.txt
  decoder --json input.lzw output.txt
  decoder -vv --bits 10 input.lzw output.txt
")]
struct Cli {
    /// Compressed input file
    input: PathBuf,

    /// Destination for the decoded bytes
    output: PathBuf,

    /// Dictionary-size exponent; the dictionary holds 2^bits entries (8-12)
    #[arg(short, long, default_value_t = 12)]
    bits: u8,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,

    /// Print a JSON run report instead of the success message
    #[arg(short, long)]
    json: bool,
}

fn init_logging(verbose: u8) {
    let default_filter = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    // A second run in the same process keeps the first logger.
    let _ = env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(default_filter),
    )
    .try_init();
}

/// Parse `args`, decode, and return the process exit code.
fn run<I, T>(args: I) -> i32
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let cli = match Cli::try_parse_from(args) {
        Ok(cli) => cli,
        // --help and --version
        Err(e) if !e.use_stderr() => e.exit(),
        Err(e) => {
            let rendered = e.to_string();
            let message = rendered.strip_prefix("error: ").unwrap_or(&rendered);
            eprint!("Error: {}", message);
            return 1;
        }
    };
    init_logging(cli.verbose);

    let result = cmd_decode(&cli.input, &cli.output, cli.bits).and_then(|report| {
        if cli.json {
            println!("{}", serde_json::to_string_pretty(&report)?);
        } else {
            println!(
                "Decoded {} -> {} ({} codes, {} bytes)",
                report.input.display(),
                report.output.display(),
                report.codes,
                report.decoded_bytes
            );
            println!("Success!");
        }
        Ok(())
    });

    match result {
        Ok(()) => 0,
        Err(e) => {
            eprintln!("Error: {}", e);
            1
        }
    }
}

fn main() {
    std::process::exit(run(std::env::args_os()));
}
