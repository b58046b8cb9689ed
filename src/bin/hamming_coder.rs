use clap::Parser;
use hamming_coder::encode_file;
use log::info;
use std::io::IsTerminal;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

/// Encodes a file of binary words, one per line, into Hamming code words.
#[derive(Parser, Debug)]
#[command(name = "hamming-coder")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Input file with one '0'/'1' word per line
    input: PathBuf,

    /// Output file, one code word per line
    output: PathBuf,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace); RUST_LOG overrides
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .init();
}

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        // --help and --version
        Err(err) if !err.use_stderr() => err.exit(),
        Err(err) => {
            let _ = err.print();
            return ExitCode::from(1);
        }
    };

    init_logging(cli.verbose);

    match encode_file(&cli.input, &cli.output) {
        Ok(summary) => {
            info!(
                "wrote {} code words to {}",
                summary.lines,
                cli.output.display()
            );
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("error: {}", err);
            ExitCode::from(1)
        }
    }
}
