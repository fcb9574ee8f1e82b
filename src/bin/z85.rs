//! Z85 CLI - encode hex input as Z85 text, or decode Z85 text to raw bytes

use clap::Parser;
use log::LevelFilter;
use std::io::{self, Write};
use std::process;

use z85::cli::{self, Mode};
use z85::input;

#[derive(Parser)]
#[command(name = "z85")]
#[command(version)]
#[command(about = "Z85 binary-to-text encoding.", long_about = None)]
struct Cli {
    /// Mode of operation
    #[arg(short, long, value_enum, default_value_t = Mode::Encode)]
    mode: Mode,

    /// Increase log verbosity on stderr (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Input data; hex when encoding, Z85 text when decoding. Read from
    /// piped stdin when omitted.
    #[arg(value_name = "DATA")]
    data: Vec<String>,
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    // Only fails if a logger is already installed.
    let _ = env_logger::Builder::new()
        .filter_level(level)
        .format(|buf, record| writeln!(buf, "[{}] {}", record.level(), record.args()))
        .try_init();
}

fn main() {
    let args = Cli::parse();
    init_logging(args.verbose);

    let mode = args.mode;
    // stdin only matters when no data was given on the command line.
    let piped = if args.data.is_empty() {
        input::stdin_is_piped()
    } else {
        Ok(false)
    };
    let result = piped
        .and_then(|piped| input::select_source(args.data, piped))
        .and_then(|mut source| {
            let stdout = io::stdout();
            let mut out = stdout.lock();
            cli::run(mode, &mut *source, &mut out)
        });

    if let Err(e) = result {
        if e.kind == Some(z85::ErrorKind::Usage) {
            println!("{}", e);
        } else {
            eprintln!("Error: {}", e);
        }
        process::exit(e.exit_code());
    }
}
