use std::{
    fs,
    path::{Path, PathBuf},
};

use clap::Parser;
use confex::{compile, error::Error, util::position::line_col};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

/// confex converts configuration sources with constants and postfix
/// expressions into JSON documents.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Input configuration file path.
    #[arg(short, long)]
    input: PathBuf,

    /// Output JSON file path. Missing parent directories are created. The
    /// document is printed to stdout when this is omitted.
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Increases log output on stderr (`-v` debug, `-vv` trace). `RUST_LOG`
    /// takes precedence when set.
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() {
    let args = Args::parse();
    init_logging(args.verbose);

    let source = fs::read_to_string(&args.input).unwrap_or_else(|e| {
        eprintln!("Error: Failed to read input file '{}': {e}", args.input.display());
        std::process::exit(Error::Io(e).exit_code());
    });

    if let Err(e) = run(&args, &source) {
        eprintln!("{}", describe(&args.input, &source, &e));
        std::process::exit(e.exit_code());
    }
}

fn init_logging(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt().with_env_filter(filter)
                             .with_target(false)
                             .with_writer(std::io::stderr)
                             .init();
}

fn run(args: &Args, source: &str) -> Result<(), Error> {
    debug!(input = %args.input.display(), bytes = source.len(), "compiling");
    let document = compile(source)?;
    let json = serde_json::to_string_pretty(&document).map_err(std::io::Error::from)?;

    match &args.output {
        Some(path) => {
            if let Some(parent) = path.parent()
               && !parent.as_os_str().is_empty()
            {
                fs::create_dir_all(parent)?;
            }
            fs::write(path, json + "\n")?;
            info!(output = %path.display(), "wrote document");
            println!("Successfully converted '{}' to '{}'",
                     args.input.display(),
                     path.display());
        },
        None => println!("{json}"),
    }

    Ok(())
}

/// Formats an error as a single line, prefixed with `file:line:column` when
/// the error points into the source.
fn describe(input: &Path, source: &str, error: &Error) -> String {
    match error.position() {
        Some(offset) => {
            let (line, column) = line_col(source, offset);
            format!("{}:{line}:{column}: {error}", input.display())
        },
        None => format!("{}: {error}", input.display()),
    }
}
