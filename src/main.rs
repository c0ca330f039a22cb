use std::io::{self, Write};
use std::path::PathBuf;

use clap::Parser;
use miette::IntoDiagnostic;

use rtimg_conv::converter::{Converter, DEFAULT_INPUT};
use rtimg_conv::layout::{DEFAULT_OUTPUT_ROOT, OutputLayout};

#[derive(Parser, Debug)]
#[command(name = "rtimg-conv")]
#[command(version, about = "Save a ray traced PPM frame as PPM and PNG")]
struct Args {
    /// Input image
    #[arg(short, long, default_value = DEFAULT_INPUT)]
    input: PathBuf,

    /// Directory containing ppmImages/ and pngImages/
    #[arg(short, long, default_value = DEFAULT_OUTPUT_ROOT)]
    output_root: PathBuf,

    /// Output file name without extension (prompts when omitted)
    #[arg(short, long)]
    name: Option<String>,

    /// Log more (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Only log errors
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

impl Args {
    fn log_level(&self) -> log::LevelFilter {
        if self.quiet {
            return log::LevelFilter::Error;
        }
        match self.verbose {
            0 => log::LevelFilter::Warn,
            1 => log::LevelFilter::Info,
            2 => log::LevelFilter::Debug,
            _ => log::LevelFilter::Trace,
        }
    }
}

fn log_init(filter: log::LevelFilter) -> miette::Result<()> {
    use simplelog::*;
    TermLogger::init(
        filter,
        Config::default(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    )
    .into_diagnostic()
}

fn main() -> miette::Result<()> {
    let args = Args::parse();
    log_init(args.log_level())?;

    let converter = Converter::new(&args.input, OutputLayout::new(&args.output_root));

    let conversion = match args.name.as_deref() {
        Some(name) => converter.run(name),
        None => {
            let stdin = io::stdin();
            let stdout = io::stdout();
            let mut output = stdout.lock();
            let result = converter.run_interactive(&mut stdin.lock(), &mut output);
            output.flush().into_diagnostic()?;
            result
        }
    }
    .map_err(|e| miette::miette!("{e}"))?;

    log::info!(
        "converted {}x{} frame into {} file(s)",
        conversion.width,
        conversion.height,
        conversion.written.len()
    );
    Ok(())
}
