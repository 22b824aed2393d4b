/*
MIT License
Copyright (c) 2021 Germán Molina
Permission is hereby granted, free of charge, to any person obtaining a copy
of this software and associated documentation files (the "Software"), to deal
in the Software without restriction, including without limitation the rights
to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
copies of the Software, and to permit persons to whom the Software is
furnished to do so, subject to the following conditions:
The above copyright notice and this permission notice shall be included in all
copies or substantial portions of the Software.
THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
SOFTWARE.
*/
use clap::{Parser, Subcommand};
use isoclimate::{load_approximation, summarize, Error, Float, Options};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "isoclimate")]
#[command(about = "Climate statistics for ISO 13790 calculations", long_about = None)]
struct Cli {
    /// Log what is going on (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Calculates the climate summary of an EPW file
    Summary {
        /// The EPW weather file
        epw: PathBuf,

        /// A JSON file with options
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Write JSON instead of the ISO text report
        #[arg(short, long)]
        json: bool,

        /// Specifies the path to which to write the results.
        /// If none is given, STDOUT is used
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Approximates a value from a set of samples stored as JSON
    Approximate {
        /// The JSON file with the samples
        samples: PathBuf,

        /// The point to approximate, as comma separated values
        #[arg(long, value_delimiter = ',', allow_hyphen_values = true, required = true)]
        at: Vec<Float>,

        /// A JSON file with options, replacing those in the samples file
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn read_options(config: Option<PathBuf>) -> Result<Options, Error> {
    match config {
        Some(path) => Ok(Options::from_file(path)?),
        None => Ok(Options::default()),
    }
}

fn run(cli: Cli) -> Result<(), Error> {
    match cli.command {
        Commands::Summary {
            epw,
            config,
            json,
            output,
        } => {
            let options = read_options(config)?;
            let iso = summarize(&epw, &options)?;
            let report = if json {
                serde_json::to_string_pretty(&iso)?
            } else {
                iso.to_iso_string()
            };
            match output {
                Some(path) => std::fs::write(&path, report).map_err(|source| Error::Io {
                    path: path.display().to_string(),
                    source,
                })?,
                None => println!("{}", report.trim_end()),
            }
        }
        Commands::Approximate {
            samples,
            at,
            config,
        } => {
            let options = match config {
                Some(path) => Some(Options::from_file(path)?.approximation),
                None => None,
            };
            let approx = load_approximation(&samples, options.as_ref())?;
            let value = approx.approximate(&at)?;
            println!("{}", value);
        }
    }
    Ok(())
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
