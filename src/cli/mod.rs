// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Command-line interface code. More specific options for `radio-astronomy`
//! subcommands are contained in modules.
//!
//! For subcommands that accept an arguments file, all booleans must have
//! `#[serde(default)]` annotated, and anything that isn't a boolean must be
//! optional. This allows all arguments to be optional *and* usable in an
//! arguments file.
//!
//! Only 3 things should be public in this module: `RadioAstronomy`,
//! `RadioAstronomy::run`, and `RadioAstronomyError`.

#[macro_use]
mod common;
mod antenna_temp;
mod band;
mod calibrator_flux;
mod catalogue_convert;
mod error;
mod galactic_bg;
mod planet;

pub use error::RadioAstronomyError;

use std::path::PathBuf;

use clap::{AppSettings, Args, Parser, Subcommand};
use log::debug;

// Add build-time information from the "built" crate.
include!(concat!(env!("OUT_DIR"), "/built.rs"));

#[derive(Debug, Parser)]
#[clap(
    version,
    author,
    about = "Radio-astronomy formulae and calibrator flux densities"
)]
#[clap(global_setting(AppSettings::DeriveDisplayOrder))]
#[clap(disable_help_subcommand = true)]
#[clap(infer_subcommands = true)]
#[clap(propagate_version = true)]
#[clap(infer_long_args = true)]
pub struct RadioAstronomy {
    #[clap(flatten)]
    global_opts: GlobalArgs,

    #[clap(subcommand)]
    command: Command,
}

#[derive(Debug, Args)]
struct GlobalArgs {
    /// The verbosity of the program. Increase by specifying multiple times
    /// (e.g. -vv). The default is to print only results.
    #[clap(short, long, parse(from_occurrences))]
    #[clap(global = true)]
    verbosity: u8,

    /// Only verify that arguments were correctly ingested and print out
    /// high-level information.
    #[clap(long)]
    #[clap(global = true)]
    dry_run: bool,

    /// Save the input arguments into a new TOML file that can be used to
    /// reproduce this run.
    #[clap(long)]
    #[clap(global = true)]
    save_toml: Option<PathBuf>,
}

#[derive(Debug, Subcommand)]
#[clap(arg_required_else_help = true)]
enum Command {
    #[clap(alias = "ta")]
    #[clap(about = "Get the antenna temperature a calibrator produces in a telescope.")]
    AntennaTemp(antenna_temp::AntennaTempArgs),

    #[clap(alias = "flux")]
    #[clap(about = "Get flux densities of calibrators at frequencies and a time.")]
    CalibratorFlux(calibrator_flux::CalibratorFluxArgs),

    #[clap(about = "Get the position, size and brightness of a solar-system body.")]
    Planet(planet::PlanetArgs),

    #[clap(about = "Convert between band letters and frequencies.")]
    Band(band::BandArgs),

    #[clap(about = "Get the galactic background brightness at low frequencies.")]
    GalacticBg(galactic_bg::GalacticBgArgs),

    #[clap(alias = "convert-catalogue")]
    #[clap(about = "Check a VLA calibrator catalogue and convert it to json or yaml.")]
    CatalogueConvert(catalogue_convert::CatalogueConvertArgs),
}

impl RadioAstronomy {
    pub fn run(self) -> Result<(), RadioAstronomyError> {
        // Set up logging.
        let GlobalArgs {
            verbosity,
            dry_run,
            save_toml,
        } = self.global_opts;
        setup_logging(verbosity).map_err(|e| RadioAstronomyError::Generic(e.to_string()))?;

        let sub_command = match &self.command {
            Command::AntennaTemp(_) => "antenna-temp",
            Command::CalibratorFlux(_) => "calibrator-flux",
            Command::Planet(_) => "planet",
            Command::Band(_) => "band",
            Command::GalacticBg(_) => "galactic-bg",
            Command::CatalogueConvert(_) => "catalogue-convert",
        };
        // The version and build-time information are only interesting when
        // debugging.
        debug!(
            "radio-astronomy {} {}",
            sub_command,
            env!("CARGO_PKG_VERSION")
        );
        display_build_info();

        macro_rules! merge_save_run {
            ($args:expr) => {{
                let args = $args.merge()?;
                if let Some(toml) = save_toml {
                    use std::{
                        fs::File,
                        io::{BufWriter, Write},
                    };

                    let mut f = BufWriter::new(File::create(toml)?);
                    let toml_str = toml::to_string(&args)?;
                    f.write_all(toml_str.as_bytes())?;
                }
                args.run(dry_run)?;
            }};
        }

        match self.command {
            Command::AntennaTemp(args) => {
                merge_save_run!(args)
            }

            Command::CalibratorFlux(args) => {
                merge_save_run!(args)
            }

            // Utilities.
            Command::Planet(args) => args.run()?,
            Command::Band(args) => args.run()?,
            Command::GalacticBg(args) => args.run()?,
            Command::CatalogueConvert(args) => args.run()?,
        }

        debug!("radio-astronomy {} complete.", sub_command);
        Ok(())
    }
}

/// Activate a logger. All log messages are put onto `stdout`. `env_logger`
/// automatically only uses colours and fancy symbols if we're on a tty (e.g. a
/// terminal); piped output will be formatted sensibly. Source code lines are
/// displayed in log messages when verbosity >= 3.
fn setup_logging(verbosity: u8) -> Result<(), log::SetLoggerError> {
    let mut builder = env_logger::Builder::from_default_env();
    builder.target(env_logger::Target::Stdout);
    builder.format_target(false);
    match verbosity {
        0 => builder.filter_level(log::LevelFilter::Info),
        1 => builder.filter_level(log::LevelFilter::Debug),
        2 => builder.filter_level(log::LevelFilter::Trace),
        _ => {
            builder.filter_level(log::LevelFilter::Trace);
            builder.format(|buf, record| {
                use std::io::Write;

                let timestamp = buf.timestamp();
                let level = record.level();
                let target = record.target();
                let line = record.line().unwrap_or(0);
                let message = record.args();

                writeln!(buf, "[{timestamp} {level} {target}:{line}] {message}")
            })
        }
    };
    builder.try_init()
}

/// Write debug-level log lines of how this executable was compiled.
fn display_build_info() {
    let dirty = match GIT_DIRTY {
        Some(true) => " (dirty)",
        _ => "",
    };
    match GIT_COMMIT_HASH_SHORT {
        Some(hash) => {
            debug!("Compiled on git commit hash: {hash}{dirty}");
        }
        None => debug!("Compiled on git commit hash: <no git info>"),
    }
    if let Some(hr) = GIT_HEAD_REF {
        debug!("            git head ref: {}", hr);
    }
    debug!("            {}", BUILT_TIME_UTC);
    debug!("         with compiler {}", RUSTC_VERSION);
}
