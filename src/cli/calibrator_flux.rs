// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Flux densities of calibrators at many frequencies.

use std::{
    fs::File,
    io::{BufWriter, Write},
    path::{Path, PathBuf},
};

use clap::Parser;
use log::{debug, info, trace};
use serde::{Deserialize, Serialize};

use super::common::{display_warnings, CalibratorArgs, InfoPrinter, ARG_FILE_HELP};
use crate::{
    calibrators::{CalibratorCatalogue, CalibratorFlux},
    unit_parsing::parse_freq_ghz,
    RadioAstronomyError,
};

#[derive(Parser, Debug, Clone, Default, Serialize, Deserialize)]
pub(super) struct CalibratorFluxArgs {
    #[clap(name = "ARGUMENTS_FILE", help = ARG_FILE_HELP.as_str(), parse(from_os_str))]
    pub(super) args_file: Option<PathBuf>,

    /// The calibrators to get flux densities for, e.g. Venus Jupiter 3C286.
    #[clap(short, long, multiple_values(true))]
    pub(super) sources: Option<Vec<String>>,

    /// The frequencies at which to evaluate flux densities. Units (e.g. MHz)
    /// or wavelengths (e.g. 3.6cm) may be given; plain numbers are GHz.
    #[clap(short, long, multiple_values(true))]
    pub(super) freqs: Option<Vec<String>>,

    /// Also write the flux densities to this file. Supported formats: json,
    /// yaml
    #[clap(short, long, help_heading = "OUTPUT FILES")]
    pub(super) output: Option<PathBuf>,

    #[clap(flatten)]
    #[serde(rename = "calibrators")]
    #[serde(default)]
    pub(super) cal_args: CalibratorArgs,
}

impl CalibratorFluxArgs {
    /// Consolidate the command-line and file arguments, preferring the
    /// command line.
    pub(super) fn merge(self) -> Result<CalibratorFluxArgs, RadioAstronomyError> {
        debug!("Merging command-line arguments with the argument file");

        let cli_args = self;

        if let Some(arg_file) = cli_args.args_file {
            let CalibratorFluxArgs {
                args_file: _,
                sources,
                freqs,
                output,
                cal_args,
            } = unpack_arg_file!(arg_file);

            Ok(CalibratorFluxArgs {
                args_file: None,
                sources: cli_args.sources.or(sources),
                freqs: cli_args.freqs.or(freqs),
                output: cli_args.output.or(output),
                cal_args: cli_args.cal_args.merge(cal_args),
            })
        } else {
            Ok(cli_args)
        }
    }

    pub(super) fn run(self, dry_run: bool) -> Result<(), RadioAstronomyError> {
        debug!("Converting arguments into parameters");
        trace!("{:#?}", self);

        let Self {
            args_file: _,
            sources,
            freqs,
            output,
            cal_args,
        } = self;

        let sources = match sources {
            Some(s) if !s.is_empty() => s,
            _ => return Err(CalibratorFluxArgsError::NoSources.into()),
        };
        let freqs_ghz = match freqs {
            Some(f) if !f.is_empty() => f
                .iter()
                .map(|f| parse_freq_ghz(f))
                .collect::<Result<Vec<_>, _>>()?,
            _ => return Err(CalibratorFluxArgsError::NoFrequencies.into()),
        };
        if let Some(output) = &output {
            OutputType::from_path(output)?;
        }
        let (catalogue, epoch) = cal_args.parse()?;

        let mut printer = InfoPrinter::new("Calibrator catalogues".into());
        printer.push_line(format!("Epoch: {epoch}").into());
        match &catalogue.vla {
            Some(vla) => printer.push_line(format!("VLA calibrators: {}", vla.len()).into()),
            None => printer.push_line("VLA calibrators: none".into()),
        }
        match &catalogue.michigan {
            Some(m) => printer.push_line(format!("Michigan tables: {}", m.len()).into()),
            None => printer.push_line("Michigan tables: none".into()),
        }
        printer.push_line(format!("Interpolation: {}", catalogue.interpolation).into());
        printer.display();

        if dry_run {
            display_warnings();
            info!("Dry run -- exiting now.");
            return Ok(());
        }

        let fluxes = lookup_all(&catalogue, &sources, &freqs_ghz, epoch)?;
        display_warnings();
        for (source, source_fluxes) in sources.iter().zip(fluxes.chunks(freqs_ghz.len())) {
            let title = match source_fluxes.first() {
                Some(f) => format!("{source} ({}, {})", f.name, f.origin),
                None => source.clone(),
            };
            let mut printer = InfoPrinter::new(title.into());
            for f in source_fluxes {
                printer.push_line(format!("{:>10.4} GHz: {:.4} Jy", f.freq_ghz, f.flux_jy).into());
            }
            printer.display();
        }

        if let Some(output) = output {
            write_fluxes(&output, &fluxes)?;
            info!("Wrote flux densities to {}", output.display());
        }

        Ok(())
    }
}

/// Every source at every frequency, source-major. Bodies that can't be
/// observed make the whole lookup fail; there's no sensible flux density to
/// report for them.
fn lookup_all(
    catalogue: &CalibratorCatalogue,
    sources: &[String],
    freqs_ghz: &[f64],
    epoch: hifitime::Epoch,
) -> Result<Vec<CalibratorFlux>, RadioAstronomyError> {
    let mut fluxes = Vec::with_capacity(sources.len() * freqs_ghz.len());
    for source in sources {
        for &freq_ghz in freqs_ghz {
            fluxes.push(catalogue.flux(source, freq_ghz, epoch)?);
        }
    }
    Ok(fluxes)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum OutputType {
    Json,
    Yaml,
}

impl OutputType {
    fn from_path(path: &Path) -> Result<OutputType, CalibratorFluxArgsError> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_lowercase());
        match ext.as_deref() {
            Some("json") => Ok(OutputType::Json),
            Some("yaml") | Some("yml") => Ok(OutputType::Yaml),
            _ => Err(CalibratorFluxArgsError::UnknownOutputType(
                path.display().to_string(),
            )),
        }
    }
}

fn write_fluxes(path: &Path, fluxes: &[CalibratorFlux]) -> Result<(), RadioAstronomyError> {
    let output_type = OutputType::from_path(path)?;
    let mut f = BufWriter::new(File::create(path)?);
    match output_type {
        OutputType::Json => serde_json::to_writer_pretty(&mut f, fluxes)?,
        OutputType::Yaml => serde_yaml::to_writer(&mut f, fluxes)?,
    }
    f.flush()?;
    Ok(())
}

#[derive(thiserror::Error, Debug)]
pub(super) enum CalibratorFluxArgsError {
    #[error("No calibrators were specified")]
    NoSources,

    #[error("No frequencies were specified")]
    NoFrequencies,

    #[error("Output file '{0}' must have a json, yaml or yml extension")]
    UnknownOutputType(String),
}
