// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The antenna temperature that a calibrator produces in a telescope.

use std::path::PathBuf;

use clap::Parser;
use log::{debug, info, trace};
use serde::{Deserialize, Serialize};

use super::common::{display_warnings, CalibratorArgs, InfoPrinter, Warn, ARG_FILE_HELP};
use crate::{
    formulas::{antenna_gain, antenna_gain_dbi, antenna_temperature, dish_area},
    unit_parsing::parse_freq_ghz,
    RadioAstronomyError,
};

#[derive(Parser, Debug, Clone, Default, Serialize, Deserialize)]
pub(super) struct AntennaTempArgs {
    #[clap(name = "ARGUMENTS_FILE", help = ARG_FILE_HELP.as_str(), parse(from_os_str))]
    pub(super) args_file: Option<PathBuf>,

    /// The calibrator to observe, e.g. Venus, "Virgo A", 3C286.
    #[clap(short, long)]
    pub(super) source: Option<String>,

    /// The observing frequency. A unit (e.g. MHz) or a wavelength (e.g. 3.6cm)
    /// may be given; plain numbers are GHz.
    #[clap(short, long)]
    pub(super) freq: Option<String>,

    /// The aperture efficiency of the telescope, between 0 and 1.
    #[clap(short, long, help_heading = "TELESCOPE")]
    pub(super) efficiency: Option<f64>,

    /// The diameter of the dish [metres].
    #[clap(short, long, help_heading = "TELESCOPE")]
    pub(super) diameter: Option<f64>,

    /// The geometric collecting area of the telescope [square metres]. Takes
    /// precedence over --diameter.
    #[clap(short, long, help_heading = "TELESCOPE")]
    pub(super) area: Option<f64>,

    #[clap(flatten)]
    #[serde(rename = "calibrators")]
    #[serde(default)]
    pub(super) cal_args: CalibratorArgs,
}

impl AntennaTempArgs {
    /// Both command-line and file arguments overlap in terms of what is
    /// available; this function consolidates everything that was specified into
    /// a single struct. Where applicable, it will prefer CLI parameters over
    /// those in the file.
    pub(super) fn merge(self) -> Result<AntennaTempArgs, RadioAstronomyError> {
        debug!("Merging command-line arguments with the argument file");

        let cli_args = self;

        if let Some(arg_file) = cli_args.args_file {
            // Ensure all of the file args are accounted for by pattern
            // matching.
            let AntennaTempArgs {
                args_file: _,
                source,
                freq,
                efficiency,
                diameter,
                area,
                cal_args,
            } = unpack_arg_file!(arg_file);

            Ok(AntennaTempArgs {
                args_file: None,
                source: cli_args.source.or(source),
                freq: cli_args.freq.or(freq),
                efficiency: cli_args.efficiency.or(efficiency),
                diameter: cli_args.diameter.or(diameter),
                area: cli_args.area.or(area),
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
            source,
            freq,
            efficiency,
            diameter,
            area,
            cal_args,
        } = self;

        let source = source.ok_or(AntennaTempArgsError::NoSource)?;
        let freq_ghz = parse_freq_ghz(&freq.ok_or(AntennaTempArgsError::NoFrequency)?)?;
        let efficiency = efficiency.ok_or(AntennaTempArgsError::NoEfficiency)?;
        let area_m2 = match (area, diameter) {
            (Some(a), Some(_)) => {
                "Both an area and a diameter were given; ignoring the diameter".warn();
                a
            }
            (Some(a), None) => a,
            (None, Some(d)) => dish_area(d)?,
            (None, None) => return Err(AntennaTempArgsError::NoArea.into()),
        };
        let (catalogue, epoch) = cal_args.parse()?;

        let gain = antenna_gain(efficiency, area_m2)?;
        let gain_dbi = antenna_gain_dbi(efficiency, area_m2, freq_ghz)?;

        let mut printer = InfoPrinter::new("Telescope".into());
        printer.push_line(format!("Aperture efficiency: {efficiency}").into());
        printer.push_line(format!("Collecting area:     {area_m2:.3} m²").into());
        printer.push_block(vec![
            format!("Gain:                {gain:.6} K/Jy").into(),
            format!("                     {gain_dbi:.3} dBi at {freq_ghz} GHz").into(),
        ]);
        display_warnings();
        printer.display();

        if dry_run {
            info!("Dry run -- exiting now.");
            return Ok(());
        }

        let flux = catalogue.flux(&source, freq_ghz, epoch)?;
        let t_a = antenna_temperature(gain, flux.flux_jy);

        let mut printer = InfoPrinter::new(format!("{} at {freq_ghz} GHz", flux.name).into());
        printer.push_line(format!("Epoch:               {epoch}").into());
        printer.push_line(format!("Flux density:        {:.4} Jy ({})", flux.flux_jy, flux.origin).into());
        printer.push_line(format!("Antenna temperature: {t_a:.4} K").into());
        printer.display();

        Ok(())
    }
}

#[derive(thiserror::Error, Debug)]
pub(super) enum AntennaTempArgsError {
    #[error("No calibrator was specified")]
    NoSource,

    #[error("No observing frequency was specified")]
    NoFrequency,

    #[error("No aperture efficiency was specified")]
    NoEfficiency,

    #[error("Neither a collecting area nor a dish diameter was specified")]
    NoArea,
}
